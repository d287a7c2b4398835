//! UI Components

pub mod banner;

pub use banner::Banner;
