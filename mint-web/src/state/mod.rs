//! UI state: wallet context and funding status

pub mod funding;
pub mod wallet;
