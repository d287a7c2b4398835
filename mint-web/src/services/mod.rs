//! External service clients: wallet connector interop and the devnet faucet

pub mod faucet;
pub mod wallet;
