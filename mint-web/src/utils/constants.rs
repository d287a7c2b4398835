//! Application constants

/// Devnet faucet endpoint
pub const FAUCET_URL: &str = "https://faucet.devnet.sui.io/gas";

// Sample NFT contract (framework package on devnet)
pub const NFT_PACKAGE_ID: &str = "0x0000000000000000000000000000000000000002";
pub const NFT_MODULE: &str = "devnet_nft";
pub const NFT_MINT_FUNCTION: &str = "mint";

// Fixed metadata for the sample NFT
pub const NFT_NAME: &str = "Onboarding Example NFT";
pub const NFT_DESCRIPTION: &str = "A sample NFT minted from the wallet onboarding demo.";
pub const NFT_IMAGE_URL: &str = "https://mint-demo.example.com/assets/images/sample-nft.png";

pub const MINT_GAS_BUDGET: u64 = 10_000;
