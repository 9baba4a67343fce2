//! # tron-sdk
//!
//! Rust client for the Tron HTTP wallet API.
//!
//! ## Features
//!
//! - **TronClient**: node queries, TRC20 constant calls and transfer endpoints
//! - **TransferBuilder**: request bodies for TRX, TRC10 and TRC20 transfers
//! - **ABI**: 32-byte slot encoding and constant-result decoding
//! - **ClientConfig**: base URL, timeout and headers, loadable from TOML
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use tron_sdk::{Address, AddressRepr, ClientConfig, TronClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = TronClient::connect(ClientConfig::default())?;
//!
//!     let usdt = Address::parse("TR7NHqjeKQxGTCi8q8ZY4pL8otSzgjLj6t", AddressRepr::Base58Check)?;
//!     let owner = Address::parse("41a614f803b6fd780986a42c78ec9c7f77e6ded13c", AddressRepr::Hex)?;
//!
//!     let symbol = client.get_trc20_token_symbol(&owner, &usdt).await?;
//!     let decimals = client.get_trc20_token_decimals(&owner, &usdt).await?;
//!     let balance = client.get_trc20_token_balance(&owner, &usdt).await?;
//!     println!("{} {} (decimals {})", balance, symbol, decimals);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Transfers and Cancellation
//!
//! ```rust,no_run
//! use tokio_util::sync::CancellationToken;
//! use tron_sdk::{
//!     with_cancellation, Address, ClientConfig, TransferBuilder, TronClient, SUN_PER_TRX,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = TronClient::connect(ClientConfig::default())?;
//!     let token = CancellationToken::new();
//!
//!     let from = Address::from_payload([0x11; 20]);
//!     let to = Address::from_payload([0x22; 20]);
//!     let contract = Address::from_payload([0x33; 20]);
//!
//!     // 5 whole tokens of a 6-decimal TRC20, fee limit 10 TRX
//!     let transfer = TransferBuilder::new(from, to)
//!         .amount(5u64)
//!         .fee_limit(10)
//!         .scale(SUN_PER_TRX);
//!     let call = client.transfer_trc20(&transfer, &contract);
//!     let unsigned = with_cancellation(&token, call).await?;
//!     println!("txID {}", unsigned.tx_id);
//!
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod abi;
mod client;
mod config;
mod error;
pub mod transfer;
pub mod transport;
pub mod types;

// Re-export main types
pub use client::{with_cancellation, TronClient};
pub use config::ClientConfig;
pub use error::SdkError;
pub use transfer::TransferBuilder;
pub use transport::{MockTransport, RequestLog};

/// Re-export Transport trait for custom implementations
pub use transport::Transport;

#[cfg(feature = "http")]
pub use transport::HttpTransport;

// Re-export primitives for convenience
pub use tron_primitives::{Address, AddressRepr, BlockHeight, Sun, SUN_PER_TRX, U256};
