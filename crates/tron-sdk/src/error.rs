//! SDK error types

use thiserror::Error;
use tron_primitives::AddressError;

use crate::abi::AbiError;

/// SDK error type
#[derive(Debug, Error)]
pub enum SdkError {
    /// Address could not be decoded (bad Base58, checksum, hex, length or prefix)
    #[error("Invalid address: {0}")]
    Address(#[from] AddressError),

    /// Parameter encoding or result decoding error
    #[error("ABI error: {0}")]
    Abi(#[from] AbiError),

    /// Constant call returned no result slots
    #[error("Empty result from {0}")]
    EmptyResult(String),

    /// Node reported that the contract call failed
    #[error("Contract execution failed: {0}")]
    ContractExecution(String),

    /// Transport/network error, with the endpoint path it happened on
    #[error("Transport error on {path}: {message}")]
    Transport {
        /// Endpoint path, e.g. `wallet/getnowblock`
        path: String,
        /// Underlying error text
        message: String,
    },

    /// Node answered with an `Error` field
    #[error("Node error on {path}: {message}")]
    Node {
        /// Endpoint path
        path: String,
        /// Error text from the node
        message: String,
    },

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Missing required field
    #[error("Missing required field: {0}")]
    MissingField(String),

    /// Invalid client configuration
    #[error("Config error: {0}")]
    Config(String),

    /// Caller cancelled the operation before it completed
    #[error("Operation cancelled")]
    Cancelled,
}

impl SdkError {
    /// Build a transport error for `path`
    pub fn transport(path: &str, message: impl Into<String>) -> Self {
        SdkError::Transport {
            path: path.to_string(),
            message: message.into(),
        }
    }
}

impl From<hex::FromHexError> for SdkError {
    fn from(e: hex::FromHexError) -> Self {
        SdkError::Abi(AbiError::MalformedHex(e.to_string()))
    }
}

impl From<serde_json::Error> for SdkError {
    fn from(e: serde_json::Error) -> Self {
        SdkError::Serialization(e.to_string())
    }
}

impl From<toml::de::Error> for SdkError {
    fn from(e: toml::de::Error) -> Self {
        SdkError::Config(e.to_string())
    }
}
