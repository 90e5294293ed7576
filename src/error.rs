//! Unified error types for the peg-in middleware
//!
//! All errors flow through this module for consistent handling
//! and JSON-safe reporting to the embedding front-end.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Main error type for all peg-in operations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PeginError {
    pub code: ErrorCode,
    pub message: String,
    pub details: Option<String>,
}

impl PeginError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    // Convenience constructors
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, msg)
    }

    pub fn invalid_address(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidAddress, msg)
    }

    pub fn unknown_address(address: &str) -> Self {
        Self::new(
            ErrorCode::UnknownAddress,
            format!("Input address {} is not part of this wallet", address),
        )
    }

    pub fn remote_service(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::RemoteService, msg)
    }

    pub fn signer(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::SignerError, msg)
    }

    pub fn build_required(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::BuildRequired, msg)
    }

    pub fn network(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::NetworkError, msg)
    }

    pub fn parse_error(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::ParseError, msg)
    }

    pub fn not_implemented(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::NotImplemented, msg)
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::Internal, msg)
    }
}

impl fmt::Display for PeginError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)?;
        if let Some(ref details) = self.details {
            write!(f, " ({})", details)?;
        }
        Ok(())
    }
}

impl std::error::Error for PeginError {}

/// Error codes for categorization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    // Input errors
    InvalidInput,
    InvalidAddress,
    /// Input address has no derivation path in the wallet registry
    UnknownAddress,

    // Network errors
    NetworkError,
    Timeout,
    /// The peg-in transaction service rejected or failed the request
    RemoteService,

    // Device errors
    SignerError,
    DeviceDisconnected,

    // State errors
    /// sign() was called before a successful build_tx()
    BuildRequired,

    // Parse errors
    ParseError,
    JsonError,
    HexError,

    // Internal
    NotImplemented,
    Internal,
}

/// Result type alias for peg-in operations
pub type PeginResult<T> = Result<T, PeginError>;

// Conversions from common error types

impl From<serde_json::Error> for PeginError {
    fn from(e: serde_json::Error) -> Self {
        PeginError::new(ErrorCode::JsonError, e.to_string())
    }
}

impl From<hex::FromHexError> for PeginError {
    fn from(e: hex::FromHexError) -> Self {
        PeginError::new(ErrorCode::HexError, e.to_string())
    }
}

impl From<reqwest::Error> for PeginError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            PeginError::new(ErrorCode::Timeout, "Request timed out")
        } else if e.is_connect() {
            PeginError::new(ErrorCode::NetworkError, "Connection failed")
        } else {
            PeginError::new(ErrorCode::RemoteService, e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let err = PeginError::unknown_address("mzMCEHDUAZaKL9BXt9SzasFPUUqM77TqP1")
            .with_details("registry holds 20 addresses");

        let json = serde_json::to_string(&err).unwrap();
        assert!(json.contains("unknown_address"));
        assert!(json.contains("mzMCEHDUAZaKL9BXt9SzasFPUUqM77TqP1"));
    }

    #[test]
    fn test_display_includes_details() {
        let err = PeginError::build_required("no transaction built yet")
            .with_details("call build_tx first");
        let rendered = err.to_string();
        assert!(rendered.contains("BuildRequired"));
        assert!(rendered.contains("call build_tx first"));
    }
}
