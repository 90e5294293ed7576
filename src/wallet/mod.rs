//! Wallet Module
//!
//! Address classification and validation for the connected wallet.

mod address;

pub use address::*;
