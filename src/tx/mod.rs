//! Transaction Module
//!
//! Builds device signing requests from normalized peg-in transactions and
//! hands them to the signer.

pub mod types;
pub mod builder;
pub mod trezor;
pub mod signer;


pub use types::*;
pub use builder::*;
pub use trezor::*;
pub use signer::*;
