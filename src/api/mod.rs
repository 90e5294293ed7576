//! API Module
//!
//! Client for the remote peg-in transaction service.

mod service;

pub use service::*;
