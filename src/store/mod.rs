//! Wallet store vocabulary and session state
//!
//! The front-end store used to address state transitions through a flat
//! table of string constants. Here the identifiers are closed tag sets
//! with compile-time exhaustiveness, and the state they point at is an
//! explicit value handed to whoever needs it.

pub mod ident;
pub mod state;

pub use ident::{Action, Getter, Mutation};
pub use state::{AddressRegistry, PeginSessionState};
