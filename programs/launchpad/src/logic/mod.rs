//! Allocation engine
//!
//! Pure state transitions over the launchpad records. Instruction handlers
//! load accounts and read the clock, then delegate here before moving any
//! funds. Every function validates fully before its first mutation, so an
//! error leaves the records untouched.

pub mod allocation;
pub mod bidding;
pub mod claims;
pub mod launch;
pub mod protocol;

pub use allocation::*;
pub use bidding::*;
pub use claims::*;
pub use launch::*;
pub use protocol::*;
