//! Program utilities: PDA derivation, fund movement and clock access

pub mod clock;
pub mod seeds;
pub mod transfers;

pub use clock::*;
pub use seeds::*;
pub use transfers::*;
