//! On-chain records
//!
//! One singleton config, then per-launch product, escrow and bid records

pub mod bid;
pub mod escrow;
pub mod product;
pub mod protocol_config;

pub use bid::*;
pub use escrow::*;
pub use product::*;
pub use protocol_config::*;
