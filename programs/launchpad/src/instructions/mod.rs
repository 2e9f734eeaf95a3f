pub mod approve_bid;
pub mod claim_funds;
pub mod claim_tokens;
pub mod finalize_product;
pub mod init_protocol;
pub mod launch_product;
pub mod reject_bid;
pub mod submit_bid;
pub mod withdraw_pending_bid;

pub use approve_bid::*;
pub use claim_funds::*;
pub use claim_tokens::*;
pub use finalize_product::*;
pub use init_protocol::*;
pub use launch_product::*;
pub use reject_bid::*;
pub use submit_bid::*;
pub use withdraw_pending_bid::*;
