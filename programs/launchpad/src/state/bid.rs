//! Bid ledger state

use anchor_lang::prelude::*;

use crate::constants::BID_SEED;

/// Bid lifecycle status. Pending leaves exactly once.
#[derive(Default, Clone, Copy, Debug, PartialEq, Eq, AnchorSerialize, AnchorDeserialize)]
pub enum BidStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl BidStatus {
    pub fn is_pending(&self) -> bool {
        matches!(self, BidStatus::Pending)
    }
}

#[account]
#[derive(Default, Debug)]
pub struct Bid {
    pub bidder: Pubkey,
    pub product: Pubkey,

    /// Native collateral locked in escrow
    pub amount: u64,

    pub slots_requested: u32,

    /// Token entitlement, fixed on approval
    pub token_amount: u64,

    pub status: BidStatus,
    pub tokens_claimed: bool,

    /// Collateral has been returned to the bidder
    pub funds_claimed: bool,

    pub created_at: i64,
    pub bump: u8,
}

impl Bid {
    pub const LEN: usize = 8 + // discriminator
        32 + // bidder
        32 + // product
        8 +  // amount
        4 +  // slots_requested
        8 +  // token_amount
        1 +  // status
        1 +  // tokens_claimed
        1 +  // funds_claimed
        8 +  // created_at
        1; // bump

    pub const SEED: &'static [u8] = BID_SEED;

    pub fn is_initialized(&self) -> bool {
        self.bidder != Pubkey::default()
    }
}
