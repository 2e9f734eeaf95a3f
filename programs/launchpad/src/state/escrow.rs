//! Escrow state
//!
//! Program-owned record holding the native collateral of one product.
//! Lamports above the rent-exempt minimum are fully described by the
//! bookkeeping fields below.

use anchor_lang::prelude::*;

use crate::{constants::ESCROW_SEED, error::LaunchpadError};

#[account]
#[derive(Default, Debug)]
pub struct Escrow {
    /// Product this escrow belongs to
    pub product: Pubkey,

    /// Maker receiving proceeds
    pub maker: Pubkey,

    /// Unswept bootstrap deposit from the maker
    pub maker_deposit: u64,

    /// Collateral of bids still waiting on a decision
    pub pending_collateral: u64,

    /// Unswept collateral of approved bids
    pub approved_collateral: u64,

    /// Collateral returned to bidders
    pub refunded_collateral: u64,

    /// Total paid out to the maker by the funds claim
    pub swept_amount: u64,

    pub bump: u8,
}

impl Escrow {
    pub const LEN: usize = 8 + // discriminator
        32 + // product
        32 + // maker
        8 +  // maker_deposit
        8 +  // pending_collateral
        8 +  // approved_collateral
        8 +  // refunded_collateral
        8 +  // swept_amount
        1; // bump

    pub const SEED: &'static [u8] = ESCROW_SEED;

    pub fn is_initialized(&self) -> bool {
        self.product != Pubkey::default()
    }

    /// Lamports the escrow must hold on top of its rent-exempt minimum
    pub fn tracked_balance(&self) -> Result<u64> {
        self.maker_deposit
            .checked_add(self.pending_collateral)
            .and_then(|v| v.checked_add(self.approved_collateral))
            .ok_or_else(|| LaunchpadError::ArithmeticOverflow.into())
    }

    /// Record collateral arriving from a new bid
    pub fn deposit_collateral(&mut self, amount: u64) -> Result<()> {
        self.pending_collateral = self
            .pending_collateral
            .checked_add(amount)
            .ok_or(LaunchpadError::ArithmeticOverflow)?;
        Ok(())
    }

    /// Move a bid's collateral from pending to approved
    pub fn commit_collateral(&mut self, amount: u64) -> Result<()> {
        let pending = self
            .pending_collateral
            .checked_sub(amount)
            .ok_or(LaunchpadError::InsufficientEscrowBalance)?;
        let approved = self
            .approved_collateral
            .checked_add(amount)
            .ok_or(LaunchpadError::ArithmeticOverflow)?;
        self.pending_collateral = pending;
        self.approved_collateral = approved;
        Ok(())
    }

    /// Release a pending bid's collateral back to its bidder
    pub fn refund_collateral(&mut self, amount: u64) -> Result<()> {
        let pending = self
            .pending_collateral
            .checked_sub(amount)
            .ok_or(LaunchpadError::InsufficientEscrowBalance)?;
        let refunded = self
            .refunded_collateral
            .checked_add(amount)
            .ok_or(LaunchpadError::ArithmeticOverflow)?;
        self.pending_collateral = pending;
        self.refunded_collateral = refunded;
        Ok(())
    }

    /// Zero the maker-owned balances and return the amount to pay out
    pub fn sweep(&mut self) -> Result<u64> {
        let total = self
            .maker_deposit
            .checked_add(self.approved_collateral)
            .ok_or(LaunchpadError::ArithmeticOverflow)?;
        let swept = self
            .swept_amount
            .checked_add(total)
            .ok_or(LaunchpadError::ArithmeticOverflow)?;
        self.maker_deposit = 0;
        self.approved_collateral = 0;
        self.swept_amount = swept;
        Ok(total)
    }
}
