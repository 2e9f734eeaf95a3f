//! Product registry state
//!
//! One product per maker. Holds launch configuration, the bidding phase,
//! slot capacity and the aggregate allocation counters.

use anchor_lang::prelude::*;

use crate::constants::{MAX_DESCRIPTION_LEN, MAX_NAME_LEN, MAX_SYMBOL_LEN, PRODUCT_SEED};

/// Product lifecycle phase
#[derive(Default, Clone, Copy, Debug, PartialEq, Eq, AnchorSerialize, AnchorDeserialize)]
pub enum ProductPhase {
    /// Accepting bids, approvals and rejections
    #[default]
    Bidding,

    /// Bidding closed, only claims and pending withdrawals remain
    Finalized,
}

impl ProductPhase {
    /// Check if phase allows new bids and maker decisions on them
    pub fn allows_bidding(&self) -> bool {
        match self {
            ProductPhase::Bidding => true,
            ProductPhase::Finalized => false,
        }
    }

    /// Check if a pending bid can no longer be decided by the maker
    pub fn is_closed(&self) -> bool {
        match self {
            ProductPhase::Bidding => false,
            ProductPhase::Finalized => true,
        }
    }
}

#[account]
#[derive(Default, Debug)]
pub struct Product {
    /// Maker who launched the product and owns its decisions
    pub maker: Pubkey,

    pub name: String,
    pub description: String,
    pub token_symbol: String,

    /// Mint created for this launch
    pub token_mint: Pubkey,

    /// Pool token account holding unallocated supply
    pub token_pool: Pubkey,

    /// Native deposit the maker bootstrapped the escrow with
    pub initial_deposit: u64,

    pub slot_capacity: u32,
    pub slots_remaining: u32,
    pub approved_bids: u32,
    pub total_bids: u32,

    pub total_token_supply: u64,

    /// Sum of entitlements granted to approved bids
    pub allocated_tokens: u64,

    /// Claims are permitted once the clock reaches this timestamp
    pub launch_date: i64,
    pub created_at: i64,

    pub phase: ProductPhase,
    pub funds_claimed: bool,

    pub bump: u8,
    pub pool_authority_bump: u8,
}

impl Product {
    pub const LEN: usize = 8 + // discriminator
        32 + // maker
        4 + MAX_NAME_LEN + // name
        4 + MAX_DESCRIPTION_LEN + // description
        4 + MAX_SYMBOL_LEN + // token_symbol
        32 + // token_mint
        32 + // token_pool
        8 +  // initial_deposit
        4 +  // slot_capacity
        4 +  // slots_remaining
        4 +  // approved_bids
        4 +  // total_bids
        8 +  // total_token_supply
        8 +  // allocated_tokens
        8 +  // launch_date
        8 +  // created_at
        1 +  // phase
        1 +  // funds_claimed
        1 +  // bump
        1; // pool_authority_bump

    pub const SEED: &'static [u8] = PRODUCT_SEED;

    /// A freshly allocated record has no maker yet
    pub fn is_initialized(&self) -> bool {
        self.maker != Pubkey::default()
    }

    pub fn is_launched(&self, now: i64) -> bool {
        now >= self.launch_date
    }

    /// Bids are accepted while bidding and strictly before the launch date
    pub fn accepts_bids(&self, now: i64) -> bool {
        self.phase.allows_bidding() && now < self.launch_date
    }

    /// Slots already committed to approved bids
    pub fn slots_allocated(&self) -> u32 {
        self.slot_capacity.saturating_sub(self.slots_remaining)
    }

    /// Tokens that stay in the pool after every entitlement is claimed
    pub fn unallocated_tokens(&self) -> u64 {
        self.total_token_supply.saturating_sub(self.allocated_tokens)
    }
}
