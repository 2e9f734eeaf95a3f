//! Event definitions

use anchor_lang::prelude::*;

#[event]
pub struct ProtocolInitialized {
    pub admin: Pubkey,
    pub timestamp: i64,
}

/// Event emitted when a maker launches a product and its supply is minted
#[event]
pub struct ProductLaunched {
    pub product: Pubkey,
    pub maker: Pubkey,
    pub token_mint: Pubkey,
    pub token_pool: Pubkey,
    pub initial_deposit: u64,
    pub slot_capacity: u32,
    pub total_token_supply: u64,
    pub launch_date: i64,
    pub timestamp: i64,
}

#[event]
pub struct BidSubmitted {
    pub product: Pubkey,
    pub bid: Pubkey,
    pub bidder: Pubkey,
    pub amount: u64,
    pub slots_requested: u32,
    pub timestamp: i64,
}

/// Event emitted when a bid is approved and its entitlement fixed
#[event]
pub struct BidApproved {
    pub product: Pubkey,
    pub bid: Pubkey,
    pub bidder: Pubkey,
    pub slots_requested: u32,
    pub token_amount: u64,
    pub slots_remaining: u32,
    pub approved_bids: u32,
    pub timestamp: i64,
}

#[event]
pub struct BidRejected {
    pub product: Pubkey,
    pub bid: Pubkey,
    pub bidder: Pubkey,
    pub refunded: u64,
    pub timestamp: i64,
}

#[event]
pub struct PendingBidWithdrawn {
    pub product: Pubkey,
    pub bid: Pubkey,
    pub bidder: Pubkey,
    pub refunded: u64,
    pub timestamp: i64,
}

#[event]
pub struct TokensClaimed {
    pub product: Pubkey,
    pub bid: Pubkey,
    pub bidder: Pubkey,
    pub token_amount: u64,
    pub timestamp: i64,
}

/// Event emitted when the maker sweeps escrow proceeds
#[event]
pub struct FundsClaimed {
    pub product: Pubkey,
    pub maker: Pubkey,
    pub maker_deposit: u64,
    pub approved_collateral: u64,
    pub total_swept: u64,
    pub timestamp: i64,
}

#[event]
pub struct ProductFinalized {
    pub product: Pubkey,
    pub maker: Pubkey,
    pub approved_bids: u32,
    pub slots_remaining: u32,
    pub timestamp: i64,
}
