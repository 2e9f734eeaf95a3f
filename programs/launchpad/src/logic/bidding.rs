//! Bid ledger rules: submission and post-bidding withdrawal

use anchor_lang::prelude::*;

use crate::{
    error::LaunchpadError,
    state::{Bid, BidStatus, Escrow, Product},
};

/// Record a new pending bid and its collateral.
///
/// Slot capacity is not reserved here. Requested slots across pending bids
/// may exceed capacity; approval is where capacity is enforced.
#[allow(clippy::too_many_arguments)]
pub fn submit_bid(
    product: &mut Product,
    bid: &mut Bid,
    escrow: &mut Escrow,
    product_key: Pubkey,
    bidder: Pubkey,
    amount: u64,
    slots_requested: u32,
    bump: u8,
    now: i64,
) -> Result<()> {
    require!(!bid.is_initialized(), LaunchpadError::BidAlreadyExists);
    require!(
        product.phase.allows_bidding(),
        LaunchpadError::NotInBiddingPhase
    );
    require!(product.accepts_bids(now), LaunchpadError::BiddingClosed);
    require!(amount > 0, LaunchpadError::ZeroBidAmount);
    require!(slots_requested > 0, LaunchpadError::ZeroSlotsRequested);
    require!(
        slots_requested <= product.slot_capacity,
        LaunchpadError::SlotsExceedCapacity
    );

    let total_bids = product
        .total_bids
        .checked_add(1)
        .ok_or(LaunchpadError::ArithmeticOverflow)?;
    escrow.deposit_collateral(amount)?;

    product.total_bids = total_bids;

    bid.bidder = bidder;
    bid.product = product_key;
    bid.amount = amount;
    bid.slots_requested = slots_requested;
    bid.token_amount = 0;
    bid.status = BidStatus::Pending;
    bid.tokens_claimed = false;
    bid.funds_claimed = false;
    bid.created_at = now;
    bid.bump = bump;

    Ok(())
}

/// Return the collateral of a bid the maker never decided on.
///
/// Only legal once bidding is closed, so it never races a maker decision.
/// The bid ends Rejected with its funds marked as returned.
pub fn withdraw_pending_bid(
    product: &Product,
    bid: &mut Bid,
    escrow: &mut Escrow,
    product_key: Pubkey,
    bidder: Pubkey,
) -> Result<u64> {
    require_keys_eq!(bid.bidder, bidder, LaunchpadError::UnauthorizedAccess);
    require_keys_eq!(bid.product, product_key, LaunchpadError::InvalidProduct);
    require!(product.phase.is_closed(), LaunchpadError::BiddingStillOpen);
    require!(bid.status.is_pending(), LaunchpadError::BidAlreadyProcessed);

    escrow.refund_collateral(bid.amount)?;

    bid.status = BidStatus::Rejected;
    bid.funds_claimed = true;

    Ok(bid.amount)
}
