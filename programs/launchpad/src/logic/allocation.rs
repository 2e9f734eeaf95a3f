//! Approval and rejection of bids
//!
//! Entitlement is the bid's share of the total supply by slots:
//! `total_token_supply * slots_requested / slot_capacity`, truncated.
//! Since approved slots never exceed capacity, the sum of truncated
//! entitlements never exceeds the supply. The truncation remainder stays in
//! the pool as dust.

use anchor_lang::prelude::*;

use crate::{
    error::LaunchpadError,
    state::{Bid, BidStatus, Escrow, Product},
};

pub fn compute_entitlement(
    total_token_supply: u64,
    slots_requested: u32,
    slot_capacity: u32,
) -> Result<u64> {
    require!(slot_capacity > 0, LaunchpadError::ZeroSlotCapacity);
    let entitlement =
        (total_token_supply as u128) * (slots_requested as u128) / (slot_capacity as u128);
    u64::try_from(entitlement).map_err(|_| LaunchpadError::ArithmeticOverflow.into())
}

/// Checks shared by approval and rejection
fn ensure_decidable(product: &Product, bid: &Bid, product_key: Pubkey, maker: Pubkey) -> Result<()> {
    require_keys_eq!(maker, product.maker, LaunchpadError::UnauthorizedAccess);
    require_keys_eq!(bid.product, product_key, LaunchpadError::InvalidProduct);
    require!(
        product.phase.allows_bidding(),
        LaunchpadError::NotInBiddingPhase
    );
    match bid.status {
        BidStatus::Pending => Ok(()),
        BidStatus::Approved | BidStatus::Rejected => err!(LaunchpadError::BidAlreadyProcessed),
    }
}

/// Approve a pending bid, consuming its slots and fixing its entitlement.
/// Returns the entitlement.
pub fn approve_bid(
    product: &mut Product,
    bid: &mut Bid,
    escrow: &mut Escrow,
    product_key: Pubkey,
    maker: Pubkey,
) -> Result<u64> {
    ensure_decidable(product, bid, product_key, maker)?;
    require!(
        bid.slots_requested <= product.slots_remaining,
        LaunchpadError::InsufficientSlotCapacity
    );

    let entitlement = compute_entitlement(
        product.total_token_supply,
        bid.slots_requested,
        product.slot_capacity,
    )?;
    let allocated_tokens = product
        .allocated_tokens
        .checked_add(entitlement)
        .filter(|total| *total <= product.total_token_supply)
        .ok_or(LaunchpadError::ArithmeticOverflow)?;
    let approved_bids = product
        .approved_bids
        .checked_add(1)
        .ok_or(LaunchpadError::ArithmeticOverflow)?;
    escrow.commit_collateral(bid.amount)?;

    bid.token_amount = entitlement;
    bid.status = BidStatus::Approved;
    product.slots_remaining -= bid.slots_requested;
    product.approved_bids = approved_bids;
    product.allocated_tokens = allocated_tokens;

    Ok(entitlement)
}

/// Reject a pending bid. Its full collateral is released for refund and no
/// slot capacity is touched. Returns the refund amount.
pub fn reject_bid(
    product: &Product,
    bid: &mut Bid,
    escrow: &mut Escrow,
    product_key: Pubkey,
    maker: Pubkey,
) -> Result<u64> {
    ensure_decidable(product, bid, product_key, maker)?;

    escrow.refund_collateral(bid.amount)?;

    bid.status = BidStatus::Rejected;
    bid.funds_claimed = true;

    Ok(bid.amount)
}
