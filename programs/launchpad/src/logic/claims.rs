//! Time-gated claims
//!
//! Both claims depend only on the launch date, never on the phase. The
//! claimed flags flip here, before any transfer is attempted.

use anchor_lang::prelude::*;

use crate::{
    error::LaunchpadError,
    state::{Bid, BidStatus, Escrow, Product, ProductPhase},
};

/// Mark an approved bid's entitlement as claimed and return it
pub fn claim_tokens(
    product: &Product,
    bid: &mut Bid,
    product_key: Pubkey,
    bidder: Pubkey,
    now: i64,
) -> Result<u64> {
    require_keys_eq!(bid.bidder, bidder, LaunchpadError::UnauthorizedAccess);
    require_keys_eq!(bid.product, product_key, LaunchpadError::InvalidProduct);
    require!(
        bid.status == BidStatus::Approved,
        LaunchpadError::BidNotApproved
    );
    require!(!bid.tokens_claimed, LaunchpadError::AlreadyClaimed);
    require!(
        product.is_launched(now),
        LaunchpadError::LaunchDateNotReached
    );

    bid.tokens_claimed = true;

    Ok(bid.token_amount)
}

/// Sweep the maker's deposit and approved collateral. Single terminal claim;
/// it also closes bidding for good.
pub fn claim_funds(
    product: &mut Product,
    escrow: &mut Escrow,
    maker: Pubkey,
    now: i64,
) -> Result<u64> {
    require_keys_eq!(maker, product.maker, LaunchpadError::UnauthorizedAccess);
    require!(
        product.is_launched(now),
        LaunchpadError::LaunchDateNotReached
    );
    require!(!product.funds_claimed, LaunchpadError::FundsAlreadyClaimed);

    let swept = escrow.sweep()?;

    product.funds_claimed = true;
    product.phase = ProductPhase::Finalized;

    Ok(swept)
}
