use anchor_lang::prelude::*;

use crate::{
    constants::{ESCROW_SEED, PRODUCT_SEED},
    error::LaunchpadError,
    events::BidApproved,
    logic,
    state::{Bid, Escrow, Product},
    utils::current_timestamp,
};

#[derive(Accounts)]
pub struct ApproveBid<'info> {
    pub maker: Signer<'info>,

    #[account(
        mut,
        seeds = [PRODUCT_SEED, product.maker.as_ref()],
        bump = product.bump,
        has_one = maker @ LaunchpadError::UnauthorizedAccess,
    )]
    pub product: Box<Account<'info, Product>>,

    #[account(mut)]
    pub bid: Box<Account<'info, Bid>>,

    #[account(
        mut,
        seeds = [ESCROW_SEED, product.key().as_ref()],
        bump = escrow.bump,
    )]
    pub escrow: Box<Account<'info, Escrow>>,
}

pub fn handler(ctx: Context<ApproveBid>) -> Result<()> {
    let now = current_timestamp()?;
    let product_key = ctx.accounts.product.key();

    let entitlement = logic::approve_bid(
        &mut ctx.accounts.product,
        &mut ctx.accounts.bid,
        &mut ctx.accounts.escrow,
        product_key,
        ctx.accounts.maker.key(),
    )?;

    let product = &ctx.accounts.product;
    let bid = &ctx.accounts.bid;

    msg!(
        "Bid approved: {} slots, {} tokens, {}/{} slots allocated",
        bid.slots_requested,
        entitlement,
        product.slots_allocated(),
        product.slot_capacity
    );

    emit!(BidApproved {
        product: product_key,
        bid: bid.key(),
        bidder: bid.bidder,
        slots_requested: bid.slots_requested,
        token_amount: entitlement,
        slots_remaining: product.slots_remaining,
        approved_bids: product.approved_bids,
        timestamp: now,
    });

    Ok(())
}
