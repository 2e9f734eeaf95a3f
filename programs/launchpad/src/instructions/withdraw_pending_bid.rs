use anchor_lang::prelude::*;

use crate::{
    constants::{BID_SEED, ESCROW_SEED, PRODUCT_SEED},
    events::PendingBidWithdrawn,
    logic,
    state::{Bid, Escrow, Product},
    utils::{current_timestamp, release_native_from_escrow},
};

#[derive(Accounts)]
pub struct WithdrawPendingBid<'info> {
    #[account(mut)]
    pub bidder: Signer<'info>,

    #[account(
        seeds = [PRODUCT_SEED, product.maker.as_ref()],
        bump = product.bump,
    )]
    pub product: Box<Account<'info, Product>>,

    #[account(
        mut,
        seeds = [BID_SEED, product.key().as_ref(), bidder.key().as_ref()],
        bump = bid.bump,
        close = bidder,
    )]
    pub bid: Box<Account<'info, Bid>>,

    #[account(
        mut,
        seeds = [ESCROW_SEED, product.key().as_ref()],
        bump = escrow.bump,
    )]
    pub escrow: Box<Account<'info, Escrow>>,
}

pub fn handler(ctx: Context<WithdrawPendingBid>) -> Result<()> {
    let now = current_timestamp()?;
    let product_key = ctx.accounts.product.key();
    let bidder_key = ctx.accounts.bidder.key();

    let refunded = logic::withdraw_pending_bid(
        &ctx.accounts.product,
        &mut ctx.accounts.bid,
        &mut ctx.accounts.escrow,
        product_key,
        bidder_key,
    )?;

    release_native_from_escrow(
        &ctx.accounts.escrow.to_account_info(),
        &ctx.accounts.bidder.to_account_info(),
        refunded,
    )?;

    msg!("Pending bid withdrawn: refunded {} lamports", refunded);

    emit!(PendingBidWithdrawn {
        product: product_key,
        bid: ctx.accounts.bid.key(),
        bidder: bidder_key,
        refunded,
        timestamp: now,
    });

    Ok(())
}
