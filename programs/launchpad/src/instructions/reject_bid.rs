use anchor_lang::prelude::*;

use crate::{
    constants::{ESCROW_SEED, PRODUCT_SEED},
    error::LaunchpadError,
    events::BidRejected,
    logic,
    state::{Bid, Escrow, Product},
    utils::{current_timestamp, release_native_from_escrow},
};

#[derive(Accounts)]
pub struct RejectBid<'info> {
    pub maker: Signer<'info>,

    #[account(
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

    /// Refund target
    #[account(
        mut,
        address = bid.bidder @ LaunchpadError::UnauthorizedAccess,
    )]
    pub bidder: SystemAccount<'info>,
}

pub fn handler(ctx: Context<RejectBid>) -> Result<()> {
    let now = current_timestamp()?;
    let product_key = ctx.accounts.product.key();

    let refunded = logic::reject_bid(
        &ctx.accounts.product,
        &mut ctx.accounts.bid,
        &mut ctx.accounts.escrow,
        product_key,
        ctx.accounts.maker.key(),
    )?;

    release_native_from_escrow(
        &ctx.accounts.escrow.to_account_info(),
        &ctx.accounts.bidder.to_account_info(),
        refunded,
    )?;

    msg!("Bid rejected: refunded {} lamports", refunded);

    emit!(BidRejected {
        product: product_key,
        bid: ctx.accounts.bid.key(),
        bidder: ctx.accounts.bidder.key(),
        refunded,
        timestamp: now,
    });

    Ok(())
}
