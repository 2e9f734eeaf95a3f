use anchor_lang::prelude::*;

use crate::{
    constants::{BID_SEED, ESCROW_SEED, PRODUCT_SEED},
    events::BidSubmitted,
    logic,
    state::{Bid, Escrow, Product},
    utils::{current_timestamp, transfer_native_to_escrow},
};

#[derive(Accounts)]
pub struct SubmitBid<'info> {
    #[account(mut)]
    pub bidder: Signer<'info>,

    #[account(
        mut,
        seeds = [PRODUCT_SEED, product.maker.as_ref()],
        bump = product.bump,
    )]
    pub product: Box<Account<'info, Product>>,

    #[account(
        init_if_needed,
        payer = bidder,
        space = Bid::LEN,
        seeds = [BID_SEED, product.key().as_ref(), bidder.key().as_ref()],
        bump,
    )]
    pub bid: Box<Account<'info, Bid>>,

    #[account(
        mut,
        seeds = [ESCROW_SEED, product.key().as_ref()],
        bump = escrow.bump,
    )]
    pub escrow: Box<Account<'info, Escrow>>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<SubmitBid>, amount: u64, slots_requested: u32) -> Result<()> {
    let now = current_timestamp()?;
    let product_key = ctx.accounts.product.key();
    let bidder_key = ctx.accounts.bidder.key();

    logic::submit_bid(
        &mut ctx.accounts.product,
        &mut ctx.accounts.bid,
        &mut ctx.accounts.escrow,
        product_key,
        bidder_key,
        amount,
        slots_requested,
        ctx.bumps.bid,
        now,
    )?;

    transfer_native_to_escrow(
        &ctx.accounts.bidder,
        &ctx.accounts.escrow.to_account_info(),
        &ctx.accounts.system_program,
        amount,
    )?;

    msg!(
        "Bid submitted: {} lamports for {} slots (bid #{})",
        amount,
        slots_requested,
        ctx.accounts.product.total_bids
    );

    emit!(BidSubmitted {
        product: product_key,
        bid: ctx.accounts.bid.key(),
        bidder: bidder_key,
        amount,
        slots_requested,
        timestamp: now,
    });

    Ok(())
}
