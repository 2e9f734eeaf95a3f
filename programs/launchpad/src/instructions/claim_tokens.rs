use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token::{Mint, Token, TokenAccount},
};

use crate::{
    constants::{POOL_AUTHORITY_SEED, PRODUCT_SEED},
    error::LaunchpadError,
    events::TokensClaimed,
    logic,
    state::{Bid, Product},
    utils::{current_timestamp, transfer_from_pool},
};

#[derive(Accounts)]
pub struct ClaimTokens<'info> {
    #[account(mut)]
    pub bidder: Signer<'info>,

    #[account(
        seeds = [PRODUCT_SEED, product.maker.as_ref()],
        bump = product.bump,
        has_one = token_mint @ LaunchpadError::InvalidTokenMint,
        has_one = token_pool @ LaunchpadError::InvalidTokenPool,
    )]
    pub product: Box<Account<'info, Product>>,

    #[account(mut)]
    pub bid: Box<Account<'info, Bid>>,

    pub token_mint: Box<Account<'info, Mint>>,

    #[account(mut)]
    pub token_pool: Box<Account<'info, TokenAccount>>,

    /// CHECK: PDA that owns the token pool and signs for it
    #[account(
        seeds = [POOL_AUTHORITY_SEED, product.key().as_ref()],
        bump = product.pool_authority_bump,
    )]
    pub pool_authority: UncheckedAccount<'info>,

    #[account(
        init_if_needed,
        payer = bidder,
        associated_token::mint = token_mint,
        associated_token::authority = bidder,
    )]
    pub bidder_token_account: Box<Account<'info, TokenAccount>>,

    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<ClaimTokens>) -> Result<()> {
    let now = current_timestamp()?;
    let product_key = ctx.accounts.product.key();
    let bidder_key = ctx.accounts.bidder.key();

    let token_amount = logic::claim_tokens(
        &ctx.accounts.product,
        &mut ctx.accounts.bid,
        product_key,
        bidder_key,
        now,
    )?;

    let bump = [ctx.accounts.product.pool_authority_bump];
    let pool_authority_seeds: &[&[u8]] = &[POOL_AUTHORITY_SEED, product_key.as_ref(), &bump];

    transfer_from_pool(
        &ctx.accounts.token_pool,
        &ctx.accounts.bidder_token_account,
        &ctx.accounts.pool_authority.to_account_info(),
        &ctx.accounts.token_program,
        &[pool_authority_seeds],
        token_amount,
    )?;

    msg!("Tokens claimed: {}", token_amount);

    emit!(TokensClaimed {
        product: product_key,
        bid: ctx.accounts.bid.key(),
        bidder: bidder_key,
        token_amount,
        timestamp: now,
    });

    Ok(())
}
