use anchor_lang::prelude::*;

use crate::{
    constants::{ESCROW_SEED, PRODUCT_SEED},
    error::LaunchpadError,
    events::FundsClaimed,
    logic,
    state::{Escrow, Product},
    utils::{current_timestamp, release_native_from_escrow},
};

#[derive(Accounts)]
pub struct ClaimFunds<'info> {
    #[account(mut)]
    pub maker: Signer<'info>,

    #[account(
        mut,
        seeds = [PRODUCT_SEED, product.maker.as_ref()],
        bump = product.bump,
        has_one = maker @ LaunchpadError::UnauthorizedAccess,
    )]
    pub product: Box<Account<'info, Product>>,

    #[account(
        mut,
        seeds = [ESCROW_SEED, product.key().as_ref()],
        bump = escrow.bump,
    )]
    pub escrow: Box<Account<'info, Escrow>>,
}

pub fn handler(ctx: Context<ClaimFunds>) -> Result<()> {
    let now = current_timestamp()?;
    let maker_deposit = ctx.accounts.escrow.maker_deposit;
    let approved_collateral = ctx.accounts.escrow.approved_collateral;

    let swept = logic::claim_funds(
        &mut ctx.accounts.product,
        &mut ctx.accounts.escrow,
        ctx.accounts.maker.key(),
        now,
    )?;

    release_native_from_escrow(
        &ctx.accounts.escrow.to_account_info(),
        &ctx.accounts.maker.to_account_info(),
        swept,
    )?;

    msg!(
        "Funds claimed: {} lamports ({} deposit, {} collateral)",
        swept,
        maker_deposit,
        approved_collateral
    );

    emit!(FundsClaimed {
        product: ctx.accounts.product.key(),
        maker: ctx.accounts.maker.key(),
        maker_deposit,
        approved_collateral,
        total_swept: swept,
        timestamp: now,
    });

    Ok(())
}
