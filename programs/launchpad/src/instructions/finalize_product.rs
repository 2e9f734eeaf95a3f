use anchor_lang::prelude::*;

use crate::{
    constants::PRODUCT_SEED, error::LaunchpadError, events::ProductFinalized, logic,
    state::Product, utils::current_timestamp,
};

#[derive(Accounts)]
pub struct FinalizeProduct<'info> {
    pub maker: Signer<'info>,

    #[account(
        mut,
        seeds = [PRODUCT_SEED, product.maker.as_ref()],
        bump = product.bump,
        has_one = maker @ LaunchpadError::UnauthorizedAccess,
    )]
    pub product: Box<Account<'info, Product>>,
}

pub fn handler(ctx: Context<FinalizeProduct>) -> Result<()> {
    let now = current_timestamp()?;

    logic::finalize_product(&mut ctx.accounts.product, ctx.accounts.maker.key())?;

    let product = &ctx.accounts.product;
    msg!(
        "Bidding closed: {} approved bids, {} slots unfilled, {} tokens unallocated",
        product.approved_bids,
        product.slots_remaining,
        product.unallocated_tokens()
    );

    emit!(ProductFinalized {
        product: product.key(),
        maker: product.maker,
        approved_bids: product.approved_bids,
        slots_remaining: product.slots_remaining,
        timestamp: now,
    });

    Ok(())
}
