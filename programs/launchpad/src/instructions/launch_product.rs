//! Launch a product
//!
//! Creates the product and its escrow, seeds the escrow with the maker's
//! deposit, creates the token mint and pool, mints the whole supply into the
//! pool and then revokes the mint authority.

use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token::{Mint, Token, TokenAccount},
};

use crate::{
    constants::{ESCROW_SEED, POOL_AUTHORITY_SEED, PRODUCT_SEED, PROTOCOL_CONFIG_SEED, TOKEN_DECIMALS},
    events::ProductLaunched,
    logic::{self, LaunchBumps, LaunchKeys, LaunchProductArgs},
    state::{Escrow, Product, ProtocolConfig},
    utils::{current_timestamp, mint_supply_to_pool, revoke_mint_authority, transfer_native_to_escrow},
};

#[derive(Accounts)]
pub struct LaunchProduct<'info> {
    #[account(mut)]
    pub maker: Signer<'info>,

    #[account(
        seeds = [PROTOCOL_CONFIG_SEED],
        bump = protocol_config.bump,
    )]
    pub protocol_config: Box<Account<'info, ProtocolConfig>>,

    #[account(
        init_if_needed,
        payer = maker,
        space = Product::LEN,
        seeds = [PRODUCT_SEED, maker.key().as_ref()],
        bump,
    )]
    pub product: Box<Account<'info, Product>>,

    #[account(
        init_if_needed,
        payer = maker,
        space = Escrow::LEN,
        seeds = [ESCROW_SEED, product.key().as_ref()],
        bump,
    )]
    pub escrow: Box<Account<'info, Escrow>>,

    /// CHECK: PDA that owns the token pool and signs for it
    #[account(
        seeds = [POOL_AUTHORITY_SEED, product.key().as_ref()],
        bump,
    )]
    pub pool_authority: UncheckedAccount<'info>,

    #[account(
        init,
        payer = maker,
        mint::decimals = TOKEN_DECIMALS,
        mint::authority = pool_authority,
        mint::freeze_authority = pool_authority,
    )]
    pub token_mint: Box<Account<'info, Mint>>,

    #[account(
        init,
        payer = maker,
        associated_token::mint = token_mint,
        associated_token::authority = pool_authority,
    )]
    pub token_pool: Box<Account<'info, TokenAccount>>,

    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

pub fn handler(ctx: Context<LaunchProduct>, args: LaunchProductArgs) -> Result<()> {
    let now = current_timestamp()?;

    let product_key = ctx.accounts.product.key();
    let keys = LaunchKeys {
        maker: ctx.accounts.maker.key(),
        product: product_key,
        token_mint: ctx.accounts.token_mint.key(),
        token_pool: ctx.accounts.token_pool.key(),
    };
    let bumps = LaunchBumps {
        product: ctx.bumps.product,
        escrow: ctx.bumps.escrow,
        pool_authority: ctx.bumps.pool_authority,
    };
    let initial_deposit = args.initial_deposit;
    let token_supply = args.token_supply;
    let launch_date = args.launch_date;

    logic::launch_product(
        &mut ctx.accounts.product,
        &mut ctx.accounts.escrow,
        keys,
        args,
        bumps,
        now,
    )?;

    transfer_native_to_escrow(
        &ctx.accounts.maker,
        &ctx.accounts.escrow.to_account_info(),
        &ctx.accounts.system_program,
        initial_deposit,
    )?;

    let bump = [bumps.pool_authority];
    let pool_authority_seeds: &[&[u8]] = &[POOL_AUTHORITY_SEED, product_key.as_ref(), &bump];
    let pool_authority = ctx.accounts.pool_authority.to_account_info();

    mint_supply_to_pool(
        &ctx.accounts.token_mint,
        &ctx.accounts.token_pool,
        &pool_authority,
        &ctx.accounts.token_program,
        &[pool_authority_seeds],
        token_supply,
    )?;
    revoke_mint_authority(
        &ctx.accounts.token_mint,
        &pool_authority,
        &ctx.accounts.token_program,
        &[pool_authority_seeds],
    )?;

    msg!(
        "Product launched: {} slots, {} tokens, deposit {} lamports",
        ctx.accounts.product.slot_capacity,
        token_supply,
        initial_deposit
    );

    emit!(ProductLaunched {
        product: product_key,
        maker: keys.maker,
        token_mint: keys.token_mint,
        token_pool: keys.token_pool,
        initial_deposit,
        slot_capacity: ctx.accounts.product.slot_capacity,
        total_token_supply: token_supply,
        launch_date,
        timestamp: now,
    });

    Ok(())
}
