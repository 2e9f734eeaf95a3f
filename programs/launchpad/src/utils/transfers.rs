//! Fund movement helpers
//!
//! Native collateral moves into the escrow through the system program and
//! out of it by direct lamport adjustment, since the escrow is owned by this
//! program. Token movement uses the pool authority PDA as signer.

use anchor_lang::prelude::*;
use anchor_lang::system_program;
use anchor_spl::token::{self, spl_token::instruction::AuthorityType, Mint, MintTo, Token, TokenAccount, Transfer};

use crate::error::LaunchpadError;

/// Move native lamports from a signer into the product escrow
pub fn transfer_native_to_escrow<'info>(
    from: &Signer<'info>,
    escrow: &AccountInfo<'info>,
    system_program: &Program<'info, System>,
    amount: u64,
) -> Result<()> {
    let cpi_ctx = CpiContext::new(
        system_program.to_account_info(),
        system_program::Transfer {
            from: from.to_account_info(),
            to: escrow.clone(),
        },
    );
    system_program::transfer(cpi_ctx, amount)
}

/// Pay lamports out of the escrow without dipping into its rent reserve
pub fn release_native_from_escrow<'info>(
    escrow: &AccountInfo<'info>,
    recipient: &AccountInfo<'info>,
    amount: u64,
) -> Result<()> {
    if amount == 0 {
        return Ok(());
    }

    let rent_floor = Rent::get()?.minimum_balance(escrow.data_len());
    let available = escrow.lamports().saturating_sub(rent_floor);
    require!(
        available >= amount,
        LaunchpadError::InsufficientEscrowBalance
    );

    let escrow_lamports = escrow
        .lamports()
        .checked_sub(amount)
        .ok_or(LaunchpadError::InsufficientEscrowBalance)?;
    let recipient_lamports = recipient
        .lamports()
        .checked_add(amount)
        .ok_or(LaunchpadError::ArithmeticOverflow)?;

    **escrow.try_borrow_mut_lamports()? = escrow_lamports;
    **recipient.try_borrow_mut_lamports()? = recipient_lamports;
    Ok(())
}

/// Mint the full supply into the pool using the pool authority
pub fn mint_supply_to_pool<'info>(
    mint: &Account<'info, Mint>,
    pool: &Account<'info, TokenAccount>,
    pool_authority: &AccountInfo<'info>,
    token_program: &Program<'info, Token>,
    authority_seeds: &[&[&[u8]]],
    amount: u64,
) -> Result<()> {
    let cpi_accounts = MintTo {
        mint: mint.to_account_info(),
        to: pool.to_account_info(),
        authority: pool_authority.clone(),
    };
    let cpi_ctx = CpiContext::new_with_signer(
        token_program.to_account_info(),
        cpi_accounts,
        authority_seeds,
    );
    token::mint_to(cpi_ctx, amount)
}

/// Permanently disable minting so the supply stays fixed
pub fn revoke_mint_authority<'info>(
    mint: &Account<'info, Mint>,
    pool_authority: &AccountInfo<'info>,
    token_program: &Program<'info, Token>,
    authority_seeds: &[&[&[u8]]],
) -> Result<()> {
    token::set_authority(
        CpiContext::new_with_signer(
            token_program.to_account_info(),
            token::SetAuthority {
                current_authority: pool_authority.clone(),
                account_or_mint: mint.to_account_info(),
            },
            authority_seeds,
        ),
        AuthorityType::MintTokens,
        None,
    )
}

/// Transfer tokens from the pool to a bidder's token account
pub fn transfer_from_pool<'info>(
    pool: &Account<'info, TokenAccount>,
    recipient: &Account<'info, TokenAccount>,
    pool_authority: &AccountInfo<'info>,
    token_program: &Program<'info, Token>,
    authority_seeds: &[&[&[u8]]],
    amount: u64,
) -> Result<()> {
    let cpi_accounts = Transfer {
        from: pool.to_account_info(),
        to: recipient.to_account_info(),
        authority: pool_authority.clone(),
    };
    let cpi_ctx = CpiContext::new_with_signer(
        token_program.to_account_info(),
        cpi_accounts,
        authority_seeds,
    );
    token::transfer(cpi_ctx, amount)
}
