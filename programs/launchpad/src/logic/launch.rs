//! Product registry rules: launch validation, initialization and finalization

use anchor_lang::prelude::*;

use crate::{
    constants::{MAX_DESCRIPTION_LEN, MAX_NAME_LEN, MAX_SYMBOL_LEN, MIN_LAUNCH_DEPOSIT},
    error::LaunchpadError,
    state::{Escrow, Product, ProductPhase},
};

/// Parameters for launching a product
#[derive(Clone, Debug, AnchorSerialize, AnchorDeserialize)]
pub struct LaunchProductArgs {
    pub name: String,
    pub description: String,
    pub token_symbol: String,
    /// Native deposit seeding the escrow
    pub initial_deposit: u64,
    pub slot_capacity: u32,
    /// Token units minted into the pool
    pub token_supply: u64,
    pub launch_date: i64,
}

/// Addresses fixed at launch time
#[derive(Clone, Copy, Debug)]
pub struct LaunchKeys {
    pub maker: Pubkey,
    pub product: Pubkey,
    pub token_mint: Pubkey,
    pub token_pool: Pubkey,
}

/// Canonical bumps of the records created at launch
#[derive(Clone, Copy, Debug, Default)]
pub struct LaunchBumps {
    pub product: u8,
    pub escrow: u8,
    pub pool_authority: u8,
}

pub fn check_valid_symbol(symbol: &str) -> bool {
    if symbol.is_empty() || symbol.len() > MAX_SYMBOL_LEN {
        return false;
    }
    symbol
        .chars()
        .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
}

pub fn validate_launch_args(args: &LaunchProductArgs, now: i64) -> Result<()> {
    require!(args.slot_capacity > 0, LaunchpadError::ZeroSlotCapacity);
    require!(args.token_supply > 0, LaunchpadError::ZeroTokenSupply);
    require!(args.launch_date > now, LaunchpadError::InvalidLaunchDate);
    require!(
        args.initial_deposit >= MIN_LAUNCH_DEPOSIT,
        LaunchpadError::InsufficientDeposit
    );
    require!(args.name.len() <= MAX_NAME_LEN, LaunchpadError::NameTooLong);
    require!(
        args.description.len() <= MAX_DESCRIPTION_LEN,
        LaunchpadError::DescriptionTooLong
    );
    require!(
        check_valid_symbol(&args.token_symbol),
        LaunchpadError::InvalidTokenSymbol
    );
    Ok(())
}

/// Open a product in the bidding phase and seed its escrow bookkeeping.
///
/// Both records arrive freshly allocated. A product that already carries a
/// maker means this maker launched before.
pub fn launch_product(
    product: &mut Product,
    escrow: &mut Escrow,
    keys: LaunchKeys,
    args: LaunchProductArgs,
    bumps: LaunchBumps,
    now: i64,
) -> Result<()> {
    require!(
        !product.is_initialized() && !escrow.is_initialized(),
        LaunchpadError::ProductAlreadyExists
    );
    validate_launch_args(&args, now)?;

    product.maker = keys.maker;
    product.name = args.name;
    product.description = args.description;
    product.token_symbol = args.token_symbol;
    product.token_mint = keys.token_mint;
    product.token_pool = keys.token_pool;
    product.initial_deposit = args.initial_deposit;
    product.slot_capacity = args.slot_capacity;
    product.slots_remaining = args.slot_capacity;
    product.approved_bids = 0;
    product.total_bids = 0;
    product.total_token_supply = args.token_supply;
    product.allocated_tokens = 0;
    product.launch_date = args.launch_date;
    product.created_at = now;
    product.phase = ProductPhase::Bidding;
    product.funds_claimed = false;
    product.bump = bumps.product;
    product.pool_authority_bump = bumps.pool_authority;

    escrow.product = keys.product;
    escrow.maker = keys.maker;
    escrow.maker_deposit = args.initial_deposit;
    escrow.pending_collateral = 0;
    escrow.approved_collateral = 0;
    escrow.refunded_collateral = 0;
    escrow.swept_amount = 0;
    escrow.bump = bumps.escrow;

    Ok(())
}

/// Close bidding. Pending bids can then only be withdrawn by their bidders.
pub fn finalize_product(product: &mut Product, maker: Pubkey) -> Result<()> {
    require_keys_eq!(maker, product.maker, LaunchpadError::UnauthorizedAccess);
    match product.phase {
        ProductPhase::Bidding => {
            product.phase = ProductPhase::Finalized;
            Ok(())
        }
        ProductPhase::Finalized => err!(LaunchpadError::NotInBiddingPhase),
    }
}
