//! Global constants for the launchpad program
//!
//! Centralized constants for PDA seeds and launch parameters

use anchor_lang::solana_program::native_token::LAMPORTS_PER_SOL;

// PDA seed constants
pub const PROTOCOL_CONFIG_SEED: &[u8] = b"global-config";
pub const PRODUCT_SEED: &[u8] = b"product";
pub const ESCROW_SEED: &[u8] = b"escrow";
pub const POOL_AUTHORITY_SEED: &[u8] = b"pool";
pub const BID_SEED: &[u8] = b"bid";

// Token constants
pub const TOKEN_DECIMALS: u8 = 9;

// Launch constants
/// Smallest native deposit a maker must bootstrap the escrow with
pub const MIN_LAUNCH_DEPOSIT: u64 = LAMPORTS_PER_SOL / 100;

// Product metadata limits (bytes)
pub const MAX_NAME_LEN: usize = 50;
pub const MAX_DESCRIPTION_LEN: usize = 200;
pub const MAX_SYMBOL_LEN: usize = 10;
