//! PDA derivation helpers
//!
//! Single source of truth for the launchpad's addresses. On-chain account
//! constraints use the same seed constants.

use anchor_lang::prelude::*;

use crate::{
    constants::POOL_AUTHORITY_SEED,
    state::{Bid, Escrow, Product, ProtocolConfig},
};

/// Derive the singleton protocol config PDA
pub fn derive_protocol_config(program_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[ProtocolConfig::SEED], program_id)
}

/// Derive a maker's product PDA (one product per maker)
pub fn derive_product(maker: &Pubkey, program_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[Product::SEED, maker.as_ref()], program_id)
}

/// Derive the native escrow PDA of a product
pub fn derive_escrow(product: &Pubkey, program_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[Escrow::SEED, product.as_ref()], program_id)
}

/// Derive the authority owning a product's token pool
pub fn derive_pool_authority(product: &Pubkey, program_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[POOL_AUTHORITY_SEED, product.as_ref()], program_id)
}

/// Derive a bidder's bid PDA for a product
pub fn derive_bid(product: &Pubkey, bidder: &Pubkey, program_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[Bid::SEED, product.as_ref(), bidder.as_ref()],
        program_id,
    )
}

