//! Shared fixtures for engine-level and runtime tests
#![allow(dead_code)]

pub mod suite;

use anchor_lang::prelude::*;
use launchpad::{
    constants::MIN_LAUNCH_DEPOSIT,
    logic::{self, LaunchBumps, LaunchKeys, LaunchProductArgs},
    state::{Bid, Escrow, Product},
};

pub const LAUNCH_DATE: i64 = 1_700_000_000;
pub const BEFORE_LAUNCH: i64 = LAUNCH_DATE - 3_600;
pub const AFTER_LAUNCH: i64 = LAUNCH_DATE + 60;

pub fn launch_args(slot_capacity: u32, token_supply: u64) -> LaunchProductArgs {
    LaunchProductArgs {
        name: "Widget".to_string(),
        description: "A widget that does widget things".to_string(),
        token_symbol: "WDGT".to_string(),
        initial_deposit: MIN_LAUNCH_DEPOSIT,
        slot_capacity,
        token_supply,
        launch_date: LAUNCH_DATE,
    }
}

/// A launched product with its escrow, driven directly through the engine
pub struct Launch {
    pub maker: Pubkey,
    pub product_key: Pubkey,
    pub product: Product,
    pub escrow: Escrow,
}

impl Launch {
    pub fn new(slot_capacity: u32, token_supply: u64) -> Self {
        let maker = Pubkey::new_unique();
        let product_key = Pubkey::new_unique();
        let mut product = Product::default();
        let mut escrow = Escrow::default();

        logic::launch_product(
            &mut product,
            &mut escrow,
            LaunchKeys {
                maker,
                product: product_key,
                token_mint: Pubkey::new_unique(),
                token_pool: Pubkey::new_unique(),
            },
            launch_args(slot_capacity, token_supply),
            LaunchBumps::default(),
            BEFORE_LAUNCH - 3_600,
        )
        .unwrap();

        Self {
            maker,
            product_key,
            product,
            escrow,
        }
    }

    pub fn submit(&mut self, amount: u64, slots: u32) -> Result<Bid> {
        let mut bid = Bid::default();
        logic::submit_bid(
            &mut self.product,
            &mut bid,
            &mut self.escrow,
            self.product_key,
            Pubkey::new_unique(),
            amount,
            slots,
            255,
            BEFORE_LAUNCH,
        )?;
        Ok(bid)
    }

    pub fn approve(&mut self, bid: &mut Bid) -> Result<u64> {
        logic::approve_bid(
            &mut self.product,
            bid,
            &mut self.escrow,
            self.product_key,
            self.maker,
        )
    }

    pub fn reject(&mut self, bid: &mut Bid) -> Result<u64> {
        logic::reject_bid(
            &self.product,
            bid,
            &mut self.escrow,
            self.product_key,
            self.maker,
        )
    }
}
