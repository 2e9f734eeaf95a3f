#![allow(deprecated)]
#![allow(unexpected_cfgs)]
use anchor_lang::prelude::*;

pub mod constants;
pub mod error;
pub mod events;
pub mod instruction_builder;
pub mod instructions;
pub mod logic;
pub mod state;
pub mod utils;

use instructions::*;
pub use logic::LaunchProductArgs;

declare_id!("Launchpad1111111111111111111111111111111111");

#[program]
pub mod launchpad {
    use super::*;

    /// Create the singleton protocol config
    pub fn init_protocol(ctx: Context<InitProtocol>, administrator: Option<Pubkey>) -> Result<()> {
        instructions::init_protocol::handler(ctx, administrator)
    }

    /// Launch a product: escrow, token mint, pool and fixed supply
    pub fn launch_product(ctx: Context<LaunchProduct>, args: LaunchProductArgs) -> Result<()> {
        instructions::launch_product::handler(ctx, args)
    }

    /// Place collateral on a product for a number of slots
    pub fn submit_bid(ctx: Context<SubmitBid>, amount: u64, slots_requested: u32) -> Result<()> {
        instructions::submit_bid::handler(ctx, amount, slots_requested)
    }

    pub fn approve_bid(ctx: Context<ApproveBid>) -> Result<()> {
        instructions::approve_bid::handler(ctx)
    }

    pub fn reject_bid(ctx: Context<RejectBid>) -> Result<()> {
        instructions::reject_bid::handler(ctx)
    }

    /// Collect an approved bid's tokens once the launch date is reached
    pub fn claim_tokens(ctx: Context<ClaimTokens>) -> Result<()> {
        instructions::claim_tokens::handler(ctx)
    }

    /// Sweep the maker's deposit and approved collateral after launch
    pub fn claim_funds(ctx: Context<ClaimFunds>) -> Result<()> {
        instructions::claim_funds::handler(ctx)
    }

    /// Close bidding early
    pub fn finalize_product(ctx: Context<FinalizeProduct>) -> Result<()> {
        instructions::finalize_product::handler(ctx)
    }

    /// Recover collateral of a bid left undecided when bidding closed
    pub fn withdraw_pending_bid(ctx: Context<WithdrawPendingBid>) -> Result<()> {
        instructions::withdraw_pending_bid::handler(ctx)
    }
}
