//! Client-side instruction assembly
//!
//! Every builder derives the program addresses it needs and returns them
//! alongside the instruction, so callers never hand-roll seeds.

use anchor_lang::{prelude::*, solana_program::instruction::Instruction, system_program, InstructionData};
use anchor_spl::{associated_token, token};

use crate::{
    logic::LaunchProductArgs,
    utils::{derive_bid, derive_escrow, derive_pool_authority, derive_product, derive_protocol_config},
};

/// Addresses belonging to one product
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProductAddresses {
    pub product: Pubkey,
    pub escrow: Pubkey,
    pub pool_authority: Pubkey,
    pub token_pool: Pubkey,
}

impl ProductAddresses {
    pub fn derive(maker: &Pubkey, token_mint: &Pubkey) -> Self {
        let program_id = crate::id();
        let (product, _) = derive_product(maker, &program_id);
        let (escrow, _) = derive_escrow(&product, &program_id);
        let (pool_authority, _) = derive_pool_authority(&product, &program_id);
        let token_pool = associated_token::get_associated_token_address(&pool_authority, token_mint);
        Self {
            product,
            escrow,
            pool_authority,
            token_pool,
        }
    }
}

pub struct InstructionBuilder;

impl InstructionBuilder {
    pub fn init_protocol(payer: &Pubkey, administrator: Option<Pubkey>) -> (Instruction, Pubkey) {
        let program_id = crate::id();
        let (protocol_config, _) = derive_protocol_config(&program_id);

        let accounts = crate::accounts::InitProtocol {
            payer: *payer,
            protocol_config,
            system_program: system_program::ID,
        };

        let instruction = Instruction {
            program_id,
            accounts: accounts.to_account_metas(None),
            data: crate::instruction::InitProtocol { administrator }.data(),
        };

        (instruction, protocol_config)
    }

    /// `token_mint` is a fresh keypair that must co-sign the transaction
    pub fn launch_product(
        maker: &Pubkey,
        token_mint: &Pubkey,
        args: LaunchProductArgs,
    ) -> (Instruction, ProductAddresses) {
        let program_id = crate::id();
        let (protocol_config, _) = derive_protocol_config(&program_id);
        let addresses = ProductAddresses::derive(maker, token_mint);

        let accounts = crate::accounts::LaunchProduct {
            maker: *maker,
            protocol_config,
            product: addresses.product,
            escrow: addresses.escrow,
            pool_authority: addresses.pool_authority,
            token_mint: *token_mint,
            token_pool: addresses.token_pool,
            token_program: token::ID,
            associated_token_program: associated_token::ID,
            system_program: system_program::ID,
            rent: anchor_lang::solana_program::sysvar::rent::ID,
        };

        let instruction = Instruction {
            program_id,
            accounts: accounts.to_account_metas(None),
            data: crate::instruction::LaunchProduct { args }.data(),
        };

        (instruction, addresses)
    }

    pub fn submit_bid(
        bidder: &Pubkey,
        product: &Pubkey,
        amount: u64,
        slots_requested: u32,
    ) -> (Instruction, Pubkey) {
        let program_id = crate::id();
        let (bid, _) = derive_bid(product, bidder, &program_id);
        let (escrow, _) = derive_escrow(product, &program_id);

        let accounts = crate::accounts::SubmitBid {
            bidder: *bidder,
            product: *product,
            bid,
            escrow,
            system_program: system_program::ID,
        };

        let instruction = Instruction {
            program_id,
            accounts: accounts.to_account_metas(None),
            data: crate::instruction::SubmitBid {
                amount,
                slots_requested,
            }
            .data(),
        };

        (instruction, bid)
    }

    pub fn approve_bid(maker: &Pubkey, bidder: &Pubkey) -> Instruction {
        let program_id = crate::id();
        let (product, _) = derive_product(maker, &program_id);
        let (bid, _) = derive_bid(&product, bidder, &program_id);
        let (escrow, _) = derive_escrow(&product, &program_id);

        let accounts = crate::accounts::ApproveBid {
            maker: *maker,
            product,
            bid,
            escrow,
        };

        Instruction {
            program_id,
            accounts: accounts.to_account_metas(None),
            data: crate::instruction::ApproveBid {}.data(),
        }
    }

    pub fn reject_bid(maker: &Pubkey, bidder: &Pubkey) -> Instruction {
        let program_id = crate::id();
        let (product, _) = derive_product(maker, &program_id);
        let (bid, _) = derive_bid(&product, bidder, &program_id);
        let (escrow, _) = derive_escrow(&product, &program_id);

        let accounts = crate::accounts::RejectBid {
            maker: *maker,
            product,
            bid,
            escrow,
            bidder: *bidder,
        };

        Instruction {
            program_id,
            accounts: accounts.to_account_metas(None),
            data: crate::instruction::RejectBid {}.data(),
        }
    }

    pub fn claim_tokens(bidder: &Pubkey, maker: &Pubkey, token_mint: &Pubkey) -> Instruction {
        let program_id = crate::id();
        let addresses = ProductAddresses::derive(maker, token_mint);
        let (bid, _) = derive_bid(&addresses.product, bidder, &program_id);
        let bidder_token_account = associated_token::get_associated_token_address(bidder, token_mint);

        let accounts = crate::accounts::ClaimTokens {
            bidder: *bidder,
            product: addresses.product,
            bid,
            token_mint: *token_mint,
            token_pool: addresses.token_pool,
            pool_authority: addresses.pool_authority,
            bidder_token_account,
            token_program: token::ID,
            associated_token_program: associated_token::ID,
            system_program: system_program::ID,
        };

        Instruction {
            program_id,
            accounts: accounts.to_account_metas(None),
            data: crate::instruction::ClaimTokens {}.data(),
        }
    }

    pub fn claim_funds(maker: &Pubkey) -> Instruction {
        let program_id = crate::id();
        let (product, _) = derive_product(maker, &program_id);
        let (escrow, _) = derive_escrow(&product, &program_id);

        let accounts = crate::accounts::ClaimFunds {
            maker: *maker,
            product,
            escrow,
        };

        Instruction {
            program_id,
            accounts: accounts.to_account_metas(None),
            data: crate::instruction::ClaimFunds {}.data(),
        }
    }

    pub fn finalize_product(maker: &Pubkey) -> Instruction {
        let program_id = crate::id();
        let (product, _) = derive_product(maker, &program_id);

        let accounts = crate::accounts::FinalizeProduct {
            maker: *maker,
            product,
        };

        Instruction {
            program_id,
            accounts: accounts.to_account_metas(None),
            data: crate::instruction::FinalizeProduct {}.data(),
        }
    }

    pub fn withdraw_pending_bid(bidder: &Pubkey, maker: &Pubkey) -> Instruction {
        let program_id = crate::id();
        let (product, _) = derive_product(maker, &program_id);
        let (bid, _) = derive_bid(&product, bidder, &program_id);
        let (escrow, _) = derive_escrow(&product, &program_id);

        let accounts = crate::accounts::WithdrawPendingBid {
            bidder: *bidder,
            product,
            bid,
            escrow,
        };

        Instruction {
            program_id,
            accounts: accounts.to_account_metas(None),
            data: crate::instruction::WithdrawPendingBid {}.data(),
        }
    }
}
