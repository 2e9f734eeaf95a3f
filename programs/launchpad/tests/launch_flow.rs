//! Runtime tests: every handler executed against the bank, with real
//! lamport and token balances checked after each step

mod common;

use anchor_lang::{
    prelude::Pubkey, solana_program::program_option::COption, InstructionData, ToAccountMetas,
};
use anchor_spl::token::{Mint, TokenAccount};
use common::{launch_args, suite::*};
use launchpad::{
    error::LaunchpadError,
    instruction_builder::InstructionBuilder,
    state::{Bid, BidStatus, Escrow, Product, ProductPhase, ProtocolConfig},
    utils::{derive_bid, derive_escrow},
};
use solana_sdk::{
    instruction::Instruction,
    native_token::LAMPORTS_PER_SOL,
    signature::{Keypair, Signer},
};

const SLOT_CAPACITY: u32 = 5;
const TOKEN_SUPPLY: u64 = 1_000_000;

#[tokio::test]
async fn test_protocol_init_rejects_default_admin_and_second_init() -> TestResult<()> {
    let mut suite = TestSuite::new().await;
    let payer = suite.payer();

    let (ix, config) = InstructionBuilder::init_protocol(&payer, Some(Pubkey::default()));
    let result = suite.process(&[ix], &[]).await;
    assert_program_error(result, LaunchpadError::InvalidAdministrator);

    let (ix, _) = InstructionBuilder::init_protocol(&payer, None);
    suite.process(&[ix], &[]).await?;
    let stored: ProtocolConfig = suite.account(&config).await?;
    assert_eq!(stored.admin, payer);
    assert!(stored.initialized_at > 0);

    let intruder = suite.funded_keypair(LAMPORTS_PER_SOL).await?;
    for administrator in [Some(Pubkey::default()), Some(intruder.pubkey()), None] {
        let (ix, _) = InstructionBuilder::init_protocol(&intruder.pubkey(), administrator);
        let result = suite.process(&[ix], &[&intruder]).await;
        assert_program_error(result, LaunchpadError::AlreadyInitialized);
    }

    let stored: ProtocolConfig = suite.account(&config).await?;
    assert_eq!(stored.admin, payer);

    Ok(())
}

#[tokio::test]
async fn test_launch_bid_decide_and_claim() -> TestResult<()> {
    let mut suite = TestSuite::new().await;
    let (ix, _) = InstructionBuilder::init_protocol(&suite.payer(), None);
    suite.process(&[ix], &[]).await?;

    // Launch
    let maker = suite.funded_keypair(10 * LAMPORTS_PER_SOL).await?;
    let mint = Keypair::new();
    let launch_date = suite.now().await? + 3_600;
    let mut args = launch_args(SLOT_CAPACITY, TOKEN_SUPPLY);
    args.launch_date = launch_date;
    let deposit = args.initial_deposit;

    let (ix, addresses) = InstructionBuilder::launch_product(&maker.pubkey(), &mint.pubkey(), args.clone());
    suite.process(&[ix], &[&maker, &mint]).await?;

    let product: Product = suite.account(&addresses.product).await?;
    assert_eq!(product.maker, maker.pubkey());
    assert_eq!(product.token_mint, mint.pubkey());
    assert_eq!(product.token_pool, addresses.token_pool);
    assert_eq!(product.slots_remaining, SLOT_CAPACITY);
    assert_eq!(product.phase, ProductPhase::Bidding);

    let token_mint: Mint = suite.account(&mint.pubkey()).await?;
    assert_eq!(token_mint.supply, TOKEN_SUPPLY);
    assert!(token_mint.mint_authority.is_none());
    assert_eq!(token_mint.freeze_authority, COption::Some(addresses.pool_authority));

    let pool: TokenAccount = suite.account(&addresses.token_pool).await?;
    assert_eq!(pool.amount, TOKEN_SUPPLY);
    assert_eq!(pool.owner, addresses.pool_authority);

    let escrow_rent = suite.rent_exempt(Escrow::LEN).await?;
    assert_eq!(suite.balance(&addresses.escrow).await?, escrow_rent + deposit);

    // One product per maker
    let second_mint = Keypair::new();
    let (ix, _) = InstructionBuilder::launch_product(&maker.pubkey(), &second_mint.pubkey(), args);
    let result = suite.process(&[ix], &[&maker, &second_mint]).await;
    assert_program_error(result, LaunchpadError::ProductAlreadyExists);

    // Bids
    let bid_rent = suite.rent_exempt(Bid::LEN).await?;
    let a = suite.funded_keypair(5 * LAMPORTS_PER_SOL).await?;
    let b = suite.funded_keypair(5 * LAMPORTS_PER_SOL).await?;
    let c = suite.funded_keypair(5 * LAMPORTS_PER_SOL).await?;
    let a_amount = LAMPORTS_PER_SOL;
    let b_amount = 2 * LAMPORTS_PER_SOL;
    let c_amount = LAMPORTS_PER_SOL / 2;

    let b_before = suite.balance(&b.pubkey()).await?;
    let c_before = suite.balance(&c.pubkey()).await?;

    for (bidder, amount, slots) in [(&a, a_amount, 1), (&b, b_amount, 2), (&c, c_amount, 1)] {
        let (ix, _) = InstructionBuilder::submit_bid(&bidder.pubkey(), &addresses.product, amount, slots);
        suite.process(&[ix], &[bidder]).await?;
    }
    assert_eq!(suite.balance(&c.pubkey()).await?, c_before - c_amount - bid_rent);
    assert_eq!(
        suite.balance(&addresses.escrow).await?,
        escrow_rent + deposit + a_amount + b_amount + c_amount
    );

    let (ix, a_bid) = InstructionBuilder::submit_bid(&a.pubkey(), &addresses.product, a_amount, 1);
    let result = suite.process(&[ix], &[&a]).await;
    assert_program_error(result, LaunchpadError::BidAlreadyExists);

    // Only the maker decides
    let stranger = suite.funded_keypair(LAMPORTS_PER_SOL).await?;
    let ix = Instruction {
        program_id: launchpad::ID,
        accounts: launchpad::accounts::ApproveBid {
            maker: stranger.pubkey(),
            product: addresses.product,
            bid: a_bid,
            escrow: addresses.escrow,
        }
        .to_account_metas(None),
        data: launchpad::instruction::ApproveBid {}.data(),
    };
    let result = suite.process(&[ix], &[&stranger]).await;
    assert_program_error(result, LaunchpadError::UnauthorizedAccess);

    suite
        .process(&[InstructionBuilder::approve_bid(&maker.pubkey(), &a.pubkey())], &[&maker])
        .await?;
    let bid: Bid = suite.account(&a_bid).await?;
    assert_eq!(bid.status, BidStatus::Approved);
    assert_eq!(bid.token_amount, 200_000);

    // A rejection refunds only the recorded bidder
    let (b_bid, _) = derive_bid(&addresses.product, &b.pubkey(), &launchpad::ID);
    let ix = Instruction {
        program_id: launchpad::ID,
        accounts: launchpad::accounts::RejectBid {
            maker: maker.pubkey(),
            product: addresses.product,
            bid: b_bid,
            escrow: addresses.escrow,
            bidder: c.pubkey(),
        }
        .to_account_metas(None),
        data: launchpad::instruction::RejectBid {}.data(),
    };
    let result = suite.process(&[ix], &[&maker]).await;
    assert_program_error(result, LaunchpadError::UnauthorizedAccess);

    suite
        .process(&[InstructionBuilder::reject_bid(&maker.pubkey(), &b.pubkey())], &[&maker])
        .await?;
    // Rejected bids keep their record, so only its rent stays behind
    assert_eq!(suite.balance(&b.pubkey()).await?, b_before - bid_rent);
    let bid: Bid = suite.account(&b_bid).await?;
    assert_eq!(bid.status, BidStatus::Rejected);

    // Close bidding, the undecided bid withdraws in full
    suite
        .process(&[InstructionBuilder::finalize_product(&maker.pubkey())], &[&maker])
        .await?;
    let (c_bid, _) = derive_bid(&addresses.product, &c.pubkey(), &launchpad::ID);
    suite
        .process(
            &[InstructionBuilder::withdraw_pending_bid(&c.pubkey(), &maker.pubkey())],
            &[&c],
        )
        .await?;
    assert_eq!(suite.balance(&c.pubkey()).await?, c_before);
    assert!(!suite.exists(&c_bid).await?);

    // Token claim waits for the launch date
    let claim = InstructionBuilder::claim_tokens(&a.pubkey(), &maker.pubkey(), &mint.pubkey());
    let result = suite.process(&[claim.clone()], &[&a]).await;
    assert_program_error(result, LaunchpadError::LaunchDateNotReached);

    suite.set_time(launch_date).await?;
    suite.process(&[claim.clone()], &[&a]).await?;

    let a_tokens = anchor_spl::associated_token::get_associated_token_address(&a.pubkey(), &mint.pubkey());
    let holding: TokenAccount = suite.account(&a_tokens).await?;
    assert_eq!(holding.amount, 200_000);
    let pool: TokenAccount = suite.account(&addresses.token_pool).await?;
    assert_eq!(pool.amount, TOKEN_SUPPLY - 200_000);

    let result = suite.process(&[claim], &[&a]).await;
    assert_program_error(result, LaunchpadError::AlreadyClaimed);

    // Maker sweeps deposit plus approved collateral, escrow keeps its rent
    let maker_before = suite.balance(&maker.pubkey()).await?;
    suite
        .process(&[InstructionBuilder::claim_funds(&maker.pubkey())], &[&maker])
        .await?;
    assert_eq!(suite.balance(&maker.pubkey()).await?, maker_before + deposit + a_amount);
    assert_eq!(suite.balance(&addresses.escrow).await?, escrow_rent);

    let escrow: Escrow = suite.account(&addresses.escrow).await?;
    assert_eq!(escrow.tracked_balance().unwrap(), 0);
    assert_eq!(escrow.swept_amount, deposit + a_amount);

    let result = suite
        .process(&[InstructionBuilder::claim_funds(&maker.pubkey())], &[&maker])
        .await;
    assert_program_error(result, LaunchpadError::FundsAlreadyClaimed);

    Ok(())
}

#[tokio::test]
async fn test_pending_bid_withdrawal_is_bound_to_its_bidder() -> TestResult<()> {
    let mut suite = TestSuite::new().await;
    let (ix, _) = InstructionBuilder::init_protocol(&suite.payer(), None);
    suite.process(&[ix], &[]).await?;

    let maker = suite.funded_keypair(10 * LAMPORTS_PER_SOL).await?;
    let mint = Keypair::new();
    let mut args = launch_args(SLOT_CAPACITY, TOKEN_SUPPLY);
    args.launch_date = suite.now().await? + 3_600;
    let (ix, addresses) = InstructionBuilder::launch_product(&maker.pubkey(), &mint.pubkey(), args);
    suite.process(&[ix], &[&maker, &mint]).await?;

    let bidder = suite.funded_keypair(2 * LAMPORTS_PER_SOL).await?;
    let thief = suite.funded_keypair(LAMPORTS_PER_SOL).await?;
    let bidder_before = suite.balance(&bidder.pubkey()).await?;
    let (ix, bid) = InstructionBuilder::submit_bid(&bidder.pubkey(), &addresses.product, LAMPORTS_PER_SOL, 1);
    suite.process(&[ix], &[&bidder]).await?;
    suite
        .process(&[InstructionBuilder::finalize_product(&maker.pubkey())], &[&maker])
        .await?;

    // The bid address is derived from the signer, so another signer's
    // withdrawal fails the seed check and leaves the escrow untouched
    let (escrow, _) = derive_escrow(&addresses.product, &launchpad::ID);
    let escrow_before = suite.balance(&escrow).await?;
    let ix = Instruction {
        program_id: launchpad::ID,
        accounts: launchpad::accounts::WithdrawPendingBid {
            bidder: thief.pubkey(),
            product: addresses.product,
            bid,
            escrow,
        }
        .to_account_metas(None),
        data: launchpad::instruction::WithdrawPendingBid {}.data(),
    };
    assert!(suite.process(&[ix], &[&thief]).await.is_err());
    assert_eq!(suite.balance(&escrow).await?, escrow_before);
    assert!(suite.exists(&bid).await?);

    suite
        .process(
            &[InstructionBuilder::withdraw_pending_bid(&bidder.pubkey(), &maker.pubkey())],
            &[&bidder],
        )
        .await?;
    assert_eq!(suite.balance(&bidder.pubkey()).await?, bidder_before);
    assert_eq!(suite.balance(&escrow).await?, escrow_before - LAMPORTS_PER_SOL);
    assert!(!suite.exists(&bid).await?);

    Ok(())
}
