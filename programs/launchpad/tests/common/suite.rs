//! Runtime harness: drives the real instruction handlers through the bank

use anchor_lang::{
    prelude::{AccountInfo, Clock, Pubkey},
    solana_program::entrypoint::ProgramResult,
    AccountDeserialize,
};
use launchpad::error::LaunchpadError;
use solana_program_test::{processor, BanksClientError, ProgramTest, ProgramTestContext};
use solana_sdk::{
    instruction::{Instruction, InstructionError},
    signature::{Keypair, Signer},
    system_instruction,
    transaction::{Transaction, TransactionError},
};

pub type TestResult<T> = Result<T, Box<dyn std::error::Error>>;

// `entry` ties the slice lifetime to the account lifetime, which the
// builtin processor signature does not
fn process_instruction(program_id: &Pubkey, accounts: &[AccountInfo], data: &[u8]) -> ProgramResult {
    let accounts = Box::leak(accounts.to_vec().into_boxed_slice());
    launchpad::entry(program_id, accounts, data)
}

pub struct TestSuite {
    pub context: ProgramTestContext,
}

impl TestSuite {
    pub async fn new() -> Self {
        let program_test = ProgramTest::new("launchpad", launchpad::ID, processor!(process_instruction));
        Self {
            context: program_test.start_with_context().await,
        }
    }

    pub fn payer(&self) -> Pubkey {
        self.context.payer.pubkey()
    }

    /// Submit `instructions` in one transaction; the suite payer covers fees
    pub async fn process(
        &mut self,
        instructions: &[Instruction],
        signers: &[&Keypair],
    ) -> Result<(), BanksClientError> {
        let blockhash = self.context.get_new_latest_blockhash().await?;
        let mut all: Vec<&Keypair> = vec![&self.context.payer];
        all.extend_from_slice(signers);
        let tx = Transaction::new_signed_with_payer(
            instructions,
            Some(&self.context.payer.pubkey()),
            &all,
            blockhash,
        );
        self.context.banks_client.process_transaction(tx).await
    }

    /// A new keypair holding `lamports`
    pub async fn funded_keypair(&mut self, lamports: u64) -> TestResult<Keypair> {
        let keypair = Keypair::new();
        let ix = system_instruction::transfer(&self.payer(), &keypair.pubkey(), lamports);
        self.process(&[ix], &[]).await?;
        Ok(keypair)
    }

    pub async fn balance(&mut self, address: &Pubkey) -> TestResult<u64> {
        Ok(self.context.banks_client.get_balance(*address).await?)
    }

    pub async fn exists(&mut self, address: &Pubkey) -> TestResult<bool> {
        Ok(self.context.banks_client.get_account(*address).await?.is_some())
    }

    pub async fn account<T: AccountDeserialize>(&mut self, address: &Pubkey) -> TestResult<T> {
        let account = self
            .context
            .banks_client
            .get_account(*address)
            .await?
            .ok_or_else(|| format!("account {address} not found"))?;
        T::try_deserialize(&mut account.data.as_slice()).map_err(|e| format!("{e:?}").into())
    }

    pub async fn rent_exempt(&mut self, len: usize) -> TestResult<u64> {
        Ok(self.context.banks_client.get_rent().await?.minimum_balance(len))
    }

    pub async fn now(&mut self) -> TestResult<i64> {
        let clock: Clock = self.context.banks_client.get_sysvar().await?;
        Ok(clock.unix_timestamp)
    }

    pub async fn set_time(&mut self, unix_timestamp: i64) -> TestResult<()> {
        let mut clock: Clock = self.context.banks_client.get_sysvar().await?;
        clock.unix_timestamp = unix_timestamp;
        self.context.set_sysvar(&clock);
        Ok(())
    }
}

/// Single-instruction transaction failed with the program error `expected`
pub fn assert_program_error(result: Result<(), BanksClientError>, expected: LaunchpadError) {
    let err = result.expect_err("transaction should have failed").unwrap();
    assert_eq!(
        err,
        TransactionError::InstructionError(0, InstructionError::Custom(u32::from(expected))),
        "expected {expected:?}"
    );
}
