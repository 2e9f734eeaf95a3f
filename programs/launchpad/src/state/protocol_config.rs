//! Protocol configuration state
//!
//! Singleton record naming the protocol administrator

use anchor_lang::prelude::*;

use crate::constants::PROTOCOL_CONFIG_SEED;

/// Protocol configuration account
#[account]
#[derive(Default, Debug)]
pub struct ProtocolConfig {
    /// Administrator identity recorded at initialization
    pub admin: Pubkey,

    /// Initialization timestamp
    pub initialized_at: i64,

    /// Canonical bump for the config PDA
    pub bump: u8,
}

impl ProtocolConfig {
    pub const LEN: usize = 8 + // discriminator
        32 + // admin
        8 +  // initialized_at
        1; // bump

    /// Seed for deriving the protocol config PDA
    pub const SEED: &'static [u8] = PROTOCOL_CONFIG_SEED;

    /// A freshly allocated record has no admin yet
    pub fn is_initialized(&self) -> bool {
        self.admin != Pubkey::default()
    }
}
