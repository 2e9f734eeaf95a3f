//! Protocol config initialization

use anchor_lang::prelude::*;

use crate::{error::LaunchpadError, state::ProtocolConfig};

/// Record the administrator on a freshly allocated config.
///
/// The default key is refused as administrator: a config holding it would
/// read as uninitialized and could be claimed again.
pub fn init_protocol(config: &mut ProtocolConfig, admin: Pubkey, bump: u8, now: i64) -> Result<()> {
    require!(!config.is_initialized(), LaunchpadError::AlreadyInitialized);
    require_keys_neq!(admin, Pubkey::default(), LaunchpadError::InvalidAdministrator);

    config.admin = admin;
    config.initialized_at = now;
    config.bump = bump;

    Ok(())
}
