use anchor_lang::prelude::*;

use crate::{
    constants::PROTOCOL_CONFIG_SEED, events::ProtocolInitialized, logic, state::ProtocolConfig,
    utils::current_timestamp,
};

#[derive(Accounts)]
pub struct InitProtocol<'info> {
    #[account(mut)]
    pub payer: Signer<'info>,

    #[account(
        init_if_needed,
        payer = payer,
        space = ProtocolConfig::LEN,
        seeds = [PROTOCOL_CONFIG_SEED],
        bump,
    )]
    pub protocol_config: Account<'info, ProtocolConfig>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<InitProtocol>, administrator: Option<Pubkey>) -> Result<()> {
    let now = current_timestamp()?;
    let admin = administrator.unwrap_or_else(|| ctx.accounts.payer.key());

    logic::init_protocol(
        &mut ctx.accounts.protocol_config,
        admin,
        ctx.bumps.protocol_config,
        now,
    )?;

    msg!("Launchpad protocol initialized, admin {}", admin);

    emit!(ProtocolInitialized {
        admin,
        timestamp: now,
    });

    Ok(())
}
