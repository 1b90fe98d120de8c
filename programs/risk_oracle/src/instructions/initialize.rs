use anchor_lang::prelude::*;

use crate::constants::ORACLE_STATE_SEED;
use crate::state::OracleState;

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(
        init,
        payer = authority,
        space = 8 + OracleState::LEN,
        seeds = [ORACLE_STATE_SEED],
        bump
    )]
    pub oracle_state: Account<'info, OracleState>,

    #[account(mut)]
    pub authority: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn handle_initialize(ctx: Context<Initialize>) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let oracle_state = &mut ctx.accounts.oracle_state;
    oracle_state.initialize(ctx.accounts.authority.key(), ctx.bumps.oracle_state, now);

    msg!("Oracle initialized by authority: {}", oracle_state.authority);
    Ok(())
}
