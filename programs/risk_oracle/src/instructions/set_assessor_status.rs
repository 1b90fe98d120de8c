use anchor_lang::prelude::*;

use crate::constants::{ASSESSOR_SEED, ORACLE_STATE_SEED};
use crate::errors::OracleError;
use crate::events::AssessorStatusChanged;
use crate::state::{Assessor, OracleState};

#[derive(Accounts)]
pub struct SetAssessorStatus<'info> {
    #[account(
        seeds = [ORACLE_STATE_SEED],
        bump = oracle_state.bump,
        has_one = authority @ OracleError::Unauthorized
    )]
    pub oracle_state: Account<'info, OracleState>,

    #[account(
        mut,
        seeds = [ASSESSOR_SEED, assessor.pubkey.as_ref()],
        bump = assessor.bump
    )]
    pub assessor: Account<'info, Assessor>,

    pub authority: Signer<'info>,
}

pub fn handle_set_assessor_status(ctx: Context<SetAssessorStatus>, active: bool) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let assessor = &mut ctx.accounts.assessor;
    assessor.active = active;

    emit!(AssessorStatusChanged {
        assessor: assessor.pubkey,
        active,
        timestamp: now,
    });

    msg!("Assessor {} active={}", assessor.pubkey, active);
    Ok(())
}
