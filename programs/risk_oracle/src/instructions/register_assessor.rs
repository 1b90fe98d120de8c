use anchor_lang::prelude::*;

use crate::constants::{ASSESSOR_SEED, ORACLE_STATE_SEED};
use crate::errors::OracleError;
use crate::events::AssessorRegistered;
use crate::state::{Assessor, OracleState};

#[derive(Accounts)]
pub struct RegisterAssessor<'info> {
    #[account(
        seeds = [ORACLE_STATE_SEED],
        bump = oracle_state.bump,
        has_one = authority @ OracleError::Unauthorized
    )]
    pub oracle_state: Account<'info, OracleState>,

    // init_if_needed: registering an existing identity must leave it untouched.
    #[account(
        init_if_needed,
        payer = authority,
        space = 8 + Assessor::LEN,
        seeds = [ASSESSOR_SEED, assessor_pubkey.key().as_ref()],
        bump
    )]
    pub assessor: Account<'info, Assessor>,

    /// Identity being registered as an assessor.
    /// CHECK: Used only for PDA derivation.
    pub assessor_pubkey: UncheckedAccount<'info>,

    #[account(mut)]
    pub authority: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn handle_register_assessor(ctx: Context<RegisterAssessor>) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let identity = ctx.accounts.assessor_pubkey.key();
    let assessor = &mut ctx.accounts.assessor;

    if !assessor.register(identity, ctx.bumps.assessor, now)? {
        msg!("Assessor already registered: {}", identity);
        return Ok(());
    }

    emit!(AssessorRegistered {
        assessor: identity,
        timestamp: now,
    });

    msg!("Assessor registered: {}", identity);
    Ok(())
}
