use anchor_lang::prelude::*;

use crate::constants::{ASSESSMENT_SEED, ASSESSOR_SEED, ORACLE_STATE_SEED};
use crate::events::AssessmentCommitted;
use crate::state::{open_commitment, Assessor, OracleState, RiskAssessment};

#[derive(Accounts)]
pub struct CommitAssessment<'info> {
    #[account(
        mut,
        seeds = [ORACLE_STATE_SEED],
        bump = oracle_state.bump
    )]
    pub oracle_state: Account<'info, OracleState>,

    #[account(
        seeds = [ASSESSOR_SEED, assessor_signer.key().as_ref()],
        bump = assessor.bump
    )]
    pub assessor: Account<'info, Assessor>,

    // Addressed by the commit counter; an occupied slot is rejected in the handler.
    #[account(
        init_if_needed,
        payer = assessor_signer,
        space = 8 + RiskAssessment::LEN,
        seeds = [ASSESSMENT_SEED, oracle_state.next_index.to_le_bytes().as_ref()],
        bump
    )]
    pub assessment: Account<'info, RiskAssessment>,

    #[account(mut)]
    pub assessor_signer: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn handle_commit_assessment(
    ctx: Context<CommitAssessment>,
    commitment_hash: [u8; 32],
) -> Result<u64> {
    let now = Clock::get()?.unix_timestamp;
    let signer = ctx.accounts.assessor_signer.key();

    let index = open_commitment(
        &mut ctx.accounts.oracle_state,
        &ctx.accounts.assessor,
        &mut ctx.accounts.assessment,
        &signer,
        commitment_hash,
        ctx.bumps.assessment,
        now,
    )?;

    emit!(AssessmentCommitted {
        index,
        assessor: signer,
        commitment_hash,
        timestamp: now,
    });

    msg!("Assessment committed: #{} by {}", index, signer);
    Ok(index)
}
