use anchor_lang::prelude::*;

use crate::constants::{ASSESSMENT_SEED, ASSESSOR_SEED, ORACLE_STATE_SEED};
use crate::events::RiskUpdated;
use crate::state::{finalize_reveal, Assessor, OracleState, RiskAssessment, RiskBias};

#[derive(Accounts)]
#[instruction(index: u64)]
pub struct RevealAssessment<'info> {
    #[account(
        mut,
        seeds = [ORACLE_STATE_SEED],
        bump = oracle_state.bump
    )]
    pub oracle_state: Account<'info, OracleState>,

    #[account(
        mut,
        seeds = [ASSESSOR_SEED, assessor_signer.key().as_ref()],
        bump = assessor.bump
    )]
    pub assessor: Account<'info, Assessor>,

    #[account(
        mut,
        seeds = [ASSESSMENT_SEED, index.to_le_bytes().as_ref()],
        bump = assessment.bump
    )]
    pub assessment: Account<'info, RiskAssessment>,

    pub assessor_signer: Signer<'info>,
}

pub fn handle_reveal_assessment(
    ctx: Context<RevealAssessment>,
    index: u64,
    score: u8,
    bias: RiskBias,
    salt: String,
) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let signer = ctx.accounts.assessor_signer.key();

    let assessment_count = finalize_reveal(
        &mut ctx.accounts.oracle_state,
        &mut ctx.accounts.assessor,
        &mut ctx.accounts.assessment,
        &signer,
        score,
        bias,
        &salt,
        now,
    )?;

    emit!(RiskUpdated {
        index,
        assessment_count,
        score,
        bias,
        timestamp: now,
        assessor: signer,
    });

    msg!("Assessment #{} revealed: score={}, bias={:?}", index, score, bias);
    Ok(())
}
