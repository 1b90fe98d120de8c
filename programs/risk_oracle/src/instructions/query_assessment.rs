use anchor_lang::prelude::*;

use crate::constants::ASSESSMENT_SEED;
use crate::state::RiskAssessment;

#[derive(Accounts)]
#[instruction(index: u64)]
pub struct QueryAssessment<'info> {
    #[account(
        seeds = [ASSESSMENT_SEED, index.to_le_bytes().as_ref()],
        bump = assessment.bump
    )]
    pub assessment: Account<'info, RiskAssessment>,
}

/// Read-only: logs the record and returns it as instruction return data.
pub fn handle_query_assessment(
    ctx: Context<QueryAssessment>,
    index: u64,
) -> Result<RiskAssessment> {
    let assessment = &ctx.accounts.assessment;

    msg!(
        "Assessment #{}: assessor={}, revealed={}, score={}, bias={:?}, committed_at={}",
        index,
        assessment.assessor,
        assessment.revealed,
        assessment.score,
        assessment.bias,
        assessment.committed_at
    );

    Ok((**assessment).clone())
}
