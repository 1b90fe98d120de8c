use anchor_lang::prelude::*;

use crate::constants::ORACLE_STATE_SEED;
use crate::state::OracleState;

#[derive(Accounts)]
pub struct GetLatest<'info> {
    #[account(
        seeds = [ORACLE_STATE_SEED],
        bump = oracle_state.bump
    )]
    pub oracle_state: Account<'info, OracleState>,
}

/// Read-only: logs the current reading and returns the state as return data.
pub fn handle_get_latest(ctx: Context<GetLatest>) -> Result<OracleState> {
    let oracle_state = &ctx.accounts.oracle_state;

    msg!(
        "Latest: score={}, bias={:?}, count={}, last_update={}",
        oracle_state.current_score,
        oracle_state.current_bias,
        oracle_state.assessment_count,
        oracle_state.last_update
    );

    Ok((**oracle_state).clone())
}
