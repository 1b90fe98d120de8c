//! Risk Oracle: Anchor program for commit-reveal risk assessments.
//! Registered assessors commit a hash of (score, bias, salt), then reveal it;
//! the last successful reveal becomes the oracle's current reading.

use anchor_lang::prelude::*;

pub mod commitment;
pub mod constants;
pub mod errors;
pub mod events;
pub mod instructions;
#[cfg(not(target_os = "solana"))]
pub mod ledger;
pub mod pda;
pub mod state;

pub use constants::*;
pub use errors::*;
pub use events::*;
pub use instructions::*;
pub use state::*;

declare_id!("37q514mXTPqkajW4mtVYSakZGMCYPUZ3JTj8QpYnHAGt");

#[program]
pub mod risk_oracle {
    use super::*;

    /// Creates the oracle state singleton. Fails if it already exists.
    pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
        instructions::initialize::handle_initialize(ctx)
    }

    /// Registers the `assessor_pubkey` identity. Authority only; a no-op when
    /// the identity is already registered.
    pub fn register_assessor(ctx: Context<RegisterAssessor>) -> Result<()> {
        instructions::register_assessor::handle_register_assessor(ctx)
    }

    /// Activates or deactivates an assessor. Authority only.
    pub fn set_assessor_status(ctx: Context<SetAssessorStatus>, active: bool) -> Result<()> {
        instructions::set_assessor_status::handle_set_assessor_status(ctx, active)
    }

    /// Commits a hash of an assessment at the next free index and returns it.
    pub fn commit_assessment(
        ctx: Context<CommitAssessment>,
        commitment_hash: [u8; 32],
    ) -> Result<u64> {
        instructions::commit_assessment::handle_commit_assessment(ctx, commitment_hash)
    }

    /// Reveals the assessment committed at `index` and publishes it.
    pub fn reveal_assessment(
        ctx: Context<RevealAssessment>,
        index: u64,
        score: u8,
        bias: RiskBias,
        salt: String,
    ) -> Result<()> {
        instructions::reveal_assessment::handle_reveal_assessment(ctx, index, score, bias, salt)
    }

    pub fn query_assessment(ctx: Context<QueryAssessment>, index: u64) -> Result<RiskAssessment> {
        instructions::query_assessment::handle_query_assessment(ctx, index)
    }

    pub fn get_latest(ctx: Context<GetLatest>) -> Result<OracleState> {
        instructions::get_latest::handle_get_latest(ctx)
    }
}
