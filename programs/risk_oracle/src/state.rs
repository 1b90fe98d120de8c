use anchor_lang::prelude::*;

use crate::commitment::verify_commitment;
use crate::constants::{INITIAL_BIAS, INITIAL_SCORE, MAX_SCORE};
use crate::errors::OracleError;

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RiskBias {
    /// Low risk, bullish conditions.
    RiskOn,
    /// Moderate risk.
    #[default]
    Neutral,
    /// High risk, bearish conditions.
    RiskOff,
}

impl RiskBias {
    /// Variant name as it appears inside a commitment preimage.
    pub fn variant_name(&self) -> &'static str {
        match self {
            RiskBias::RiskOn => "RiskOn",
            RiskBias::Neutral => "Neutral",
            RiskBias::RiskOff => "RiskOff",
        }
    }
}

// ---------------------------------------------------------------------------
// Account structures
// ---------------------------------------------------------------------------

#[account]
#[derive(Default, Debug, PartialEq, Eq)]
pub struct OracleState {
    /// Admin who can register and (de)activate assessors.
    pub authority: Pubkey,
    /// Number of successful reveals.
    pub assessment_count: u64,
    /// Index handed to the next commit; equals the number of commits so far.
    pub next_index: u64,
    /// Unix timestamp of initialization or of the last reveal.
    pub last_update: i64,
    /// Score of the most recent reveal (0-100).
    pub current_score: u8,
    /// Bias of the most recent reveal.
    pub current_bias: RiskBias,
    pub bump: u8,
}

impl OracleState {
    pub const LEN: usize = 32 + // authority
        8 +  // assessment_count
        8 +  // next_index
        8 +  // last_update
        1 +  // current_score
        1 +  // current_bias
        1; // bump

    pub fn initialize(&mut self, authority: Pubkey, bump: u8, now: i64) {
        self.authority = authority;
        self.assessment_count = 0;
        self.next_index = 0;
        self.last_update = now;
        self.current_score = INITIAL_SCORE;
        self.current_bias = INITIAL_BIAS;
        self.bump = bump;
    }
}

#[account]
#[derive(Default, Debug, PartialEq, Eq)]
pub struct Assessor {
    pub pubkey: Pubkey,
    /// Reveals completed by this assessor.
    pub total_assessments: u64,
    pub registered_at: i64,
    /// Inactive assessors cannot commit.
    pub active: bool,
    pub bump: u8,
}

impl Assessor {
    pub const LEN: usize = 32 + // pubkey
        8 +  // total_assessments
        8 +  // registered_at
        1 +  // active
        1; // bump

    pub fn is_registered(&self) -> bool {
        self.pubkey != Pubkey::default()
    }

    /// Fills a fresh record. Returns false, leaving the record untouched,
    /// when `identity` is already registered here.
    ///
    /// The all-zero key marks an empty record, so it is never a valid identity.
    pub fn register(&mut self, identity: Pubkey, bump: u8, now: i64) -> Result<bool> {
        require_keys_neq!(identity, Pubkey::default(), OracleError::InvalidIdentity);
        if self.is_registered() {
            return Ok(false);
        }
        self.pubkey = identity;
        self.total_assessments = 0;
        self.registered_at = now;
        self.active = true;
        self.bump = bump;
        Ok(true)
    }

    pub fn ensure_can_commit(&self, signer: &Pubkey) -> Result<()> {
        require!(self.is_registered(), OracleError::Unauthorized);
        require_keys_eq!(self.pubkey, *signer, OracleError::Unauthorized);
        require!(self.active, OracleError::Unauthorized);
        Ok(())
    }
}

#[account]
#[derive(Default, Debug, PartialEq, Eq)]
pub struct RiskAssessment {
    pub index: u64,
    /// Identity that committed; only it may reveal.
    pub assessor: Pubkey,
    pub committed_at: i64,
    /// Zero until revealed.
    pub revealed_at: i64,
    /// Zero until revealed.
    pub score: u8,
    /// Neutral until revealed.
    pub bias: RiskBias,
    pub commitment_hash: [u8; 32],
    pub revealed: bool,
    pub bump: u8,
}

impl RiskAssessment {
    pub const LEN: usize = 8 + // index
        32 + // assessor
        8 +  // committed_at
        8 +  // revealed_at
        1 +  // score
        1 +  // bias
        32 + // commitment_hash
        1 +  // revealed
        1; // bump

    /// True for a record that no commit has written yet.
    pub fn is_vacant(&self) -> bool {
        self.assessor == Pubkey::default()
    }

    /// Checks a reveal against this record without mutating anything.
    pub fn check_reveal(
        &self,
        signer: &Pubkey,
        score: u8,
        bias: RiskBias,
        salt: &str,
    ) -> Result<()> {
        require!(!self.is_vacant(), OracleError::NotFound);
        require_keys_eq!(self.assessor, *signer, OracleError::Unauthorized);
        require!(!self.revealed, OracleError::AlreadyRevealed);
        require!(score <= MAX_SCORE, OracleError::OutOfRange);
        require!(
            verify_commitment(&self.commitment_hash, score, bias, salt),
            OracleError::InvalidCommitment
        );
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Transitions
// ---------------------------------------------------------------------------

/// Writes a new commitment into `assessment` at `oracle_state.next_index` and
/// advances the commit counter. Returns the index used.
///
/// Nothing is written unless every check passes.
pub fn open_commitment(
    oracle_state: &mut OracleState,
    assessor: &Assessor,
    assessment: &mut RiskAssessment,
    signer: &Pubkey,
    commitment_hash: [u8; 32],
    bump: u8,
    now: i64,
) -> Result<u64> {
    assessor.ensure_can_commit(signer)?;
    require!(assessment.is_vacant(), OracleError::AlreadyExists);

    let index = oracle_state.next_index;
    let next_index = index.checked_add(1).ok_or(OracleError::Overflow)?;

    assessment.index = index;
    assessment.assessor = *signer;
    assessment.committed_at = now;
    assessment.revealed_at = 0;
    assessment.score = 0;
    assessment.bias = RiskBias::Neutral;
    assessment.commitment_hash = commitment_hash;
    assessment.revealed = false;
    assessment.bump = bump;

    oracle_state.next_index = next_index;
    Ok(index)
}

/// Verifies a reveal and applies it to the assessment, its assessor and the
/// oracle state. The revealed values become the current reading.
/// Returns the new `assessment_count`.
///
/// Nothing is written unless every check passes.
#[allow(clippy::too_many_arguments)]
pub fn finalize_reveal(
    oracle_state: &mut OracleState,
    assessor: &mut Assessor,
    assessment: &mut RiskAssessment,
    signer: &Pubkey,
    score: u8,
    bias: RiskBias,
    salt: &str,
    now: i64,
) -> Result<u64> {
    assessment.check_reveal(signer, score, bias, salt)?;
    require_keys_eq!(assessor.pubkey, *signer, OracleError::Unauthorized);

    let assessment_count = oracle_state
        .assessment_count
        .checked_add(1)
        .ok_or(OracleError::Overflow)?;
    let total_assessments = assessor
        .total_assessments
        .checked_add(1)
        .ok_or(OracleError::Overflow)?;

    assessment.score = score;
    assessment.bias = bias;
    assessment.revealed = true;
    assessment.revealed_at = now;

    assessor.total_assessments = total_assessments;

    oracle_state.current_score = score;
    oracle_state.current_bias = bias;
    oracle_state.assessment_count = assessment_count;
    oracle_state.last_update = now;

    Ok(assessment_count)
}
