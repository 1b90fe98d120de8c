//! In-process oracle ledger: the program's records in a keyed store, for host
//! tests and off-chain simulation.
//! Records are addressed by the same PDAs the program uses. Each operation
//! stages copies and stores them only when it succeeds.

use std::collections::HashMap;

use anchor_lang::prelude::*;

use crate::errors::OracleError;
use crate::pda::{assessment_address, assessor_address, oracle_state_address};
use crate::state::{
    finalize_reveal, open_commitment, Assessor, OracleState, RiskAssessment, RiskBias,
};

#[derive(Debug, Default)]
pub struct OracleLedger {
    oracle_state: Option<OracleState>,
    assessors: HashMap<Pubkey, Assessor>,
    assessments: HashMap<Pubkey, RiskAssessment>,
    unix_timestamp: i64,
}

impl OracleLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the clock seen by subsequent operations.
    pub fn warp_to(&mut self, unix_timestamp: i64) {
        self.unix_timestamp = unix_timestamp;
    }

    pub fn initialize(&mut self, authority: Pubkey) -> Result<()> {
        require!(self.oracle_state.is_none(), OracleError::AlreadyInitialized);

        let (_, bump) = oracle_state_address();
        let mut oracle_state = OracleState::default();
        oracle_state.initialize(authority, bump, self.unix_timestamp);
        self.oracle_state = Some(oracle_state);
        Ok(())
    }

    /// Registers `identity`, signed by `authority`. Returns false when the
    /// identity was already registered, in which case nothing changes.
    pub fn register_assessor(&mut self, authority: &Pubkey, identity: Pubkey) -> Result<bool> {
        self.require_authority(authority)?;

        let (address, bump) = assessor_address(&identity);
        let mut assessor = self.assessors.get(&address).cloned().unwrap_or_default();
        if !assessor.register(identity, bump, self.unix_timestamp)? {
            return Ok(false);
        }
        self.assessors.insert(address, assessor);
        Ok(true)
    }

    pub fn set_assessor_status(
        &mut self,
        authority: &Pubkey,
        identity: &Pubkey,
        active: bool,
    ) -> Result<()> {
        self.require_authority(authority)?;

        let (address, _) = assessor_address(identity);
        let assessor = self
            .assessors
            .get_mut(&address)
            .ok_or(OracleError::NotFound)?;
        assessor.active = active;
        Ok(())
    }

    /// Commits `commitment_hash` for `identity` and returns its index.
    pub fn commit_assessment(
        &mut self,
        identity: &Pubkey,
        commitment_hash: [u8; 32],
    ) -> Result<u64> {
        let mut oracle_state = self.oracle_state.clone().ok_or(OracleError::NotFound)?;
        let assessor = self
            .assessors
            .get(&assessor_address(identity).0)
            .ok_or(OracleError::Unauthorized)?;

        let (address, bump) = assessment_address(oracle_state.next_index);
        let mut assessment = self.assessments.get(&address).cloned().unwrap_or_default();

        let index = open_commitment(
            &mut oracle_state,
            assessor,
            &mut assessment,
            identity,
            commitment_hash,
            bump,
            self.unix_timestamp,
        )?;

        self.assessments.insert(address, assessment);
        self.oracle_state = Some(oracle_state);
        Ok(index)
    }

    pub fn reveal_assessment(
        &mut self,
        identity: &Pubkey,
        index: u64,
        score: u8,
        bias: RiskBias,
        salt: &str,
    ) -> Result<()> {
        let mut oracle_state = self.oracle_state.clone().ok_or(OracleError::NotFound)?;
        let assessment_key = assessment_address(index).0;
        let mut assessment = self
            .assessments
            .get(&assessment_key)
            .cloned()
            .ok_or(OracleError::NotFound)?;
        let assessor_key = assessor_address(identity).0;
        let mut assessor = self
            .assessors
            .get(&assessor_key)
            .cloned()
            .ok_or(OracleError::Unauthorized)?;

        finalize_reveal(
            &mut oracle_state,
            &mut assessor,
            &mut assessment,
            identity,
            score,
            bias,
            salt,
            self.unix_timestamp,
        )?;

        self.assessments.insert(assessment_key, assessment);
        self.assessors.insert(assessor_key, assessor);
        self.oracle_state = Some(oracle_state);
        Ok(())
    }

    pub fn query_assessment(&self, index: u64) -> Result<RiskAssessment> {
        self.assessments
            .get(&assessment_address(index).0)
            .cloned()
            .ok_or_else(|| error!(OracleError::NotFound))
    }

    pub fn get_latest(&self) -> Result<OracleState> {
        self.oracle_state
            .clone()
            .ok_or_else(|| error!(OracleError::NotFound))
    }

    pub fn assessor(&self, identity: &Pubkey) -> Result<Assessor> {
        self.assessors
            .get(&assessor_address(identity).0)
            .cloned()
            .ok_or_else(|| error!(OracleError::NotFound))
    }

    fn require_authority(&self, signer: &Pubkey) -> Result<()> {
        let oracle_state = self.oracle_state.as_ref().ok_or(OracleError::NotFound)?;
        require_keys_eq!(oracle_state.authority, *signer, OracleError::Unauthorized);
        Ok(())
    }
}
