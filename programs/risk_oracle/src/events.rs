use anchor_lang::prelude::*;

use crate::state::RiskBias;

#[event]
pub struct AssessorRegistered {
    pub assessor: Pubkey,
    pub timestamp: i64,
}

#[event]
pub struct AssessorStatusChanged {
    pub assessor: Pubkey,
    pub active: bool,
    pub timestamp: i64,
}

#[event]
pub struct AssessmentCommitted {
    pub index: u64,
    pub assessor: Pubkey,
    pub commitment_hash: [u8; 32],
    pub timestamp: i64,
}

/// Emitted on every successful reveal; carries the new current reading.
#[event]
pub struct RiskUpdated {
    pub index: u64,
    pub assessment_count: u64,
    pub score: u8,
    pub bias: RiskBias,
    pub timestamp: i64,
    pub assessor: Pubkey,
}
