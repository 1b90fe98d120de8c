use crate::state::RiskBias;

/// PDA seed of the oracle state singleton: ["oracle_state"].
pub const ORACLE_STATE_SEED: &[u8] = b"oracle_state";

/// PDA seed prefix of assessor records: ["assessor", identity].
pub const ASSESSOR_SEED: &[u8] = b"assessor";

/// PDA seed prefix of assessment records: ["assessment", index as u64 LE].
pub const ASSESSMENT_SEED: &[u8] = b"assessment";

/// Reading published by `initialize`, before any reveal.
pub const INITIAL_SCORE: u8 = 50;
pub const INITIAL_BIAS: RiskBias = RiskBias::Neutral;

/// Inclusive upper bound of a revealed score.
pub const MAX_SCORE: u8 = 100;
