//! Client-side derivation of the program's record addresses.

use anchor_lang::prelude::*;

use crate::constants::{ASSESSMENT_SEED, ASSESSOR_SEED, ORACLE_STATE_SEED};

pub fn oracle_state_address() -> (Pubkey, u8) {
    Pubkey::find_program_address(&[ORACLE_STATE_SEED], &crate::ID)
}

pub fn assessor_address(identity: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[ASSESSOR_SEED, identity.as_ref()], &crate::ID)
}

/// Assessment slot `index`; the seed is the index as 8 little-endian bytes.
pub fn assessment_address(index: u64) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[ASSESSMENT_SEED, &index.to_le_bytes()], &crate::ID)
}
