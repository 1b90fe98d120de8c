//! Commitment hashing shared by committers and the on-chain verifier.
//!
//! The preimage is `"{score}{\"{Variant}\"}{salt}"`, e.g. `43{"Neutral"}test_salt_123`,
//! hashed with SHA-256. Stored commitments depend on this exact byte layout.

use constant_time_eq::constant_time_eq_32;
use solana_sha256_hasher::hash;

use crate::state::RiskBias;

/// Canonical string that is hashed for a commitment.
pub fn commitment_preimage(score: u8, bias: RiskBias, salt: &str) -> String {
    format!("{}{{\"{}\"}}{}", score, bias.variant_name(), salt)
}

/// SHA-256 digest an assessor commits to before revealing `(score, bias, salt)`.
pub fn commitment_hash(score: u8, bias: RiskBias, salt: &str) -> [u8; 32] {
    hash(commitment_preimage(score, bias, salt).as_bytes()).to_bytes()
}

/// Recomputes the digest and compares it to `expected` in constant time.
pub fn verify_commitment(expected: &[u8; 32], score: u8, bias: RiskBias, salt: &str) -> bool {
    constant_time_eq_32(&commitment_hash(score, bias, salt), expected)
}

#[cfg(test)]
mod tests {
    use super::*;

    const NEUTRAL_43_HASH: [u8; 32] = [
        0x6b, 0xf0, 0x65, 0x82, 0xa6, 0x23, 0x14, 0x44, 0xe5, 0xd7, 0x85, 0x0a, 0x56, 0x5b, 0xcf,
        0xdb, 0xe7, 0xd9, 0xfe, 0x0d, 0x00, 0xbb, 0xb3, 0xf3, 0x12, 0xa0, 0x73, 0xa7, 0x93, 0x82,
        0x10, 0xa9,
    ];

    #[test]
    fn preimage_quotes_bias_variant_in_braces() {
        assert_eq!(
            commitment_preimage(43, RiskBias::Neutral, "test_salt_123"),
            r#"43{"Neutral"}test_salt_123"#
        );
        assert_eq!(commitment_preimage(0, RiskBias::RiskOn, ""), r#"0{"RiskOn"}"#);
        assert_eq!(commitment_preimage(100, RiskBias::RiskOff, "x"), r#"100{"RiskOff"}x"#);
    }

    #[test]
    fn hash_matches_known_vector() {
        assert_eq!(
            commitment_hash(43, RiskBias::Neutral, "test_salt_123"),
            NEUTRAL_43_HASH
        );
    }

    #[test]
    fn verify_rejects_any_changed_field() {
        let committed = commitment_hash(75, RiskBias::RiskOff, "correct_salt");

        assert!(verify_commitment(&committed, 75, RiskBias::RiskOff, "correct_salt"));
        assert!(!verify_commitment(&committed, 75, RiskBias::RiskOff, "correct_salx"));
        assert!(!verify_commitment(&committed, 76, RiskBias::RiskOff, "correct_salt"));
        assert!(!verify_commitment(&committed, 75, RiskBias::Neutral, "correct_salt"));
        assert!(!verify_commitment(&committed, 75, RiskBias::RiskOff, "wrong_salt"));
    }

    #[test]
    fn score_and_salt_boundary_is_not_ambiguous_across_bias() {
        // "1" + "23..." and "12" + "3..." differ because the bias sits between them.
        assert_ne!(
            commitment_hash(1, RiskBias::Neutral, "23"),
            commitment_hash(12, RiskBias::Neutral, "3")
        );
    }
}
