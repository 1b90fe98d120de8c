use anchor_lang::error::Error;
use anchor_lang::prelude::Pubkey;
use risk_oracle::commitment::commitment_hash;
use risk_oracle::ledger::OracleLedger;
use risk_oracle::{OracleError, RiskBias};

fn initialized() -> (OracleLedger, Pubkey) {
    let mut ledger = OracleLedger::new();
    let authority = Pubkey::new_unique();
    ledger.warp_to(100);
    ledger.initialize(authority).unwrap();
    (ledger, authority)
}

#[test]
fn re_registration_keeps_counters_and_status() {
    let (mut ledger, authority) = initialized();
    let alice = Pubkey::new_unique();
    assert!(ledger.register_assessor(&authority, alice).unwrap());

    let index = ledger
        .commit_assessment(&alice, commitment_hash(40, RiskBias::Neutral, "k"))
        .unwrap();
    ledger
        .reveal_assessment(&alice, index, 40, RiskBias::Neutral, "k")
        .unwrap();

    ledger.warp_to(500);
    assert!(!ledger.register_assessor(&authority, alice).unwrap());
    let assessor = ledger.assessor(&alice).unwrap();
    assert_eq!(assessor.total_assessments, 1);
    assert!(assessor.active);
    assert_eq!(assessor.registered_at, 100);

    ledger.set_assessor_status(&authority, &alice, false).unwrap();
    assert!(!ledger.register_assessor(&authority, alice).unwrap());
    assert!(!ledger.assessor(&alice).unwrap().active);
}

#[test]
fn zero_identity_registration_is_rejected_every_time() {
    let (mut ledger, authority) = initialized();
    let zero = Pubkey::default();

    for _ in 0..2 {
        assert_eq!(
            ledger.register_assessor(&authority, zero).unwrap_err(),
            Error::from(OracleError::InvalidIdentity)
        );
    }
    assert_eq!(
        ledger.assessor(&zero).unwrap_err(),
        Error::from(OracleError::NotFound)
    );
    assert_eq!(
        ledger.commit_assessment(&zero, [3; 32]).unwrap_err(),
        Error::from(OracleError::Unauthorized)
    );
}

#[test]
fn only_authority_administers_assessors() {
    let (mut ledger, authority) = initialized();
    let mallory = Pubkey::new_unique();

    assert_eq!(
        ledger.register_assessor(&mallory, mallory).unwrap_err(),
        Error::from(OracleError::Unauthorized)
    );
    assert_eq!(
        ledger.assessor(&mallory).unwrap_err(),
        Error::from(OracleError::NotFound)
    );

    let alice = Pubkey::new_unique();
    ledger.register_assessor(&authority, alice).unwrap();
    assert_eq!(
        ledger.set_assessor_status(&mallory, &alice, false).unwrap_err(),
        Error::from(OracleError::Unauthorized)
    );
    assert!(ledger.assessor(&alice).unwrap().active);
}

#[test]
fn unregistered_identity_cannot_commit() {
    let (mut ledger, _) = initialized();
    let stranger = Pubkey::new_unique();

    assert_eq!(
        ledger.commit_assessment(&stranger, [7; 32]).unwrap_err(),
        Error::from(OracleError::Unauthorized)
    );
    assert_eq!(ledger.get_latest().unwrap().next_index, 0);
}

#[test]
fn deactivated_assessor_cannot_commit_but_can_reveal_pending() {
    let (mut ledger, authority) = initialized();
    let alice = Pubkey::new_unique();
    ledger.register_assessor(&authority, alice).unwrap();

    let pending = ledger
        .commit_assessment(&alice, commitment_hash(70, RiskBias::RiskOff, "p"))
        .unwrap();
    ledger.set_assessor_status(&authority, &alice, false).unwrap();

    assert_eq!(
        ledger
            .commit_assessment(&alice, commitment_hash(1, RiskBias::RiskOn, "q"))
            .unwrap_err(),
        Error::from(OracleError::Unauthorized)
    );
    assert_eq!(ledger.get_latest().unwrap().next_index, 1);

    ledger
        .reveal_assessment(&alice, pending, 70, RiskBias::RiskOff, "p")
        .unwrap();
    assert_eq!(ledger.get_latest().unwrap().current_score, 70);

    ledger.set_assessor_status(&authority, &alice, true).unwrap();
    assert_eq!(
        ledger
            .commit_assessment(&alice, commitment_hash(1, RiskBias::RiskOn, "q"))
            .unwrap(),
        1
    );
}
