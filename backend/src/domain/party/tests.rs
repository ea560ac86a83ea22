//! Tests for the party data model.

use rstest::rstest;

use super::*;

#[rstest]
fn party_id_rejects_empty_input() {
    let err = PartyId::new("").expect_err("empty id rejected");
    assert_eq!(err, PartyValidationError::EmptyId);
}

#[rstest]
#[case("lanfest 2026")]
#[case(" lanfest-2026")]
#[case("lanfest-2026\t")]
fn party_id_rejects_whitespace(#[case] value: &str) {
    let err = PartyId::new(value).expect_err("whitespace rejected");
    assert_eq!(err, PartyValidationError::IdContainsWhitespace);
}

#[rstest]
fn party_id_rejects_overlong_input() {
    let err = PartyId::new("x".repeat(PARTY_ID_MAX + 1)).expect_err("overlong id rejected");
    assert_eq!(err, PartyValidationError::IdTooLong { max: PARTY_ID_MAX });
}

#[rstest]
fn party_id_accepts_clean_input() {
    let id = PartyId::new("lanfest-2026").expect("valid id");
    assert_eq!(id.as_str(), "lanfest-2026");
    assert_eq!(id.to_string(), "lanfest-2026");
}

#[rstest]
fn party_exposes_components() {
    let id = PartyId::new("lanfest-2026").expect("valid id");
    let party = Party::new(id.clone(), "Lanfest 2026", false);

    assert_eq!(party.id(), &id);
    assert_eq!(party.title(), "Lanfest 2026");
    assert!(!party.is_over());
}

#[rstest]
fn party_id_serde_round_trips() {
    let id = PartyId::new("lanfest-2026").expect("valid id");
    let json = serde_json::to_string(&id).expect("serializes");
    assert_eq!(json, "\"lanfest-2026\"");

    let restored: PartyId = serde_json::from_str(&json).expect("deserializes");
    assert_eq!(restored, id);
}

#[rstest]
fn party_id_serde_rejects_invalid_input() {
    let result = serde_json::from_str::<PartyId>("\"not a slug\"");
    assert!(result.is_err());
}
