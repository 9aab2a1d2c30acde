//! Integration tests for validation module
//!
//! Exercises the validator the way domain types use it: nested objects,
//! reusable field validators and merged error sets.

use servdesk_common::validation::{
    FieldValidator, RangeValidator, StringValidator, ValidationError, Validator,
};

struct Tier {
    trigger: u8,
}

struct Ladder {
    name: String,
    tiers: Vec<Tier>,
}

fn validate_ladder(ladder: &Ladder) -> Result<(), ValidationError> {
    let mut validator = Validator::new();
    validator.validate_field("name", &ladder.name, &StringValidator::new().not_empty());
    validator.validate_non_empty_collection("tiers", &ladder.tiers);
    for (index, tier) in ladder.tiers.iter().enumerate() {
        validator.validate_nested(&format!("tiers[{}]", index), |v| {
            v.validate_field("trigger", &tier.trigger, &RangeValidator::new(1, 100));
        });
    }
    for pair in ladder.tiers.windows(2) {
        validator.validate_less_than("tiers", pair[0].trigger, pair[1].trigger, "next tier");
    }
    validator.finalize()
}

#[test]
fn valid_structure_passes() {
    let ladder =
        Ladder { name: "default".into(), tiers: vec![Tier { trigger: 50 }, Tier { trigger: 75 }] };
    assert!(validate_ladder(&ladder).is_ok());
}

#[test]
fn every_problem_is_reported_with_its_path() {
    let ladder =
        Ladder { name: "  ".into(), tiers: vec![Tier { trigger: 80 }, Tier { trigger: 0 }] };

    let err = validate_ladder(&ladder).unwrap_err();
    let fields: Vec<&str> = err.errors.iter().map(|e| e.field.as_str()).collect();
    assert_eq!(fields, vec!["name", "tiers[1].trigger", "tiers"]);
}

#[test]
fn empty_collection_is_reported() {
    let ladder = Ladder { name: "x".into(), tiers: vec![] };
    let err = validate_ladder(&ladder).unwrap_err();
    assert_eq!(err.field_errors("tiers").len(), 1);
    assert_eq!(err.errors[0].message, "must contain at least 1 item");
}

#[test]
fn validators_are_usable_standalone() {
    let range = RangeValidator::empty().max(60u32);
    assert!(range.validate(&60).is_ok());
    assert!(range.validate(&61).is_err());
}

#[test]
fn field_errors_serialize_as_plain_objects() {
    let err = ValidationError::field("priorities.critical.responseMinutes", "must be positive");
    let json = serde_json::to_value(&err.errors).unwrap();
    assert_eq!(
        json,
        serde_json::json!([
            { "field": "priorities.critical.responseMinutes", "message": "must be positive" }
        ])
    );
}
