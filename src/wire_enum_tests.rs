//
// Copyright (c) 2024, 2025 Oracle and/or its affiliates. All rights reserved.
//
// Licensed under the Universal Permissive License v 1.0 as shown at
//  https://oss.oracle.com/licenses/upl/
//
use crate::enums::*;
use crate::error::ModelErrorCode;
use crate::fault::DynamoDbFault;
use crate::wire_enum::{SymbolicField, WireEnum};
use rand::distributions::Alphanumeric;
use rand::Rng;
use std::collections::HashSet;
use std::error::Error;
use std::str::FromStr;

fn check_vocabulary<E: WireEnum>() -> Result<(), Box<dyn Error>> {
    let mut seen = HashSet::new();
    for v in E::values() {
        let wire = v.to_wire_value();
        assert!(!wire.is_empty(), "{}: empty wire value", E::NAME);
        assert!(seen.insert(wire), "{}: duplicate wire value {}", E::NAME, wire);
        assert_eq!(E::from_wire_value(wire)?, *v);
        assert!(E::is_known_wire_value(wire));
        let f = SymbolicField::from_symbol(*v);
        assert_eq!(f.as_str(), wire);
        assert_eq!(f.symbol()?, *v);
    }
    Ok(())
}

fn random_unknown<E: WireEnum>(rng: &mut impl Rng) -> String {
    loop {
        let len = rng.gen_range(1..24);
        let s: String = (0..len).map(|_| rng.sample(Alphanumeric) as char).collect();
        if !E::is_known_wire_value(&s) {
            return s;
        }
    }
}

fn check_unknown<E: WireEnum>(rng: &mut impl Rng) -> Result<(), Box<dyn Error>> {
    for _ in 0..200 {
        let raw = random_unknown::<E>(rng);
        let err = E::from_wire_value(&raw).unwrap_err();
        assert_eq!(err.code, ModelErrorCode::UnknownSymbol);

        let f: SymbolicField<E> = SymbolicField::from_raw(raw.clone());
        assert_eq!(f.as_str(), raw);
        assert!(!f.is_known());
        assert_eq!(f.known_symbol(), None);
        assert_eq!(f.symbol().unwrap_err().code, ModelErrorCode::UnknownSymbol);
        assert_eq!(String::from(f), raw);
    }
    Ok(())
}

#[test]
fn test_known_values_round_trip() -> Result<(), Box<dyn Error>> {
    check_vocabulary::<ComparisonOperator>()?;
    check_vocabulary::<ConditionalOperator>()?;
    check_vocabulary::<Select>()?;
    check_vocabulary::<ReturnConsumedCapacity>()?;
    check_vocabulary::<ReturnValue>()?;
    check_vocabulary::<ReturnItemCollectionMetrics>()?;
    check_vocabulary::<TableStatus>()?;
    check_vocabulary::<IndexStatus>()?;
    check_vocabulary::<KeyType>()?;
    check_vocabulary::<ScalarAttributeType>()?;
    check_vocabulary::<ProjectionType>()?;
    check_vocabulary::<StreamViewType>()?;
    check_vocabulary::<SSEStatus>()?;
    check_vocabulary::<SSEType>()?;
    check_vocabulary::<AttributeAction>()?;
    check_vocabulary::<ContributorInsightsAction>()?;
    check_vocabulary::<ContributorInsightsStatus>()?;
    check_vocabulary::<DynamoDbFault>()?;
    Ok(())
}

#[test]
fn test_unknown_values_are_kept() -> Result<(), Box<dyn Error>> {
    let mut rng = rand::thread_rng();
    check_unknown::<ContributorInsightsAction>(&mut rng)?;
    check_unknown::<ContributorInsightsStatus>(&mut rng)?;
    check_unknown::<TableStatus>(&mut rng)?;
    check_unknown::<ComparisonOperator>(&mut rng)?;
    check_unknown::<DynamoDbFault>(&mut rng)?;
    Ok(())
}

#[test]
fn test_empty_and_absent() {
    let err = ContributorInsightsAction::from_wire_value("").unwrap_err();
    assert_eq!(err.code, ModelErrorCode::InvalidValue);
    let err = ContributorInsightsAction::from_optional_wire_value(None).unwrap_err();
    assert_eq!(err.code, ModelErrorCode::InvalidValue);
    let err = SymbolicField::<ContributorInsightsAction>::require(None).unwrap_err();
    assert_eq!(err.code, ModelErrorCode::InvalidValue);

    // an empty raw value is stored, but strict access rejects it
    let f = SymbolicField::<TableStatus>::from_raw("");
    assert_eq!(f.as_str(), "");
    assert_eq!(f.validate().unwrap_err().code, ModelErrorCode::InvalidValue);
}

#[test]
fn test_action_vocabulary() -> Result<(), Box<dyn Error>> {
    assert_eq!(
        ContributorInsightsAction::from_wire_value("ENABLE")?,
        ContributorInsightsAction::Enable
    );
    assert_eq!(ContributorInsightsAction::Enable.to_wire_value(), "ENABLE");
    assert_eq!(
        ContributorInsightsAction::from_wire_value("PAUSE")
            .unwrap_err()
            .code,
        ModelErrorCode::UnknownSymbol
    );
    // exact, case-sensitive lookup
    assert!(ContributorInsightsAction::from_wire_value("enable").is_err());
    assert!(ContributorInsightsAction::from_wire_value(" ENABLE").is_err());
    Ok(())
}

#[test]
fn test_display_and_from_str() -> Result<(), Box<dyn Error>> {
    assert_eq!(ComparisonOperator::BeginsWith.to_string(), "BEGINS_WITH");
    assert_eq!(
        ComparisonOperator::from_str("NOT_CONTAINS")?,
        ComparisonOperator::NotContains
    );
    let parsed: Result<Select, _> = "EVERYTHING".parse();
    assert!(parsed.unwrap_err().is_unknown_symbol());
    assert_eq!(ReturnValue::NAME, "ReturnValue");
    assert_eq!(ReturnValue::values().len(), 5);
    Ok(())
}

#[test]
fn test_symbolic_field_equality() {
    let a: SymbolicField<TableStatus> = TableStatus::Active.into();
    let b: SymbolicField<TableStatus> = "ACTIVE".into();
    let c: SymbolicField<TableStatus> = String::from("ARCHIVED").into();
    assert_eq!(a, b);
    assert_ne!(a, c);
    assert!(a == TableStatus::Active);
    assert!(c == "ARCHIVED");
    assert_eq!(format!("{}", c), "ARCHIVED");
    assert_eq!(format!("{:?}", a), "\"ACTIVE\"");

    let mut set = HashSet::new();
    set.insert(a.clone());
    assert!(set.contains(&b));
}

#[test]
fn test_symbolic_fields_are_send_and_sync() {
    fn assert_send_sync<T: Send + Sync + 'static>() {}
    assert_send_sync::<SymbolicField<TableStatus>>();
    assert_send_sync::<ContributorInsightsStatus>();
}
