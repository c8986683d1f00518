//
// Copyright (c) 2024, 2025 Oracle and/or its affiliates. All rights reserved.
//
// Licensed under the Universal Permissive License v 1.0 as shown at
//  https://oss.oracle.com/licenses/upl/
//
use crate::config::{ModelConfig, UnknownFieldPolicy};
use crate::error::ModelErrorCode;
use crate::types::{FieldValue, MapValue, ValueObject};
use crate::*;
use std::collections::HashMap;
use std::error::Error;

#[test]
fn test_absence_and_equality() -> Result<(), Box<dyn Error>> {
    let a = QueryRequest::new()
        .with_table_name("Music")
        .with_limit(10)
        .with_scan_index_forward(false);
    let b = QueryRequest::new()
        .with_table_name("Music")
        .with_limit(10)
        .with_scan_index_forward(false);
    assert_eq!(a, b);
    assert_ne!(a, b.clone().with_limit(11));
    assert_ne!(a, b.clone().with_index_name("ByYear"));

    // absent is not the same as empty
    let absent = QueryRequest::new();
    let empty = QueryRequest::new().with_attributes_to_get(Vec::<String>::new());
    assert_ne!(absent, empty);
    assert_eq!(absent.attributes_to_get(), None);
    assert_eq!(empty.attributes_to_get(), Some(&[][..]));

    // set_* clears a field
    let mut c = a.clone();
    c.set_limit(None);
    assert_eq!(c.limit(), None);
    assert_ne!(a, c);
    Ok(())
}

#[test]
fn test_map_round_trip_keeps_absence() -> Result<(), Box<dyn Error>> {
    let req = ScanRequest::new()
        .with_table_name("Music")
        .with_attributes_to_get(Vec::<String>::new())
        .with_total_segments(4)
        .with_segment(1);
    let m = req.to_map_value();
    assert_eq!(m.len(), 4);
    assert_eq!(m.get_array("AttributesToGet").map(|a| a.len()), Some(0));
    assert!(!m.contains_key("Limit"));

    let back = ScanRequest::from_map_value(&m)?;
    assert_eq!(back, req);
    assert_eq!(back.attributes_to_get().map(|a| a.len()), Some(0));
    assert_eq!(back.limit(), None);
    Ok(())
}

#[test]
fn test_null_is_absent() -> Result<(), Box<dyn Error>> {
    let m = MapValue::new()
        .str("TableName", "Music")
        .column("IndexName", FieldValue::Null);
    let req = QueryRequest::from_map_value(&m)?;
    assert_eq!(req.table_name(), Some("Music"));
    assert_eq!(req.index_name(), None);
    Ok(())
}

#[test]
fn test_duplicate_keys() -> Result<(), Box<dyn Error>> {
    let mut req = PutItemRequest::new().with_table_name("Music");
    req.add_item_entry("Artist", "No One You Know")?
        .add_item_entry("SongTitle", "Call Me Today")?;
    let err = req
        .add_item_entry("Artist", "Somebody Else")
        .unwrap_err();
    assert_eq!(err.code, ModelErrorCode::DuplicateKey);
    assert!(err.message.contains("Duplicated keys (Artist) are provided."));
    assert!(err.message.starts_with("PutItemRequest.Item: "));

    // prior contents are intact
    let item = req.item().ok_or("item missing")?;
    assert_eq!(item.len(), 2);
    assert_eq!(item["Artist"].s(), Some("No One You Know"));

    req.clear_item_entries();
    assert_eq!(req.item(), None);
    req.add_item_entry("Artist", "Somebody Else")?;
    assert_eq!(req.item().map(|i| i.len()), Some(1));

    let mut names = UpdateItemRequest::new();
    names.add_expression_attribute_names_entry("#y", "Year")?;
    assert_eq!(
        names
            .add_expression_attribute_names_entry("#y", "Yr")
            .unwrap_err()
            .code,
        ModelErrorCode::DuplicateKey
    );
    assert_eq!(
        names
            .expression_attribute_names()
            .and_then(|n| n.get("#y"))
            .map(|s| s.as_str()),
        Some("Year")
    );
    Ok(())
}

#[test]
fn test_insights_status_accessors() -> Result<(), Box<dyn Error>> {
    let m = MapValue::new()
        .str("TableName", "Music")
        .str("ContributorInsightsStatus", "FAILED");
    let res = DescribeContributorInsightsResult::from_map_value(&m)?;
    assert_eq!(res.contributor_insights_status(), Some("FAILED"));
    assert_eq!(
        res.contributor_insights_status_symbol()?,
        ContributorInsightsStatus::Failed
    );

    let absent = DescribeContributorInsightsResult::new();
    let err = absent.contributor_insights_status_symbol().unwrap_err();
    assert_eq!(err.code, ModelErrorCode::InvalidValue);
    Ok(())
}

#[test]
fn test_unknown_symbols_lenient_and_strict() -> Result<(), Box<dyn Error>> {
    let m = MapValue::new()
        .str("TableName", "Music")
        .str("TableStatus", "ARCHIVING");

    // lenient: kept and written back unchanged
    let desc = TableDescription::from_map_value(&m)?;
    assert_eq!(desc.table_status(), Some("ARCHIVING"));
    assert!(desc.table_status_symbol().unwrap_err().is_unknown_symbol());
    assert_eq!(desc.to_map_value(), m);

    // strict: rejected while decoding
    let strict = ModelConfig::builder().strict_symbols(true).build();
    let err = TableDescription::from_map_value_with(&m, &strict).unwrap_err();
    assert_eq!(err.code, ModelErrorCode::UnknownSymbol);
    assert!(err.message.starts_with("TableDescription.TableStatus: "));

    // a field marked strict is validated even with the default config
    let m = MapValue::new()
        .str("TableName", "Music")
        .str("ContributorInsightsAction", "PAUSE");
    let err = UpdateContributorInsightsRequest::from_map_value(&m).unwrap_err();
    assert_eq!(err.code, ModelErrorCode::UnknownSymbol);
    let m = MapValue::new().str("ContributorInsightsAction", "DISABLE");
    let req = UpdateContributorInsightsRequest::from_map_value(&m)?;
    assert_eq!(
        req.contributor_insights_action_symbol()?,
        ContributorInsightsAction::Disable
    );
    Ok(())
}

#[test]
fn test_strict_symbols_reach_nested_values() -> Result<(), Box<dyn Error>> {
    let json = serde_json::json!({
        "TableName": "Music",
        "KeySchema": [
            {"AttributeName": "Artist", "KeyType": "HASH"},
            {"AttributeName": "SongTitle", "KeyType": "SHARD"}
        ]
    });
    let desc = TableDescription::from_json(&json)?;
    assert_eq!(desc.key_schema().map(|k| k.len()), Some(2));

    let strict = ModelConfig::builder().strict_symbols(true).build();
    let err = TableDescription::from_json_with(&json, &strict).unwrap_err();
    assert_eq!(err.code, ModelErrorCode::UnknownSymbol);
    assert!(err.message.starts_with("TableDescription.KeySchema: [1]: KeySchemaElement.KeyType: "));
    Ok(())
}

#[test]
fn test_unknown_fields() -> Result<(), Box<dyn Error>> {
    let m = MapValue::new()
        .str("TableName", "Music")
        .str("BillingModeSummary", "PAY_PER_REQUEST");
    let desc = TableDescription::from_map_value(&m)?;
    assert_eq!(desc.table_name(), Some("Music"));
    // unrecognized fields are not carried
    assert!(!desc.to_map_value().contains_key("BillingModeSummary"));

    let reject = ModelConfig::builder()
        .unknown_fields(UnknownFieldPolicy::Reject)
        .build();
    let err = TableDescription::from_map_value_with(&m, &reject).unwrap_err();
    assert_eq!(err.code, ModelErrorCode::UnknownField);
    assert!(err.message.contains("BillingModeSummary"));
    Ok(())
}

#[test]
fn test_wrong_field_type() {
    let m = MapValue::new().i32("TableName", 5);
    let err = CreateTableRequest::from_map_value(&m).unwrap_err();
    assert_eq!(err.code, ModelErrorCode::IllegalArgument);
    assert!(err.message.starts_with("CreateTableRequest.TableName: "));

    let m = MapValue::new().str("ProvisionedThroughput", "lots");
    let err = CreateTableRequest::from_map_value(&m).unwrap_err();
    assert_eq!(err.code, ModelErrorCode::IllegalArgument);
}

#[test]
fn test_attribute_values() -> Result<(), Box<dyn Error>> {
    let mut nested = HashMap::new();
    nested.insert("inner".to_string(), AttributeValue::boolean(true));
    let av = AttributeValue::list(vec![
        AttributeValue::string("a"),
        AttributeValue::number(1.5),
        AttributeValue::binary(vec![1u8, 2, 3]),
        AttributeValue::null(),
        AttributeValue::map(nested),
        AttributeValue::string_set(["x", "y"]),
        AttributeValue::number_set([1, 2]),
    ]);
    let json = av.to_json();
    assert_eq!(json["L"][0]["S"], "a");
    assert_eq!(json["L"][1]["N"], "1.5");
    assert_eq!(json["L"][2]["B"], "AQID");
    assert_eq!(json["L"][3]["NULL"], true);
    assert_eq!(json["L"][4]["M"]["inner"]["BOOL"], true);
    assert_eq!(json["L"][5]["SS"][1], "y");
    assert_eq!(json["L"][6]["NS"][0], "1");

    let back = AttributeValue::from_json(&json)?;
    assert_eq!(back, av);
    let l = back.l().ok_or("list missing")?;
    assert!(l[3].is_null());
    assert_eq!(l[2].b().map(|b| b.data.clone()), Some(vec![1, 2, 3]));
    assert_eq!(
        l[1].number_value().ok_or("number missing")??.to_string(),
        "1.5"
    );
    Ok(())
}

#[test]
fn test_display() {
    let ks = KeySchemaElement::of("Artist", KeyType::Hash);
    assert_eq!(
        ks.to_string(),
        "{AttributeName: \"Artist\", KeyType: \"HASH\"}"
    );
    assert_eq!(ProvisionedThroughput::new().to_string(), "{}");
    assert_eq!(
        ProvisionedThroughput::of(5, 10).to_string(),
        "{ReadCapacityUnits: 5, WriteCapacityUnits: 10}"
    );
}

#[test]
fn test_wire_names() {
    assert_eq!(
        SSEDescription::FIELD_NAMES,
        &["Status", "SSEType", "KMSMasterKeyArn"]
    );
    assert!(TableDescription::FIELD_NAMES.contains(&"SSEDescription"));
    assert!(AttributeValue::FIELD_NAMES.contains(&"NULL"));
    assert_eq!(GetItemRequest::TYPE_NAME, "GetItemRequest");
}

#[test]
fn test_create_table_helpers() -> Result<(), Box<dyn Error>> {
    let req = CreateTableRequest::new()
        .with_table_name("Music")
        .with_key_attribute("Artist", ScalarAttributeType::S, KeyType::Hash)
        .with_key_attribute("SongTitle", ScalarAttributeType::S, KeyType::Range)
        .with_provisioned_throughput(ProvisionedThroughput::of(5, 5))
        .with_stream_specification(
            StreamSpecification::new()
                .with_stream_enabled(true)
                .with_stream_view_type(StreamViewType::NewAndOldImages),
        );
    let json = req.to_json();
    assert_eq!(json["KeySchema"][1]["KeyType"], "RANGE");
    assert_eq!(json["AttributeDefinitions"][0]["AttributeType"], "S");
    assert_eq!(json["ProvisionedThroughput"]["ReadCapacityUnits"], 5);
    assert_eq!(
        json["StreamSpecification"]["StreamViewType"],
        "NEW_AND_OLD_IMAGES"
    );
    assert_eq!(CreateTableRequest::from_json(&json)?, req);
    Ok(())
}

#[test]
fn test_timestamp_precision_survives_json() -> Result<(), Box<dyn Error>> {
    let nanos = chrono::DateTime::parse_from_rfc3339("2017-10-07T02:41:18.000000500Z")?;
    let summary = RestoreSummary::new()
        .with_source_table_arn("arn:aws:dynamodb:us-west-2:123456789012:table/Music")
        .with_restore_date_time(nanos)
        .with_restore_in_progress(false);
    let json = summary.to_json();
    assert_eq!(json["RestoreDateTime"], "2017-10-07T02:41:18.000000500Z");
    assert_eq!(RestoreSummary::from_json(&json)?, summary);

    // microsecond values stay epoch seconds
    let micros = chrono::DateTime::parse_from_rfc3339("2017-10-07T02:41:18.125Z")?;
    let summary = summary.with_restore_date_time(micros);
    let json = summary.to_json();
    assert_eq!(json["RestoreDateTime"].as_f64(), Some(1507344078.125));
    assert_eq!(RestoreSummary::from_json(&json)?, summary);

    let m = MapValue::new().str("RestoreDateTime", "yesterday");
    let err = RestoreSummary::from_map_value(&m).unwrap_err();
    assert_eq!(err.code, ModelErrorCode::IllegalArgument);
    assert!(err.message.starts_with("RestoreSummary.RestoreDateTime: "));
    assert!(err.message.contains("invalid datetime value"));
    Ok(())
}

#[test]
fn test_non_finite_doubles_stay_present() -> Result<(), Box<dyn Error>> {
    let c = Capacity::new()
        .with_capacity_units(f64::NAN)
        .with_read_capacity_units(f64::INFINITY)
        .with_write_capacity_units(f64::NEG_INFINITY);
    let json = c.to_json();
    assert_eq!(json["CapacityUnits"], "NaN");
    assert_eq!(json["ReadCapacityUnits"], "Infinity");
    assert_eq!(json["WriteCapacityUnits"], "-Infinity");

    let back = Capacity::from_json(&json)?;
    assert!(back.capacity_units().ok_or("capacity units missing")?.is_nan());
    assert_eq!(back.read_capacity_units(), Some(f64::INFINITY));
    assert_eq!(back.write_capacity_units(), Some(f64::NEG_INFINITY));

    // other strings are still the wrong type
    let m = MapValue::new().str("CapacityUnits", "lots");
    assert_eq!(
        Capacity::from_map_value(&m).unwrap_err().code,
        ModelErrorCode::IllegalArgument
    );
    Ok(())
}
