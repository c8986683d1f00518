//
// Copyright (c) 2024 Oracle and/or its affiliates. All rights reserved.
//
// Licensed under the Universal Permissive License v 1.0 as shown at
//  https://oss.oracle.com/licenses/upl/
//
use ddb_model_rust_sdk::types::{MapValue, ValueObject};
use ddb_model_rust_sdk::{
    wire_enum, AttributeAction, AttributeValue, AttributeValueUpdate, BatchGetItemRequest,
    BatchGetItemResult, ComparisonOperator, Condition, CreateTableResult, DynamoDbFault,
    IndexStatus, KeysAndAttributes, ModelConfig, ModelError, ModelErrorCode, QueryRequest,
    QueryResult, ReturnConsumedCapacity, Select, ServiceFault, SymbolicField, TableDescription,
    TableStatus, UnknownFieldPolicy, UpdateItemRequest,
};

use chrono::{DateTime, FixedOffset};
use std::collections::HashMap;
use std::error::Error;
use std::io::Write;

const DESCRIBE_TABLE_RESPONSE: &str = r#"{
  "TableDescription": {
    "AttributeDefinitions": [
      {"AttributeName": "Artist", "AttributeType": "S"},
      {"AttributeName": "SongTitle", "AttributeType": "S"}
    ],
    "CreationDateTime": 1507344078.125,
    "ItemCount": 0,
    "KeySchema": [
      {"AttributeName": "Artist", "KeyType": "HASH"},
      {"AttributeName": "SongTitle", "KeyType": "RANGE"}
    ],
    "GlobalSecondaryIndexes": [
      {
        "IndexName": "ByTitle",
        "IndexStatus": "REBUILDING",
        "KeySchema": [{"AttributeName": "SongTitle", "KeyType": "HASH"}],
        "Projection": {"ProjectionType": "KEYS_ONLY"},
        "ProvisionedThroughput": {"NumberOfDecreasesToday": 0, "ReadCapacityUnits": 5, "WriteCapacityUnits": 5}
      }
    ],
    "ProvisionedThroughput": {
      "NumberOfDecreasesToday": 0,
      "ReadCapacityUnits": 10,
      "WriteCapacityUnits": 5
    },
    "SSEDescription": {"Status": "ENABLED", "SSEType": "KMS", "KMSMasterKeyArn": "arn:aws:kms:key"},
    "TableArn": "arn:aws:dynamodb:us-west-2:123456789012:table/Music",
    "TableName": "Music",
    "TableSizeBytes": 0,
    "TableStatus": "CREATING",
    "TableClassSummary": {"TableClass": "STANDARD"}
  }
}"#;

fn init_tracing() {
    // Set up a tracing subscriber to see output based on RUST_LOG environment setting
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::filter::EnvFilter::from_default_env())
        .with_ansi(false)
        .compact()
        .try_init();
}

#[test]
fn describe_table_response() -> Result<(), Box<dyn Error>> {
    init_tracing();
    let json: serde_json::Value = serde_json::from_str(DESCRIBE_TABLE_RESPONSE)?;
    let res = CreateTableResult::from_json(&json)?;
    let desc = res.table_description().ok_or("missing table description")?;

    assert_eq!(desc.table_name(), Some("Music"));
    assert_eq!(desc.table_status_symbol()?, TableStatus::Creating);
    assert_eq!(desc.item_count(), Some(0));
    assert_eq!(
        desc.provisioned_throughput()
            .and_then(|p| p.read_capacity_units()),
        Some(10)
    );
    let created: DateTime<FixedOffset> = DateTime::parse_from_rfc3339("2017-10-07T02:41:18.125Z")?;
    assert_eq!(desc.creation_date_time(), Some(&created));

    let sse = desc.sse_description().ok_or("missing SSE description")?;
    assert_eq!(sse.sse_type(), Some("KMS"));
    assert_eq!(sse.kms_master_key_arn(), Some("arn:aws:kms:key"));

    // a newer index status is kept as is
    let gsi = &desc.global_secondary_indexes().ok_or("missing GSIs")?[0];
    assert_eq!(gsi.index_status(), Some("REBUILDING"));
    let err = gsi.index_status_symbol().unwrap_err();
    assert_eq!(err.code, ModelErrorCode::UnknownSymbol);
    assert_eq!(
        IndexStatus::from_wire_value_or_raw(gsi.index_status().unwrap_or_default()),
        Err("REBUILDING".to_string())
    );

    // writing it back keeps every recognized field
    let out = res.to_json();
    assert_eq!(out["TableDescription"]["GlobalSecondaryIndexes"][0]["IndexStatus"], "REBUILDING");
    assert_eq!(out["TableDescription"]["CreationDateTime"].as_f64(), Some(1507344078.125));
    assert!(out["TableDescription"].get("TableClassSummary").is_none());
    assert_eq!(CreateTableResult::from_json(&out)?, res);

    // and the same document fails in strict mode
    let strict = ModelConfig::builder().strict_symbols(true).build();
    let err = CreateTableResult::from_json_with(&json, &strict).unwrap_err();
    assert_eq!(err.code, ModelErrorCode::UnknownSymbol);
    let reject = ModelConfig::builder()
        .unknown_fields(UnknownFieldPolicy::Reject)
        .build();
    let err = CreateTableResult::from_json_with(&json, &reject).unwrap_err();
    assert_eq!(err.code, ModelErrorCode::UnknownField);
    Ok(())
}

// Falls back to the raw string for statuses newer than this client.
trait OrRaw: Sized {
    fn from_wire_value_or_raw(raw: &str) -> Result<Self, String>;
}

impl<E: ddb_model_rust_sdk::WireEnum> OrRaw for E {
    fn from_wire_value_or_raw(raw: &str) -> Result<Self, String> {
        match E::from_wire_value(raw) {
            Ok(v) => Ok(v),
            Err(e) if e.is_unknown_symbol() => Err(raw.to_string()),
            Err(e) => Err(e.to_string()),
        }
    }
}

#[test]
fn query_request_body() -> Result<(), Box<dyn Error>> {
    let mut req = QueryRequest::new()
        .with_table_name("Music")
        .with_select(Select::SpecificAttributes)
        .with_key_condition_expression("Artist = :a")
        .with_projection_expression("SongTitle")
        .with_return_consumed_capacity(ReturnConsumedCapacity::Indexes);
    req.add_expression_attribute_values_entry(":a", "No One You Know")?;
    req.add_key_conditions_entry(
        "SongTitle",
        Condition::of(
            ComparisonOperator::BeginsWith,
            vec![AttributeValue::string("Call")],
        ),
    )?;

    let body = req.to_json();
    assert_eq!(body["Select"], "SPECIFIC_ATTRIBUTES");
    assert_eq!(body["ReturnConsumedCapacity"], "INDEXES");
    assert_eq!(body["ExpressionAttributeValues"][":a"]["S"], "No One You Know");
    assert_eq!(
        body["KeyConditions"]["SongTitle"]["ComparisonOperator"],
        "BEGINS_WITH"
    );
    assert_eq!(QueryRequest::from_json(&body)?, req);

    let page = QueryResult::from_json(&serde_json::json!({
        "Count": 1,
        "ScannedCount": 3,
        "Items": [{"Artist": {"S": "No One You Know"}, "Year": {"N": "2015"}}],
        "LastEvaluatedKey": {"Artist": {"S": "No One You Know"}},
        "ConsumedCapacity": {"TableName": "Music", "CapacityUnits": 0.5}
    }))?;
    assert!(page.has_more());
    assert_eq!(page.count(), Some(1));
    let year = page.items().ok_or("no items")?[0]["Year"]
        .number_value()
        .ok_or("no number")??;
    assert_eq!(year.to_string(), "2015");
    assert_eq!(
        page.consumed_capacity().and_then(|c| c.capacity_units()),
        Some(0.5)
    );
    Ok(())
}

#[test]
fn update_and_batch_requests() -> Result<(), Box<dyn Error>> {
    let mut upd = UpdateItemRequest::new().with_table_name("Music");
    upd.add_key_entry("Artist", "Acme Band")?
        .add_attribute_updates_entry(
            "Plays",
            AttributeValueUpdate::of(AttributeValue::number(1), AttributeAction::Add),
        )?;
    let err = upd
        .add_attribute_updates_entry(
            "Plays",
            AttributeValueUpdate::of(AttributeValue::number(2), AttributeAction::Put),
        )
        .unwrap_err();
    assert_eq!(err.code, ModelErrorCode::DuplicateKey);
    assert_eq!(
        upd.attribute_updates()
            .and_then(|u| u.get("Plays"))
            .and_then(|u| u.action()),
        Some("ADD")
    );

    let mut key = HashMap::new();
    key.insert("Artist".to_string(), AttributeValue::string("Acme Band"));
    let mut keys = KeysAndAttributes::new().with_consistent_read(true);
    keys.add_key(key);
    let mut batch = BatchGetItemRequest::new();
    batch.add_request_items_entry("Music", keys.clone())?;
    assert!(batch.add_request_items_entry("Music", keys).is_err());
    let body = batch.to_json();
    assert_eq!(
        body["RequestItems"]["Music"]["Keys"][0]["Artist"]["S"],
        "Acme Band"
    );

    let res = BatchGetItemResult::from_json(&serde_json::json!({
        "Responses": {"Music": [{"Artist": {"S": "Acme Band"}}]},
        "UnprocessedKeys": {}
    }))?;
    assert_eq!(res.responses().map(|r| r["Music"].len()), Some(1));
    assert_eq!(res.unprocessed_keys().map(|u| u.len()), Some(0));
    Ok(())
}

#[test]
fn service_fault_from_response() -> Result<(), Box<dyn Error>> {
    let body = MapValue::from_json_str(
        r#"{"__type":"com.amazonaws.dynamodb.v20120810#ConditionalCheckFailedException",
            "message":"The conditional request failed"}"#,
    )?;
    let fault = ServiceFault::from_map_value(&body, 400).with_request_id("7SOV0Q9");
    assert_eq!(fault.kind()?, DynamoDbFault::ConditionalCheckFailed);
    assert_eq!(fault.message(), "The conditional request failed");

    let result: Result<(), ModelError> = Err(fault.clone().into());
    let err = result.unwrap_err();
    assert_eq!(err.code, ModelErrorCode::ServiceFault);
    assert_eq!(
        err.service_fault().map(|f| f.request_id()),
        Some(Some("7SOV0Q9"))
    );
    Ok(())
}

wire_enum! {
    /// A vocabulary declared outside the crate.
    pub enum Tier {
        Standard = "STANDARD",
        InfrequentAccess = "STANDARD_INFREQUENT_ACCESS",
    }
}

#[derive(Debug, Clone, Default, PartialEq, ValueObject)]
pub struct TableClassSummary {
    table_class: Option<SymbolicField<Tier>>,
    last_update_date_time: Option<DateTime<FixedOffset>>,
}

#[test]
fn user_defined_value_objects() -> Result<(), Box<dyn Error>> {
    let s = TableClassSummary::new().with_table_class(Tier::InfrequentAccess);
    assert_eq!(s.table_class(), Some("STANDARD_INFREQUENT_ACCESS"));
    let m = s.to_map_value();
    assert_eq!(m.get_str("TableClass"), Some("STANDARD_INFREQUENT_ACCESS"));
    assert_eq!(TableClassSummary::from_map_value(&m)?, s);

    let odd = TableClassSummary::from_map_value(&MapValue::new().str("TableClass", "GLACIER"))?;
    assert_eq!(odd.table_class(), Some("GLACIER"));
    assert!(odd.table_class_symbol().is_err());
    Ok(())
}

#[test]
fn config_from_file_and_environment() -> Result<(), Box<dyn Error>> {
    let mut file = tempfile::NamedTempFile::new()?;
    writeln!(file, "[DEFAULT]")?;
    writeln!(file, "unknown_fields = ignore")?;
    writeln!(file, "strict_symbols = false")?;
    writeln!(file)?;
    writeln!(file, "[testing]")?;
    writeln!(file, "unknown_fields = reject")?;
    writeln!(file, "strict_symbols = true")?;
    file.flush()?;
    let path = file.path().to_str().ok_or("bad temp path")?;

    let config = ModelConfig::builder().from_file(path, "DEFAULT")?.build();
    assert_eq!(config, ModelConfig::default());

    let config = ModelConfig::builder().from_file(path, "testing")?.build();
    assert_eq!(config.unknown_fields(), UnknownFieldPolicy::Reject);
    assert!(config.strict_symbols());

    let err = ModelConfig::builder()
        .from_file(path, "missing")
        .unwrap_err();
    assert_eq!(err.code, ModelErrorCode::IllegalArgument);
    let err = ModelConfig::builder()
        .from_file("/nonexistent/ddb/model_config", "DEFAULT")
        .unwrap_err();
    assert_eq!(err.code, ModelErrorCode::IllegalArgument);
    assert!(err.message.contains("error reading config file"));

    // the default file lives under the home directory
    let home = tempfile::tempdir()?;
    std::fs::create_dir(home.path().join(".ddb"))?;
    std::fs::write(
        home.path().join(".ddb").join("model_config"),
        "[DEFAULT]\nunknown_fields = reject\n",
    )?;
    let saved_home = std::env::var_os("HOME");
    std::env::set_var("HOME", home.path());
    let from_default = ModelConfig::builder().from_default_file();
    match saved_home {
        Some(h) => std::env::set_var("HOME", h),
        None => std::env::remove_var("HOME"),
    }
    let config = from_default?.build();
    assert_eq!(config.unknown_fields(), UnknownFieldPolicy::Reject);
    assert!(!config.strict_symbols());

    // this is the only test touching environment variables
    std::env::set_var("DDB_MODEL_UNKNOWN_FIELDS", "Reject");
    std::env::set_var("DDB_MODEL_STRICT_SYMBOLS", "1");
    let config = ModelConfig::builder().from_environment()?.build();
    assert_eq!(config.unknown_fields(), UnknownFieldPolicy::Reject);
    assert!(config.strict_symbols());

    std::env::set_var("DDB_MODEL_STRICT_SYMBOLS", "maybe");
    assert!(ModelConfig::builder().from_environment().is_err());
    std::env::remove_var("DDB_MODEL_UNKNOWN_FIELDS");
    std::env::remove_var("DDB_MODEL_STRICT_SYMBOLS");
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn values_cross_tasks() -> Result<(), Box<dyn Error>> {
    let json: serde_json::Value = serde_json::from_str(DESCRIBE_TABLE_RESPONSE)?;
    let res = CreateTableResult::from_json(&json)?;
    let desc: TableDescription = res
        .table_description()
        .cloned()
        .ok_or("missing table description")?;

    let mut handles = Vec::new();
    for _ in 0..8 {
        let d = desc.clone();
        handles.push(tokio::spawn(async move {
            d.table_status_symbol().map(|s| s.to_string())
        }));
    }
    for h in handles {
        assert_eq!(h.await?.map_err(|e| e.to_string())?, "CREATING");
    }

    // by reference across std threads
    let shared = &desc;
    std::thread::scope(|s| {
        for _ in 0..4 {
            s.spawn(move || assert_eq!(shared.table_name(), Some("Music")));
        }
    });
    Ok(())
}
