//
// Copyright (c) 2024 Oracle and/or its affiliates. All rights reserved.
//
// Licensed under the Universal Permissive License v 1.0 as shown at
//  https://oss.oracle.com/licenses/upl/
//

// This is an example program showing the life of a request and a response
// through the model layer. There is no network involved: the "responses"
// below are canned JSON bodies, standing in for what a transport would decode.

// To run this example:
//    cargo run --example quickstart
//
// for extra output:
//    RUST_LOG=trace cargo run --example quickstart
//
// to make decoding strict:
//    DDB_MODEL_STRICT_SYMBOLS=1 cargo run --example quickstart

use ddb_model_rust_sdk::types::ValueObject;
use ddb_model_rust_sdk::{
    user_agent, CreateTableRequest, CreateTableResult, KeyType, ModelConfig, ModelError,
    ProvisionedThroughput, PutItemRequest, ReturnValue, ScalarAttributeType, ServiceFault,
    TableStatus,
};
use std::error::Error;
use tracing::{info, warn};

const CREATE_TABLE_RESPONSE: &str = r#"{
  "TableDescription": {
    "TableName": "Music",
    "TableStatus": "CREATING",
    "CreationDateTime": 1507344078.125,
    "KeySchema": [
      {"AttributeName": "Artist", "KeyType": "HASH"},
      {"AttributeName": "SongTitle", "KeyType": "RANGE"}
    ],
    "ProvisionedThroughput": {"ReadCapacityUnits": 5, "WriteCapacityUnits": 5},
    "ItemCount": 0
  }
}"#;

const PUT_ITEM_FAILURE: &str = r#"{
  "__type": "com.amazonaws.dynamodb.v20120810#ConditionalCheckFailedException",
  "message": "The conditional request failed"
}"#;

fn main() -> Result<(), Box<dyn Error>> {
    // Set up a tracing subscriber to see output based on RUST_LOG environment setting
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::filter::EnvFilter::from_default_env())
        .with_ansi(false)
        .compact()
        .init();

    // Note: later methods called on this builder override earlier ones.
    let config = ModelConfig::builder().from_environment()?.build();
    info!("User-Agent for requests: {}", user_agent());

    // Build a CreateTable request and turn it into a JSON body
    let create = CreateTableRequest::new()
        .with_table_name("Music")
        .with_key_attribute("Artist", ScalarAttributeType::S, KeyType::Hash)
        .with_key_attribute("SongTitle", ScalarAttributeType::S, KeyType::Range)
        .with_provisioned_throughput(ProvisionedThroughput::of(5, 5));
    println!("CreateTable body: {}", create.to_json());

    // Decode the response
    let body: serde_json::Value = serde_json::from_str(CREATE_TABLE_RESPONSE)?;
    let result = CreateTableResult::from_json_with(&body, &config)?;
    if let Some(desc) = result.table_description() {
        match desc.table_status_symbol() {
            Ok(TableStatus::Active) => println!("Table is ready"),
            Ok(status) => println!("Table is not ready yet: {}", status),
            Err(e) if e.is_unknown_symbol() => {
                warn!("Unrecognized table status: {}", e);
                println!("Table status: {}", desc.table_status().unwrap_or_default());
            }
            Err(e) => return Err(e.into()),
        }
        println!("Table description: {}", desc);
    }

    // A conditional put, rejected by the service
    let mut put = PutItemRequest::new()
        .with_table_name("Music")
        .with_condition_expression("attribute_not_exists(Artist)")
        .with_return_values(ReturnValue::AllOld);
    put.add_item_entry("Artist", "No One You Know")?
        .add_item_entry("SongTitle", "Call Me Today")?;
    if let Err(e) = put.add_item_entry("Artist", "Somebody Else") {
        println!("Rejected: {}", e);
    }
    println!("PutItem body: {}", put.to_json());

    let fault = ServiceFault::from_json_body(PUT_ITEM_FAILURE, 400)?.with_request_id("7SOV0Q9");
    let err: ModelError = fault.into();
    if let Some(f) = err.service_fault() {
        println!(
            "PutItem failed: code={} throttling={} ({})",
            f.error_code(),
            f.is_throttling(),
            f
        );
    }

    Ok(())
}
