//
// Copyright (c) 2024, 2025 Oracle and/or its affiliates. All rights reserved.
//
// Licensed under the Universal Permissive License v 1.0 as shown at
//  https://oss.oracle.com/licenses/upl/
//
//! DynamoDB model layer for Rust
//!
//! This crate is the data layer of an Amazon DynamoDB client: the typed
//! value objects used for requests and responses, the server-defined
//! vocabularies carried in them, and the faults the service reports. It does
//! not send anything over the network. A transport builds a request value,
//! converts it with [`ValueObject::to_map_value()`](types::ValueObject::to_map_value())
//! (or [`to_json()`](types::ValueObject::to_json())), sends it, and decodes the
//! response back with [`ValueObject::from_map_value()`](types::ValueObject::from_map_value())
//! or, on failure, with [`ServiceFault::from_map_value()`].
//!
//! ## Simple Example
//! ```
//! use ddb_model_rust_sdk::{AttributeValue, GetItemRequest, ReturnConsumedCapacity};
//! use ddb_model_rust_sdk::types::ValueObject;
//! use std::error::Error;
//!
//! fn main() -> Result<(), Box<dyn Error>> {
//!     let mut req = GetItemRequest::new()
//!         .with_table_name("Music")
//!         .with_consistent_read(true)
//!         .with_return_consumed_capacity(ReturnConsumedCapacity::Total);
//!     req.add_key_entry("Artist", "No One You Know")?
//!         .add_key_entry("SongTitle", "Call Me Today")?;
//!
//!     let body = req.to_json();
//!     assert_eq!(body["TableName"], "Music");
//!     assert_eq!(body["ReturnConsumedCapacity"], "TOTAL");
//!     assert_eq!(body["Key"]["Artist"]["S"], "No One You Know");
//!     Ok(())
//! }
//! ```
//!
//! ## Symbolic fields
//!
//! Many fields hold a value from a vocabulary the service owns, such as
//! [`TableStatus`] or [`ComparisonOperator`]. The service may add values at
//! any time, so these fields are stored as [`SymbolicField`]: the raw wire
//! string, tagged with its vocabulary. Each such field `f` on a value object
//! has two accessors:
//!
//! - `f()` returns the raw string and never fails
//! - `f_symbol()` returns the typed value, and fails with
//!   [`ModelErrorCode::UnknownSymbol`] if the string is not part of the
//!   vocabulary compiled into this client, or with
//!   [`ModelErrorCode::InvalidValue`] if the field is absent
//!
//! ```
//! use ddb_model_rust_sdk::{ModelErrorCode, TableDescription, TableStatus};
//!
//! let known = TableDescription::new().with_table_status(TableStatus::Active);
//! assert_eq!(known.table_status(), Some("ACTIVE"));
//! assert_eq!(known.table_status_symbol().unwrap(), TableStatus::Active);
//!
//! let newer = TableDescription::new().with_table_status("ARCHIVING");
//! assert_eq!(newer.table_status(), Some("ARCHIVING"));
//! assert_eq!(newer.table_status_symbol().unwrap_err().code, ModelErrorCode::UnknownSymbol);
//! ```
//!
//! Applications can declare vocabularies of their own with [`wire_enum!`].
//!
//! ## Value objects
//!
//! Every field of a value object is optional, and absence is kept as is:
//! an absent list and an empty list are different values, both in memory and
//! in the decoded map. Two value objects are equal when every field is equal.
//! Value objects are declared with `#[derive(ValueObject)]`; see
//! [`types::ValueObject`].
//!
//! Keyed collection fields of requests (`Key`, `Item`,
//! `ExpressionAttributeValues`, ...) have an `add_*_entry()` method that
//! rejects a key given twice with [`ModelErrorCode::DuplicateKey`], leaving
//! the collection as it was.
//!
//! ## Configuring decoding
//!
//! Decoding is lenient by default. A [`ModelConfig`] can make it reject
//! unrecognized fields, or require every symbolic field to hold a known
//! value. It can be built in code, from the environment
//! (`DDB_MODEL_UNKNOWN_FIELDS`, `DDB_MODEL_STRICT_SYMBOLS`), or from a profile
//! of an ini file (by default `~/.ddb/model_config`). See [`ModelConfigBuilder`].
//!
//! ## Logging
//!
//! This crate logs through [tracing](https://crates.io/crates/tracing). Skipped
//! fields are reported at `trace` level and configuration sources at `debug`
//! level.
//!
//! ## License
//!
//! Copyright (C) 2024, 2025 Oracle and/or its affiliates. All rights reserved.
//!
//! This SDK is licensed under the Universal Permissive License 1.0.
//!

extern crate self as ddb_model_rust_sdk;

pub(crate) mod attribute_value;
pub use crate::attribute_value::AttributeValue;

pub(crate) mod batch_get_item_request;
pub use crate::batch_get_item_request::{
    BatchGetItemRequest, BatchGetItemResult, KeysAndAttributes,
};

pub(crate) mod capacity;
pub use crate::capacity::{Capacity, ConsumedCapacity, ItemCollectionMetrics};

pub(crate) mod config;
pub use crate::config::{ModelConfig, ModelConfigBuilder, UnknownFieldPolicy};

pub(crate) mod contributor_insights_request;
pub use crate::contributor_insights_request::{
    DescribeContributorInsightsRequest, DescribeContributorInsightsResult, FailureException,
    UpdateContributorInsightsRequest, UpdateContributorInsightsResult,
};

pub(crate) mod create_table_request;
pub use crate::create_table_request::{CreateTableRequest, CreateTableResult};

pub(crate) mod enums;
pub use crate::enums::{
    AttributeAction, ComparisonOperator, ConditionalOperator, ContributorInsightsAction,
    ContributorInsightsStatus, IndexStatus, KeyType, ProjectionType, ReturnConsumedCapacity,
    ReturnItemCollectionMetrics, ReturnValue, SSEStatus, SSEType, ScalarAttributeType, Select,
    StreamViewType, TableStatus,
};

pub(crate) mod error;
pub use crate::error::{sdk_version, user_agent, ModelError, ModelErrorCode};

pub(crate) mod fault;
pub use crate::fault::{DynamoDbFault, ErrorType, ServiceFault};

pub(crate) mod file_utils;
pub(crate) mod get_item_request;
pub use crate::get_item_request::{GetItemRequest, GetItemResult};


pub(crate) mod put_item_request;
pub use crate::put_item_request::{ExpectedAttributeValue, PutItemRequest, PutItemResult};

pub(crate) mod query_request;
pub use crate::query_request::{Condition, QueryRequest, QueryResult};

pub(crate) mod scan_request;
pub use crate::scan_request::{ScanRequest, ScanResult};

pub(crate) mod table_types;
pub use crate::table_types::{
    AttributeDefinition, GlobalSecondaryIndex, GlobalSecondaryIndexDescription,
    KeySchemaElement, LocalSecondaryIndex, LocalSecondaryIndexDescription, Projection,
    ProvisionedThroughput, ProvisionedThroughputDescription, RestoreSummary, SSEDescription,
    StreamSpecification, TableDescription,
};

pub mod types;
pub use crate::types::{Blob, ToFieldValue};

pub(crate) mod update_item_request;
pub use crate::update_item_request::{AttributeValueUpdate, UpdateItemRequest, UpdateItemResult};

#[cfg(test)]
pub(crate) mod value_object_tests;

pub(crate) mod wire_enum;
pub use crate::wire_enum::{SymbolicField, WireEnum};
#[cfg(test)]
pub(crate) mod wire_enum_tests;
