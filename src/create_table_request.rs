//
// Copyright (c) 2024, 2025 Oracle and/or its affiliates. All rights reserved.
//
// Licensed under the Universal Permissive License v 1.0 as shown at
//  https://oss.oracle.com/licenses/upl/
//
use crate::enums::{KeyType, ScalarAttributeType};
use crate::table_types::{
    AttributeDefinition, GlobalSecondaryIndex, KeySchemaElement, LocalSecondaryIndex,
    ProvisionedThroughput, StreamSpecification, TableDescription,
};
use crate::types::ValueObject;

/// Input of the CreateTable operation.
///
/// The table name must be unique among the tables of the account in the
/// region. Example:
///
/// ```
/// use ddb_model_rust_sdk::{CreateTableRequest, KeyType, ProvisionedThroughput, ScalarAttributeType};
///
/// let req = CreateTableRequest::new()
///     .with_table_name("Music")
///     .with_key_attribute("Artist", ScalarAttributeType::S, KeyType::Hash)
///     .with_key_attribute("SongTitle", ScalarAttributeType::S, KeyType::Range)
///     .with_provisioned_throughput(ProvisionedThroughput::of(5, 5));
/// assert_eq!(req.key_schema().map(|k| k.len()), Some(2));
/// ```
#[derive(Debug, Clone, Default, PartialEq, ValueObject)]
pub struct CreateTableRequest {
    attribute_definitions: Option<Vec<AttributeDefinition>>,
    table_name: Option<String>,
    key_schema: Option<Vec<KeySchemaElement>>,
    local_secondary_indexes: Option<Vec<LocalSecondaryIndex>>,
    global_secondary_indexes: Option<Vec<GlobalSecondaryIndex>>,
    provisioned_throughput: Option<ProvisionedThroughput>,
    stream_specification: Option<StreamSpecification>,
}

impl CreateTableRequest {
    /// Add a key attribute: its definition and its key schema element.
    pub fn with_key_attribute(
        mut self,
        name: &str,
        attribute_type: ScalarAttributeType,
        key_type: KeyType,
    ) -> Self {
        self.attribute_definitions
            .get_or_insert_with(Vec::new)
            .push(AttributeDefinition::of(name, attribute_type));
        self.key_schema
            .get_or_insert_with(Vec::new)
            .push(KeySchemaElement::of(name, key_type));
        self
    }
}

/// Output of the CreateTable operation.
#[derive(Debug, Clone, Default, PartialEq, ValueObject)]
pub struct CreateTableResult {
    table_description: Option<TableDescription>,
}
