//
// Copyright (c) 2024, 2025 Oracle and/or its affiliates. All rights reserved.
//
// Licensed under the Universal Permissive License v 1.0 as shown at
//  https://oss.oracle.com/licenses/upl/
//
use chrono::{DateTime, FixedOffset};

use crate::enums::{
    IndexStatus, KeyType, ProjectionType, SSEStatus, SSEType, ScalarAttributeType,
    StreamViewType, TableStatus,
};
use crate::types::ValueObject;
use crate::wire_enum::SymbolicField;

/// Name and type of an attribute used in a table or index key schema.
#[derive(Debug, Clone, Default, PartialEq, ValueObject)]
pub struct AttributeDefinition {
    attribute_name: Option<String>,
    attribute_type: Option<SymbolicField<ScalarAttributeType>>,
}

impl AttributeDefinition {
    pub fn of(name: impl Into<String>, attribute_type: ScalarAttributeType) -> Self {
        AttributeDefinition::new()
            .with_attribute_name(name)
            .with_attribute_type(attribute_type)
    }
}

/// One element of a key schema: an attribute and its key role.
#[derive(Debug, Clone, Default, PartialEq, ValueObject)]
pub struct KeySchemaElement {
    attribute_name: Option<String>,
    key_type: Option<SymbolicField<KeyType>>,
}

impl KeySchemaElement {
    pub fn of(name: impl Into<String>, key_type: KeyType) -> Self {
        KeySchemaElement::new()
            .with_attribute_name(name)
            .with_key_type(key_type)
    }
}

/// Attributes copied from the table into a secondary index.
#[derive(Debug, Clone, Default, PartialEq, ValueObject)]
pub struct Projection {
    projection_type: Option<SymbolicField<ProjectionType>>,
    non_key_attributes: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, ValueObject)]
pub struct ProvisionedThroughput {
    read_capacity_units: Option<i64>,
    write_capacity_units: Option<i64>,
}

impl ProvisionedThroughput {
    pub fn of(read_capacity_units: i64, write_capacity_units: i64) -> Self {
        ProvisionedThroughput::new()
            .with_read_capacity_units(read_capacity_units)
            .with_write_capacity_units(write_capacity_units)
    }
}

/// Provisioned throughput of a table or index as reported by the service.
#[derive(Debug, Clone, Default, PartialEq, ValueObject)]
pub struct ProvisionedThroughputDescription {
    last_increase_date_time: Option<DateTime<FixedOffset>>,
    last_decrease_date_time: Option<DateTime<FixedOffset>>,
    number_of_decreases_today: Option<i64>,
    read_capacity_units: Option<i64>,
    write_capacity_units: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, ValueObject)]
pub struct LocalSecondaryIndex {
    index_name: Option<String>,
    key_schema: Option<Vec<KeySchemaElement>>,
    projection: Option<Projection>,
}

#[derive(Debug, Clone, Default, PartialEq, ValueObject)]
pub struct LocalSecondaryIndexDescription {
    index_name: Option<String>,
    key_schema: Option<Vec<KeySchemaElement>>,
    projection: Option<Projection>,
    index_size_bytes: Option<i64>,
    item_count: Option<i64>,
    index_arn: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, ValueObject)]
pub struct GlobalSecondaryIndex {
    index_name: Option<String>,
    key_schema: Option<Vec<KeySchemaElement>>,
    projection: Option<Projection>,
    provisioned_throughput: Option<ProvisionedThroughput>,
}

#[derive(Debug, Clone, Default, PartialEq, ValueObject)]
pub struct GlobalSecondaryIndexDescription {
    index_name: Option<String>,
    key_schema: Option<Vec<KeySchemaElement>>,
    projection: Option<Projection>,
    index_status: Option<SymbolicField<IndexStatus>>,
    backfilling: Option<bool>,
    provisioned_throughput: Option<ProvisionedThroughputDescription>,
    index_size_bytes: Option<i64>,
    item_count: Option<i64>,
    index_arn: Option<String>,
}

/// Stream settings of a table.
#[derive(Debug, Clone, Default, PartialEq, ValueObject)]
pub struct StreamSpecification {
    stream_enabled: Option<bool>,
    stream_view_type: Option<SymbolicField<StreamViewType>>,
}

/// Where a restored table came from.
#[derive(Debug, Clone, Default, PartialEq, ValueObject)]
pub struct RestoreSummary {
    source_backup_arn: Option<String>,
    source_table_arn: Option<String>,
    restore_date_time: Option<DateTime<FixedOffset>>,
    restore_in_progress: Option<bool>,
}

/// Server-side encryption state of a table.
#[derive(Debug, Clone, Default, PartialEq, ValueObject)]
pub struct SSEDescription {
    status: Option<SymbolicField<SSEStatus>>,
    #[model(name = "SSEType")]
    sse_type: Option<SymbolicField<SSEType>>,
    #[model(name = "KMSMasterKeyArn")]
    kms_master_key_arn: Option<String>,
}

/// The properties of a table, as returned by CreateTable and DescribeTable.
///
/// `table_status` is a symbolic field: a status this client does not know
/// is still available through [`table_status()`](TableDescription::table_status()),
/// while [`table_status_symbol()`](TableDescription::table_status_symbol())
/// reports it as [`UnknownSymbol`](crate::ModelErrorCode::UnknownSymbol).
#[derive(Debug, Clone, Default, PartialEq, ValueObject)]
pub struct TableDescription {
    attribute_definitions: Option<Vec<AttributeDefinition>>,
    table_name: Option<String>,
    key_schema: Option<Vec<KeySchemaElement>>,
    table_status: Option<SymbolicField<TableStatus>>,
    creation_date_time: Option<DateTime<FixedOffset>>,
    provisioned_throughput: Option<ProvisionedThroughputDescription>,
    table_size_bytes: Option<i64>,
    item_count: Option<i64>,
    table_arn: Option<String>,
    table_id: Option<String>,
    local_secondary_indexes: Option<Vec<LocalSecondaryIndexDescription>>,
    global_secondary_indexes: Option<Vec<GlobalSecondaryIndexDescription>>,
    stream_specification: Option<StreamSpecification>,
    latest_stream_label: Option<String>,
    latest_stream_arn: Option<String>,
    restore_summary: Option<RestoreSummary>,
    #[model(name = "SSEDescription")]
    sse_description: Option<SSEDescription>,
}
