//
// Copyright (c) 2024, 2025 Oracle and/or its affiliates. All rights reserved.
//
// Licensed under the Universal Permissive License v 1.0 as shown at
//  https://oss.oracle.com/licenses/upl/
//
use std::collections::HashMap;

use crate::attribute_value::AttributeValue;
use crate::capacity::ConsumedCapacity;
use crate::enums::{ComparisonOperator, ConditionalOperator, ReturnConsumedCapacity, Select};
use crate::types::ValueObject;
use crate::wire_enum::SymbolicField;

/// A legacy condition used by `KeyConditions`, `QueryFilter` and `ScanFilter`.
///
/// The number of values in `attribute_value_list` depends on the operator:
/// none for `NULL`/`NOT_NULL`, two for `BETWEEN`, one or more for `IN`, and
/// exactly one otherwise. The service checks this, not the client.
#[derive(Debug, Clone, Default, PartialEq, ValueObject)]
pub struct Condition {
    attribute_value_list: Option<Vec<AttributeValue>>,
    comparison_operator: Option<SymbolicField<ComparisonOperator>>,
}

impl Condition {
    pub fn of(operator: ComparisonOperator, values: Vec<AttributeValue>) -> Self {
        Condition::new()
            .with_comparison_operator(operator)
            .with_attribute_value_list(values)
    }
}

/// Input of the Query operation.
///
/// A query reads the items sharing a partition key value, from the table
/// or from one of its secondary indexes (`index_name`). Paging is driven by
/// the caller through `exclusive_start_key` and the result's
/// `last_evaluated_key`.
#[derive(Debug, Clone, Default, PartialEq, ValueObject)]
pub struct QueryRequest {
    table_name: Option<String>,
    index_name: Option<String>,
    select: Option<SymbolicField<Select>>,
    attributes_to_get: Option<Vec<String>>,
    limit: Option<i32>,
    consistent_read: Option<bool>,
    #[model(entries)]
    key_conditions: Option<HashMap<String, Condition>>,
    #[model(entries)]
    query_filter: Option<HashMap<String, Condition>>,
    conditional_operator: Option<SymbolicField<ConditionalOperator>>,
    scan_index_forward: Option<bool>,
    #[model(entries)]
    exclusive_start_key: Option<HashMap<String, AttributeValue>>,
    return_consumed_capacity: Option<SymbolicField<ReturnConsumedCapacity>>,
    projection_expression: Option<String>,
    filter_expression: Option<String>,
    key_condition_expression: Option<String>,
    #[model(entries)]
    expression_attribute_names: Option<HashMap<String, String>>,
    #[model(entries)]
    expression_attribute_values: Option<HashMap<String, AttributeValue>>,
}

#[derive(Debug, Clone, Default, PartialEq, ValueObject)]
pub struct QueryResult {
    items: Option<Vec<HashMap<String, AttributeValue>>>,
    count: Option<i32>,
    scanned_count: Option<i32>,
    last_evaluated_key: Option<HashMap<String, AttributeValue>>,
    consumed_capacity: Option<ConsumedCapacity>,
}

impl QueryResult {
    /// Returns `true` if the service has more items past this page.
    pub fn has_more(&self) -> bool {
        self.last_evaluated_key
            .as_ref()
            .map(|k| !k.is_empty())
            .unwrap_or(false)
    }
}
