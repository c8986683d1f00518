//
// Copyright (c) 2024, 2025 Oracle and/or its affiliates. All rights reserved.
//
// Licensed under the Universal Permissive License v 1.0 as shown at
//  https://oss.oracle.com/licenses/upl/
//
use std::collections::HashMap;

use crate::attribute_value::AttributeValue;
use crate::capacity::ConsumedCapacity;
use crate::enums::{ConditionalOperator, ReturnConsumedCapacity, Select};
use crate::query_request::Condition;
use crate::types::ValueObject;
use crate::wire_enum::SymbolicField;

/// Input of the Scan operation.
///
/// A parallel scan is requested by giving both `total_segments` and
/// `segment`, with `segment` in `0..total_segments`.
#[derive(Debug, Clone, Default, PartialEq, ValueObject)]
pub struct ScanRequest {
    table_name: Option<String>,
    index_name: Option<String>,
    attributes_to_get: Option<Vec<String>>,
    limit: Option<i32>,
    select: Option<SymbolicField<Select>>,
    #[model(entries)]
    scan_filter: Option<HashMap<String, Condition>>,
    conditional_operator: Option<SymbolicField<ConditionalOperator>>,
    #[model(entries)]
    exclusive_start_key: Option<HashMap<String, AttributeValue>>,
    return_consumed_capacity: Option<SymbolicField<ReturnConsumedCapacity>>,
    total_segments: Option<i32>,
    segment: Option<i32>,
    projection_expression: Option<String>,
    filter_expression: Option<String>,
    #[model(entries)]
    expression_attribute_names: Option<HashMap<String, String>>,
    #[model(entries)]
    expression_attribute_values: Option<HashMap<String, AttributeValue>>,
    consistent_read: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, ValueObject)]
pub struct ScanResult {
    items: Option<Vec<HashMap<String, AttributeValue>>>,
    count: Option<i32>,
    scanned_count: Option<i32>,
    last_evaluated_key: Option<HashMap<String, AttributeValue>>,
    consumed_capacity: Option<ConsumedCapacity>,
}
