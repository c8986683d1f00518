//
// Copyright (c) 2024, 2025 Oracle and/or its affiliates. All rights reserved.
//
// Licensed under the Universal Permissive License v 1.0 as shown at
//  https://oss.oracle.com/licenses/upl/
//
use std::collections::HashMap;

use crate::attribute_value::AttributeValue;
use crate::capacity::{ConsumedCapacity, ItemCollectionMetrics};
use crate::enums::{
    ComparisonOperator, ConditionalOperator, ReturnConsumedCapacity,
    ReturnItemCollectionMetrics, ReturnValue,
};
use crate::types::ValueObject;
use crate::wire_enum::SymbolicField;

/// A legacy condition on the current value of an attribute, checked before a write.
#[derive(Debug, Clone, Default, PartialEq, ValueObject)]
pub struct ExpectedAttributeValue {
    value: Option<AttributeValue>,
    exists: Option<bool>,
    comparison_operator: Option<SymbolicField<ComparisonOperator>>,
    attribute_value_list: Option<Vec<AttributeValue>>,
}

/// Input of the PutItem operation.
///
/// The item replaces any existing item with the same primary key, unless
/// `condition_expression` (or the legacy `expected` map) says otherwise.
#[derive(Debug, Clone, Default, PartialEq, ValueObject)]
pub struct PutItemRequest {
    table_name: Option<String>,
    #[model(entries)]
    item: Option<HashMap<String, AttributeValue>>,
    #[model(entries)]
    expected: Option<HashMap<String, ExpectedAttributeValue>>,
    return_values: Option<SymbolicField<ReturnValue>>,
    return_consumed_capacity: Option<SymbolicField<ReturnConsumedCapacity>>,
    return_item_collection_metrics: Option<SymbolicField<ReturnItemCollectionMetrics>>,
    conditional_operator: Option<SymbolicField<ConditionalOperator>>,
    condition_expression: Option<String>,
    #[model(entries)]
    expression_attribute_names: Option<HashMap<String, String>>,
    #[model(entries)]
    expression_attribute_values: Option<HashMap<String, AttributeValue>>,
}

#[derive(Debug, Clone, Default, PartialEq, ValueObject)]
pub struct PutItemResult {
    attributes: Option<HashMap<String, AttributeValue>>,
    consumed_capacity: Option<ConsumedCapacity>,
    item_collection_metrics: Option<ItemCollectionMetrics>,
}
