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
    AttributeAction, ConditionalOperator, ReturnConsumedCapacity, ReturnItemCollectionMetrics,
    ReturnValue,
};
use crate::put_item_request::ExpectedAttributeValue;
use crate::types::ValueObject;
use crate::wire_enum::SymbolicField;

/// A legacy attribute update: the new value and how to apply it.
#[derive(Debug, Clone, Default, PartialEq, ValueObject)]
pub struct AttributeValueUpdate {
    value: Option<AttributeValue>,
    action: Option<SymbolicField<AttributeAction>>,
}

impl AttributeValueUpdate {
    pub fn of(value: impl Into<AttributeValue>, action: AttributeAction) -> Self {
        AttributeValueUpdate::new()
            .with_value(value)
            .with_action(action)
    }
}

/// Input of the UpdateItem operation.
///
/// Edits the attributes of an existing item, or adds a new item if none
/// exists with the given key.
#[derive(Debug, Clone, Default, PartialEq, ValueObject)]
pub struct UpdateItemRequest {
    table_name: Option<String>,
    #[model(entries)]
    key: Option<HashMap<String, AttributeValue>>,
    #[model(entries)]
    attribute_updates: Option<HashMap<String, AttributeValueUpdate>>,
    #[model(entries)]
    expected: Option<HashMap<String, ExpectedAttributeValue>>,
    conditional_operator: Option<SymbolicField<ConditionalOperator>>,
    return_values: Option<SymbolicField<ReturnValue>>,
    return_consumed_capacity: Option<SymbolicField<ReturnConsumedCapacity>>,
    return_item_collection_metrics: Option<SymbolicField<ReturnItemCollectionMetrics>>,
    update_expression: Option<String>,
    condition_expression: Option<String>,
    #[model(entries)]
    expression_attribute_names: Option<HashMap<String, String>>,
    #[model(entries)]
    expression_attribute_values: Option<HashMap<String, AttributeValue>>,
}

#[derive(Debug, Clone, Default, PartialEq, ValueObject)]
pub struct UpdateItemResult {
    attributes: Option<HashMap<String, AttributeValue>>,
    consumed_capacity: Option<ConsumedCapacity>,
    item_collection_metrics: Option<ItemCollectionMetrics>,
}
