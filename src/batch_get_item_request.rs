//
// Copyright (c) 2024, 2025 Oracle and/or its affiliates. All rights reserved.
//
// Licensed under the Universal Permissive License v 1.0 as shown at
//  https://oss.oracle.com/licenses/upl/
//
use std::collections::HashMap;

use crate::attribute_value::AttributeValue;
use crate::capacity::ConsumedCapacity;
use crate::enums::ReturnConsumedCapacity;
use crate::types::ValueObject;
use crate::wire_enum::SymbolicField;

/// The keys to read from one table, and how to read them.
#[derive(Debug, Clone, Default, PartialEq, ValueObject)]
pub struct KeysAndAttributes {
    keys: Option<Vec<HashMap<String, AttributeValue>>>,
    attributes_to_get: Option<Vec<String>>,
    consistent_read: Option<bool>,
    projection_expression: Option<String>,
    #[model(entries)]
    expression_attribute_names: Option<HashMap<String, String>>,
}

impl KeysAndAttributes {
    /// Append one primary key to `keys`.
    pub fn add_key(&mut self, key: HashMap<String, AttributeValue>) -> &mut Self {
        self.keys.get_or_insert_with(Vec::new).push(key);
        self
    }
}

/// Input of the BatchGetItem operation: keys to read, grouped by table name.
#[derive(Debug, Clone, Default, PartialEq, ValueObject)]
pub struct BatchGetItemRequest {
    #[model(entries)]
    request_items: Option<HashMap<String, KeysAndAttributes>>,
    return_consumed_capacity: Option<SymbolicField<ReturnConsumedCapacity>>,
}

/// Output of the BatchGetItem operation.
///
/// Keys the service did not get to are returned in `unprocessed_keys`, in
/// the same shape as the request's `request_items`.
#[derive(Debug, Clone, Default, PartialEq, ValueObject)]
pub struct BatchGetItemResult {
    responses: Option<HashMap<String, Vec<HashMap<String, AttributeValue>>>>,
    unprocessed_keys: Option<HashMap<String, KeysAndAttributes>>,
    consumed_capacity: Option<Vec<ConsumedCapacity>>,
}
