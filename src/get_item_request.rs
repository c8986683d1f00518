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

/// Input of the GetItem operation.
///
/// Every attribute of the table's primary key must be given in `key`.
/// Entries are added one at a time with
/// [`add_key_entry()`](GetItemRequest::add_key_entry()), which rejects a key
/// name given twice.
#[derive(Debug, Clone, Default, PartialEq, ValueObject)]
pub struct GetItemRequest {
    table_name: Option<String>,
    #[model(entries)]
    key: Option<HashMap<String, AttributeValue>>,
    attributes_to_get: Option<Vec<String>>,
    consistent_read: Option<bool>,
    return_consumed_capacity: Option<SymbolicField<ReturnConsumedCapacity>>,
    projection_expression: Option<String>,
    #[model(entries)]
    expression_attribute_names: Option<HashMap<String, String>>,
}

/// Output of the GetItem operation. `item` is absent if no item matched the key.
#[derive(Debug, Clone, Default, PartialEq, ValueObject)]
pub struct GetItemResult {
    item: Option<HashMap<String, AttributeValue>>,
    consumed_capacity: Option<ConsumedCapacity>,
}
