//
// Copyright (c) 2024, 2025 Oracle and/or its affiliates. All rights reserved.
//
// Licensed under the Universal Permissive License v 1.0 as shown at
//  https://oss.oracle.com/licenses/upl/
//
use std::collections::HashMap;

use crate::attribute_value::AttributeValue;
use crate::types::ValueObject;

/// Capacity units consumed on a table or an index.
#[derive(Debug, Clone, Default, PartialEq, ValueObject)]
pub struct Capacity {
    read_capacity_units: Option<f64>,
    write_capacity_units: Option<f64>,
    capacity_units: Option<f64>,
}

/// Capacity consumed by an operation.
///
/// Returned only when the request asked for it through its
/// `ReturnConsumedCapacity` field.
#[derive(Debug, Clone, Default, PartialEq, ValueObject)]
pub struct ConsumedCapacity {
    table_name: Option<String>,
    capacity_units: Option<f64>,
    read_capacity_units: Option<f64>,
    write_capacity_units: Option<f64>,
    table: Option<Capacity>,
    local_secondary_indexes: Option<HashMap<String, Capacity>>,
    global_secondary_indexes: Option<HashMap<String, Capacity>>,
}

/// Size estimate of the item collection affected by a write.
#[derive(Debug, Clone, Default, PartialEq, ValueObject)]
pub struct ItemCollectionMetrics {
    item_collection_key: Option<HashMap<String, AttributeValue>>,
    size_estimate_range_gb: Option<Vec<f64>>,
}

impl ItemCollectionMetrics {
    /// Lower and upper bound of the estimate, in gigabytes.
    pub fn size_estimate_bounds(&self) -> Option<(f64, f64)> {
        match self.size_estimate_range_gb.as_deref() {
            Some([low, high]) => Some((*low, *high)),
            _ => None,
        }
    }
}
