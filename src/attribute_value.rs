//
// Copyright (c) 2024, 2025 Oracle and/or its affiliates. All rights reserved.
//
// Licensed under the Universal Permissive License v 1.0 as shown at
//  https://oss.oracle.com/licenses/upl/
//
use bigdecimal::BigDecimal;
use std::collections::HashMap;
use std::fmt::Display;

use crate::error::ModelError;
use crate::types::{bd_try_from_str, Blob, ValueObject};

/// The data of a single item attribute.
///
/// Exactly one field is normally present. Numbers are carried as strings
/// (`N`, `NS`) so that no precision is lost; use
/// [`number_value()`](AttributeValue::number_value()) to parse one.
///
/// ```
/// use ddb_model_rust_sdk::AttributeValue;
///
/// let id = AttributeValue::string("user-17");
/// assert_eq!(id.s(), Some("user-17"));
///
/// let age = AttributeValue::number(42);
/// assert_eq!(age.n(), Some("42"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, ValueObject)]
pub struct AttributeValue {
    #[model(name = "S")]
    s: Option<String>,
    #[model(name = "N")]
    n: Option<String>,
    #[model(name = "B")]
    b: Option<Blob>,
    #[model(name = "SS")]
    ss: Option<Vec<String>>,
    #[model(name = "NS")]
    ns: Option<Vec<String>>,
    #[model(name = "BS")]
    bs: Option<Vec<Blob>>,
    #[model(name = "M", entries)]
    m: Option<HashMap<String, AttributeValue>>,
    #[model(name = "L")]
    l: Option<Vec<AttributeValue>>,
    #[model(name = "NULL")]
    null_value: Option<bool>,
    #[model(name = "BOOL")]
    bool_value: Option<bool>,
}

impl AttributeValue {
    pub fn string(s: impl Into<String>) -> Self {
        AttributeValue::new().with_s(s)
    }

    /// A number attribute. Any value whose `Display` form is a valid number
    /// can be given: integers, floats, [`BigDecimal`].
    pub fn number(n: impl Display) -> Self {
        AttributeValue::new().with_n(n.to_string())
    }

    pub fn binary(b: impl Into<Vec<u8>>) -> Self {
        AttributeValue::new().with_b(Blob::new(b))
    }

    pub fn boolean(b: bool) -> Self {
        AttributeValue::new().with_bool_value(b)
    }

    pub fn null() -> Self {
        AttributeValue::new().with_null_value(true)
    }

    pub fn string_set<S: Into<String>>(ss: impl IntoIterator<Item = S>) -> Self {
        AttributeValue::new().with_ss(ss.into_iter().map(Into::into).collect::<Vec<String>>())
    }

    pub fn number_set<N: Display>(ns: impl IntoIterator<Item = N>) -> Self {
        AttributeValue::new().with_ns(
            ns.into_iter()
                .map(|n| n.to_string())
                .collect::<Vec<String>>(),
        )
    }

    pub fn binary_set(bs: Vec<Vec<u8>>) -> Self {
        AttributeValue::new().with_bs(bs.into_iter().map(Blob::from).collect::<Vec<Blob>>())
    }

    pub fn list(l: Vec<AttributeValue>) -> Self {
        AttributeValue::new().with_l(l)
    }

    pub fn map(m: HashMap<String, AttributeValue>) -> Self {
        AttributeValue::new().with_m(m)
    }

    /// Parse the `N` field, if present.
    pub fn number_value(&self) -> Option<Result<BigDecimal, ModelError>> {
        self.n
            .as_deref()
            .map(|n| bd_try_from_str(n).map_err(|e| e.within(Self::TYPE_NAME, "N")))
    }

    /// Returns `true` if this is an explicit `NULL` attribute.
    pub fn is_null(&self) -> bool {
        self.null_value == Some(true)
    }
}

impl From<&str> for AttributeValue {
    fn from(s: &str) -> Self {
        AttributeValue::string(s)
    }
}

impl From<String> for AttributeValue {
    fn from(s: String) -> Self {
        AttributeValue::string(s)
    }
}

impl From<bool> for AttributeValue {
    fn from(b: bool) -> Self {
        AttributeValue::boolean(b)
    }
}

impl From<i64> for AttributeValue {
    fn from(n: i64) -> Self {
        AttributeValue::number(n)
    }
}

impl From<BigDecimal> for AttributeValue {
    fn from(n: BigDecimal) -> Self {
        AttributeValue::number(n)
    }
}
