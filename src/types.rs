//
// Copyright (c) 2024, 2025 Oracle and/or its affiliates. All rights reserved.
//
// Licensed under the Universal Permissive License v 1.0 as shown at
//  https://oss.oracle.com/licenses/upl/
//
//! Decoded values and the value object traits.
//!
//! A transport decodes a response body into a [`MapValue`]: an ordered map of
//! wire field names to [`FieldValue`] items. Value objects are built from, and
//! converted back into, such maps through the [`ValueObject`] trait, which is
//! normally implemented with `#[derive(ValueObject)]`.
use base64::prelude::{Engine as _, BASE64_STANDARD};
use bigdecimal::BigDecimal;
use bigdecimal::Num;
use chrono::{DateTime, FixedOffset, SecondsFormat};
use std::collections::btree_map::Iter;
use std::collections::hash_map::Entry;
use std::collections::BTreeMap;
use std::collections::HashMap;
use std::fmt::Debug;
use std::result::Result;
use tracing::trace;

pub use ddb_model_rust_sdk_derive::ValueObject;

use crate::config::{ModelConfig, UnknownFieldPolicy};
use crate::error::{ia_err, model_error, ModelError};
use crate::wire_enum::{SymbolicField, WireEnum};

type ModelDateTime = DateTime<FixedOffset>;

/// An opaque binary value (a DynamoDB `B` attribute, for example).
///
/// This is a simple wrapper struct around `Vec<u8>` so the [`ToFieldValue`] and
/// [`FromFieldValue`] traits can tell binary data apart from a list of numbers.
/// In JSON, binary values are carried as base64 strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Blob {
    pub data: Vec<u8>,
}

impl Blob {
    pub fn new(data: impl Into<Vec<u8>>) -> Self {
        Blob { data: data.into() }
    }
}

impl From<Vec<u8>> for Blob {
    fn from(data: Vec<u8>) -> Self {
        Blob { data }
    }
}

impl From<&[u8]> for Blob {
    fn from(data: &[u8]) -> Self {
        Blob {
            data: data.to_vec(),
        }
    }
}

/// A single decoded data item.
///
/// The type system is that of JSON with a few extensions: binary data,
/// timestamps and arbitrary-precision numbers. `FieldValue` items are produced
/// by the transport when it decodes a response, by [`MapValue::from_json_object()`],
/// and by [`ToFieldValue`] implementations when a value object is converted
/// to a map.
///
/// `Null` is treated the same as an absent field when a value object is decoded.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum FieldValue {
    Array(Vec<FieldValue>),
    Binary(Vec<u8>),
    Boolean(bool),
    Double(f64),
    Integer(i32),
    Long(i64),
    Map(MapValue),
    String(String),
    Timestamp(DateTime<FixedOffset>),
    Number(BigDecimal),
    #[default]
    Null,
}

impl FieldValue {
    pub fn new() -> Self {
        Default::default()
    }

    /// A short name for the variant, used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            FieldValue::Array(_) => "Array",
            FieldValue::Binary(_) => "Binary",
            FieldValue::Boolean(_) => "Boolean",
            FieldValue::Double(_) => "Double",
            FieldValue::Integer(_) => "Integer",
            FieldValue::Long(_) => "Long",
            FieldValue::Map(_) => "Map",
            FieldValue::String(_) => "String",
            FieldValue::Timestamp(_) => "Timestamp",
            FieldValue::Number(_) => "Number",
            FieldValue::Null => "Null",
        }
    }

    pub fn get_map_value(self) -> Result<MapValue, ModelError> {
        if let FieldValue::Map(m) = self {
            return Ok(m);
        }
        ia_err!("get_map_value called for {}", self.type_name())
    }
    pub fn get_map_value_ref(&self) -> Result<&MapValue, ModelError> {
        if let FieldValue::Map(m) = self {
            return Ok(m);
        }
        ia_err!("get_map_value_ref called for {}", self.type_name())
    }
    pub fn get_array_value(self) -> Result<Vec<FieldValue>, ModelError> {
        if let FieldValue::Array(a) = self {
            return Ok(a);
        }
        ia_err!("get_array_value called for {}", self.type_name())
    }
    pub fn get_array_value_ref(&self) -> Result<&Vec<FieldValue>, ModelError> {
        if let FieldValue::Array(a) = self {
            return Ok(a);
        }
        ia_err!("get_array_value_ref called for {}", self.type_name())
    }

    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }

    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            FieldValue::Integer(_)
                | FieldValue::Long(_)
                | FieldValue::Double(_)
                | FieldValue::Number(_)
        )
    }

    pub fn as_str(&self) -> Result<&str, ModelError> {
        if let FieldValue::String(s) = self {
            return Ok(s);
        }
        ia_err!("as_str called for {}", self.type_name())
    }
    pub fn as_i32(&self) -> Result<i32, ModelError> {
        match self {
            FieldValue::Integer(i) => Ok(*i),
            FieldValue::Long(l) => match i32::try_from(*l) {
                Ok(i) => Ok(i),
                Err(_) => ia_err!("value {} does not fit in an i32", l),
            },
            _ => ia_err!("as_i32 called for {}", self.type_name()),
        }
    }
    pub fn as_i64(&self) -> Result<i64, ModelError> {
        match self {
            FieldValue::Integer(i) => Ok(*i as i64),
            FieldValue::Long(l) => Ok(*l),
            _ => ia_err!("as_i64 called for {}", self.type_name()),
        }
    }
    pub fn as_f64(&self) -> Result<f64, ModelError> {
        match self {
            FieldValue::Integer(i) => Ok(*i as f64),
            FieldValue::Long(l) => Ok(*l as f64),
            FieldValue::Double(d) => Ok(*d),
            FieldValue::Number(n) => match n.to_string().parse::<f64>() {
                Ok(d) => Ok(d),
                Err(_) => ia_err!("number {} cannot be represented as f64", n),
            },
            FieldValue::String(s) => match s.as_str() {
                NAN => Ok(f64::NAN),
                INFINITY => Ok(f64::INFINITY),
                NEG_INFINITY => Ok(f64::NEG_INFINITY),
                _ => ia_err!("as_f64 called for String '{}'", s),
            },
            _ => ia_err!("as_f64 called for {}", self.type_name()),
        }
    }
    pub fn as_big_decimal(&self) -> Result<BigDecimal, ModelError> {
        match self {
            FieldValue::Integer(i) => Ok(BigDecimal::from(*i)),
            FieldValue::Long(l) => Ok(BigDecimal::from(*l)),
            FieldValue::Double(d) => bd_try_from_f64(*d),
            FieldValue::Number(n) => Ok(n.clone()),
            FieldValue::String(s) => bd_try_from_str(s),
            _ => ia_err!("as_big_decimal called for {}", self.type_name()),
        }
    }

    /// Convert to a JSON value.
    ///
    /// Binary data is written as a base64 string and timestamps as epoch
    /// seconds, with a fractional part when they carry sub-second precision.
    /// Timestamps finer than a microsecond are written as RFC 3339 strings
    /// instead, and non-finite doubles as the strings `NaN`, `Infinity` and
    /// `-Infinity`, so both decode back to the same value.
    pub fn to_json_value(&self) -> serde_json::Value {
        match self {
            FieldValue::Array(a) => {
                serde_json::Value::Array(a.iter().map(|v| v.to_json_value()).collect())
            }
            FieldValue::Binary(b) => serde_json::Value::String(BASE64_STANDARD.encode(b)),
            FieldValue::Boolean(b) => serde_json::Value::Bool(*b),
            FieldValue::Double(d) => double_to_json(*d),
            FieldValue::Integer(i) => serde_json::Value::from(*i),
            FieldValue::Long(l) => serde_json::Value::from(*l),
            FieldValue::Map(m) => m.to_json_value(),
            FieldValue::String(s) => serde_json::Value::String(s.clone()),
            FieldValue::Timestamp(t) => timestamp_to_json(t),
            FieldValue::Number(n) => {
                let s = n.to_string();
                // keeps full precision with serde_json's arbitrary_precision
                match serde_json::from_str::<serde_json::Value>(&s) {
                    Ok(v @ serde_json::Value::Number(_)) => v,
                    _ => serde_json::Value::String(s),
                }
            }
            FieldValue::Null => serde_json::Value::Null,
        }
    }
}

pub(crate) fn bd_try_from_f64(val: f64) -> Result<BigDecimal, ModelError> {
    match BigDecimal::try_from(val) {
        Ok(bd) => Ok(bd),
        Err(e) => ia_err!(
            "error converting f64({}) to BigDecimal: {}",
            val,
            e.to_string()
        ),
    }
}

pub(crate) fn bd_try_from_str(val: &str) -> Result<BigDecimal, ModelError> {
    match BigDecimal::from_str_radix(val, 10) {
        Ok(bd) => Ok(bd),
        Err(e) => ia_err!(
            "error converting str({}) to BigDecimal: {}",
            val,
            e.to_string()
        ),
    }
}

// JSON has no literal for these
const NAN: &str = "NaN";
const INFINITY: &str = "Infinity";
const NEG_INFINITY: &str = "-Infinity";

fn double_to_json(d: f64) -> serde_json::Value {
    if d.is_nan() {
        serde_json::Value::from(NAN)
    } else if d.is_infinite() {
        serde_json::Value::from(if d > 0.0 { INFINITY } else { NEG_INFINITY })
    } else {
        serde_json::Value::from(d)
    }
}

fn timestamp_to_json(t: &ModelDateTime) -> serde_json::Value {
    let nanos = t.timestamp_subsec_nanos();
    if nanos == 0 {
        serde_json::Value::from(t.timestamp())
    } else if nanos % 1000 != 0 {
        // epoch seconds are read back at microsecond precision
        serde_json::Value::from(t.to_rfc3339_opts(SecondsFormat::Nanos, true))
    } else {
        serde_json::Value::from(t.timestamp_micros() as f64 / 1_000_000.0)
    }
}

// Epoch seconds are rounded to microseconds.
pub(crate) fn epoch_to_datetime(secs: f64) -> Result<ModelDateTime, ModelError> {
    if !secs.is_finite() {
        return ia_err!("invalid epoch timestamp {}", secs);
    }
    let mut whole = secs.floor() as i64;
    let mut micros = ((secs - secs.floor()) * 1_000_000.0).round() as u32;
    if micros >= 1_000_000 {
        whole += 1;
        micros = 0;
    }
    match DateTime::from_timestamp(whole, micros * 1000) {
        Some(dt) => Ok(dt.fixed_offset()),
        None => ia_err!("epoch timestamp {} is out of range", secs),
    }
}

pub(crate) fn string_to_rfc3339(s: &str) -> Result<ModelDateTime, ModelError> {
    // try as-is
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt);
    }
    // if that didn't work, try adding a "Z" to the end
    let mut ds = String::from(s);
    ds.push('Z');
    Ok(DateTime::parse_from_rfc3339(&ds)?)
}

/// Convert a native value into a [`FieldValue`].
pub trait ToFieldValue {
    fn to_field_value(&self) -> FieldValue;
}

impl ToFieldValue for FieldValue {
    fn to_field_value(&self) -> FieldValue {
        self.clone()
    }
}
impl ToFieldValue for MapValue {
    fn to_field_value(&self) -> FieldValue {
        FieldValue::Map(self.clone())
    }
}
impl ToFieldValue for f64 {
    fn to_field_value(&self) -> FieldValue {
        FieldValue::Double(*self)
    }
}
impl ToFieldValue for i64 {
    fn to_field_value(&self) -> FieldValue {
        FieldValue::Long(*self)
    }
}
impl ToFieldValue for i32 {
    fn to_field_value(&self) -> FieldValue {
        FieldValue::Integer(*self)
    }
}
impl ToFieldValue for String {
    fn to_field_value(&self) -> FieldValue {
        FieldValue::String(self.clone())
    }
}
impl ToFieldValue for &str {
    fn to_field_value(&self) -> FieldValue {
        FieldValue::String(self.to_string())
    }
}
impl ToFieldValue for bool {
    fn to_field_value(&self) -> FieldValue {
        FieldValue::Boolean(*self)
    }
}
impl ToFieldValue for BigDecimal {
    fn to_field_value(&self) -> FieldValue {
        FieldValue::Number(self.clone())
    }
}
impl ToFieldValue for Blob {
    fn to_field_value(&self) -> FieldValue {
        FieldValue::Binary(self.data.clone())
    }
}
impl ToFieldValue for DateTime<FixedOffset> {
    fn to_field_value(&self) -> FieldValue {
        FieldValue::Timestamp(*self)
    }
}
impl<E: WireEnum> ToFieldValue for SymbolicField<E> {
    fn to_field_value(&self) -> FieldValue {
        FieldValue::String(self.as_str().to_string())
    }
}

impl ToFieldValue for serde_json::Value {
    fn to_field_value(&self) -> FieldValue {
        match self {
            serde_json::Value::Bool(b) => FieldValue::Boolean(*b),
            serde_json::Value::String(s) => FieldValue::String(s.clone()),
            serde_json::Value::Null => FieldValue::Null,
            serde_json::Value::Number(n) => {
                if n.is_f64() {
                    if let Some(d) = n.as_f64() {
                        return FieldValue::Double(d);
                    }
                }
                if let Some(nv64) = n.as_i64() {
                    if let Ok(nv32) = i32::try_from(nv64) {
                        return FieldValue::Integer(nv32);
                    }
                    return FieldValue::Long(nv64);
                }
                // try converting the string representation to a BigDecimal number
                if let Ok(bd) = BigDecimal::from_str_radix(&n.to_string(), 10) {
                    return FieldValue::Number(bd);
                }
                FieldValue::String(n.to_string())
            }
            serde_json::Value::Array(a) => {
                FieldValue::Array(a.iter().map(|v| v.to_field_value()).collect())
            }
            serde_json::Value::Object(o) => FieldValue::Map(MapValue::from_json_map(o)),
        }
    }
}

impl<T: ToFieldValue> ToFieldValue for Option<T> {
    fn to_field_value(&self) -> FieldValue {
        if let Some(v) = self {
            v.to_field_value()
        } else {
            FieldValue::Null
        }
    }
}

impl<T: ToFieldValue> ToFieldValue for &T {
    fn to_field_value(&self) -> FieldValue {
        let v = *self;
        v.to_field_value()
    }
}

impl<T: ToFieldValue> ToFieldValue for Vec<T> {
    fn to_field_value(&self) -> FieldValue {
        FieldValue::Array(self.iter().map(|i| i.to_field_value()).collect())
    }
}

impl<T: ToFieldValue> ToFieldValue for HashMap<String, T> {
    fn to_field_value(&self) -> FieldValue {
        let mut m = MapValue::new();
        for (k, v) in self {
            m.put(k, v);
        }
        FieldValue::Map(m)
    }
}

impl<T: ToFieldValue> ToFieldValue for BTreeMap<String, T> {
    fn to_field_value(&self) -> FieldValue {
        let mut m = MapValue::new();
        for (k, v) in self {
            m.put(k, v);
        }
        FieldValue::Map(m)
    }
}

/// Build a native value from a decoded [`FieldValue`].
///
/// The `config` is handed down to nested value objects so decode policy
/// applies at every level.
pub trait FromFieldValue: Sized {
    fn from_field_with(fv: &FieldValue, config: &ModelConfig) -> Result<Self, ModelError>;

    fn from_field(fv: &FieldValue) -> Result<Self, ModelError> {
        Self::from_field_with(fv, &ModelConfig::default())
    }
}

// a simple macro to make the following impls easier to read
macro_rules! ffv {
    ($f:expr, $a:path, $b:literal) => {{
        if let $a(v) = $f {
            return Ok(v.clone());
        }
        ia_err!(
            "wrong type for field: expected {}, actual: {}",
            $b,
            $f.type_name()
        )
    }};
}

impl FromFieldValue for i32 {
    fn from_field_with(fv: &FieldValue, _config: &ModelConfig) -> Result<Self, ModelError> {
        fv.as_i32()
    }
}
impl FromFieldValue for i64 {
    fn from_field_with(fv: &FieldValue, _config: &ModelConfig) -> Result<Self, ModelError> {
        fv.as_i64()
    }
}
impl FromFieldValue for f64 {
    fn from_field_with(fv: &FieldValue, _config: &ModelConfig) -> Result<Self, ModelError> {
        fv.as_f64()
    }
}
impl FromFieldValue for String {
    fn from_field_with(fv: &FieldValue, _config: &ModelConfig) -> Result<Self, ModelError> {
        ffv! {fv, FieldValue::String, "String"}
    }
}
impl FromFieldValue for bool {
    fn from_field_with(fv: &FieldValue, _config: &ModelConfig) -> Result<Self, ModelError> {
        ffv! {fv, FieldValue::Boolean, "Boolean"}
    }
}
impl FromFieldValue for BigDecimal {
    fn from_field_with(fv: &FieldValue, _config: &ModelConfig) -> Result<Self, ModelError> {
        fv.as_big_decimal()
    }
}
impl FromFieldValue for MapValue {
    fn from_field_with(fv: &FieldValue, _config: &ModelConfig) -> Result<Self, ModelError> {
        ffv! {fv, FieldValue::Map, "Map"}
    }
}
impl FromFieldValue for FieldValue {
    fn from_field_with(fv: &FieldValue, _config: &ModelConfig) -> Result<Self, ModelError> {
        Ok(fv.clone())
    }
}
impl FromFieldValue for ModelDateTime {
    fn from_field_with(fv: &FieldValue, _config: &ModelConfig) -> Result<Self, ModelError> {
        match fv {
            FieldValue::Timestamp(v) => Ok(*v),
            // allow string-->Timestamp if it fits with RFC3339
            FieldValue::String(s) => string_to_rfc3339(s),
            // JSON protocols carry timestamps as epoch seconds
            FieldValue::Integer(_)
            | FieldValue::Long(_)
            | FieldValue::Double(_)
            | FieldValue::Number(_) => epoch_to_datetime(fv.as_f64()?),
            _ => ia_err!(
                "wrong type for field: expected Timestamp, actual: {}",
                fv.type_name()
            ),
        }
    }
}
impl FromFieldValue for Blob {
    fn from_field_with(fv: &FieldValue, _config: &ModelConfig) -> Result<Self, ModelError> {
        match fv {
            FieldValue::Binary(v) => Ok(Blob { data: v.clone() }),
            FieldValue::String(s) => Ok(Blob {
                data: BASE64_STANDARD.decode(s)?,
            }),
            _ => ia_err!(
                "wrong type for field: expected Binary, actual: {}",
                fv.type_name()
            ),
        }
    }
}
impl<E: WireEnum> FromFieldValue for SymbolicField<E> {
    fn from_field_with(fv: &FieldValue, config: &ModelConfig) -> Result<Self, ModelError> {
        let raw = fv.as_str()?;
        let field = SymbolicField::from_raw(raw);
        if config.strict_symbols() {
            field.validate()?;
        }
        Ok(field)
    }
}
impl<T: FromFieldValue> FromFieldValue for Option<T> {
    fn from_field_with(fv: &FieldValue, config: &ModelConfig) -> Result<Self, ModelError> {
        if fv.is_null() {
            return Ok(None);
        }
        Ok(Some(T::from_field_with(fv, config)?))
    }
}
impl<T: FromFieldValue> FromFieldValue for Vec<T> {
    fn from_field_with(fv: &FieldValue, config: &ModelConfig) -> Result<Self, ModelError> {
        if let FieldValue::Array(v) = fv {
            let mut v1: Vec<T> = Vec::with_capacity(v.len());
            for (i, item) in v.iter().enumerate() {
                match T::from_field_with(item, config) {
                    Ok(t) => v1.push(t),
                    Err(e) => {
                        return Err(ModelError {
                            message: format!("[{}]: {}", i, e.message),
                            ..e
                        })
                    }
                }
            }
            return Ok(v1);
        }
        ia_err!(
            "wrong type for field: expected Array, actual: {}",
            fv.type_name()
        )
    }
}
impl<T: FromFieldValue> FromFieldValue for HashMap<String, T> {
    fn from_field_with(fv: &FieldValue, config: &ModelConfig) -> Result<Self, ModelError> {
        if let FieldValue::Map(v) = fv {
            let mut m1: HashMap<String, T> = HashMap::with_capacity(v.len());
            for (s, v) in v.iter() {
                let t = T::from_field_with(v, config).map_err(|e| ModelError {
                    message: format!("[{}]: {}", s, e.message),
                    ..e
                })?;
                m1.insert(s.to_string(), t);
            }
            return Ok(m1);
        }
        ia_err!(
            "wrong type for field: expected Map, actual: {}",
            fv.type_name()
        )
    }
}
impl<T: FromFieldValue> FromFieldValue for BTreeMap<String, T> {
    fn from_field_with(fv: &FieldValue, config: &ModelConfig) -> Result<Self, ModelError> {
        if let FieldValue::Map(v) = fv {
            let mut m1: BTreeMap<String, T> = BTreeMap::new();
            for (s, v) in v.iter() {
                m1.insert(s.to_string(), T::from_field_with(v, config)?);
            }
            return Ok(m1);
        }
        ia_err!(
            "wrong type for field: expected Map, actual: {}",
            fv.type_name()
        )
    }
}

/// An ordered map of wire field names to decoded values.
///
/// This is the boundary with the transport: responses arrive as a `MapValue`
/// and requests leave as one. Keys are kept in sorted order so that
/// [`to_json_value()`](MapValue::to_json_value()) output is stable.
#[derive(Default, Debug, Clone, PartialEq)]
pub struct MapValue {
    pub(crate) m: BTreeMap<String, FieldValue>,
}

impl MapValue {
    pub fn new() -> Self {
        Default::default()
    }

    /// Build a map from a JSON object. JSON `null` members become [`FieldValue::Null`].
    pub fn from_json_map(json: &serde_json::Map<String, serde_json::Value>) -> Self {
        let mut mv = MapValue::new();
        for (key, val) in json {
            mv.put(key, val);
        }
        mv
    }

    pub fn from_json_object(json: &serde_json::value::Value) -> Result<Self, ModelError> {
        if let serde_json::Value::Object(o) = json {
            return Ok(Self::from_json_map(o));
        }
        ia_err!("from_json_object: json value is not an Object: {}", json)
    }

    /// Parse a JSON document whose top level is an object.
    pub fn from_json_str(json: &str) -> Result<Self, ModelError> {
        let v: serde_json::Value = serde_json::from_str(json)?;
        Self::from_json_object(&v)
    }

    pub fn to_json_value(&self) -> serde_json::Value {
        let mut o = serde_json::Map::new();
        for (k, v) in &self.m {
            o.insert(k.clone(), v.to_json_value());
        }
        serde_json::Value::Object(o)
    }

    pub fn len(&self) -> usize {
        self.m.len()
    }

    pub fn is_empty(&self) -> bool {
        self.m.is_empty()
    }

    pub fn iter(&self) -> Iter<'_, String, FieldValue> {
        self.m.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.m.keys().map(|k| k.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.m.contains_key(key)
    }

    pub fn put(&mut self, key: &str, val: impl ToFieldValue) {
        self.m.insert(key.to_string(), val.to_field_value());
    }

    pub fn column(mut self, key: &str, val: impl ToFieldValue) -> MapValue {
        self.m.insert(key.to_string(), val.to_field_value());
        self
    }

    pub fn put_i32(&mut self, key: &str, val: i32) {
        self.m.insert(key.to_string(), FieldValue::Integer(val));
    }
    pub fn i32(mut self, key: &str, val: i32) -> MapValue {
        self.put_i32(key, val);
        self
    }
    pub fn get_i32(&self, key: &str) -> Option<i32> {
        if let FieldValue::Integer(i) = self.m.get(key)? {
            Some(*i)
        } else {
            None
        }
    }

    pub fn put_i64(&mut self, key: &str, val: i64) {
        self.m.insert(key.to_string(), FieldValue::Long(val));
    }
    pub fn i64(mut self, key: &str, val: i64) -> MapValue {
        self.put_i64(key, val);
        self
    }
    pub fn get_i64(&self, key: &str) -> Option<i64> {
        match self.m.get(key)? {
            FieldValue::Long(i) => Some(*i),
            FieldValue::Integer(i) => Some(*i as i64),
            _ => None,
        }
    }

    pub fn put_float64(&mut self, key: &str, val: f64) {
        self.m.insert(key.to_string(), FieldValue::Double(val));
    }
    pub fn get_float64(&self, key: &str) -> Option<f64> {
        if let FieldValue::Double(i) = self.m.get(key)? {
            Some(*i)
        } else {
            None
        }
    }

    pub fn put_str(&mut self, key: &str, val: &str) {
        self.put_string(key, val.to_string())
    }
    pub fn str(mut self, key: &str, val: &str) -> MapValue {
        self.put_str(key, val);
        self
    }
    pub fn put_string(&mut self, key: &str, val: String) {
        self.m.insert(key.to_string(), FieldValue::String(val));
    }
    pub fn string(mut self, key: &str, val: String) -> MapValue {
        self.put_string(key, val);
        self
    }
    pub fn get_string(&self, key: &str) -> Option<String> {
        if let FieldValue::String(s) = self.m.get(key)? {
            Some(s.clone())
        } else {
            None
        }
    }
    pub fn get_str(&self, key: &str) -> Option<&str> {
        if let FieldValue::String(s) = self.m.get(key)? {
            Some(s)
        } else {
            None
        }
    }

    pub fn put_timestamp(&mut self, key: &str, val: &DateTime<FixedOffset>) {
        self.m.insert(key.to_string(), FieldValue::Timestamp(*val));
    }
    pub fn timestamp(mut self, key: &str, val: &DateTime<FixedOffset>) -> MapValue {
        self.put_timestamp(key, val);
        self
    }
    pub fn get_timestamp(&self, key: &str) -> Option<DateTime<FixedOffset>> {
        if let FieldValue::Timestamp(t) = self.m.get(key)? {
            Some(*t)
        } else {
            None
        }
    }

    pub fn put_bool(&mut self, key: &str, val: bool) {
        self.m.insert(key.to_string(), FieldValue::Boolean(val));
    }
    pub fn get_bool(&self, key: &str) -> Option<bool> {
        if let FieldValue::Boolean(b) = self.m.get(key)? {
            Some(*b)
        } else {
            None
        }
    }

    pub fn put_binary(&mut self, key: &str, val: Vec<u8>) {
        self.m.insert(key.to_string(), FieldValue::Binary(val));
    }
    pub fn get_binary(&self, key: &str) -> Option<&Vec<u8>> {
        if let FieldValue::Binary(b) = self.m.get(key)? {
            Some(b)
        } else {
            None
        }
    }

    pub fn put_array(&mut self, key: &str, val: Vec<FieldValue>) {
        self.m.insert(key.to_string(), FieldValue::Array(val));
    }
    pub fn get_array(&self, key: &str) -> Option<&Vec<FieldValue>> {
        if let FieldValue::Array(a) = self.m.get(key)? {
            Some(a)
        } else {
            None
        }
    }

    pub fn put_field_value(&mut self, key: &str, val: FieldValue) {
        self.m.insert(key.to_string(), val);
    }
    pub fn get_field_value(&self, key: &str) -> Option<&FieldValue> {
        self.m.get(key)
    }
    pub fn take_field_value(&mut self, key: &str) -> Result<FieldValue, ModelError> {
        if let Some(v) = self.m.remove(key) {
            return Ok(v);
        }
        ia_err!("field '{}' does not exist in map", key)
    }

    pub fn get_map(&self, key: &str) -> Option<&MapValue> {
        if let FieldValue::Map(a) = self.m.get(key)? {
            Some(a)
        } else {
            None
        }
    }

    pub fn put_json_map_value(&mut self, key: &str, json: &str) -> Result<(), ModelError> {
        let mv = MapValue::from_json_str(json)?;
        self.put_field_value(key, FieldValue::Map(mv));
        Ok(())
    }
}

impl std::fmt::Display for MapValue {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.to_json_value())
    }
}

impl FromIterator<(String, FieldValue)> for MapValue {
    fn from_iter<I: IntoIterator<Item = (String, FieldValue)>>(iter: I) -> Self {
        MapValue {
            m: iter.into_iter().collect(),
        }
    }
}

/// Trait implemented by every model record.
///
/// It is typically not necessary to implement this trait by hand. Instead,
/// use the [`derive@ValueObject`] derive macro, which also generates the
/// field accessors.
pub trait ValueObject: Sized {
    /// The record name, used in error messages.
    const TYPE_NAME: &'static str;
    /// The wire names of every field, in declaration order.
    const FIELD_NAMES: &'static [&'static str];

    /// Create a new [`MapValue`] holding the present fields of `self`.
    /// Absent fields are left out of the map.
    fn to_map_value(&self) -> MapValue;

    /// Build a value from a decoded map using the given decode policy.
    fn from_map_value_with(value: &MapValue, config: &ModelConfig) -> Result<Self, ModelError>;

    /// Build a value from a decoded map using the default decode policy.
    fn from_map_value(value: &MapValue) -> Result<Self, ModelError> {
        Self::from_map_value_with(value, &ModelConfig::default())
    }

    fn to_json(&self) -> serde_json::Value {
        self.to_map_value().to_json_value()
    }

    fn from_json(json: &serde_json::Value) -> Result<Self, ModelError> {
        Self::from_json_with(json, &ModelConfig::default())
    }

    fn from_json_with(json: &serde_json::Value, config: &ModelConfig) -> Result<Self, ModelError> {
        let mv = MapValue::from_json_object(json)?;
        Self::from_map_value_with(&mv, config)
    }
}

// The helpers below are called from `#[derive(ValueObject)]` expansions.

#[doc(hidden)]
pub fn read_field<T: FromFieldValue>(
    value: &MapValue,
    type_name: &str,
    name: &str,
    config: &ModelConfig,
) -> Result<Option<T>, ModelError> {
    match value.get_field_value(name) {
        None | Some(FieldValue::Null) => Ok(None),
        Some(fv) => match T::from_field_with(fv, config) {
            Ok(v) => Ok(Some(v)),
            Err(e) => Err(e.within(type_name, name)),
        },
    }
}

#[doc(hidden)]
pub fn write_field<T: ToFieldValue>(m: &mut MapValue, name: &str, value: &Option<T>) {
    if let Some(v) = value {
        m.put_field_value(name, v.to_field_value());
    }
}

#[doc(hidden)]
pub fn check_fields(
    value: &MapValue,
    type_name: &str,
    known: &[&str],
    config: &ModelConfig,
) -> Result<(), ModelError> {
    for key in value.keys() {
        if known.contains(&key) {
            continue;
        }
        match config.unknown_fields() {
            UnknownFieldPolicy::Ignore => {
                trace!("{}: skipping unrecognized field '{}'", type_name, key);
            }
            UnknownFieldPolicy::Reject => {
                return Err(model_error!(
                    UnknownField,
                    "{}: unrecognized field '{}'",
                    type_name,
                    key
                ));
            }
        }
    }
    Ok(())
}

#[doc(hidden)]
pub fn add_entry<V>(
    map: &mut Option<HashMap<String, V>>,
    key: String,
    value: V,
) -> Result<(), ModelError> {
    match map.get_or_insert_with(HashMap::new).entry(key) {
        Entry::Occupied(e) => Err(model_error!(
            DuplicateKey,
            "Duplicated keys ({}) are provided.",
            e.key()
        )),
        Entry::Vacant(e) => {
            e.insert(value);
            Ok(())
        }
    }
}

#[doc(hidden)]
pub fn expect_map<'a>(fv: &'a FieldValue, type_name: &str) -> Result<&'a MapValue, ModelError> {
    if let FieldValue::Map(m) = fv {
        return Ok(m);
    }
    ia_err!("{}: expected Map, actual: {}", type_name, fv.type_name())
}

#[doc(hidden)]
pub fn display_fields(
    f: &mut std::fmt::Formatter<'_>,
    fields: &[(&str, Option<&dyn Debug>)],
) -> std::fmt::Result {
    f.write_str("{")?;
    let mut first = true;
    for (name, value) in fields {
        if let Some(v) = value {
            if !first {
                f.write_str(", ")?;
            }
            first = false;
            write!(f, "{}: {:?}", name, v)?;
        }
    }
    f.write_str("}")
}
