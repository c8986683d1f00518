//
// Copyright (c) 2024, 2025 Oracle and/or its affiliates. All rights reserved.
//
// Licensed under the Universal Permissive License v 1.0 as shown at
//  https://oss.oracle.com/licenses/upl/
//
//! Extensible server-defined vocabularies.
//!
//! Many fields of the DynamoDB API carry a value drawn from a vocabulary the
//! server owns: a table status, a comparison operator, a fault code. The
//! client compiles in the values it knows about, but the server may start
//! sending new ones at any time. This module bridges the two:
//!
//! - [`WireEnum`] is the closed, compile-time set of known values for one
//!   vocabulary, with a lossless mapping to and from the wire string.
//! - [`SymbolicField`] is how such a value is stored on a value object: always
//!   as the raw wire string, so an unknown value is carried and returned
//!   unchanged. Only the strict [`SymbolicField::symbol()`] accessor can fail.
//!
//! Vocabularies are declared with the [`wire_enum!`](crate::wire_enum!) macro:
//!
//! ```
//! use ddb_model_rust_sdk::{wire_enum, SymbolicField, WireEnum, ModelErrorCode};
//!
//! wire_enum! {
//!     /// Whether a feature should be turned on or off.
//!     pub enum Switch {
//!         On = "ON",
//!         Off = "OFF",
//!     }
//! }
//!
//! assert_eq!(Switch::from_wire_value("ON").unwrap(), Switch::On);
//! assert_eq!(Switch::Off.to_wire_value(), "OFF");
//!
//! let newer: SymbolicField<Switch> = SymbolicField::from_raw("DIMMED");
//! assert_eq!(newer.as_str(), "DIMMED");
//! assert_eq!(newer.symbol().unwrap_err().code, ModelErrorCode::UnknownSymbol);
//! ```
use std::fmt::Debug;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

use crate::error::{model_error, ModelError};

/// A closed vocabulary of symbolic constants with a fixed wire string for each.
///
/// Implementations are normally generated by [`wire_enum!`](crate::wire_enum!).
/// Lookups are exact and case-sensitive.
pub trait WireEnum: Copy + Eq + Debug + Send + Sync + 'static {
    /// The name of the vocabulary, used in error messages.
    const NAME: &'static str;

    /// Every known value, in declaration order.
    fn values() -> &'static [Self];

    /// The wire string for this value. Total and lossless.
    fn to_wire_value(&self) -> &'static str;

    /// Look up a wire string in the known-value table.
    ///
    /// Fails with [`InvalidValue`](crate::ModelErrorCode::InvalidValue) if `raw`
    /// is empty, and with [`UnknownSymbol`](crate::ModelErrorCode::UnknownSymbol)
    /// if it is not empty but not part of this vocabulary.
    fn from_wire_value(raw: &str) -> Result<Self, ModelError> {
        if raw.is_empty() {
            return Err(model_error!(
                InvalidValue,
                "{}: value cannot be empty",
                Self::NAME
            ));
        }
        match Self::values().iter().find(|v| v.to_wire_value() == raw) {
            Some(v) => Ok(*v),
            None => Err(model_error!(
                UnknownSymbol,
                "{}: unknown value '{}'",
                Self::NAME,
                raw
            )),
        }
    }

    /// Same as [`from_wire_value()`](WireEnum::from_wire_value()), treating
    /// `None` like an empty string.
    fn from_optional_wire_value(raw: Option<&str>) -> Result<Self, ModelError> {
        match raw {
            Some(s) => Self::from_wire_value(s),
            None => Err(model_error!(InvalidValue, "{}: value is absent", Self::NAME)),
        }
    }

    /// Returns `true` if `raw` is part of this vocabulary.
    fn is_known_wire_value(raw: &str) -> bool {
        Self::values().iter().any(|v| v.to_wire_value() == raw)
    }
}

/// Declare a server-defined vocabulary.
///
/// Each variant is given its wire string. The macro generates the enum itself
/// along with implementations of [`WireEnum`](crate::WireEnum), `Display`
/// (the wire string), `FromStr` (strict lookup) and
/// `From<Enum> for SymbolicField<Enum>`.
#[macro_export]
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident = $wire:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
        $vis enum $name {
            $(
                $(#[$vmeta])*
                $variant,
            )+
        }

        impl $crate::WireEnum for $name {
            const NAME: &'static str = stringify!($name);

            fn values() -> &'static [Self] {
                &[$($name::$variant),+]
            }

            fn to_wire_value(&self) -> &'static str {
                match self {
                    $($name::$variant => $wire,)+
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::WireEnum::to_wire_value(self))
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::ModelError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                <$name as $crate::WireEnum>::from_wire_value(s)
            }
        }

        impl ::std::convert::From<$name> for $crate::SymbolicField<$name> {
            fn from(v: $name) -> Self {
                $crate::SymbolicField::from_symbol(v)
            }
        }
    };
}

/// A value object field whose value comes from the vocabulary `E`.
///
/// The field always stores the raw wire string. Setting it from a symbol
/// stores [`E::to_wire_value()`](WireEnum::to_wire_value()); setting it from a
/// string stores that string as given, known or not. Equality and hashing
/// are over the raw string.
pub struct SymbolicField<E> {
    raw: String,
    _vocabulary: PhantomData<fn() -> E>,
}

impl<E: WireEnum> SymbolicField<E> {
    /// Store a raw wire string. No validation is performed.
    pub fn from_raw(raw: impl Into<String>) -> Self {
        SymbolicField {
            raw: raw.into(),
            _vocabulary: PhantomData,
        }
    }

    /// Store the wire string of a known symbol.
    pub fn from_symbol(symbol: E) -> Self {
        SymbolicField::from_raw(symbol.to_wire_value())
    }

    /// The raw wire string. This never fails.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Take the raw wire string.
    pub fn into_raw(self) -> String {
        self.raw
    }

    /// Strict typed access: look the raw string up in the vocabulary.
    pub fn symbol(&self) -> Result<E, ModelError> {
        E::from_wire_value(&self.raw)
    }

    /// Lenient typed access: `None` if the raw string is not a known symbol.
    pub fn known_symbol(&self) -> Option<E> {
        self.symbol().ok()
    }

    /// Returns `true` if the raw string is a known symbol.
    pub fn is_known(&self) -> bool {
        E::is_known_wire_value(&self.raw)
    }

    /// Check the raw string against the vocabulary, without returning the symbol.
    pub fn validate(&self) -> Result<(), ModelError> {
        self.symbol().map(|_| ())
    }

    /// Strict typed access to a field that may be absent. An absent field
    /// fails with [`InvalidValue`](crate::ModelErrorCode::InvalidValue).
    pub fn require(field: Option<&Self>) -> Result<E, ModelError> {
        E::from_optional_wire_value(field.map(|f| f.as_str()))
    }
}

impl<E> Clone for SymbolicField<E> {
    fn clone(&self) -> Self {
        SymbolicField {
            raw: self.raw.clone(),
            _vocabulary: PhantomData,
        }
    }
}

impl<E> PartialEq for SymbolicField<E> {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

impl<E> Eq for SymbolicField<E> {}

impl<E> Hash for SymbolicField<E> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.raw.hash(state);
    }
}

impl<E> Debug for SymbolicField<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Debug::fmt(&self.raw, f)
    }
}

impl<E> std::fmt::Display for SymbolicField<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.raw)
    }
}

impl<E: WireEnum> PartialEq<E> for SymbolicField<E> {
    fn eq(&self, other: &E) -> bool {
        self.raw == other.to_wire_value()
    }
}

impl<E> PartialEq<str> for SymbolicField<E> {
    fn eq(&self, other: &str) -> bool {
        self.raw == other
    }
}

impl<E> PartialEq<&str> for SymbolicField<E> {
    fn eq(&self, other: &&str) -> bool {
        self.raw == *other
    }
}

impl<E: WireEnum> From<&str> for SymbolicField<E> {
    fn from(raw: &str) -> Self {
        SymbolicField::from_raw(raw)
    }
}

impl<E: WireEnum> From<String> for SymbolicField<E> {
    fn from(raw: String) -> Self {
        SymbolicField::from_raw(raw)
    }
}

impl<E> From<SymbolicField<E>> for String {
    fn from(f: SymbolicField<E>) -> Self {
        f.raw
    }
}
