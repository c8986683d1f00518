//
// Copyright (c) 2024 Oracle and/or its affiliates. All rights reserved.
//
// Licensed under the Universal Permissive License v 1.0 as shown at
//  https://oss.oracle.com/licenses/upl/
//
use crate::fault::ServiceFault;

include!(concat!(env!("OUT_DIR"), "/ua.rs"));

/// The version of this SDK, as included in error messages.
pub fn sdk_version() -> &'static str {
    SDK_VERSION
}

/// The User-Agent string a transport should send along with requests built
/// from these models.
pub fn user_agent() -> &'static str {
    USER_AGENT
}

/// Error returned by all fallible operations in this library.
///
/// The `code` classifies the failure; the `message` is meant for humans. When
/// the error came from the server, [`service_fault()`](ModelError::service_fault())
/// gives access to the full [`ServiceFault`].
#[derive(Debug, Clone, PartialEq)]
pub struct ModelError {
    pub code: ModelErrorCode,
    pub message: String,
    pub(crate) fault: Option<Box<ServiceFault>>,
}

impl std::error::Error for ModelError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.fault {
            Some(f) => Some(f.as_ref() as &(dyn std::error::Error + 'static)),
            None => None,
        }
    }
}

impl std::fmt::Display for ModelError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        return write!(f, "code={:?} message=\"{}\"", self.code, self.message);
    }
}

impl ModelError {
    pub fn new(code: ModelErrorCode, msg: &str) -> ModelError {
        ModelError {
            code,
            message: msg.to_string(),
            fault: None,
        }
    }

    /// The server-reported fault behind this error, if it has one.
    pub fn service_fault(&self) -> Option<&ServiceFault> {
        self.fault.as_deref()
    }

    /// Returns `true` if this error is an [`UnknownSymbol`](ModelErrorCode::UnknownSymbol)
    /// error, meaning the server sent a vocabulary value newer than this client.
    pub fn is_unknown_symbol(&self) -> bool {
        self.code == ModelErrorCode::UnknownSymbol
    }

    /// Prefix the message with the value object type and wire field it
    /// relates to. The code is left unchanged.
    pub fn within(mut self, type_name: &str, field: &str) -> ModelError {
        self.message = format!("{}.{}: {}", type_name, field, self.message);
        self
    }
}

macro_rules! model_error {
    ($code:ident, $($t:tt)*) => {{
        let m = format!($($t)*);
        crate::error::ModelError {
            code: crate::error::ModelErrorCode::$code,
            message: format!("{} ({})", m, crate::error::sdk_version()),
            fault: None,
        }
    }};
}

pub(crate) use model_error;

macro_rules! ia_error {
    ($($t:tt)*) => {{
        crate::error::model_error!(IllegalArgument, $($t)*)
    }};
}

macro_rules! ia_err {
    ($($t:tt)*) => {{
        Err(crate::error::model_error!(IllegalArgument, $($t)*))
    }};
}

pub(crate) use ia_err;

impl From<ServiceFault> for ModelError {
    fn from(f: ServiceFault) -> Self {
        ModelError {
            code: ModelErrorCode::ServiceFault,
            message: f.to_string(),
            fault: Some(Box::new(f)),
        }
    }
}

impl From<serde_json::Error> for ModelError {
    fn from(e: serde_json::Error) -> Self {
        ia_error!("error parsing json: {}", e.to_string())
    }
}

impl From<chrono::ParseError> for ModelError {
    fn from(e: chrono::ParseError) -> Self {
        ia_error!("invalid datetime value: {}", e.to_string())
    }
}

impl From<base64::DecodeError> for ModelError {
    fn from(e: base64::DecodeError) -> Self {
        ia_error!("invalid base64 value: {}", e.to_string())
    }
}

impl From<ini::Error> for ModelError {
    fn from(e: ini::Error) -> Self {
        ia_error!("error reading config file: {}", e.to_string())
    }
}

/// ModelErrorCode classifies a [`ModelError`].
///
/// `InvalidValue`, `UnknownSymbol`, `DuplicateKey` and `UnknownField` are
/// raised locally by this library. `ServiceFault` wraps a failure reported by
/// the server for a single request attempt.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum ModelErrorCode {
    /// A required symbolic value was absent or empty where strict
    /// (typed) access was requested.
    InvalidValue,

    /// A symbolic value was present but is not part of the vocabulary
    /// compiled into this client. The server is likely newer than the client.
    /// Callers can recover by falling back to the raw string accessor.
    UnknownSymbol,

    /// An entry was added to a keyed collection field under a key that was
    /// already present. The collection is left unchanged.
    DuplicateKey,

    /// The server reported a failure for the request attempt. This is
    /// terminal for that attempt; this library never retries.
    ServiceFault,

    /// A value handed to this library has the wrong shape: a decoded field of
    /// the wrong type, malformed JSON, a bad configuration value.
    IllegalArgument,

    /// A decoded map carried a field the value object does not define and
    /// the configuration asked for such fields to be rejected.
    UnknownField,
}
