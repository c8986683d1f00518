//
// Copyright (c) 2024, 2025 Oracle and/or its affiliates. All rights reserved.
//
// Licensed under the Universal Permissive License v 1.0 as shown at
//  https://oss.oracle.com/licenses/upl/
//
//! Server-reported failures.
//!
//! A [`ServiceFault`] is what a transport hands back when the server rejects
//! a request attempt. It is terminal for that attempt: this library attaches
//! no retry or recovery state to it.
use serde_derive::Deserialize;

use crate::error::ModelError;
use crate::types::MapValue;
use crate::wire_enum::WireEnum;

crate::wire_enum! {
    /// Error codes reported by the DynamoDB service.
    ///
    /// The service may report codes newer than this list; use
    /// [`ServiceFault::error_code()`] to get the raw code in that case.
    pub enum DynamoDbFault {
        BackupInUse = "BackupInUseException",
        BackupNotFound = "BackupNotFoundException",
        ConditionalCheckFailed = "ConditionalCheckFailedException",
        ContinuousBackupsUnavailable = "ContinuousBackupsUnavailableException",
        GlobalTableAlreadyExists = "GlobalTableAlreadyExistsException",
        GlobalTableNotFound = "GlobalTableNotFoundException",
        IdempotentParameterMismatch = "IdempotentParameterMismatchException",
        IndexNotFound = "IndexNotFoundException",
        InternalServerError = "InternalServerError",
        InvalidRestoreTime = "InvalidRestoreTimeException",
        ItemCollectionSizeLimitExceeded = "ItemCollectionSizeLimitExceededException",
        LimitExceeded = "LimitExceededException",
        PointInTimeRecoveryUnavailable = "PointInTimeRecoveryUnavailableException",
        ProvisionedThroughputExceeded = "ProvisionedThroughputExceededException",
        ReplicaAlreadyExists = "ReplicaAlreadyExistsException",
        ReplicaNotFound = "ReplicaNotFoundException",
        RequestLimitExceeded = "RequestLimitExceeded",
        ResourceInUse = "ResourceInUseException",
        ResourceNotFound = "ResourceNotFoundException",
        TableAlreadyExists = "TableAlreadyExistsException",
        TableInUse = "TableInUseException",
        TableNotFound = "TableNotFoundException",
        Throttling = "ThrottlingException",
        TransactionCanceled = "TransactionCanceledException",
        TransactionConflict = "TransactionConflictException",
        TransactionInProgress = "TransactionInProgressException",
        Validation = "ValidationException",
    }
}

/// Which side a fault is attributed to, derived from the HTTP status.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum ErrorType {
    /// The request was rejected (4xx).
    Client,
    /// The service failed to process a valid request (5xx).
    Service,
    #[default]
    Unknown,
}

impl ErrorType {
    pub fn from_status_code(status: u16) -> ErrorType {
        match status {
            400..=499 => ErrorType::Client,
            500..=599 => ErrorType::Service,
            _ => ErrorType::Unknown,
        }
    }
}

/// A failure reported by the server for a single request attempt.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ServiceFault {
    error_code: String,
    message: String,
    status_code: Option<u16>,
    error_type: ErrorType,
    request_id: Option<String>,
    service_name: Option<String>,
}

// JSON protocol error body: {"__type": "ns#Code", "message": "..."}
#[derive(Deserialize)]
struct FaultBody {
    #[serde(rename = "__type")]
    error_type: Option<String>,
    message: Option<String>,
    #[serde(rename = "Message")]
    message_title_case: Option<String>,
}

const UNKNOWN_ERROR: &str = "UnknownError";

fn strip_namespace(code: &str) -> &str {
    match code.rfind('#') {
        Some(i) => &code[i + 1..],
        None => code,
    }
}

impl ServiceFault {
    /// Create a fault from a message and a server-assigned error code. Both
    /// are exposed unchanged.
    pub fn new(message: impl Into<String>, error_code: impl Into<String>) -> ServiceFault {
        ServiceFault {
            error_code: error_code.into(),
            message: message.into(),
            ..Default::default()
        }
    }

    /// Build a fault from a decoded JSON-protocol error body.
    ///
    /// The code is read from `__type`, with any namespace prefix up to `#`
    /// removed. The message is read from `message` or `Message`. A body with
    /// no `__type` yields the code `UnknownError`.
    pub fn from_map_value(body: &MapValue, status_code: u16) -> ServiceFault {
        let code = body
            .get_str("__type")
            .map(strip_namespace)
            .unwrap_or(UNKNOWN_ERROR);
        let message = body
            .get_str("message")
            .or_else(|| body.get_str("Message"))
            .unwrap_or_default();
        ServiceFault::new(message, code).with_status_code(status_code)
    }

    /// Parse a JSON-protocol error body, as [`from_map_value()`](ServiceFault::from_map_value()) does.
    pub fn from_json_body(body: &str, status_code: u16) -> Result<ServiceFault, ModelError> {
        let parsed: FaultBody = serde_json::from_str(body)?;
        let code = parsed
            .error_type
            .as_deref()
            .map(strip_namespace)
            .unwrap_or(UNKNOWN_ERROR);
        let message = parsed
            .message
            .or(parsed.message_title_case)
            .unwrap_or_default();
        Ok(ServiceFault::new(message, code).with_status_code(status_code))
    }

    /// Set the HTTP status. This also sets the [`ErrorType`].
    pub fn with_status_code(mut self, status_code: u16) -> Self {
        self.status_code = Some(status_code);
        self.error_type = ErrorType::from_status_code(status_code);
        self
    }
    pub fn with_error_type(mut self, error_type: ErrorType) -> Self {
        self.error_type = error_type;
        self
    }
    pub fn with_request_id(mut self, request_id: impl Into<String>) -> Self {
        self.request_id = Some(request_id.into());
        self
    }
    pub fn with_service_name(mut self, service_name: impl Into<String>) -> Self {
        self.service_name = Some(service_name.into());
        self
    }

    pub fn error_code(&self) -> &str {
        &self.error_code
    }
    pub fn message(&self) -> &str {
        &self.message
    }
    pub fn status_code(&self) -> Option<u16> {
        self.status_code
    }
    pub fn error_type(&self) -> ErrorType {
        self.error_type
    }
    pub fn request_id(&self) -> Option<&str> {
        self.request_id.as_deref()
    }
    pub fn service_name(&self) -> Option<&str> {
        self.service_name.as_deref()
    }

    /// Strict typed access to the error code.
    pub fn kind(&self) -> Result<DynamoDbFault, ModelError> {
        DynamoDbFault::from_wire_value(&self.error_code)
    }

    /// Returns `true` if the server asked the caller to slow down.
    pub fn is_throttling(&self) -> bool {
        matches!(
            self.kind(),
            Ok(DynamoDbFault::ProvisionedThroughputExceeded)
                | Ok(DynamoDbFault::RequestLimitExceeded)
                | Ok(DynamoDbFault::Throttling)
        )
    }
}

impl std::error::Error for ServiceFault {}

impl std::fmt::Display for ServiceFault {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}: {} (", self.error_code, self.message)?;
        if let Some(s) = &self.service_name {
            write!(f, "Service: {}; ", s)?;
        }
        match self.status_code {
            Some(c) => write!(f, "Status Code: {}", c)?,
            None => write!(f, "Status Code: unknown")?,
        }
        if let Some(r) = &self.request_id {
            write!(f, "; Request ID: {}", r)?;
        }
        write!(f, ")")
    }
}
