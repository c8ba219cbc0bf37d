//! # Error Types
//!
//! Defines the error taxonomy used across subsystems.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Wire status code carried by failure notifications.
pub const FAILURE_CODE: &str = "503";

/// Categorical error kind reported to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    /// Wrong argument count or shape, or a non-numeric value where a number is expected.
    InvalidArgument,
    /// No record at the key, or a role/name that matched nothing.
    NotFound,
    /// Create on a key that already holds a live record.
    AlreadyExists,
    /// Agreement creation referencing a fraud-listed party.
    FraudRejected,
    /// The key-value backend itself failed.
    BackendFailure,
}

impl ErrorKind {
    /// Stable machine-readable code.
    pub fn code(&self) -> &'static str {
        match self {
            ErrorKind::InvalidArgument => "INVALID_ARGUMENT",
            ErrorKind::NotFound => "NOT_FOUND",
            ErrorKind::AlreadyExists => "ALREADY_EXISTS",
            ErrorKind::FraudRejected => "FRAUD_REJECTED",
            ErrorKind::BackendFailure => "BACKEND_FAILURE",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Which counterparty tripped the fraud screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Counterparty {
    Buyer,
    Seller,
}

impl fmt::Display for Counterparty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Counterparty::Buyer => f.write_str("Buyer"),
            Counterparty::Seller => f.write_str("Seller"),
        }
    }
}

/// Errors surfaced by any ledger operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    #[error("{subject} Not Found.")]
    NotFound { subject: String },

    #[error("{subject} already exists: {key}")]
    AlreadyExists { subject: String, key: String },

    /// The named party exists in the fraud list.
    #[error("{role} name exists in Fraud list. So, {subject} {key} auto-rejected by System.")]
    FraudRejected {
        role: Counterparty,
        subject: String,
        key: String,
    },

    #[error("Backend failure: {message}")]
    BackendFailure { message: String },
}

impl LedgerError {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        LedgerError::InvalidArgument {
            message: message.into(),
        }
    }

    pub fn not_found(subject: impl Into<String>) -> Self {
        LedgerError::NotFound {
            subject: subject.into(),
        }
    }

    pub fn backend(message: impl Into<String>) -> Self {
        LedgerError::BackendFailure {
            message: message.into(),
        }
    }

    /// The categorical kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            LedgerError::InvalidArgument { .. } => ErrorKind::InvalidArgument,
            LedgerError::NotFound { .. } => ErrorKind::NotFound,
            LedgerError::AlreadyExists { .. } => ErrorKind::AlreadyExists,
            LedgerError::FraudRejected { .. } => ErrorKind::FraudRejected,
            LedgerError::BackendFailure { .. } => ErrorKind::BackendFailure,
        }
    }
}

/// Serializable error for failure notifications.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorPayload {
    pub error_type: ErrorKind,
    pub message: String,
    pub code: String,
}

impl From<&LedgerError> for ErrorPayload {
    fn from(err: &LedgerError) -> Self {
        Self {
            error_type: err.kind(),
            message: err.to_string(),
            code: FAILURE_CODE.to_string(),
        }
    }
}
