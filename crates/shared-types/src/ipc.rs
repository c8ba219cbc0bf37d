//! # Invocation Surface
//!
//! Callers address operations by name with an ordered list of string
//! arguments. Argument count is fixed per operation and checked before any
//! state is read.

use crate::errors::LedgerError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Wire status code carried by success notifications.
pub const SUCCESS_CODE: &str = "200";

/// A named operation with positional string arguments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invocation {
    pub function: String,
    pub args: Vec<String>,
}

impl Invocation {
    pub fn new<I, A>(function: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = A>,
        A: Into<String>,
    {
        Self {
            function: function.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// Return the arguments if there are exactly `expected` of them.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` naming the expected count otherwise.
    pub fn expect_args(&self, expected: usize) -> Result<&[String], LedgerError> {
        if self.args.len() != expected {
            return Err(LedgerError::invalid_argument(format!(
                "Incorrect number of arguments for {}. Expecting {} argument{}, got {}.",
                self.function,
                expected,
                if expected == 1 { "" } else { "s" },
                self.args.len()
            )));
        }
        Ok(&self.args)
    }
}

/// Acknowledgement of a successful write.
///
/// Serializes as `{"message": ..., "code": "200", "<ref>": "<id>"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub message: String,
    pub code: String,
    #[serde(flatten)]
    pub refs: BTreeMap<String, String>,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: SUCCESS_CODE.to_string(),
            refs: BTreeMap::new(),
        }
    }

    /// Attach a record reference such as `agreementID`.
    pub fn with_ref(mut self, field: impl Into<String>, id: impl Into<String>) -> Self {
        self.refs.insert(field.into(), id.into());
        self
    }
}

/// Result of a successful invocation.
#[derive(Debug, Clone, PartialEq)]
pub enum InvocationResponse {
    /// A write completed.
    Acknowledged(Notice),
    /// A query produced a JSON document.
    Document(serde_json::Value),
}

impl InvocationResponse {
    pub fn notice(&self) -> Option<&Notice> {
        match self {
            InvocationResponse::Acknowledged(notice) => Some(notice),
            InvocationResponse::Document(_) => None,
        }
    }

    pub fn document(&self) -> Option<&serde_json::Value> {
        match self {
            InvocationResponse::Document(doc) => Some(doc),
            InvocationResponse::Acknowledged(_) => None,
        }
    }
}

/// A subsystem that serves a fixed set of named functions.
pub trait InvocationHandler: Send + Sync {
    /// Subsystem tag used in logs.
    fn name(&self) -> &'static str;

    /// Function names this handler serves.
    fn functions(&self) -> &'static [&'static str];

    /// Execute one invocation to completion.
    fn handle(&self, invocation: &Invocation) -> Result<InvocationResponse, LedgerError>;
}
