//! Error types for assertions.
//!
//! Two classes are kept apart: an [`AssertionError`] is an expected test
//! outcome and is reported to the test context, while a [`UsageError`]
//! means the test itself is malformed and is raised as a panic.

use crate::kind::Kind;
use std::path::PathBuf;
use thiserror::Error;

/// A failed assertion.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct AssertionError {
    message: String,
}

impl AssertionError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Result of an assertion.
pub type AssertionResult = Result<(), AssertionError>;

/// Misuse of an assertion, such as ordering a number against a string.
#[derive(Debug, Error)]
pub enum UsageError {
    #[error("require array or slice, got {kind}")]
    NotArray { kind: Kind },

    #[error("require same type: collection holds {expected}, element is {actual}")]
    NotSameType { expected: String, actual: String },

    #[error("require map, got {kind}")]
    NotMap { kind: Kind },

    #[error("{value} ({kind}) is not orderable")]
    NotOrderable { value: String, kind: Kind },

    #[error("cannot order {left} against {right}")]
    Mismatched { left: Kind, right: Kind },

    #[error("require number, got {value} ({kind})")]
    NotNumeric { value: String, kind: Kind },

    #[error("epsilon must be a non-negative number, got {0}")]
    InvalidEpsilon(f64),

    #[error("invalid pattern `{pattern}`: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

/// Result type for engine operations that can be misused.
pub type UsageResult<T> = Result<T, UsageError>;

/// Errors loading a [`Config`](crate::Config).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}
