//! Custom error types for the feed and the ledger

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum NexusError {
    #[error("Invalid parameter `{name}`: {reason}")]
    InvalidParameter {
        name: &'static str,
        reason: String,
    },

    #[error("Lead validation failed on `{field}`: {reason}")]
    Validation {
        field: &'static str,
        reason: String,
    },

    #[error("Storage error at {}: {message}", .path.display())]
    Storage {
        path: PathBuf,
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("Access denied: invalid or missing access token")]
    Unauthorized,
}

impl NexusError {
    pub fn invalid_parameter(name: &'static str, reason: impl Into<String>) -> Self {
        NexusError::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }

    pub fn validation(field: &'static str, reason: impl Into<String>) -> Self {
        NexusError::Validation {
            field,
            reason: reason.into(),
        }
    }

    /// Storage failure carrying the underlying io/csv error.
    pub fn storage<E>(path: impl Into<PathBuf>, message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        NexusError::Storage {
            path: path.into(),
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Storage failure detected by the ledger itself (bad header, bad row).
    pub fn corrupt(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        NexusError::Storage {
            path: path.into(),
            message: message.into(),
            source: None,
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, NexusError::Validation { .. })
    }

    pub fn is_storage(&self) -> bool {
        matches!(self, NexusError::Storage { .. })
    }
}

pub type NexusResult<T> = Result<T, NexusError>;
