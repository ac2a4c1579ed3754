//! Error types for the itinerary planner library.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

use crate::generator::GeneratorError;
use crate::store::StoreError;

/// Comprehensive error type for all planner operations.
#[derive(Error, Debug)]
pub enum WayfarerError {
    /// Storage backend errors
    #[error("Storage error: {message}")]
    Storage {
        message: String,
        #[source]
        source: StoreError,
    },
    /// Storage refused a write because the backing quota is exhausted
    #[error("Storage capacity exceeded while writing '{key}'")]
    CapacityExceeded { key: String },
    /// No shared trip stored under the given token
    #[error("No shared trip found for token '{token}'")]
    TripNotFound { token: String },
    /// An operation required an active trip and none is loaded
    #[error("No active trip; plan one first")]
    NoActiveTrip,
    /// The saved-trip library already holds an entry with this name
    #[error("A saved trip named '{name}' already exists")]
    DuplicateSavedTrip { name: String },
    /// The saved-trip library has no entry at the given position
    #[error("No saved trip at position {index}")]
    SavedTripNotFound { index: usize },
    /// Core itinerary generation failed; no document was produced
    #[error("Itinerary generation failed: {source}")]
    Generation {
        #[from]
        source: GeneratorError,
    },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Builder for creating storage errors with optional context.
pub struct StorageErrorBuilder {
    message: String,
}

impl StorageErrorBuilder {
    /// Create a new storage error builder with a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Build the error with the given source.
    pub fn with_source(self, source: StoreError) -> WayfarerError {
        WayfarerError::Storage {
            message: self.message,
            source,
        }
    }
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> WayfarerError {
        WayfarerError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl WayfarerError {
    /// Creates a builder for storage errors.
    pub fn storage(message: impl Into<String>) -> StorageErrorBuilder {
        StorageErrorBuilder::new(message)
    }

    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }
}

/// Extension trait for Result to provide concise error mapping with
/// anyhow-style context.
pub trait ResultExt<T, E> {
    /// Add context to any error type, converting to WayfarerError.
    fn with_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static;

    /// Add lazy context to any error type, converting to WayfarerError.
    fn with_context_lazy<C, F>(self, f: F) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
        F: FnOnce() -> C;
}

/// Specialized extension trait for storage-related Results.
pub trait StoreResultExt<T> {
    /// Map storage errors with a message, keeping capacity exhaustion
    /// distinguishable from other backend failures.
    fn store_context(self, message: &str) -> Result<T>;
}

impl<T, E> ResultExt<T, E> for std::result::Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn with_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
    {
        self.map_err(|e| WayfarerError::Configuration {
            message: format!("{}: {}", context, e),
        })
    }

    fn with_context_lazy<C, F>(self, f: F) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
        F: FnOnce() -> C,
    {
        self.map_err(|e| WayfarerError::Configuration {
            message: format!("{}: {}", f(), e),
        })
    }
}

impl<T> StoreResultExt<T> for std::result::Result<T, StoreError> {
    fn store_context(self, message: &str) -> Result<T> {
        self.map_err(|e| match e {
            StoreError::CapacityExceeded { key } => WayfarerError::CapacityExceeded { key },
            other => WayfarerError::storage(message).with_source(other),
        })
    }
}

/// Result type alias for planner operations
pub type Result<T> = std::result::Result<T, WayfarerError>;
