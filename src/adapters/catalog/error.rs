//! Catalog loading errors.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::foundation::{ActivityId, ValidationError};

/// Errors raised while building a catalog.
#[derive(Debug, Error)]
pub enum CatalogLoadError {
    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse catalog {path}: {message}")]
    Parse { path: PathBuf, message: String },

    #[error("unsupported catalog format '{extension}' (expected json, yaml or yml)")]
    UnsupportedFormat { extension: String },

    #[error("invalid activity '{activity_id}': {source}")]
    InvalidActivity {
        activity_id: ActivityId,
        #[source]
        source: ValidationError,
    },

    #[error("duplicate activity id '{0}'")]
    DuplicateId(ActivityId),
}
