// crates/addrdb-core/src/error.rs

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;
use thiserror::Error;

use crate::model::AddressField;

/// Crate-wide result alias.
pub type Result<T, E = AddrError> = std::result::Result<T, E>;

/// Faults raised by a [`Store`](crate::store::Store) implementation.
///
/// These are the data-access failures of the engine: the requested region
/// dataset could not be located, read or parsed. When one of them is hit
/// during rules resolution it is always wrapped as the cause of an
/// [`AddrError::RegionNotFound`].
#[derive(Debug, Error)]
pub enum StoreError {
    /// The region key did not match `^[A-Za-z0-9]{2,3}$`.
    ///
    /// Checked before any I/O, so traversal-shaped input never reaches the
    /// filesystem.
    #[error("{0:?} is not a valid region key")]
    InvalidKey(String),

    /// No dataset exists for the requested region.
    #[error("region dataset not found: {0}")]
    NotFound(String),

    #[error("failed to read region dataset")]
    Io(#[from] std::io::Error),

    #[error("malformed region dataset")]
    Parse(#[from] serde_json::Error),
}

/// Reason recorded against a single address field during normalization.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorKind {
    /// The field is required by the region's rules but has no value.
    Required,
    /// The field value does not conform to the region's rules.
    Invalid,
}

impl ErrorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::Required => "required",
            ErrorKind::Invalid => "invalid",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Field-to-reason map accumulated over a full normalization pass.
pub type FieldErrors = BTreeMap<AddressField, ErrorKind>;

/// Errors surfaced by the public address operations.
#[derive(Debug, Error)]
pub enum AddrError {
    /// Unknown, malformed or reserved country/region code.
    #[error("{code:?} is not a valid region code")]
    RegionNotFound {
        code: String,
        /// Underlying data-access fault, when the code was well-formed but
        /// the dataset could not be fetched.
        #[source]
        source: Option<StoreError>,
    },

    /// One or more address fields failed validation.
    #[error("invalid address: {}", summarize(.errors))]
    ValidationFailed {
        errors: FieldErrors,
        /// Retained resolution failure when the country code itself was the
        /// problem.
        #[source]
        source: Option<Box<AddrError>>,
    },
}

impl AddrError {
    pub(crate) fn region_not_found(code: impl Into<String>) -> Self {
        AddrError::RegionNotFound {
            code: code.into(),
            source: None,
        }
    }

    pub(crate) fn region_fetch_failed(code: impl Into<String>, source: StoreError) -> Self {
        AddrError::RegionNotFound {
            code: code.into(),
            source: Some(source),
        }
    }

    /// The field-error map of a [`AddrError::ValidationFailed`], if that is
    /// what this error is.
    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            AddrError::ValidationFailed { errors, .. } => Some(errors),
            AddrError::RegionNotFound { .. } => None,
        }
    }
}

fn summarize(errors: &FieldErrors) -> String {
    let parts: Vec<String> = errors
        .iter()
        .map(|(field, kind)| format!("{field}: {kind}"))
        .collect();
    parts.join(", ")
}
