use std::path::PathBuf;

use crate::kind::AssetKind;

/// Alias for `Result<T, VsError>`.
pub type VsResult<T> = Result<T, VsError>;

/// Errors that can occur when validating or persisting mod assets.
#[derive(Debug, thiserror::Error)]
pub enum VsError {
    /// A required form field was left empty.
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    /// A numeric form field did not parse.
    #[error("invalid number for {field}: \"{value}\"")]
    InvalidNumber {
        /// The form field that failed to parse.
        field: &'static str,
        /// The text that was entered.
        value: String,
    },

    /// A mod version that is not of the form `x.y.z`.
    #[error("invalid version \"{0}\": expected x.y.z (e.g. 1.0.0)")]
    InvalidVersion(String),

    /// A recipe grid holds more distinct ingredients than there are pattern letters.
    #[error("too many distinct ingredients: {0} (at most 26)")]
    TooManyIngredients(usize),

    /// A generic validation error with a descriptive message.
    #[error("validation error: {0}")]
    Validation(String),

    /// A mod directory already exists under the mods root.
    #[error("mod already exists: \"{0}\"")]
    ModExists(String),

    /// No mod with the given id exists under the mods root.
    #[error("mod not found: \"{0}\"")]
    ModNotFound(String),

    /// The requested asset file does not exist.
    #[error("{kind} not found: \"{code}\"")]
    AssetNotFound {
        /// The asset kind that was looked up.
        kind: AssetKind,
        /// The code or file stem that was looked up.
        code: String,
    },

    /// A file-system operation failed.
    #[error("cannot access {}: {source}", path.display())]
    Io {
        /// The path being read, written, or created.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// A record could not be serialized.
    #[error("cannot serialize {}: {source}", path.display())]
    Json {
        /// The file the record was destined for.
        path: PathBuf,
        /// The underlying serializer error.
        source: serde_json::Error,
    },
}

impl VsError {
    /// Wrap an I/O error with the path it happened on.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Whether this error was raised by form validation (nothing was written).
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::MissingField(_)
                | Self::InvalidNumber { .. }
                | Self::InvalidVersion(_)
                | Self::TooManyIngredients(_)
                | Self::Validation(_)
        )
    }
}

/// A JSON document that could not be decoded into the expected record.
///
/// Read paths never propagate this: they map it to the record's default and
/// log it at `debug` level.
#[derive(Debug, thiserror::Error)]
#[error("malformed JSON: {0}")]
pub struct ParseError(#[from] pub serde_json::Error);
