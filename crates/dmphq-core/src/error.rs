use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

use crate::model::ParseEnumError;

/// Machine-readable error codes for scripts and automations driving the
/// CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    NotInitialized,
    ConfigParseError,
    SnapshotParseError,
    InvalidEnumValue,
    IoError,
    InternalUnexpected,
}

impl ErrorCode {
    /// Stable code identifier (`E####`) for machine parsing.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::NotInitialized => "E1001",
            Self::ConfigParseError => "E1002",
            Self::SnapshotParseError => "E1003",
            Self::InvalidEnumValue => "E2001",
            Self::IoError => "E5001",
            Self::InternalUnexpected => "E9001",
        }
    }

    /// Short human-facing summary for logs and terminal output.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::NotInitialized => "Workspace not initialized",
            Self::ConfigParseError => "Config file parse error",
            Self::SnapshotParseError => "Data snapshot parse error",
            Self::InvalidEnumValue => "Invalid value for a closed field",
            Self::IoError => "File read/write failed",
            Self::InternalUnexpected => "Internal unexpected error",
        }
    }

    /// Optional remediation hint surfaced to operators.
    #[must_use]
    pub const fn hint(self) -> Option<&'static str> {
        match self {
            Self::NotInitialized => Some("Run `dmp init` to set up this directory."),
            Self::ConfigParseError => Some("Fix syntax in .dmphq/config.toml and retry."),
            Self::SnapshotParseError => {
                Some("Re-export .dmphq/data.json or fix its JSON syntax.")
            }
            Self::InvalidEnumValue => Some("Use one of the documented values for this field."),
            Self::IoError => Some("Check file permissions and disk space."),
            Self::InternalUnexpected => Some("Retry once. If persistent, report a bug with logs."),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Failures at the loading boundary. The derivation functions themselves
/// are infallible: missing data degrades to defaults instead.
#[derive(Debug, Error)]
pub enum DmphqError {
    #[error("no .dmphq workspace found at or above {path}")]
    NotInitialized { path: PathBuf },

    #[error("failed to read {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {path}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to parse snapshot {path}")]
    SnapshotParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    InvalidEnumValue(#[from] ParseEnumError),
}

impl DmphqError {
    /// The machine-readable code for this error.
    #[must_use]
    pub const fn error_code(&self) -> ErrorCode {
        match self {
            Self::NotInitialized { .. } => ErrorCode::NotInitialized,
            Self::Io { .. } => ErrorCode::IoError,
            Self::ConfigParse { .. } => ErrorCode::ConfigParseError,
            Self::SnapshotParse { .. } => ErrorCode::SnapshotParseError,
            Self::InvalidEnumValue(_) => ErrorCode::InvalidEnumValue,
        }
    }

    /// Remediation hint, falling back to the generic internal hint.
    #[must_use]
    pub const fn suggestion(&self) -> &'static str {
        match self.error_code().hint() {
            Some(hint) => hint,
            None => "Retry once. If persistent, report a bug with logs.",
        }
    }
}
