use thiserror::Error;

/// A textual representation that could not be read back into its structured form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("missing ':' between host and port in '{text}'")]
    MissingPortSeparator { text: String },

    #[error("port '{port}' is not an integer")]
    InvalidPort { port: String },

    #[error("port {port} is outside 0..=65535")]
    PortOutOfRange { port: String },

    #[error("malformed options payload: {reason}")]
    MalformedOptions { reason: String },

    #[error("invalid duration '{text}' (expected seconds with an 's' suffix, e.g. \"1.5s\")")]
    InvalidDuration { text: String },

    #[error("unknown {kind} '{text}'")]
    UnknownVariant { kind: &'static str, text: String },
}

/// A well-formed value that breaks a rule of the configuration model.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("value is required")]
    Required,

    #[error("expected an integer, found '{found}'")]
    NotAnInteger { found: String },

    #[error("must be >= {min} (found {value})")]
    BelowMinimum { value: i64, min: i64 },

    #[error("must be <= {max} (found {value})")]
    AboveMaximum { value: i64, max: i64 },

    #[error("cannot be changed from '{original}' once the configuration exists")]
    Immutable { original: String },

    #[error("payload for '{orphan}' does not match the selected '{active}'")]
    OrphanedVariant { orphan: String, active: String },

    #[error("unknown field")]
    UnknownField,
}

/// Field-scoped error. Never aborts an edit session; the caller re-edits `path`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: ParseError,
    },

    #[error("{path}: {source}")]
    Validation {
        path: String,
        #[source]
        source: ValidationError,
    },
}

impl ConfigError {
    pub fn parse(path: impl Into<String>, source: ParseError) -> Self {
        Self::Parse {
            path: path.into(),
            source,
        }
    }

    pub fn validation(path: impl Into<String>, source: ValidationError) -> Self {
        Self::Validation {
            path: path.into(),
            source,
        }
    }

    pub fn path(&self) -> &str {
        match self {
            Self::Parse { path, .. } | Self::Validation { path, .. } => path,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Parse { .. } => "parse",
            Self::Validation { .. } => "validation",
        }
    }

    /// The error message without the field path prefix.
    pub fn message(&self) -> String {
        match self {
            Self::Parse { source, .. } => source.to_string(),
            Self::Validation { source, .. } => source.to_string(),
        }
    }
}
