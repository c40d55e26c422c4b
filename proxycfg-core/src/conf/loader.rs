use crate::conf::lower::lower_profile;
use crate::conf::types::{ProxyConfig, ProxyConfigSpec};
use crate::conf::validation::ValidationErrors;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid YAML in {path}: {source}")]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("{path}: {source}")]
    Validation {
        path: PathBuf,
        #[source]
        source: ValidationErrors,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Json,
    Yaml,
}

impl DocumentFormat {
    /// `.yaml` and `.yml` are YAML, everything else is JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some("yaml" | "yml") => Self::Yaml,
            _ => Self::Json,
        }
    }
}

/// Read a wire document without validating it.
pub fn load_spec(path: &Path) -> Result<ProxyConfigSpec, LoadError> {
    let text = fs::read_to_string(path).map_err(|e| LoadError::ReadFile {
        path: path.to_path_buf(),
        source: e,
    })?;

    match DocumentFormat::from_path(path) {
        DocumentFormat::Json => serde_json::from_str(&text).map_err(|e| LoadError::Json {
            path: path.to_path_buf(),
            source: e,
        }),
        DocumentFormat::Yaml => serde_yaml::from_str(&text).map_err(|e| LoadError::Yaml {
            path: path.to_path_buf(),
            source: e,
        }),
    }
}

/// Read, lower and validate a wire document.
pub fn load_profile(path: &Path) -> Result<ProxyConfig, LoadError> {
    let spec = load_spec(path)?;
    lower_profile(&spec).map_err(|e| LoadError::Validation {
        path: path.to_path_buf(),
        source: e,
    })
}
