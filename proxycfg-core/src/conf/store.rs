//! Persistence collaborator for accepted configurations, keyed by service name.
//!
//! Stores see only accepted values; they never re-interpret validation.

use crate::conf::lower::lower_profile;
use crate::conf::types::{ProxyConfig, ProxyConfigSpec};
use crate::conf::validation::ValidationErrors;
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("configuration '{name}' not found")]
    NotFound { name: String },

    #[error("configuration '{name}' already exists")]
    Conflict { name: String },

    #[error("'{name}' cannot be used as a stored configuration name")]
    InvalidName { name: String },

    #[error("configuration stored as '{name}' is named '{found}'")]
    NameMismatch { name: String, found: String },

    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to decode {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("stored configuration '{name}' is invalid: {source}")]
    Invalid {
        name: String,
        #[source]
        source: ValidationErrors,
    },
}

impl StoreError {
    fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveMode {
    /// The name must not exist yet.
    Create,
    /// The name must already exist.
    Update,
}

pub trait ConfigStore {
    fn load(&self, service_name: &str) -> Result<ProxyConfig, StoreError>;

    fn save(&mut self, config: &ProxyConfig, mode: SaveMode) -> Result<(), StoreError>;
}

fn check_mode(name: &str, exists: bool, mode: SaveMode) -> Result<(), StoreError> {
    match (mode, exists) {
        (SaveMode::Create, true) => Err(StoreError::Conflict {
            name: name.to_owned(),
        }),
        (SaveMode::Update, false) => Err(StoreError::NotFound {
            name: name.to_owned(),
        }),
        _ => Ok(()),
    }
}

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    configs: BTreeMap<String, ProxyConfig>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.configs.keys().map(String::as_str)
    }
}

impl ConfigStore for MemoryStore {
    fn load(&self, service_name: &str) -> Result<ProxyConfig, StoreError> {
        self.configs
            .get(service_name)
            .cloned()
            .ok_or_else(|| StoreError::NotFound {
                name: service_name.to_owned(),
            })
    }

    fn save(&mut self, config: &ProxyConfig, mode: SaveMode) -> Result<(), StoreError> {
        let name = &config.service_name;
        check_mode(name, self.configs.contains_key(name), mode)?;
        self.configs.insert(name.clone(), config.clone());
        Ok(())
    }
}

/// One pretty-printed JSON wire document per service, named `<service>.json`.
#[derive(Debug, Clone)]
pub struct DirStore {
    root: PathBuf,
}

impl DirStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, name: &str) -> Result<PathBuf, StoreError> {
        let safe = !name.is_empty()
            && !name.starts_with('.')
            && name
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'));
        if !safe {
            return Err(StoreError::InvalidName {
                name: name.to_owned(),
            });
        }
        Ok(self.root.join(format!("{name}.json")))
    }
}

impl ConfigStore for DirStore {
    fn load(&self, service_name: &str) -> Result<ProxyConfig, StoreError> {
        let path = self.path_for(service_name)?;
        let text = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(StoreError::NotFound {
                    name: service_name.to_owned(),
                });
            }
            Err(e) => return Err(StoreError::io(&path, e)),
        };

        let spec: ProxyConfigSpec =
            serde_json::from_str(&text).map_err(|e| StoreError::Decode {
                path: path.clone(),
                source: e,
            })?;
        let config = lower_profile(&spec).map_err(|e| StoreError::Invalid {
            name: service_name.to_owned(),
            source: e,
        })?;
        if config.service_name != service_name {
            return Err(StoreError::NameMismatch {
                name: service_name.to_owned(),
                found: config.service_name,
            });
        }

        debug!(service = service_name, path = %path.display(), "configuration loaded");
        Ok(config)
    }

    fn save(&mut self, config: &ProxyConfig, mode: SaveMode) -> Result<(), StoreError> {
        let name = &config.service_name;
        let path = self.path_for(name)?;
        check_mode(name, path.is_file(), mode)?;

        fs::create_dir_all(&self.root).map_err(|e| StoreError::io(&self.root, e))?;

        let spec = ProxyConfigSpec::from(config);
        let text = serde_json::to_string_pretty(&spec).map_err(|e| StoreError::Decode {
            path: path.clone(),
            source: e,
        })?;

        // Write next to the target and rename, so readers never see a torn file.
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, text).map_err(|e| StoreError::io(&tmp, e))?;
        if let Err(e) = fs::rename(&tmp, &path) {
            let _ = fs::remove_file(&tmp);
            return Err(StoreError::io(&path, e));
        }

        info!(service = %name, path = %path.display(), ?mode, "configuration saved");
        Ok(())
    }
}
