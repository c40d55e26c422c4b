use crate::conf::error::{ConfigError, ValidationError};
use crate::conf::flatten::{
    FlatProfile, flatten, read_checker, read_options, unflatten_checked, write_checker,
    write_options,
};
use crate::conf::paths;
use crate::conf::types::{
    CheckerKind, Discriminators, FlatConfig, FlatValue, ProtocolKind, ProxyConfig,
};
use crate::conf::validation::ValidationErrors;
use tracing::debug;

/// One working copy of a configuration, between load/create and submit/discard.
///
/// Every edit is applied immediately. The two discriminators change only
/// through [`EditSession::select_checker`] and [`EditSession::select_protocol`],
/// which drop the payloads of the previously selected variant.
#[derive(Debug, Clone, PartialEq)]
pub struct EditSession {
    profile: FlatProfile,
    original_name: Option<String>,
}

impl EditSession {
    /// Start a session for a configuration that does not exist yet.
    pub fn create() -> Self {
        Self {
            profile: flatten(None),
            original_name: None,
        }
    }

    /// Start a session editing an existing configuration.
    pub fn load(config: &ProxyConfig) -> Self {
        debug!(service = %config.service_name, "edit session loaded");
        Self {
            profile: flatten(Some(config)),
            original_name: Some(config.service_name.clone()),
        }
    }

    pub fn is_new(&self) -> bool {
        self.original_name.is_none()
    }

    pub fn original_name(&self) -> Option<&str> {
        self.original_name.as_deref()
    }

    pub fn values(&self) -> &FlatConfig {
        &self.profile.values
    }

    pub fn discriminators(&self) -> Discriminators {
        self.profile.discriminators
    }

    pub fn get(&self, path: &str) -> Option<&FlatValue> {
        self.profile.values.get(path)
    }

    /// Set one field. The session is left untouched when the edit is rejected.
    pub fn set(&mut self, path: &str, value: impl Into<FlatValue>) -> Result<(), ConfigError> {
        let value = value.into();

        if !paths::is_known(path) {
            return Err(ConfigError::validation(path, ValidationError::UnknownField));
        }

        if paths::is_checker_payload(path) {
            let active = self.profile.discriminators.checker;
            if active.payload_path() != Some(path) {
                return Err(ConfigError::validation(
                    path,
                    ValidationError::OrphanedVariant {
                        orphan: path.to_owned(),
                        active: active.to_string(),
                    },
                ));
            }
        }

        if path == paths::SERVICE_NAME
            && let Some(original) = &self.original_name
            && value.to_text() != *original
        {
            return Err(ConfigError::validation(
                path,
                ValidationError::Immutable {
                    original: original.clone(),
                },
            ));
        }

        debug!(path, "field edited");
        self.profile.values.insert(path, value);
        Ok(())
    }

    /// Select a checker. Payloads of other checkers are discarded; a newly
    /// selected checker starts with an empty payload.
    pub fn select_checker(&mut self, kind: CheckerKind) {
        let mut slot = read_checker(&self.profile.values, self.profile.discriminators.checker);
        slot.on_discriminator_change(kind);
        write_checker(&slot, &mut self.profile.values);
        self.profile.discriminators.checker = kind;
        debug!(checker = %kind, "checker selected");
    }

    /// Select a protocol. A different protocol starts with no options; the
    /// previous payload is not translated.
    pub fn select_protocol(&mut self, protocol: ProtocolKind) {
        let mut slot = read_options(&self.profile.values, self.profile.discriminators.protocol);
        slot.on_discriminator_change(protocol);
        write_options(&slot, &mut self.profile.values);
        self.profile.discriminators.protocol = protocol;
        debug!(protocol = %protocol, "protocol selected");
    }

    /// Rebuild and validate the working copy.
    ///
    /// The session stays usable after a rejection so the failing fields can be
    /// edited and submitted again.
    pub fn submit(&self) -> Result<ProxyConfig, ValidationErrors> {
        let result = unflatten_checked(
            &self.profile.values,
            &self.profile.discriminators,
            self.original_name.as_deref(),
        );
        match &result {
            Ok(config) => debug!(service = %config.service_name, "edit session accepted"),
            Err(errors) => debug!(errors = errors.len(), "edit session rejected"),
        }
        result
    }
}
