//! Shared configuration loader for the MessageML toolchain.
//!
//! `defaults/messageml.default.toml` is embedded into every binary so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files on top
//! of those defaults via [`Loader`] before deserializing into [`MessageMlConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use messageml_forms::{BuildOptions, ContainmentPolicy, ContainmentRules, ElementKind};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/messageml.default.toml");

/// Top-level configuration consumed by MessageML applications.
#[derive(Debug, Clone, Deserialize)]
pub struct MessageMlConfig {
    pub containment: ContainmentConfig,
    pub convert: ConvertConfig,
    pub inspect: InspectConfig,
}

impl MessageMlConfig {
    /// Library options derived from this configuration.
    pub fn build_options(&self) -> BuildOptions {
        BuildOptions::new(ContainmentRules::from(&self.containment))
    }
}

/// Containment policy per form field.
#[derive(Debug, Clone, Deserialize)]
pub struct ContainmentConfig {
    pub button: ContainmentPolicy,
    pub checkbox: ContainmentPolicy,
    pub person_selector: ContainmentPolicy,
}

impl From<&ContainmentConfig> for ContainmentRules {
    fn from(config: &ContainmentConfig) -> Self {
        ContainmentRules::new()
            .with_policy(ElementKind::Button, config.button)
            .with_policy(ElementKind::Checkbox, config.checkbox)
            .with_policy(ElementKind::PersonSelector, config.person_selector)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ConvertConfig {
    pub default_target: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InspectConfig {
    pub pretty_json: bool,
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<MessageMlConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<MessageMlConfig, ConfigError> {
    Loader::new().build()
}
