// gsw: GitLab merge request and to-do reports
//
// SPDX-FileCopyrightText: 2026 gsw contributors
// SPDX-License-Identifier: GPL-2.0-or-later

//! Configuration loading from multiple sources.
//!
//! # Loader Pipeline
//!
//! ```text
//! ConfigLoader::new()
//!   .add_ini_file()
//!   .add_ini_str()
//!   .with_env_prefix()
//!        |
//!        v
//!    build() --> RawConfig --> RemoteConfig
//! ```

use std::path::{Path, PathBuf};

use super::{RawConfig, RemoteConfig};
use crate::error::{ConfigError, GswResult};

/// Builder for loading configuration from multiple sources.
pub struct ConfigLoader {
    builder: config::ConfigBuilder<config::builder::DefaultState>,
    env_prefix: Option<String>,
    files: Vec<PathBuf>,
}

impl ConfigLoader {
    #[must_use]
    pub fn new() -> Self {
        Self {
            builder: config::Config::builder(),
            env_prefix: None,
            files: Vec::new(),
        }
    }

    /// Adds an INI configuration file to the loader.
    ///
    /// The file will be read when `build()` is called. If the file doesn't exist
    /// or contains invalid INI, `build()` will return an error.
    #[must_use]
    pub fn add_ini_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        use config::{File, FileFormat};
        let p = path.as_ref();
        self.builder = self
            .builder
            .add_source(File::from(p).format(FileFormat::Ini).required(true));
        self.files.push(p.to_path_buf());
        self
    }

    #[must_use]
    pub fn add_ini_str(mut self, content: &str) -> Self {
        use config::{File, FileFormat};
        self.builder = self
            .builder
            .add_source(File::from_str(content, FileFormat::Ini));
        self.files.push(PathBuf::from("<string>"));
        self
    }

    #[must_use]
    pub fn with_env_prefix(mut self, prefix: &str) -> Self {
        self.env_prefix = Some(prefix.to_string());
        self
    }

    /// Builds the configuration from all added sources.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if:
    /// - A configuration file is missing or has invalid INI syntax.
    /// - The `[gitlab]` section or its `url`/`token` keys are absent.
    pub fn build(self) -> GswResult<RemoteConfig> {
        let sources = self.format_sources();
        let builder = match &self.env_prefix {
            Some(prefix) => self.builder.add_source(
                config::Environment::with_prefix(prefix)
                    .separator("_")
                    .try_parsing(false),
            ),
            None => self.builder,
        };
        let cfg = builder.build().map_err(|e| parse_error(&sources, &e))?;
        let raw: RawConfig = cfg
            .try_deserialize()
            .map_err(|e| parse_error(&sources, &e))?;
        tracing::debug!(%sources, "configuration loaded");
        RemoteConfig::from_raw(raw)
    }

    fn format_sources(&self) -> String {
        self.files
            .iter()
            .map(|p| p.display().to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

fn parse_error(sources: &str, err: &config::ConfigError) -> ConfigError {
    ConfigError::ParseError {
        path: sources.to_string(),
        message: err.to_string(),
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
