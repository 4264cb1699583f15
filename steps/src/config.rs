//! Step configuration.
//!
//! Everything the host may tune without touching the graph: the base IRI for
//! relative references and minted results, the fallback unit of the sum step,
//! the result naming scheme and extra CSVW unit notations. All keys are
//! optional in TOML:
//!
//! ```toml
//! base_iri = "https://example.org/workflow/run"
//! default_unit = "unit:MilliM"
//! naming = "content-addressed"
//!
//! [units]
//! "n" = "unit:N"
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use semflow_vocab::namespaces::unit;
use semflow_vocab::Vocabulary;
use serde::Deserialize;
use url::Url;

/// Base IRI used when none is configured.
pub const DEFAULT_BASE_IRI: &str = "https://example.org/workflow/run";

/// How result, annotation and association IRIs are minted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResultNaming {
    /// `<prefix>_<execution hash>`: re-running the same inputs overwrites.
    #[default]
    ContentAddressed,
    /// `<prefix>_<random uuid>`: every run adds a new entity.
    Random,
}

/// Errors raised while loading a [`StepConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read config {path}: {source}")]
    Read {
        /// The file that failed.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The configuration is not valid TOML or has wrongly typed keys.
    #[error("invalid config: {0}")]
    Toml(#[from] toml::de::Error),

    /// The base IRI is not absolute.
    #[error("base_iri <{iri}> is not an absolute IRI: {source}")]
    InvalidBase {
        /// The rejected value.
        iri: String,
        /// Why it was rejected.
        source: url::ParseError,
    },
}

/// Settings shared by every step.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StepConfig {
    /// Base IRI for resolving relative IRIs and minting `<base>#…` results.
    pub base_iri: String,
    /// Unit of the sum result when no input carries one.
    pub default_unit: String,
    /// Result naming scheme.
    pub naming: ResultNaming,
    /// Extra CSVW unit notations (case-insensitive) mapped to unit IRIs or
    /// prefixed names; these override the built-in table.
    pub units: BTreeMap<String, String>,
}

impl Default for StepConfig {
    fn default() -> Self {
        Self {
            base_iri: DEFAULT_BASE_IRI.to_owned(),
            default_unit: unit::MILLI_M.to_owned(),
            naming: ResultNaming::default(),
            units: BTreeMap::new(),
        }
    }
}

impl StepConfig {
    /// Parses and validates a TOML configuration.
    ///
    /// Prefixed names (`unit:MilliM`) in `default_unit` and `[units]` are
    /// expanded against the standard vocabulary.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the TOML is invalid or the base IRI is not
    /// absolute.
    pub fn from_toml_str(src: &str) -> Result<Self, ConfigError> {
        let mut config: StepConfig = toml::from_str(src)?;
        config.default_unit = expand_curie(&config.default_unit);
        config.units = config
            .units
            .into_iter()
            .map(|(notation, iri)| (notation.to_lowercase(), expand_curie(&iri)))
            .collect();
        config.validate()?;
        Ok(config)
    }

    /// Reads and parses a TOML configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file cannot be read or is invalid.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let src = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_owned(),
            source,
        })?;
        Self::from_toml_str(&src)
    }

    /// Returns a copy with a different base IRI.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBase`] if `base_iri` is not absolute.
    pub fn with_base_iri(mut self, base_iri: impl Into<String>) -> Result<Self, ConfigError> {
        self.base_iri = base_iri.into();
        self.validate()?;
        Ok(self)
    }

    /// Returns a copy with a different naming scheme.
    #[must_use]
    pub fn with_naming(mut self, naming: ResultNaming) -> Self {
        self.naming = naming;
        self
    }

    /// Checks that the base IRI is absolute.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBase`] otherwise.
    pub fn validate(&self) -> Result<(), ConfigError> {
        Url::parse(&self.base_iri)
            .map(|_| ())
            .map_err(|source| ConfigError::InvalidBase {
                iri: self.base_iri.clone(),
                source,
            })
    }

    /// The base IRI without any fragment; minted IRIs are `<document>#name`.
    #[must_use]
    pub fn document_iri(&self) -> &str {
        self.base_iri
            .split_once('#')
            .map_or(self.base_iri.as_str(), |(doc, _)| doc)
    }

    /// The full IRI of a local result name.
    #[must_use]
    pub fn mint_iri(&self, local: &str) -> String {
        format!("{}#{}", self.document_iri(), local)
    }

    /// Resolves a host-supplied IRI reference against the base IRI.
    ///
    /// Absolute IRIs are returned unchanged; anything that cannot be resolved
    /// is returned as given.
    #[must_use]
    pub fn resolve(&self, reference: &str) -> String {
        if Url::parse(reference).is_ok() {
            return reference.to_owned();
        }
        Url::parse(&self.base_iri)
            .and_then(|base| base.join(reference))
            .map_or_else(|_| reference.to_owned(), String::from)
    }
}

fn expand_curie(value: &str) -> String {
    if value.contains("://") {
        return value.to_owned();
    }
    Vocabulary::standard()
        .expand(value)
        .unwrap_or_else(|| value.to_owned())
}
