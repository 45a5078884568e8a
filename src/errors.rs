use schema::InvalidDexNumber;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the dexview resolution engine
#[derive(Debug, Error)]
pub enum DexError {
    /// Error raised while resolving a page from upstream records
    #[error("Resolve error: {0}")]
    Resolve(#[from] ResolveError),
    /// Error raised while loading the static tables
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
    /// A species bundle file could not be read
    #[error("Failed to read bundle {path}: {source}")]
    BundleIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// A species bundle file is not valid bundle JSON
    #[error("Failed to parse bundle {path}: {source}")]
    BundleParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// A resolved page could not be written as JSON
    #[error("Failed to serialize page: {0}")]
    Output(#[source] serde_json::Error),
}

/// Errors surfaced by the resolvers.
///
/// Expected "no match" outcomes are `Option`s and never show up here.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// Both the current and past type sets were empty
    #[error("No type records to resolve")]
    NoTypeRecords,
    /// The species carries no variety at all
    #[error("Species '{0}' has no varieties")]
    NoVarieties(String),
    /// The species carries varieties but none is marked default
    #[error("Species '{0}' has no default variety")]
    NoDefaultVariety(String),
    /// The evolution chain is missing its root
    #[error("Evolution chain has no root")]
    MissingEvolutionRoot,
    /// The version group is not in the catalog
    #[error("Unknown version group: {0}")]
    UnknownVersionGroup(String),
    /// The version does not belong to the selected version group
    #[error("Version '{version}' is not part of version group '{version_group}'")]
    VersionNotInGroup {
        version: String,
        version_group: String,
    },
    /// A dex number that cannot exist
    #[error(transparent)]
    InvalidDexNumber(#[from] InvalidDexNumber),
}

/// Errors related to loading and validating the static tables
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse {name}: {source}")]
    Parse {
        name: String,
        #[source]
        source: ron::error::SpannedError,
    },
    /// Table content is inconsistent
    #[error("Invalid table {name}: {details}")]
    InvalidTable { name: String, details: String },
}

/// Type alias for Results using DexError
pub type DexResult<T> = Result<T, DexError>;

/// Type alias for Results using ResolveError
pub type ResolveResult<T> = Result<T, ResolveError>;

/// Type alias for Results using ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
