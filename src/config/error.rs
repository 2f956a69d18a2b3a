//! Errors raised while loading `folio.toml`.

use crate::registry::RegistryError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("folio.toml is not valid TOML")]
    Toml(#[from] toml::de::Error),

    #[error("invalid [[modules]] table: {0}")]
    Registry(#[from] RegistryError),

    #[error("invalid config: {0}")]
    Validation(String),
}
