// SPDX-License-Identifier: MPL-2.0
//! Error types for the I/O edges of the crate.
//!
//! Controllers never fail: invalid transitions are no-ops. Errors only
//! surface where the crate touches the outside world (settings file, theme
//! storage, logging setup, contact endpoint responses), and callers recover
//! from them locally.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config Error: {0}")]
    Config(String),

    #[error("Storage Error: {0}")]
    Storage(String),

    #[error("Submission Error: {0}")]
    Submission(String),
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Submission(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
