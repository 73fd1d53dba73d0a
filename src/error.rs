//! Error types for language selection and settings persistence.
//!
//! String lookups never fail; these only surface from parsing a language
//! code explicitly or from reading/writing the settings file.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LangError {
    /// Language code not in the supported set
    #[error("Unknown language code: {0:?}")]
    UnknownLanguage(String),

    /// Settings file could not be read or written
    #[error("Settings I/O failed for {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Registry key could not be opened or written (Windows)
    #[error("Registry access failed for {key}: {source}")]
    Registry {
        key: &'static str,
        #[source]
        source: std::io::Error,
    },

    /// Settings file content is not valid JSON
    #[error("Invalid settings JSON: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, LangError>;
