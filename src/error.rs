// src/error.rs
use std::path::PathBuf;

use thiserror::Error;

/// Failures reading or appending the price log.
/// A missing or empty log is not an error; see `store::LogSnapshot`.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("cannot read price log {path}: {source}")]
    Read { path: PathBuf, source: std::io::Error },

    #[error("cannot write price log {path}: {source}")]
    Write { path: PathBuf, source: std::io::Error },

    #[error("price log writer lock poisoned")]
    LockPoisoned,
}

/// Failures while walking the catalogue.
#[derive(Error, Debug)]
pub enum ScrapeError {
    #[error("request to {url} failed: {source}")]
    Http { url: String, source: reqwest::Error },

    #[error("HTTP {status} from {url}")]
    Status { url: String, status: u16 },

    #[error("bad catalogue URL {url}: {reason}")]
    BadUrl { url: String, reason: String },
}

/// Boundary errors from command-line tokens.
#[derive(Error, Debug, PartialEq)]
pub enum CliError {
    #[error("unknown argument: {0}")]
    UnknownArg(String),

    #[error("missing value for {0}")]
    MissingValue(&'static str),

    #[error("invalid price for {key}: {value:?}")]
    BadPrice { key: &'static str, value: String },

    #[error("invalid date for {key}: {value:?} (expected YYYY-MM-DD or YYYY-MM-DD HH:MM:SS)")]
    BadDate { key: &'static str, value: String },

    #[error("invalid page count: {0:?}")]
    BadPageCount(String),
}

/// Problems in the key=value settings file.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("cannot read settings {path}: {source}")]
    Read { path: PathBuf, source: std::io::Error },

    #[error("cannot write settings {path}: {source}")]
    Write { path: PathBuf, source: std::io::Error },

    #[error("line {line}: invalid value for {key}: {value:?}")]
    BadValue { line: usize, key: String, value: String },
}

/// Anything a frontend run can fail with.
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Cli(#[from] CliError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}
