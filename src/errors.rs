//! Unified application error type.
//! All modules (store, cli, export, utils) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Storage-related
    // ---------------------------
    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),

    #[error("Failed to read {0}")]
    ReadFailure(String),

    #[error("Failed to decode {0}")]
    DecodeFailure(String),

    #[error("Failed to write {0}")]
    WriteFailure(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export format not supported: {0}")]
    InvalidExportFormat(String),

    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
