//! Unified application error type.
//! Calculation failures are plain values (`CalculationError`) so the core stays
//! pure; everything the CLI can hit is folded into `AppError`.

use std::fmt;
use std::io;
use thiserror::Error;

/// User-input validation failures produced by the calculator.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalculationError {
    #[error("Please enter the login time.")]
    MissingLoginTime,

    #[error("Effective time cannot be greater than gross time.")]
    EffectiveExceedsGross,

    #[error("Break #{0}: end time must be after start time.")]
    Order(u32),

    #[error("Break #{0} overlaps another break.")]
    Overlap(u32),
}

/// Wrapper used to display a list of calculation errors on one line each.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalculationErrors(pub Vec<CalculationError>);

impl fmt::Display for CalculationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lines: Vec<String> = self.0.iter().map(|e| e.to_string()).collect();
        write!(f, "{}", lines.join("\n"))
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid time format: {0} (expected HH:MM)")]
    InvalidTime(String),

    #[error("Invalid duration: {0}")]
    InvalidDuration(String),

    #[error("Invalid break interval: {0} (expected START-END, START- or -END)")]
    InvalidBreak(String),

    // ---------------------------
    // Logic errors
    // ---------------------------
    #[error("{0}")]
    Calculation(CalculationErrors),

    #[error("Unknown break id: {0}")]
    UnknownBreak(u32),

    #[error("At least one break slot must remain")]
    LastBreak,

    #[error("Time extraction error: {0}")]
    Extract(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration: {0}")]
    ConfigLoad(String),

    #[error("Failed to save configuration: {0}")]
    ConfigSave(String),

    // ---------------------------
    // Output
    // ---------------------------
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<Vec<CalculationError>> for AppError {
    fn from(errors: Vec<CalculationError>) -> Self {
        AppError::Calculation(CalculationErrors(errors))
    }
}

pub type AppResult<T> = Result<T, AppError>;
