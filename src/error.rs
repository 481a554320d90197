//! Error types for life-seed.

use thiserror::Error;

/// Errors from constructing a grid.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// Width or height was not strictly positive.
    #[error("invalid grid dimension: {width}x{height}")]
    InvalidDimension { width: i64, height: i64 },
    /// `width * height` cells cannot be allocated.
    #[error("grid too large: {width}x{height}")]
    TooLarge { width: i64, height: i64 },
}

/// Errors from parsing an apgcode or decoding its Wechsler body.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApgError {
    /// The code is missing a segment or carries an unusable period.
    #[error("malformed apgcode {code:?}: {reason}")]
    MalformedCode { code: String, reason: String },

    /// The two-letter prefix is not `xs`, `xp` or `xq`.
    #[error("unrecognized pattern kind {0:?}")]
    UnrecognizedPatternKind(String),

    /// A byte in the Wechsler body is not part of the grammar.
    #[error("malformed wechsler input at byte {position}: {found}")]
    MalformedInput { position: usize, found: String },
}

/// Errors from parsing a `B/S` rulestring.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuleError {
    #[error("rulestring {0:?} must look like B3/S23")]
    Syntax(String),

    #[error("neighbor count {0} out of range 0..=8")]
    CountOutOfRange(String),
}

/// Errors from loading a simulation config.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Top-level error for driving a simulation.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Grid(#[from] GridError),

    #[error(transparent)]
    Apg(#[from] ApgError),

    #[error(transparent)]
    Rule(#[from] RuleError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}
