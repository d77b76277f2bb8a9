//! # Error Hierarchy
//!
//! Structured error types for the crate, built with `thiserror`.
//! No `Box<dyn Error>`, no `.unwrap()` outside tests.
//!
//! Validators never produce errors: malformed input is simply not a valid
//! identifier and yields `false`. Errors are reserved for the operations that
//! must produce a value and cannot: formatting an over-long input, parsing a
//! newtype, converting digits to an integer, and loading configuration.

use thiserror::Error;

use crate::identity::TaxIdKind;

/// Top-level error type for the crate.
#[derive(Error, Debug)]
pub enum TaxIdError {
    /// Formatting failure.
    #[error("format error: {0}")]
    Format(#[from] FormatError),

    /// Newtype construction failure.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Numeric conversion failure.
    #[error("numeric error: {0}")]
    Numeric(#[from] NumericError),

    /// Configuration could not be loaded.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Errors raised while rendering an identifier in its punctuated form.
///
/// Every variant carries the raw input so callers can report exactly what
/// was rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// The input has more digits than the target width. Left-padding cannot
    /// shrink a value, so there is no well-formed rendering.
    #[error("cannot format \"{input}\" as {kind}: {digits} digits exceeds width {width}")]
    TooLong {
        /// Identifier kind being rendered.
        kind: TaxIdKind,
        /// The offending raw input.
        input: String,
        /// Number of digits found after normalization.
        digits: usize,
        /// Required width.
        width: usize,
    },

    /// The input has fewer digits than the target width and the active
    /// policy forbids padding.
    #[error("cannot format \"{input}\" as {kind}: {digits} digits is short of width {width} and padding is disabled")]
    TooShort {
        /// Identifier kind being rendered.
        kind: TaxIdKind,
        /// The offending raw input.
        input: String,
        /// Number of digits found after normalization.
        digits: usize,
        /// Required width.
        width: usize,
    },

    /// The active policy requires a valid identifier and the check digits
    /// do not match.
    #[error("cannot format \"{input}\" as {kind}: check digits do not match")]
    InvalidChecksum {
        /// Identifier kind being rendered.
        kind: TaxIdKind,
        /// The offending raw input.
        input: String,
    },

    /// Asked to format as [`TaxIdKind::Invalid`].
    #[error("cannot format \"{0}\": no identifier kind given")]
    UnknownKind(String),
}

/// Validation errors for the identifier newtypes.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Not a valid CPF.
    #[error("invalid CPF: \"{0}\" (expected 11 digits with matching check digits, optionally as XXX.XXX.XXX-XX)")]
    InvalidCpf(String),

    /// Not a valid CNPJ.
    #[error("invalid CNPJ: \"{0}\" (expected 14 digits with matching check digits, optionally as XX.XXX.XXX/XXXX-XX)")]
    InvalidCnpj(String),

    /// Neither a valid CPF nor a valid CNPJ.
    #[error("unrecognized tax identifier: \"{0}\" (expected a valid CPF or CNPJ)")]
    UnrecognizedTaxId(String),

    /// Unknown numeric kind code.
    #[error("unknown tax identifier kind code: {0} (expected 0, 1 or 2)")]
    UnknownKindCode(u8),
}

/// Errors converting a digit string into an integer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NumericError {
    /// The digits do not fit in a `u64`.
    #[error("numeric value overflows u64: \"{0}\"")]
    Overflow(String),

    /// Input expected to be digits only contains other characters.
    #[error("\"{0}\" is not a digit string (expected only 0-9)")]
    NotDigits(String),

    /// The digits are wider than an exact padding width.
    #[error("\"{input}\" has more digits than the maximum width {width}")]
    ExceedsWidth {
        /// The offending digit string.
        input: String,
        /// The exact width requested.
        width: usize,
    },
}

/// Errors loading a [`FormatPolicy`](crate::config::FormatPolicy).
#[derive(Error, Debug)]
pub enum ConfigError {
    /// YAML document could not be parsed.
    #[error("invalid YAML policy: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON document could not be parsed.
    #[error("invalid JSON policy: {0}")]
    Json(#[from] serde_json::Error),
}
