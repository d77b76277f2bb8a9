//! # Punctuated Formatting
//!
//! Renders identifiers in their conventional printed forms:
//!
//! | Kind | Width | Pattern |
//! |------|-------|---------|
//! | CPF  | 11    | `DDD.DDD.DDD-DD` |
//! | CNPJ | 14    | `DD.DDD.DDD/DDDD-DD` |
//!
//! Input is normalized and left-padded with zeros to the target width.
//! Padding means formatting does not imply validity: `format_cpf("1")` is
//! `"000.000.000-01"`. The only failure under the default policy is an input
//! with more digits than the width.
//!
//! [`Formatter`] applies an explicit [`FormatPolicy`] for callers that need
//! stricter behavior.

use crate::checksum::{is_valid_cnpj, is_valid_cpf, CNPJ_LEN, CPF_LEN};
use crate::config::FormatPolicy;
use crate::digits::{leading_zeros, normalize, PadMode};
use crate::error::FormatError;
use crate::identity::TaxIdKind;

/// Format as `DDD.DDD.DDD-DD`, left-padding to 11 digits.
///
/// # Errors
///
/// Returns [`FormatError::TooLong`] if the input has more than 11 digits.
pub fn format_cpf(raw: &str) -> Result<String, FormatError> {
    Formatter::default().format_cpf(raw)
}

/// Format as `DD.DDD.DDD/DDDD-DD`, left-padding to 14 digits.
///
/// # Errors
///
/// Returns [`FormatError::TooLong`] if the input has more than 14 digits.
pub fn format_cnpj(raw: &str) -> Result<String, FormatError> {
    Formatter::default().format_cnpj(raw)
}

/// Format according to `kind`.
///
/// # Errors
///
/// As [`format_cpf`] / [`format_cnpj`]; [`FormatError::UnknownKind`] for
/// [`TaxIdKind::Invalid`].
pub fn format_as(kind: TaxIdKind, raw: &str) -> Result<String, FormatError> {
    Formatter::default().format_as(kind, raw)
}

/// Policy-driven formatter.
///
/// The default policy reproduces [`format_cpf`] and [`format_cnpj`] exactly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Formatter {
    policy: FormatPolicy,
}

impl Formatter {
    /// Create a formatter with the given policy.
    pub fn new(policy: FormatPolicy) -> Self {
        Self { policy }
    }

    /// The active policy.
    pub fn policy(&self) -> &FormatPolicy {
        &self.policy
    }

    /// Format as a CPF under this formatter's policy.
    ///
    /// # Errors
    ///
    /// See [`FormatError`].
    pub fn format_cpf(&self, raw: &str) -> Result<String, FormatError> {
        let digits = self.prepare(TaxIdKind::Cpf, raw, CPF_LEN)?;
        if self.policy.require_valid && !is_valid_cpf(&digits) {
            return Err(self.reject(FormatError::InvalidChecksum {
                kind: TaxIdKind::Cpf,
                input: raw.to_string(),
            }));
        }
        Ok(render_cpf(&digits))
    }

    /// Format as a CNPJ under this formatter's policy.
    ///
    /// # Errors
    ///
    /// See [`FormatError`].
    pub fn format_cnpj(&self, raw: &str) -> Result<String, FormatError> {
        let digits = self.prepare(TaxIdKind::Cnpj, raw, CNPJ_LEN)?;
        if self.policy.require_valid && !is_valid_cnpj(&digits) {
            return Err(self.reject(FormatError::InvalidChecksum {
                kind: TaxIdKind::Cnpj,
                input: raw.to_string(),
            }));
        }
        Ok(render_cnpj(&digits))
    }

    /// Format according to `kind` under this formatter's policy.
    ///
    /// # Errors
    ///
    /// See [`FormatError`].
    pub fn format_as(&self, kind: TaxIdKind, raw: &str) -> Result<String, FormatError> {
        match kind {
            TaxIdKind::Cpf => self.format_cpf(raw),
            TaxIdKind::Cnpj => self.format_cnpj(raw),
            TaxIdKind::Invalid => Err(self.reject(FormatError::UnknownKind(raw.to_string()))),
        }
    }

    /// Normalize and bring to exactly `width` digits.
    fn prepare(&self, kind: TaxIdKind, raw: &str, width: usize) -> Result<String, FormatError> {
        let digits = normalize(raw);
        if digits.len() < width && !self.policy.pad_short_input {
            return Err(self.reject(FormatError::TooShort {
                kind,
                input: raw.to_string(),
                digits: digits.len(),
                width,
            }));
        }
        leading_zeros(&digits, width, PadMode::Exact).map_err(|_| {
            self.reject(FormatError::TooLong {
                kind,
                input: raw.to_string(),
                digits: digits.len(),
                width,
            })
        })
    }

    fn reject(&self, err: FormatError) -> FormatError {
        tracing::debug!(error = %err, "format rejected");
        err
    }
}

/// Punctuate exactly 11 ASCII digits.
pub(crate) fn render_cpf(d: &str) -> String {
    format!("{}.{}.{}-{}", &d[..3], &d[3..6], &d[6..9], &d[9..11])
}

/// Punctuate exactly 14 ASCII digits.
pub(crate) fn render_cnpj(d: &str) -> String {
    format!(
        "{}.{}.{}/{}-{}",
        &d[..2],
        &d[2..5],
        &d[5..8],
        &d[8..12],
        &d[12..14]
    )
}
