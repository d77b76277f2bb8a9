//! # Identity Newtypes
//!
//! Domain-primitive newtypes for Brazilian taxpayer identifiers. Each
//! identifier is a distinct type: you cannot pass a [`Cnpj`] where a
//! [`Cpf`] is expected.
//!
//! ## Validation
//!
//! [`Cpf`] and [`Cnpj`] fully validate at construction time (length,
//! repeated-digit guard, both check digits) and store the canonical
//! digits-only form. Deserialization routes through the same constructors,
//! so an invalid value can never be materialized from JSON or YAML.
//!
//! ## Reference
//!
//! - CPF: Cadastro de Pessoas Físicas (11 digits, `XXX.XXX.XXX-XX`)
//! - CNPJ: Cadastro Nacional da Pessoa Jurídica (14 digits, `XX.XXX.XXX/XXXX-XX`)

use serde::{Deserialize, Serialize};

use crate::checksum::{is_valid_cnpj, is_valid_cpf, CNPJ_LEN, CPF_LEN};
use crate::digits::normalize;
use crate::error::ValidationError;
use crate::format::{render_cnpj, render_cpf};

/// Implements `Deserialize` for string newtypes that must validate their
/// contents. Deserializes as a plain `String`, then routes through the
/// type's `new()` constructor.
macro_rules! impl_validating_deserialize {
    ($ty:ident) => {
        impl<'de> Deserialize<'de> for $ty {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let raw = String::deserialize(deserializer)?;
                Self::new(raw).map_err(serde::de::Error::custom)
            }
        }
    };
}

// ---------------------------------------------------------------------------
// Kind
// ---------------------------------------------------------------------------

/// Which kind of identifier a value is, or is expected to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaxIdKind {
    /// Neither a CPF nor a CNPJ.
    Invalid,
    /// Individual taxpayer (11 digits).
    Cpf,
    /// Legal entity (14 digits).
    Cnpj,
}

impl TaxIdKind {
    /// Classify by full validation: `Cpf` if `raw` is a valid CPF, `Cnpj` if
    /// it is a valid CNPJ, otherwise `Invalid`.
    pub fn detect(raw: &str) -> Self {
        if is_valid_cpf(raw) {
            Self::Cpf
        } else if is_valid_cnpj(raw) {
            Self::Cnpj
        } else {
            Self::Invalid
        }
    }

    /// Classify by digit count alone, without checking the verifiers.
    pub fn from_len(raw: &str) -> Self {
        match normalize(raw).len() {
            CPF_LEN => Self::Cpf,
            CNPJ_LEN => Self::Cnpj,
            _ => Self::Invalid,
        }
    }

    /// Number of digits for this kind, `None` for `Invalid`.
    pub fn expected_len(self) -> Option<usize> {
        match self {
            Self::Cpf => Some(CPF_LEN),
            Self::Cnpj => Some(CNPJ_LEN),
            Self::Invalid => None,
        }
    }

    /// Stable numeric code: `Invalid = 0`, `Cpf = 1`, `Cnpj = 2`.
    pub fn code(self) -> u8 {
        match self {
            Self::Invalid => 0,
            Self::Cpf => 1,
            Self::Cnpj => 2,
        }
    }

    /// Inverse of [`TaxIdKind::code`].
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::UnknownKindCode`] for codes above 2.
    pub fn from_code(code: u8) -> Result<Self, ValidationError> {
        match code {
            0 => Ok(Self::Invalid),
            1 => Ok(Self::Cpf),
            2 => Ok(Self::Cnpj),
            other => Err(ValidationError::UnknownKindCode(other)),
        }
    }
}

impl std::fmt::Display for TaxIdKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Invalid => write!(f, "invalid"),
            Self::Cpf => write!(f, "CPF"),
            Self::Cnpj => write!(f, "CNPJ"),
        }
    }
}

// ---------------------------------------------------------------------------
// Validated identifiers
// ---------------------------------------------------------------------------

/// Brazilian individual taxpayer number (CPF).
///
/// The canonical storage format is 11 digits without punctuation. The
/// constructor accepts any punctuation, e.g. both:
/// - `"11144477735"`
/// - `"111.444.777-35"`
///
/// # Validation
///
/// - Exactly 11 digits after normalization (leading zeros count)
/// - Not a single digit repeated 11 times
/// - Both modulo-11 check digits match
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Cpf(String);

impl_validating_deserialize!(Cpf);

impl Cpf {
    /// Create a CPF from raw input, validating it.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidCpf`] carrying the raw input.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = value.into();
        if !is_valid_cpf(&raw) {
            return Err(ValidationError::InvalidCpf(raw));
        }
        Ok(Self(normalize(&raw)))
    }

    /// Access the CPF in canonical 11-digit form.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Return the CPF in punctuated form: XXX.XXX.XXX-XX.
    pub fn formatted(&self) -> String {
        render_cpf(&self.0)
    }
}

impl std::fmt::Display for Cpf {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.formatted())
    }
}

impl std::str::FromStr for Cpf {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

/// Brazilian legal-entity taxpayer number (CNPJ).
///
/// Stored as 14 digits. Accepts `"11444777000161"` and
/// `"11.444.777/0001-61"` alike.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Cnpj(String);

impl_validating_deserialize!(Cnpj);

impl Cnpj {
    /// Create a CNPJ from raw input, validating it.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidCnpj`] carrying the raw input.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = value.into();
        if !is_valid_cnpj(&raw) {
            return Err(ValidationError::InvalidCnpj(raw));
        }
        Ok(Self(normalize(&raw)))
    }

    /// Access the CNPJ in canonical 14-digit form.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The 8-digit root shared by every establishment of the same entity.
    pub fn root(&self) -> &str {
        &self.0[..8]
    }

    /// The 4-digit establishment number (`0001` is the head office).
    pub fn branch(&self) -> &str {
        &self.0[8..12]
    }

    /// Return the CNPJ in punctuated form: XX.XXX.XXX/XXXX-XX.
    pub fn formatted(&self) -> String {
        render_cnpj(&self.0)
    }
}

impl std::fmt::Display for Cnpj {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.formatted())
    }
}

impl std::str::FromStr for Cnpj {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

/// Either a CPF or a CNPJ.
///
/// Serialized as the canonical digits; deserialization accepts either kind.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TaxId {
    /// Individual.
    Cpf(Cpf),
    /// Legal entity.
    Cnpj(Cnpj),
}

impl TaxId {
    /// Parse raw input as whichever kind it validates as.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::UnrecognizedTaxId`] when the input is
    /// neither a valid CPF nor a valid CNPJ.
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        match TaxIdKind::detect(raw) {
            TaxIdKind::Cpf => Ok(Self::Cpf(Cpf(normalize(raw)))),
            TaxIdKind::Cnpj => Ok(Self::Cnpj(Cnpj(normalize(raw)))),
            TaxIdKind::Invalid => Err(ValidationError::UnrecognizedTaxId(raw.to_string())),
        }
    }

    /// The kind of this identifier.
    pub fn kind(&self) -> TaxIdKind {
        match self {
            Self::Cpf(_) => TaxIdKind::Cpf,
            Self::Cnpj(_) => TaxIdKind::Cnpj,
        }
    }

    /// Canonical digits.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Cpf(cpf) => cpf.as_str(),
            Self::Cnpj(cnpj) => cnpj.as_str(),
        }
    }

    /// Punctuated form for the identifier's kind.
    pub fn formatted(&self) -> String {
        match self {
            Self::Cpf(cpf) => cpf.formatted(),
            Self::Cnpj(cnpj) => cnpj.formatted(),
        }
    }
}

impl From<Cpf> for TaxId {
    fn from(cpf: Cpf) -> Self {
        Self::Cpf(cpf)
    }
}

impl From<Cnpj> for TaxId {
    fn from(cnpj: Cnpj) -> Self {
        Self::Cnpj(cnpj)
    }
}

impl std::fmt::Display for TaxId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.formatted())
    }
}

impl std::str::FromStr for TaxId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for TaxId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for TaxId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}
