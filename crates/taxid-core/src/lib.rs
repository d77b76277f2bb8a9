//! # taxid-core: Brazilian Taxpayer Identifiers
//!
//! Normalization, modulo-11 check-digit validation and formatting for CPF
//! (11-digit individual) and CNPJ (14-digit legal entity) numbers.
//!
//! ## Key Design Principles
//!
//! 1. **Digits, not integers.** Identifiers are digit strings. Leading zeros
//!    are significant and are never stripped before validation.
//!
//! 2. **Validators are total.** [`is_valid_cpf`], [`is_valid_cnpj`] and
//!    [`is_valid_cpf_cnpj`] return `bool` for any input and never panic.
//!
//! 3. **Formatting does not imply validity.** [`format_cpf`] and
//!    [`format_cnpj`] pad short input and fail only when the input has more
//!    digits than the target width. Stricter behavior is opt-in through an
//!    explicit [`FormatPolicy`].
//!
//! 4. **Newtypes for validated values.** [`Cpf`], [`Cnpj`] and [`TaxId`] can
//!    only hold valid identifiers, including when deserialized.
//!
//! ## Crate Policy
//!
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - No global state; everything is `Send + Sync`.
//! - Logging goes through `tracing`; installing a subscriber is the caller's job.
//!
//! ```
//! use taxid_core::{format_cnpj, is_valid_cpf, to_numeric, Cpf};
//!
//! assert!(is_valid_cpf("111.444.777-35"));
//! assert_eq!(format_cnpj("11444777000161").unwrap(), "11.444.777/0001-61");
//! assert_eq!(to_numeric("a1b2c3").as_deref(), Some("123"));
//!
//! let cpf: Cpf = "11144477735".parse().unwrap();
//! assert_eq!(cpf.to_string(), "111.444.777-35");
//! ```

pub mod checksum;
pub mod config;
pub mod digits;
pub mod error;
pub mod format;
pub mod identity;

// Re-export primary items for ergonomic imports.
pub use checksum::{
    check_digit, cnpj_check_digits, cpf_check_digits, is_valid_cnpj, is_valid_cpf,
    is_valid_cpf_cnpj, CNPJ_LEN, CPF_LEN,
};
pub use config::FormatPolicy;
pub use digits::{leading_zeros, normalize, to_integer, to_numeric, PadMode};
pub use error::{ConfigError, FormatError, NumericError, TaxIdError, ValidationError};
pub use format::{format_as, format_cnpj, format_cpf, Formatter};
pub use identity::{Cnpj, Cpf, TaxId, TaxIdKind};
