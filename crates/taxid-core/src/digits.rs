//! # Digit Normalization
//!
//! Every operation in this crate starts by reducing raw user input to its
//! ASCII decimal digits. Punctuation, whitespace, letters and non-ASCII
//! digits are discarded; leading zeros are significant and always kept.

use crate::error::NumericError;

/// How [`leading_zeros`] treats an input that is already wider than the
/// requested width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PadMode {
    /// `width` is a minimum: longer inputs are returned unchanged.
    Minimum,
    /// `width` is exact: longer inputs are an error.
    Exact,
}

/// Strip every character that is not an ASCII decimal digit.
///
/// No length or validity check is performed. Returns an empty string when
/// the input contains no digits.
pub fn normalize(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}

/// Normalized digits, or `None` if the input contains no digits at all.
///
/// A string of zeros is numeric: `to_numeric("000")` is `Some("000")`.
pub fn to_numeric(raw: &str) -> Option<String> {
    let digits = normalize(raw);
    if digits.is_empty() {
        None
    } else {
        Some(digits)
    }
}

/// Normalize and parse as an unsigned integer.
///
/// - `Ok(None)`: the input has no digits.
/// - `Ok(Some(n))`: the digits as a number; an all-zero string is `0`.
///
/// # Errors
///
/// Returns [`NumericError::Overflow`] when the digits do not fit in a `u64`.
pub fn to_integer(raw: &str) -> Result<Option<u64>, NumericError> {
    let Some(digits) = to_numeric(raw) else {
        return Ok(None);
    };
    digits
        .parse::<u64>()
        .map(Some)
        .map_err(|_| NumericError::Overflow(raw.to_string()))
}

/// Left-pad a digit string with `'0'` up to `width`.
///
/// `digits` must consist of ASCII decimal digits only; run raw input through
/// [`normalize`] first.
///
/// # Errors
///
/// Returns [`NumericError::NotDigits`] when `digits` contains anything other
/// than `0-9`. With [`PadMode::Exact`], returns [`NumericError::ExceedsWidth`]
/// when `digits` is longer than `width`.
pub fn leading_zeros(digits: &str, width: usize, mode: PadMode) -> Result<String, NumericError> {
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(NumericError::NotDigits(digits.to_string()));
    }
    if digits.len() > width && mode == PadMode::Exact {
        return Err(NumericError::ExceedsWidth {
            input: digits.to_string(),
            width,
        });
    }
    Ok(format!("{digits:0>width$}"))
}

/// Parse a normalized digit string into per-digit values.
///
/// Callers must pass the output of [`normalize`].
pub(crate) fn digit_values(digits: &str) -> Vec<u8> {
    digits.bytes().map(|b| b - b'0').collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_strips_punctuation() {
        assert_eq!(normalize("111.444.777-35"), "11144477735");
        assert_eq!(normalize("11.444.777/0001-61"), "11444777000161");
        assert_eq!(normalize(" 12 ab 3\t"), "123");
    }

    #[test]
    fn normalize_keeps_leading_zeros() {
        assert_eq!(normalize("000.000.001-91"), "00000000191");
    }

    #[test]
    fn normalize_without_digits_is_empty() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("abc-./"), "");
    }

    #[test]
    fn normalize_ignores_non_ascii_digits() {
        // Arabic-Indic and fullwidth digits are not decimal ASCII.
        assert_eq!(normalize("١٢٣"), "");
        assert_eq!(normalize("１2３"), "2");
    }

    #[test]
    fn to_numeric_distinguishes_absent_from_zero() {
        assert_eq!(to_numeric(""), None);
        assert_eq!(to_numeric("abc"), None);
        assert_eq!(to_numeric("a1b2c3").as_deref(), Some("123"));
        assert_eq!(to_numeric("0").as_deref(), Some("0"));
        assert_eq!(to_numeric("00-0").as_deref(), Some("000"));
    }

    #[test]
    fn to_integer_tagged_results() {
        assert_eq!(to_integer(""), Ok(None));
        assert_eq!(to_integer("n/a"), Ok(None));
        assert_eq!(to_integer("000"), Ok(Some(0)));
        assert_eq!(to_integer("R$ 1.234"), Ok(Some(1234)));
        assert_eq!(to_integer("0042"), Ok(Some(42)));
        assert_eq!(to_integer("18446744073709551615"), Ok(Some(u64::MAX)));
    }

    #[test]
    fn to_integer_overflow() {
        let err = to_integer("18446744073709551616").unwrap_err();
        assert_eq!(err, NumericError::Overflow("18446744073709551616".into()));
    }

    #[test]
    fn leading_zeros_pads() {
        assert_eq!(leading_zeros("42", 5, PadMode::Exact).unwrap(), "00042");
        assert_eq!(leading_zeros("", 3, PadMode::Exact).unwrap(), "000");
        assert_eq!(leading_zeros("123", 3, PadMode::Exact).unwrap(), "123");
    }

    #[test]
    fn leading_zeros_minimum_keeps_long_input() {
        assert_eq!(leading_zeros("123456", 3, PadMode::Minimum).unwrap(), "123456");
    }

    #[test]
    fn leading_zeros_exact_rejects_long_input() {
        let err = leading_zeros("123456", 3, PadMode::Exact).unwrap_err();
        assert_eq!(
            err,
            NumericError::ExceedsWidth {
                input: "123456".into(),
                width: 3
            }
        );
    }

    #[test]
    fn leading_zeros_rejects_non_digits() {
        assert_eq!(
            leading_zeros("é", 2, PadMode::Exact).unwrap_err(),
            NumericError::NotDigits("é".into())
        );
        assert_eq!(
            leading_zeros("12-3", 8, PadMode::Minimum).unwrap_err(),
            NumericError::NotDigits("12-3".into())
        );
        assert!(leading_zeros("１２", 3, PadMode::Exact).is_err());
    }

    #[test]
    fn digit_values_maps_ascii() {
        assert_eq!(digit_values("0129"), vec![0, 1, 2, 9]);
    }
}
