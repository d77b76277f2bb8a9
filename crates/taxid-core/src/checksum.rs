//! # Modulo-11 Check Digits
//!
//! CPF and CNPJ both end in two verifier digits computed from the preceding
//! digits with the Receita Federal modulo-11 scheme:
//!
//! ```text
//! sum       = Σ digit[i] * weight[i]
//! remainder = sum mod 11
//! check     = 0            if remainder < 2
//!           = 11 - remainder otherwise
//! ```
//!
//! The second verifier is computed over the base digits *and* the first
//! verifier, with a weight table one entry longer.
//!
//! Input is normalized first and the length is checked as-is: leading zeros
//! are part of the identifier and are never stripped.

use crate::digits::{digit_values, normalize};

/// Number of digits in a CPF.
pub const CPF_LEN: usize = 11;

/// Number of digits in a CNPJ.
pub const CNPJ_LEN: usize = 14;

/// Weights for the first CPF verifier (digits 0..9).
pub const CPF_WEIGHTS_FIRST: [u32; 9] = [10, 9, 8, 7, 6, 5, 4, 3, 2];

/// Weights for the second CPF verifier (digits 0..10).
pub const CPF_WEIGHTS_SECOND: [u32; 10] = [11, 10, 9, 8, 7, 6, 5, 4, 3, 2];

/// Weights for the first CNPJ verifier (digits 0..12).
pub const CNPJ_WEIGHTS_FIRST: [u32; 12] = [5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

/// Weights for the second CNPJ verifier (digits 0..13).
pub const CNPJ_WEIGHTS_SECOND: [u32; 13] = [6, 5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

/// Compute one modulo-11 verifier digit.
///
/// `digits` and `weights` are zipped index by index; extra entries on either
/// side are ignored. The sum is reduced mod 11 term by term, so any input is
/// accepted without overflow. Values above 9 are not rejected; they simply
/// contribute their residue.
pub fn check_digit(digits: &[u8], weights: &[u32]) -> u8 {
    let remainder = digits
        .iter()
        .zip(weights)
        .fold(0u64, |acc, (&d, &w)| (acc + u64::from(d) * u64::from(w)) % 11);
    if remainder < 2 {
        0
    } else {
        // remainder is in 2..=10, so the result fits in a single digit.
        (11 - remainder) as u8
    }
}

/// Verifier pair for a 9-digit CPF base number.
pub fn cpf_check_digits(base: &[u8; 9]) -> [u8; 2] {
    let first = check_digit(base, &CPF_WEIGHTS_FIRST);
    let mut extended = [0u8; 10];
    extended[..9].copy_from_slice(base);
    extended[9] = first;
    [first, check_digit(&extended, &CPF_WEIGHTS_SECOND)]
}

/// Verifier pair for a 12-digit CNPJ base number.
pub fn cnpj_check_digits(base: &[u8; 12]) -> [u8; 2] {
    let first = check_digit(base, &CNPJ_WEIGHTS_FIRST);
    let mut extended = [0u8; 13];
    extended[..12].copy_from_slice(base);
    extended[12] = first;
    [first, check_digit(&extended, &CNPJ_WEIGHTS_SECOND)]
}

/// Whether `raw` is a valid CPF.
///
/// Accepts any punctuation (`111.444.777-35` and `11144477735` are
/// equivalent). Returns `false` for wrong length, a run of one repeated
/// digit, or mismatched verifiers. Never panics.
pub fn is_valid_cpf(raw: &str) -> bool {
    let digits = normalize(raw);
    if digits.len() != CPF_LEN {
        tracing::trace!(input = raw, len = digits.len(), "CPF rejected: wrong length");
        return false;
    }
    let d = digit_values(&digits);
    if is_repeated(&d) {
        tracing::trace!(input = raw, "CPF rejected: repeated digit");
        return false;
    }
    if d[9] != check_digit(&d[..9], &CPF_WEIGHTS_FIRST) {
        tracing::trace!(input = raw, "CPF rejected: first check digit");
        return false;
    }
    if d[10] != check_digit(&d[..10], &CPF_WEIGHTS_SECOND) {
        tracing::trace!(input = raw, "CPF rejected: second check digit");
        return false;
    }
    true
}

/// Whether `raw` is a valid CNPJ.
///
/// Same rules as [`is_valid_cpf`] with 14 digits and the CNPJ weight tables.
pub fn is_valid_cnpj(raw: &str) -> bool {
    let digits = normalize(raw);
    if digits.len() != CNPJ_LEN {
        tracing::trace!(input = raw, len = digits.len(), "CNPJ rejected: wrong length");
        return false;
    }
    let d = digit_values(&digits);
    if is_repeated(&d) {
        tracing::trace!(input = raw, "CNPJ rejected: repeated digit");
        return false;
    }
    if d[12] != check_digit(&d[..12], &CNPJ_WEIGHTS_FIRST) {
        tracing::trace!(input = raw, "CNPJ rejected: first check digit");
        return false;
    }
    if d[13] != check_digit(&d[..13], &CNPJ_WEIGHTS_SECOND) {
        tracing::trace!(input = raw, "CNPJ rejected: second check digit");
        return false;
    }
    true
}

/// Whether `raw` is either a valid CPF or a valid CNPJ.
pub fn is_valid_cpf_cnpj(raw: &str) -> bool {
    is_valid_cpf(raw) || is_valid_cnpj(raw)
}

// 111.111.111-11 and friends pass the arithmetic but are not issued.
fn is_repeated(d: &[u8]) -> bool {
    d.windows(2).all(|w| w[0] == w[1])
}

#[cfg(test)]
mod tests {
    use super::*;

    // -- check_digit --

    #[test]
    fn remainder_below_two_maps_to_zero() {
        // 1*2 = 2, 2 mod 11 = 2 -> 9
        assert_eq!(check_digit(&[1], &[2]), 9);
        // 0 -> remainder 0 -> 0
        assert_eq!(check_digit(&[0, 0], &[5, 4]), 0);
        // 6*2 = 12, 12 mod 11 = 1 -> 0
        assert_eq!(check_digit(&[6], &[2]), 0);
        // 5*2 = 10 -> 1
        assert_eq!(check_digit(&[5], &[2]), 1);
    }

    #[test]
    fn check_digit_extreme_inputs_do_not_overflow() {
        assert_eq!(check_digit(&[u8::MAX, u8::MAX], &[u32::MAX, u32::MAX]), 0);
        assert_eq!(check_digit(&[u8::MAX], &[u32::MAX]), 5);
        let long = vec![u8::MAX; 4096];
        let weights = vec![u32::MAX; 4096];
        assert!(check_digit(&long, &weights) <= 9);
    }

    #[test]
    fn check_digit_matches_unreduced_sum() {
        // Term-wise reduction agrees with the plain weighted sum.
        let base = [1, 1, 1, 4, 4, 4, 7, 7, 7];
        let sum: u32 = base
            .iter()
            .zip(CPF_WEIGHTS_FIRST)
            .map(|(&d, w)| u32::from(d) * w)
            .sum();
        assert_eq!(sum % 11, 8);
        assert_eq!(check_digit(&base, &CPF_WEIGHTS_FIRST), 3);
    }

    #[test]
    fn cpf_check_digits_reference() {
        assert_eq!(cpf_check_digits(&[1, 1, 1, 4, 4, 4, 7, 7, 7]), [3, 5]);
        assert_eq!(cpf_check_digits(&[5, 2, 9, 9, 8, 2, 2, 4, 7]), [2, 5]);
        assert_eq!(cpf_check_digits(&[0, 0, 0, 0, 0, 0, 0, 0, 1]), [9, 1]);
    }

    #[test]
    fn cnpj_check_digits_reference() {
        assert_eq!(
            cnpj_check_digits(&[1, 1, 4, 4, 4, 7, 7, 7, 0, 0, 0, 1]),
            [6, 1]
        );
        assert_eq!(
            cnpj_check_digits(&[1, 1, 2, 2, 2, 3, 3, 3, 0, 0, 0, 1]),
            [8, 1]
        );
    }

    // -- CPF --

    #[test]
    fn cpf_valid_reference() {
        assert!(is_valid_cpf("11144477735"));
        assert!(is_valid_cpf("111.444.777-35"));
        assert!(is_valid_cpf("529.982.247-25"));
    }

    #[test]
    fn cpf_with_leading_zeros() {
        assert!(is_valid_cpf("000.000.001-91"));
        // Dropping the leading zeros changes the length.
        assert!(!is_valid_cpf("191"));
    }

    #[test]
    fn cpf_wrong_check_digits() {
        assert!(!is_valid_cpf("11144477736"));
        assert!(!is_valid_cpf("11144477725"));
    }

    #[test]
    fn cpf_repeated_digits_rejected() {
        for d in 0..=9 {
            let s = d.to_string().repeat(CPF_LEN);
            assert!(!is_valid_cpf(&s), "{s} should be rejected");
        }
    }

    #[test]
    fn cpf_wrong_length() {
        assert!(!is_valid_cpf(""));
        assert!(!is_valid_cpf("abc"));
        assert!(!is_valid_cpf("1144477735"));
        assert!(!is_valid_cpf("011144477735"));
        assert!(!is_valid_cpf("11444777000161"));
    }

    // -- CNPJ --

    #[test]
    fn cnpj_valid_reference() {
        assert!(is_valid_cnpj("11444777000161"));
        assert!(is_valid_cnpj("11.444.777/0001-61"));
        assert!(is_valid_cnpj("11.222.333/0001-81"));
    }

    #[test]
    fn cnpj_wrong_check_digits() {
        assert!(!is_valid_cnpj("11444777000162"));
        assert!(!is_valid_cnpj("11444777000151"));
    }

    #[test]
    fn cnpj_repeated_digits_rejected() {
        for d in 0..=9 {
            let s = d.to_string().repeat(CNPJ_LEN);
            assert!(!is_valid_cnpj(&s), "{s} should be rejected");
        }
    }

    #[test]
    fn cnpj_wrong_length() {
        assert!(!is_valid_cnpj(""));
        assert!(!is_valid_cnpj("11144477735"));
        assert!(!is_valid_cnpj("114447770001610"));
    }

    // -- either --

    #[test]
    fn cpf_cnpj_accepts_both() {
        assert!(is_valid_cpf_cnpj("111.444.777-35"));
        assert!(is_valid_cpf_cnpj("11.444.777/0001-61"));
        assert!(!is_valid_cpf_cnpj("111.444.777-36"));
        assert!(!is_valid_cpf_cnpj(""));
    }

    #[test]
    fn single_digit_substitution_can_collide() {
        // Weight 11 on the first digit vanishes mod 11 in the second sum, and
        // remainders 0 and 1 both map to verifier 0. This pair differs only
        // in the first digit and both are valid.
        assert!(is_valid_cpf("12345678909"));
        assert!(is_valid_cpf("22345678909"));
    }
}
