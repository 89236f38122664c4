// Copyright 2026 Hypermesh Foundation. All rights reserved.
// Monte Carlo Sampling Engine - Observation Parser

use crate::config::MAX_OBSERVATIONS;
use crate::error::EngineError;

/// Extract up to [`MAX_OBSERVATIONS`] finite values from comma/newline text.
///
/// Each token contributes its leading number (`3.5kg` reads as 3.5, `45%` as
/// 45). Tokens with no leading number, or whose number is not finite, are
/// dropped silently. Encounter order is preserved.
pub fn parse(text: &str) -> Vec<f64> {
    text.lines()
        .flat_map(|line| line.split(','))
        .map(str::trim)
        .filter_map(leading_number)
        .filter(|v| v.is_finite())
        .take(MAX_OBSERVATIONS)
        .collect()
}

/// Longest prefix of `token` shaped like `[+-]digits[.digits][e[+-]digits]`.
fn leading_number(token: &str) -> Option<f64> {
    let bytes = token.as_bytes();
    let digits = |from: usize| bytes[from..].iter().take_while(|b| b.is_ascii_digit()).count();

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let int_digits = digits(end);
    end += int_digits;
    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = digits(end + 1);
        end += 1 + frac_digits;
    }
    if int_digits + frac_digits == 0 {
        return None;
    }
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = digits(exp_end);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }
    token[..end].parse().ok()
}

/// Like [`parse`], but an empty result is reported as [`EngineError::ParseEmpty`].
pub fn parse_required(text: &str) -> Result<Vec<f64>, EngineError> {
    let values = parse(text);
    if values.is_empty() {
        return Err(EngineError::ParseEmpty);
    }
    Ok(values)
}
