// Dweve profview - Profile Explorer View State
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Small text helpers for labels.

/// Capitalize every space-separated word.
///
/// The first character of each word is upper-cased and the rest
/// lower-cased. Runs of spaces are kept as they are.
///
/// ```
/// use profview_units::capitalize;
///
/// assert_eq!(capitalize("cpu SAMPLES"), "Cpu Samples");
/// assert_eq!(capitalize("a  b"), "A  B");
/// ```
pub fn capitalize(s: &str) -> String {
    s.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars.as_str().to_lowercase().chars()).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// Render a number the way a browser prints it.
///
/// Integral values have no fractional part, non-finite values are spelled
/// out, and very large or very small magnitudes use exponent notation.
///
/// ```
/// use profview_units::number_to_string;
///
/// assert_eq!(number_to_string(1500.0), "1500");
/// assert_eq!(number_to_string(0.25), "0.25");
/// assert_eq!(number_to_string(f64::NAN), "NaN");
/// assert_eq!(number_to_string(1e21), "1e+21");
/// ```
pub fn number_to_string(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let magnitude = value.abs();
    if !(1e-6..1e21).contains(&magnitude) {
        let formatted = format!("{:e}", value);
        return match formatted.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{}e+{}", mantissa, exponent)
            }
            _ => formatted,
        };
    }
    format!("{}", value)
}

/// Most fraction digits [`to_fixed`] renders; larger requests are clamped.
pub const MAX_FRACTION_DIGITS: usize = 100;

// Every finite f64 has an exact decimal expansion within this many
// fraction digits.
const EXACT_FRACTION_DIGITS: usize = 1074;

/// Render `value` with exactly `digits` fraction digits, the way a browser's
/// `toFixed` does.
///
/// Rounding works on the exact decimal value of the float and sends ties
/// away from zero. Magnitudes of `1e21` and above, and non-finite values,
/// fall back to [`number_to_string`].
///
/// ```
/// use profview_units::to_fixed;
///
/// assert_eq!(to_fixed(2.5, 0), "3");
/// assert_eq!(to_fixed(0.125, 2), "0.13");
/// assert_eq!(to_fixed(1.005, 2), "1.00");
/// assert_eq!(to_fixed(-1.25, 1), "-1.3");
/// ```
pub fn to_fixed(value: f64, digits: usize) -> String {
    if !value.is_finite() || value.abs() >= 1e21 {
        return number_to_string(value);
    }
    let digits = digits.min(MAX_FRACTION_DIGITS);

    let exact = format!("{:.*}", EXACT_FRACTION_DIGITS, value.abs());
    let (int_part, frac_part) = exact.split_once('.').unwrap_or((exact.as_str(), ""));
    let frac = frac_part.as_bytes();

    let mut kept: Vec<u8> = int_part
        .bytes()
        .chain(frac.iter().copied().take(digits))
        .collect();
    kept.resize(int_part.len() + digits, b'0');

    if frac.get(digits).is_some_and(|&d| d >= b'5') {
        let mut carry = true;
        for d in kept.iter_mut().rev() {
            if *d == b'9' {
                *d = b'0';
            } else {
                *d += 1;
                carry = false;
                break;
            }
        }
        if carry {
            kept.insert(0, b'1');
        }
    }

    let (int_digits, frac_digits) = kept.split_at(kept.len() - digits);
    let mut out = String::with_capacity(kept.len() + 2);
    if value < 0.0 {
        out.push('-');
    }
    out.extend(int_digits.iter().map(|&b| char::from(b)));
    if digits > 0 {
        out.push('.');
        out.extend(frac_digits.iter().map(|&b| char::from(b)));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalize_empty() {
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_capitalize_unicode() {
        assert_eq!(capitalize("élan vital"), "Élan Vital");
    }

    #[test]
    fn test_number_to_string() {
        assert_eq!(number_to_string(-0.0), "0");
        assert_eq!(number_to_string(-3.0), "-3");
        assert_eq!(number_to_string(f64::INFINITY), "Infinity");
        assert_eq!(number_to_string(f64::NEG_INFINITY), "-Infinity");
        assert_eq!(number_to_string(1e-7), "1e-7");
        assert_eq!(number_to_string(123456789.5), "123456789.5");
    }

    #[test]
    fn test_to_fixed_ties_round_away_from_zero() {
        assert_eq!(to_fixed(0.5, 0), "1");
        assert_eq!(to_fixed(2.5, 0), "3");
        assert_eq!(to_fixed(1.25, 1), "1.3");
        assert_eq!(to_fixed(0.125, 2), "0.13");
        assert_eq!(to_fixed(-2.5, 0), "-3");
    }

    #[test]
    fn test_to_fixed_uses_exact_binary_value() {
        // 1.005 and 9.995 sit just below the tie in binary.
        assert_eq!(to_fixed(1.005, 2), "1.00");
        assert_eq!(to_fixed(9.995, 2), "9.99");
        assert_eq!(to_fixed(0.1, 20), "0.10000000000000000555");
    }

    #[test]
    fn test_to_fixed_carry() {
        assert_eq!(to_fixed(999.5, 0), "1000");
        assert_eq!(to_fixed(9.96, 1), "10.0");
        assert_eq!(to_fixed(0.0, 2), "0.00");
        assert_eq!(to_fixed(-0.0, 1), "0.0");
        assert_eq!(to_fixed(-0.001, 2), "-0.00");
    }

    #[test]
    fn test_to_fixed_clamps_digits() {
        let fixed = to_fixed(1.5, 70_000);
        assert_eq!(fixed.split_once('.').map(|(_, f)| f.len()), Some(MAX_FRACTION_DIGITS));
        assert!(fixed.starts_with("1.5000"));
        assert_eq!(to_fixed(1.5, usize::MAX), to_fixed(1.5, MAX_FRACTION_DIGITS));
    }

    #[test]
    fn test_to_fixed_large_and_non_finite() {
        assert_eq!(to_fixed(1e21, 2), "1e+21");
        assert_eq!(to_fixed(f64::NAN, 2), "NaN");
        assert_eq!(to_fixed(f64::NEG_INFINITY, 0), "-Infinity");
        assert_eq!(to_fixed(123.0, 0), "123");
    }
}
