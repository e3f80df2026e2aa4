// Copyright 2021 CoD Technologies Corp.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Text-backed decimal number.

use crate::digits;
use crate::error::DecimalParseError;
use crate::fraction;
use crate::parse::{Parts, Sign};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

#[inline]
fn digit_string(v: Vec<u8>) -> String {
    debug_assert!(v.iter().all(u8::is_ascii_digit));
    unsafe { String::from_utf8_unchecked(v) }
}

/// An exact decimal number of unbounded precision.
///
/// The value is kept as decimal text: a sign, the integer digits and the
/// fractional digits. Arithmetic works digit by digit, so no rounding ever
/// happens and no length limit applies.
///
/// Comparison is by numeric value, not by text, so `"1.5"` and `"1.50"`
/// parse to equal decimals.
#[derive(Clone, Debug, Eq)]
pub struct Decimal {
    // most-significant first, no leading zeros except a single "0"
    pub(crate) int_digits: String,
    // digits after the decimal point, possibly empty
    pub(crate) frac_digits: String,
    pub(crate) negative: bool,
}

impl Decimal {
    /// Zero value, i.e. `0`.
    #[inline]
    pub fn zero() -> Decimal {
        Decimal {
            int_digits: String::from("0"),
            frac_digits: String::new(),
            negative: false,
        }
    }

    /// Builds a `Decimal` from computed digits, stripping integral leading
    /// zeros and clearing the sign of a zero value.
    pub(crate) fn compose(mut int: Vec<u8>, frac: Vec<u8>, negative: bool) -> Decimal {
        let zeros = int.iter().take_while(|&&d| d == b'0').count();
        if zeros == int.len() {
            int.clear();
            int.push(b'0');
        } else if zeros > 0 {
            int.drain(..zeros);
        }

        let is_zero = int == b"0" && frac.iter().all(|&d| d == b'0');

        Decimal {
            int_digits: digit_string(int),
            frac_digits: digit_string(frac),
            negative: negative && !is_zero,
        }
    }

    #[inline]
    pub(crate) fn from_literal_parts(parts: Parts) -> Decimal {
        Decimal::compose(
            parts.integral.to_vec(),
            parts.fractional.to_vec(),
            parts.sign == Sign::Negative,
        )
    }

    /// Creates a `Decimal` from an integer digit string and a fractional
    /// digit string.
    ///
    /// Both parts must consist of ASCII digits only and at least one digit
    /// must be present; the integral part may be empty (e.g. for `0.5`).
    #[inline]
    pub fn from_parts(integral: &str, fractional: &str, negative: bool) -> Result<Decimal, DecimalParseError> {
        let int = integral.as_bytes();
        let frac = fractional.as_bytes();

        if int.is_empty() && frac.is_empty() {
            return Err(DecimalParseError::Invalid);
        }
        if !int.iter().chain(frac).all(u8::is_ascii_digit) {
            return Err(DecimalParseError::Invalid);
        }

        Ok(Decimal::compose(int.to_vec(), frac.to_vec(), negative))
    }

    /// Consumes the `Decimal`, returning `(integral, fractional, negative)`.
    #[inline]
    pub fn into_parts(self) -> (String, String, bool) {
        (self.int_digits, self.frac_digits, self.negative)
    }

    /// Returns the scale, i.e. the count of digits in the fractional part.
    #[inline]
    pub fn scale(&self) -> usize {
        self.frac_digits.len()
    }

    /// Checks if `self` is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.int_digits == "0" && self.frac_digits.bytes().all(|d| d == b'0')
    }

    /// Returns `true` if the sign of the decimal is negative.
    #[inline]
    pub fn is_sign_negative(&self) -> bool {
        self.negative
    }

    /// Returns `true` if the sign of the decimal is positive.
    #[inline]
    pub fn is_sign_positive(&self) -> bool {
        !self.negative
    }

    /// Computes the absolute value of `self`.
    #[inline]
    pub fn abs(&self) -> Decimal {
        let mut abs_val = self.clone();
        abs_val.negative = false;
        abs_val
    }

    /// Strips trailing zeros from the fractional part.
    #[inline]
    pub fn normalize(&self) -> Decimal {
        let zeros = self.frac_digits.bytes().rev().take_while(|&d| d == b'0').count();
        let mut n = self.clone();
        n.frac_digits.truncate(n.frac_digits.len() - zeros);
        n
    }

    #[inline]
    fn int_bytes(&self) -> &[u8] {
        self.int_digits.as_bytes()
    }

    #[inline]
    fn frac_bytes(&self) -> &[u8] {
        self.frac_digits.as_bytes()
    }

    /// Compares magnitudes, ignoring signs: integer parts first, aligned
    /// fractional parts on a tie.
    #[inline]
    pub(crate) fn cmp_magnitude(&self, other: &Decimal) -> Ordering {
        match digits::cmp(self.int_bytes(), other.int_bytes()) {
            Ordering::Equal => fraction::cmp(self.frac_bytes(), other.frac_bytes()),
            ord => ord,
        }
    }

    /// Adds the magnitudes of `self` and `other`; the result takes the sign
    /// `negative`. Both operands carry the same sign when this is called.
    pub(crate) fn add_internal(&self, other: &Decimal, negative: bool) -> Decimal {
        let (frac, carry) = fraction::add(self.frac_bytes(), other.frac_bytes());

        let mut int = digits::add(self.int_bytes(), other.int_bytes());
        if carry {
            int = digits::add(&int, b"1");
        }

        Decimal::compose(int, frac, negative)
    }

    /// Subtracts the smaller magnitude from the larger; the result takes the
    /// larger operand's position: sign `negative` if that is `self`, the
    /// opposite otherwise.
    pub(crate) fn sub_internal(&self, other: &Decimal, negative: bool) -> Decimal {
        let (larger, smaller, negative) = match self.cmp_magnitude(other) {
            Ordering::Less => (other, self, !negative),
            _ => (self, other, negative),
        };

        let (frac, borrow) = fraction::sub(larger.frac_bytes(), smaller.frac_bytes());

        // A fractional borrow implies larger's integer part is strictly
        // greater, so the decrement cannot underflow.
        let int = if borrow {
            digits::sub(&digits::sub(larger.int_bytes(), b"1"), smaller.int_bytes())
        } else {
            digits::sub(larger.int_bytes(), smaller.int_bytes())
        };

        Decimal::compose(int, frac, negative)
    }
}

/// Adds two decimal literals exactly, returning the sum as decimal text.
///
/// Fails only when an input is not a valid decimal literal.
///
/// # Examples
///
/// ```
/// use decimal_text::add_decimal_strings;
///
/// let sum = add_decimal_strings("100", "-123.456").unwrap();
/// assert_eq!(sum, "-23.456");
/// ```
#[inline]
pub fn add_decimal_strings(a: &str, b: &str) -> Result<String, DecimalParseError> {
    let a = a.parse::<Decimal>()?;
    let b = b.parse::<Decimal>()?;
    Ok((a + b).to_string())
}

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut buf = String::with_capacity(self.int_digits.len() + self.frac_digits.len() + 1);
        buf.push_str(&self.int_digits);

        // an all-zero fractional part is omitted along with the dot
        if self.frac_digits.bytes().any(|d| d != b'0') {
            buf.push('.');
            buf.push_str(&self.frac_digits);
        }

        f.pad_integral(self.is_sign_positive(), "", &buf)
    }
}

impl Default for Decimal {
    #[inline]
    fn default() -> Self {
        Decimal::zero()
    }
}

impl PartialEq for Decimal {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl PartialOrd for Decimal {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Decimal {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        // sign is different
        if self.negative != other.negative {
            return if self.negative {
                Ordering::Less
            } else {
                Ordering::Greater
            };
        }

        let ord = self.cmp_magnitude(other);
        if self.negative {
            ord.reverse()
        } else {
            ord
        }
    }
}

impl Hash for Decimal {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        let n = self.normalize();
        n.int_digits.hash(state);
        n.frac_digits.hash(state);
        n.negative.hash(state);
    }
}
