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

//! Decimal literal parsing.
//!
//! A literal is an optional leading `+` or `-`, followed by decimal digits
//! with at most one `.` among them. At least one digit must be present and
//! the literal must not end with the dot. Nothing else is accepted: no
//! exponent, no `NaN`, no surrounding whitespace.

use crate::error::DecimalParseError;
use crate::Decimal;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Sign {
    Positive,
    Negative,
}

/// The interesting parts of a decimal literal.
#[derive(Debug)]
pub(crate) struct Parts<'a> {
    pub sign: Sign,
    pub integral: &'a [u8],
    pub fractional: &'a [u8],
}

/// Splits decimal literal bytes into sign and the rest, without inspecting
/// or validating the rest.
#[inline]
fn extract_sign(s: &[u8]) -> (Sign, &[u8]) {
    match s.first() {
        Some(b'+') => (Sign::Positive, &s[1..]),
        Some(b'-') => (Sign::Negative, &s[1..]),
        _ => (Sign::Positive, s),
    }
}

/// Carves off decimal digits up to the first non-digit character.
#[inline]
fn eat_digits(s: &[u8]) -> (&[u8], &[u8]) {
    let i = s.iter().take_while(|&i| i.is_ascii_digit()).count();
    (&s[..i], &s[i..])
}

/// Checks if the input bytes form a valid decimal literal and if so, locates
/// the sign, the integral part and the fractional part in it.
pub(crate) fn parse_decimal(s: &[u8]) -> Result<Parts, DecimalParseError> {
    let (sign, s) = extract_sign(s);

    if s.is_empty() {
        return Err(DecimalParseError::Invalid);
    }

    let (integral, s) = eat_digits(s);

    let (fractional, s) = match s.first() {
        Some(&b'.') => {
            let (fractional, s) = eat_digits(&s[1..]);
            // rejects a trailing dot, and the lone "." along with it
            if fractional.is_empty() {
                return Err(DecimalParseError::Invalid);
            }
            (fractional, s)
        }
        _ => (&b""[..], s),
    };

    // a second dot or any other stray character lands here
    if !s.is_empty() {
        return Err(DecimalParseError::Invalid);
    }

    if integral.is_empty() && fractional.is_empty() {
        return Err(DecimalParseError::Invalid);
    }

    Ok(Parts {
        sign,
        integral,
        fractional,
    })
}

/// Checks whether `s` is a valid decimal literal.
///
/// # Examples
///
/// ```
/// use decimal_text::is_valid_decimal_literal;
///
/// assert!(is_valid_decimal_literal("-123.456"));
/// assert!(is_valid_decimal_literal(".5"));
/// assert!(!is_valid_decimal_literal("12.3.4"));
/// assert!(!is_valid_decimal_literal("5."));
/// ```
#[inline]
pub fn is_valid_decimal_literal(s: &str) -> bool {
    parse_decimal(s.as_bytes()).is_ok()
}

impl FromStr for Decimal {
    type Err = DecimalParseError;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(DecimalParseError::Empty);
        }

        let parts = parse_decimal(s.as_bytes())?;
        Ok(Decimal::from_literal_parts(parts))
    }
}
