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

//! Conversion implementation.
//!
//! Integer conversions are infallible because a decimal of unbounded
//! precision represents every integer exactly. Float conversions are
//! deliberately absent; keeping values in decimal text is how this crate
//! avoids binary floating point in the first place.

use crate::decimal::Decimal;
use crate::error::DecimalParseError;
use std::convert::TryFrom;

macro_rules! impl_from_uint {
    ($int: ty) => {
        impl From<$int> for Decimal {
            #[inline]
            fn from(val: $int) -> Self {
                Decimal {
                    int_digits: val.to_string(),
                    frac_digits: String::new(),
                    negative: false,
                }
            }
        }
    };
    ($($int: ty), * $(,)?) => {
        $(impl_from_uint!($int);)*
    };
}

macro_rules! impl_from_int {
    ($int: ty) => {
        impl From<$int> for Decimal {
            #[inline]
            fn from(val: $int) -> Self {
                Decimal {
                    int_digits: val.unsigned_abs().to_string(),
                    frac_digits: String::new(),
                    negative: val < 0,
                }
            }
        }
    };
    ($($int: ty), * $(,)?) => {
        $(impl_from_int!($int);)*
    };
}

impl_from_uint!(u8, u16, u32, u64, u128, usize);
impl_from_int!(i8, i16, i32, i64, i128, isize);

impl TryFrom<&str> for Decimal {
    type Error = DecimalParseError;

    #[inline]
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Decimal> for String {
    #[inline]
    fn from(val: Decimal) -> Self {
        val.to_string()
    }
}
