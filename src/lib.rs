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

//! Exact decimal arithmetic on text, with no precision limit.
//!
//! Numbers stay decimal digit strings from parsing to formatting, so values
//! like `0.1` are represented exactly and sums never pick up binary
//! floating-point rounding error.
//!
//! ## Optional features
//!
//! ### `serde`
//!
//! When this optional dependency is enabled, `Decimal` implements the
//! `serde::Serialize` and `serde::Deserialize` traits.
//!
//! ## Usage
//!
//! To validate and add decimal literals directly:
//!
//! ```
//! use decimal_text::{add_decimal_strings, is_valid_decimal_literal};
//!
//! assert!(is_valid_decimal_literal("-123.456"));
//! assert!(!is_valid_decimal_literal("12.3.4"));
//!
//! let sum = add_decimal_strings("100", "-123.456").unwrap();
//! assert_eq!(sum, "-23.456");
//! ```
//!
//! To work with decimals as values, use [`Decimal`]:
//!
//! ```
//! use decimal_text::Decimal;
//!
//! let n1: Decimal = "0.9".parse().unwrap();
//! let n2: Decimal = "0.1".parse().unwrap();
//! let result = n1 + n2;
//! assert_eq!(result.to_string(), "1");
//! ```
//!
//! The precision is bounded only by the input length:
//!
//! ```
//! use decimal_text::Decimal;
//!
//! let n1: Decimal = "99999999999999999999999999999999999999.5".parse().unwrap();
//! let n2: Decimal = "0.5".parse().unwrap();
//! let result = n1 + n2;
//! assert_eq!(result.to_string(), "100000000000000000000000000000000000000");
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]

mod convert;
mod decimal;
mod digits;
mod error;
mod fraction;
mod ops;
mod parse;

#[cfg(feature = "serde")]
mod serde;

pub use crate::decimal::{add_decimal_strings, Decimal};
pub use crate::error::DecimalParseError;
pub use crate::parse::is_valid_decimal_literal;
