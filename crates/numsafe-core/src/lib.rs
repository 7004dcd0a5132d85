// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Numsafe Core
//!
//! Numeric safety primitives for generic code over Rust's primitive number
//! types. The crate answers three questions that plain operators get wrong
//! in mixed-type code: whether two values are equal, whether a conversion
//! preserved its value, and which integer a float rounds to.
//!
//! ## Modules
//!
//! - `num`: Type classification, ULP-based float comparison, strategy-based
//!   mixed-type equality, range-checked integer casts and directional
//!   float-to-integer rounding.
//! - `math`: Mathematical constants and small integer number-theory helpers
//!   (`is_prime`, `greatest_prime_factor`).
//!
//! ## Highlights
//!
//! - Comparison strategy is resolved at compile time; unsupported pairs fail
//!   to compile rather than falling back silently.
//! - No operation panics on numeric input. Failures are reported through
//!   `Result` or a `false` comparison.
//! - Optional `serde` feature for `Tolerance`.
//!
//! ```rust
//! use numsafe_core::num::{cast_with_range_check, equals_comparison, round};
//!
//! assert!(equals_comparison(-1i32, -1.0f64));
//! assert!(!equals_comparison(-1i8, 255u8));
//! assert!(cast_with_range_check::<u8, i32>(300).is_err());
//! assert_eq!(round::<i32, f64>(-1.5), -1);
//! ```

pub mod math;
pub mod num;
