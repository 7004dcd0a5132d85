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

//! # Numeric Safety
//!
//! Type-aware numeric primitives that behave predictably across every
//! combination of primitive integer and floating-point types.
//!
//! ## Submodules
//!
//! - `category`: Compile-time classification of scalar types (`Numeric`,
//!   `Integer`, `NumericCategory`) and the sealed kind markers used for
//!   type-level dispatch.
//! - `constants`: Associated-constant traits (`Zero`, `PlusOne`) for integers
//!   and floats.
//! - `ulp`: Units-in-the-last-place distance and tolerant float equality,
//!   with a validated `Tolerance` value.
//! - `compare`: `equals_comparison`/`not_equals_comparison`, picking one
//!   strategy per type pair at compile time.
//! - `cast`: Integer conversions that fail with `RangeError` instead of
//!   wrapping.
//! - `round`: Float-to-integer rounding (ties-to-even, half-up, floor, ceil).
//!
//! ## Motivation
//!
//! Raw `==` between floats is brittle, `==` between a negative signed value
//! and an unsigned value is invalid, and `as` silently wraps. These modules
//! give each of those operations a single well-defined meaning.

pub mod cast;
pub mod category;
pub mod compare;
pub mod constants;
pub mod round;
pub mod ulp;

pub use cast::{CastWithRangeCheck, RangeError, cast_with_range_check};
pub use category::{Integer, Numeric, NumericCategory, Scalar, classify};
pub use compare::{
    ComparisonStrategy, EqualsComparison, NotEqualsComparison, equals_comparison,
    not_equals_comparison, strategy_of,
};
pub use round::{ceil, floor, round, round_half_integer_to_even, round_half_integer_up};
pub use ulp::{
    FloatBits, Tolerance, ToleranceError, float_almost_equal, float_almost_equal_default,
    float_almost_equal_with, float_difference_ulp,
};
