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

//! # Range-Checked Integer Casts
//!
//! Integer-to-integer conversion that refuses to change a value. The native
//! `as` conversion is performed first; the result is accepted only if it is
//! numerically identical to the input, otherwise a `RangeError` is returned.
//! Widening conversions that cannot change the value are accepted without a
//! check.
//!
//! ```rust
//! use numsafe_core::num::cast::{cast_with_range_check, CastWithRangeCheck, RangeError};
//!
//! assert_eq!(cast_with_range_check::<i8, i32>(300), Err(RangeError));
//! assert_eq!(cast_with_range_check::<i32, i8>(-5), Ok(-5));
//! assert_eq!(200u8.cast_with_range_check::<i16>(), Ok(200));
//! assert!((-1i64).cast_with_range_check::<u64>().is_err());
//! ```
//!
//! Floating-point operands are rejected at compile time:
//!
//! ```compile_fail
//! # use numsafe_core::num::cast::cast_with_range_check;
//! let _ = cast_with_range_check::<i32, f32>(1.0);
//! ```

use crate::num::category::Integer;
use num_traits::AsPrimitive;
use std::any::type_name;
use std::mem::size_of;

/// The conversion would not preserve the value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, thiserror::Error)]
#[error("integer conversion is not value-preserving")]
pub struct RangeError;

/// Converts `x` to `O`, failing if the result differs from `x`.
///
/// # Errors
///
/// Returns `RangeError` if the converted value has a different sign than
/// `x` or does not convert back to `x`.
#[inline]
pub fn cast_with_range_check<O, I>(x: I) -> Result<O, RangeError>
where
    O: Integer + AsPrimitive<I>,
    I: Integer + AsPrimitive<O>,
{
    let candidate: O = x.as_();
    let output_width = size_of::<O>();
    let input_width = size_of::<I>();

    if output_width > input_width && !(!O::IS_SIGNED && I::IS_SIGNED) {
        return Ok(candidate);
    }

    let same_sign = (x > I::ZERO) == (candidate > O::ZERO);
    let preserved = if output_width >= input_width {
        same_sign
    } else {
        same_sign && AsPrimitive::<I>::as_(candidate) == x
    };

    if preserved {
        Ok(candidate)
    } else {
        tracing::debug!(
            source = type_name::<I>(),
            target = type_name::<O>(),
            value = ?x,
            "range-checked cast rejected"
        );
        Err(RangeError)
    }
}

/// By-value range-checked conversion into another integer type.
pub trait CastWithRangeCheck: Integer {
    /// See [`cast_with_range_check`].
    #[inline]
    fn cast_with_range_check<O>(self) -> Result<O, RangeError>
    where
        O: Integer + AsPrimitive<Self>,
        Self: AsPrimitive<O>,
    {
        cast_with_range_check(self)
    }
}

impl<T: Integer> CastWithRangeCheck for T {}
