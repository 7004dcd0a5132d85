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

//! # ULP-Based Float Comparison
//!
//! Bit-level "almost equal" comparison for IEEE-754 binary32 and binary64.
//! A float's bit pattern (sign-magnitude) is remapped to a two's complement
//! integer whose order matches the numeric order of the float, so the integer
//! difference of two remapped values counts the representable floats between
//! them: the distance in units in the last place (ULPs).
//!
//! ## Highlights
//!
//! - `FloatBits::as_ulp` yields the ordered integer; `+0.0` and `-0.0` both
//!   map to `0`.
//! - `float_difference_ulp` is signed: positive when `x1 > x2`.
//! - `float_almost_equal` accepts values whose absolute difference is within
//!   a floor (needed near zero) or whose ULP distance is within a ceiling.
//! - `Tolerance` bundles both limits; the default is 4 ULPs and one tenth of
//!   machine epsilon.
//!
//! A NaN never equals a number, but two NaNs may compare equal because their
//! bit patterns are close. This is a property of the algorithm and is kept.
//!
//! ```rust
//! # use numsafe_core::num::ulp::{float_almost_equal_default, float_difference_ulp};
//! let next = f32::from_bits(1.0f32.to_bits() + 1);
//! assert_eq!(float_difference_ulp(next, 1.0), 1);
//! assert!(float_almost_equal_default(1.0f32, next));
//! assert!(!float_almost_equal_default(1.0f32, 1.001));
//! ```

use crate::num::category::{FloatingPoint, Numeric};
use num_traits::{Float, PrimInt, Signed, ToPrimitive, Unsigned};
use std::fmt::{Debug, Display};

/// Bit-level access to an IEEE-754 floating-point type.
///
/// `Int` and `UInt` have the same width as the float, so ULP arithmetic never
/// needs a narrower integer.
pub trait FloatBits: Numeric<Kind = FloatingPoint> + Float + Display {
    /// Signed integer of the float's width (`i32` for `f32`, `i64` for `f64`).
    type Int: PrimInt + Signed + Debug + Display + 'static;

    /// Unsigned integer of the float's width.
    type UInt: PrimInt + Unsigned + Debug + Display + 'static;

    /// The difference between `1.0` and the next larger representable value.
    const MACHINE_EPSILON: Self;

    /// Default ULP ceiling used by `float_almost_equal_default`.
    const DEFAULT_MAX_ULPS: Self::Int;

    /// Default absolute-difference floor: `0.1 * MACHINE_EPSILON`.
    const DEFAULT_MAX_ABSOLUTE_DIFFERENCE: Self;

    /// Reinterprets the bits as an integer ordered like the float.
    ///
    /// For non-NaN `x1`, `x2`: `x1 < x2` if and only if
    /// `x1.as_ulp() < x2.as_ulp()`, except that both zeros map to `0`.
    fn as_ulp(self) -> Self::Int;

    /// Signed ULP difference `self.as_ulp() - other.as_ulp()`.
    ///
    /// Wraps if the distance does not fit `Int`, which requires operands of
    /// opposite sign near the extremes of the range (or NaN/infinity).
    fn difference_ulp(self, other: Self) -> Self::Int;

    /// Exact, non-wrapping ULP distance between `self` and `other`.
    fn ulp_distance(self, other: Self) -> Self::UInt;
}

macro_rules! impl_float_bits_for {
    ($t:ty, $int:ty, $uint:ty, $double:ty) => {
        impl FloatBits for $t {
            type Int = $int;
            type UInt = $uint;

            const MACHINE_EPSILON: Self = <$t>::EPSILON;
            const DEFAULT_MAX_ULPS: $int = 4;
            const DEFAULT_MAX_ABSOLUTE_DIFFERENCE: Self = 0.1 * <$t>::EPSILON;

            #[inline(always)]
            fn as_ulp(self) -> $int {
                let bits = self.to_bits() as $int;
                if bits >= 0 {
                    bits
                } else {
                    // sign-magnitude to two's complement
                    -(bits & <$int>::MAX)
                }
            }

            #[inline(always)]
            fn difference_ulp(self, other: Self) -> $int {
                self.as_ulp().wrapping_sub(other.as_ulp())
            }

            #[inline(always)]
            fn ulp_distance(self, other: Self) -> $uint {
                // |as_ulp| <= MAX, so the distance is at most 2 * MAX and fits.
                ((self.as_ulp() as $double) - (other.as_ulp() as $double)).unsigned_abs() as $uint
            }
        }
    };
}

impl_float_bits_for!(f32, i32, u32, i64);
impl_float_bits_for!(f64, i64, u64, i128);

/// Returns the signed distance in ULPs between two floats.
///
/// The result is positive when `x1 > x2` and antisymmetric in its operands.
///
/// # Examples
///
/// ```rust
/// # use numsafe_core::num::ulp::float_difference_ulp;
/// assert_eq!(float_difference_ulp(-0.0f64, 0.0), 0);
/// assert!(float_difference_ulp(1e-8f32, -1e-8) > 0);
/// ```
#[inline(always)]
pub fn float_difference_ulp<F: FloatBits>(x1: F, x2: F) -> F::Int {
    x1.difference_ulp(x2)
}

/// Returns whether two floats are effectively equal.
///
/// `true` if `|x1 - x2| <= max_absolute_difference`, otherwise `true` if the
/// ULP distance is at most `max_ulps`. A negative `max_ulps` disables the
/// ULP test.
///
/// Compare the values themselves rather than their difference against zero:
/// a subtraction result near zero is only meaningful against an absolute floor
/// scaled to the magnitude of the original operands.
///
/// # Examples
///
/// ```rust
/// # use numsafe_core::num::ulp::float_almost_equal;
/// let x = 1.0f32;
/// let four_away = f32::from_bits(x.to_bits() + 4);
/// let five_away = f32::from_bits(x.to_bits() + 5);
/// assert!(float_almost_equal(x, four_away, 4, 0.0));
/// assert!(!float_almost_equal(x, five_away, 4, 0.0));
/// ```
#[inline]
pub fn float_almost_equal<F: FloatBits>(
    x1: F,
    x2: F,
    max_ulps: F::Int,
    max_absolute_difference: F,
) -> bool {
    if (x1 - x2).abs() <= max_absolute_difference {
        return true;
    }

    let Some(limit) = max_ulps.to_u128() else {
        return false;
    };
    x1.ulp_distance(x2)
        .to_u128()
        .is_some_and(|distance| distance <= limit)
}

/// `float_almost_equal` with `F::DEFAULT_MAX_ULPS` and
/// `F::DEFAULT_MAX_ABSOLUTE_DIFFERENCE`.
#[inline]
pub fn float_almost_equal_default<F: FloatBits>(x1: F, x2: F) -> bool {
    float_almost_equal(
        x1,
        x2,
        F::DEFAULT_MAX_ULPS,
        F::DEFAULT_MAX_ABSOLUTE_DIFFERENCE,
    )
}

/// `float_almost_equal` with the limits of a configured `Tolerance`.
#[inline]
pub fn float_almost_equal_with<F: FloatBits>(x1: F, x2: F, tolerance: &Tolerance<F>) -> bool {
    tolerance.matches(x1, x2)
}

/// The reason a `Tolerance` was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum ToleranceError {
    #[error("max_ulps must not be negative")]
    NegativeMaxUlps,
    #[error("max_absolute_difference must be a non-negative number")]
    InvalidMaxAbsoluteDifference,
}

/// The two limits of an almost-equal comparison.
///
/// # Invariants
///
/// `max_ulps >= 0` and `max_absolute_difference >= 0` (not NaN).
///
/// # Examples
///
/// ```rust
/// # use numsafe_core::num::ulp::Tolerance;
/// let loose = Tolerance::<f64>::new(16, 1e-9);
/// assert!(loose.matches(1.0, 1.0 + 4e-15));
/// assert_eq!(Tolerance::<f64>::default().max_ulps(), 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize),
    serde(bound(serialize = "F: serde::Serialize, F::Int: serde::Serialize"))
)]
pub struct Tolerance<F>
where
    F: FloatBits,
{
    max_ulps: F::Int,
    max_absolute_difference: F,
}

impl<F> Tolerance<F>
where
    F: FloatBits,
{
    /// Creates a new `Tolerance`.
    ///
    /// # Panics
    ///
    /// Panics if `max_ulps` is negative or `max_absolute_difference` is
    /// negative or NaN.
    #[inline]
    pub fn new(max_ulps: F::Int, max_absolute_difference: F) -> Self {
        match Self::try_new(max_ulps, max_absolute_difference) {
            Ok(tolerance) => tolerance,
            Err(err) => panic!("Invalid tolerance: {}", err),
        }
    }

    /// Creates a new `Tolerance`, or reports which limit is invalid.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use numsafe_core::num::ulp::{Tolerance, ToleranceError};
    /// assert!(Tolerance::<f32>::try_new(0, 0.0).is_ok());
    /// assert_eq!(
    ///     Tolerance::<f32>::try_new(-1, 0.0),
    ///     Err(ToleranceError::NegativeMaxUlps)
    /// );
    /// ```
    #[inline]
    pub fn try_new(max_ulps: F::Int, max_absolute_difference: F) -> Result<Self, ToleranceError> {
        if max_ulps.is_negative() {
            return Err(ToleranceError::NegativeMaxUlps);
        }
        // Also rejects NaN.
        if !(max_absolute_difference >= F::ZERO) {
            return Err(ToleranceError::InvalidMaxAbsoluteDifference);
        }
        Ok(Self {
            max_ulps,
            max_absolute_difference,
        })
    }

    /// The ULP ceiling.
    #[inline(always)]
    pub fn max_ulps(&self) -> F::Int {
        self.max_ulps
    }

    /// The absolute-difference floor.
    #[inline(always)]
    pub fn max_absolute_difference(&self) -> F {
        self.max_absolute_difference
    }

    /// Returns whether `x1` and `x2` are almost equal under this tolerance.
    #[inline]
    pub fn matches(&self, x1: F, x2: F) -> bool {
        float_almost_equal(x1, x2, self.max_ulps, self.max_absolute_difference)
    }
}

impl<F> Default for Tolerance<F>
where
    F: FloatBits,
{
    fn default() -> Self {
        Self {
            max_ulps: F::DEFAULT_MAX_ULPS,
            max_absolute_difference: F::DEFAULT_MAX_ABSOLUTE_DIFFERENCE,
        }
    }
}

impl<F> Display for Tolerance<F>
where
    F: FloatBits,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Tolerance(max_ulps: {}, max_absolute_difference: {})",
            self.max_ulps, self.max_absolute_difference
        )
    }
}

#[cfg(feature = "serde")]
impl<'de, F> serde::Deserialize<'de> for Tolerance<F>
where
    F: FloatBits + serde::Deserialize<'de>,
    F::Int: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(serde::Deserialize)]
        #[serde(bound(deserialize = "T: serde::Deserialize<'de>, T::Int: serde::Deserialize<'de>"))]
        struct Repr<T>
        where
            T: FloatBits,
        {
            max_ulps: T::Int,
            max_absolute_difference: T,
        }

        let repr = Repr::<F>::deserialize(deserializer)?;
        Self::try_new(repr.max_ulps, repr.max_absolute_difference).map_err(serde::de::Error::custom)
    }
}
