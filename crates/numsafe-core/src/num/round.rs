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

//! # Directional Rounding to Integers
//!
//! Float-to-integer rounding with an explicit tie rule. The implementation is
//! chosen by the output type:
//!
//! - `Narrow`: signed outputs of at most 4 bytes and unsigned outputs of at
//!   most 2 bytes, computed in `i32`.
//! - `Wide`: signed outputs of at most 8 bytes and 4-byte unsigned outputs,
//!   computed in `i64`.
//! - `Generic`: everything wider, rounded in the float domain and converted.
//!
//! The narrow and wide paths perform one hardware ties-to-even rounding into
//! the accumulator and derive half-up, floor and ceil from it with an exact
//! correction: the difference between `x` and its nearest integer is always
//! representable, so ties and directions are detected without error.
//!
//! ## Caveats
//!
//! - Results are unspecified when `x` lies outside the range of the output
//!   type. Conversions saturate or wrap but never panic.
//! - The default round-to-nearest floating-point environment is assumed; these
//!   functions never change it.
//!
//! ```rust
//! use numsafe_core::num::round::{ceil, floor, round, round_half_integer_to_even};
//!
//! assert_eq!(round_half_integer_to_even::<i32, f64>(2.5), 2);
//! assert_eq!(round::<i64, f32>(-1.5), -1);
//! assert_eq!(floor::<i16, f64>(-0.5), -1);
//! assert_eq!(ceil::<u8, f32>(0.25), 1);
//! ```

use crate::num::category::Integer;
use crate::num::ulp::FloatBits;
use std::mem::size_of;

/// The rounding implementation used for an output type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundingWidth {
    /// Computed in `i32`.
    Narrow,
    /// Computed in `i64`.
    Wide,
    /// Computed by the portable path.
    Generic,
}

impl RoundingWidth {
    /// Returns the implementation for an output of `bytes` bytes.
    ///
    /// The accumulator must hold every value of the output type, so unsigned
    /// outputs move up one step.
    #[inline(always)]
    pub const fn for_output(bytes: usize, is_signed: bool) -> Self {
        let limit = if is_signed { bytes } else { bytes * 2 };
        if limit <= 4 {
            Self::Narrow
        } else if limit <= 8 {
            Self::Wide
        } else {
            Self::Generic
        }
    }
}

/// An integer type that rounding functions can return.
pub trait RoundingOutput: Integer {
    /// The rounding implementation for `Self`, fixed at compile time.
    const WIDTH: RoundingWidth = RoundingWidth::for_output(size_of::<Self>(), Self::IS_SIGNED);

    fn from_i32(value: i32) -> Self;
    fn from_i64(value: i64) -> Self;
    fn from_f32(value: f32) -> Self;
    fn from_f64(value: f64) -> Self;
}

macro_rules! impl_rounding_output_for {
    ($($t:ty),+) => {
        $(
            impl RoundingOutput for $t {
                #[inline(always)]
                fn from_i32(value: i32) -> Self {
                    value as $t
                }

                #[inline(always)]
                fn from_i64(value: i64) -> Self {
                    value as $t
                }

                #[inline(always)]
                fn from_f32(value: f32) -> Self {
                    value as $t
                }

                #[inline(always)]
                fn from_f64(value: f64) -> Self {
                    value as $t
                }
            }
        )+
    };
}

impl_rounding_output_for!(i8, i16, i32, i64, i128, isize);
impl_rounding_output_for!(u8, u16, u32, u64, u128, usize);

/// A floating-point type that rounding functions accept.
pub trait RoundingInput: FloatBits {
    /// The value `0.5`.
    const HALF: Self;

    /// Rounds to the nearest integer, ties to even.
    fn round_half_even(self) -> Self;

    /// Converts an integral value with `as` semantics (truncating, saturating).
    fn truncate_to<O: RoundingOutput>(self) -> O;
}

macro_rules! impl_rounding_input_for {
    ($t:ty, $from:ident) => {
        impl RoundingInput for $t {
            const HALF: Self = 0.5;

            #[inline(always)]
            fn round_half_even(self) -> Self {
                self.round_ties_even()
            }

            #[inline(always)]
            fn truncate_to<O: RoundingOutput>(self) -> O {
                O::$from(self)
            }
        }
    };
}

impl_rounding_input_for!(f32, from_f32);
impl_rounding_input_for!(f64, from_f64);

// Paths for `Narrow` and `Wide`, run in `A = i32` or `A = i64`.

#[inline(always)]
fn accumulate_half_even<A, F>(x: F) -> A
where
    A: RoundingOutput,
    F: RoundingInput,
{
    x.round_half_even().truncate_to::<A>()
}

#[inline(always)]
fn accumulate_half_up<A, F>(x: F) -> A
where
    A: RoundingOutput,
    F: RoundingInput,
{
    let nearest = x.round_half_even();
    let rounded = nearest.truncate_to::<A>();
    // Exactly one half above `nearest` is a tie that went down to even.
    if x - nearest == F::HALF {
        rounded.saturating_add(A::PLUS_ONE)
    } else {
        rounded
    }
}

#[inline(always)]
fn accumulate_floor<A, F>(x: F) -> A
where
    A: RoundingOutput,
    F: RoundingInput,
{
    let nearest = x.round_half_even();
    let rounded = nearest.truncate_to::<A>();
    if nearest > x {
        rounded.saturating_sub(A::PLUS_ONE)
    } else {
        rounded
    }
}

#[inline(always)]
fn accumulate_ceil<A, F>(x: F) -> A
where
    A: RoundingOutput,
    F: RoundingInput,
{
    let nearest = x.round_half_even();
    let rounded = nearest.truncate_to::<A>();
    if nearest < x {
        rounded.saturating_add(A::PLUS_ONE)
    } else {
        rounded
    }
}

// Path for `Generic`.

#[inline(always)]
fn portable_half_even<O, F>(x: F) -> O
where
    O: RoundingOutput,
    F: RoundingInput,
{
    x.round_half_even().truncate_to::<O>()
}

#[inline(always)]
fn portable_half_up<O, F>(x: F) -> O
where
    O: RoundingOutput,
    F: RoundingInput,
{
    let lower = x.floor();
    // `x - lower` is exact whenever it could reach 0.5.
    let rounded = if x - lower >= F::HALF {
        lower + F::PLUS_ONE
    } else {
        lower
    };
    rounded.truncate_to::<O>()
}

#[inline(always)]
fn portable_floor<O, F>(x: F) -> O
where
    O: RoundingOutput,
    F: RoundingInput,
{
    x.floor().truncate_to::<O>()
}

#[inline(always)]
fn portable_ceil<O, F>(x: F) -> O
where
    O: RoundingOutput,
    F: RoundingInput,
{
    x.ceil().truncate_to::<O>()
}

/// Rounds to the nearest integer; halfway cases go to the even neighbour.
///
/// `1.5 → 2`, `2.5 → 2`, `3.5 → 4`, `-1.5 → -2`.
#[inline]
pub fn round_half_integer_to_even<O, F>(x: F) -> O
where
    O: RoundingOutput,
    F: RoundingInput,
{
    match O::WIDTH {
        RoundingWidth::Narrow => O::from_i32(accumulate_half_even::<i32, F>(x)),
        RoundingWidth::Wide => O::from_i64(accumulate_half_even::<i64, F>(x)),
        RoundingWidth::Generic => portable_half_even::<O, F>(x),
    }
}

/// Rounds to the nearest integer; halfway cases go towards positive infinity.
///
/// `1.5 → 2`, `-1.5 → -1`, `2.5 → 3`.
#[inline]
pub fn round_half_integer_up<O, F>(x: F) -> O
where
    O: RoundingOutput,
    F: RoundingInput,
{
    match O::WIDTH {
        RoundingWidth::Narrow => O::from_i32(accumulate_half_up::<i32, F>(x)),
        RoundingWidth::Wide => O::from_i64(accumulate_half_up::<i64, F>(x)),
        RoundingWidth::Generic => portable_half_up::<O, F>(x),
    }
}

/// Rounds to the nearest integer. Same as `round_half_integer_up`.
#[inline]
pub fn round<O, F>(x: F) -> O
where
    O: RoundingOutput,
    F: RoundingInput,
{
    round_half_integer_up::<O, F>(x)
}

/// Rounds towards negative infinity.
#[inline]
pub fn floor<O, F>(x: F) -> O
where
    O: RoundingOutput,
    F: RoundingInput,
{
    match O::WIDTH {
        RoundingWidth::Narrow => O::from_i32(accumulate_floor::<i32, F>(x)),
        RoundingWidth::Wide => O::from_i64(accumulate_floor::<i64, F>(x)),
        RoundingWidth::Generic => portable_floor::<O, F>(x),
    }
}

/// Rounds towards positive infinity.
#[inline]
pub fn ceil<O, F>(x: F) -> O
where
    O: RoundingOutput,
    F: RoundingInput,
{
    match O::WIDTH {
        RoundingWidth::Narrow => O::from_i32(accumulate_ceil::<i32, F>(x)),
        RoundingWidth::Wide => O::from_i64(accumulate_ceil::<i64, F>(x)),
        RoundingWidth::Generic => portable_ceil::<O, F>(x),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_width_selection() {
        assert_eq!(<i8 as RoundingOutput>::WIDTH, RoundingWidth::Narrow);
        assert_eq!(<i32 as RoundingOutput>::WIDTH, RoundingWidth::Narrow);
        assert_eq!(<u16 as RoundingOutput>::WIDTH, RoundingWidth::Narrow);
        assert_eq!(<u32 as RoundingOutput>::WIDTH, RoundingWidth::Wide);
        assert_eq!(<i64 as RoundingOutput>::WIDTH, RoundingWidth::Wide);
        assert_eq!(<u64 as RoundingOutput>::WIDTH, RoundingWidth::Generic);
        assert_eq!(<i128 as RoundingOutput>::WIDTH, RoundingWidth::Generic);
        assert_eq!(<u128 as RoundingOutput>::WIDTH, RoundingWidth::Generic);
        assert_eq!(
            <usize as RoundingOutput>::WIDTH,
            RoundingWidth::for_output(size_of::<usize>(), false)
        );
    }

    #[test]
    fn test_values_near_zero_round_directionally() {
        macro_rules! check {
            ($($o:ty),+) => {
                $(
                    assert_eq!(floor::<$o, f32>(-1e-8), -1, stringify!($o));
                    assert_eq!(floor::<$o, f64>(-1e-17), -1, stringify!($o));
                    assert_eq!(floor::<$o, f64>(1e-17), 0, stringify!($o));
                    assert_eq!(ceil::<$o, f32>(1e-8), 1, stringify!($o));
                    assert_eq!(ceil::<$o, f64>(1e-17), 1, stringify!($o));
                    assert_eq!(ceil::<$o, f64>(-1e-17), 0, stringify!($o));
                    assert_eq!(floor::<$o, f32>(0.99999994), 0, stringify!($o));
                    assert_eq!(ceil::<$o, f64>(-0.9999999999999999), 0, stringify!($o));
                )+
            };
        }
        check!(i8, i16, i32, i64, i128, isize);
    }

    #[test]
    fn test_values_just_below_a_half_round_down() {
        macro_rules! check {
            ($($o:ty),+) => {
                $(
                    assert_eq!(round::<$o, f64>(0.49999999999999994), 0, stringify!($o));
                    assert_eq!(round::<$o, f32>(0.49999997), 0, stringify!($o));
                    assert_eq!(round::<$o, f64>(-0.5000000000000001), -1, stringify!($o));
                    assert_eq!(round::<$o, f64>(2.4999999999999996), 2, stringify!($o));
                    assert_eq!(round::<$o, f64>(-0.49999999999999994), 0, stringify!($o));
                )+
            };
        }
        check!(i8, i16, i32, i64, i128, isize);
    }

    #[test]
    fn test_unsigned_outputs_use_their_full_range() {
        assert_eq!(round::<u32, f64>(1.5e9), 1_500_000_000);
        assert_eq!(round::<u32, f64>(4_294_967_294.5), u32::MAX);
        assert_eq!(floor::<u32, f64>(4_294_967_295.9), u32::MAX);
        assert_eq!(floor::<u64, f64>(6e18), 6_000_000_000_000_000_000);
        assert_eq!(ceil::<u64, f64>(1.8e19), 18_000_000_000_000_000_000);
        assert_eq!(round_half_integer_to_even::<u16, f32>(65_534.5), 65_534);
    }

    macro_rules! check_ties {
        ($($o:ty),+) => {
            $(
                assert_eq!(round_half_integer_to_even::<$o, f64>(1.5), 2, stringify!($o));
                assert_eq!(round_half_integer_to_even::<$o, f64>(-1.5), -2, stringify!($o));
                assert_eq!(round_half_integer_to_even::<$o, f64>(2.5), 2, stringify!($o));
                assert_eq!(round_half_integer_to_even::<$o, f32>(3.5), 4, stringify!($o));
                assert_eq!(round_half_integer_to_even::<$o, f32>(-2.5), -2, stringify!($o));

                assert_eq!(round_half_integer_up::<$o, f64>(1.5), 2, stringify!($o));
                assert_eq!(round_half_integer_up::<$o, f64>(-1.5), -1, stringify!($o));
                assert_eq!(round_half_integer_up::<$o, f32>(2.5), 3, stringify!($o));
                assert_eq!(round_half_integer_up::<$o, f32>(-0.5), 0, stringify!($o));
                assert_eq!(round::<$o, f64>(-2.5), -2, stringify!($o));
            )+
        };
    }

    #[test]
    fn test_tie_rules_on_every_path() {
        check_ties!(i8, i16, i32, i64, i128, isize);
    }

    #[test]
    fn test_floor_and_ceil_on_every_path() {
        macro_rules! check {
            ($($o:ty),+) => {
                $(
                    assert_eq!(floor::<$o, f64>(1.7), 1, stringify!($o));
                    assert_eq!(floor::<$o, f64>(-1.2), -2, stringify!($o));
                    assert_eq!(floor::<$o, f32>(-1.0), -1, stringify!($o));
                    assert_eq!(floor::<$o, f32>(0.5), 0, stringify!($o));
                    assert_eq!(floor::<$o, f32>(-0.5), -1, stringify!($o));

                    assert_eq!(ceil::<$o, f64>(1.2), 2, stringify!($o));
                    assert_eq!(ceil::<$o, f64>(-1.7), -1, stringify!($o));
                    assert_eq!(ceil::<$o, f32>(1.0), 1, stringify!($o));
                    assert_eq!(ceil::<$o, f32>(0.5), 1, stringify!($o));
                    assert_eq!(ceil::<$o, f32>(-0.5), 0, stringify!($o));
                )+
            };
        }
        check!(i8, i16, i32, i64, i128, isize);
    }

    #[test]
    fn test_unsigned_outputs() {
        assert_eq!(round::<u8, f32>(254.5), 255);
        assert_eq!(round_half_integer_to_even::<u16, f64>(4.5), 4);
        assert_eq!(floor::<u64, f64>(7.99), 7);
        assert_eq!(ceil::<u128, f64>(7.01), 8);
        assert_eq!(round::<u128, f32>(0.5), 1);
    }

    #[test]
    fn test_large_values_on_wide_paths() {
        let big = 1_099_511_627_776.0f64; // 2^40
        assert_eq!(round::<i64, f64>(big + 0.5), 1_099_511_627_777);
        assert_eq!(round_half_integer_to_even::<i64, f64>(big + 0.5), 1_099_511_627_776);
        assert_eq!(floor::<i128, f64>(-big - 0.25), -1_099_511_627_777);
        assert_eq!(ceil::<i128, f64>(big + 0.25), 1_099_511_627_777);
    }

    #[test]
    fn test_overflow_does_not_panic() {
        let _ = round::<i8, f64>(1e300);
        let _ = floor::<i32, f32>(f32::NEG_INFINITY);
        let _ = ceil::<i64, f64>(f64::NAN);
        let _ = round_half_integer_to_even::<u128, f64>(-1e300);
    }
}
