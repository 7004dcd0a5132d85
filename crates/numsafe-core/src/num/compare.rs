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

//! # Cross-Type Equality
//!
//! Equality between scalars of possibly different numeric types, without
//! implicit promotion. The pair of operand kinds selects one comparison
//! strategy at compile time:
//!
//! | left     | right    | strategy           |
//! |----------|----------|--------------------|
//! | float    | float    | `FloatVsFloat`     |
//! | float    | integer  | `FloatVsInt`       |
//! | integer  | float    | `IntVsFloat`       |
//! | signed   | unsigned | `SignedVsUnsigned` |
//! | unsigned | signed   | `UnsignedVsSigned` |
//! | signed   | signed   | `IntVsInt`         |
//! | unsigned | unsigned | `IntVsInt`         |
//! | other    | other    | `RawFallback`      |
//!
//! Floating-point strategies use `float_almost_equal_default` at the wider of
//! the two float types. Mixed-signedness integers are bounds-checked before the
//! unsigned operand is narrowed, so wrapped values never compare equal.
//!
//! ```rust
//! use numsafe_core::num::compare::{equals_comparison, not_equals_comparison};
//!
//! assert!(equals_comparison(1.0f32, 1i32));
//! assert!(equals_comparison(4u32, 4i32));
//! assert!(!equals_comparison(-1i32, 4_000_000_000u32));
//! assert!(!equals_comparison(127i8, 383u16)); // 383 wraps to 127 as i8
//! assert!(not_equals_comparison(2.0, 1.0));
//! ```
//!
//! Pairing an unclassified scalar with a number does not compile:
//!
//! ```compile_fail
//! use numsafe_core::num::compare::equals_comparison;
//! let _ = equals_comparison(true, 1.0f32);
//! ```

use crate::num::category::{
    FloatingPoint, Integer, NumericCategory, Scalar, ScalarKind, SignedInteger, Unclassified,
    UnsignedInteger,
};
use crate::num::ulp::{FloatBits, float_almost_equal_default};
use num_traits::AsPrimitive;

/// The comparison algorithms the dispatcher chooses between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComparisonStrategy {
    FloatVsFloat,
    FloatVsInt,
    IntVsFloat,
    SignedVsUnsigned,
    UnsignedVsSigned,
    IntVsInt,
    RawFallback,
}

impl ComparisonStrategy {
    /// Selects the strategy for a pair of categories.
    ///
    /// Total: every pair maps to exactly one strategy, and anything that is
    /// not a recognised numeric pairing falls back to `RawFallback`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use numsafe_core::num::category::NumericCategory;
    /// # use numsafe_core::num::compare::ComparisonStrategy;
    /// assert_eq!(
    ///     ComparisonStrategy::select(
    ///         Some(NumericCategory::UNSIGNED_INTEGER),
    ///         Some(NumericCategory::SIGNED_INTEGER)
    ///     ),
    ///     ComparisonStrategy::UnsignedVsSigned
    /// );
    /// assert_eq!(
    ///     ComparisonStrategy::select(None, Some(NumericCategory::FLOATING_POINT)),
    ///     ComparisonStrategy::RawFallback
    /// );
    /// ```
    pub const fn select(
        left: Option<NumericCategory>,
        right: Option<NumericCategory>,
    ) -> Self {
        let (Some(left), Some(right)) = (left, right) else {
            return Self::RawFallback;
        };
        match (
            left.is_integer(),
            left.is_signed(),
            right.is_integer(),
            right.is_signed(),
        ) {
            (false, true, false, true) => Self::FloatVsFloat,
            (false, true, true, _) => Self::FloatVsInt,
            (true, _, false, true) => Self::IntVsFloat,
            (true, true, true, false) => Self::SignedVsUnsigned,
            (true, false, true, true) => Self::UnsignedVsSigned,
            (true, true, true, true) | (true, false, true, false) => Self::IntVsInt,
            _ => Self::RawFallback,
        }
    }
}

impl std::fmt::Display for ComparisonStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::FloatVsFloat => "FloatVsFloat",
            Self::FloatVsInt => "FloatVsInt",
            Self::IntVsFloat => "IntVsFloat",
            Self::SignedVsUnsigned => "SignedVsUnsigned",
            Self::UnsignedVsSigned => "UnsignedVsSigned",
            Self::IntVsInt => "IntVsInt",
            Self::RawFallback => "RawFallback",
        };
        write!(f, "{}", name)
    }
}

/// Zero-sized markers, one per `ComparisonStrategy` variant.
pub mod strategy {
    use super::ComparisonStrategy;

    /// A type-level comparison strategy.
    pub trait Strategy {
        /// The runtime tag of this strategy.
        const TAG: ComparisonStrategy;
    }

    macro_rules! strategy_marker {
        ($name:ident) => {
            #[derive(Debug)]
            pub enum $name {}

            impl Strategy for $name {
                const TAG: ComparisonStrategy = ComparisonStrategy::$name;
            }
        };
    }

    strategy_marker!(FloatVsFloat);
    strategy_marker!(FloatVsInt);
    strategy_marker!(IntVsFloat);
    strategy_marker!(SignedVsUnsigned);
    strategy_marker!(UnsignedVsSigned);
    strategy_marker!(IntVsInt);
    strategy_marker!(RawFallback);
}

use strategy::{
    FloatVsFloat, FloatVsInt, IntVsFloat, IntVsInt, RawFallback, SignedVsUnsigned, Strategy,
    UnsignedVsSigned,
};

/// Maps a pair of kinds (`Self` on the left, `Rhs` on the right) to a strategy.
pub trait SelectStrategy<Rhs: ScalarKind>: ScalarKind {
    type Strategy: Strategy;
}

macro_rules! select_strategy {
    ($lhs:ty, $rhs:ty => $strategy:ty) => {
        impl SelectStrategy<$rhs> for $lhs {
            type Strategy = $strategy;
        }
    };
}

select_strategy!(FloatingPoint, FloatingPoint => FloatVsFloat);
select_strategy!(FloatingPoint, SignedInteger => FloatVsInt);
select_strategy!(FloatingPoint, UnsignedInteger => FloatVsInt);
select_strategy!(SignedInteger, FloatingPoint => IntVsFloat);
select_strategy!(UnsignedInteger, FloatingPoint => IntVsFloat);
select_strategy!(SignedInteger, UnsignedInteger => SignedVsUnsigned);
select_strategy!(UnsignedInteger, SignedInteger => UnsignedVsSigned);
select_strategy!(SignedInteger, SignedInteger => IntVsInt);
select_strategy!(UnsignedInteger, UnsignedInteger => IntVsInt);
select_strategy!(Unclassified, Unclassified => RawFallback);
select_strategy!(Unclassified, FloatingPoint => RawFallback);
select_strategy!(Unclassified, SignedInteger => RawFallback);
select_strategy!(Unclassified, UnsignedInteger => RawFallback);
select_strategy!(FloatingPoint, Unclassified => RawFallback);
select_strategy!(SignedInteger, Unclassified => RawFallback);
select_strategy!(UnsignedInteger, Unclassified => RawFallback);

/// The strategy selected for the operand types `A` and `B`.
pub type SelectedStrategy<A, B> =
    <<A as Scalar>::Kind as SelectStrategy<<B as Scalar>::Kind>>::Strategy;

/// An equality algorithm for operands of type `A` and `B`.
pub trait Compare<A, B>: Strategy {
    fn equals(x1: A, x2: B) -> bool;
}

/// Pairs two float types with the wider of the two.
pub trait WiderFloat<Rhs: FloatBits>: FloatBits {
    type Output: FloatBits;
}

macro_rules! wider_float {
    ($lhs:ty, $rhs:ty => $output:ty) => {
        impl WiderFloat<$rhs> for $lhs {
            type Output = $output;
        }
    };
}

wider_float!(f32, f32 => f32);
wider_float!(f32, f64 => f64);
wider_float!(f64, f32 => f64);
wider_float!(f64, f64 => f64);

impl<A, B> Compare<A, B> for FloatVsFloat
where
    A: WiderFloat<B> + AsPrimitive<<A as WiderFloat<B>>::Output>,
    B: FloatBits + AsPrimitive<<A as WiderFloat<B>>::Output>,
{
    #[inline(always)]
    fn equals(x1: A, x2: B) -> bool {
        let x1: <A as WiderFloat<B>>::Output = x1.as_();
        let x2: <A as WiderFloat<B>>::Output = x2.as_();
        float_almost_equal_default(x1, x2)
    }
}

impl<F, I> Compare<F, I> for FloatVsInt
where
    F: FloatBits,
    I: Integer + AsPrimitive<F>,
{
    #[inline(always)]
    fn equals(x1: F, x2: I) -> bool {
        // 0 and 1 are exact in every float type; skip the conversion.
        let x2 = if x2 == I::ZERO {
            F::ZERO
        } else if x2 == I::PLUS_ONE {
            F::PLUS_ONE
        } else {
            AsPrimitive::<F>::as_(x2)
        };
        float_almost_equal_default(x1, x2)
    }
}

impl<I, F> Compare<I, F> for IntVsFloat
where
    FloatVsInt: Compare<F, I>,
{
    #[inline(always)]
    fn equals(x1: I, x2: F) -> bool {
        <FloatVsInt as Compare<F, I>>::equals(x2, x1)
    }
}

impl<S, U> Compare<S, U> for SignedVsUnsigned
where
    S: Integer<Wide = i128>,
    U: Integer<Wide = u128> + AsPrimitive<S>,
{
    #[inline(always)]
    fn equals(signed: S, unsigned: U) -> bool {
        if signed < S::ZERO {
            return false;
        }
        // Bounds check in the widened domain before narrowing `unsigned`.
        if unsigned.widen() > S::max_value().widen() as u128 {
            return false;
        }
        let narrowed: S = unsigned.as_();
        signed == narrowed
    }
}

impl<U, S> Compare<U, S> for UnsignedVsSigned
where
    SignedVsUnsigned: Compare<S, U>,
{
    #[inline(always)]
    fn equals(x1: U, x2: S) -> bool {
        <SignedVsUnsigned as Compare<S, U>>::equals(x2, x1)
    }
}

impl<A, B> Compare<A, B> for IntVsInt
where
    A: Integer,
    B: Integer<Wide = A::Wide>,
{
    #[inline(always)]
    fn equals(x1: A, x2: B) -> bool {
        x1.widen() == x2.widen()
    }
}

impl<A, B> Compare<A, B> for RawFallback
where
    A: PartialEq<B>,
{
    #[inline(always)]
    fn equals(x1: A, x2: B) -> bool {
        x1 == x2
    }
}

/// By-value cross-type equality.
///
/// Implemented for every pair of scalars whose selected strategy can compare
/// them; there is exactly one implementation and it cannot be overridden.
///
/// # Examples
///
/// ```rust
/// # use numsafe_core::num::compare::EqualsComparison;
/// assert!((-1.0f32).equals_comparison(-1i8));
/// assert!(!(-1i8).equals_comparison(255u8));
/// ```
pub trait EqualsComparison<Rhs = Self> {
    fn equals_comparison(self, rhs: Rhs) -> bool;
}

impl<A, B> EqualsComparison<B> for A
where
    A: Scalar,
    B: Scalar,
    A::Kind: SelectStrategy<B::Kind>,
    SelectedStrategy<A, B>: Compare<A, B>,
{
    #[inline(always)]
    fn equals_comparison(self, rhs: B) -> bool {
        <SelectedStrategy<A, B> as Compare<A, B>>::equals(self, rhs)
    }
}

/// By-value cross-type inequality: the negation of `EqualsComparison`.
pub trait NotEqualsComparison<Rhs = Self> {
    fn not_equals_comparison(self, rhs: Rhs) -> bool;
}

impl<A, B> NotEqualsComparison<B> for A
where
    A: EqualsComparison<B>,
{
    #[inline(always)]
    fn not_equals_comparison(self, rhs: B) -> bool {
        !self.equals_comparison(rhs)
    }
}

/// Returns whether `x1` and `x2` are equal under the strategy selected for
/// their types.
#[inline(always)]
pub fn equals_comparison<A, B>(x1: A, x2: B) -> bool
where
    A: EqualsComparison<B>,
{
    x1.equals_comparison(x2)
}

/// Returns `!equals_comparison(x1, x2)`.
#[inline(always)]
pub fn not_equals_comparison<A, B>(x1: A, x2: B) -> bool
where
    A: NotEqualsComparison<B>,
{
    x1.not_equals_comparison(x2)
}

/// Returns the strategy that `equals_comparison::<A, B>` uses.
///
/// # Examples
///
/// ```rust
/// # use numsafe_core::num::compare::{strategy_of, ComparisonStrategy};
/// assert_eq!(strategy_of::<u8, f64>(), ComparisonStrategy::IntVsFloat);
/// assert_eq!(strategy_of::<char, char>(), ComparisonStrategy::RawFallback);
/// ```
#[inline(always)]
pub const fn strategy_of<A, B>() -> ComparisonStrategy
where
    A: Scalar,
    B: Scalar,
    A::Kind: SelectStrategy<B::Kind>,
{
    <SelectedStrategy<A, B> as Strategy>::TAG
}
