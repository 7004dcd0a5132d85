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

//! # Numeric Type Categories
//!
//! Compile-time classification of scalar types. Every supported numeric
//! primitive carries a `NumericCategory` (integer or not, signed or not) and a
//! zero-sized kind marker that the comparison dispatcher keys on. All of this
//! is resolved during monomorphization; nothing here exists at runtime.
//!
//! ## Highlights
//!
//! - `Scalar` attaches a `ScalarKind` marker (`FloatingPoint`, `SignedInteger`,
//!   `UnsignedInteger`, `Unclassified`) to a type.
//! - `Numeric` is implemented for the twelve integer primitives plus `f32` and
//!   `f64` and exposes `IS_INTEGER`, `IS_SIGNED` and `CATEGORY`.
//! - `Integer` adds the widened representation (`i128` or `u128`) used for
//!   exact equality across integer widths of the same signedness.
//! - `bool` and `char` are `Unclassified` scalars: they can be compared with
//!   themselves but are never classified.
//!
//! Asking for the category of a non-numeric type is a compile error:
//!
//! ```compile_fail
//! # use numsafe_core::num::category::classify;
//! let _ = classify::<bool>();
//! ```

use crate::num::constants::{PlusOne, Zero};
use num_traits::{AsPrimitive, PrimInt};
use std::fmt::Debug;
use std::hash::Hash;

mod sealed {
    pub trait Sealed {}
}

/// The integer/signedness classification of a scalar numeric type.
///
/// Floating-point types are always classified as non-integer and signed.
///
/// # Examples
///
/// ```rust
/// # use numsafe_core::num::category::{classify, NumericCategory};
/// assert_eq!(classify::<u16>(), NumericCategory::UNSIGNED_INTEGER);
/// assert_eq!(classify::<f32>(), NumericCategory::FLOATING_POINT);
/// assert!(classify::<i64>().is_signed());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NumericCategory {
    is_integer: bool,
    is_signed: bool,
}

impl NumericCategory {
    /// The category shared by `f32` and `f64`.
    pub const FLOATING_POINT: Self = Self::new(false, true);

    /// The category of `i8` through `i128` and `isize`.
    pub const SIGNED_INTEGER: Self = Self::new(true, true);

    /// The category of `u8` through `u128` and `usize`.
    pub const UNSIGNED_INTEGER: Self = Self::new(true, false);

    /// Creates a category from its two flags.
    #[inline(always)]
    pub const fn new(is_integer: bool, is_signed: bool) -> Self {
        Self {
            is_integer,
            is_signed,
        }
    }

    /// Returns `true` for integer categories.
    #[inline(always)]
    pub const fn is_integer(self) -> bool {
        self.is_integer
    }

    /// Returns `true` if negative values are representable.
    #[inline(always)]
    pub const fn is_signed(self) -> bool {
        self.is_signed
    }

    /// Returns `true` for the floating-point category.
    #[inline(always)]
    pub const fn is_floating_point(self) -> bool {
        !self.is_integer && self.is_signed
    }
}

impl std::fmt::Display for NumericCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match (self.is_integer, self.is_signed) {
            (false, true) => "floating-point",
            (true, true) => "signed integer",
            (true, false) => "unsigned integer",
            (false, false) => "unsigned non-integer",
        };
        write!(f, "{}", name)
    }
}

/// A type-level marker naming the category of a scalar.
///
/// This trait is sealed; the four markers below are the only kinds.
pub trait ScalarKind: sealed::Sealed + 'static {
    /// The category of the kind, or `None` for `Unclassified`.
    const CATEGORY: Option<NumericCategory>;
}

/// A `ScalarKind` that belongs to a numeric category.
pub trait NumericKind: ScalarKind {
    /// The category of the kind.
    const NUMERIC: NumericCategory;
}

/// Kind marker for `f32` and `f64`.
#[derive(Debug)]
pub enum FloatingPoint {}

/// Kind marker for signed integer primitives.
#[derive(Debug)]
pub enum SignedInteger {}

/// Kind marker for unsigned integer primitives.
#[derive(Debug)]
pub enum UnsignedInteger {}

/// Kind marker for scalars that take part in comparisons but are not numeric.
#[derive(Debug)]
pub enum Unclassified {}

macro_rules! impl_numeric_kind_for {
    ($kind:ty, $category:expr) => {
        impl sealed::Sealed for $kind {}

        impl ScalarKind for $kind {
            const CATEGORY: Option<NumericCategory> = Some($category);
        }

        impl NumericKind for $kind {
            const NUMERIC: NumericCategory = $category;
        }
    };
}

impl_numeric_kind_for!(FloatingPoint, NumericCategory::FLOATING_POINT);
impl_numeric_kind_for!(SignedInteger, NumericCategory::SIGNED_INTEGER);
impl_numeric_kind_for!(UnsignedInteger, NumericCategory::UNSIGNED_INTEGER);

impl sealed::Sealed for Unclassified {}

impl ScalarKind for Unclassified {
    const CATEGORY: Option<NumericCategory> = None;
}

/// A by-value scalar that can take part in cross-type comparisons.
///
/// Implement this with `Kind = Unclassified` for custom `Copy + PartialEq`
/// label types; such types compare with themselves through native equality.
pub trait Scalar: Copy + PartialEq + Debug + 'static {
    type Kind: ScalarKind;
}

/// A scalar numeric primitive with a statically known category.
///
/// Sealed: implemented for `i8`..`i128`, `isize`, `u8`..`u128`, `usize`,
/// `f32` and `f64`.
pub trait Numeric:
    Scalar<Kind: NumericKind> + PartialOrd + Zero + PlusOne + Send + Sync + sealed::Sealed
{
    /// The category of the type.
    const CATEGORY: NumericCategory = <Self::Kind as NumericKind>::NUMERIC;

    /// `true` for integer primitives.
    const IS_INTEGER: bool = Self::CATEGORY.is_integer();

    /// `true` for signed integers and floating-point types.
    const IS_SIGNED: bool = Self::CATEGORY.is_signed();
}

/// An integer primitive.
///
/// `Wide` is `i128` for signed and `u128` for unsigned types, so two integers
/// share a `Wide` type exactly when they share a signedness. Widening is
/// always value-preserving.
pub trait Integer: Numeric + PrimInt + Hash + AsPrimitive<f32> + AsPrimitive<f64> {
    type Wide: PrimInt + Debug + 'static;

    /// Converts `self` to the widest integer of the same signedness.
    fn widen(self) -> Self::Wide;
}

/// Returns the category of `T`.
///
/// # Examples
///
/// ```rust
/// # use numsafe_core::num::category::{classify, NumericCategory};
/// const CATEGORY: NumericCategory = classify::<i8>();
/// assert!(CATEGORY.is_integer());
/// ```
#[inline(always)]
pub const fn classify<T: Numeric>() -> NumericCategory {
    T::CATEGORY
}

macro_rules! impl_scalar_for {
    ($kind:ty, $t:ty) => {
        impl Scalar for $t {
            type Kind = $kind;
        }
    };
}

macro_rules! impl_float_for {
    ($t:ty) => {
        impl_scalar_for!(FloatingPoint, $t);
        impl sealed::Sealed for $t {}
        impl Numeric for $t {}
    };
}

macro_rules! impl_integer_for {
    ($kind:ty, $wide:ty, $t:ty) => {
        impl_scalar_for!($kind, $t);
        impl sealed::Sealed for $t {}
        impl Numeric for $t {}

        impl Integer for $t {
            type Wide = $wide;

            #[inline(always)]
            fn widen(self) -> $wide {
                self as $wide
            }
        }
    };
}

impl_integer_for!(SignedInteger, i128, i8);
impl_integer_for!(SignedInteger, i128, i16);
impl_integer_for!(SignedInteger, i128, i32);
impl_integer_for!(SignedInteger, i128, i64);
impl_integer_for!(SignedInteger, i128, i128);
impl_integer_for!(SignedInteger, i128, isize);

impl_integer_for!(UnsignedInteger, u128, u8);
impl_integer_for!(UnsignedInteger, u128, u16);
impl_integer_for!(UnsignedInteger, u128, u32);
impl_integer_for!(UnsignedInteger, u128, u64);
impl_integer_for!(UnsignedInteger, u128, u128);
impl_integer_for!(UnsignedInteger, u128, usize);

impl_float_for!(f32);
impl_float_for!(f64);

impl_scalar_for!(Unclassified, bool);
impl_scalar_for!(Unclassified, char);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signed_integers_are_classified_signed() {
        macro_rules! check {
            ($($t:ty),*) => {
                $(
                    assert!(<$t as Numeric>::IS_INTEGER, stringify!($t));
                    assert!(<$t as Numeric>::IS_SIGNED, stringify!($t));
                    assert_eq!(classify::<$t>(), NumericCategory::SIGNED_INTEGER);
                )*
            };
        }
        check!(i8, i16, i32, i64, i128, isize);
    }

    #[test]
    fn test_unsigned_integers_are_classified_unsigned() {
        macro_rules! check {
            ($($t:ty),*) => {
                $(
                    assert!(<$t as Numeric>::IS_INTEGER, stringify!($t));
                    assert!(!<$t as Numeric>::IS_SIGNED, stringify!($t));
                    assert_eq!(classify::<$t>(), NumericCategory::UNSIGNED_INTEGER);
                )*
            };
        }
        check!(u8, u16, u32, u64, u128, usize);
    }

    #[test]
    fn test_floats_are_signed_non_integers() {
        assert_eq!(classify::<f32>(), NumericCategory::FLOATING_POINT);
        assert_eq!(classify::<f64>(), NumericCategory::FLOATING_POINT);
        assert!(!f32::IS_INTEGER);
        assert!(f64::IS_SIGNED);
        assert!(classify::<f64>().is_floating_point());
        assert!(!classify::<u8>().is_floating_point());
    }

    #[test]
    fn test_kind_categories_match_numeric_categories() {
        assert_eq!(
            <FloatingPoint as ScalarKind>::CATEGORY,
            Some(NumericCategory::FLOATING_POINT)
        );
        assert_eq!(
            <SignedInteger as ScalarKind>::CATEGORY,
            Some(NumericCategory::SIGNED_INTEGER)
        );
        assert_eq!(
            <UnsignedInteger as ScalarKind>::CATEGORY,
            Some(NumericCategory::UNSIGNED_INTEGER)
        );
        assert_eq!(<Unclassified as ScalarKind>::CATEGORY, None);
    }

    #[test]
    fn test_widen_preserves_value() {
        assert_eq!(i8::MIN.widen(), -128i128);
        assert_eq!(isize::MAX.widen(), isize::MAX as i128);
        assert_eq!(u8::MAX.widen(), 255u128);
        assert_eq!(u64::MAX.widen(), u64::MAX as u128);
    }

    #[test]
    fn test_display() {
        assert_eq!(NumericCategory::FLOATING_POINT.to_string(), "floating-point");
        assert_eq!(NumericCategory::SIGNED_INTEGER.to_string(), "signed integer");
        assert_eq!(NumericCategory::UNSIGNED_INTEGER.to_string(), "unsigned integer");
        assert_eq!(
            NumericCategory::new(false, false).to_string(),
            "unsigned non-integer"
        );
    }
}
