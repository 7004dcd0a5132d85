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

//! # Sentinel Constants
//!
//! Associated-constant traits for the values `0` and `1`, implemented for
//! every integer and floating-point primitive. The comparison dispatcher uses
//! them to recognize exact zero and one without converting through another
//! type, and the range check and rounding paths use them in generic code.

/// A trait for numeric types that have a constant representing +1.
///
/// # Examples
///
/// ```rust
/// # use numsafe_core::num::constants::PlusOne;
/// assert_eq!(<u8 as PlusOne>::PLUS_ONE, 1);
/// assert_eq!(<f64 as PlusOne>::PLUS_ONE, 1.0);
/// ```
pub trait PlusOne {
    /// The constant representing +1 for the implementing type.
    const PLUS_ONE: Self;
}

/// A trait for numeric types that have a constant representing 0.
pub trait Zero {
    /// The constant representing 0 for the implementing type.
    const ZERO: Self;
}

macro_rules! impl_const_for {
    ($trait_name:ident, $const_name:ident, $value:expr, $($t:ty),+) => {
        $(
            impl $trait_name for $t {
                const $const_name: Self = $value;
            }
        )+
    };
}

impl_const_for!(PlusOne, PLUS_ONE, 1, i8, i16, i32, i64, i128, isize);
impl_const_for!(PlusOne, PLUS_ONE, 1, u8, u16, u32, u64, u128, usize);
impl_const_for!(PlusOne, PLUS_ONE, 1.0, f32, f64);

impl_const_for!(Zero, ZERO, 0, i8, i16, i32, i64, i128, isize);
impl_const_for!(Zero, ZERO, 0, u8, u16, u32, u64, u128, usize);
impl_const_for!(Zero, ZERO, 0.0, f32, f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_constants() {
        assert_eq!(<i8 as PlusOne>::PLUS_ONE, 1);
        assert_eq!(<i128 as Zero>::ZERO, 0);
        assert_eq!(<usize as PlusOne>::PLUS_ONE, 1);
        assert_eq!(<u128 as Zero>::ZERO, 0);
    }

    #[test]
    fn test_float_constants_are_exact() {
        assert_eq!(<f32 as Zero>::ZERO.to_bits(), 0);
        assert_eq!(<f64 as PlusOne>::PLUS_ONE.to_bits(), 1.0f64.to_bits());
        assert_eq!(<f32 as PlusOne>::PLUS_ONE, 1.0);
        assert!(<f64 as Zero>::ZERO.is_sign_positive());
    }
}
