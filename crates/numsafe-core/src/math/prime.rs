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

//! # Primes
//!
//! Trial-division helpers for unsigned integers.
//!
//! ```rust
//! # use numsafe_core::math::prime::{greatest_prime_factor, is_prime};
//! assert!(is_prime(13u32));
//! assert!(!is_prime(1u8));
//! assert_eq!(greatest_prime_factor(75u64), 5);
//! ```

use num_traits::{PrimInt, Unsigned};

/// Returns `true` if `n` is prime.
///
/// `0` and `1` are not prime.
pub fn is_prime<T>(n: T) -> bool
where
    T: PrimInt + Unsigned,
{
    let two = T::one() + T::one();
    if n < two {
        return false;
    }

    if n % two == T::zero() {
        return n == two;
    }

    let mut divisor = two + T::one();
    // `divisor <= n / divisor` avoids overflowing `divisor * divisor`.
    while divisor <= n / divisor {
        if n % divisor == T::zero() {
            return false;
        }
        divisor = divisor + two;
    }
    true
}

/// Returns the greatest prime factor of `n`.
///
/// `0` and `1` have no prime factors and are returned unchanged.
pub fn greatest_prime_factor<T>(n: T) -> T
where
    T: PrimInt + Unsigned,
{
    let two = T::one() + T::one();
    if n < two {
        return n;
    }

    let mut remaining = n;
    let mut divisor = two;
    while divisor <= remaining / divisor {
        if remaining % divisor == T::zero() {
            remaining = remaining / divisor;
        } else {
            divisor = divisor + T::one();
        }
    }
    remaining
}
