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

//! # Constants
//!
//! Double-precision mathematical constants.
//!
//! Values available in `core::f64::consts` are re-bound from there; the rest
//! are given to full `f64` precision.

use core::f64::consts;

/// Euler's number, `e`.
pub const E: f64 = consts::E;
/// `log2(e)`.
pub const LOG2E: f64 = consts::LOG2_E;
/// `log10(e)`.
pub const LOG10E: f64 = consts::LOG10_E;
/// `ln(2)`.
pub const LN2: f64 = consts::LN_2;
/// `ln(10)`.
pub const LN10: f64 = consts::LN_10;
/// `π`.
pub const PI: f64 = consts::PI;
/// `2π`.
pub const TWO_PI: f64 = consts::TAU;
/// `π/2`.
pub const PI_OVER_2: f64 = consts::FRAC_PI_2;
/// `π/4`.
pub const PI_OVER_4: f64 = consts::FRAC_PI_4;
/// `1/π`.
pub const ONE_OVER_PI: f64 = consts::FRAC_1_PI;
/// `2/π`.
pub const TWO_OVER_PI: f64 = consts::FRAC_2_PI;
/// `2/√π`.
pub const TWO_OVER_SQRTPI: f64 = consts::FRAC_2_SQRT_PI;
/// `1/√(2π)`.
pub const ONE_OVER_SQRT2PI: f64 = 0.398_942_280_401_432_7;
/// `√2`.
pub const SQRT2: f64 = consts::SQRT_2;
/// `√(1/2)`.
pub const SQRT1_2: f64 = consts::FRAC_1_SQRT_2;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::num::ulp::float_almost_equal_default;

    #[test]
    fn test_derived_constants() {
        assert!(float_almost_equal_default(ONE_OVER_SQRT2PI, 1.0 / (2.0 * PI).sqrt()));
        assert!(float_almost_equal_default(TWO_PI, 2.0 * PI));
        assert!(float_almost_equal_default(SQRT1_2 * SQRT2, 1.0));
        assert!(float_almost_equal_default(LN2 * LOG2E, 1.0));
        assert!(float_almost_equal_default(LN10 * LOG10E, 1.0));
        assert!(float_almost_equal_default(PI_OVER_2 * TWO_OVER_PI, 1.0));
        assert!(float_almost_equal_default(PI_OVER_4 * 4.0 * ONE_OVER_PI, 1.0));
        assert!(float_almost_equal_default(TWO_OVER_SQRTPI * PI.sqrt(), 2.0));
        assert!(float_almost_equal_default(E.ln(), 1.0));
    }
}
