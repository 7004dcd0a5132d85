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

#![cfg(feature = "serde")]

use numsafe_core::num::ulp::Tolerance;

#[test]
fn test_tolerance_json_round_trip() {
    let tolerance = Tolerance::<f64>::new(8, 1e-12);
    let json = serde_json::to_string(&tolerance).expect("serialize");
    assert_eq!(json, r#"{"max_ulps":8,"max_absolute_difference":1e-12}"#);

    let restored: Tolerance<f64> = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(restored, tolerance);
}

#[test]
fn test_invalid_tolerance_is_rejected() {
    let negative_ulps = serde_json::from_str::<Tolerance<f32>>(
        r#"{"max_ulps":-1,"max_absolute_difference":0.0}"#,
    );
    assert!(negative_ulps.is_err());

    let negative_floor = serde_json::from_str::<Tolerance<f32>>(
        r#"{"max_ulps":4,"max_absolute_difference":-0.5}"#,
    );
    let message = negative_floor.unwrap_err().to_string();
    assert!(message.contains("max_absolute_difference"), "{message}");
}
