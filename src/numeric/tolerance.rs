// SPDX-License-Identifier: MIT
//
// Copyright (c) 2025 Alexandre Severino
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

use crate::numeric::scalar::Scalar;

/// The two independent tolerances every geometric decision is made with.
///
/// `distance` (ε) decides whether a point is effectively on a feature: a vertex,
/// an edge, the line of a segment. `numeric` (f) decides whether a solved
/// parameter is numerically equal to a boundary value such as 0 or 1. They are
/// kept apart so call sites can scale ε with the working area without touching
/// the floating-point slack.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerance<T: Scalar> {
    pub distance: T,
    pub numeric: T,
}

impl<T: Scalar> Tolerance<T> {
    pub fn new(distance: T, numeric: T) -> Self {
        Self { distance, numeric }
    }

    /// `a` and `b` are equal within the numeric tolerance.
    #[inline]
    pub fn approx_eq(&self, a: T, b: T) -> bool {
        (b - a).abs() <= self.numeric
    }

    /// Three-way comparison within the numeric tolerance: 0 when equal,
    /// otherwise the sign of `a - b`.
    #[inline]
    pub fn compare(&self, a: T, b: T) -> i8 {
        let diff = a - b;
        if diff <= self.numeric && diff >= -self.numeric {
            0
        } else {
            diff.sign()
        }
    }

    /// Parameter `t` along a span of `length` lands more than the distance
    /// tolerance away from both ends.
    #[inline]
    pub fn is_interior(&self, t: T, length: T) -> bool {
        t * length > self.distance && (T::one() - t) * length > self.distance
    }
}

impl<T: Scalar> Default for Tolerance<T> {
    fn default() -> Self {
        Self {
            distance: T::default_distance_tolerance(),
            numeric: T::default_numeric_tolerance(),
        }
    }
}
