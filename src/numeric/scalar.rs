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

use std::fmt::Debug;

use num_traits::Float;

/// Floating-point coordinate type the triangulation is generic over.
///
/// Besides the arithmetic from [`Float`], every scalar carries the default
/// tolerances used when no explicit [`Tolerance`](super::tolerance::Tolerance)
/// is configured.
pub trait Scalar: Float + Debug + Default + Send + Sync + 'static {
    /// Distance below which two geometric features are considered coincident.
    fn default_distance_tolerance() -> Self;

    /// Slack allowed when comparing solved parametric values against 0 and 1.
    fn default_numeric_tolerance() -> Self;

    #[inline(always)]
    fn two() -> Self {
        Self::one() + Self::one()
    }

    #[inline(always)]
    fn half() -> Self {
        Self::one() / Self::two()
    }

    /// Returns -1, 0, or +1.
    fn sign(&self) -> i8 {
        if *self > Self::zero() {
            1
        } else if *self < Self::zero() {
            -1
        } else {
            0
        }
    }

    /// Lossy conversion used for diagnostics only.
    fn as_f64(&self) -> f64 {
        self.to_f64().unwrap_or(f64::NAN)
    }
}

impl Scalar for f64 {
    fn default_distance_tolerance() -> Self {
        1e-5
    }

    fn default_numeric_tolerance() -> Self {
        1e-6
    }
}

impl Scalar for f32 {
    fn default_distance_tolerance() -> Self {
        1e-4
    }

    fn default_numeric_tolerance() -> Self {
        1e-5
    }
}
