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

use crate::geometry::{Point2, Vector2};
use crate::numeric::scalar::Scalar;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment2<T: Scalar> {
    pub a: Point2<T>,
    pub b: Point2<T>,
}

impl<T: Scalar> Segment2<T> {
    pub fn new(a: &Point2<T>, b: &Point2<T>) -> Self {
        Self { a: *a, b: *b }
    }

    pub fn direction(&self) -> Vector2<T> {
        self.b - self.a
    }

    pub fn length(&self) -> T {
        self.a.distance_to(&self.b)
    }

    pub fn midpoint(&self) -> Point2<T> {
        self.a.midpoint(&self.b)
    }

    pub fn inverse(&self) -> Self {
        Self {
            a: self.b,
            b: self.a,
        }
    }

    /// Parameter of the orthogonal projection of `p` on the supporting line,
    /// 0 at `a` and 1 at `b`. `None` when the segment has zero length.
    pub fn projection_param(&self, p: &Point2<T>) -> Option<T> {
        let d = self.direction();
        let len2 = d.norm_squared();
        if len2 == T::zero() {
            return None;
        }
        Some((*p - self.a).dot(&d) / len2)
    }

    /// Orthogonal projection of `p` on the supporting line.
    pub fn project_point_on_line(&self, p: &Point2<T>) -> Point2<T> {
        match self.projection_param(p) {
            Some(t) => self.a.lerp(&self.b, t),
            None => self.a,
        }
    }

    /// Signed distance of `p` from the supporting line, positive on the left
    /// of `a -> b`.
    pub fn signed_distance(&self, p: &Point2<T>) -> T {
        let d = self.direction();
        let len = d.norm();
        if len == T::zero() {
            return self.a.distance_to(p);
        }
        d.cross(&(*p - self.a)) / len
    }

    /// Distance from `p` to the closest point of the segment.
    pub fn distance_to_point(&self, p: &Point2<T>) -> T {
        match self.projection_param(p) {
            Some(t) => {
                let t = t.max(T::zero()).min(T::one());
                self.a.lerp(&self.b, t).distance_to(p)
            }
            None => self.a.distance_to(p),
        }
    }

    /// Distance from `p` to its projection, or `None` when the projection
    /// falls outside the segment.
    pub fn distance_to_point_unclamped(&self, p: &Point2<T>) -> Option<T> {
        let t = self.projection_param(p)?;
        if t < T::zero() || t > T::one() {
            return None;
        }
        Some(self.a.lerp(&self.b, t).distance_to(p))
    }
}
