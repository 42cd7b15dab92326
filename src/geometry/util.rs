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

use crate::geometry::Point2;
use crate::kernel::orient2d;
use crate::numeric::scalar::Scalar;

/// Signed area of triangle `abc`, positive when counter-clockwise.
pub fn triangle_signed_area<T: Scalar>(a: &Point2<T>, b: &Point2<T>, c: &Point2<T>) -> T {
    orient2d(a, b, c) * T::half()
}

/// Signed area of a simple polygon given as a vertex ring (shoelace formula).
pub fn polygon_signed_area<T: Scalar>(ring: &[Point2<T>]) -> T {
    let n = ring.len();
    if n < 3 {
        return T::zero();
    }
    let mut acc = T::zero();
    for i in 0..n {
        let p = ring[i];
        let q = ring[(i + 1) % n];
        acc = acc + (p.x * q.y - q.x * p.y);
    }
    acc * T::half()
}

/// Center of the circle through `a`, `b`, `c`; `None` if they are collinear.
pub fn circumcenter<T: Scalar>(a: &Point2<T>, b: &Point2<T>, c: &Point2<T>) -> Option<Point2<T>> {
    let d = T::two() * orient2d(a, b, c);
    if d == T::zero() {
        return None;
    }

    let ab = *b - *a;
    let ac = *c - *a;
    let ab2 = ab.norm_squared();
    let ac2 = ac.norm_squared();

    let ux = (ac.y * ab2 - ab.y * ac2) / d;
    let uy = (ab.x * ac2 - ac.x * ab2) / d;

    let center = Point2 {
        x: a.x + ux,
        y: a.y + uy,
    };
    if !center.is_finite() {
        return None;
    }
    Some(center)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn circumcenter_of_right_triangle_is_hypotenuse_midpoint() {
        let a = Point2::<f64>::new(0.0, 0.0);
        let b = Point2::new(2.0, 0.0);
        let c = Point2::new(0.0, 2.0);
        let o = circumcenter(&a, &b, &c).unwrap();
        assert!((o.x - 1.0).abs() < 1e-12);
        assert!((o.y - 1.0).abs() < 1e-12);
    }

    #[test]
    fn collinear_points_have_no_circumcenter() {
        let a = Point2::<f64>::new(0.0, 0.0);
        let b = Point2::new(1.0, 1.0);
        let c = Point2::new(2.0, 2.0);
        assert!(circumcenter(&a, &b, &c).is_none());
    }

    #[test]
    fn square_ring_area() {
        let ring = [
            Point2::<f64>::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(0.0, 1.0),
        ];
        assert_eq!(polygon_signed_area(&ring), 1.0);
    }
}
