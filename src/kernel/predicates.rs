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
use crate::geometry::util::circumcenter;
use crate::kernel::orientation::{Side, orient2d, side_of_line};
use crate::numeric::scalar::Scalar;

/// `p` lies inside or on the boundary of triangle `abc` (either winding),
/// with points up to `eps` outside an edge still accepted.
pub fn point_in_triangle<T: Scalar>(
    p: &Point2<T>,
    a: &Point2<T>,
    b: &Point2<T>,
    c: &Point2<T>,
    eps: T,
) -> bool {
    let (b, c) = if orient2d(a, b, c) < T::zero() {
        (c, b)
    } else {
        (b, c)
    };
    side_of_line(a, b, p, eps) != Side::Right
        && side_of_line(b, c, p, eps) != Side::Right
        && side_of_line(c, a, p, eps) != Side::Right
}

/// `p` lies strictly inside the circumcircle of `abc`, by more than `eps`.
///
/// Degenerate (collinear) triangles have no circle and report `false`.
pub fn in_circumcircle<T: Scalar>(
    p: &Point2<T>,
    a: &Point2<T>,
    b: &Point2<T>,
    c: &Point2<T>,
    eps: T,
) -> bool {
    let Some(center) = circumcenter(a, b, c) else {
        return false;
    };
    let radius = center.distance_to(a);
    center.distance_to(p) < radius - eps
}

/// The quadrilateral `a, c, b, d` (diagonal `ab`, apexes `c` and `d` on
/// opposite sides) is strictly convex, i.e. the other diagonal `cd` has `a`
/// and `b` more than `eps` away on opposite sides.
pub fn is_strictly_convex_quad<T: Scalar>(
    a: &Point2<T>,
    b: &Point2<T>,
    c: &Point2<T>,
    d: &Point2<T>,
    eps: T,
) -> bool {
    let sa = side_of_line(c, d, a, eps);
    let sb = side_of_line(c, d, b, eps);
    let sc = side_of_line(a, b, c, eps);
    let sd = side_of_line(a, b, d, eps);
    matches!(
        (sa, sb),
        (Side::Left, Side::Right) | (Side::Right, Side::Left)
    ) && matches!(
        (sc, sd),
        (Side::Left, Side::Right) | (Side::Right, Side::Left)
    )
}

/// Edge `ab` shared by triangles `abc` and `abd` is locally Delaunay: neither
/// apex lies inside the other triangle's circumcircle by more than `eps`.
pub fn is_locally_delaunay<T: Scalar>(
    a: &Point2<T>,
    b: &Point2<T>,
    c: &Point2<T>,
    d: &Point2<T>,
    eps: T,
) -> bool {
    !in_circumcircle(d, a, b, c, eps) && !in_circumcircle(c, a, b, d, eps)
}

/// Flipping `ab` to `cd` would improve the triangulation: `ab` is not locally
/// Delaunay and the quadrilateral admits the other diagonal.
pub fn should_flip<T: Scalar>(
    a: &Point2<T>,
    b: &Point2<T>,
    c: &Point2<T>,
    d: &Point2<T>,
    eps: T,
) -> bool {
    !is_locally_delaunay(a, b, c, d, eps) && is_strictly_convex_quad(a, b, c, d, eps)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-5;

    fn p(x: f64, y: f64) -> Point2<f64> {
        Point2::new(x, y)
    }

    #[test]
    fn point_in_triangle_accepts_both_windings() {
        let a = p(0.0, 0.0);
        let b = p(1.0, 0.0);
        let c = p(0.0, 1.0);
        let q = p(0.25, 0.25);
        assert!(point_in_triangle(&q, &a, &b, &c, EPS));
        assert!(point_in_triangle(&q, &a, &c, &b, EPS));
        assert!(!point_in_triangle(&p(1.0, 1.0), &a, &b, &c, EPS));
    }

    #[test]
    fn boundary_points_are_in_triangle() {
        let a = p(0.0, 0.0);
        let b = p(1.0, 0.0);
        let c = p(0.0, 1.0);
        assert!(point_in_triangle(&p(0.5, 0.0), &a, &b, &c, EPS));
        assert!(point_in_triangle(&p(0.5, -1e-6), &a, &b, &c, EPS));
        assert!(point_in_triangle(&a, &a, &b, &c, EPS));
    }

    #[test]
    fn cocircular_points_are_not_inside() {
        let a = p(0.0, 0.0);
        let b = p(1.0, 0.0);
        let c = p(1.0, 1.0);
        let d = p(0.0, 1.0);
        assert!(!in_circumcircle(&d, &a, &b, &c, EPS));
        assert!(in_circumcircle(&p(0.5, 0.5), &a, &b, &c, EPS));
    }

    #[test]
    fn thin_quad_diagonal_is_illegal() {
        // diagonal (0,0)-(4,0) with apexes close to it
        let a = p(0.0, 0.0);
        let b = p(4.0, 0.0);
        let c = p(2.0, 0.5);
        let d = p(2.0, -0.5);
        assert!(!is_locally_delaunay(&a, &b, &c, &d, EPS));
        assert!(should_flip(&a, &b, &c, &d, EPS));
        assert!(!should_flip(&c, &d, &b, &a, EPS));
    }

    #[test]
    fn reflex_quad_is_never_flipped() {
        let a = p(0.0, 0.0);
        let b = p(1.0, 0.0);
        let c = p(3.0, 0.2);
        let d = p(3.0, -0.2);
        assert!(!is_strictly_convex_quad(&a, &b, &c, &d, EPS));
        assert!(!should_flip(&a, &b, &c, &d, EPS));
    }
}
