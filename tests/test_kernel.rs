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

use dcdt::geometry::Point2;
use dcdt::geometry::util::{circumcenter, triangle_signed_area};
use dcdt::kernel::{
    Side, in_circumcircle, is_locally_delaunay, orient2d, point_in_triangle, should_flip,
    side_of_line,
};

const EPS: f64 = 1e-5;

fn p(x: f64, y: f64) -> Point2<f64> {
    Point2::new(x, y)
}

#[test]
fn test_orientation_sign() {
    assert!(orient2d(&p(0.0, 0.0), &p(1.0, 0.0), &p(1.0, 1.0)) > 0.0);
    assert!(orient2d(&p(0.0, 0.0), &p(1.0, 1.0), &p(1.0, 0.0)) < 0.0);
    assert_eq!(triangle_signed_area(&p(0.0, 0.0), &p(2.0, 0.0), &p(0.0, 2.0)), 2.0);
}

#[test]
fn test_side_of_line_scales_with_length() {
    // orient2d grows with the segment length, the side test must not
    let a = p(0.0, 0.0);
    let b = p(1000.0, 0.0);
    assert_eq!(side_of_line(&a, &b, &p(500.0, 5e-6), EPS), Side::On);
    assert_eq!(side_of_line(&a, &b, &p(500.0, 5e-5), EPS), Side::Left);
}

#[test]
fn test_point_in_triangle_with_tolerance() {
    let (a, b, c) = (p(0.0, 0.0), p(4.0, 0.0), p(0.0, 4.0));
    assert!(point_in_triangle(&p(1.0, 1.0), &a, &b, &c, EPS));
    assert!(point_in_triangle(&p(2.0, 2.0), &a, &b, &c, EPS));
    assert!(point_in_triangle(&p(2.0, 2.0 + 1e-6), &a, &b, &c, EPS));
    assert!(!point_in_triangle(&p(2.0, 2.0 + 1e-6), &a, &b, &c, 0.0));
    assert!(!point_in_triangle(&p(3.0, 3.0), &a, &b, &c, EPS));
}

#[test]
fn test_circumcircle() {
    let (a, b, c) = (p(0.0, 0.0), p(2.0, 0.0), p(0.0, 2.0));
    let o = circumcenter(&a, &b, &c).unwrap();
    assert!((o.x - 1.0).abs() < 1e-12 && (o.y - 1.0).abs() < 1e-12);

    assert!(in_circumcircle(&p(1.0, 1.0), &a, &b, &c, EPS));
    assert!(!in_circumcircle(&p(2.0, 2.0), &a, &b, &c, EPS));
    assert!(!in_circumcircle(&p(3.0, 3.0), &a, &b, &c, EPS));
}

#[test]
fn test_delaunay_quad_is_symmetric() {
    let (a, b) = (p(0.0, 0.0), p(4.0, 0.0));
    let (c, d) = (p(2.0, 0.5), p(2.0, -0.5));
    assert!(!is_locally_delaunay(&a, &b, &c, &d, EPS));
    assert!(!is_locally_delaunay(&a, &b, &d, &c, EPS));
    assert!(is_locally_delaunay(&c, &d, &a, &b, EPS));
    assert!(should_flip(&a, &b, &c, &d, EPS));
}
