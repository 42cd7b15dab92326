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
use crate::numeric::scalar::Scalar;

/// Returns:
/// - >0 if counter-clockwise
/// - <0 if clockwise
/// - =0 if collinear
pub fn orient2d<T: Scalar>(a: &Point2<T>, b: &Point2<T>, c: &Point2<T>) -> T {
    (b.x - a.x) * (c.y - a.y) - (b.y - a.y) * (c.x - a.x)
}

/// Side of a directed line a point falls on, decided with a distance tolerance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    On,
    Right,
}

/// Which side of the directed line `a -> b` the point `p` is on. Points closer
/// than `eps` to the line are `On`.
pub fn side_of_line<T: Scalar>(a: &Point2<T>, b: &Point2<T>, p: &Point2<T>, eps: T) -> Side {
    let len = a.distance_to(b);
    if len == T::zero() {
        return Side::On;
    }
    let dist = orient2d(a, b, p) / len;
    if dist > eps {
        Side::Left
    } else if dist < -eps {
        Side::Right
    } else {
        Side::On
    }
}

#[cfg(test)]
mod tests {
    use crate::geometry::Point2;
    use crate::kernel::orientation::{Side, orient2d, side_of_line};

    #[test]
    fn ccw_test() {
        let a = Point2 { x: 0.0, y: 0.0 };
        let b = Point2 { x: 1.0, y: 0.0 };
        let c = Point2 { x: 0.0, y: 1.0 };

        assert!(orient2d(&a, &b, &c) > 0.0); // Counter-clockwise
        assert!(orient2d(&a, &c, &b) < 0.0);
    }

    #[test]
    fn collinear_is_zero() {
        let a = Point2 { x: 0.0, y: 0.0 };
        let b = Point2 { x: 1.0, y: 1.0 };
        let c = Point2 { x: 3.0, y: 3.0 };

        assert_eq!(orient2d(&a, &b, &c), 0.0);
    }

    #[test]
    fn side_uses_distance_tolerance() {
        let a = Point2 { x: 0.0, y: 0.0 };
        let b = Point2 { x: 10.0, y: 0.0 };

        assert_eq!(side_of_line(&a, &b, &Point2 { x: 5.0, y: 1e-7 }, 1e-5), Side::On);
        assert_eq!(side_of_line(&a, &b, &Point2 { x: 5.0, y: 0.1 }, 1e-5), Side::Left);
        assert_eq!(side_of_line(&a, &b, &Point2 { x: 5.0, y: -0.1 }, 1e-5), Side::Right);
    }
}
