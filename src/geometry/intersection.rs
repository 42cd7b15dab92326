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

use smallvec::SmallVec;

use crate::geometry::{Point2, Segment2};
use crate::numeric::{Scalar, Tolerance};

/// Endpoint of one of the two classified segments `ab` and `cd`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    A,
    B,
    C,
    D,
}

/// Endpoint coincidences of two collinear segments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CollinearFlags {
    pub a_is_c: bool,
    pub a_is_d: bool,
    pub b_is_c: bool,
    pub b_is_d: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SegmentIntersection<T: Scalar> {
    None,
    /// Proper crossing of both interiors.
    Point(Point2<T>),
    /// The crossing coincides with an endpoint.
    Vertex(Endpoint),
    /// Collinear segments. `overlaps` lists every endpoint lying on the other
    /// segment (`A`/`B` on `cd`, `C`/`D` on `ab`), sorted by position along `ab`.
    Collinear {
        flags: CollinearFlags,
        overlaps: SmallVec<[Endpoint; 4]>,
    },
    /// Both segments span the same range.
    Equal,
}

impl<T: Scalar> SegmentIntersection<T> {
    pub fn is_none(&self) -> bool {
        matches!(self, SegmentIntersection::None)
    }
}

/// Classifies how segment `ab` meets segment `cd`.
///
/// `tol.distance` decides whether a point is on a feature, `tol.numeric`
/// whether a solved parameter sits at 0 or 1.
pub fn segment_intersect<T: Scalar>(
    a: &Point2<T>,
    b: &Point2<T>,
    c: &Point2<T>,
    d: &Point2<T>,
    tol: &Tolerance<T>,
) -> SegmentIntersection<T> {
    let eps = tol.distance;
    let ab = Segment2::new(a, b);
    let cd = Segment2::new(c, d);
    let len_ab = ab.length();
    let len_cd = cd.length();

    // --- degenerate inputs ---
    if len_ab <= eps || len_cd <= eps {
        if len_ab <= eps && len_cd <= eps {
            return if a.distance_to(c) <= eps {
                SegmentIntersection::Equal
            } else {
                SegmentIntersection::None
            };
        }
        if len_ab <= eps {
            return if cd.distance_to_point(a) <= eps {
                SegmentIntersection::Vertex(Endpoint::A)
            } else {
                SegmentIntersection::None
            };
        }
        return if ab.distance_to_point(c) <= eps {
            SegmentIntersection::Vertex(Endpoint::C)
        } else {
            SegmentIntersection::None
        };
    }

    // --- collinear ---
    if ab.signed_distance(c).abs() <= eps && ab.signed_distance(d).abs() <= eps {
        return classify_collinear(a, b, c, d, &ab, &cd, tol);
    }

    // --- general position ---
    let r = ab.direction();
    let s = cd.direction();
    let denom = r.cross(&s);
    if denom == T::zero() {
        return SegmentIntersection::None;
    }
    let ac = *c - *a;
    let t = ac.cross(&s) / denom;
    let u = ac.cross(&r) / denom;

    // parameter slack expressed as a distance along each segment
    let slack_t = eps / len_ab;
    let slack_u = eps / len_cd;
    if t < -slack_t || t > T::one() + slack_t || u < -slack_u || u > T::one() + slack_u {
        // lines meet outside, but an endpoint may still be within reach
        return near_endpoint(a, b, c, d, &ab, &cd, eps);
    }

    let p = a.lerp(b, t);
    for (which, q) in [
        (Endpoint::A, a),
        (Endpoint::B, b),
        (Endpoint::C, c),
        (Endpoint::D, d),
    ] {
        if p.distance_to(q) <= eps {
            return SegmentIntersection::Vertex(which);
        }
    }
    if tol.compare(t, T::zero()) == 0 {
        return SegmentIntersection::Vertex(Endpoint::A);
    }
    if tol.compare(t, T::one()) == 0 {
        return SegmentIntersection::Vertex(Endpoint::B);
    }
    if tol.compare(u, T::zero()) == 0 {
        return SegmentIntersection::Vertex(Endpoint::C);
    }
    if tol.compare(u, T::one()) == 0 {
        return SegmentIntersection::Vertex(Endpoint::D);
    }
    SegmentIntersection::Point(p)
}

fn near_endpoint<T: Scalar>(
    a: &Point2<T>,
    b: &Point2<T>,
    c: &Point2<T>,
    d: &Point2<T>,
    ab: &Segment2<T>,
    cd: &Segment2<T>,
    eps: T,
) -> SegmentIntersection<T> {
    if cd.distance_to_point(a) <= eps {
        return SegmentIntersection::Vertex(Endpoint::A);
    }
    if cd.distance_to_point(b) <= eps {
        return SegmentIntersection::Vertex(Endpoint::B);
    }
    if ab.distance_to_point(c) <= eps {
        return SegmentIntersection::Vertex(Endpoint::C);
    }
    if ab.distance_to_point(d) <= eps {
        return SegmentIntersection::Vertex(Endpoint::D);
    }
    SegmentIntersection::None
}

fn classify_collinear<T: Scalar>(
    a: &Point2<T>,
    b: &Point2<T>,
    c: &Point2<T>,
    d: &Point2<T>,
    ab: &Segment2<T>,
    cd: &Segment2<T>,
    tol: &Tolerance<T>,
) -> SegmentIntersection<T> {
    let eps = tol.distance;
    let flags = CollinearFlags {
        a_is_c: a.distance_to(c) <= eps,
        a_is_d: a.distance_to(d) <= eps,
        b_is_c: b.distance_to(c) <= eps,
        b_is_d: b.distance_to(d) <= eps,
    };

    if (flags.a_is_c && flags.b_is_d) || (flags.a_is_d && flags.b_is_c) {
        return SegmentIntersection::Equal;
    }

    // parameters along ab; both lengths are above eps here
    let t_c = ab.projection_param(c).unwrap_or_else(T::zero);
    let t_d = ab.projection_param(d).unwrap_or_else(T::zero);
    if (tol.approx_eq(t_c, T::zero()) && tol.approx_eq(t_d, T::one()))
        || (tol.approx_eq(t_c, T::one()) && tol.approx_eq(t_d, T::zero()))
    {
        return SegmentIntersection::Equal;
    }

    let mut found: SmallVec<[(T, Endpoint); 4]> = SmallVec::new();
    if cd.distance_to_point(a) <= eps {
        found.push((T::zero(), Endpoint::A));
    }
    if cd.distance_to_point(b) <= eps {
        found.push((T::one(), Endpoint::B));
    }
    if ab.distance_to_point(c) <= eps {
        found.push((t_c, Endpoint::C));
    }
    if ab.distance_to_point(d) <= eps {
        found.push((t_d, Endpoint::D));
    }

    if found.is_empty() {
        return SegmentIntersection::None;
    }

    found.sort_by(|x, y| x.0.partial_cmp(&y.0).unwrap_or(std::cmp::Ordering::Equal));
    SegmentIntersection::Collinear {
        flags,
        overlaps: found.into_iter().map(|(_, e)| e).collect(),
    }
}
