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

use crate::{
    error::{Result, malformed},
    geometry::{Point2, util::polygon_signed_area},
    impl_mesh,
    kernel::{orient2d, point_in_triangle},
};

impl_mesh! {
    /// Fills the simple polygon `ring` (vertex handles, either winding) with
    /// triangles by ear clipping. Boundary edges of the ring are reused when
    /// present. Every edge of the new faces is pushed on `stack` so a later
    /// legalization can make the fill Delaunay.
    pub fn triangulate_polygon(&mut self, ring: &[usize], stack: &mut Vec<usize>) -> Result<()> {
        if ring.len() < 3 {
            return Ok(());
        }
        let mut ring = ring.to_vec();
        let points: Vec<Point2<T>> = ring.iter().map(|v| self.position(*v)).collect();
        if polygon_signed_area(&points) < T::zero() {
            ring.reverse();
        }

        let mut faces = Vec::with_capacity(ring.len() - 2);
        while ring.len() > 3 {
            let n = ring.len();
            let ear = (0..n)
                .find(|&i| self.is_ear(&ring, (i + n - 1) % n, i, (i + 1) % n))
                .ok_or_else(|| malformed(format!("polygon {ring:?} has no ear")))?;
            let (prev, cur, next) = (ring[(ear + n - 1) % n], ring[ear], ring[(ear + 1) % n]);
            faces.push(self.add_face(prev, cur, next)?);
            ring.remove(ear);
        }
        faces.push(self.add_face(ring[0], ring[1], ring[2])?);

        for f in faces {
            stack.extend_from_slice(&self.faces[f].edges);
        }
        Ok(())
    }

    /// Corner `i` of the counter-clockwise `ring` is convex and its triangle
    /// holds no other ring vertex, not even on its border.
    fn is_ear(&self, ring: &[usize], prev: usize, i: usize, next: usize) -> bool {
        let (a, b, c) = (
            self.position(ring[prev]),
            self.position(ring[i]),
            self.position(ring[next]),
        );
        if orient2d(&a, &b, &c) <= T::zero() {
            return false;
        }
        ring.iter().enumerate().all(|(j, v)| {
            j == prev
                || j == i
                || j == next
                || *v == ring[prev]
                || *v == ring[i]
                || *v == ring[next]
                || !point_in_triangle(&self.position(*v), &a, &b, &c, T::zero())
        })
    }
}
