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

use log::trace;

use crate::{
    error::Result,
    geometry::Point2,
    impl_mesh,
    mesh::basic_types::PointLocation,
};

impl_mesh! {
    /// Inserts `p` and restores the Delaunay property around it. Returns the
    /// existing vertex when `p` is within tolerance of one.
    ///
    /// A point within tolerance of an edge is projected onto it; when the
    /// projection lands within the distance tolerance of an endpoint that
    /// endpoint is returned instead.
    pub fn insert_point(&mut self, p: &Point2<T>) -> Result<usize> {
        let mut stack = Vec::new();
        let v = match self.locate_point(p)? {
            PointLocation::OnVertex(v) => return Ok(v),
            PointLocation::OnEdge(e) => {
                let seg = self.edge_segment(e);
                let t = seg.projection_param(p).unwrap_or_else(T::zero);
                if !self.tolerance.is_interior(t, seg.length()) {
                    let [a, b] = self.edges[e].vertices;
                    let nearest = if t < T::half() { a } else { b };
                    trace!("point snapped to endpoint {nearest} of edge {e}");
                    return Ok(nearest);
                }
                self.split_edge_at_point(e, *p, &mut stack)?
            }
            PointLocation::InFace(f) => self.split_face_at_point(f, *p, &mut stack)?,
        };
        self.legalize(&mut stack)?;
        Ok(v)
    }
}
