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

use ahash::AHashSet;
use smallvec::SmallVec;

use crate::{
    error::{DcdtError, Result, malformed},
    geometry::{Point2, Segment2},
    impl_mesh,
    kernel::{is_locally_delaunay, point_in_triangle, should_flip},
    mesh::basic_types::{PointLocation, edge_key},
};

impl_mesh! {
    pub fn edge_between(&self, a: usize, b: usize) -> Option<usize> {
        self.edge_map.get(&edge_key(a, b)).copied()
    }

    /// Vertex of face `f` that is not an endpoint of edge `e`.
    pub fn opposite_vertex(&self, f: usize, e: usize) -> Option<usize> {
        let edge = &self.edges[e];
        self.faces[f]
            .vertices
            .iter()
            .copied()
            .find(|v| !edge.contains(*v))
    }

    /// Apex vertex of each face incident to `e`, in the edge's face order.
    pub fn edge_apexes(&self, e: usize) -> Result<SmallVec<[usize; 2]>> {
        let mut out = SmallVec::new();
        for &f in &self.edges[e].faces {
            let o = self
                .opposite_vertex(f, e)
                .ok_or_else(|| malformed(format!("face {f} does not span edge {e}")))?;
            out.push(o);
        }
        Ok(out)
    }

    /// The face across `e` from `f`.
    pub fn other_face(&self, e: usize, f: usize) -> Option<usize> {
        self.edges[e].faces.iter().copied().find(|x| *x != f)
    }

    /// Edge of face `f` opposite to its vertex `v`.
    pub fn opposite_edge(&self, f: usize, v: usize) -> Option<usize> {
        self.faces[f]
            .edges
            .iter()
            .copied()
            .find(|e| !self.edges[*e].contains(v))
    }

    /// Vertices joined to `v` by an edge.
    pub fn neighbors(&self, v: usize) -> impl Iterator<Item = usize> + '_ {
        self.vertices[v]
            .edges
            .iter()
            .filter_map(move |e| self.edges[*e].other(v))
    }

    /// Whether `e` satisfies the empty-circumcircle test. Edges with fewer
    /// than two faces are trivially locally Delaunay.
    pub fn is_locally_delaunay(&self, e: usize) -> bool {
        let [a, b] = self.edges[e].vertices;
        match self.edge_apexes(e).as_deref() {
            Ok([c, d]) => is_locally_delaunay(
                &self.position(a),
                &self.position(b),
                &self.position(*c),
                &self.position(*d),
                self.tolerance.distance,
            ),
            _ => true,
        }
    }

    /// `e` is live, interior, unconstrained, not locally Delaunay and its
    /// quadrilateral admits the other diagonal.
    pub fn is_flippable(&self, e: usize) -> bool {
        if !self.is_live_edge(e) {
            return false;
        }
        let edge = &self.edges[e];
        if edge.faces.len() != 2 || edge.is_constrained() {
            return false;
        }
        let [a, b] = edge.vertices;
        match self.edge_apexes(e).as_deref() {
            Ok([c, d]) => should_flip(
                &self.position(a),
                &self.position(b),
                &self.position(*c),
                &self.position(*d),
                self.tolerance.distance,
            ),
            _ => false,
        }
    }

    /// Faces reachable from `start` across shared edges, depth first.
    pub fn connected_faces(&self, start: usize) -> Vec<usize> {
        let mut visited = AHashSet::new();
        let mut out = Vec::new();
        if !self.is_live_face(start) {
            return out;
        }
        let mut stack = vec![start];
        visited.insert(start);
        while let Some(f) = stack.pop() {
            out.push(f);
            for e in self.faces[f].edges {
                if let Some(g) = self.other_face(e, f) {
                    if visited.insert(g) {
                        stack.push(g);
                    }
                }
            }
        }
        out
    }

    /// Locates `p`: an existing vertex within tolerance wins over an edge
    /// within tolerance, which wins over a containing face.
    pub fn locate_point(&self, p: &Point2<T>) -> Result<PointLocation> {
        let eps = self.tolerance.distance;

        // --- 1) vertices ---
        let nearest_vertex = self
            .vertices
            .iter()
            .enumerate()
            .filter(|(_, v)| !v.faces.is_empty())
            .map(|(i, v)| (i, v.position.distance_to(p)))
            .filter(|(_, d)| *d <= eps)
            .min_by(|x, y| x.1.partial_cmp(&y.1).unwrap_or(std::cmp::Ordering::Equal));
        if let Some((v, _)) = nearest_vertex {
            return Ok(PointLocation::OnVertex(v));
        }

        // --- 2) faces containing p, with tolerance ---
        let containing: SmallVec<[usize; 4]> = self
            .live_faces()
            .filter(|(f, _)| {
                let [a, b, c] = self.face_points(*f);
                point_in_triangle(p, &a, &b, &c, eps)
            })
            .map(|(f, _)| f)
            .collect();
        if containing.is_empty() {
            return Err(DcdtError::PointOutsideMesh {
                x: p.x.as_f64(),
                y: p.y.as_f64(),
            });
        }

        // --- 3) edges of those faces ---
        let mut nearest_edge: Option<(usize, T)> = None;
        for &f in &containing {
            for e in self.faces[f].edges {
                let seg: Segment2<T> = self.edge_segment(e);
                if let Some(d) = seg.distance_to_point_unclamped(p) {
                    if d <= eps && nearest_edge.is_none_or(|(_, best)| d < best) {
                        nearest_edge = Some((e, d));
                    }
                }
            }
        }
        if let Some((e, _)) = nearest_edge {
            return Ok(PointLocation::OnEdge(e));
        }

        // --- 4) interior; prefer a face that holds p without slack ---
        let strict = containing.iter().copied().find(|f| {
            let [a, b, c] = self.face_points(*f);
            point_in_triangle(p, &a, &b, &c, T::zero())
        });
        Ok(PointLocation::InFace(strict.unwrap_or(containing[0])))
    }
}
