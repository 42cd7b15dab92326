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
    error::{Result, malformed},
    geometry::{Point2, Segment2},
    impl_mesh,
    kernel::{is_strictly_convex_quad, orient2d},
    mesh::basic_types::{Edge, Face, Vertex, edge_key},
    numeric::Tolerance,
};

impl_mesh! {
    pub fn new(tolerance: Tolerance<T>) -> Self {
        Self {
            vertices: Vec::new(),
            edges: Vec::new(),
            faces: Vec::new(),
            edge_map: Default::default(),
            tolerance,
        }
    }

    // --- accessors ---

    pub fn vertex(&self, v: usize) -> &Vertex<T> {
        &self.vertices[v]
    }

    pub fn edge(&self, e: usize) -> &Edge {
        &self.edges[e]
    }

    pub fn face(&self, f: usize) -> &Face {
        &self.faces[f]
    }

    #[inline(always)]
    pub fn position(&self, v: usize) -> Point2<T> {
        self.vertices[v].position
    }

    pub fn face_points(&self, f: usize) -> [Point2<T>; 3] {
        let [a, b, c] = self.faces[f].vertices;
        [self.position(a), self.position(b), self.position(c)]
    }

    pub fn edge_segment(&self, e: usize) -> Segment2<T> {
        let [a, b] = self.edges[e].vertices;
        Segment2::new(&self.position(a), &self.position(b))
    }

    pub fn live_edges(&self) -> impl Iterator<Item = (usize, &Edge)> + '_ {
        self.edges.iter().enumerate().filter(|(_, e)| !e.removed)
    }

    pub fn live_faces(&self) -> impl Iterator<Item = (usize, &Face)> + '_ {
        self.faces.iter().enumerate().filter(|(_, f)| !f.removed)
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_map.len()
    }

    pub fn face_count(&self) -> usize {
        self.live_faces().count()
    }

    pub fn is_live_edge(&self, e: usize) -> bool {
        e < self.edges.len() && !self.edges[e].removed
    }

    pub fn is_live_face(&self, f: usize) -> bool {
        f < self.faces.len() && !self.faces[f].removed
    }

    // --- construction ---

    pub fn add_vertex(&mut self, position: Point2<T>) -> usize {
        let idx = self.vertices.len();
        self.vertices.push(Vertex::new(position));
        idx
    }

    /// Live edge joining `a` and `b`, created if it does not exist yet.
    pub fn add_edge(&mut self, a: usize, b: usize) -> Result<usize> {
        if a == b {
            return Err(malformed(format!("edge from vertex {a} to itself")));
        }
        if a >= self.vertices.len() || b >= self.vertices.len() {
            return Err(malformed(format!("edge ({a}, {b}) names an unknown vertex")));
        }
        let key = edge_key(a, b);
        if let Some(&e) = self.edge_map.get(&key) {
            return Ok(e);
        }

        let idx = self.edges.len();
        self.edges.push(Edge::new(a, b));
        self.edge_map.insert(key, idx);
        self.vertices[a].edges.push(idx);
        self.vertices[b].edges.push(idx);
        Ok(idx)
    }

    /// Adds triangle `abc`, reordering it counter-clockwise and creating the
    /// missing edges.
    pub fn add_face(&mut self, a: usize, b: usize, c: usize) -> Result<usize> {
        let area = orient2d(&self.position(a), &self.position(b), &self.position(c));
        if area == T::zero() {
            return Err(malformed(format!("triangle ({a}, {b}, {c}) has zero area")));
        }
        let vs = if area < T::zero() { [a, c, b] } else { [a, b, c] };

        // --- 1) no edge may end up with a third face ---
        for i in 0..3 {
            if let Some(&e) = self.edge_map.get(&edge_key(vs[i], vs[(i + 1) % 3])) {
                if self.edges[e].faces.len() >= 2 {
                    return Err(malformed(format!(
                        "edge {e} already has two faces, cannot add triangle {vs:?}"
                    )));
                }
            }
        }

        // --- 2) link ---
        let edges = [
            self.add_edge(vs[0], vs[1])?,
            self.add_edge(vs[1], vs[2])?,
            self.add_edge(vs[2], vs[0])?,
        ];
        let idx = self.faces.len();
        self.faces.push(Face {
            vertices: vs,
            edges,
            removed: false,
        });
        for e in edges {
            self.edges[e].faces.push(idx);
        }
        for v in vs {
            self.vertices[v].faces.push(idx);
        }
        Ok(idx)
    }

    // --- adjacency primitives ---

    /// Marks `f` removed and unlinks it from its edges and vertices.
    pub fn detach_face(&mut self, f: usize) {
        if self.faces[f].removed {
            return;
        }
        self.faces[f].removed = true;
        let Face { vertices, edges, .. } = self.faces[f].clone();
        for e in edges {
            self.edges[e].faces.retain(|x| *x != f);
        }
        for v in vertices {
            self.vertices[v].faces.retain(|x| *x != f);
        }
    }

    /// Detaches the faces of `e`, then marks `e` removed and unlinks it from
    /// its endpoints and from the edge map.
    pub fn detach_edge(&mut self, e: usize) {
        if self.edges[e].removed {
            return;
        }
        let faces = self.edges[e].faces.clone();
        for f in faces {
            self.detach_face(f);
        }
        let [a, b] = self.edges[e].vertices;
        self.vertices[a].edges.retain(|x| *x != e);
        self.vertices[b].edges.retain(|x| *x != e);
        let key = edge_key(a, b);
        if self.edge_map.get(&key) == Some(&e) {
            self.edge_map.remove(&key);
        }
        self.edges[e].removed = true;
    }

    // --- local edits ---

    /// Splits face `f` at the interior point `p` into three triangles.
    /// The three pre-existing edges are pushed on `stack`.
    pub fn split_face_at_point(
        &mut self,
        f: usize,
        p: Point2<T>,
        stack: &mut Vec<usize>,
    ) -> Result<usize> {
        if !self.is_live_face(f) {
            return Err(malformed(format!("cannot split removed face {f}")));
        }
        let Face { vertices: [a, b, c], edges, .. } = self.faces[f].clone();

        self.detach_face(f);
        let v = self.add_vertex(p);
        self.add_face(a, b, v)?;
        self.add_face(b, c, v)?;
        self.add_face(c, a, v)?;
        stack.extend_from_slice(&edges);

        trace!("split face {f} at ({:?}, {:?}) -> vertex {v}", p.x, p.y);
        Ok(v)
    }

    /// Splits edge `e` at `p`, projected onto the edge's line. Both halves
    /// inherit the edge's constraint set; the far edges of the destroyed
    /// faces are pushed on `stack`.
    pub fn split_edge_at_point(
        &mut self,
        e: usize,
        p: Point2<T>,
        stack: &mut Vec<usize>,
    ) -> Result<usize> {
        if !self.is_live_edge(e) {
            return Err(malformed(format!("cannot split removed edge {e}")));
        }
        let seg = self.edge_segment(e);
        let t = seg
            .projection_param(&p)
            .ok_or_else(|| malformed(format!("edge {e} has zero length")))?;
        if !self.tolerance.is_interior(t, seg.length()) {
            return Err(malformed(format!("split point is not interior to edge {e}")));
        }
        let q = seg.a.lerp(&seg.b, t);

        let [a, b] = self.edges[e].vertices;
        let crep = self.edges[e].crep.clone();
        let apexes = self.edge_apexes(e)?;

        self.detach_edge(e);
        let v = self.add_vertex(q);
        self.vertices[v].constraints.extend(crep.iter().copied());

        let ea = self.add_edge(a, v)?;
        let eb = self.add_edge(v, b)?;
        self.edges[ea].crep = crep.clone();
        self.edges[eb].crep = crep;

        for o in apexes {
            self.add_face(a, v, o)?;
            self.add_face(v, b, o)?;
            for w in [a, b] {
                let far = self
                    .edge_between(w, o)
                    .ok_or_else(|| malformed(format!("lost edge ({w}, {o}) while splitting")))?;
                stack.push(far);
            }
        }

        trace!("split edge {e} ({a}, {b}) -> vertex {v}");
        Ok(v)
    }

    /// Replaces diagonal `e` of its two faces with the other diagonal and
    /// returns the new edge. The quadrilateral must be strictly convex and
    /// `e` unconstrained.
    pub fn flip_edge(&mut self, e: usize) -> Result<usize> {
        // --- 1) validity checks ---
        if !self.is_live_edge(e) {
            return Err(malformed(format!("cannot flip removed edge {e}")));
        }
        if self.edges[e].faces.len() != 2 {
            return Err(malformed(format!("cannot flip boundary edge {e}")));
        }
        if self.edges[e].is_constrained() {
            return Err(malformed(format!("cannot flip constrained edge {e}")));
        }
        let [a, b] = self.edges[e].vertices;
        let [c, d] = match self.edge_apexes(e)?.as_slice() {
            [c, d] => [*c, *d],
            _ => return Err(malformed(format!("edge {e} lost a face"))),
        };
        let (pa, pb, pc, pd) = (
            self.position(a),
            self.position(b),
            self.position(c),
            self.position(d),
        );
        if !is_strictly_convex_quad(&pa, &pb, &pc, &pd, self.tolerance.distance) {
            return Err(malformed(format!("quadrilateral around edge {e} is not convex")));
        }

        // --- 2) rebuild with the other diagonal ---
        self.detach_edge(e);
        self.add_face(c, d, a)?;
        self.add_face(d, c, b)?;
        let new_edge = self
            .edge_between(c, d)
            .ok_or_else(|| malformed("flip produced no diagonal"))?;

        trace!("flip edge {e} ({a}, {b}) -> {new_edge} ({c}, {d})");
        Ok(new_edge)
    }
}
