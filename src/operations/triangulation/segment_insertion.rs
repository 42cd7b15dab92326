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
use log::debug;

use crate::{
    error::{Result, malformed},
    geometry::{Point2, Segment2, SegmentIntersection, segment_intersect},
    impl_mesh,
    kernel::{Side, side_of_line},
    numeric::Scalar,
};

/// A mesh primitive crossed by the open segment being inserted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Crossing<T: Scalar> {
    /// The segment passes through an existing vertex.
    Vertex(usize),
    /// The segment crosses the interior of `edge`, whose endpoints lie on
    /// its `right` and `left`.
    Edge {
        edge: usize,
        right: usize,
        left: usize,
        point: Point2<T>,
        constrained: bool,
    },
}

/// Result of walking a segment through the mesh.
#[derive(Debug, Clone, PartialEq)]
pub enum Trace<T: Scalar> {
    /// An edge with the same extent already exists.
    Embedded(usize),
    /// Everything crossed on the way from the start to the end vertex, in order.
    Crossings(Vec<Crossing<T>>),
}

/// Unconstrained edge crossed between two consecutive chain vertices.
#[derive(Debug, Clone, Copy)]
struct Gap {
    edge: usize,
    right: usize,
    left: usize,
}

/// Walk state: sitting on a vertex of the segment, or inside the face `face`
/// having just crossed `edge`.
enum Cursor {
    AtVertex(usize),
    Across { face: usize, edge: usize, right: usize, left: usize },
    Done,
}

impl_mesh! {
    /// Embeds the segment between vertices `u` and `v` as part of constraint
    /// `cid`.
    ///
    /// Crossed vertices and constrained edges become chain vertices (edges are
    /// split), every unconstrained edge crossed between two chain vertices is
    /// removed, the resulting holes are filled on both sides of the new
    /// constrained edge and the mesh is legalized.
    pub fn insert_segment(&mut self, u: usize, v: usize, cid: usize) -> Result<()> {
        if u == v {
            return Ok(());
        }

        let crossings = match self.trace_segment(u, v)? {
            Trace::Embedded(e) => {
                self.edges[e].crep.insert(cid);
                debug!("segment ({u}, {v}) already embedded as edge {e}");
                return Ok(());
            }
            Trace::Crossings(c) => c,
        };

        // --- 1) materialize constrained crossings ---
        let mut stack = Vec::new();
        let mut chain = vec![u];
        let mut gaps: Vec<Vec<Gap>> = vec![Vec::new()];
        let mut steiner = 0usize;
        for crossing in &crossings {
            match *crossing {
                Crossing::Vertex(x) => {
                    self.vertices[x].constraints.insert(cid);
                    chain.push(x);
                    gaps.push(Vec::new());
                }
                Crossing::Edge { edge, point, constrained: true, .. } => {
                    let x = self.split_edge_at_point(edge, point, &mut stack)?;
                    self.vertices[x].constraints.insert(cid);
                    steiner += 1;
                    chain.push(x);
                    gaps.push(Vec::new());
                }
                Crossing::Edge { edge, right, left, constrained: false, .. } => {
                    if let Some(gap) = gaps.last_mut() {
                        gap.push(Gap { edge, right, left });
                    }
                }
            }
        }
        chain.push(v);

        // --- 2) excise and refill every gap ---
        for (i, gap) in gaps.iter().enumerate() {
            self.stitch_gap(chain[i], chain[i + 1], gap, cid, &mut stack)?;
        }

        let flips = self.legalize(&mut stack)?;
        debug!(
            "segment ({u}, {v}) for constraint {cid}: {} crossings, {steiner} steiner vertices, {flips} flips",
            crossings.len()
        );
        Ok(())
    }

    /// Walks from `u` towards `v` across the faces the segment traverses.
    pub fn trace_segment(&self, u: usize, v: usize) -> Result<Trace<T>> {
        let tol = self.tolerance;
        let (pu, pv) = (self.position(u), self.position(v));
        let line = Segment2::new(&pu, &pv);
        let side = |x: usize| side_of_line(&pu, &pv, &self.position(x), tol.distance);
        let param = |x: usize| line.projection_param(&self.position(x)).unwrap_or_else(T::zero);

        for &e in &self.vertices[u].edges {
            let Some(o) = self.edges[e].other(u) else {
                continue;
            };
            if o == v {
                return Ok(Trace::Embedded(e));
            }
        }

        let mut out = Vec::new();
        let mut seen_vertices = AHashSet::new();
        let mut seen_edges = AHashSet::new();
        seen_vertices.insert(u);
        let mut cursor = Cursor::AtVertex(u);

        loop {
            cursor = match cursor {
                Cursor::Done => return Ok(Trace::Crossings(out)),

                Cursor::AtVertex(cur) => {
                    if self.neighbors(cur).any(|x| x == v) {
                        Cursor::Done
                    } else if let Some(x) = self.next_vertex_on_line(cur, &side, &param) {
                        if !seen_vertices.insert(x) {
                            return Err(malformed(format!("segment ({u}, {v}) revisits vertex {x}")));
                        }
                        out.push(Crossing::Vertex(x));
                        Cursor::AtVertex(x)
                    } else {
                        let (face, right, left) = self.exit_face(cur, &side).ok_or_else(|| {
                            malformed(format!("segment ({u}, {v}) cannot leave vertex {cur}"))
                        })?;
                        let edge = self.edge_between(right, left).ok_or_else(|| {
                            malformed(format!("face {face} has no edge ({right}, {left})"))
                        })?;
                        Cursor::Across { face, edge, right, left }
                    }
                }

                Cursor::Across { face, edge, right, left } => {
                    if !seen_edges.insert(edge) {
                        return Err(malformed(format!("segment ({u}, {v}) revisits edge {edge}")));
                    }
                    out.push(Crossing::Edge {
                        edge,
                        right,
                        left,
                        point: self.crossing_point(&pu, &pv, right, left),
                        constrained: self.edges[edge].is_constrained(),
                    });

                    let next = self.other_face(edge, face).ok_or_else(|| {
                        malformed(format!("segment ({u}, {v}) leaves the mesh through edge {edge}"))
                    })?;
                    let o = self.opposite_vertex(next, edge).ok_or_else(|| {
                        malformed(format!("face {next} does not span edge {edge}"))
                    })?;

                    if o == v {
                        Cursor::Done
                    } else {
                        match side(o) {
                            Side::On => {
                                if !tol.is_interior(param(o), line.length()) || !seen_vertices.insert(o) {
                                    return Err(malformed(format!(
                                        "vertex {o} on segment ({u}, {v}) is out of order"
                                    )));
                                }
                                out.push(Crossing::Vertex(o));
                                Cursor::AtVertex(o)
                            }
                            Side::Left => Cursor::Across {
                                face: next,
                                edge: self.edge_between(right, o).ok_or_else(|| {
                                    malformed(format!("face {next} has no edge ({right}, {o})"))
                                })?,
                                right,
                                left: o,
                            },
                            Side::Right => Cursor::Across {
                                face: next,
                                edge: self.edge_between(o, left).ok_or_else(|| {
                                    malformed(format!("face {next} has no edge ({o}, {left})"))
                                })?,
                                right: o,
                                left,
                            },
                        }
                    }
                }
            };
        }
    }

    /// Closest neighbour of `cur` lying on the segment line strictly ahead
    /// of `cur` and before the end vertex.
    fn next_vertex_on_line(
        &self,
        cur: usize,
        side: &impl Fn(usize) -> Side,
        param: &impl Fn(usize) -> T,
    ) -> Option<usize> {
        let here = param(cur);
        self.neighbors(cur)
            .filter(|x| side(*x) == Side::On)
            .map(|x| (x, param(x)))
            .filter(|(_, t)| *t > here && *t < T::one())
            .min_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
            .map(|(x, _)| x)
    }

    /// Face around `cur` the segment enters, with the right and left
    /// endpoints of the edge opposite `cur`.
    fn exit_face(&self, cur: usize, side: &impl Fn(usize) -> Side) -> Option<(usize, usize, usize)> {
        self.vertices[cur].faces.iter().copied().find_map(|f| {
            let vs = self.faces[f].vertices;
            let k = vs.iter().position(|x| *x == cur)?;
            let (a, b) = (vs[(k + 1) % 3], vs[(k + 2) % 3]);
            (side(a) == Side::Right && side(b) == Side::Left).then_some((f, a, b))
        })
    }

    /// Where the segment `pu -> pv` crosses the edge between `right` and `left`.
    fn crossing_point(&self, pu: &Point2<T>, pv: &Point2<T>, right: usize, left: usize) -> Point2<T> {
        let (pr, pl) = (self.position(right), self.position(left));
        if let SegmentIntersection::Point(p) = segment_intersect(pu, pv, &pr, &pl, &self.tolerance) {
            return p;
        }
        let line = Segment2::new(pu, pv);
        let dr = line.signed_distance(&pr);
        let dl = line.signed_distance(&pl);
        pr.lerp(&pl, dr / (dr - dl))
    }

    /// Replaces the unconstrained edges crossed between `from` and `to` with
    /// the constrained edge `from -> to` and refills both sides.
    fn stitch_gap(
        &mut self,
        from: usize,
        to: usize,
        gap: &[Gap],
        cid: usize,
        stack: &mut Vec<usize>,
    ) -> Result<()> {
        self.vertices[from].constraints.insert(cid);
        self.vertices[to].constraints.insert(cid);

        if gap.is_empty() {
            let e = self
                .edge_between(from, to)
                .ok_or_else(|| malformed(format!("no edge between chain vertices {from} and {to}")))?;
            self.edges[e].crep.insert(cid);
            return Ok(());
        }
        if self.edge_between(from, to).is_some() {
            return Err(malformed(format!("edge ({from}, {to}) exists across crossed edges")));
        }

        // --- 1) boundary chains of the cavity ---
        let mut left = vec![from];
        let mut right = vec![from];
        for g in gap {
            if left.last() != Some(&g.left) {
                left.push(g.left);
            }
            if right.last() != Some(&g.right) {
                right.push(g.right);
            }
        }
        left.push(to);
        right.push(to);

        let allowed: AHashSet<usize> = left.iter().chain(right.iter()).copied().collect();
        for g in gap {
            for &f in &self.edges[g.edge].faces {
                if let Some(x) = self.faces[f].vertices.iter().find(|x| !allowed.contains(*x)) {
                    return Err(malformed(format!(
                        "vertex {x} of face {f} lies inside the cavity of ({from}, {to})"
                    )));
                }
            }
        }

        // --- 2) excise ---
        for g in gap {
            self.detach_edge(g.edge);
        }

        // --- 3) constrained edge and the two fills ---
        let e = self.add_edge(from, to)?;
        self.edges[e].crep.insert(cid);
        self.triangulate_polygon(&left, stack)?;
        self.triangulate_polygon(&right, stack)?;
        Ok(())
    }
}
