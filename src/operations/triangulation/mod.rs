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

//! Dynamic constrained Delaunay triangulation over a growing set of polyline
//! constraints.

pub mod retriangulate;
pub mod segment_insertion;
pub mod vertex_insertion;

use std::collections::BTreeMap;

use log::{debug, warn};

use crate::{
    error::{DcdtError, Result},
    geometry::{Point2, Segment2},
    kernel::{Side, orient2d, side_of_line},
    mesh::{Mesh, ValidationError},
    numeric::{Scalar, Tolerance},
};

pub use segment_insertion::{Crossing, Trace};

/// Constraint id carried by the four corners of the working area.
pub const BOUNDARY_ID: usize = 0;

/// Working area the triangulation starts from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Boundary<T: Scalar> {
    /// Axis-aligned rectangle with one corner at the origin.
    Rectangle { width: T, height: T },
    /// Four corners of a strictly convex quadrilateral, in either winding.
    Corners([Point2<T>; 4]),
}

impl<T: Scalar> Boundary<T> {
    /// Corners in counter-clockwise order, or `InvalidBoundary` when they do
    /// not form a strictly convex quadrilateral.
    pub fn corners(&self) -> Result<[Point2<T>; 4]> {
        let mut c = match *self {
            Boundary::Rectangle { width, height } => [
                Point2::new(T::zero(), T::zero()),
                Point2::new(width, T::zero()),
                Point2::new(width, height),
                Point2::new(T::zero(), height),
            ],
            Boundary::Corners(c) => c,
        };
        if c.iter().any(|p| !p.is_finite()) {
            return Err(DcdtError::InvalidBoundary);
        }

        let turns: Vec<T> = (0..4)
            .map(|i| orient2d(&c[i], &c[(i + 1) % 4], &c[(i + 2) % 4]))
            .collect();
        if turns.iter().all(|t| *t < T::zero()) {
            c.reverse();
        } else if !turns.iter().all(|t| *t > T::zero()) {
            return Err(DcdtError::InvalidBoundary);
        }
        Ok(c)
    }
}

/// A constraint as submitted, with the vertices its points resolved to.
#[derive(Debug, Clone, PartialEq)]
pub struct Constraint<T: Scalar> {
    pub id: usize,
    pub points: Vec<Point2<T>>,
    pub edges: Vec<(usize, usize)>,
    /// Mesh vertex of each point, index for index.
    pub vertices: Vec<usize>,
}

/// The triangulation engine: a mesh plus the registry of inserted constraints.
#[derive(Debug, Clone)]
pub struct Dcdt<T: Scalar = f64> {
    mesh: Mesh<T>,
    constraints: BTreeMap<usize, Constraint<T>>,
    next_id: usize,
}

impl<T: Scalar> Dcdt<T> {
    pub fn new(boundary: Boundary<T>) -> Result<Self> {
        Self::with_tolerance(boundary, Tolerance::default())
    }

    /// Builds the two-triangle mesh covering `boundary`.
    pub fn with_tolerance(boundary: Boundary<T>, tolerance: Tolerance<T>) -> Result<Self> {
        let corners = boundary.corners()?;
        let mut mesh = Mesh::new(tolerance);
        let [c0, c1, c2, c3] = corners.map(|p| mesh.add_vertex(p));
        for c in [c0, c1, c2, c3] {
            mesh.vertices[c].constraints.insert(BOUNDARY_ID);
        }
        mesh.add_face(c0, c1, c3)?;
        mesh.add_face(c1, c2, c3)?;

        let mut stack: Vec<usize> = mesh.edge_between(c1, c3).into_iter().collect();
        mesh.legalize(&mut stack)?;
        debug!("created mesh over {corners:?}");

        Ok(Self {
            mesh,
            constraints: BTreeMap::new(),
            next_id: BOUNDARY_ID + 1,
        })
    }

    pub fn mesh(&self) -> &Mesh<T> {
        &self.mesh
    }

    pub fn tolerance(&self) -> &Tolerance<T> {
        &self.mesh.tolerance
    }

    pub fn constraint(&self, id: usize) -> Option<&Constraint<T>> {
        self.constraints.get(&id)
    }

    pub fn constraints(&self) -> impl Iterator<Item = &Constraint<T>> + '_ {
        self.constraints.values()
    }

    /// Live edges carrying constraint `id`.
    pub fn constraint_edges(&self, id: usize) -> Vec<usize> {
        self.mesh
            .live_edges()
            .filter(|(_, e)| e.crep.contains(&id))
            .map(|(i, _)| i)
            .collect()
    }

    /// Inserts a single point outside any constraint and returns its vertex.
    pub fn insert_point(&mut self, p: Point2<T>) -> Result<usize> {
        self.mesh.insert_point(&p)
    }

    /// Embeds the polyline/graph given by `points` and index pairs `edges`
    /// and returns its new constraint id.
    ///
    /// Edge indices are checked before anything is touched. Any other error
    /// leaves the mesh in an unspecified state.
    pub fn insert_constraint(
        &mut self,
        points: &[Point2<T>],
        edges: &[(usize, usize)],
    ) -> Result<usize> {
        if let Some(&edge) = edges
            .iter()
            .find(|(a, b)| *a >= points.len() || *b >= points.len())
        {
            return Err(DcdtError::ConstraintIndexOutOfRange {
                edge,
                len: points.len(),
            });
        }

        let id = self.next_id;
        self.next_id += 1;

        let mut vertices = Vec::with_capacity(points.len());
        for p in points {
            let before = self.mesh.vertex_count();
            let v = self.mesh.insert_point(p)?;
            if self.mesh.vertex_count() == before
                && self.mesh.vertices[v].constraints.iter().any(|c| *c != id)
            {
                warn!(
                    "constraint {id}: point ({:?}, {:?}) snapped to vertex {v} of constraints {:?}",
                    p.x, p.y, self.mesh.vertices[v].constraints
                );
            }
            self.mesh.vertices[v].constraints.insert(id);
            vertices.push(v);
        }

        for &(a, b) in edges {
            self.mesh.insert_segment(vertices[a], vertices[b], id)?;
        }

        debug!(
            "constraint {id}: {} points, {} edges, mesh now {} vertices / {} faces",
            points.len(),
            edges.len(),
            self.mesh.vertex_count(),
            self.mesh.face_count()
        );
        self.constraints.insert(
            id,
            Constraint {
                id,
                points: points.to_vec(),
                edges: edges.to_vec(),
                vertices,
            },
        );
        Ok(id)
    }

    /// Mesh invariants plus, for every registered constraint edge, a chain of
    /// mesh edges along it that all carry the constraint id.
    pub fn validate(&self) -> std::result::Result<(), ValidationError> {
        self.mesh.validate()?;
        for c in self.constraints.values() {
            for &(a, b) in &c.edges {
                let (from, to) = (c.vertices[a], c.vertices[b]);
                if !self.is_realized(c.id, from, to) {
                    return Err(ValidationError::ConstraintNotRealized {
                        constraint: c.id,
                        from,
                        to,
                    });
                }
            }
        }
        Ok(())
    }

    /// Follows edges tagged `id` from `from` along the segment to `to`.
    fn is_realized(&self, id: usize, from: usize, to: usize) -> bool {
        if from == to {
            return true;
        }
        let mesh = &self.mesh;
        let eps = mesh.tolerance.distance;
        let (pf, pt) = (mesh.position(from), mesh.position(to));
        let line = Segment2::new(&pf, &pt);
        let param = |x: usize| line.projection_param(&mesh.position(x)).unwrap_or_else(T::zero);

        let mut cur = from;
        let mut steps = 0;
        while cur != to {
            steps += 1;
            if steps > mesh.vertex_count() {
                return false;
            }
            let here = param(cur);
            let next = mesh.vertices[cur]
                .edges
                .iter()
                .filter(|e| mesh.edges[**e].crep.contains(&id))
                .filter_map(|e| mesh.edges[*e].other(cur))
                .filter(|x| side_of_line(&pf, &pt, &mesh.position(*x), eps) == Side::On)
                .map(|x| (x, param(x)))
                .filter(|(_, t)| *t > here)
                .min_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal));
            match next {
                Some((x, _)) => cur = x,
                None => return false,
            }
        }
        true
    }
}
