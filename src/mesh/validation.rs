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
use thiserror::Error;

use crate::{
    geometry::util::triangle_signed_area,
    impl_mesh,
    kernel::orient2d,
    mesh::basic_types::edge_key,
};

/// First invariant violation found by [`Mesh::validate`](crate::mesh::Mesh::validate).
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationError {
    #[error("edge {edge} is missing from, or stale in, the edge map")]
    EdgeMap { edge: usize },

    #[error("edge {edge} has {count} incident faces")]
    EdgeFaceCount { edge: usize, count: usize },

    #[error("face {face} and edge {edge} disagree about their incidence")]
    FaceEdgeMismatch { face: usize, edge: usize },

    #[error("vertex {vertex} adjacency lists do not match the edges and faces referencing it")]
    VertexAdjacency { vertex: usize },

    #[error("face {face} has non-positive signed area")]
    DegenerateFace { face: usize },

    #[error("faces of edge {edge} lie on the same side of it")]
    FoldedEdge { edge: usize },

    #[error("unconstrained edge {edge} is not locally Delaunay")]
    NotLocallyDelaunay { edge: usize },

    #[error("only {reached} of {total} faces are connected")]
    Disconnected { reached: usize, total: usize },

    #[error("faces cover area {faces} but the boundary encloses {boundary}")]
    AreaMismatch { faces: f64, boundary: f64 },

    #[error("constraint {constraint} is not realised between vertices {from} and {to}")]
    ConstraintNotRealized {
        constraint: usize,
        from: usize,
        to: usize,
    },
}

impl_mesh! {
    /// Checks every structural invariant of the mesh and returns the first
    /// violation.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.validate_edges()?;
        self.validate_faces()?;
        self.validate_vertices()?;
        self.validate_delaunay()?;
        self.validate_coverage()
    }

    fn validate_edges(&self) -> Result<(), ValidationError> {
        for (&(a, b), &e) in &self.edge_map {
            let edge = &self.edges[e];
            if edge.removed || edge_key(edge.vertices[0], edge.vertices[1]) != (a, b) {
                return Err(ValidationError::EdgeMap { edge: e });
            }
        }
        for (e, edge) in self.live_edges() {
            if self.edge_between(edge.vertices[0], edge.vertices[1]) != Some(e) {
                return Err(ValidationError::EdgeMap { edge: e });
            }
            let count = edge.faces.len();
            if count == 0 || count > 2 {
                return Err(ValidationError::EdgeFaceCount { edge: e, count });
            }
            for &f in &edge.faces {
                if !self.is_live_face(f) || !self.faces[f].contains_edge(e) {
                    return Err(ValidationError::FaceEdgeMismatch { face: f, edge: e });
                }
            }
        }
        Ok(())
    }

    fn validate_faces(&self) -> Result<(), ValidationError> {
        for (f, face) in self.live_faces() {
            for i in 0..3 {
                let e = face.edges[i];
                let (a, b) = (face.vertices[i], face.vertices[(i + 1) % 3]);
                let edge = &self.edges[e];
                if edge.removed
                    || edge_key(edge.vertices[0], edge.vertices[1]) != edge_key(a, b)
                    || !edge.faces.contains(&f)
                {
                    return Err(ValidationError::FaceEdgeMismatch { face: f, edge: e });
                }
            }
            let [pa, pb, pc] = self.face_points(f);
            if triangle_signed_area(&pa, &pb, &pc) <= T::zero() {
                return Err(ValidationError::DegenerateFace { face: f });
            }
        }
        Ok(())
    }

    fn validate_vertices(&self) -> Result<(), ValidationError> {
        let n = self.vertices.len();
        let mut edges_of: Vec<SmallVec<[usize; 8]>> = vec![SmallVec::new(); n];
        let mut faces_of: Vec<SmallVec<[usize; 8]>> = vec![SmallVec::new(); n];
        for (e, edge) in self.live_edges() {
            for v in edge.vertices {
                edges_of[v].push(e);
            }
        }
        for (f, face) in self.live_faces() {
            for v in face.vertices {
                faces_of[v].push(f);
            }
        }

        for (v, vertex) in self.vertices.iter().enumerate() {
            let mut listed_edges = vertex.edges.clone();
            let mut listed_faces = vertex.faces.clone();
            listed_edges.sort_unstable();
            listed_faces.sort_unstable();
            edges_of[v].sort_unstable();
            faces_of[v].sort_unstable();
            if listed_edges != edges_of[v] || listed_faces != faces_of[v] {
                return Err(ValidationError::VertexAdjacency { vertex: v });
            }
        }
        Ok(())
    }

    fn validate_delaunay(&self) -> Result<(), ValidationError> {
        for (e, edge) in self.live_edges() {
            if edge.faces.len() != 2 {
                continue;
            }
            let [a, b] = edge.vertices;
            let apexes = self
                .edge_apexes(e)
                .map_err(|_| ValidationError::FaceEdgeMismatch { face: edge.faces[0], edge: e })?;
            let (pa, pb) = (self.position(a), self.position(b));
            let sc = orient2d(&pa, &pb, &self.position(apexes[0]));
            let sd = orient2d(&pa, &pb, &self.position(apexes[1]));
            if sc.sign() * sd.sign() >= 0 {
                return Err(ValidationError::FoldedEdge { edge: e });
            }
            if !edge.is_constrained() && !self.is_locally_delaunay(e) {
                return Err(ValidationError::NotLocallyDelaunay { edge: e });
            }
        }
        Ok(())
    }

    /// Single connected region whose face areas add up to the area enclosed
    /// by the boundary edges.
    fn validate_coverage(&self) -> Result<(), ValidationError> {
        let total = self.face_count();
        let Some((first, _)) = self.live_faces().next() else {
            return Ok(());
        };
        let reached: AHashSet<usize> = self.connected_faces(first).into_iter().collect();
        if reached.len() != total {
            return Err(ValidationError::Disconnected {
                reached: reached.len(),
                total,
            });
        }

        let mut face_area = T::zero();
        let mut boundary_area = T::zero();
        for (f, face) in self.live_faces() {
            let [pa, pb, pc] = self.face_points(f);
            face_area = face_area + triangle_signed_area(&pa, &pb, &pc);
            for i in 0..3 {
                if self.edges[face.edges[i]].faces.len() == 1 {
                    let p = self.position(face.vertices[i]);
                    let q = self.position(face.vertices[(i + 1) % 3]);
                    boundary_area = boundary_area + (p.x * q.y - q.x * p.y) * T::half();
                }
            }
        }
        let slack = self.tolerance.distance * boundary_area.abs().max(T::one());
        if (face_area - boundary_area).abs() > slack {
            return Err(ValidationError::AreaMismatch {
                faces: face_area.as_f64(),
                boundary: boundary_area.as_f64(),
            });
        }
        Ok(())
    }
}
