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

use std::collections::BTreeSet;

use ahash::AHashMap;
use smallvec::SmallVec;

use crate::geometry::Point2;
use crate::numeric::{Scalar, Tolerance};

#[derive(Debug, Clone)]
pub struct Vertex<T: Scalar> {
    pub position: Point2<T>,
    /// Incident live edges, unordered.
    pub edges: SmallVec<[usize; 8]>,
    /// Incident live faces, unordered.
    pub faces: SmallVec<[usize; 8]>,
    /// Constraints that placed this vertex or pass through it.
    pub constraints: BTreeSet<usize>,
}

impl<T: Scalar> Vertex<T> {
    pub fn new(position: Point2<T>) -> Self {
        Self {
            position,
            edges: SmallVec::new(),
            faces: SmallVec::new(),
            constraints: BTreeSet::new(),
        }
    }

    pub fn degree(&self) -> usize {
        self.edges.len()
    }
}

#[derive(Debug, Clone, Default)]
pub struct Edge {
    pub vertices: [usize; 2],
    pub faces: SmallVec<[usize; 2]>,
    /// Constraint representative set: ids of the constraints this edge realises.
    pub crep: BTreeSet<usize>,
    pub removed: bool,
}

impl Edge {
    pub fn new(a: usize, b: usize) -> Self {
        Self {
            vertices: [a, b],
            ..Default::default()
        }
    }

    pub fn is_constrained(&self) -> bool {
        !self.crep.is_empty()
    }

    pub fn is_boundary(&self) -> bool {
        self.faces.len() < 2
    }

    pub fn contains(&self, v: usize) -> bool {
        self.vertices[0] == v || self.vertices[1] == v
    }

    /// The endpoint that is not `v`.
    pub fn other(&self, v: usize) -> Option<usize> {
        if self.vertices[0] == v {
            Some(self.vertices[1])
        } else if self.vertices[1] == v {
            Some(self.vertices[0])
        } else {
            None
        }
    }
}

/// Triangle with counter-clockwise `vertices`; `edges[i]` joins
/// `vertices[i]` and `vertices[(i + 1) % 3]`.
#[derive(Debug, Clone, Default)]
pub struct Face {
    pub vertices: [usize; 3],
    pub edges: [usize; 3],
    pub removed: bool,
}

impl Face {
    pub fn contains_vertex(&self, v: usize) -> bool {
        self.vertices.contains(&v)
    }

    pub fn contains_edge(&self, e: usize) -> bool {
        self.edges.contains(&e)
    }
}

/// Where a query point falls in the mesh.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointLocation {
    OnVertex(usize),
    OnEdge(usize),
    InFace(usize),
}

/// Arena of vertices, edges and faces. Handles are indices into the arenas
/// and stay valid forever; detached edges and faces are flagged `removed`.
#[derive(Debug, Clone)]
pub struct Mesh<T: Scalar> {
    pub vertices: Vec<Vertex<T>>,
    pub edges: Vec<Edge>,
    pub faces: Vec<Face>,

    /// Unordered vertex pair -> live edge.
    pub edge_map: AHashMap<(usize, usize), usize>,
    pub tolerance: Tolerance<T>,
}

impl<T: Scalar> Default for Mesh<T> {
    fn default() -> Self {
        Self::new(Tolerance::default())
    }
}

#[inline(always)]
pub(crate) fn edge_key(a: usize, b: usize) -> (usize, usize) {
    if a < b { (a, b) } else { (b, a) }
}
