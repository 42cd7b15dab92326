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

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum DcdtError {
    /// No face of the mesh contains the query point within tolerance.
    #[error("point ({x}, {y}) lies outside the triangulation")]
    PointOutsideMesh { x: f64, y: f64 },

    /// An internal topological assumption did not hold. The mesh must be
    /// considered unusable after this.
    #[error("malformed topology: {0}")]
    MalformedTopology(String),

    #[error("boundary corners must form a strictly convex quadrilateral")]
    InvalidBoundary,

    #[error("constraint edge {edge:?} refers to a point outside 0..{len}")]
    ConstraintIndexOutOfRange { edge: (usize, usize), len: usize },
}

pub type Result<T> = std::result::Result<T, DcdtError>;

pub(crate) fn malformed(msg: impl Into<String>) -> DcdtError {
    DcdtError::MalformedTopology(msg.into())
}
