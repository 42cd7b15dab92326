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

use dcdt::geometry::Point2;
use dcdt::kernel::orient2d;
use dcdt::mesh::{Mesh, PointLocation, ValidationError};
use dcdt::{DcdtError, Tolerance};

fn p(x: f64, y: f64) -> Point2<f64> {
    Point2::new(x, y)
}

/// Unit square split along the (1,0)-(0,1) diagonal.
fn make_two_tris_square() -> Mesh<f64> {
    let mut mesh = Mesh::new(Tolerance::default());
    let v0 = mesh.add_vertex(p(0.0, 0.0));
    let v1 = mesh.add_vertex(p(1.0, 0.0));
    let v2 = mesh.add_vertex(p(1.0, 1.0));
    let v3 = mesh.add_vertex(p(0.0, 1.0));
    mesh.add_face(v0, v1, v3).unwrap();
    mesh.add_face(v1, v2, v3).unwrap();
    mesh
}

/// Two triangles sharing the long diagonal (0,0)-(4,0) of a thin rhombus.
fn make_thin_quad() -> Mesh<f64> {
    let mut mesh = Mesh::new(Tolerance::default());
    let a = mesh.add_vertex(p(0.0, 0.0));
    let b = mesh.add_vertex(p(4.0, 0.0));
    let c = mesh.add_vertex(p(2.0, 0.5));
    let d = mesh.add_vertex(p(2.0, -0.5));
    mesh.add_face(a, b, c).unwrap();
    mesh.add_face(b, a, d).unwrap();
    mesh
}

#[test]
fn test_add_face_orders_counter_clockwise() {
    let mut mesh = Mesh::new(Tolerance::default());
    let v0 = mesh.add_vertex(p(0.0, 0.0));
    let v1 = mesh.add_vertex(p(0.0, 1.0));
    let v2 = mesh.add_vertex(p(1.0, 0.0));
    let f = mesh.add_face(v0, v1, v2).unwrap();

    let [a, b, c] = mesh.face_points(f);
    assert!(orient2d(&a, &b, &c) > 0.0);
    assert_eq!(mesh.edge_count(), 3);
    for (i, e) in mesh.face(f).edges.iter().enumerate() {
        let vs = mesh.face(f).vertices;
        let edge = mesh.edge(*e);
        assert!(edge.contains(vs[i]) && edge.contains(vs[(i + 1) % 3]));
        assert_eq!(edge.faces.as_slice(), &[f]);
    }
    assert!(mesh.validate().is_ok());
}

#[test]
fn test_add_face_rejects_degenerate_and_third_face() {
    let mut mesh = make_two_tris_square();
    let v = mesh.add_vertex(p(2.0, 2.0));
    assert!(matches!(
        mesh.add_face(0, 2, v),
        Err(DcdtError::MalformedTopology(_))
    ));

    // the diagonal already has two faces
    assert!(matches!(
        mesh.add_face(1, 3, v),
        Err(DcdtError::MalformedTopology(_))
    ));
}

#[test]
fn test_square_counts_and_validity() {
    let mesh = make_two_tris_square();
    assert_eq!(mesh.vertex_count(), 4);
    assert_eq!(mesh.edge_count(), 5);
    assert_eq!(mesh.face_count(), 2);
    assert!(mesh.validate().is_ok());

    let diag = mesh.edge_between(1, 3).unwrap();
    assert_eq!(mesh.edge(diag).faces.len(), 2);
    assert!(mesh.is_locally_delaunay(diag));
    assert!(!mesh.is_flippable(diag));
    assert!(mesh.edge(mesh.edge_between(0, 1).unwrap()).is_boundary());
}

#[test]
fn test_detach_edge_unlinks_everything() {
    let mut mesh = make_two_tris_square();
    let diag = mesh.edge_between(1, 3).unwrap();
    mesh.detach_edge(diag);

    assert_eq!(mesh.face_count(), 0);
    assert_eq!(mesh.edge_count(), 4);
    assert!(mesh.edge_between(1, 3).is_none());
    for v in 0..4 {
        assert!(mesh.vertex(v).faces.is_empty());
        assert_eq!(mesh.vertex(v).degree(), 2);
    }
    for (_, e) in mesh.live_edges() {
        assert!(e.faces.is_empty());
    }
}

#[test]
fn test_split_face_then_legalize() {
    let mut mesh = make_two_tris_square();
    let mut stack = Vec::new();
    let v = mesh.split_face_at_point(0, p(0.25, 0.25), &mut stack).unwrap();

    assert_eq!(v, 4);
    assert_eq!(mesh.face_count(), 4);
    assert_eq!(mesh.vertex(v).faces.len(), 3);
    assert_eq!(stack.len(), 3);
    assert!(!mesh.is_live_face(0));

    // (1,1) lies inside the circle through (1,0), (0,1), (0.25,0.25)
    let flips = mesh.legalize(&mut stack).unwrap();
    assert_eq!(flips, 1);
    assert!(mesh.edge_between(1, 3).is_none());
    assert!(mesh.edge_between(v, 2).is_some());
    assert_eq!(mesh.vertex(v).faces.len(), 4);
    assert!(mesh.validate().is_ok());
}

#[test]
fn test_split_interior_edge() {
    let mut mesh = make_two_tris_square();
    let diag = mesh.edge_between(1, 3).unwrap();
    let mut stack = Vec::new();
    let v = mesh.split_edge_at_point(diag, p(0.5, 0.5), &mut stack).unwrap();

    assert_eq!(mesh.face_count(), 4);
    assert_eq!(mesh.edge_count(), 8);
    assert_eq!(mesh.vertex(v).faces.len(), 4);
    assert_eq!(mesh.vertex(v).degree(), 4);
    assert_eq!(stack.len(), 4);
    assert!(!mesh.is_live_edge(diag));
    assert!(mesh.validate().is_ok());
}

#[test]
fn test_split_projects_onto_edge() {
    let mut mesh = make_two_tris_square();
    let diag = mesh.edge_between(1, 3).unwrap();
    let v = mesh
        .split_edge_at_point(diag, p(0.5 + 1e-6, 0.5 + 1e-6), &mut Vec::new())
        .unwrap();
    let q = mesh.position(v);
    assert!((q.x + q.y - 1.0).abs() < 1e-12);
}

#[test]
fn test_split_boundary_edge() {
    let mut mesh = make_two_tris_square();
    let bottom = mesh.edge_between(0, 1).unwrap();
    let mut stack = Vec::new();
    let v = mesh.split_edge_at_point(bottom, p(0.5, 0.0), &mut stack).unwrap();

    assert_eq!(mesh.face_count(), 3);
    assert_eq!(mesh.vertex(v).faces.len(), 2);
    assert_eq!(mesh.vertex(v).degree(), 3);
    assert_eq!(stack.len(), 2);
    assert!(mesh.edge(mesh.edge_between(0, v).unwrap()).is_boundary());
    assert!(mesh.edge(mesh.edge_between(v, 1).unwrap()).is_boundary());
}

#[test]
fn test_split_keeps_constraint_on_both_halves() {
    let mut mesh = make_two_tris_square();
    let diag = mesh.edge_between(1, 3).unwrap();
    mesh.edges[diag].crep.insert(7);

    let v = mesh.split_edge_at_point(diag, p(0.5, 0.5), &mut Vec::new()).unwrap();
    let lower = mesh.edge_between(1, v).unwrap();
    let upper = mesh.edge_between(v, 3).unwrap();
    assert!(mesh.edge(lower).crep.contains(&7));
    assert!(mesh.edge(upper).crep.contains(&7));
    assert!(mesh.vertex(v).constraints.contains(&7));
    assert!(!mesh.edge(mesh.edge_between(0, v).unwrap()).is_constrained());
}

#[test]
fn test_split_rejects_endpoint() {
    let mut mesh = make_two_tris_square();
    let diag = mesh.edge_between(1, 3).unwrap();
    assert!(mesh.split_edge_at_point(diag, p(1.0, 0.0), &mut Vec::new()).is_err());
}

#[test]
fn test_flip_thin_quad() {
    let mut mesh = make_thin_quad();
    let diag = mesh.edge_between(0, 1).unwrap();
    assert!(matches!(
        mesh.validate(),
        Err(ValidationError::NotLocallyDelaunay { .. })
    ));
    assert!(mesh.is_flippable(diag));

    let new_edge = mesh.flip_edge(diag).unwrap();
    assert_eq!(mesh.edge_between(2, 3), Some(new_edge));
    assert!(mesh.edge_between(0, 1).is_none());
    assert_eq!(mesh.face_count(), 2);
    assert!(!mesh.is_flippable(new_edge));
    assert!(mesh.validate().is_ok());
}

#[test]
fn test_flip_rejects_boundary_constrained_and_reflex() {
    let mut mesh = make_thin_quad();
    let boundary = mesh.edge_between(0, 2).unwrap();
    assert!(mesh.flip_edge(boundary).is_err());

    let diag = mesh.edge_between(0, 1).unwrap();
    mesh.edges[diag].crep.insert(1);
    assert!(!mesh.is_flippable(diag));
    assert!(mesh.flip_edge(diag).is_err());

    let mut reflex = Mesh::new(Tolerance::default());
    let a = reflex.add_vertex(p(0.0, 0.0));
    let b = reflex.add_vertex(p(1.0, 0.0));
    let c = reflex.add_vertex(p(3.0, 0.2));
    let d = reflex.add_vertex(p(3.0, -0.2));
    reflex.add_face(a, b, c).unwrap();
    reflex.add_face(b, a, d).unwrap();
    let e = reflex.edge_between(a, b).unwrap();
    assert!(!reflex.is_flippable(e));
    assert!(matches!(
        reflex.flip_edge(e),
        Err(DcdtError::MalformedTopology(_))
    ));
}

#[test]
fn test_legalize_skips_detached_edges() {
    let mut mesh = make_thin_quad();
    let diag = mesh.edge_between(0, 1).unwrap();
    let mut stack = vec![diag, diag];
    assert_eq!(mesh.legalize(&mut stack).unwrap(), 1);
    assert!(stack.is_empty());
}

#[test]
fn test_locate_point() {
    let mesh = make_two_tris_square();
    let diag = mesh.edge_between(1, 3).unwrap();

    assert_eq!(mesh.locate_point(&p(1e-7, 0.0)).unwrap(), PointLocation::OnVertex(0));
    assert_eq!(
        mesh.locate_point(&p(0.5, 0.5 + 1e-7)).unwrap(),
        PointLocation::OnEdge(diag)
    );
    assert_eq!(mesh.locate_point(&p(0.2, 0.2)).unwrap(), PointLocation::InFace(0));
    assert_eq!(mesh.locate_point(&p(0.8, 0.8)).unwrap(), PointLocation::InFace(1));
    assert!(matches!(
        mesh.locate_point(&p(2.0, 2.0)),
        Err(DcdtError::PointOutsideMesh { .. })
    ));
}

#[test]
fn test_connected_faces() {
    let mut mesh = make_two_tris_square();
    assert_eq!(mesh.connected_faces(0).len(), 2);

    mesh.split_face_at_point(1, p(0.7, 0.7), &mut Vec::new()).unwrap();
    let live = mesh.live_faces().next().unwrap().0;
    assert_eq!(mesh.connected_faces(live).len(), 4);
    assert!(mesh.connected_faces(1).is_empty());
}

#[test]
fn test_validate_catches_broken_adjacency() {
    let mut mesh = make_two_tris_square();
    mesh.vertices[0].faces.push(1);
    assert_eq!(
        mesh.validate(),
        Err(ValidationError::VertexAdjacency { vertex: 0 })
    );

    let mut mesh = make_two_tris_square();
    let diag = mesh.edge_between(1, 3).unwrap();
    mesh.edges[diag].faces.pop();
    assert!(mesh.validate().is_err());
}

#[test]
fn test_split_near_endpoint_of_long_edge() {
    let mut mesh = Mesh::new(Tolerance::default());
    let v0 = mesh.add_vertex(p(0.0, 0.0));
    let v1 = mesh.add_vertex(p(100.0, 0.0));
    let v2 = mesh.add_vertex(p(100.0, 100.0));
    let v3 = mesh.add_vertex(p(0.0, 100.0));
    mesh.add_face(v0, v1, v3).unwrap();
    mesh.add_face(v1, v2, v3).unwrap();
    let bottom = mesh.edge_between(v0, v1).unwrap();

    // within the distance tolerance of the corner
    assert!(mesh.split_edge_at_point(bottom, p(5e-6, 0.0), &mut Vec::new()).is_err());

    // 3e-5 away: t is below the numeric tolerance but the point is off the corner
    let mut stack = Vec::new();
    let v = mesh.split_edge_at_point(bottom, p(3e-5, 0.0), &mut stack).unwrap();
    assert!((mesh.position(v).x - 3e-5).abs() < 1e-12);
    assert_eq!(mesh.face_count(), 3);

    // (100,100) falls inside the circle through v, (100,0) and (0,100)
    mesh.legalize(&mut stack).unwrap();
    assert!(mesh.edge_between(v, v2).is_some());
    assert!(mesh.validate().is_ok());
}

#[test]
fn test_segment_to_vertex_near_neighbour_is_not_embedded() {
    let mut mesh = make_two_tris_square();
    // not part of any face, within the distance tolerance of vertex 1
    let w = mesh.add_vertex(p(1.0 + 5e-6, 0.0));
    let bottom = mesh.edge_between(0, 1).unwrap();

    assert!(mesh.insert_segment(0, w, 1).is_err());
    assert!(!mesh.edge(bottom).is_constrained());
    assert!(mesh.vertex(w).edges.is_empty());
}
