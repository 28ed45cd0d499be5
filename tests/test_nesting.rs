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

use planar_arrangement::arrangement::{Arrangement, build, classify};
use planar_arrangement::error::GeometryError;
use planar_arrangement::geometry::{Point2, Segment2};
use planar_arrangement::mesh::{Face, Mesh};

fn s(x1: i32, y1: i32, x2: i32, y2: i32) -> Segment2 {
    Segment2::new(&Point2::new(x1, y1), &Point2::new(x2, y2))
}

fn square(x0: i32, y0: i32, side: i32) -> Vec<Segment2> {
    let (x1, y1) = (x0 + side, y0 + side);
    vec![s(x0, y0, x1, y0), s(x1, y0, x1, y1), s(x1, y1, x0, y1), s(x0, y1, x0, y0)]
}

fn sorted_levels(arr: &Arrangement) -> Vec<usize> {
    let mut levels: Vec<usize> = classify(arr).faces.iter().map(|f| f.nesting_level).collect();
    levels.sort();
    levels
}

#[test]
fn test_single_polygon() {
    let arr = build(&[square(0, 0, 5)]);
    let c = classify(&arr);
    assert!(c.is_consistent());
    assert_eq!(c.faces.len(), 2);
    assert_eq!(c.nesting_level(arr.unbounded_face()), 0);
    assert!(!c.in_domain(arr.unbounded_face()));
    assert_eq!(c.nesting_level(1), 1);
    assert!(c.in_domain(1));
}

#[test]
fn test_square_with_hole() {
    let arr = build(&[square(0, 0, 10), square(4, 4, 2)]);
    let c = classify(&arr);
    assert!(c.is_consistent());
    assert_eq!(arr.face_count(), 3);
    assert_eq!(sorted_levels(&arr), vec![0, 1, 2]);

    let domain: Vec<usize> = c.domain_faces().collect();
    assert_eq!(domain.len(), 1);
    let ring = domain[0];
    assert_eq!(arr.face_outer_boundary(ring).len(), 4);
    assert_eq!(arr.faces[ring].inner_ccbs.len(), 1);
}

#[test]
fn test_hole_inserted_before_parent() {
    let arr = build(&[square(4, 4, 2), square(0, 0, 10)]);
    assert_eq!(sorted_levels(&arr), vec![0, 1, 2]);
}

#[test]
fn test_disjoint_polygons_are_both_in_domain() {
    let arr = build(&[square(0, 0, 2), square(5, 0, 2)]);
    let c = classify(&arr);
    assert_eq!(sorted_levels(&arr), vec![0, 1, 1]);
    assert_eq!(c.domain_faces().count(), 2);
}

#[test]
fn test_hole_touching_boundary_at_a_vertex() {
    let hole = vec![s(0, 5, 3, 3), s(3, 3, 3, 7), s(3, 7, 0, 5)];
    let arr = build(&[square(0, 0, 10), hole]);
    arr.validate();
    let c = classify(&arr);
    assert!(c.is_consistent());
    assert_eq!(sorted_levels(&arr), vec![0, 1, 2]);
}

#[test]
fn test_shared_edge_reports_inconsistent_nesting() {
    let left = vec![s(0, 0, 2, 0), s(2, 0, 2, 2), s(2, 2, 0, 0)];
    let right = vec![s(0, 0, 2, 2), s(2, 2, 0, 2), s(0, 2, 0, 0)];
    let arr = build(&[left, right]);
    let c = classify(&arr);

    assert_eq!(sorted_levels(&arr), vec![0, 1, 1]);
    assert_eq!(c.conditions.len(), 1);
    assert!(matches!(
        c.conditions[0],
        GeometryError::InconsistentNesting { assigned: 1, reached: 2, .. }
    ));
}

#[test]
fn test_mesh_face_with_nested_holes() {
    let mut mesh = Mesh::new();
    let island = Face::new(mesh.add_ring(&[(4.0, 4.0), (6.0, 4.0), (6.0, 6.0), (4.0, 6.0)]));
    let hole = Face::new(mesh.add_ring(&[(2.0, 2.0), (8.0, 2.0), (8.0, 8.0), (2.0, 8.0)])).with_hole(island);
    let face = Face::new(mesh.add_ring(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)])).with_hole(hole);

    let mut arr = Arrangement::new();
    arr.insert_face(&mesh, &face);
    arr.validate();
    assert_eq!(arr.face_count(), 4);
    assert_eq!(sorted_levels(&arr), vec![0, 1, 2, 3]);

    let c = classify(&arr);
    assert_eq!(c.domain_faces().count(), 2);
}
