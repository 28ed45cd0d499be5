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

use planar_arrangement::config::SnapRoundingConfig;
use planar_arrangement::error::GeometryError;
use planar_arrangement::mesh::{Face, Mesh, MeshSink, View};
use planar_arrangement::pipeline::{arrangement_from_mesh, snap_rounding_2d};

fn square_with_hole_mesh(view: &View) -> Mesh {
    let mut mesh = Mesh::new();
    let hole = Face::new(mesh.add_ring(&[(4.0, 4.0), (6.0, 4.0), (6.0, 6.0), (4.0, 6.0)]));
    let outer = Face::new(mesh.add_ring(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)]))
        .with_hole(hole);
    mesh.add_face(outer, view);
    mesh
}

#[test]
fn test_square_with_hole_end_to_end() {
    let view = View::faces("domain");
    let mesh = square_with_hole_mesh(&view);
    let config = SnapRoundingConfig::new(0.01).unwrap();

    let result = arrangement_from_mesh(&mesh, &view, &config).unwrap();
    result.arrangement.validate();
    assert!(result.conditions.is_empty());
    assert_eq!(result.arrangement.face_count(), 3);

    let mut levels: Vec<usize> = result
        .classification
        .faces
        .iter()
        .map(|f| f.nesting_level)
        .collect();
    levels.sort();
    assert_eq!(levels, vec![0, 1, 2]);
    assert_eq!(result.domain_faces().len(), 1);
}

#[test]
fn test_snap_report_flattens_polylines() {
    let view = View::faces("domain");
    let mesh = square_with_hole_mesh(&view);
    let report = snap_rounding_2d(&mesh, &view, &SnapRoundingConfig::default()).unwrap();
    assert_eq!(report.polylines.len(), 8);
    assert_eq!(report.segments.len(), 8);
    assert!(report.segments.iter().all(|s| !s.is_degenerate()));
    assert!(report.conditions.is_empty());
}

#[test]
fn test_invalid_tolerance_stops_the_call() {
    let view = View::faces("domain");
    let mesh = square_with_hole_mesh(&view);
    let bad = SnapRoundingConfig {
        tolerance: -0.01,
        max_rounds: None,
    };
    assert_eq!(
        arrangement_from_mesh(&mesh, &view, &bad).err(),
        Some(GeometryError::InvalidTolerance(-0.01))
    );
}

#[test]
fn test_unsupported_view_yields_empty_arrangement() {
    let mut mesh = Mesh::new();
    let view = View::nodes("pts");
    let n = mesh.add_node(0.0, 0.0, 0.0);
    mesh.tag_node(n, &view);

    let result = arrangement_from_mesh(&mesh, &view, &SnapRoundingConfig::default()).unwrap();
    assert!(result.arrangement.is_empty());
    assert_eq!(result.arrangement.face_count(), 1);
    assert!(matches!(
        result.conditions.as_slice(),
        [GeometryError::UnsupportedSelector { .. }]
    ));
}

#[test]
fn test_crossing_edges_snap_into_a_shared_vertex() {
    let mut mesh = Mesh::new();
    let view = View::edges("lines");
    let a = mesh.add_node(0.0, 0.0, 0.0);
    let b = mesh.add_node(1.0, 1.0, 0.0);
    let c = mesh.add_node(0.0, 1.0, 0.0);
    let d = mesh.add_node(1.0, 0.0, 0.0);
    mesh.add_edge(a, b, &view);
    mesh.add_edge(c, d, &view);

    let result = arrangement_from_mesh(&mesh, &view, &SnapRoundingConfig::new(0.1).unwrap()).unwrap();
    result.arrangement.validate();
    assert_eq!(result.arrangement.vertex_count(), 5);
    assert_eq!(result.arrangement.edge_count(), 4);
    assert_eq!(result.arrangement.face_count(), 1);
}
