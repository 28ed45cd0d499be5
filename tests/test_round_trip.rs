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

use planar_arrangement::geometry::Segment2;
use planar_arrangement::mesh::{Mesh, MeshSink, View, extract, to_mesh};
use proptest::prelude::*;

fn undirected(segments: &[Segment2]) -> BTreeSet<Segment2> {
    segments.iter().map(Segment2::canonical).collect()
}

fn edge_mesh(coords: &[(f64, f64, f64, f64)], view: &View) -> Mesh {
    let mut mesh = Mesh::new();
    for &(x1, y1, x2, y2) in coords {
        let a = mesh.add_node(x1, y1, 0.0);
        let b = mesh.add_node(x2, y2, 0.0);
        mesh.add_edge(a, b, view);
    }
    mesh
}

#[test]
fn test_to_mesh_reuses_nodes_by_coordinate() {
    let view = View::edges("e");
    let mesh = edge_mesh(&[(0.0, 0.0, 1.0, 0.0), (1.0, 0.0, 1.0, 1.0), (1.0, 1.0, 0.0, 0.0)], &view);
    assert_eq!(mesh.nodes().len(), 6);

    let rebuilt = to_mesh(&extract(&mesh, &view).segments, &view).unwrap();
    assert_eq!(rebuilt.nodes().len(), 3);
    assert_eq!(rebuilt.edges().len(), 3);
    assert!(rebuilt.nodes().iter().all(|n| n.z == 0.0));
}

#[test]
fn test_double_round_trip_preserves_edges() {
    let view = View::edges("e");
    let mesh = edge_mesh(
        &[
            (0.1, 0.2, 3.7, -1.25),
            (3.7, -1.25, 1e-7, 5.0),
            (-0.0, 0.0, 2.0, 2.0),
            (2.0, 2.0, 2.0, 2.0),
        ],
        &view,
    );
    let first = extract(&mesh, &view).segments;
    let once = to_mesh(&first, &view).unwrap();
    let twice = to_mesh(&extract(&once, &view).segments, &view).unwrap();
    let last = extract(&twice, &view).segments;
    assert_eq!(undirected(&last), undirected(&first));
}

proptest! {
    #[test]
    fn prop_round_trip_is_geometrically_stable(
        coords in prop::collection::vec(
            (-1.0e3f64..1.0e3, -1.0e3f64..1.0e3, -1.0e3f64..1.0e3, -1.0e3f64..1.0e3),
            0..20,
        )
    ) {
        let view = View::edges("e");
        let mesh = edge_mesh(&coords, &view);
        let first = extract(&mesh, &view).segments;
        let once = to_mesh(&first, &view).unwrap();
        let twice = to_mesh(&extract(&once, &view).segments, &view).unwrap();
        prop_assert_eq!(undirected(&extract(&twice, &view).segments), undirected(&first));
    }
}
