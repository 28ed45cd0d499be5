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

use std::collections::HashMap;

use crate::error::Result;
use crate::geometry::Segment2;
use crate::kernel::to_float;
use crate::mesh::system::{Mesh, MeshSink};
use crate::mesh::types::{EdgeId, NodeId, View};

/// Writes one edge per segment into `sink`, reusing nodes that land on the
/// same floating point coordinate. Returns the created edge ids in order.
pub fn write_segments<M: MeshSink + ?Sized>(
    sink: &mut M,
    segments: &[Segment2],
    view: &View,
) -> Result<Vec<EdgeId>> {
    let mut nodes: HashMap<(u64, u64), NodeId> = HashMap::new();
    let mut node_at = |sink: &mut M, (x, y): (f64, f64)| -> NodeId {
        // -0.0 and 0.0 are the same location
        let key = ((x + 0.0).to_bits(), (y + 0.0).to_bits());
        *nodes.entry(key).or_insert_with(|| sink.add_node(x, y, 0.0))
    };

    let mut edges = Vec::with_capacity(segments.len());
    for seg in segments {
        let a = node_at(sink, to_float(&seg.source)?);
        let b = node_at(sink, to_float(&seg.target)?);
        edges.push(sink.add_edge(a, b, view));
    }
    Ok(edges)
}

/// Fresh mesh holding only the nodes and edges built from `segments`.
pub fn to_mesh(segments: &[Segment2], view: &View) -> Result<Mesh> {
    let mut mesh = Mesh::new();
    write_segments(&mut mesh, segments, view)?;
    Ok(mesh)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point2;

    #[test]
    fn shared_endpoints_reuse_nodes() {
        let view = View::edges("out");
        let segs = vec![
            Segment2::new(&Point2::new(0, 0), &Point2::new(1, 0)),
            Segment2::new(&Point2::new(1, 0), &Point2::new(1, 1)),
        ];
        let mesh = to_mesh(&segs, &view).unwrap();
        assert_eq!(mesh.nodes().len(), 3);
        assert_eq!(mesh.edges().len(), 2);
        assert_eq!(mesh.edges()[0].end, mesh.edges()[1].start);
    }
}
