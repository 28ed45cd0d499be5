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

//! Mesh to segment extraction.
//!
//! Edge views yield one segment per edge, face views one segment per boundary
//! step of every face and of every hole (holes of holes included). Degenerate
//! segments are never emitted. Holes are not tagged here; an arrangement
//! recovers them from topology.

use log::{debug, warn};

use crate::error::GeometryError;
use crate::geometry::Segment2;
use crate::mesh::system::MeshSource;
use crate::mesh::types::{Component, ComponentKind, Face, NodeId, View};

/// Segments extracted from a view, with counters and non-fatal conditions.
#[derive(Debug, Clone, Default)]
pub struct Extraction {
    pub segments: Vec<Segment2>,
    pub face_count: usize,
    pub hole_count: usize,
    /// Zero-length segments skipped.
    pub degenerate_count: usize,
    pub conditions: Vec<GeometryError>,
}

impl Extraction {
    pub fn is_clean(&self) -> bool {
        self.conditions.is_empty()
    }

    fn push_step<M: MeshSource + ?Sized>(&mut self, mesh: &M, a: NodeId, b: NodeId) {
        let (na, nb) = match (mesh.node(a), mesh.node(b)) {
            (Some(na), Some(nb)) => (na, nb),
            (na, _) => {
                let id = if na.is_none() { a } else { b };
                warn!("dropping segment with missing node {}", id.0);
                self.conditions.push(GeometryError::MissingNode { id: id.0 });
                return;
            }
        };
        let Some(seg) = Segment2::from_f64(na.x, na.y, nb.x, nb.y) else {
            let bad = if na.x.is_finite() && na.y.is_finite() { nb } else { na };
            warn!("dropping segment with non-finite node ({}, {})", bad.x, bad.y);
            self.conditions.push(GeometryError::NonFiniteCoordinate { x: bad.x, y: bad.y });
            return;
        };
        if seg.is_degenerate() {
            self.degenerate_count += 1;
        } else {
            self.segments.push(seg);
        }
    }

    fn push_ring<M: MeshSource + ?Sized>(&mut self, mesh: &M, face: &Face) {
        for w in face.closed_ring().windows(2) {
            self.push_step(mesh, w[0], w[1]);
        }
    }

    fn push_holes<M: MeshSource + ?Sized>(&mut self, mesh: &M, face: &Face) {
        for hole in face.holes() {
            self.hole_count += 1;
            self.push_ring(mesh, hole);
            self.push_holes(mesh, hole);
        }
    }
}

/// Extracts the segments of every component in `view`.
///
/// Edge segments run from the edge's start node to its end node. A view of a
/// kind other than edges or faces yields an empty list and an
/// `UnsupportedSelector` condition.
pub fn extract<M: MeshSource + ?Sized>(mesh: &M, view: &View) -> Extraction {
    let mut out = Extraction::default();

    match view.kind {
        ComponentKind::Edge => {
            for c in mesh.components_of(view) {
                if let Component::Edge(edge) = c {
                    out.push_step(mesh, edge.start_node(), edge.end_node());
                }
            }
        }
        ComponentKind::Face => {
            for c in mesh.components_of(view) {
                if let Component::Face(face) = c {
                    out.face_count += 1;
                    out.push_ring(mesh, face);
                    out.push_holes(mesh, face);
                }
            }
            debug!("Number of Faces {}", out.face_count);
            debug!("Number of Holes {}", out.hole_count);
        }
        kind => {
            warn!("view {} holds {:?} components, not supported by extraction", view, kind);
            out.conditions.push(GeometryError::UnsupportedSelector {
                view: view.name.clone(),
                kind,
            });
        }
    }

    out
}

/// One batch for the outer boundary of `face`, then one per hole, in
/// depth-first order. Empty batches are kept so indices line up with holes.
pub fn face_batches<M: MeshSource + ?Sized>(mesh: &M, face: &Face) -> Vec<Vec<Segment2>> {
    fn ring_batch<M: MeshSource + ?Sized>(mesh: &M, ring: &Face) -> Vec<Segment2> {
        let mut ex = Extraction::default();
        ex.push_ring(mesh, ring);
        ex.segments
    }

    fn collect<M: MeshSource + ?Sized>(mesh: &M, face: &Face, out: &mut Vec<Vec<Segment2>>) {
        for hole in face.holes() {
            out.push(ring_batch(mesh, hole));
            collect(mesh, hole, out);
        }
    }

    let mut batches = vec![ring_batch(mesh, face)];
    collect(mesh, face, &mut batches);
    batches
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::system::{Mesh, MeshSink};

    #[test]
    fn nan_node_is_reported_not_emitted() {
        let mut mesh = Mesh::new();
        let view = View::edges("e");
        let a = mesh.add_node(0.0, 0.0, 0.0);
        let b = mesh.add_node(f64::NAN, 1.0, 0.0);
        let c = mesh.add_node(1.0, 1.0, 0.0);
        mesh.add_edge(a, b, &view);
        mesh.add_edge(a, c, &view);

        let ex = extract(&mesh, &view);
        assert_eq!(ex.segments.len(), 1);
        assert!(matches!(
            ex.conditions.as_slice(),
            [GeometryError::NonFiniteCoordinate { .. }]
        ));
    }

    #[test]
    fn dangling_node_id_is_reported_not_indexed() {
        let mut mesh = Mesh::new();
        let view = View::edges("e");
        let a = mesh.add_node(0.0, 0.0, 0.0);
        let b = mesh.add_node(1.0, 0.0, 0.0);
        mesh.add_edge(a, NodeId(9), &view);
        mesh.add_edge(a, b, &view);

        let ex = extract(&mesh, &view);
        assert_eq!(ex.segments.len(), 1);
        assert_eq!(ex.conditions, vec![GeometryError::MissingNode { id: 9 }]);
    }
}
