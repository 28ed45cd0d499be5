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

use crate::arrangement::core::Arrangement;
use crate::arrangement::half_edge::VertexRing;

/// Cursor over the cyclic, counter-clockwise order of half-edges around a
/// vertex. It holds an index into the vertex ring, not a half-edge handle, and
/// wraps around in both directions.
#[derive(Clone, Copy, Debug)]
pub struct VertexCirculator<'a> {
    arr: &'a Arrangement,
    ring: &'a [usize],
    pos: usize,
}

impl<'a> VertexCirculator<'a> {
    /// Half-edge pointing into the vertex at the cursor.
    pub fn current(&self) -> usize {
        self.arr.half_edges[self.ring[self.pos]].twin
    }

    pub fn outgoing(&self) -> usize {
        self.ring[self.pos]
    }

    /// Vertex at the far end of the current edge.
    pub fn neighbor(&self) -> usize {
        self.arr.target(self.ring[self.pos])
    }

    pub fn advance(&mut self) {
        self.pos = (self.pos + 1) % self.ring.len();
    }

    pub fn retreat(&mut self) {
        self.pos = (self.pos + self.ring.len() - 1) % self.ring.len();
    }
}

/// One full turn of a circulator, yielding incoming half-edges.
pub struct IncidentHalfEdges<'a> {
    circ: Option<VertexCirculator<'a>>,
    first: usize,
    started: bool,
}

impl Iterator for IncidentHalfEdges<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        let circ = self.circ.as_mut()?;
        let h = circ.current();
        if self.started && h == self.first {
            self.circ = None;
            return None;
        }
        self.started = true;
        circ.advance();
        Some(h)
    }
}

impl Arrangement {
    /// Circulator around `v`, `None` for an isolated vertex.
    pub fn circulator(&self, v: usize) -> Option<VertexCirculator<'_>> {
        let ring = self.vertices[v].ring.as_slice();
        if ring.is_empty() {
            return None;
        }
        Some(VertexCirculator { arr: self, ring, pos: 0 })
    }

    /// Incoming half-edges of `v` in counter-clockwise order.
    pub fn incident_halfedges(&self, v: usize) -> IncidentHalfEdges<'_> {
        let circ = self.circulator(v);
        IncidentHalfEdges {
            first: circ.map_or(usize::MAX, |c| c.current()),
            circ,
            started: false,
        }
    }

    /// Number of edges at `v`: zero for an isolated vertex, otherwise the
    /// length of one full turn of its circulator.
    pub fn count_incident_edges(&self, v: usize) -> usize {
        let Some(mut circ) = self.circulator(v) else {
            return 0;
        };
        let first = circ.current();
        let mut count = 0;
        loop {
            count += 1;
            circ.advance();
            if circ.current() == first {
                break;
            }
        }
        count
    }

    pub fn neighbors(&self, v: usize) -> Vec<usize> {
        self.vertex_ring_ccw(v).neighbors_ccw
    }

    pub fn vertex_ring_ccw(&self, v: usize) -> VertexRing {
        let ring = &self.vertices[v].ring;
        VertexRing {
            center: v,
            halfedges_ccw: ring.clone(),
            neighbors_ccw: ring.iter().map(|&h| self.target(h)).collect(),
            faces_ccw: ring.iter().map(|&h| self.half_edges[h].face).collect(),
        }
    }

    /// Structural self-check: twins pair up, `next`/`prev` are inverse, every
    /// half-edge starts where its predecessor ends and shares its face, and
    /// every face boundary walks back to its start.
    pub fn validate(&self) {
        for (i, he) in self.half_edges.iter().enumerate() {
            assert_eq!(self.half_edges[he.twin].twin, i, "he {} twin -> twin mismatch", i);
            assert_eq!(self.half_edges[he.next].prev, i, "he {} next -> prev mismatch", i);
            assert_eq!(self.half_edges[he.prev].next, i, "he {} prev -> next mismatch", i);
            assert_eq!(
                self.half_edges[he.next].origin,
                self.target(i),
                "he {} next does not leave its target",
                i
            );
            assert_eq!(
                self.half_edges[he.next].face, he.face,
                "he {} and its next lie on different faces",
                i
            );
        }

        for (fi, face) in self.faces.iter().enumerate() {
            for start in face.boundary_cycles() {
                for h in self.cycle(start) {
                    assert_eq!(
                        self.half_edges[h].face, fi,
                        "face {} half-edge {} points at wrong face",
                        fi, h
                    );
                }
            }
        }

        for (vi, v) in self.vertices.iter().enumerate() {
            for &h in &v.ring {
                assert_eq!(self.half_edges[h].origin, vi, "vertex {}: half-edge {} is not outgoing", vi, h);
            }
        }
    }
}
