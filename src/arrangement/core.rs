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

use log::debug;

use crate::arrangement::half_edge::{Face, HalfEdge, UNBOUNDED_FACE, Vertex};
use crate::geometry::{Point2, Segment2, SegmentIntersection, segment_segment_intersection};
use crate::kernel::is_point_on_segment;

/// Planar subdivision induced by a set of segments.
///
/// Records live in arenas addressed by index. Edge `e` is the half-edge pair
/// `(2e, 2e + 1)`. Vertices are merged on exact equality of their points, and
/// no two edges ever cross or overlap: every insertion splits what it meets.
///
/// Face records are rebuilt after every batch, so face indices are only
/// stable between two insertions.
#[derive(Clone, Debug)]
pub struct Arrangement {
    pub vertices: Vec<Vertex>,
    pub half_edges: Vec<HalfEdge>,
    pub faces: Vec<Face>,
    vertex_map: HashMap<Point2, usize>,
    edge_map: HashMap<(usize, usize), usize>,
}

impl Default for Arrangement {
    fn default() -> Self {
        Self::new()
    }
}

#[inline]
fn edge_key(a: usize, b: usize) -> (usize, usize) {
    if a < b { (a, b) } else { (b, a) }
}

impl Arrangement {
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            half_edges: Vec::new(),
            faces: vec![Face::default()],
            vertex_map: HashMap::new(),
            edge_map: HashMap::new(),
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.half_edges.len() / 2
    }

    pub fn half_edge_count(&self) -> usize {
        self.half_edges.len()
    }

    /// Faces including the unbounded one.
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    pub fn unbounded_face(&self) -> usize {
        UNBOUNDED_FACE
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn point(&self, v: usize) -> &Point2 {
        &self.vertices[v].point
    }

    pub fn source(&self, he: usize) -> usize {
        self.half_edges[he].origin
    }

    pub fn target(&self, he: usize) -> usize {
        self.half_edges[self.half_edges[he].twin].origin
    }

    pub fn find_vertex(&self, p: &Point2) -> Option<usize> {
        self.vertex_map.get(p).copied()
    }

    /// Edge joining `a` and `b`, in either direction.
    pub fn edge_between(&self, a: usize, b: usize) -> Option<usize> {
        self.edge_map.get(&edge_key(a, b)).copied()
    }

    /// Half-edge leaving `a` towards `b`.
    pub fn half_edge_between(&self, a: usize, b: usize) -> Option<usize> {
        let e = self.edge_between(a, b)?;
        Some(if self.half_edges[2 * e].origin == a { 2 * e } else { 2 * e + 1 })
    }

    pub fn segment_from_half_edge(&self, he: usize) -> Segment2 {
        Segment2::new(
            &self.vertices[self.source(he)].point,
            &self.vertices[self.target(he)].point,
        )
    }

    pub fn edge_segment(&self, e: usize) -> Segment2 {
        self.segment_from_half_edge(2 * e)
    }

    /// All edges as segments, in edge order.
    pub fn segments(&self) -> Vec<Segment2> {
        (0..self.edge_count()).map(|e| self.edge_segment(e)).collect()
    }

    pub(crate) fn get_or_insert_vertex(&mut self, p: &Point2) -> (usize, bool) {
        if let Some(&vi) = self.vertex_map.get(p) {
            return (vi, true);
        }
        let vi = self.vertices.len();
        self.vertices.push(Vertex::new(p.clone()));
        self.vertex_map.insert(p.clone(), vi);
        (vi, false)
    }

    /// Adds the edge `a - b` unless it already exists. The caller guarantees
    /// that it crosses nothing. Returns the edge index.
    fn add_edge(&mut self, a: usize, b: usize) -> usize {
        if let Some(e) = self.edge_between(a, b) {
            return e;
        }
        let e = self.edge_count();
        let (h0, h1) = (2 * e, 2 * e + 1);
        self.half_edges.push(HalfEdge::new(a, h1));
        self.half_edges.push(HalfEdge::new(b, h0));
        self.vertices[a].ring.push(h0);
        self.vertices[b].ring.push(h1);
        self.edge_map.insert(edge_key(a, b), e);
        e
    }

    /// Splits edge `e = (u, v)` at vertex `w`, which must lie in its interior.
    /// Afterwards `e` is `(u, w)` and the returned new edge is `(w, v)`.
    pub(crate) fn split_edge(&mut self, e: usize, w: usize) -> usize {
        let (h0, h1) = (2 * e, 2 * e + 1);
        let u = self.half_edges[h0].origin;
        let v = self.half_edges[h1].origin;

        let ne = self.edge_count();
        let (n0, n1) = (2 * ne, 2 * ne + 1);
        self.half_edges.push(HalfEdge::new(w, n1)); // w -> v
        self.half_edges.push(HalfEdge::new(v, n0)); // v -> w

        // h1 used to leave v; it now leaves w
        self.half_edges[h1].origin = w;
        if let Some(slot) = self.vertices[v].ring.iter_mut().find(|h| **h == h1) {
            *slot = n1;
        }
        self.vertices[w].ring.push(h1);
        self.vertices[w].ring.push(n0);

        self.edge_map.remove(&edge_key(u, v));
        self.edge_map.insert(edge_key(u, w), e);
        self.edge_map.insert(edge_key(w, v), ne);
        ne
    }

    /// Inserts one segment: splits every edge it crosses or overlaps, merges
    /// coincident vertices, picks up isolated vertices lying on it and adds
    /// the missing pieces. Face records are left stale; see `insert_segments`.
    pub(crate) fn insert_segment(&mut self, seg: &Segment2) {
        if seg.is_degenerate() {
            return;
        }
        let (a, _) = self.get_or_insert_vertex(&seg.source);
        let (b, _) = self.get_or_insert_vertex(&seg.target);

        let mut on_seg = vec![a, b];
        let mut splits: HashMap<usize, Vec<usize>> = HashMap::new();

        for e in 0..self.edge_count() {
            let existing = self.edge_segment(e);
            let hits = match segment_segment_intersection(seg, &existing) {
                SegmentIntersection::None => continue,
                SegmentIntersection::Point(p) => vec![p],
                SegmentIntersection::Overlapping(s) => vec![s.source, s.target],
            };
            let (u, v) = (self.half_edges[2 * e].origin, self.half_edges[2 * e + 1].origin);
            for p in hits {
                let (w, _) = self.get_or_insert_vertex(&p);
                on_seg.push(w);
                if w != u && w != v {
                    splits.entry(e).or_default().push(w);
                }
            }
        }

        // Isolated vertices on the segment become part of it
        for (vi, vertex) in self.vertices.iter().enumerate() {
            if vertex.is_isolated() && is_point_on_segment(&vertex.point, seg) {
                on_seg.push(vi);
            }
        }

        // Split farthest first so `e` always keeps the piece holding the rest
        let mut split_edges: Vec<usize> = splits.keys().copied().collect();
        split_edges.sort_unstable();
        for e in split_edges {
            let mut ws = splits.remove(&e).unwrap_or_default();
            ws.sort_unstable();
            ws.dedup();
            let u = &self.vertices[self.half_edges[2 * e].origin].point;
            let mut keyed: Vec<_> = ws
                .into_iter()
                .map(|w| (u.squared_distance(&self.vertices[w].point), w))
                .collect();
            keyed.sort();
            for (_, w) in keyed.into_iter().rev() {
                self.split_edge(e, w);
            }
        }

        let dir = seg.direction();
        let mut ordered: Vec<_> = on_seg
            .into_iter()
            .map(|vi| ((&self.vertices[vi].point - &seg.source).dot(&dir), vi))
            .collect();
        ordered.sort();
        ordered.dedup_by(|x, y| x.1 == y.1);

        for w in ordered.windows(2) {
            if w[0].1 != w[1].1 {
                self.add_edge(w[0].1, w[1].1);
            }
        }
    }

    /// Inserts a batch of segments and rebuilds the face records.
    /// An empty batch is a no-op.
    pub fn insert_segments(&mut self, batch: &[Segment2]) {
        if batch.is_empty() {
            return;
        }
        let before = self.edge_count();
        for seg in batch {
            self.insert_segment(seg);
        }
        self.rebuild_faces();
        debug!(
            "inserted batch of {} segments, edges {} -> {}, {} faces",
            batch.len(),
            before,
            self.edge_count(),
            self.face_count()
        );
    }

    /// Inserts a point. A point in the interior of an edge splits it, a new
    /// point elsewhere becomes an isolated vertex of the face containing it.
    /// Returns the vertex index.
    pub fn insert_point(&mut self, p: &Point2) -> usize {
        let (w, reused) = self.get_or_insert_vertex(p);
        if reused {
            return w;
        }
        let on_edge = (0..self.edge_count()).find(|&e| is_point_on_segment(p, &self.edge_segment(e)));
        if let Some(e) = on_edge {
            self.split_edge(e, w);
        }
        self.rebuild_faces();
        w
    }
}
