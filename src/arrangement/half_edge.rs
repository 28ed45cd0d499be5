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

use crate::geometry::Point2;

/// Marker for an unset index.
pub const NONE: usize = usize::MAX;

/// Index of the unbounded face, present in every arrangement.
pub const UNBOUNDED_FACE: usize = 0;

#[derive(Clone, Debug)]
pub struct Vertex {
    pub point: Point2,
    /// Outgoing half-edges, sorted counter-clockwise by direction.
    pub ring: Vec<usize>,
    /// Containing face, meaningful for isolated vertices only.
    pub face: usize,
}

impl Vertex {
    pub fn new(point: Point2) -> Self {
        Self {
            point,
            ring: Vec::new(),
            face: UNBOUNDED_FACE,
        }
    }

    pub fn is_isolated(&self) -> bool {
        self.ring.is_empty()
    }
}

/// Directed side of an edge. Edge `e` owns half-edges `2e` and `2e + 1`.
#[derive(Clone, Debug)]
pub struct HalfEdge {
    pub origin: usize,       // vertex it leaves from
    pub twin: usize,
    pub next: usize,         // next half-edge around `face`
    pub prev: usize,
    pub face: usize,         // face to the left
}

impl HalfEdge {
    pub fn new(origin: usize, twin: usize) -> Self {
        Self {
            origin,
            twin,
            next: NONE,
            prev: NONE,
            face: UNBOUNDED_FACE,
        }
    }
}

/// A face: one outer boundary (none for the unbounded face) and any number of
/// inner boundaries, each given by one of its half-edges.
#[derive(Clone, Debug, Default)]
pub struct Face {
    pub outer_ccb: Option<usize>,
    pub inner_ccbs: Vec<usize>,
    pub isolated_vertices: Vec<usize>,
}

impl Face {
    pub fn is_unbounded(&self) -> bool {
        self.outer_ccb.is_none()
    }

    /// One representative half-edge per boundary cycle.
    pub fn boundary_cycles(&self) -> impl Iterator<Item = usize> + '_ {
        self.outer_ccb.iter().chain(self.inner_ccbs.iter()).copied()
    }
}

/// Counter-clockwise snapshot of the edges around a vertex.
#[derive(Debug, Clone)]
pub struct VertexRing {
    pub center: usize,
    pub halfedges_ccw: Vec<usize>, // outgoing half-edges from `center`
    pub neighbors_ccw: Vec<usize>, // target vertex of each half-edge
    pub faces_ccw: Vec<usize>,     // face to the left of each half-edge
}
