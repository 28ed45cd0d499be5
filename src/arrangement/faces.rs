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

//! Face reconstruction.
//!
//! After a batch of insertions the vertex rings are sorted by angle, which
//! fixes `next`/`prev` everywhere. Boundary cycles are then traced: a cycle
//! with positive signed area is the outer boundary of a bounded face, any
//! other cycle is the outer rim of a connected component and becomes an inner
//! boundary of the smallest bounded face of another component enclosing it
//! (or of the unbounded face).

use std::cmp::Ordering;

use crate::arrangement::core::Arrangement;
use crate::arrangement::half_edge::{Face, UNBOUNDED_FACE};
use crate::geometry::Point2;
use crate::kernel::point_in_ring;
use crate::numeric::ExactRational;

/// Counter-clockwise angular order of direction vectors, starting at +x.
fn angle_cmp(a: &Point2, b: &Point2) -> Ordering {
    let upper = |d: &Point2| d.y.is_positive() || (d.y.signum() == 0 && d.x.is_positive());
    match (upper(a), upper(b)) {
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        _ => match b.cross(a).signum() {
            // a x b > 0 means a comes first
            s if s < 0 => Ordering::Less,
            s if s > 0 => Ordering::Greater,
            _ => Ordering::Equal,
        },
    }
}

/// Union-find over vertex indices, used to group boundary cycles by the
/// connected component they belong to.
struct Components {
    parent: Vec<usize>,
}

impl Components {
    fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
        }
    }

    fn find(&mut self, mut x: usize) -> usize {
        while self.parent[x] != x {
            self.parent[x] = self.parent[self.parent[x]];
            x = self.parent[x];
        }
        x
    }

    fn union(&mut self, a: usize, b: usize) {
        let (ra, rb) = (self.find(a), self.find(b));
        if ra != rb {
            self.parent[ra] = rb;
        }
    }
}

/// Outer boundary of a bounded face, kept for point location.
struct BoundedCycle {
    face: usize,
    component: usize,
    area2: ExactRational,
    ring: Vec<Point2>,
}

impl Arrangement {
    fn sort_rings(&mut self) {
        for v in 0..self.vertices.len() {
            let origin = &self.vertices[v].point;
            let mut keyed: Vec<(Point2, usize)> = self.vertices[v]
                .ring
                .iter()
                .map(|&h| (&self.vertices[self.target(h)].point - origin, h))
                .collect();
            keyed.sort_by(|a, b| angle_cmp(&a.0, &b.0));
            self.vertices[v].ring = keyed.into_iter().map(|(_, h)| h).collect();
        }
    }

    /// Links `next`/`prev` from the sorted rings: the successor of `h` is the
    /// outgoing half-edge at its target that comes just before `twin(h)` in
    /// counter-clockwise order.
    fn link_half_edges(&mut self) {
        let mut ring_pos = vec![0usize; self.half_edges.len()];
        for vertex in &self.vertices {
            for (i, &h) in vertex.ring.iter().enumerate() {
                ring_pos[h] = i;
            }
        }
        for h in 0..self.half_edges.len() {
            let t = self.half_edges[h].twin;
            let ring = &self.vertices[self.half_edges[t].origin].ring;
            let n = ring[(ring_pos[t] + ring.len() - 1) % ring.len()];
            self.half_edges[h].next = n;
            self.half_edges[n].prev = h;
        }
    }

    /// Half-edges of the cycle through `start`, following `next`.
    pub fn cycle(&self, start: usize) -> Vec<usize> {
        let mut out = vec![start];
        let mut cur = self.half_edges[start].next;
        while cur != start {
            out.push(cur);
            cur = self.half_edges[cur].next;
        }
        out
    }

    /// Twice the signed area enclosed by a cycle.
    fn cycle_area2(&self, cycle: &[usize]) -> ExactRational {
        cycle.iter().fold(ExactRational::from(0), |acc, &h| {
            let a = &self.vertices[self.source(h)].point;
            let b = &self.vertices[self.target(h)].point;
            &acc + &a.cross(b)
        })
    }

    fn cycle_points(&self, cycle: &[usize]) -> Vec<Point2> {
        cycle
            .iter()
            .map(|&h| self.vertices[self.source(h)].point.clone())
            .collect()
    }

    /// Innermost bounded face containing `p`, ignoring faces of `component`.
    fn locate(bounded: &[BoundedCycle], p: &Point2, component: Option<usize>) -> usize {
        bounded
            .iter()
            .filter(|c| Some(c.component) != component)
            .filter(|c| point_in_ring(p, &c.ring))
            .min_by(|a, b| a.area2.cmp(&b.area2))
            .map_or(UNBOUNDED_FACE, |c| c.face)
    }

    /// Recomputes `next`/`prev`, face incidence and face records from scratch.
    pub(crate) fn rebuild_faces(&mut self) {
        self.sort_rings();
        self.link_half_edges();

        let mut components = Components::new(self.vertices.len());
        for e in 0..self.edge_count() {
            components.union(self.half_edges[2 * e].origin, self.half_edges[2 * e + 1].origin);
        }

        let mut visited = vec![false; self.half_edges.len()];
        let mut bounded = Vec::new();
        let mut rims = Vec::new();
        let mut faces = vec![Face::default()];

        for h in 0..self.half_edges.len() {
            if visited[h] {
                continue;
            }
            let cycle = self.cycle(h);
            for &c in &cycle {
                visited[c] = true;
            }
            let area2 = self.cycle_area2(&cycle);
            let component = components.find(self.half_edges[h].origin);
            if area2.is_positive() {
                let face = faces.len();
                faces.push(Face {
                    outer_ccb: Some(h),
                    ..Face::default()
                });
                for &c in &cycle {
                    self.half_edges[c].face = face;
                }
                bounded.push(BoundedCycle {
                    face,
                    component,
                    area2,
                    ring: self.cycle_points(&cycle),
                });
            } else {
                rims.push((h, component, cycle));
            }
        }

        for (h, component, cycle) in rims {
            let p = &self.vertices[self.half_edges[h].origin].point;
            let face = Self::locate(&bounded, p, Some(component));
            faces[face].inner_ccbs.push(h);
            for c in cycle {
                self.half_edges[c].face = face;
            }
        }

        for v in 0..self.vertices.len() {
            if !self.vertices[v].is_isolated() {
                continue;
            }
            let face = Self::locate(&bounded, &self.vertices[v].point, None);
            self.vertices[v].face = face;
            faces[face].isolated_vertices.push(v);
        }

        self.faces = faces;
    }

    /// Vertices of the outer boundary of `face`, counter-clockwise. Empty for
    /// the unbounded face.
    pub fn face_outer_boundary(&self, face: usize) -> Vec<Point2> {
        match self.faces[face].outer_ccb {
            Some(h) => self.cycle_points(&self.cycle(h)),
            None => Vec::new(),
        }
    }

    /// Faces bordering `face` across one of its edges, without repeats.
    pub fn adjacent_faces(&self, face: usize) -> Vec<usize> {
        let mut out = Vec::new();
        for start in self.faces[face].boundary_cycles() {
            for h in self.cycle(start) {
                let other = self.half_edges[self.half_edges[h].twin].face;
                if other != face && !out.contains(&other) {
                    out.push(other);
                }
            }
        }
        out
    }
}
