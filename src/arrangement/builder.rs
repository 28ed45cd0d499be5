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

use log::debug;

use crate::arrangement::core::Arrangement;
use crate::geometry::Segment2;
use crate::mesh::{Face, MeshSource, face_batches};

/// Builds an arrangement from independent batches (outer boundaries and hole
/// boundaries alike). Batch order does not affect the resulting subdivision.
pub fn build(batches: &[Vec<Segment2>]) -> Arrangement {
    let mut arr = Arrangement::new();
    for batch in batches {
        arr.insert_segments(batch);
    }
    debug!(
        "arrangement: {} vertices, {} edges, {} faces from {} batches",
        arr.vertex_count(),
        arr.edge_count(),
        arr.face_count(),
        batches.len()
    );
    arr
}

impl Arrangement {
    /// Inserts a mesh face: its outer boundary, then each hole boundary, as
    /// separate batches. No hole tag is kept; classification recovers holes
    /// from the topology.
    pub fn insert_face<M: MeshSource + ?Sized>(&mut self, mesh: &M, face: &Face) {
        let batches = face_batches(mesh, face);
        debug!("inserting face with {} holes", batches.len() - 1);
        for batch in &batches {
            self.insert_segments(batch);
        }
    }
}
