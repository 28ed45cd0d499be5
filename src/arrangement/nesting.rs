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

//! Even-odd nesting classification.
//!
//! The unbounded face sits at level 0. A breadth-first walk over the faces
//! assigns each newly reached face one more than the face it was reached
//! from, so a face's level counts the boundaries separating it from the
//! outside. Faces at odd levels are in the domain.

use std::collections::{BTreeSet, VecDeque};

use log::warn;

use crate::arrangement::core::Arrangement;
use crate::error::GeometryError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaceInfo {
    pub nesting_level: usize,
}

impl FaceInfo {
    pub fn in_domain(&self) -> bool {
        self.nesting_level % 2 == 1
    }
}

/// Per-face levels, indexed like `Arrangement::faces`, plus the conditions met.
#[derive(Debug, Clone, Default)]
pub struct Classification {
    pub faces: Vec<FaceInfo>,
    pub conditions: Vec<GeometryError>,
}

impl Classification {
    pub fn nesting_level(&self, face: usize) -> usize {
        self.faces[face].nesting_level
    }

    pub fn in_domain(&self, face: usize) -> bool {
        self.faces[face].in_domain()
    }

    pub fn domain_faces(&self) -> impl Iterator<Item = usize> + '_ {
        self.faces
            .iter()
            .enumerate()
            .filter(|(_, info)| info.in_domain())
            .map(|(f, _)| f)
    }

    pub fn is_consistent(&self) -> bool {
        self.conditions.is_empty()
    }
}

pub fn classify(arr: &Arrangement) -> Classification {
    let unbounded = arr.unbounded_face();
    let mut levels: Vec<Option<usize>> = vec![None; arr.face_count()];
    let mut conditions = Vec::new();
    let mut reported = BTreeSet::new();

    levels[unbounded] = Some(0);
    let mut queue = VecDeque::from([unbounded]);

    while let Some(f) = queue.pop_front() {
        let level = levels[f].unwrap_or_default();
        for g in arr.adjacent_faces(f) {
            match levels[g] {
                None => {
                    levels[g] = Some(level + 1);
                    queue.push_back(g);
                }
                // A neighbor already on the same level shares a boundary that
                // separates nothing
                Some(assigned) if assigned == level => {
                    let pair = (f.min(g), f.max(g));
                    if reported.insert(pair) {
                        warn!(
                            "inconsistent nesting: face {} at level {} reached at level {}",
                            g,
                            assigned,
                            level + 1
                        );
                        conditions.push(GeometryError::InconsistentNesting {
                            face: g,
                            assigned,
                            reached: level + 1,
                        });
                    }
                }
                Some(_) => {}
            }
        }
    }

    let faces = levels
        .into_iter()
        .enumerate()
        .map(|(f, level)| {
            if level.is_none() {
                warn!("face {} unreachable from the unbounded face", f);
            }
            FaceInfo {
                nesting_level: level.unwrap_or_default(),
            }
        })
        .collect();

    Classification { faces, conditions }
}
