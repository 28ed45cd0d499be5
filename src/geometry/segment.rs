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

use std::fmt;

use crate::geometry::Point2;

/// Ordered pair of exact points.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Segment2 {
    pub source: Point2,
    pub target: Point2,
}

impl Segment2 {
    pub fn new(source: &Point2, target: &Point2) -> Self {
        Self {
            source: source.clone(),
            target: target.clone(),
        }
    }

    /// Builds a segment from floating point endpoints, `None` if a coordinate
    /// is not finite.
    pub fn from_f64(x1: f64, y1: f64, x2: f64, y2: f64) -> Option<Self> {
        Some(Self {
            source: Point2::from_f64(x1, y1)?,
            target: Point2::from_f64(x2, y2)?,
        })
    }

    pub fn source(&self) -> &Point2 {
        &self.source
    }

    pub fn target(&self) -> &Point2 {
        &self.target
    }

    /// True iff both endpoints are exactly equal.
    pub fn is_degenerate(&self) -> bool {
        self.source == self.target
    }

    pub fn reversed(&self) -> Self {
        Self::new(&self.target, &self.source)
    }

    pub fn direction(&self) -> Point2 {
        &self.target - &self.source
    }

    /// Same segment with endpoints in lexicographic order; two segments cover
    /// the same undirected edge iff their canonical forms are equal.
    pub fn canonical(&self) -> Self {
        if self.target < self.source {
            self.reversed()
        } else {
            self.clone()
        }
    }
}

impl fmt::Display for Segment2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.source, self.target)
    }
}
