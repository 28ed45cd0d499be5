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

//! Mesh-level entry points chaining extraction, snap rounding, arrangement
//! construction and classification.

use log::debug;

use crate::arrangement::{Arrangement, Classification, build, classify};
use crate::config::SnapRoundingConfig;
use crate::error::{GeometryError, Result};
use crate::geometry::{Polyline2, Segment2, polylines_to_segments};
use crate::mesh::{MeshSource, View, extract};
use crate::snap_rounding::snap_round_with;

/// Snap-rounded segments of a view.
#[derive(Debug, Clone, Default)]
pub struct SnapReport {
    pub polylines: Vec<Polyline2>,
    pub segments: Vec<Segment2>,
    /// Non-fatal conditions raised during extraction.
    pub conditions: Vec<GeometryError>,
}

pub fn snap_rounding_2d<M: MeshSource + ?Sized>(
    mesh: &M,
    view: &View,
    config: &SnapRoundingConfig,
) -> Result<SnapReport> {
    config.validate()?;
    let extraction = extract(mesh, view);
    debug!(
        "{} segments extracted from {} ({} degenerate skipped)",
        extraction.segments.len(),
        view,
        extraction.degenerate_count
    );
    let polylines = snap_round_with(&extraction.segments, config)?;
    let segments = polylines_to_segments(&polylines);
    Ok(SnapReport {
        polylines,
        segments,
        conditions: extraction.conditions,
    })
}

/// Arrangement of a snap-rounded view together with its classification.
#[derive(Debug, Clone)]
pub struct MeshArrangement {
    pub arrangement: Arrangement,
    pub classification: Classification,
    pub conditions: Vec<GeometryError>,
}

impl MeshArrangement {
    /// Bounded faces inside the polygon-with-holes domain.
    pub fn domain_faces(&self) -> Vec<usize> {
        self.classification.domain_faces().collect()
    }
}

/// Snap rounds every segment of `view` together, inserts the result as one
/// batch and classifies the faces.
pub fn arrangement_from_mesh<M: MeshSource + ?Sized>(
    mesh: &M,
    view: &View,
    config: &SnapRoundingConfig,
) -> Result<MeshArrangement> {
    let report = snap_rounding_2d(mesh, view, config)?;
    let arrangement = build(&[report.segments]);
    let classification = classify(&arrangement);

    let mut conditions = report.conditions;
    conditions.extend(classification.conditions.iter().cloned());
    Ok(MeshArrangement {
        arrangement,
        classification,
        conditions,
    })
}
