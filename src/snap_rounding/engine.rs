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

//! Iterated snap rounding.
//!
//! Every input endpoint and every pairwise intersection point marks its grid
//! cell as a hot pixel. Each input segment becomes the chain of centers of the
//! hot pixels it meets, in order along the segment. The links of those chains
//! are then checked again against the hot pixels and re-threaded through any
//! they meet, round after round, until no link meets a hot pixel outside its
//! chain.

use std::collections::{BTreeSet, HashSet};

use log::debug;

use crate::config::SnapRoundingConfig;
use crate::error::Result;
use crate::geometry::{
    Point2, Polyline2, Segment2, SegmentIntersection, polylines_to_segments,
    segment_segment_intersection,
};
use crate::numeric::ExactRational;
use crate::snap_rounding::hot_pixel::{Grid, PixelKey};

/// Snap rounds `segments` on a grid of cell size `tolerance`.
///
/// Fails with `InvalidTolerance` before doing any work when `tolerance` is not
/// a finite positive number. Returns one polyline per input segment that does
/// not collapse into a single pixel, in input order.
pub fn snap_round(segments: &[Segment2], tolerance: f64) -> Result<Vec<Polyline2>> {
    let config = SnapRoundingConfig::new(tolerance)?;
    snap_round_with(segments, &config)
}

pub fn snap_round_with(segments: &[Segment2], config: &SnapRoundingConfig) -> Result<Vec<Polyline2>> {
    let rounder = SnapRounder::new(config)?;
    Ok(rounder.run(segments))
}

/// Snap rounds and flattens the polylines back into a segment list.
pub fn snap_round_segments(segments: &[Segment2], tolerance: f64) -> Result<Vec<Segment2>> {
    Ok(polylines_to_segments(&snap_round(segments, tolerance)?))
}

pub struct SnapRounder {
    grid: Grid,
    max_rounds: Option<usize>,
}

impl SnapRounder {
    pub fn new(config: &SnapRoundingConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            grid: Grid::new(config.tolerance)?,
            max_rounds: config.max_rounds,
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn run(&self, segments: &[Segment2]) -> Vec<Polyline2> {
        debug!("Snap Rounding 2D");
        let input: Vec<&Segment2> = segments.iter().filter(|s| !s.is_degenerate()).collect();
        if input.is_empty() {
            return Vec::new();
        }

        let hot = self.hot_pixels(&input);
        debug!("{} hot pixels for {} segments", hot.len(), input.len());

        let mut chains: Vec<Vec<PixelKey>> = input
            .iter()
            .map(|seg| self.thread(seg, &hot))
            .collect();

        let mut round = 0;
        loop {
            if self.max_rounds.is_some_and(|max| round >= max) {
                debug!("stopping re-threading after {} rounds", round);
                break;
            }
            round += 1;
            let mut changed = false;
            for chain in chains.iter_mut() {
                changed |= self.rethread(chain, &hot);
            }
            if !changed {
                break;
            }
        }
        debug!("re-threading settled after {} rounds", round);

        let polylines: Vec<Polyline2> = chains
            .iter()
            .filter(|chain| chain.len() >= 2)
            .map(|chain| Polyline2::new(chain.iter().map(|k| self.grid.center(k)).collect()))
            .collect();

        debug!("End Snap Rounding 2D ({} polylines)", polylines.len());
        polylines
    }

    fn hot_pixels(&self, input: &[&Segment2]) -> BTreeSet<PixelKey> {
        let mut hot = BTreeSet::new();
        for seg in input {
            hot.insert(self.grid.pixel_of(&seg.source));
            hot.insert(self.grid.pixel_of(&seg.target));
        }
        for (i, a) in input.iter().enumerate() {
            for b in &input[i + 1..] {
                match segment_segment_intersection(a, b) {
                    SegmentIntersection::None => {}
                    SegmentIntersection::Point(p) => {
                        hot.insert(self.grid.pixel_of(&p));
                    }
                    SegmentIntersection::Overlapping(s) => {
                        hot.insert(self.grid.pixel_of(&s.source));
                        hot.insert(self.grid.pixel_of(&s.target));
                    }
                }
            }
        }
        hot
    }

    /// Initial chain of `seg`: its source pixel, the hot pixels met in
    /// between, its target pixel. A segment inside one pixel yields one key.
    fn thread(&self, seg: &Segment2, hot: &BTreeSet<PixelKey>) -> Vec<PixelKey> {
        let first = self.grid.pixel_of(&seg.source);
        let last = self.grid.pixel_of(&seg.target);
        if first == last {
            return vec![first];
        }
        let skip: HashSet<PixelKey> = [first.clone(), last.clone()].into_iter().collect();
        let mut chain = vec![first];
        chain.extend(self.pixels_met(seg, hot, &skip));
        chain.push(last);
        chain
    }

    /// Hot pixels met by `seg` and not in `skip`, ordered along the segment.
    fn pixels_met(
        &self,
        seg: &Segment2,
        hot: &BTreeSet<PixelKey>,
        skip: &HashSet<PixelKey>,
    ) -> Vec<PixelKey> {
        let a = self.grid.pixel_of(&seg.source);
        let b = self.grid.pixel_of(&seg.target);
        let (i_lo, i_hi) = if a.i <= b.i { (&a.i, &b.i) } else { (&b.i, &a.i) };
        let (j_lo, j_hi) = if a.j <= b.j { (&a.j, &b.j) } else { (&b.j, &a.j) };

        let mut met: Vec<(ExactRational, ExactRational, PixelKey)> = hot
            .iter()
            .filter(|k| &k.i >= i_lo && &k.i <= i_hi && &k.j >= j_lo && &k.j <= j_hi)
            .filter(|k| !skip.contains(*k))
            .filter_map(|k| {
                self.grid
                    .clip(k, seg)
                    .map(|(t0, t1)| (t0, t1, k.clone()))
            })
            .collect();
        met.sort();
        met.into_iter().map(|(_, _, k)| k).collect()
    }

    /// Re-threads every link of `chain` through the hot pixels it meets.
    /// Returns whether the chain grew.
    fn rethread(&self, chain: &mut Vec<PixelKey>, hot: &BTreeSet<PixelKey>) -> bool {
        if chain.len() < 2 {
            return false;
        }
        let mut seen: HashSet<PixelKey> = chain.iter().cloned().collect();
        let mut out = Vec::with_capacity(chain.len());
        let mut grew = false;

        for w in chain.windows(2) {
            out.push(w[0].clone());
            let link = Segment2::new(&self.grid.center(&w[0]), &self.grid.center(&w[1]));
            for k in self.pixels_met(&link, hot, &seen) {
                seen.insert(k.clone());
                out.push(k);
                grew = true;
            }
        }
        if let Some(last) = chain.last() {
            out.push(last.clone());
        }

        if grew {
            *chain = out;
        }
        grew
    }
}

/// Centers of the distinct vertices of `polylines`.
pub fn output_vertices(polylines: &[Polyline2]) -> BTreeSet<Point2> {
    polylines.iter().flat_map(|p| p.points.iter().cloned()).collect()
}
