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

use crate::{
    geometry::{Point2, Segment2},
    kernel::{is_point_on_segment, orient2d},
};

#[derive(Debug, Clone, PartialEq)]
pub enum SegmentIntersection {
    None,
    Point(Point2),
    Overlapping(Segment2),
}

/// Exact intersection of two closed segments. Overlaps are reported with
/// endpoints in lexicographic order.
pub fn segment_segment_intersection(seg1: &Segment2, seg2: &Segment2) -> SegmentIntersection {
    let a = &seg1.source;
    let b = &seg1.target;
    let c = &seg2.source;
    let d = &seg2.target;

    if seg1.is_degenerate() {
        return if is_point_on_segment(a, seg2) {
            SegmentIntersection::Point(a.clone())
        } else {
            SegmentIntersection::None
        };
    }
    if seg2.is_degenerate() {
        return if is_point_on_segment(c, seg1) {
            SegmentIntersection::Point(c.clone())
        } else {
            SegmentIntersection::None
        };
    }

    let o1 = orient2d(a, b, c);
    let o2 = orient2d(a, b, d);
    let s1 = o1.signum();
    let s2 = o2.signum();

    if s1 == 0 && s2 == 0 {
        // Collinear case: points on a common line are ordered lexicographically
        let (lo1, hi1) = if a < b { (a, b) } else { (b, a) };
        let (lo2, hi2) = if c < d { (c, d) } else { (d, c) };
        let lo = if lo1 > lo2 { lo1 } else { lo2 };
        let hi = if hi1 < hi2 { hi1 } else { hi2 };
        return match lo.cmp(hi) {
            std::cmp::Ordering::Greater => SegmentIntersection::None,
            std::cmp::Ordering::Equal => SegmentIntersection::Point(lo.clone()),
            std::cmp::Ordering::Less => SegmentIntersection::Overlapping(Segment2::new(lo, hi)),
        };
    }

    let o3 = orient2d(c, d, a);
    let o4 = orient2d(c, d, b);
    let s3 = o3.signum();
    let s4 = o4.signum();

    if s1 * s2 > 0 || s3 * s4 > 0 {
        return SegmentIntersection::None;
    }

    // Touching cases resolve to an input endpoint, no division needed
    if s1 == 0 {
        return SegmentIntersection::Point(c.clone());
    }
    if s2 == 0 {
        return SegmentIntersection::Point(d.clone());
    }
    if s3 == 0 {
        return SegmentIntersection::Point(a.clone());
    }
    if s4 == 0 {
        return SegmentIntersection::Point(b.clone());
    }

    // Proper crossing: a + t (b - a) with t = o3 / (o3 - o4)
    let t = &o3 / &(&o3 - &o4);
    let dir = b - a;
    SegmentIntersection::Point(Point2 {
        x: &a.x + &(&t * &dir.x),
        y: &a.y + &(&t * &dir.y),
    })
}

pub fn do_intersect(seg1: &Segment2, seg2: &Segment2) -> bool {
    !matches!(
        segment_segment_intersection(seg1, seg2),
        SegmentIntersection::None
    )
}
