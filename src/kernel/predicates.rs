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

use crate::error::Result;
use crate::geometry::{Point2, Segment2};
use crate::kernel::orientation::orient2d;

/// Exact point equality.
pub fn points_equal(p1: &Point2, p2: &Point2) -> bool {
    p1.x == p2.x && p1.y == p2.y
}

/// True iff the segment endpoints coincide.
pub fn is_degenerate(seg: &Segment2) -> bool {
    points_equal(&seg.source, &seg.target)
}

pub fn are_collinear(a: &Point2, b: &Point2, c: &Point2) -> bool {
    orient2d(a, b, c).signum() == 0
}

/// Closed test: endpoints count as on the segment.
pub fn is_point_on_segment(p: &Point2, seg: &Segment2) -> bool {
    // 1.  If P, A, B are not collinear, P cannot lie on AB
    if !are_collinear(&seg.source, &seg.target, p) {
        return false;
    }

    // 2.  P must lie in the bounding box of AB on both axes
    let (a, b) = (&seg.source, &seg.target);
    let (min_x, max_x) = if a.x < b.x { (&a.x, &b.x) } else { (&b.x, &a.x) };
    let (min_y, max_y) = if a.y < b.y { (&a.y, &b.y) } else { (&b.y, &a.y) };

    &p.x >= min_x && &p.x <= max_x && &p.y >= min_y && &p.y <= max_y
}

/// Lossy conversion to floating point, the only place coordinates are rounded.
pub fn to_float(p: &Point2) -> Result<(f64, f64)> {
    Ok((p.x.to_f64_checked()?, p.y.to_f64_checked()?))
}

/// Crossing-number containment of `p` in the closed chain `ring` (first point
/// not repeated). `p` must not lie on the chain; the result is then exact.
pub fn point_in_ring(p: &Point2, ring: &[Point2]) -> bool {
    let n = ring.len();
    if n < 3 {
        return false;
    }
    let mut inside = false;
    for i in 0..n {
        let a = &ring[i];
        let b = &ring[(i + 1) % n];
        if (a.y > p.y) != (b.y > p.y) {
            // x coordinate where edge AB crosses the horizontal through p
            let t = &(&p.y - &a.y) / &(&b.y - &a.y);
            let x = &a.x + &(&t * &(&b.x - &a.x));
            if p.x < x {
                inside = !inside;
            }
        }
    }
    inside
}
