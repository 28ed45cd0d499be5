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

use planar_arrangement::config::SnapRoundingConfig;
use planar_arrangement::error::GeometryError;
use planar_arrangement::geometry::{Point2, Segment2, SegmentIntersection, segment_segment_intersection};
use planar_arrangement::snap_rounding::{
    Grid, output_vertices, snap_round, snap_round_segments, snap_round_with,
};
use proptest::prelude::*;

fn seg(x1: f64, y1: f64, x2: f64, y2: f64) -> Segment2 {
    Segment2::from_f64(x1, y1, x2, y2).unwrap()
}

#[test]
fn test_rejects_non_positive_tolerance() {
    let segs = vec![seg(0.0, 0.0, 1.0, 1.0)];
    assert_eq!(snap_round(&segs, 0.0), Err(GeometryError::InvalidTolerance(0.0)));
    assert_eq!(snap_round(&segs, -0.5), Err(GeometryError::InvalidTolerance(-0.5)));
    assert!(snap_round(&segs, f64::INFINITY).is_err());
    // rejected before looking at the input
    assert!(snap_round(&[], -1.0).is_err());
}

#[test]
fn test_empty_input_gives_empty_output() {
    assert!(snap_round(&[], 0.1).unwrap().is_empty());
    let degenerate = vec![seg(1.0, 1.0, 1.0, 1.0)];
    assert!(snap_round(&degenerate, 0.1).unwrap().is_empty());
}

#[test]
fn test_segment_inside_one_pixel_is_dropped() {
    let segs = vec![seg(0.1, 0.1, 0.4, 0.3), seg(0.0, 0.0, 3.0, 0.0)];
    let out = snap_round(&segs, 1.0).unwrap();
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].points.first(), Some(&Point2::from_f64(0.5, 0.5).unwrap()));
    assert_eq!(out[0].points.last(), Some(&Point2::from_f64(3.5, 0.5).unwrap()));
}

#[test]
fn test_crossing_becomes_shared_vertex() {
    let segs = vec![seg(0.0, 0.0, 10.0, 10.0), seg(0.0, 10.0, 10.0, 0.0)];
    let out = snap_round(&segs, 1.0).unwrap();
    assert_eq!(out.len(), 2);
    let center = Point2::from_f64(5.5, 5.5).unwrap();
    assert!(out.iter().all(|pl| pl.points.contains(&center)));
    assert!(out.iter().all(|pl| pl.len() == 3));
}

#[test]
fn test_near_coincident_endpoints_merge() {
    let segs = vec![
        seg(0.0, 0.0, 0.503, 0.0),
        seg(0.503 + 1e-9, 1e-9, 0.503, 1.0),
    ];
    let out = snap_round_segments(&segs, 0.01).unwrap();
    assert_eq!(out.len(), 2);
    assert_eq!(out[0].target, out[1].source);
}

#[test]
fn test_bounded_rounds_still_produce_output() {
    let config = SnapRoundingConfig::new(0.5).unwrap().with_max_rounds(1).unwrap();
    let segs = vec![
        seg(0.0, 0.0, 7.0, 3.0),
        seg(0.0, 3.0, 7.0, 0.0),
        seg(3.2, -1.0, 3.3, 4.0),
    ];
    let bounded = snap_round_with(&segs, &config).unwrap();
    let free = snap_round(&segs, 0.5).unwrap();
    assert_eq!(bounded.len(), 3);
    assert_eq!(free.len(), 3);
}

#[test]
fn test_every_input_vertex_survives_as_a_hot_pixel_center() {
    let segs = vec![seg(0.12, 0.49, 2.51, 0.49), seg(2.51, 0.49, 2.51, 3.0)];
    let grid = Grid::new(0.25).unwrap();
    let out = snap_round(&segs, 0.25).unwrap();
    let vertices = output_vertices(&out);
    for s in &segs {
        for p in [&s.source, &s.target] {
            assert!(vertices.contains(&grid.center(&grid.pixel_of(p))));
        }
    }
}

#[test]
fn test_rethreading_picks_up_pixel_missed_by_input() {
    // The input only touches the corner of cell (4, 0), which belongs to
    // (4, 1). The link between the snapped endpoints runs lower and crosses
    // (4, 0), made hot by the second segment.
    let segs = vec![seg(0.0, 0.75, 8.0, 1.25), seg(4.5, 0.25, 4.5, -3.0)];
    let detour = Point2::from_f64(4.5, 0.5).unwrap();

    for config in [
        SnapRoundingConfig::new(1.0).unwrap(),
        SnapRoundingConfig::new(1.0).unwrap().with_max_rounds(1).unwrap(),
    ] {
        let out = snap_round_with(&segs, &config).unwrap();
        assert_eq!(out.len(), 2);
        assert_eq!(
            out[0].points,
            vec![
                Point2::from_f64(0.5, 0.5).unwrap(),
                detour.clone(),
                Point2::from_f64(8.5, 1.5).unwrap(),
            ]
        );
        assert_eq!(out[1].points.first(), Some(&detour));
    }
}

fn is_endpoint(p: &Point2, s: &Segment2) -> bool {
    p == &s.source || p == &s.target
}

proptest! {
    #[test]
    fn prop_output_links_meet_only_at_shared_endpoints(
        raw in prop::collection::vec((-12i32..12, -12i32..12, -12i32..12, -12i32..12), 1..7),
    ) {
        let segs: Vec<Segment2> = raw
            .iter()
            .map(|&(a, b, c, d)| seg(a as f64 * 0.9, b as f64 * 0.8, c as f64 * 1.1, d as f64 * 0.7))
            .collect();
        let mut links: Vec<Segment2> = snap_round_segments(&segs, 0.7)
            .unwrap()
            .iter()
            .map(Segment2::canonical)
            .collect();
        links.sort();
        links.dedup();

        for (i, a) in links.iter().enumerate() {
            for b in &links[i + 1..] {
                match segment_segment_intersection(a, b) {
                    SegmentIntersection::None => {}
                    SegmentIntersection::Point(p) => {
                        prop_assert!(is_endpoint(&p, a) && is_endpoint(&p, b), "{} and {} meet at {}", a, b, p);
                    }
                    SegmentIntersection::Overlapping(o) => {
                        prop_assert!(false, "{} and {} overlap along {}", a, b, o);
                    }
                }
            }
        }
    }

    #[test]
    fn prop_distinct_output_vertices_lie_in_distinct_pixels(
        raw in prop::collection::vec((-40i32..40, -40i32..40, -40i32..40, -40i32..40), 1..6),
        tol_idx in 0usize..3,
    ) {
        let tol = [0.5, 1.0, 3.0][tol_idx];
        let segs: Vec<Segment2> = raw
            .iter()
            .map(|&(a, b, c, d)| seg(a as f64 * 0.37, b as f64 * 0.37, c as f64 * 0.41, d as f64 * 0.29))
            .collect();
        let grid = Grid::new(tol).unwrap();
        let out = snap_round(&segs, tol).unwrap();
        let vertices: Vec<Point2> = output_vertices(&out).into_iter().collect();

        for (i, p) in vertices.iter().enumerate() {
            // every output vertex is the center of its own pixel
            prop_assert_eq!(&grid.center(&grid.pixel_of(p)), p);
            for q in &vertices[i + 1..] {
                prop_assert_ne!(grid.pixel_of(p), grid.pixel_of(q));
                prop_assert!(p.squared_distance(q) >= grid.cell_size() * grid.cell_size());
            }
        }
        for pl in &out {
            prop_assert!(pl.len() >= 2);
        }
    }
}
