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

use rug::Integer;

use crate::config::validate_tolerance;
use crate::error::{GeometryError, Result};
use crate::geometry::{Point2, Segment2};
use crate::numeric::ExactRational;

/// Integer address of a grid cell. Cell `(i, j)` covers the half-open square
/// `[i*s, (i+1)*s) x [j*s, (j+1)*s)` for cell size `s`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PixelKey {
    pub i: Integer,
    pub j: Integer,
}

/// Uniform grid with an exact cell size.
#[derive(Debug, Clone)]
pub struct Grid {
    size: ExactRational,
}

impl Grid {
    pub fn new(tolerance: f64) -> Result<Self> {
        validate_tolerance(tolerance)?;
        let size =
            ExactRational::from_f64(tolerance).ok_or(GeometryError::InvalidTolerance(tolerance))?;
        Ok(Self { size })
    }

    pub fn cell_size(&self) -> &ExactRational {
        &self.size
    }

    pub fn pixel_of(&self, p: &Point2) -> PixelKey {
        PixelKey {
            i: (&p.x / &self.size).floor_integer(),
            j: (&p.y / &self.size).floor_integer(),
        }
    }

    /// Representative point of a cell.
    pub fn center(&self, key: &PixelKey) -> Point2 {
        let half = ExactRational::half();
        let cx = &ExactRational::from_integer(key.i.clone()) + &half;
        let cy = &ExactRational::from_integer(key.j.clone()) + &half;
        Point2 {
            x: &cx * &self.size,
            y: &cy * &self.size,
        }
    }

    fn bounds(&self, key: &PixelKey) -> [ExactRational; 4] {
        let x0 = &ExactRational::from_integer(key.i.clone()) * &self.size;
        let y0 = &ExactRational::from_integer(key.j.clone()) * &self.size;
        let x1 = &x0 + &self.size;
        let y1 = &y0 + &self.size;
        [x0, y0, x1, y1]
    }

    /// Parameter interval `[t0, t1]` (along `seg`, in `[0, 1]`) where the
    /// segment lies in the closed cell, or `None` when the segment misses the
    /// half-open cell.
    pub fn clip(&self, key: &PixelKey, seg: &Segment2) -> Option<(ExactRational, ExactRational)> {
        let [x0, y0, x1, y1] = self.bounds(key);
        let s = &seg.source;
        let d = seg.direction();

        let mut t_lo = ExactRational::from(0);
        let mut t_hi = ExactRational::from(1);

        // Liang-Barsky: each side contributes p * t <= q
        let sides = [
            (-&d.x, &s.x - &x0),
            (d.x.clone(), &x1 - &s.x),
            (-&d.y, &s.y - &y0),
            (d.y.clone(), &y1 - &s.y),
        ];
        for (p, q) in sides.iter() {
            match p.signum() {
                0 => {
                    if q.is_negative() {
                        return None;
                    }
                }
                sign => {
                    let r = q / p;
                    if sign < 0 {
                        if r > t_lo {
                            t_lo = r;
                        }
                    } else if r < t_hi {
                        t_hi = r;
                    }
                    if t_lo > t_hi {
                        return None;
                    }
                }
            }
        }

        // The clipped piece must not lie entirely on an open side
        let at = |t: &ExactRational| Point2 {
            x: &s.x + &(t * &d.x),
            y: &s.y + &(t * &d.y),
        };
        let (p0, p1) = (at(&t_lo), at(&t_hi));
        if (p0.x == x1 && p1.x == x1) || (p0.y == y1 && p1.y == y1) {
            return None;
        }
        Some((t_lo, t_hi))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid() -> Grid {
        Grid::new(1.0).unwrap()
    }

    #[test]
    fn pixel_of_uses_floor() {
        let g = grid();
        let k = g.pixel_of(&Point2::from_f64(-0.5, 2.0).unwrap());
        assert_eq!(k.i, Integer::from(-1));
        assert_eq!(k.j, Integer::from(2));
        assert_eq!(g.center(&k), Point2::from_f64(-0.5, 2.5).unwrap());
    }

    #[test]
    fn clip_respects_half_open_cells() {
        let g = grid();
        let diagonal = Segment2::new(&Point2::new(0, 0), &Point2::new(2, 2));
        let lower_left = PixelKey { i: 0.into(), j: 0.into() };
        let upper_right = PixelKey { i: 1.into(), j: 1.into() };
        let upper_left = PixelKey { i: 0.into(), j: 1.into() };
        let lower_right = PixelKey { i: 1.into(), j: 0.into() };

        assert!(g.clip(&lower_left, &diagonal).is_some());
        assert!(g.clip(&upper_right, &diagonal).is_some());
        // only the shared corner (1, 1) touches these, and it belongs to (1, 1)
        assert!(g.clip(&upper_left, &diagonal).is_none());
        assert!(g.clip(&lower_right, &diagonal).is_none());
    }

    #[test]
    fn segment_on_top_side_misses_cell() {
        let g = grid();
        let along_top = Segment2::new(&Point2::new(0, 1), &Point2::new(1, 1));
        let cell = PixelKey { i: 0.into(), j: 0.into() };
        assert!(g.clip(&cell, &along_top).is_none());
        let above = PixelKey { i: 0.into(), j: 1.into() };
        assert!(g.clip(&above, &along_top).is_some());
    }
}
