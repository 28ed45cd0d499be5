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

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Sub};

use crate::numeric::ExactRational;

/// Point with exact rational coordinates. Equality, ordering and hashing are
/// exact-value operations; no tolerance is ever involved.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Point2 {
    pub x: ExactRational,
    pub y: ExactRational,
}

impl Point2 {
    pub fn new<X, Y>(x: X, y: Y) -> Self
    where
        X: Into<ExactRational>,
        Y: Into<ExactRational>,
    {
        Self {
            x: x.into(),
            y: y.into(),
        }
    }

    /// Exact image of a floating point coordinate pair, `None` if either
    /// coordinate is not finite.
    pub fn from_f64(x: f64, y: f64) -> Option<Self> {
        Some(Self {
            x: ExactRational::from_f64(x)?,
            y: ExactRational::from_f64(y)?,
        })
    }

    pub fn dot(&self, other: &Point2) -> ExactRational {
        &(&self.x * &other.x) + &(&self.y * &other.y)
    }

    /// z component of the cross product of the two position vectors.
    pub fn cross(&self, other: &Point2) -> ExactRational {
        &(&self.x * &other.y) - &(&self.y * &other.x)
    }

    pub fn squared_distance(&self, other: &Point2) -> ExactRational {
        let d = other - self;
        d.dot(&d)
    }

    /// Lexicographic comparison, x first.
    pub fn lex_cmp(&self, other: &Point2) -> Ordering {
        self.x.cmp(&other.x).then_with(|| self.y.cmp(&other.y))
    }
}

impl<'a, 'b> Add<&'b Point2> for &'a Point2 {
    type Output = Point2;
    fn add(self, rhs: &'b Point2) -> Point2 {
        Point2 {
            x: &self.x + &rhs.x,
            y: &self.y + &rhs.y,
        }
    }
}

impl<'a, 'b> Sub<&'b Point2> for &'a Point2 {
    type Output = Point2;
    fn sub(self, rhs: &'b Point2) -> Point2 {
        Point2 {
            x: &self.x - &rhs.x,
            y: &self.y - &rhs.y,
        }
    }
}

impl PartialOrd for Point2 {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.lex_cmp(other))
    }
}

impl Ord for Point2 {
    fn cmp(&self, other: &Self) -> Ordering {
        self.lex_cmp(other)
    }
}

impl fmt::Display for Point2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i32, i32)> for Point2 {
    fn from((x, y): (i32, i32)) -> Self {
        Point2::new(x, y)
    }
}
