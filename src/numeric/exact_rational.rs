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
use std::hash::{Hash, Hasher};
use std::ops::{Add, Div, Mul, Neg, Sub};

use num_traits::{One, ToPrimitive, Zero};
use rug::{Integer, Rational};

use crate::error::{GeometryError, Result};

/// Arbitrary-precision rational backed by GMP. Every topological decision in
/// the crate is taken on values of this type.
#[derive(Clone, Debug, Default)]
pub struct ExactRational(pub Rational);

impl ExactRational {
    pub fn from_num_den(num: i64, den: i64) -> Self {
        ExactRational(Rational::from((num, den)))
    }

    /// Exact conversion of a finite `f64`. Returns `None` for NaN and infinities.
    pub fn from_f64(value: f64) -> Option<Self> {
        Rational::from_f64(value).map(ExactRational)
    }

    pub fn from_integer(value: Integer) -> Self {
        ExactRational(Rational::from(value))
    }

    /// Lossy conversion for output. The numerator/denominator division is the
    /// only place a floating point rounding happens.
    pub fn to_f64_checked(&self) -> Result<f64> {
        let den = self.0.denom();
        if den.cmp0() == Ordering::Equal {
            return Err(GeometryError::Arithmetic(format!(
                "zero denominator converting {} to f64",
                self.0.numer()
            )));
        }
        if den.cmp0() == Ordering::Greater && *den == 1 {
            return Ok(self.0.numer().to_f64());
        }
        Ok(self.0.to_f64())
    }

    /// Largest integer not greater than `self`.
    pub fn floor_integer(&self) -> Integer {
        let (num, _) = self.0.clone().floor().into_numer_denom();
        num
    }

    pub fn abs(&self) -> Self {
        ExactRational(self.0.clone().abs())
    }

    /// -1, 0 or 1.
    pub fn signum(&self) -> i32 {
        match self.0.cmp0() {
            Ordering::Less => -1,
            Ordering::Equal => 0,
            Ordering::Greater => 1,
        }
    }

    pub fn is_positive(&self) -> bool {
        self.0.cmp0() == Ordering::Greater
    }

    pub fn is_negative(&self) -> bool {
        self.0.cmp0() == Ordering::Less
    }

    pub fn half() -> Self {
        Self::from_num_den(1, 2)
    }
}

impl<'a, 'b> Add<&'b ExactRational> for &'a ExactRational {
    type Output = ExactRational;

    fn add(self, rhs: &'b ExactRational) -> ExactRational {
        let mut result = self.0.clone();
        result += &rhs.0;
        ExactRational(result)
    }
}

impl<'a, 'b> Sub<&'b ExactRational> for &'a ExactRational {
    type Output = ExactRational;

    fn sub(self, rhs: &'b ExactRational) -> ExactRational {
        let mut result = self.0.clone();
        result -= &rhs.0;
        ExactRational(result)
    }
}

impl<'a, 'b> Mul<&'b ExactRational> for &'a ExactRational {
    type Output = ExactRational;

    fn mul(self, rhs: &'b ExactRational) -> ExactRational {
        let mut result = self.0.clone();
        result *= &rhs.0;
        ExactRational(result)
    }
}

impl<'a, 'b> Div<&'b ExactRational> for &'a ExactRational {
    type Output = ExactRational;

    // rug panics on division by zero; callers guard the divisor.
    fn div(self, rhs: &'b ExactRational) -> ExactRational {
        let mut result = self.0.clone();
        result /= &rhs.0;
        ExactRational(result)
    }
}

impl<'a> Neg for &'a ExactRational {
    type Output = ExactRational;

    fn neg(self) -> ExactRational {
        ExactRational(-self.0.clone())
    }
}

impl Add for ExactRational {
    type Output = ExactRational;

    fn add(mut self, rhs: ExactRational) -> ExactRational {
        self.0 += rhs.0;
        self
    }
}

impl Sub for ExactRational {
    type Output = ExactRational;

    fn sub(mut self, rhs: ExactRational) -> ExactRational {
        self.0 -= rhs.0;
        self
    }
}

impl Mul for ExactRational {
    type Output = ExactRational;

    fn mul(mut self, rhs: ExactRational) -> ExactRational {
        self.0 *= rhs.0;
        self
    }
}

impl Zero for ExactRational {
    fn zero() -> Self {
        ExactRational(Rational::new())
    }

    fn is_zero(&self) -> bool {
        self.0.cmp0() == Ordering::Equal
    }
}

impl One for ExactRational {
    fn one() -> Self {
        ExactRational(Rational::from(1))
    }
}

impl ToPrimitive for ExactRational {
    fn to_i64(&self) -> Option<i64> {
        self.0.clone().trunc().numer().to_i64()
    }

    fn to_u64(&self) -> Option<u64> {
        self.0.clone().trunc().numer().to_u64()
    }

    fn to_f64(&self) -> Option<f64> {
        self.to_f64_checked().ok()
    }
}

impl From<i32> for ExactRational {
    fn from(value: i32) -> Self {
        ExactRational(Rational::from(value))
    }
}

impl From<i64> for ExactRational {
    fn from(value: i64) -> Self {
        ExactRational(Rational::from(value))
    }
}

impl From<Rational> for ExactRational {
    fn from(value: Rational) -> Self {
        ExactRational(value)
    }
}

impl PartialEq for ExactRational {
    fn eq(&self, other: &ExactRational) -> bool {
        self.0 == other.0
    }
}

impl Eq for ExactRational {}

impl PartialOrd for ExactRational {
    fn partial_cmp(&self, other: &ExactRational) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ExactRational {
    fn cmp(&self, other: &ExactRational) -> Ordering {
        self.0.cmp(&other.0)
    }
}

impl Hash for ExactRational {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

impl fmt::Display for ExactRational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn floor_of_negative_fraction_rounds_down() {
        let r = ExactRational::from_num_den(-3, 2);
        assert_eq!(r.floor_integer(), Integer::from(-2));
        let r = ExactRational::from_num_den(7, 2);
        assert_eq!(r.floor_integer(), Integer::from(3));
    }

    #[test]
    fn f64_conversion_is_exact() {
        let r = ExactRational::from_f64(0.1).unwrap();
        assert_ne!(r, ExactRational::from_num_den(1, 10));
        assert_eq!(r.to_f64_checked().unwrap(), 0.1);
        assert!(ExactRational::from_f64(f64::NAN).is_none());
        assert!(ExactRational::from_f64(f64::INFINITY).is_none());
    }

    #[test]
    fn arithmetic_stays_exact() {
        let third = ExactRational::from_num_den(1, 3);
        let sum = &(&third + &third) + &third;
        assert_eq!(sum, ExactRational::one());
        assert!((&third - &ExactRational::one()).is_negative());
        assert_eq!((&third * &ExactRational::from(3)).signum(), 1);
    }
}
