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

//! Snap rounding configuration.

use crate::error::{GeometryError, Result};

/// Grid cell size used when no tolerance is given.
pub const DEFAULT_TOLERANCE: f64 = 0.01;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnapRoundingConfig {
    /// Side length of a hot pixel.
    pub tolerance: f64,
    /// Upper bound on re-threading rounds. `None` iterates until no link
    /// crosses a new hot pixel.
    pub max_rounds: Option<usize>,
}

impl SnapRoundingConfig {
    pub fn new(tolerance: f64) -> Result<Self> {
        validate_tolerance(tolerance)?;
        Ok(Self {
            tolerance,
            max_rounds: None,
        })
    }

    pub fn with_max_rounds(mut self, rounds: usize) -> Result<Self> {
        if rounds == 0 {
            return Err(GeometryError::InvalidConfig(
                "max_rounds must allow at least one round".to_string(),
            ));
        }
        self.max_rounds = Some(rounds);
        Ok(self)
    }

    pub fn validate(&self) -> Result<()> {
        validate_tolerance(self.tolerance)
    }
}

impl Default for SnapRoundingConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            max_rounds: None,
        }
    }
}

pub(crate) fn validate_tolerance(tolerance: f64) -> Result<()> {
    if tolerance.is_finite() && tolerance > 0.0 {
        Ok(())
    } else {
        Err(GeometryError::InvalidTolerance(tolerance))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_positive_tolerance() {
        assert_eq!(
            SnapRoundingConfig::new(0.0),
            Err(GeometryError::InvalidTolerance(0.0))
        );
        assert!(SnapRoundingConfig::new(-1.0).is_err());
        assert!(SnapRoundingConfig::new(f64::NAN).is_err());
        assert!(SnapRoundingConfig::new(1e-3).is_ok());
    }

    #[test]
    fn zero_rounds_is_rejected() {
        let cfg = SnapRoundingConfig::default();
        assert!(cfg.with_max_rounds(0).is_err());
        assert_eq!(cfg.with_max_rounds(3).unwrap().max_rounds, Some(3));
    }
}
