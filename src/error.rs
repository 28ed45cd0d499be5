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

//! Error and condition type shared by every stage of the pipeline.
//!
//! Fatal conditions are returned as `Err`. Conditions raised while reading
//! untrusted mesh input or classifying a malformed arrangement are collected
//! on the returned report instead, next to the best-effort result.

use thiserror::Error;

use crate::mesh::ComponentKind;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum GeometryError {
    /// Extraction was asked for a component kind it cannot turn into segments.
    #[error("view `{view}` holds {kind:?} components, which cannot be converted to segments")]
    UnsupportedSelector { view: String, kind: ComponentKind },
    /// Snap rounding needs a strictly positive, finite pixel size.
    #[error("invalid snap rounding tolerance {0}, expected a finite value > 0")]
    InvalidTolerance(f64),
    /// A face was reached through two boundaries whose levels do not differ by one.
    #[error("inconsistent nesting at face {face}: assigned level {assigned}, reached with level {reached}")]
    InconsistentNesting {
        face: usize,
        assigned: usize,
        reached: usize,
    },
    /// Exact-to-float conversion hit an invalid rational.
    #[error("arithmetic error: {0}")]
    Arithmetic(String),
    /// A node coordinate could not be represented exactly (NaN or infinite).
    #[error("non-finite node coordinate ({x}, {y})")]
    NonFiniteCoordinate { x: f64, y: f64 },
    /// A configuration field is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    /// A mesh component refers to a node the mesh does not hold.
    #[error("missing node {id}")]
    MissingNode { id: usize },
}

impl GeometryError {
    /// Whether the condition only degrades a result instead of aborting the call.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            GeometryError::UnsupportedSelector { .. }
                | GeometryError::InconsistentNesting { .. }
                | GeometryError::NonFiniteCoordinate { .. }
                | GeometryError::MissingNode { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, GeometryError>;
