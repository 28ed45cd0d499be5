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

//! Exact planar arrangements built from mesh boundaries.
//!
//! Mesh edges or faces (holes included) are extracted into exact segments,
//! snap rounded onto a grid, inserted into a half-edge arrangement and
//! classified with the even-odd rule. Segments can be written back to a mesh.

pub mod arrangement;
pub mod config;
pub mod error;
pub mod geometry;
pub mod kernel;
pub mod mesh;
pub mod numeric;
pub mod pipeline;
pub mod snap_rounding;

pub use arrangement::{Arrangement, Classification, FaceInfo, build, classify};
pub use config::{DEFAULT_TOLERANCE, SnapRoundingConfig};
pub use error::{GeometryError, Result};
pub use geometry::{Point2, Polyline2, Segment2};
pub use mesh::{extract, to_mesh};
pub use pipeline::{MeshArrangement, SnapReport, arrangement_from_mesh, snap_rounding_2d};
pub use snap_rounding::snap_round;
