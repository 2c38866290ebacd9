// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Curvewall geometry
//!
//! Planar curve primitives for laying out walls: three-point arcs, lines and
//! polylines, plus the plan-view intersection test used to find overlapping
//! layout curves. Built on nalgebra points.

pub mod curve;
pub mod error;
pub mod intersect;
pub mod primitives;

// Re-export nalgebra types for convenience
pub use nalgebra::{Point2, Point3, Vector3};

pub use curve::{Curve, CurveKind, GeometryCurve};
pub use error::{Error, Result};
pub use intersect::SetComparison;
pub use primitives::{at_elevation, Arc, Ellipse, Line, PolyLine, Spline};

/// Distance below which two points are considered the same
pub const GEOMETRY_TOLERANCE: f64 = 1e-6;
