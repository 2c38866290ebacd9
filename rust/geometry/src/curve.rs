// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Curve sum types
//!
//! [`GeometryCurve`] is whatever a model element may carry. [`Curve`] is the
//! closed set of planar primitives a wall can be built along.

use nalgebra::Point3;

use crate::primitives::{Arc, Ellipse, Line, PolyLine, Spline};

/// Discriminant for curve shapes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CurveKind {
    Line,
    Arc,
    PolyLine,
    Ellipse,
    Spline,
}

impl CurveKind {
    /// Returns the kind name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            CurveKind::Line => "Line",
            CurveKind::Arc => "Arc",
            CurveKind::PolyLine => "PolyLine",
            CurveKind::Ellipse => "Ellipse",
            CurveKind::Spline => "Spline",
        }
    }
}

impl std::fmt::Display for CurveKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Any curve geometry a model element can hold
#[derive(Debug, Clone, PartialEq)]
pub enum GeometryCurve {
    Line(Line),
    Arc(Arc),
    PolyLine(PolyLine),
    Ellipse(Ellipse),
    Spline(Spline),
}

impl GeometryCurve {
    pub fn kind(&self) -> CurveKind {
        match self {
            GeometryCurve::Line(_) => CurveKind::Line,
            GeometryCurve::Arc(_) => CurveKind::Arc,
            GeometryCurve::PolyLine(_) => CurveKind::PolyLine,
            GeometryCurve::Ellipse(_) => CurveKind::Ellipse,
            GeometryCurve::Spline(_) => CurveKind::Spline,
        }
    }
}

impl From<Curve> for GeometryCurve {
    fn from(curve: Curve) -> Self {
        match curve {
            Curve::Line(line) => GeometryCurve::Line(line),
            Curve::Arc(arc) => GeometryCurve::Arc(arc),
            Curve::PolyLine(polyline) => GeometryCurve::PolyLine(polyline),
        }
    }
}

macro_rules! impl_from_primitive {
    ($target:ident: $($variant:ident),+) => {
        $(
            impl From<$variant> for $target {
                fn from(value: $variant) -> Self {
                    $target::$variant(value)
                }
            }
        )+
    };
}

impl_from_primitive!(GeometryCurve: Line, Arc, PolyLine, Ellipse, Spline);
impl_from_primitive!(Curve: Line, Arc, PolyLine);

/// Planar primitive a wall can be placed along
#[derive(Debug, Clone, PartialEq)]
pub enum Curve {
    Line(Line),
    Arc(Arc),
    PolyLine(PolyLine),
}

impl Curve {
    pub fn kind(&self) -> CurveKind {
        match self {
            Curve::Line(_) => CurveKind::Line,
            Curve::Arc(_) => CurveKind::Arc,
            Curve::PolyLine(_) => CurveKind::PolyLine,
        }
    }

    pub fn length(&self) -> f64 {
        match self {
            Curve::Line(line) => line.length(),
            Curve::Arc(arc) => arc.length(),
            Curve::PolyLine(polyline) => polyline.length(),
        }
    }

    pub fn start(&self) -> Point3<f64> {
        match self {
            Curve::Line(line) => line.start(),
            Curve::Arc(arc) => arc.start(),
            Curve::PolyLine(polyline) => polyline.start(),
        }
    }

    pub fn end(&self) -> Point3<f64> {
        match self {
            Curve::Line(line) => line.end(),
            Curve::Arc(arc) => arc.end(),
            Curve::PolyLine(polyline) => polyline.end(),
        }
    }

    /// True when every defining point sits within `tolerance` of `elevation`
    ///
    /// Arcs additionally need a vertical normal, otherwise the interior of the
    /// arc leaves the plane even when the endpoints are on it.
    pub fn lies_at_elevation(&self, elevation: f64, tolerance: f64) -> bool {
        let on_plane = |p: &Point3<f64>| (p.z - elevation).abs() <= tolerance;
        match self {
            Curve::Line(line) => on_plane(&line.start()) && on_plane(&line.end()),
            Curve::Arc(arc) => {
                on_plane(&arc.start())
                    && on_plane(&arc.end())
                    && on_plane(&arc.center())
                    && (1.0 - arc.normal().z.abs()) <= tolerance
            }
            Curve::PolyLine(polyline) => polyline.points().iter().all(on_plane),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn p(x: f64, y: f64, z: f64) -> Point3<f64> {
        Point3::new(x, y, z)
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(CurveKind::Line.as_str(), "Line");
        assert_eq!(CurveKind::PolyLine.to_string(), "PolyLine");
        assert_eq!(CurveKind::Ellipse.to_string(), "Ellipse");
    }

    #[test]
    fn test_curve_into_geometry_keeps_kind() {
        let curve = Curve::Line(Line::new(p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0)).unwrap());
        let geometry: GeometryCurve = curve.clone().into();
        assert_eq!(geometry.kind(), curve.kind());
    }

    #[test]
    fn test_length_dispatch() {
        let polyline = Curve::PolyLine(
            PolyLine::new([p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0), p(1.0, 1.0, 0.0)]).unwrap(),
        );
        assert_relative_eq!(polyline.length(), 2.0);
        assert_eq!(polyline.end(), p(1.0, 1.0, 0.0));
    }

    #[test]
    fn test_lies_at_elevation() {
        let flat = Curve::Line(Line::new(p(0.0, 0.0, 3.0), p(5.0, 0.0, 3.0)).unwrap());
        let sloped = Curve::Line(Line::new(p(0.0, 0.0, 3.0), p(5.0, 0.0, 4.0)).unwrap());
        assert!(flat.lies_at_elevation(3.0, 1e-9));
        assert!(!sloped.lies_at_elevation(3.0, 1e-9));

        // Endpoints on the plane but the arc rises out of it
        let vertical = Curve::Arc(
            Arc::from_three_points(p(1.0, 0.0, 0.0), p(-1.0, 0.0, 0.0), p(0.0, 0.0, 1.0))
                .unwrap(),
        );
        assert!(!vertical.lies_at_elevation(0.0, 1e-9));
    }
}
