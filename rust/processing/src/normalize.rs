// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Elevation normalization.
//!
//! Every curve is rebuilt from translated control points so that it lies on
//! the horizontal plane `z = elevation` with its plan shape unchanged. Arcs
//! are rebuilt through their parametric midpoint.

use curvewall_core::{CurveElement, ElementId};
use curvewall_geometry::{at_elevation, Arc, Curve, GeometryCurve, Line, PolyLine};

/// A curve ready for wall creation, remembering the element it came from
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedCurve {
    pub source: ElementId,
    pub curve: Curve,
}

/// Rebuild `geometry` at `elevation`.
///
/// Returns `Ok(None)` for kinds a wall cannot follow, and an error when the
/// flattened control points no longer define the curve (a vertical line
/// collapses to a point).
pub fn place_at_elevation(
    geometry: &GeometryCurve,
    elevation: f64,
) -> curvewall_geometry::Result<Option<Curve>> {
    let curve = match geometry {
        GeometryCurve::Line(line) => Curve::Line(Line::new(
            at_elevation(&line.start(), elevation),
            at_elevation(&line.end(), elevation),
        )?),
        GeometryCurve::Arc(arc) => Curve::Arc(Arc::from_three_points(
            at_elevation(&arc.start(), elevation),
            at_elevation(&arc.end(), elevation),
            at_elevation(&arc.midpoint(), elevation),
        )?),
        GeometryCurve::PolyLine(polyline) => Curve::PolyLine(PolyLine::new(
            polyline
                .points()
                .iter()
                .map(|point| at_elevation(point, elevation)),
        )?),
        GeometryCurve::Ellipse(_) | GeometryCurve::Spline(_) => return Ok(None),
    };
    Ok(Some(curve))
}

/// Place every element's curve at `elevation`, skipping what cannot be placed.
pub fn normalize_elevation<'a, I>(elements: I, elevation: f64) -> Vec<PlacedCurve>
where
    I: IntoIterator<Item = &'a CurveElement>,
{
    let mut placed = Vec::new();
    for element in elements {
        let Some(geometry) = &element.geometry else {
            tracing::warn!(element = %element.id, "Skipping curve element without geometry");
            continue;
        };
        match place_at_elevation(geometry, elevation) {
            Ok(Some(curve)) => placed.push(PlacedCurve {
                source: element.id,
                curve,
            }),
            Ok(None) => {
                tracing::warn!(
                    element = %element.id,
                    kind = %geometry.kind(),
                    "Unsupported curve type, skipping"
                );
            }
            Err(err) => {
                tracing::warn!(
                    element = %element.id,
                    kind = %geometry.kind(),
                    error = %err,
                    "Curve cannot be placed at level elevation, skipping"
                );
            }
        }
    }
    tracing::debug!(count = placed.len(), elevation, "Normalized curve elevations");
    placed
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use curvewall_geometry::{Ellipse, Point3, Vector3, GEOMETRY_TOLERANCE};

    fn p(x: f64, y: f64, z: f64) -> Point3<f64> {
        Point3::new(x, y, z)
    }

    #[test]
    fn line_moves_to_elevation() {
        let line = Line::new(p(0.0, 0.0, 4.0), p(3.0, 4.0, 9.0)).unwrap();
        let placed = place_at_elevation(&line.into(), 10.0).unwrap().unwrap();
        assert_eq!(placed.start(), p(0.0, 0.0, 10.0));
        assert_eq!(placed.end(), p(3.0, 4.0, 10.0));
        assert!(placed.lies_at_elevation(10.0, 0.0));
    }

    #[test]
    fn arc_keeps_plan_shape() {
        let arc = Arc::from_three_points(p(1.0, 0.0, 2.0), p(-1.0, 0.0, 2.0), p(0.0, 1.0, 2.0))
            .unwrap();
        let Curve::Arc(placed) = place_at_elevation(&arc.into(), -3.0).unwrap().unwrap() else {
            panic!("expected an arc");
        };
        assert_relative_eq!(placed.radius(), 1.0, epsilon = 1e-9);
        assert_relative_eq!(placed.length(), arc.length(), epsilon = 1e-9);
        assert_relative_eq!(placed.midpoint().y, 1.0, epsilon = 1e-9);
        assert!(Curve::Arc(placed).lies_at_elevation(-3.0, GEOMETRY_TOLERANCE));
    }

    #[test]
    fn polyline_translates_every_vertex() {
        let polyline =
            PolyLine::new([p(0.0, 0.0, 1.0), p(2.0, 0.0, 5.0), p(2.0, 2.0, -1.0)]).unwrap();
        let Curve::PolyLine(placed) = place_at_elevation(&polyline.into(), 0.0).unwrap().unwrap()
        else {
            panic!("expected a polyline");
        };
        assert_eq!(
            placed.points(),
            &[p(0.0, 0.0, 0.0), p(2.0, 0.0, 0.0), p(2.0, 2.0, 0.0)]
        );
    }

    #[test]
    fn skips_unsupported_and_collapsed_curves() {
        let elements = vec![
            CurveElement::new(
                ElementId(1),
                Ellipse {
                    center: Point3::origin(),
                    x_axis: Vector3::x(),
                    x_radius: 1.0,
                    y_radius: 1.0,
                },
            ),
            // Vertical line: both ends land on the same plan point
            CurveElement::new(
                ElementId(2),
                Line::new(p(1.0, 1.0, 0.0), p(1.0, 1.0, 8.0)).unwrap(),
            ),
            CurveElement::new(
                ElementId(3),
                Line::new(p(0.0, 0.0, 0.0), p(5.0, 0.0, 0.0)).unwrap(),
            ),
        ];
        let placed = normalize_elevation(&elements, 2.0);
        assert_eq!(placed.len(), 1);
        assert_eq!(placed[0].source, ElementId(3));
    }

    #[test]
    fn inputs_are_untouched() {
        let element = CurveElement::new(
            ElementId(1),
            Line::new(p(0.0, 0.0, 7.0), p(5.0, 0.0, 7.0)).unwrap(),
        );
        let before = element.clone();
        let _ = normalize_elevation([&element], 0.0);
        assert_eq!(element, before);
    }
}
