// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::f64::consts::TAU;

use approx::relative_eq;
use curvewall_core::{CurveElement, ElementId, WallCategory};
use curvewall_geometry::{Arc, Curve, GeometryCurve, Line, PolyLine, Point3, Spline};
use curvewall_processing::{
    filter_overlapping_curves, normalize_elevation, validate_curve_elements, PlacedCurve,
};
use proptest::prelude::*;

fn coord() -> impl Strategy<Value = f64> {
    -1000.0..1000.0f64
}

fn point() -> impl Strategy<Value = Point3<f64>> {
    (coord(), coord(), coord()).prop_map(|(x, y, z)| Point3::new(x, y, z))
}

/// Line whose plan projection is at least a unit long
fn line() -> impl Strategy<Value = Line> {
    (point(), 1.0..500.0f64, 0.0..TAU, coord()).prop_map(
        |(start, length, angle, z)| {
            let end = Point3::new(
                start.x + length * angle.cos(),
                start.y + length * angle.sin(),
                z,
            );
            Line::new(start, end).unwrap()
        },
    )
}

fn polyline() -> impl Strategy<Value = PolyLine> {
    prop::collection::vec(point(), 2..8).prop_filter_map("distinct vertices", |points| {
        let distinct = points
            .windows(2)
            .all(|w| (w[1].xy() - w[0].xy()).norm() > 1e-3);
        distinct.then(|| PolyLine::new(points).ok()).flatten()
    })
}

/// Arc through three points on a plan circle, each lifted to its own height
fn arc() -> impl Strategy<Value = Arc> {
    (
        (coord(), coord(), 10.0..200.0f64),
        (0.0..TAU, 0.5..(TAU - 0.5)),
        (coord(), -20.0..20.0f64, -20.0..20.0f64, -20.0..20.0f64),
    )
        .prop_filter_map(
            "non-collinear points",
            |((cx, cy, radius), (from, sweep), (z, dz0, dz1, dz2))| {
                let at = |angle: f64, dz: f64| {
                    Point3::new(cx + radius * angle.cos(), cy + radius * angle.sin(), z + dz)
                };
                Arc::from_three_points(
                    at(from, dz0),
                    at(from + sweep, dz1),
                    at(from + sweep / 2.0, dz2),
                )
                .ok()
            },
        )
}

fn close(a: f64, b: f64) -> bool {
    relative_eq!(a, b, epsilon = 1e-9, max_relative = 1e-9)
}

fn same_plan_point(a: &Point3<f64>, b: &Point3<f64>) -> bool {
    close(a.x, b.x) && close(a.y, b.y)
}

#[derive(Debug, Clone)]
enum Input {
    Line(Line),
    Arc(Arc),
    PolyLine(PolyLine),
    Spline,
    Empty,
}

fn input() -> impl Strategy<Value = Input> {
    prop_oneof![
        line().prop_map(Input::Line),
        arc().prop_map(Input::Arc),
        polyline().prop_map(Input::PolyLine),
        Just(Input::Spline),
        Just(Input::Empty),
    ]
}

fn element(id: u64, input: &Input) -> CurveElement {
    let id = ElementId(id);
    match input {
        Input::Line(line) => CurveElement::new(id, line.clone()),
        Input::Arc(arc) => CurveElement::new(id, *arc),
        Input::PolyLine(polyline) => CurveElement::new(id, polyline.clone()),
        Input::Spline => CurveElement::new(
            id,
            Spline {
                control_points: vec![Point3::origin(), Point3::new(1.0, 1.0, 1.0)],
                degree: 2,
            },
        ),
        Input::Empty => CurveElement::without_geometry(id),
    }
}

fn plan(points: &[Point3<f64>]) -> Vec<(f64, f64)> {
    points.iter().map(|p| (p.x, p.y)).collect()
}

fn control_points(curve: &Curve) -> Vec<Point3<f64>> {
    match curve {
        Curve::Line(line) => vec![line.start(), line.end()],
        Curve::Arc(arc) => vec![arc.start(), arc.end(), arc.midpoint(), arc.center()],
        Curve::PolyLine(polyline) => polyline.points().to_vec(),
    }
}

/// Equal up to rounding: rebuilding an arc from its midpoint is not bit-exact
fn same_curve(a: &Curve, b: &Curve) -> bool {
    match (a, b) {
        (Curve::Arc(a), Curve::Arc(b)) => {
            a.start() == b.start()
                && a.end() == b.end()
                && same_plan_point(&a.midpoint(), &b.midpoint())
                && close(a.midpoint().z, b.midpoint().z)
                && close(a.length(), b.length())
        }
        _ => a == b,
    }
}

proptest! {
    #[test]
    fn validator_keeps_supported_elements_in_order(
        inputs in prop::collection::vec(input(), 0..12),
    ) {
        let elements: Vec<CurveElement> = inputs
            .iter()
            .enumerate()
            .map(|(i, input)| element(i as u64, input))
            .collect();
        let expected: Vec<ElementId> = inputs
            .iter()
            .enumerate()
            .filter(|(_, input)| {
                matches!(input, Input::Line(_) | Input::Arc(_) | Input::PolyLine(_))
            })
            .map(|(i, _)| ElementId(i as u64))
            .collect();

        match validate_curve_elements(&elements, WallCategory::Exterior, true) {
            Ok(valid) => {
                let ids: Vec<ElementId> = valid.iter().map(|e| e.id).collect();
                prop_assert_eq!(ids, expected);
            }
            Err(_) => prop_assert!(expected.is_empty()),
        }
    }

    #[test]
    fn normalized_curves_sit_at_elevation_with_plan_unchanged(
        lines in prop::collection::vec(line(), 1..6),
        arcs in prop::collection::vec(arc(), 0..4),
        polylines in prop::collection::vec(polyline(), 0..4),
        elevation in coord(),
    ) {
        let mut elements: Vec<CurveElement> = Vec::new();
        for line in &lines {
            elements.push(CurveElement::new(ElementId(elements.len() as u64), line.clone()));
        }
        for arc in &arcs {
            elements.push(CurveElement::new(ElementId(elements.len() as u64), *arc));
        }
        for polyline in &polylines {
            let id = ElementId(elements.len() as u64);
            elements.push(CurveElement::new(id, polyline.clone()));
        }

        let placed = normalize_elevation(&elements, elevation);
        prop_assert_eq!(placed.len(), elements.len());

        for (placed, element) in placed.iter().zip(&elements) {
            prop_assert_eq!(placed.source, element.id);
            let after = control_points(&placed.curve);
            prop_assert!(after.iter().all(|p| close(p.z, elevation)));

            match (element.geometry.as_ref().unwrap(), &placed.curve) {
                (GeometryCurve::Line(line), _) => {
                    prop_assert_eq!(plan(&after), plan(&[line.start(), line.end()]));
                }
                (GeometryCurve::PolyLine(polyline), _) => {
                    prop_assert_eq!(plan(&after), plan(polyline.points()));
                }
                (GeometryCurve::Arc(original), Curve::Arc(flat)) => {
                    prop_assert_eq!(
                        plan(&[flat.start(), flat.end()]),
                        plan(&[original.start(), original.end()])
                    );
                    // The flattened arc still runs through the original midpoint in plan
                    let mid = original.midpoint();
                    let reach = (mid.xy() - flat.center().xy()).norm();
                    prop_assert!(close(reach, flat.radius()));
                    prop_assert!(close(flat.normal().z.abs(), 1.0));
                }
                (geometry, curve) => {
                    prop_assert!(false, "{:?} placed as {:?}", geometry.kind(), curve.kind());
                }
            }
        }
    }

    #[test]
    fn normalization_is_idempotent(
        line in line(),
        arc in arc(),
        polyline in polyline(),
        elevation in coord(),
    ) {
        let elements = vec![
            CurveElement::new(ElementId(1), line),
            CurveElement::new(ElementId(2), arc),
            CurveElement::new(ElementId(3), polyline),
        ];
        let once = normalize_elevation(&elements, elevation);
        prop_assert_eq!(once.len(), 3);

        let again_input: Vec<CurveElement> = once
            .iter()
            .map(|p| CurveElement::new(p.source, p.curve.clone()))
            .collect();
        let twice = normalize_elevation(&again_input, elevation);
        prop_assert_eq!(twice.len(), once.len());
        for (first, second) in once.iter().zip(&twice) {
            prop_assert_eq!(first.source, second.source);
            prop_assert!(
                same_curve(&first.curve, &second.curve),
                "{:?} != {:?}",
                first.curve,
                second.curve
            );
        }
    }

    #[test]
    fn parallel_rows_never_overlap(count in 1usize..10, length in 1.0..100.0f64) {
        let curves: Vec<PlacedCurve> = (0..count)
            .map(|i| PlacedCurve {
                source: ElementId(i as u64),
                curve: Curve::Line(
                    Line::new(
                        Point3::new(0.0, i as f64 * 5.0, 0.0),
                        Point3::new(length, i as f64 * 5.0, 0.0),
                    )
                    .unwrap(),
                ),
            })
            .collect();
        let kept = filter_overlapping_curves(curves.clone());
        prop_assert_eq!(kept, curves);
    }
}
