// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Overlap filtering between placed curves.

use crate::normalize::PlacedCurve;

/// Drop curves that intersect an earlier accepted curve.
///
/// Curves are scanned in order against the accepted list. A newcomer that
/// intersects anything is never accepted itself; while scanning, every
/// accepted curve it intersects and is strictly longer than gets removed.
/// So with an overlapping pair of lengths 10 and 4, order `[10, 4]` keeps
/// the 10 but order `[4, 10]` keeps neither.
///
/// Quadratic in the number of curves.
pub fn filter_overlapping_curves(curves: Vec<PlacedCurve>) -> Vec<PlacedCurve> {
    let total = curves.len();
    let mut accepted: Vec<PlacedCurve> = Vec::with_capacity(total);

    for candidate in curves {
        let candidate_length = candidate.curve.length();
        let mut overlap_found = false;

        accepted.retain(|existing| {
            if candidate.curve.intersect(&existing.curve).is_disjoint() {
                return true;
            }
            overlap_found = true;
            let replaced = candidate_length > existing.curve.length();
            tracing::debug!(
                candidate = %candidate.source,
                existing = %existing.source,
                removed_existing = replaced,
                "Overlapping curves"
            );
            !replaced
        });

        if overlap_found {
            tracing::debug!(curve = %candidate.source, "Curve overlaps, not accepted");
        } else {
            accepted.push(candidate);
        }
    }

    tracing::debug!(kept = accepted.len(), total, "Filtered overlapping curves");
    accepted
}

#[cfg(test)]
mod tests {
    use super::*;
    use curvewall_core::ElementId;
    use curvewall_geometry::{Curve, Line, Point3};

    fn placed(id: u64, x0: f64, y0: f64, x1: f64, y1: f64) -> PlacedCurve {
        PlacedCurve {
            source: ElementId(id),
            curve: Curve::Line(
                Line::new(Point3::new(x0, y0, 0.0), Point3::new(x1, y1, 0.0)).unwrap(),
            ),
        }
    }

    fn ids(curves: &[PlacedCurve]) -> Vec<u64> {
        curves.iter().map(|c| c.source.0).collect()
    }

    #[test]
    fn disjoint_curves_survive() {
        let kept = filter_overlapping_curves(vec![
            placed(1, 0.0, 0.0, 10.0, 0.0),
            placed(2, 0.0, 5.0, 10.0, 5.0),
            placed(3, 0.0, 10.0, 10.0, 10.0),
        ]);
        assert_eq!(ids(&kept), vec![1, 2, 3]);
    }

    #[test]
    fn shorter_newcomer_is_dropped() {
        let kept = filter_overlapping_curves(vec![
            placed(1, 0.0, 0.0, 10.0, 0.0),
            placed(2, 2.0, 0.0, 6.0, 0.0),
        ]);
        assert_eq!(ids(&kept), vec![1]);
    }

    #[test]
    fn longer_newcomer_removes_but_is_not_added() {
        let kept = filter_overlapping_curves(vec![
            placed(1, 2.0, 0.0, 6.0, 0.0),
            placed(2, 0.0, 0.0, 10.0, 0.0),
        ]);
        assert!(kept.is_empty());
    }

    #[test]
    fn equal_length_duplicate_keeps_first() {
        let kept = filter_overlapping_curves(vec![
            placed(1, 0.0, 0.0, 10.0, 0.0),
            placed(2, 10.0, 0.0, 0.0, 0.0),
        ]);
        assert_eq!(ids(&kept), vec![1]);
    }

    #[test]
    fn crossing_curve_only_affects_what_it_touches() {
        let kept = filter_overlapping_curves(vec![
            placed(1, 0.0, 0.0, 4.0, 0.0),
            placed(2, 20.0, 0.0, 24.0, 0.0),
            placed(3, 2.0, -5.0, 2.0, 5.0),
        ]);
        assert_eq!(ids(&kept), vec![2]);
    }
}
