// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Planar curve intersection
//!
//! Curves are compared in their XY projection. Callers are expected to have
//! moved both curves onto the same elevation first; arcs are treated as
//! horizontal circles.
//!
//! Every curve is broken into pieces (straight segments and arc spans) and
//! each piece pair is tested with the closed-form segment/segment,
//! segment/circle or circle/circle solution. Touching counts as intersecting.

use std::f64::consts::TAU;

use nalgebra::{Point2, Point3, Vector2};
use smallvec::SmallVec;

use crate::curve::Curve;
use crate::primitives::Arc;
use crate::GEOMETRY_TOLERANCE;

/// Relationship between two curves as point sets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetComparison {
    /// No common point
    Disjoint,
    /// At least one common point (crossing, touching or collinear overlap)
    Overlap,
    /// Same shape, possibly traversed in the opposite direction
    Equal,
}

impl SetComparison {
    #[inline]
    pub fn is_disjoint(self) -> bool {
        self == SetComparison::Disjoint
    }
}

impl Curve {
    /// Classify how this curve relates to `other` in plan
    pub fn intersect(&self, other: &Curve) -> SetComparison {
        if same_shape(self, other) {
            return SetComparison::Equal;
        }

        let ours = pieces(self);
        let theirs = pieces(other);
        let hit = ours
            .iter()
            .any(|a| theirs.iter().any(|b| pieces_intersect(a, b)));

        if hit {
            SetComparison::Overlap
        } else {
            SetComparison::Disjoint
        }
    }
}

#[inline]
fn plan(point: &Point3<f64>) -> Point2<f64> {
    Point2::new(point.x, point.y)
}

#[inline]
fn coincident(a: &Point3<f64>, b: &Point3<f64>) -> bool {
    (a - b).norm() <= GEOMETRY_TOLERANCE
}

fn same_shape(a: &Curve, b: &Curve) -> bool {
    match (a, b) {
        (Curve::Line(l1), Curve::Line(l2)) => {
            (coincident(&l1.start(), &l2.start()) && coincident(&l1.end(), &l2.end()))
                || (coincident(&l1.start(), &l2.end()) && coincident(&l1.end(), &l2.start()))
        }
        (Curve::Arc(a1), Curve::Arc(a2)) => {
            let ends_match = (coincident(&a1.start(), &a2.start())
                && coincident(&a1.end(), &a2.end()))
                || (coincident(&a1.start(), &a2.end()) && coincident(&a1.end(), &a2.start()));
            ends_match && coincident(&a1.midpoint(), &a2.midpoint())
        }
        (Curve::PolyLine(p1), Curve::PolyLine(p2)) => {
            let (v1, v2) = (p1.points(), p2.points());
            v1.len() == v2.len()
                && (v1.iter().zip(v2.iter()).all(|(a, b)| coincident(a, b))
                    || v1.iter().zip(v2.iter().rev()).all(|(a, b)| coincident(a, b)))
        }
        _ => false,
    }
}

/// Counter-clockwise angular span of a circle in plan
#[derive(Debug, Clone, Copy)]
struct ArcSpan {
    center: Point2<f64>,
    radius: f64,
    start: f64,
    sweep: f64,
}

impl ArcSpan {
    fn from_arc(arc: &Arc) -> Self {
        let center = plan(&arc.center());
        let angle = |p: &Point3<f64>| {
            let v = plan(p) - center;
            v.y.atan2(v.x)
        };
        // A clockwise arc in plan covers the same points as the counter-clockwise
        // span from its end back to its start.
        let start = if arc.normal().z >= 0.0 {
            angle(&arc.start())
        } else {
            angle(&arc.end())
        };
        Self {
            center,
            radius: arc.radius(),
            start,
            sweep: arc.sweep(),
        }
    }

    fn contains_angle(&self, angle: f64) -> bool {
        let rel = (angle - self.start).rem_euclid(TAU);
        let tol = GEOMETRY_TOLERANCE / self.radius;
        rel <= self.sweep + tol || rel >= TAU - tol
    }

    fn contains_point(&self, point: &Point2<f64>) -> bool {
        let v = point - self.center;
        self.contains_angle(v.y.atan2(v.x))
    }
}

#[derive(Debug, Clone, Copy)]
enum Piece {
    Segment(Point2<f64>, Point2<f64>),
    Arc(ArcSpan),
}

fn pieces(curve: &Curve) -> SmallVec<[Piece; 8]> {
    let mut out = SmallVec::new();
    match curve {
        Curve::Line(line) => out.push(Piece::Segment(plan(&line.start()), plan(&line.end()))),
        Curve::Arc(arc) => out.push(Piece::Arc(ArcSpan::from_arc(arc))),
        Curve::PolyLine(polyline) => {
            for (a, b) in polyline.segments() {
                let (a, b) = (plan(&a), plan(&b));
                // Repeated vertices contribute nothing
                if (b - a).norm() > GEOMETRY_TOLERANCE {
                    out.push(Piece::Segment(a, b));
                }
            }
        }
    }
    out
}

fn pieces_intersect(a: &Piece, b: &Piece) -> bool {
    match (a, b) {
        (Piece::Segment(p0, p1), Piece::Segment(q0, q1)) => {
            segments_intersect(*p0, *p1, *q0, *q1)
        }
        (Piece::Segment(p0, p1), Piece::Arc(span)) | (Piece::Arc(span), Piece::Segment(p0, p1)) => {
            segment_meets_arc(*p0, *p1, span)
        }
        (Piece::Arc(s1), Piece::Arc(s2)) => arcs_intersect(s1, s2),
    }
}

fn segments_intersect(p0: Point2<f64>, p1: Point2<f64>, q0: Point2<f64>, q1: Point2<f64>) -> bool {
    let r = p1 - p0;
    let s = q1 - q0;
    let qp = q0 - p0;
    let (r_len, s_len) = (r.norm(), s.norm());
    let denom = r.perp(&s);

    if denom.abs() <= GEOMETRY_TOLERANCE * r_len * s_len {
        // Parallel: only collinear segments can meet
        if qp.perp(&r).abs() / r_len > GEOMETRY_TOLERANCE {
            return false;
        }
        let r_sq = r.norm_squared();
        let t0 = qp.dot(&r) / r_sq;
        let t1 = t0 + s.dot(&r) / r_sq;
        let eps = GEOMETRY_TOLERANCE / r_len;
        return t0.max(t1) >= -eps && t0.min(t1) <= 1.0 + eps;
    }

    let t = qp.perp(&s) / denom;
    let u = qp.perp(&r) / denom;
    let (et, eu) = (GEOMETRY_TOLERANCE / r_len, GEOMETRY_TOLERANCE / s_len);
    (-et..=1.0 + et).contains(&t) && (-eu..=1.0 + eu).contains(&u)
}

fn segment_meets_arc(p0: Point2<f64>, p1: Point2<f64>, span: &ArcSpan) -> bool {
    let d = p1 - p0;
    let f = p0 - span.center;
    let len = d.norm();

    // Distance from the center to the carrier line
    if f.perp(&d).abs() / len > span.radius + GEOMETRY_TOLERANCE {
        return false;
    }

    let a = d.norm_squared();
    let b = 2.0 * f.dot(&d);
    let c = f.norm_squared() - span.radius * span.radius;
    let root = (b * b - 4.0 * a * c).max(0.0).sqrt();
    let eps = GEOMETRY_TOLERANCE / len;

    [(-b - root) / (2.0 * a), (-b + root) / (2.0 * a)]
        .into_iter()
        .filter(|t| (-eps..=1.0 + eps).contains(t))
        .any(|t| span.contains_point(&(p0 + d * t)))
}

fn arcs_intersect(s1: &ArcSpan, s2: &ArcSpan) -> bool {
    let delta: Vector2<f64> = s2.center - s1.center;
    let d = delta.norm();

    if d <= GEOMETRY_TOLERANCE {
        if (s1.radius - s2.radius).abs() > GEOMETRY_TOLERANCE {
            return false; // concentric
        }
        // Same circle: spans overlap when either holds an end of the other
        return s2.contains_angle(s1.start)
            || s2.contains_angle(s1.start + s1.sweep)
            || s1.contains_angle(s2.start)
            || s1.contains_angle(s2.start + s2.sweep);
    }

    if d > s1.radius + s2.radius + GEOMETRY_TOLERANCE
        || d < (s1.radius - s2.radius).abs() - GEOMETRY_TOLERANCE
    {
        return false;
    }

    let a = (s1.radius * s1.radius - s2.radius * s2.radius + d * d) / (2.0 * d);
    let h = (s1.radius * s1.radius - a * a).max(0.0).sqrt();
    let base = s1.center + delta * (a / d);
    let offset = Vector2::new(-delta.y, delta.x) * (h / d);

    [base + offset, base - offset]
        .iter()
        .any(|p| s1.contains_point(p) && s2.contains_point(p))
}
