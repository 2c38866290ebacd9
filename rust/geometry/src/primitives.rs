// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Curve primitives
//!
//! Lines, three-point arcs and polylines are the shapes a wall can be laid
//! out along. Ellipses and splines are carried so that model elements holding
//! them can be classified, but nothing downstream builds walls from them.

use std::f64::consts::TAU;

use nalgebra::{Point3, Vector3};
use smallvec::SmallVec;

use crate::error::{Error, Result};
use crate::GEOMETRY_TOLERANCE;

/// Copy of `point` with its Z coordinate replaced by `elevation`
#[inline]
pub fn at_elevation(point: &Point3<f64>, elevation: f64) -> Point3<f64> {
    Point3::new(point.x, point.y, elevation)
}

#[inline]
fn ensure_finite(point: &Point3<f64>, what: &'static str) -> Result<()> {
    if point.coords.iter().all(|c| c.is_finite()) {
        Ok(())
    } else {
        Err(Error::NonFinite(what))
    }
}

/// Bounded straight segment
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    start: Point3<f64>,
    end: Point3<f64>,
}

impl Line {
    /// Create a bound line; fails when the endpoints coincide
    pub fn new(start: Point3<f64>, end: Point3<f64>) -> Result<Self> {
        ensure_finite(&start, "line")?;
        ensure_finite(&end, "line")?;
        if (end - start).norm() < GEOMETRY_TOLERANCE {
            return Err(Error::DegenerateLine {
                tolerance: GEOMETRY_TOLERANCE,
            });
        }
        Ok(Self { start, end })
    }

    #[inline]
    pub fn start(&self) -> Point3<f64> {
        self.start
    }

    #[inline]
    pub fn end(&self) -> Point3<f64> {
        self.end
    }

    #[inline]
    pub fn length(&self) -> f64 {
        (self.end - self.start).norm()
    }

    /// Point at normalized parameter `t` (0 = start, 1 = end)
    pub fn evaluate(&self, t: f64) -> Point3<f64> {
        self.start + (self.end - self.start) * t
    }
}

/// Circular arc defined by its endpoints and one interior point
///
/// The arc runs counter-clockwise about `normal` from `start` to `end`.
/// Parameters are normalized: 0 is the start, 1 the end, 0.5 the point halfway
/// along the sweep.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arc {
    start: Point3<f64>,
    end: Point3<f64>,
    center: Point3<f64>,
    radius: f64,
    normal: Vector3<f64>,
    x_axis: Vector3<f64>,
    y_axis: Vector3<f64>,
    sweep: f64,
}

impl Arc {
    /// Build the unique arc from `start` to `end` passing through `through`
    pub fn from_three_points(
        start: Point3<f64>,
        end: Point3<f64>,
        through: Point3<f64>,
    ) -> Result<Self> {
        ensure_finite(&start, "arc")?;
        ensure_finite(&end, "arc")?;
        ensure_finite(&through, "arc")?;

        let a = start - through;
        let b = end - through;
        if a.norm() < GEOMETRY_TOLERANCE
            || b.norm() < GEOMETRY_TOLERANCE
            || (end - start).norm() < GEOMETRY_TOLERANCE
        {
            return Err(Error::CollinearArcPoints);
        }

        let axb = a.cross(&b);
        // |a x b| = |a||b| sin(angle); reject nearly straight triples
        if axb.norm() <= GEOMETRY_TOLERANCE * a.norm() * b.norm() {
            return Err(Error::CollinearArcPoints);
        }

        // Circumcenter of the triangle (start, end, through)
        let offset = (b * a.norm_squared() - a * b.norm_squared()).cross(&axb)
            / (2.0 * axb.norm_squared());
        let center = through + offset;
        let radius = (start - center).norm();

        // Points met in traversal order wind counter-clockwise about this normal
        let normal = (through - start).cross(&(end - through)).normalize();
        let x_axis = (start - center) / radius;
        let y_axis = normal.cross(&x_axis);

        let mut arc = Self {
            start,
            end,
            center,
            radius,
            normal,
            x_axis,
            y_axis,
            sweep: 0.0,
        };
        arc.sweep = arc.angle_of(&end);
        if arc.sweep <= 0.0 {
            arc.sweep = TAU;
        }
        Ok(arc)
    }

    /// Angle of `point` about the center, measured from the start direction in [0, 2π)
    pub fn angle_of(&self, point: &Point3<f64>) -> f64 {
        let v = point - self.center;
        v.dot(&self.y_axis).atan2(v.dot(&self.x_axis)).rem_euclid(TAU)
    }

    /// Point at normalized parameter `t` (0 = start, 1 = end)
    pub fn evaluate(&self, t: f64) -> Point3<f64> {
        let angle = self.sweep * t;
        self.center + (self.x_axis * angle.cos() + self.y_axis * angle.sin()) * self.radius
    }

    /// Parametric midpoint of the arc
    #[inline]
    pub fn midpoint(&self) -> Point3<f64> {
        self.evaluate(0.5)
    }

    #[inline]
    pub fn start(&self) -> Point3<f64> {
        self.start
    }

    #[inline]
    pub fn end(&self) -> Point3<f64> {
        self.end
    }

    #[inline]
    pub fn center(&self) -> Point3<f64> {
        self.center
    }

    #[inline]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    #[inline]
    pub fn normal(&self) -> Vector3<f64> {
        self.normal
    }

    /// Swept angle in radians, in (0, 2π]
    #[inline]
    pub fn sweep(&self) -> f64 {
        self.sweep
    }

    #[inline]
    pub fn length(&self) -> f64 {
        self.radius * self.sweep
    }
}

/// Open chain of straight segments through ordered vertices
#[derive(Debug, Clone, PartialEq)]
pub struct PolyLine {
    points: SmallVec<[Point3<f64>; 8]>,
}

impl PolyLine {
    /// Create a polyline; at least two vertices are required
    pub fn new<I>(points: I) -> Result<Self>
    where
        I: IntoIterator<Item = Point3<f64>>,
    {
        let points: SmallVec<[Point3<f64>; 8]> = points.into_iter().collect();
        if points.len() < 2 {
            return Err(Error::TooFewPoints(points.len()));
        }
        for point in &points {
            ensure_finite(point, "polyline")?;
        }
        Ok(Self { points })
    }

    #[inline]
    pub fn points(&self) -> &[Point3<f64>] {
        &self.points
    }

    #[inline]
    pub fn start(&self) -> Point3<f64> {
        self.points[0]
    }

    #[inline]
    pub fn end(&self) -> Point3<f64> {
        self.points[self.points.len() - 1]
    }

    /// Consecutive vertex pairs
    pub fn segments(&self) -> impl Iterator<Item = (Point3<f64>, Point3<f64>)> + '_ {
        self.points.windows(2).map(|w| (w[0], w[1]))
    }

    pub fn length(&self) -> f64 {
        self.segments().map(|(a, b)| (b - a).norm()).sum()
    }
}

/// Full ellipse (closed conic)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ellipse {
    pub center: Point3<f64>,
    pub x_axis: Vector3<f64>,
    pub x_radius: f64,
    pub y_radius: f64,
}

/// Free-form spline given by its control polygon
#[derive(Debug, Clone, PartialEq)]
pub struct Spline {
    pub control_points: Vec<Point3<f64>>,
    pub degree: u32,
}
