// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Scene file: levels, wall styles and the curves picked for each category.
//!
//! ```json
//! {
//!   "levels": [{ "name": "Level 1", "elevation": 0.0 }],
//!   "wall_styles": ["Exterior - Brick", "Interior - Partition"],
//!   "exterior": {
//!     "style": "Exterior - Brick",
//!     "curves": [
//!       { "id": 1, "geometry": { "type": "line", "start": { "x": 0, "y": 0 }, "end": { "x": 20, "y": 0 } } }
//!     ]
//!   },
//!   "interior": { "style": "Interior - Partition", "curves": [] }
//! }
//! ```

use std::path::Path;

use anyhow::{Context, Result};
use curvewall_core::{CurveElement, Document, ElementId};
use curvewall_geometry::{Arc, Ellipse, GeometryCurve, Line, PolyLine, Point3, Spline, Vector3};
use curvewall_processing::{CategoryInput, WallRequest};
use serde::{Deserialize, Serialize};

/// Point in model coordinates; `z` defaults to zero
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointDto {
    pub x: f64,
    pub y: f64,
    #[serde(default)]
    pub z: f64,
}

impl PointDto {
    pub fn to_nalgebra(&self) -> Point3<f64> {
        Point3::new(self.x, self.y, self.z)
    }

    pub fn from_nalgebra(p: &Point3<f64>) -> Self {
        Self {
            x: p.x,
            y: p.y,
            z: p.z,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GeometryDto {
    Line {
        start: PointDto,
        end: PointDto,
    },
    Arc {
        start: PointDto,
        end: PointDto,
        /// Any point on the arc strictly between the ends
        through: PointDto,
    },
    Polyline {
        points: Vec<PointDto>,
    },
    Ellipse {
        center: PointDto,
        x_radius: f64,
        y_radius: f64,
    },
    Spline {
        control_points: Vec<PointDto>,
        #[serde(default = "default_spline_degree")]
        degree: u32,
    },
}

fn default_spline_degree() -> u32 {
    3
}

impl GeometryDto {
    pub fn to_geometry(&self) -> curvewall_geometry::Result<GeometryCurve> {
        let geometry: GeometryCurve = match self {
            GeometryDto::Line { start, end } => {
                Line::new(start.to_nalgebra(), end.to_nalgebra())?.into()
            }
            GeometryDto::Arc { start, end, through } => Arc::from_three_points(
                start.to_nalgebra(),
                end.to_nalgebra(),
                through.to_nalgebra(),
            )?
            .into(),
            GeometryDto::Polyline { points } => {
                PolyLine::new(points.iter().map(PointDto::to_nalgebra))?.into()
            }
            GeometryDto::Ellipse {
                center,
                x_radius,
                y_radius,
            } => Ellipse {
                center: center.to_nalgebra(),
                x_axis: Vector3::x(),
                x_radius: *x_radius,
                y_radius: *y_radius,
            }
            .into(),
            GeometryDto::Spline {
                control_points,
                degree,
            } => Spline {
                control_points: control_points.iter().map(PointDto::to_nalgebra).collect(),
                degree: *degree,
            }
            .into(),
        };
        Ok(geometry)
    }
}

/// A selected curve element; `geometry` may be absent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurveDto {
    pub id: u64,
    #[serde(default)]
    pub geometry: Option<GeometryDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelDto {
    pub name: String,
    pub elevation: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryDto {
    pub style: String,
    #[serde(default)]
    pub curves: Vec<CurveDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub levels: Vec<LevelDto>,
    pub wall_styles: Vec<String>,
    pub exterior: CategoryDto,
    pub interior: CategoryDto,
}

impl Scene {
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Cannot read scene file '{}'", path.display()))?;
        Self::parse(&text).with_context(|| format!("Invalid scene file '{}'", path.display()))
    }

    pub fn parse(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Build the document and the wall request described by the scene.
    pub fn into_document(self) -> Result<(Document, WallRequest)> {
        let mut doc = Document::new();
        for level in &self.levels {
            doc.add_level(level.name.clone(), level.elevation);
        }
        for style in &self.wall_styles {
            doc.add_wall_style(style.clone());
        }

        let request = WallRequest {
            exterior: category_input(self.exterior)?,
            interior: category_input(self.interior)?,
        };
        Ok((doc, request))
    }
}

fn category_input(category: CategoryDto) -> Result<CategoryInput> {
    let curves = category
        .curves
        .iter()
        .map(|curve| {
            let id = ElementId(curve.id);
            match &curve.geometry {
                Some(geometry) => {
                    let geometry = geometry
                        .to_geometry()
                        .with_context(|| format!("Invalid geometry on curve element {id}"))?;
                    Ok(CurveElement {
                        id,
                        geometry: Some(geometry),
                    })
                }
                None => Ok(CurveElement::without_geometry(id)),
            }
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(CategoryInput {
        style_name: category.style,
        curves,
    })
}
