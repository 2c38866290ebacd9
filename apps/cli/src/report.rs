// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! JSON run report.

use curvewall_core::{Document, ModelStore, WallKey};
use curvewall_processing::RunReport;
use serde::Serialize;

use crate::scene::{LevelDto, PointDto};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WallDto {
    pub category: String,
    pub style: String,
    pub kind: String,
    pub start: PointDto,
    pub end: PointDto,
    pub length: f64,
    pub height: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunSummary {
    pub level: LevelDto,
    pub exterior_height: f64,
    pub interior_height: f64,
    pub exterior_walls: usize,
    pub interior_walls: usize,
    pub pruned_walls: usize,
    pub joins_attempted: usize,
    pub joins_made: usize,
    /// Live walls, exterior first
    pub walls: Vec<WallDto>,
    pub quality_issues: Vec<String>,
}

impl RunSummary {
    pub fn new(report: &RunReport, doc: &Document) -> Self {
        Self {
            level: LevelDto {
                name: report.level.name.clone(),
                elevation: report.level.elevation,
            },
            exterior_height: report.exterior_height,
            interior_height: report.interior_height,
            exterior_walls: report.exterior.len(),
            interior_walls: report.interior.len(),
            pruned_walls: report.pruned.len(),
            joins_attempted: report.joins_attempted,
            joins_made: report.joins_made,
            walls: report
                .walls
                .iter()
                .filter_map(|&key| wall_dto(doc, key))
                .collect(),
            quality_issues: report.quality_issues.iter().map(|i| i.to_string()).collect(),
        }
    }
}

fn wall_dto(doc: &Document, key: WallKey) -> Option<WallDto> {
    let wall = doc.wall(key)?;
    let style = doc
        .wall_style(wall.style)
        .map(|s| s.name.clone())
        .unwrap_or_default();
    Some(WallDto {
        category: wall.category.to_string(),
        style,
        kind: wall.curve.kind().to_string(),
        start: PointDto::from_nalgebra(&wall.curve.start()),
        end: PointDto::from_nalgebra(&wall.curve.end()),
        length: wall.length(),
        height: wall.height,
    })
}
