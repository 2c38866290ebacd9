// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Post-run sanity checks on the walls handed back to the caller.

use std::fmt;

use curvewall_core::{ModelStore, WallKey};
use curvewall_geometry::GEOMETRY_TOLERANCE;

/// Problem found on a returned wall
#[derive(Debug, Clone, PartialEq)]
pub enum QualityIssue {
    /// The wall is no longer in the store
    Missing(WallKey),
    NonPositiveHeight { wall: WallKey, height: f64 },
    /// Location line is not on the level plane
    OffLevel { wall: WallKey, elevation: f64 },
}

impl fmt::Display for QualityIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QualityIssue::Missing(wall) => write!(f, "wall {wall:?} is missing"),
            QualityIssue::NonPositiveHeight { wall, height } => {
                write!(f, "wall {wall:?} has non-positive height {height}")
            }
            QualityIssue::OffLevel { wall, elevation } => {
                write!(f, "wall {wall:?} does not lie at level elevation {elevation}")
            }
        }
    }
}

/// Re-read every wall and report anything inconsistent.
///
/// Issues are logged at error level; the caller decides what to do with them.
pub fn perform_quality_checks<S>(store: &S, walls: &[WallKey], elevation: f64) -> Vec<QualityIssue>
where
    S: ModelStore + ?Sized,
{
    let mut issues = Vec::new();
    for &key in walls {
        let Some(wall) = store.wall(key) else {
            issues.push(QualityIssue::Missing(key));
            continue;
        };
        if !(wall.height > 0.0) {
            issues.push(QualityIssue::NonPositiveHeight {
                wall: key,
                height: wall.height,
            });
        }
        if !wall.curve.lies_at_elevation(elevation, GEOMETRY_TOLERANCE) {
            issues.push(QualityIssue::OffLevel {
                wall: key,
                elevation,
            });
        }
    }

    for issue in &issues {
        tracing::error!(%issue, "Quality check failed");
    }
    tracing::info!(checked = walls.len(), issues = issues.len(), "Quality checks completed");
    issues
}
