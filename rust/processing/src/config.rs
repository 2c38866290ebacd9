// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Run configuration.

use curvewall_core::{LengthUnit, WallCategory};

/// Default height for exterior walls, in feet
pub const DEFAULT_EXTERIOR_WALL_HEIGHT: f64 = 25.0;

/// Default height for interior walls, in feet
pub const DEFAULT_INTERIOR_WALL_HEIGHT: f64 = 12.0;

/// Walls shorter than this (internal units) are removed during cleanup
pub const MIN_WALL_LENGTH: f64 = 1.0;

/// Parameters for one wall creation run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    /// Exterior wall height, in `height_unit`.
    pub exterior_height: f64,
    /// Interior wall height, in `height_unit`.
    pub interior_height: f64,
    /// Unit the two heights are stated in.
    pub height_unit: LengthUnit,
    /// Cleanup threshold on location-line length, internal units.
    pub min_wall_length: f64,
    /// Let ellipses through validation (they are skipped later when
    /// normalizing); when false they are rejected up front.
    pub accept_closed_conics: bool,
}

impl RunConfig {
    /// Height for `category`, in `height_unit`.
    pub fn height_for(&self, category: WallCategory) -> f64 {
        match category {
            WallCategory::Exterior => self.exterior_height,
            WallCategory::Interior => self.interior_height,
        }
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            exterior_height: DEFAULT_EXTERIOR_WALL_HEIGHT,
            interior_height: DEFAULT_INTERIOR_WALL_HEIGHT,
            height_unit: LengthUnit::Feet,
            min_wall_length: MIN_WALL_LENGTH,
            accept_closed_conics: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heights_follow_category() {
        let config = RunConfig {
            exterior_height: 30.0,
            interior_height: 9.0,
            ..RunConfig::default()
        };
        assert_eq!(config.height_for(WallCategory::Exterior), 30.0);
        assert_eq!(config.height_for(WallCategory::Interior), 9.0);
        assert_eq!(
            RunConfig::default().height_for(WallCategory::Exterior),
            DEFAULT_EXTERIOR_WALL_HEIGHT
        );
    }
}
