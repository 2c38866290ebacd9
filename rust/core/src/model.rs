// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Building model entities.

use curvewall_geometry::{Curve, GeometryCurve};

use crate::keys::{ElementId, LevelKey, WallKey, WallStyleKey};

/// Horizontal reference plane walls are hosted on
#[derive(Debug, Clone, PartialEq)]
pub struct Level {
    pub key: LevelKey,
    pub name: String,
    /// Elevation in internal length units
    pub elevation: f64,
}

/// Named wall type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WallStyle {
    pub key: WallStyleKey,
    pub name: String,
}

/// A selected model curve: identity plus whatever geometry it holds
#[derive(Debug, Clone, PartialEq)]
pub struct CurveElement {
    pub id: ElementId,
    /// `None` when the element has no usable geometry at all
    pub geometry: Option<GeometryCurve>,
}

impl CurveElement {
    pub fn new(id: ElementId, geometry: impl Into<GeometryCurve>) -> Self {
        Self {
            id,
            geometry: Some(geometry.into()),
        }
    }

    /// Element with no geometry attached
    pub fn without_geometry(id: ElementId) -> Self {
        Self { id, geometry: None }
    }
}

/// Wall classification driving style and height
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WallCategory {
    Exterior,
    Interior,
}

impl WallCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            WallCategory::Exterior => "exterior",
            WallCategory::Interior => "interior",
        }
    }
}

impl std::fmt::Display for WallCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything needed to create a wall
#[derive(Debug, Clone, PartialEq)]
pub struct WallSpec {
    pub curve: Curve,
    pub style: WallStyleKey,
    pub level: LevelKey,
    /// Unconnected height in internal length units
    pub height: f64,
    pub category: WallCategory,
    /// Offset of the wall base above the level
    pub base_offset: f64,
    pub flipped: bool,
    pub structural: bool,
}

impl WallSpec {
    /// Spec with zero base offset, not flipped, non-structural
    pub fn new(
        curve: Curve,
        style: WallStyleKey,
        level: LevelKey,
        height: f64,
        category: WallCategory,
    ) -> Self {
        Self {
            curve,
            style,
            level,
            height,
            category,
            base_offset: 0.0,
            flipped: false,
            structural: false,
        }
    }
}

/// A wall stored in the document
#[derive(Debug, Clone, PartialEq)]
pub struct Wall {
    pub key: WallKey,
    /// Location line
    pub curve: Curve,
    pub style: WallStyleKey,
    pub level: LevelKey,
    pub height: f64,
    pub category: WallCategory,
    pub base_offset: f64,
    pub flipped: bool,
    pub structural: bool,
}

impl Wall {
    pub(crate) fn from_spec(key: WallKey, spec: WallSpec) -> Self {
        Self {
            key,
            curve: spec.curve,
            style: spec.style,
            level: spec.level,
            height: spec.height,
            category: spec.category,
            base_offset: spec.base_offset,
            flipped: spec.flipped,
            structural: spec.structural,
        }
    }

    /// Length of the location line
    #[inline]
    pub fn length(&self) -> f64 {
        self.curve.length()
    }
}
