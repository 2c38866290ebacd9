// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Length units and conversion to the document's internal unit
//!
//! The document stores every length in decimal feet. Callers state lengths
//! in a display unit and convert through a [`UnitConverter`].

use std::str::FromStr;

use crate::error::Error;

/// Display length units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LengthUnit {
    #[default]
    Feet,
    Inches,
    Meters,
    Centimeters,
    Millimeters,
}

impl LengthUnit {
    /// Feet per one of this unit
    #[inline]
    pub fn feet_per_unit(self) -> f64 {
        match self {
            LengthUnit::Feet => 1.0,
            LengthUnit::Inches => 1.0 / 12.0,
            LengthUnit::Meters => 1.0 / 0.3048, // International foot
            LengthUnit::Centimeters => 1.0 / 30.48,
            LengthUnit::Millimeters => 1.0 / 304.8,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            LengthUnit::Feet => "ft",
            LengthUnit::Inches => "in",
            LengthUnit::Meters => "m",
            LengthUnit::Centimeters => "cm",
            LengthUnit::Millimeters => "mm",
        }
    }
}

impl std::fmt::Display for LengthUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LengthUnit {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ft" | "feet" | "foot" => Ok(LengthUnit::Feet),
            "in" | "inch" | "inches" => Ok(LengthUnit::Inches),
            "m" | "meter" | "meters" | "metre" | "metres" => Ok(LengthUnit::Meters),
            "cm" | "centimeter" | "centimeters" => Ok(LengthUnit::Centimeters),
            "mm" | "millimeter" | "millimeters" => Ok(LengthUnit::Millimeters),
            _ => Err(Error::UnknownUnit(s.to_string())),
        }
    }
}

/// Converts display lengths to the document's internal unit
pub trait UnitConverter {
    fn to_internal(&self, value: f64, unit: LengthUnit) -> f64;
}

/// Converter for documents whose internal unit is the decimal foot
#[derive(Debug, Clone, Copy, Default)]
pub struct InternalUnits;

impl UnitConverter for InternalUnits {
    fn to_internal(&self, value: f64, unit: LengthUnit) -> f64 {
        let internal = value * unit.feet_per_unit();
        tracing::debug!(value, unit = %unit, internal, "Converted to internal units");
        internal
    }
}
