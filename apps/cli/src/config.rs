// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! CLI configuration loaded from environment variables.

use std::path::PathBuf;

use curvewall_core::LengthUnit;
use curvewall_processing::{
    RunConfig, DEFAULT_EXTERIOR_WALL_HEIGHT, DEFAULT_INTERIOR_WALL_HEIGHT,
};

const DEFAULT_LOG_FILES: usize = 5;

const DEFAULT_LOG_MAX_BYTES: usize = 5 * 1024 * 1024;

/// CLI configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Directory for the rotating log files.
    pub log_dir: PathBuf,
    /// Number of rotated log files to keep.
    pub log_files: usize,
    /// Size at which the log file rolls over, in bytes.
    pub log_max_bytes: usize,
    /// Let ellipses pass curve validation.
    pub accept_conics: bool,
    /// Unit the wall heights are given in.
    pub height_unit: LengthUnit,
    pub exterior_height: f64,
    pub interior_height: f64,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through `lookup`; unset or unparsable values fall
    /// back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            log_dir: lookup("CURVEWALL_LOG_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(std::env::temp_dir),
            log_files: lookup("CURVEWALL_LOG_FILES")
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_LOG_FILES),
            log_max_bytes: lookup("CURVEWALL_LOG_MAX_BYTES")
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_LOG_MAX_BYTES),
            accept_conics: lookup("CURVEWALL_ACCEPT_CONICS")
                .and_then(|v| parse_bool(&v))
                .unwrap_or(true),
            height_unit: lookup("CURVEWALL_HEIGHT_UNIT")
                .and_then(|v| v.parse().ok())
                .unwrap_or_default(),
            exterior_height: lookup("CURVEWALL_EXTERIOR_HEIGHT")
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_EXTERIOR_WALL_HEIGHT),
            interior_height: lookup("CURVEWALL_INTERIOR_HEIGHT")
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_INTERIOR_WALL_HEIGHT),
        }
    }

    /// Pipeline configuration; `reject_conics` overrides `accept_conics`.
    pub fn run_config(&self, reject_conics: bool) -> RunConfig {
        RunConfig {
            exterior_height: self.exterior_height,
            interior_height: self.interior_height,
            height_unit: self.height_unit,
            accept_closed_conics: self.accept_conics && !reject_conics,
            ..RunConfig::default()
        }
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults() {
        let config = Config::from_lookup(|_| None);
        assert_eq!(config.log_dir, std::env::temp_dir());
        assert_eq!(config.log_files, 5);
        assert_eq!(config.log_max_bytes, 5 * 1024 * 1024);
        assert!(config.accept_conics);
        assert_eq!(config.height_unit, LengthUnit::Feet);
        assert_eq!(config.exterior_height, 25.0);
        assert_eq!(config.interior_height, 12.0);
    }

    #[test]
    fn overrides_and_fallbacks() {
        let config = Config::from_lookup(lookup(&[
            ("CURVEWALL_LOG_FILES", "9"),
            ("CURVEWALL_LOG_MAX_BYTES", "1024"),
            ("CURVEWALL_ACCEPT_CONICS", "off"),
            ("CURVEWALL_HEIGHT_UNIT", "m"),
            ("CURVEWALL_EXTERIOR_HEIGHT", "7.5"),
            ("CURVEWALL_INTERIOR_HEIGHT", "tall"),
        ]));
        assert_eq!(config.log_files, 9);
        assert_eq!(config.log_max_bytes, 1024);
        assert!(!config.accept_conics);
        assert_eq!(config.height_unit, LengthUnit::Meters);
        assert_eq!(config.exterior_height, 7.5);
        assert_eq!(config.interior_height, 12.0);
    }

    #[test]
    fn reject_flag_wins() {
        let config = Config::from_lookup(|_| None);
        assert!(config.run_config(false).accept_closed_conics);
        assert!(!config.run_config(true).accept_closed_conics);
    }
}
