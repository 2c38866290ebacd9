// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # Curvewall Processing
//!
//! Turns selected model curves into exterior and interior walls.
//!
//! ```text
//! curve elements -> validate -> normalize elevation -> filter overlaps
//!                -> create walls (per category) -> join + prune -> quality check
//! ```
//!
//! Everything is generic over [`curvewall_core::ModelStore`], so the same
//! pipeline runs against the in-memory [`curvewall_core::Document`] or any
//! other store.
//!
//! ```rust,ignore
//! use curvewall_core::{Document, InternalUnits};
//! use curvewall_processing::{run, RunConfig, WallRequest};
//!
//! let report = run(&mut doc, &request, &RunConfig::default(), &InternalUnits)?;
//! println!("{} walls", report.walls.len());
//! ```

pub mod build;
pub mod cleanup;
pub mod config;
pub mod context;
pub mod error;
pub mod normalize;
pub mod overlap;
pub mod pipeline;
pub mod quality;
pub mod validate;

pub use build::{create_walls, CREATE_WALLS_TRANSACTION};
pub use cleanup::{clean_up_walls, CleanupReport, CLEAN_UP_TRANSACTION};
pub use config::{
    RunConfig, DEFAULT_EXTERIOR_WALL_HEIGHT, DEFAULT_INTERIOR_WALL_HEIGHT, MIN_WALL_LENGTH,
};
pub use context::with_context;
pub use error::{Error, Result};
pub use normalize::{normalize_elevation, place_at_elevation, PlacedCurve};
pub use overlap::filter_overlapping_curves;
pub use pipeline::{
    convert_height, get_first_level, resolve_wall_style, run, select_base_level, validate_inputs,
    CategoryInput, RunReport, WallRequest,
};
pub use quality::{perform_quality_checks, QualityIssue};
pub use validate::{is_supported, validate_curve_elements};
