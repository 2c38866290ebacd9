// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Run orchestration.
//!
//! Stages, in order:
//!
//! 1. validate inputs, resolve the base level and both wall styles
//! 2. validate both curve sets and convert the heights to internal units
//! 3. normalize elevations and filter overlaps, per category
//! 4. create exterior walls, then interior walls (one transaction each)
//! 5. join and prune (one transaction)
//! 6. quality checks
//!
//! Nothing is written to the store before stage 4. Walls committed by an
//! earlier transaction stay in place when a later stage fails.

use curvewall_core::{
    CurveElement, Level, LengthUnit, ModelStore, UnitConverter, WallCategory, WallKey, WallStyle,
};

use crate::build::create_walls;
use crate::cleanup::clean_up_walls;
use crate::config::RunConfig;
use crate::context::with_context;
use crate::error::{Error, Result};
use crate::normalize::{normalize_elevation, PlacedCurve};
use crate::overlap::filter_overlapping_curves;
use crate::quality::{perform_quality_checks, QualityIssue};
use crate::validate::validate_curve_elements;

/// Style name and selected curves for one wall category
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryInput {
    /// Exact, case-sensitive wall style name
    pub style_name: String,
    pub curves: Vec<CurveElement>,
}

/// Everything a run needs besides the store and configuration
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WallRequest {
    pub exterior: CategoryInput,
    pub interior: CategoryInput,
}

impl WallRequest {
    pub fn input(&self, category: WallCategory) -> &CategoryInput {
        match category {
            WallCategory::Exterior => &self.exterior,
            WallCategory::Interior => &self.interior,
        }
    }
}

/// Result of a successful run
#[derive(Debug, Clone, PartialEq)]
pub struct RunReport {
    /// Live walls after cleanup: exterior first, then interior, creation order
    pub walls: Vec<WallKey>,
    pub exterior: Vec<WallKey>,
    pub interior: Vec<WallKey>,
    pub pruned: Vec<WallKey>,
    pub joins_attempted: usize,
    pub joins_made: usize,
    /// Level every wall was placed on
    pub level: Level,
    /// Heights actually used, internal units
    pub exterior_height: f64,
    pub interior_height: f64,
    pub quality_issues: Vec<QualityIssue>,
}

/// Check the request for missing pieces before touching the store.
pub fn validate_inputs(request: &WallRequest) -> Result<()> {
    tracing::debug!(
        exterior_style = %request.exterior.style_name,
        exterior_curves = request.exterior.curves.len(),
        interior_style = %request.interior.style_name,
        interior_curves = request.interior.curves.len(),
        "Validating inputs"
    );

    for category in [WallCategory::Exterior, WallCategory::Interior] {
        let input = request.input(category);
        if input.style_name.trim().is_empty() {
            return Err(Error::InvalidInput(format!(
                "No {category} wall style selected"
            )));
        }
        if input.curves.is_empty() {
            return Err(Error::InvalidInput(format!("No {category} curves selected")));
        }
    }
    Ok(())
}

/// Lowest level; the first one listed wins a tie.
pub fn select_base_level(levels: &[Level]) -> Option<&Level> {
    levels
        .iter()
        .min_by(|a, b| a.elevation.total_cmp(&b.elevation))
}

/// Base level of the store's document.
pub fn get_first_level<S>(store: &S) -> Result<Level>
where
    S: ModelStore + ?Sized,
{
    let levels = store.levels();
    let level = select_base_level(&levels).cloned().ok_or(Error::NoLevels)?;
    tracing::info!(level = %level.name, elevation = level.elevation, "Selected base level");
    Ok(level)
}

/// Find a wall style by exact name.
pub fn resolve_wall_style<S>(store: &S, name: &str, category: WallCategory) -> Result<WallStyle>
where
    S: ModelStore + ?Sized,
{
    store
        .wall_styles()
        .into_iter()
        .find(|style| style.name == name)
        .ok_or_else(|| Error::StyleNotFound {
            category,
            name: name.to_string(),
        })
}

/// Convert a height to internal units; the result must be positive.
pub fn convert_height<U>(units: &U, value: f64, unit: LengthUnit) -> Result<f64>
where
    U: UnitConverter + ?Sized,
{
    let internal = units.to_internal(value, unit);
    if internal.is_finite() && internal > 0.0 {
        Ok(internal)
    } else {
        Err(Error::InvalidInput(format!(
            "Wall height must be positive, got {value} {unit}"
        )))
    }
}

fn prepare_curves(
    elements: Vec<&CurveElement>,
    elevation: f64,
    category: WallCategory,
) -> Vec<PlacedCurve> {
    let span = tracing::debug_span!("prepare_curves", category = %category);
    let _enter = span.enter();

    let kept = filter_overlapping_curves(normalize_elevation(elements, elevation));
    if kept.is_empty() {
        tracing::warn!(
            category = %category,
            "No curves left after normalization and overlap filtering"
        );
    }
    kept
}

/// Create exterior and interior walls from the request's curves.
pub fn run<S, U>(
    store: &mut S,
    request: &WallRequest,
    config: &RunConfig,
    units: &U,
) -> Result<RunReport>
where
    S: ModelStore + ?Sized,
    U: UnitConverter + ?Sized,
{
    tracing::info!("Starting wall creation from curves");

    with_context("validate_inputs", || validate_inputs(request))?;
    let level = with_context("get_first_level", || get_first_level(&*store))?;
    let exterior_style = with_context("resolve_wall_style", || {
        resolve_wall_style(&*store, &request.exterior.style_name, WallCategory::Exterior)
    })?;
    let interior_style = with_context("resolve_wall_style", || {
        resolve_wall_style(&*store, &request.interior.style_name, WallCategory::Interior)
    })?;

    let exterior_elements = with_context("validate_curve_elements", || {
        validate_curve_elements(
            &request.exterior.curves,
            WallCategory::Exterior,
            config.accept_closed_conics,
        )
    })?;
    let interior_elements = with_context("validate_curve_elements", || {
        validate_curve_elements(
            &request.interior.curves,
            WallCategory::Interior,
            config.accept_closed_conics,
        )
    })?;

    let exterior_height = with_context("convert_height", || {
        let height = config.height_for(WallCategory::Exterior);
        convert_height(units, height, config.height_unit)
    })?;
    let interior_height = with_context("convert_height", || {
        let height = config.height_for(WallCategory::Interior);
        convert_height(units, height, config.height_unit)
    })?;

    let exterior_curves =
        prepare_curves(exterior_elements, level.elevation, WallCategory::Exterior);
    let interior_curves =
        prepare_curves(interior_elements, level.elevation, WallCategory::Interior);

    let exterior_created = with_context("create_walls", || {
        create_walls(
            &mut *store,
            &exterior_curves,
            exterior_style.key,
            level.key,
            exterior_height,
            WallCategory::Exterior,
        )
    })?;
    let interior_created = with_context("create_walls", || {
        create_walls(
            &mut *store,
            &interior_curves,
            interior_style.key,
            level.key,
            interior_height,
            WallCategory::Interior,
        )
    })?;

    let created: Vec<WallKey> = exterior_created
        .iter()
        .chain(&interior_created)
        .copied()
        .collect();
    let cleanup = with_context("clean_up_walls", || {
        clean_up_walls(&mut *store, &created, config.min_wall_length)
    })?;

    let exterior: Vec<WallKey> = exterior_created
        .into_iter()
        .filter(|key| cleanup.live.contains(key))
        .collect();
    let interior: Vec<WallKey> = interior_created
        .into_iter()
        .filter(|key| cleanup.live.contains(key))
        .collect();

    let quality_issues = perform_quality_checks(&*store, &cleanup.live, level.elevation);

    tracing::info!(
        exterior = exterior.len(),
        interior = interior.len(),
        pruned = cleanup.pruned.len(),
        "Wall creation completed"
    );

    Ok(RunReport {
        walls: cleanup.live,
        exterior,
        interior,
        pruned: cleanup.pruned,
        joins_attempted: cleanup.joins_attempted,
        joins_made: cleanup.joins_made,
        level,
        exterior_height,
        interior_height,
        quality_issues,
    })
}
