// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Curve validation: keep only elements whose geometry can host a wall.

use curvewall_core::{CurveElement, WallCategory};
use curvewall_geometry::CurveKind;

use crate::error::{Error, Result};

/// Whether an element of `kind` passes validation
#[inline]
pub fn is_supported(kind: CurveKind, accept_closed_conics: bool) -> bool {
    match kind {
        CurveKind::Line | CurveKind::Arc | CurveKind::PolyLine => true,
        CurveKind::Ellipse => accept_closed_conics,
        CurveKind::Spline => false,
    }
}

/// Filter `elements` down to supported curves, keeping their order.
///
/// Dropped elements are logged. Fails with [`Error::NoUsableCurves`] when
/// nothing is left.
pub fn validate_curve_elements(
    elements: &[CurveElement],
    category: WallCategory,
    accept_closed_conics: bool,
) -> Result<Vec<&CurveElement>> {
    let valid: Vec<&CurveElement> = elements
        .iter()
        .filter(|element| match &element.geometry {
            Some(geometry) if is_supported(geometry.kind(), accept_closed_conics) => true,
            Some(geometry) => {
                tracing::warn!(
                    element = %element.id,
                    kind = %geometry.kind(),
                    "Unsupported curve type"
                );
                false
            }
            None => {
                tracing::warn!(element = %element.id, "Curve element has no geometry");
                false
            }
        })
        .collect();

    if valid.is_empty() {
        return Err(Error::NoUsableCurves(category));
    }

    tracing::debug!(
        category = %category,
        valid = valid.len(),
        total = elements.len(),
        "Validated curve elements"
    );
    Ok(valid)
}
