// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Wall creation.

use curvewall_core::{
    LevelKey, ModelStore, Transaction, WallCategory, WallKey, WallSpec, WallStyleKey,
};

use crate::error::{Error, Result};
use crate::normalize::PlacedCurve;

/// Transaction name used for each category's wall creation
pub const CREATE_WALLS_TRANSACTION: &str = "Create Walls from Curves";

/// Create one wall per curve inside a single transaction.
///
/// The first failure rolls the whole transaction back, so either every
/// curve gets a wall or none does. Returned keys follow `curves` order.
pub fn create_walls<S>(
    store: &mut S,
    curves: &[PlacedCurve],
    style: WallStyleKey,
    level: LevelKey,
    height: f64,
    category: WallCategory,
) -> Result<Vec<WallKey>>
where
    S: ModelStore + ?Sized,
{
    let mut tx = Transaction::start(store, CREATE_WALLS_TRANSACTION)?;
    let mut walls = Vec::with_capacity(curves.len());

    for placed in curves {
        let spec = WallSpec::new(placed.curve.clone(), style, level, height, category);
        let key = tx.create_wall(spec).map_err(|source| Error::WallCreation {
            category,
            element: placed.source,
            source,
        })?;
        tracing::debug!(
            category = %category,
            curve = %placed.source,
            wall = ?key,
            "Created wall"
        );
        walls.push(key);
    }

    tx.commit()?;
    tracing::info!(category = %category, count = walls.len(), "Created walls");
    Ok(walls)
}

#[cfg(test)]
mod tests {
    use super::*;
    use curvewall_core::{Document, ElementId};
    use curvewall_geometry::{Curve, Line, Point3};

    fn placed(id: u64, y: f64) -> PlacedCurve {
        PlacedCurve {
            source: ElementId(id),
            curve: Curve::Line(
                Line::new(Point3::new(0.0, y, 0.0), Point3::new(10.0, y, 0.0)).unwrap(),
            ),
        }
    }

    #[test]
    fn creates_walls_in_order() {
        let mut doc = Document::new();
        let level = doc.add_level("Level 1", 0.0);
        let style = doc.add_wall_style("Generic");

        let curves = vec![placed(1, 0.0), placed(2, 5.0)];
        let walls =
            create_walls(&mut doc, &curves, style, level, 12.0, WallCategory::Interior).unwrap();

        assert_eq!(walls.len(), 2);
        for (key, curve) in walls.iter().zip(&curves) {
            let wall = doc.wall(*key).unwrap();
            assert_eq!(wall.curve, curve.curve);
            assert_eq!(wall.height, 12.0);
            assert_eq!(wall.category, WallCategory::Interior);
        }
        assert_eq!(doc.committed_transactions(), [CREATE_WALLS_TRANSACTION]);
    }

    #[test]
    fn failure_rolls_back_the_category() {
        let mut doc = Document::new();
        let level = doc.add_level("Level 1", 0.0);
        let style = doc.add_wall_style("Generic");

        let curves = vec![placed(1, 0.0), placed(2, 5.0)];
        let err = create_walls(&mut doc, &curves, style, level, -1.0, WallCategory::Exterior)
            .unwrap_err();

        assert!(matches!(
            err,
            Error::WallCreation {
                category: WallCategory::Exterior,
                element: ElementId(1),
                ..
            }
        ));
        assert_eq!(doc.wall_count(), 0);
        assert!(!doc.in_transaction());
        assert!(doc.committed_transactions().is_empty());
    }

    #[test]
    fn empty_input_creates_nothing() {
        let mut doc = Document::new();
        let level = doc.add_level("Level 1", 0.0);
        let style = doc.add_wall_style("Generic");

        let walls =
            create_walls(&mut doc, &[], style, level, 12.0, WallCategory::Interior).unwrap();
        assert!(walls.is_empty());
        assert_eq!(doc.wall_count(), 0);
    }
}
