// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Post-processing of created walls: pairwise joins, then pruning of walls
//! too short to keep.

use curvewall_core::{ModelStore, Transaction, WallKey};

use crate::error::Result;

/// Transaction name for the cleanup pass
pub const CLEAN_UP_TRANSACTION: &str = "Clean Up Walls";

/// Outcome of [`clean_up_walls`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CleanupReport {
    /// Walls still present, in input order
    pub live: Vec<WallKey>,
    /// Walls deleted for being shorter than the minimum length
    pub pruned: Vec<WallKey>,
    pub joins_attempted: usize,
    pub joins_made: usize,
}

/// Join every unordered pair of `walls`, then delete walls whose location
/// line is shorter than `min_length`.
///
/// Join failures are logged and skipped. Any other failure rolls the whole
/// pass back.
pub fn clean_up_walls<S>(store: &mut S, walls: &[WallKey], min_length: f64) -> Result<CleanupReport>
where
    S: ModelStore + ?Sized,
{
    let mut tx = Transaction::start(store, CLEAN_UP_TRANSACTION)?;
    let mut report = CleanupReport::default();

    for (i, &first) in walls.iter().enumerate() {
        for &second in &walls[i + 1..] {
            report.joins_attempted += 1;
            match tx.join_geometry(first, second) {
                Ok(()) => {
                    report.joins_made += 1;
                    tracing::debug!(first = ?first, second = ?second, "Joined walls");
                }
                Err(err) => {
                    tracing::warn!(
                        first = ?first,
                        second = ?second,
                        error = %err,
                        "Failed to join walls"
                    );
                }
            }
        }
    }

    for &key in walls {
        let length = match tx.wall(key) {
            Some(wall) => wall.length(),
            None => {
                tracing::warn!(wall = ?key, "Wall missing during cleanup");
                continue;
            }
        };
        if length < min_length {
            tx.delete_wall(key)?;
            tracing::info!(wall = ?key, length, "Deleted short wall");
            report.pruned.push(key);
        } else {
            report.live.push(key);
        }
    }

    tx.commit()?;
    tracing::info!(
        live = report.live.len(),
        pruned = report.pruned.len(),
        joins = report.joins_made,
        "Cleaned up walls"
    );
    Ok(report)
}
