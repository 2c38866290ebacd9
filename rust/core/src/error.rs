// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for model operations.

use crate::keys::{LevelKey, WallKey, WallStyleKey};

/// Result type alias for model operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while reading or mutating the building model.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// The referenced level does not exist in the document.
    #[error("level not found: {0:?}")]
    LevelNotFound(LevelKey),

    /// The referenced wall style does not exist in the document.
    #[error("wall style not found: {0:?}")]
    StyleNotFound(WallStyleKey),

    /// The referenced wall does not exist (never created or already deleted).
    #[error("wall not found: {0:?}")]
    WallNotFound(WallKey),

    /// Wall heights must be positive and finite.
    #[error("wall height must be positive, got {0}")]
    InvalidHeight(f64),

    /// A transaction was started while another one is still open.
    #[error("transaction '{open}' is still open, cannot start '{requested}'")]
    TransactionOpen { open: String, requested: String },

    /// A mutating call was made with no open transaction.
    #[error("{0} requires an open transaction")]
    NoTransaction(&'static str),

    /// Two walls could not be joined.
    #[error("cannot join walls {first:?} and {second:?}: {reason}")]
    JoinFailed {
        first: WallKey,
        second: WallKey,
        reason: &'static str,
    },

    /// Length unit name not recognised.
    #[error("unknown length unit: {0}")]
    UnknownUnit(String),

    /// Geometry construction failed.
    #[error("geometry error: {0}")]
    Geometry(#[from] curvewall_geometry::Error),
}
