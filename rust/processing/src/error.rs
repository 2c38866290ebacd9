// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use curvewall_core::{ElementId, WallCategory};
use thiserror::Error;

/// Result type for the wall pipeline
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that stop a wall creation run
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("No levels found in the document")]
    NoLevels,

    #[error("Selected {category} wall style '{name}' not found")]
    StyleNotFound {
        category: WallCategory,
        name: String,
    },

    #[error("No valid {0} curves provided")]
    NoUsableCurves(WallCategory),

    #[error("Failed to create {category} wall from curve {element}: {source}")]
    WallCreation {
        category: WallCategory,
        element: ElementId,
        #[source]
        source: curvewall_core::Error,
    },

    #[error("Model error: {0}")]
    Model(#[from] curvewall_core::Error),
}
