// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use thiserror::Error;

/// Result type for curve construction
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building curve primitives
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Degenerate line: start and end are closer than {tolerance}")]
    DegenerateLine { tolerance: f64 },

    #[error("Arc points are collinear or coincident")]
    CollinearArcPoints,

    #[error("Polyline needs at least 2 points, got {0}")]
    TooFewPoints(usize),

    #[error("Non-finite coordinate in {0}")]
    NonFinite(&'static str),
}
