// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # Curvewall Core
//!
//! Building-model side of curve-driven wall creation.
//!
//! - **Entities**: [`Level`], [`WallStyle`], [`CurveElement`], [`Wall`]
//! - **Persistence seam**: the [`ModelStore`] trait and the RAII
//!   [`Transaction`] guard that rolls back when dropped uncommitted
//! - **Reference store**: [`Document`], an in-memory slot-map document with
//!   snapshot transactions and a join table
//! - **Units**: [`LengthUnit`] and the [`UnitConverter`] service
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use curvewall_core::{Document, Transaction, WallCategory, WallSpec};
//!
//! let mut doc = Document::new();
//! let level = doc.add_level("Level 1", 0.0);
//! let style = doc.add_wall_style("Exterior - Brick");
//!
//! let mut tx = Transaction::start(&mut doc, "Create Walls from Curves")?;
//! tx.create_wall(WallSpec::new(curve, style, level, 25.0, WallCategory::Exterior))?;
//! tx.commit()?;
//! ```

pub mod document;
pub mod error;
pub mod keys;
pub mod model;
pub mod store;
pub mod units;

pub use document::Document;
pub use error::{Error, Result};
pub use keys::{ElementId, LevelKey, WallKey, WallStyleKey};
pub use model::{CurveElement, Level, Wall, WallCategory, WallSpec, WallStyle};
pub use store::{ModelStore, Transaction};
pub use units::{InternalUnits, LengthUnit, UnitConverter};
