// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! In-memory building model document.
//!
//! [`Document`] owns levels, wall styles and walls in slot maps. Starting a
//! transaction snapshots the wall set and the join table; rollback restores
//! the snapshot. Levels and styles are model content set up before a run and
//! are not transactional.

use rustc_hash::FxHashSet;
use slotmap::SlotMap;

use crate::error::{Error, Result};
use crate::keys::{LevelKey, WallKey, WallStyleKey};
use crate::model::{Level, Wall, WallSpec, WallStyle};
use crate::store::ModelStore;

/// State captured when a transaction begins.
#[derive(Debug)]
struct OpenTransaction {
    name: String,
    walls: SlotMap<WallKey, Wall>,
    joins: FxHashSet<(WallKey, WallKey)>,
}

/// In-memory [`ModelStore`].
///
/// # Example
///
/// ```
/// use curvewall_core::{Document, ModelStore};
///
/// let mut doc = Document::new();
/// doc.add_level("Level 1", 0.0);
/// doc.add_wall_style("Generic - 8\"");
///
/// assert_eq!(doc.levels().len(), 1);
/// assert_eq!(doc.wall_count(), 0);
/// ```
#[derive(Debug, Default)]
pub struct Document {
    levels: SlotMap<LevelKey, Level>,
    styles: SlotMap<WallStyleKey, WallStyle>,
    walls: SlotMap<WallKey, Wall>,
    /// Joined wall pairs, smaller key first
    joins: FxHashSet<(WallKey, WallKey)>,
    open: Option<OpenTransaction>,
    committed: Vec<String>,
}

#[inline]
fn join_pair(a: WallKey, b: WallKey) -> (WallKey, WallKey) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

impl Document {
    /// Creates a new, empty document.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_level(&mut self, name: impl Into<String>, elevation: f64) -> LevelKey {
        let name = name.into();
        self.levels.insert_with_key(|key| Level {
            key,
            name,
            elevation,
        })
    }

    pub fn add_wall_style(&mut self, name: impl Into<String>) -> WallStyleKey {
        let name = name.into();
        self.styles.insert_with_key(|key| WallStyle { key, name })
    }

    pub fn wall_style(&self, key: WallStyleKey) -> Option<&WallStyle> {
        self.styles.get(key)
    }

    /// Live walls in slot order.
    pub fn walls(&self) -> impl Iterator<Item = &Wall> {
        self.walls.values()
    }

    pub fn wall_count(&self) -> usize {
        self.walls.len()
    }

    pub fn is_joined(&self, first: WallKey, second: WallKey) -> bool {
        self.joins.contains(&join_pair(first, second))
    }

    pub fn join_count(&self) -> usize {
        self.joins.len()
    }

    pub fn in_transaction(&self) -> bool {
        self.open.is_some()
    }

    /// Names of committed transactions, oldest first.
    pub fn committed_transactions(&self) -> &[String] {
        &self.committed
    }

    fn require_transaction(&self, operation: &'static str) -> Result<()> {
        if self.open.is_some() {
            Ok(())
        } else {
            Err(Error::NoTransaction(operation))
        }
    }
}

impl ModelStore for Document {
    fn levels(&self) -> Vec<Level> {
        self.levels.values().cloned().collect()
    }

    fn wall_styles(&self) -> Vec<WallStyle> {
        self.styles.values().cloned().collect()
    }

    fn wall(&self, key: WallKey) -> Option<&Wall> {
        self.walls.get(key)
    }

    fn begin_transaction(&mut self, name: &str) -> Result<()> {
        if let Some(open) = &self.open {
            return Err(Error::TransactionOpen {
                open: open.name.clone(),
                requested: name.to_string(),
            });
        }
        self.open = Some(OpenTransaction {
            name: name.to_string(),
            walls: self.walls.clone(),
            joins: self.joins.clone(),
        });
        Ok(())
    }

    fn commit_transaction(&mut self) -> Result<()> {
        let open = self
            .open
            .take()
            .ok_or(Error::NoTransaction("commit_transaction"))?;
        self.committed.push(open.name);
        Ok(())
    }

    fn rollback_transaction(&mut self) -> Result<()> {
        let open = self
            .open
            .take()
            .ok_or(Error::NoTransaction("rollback_transaction"))?;
        self.walls = open.walls;
        self.joins = open.joins;
        Ok(())
    }

    fn create_wall(&mut self, spec: WallSpec) -> Result<WallKey> {
        self.require_transaction("create_wall")?;
        if !(spec.height.is_finite() && spec.height > 0.0) {
            return Err(Error::InvalidHeight(spec.height));
        }
        if !self.levels.contains_key(spec.level) {
            return Err(Error::LevelNotFound(spec.level));
        }
        if !self.styles.contains_key(spec.style) {
            return Err(Error::StyleNotFound(spec.style));
        }
        let key = self
            .walls
            .insert_with_key(|key| Wall::from_spec(key, spec));
        tracing::trace!(wall = ?key, "Wall inserted");
        Ok(key)
    }

    fn join_geometry(&mut self, first: WallKey, second: WallKey) -> Result<()> {
        self.require_transaction("join_geometry")?;
        let a = self.walls.get(first).ok_or(Error::WallNotFound(first))?;
        let b = self.walls.get(second).ok_or(Error::WallNotFound(second))?;

        let fail = |reason| Error::JoinFailed {
            first,
            second,
            reason,
        };
        if first == second {
            return Err(fail("cannot join a wall with itself"));
        }
        let pair = join_pair(first, second);
        if self.joins.contains(&pair) {
            return Err(fail("walls are already joined"));
        }
        if a.curve.intersect(&b.curve).is_disjoint() {
            return Err(fail("walls do not intersect"));
        }

        self.joins.insert(pair);
        Ok(())
    }

    fn delete_wall(&mut self, key: WallKey) -> Result<()> {
        self.require_transaction("delete_wall")?;
        self.walls.remove(key).ok_or(Error::WallNotFound(key))?;
        self.joins.retain(|&(a, b)| a != key && b != key);
        Ok(())
    }
}
