// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The persistence seam.
//!
//! [`ModelStore`] is what the wall pipeline needs from a building-model
//! document: read levels and styles, and create, join and delete walls inside
//! a transaction. [`Transaction`] scopes those mutations; dropping it without
//! committing rolls everything back.

use std::ops::{Deref, DerefMut};

use crate::error::Result;
use crate::keys::WallKey;
use crate::model::{Level, Wall, WallSpec, WallStyle};

/// A building-model document that walls can be written to.
///
/// Only one transaction may be open at a time. Mutating calls outside a
/// transaction fail.
pub trait ModelStore {
    /// All levels, in document order.
    fn levels(&self) -> Vec<Level>;

    /// All wall styles, in document order.
    fn wall_styles(&self) -> Vec<WallStyle>;

    /// Look up a live wall.
    fn wall(&self, key: WallKey) -> Option<&Wall>;

    fn begin_transaction(&mut self, name: &str) -> Result<()>;

    fn commit_transaction(&mut self) -> Result<()>;

    /// Discard every change since the transaction began.
    fn rollback_transaction(&mut self) -> Result<()>;

    fn create_wall(&mut self, spec: WallSpec) -> Result<WallKey>;

    /// Join the geometry of two walls so their intersection is cleaned up.
    fn join_geometry(&mut self, first: WallKey, second: WallKey) -> Result<()>;

    fn delete_wall(&mut self, key: WallKey) -> Result<()>;
}

/// Open transaction on a [`ModelStore`].
///
/// Dereferences to the store so mutations read naturally:
///
/// ```ignore
/// let mut tx = Transaction::start(&mut doc, "Create Walls from Curves")?;
/// let key = tx.create_wall(spec)?;
/// tx.commit()?;
/// ```
pub struct Transaction<'a, S: ModelStore + ?Sized> {
    store: &'a mut S,
    name: String,
    finished: bool,
}

impl<'a, S: ModelStore + ?Sized> Transaction<'a, S> {
    pub fn start(store: &'a mut S, name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        store.begin_transaction(&name)?;
        tracing::debug!(transaction = %name, "Transaction started");
        Ok(Self {
            store,
            name,
            finished: false,
        })
    }

    pub fn commit(mut self) -> Result<()> {
        // On failure `self` drops unfinished and rolls back
        self.store.commit_transaction()?;
        self.finished = true;
        tracing::debug!(transaction = %self.name, "Transaction committed");
        Ok(())
    }

    pub fn rollback(mut self) -> Result<()> {
        self.finished = true;
        self.store.rollback_transaction()?;
        tracing::debug!(transaction = %self.name, "Transaction rolled back");
        Ok(())
    }
}

impl<S: ModelStore + ?Sized> Deref for Transaction<'_, S> {
    type Target = S;

    fn deref(&self) -> &S {
        &*self.store
    }
}

impl<S: ModelStore + ?Sized> DerefMut for Transaction<'_, S> {
    fn deref_mut(&mut self) -> &mut S {
        &mut *self.store
    }
}

impl<S: ModelStore + ?Sized> Drop for Transaction<'_, S> {
    fn drop(&mut self) {
        if self.finished {
            return;
        }
        tracing::warn!(
            transaction = %self.name,
            "Transaction dropped without commit, rolling back"
        );
        if let Err(err) = self.store.rollback_transaction() {
            tracing::error!(transaction = %self.name, error = %err, "Rollback failed");
        }
    }
}
