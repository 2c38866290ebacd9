// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Identity types for model entities.
//!
//! Levels, wall styles and walls live in slot maps inside the document, so
//! their keys stay valid (and distinguishable) after other walls are deleted.
//! Curve elements come from outside the document and carry a plain numeric id.

use slotmap::new_key_type;

new_key_type! {
    /// Key for a level (horizontal reference plane).
    pub struct LevelKey;

    /// Key for a wall style (wall type).
    pub struct WallStyleKey;

    /// Key for a created wall.
    pub struct WallKey;
}

/// Opaque identity of an input curve element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(pub u64);

impl std::fmt::Display for ElementId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slotmap::{Key, SlotMap};

    #[test]
    fn element_id_display() {
        assert_eq!(ElementId(42).to_string(), "#42");
    }

    #[test]
    fn removed_key_is_not_reused() {
        let mut walls: SlotMap<WallKey, u32> = SlotMap::with_key();
        let first = walls.insert(1);
        walls.remove(first);
        let second = walls.insert(2);
        assert_ne!(first, second);
        assert!(walls.get(first).is_none());
        assert!(WallKey::null().is_null());
    }
}
