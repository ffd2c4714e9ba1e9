// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Port traits the host implements for the previewer.

use crate::{ColorTable, ObjectRef, ResolveError, RowKey};

/// What kind of object a registry handle denotes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ObjectKind {
    /// A character-like object that owns draw objects and materials.
    Character,
    /// Anything else (props, effects, companions without materials).
    Other,
}

/// A resolved, currently-live scene object.
///
/// Handles are only valid for the frame they were resolved in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ObjectHandle {
    /// The reference this handle was resolved from.
    pub object: ObjectRef,
    /// Kind of the live object.
    pub kind: ObjectKind,
}

impl ObjectHandle {
    /// `true` when the handle denotes a character-like object.
    pub fn is_character(&self) -> bool {
        self.kind == ObjectKind::Character
    }
}

/// Live object lookup.
pub trait ObjectRegistry {
    /// Resolve `object` to a live handle, or `None` when it no longer exists.
    fn resolve(&self, object: ObjectRef) -> Option<ObjectHandle>;
}

/// Access to the color tables bound to a character's materials.
///
/// Writes always replace the whole table; the backing resource has no
/// row-level update.
pub trait ColorTableStore {
    /// Read the table currently bound to `key`'s resource.
    fn color_table(&self, target: &ObjectHandle, key: RowKey) -> Result<ColorTable, ResolveError>;

    /// Replace the table bound to `key`'s resource with `table`.
    fn replace_color_table(
        &mut self,
        target: &ObjectHandle,
        key: RowKey,
        table: &ColorTable,
    ) -> Result<(), ResolveError>;
}
