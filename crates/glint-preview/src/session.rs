// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Active highlight session and the per-frame hover slot.

use glint_port::{ColorTable, ObjectRef, RowKey};

/// A row currently highlighted on the external table.
///
/// `saved` is the table as it was before the first highlight write; it is what
/// gets written back when the session ends.
#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    pub(crate) key: RowKey,
    pub(crate) object: ObjectRef,
    pub(crate) saved: ColorTable,
}

impl Session {
    /// Highlighted row.
    pub fn key(&self) -> RowKey {
        self.key
    }

    /// Object the highlight was applied to.
    pub fn object(&self) -> ObjectRef {
        self.object
    }

    /// Pre-highlight snapshot of the row's table.
    pub fn saved(&self) -> &ColorTable {
        &self.saved
    }

    /// `true` when a request for `key` on `object` still targets this
    /// session's table, so the live table is our own write and must not be
    /// used as a new baseline.
    pub(crate) fn covers_resource(&self, key: &RowKey, object: ObjectRef) -> bool {
        self.object == object && self.key.same_resource(key)
    }

    pub(crate) fn is_target(&self, key: &RowKey, object: ObjectRef) -> bool {
        self.object == object && self.key == *key
    }
}

/// Hover recorded since the last tick.
#[derive(Clone, Debug)]
pub(crate) struct PendingHover {
    pub(crate) key: RowKey,
    pub(crate) object: ObjectRef,
    /// Table to restore if this hover starts a session: the caller's table
    /// for a new resource, the active session's snapshot otherwise.
    pub(crate) baseline: ColorTable,
}
