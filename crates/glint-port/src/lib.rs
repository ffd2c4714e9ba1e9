// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Port contract for Glint color-table previews.
//!
//! This crate defines the domain contract between the previewer and the host
//! that owns the live scene. It contains NO preview logic; that lives in
//! glint-preview.
//!
//! # Design Principles
//!
//! - **Hosts are dumb**: They resolve objects and swap whole tables. No
//!   highlight logic.
//! - **No time ownership**: The frame counter comes from the tick source,
//!   never from the store.
//! - **Whole-table writes**: A color table is replaced in one call; there is
//!   no partial row patching.

use thiserror::Error;

mod canon;
mod port;
mod table;
mod types;

pub use canon::{row_bits, table_bits, ROW_WORDS};
pub use port::{ColorTableStore, ObjectHandle, ObjectKind, ObjectRegistry};
pub use table::{scale_rgb, ColorRow, ColorTable, Rgb, ROW_COUNT};
pub use types::{
    DrawObject, ObjectRef, ResourceKey, RowKey, MATERIALS_PER_MODEL, SLOT_LIMIT,
};

/// Error raised when an object or its color table can no longer be located.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// The row key is the invalid sentinel or has out-of-range indices.
    #[error("invalid row key: {0}")]
    InvalidKey(RowKey),
    /// The object handle no longer denotes a live object.
    #[error("object {0} is gone")]
    ObjectGone(ObjectRef),
    /// The object is alive but is not character-like.
    #[error("object {0} is not a character")]
    NotCharacter(ObjectRef),
    /// The draw object or material for the key is not loaded.
    #[error("material missing for {0}")]
    MaterialMissing(ResourceKey),
    /// The material exists but carries no color table.
    #[error("no color table for {0}")]
    NoColorTable(ResourceKey),
}
