// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Bit-level projections of color rows for exact comparison.
//!
//! Float `==` treats `-0.0 == 0.0` and `NaN != NaN`. Restoring a table must be
//! exact, so equality checks on snapshots go through these projections.

use crate::table::{ColorRow, ColorTable, ROW_COUNT};

/// Number of 32-bit words in a projected [`ColorRow`].
pub const ROW_WORDS: usize = 21;

/// Project every field of `row` onto its raw bits, in declaration order.
pub fn row_bits(row: &ColorRow) -> [u32; ROW_WORDS] {
    let mut out = [0u32; ROW_WORDS];
    let words = row
        .diffuse
        .iter()
        .chain(core::iter::once(&row.specular_strength))
        .chain(row.specular.iter())
        .chain(core::iter::once(&row.gloss))
        .chain(row.emissive.iter())
        .map(|f| f.to_bits())
        .chain(core::iter::once(u32::from(row.tile_index)))
        .chain(core::iter::once(row.tile_alpha.to_bits()))
        .chain(row.tile_transform.iter().map(|f| f.to_bits()))
        .chain(row.reserved.iter().map(|w| u32::from(*w)));
    for (slot, word) in out.iter_mut().zip(words) {
        *slot = word;
    }
    out
}

/// Project a whole table, row by row.
pub fn table_bits(table: &ColorTable) -> Vec<[u32; ROW_WORDS]> {
    let mut out = Vec::with_capacity(ROW_COUNT);
    out.extend(table.rows().iter().map(row_bits));
    out
}
