// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Deterministic color tables and row keys.

use glint_port::{ColorRow, ColorTable, DrawObject, ObjectRef, Rgb, RowKey, ROW_COUNT};

/// Human draw object, slot 0, the given material and row.
pub fn row_key(object: ObjectRef, material_index: u8, row_index: u8) -> RowKey {
    RowKey::new(object, DrawObject::Human, material_index, 0, row_index)
}

fn channel(seed: u32, index: u32, salt: u32) -> f32 {
    let mixed = seed
        .wrapping_mul(0x9E37_79B9)
        .wrapping_add(index.wrapping_mul(0x85EB_CA6B))
        .wrapping_add(salt.wrapping_mul(0xC2B2_AE35));
    (mixed >> 8) as f32 / (1u32 << 24) as f32
}

/// A row whose every field depends on `seed` and `index`.
pub fn sample_row(seed: u32, index: u32) -> ColorRow {
    let rgb = |salt: u32| -> Rgb {
        [
            channel(seed, index, salt),
            channel(seed, index, salt + 1),
            channel(seed, index, salt + 2),
        ]
    };
    ColorRow {
        diffuse: rgb(0),
        specular_strength: channel(seed, index, 3),
        specular: rgb(4),
        gloss: 1.0 + 40.0 * channel(seed, index, 7),
        emissive: rgb(8),
        tile_index: (seed.wrapping_add(index) % 64) as u16,
        tile_alpha: channel(seed, index, 11),
        tile_transform: [
            channel(seed, index, 12),
            0.0,
            -0.0,
            channel(seed, index, 13),
        ],
        reserved: [
            seed as u16,
            index as u16,
            (seed >> 16) as u16,
            0xBEEF,
        ],
    }
}

/// A table of [`sample_row`]s; distinct seeds give bitwise-distinct tables.
pub fn sample_table(seed: u32) -> ColorTable {
    TableBuilder::seeded(seed).build()
}

/// Builder for hand-edited tables.
#[derive(Clone, Debug)]
pub struct TableBuilder {
    table: ColorTable,
}

impl Default for TableBuilder {
    fn default() -> Self {
        Self {
            table: ColorTable::default(),
        }
    }
}

impl TableBuilder {
    /// Start from a table of default rows.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from [`sample_table`]`(seed)`.
    pub fn seeded(seed: u32) -> Self {
        let rows = core::array::from_fn::<_, ROW_COUNT, _>(|i| sample_row(seed, i as u32));
        Self {
            table: ColorTable::from_rows(rows),
        }
    }

    /// Set the diffuse color of row `index` (ignored if out of range).
    pub fn diffuse(mut self, index: u8, color: Rgb) -> Self {
        if let Some(row) = self.table.row_mut(index) {
            row.diffuse = color;
        }
        self
    }

    /// Set the emissive color of row `index` (ignored if out of range).
    pub fn emissive(mut self, index: u8, color: Rgb) -> Self {
        if let Some(row) = self.table.row_mut(index) {
            row.emissive = color;
        }
        self
    }

    /// Finish.
    pub fn build(self) -> ColorTable {
        self.table
    }
}
