// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Color rows and fixed-size color tables.

use crate::canon::row_bits;

/// Number of rows in a color table.
pub const ROW_COUNT: usize = 32;

/// Linear RGB triple, each component nominally in `[0, 1]`.
pub type Rgb = [f32; 3];

/// Divide every component of `color` by `divisor`.
pub fn scale_rgb(color: Rgb, divisor: f32) -> Rgb {
    [color[0] / divisor, color[1] / divisor, color[2] / divisor]
}

/// One row of a color table.
///
/// Only `diffuse` and `emissive` are ever touched by the previewer; every
/// other field is carried through copies unchanged.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorRow {
    /// Diffuse color.
    pub diffuse: Rgb,
    /// Specular strength multiplier.
    pub specular_strength: f32,
    /// Specular color.
    pub specular: Rgb,
    /// Gloss exponent.
    pub gloss: f32,
    /// Emissive color.
    pub emissive: Rgb,
    /// Detail tile index.
    pub tile_index: u16,
    /// Detail tile opacity.
    pub tile_alpha: f32,
    /// Detail tile UV transform (2x2, row-major).
    pub tile_transform: [f32; 4],
    /// Words the engine does not interpret.
    pub reserved: [u16; 4],
}

impl Default for ColorRow {
    fn default() -> Self {
        Self {
            diffuse: [1.0, 1.0, 1.0],
            specular_strength: 1.0,
            specular: [1.0, 1.0, 1.0],
            gloss: 20.0,
            emissive: [0.0, 0.0, 0.0],
            tile_index: 0,
            tile_alpha: 1.0,
            tile_transform: [16.0, 0.0, 0.0, 16.0],
            reserved: [0; 4],
        }
    }
}

impl ColorRow {
    /// Bitwise equality over every field (distinguishes `-0.0` and NaN payloads).
    pub fn bit_eq(&self, other: &Self) -> bool {
        row_bits(self) == row_bits(other)
    }
}

/// Fixed-size ordered sequence of [`ColorRow`]s bound to one material.
#[derive(Clone, Debug, PartialEq)]
pub struct ColorTable {
    rows: [ColorRow; ROW_COUNT],
}

impl Default for ColorTable {
    fn default() -> Self {
        Self {
            rows: [ColorRow::default(); ROW_COUNT],
        }
    }
}

impl ColorTable {
    /// Build a table from explicit rows.
    pub const fn from_rows(rows: [ColorRow; ROW_COUNT]) -> Self {
        Self { rows }
    }

    /// Row at `index`, if in range.
    pub fn row(&self, index: u8) -> Option<&ColorRow> {
        self.rows.get(usize::from(index))
    }

    /// Mutable row at `index`, if in range.
    pub fn row_mut(&mut self, index: u8) -> Option<&mut ColorRow> {
        self.rows.get_mut(usize::from(index))
    }

    /// All rows in order.
    pub fn rows(&self) -> &[ColorRow; ROW_COUNT] {
        &self.rows
    }

    /// Bitwise equality over every row.
    pub fn bit_eq(&self, other: &Self) -> bool {
        self.rows
            .iter()
            .zip(other.rows.iter())
            .all(|(a, b)| a.bit_eq(b))
    }

    /// Indices of rows whose bits differ between `self` and `other`.
    pub fn differing_rows(&self, other: &Self) -> Vec<u8> {
        self.rows
            .iter()
            .zip(other.rows.iter())
            .enumerate()
            .filter(|(_, (a, b))| !a.bit_eq(b))
            .map(|(i, _)| i as u8)
            .collect()
    }
}
