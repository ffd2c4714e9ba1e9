// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Identity types for objects, resources and rows.

use core::fmt;

use crate::table::ROW_COUNT;

/// Number of materials a single model may carry.
pub const MATERIALS_PER_MODEL: u8 = 10;

/// Upper bound (exclusive) on equipment/model slot indices.
pub const SLOT_LIMIT: u8 = 16;

/// Stable handle of a live scene object.
#[repr(transparent)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ObjectRef(pub u16);

impl ObjectRef {
    /// Sentinel meaning "no object".
    pub const NONE: Self = Self(u16::MAX);

    /// Returns `true` for the [`ObjectRef::NONE`] sentinel.
    pub const fn is_none(self) -> bool {
        self.0 == u16::MAX
    }

    /// Returns `true` unless this is the [`ObjectRef::NONE`] sentinel.
    pub const fn is_some(self) -> bool {
        !self.is_none()
    }
}

impl Default for ObjectRef {
    fn default() -> Self {
        Self::NONE
    }
}

impl fmt::Display for ObjectRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_none() {
            f.write_str("#none")
        } else {
            write!(f, "#{}", self.0)
        }
    }
}

/// Which draw object of a character a material belongs to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum DrawObject {
    /// The character body and its equipment models.
    #[default]
    Human = 0,
    /// The main-hand weapon model.
    MainHand = 1,
    /// The off-hand weapon model.
    OffHand = 2,
}

impl fmt::Display for DrawObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Human => "human",
            Self::MainHand => "mainhand",
            Self::OffHand => "offhand",
        })
    }
}

/// Identity of one physical color table: object, draw object, material, slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ResourceKey {
    /// Owning object.
    pub object: ObjectRef,
    /// Draw object within the owner.
    pub draw_object: DrawObject,
    /// Material index within the model.
    pub material_index: u8,
    /// Model slot index.
    pub slot_index: u8,
}

impl ResourceKey {
    /// Address `row_index` within this resource.
    pub const fn row(self, row_index: u8) -> RowKey {
        RowKey {
            object: self.object,
            draw_object: self.draw_object,
            material_index: self.material_index,
            slot_index: self.slot_index,
            row_index,
        }
    }
}

impl fmt::Display for ResourceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{}/slot{}/mat{}",
            self.object, self.draw_object, self.slot_index, self.material_index
        )
    }
}

/// One highlightable row of a color table.
///
/// Two keys are the *same resource* when everything but `row_index` matches,
/// and *identical* when all five fields match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RowKey {
    /// Owning object.
    pub object: ObjectRef,
    /// Draw object within the owner.
    pub draw_object: DrawObject,
    /// Material index within the model.
    pub material_index: u8,
    /// Model slot index.
    pub slot_index: u8,
    /// Row within the color table.
    pub row_index: u8,
}

impl RowKey {
    /// Sentinel meaning "no row".
    pub const INVALID: Self = Self {
        object: ObjectRef::NONE,
        draw_object: DrawObject::Human,
        material_index: u8::MAX,
        slot_index: u8::MAX,
        row_index: u8::MAX,
    };

    /// Build a key from its parts.
    pub const fn new(
        object: ObjectRef,
        draw_object: DrawObject,
        material_index: u8,
        slot_index: u8,
        row_index: u8,
    ) -> Self {
        Self {
            object,
            draw_object,
            material_index,
            slot_index,
            row_index,
        }
    }

    /// A key is valid when it names an object and all indices are in range.
    pub const fn is_valid(&self) -> bool {
        self.object.is_some()
            && self.material_index < MATERIALS_PER_MODEL
            && self.slot_index < SLOT_LIMIT
            && (self.row_index as usize) < ROW_COUNT
    }

    /// The resource this row lives in.
    pub const fn resource(&self) -> ResourceKey {
        ResourceKey {
            object: self.object,
            draw_object: self.draw_object,
            material_index: self.material_index,
            slot_index: self.slot_index,
        }
    }

    /// `true` when both keys address the same color table.
    pub fn same_resource(&self, other: &Self) -> bool {
        self.resource() == other.resource()
    }
}

impl Default for RowKey {
    fn default() -> Self {
        Self::INVALID
    }
}

impl fmt::Display for RowKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid() {
            write!(f, "{}/row{}", self.resource(), self.row_index)
        } else {
            f.write_str("invalid")
        }
    }
}
