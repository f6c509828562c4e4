//! Which sub-meshes of each model belong to which body part.
//!
//! Sub-meshes are addressed by their ordinal in a pre-order walk of the loaded
//! scene (see `wd-render`'s loader). The tables are hand-authored against the
//! shipped assets and checked with [`MaterialIndexMap::validate`] when a model
//! finishes loading.

use std::collections::HashMap;

use crate::error::MaterialMapError;
use crate::model::{BodyPart, ModelId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotTable {
    pub skin: &'static [usize],
    pub hair: &'static [usize],
    pub top: &'static [usize],
    pub bottom: &'static [usize],
    pub shoes: &'static [usize],
    pub eyes: &'static [usize],
}

impl SlotTable {
    pub const fn slots(&self, part: BodyPart) -> &'static [usize] {
        match part {
            BodyPart::Skin => self.skin,
            BodyPart::Hair => self.hair,
            BodyPart::Top => self.top,
            BodyPart::Bottom => self.bottom,
            BodyPart::Shoes => self.shoes,
            BodyPart::Eyes => self.eyes,
        }
    }

    fn iter(&self) -> impl Iterator<Item = (BodyPart, &'static [usize])> + '_ {
        [
            BodyPart::Skin,
            BodyPart::Hair,
            BodyPart::Top,
            BodyPart::Bottom,
            BodyPart::Shoes,
            BodyPart::Eyes,
        ]
        .into_iter()
        .map(|part| (part, self.slots(part)))
    }
}

pub static STREETWEAR_SLOTS: SlotTable = SlotTable {
    skin: &[2, 3, 4],
    hair: &[0, 1, 10, 11],
    top: &[5, 6],
    bottom: &[7],
    shoes: &[8, 9],
    eyes: &[12, 13],
};

pub static ATHLETIC_SLOTS: SlotTable = SlotTable {
    skin: &[0, 4, 5],
    hair: &[1],
    top: &[2, 3],
    bottom: &[6, 7],
    shoes: &[8],
    eyes: &[9, 10],
};

pub static FORMAL_SLOTS: SlotTable = SlotTable {
    skin: &[3, 4],
    hair: &[0, 1, 2],
    top: &[5, 6, 7],
    bottom: &[8],
    shoes: &[9, 10],
    eyes: &[11],
};

/// Order in which parts are painted when `part` is picked.
///
/// Skin carries the eyes along: the eyes are reset to their fixed color first,
/// then skin is laid on top.
pub const fn layer_plan(part: BodyPart) -> &'static [BodyPart] {
    match part {
        BodyPart::Skin => &[BodyPart::Eyes, BodyPart::Skin],
        BodyPart::Hair => &[BodyPart::Hair],
        BodyPart::Top => &[BodyPart::Top],
        BodyPart::Bottom => &[BodyPart::Bottom],
        BodyPart::Shoes => &[BodyPart::Shoes],
        BodyPart::Eyes => &[BodyPart::Eyes],
    }
}

#[derive(Debug, Clone, Default)]
pub struct MaterialIndexMap {
    tables: HashMap<ModelId, SlotTable>,
}

impl MaterialIndexMap {
    pub fn builtin() -> Self {
        Self::default()
            .with(ModelId::Streetwear, STREETWEAR_SLOTS)
            .with(ModelId::Athletic, ATHLETIC_SLOTS)
            .with(ModelId::Formal, FORMAL_SLOTS)
    }

    pub fn with(mut self, model: ModelId, table: SlotTable) -> Self {
        self.tables.insert(model, table);
        self
    }

    pub fn table(&self, model: ModelId) -> Option<&SlotTable> {
        self.tables.get(&model)
    }

    /// Slots for `(model, part)`. An empty list counts as unregistered.
    pub fn slots(&self, model: ModelId, part: BodyPart) -> Option<&'static [usize]> {
        self.table(model)
            .map(|table| table.slots(part))
            .filter(|slots| !slots.is_empty())
    }

    /// Checks every slot of `model` against the number of sub-meshes the loaded
    /// scene actually has.
    pub fn validate(&self, model: ModelId, submesh_count: usize) -> Result<(), MaterialMapError> {
        let table = self
            .table(model)
            .ok_or(MaterialMapError::Unregistered { model })?;
        for (part, slots) in table.iter() {
            if let Some(&slot) = slots.iter().find(|&&slot| slot >= submesh_count) {
                return Err(MaterialMapError::SlotOutOfRange {
                    model,
                    part,
                    slot,
                    count: submesh_count,
                });
            }
        }
        Ok(())
    }
}
