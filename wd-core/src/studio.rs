use bevy::prelude::{Event, Resource};

use crate::carousel::{Carousel, ModelVariant, Paint, Step};
use crate::drag::{ScrollDrag, TrackMetrics};
use crate::error::{CustomizeError, MaterialMapError};
use crate::material_map::{MaterialIndexMap, layer_plan};
use crate::model::{BodyPart, ModelId};
use crate::palette::Palette;

#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub enum StudioCommand {
    Navigate(Step),
    ApplyColor { part: BodyPart, index: usize },
    ResetAll,
    Capture,
    ToggleMusic,
    Drag(DragInput),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragInput {
    Press { x: f32 },
    Move { x: f32 },
    Release,
    Resize(TrackMetrics),
}

/// Everything the customizer mutates in response to input. Render systems
/// read it and mirror it onto the scene.
#[derive(Resource, Debug, Clone)]
pub struct Studio {
    carousel: Carousel,
    drag: ScrollDrag,
    map: MaterialIndexMap,
    palette: Palette,
}

impl Default for Studio {
    fn default() -> Self {
        Self::new(MaterialIndexMap::builtin(), Palette::default())
    }
}

impl Studio {
    pub fn new(map: MaterialIndexMap, palette: Palette) -> Self {
        Self {
            carousel: Carousel::default(),
            drag: ScrollDrag::default(),
            map,
            palette,
        }
    }

    pub fn carousel(&self) -> &Carousel {
        &self.carousel
    }

    pub fn drag(&self) -> &ScrollDrag {
        &self.drag
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn active_model(&self) -> Option<ModelId> {
        self.carousel.active().map(ModelVariant::id)
    }

    pub fn paint_of(&self, model: ModelId, ordinal: usize) -> Option<Paint> {
        self.carousel
            .variant(model)
            .and_then(|variant| variant.paint(ordinal))
    }

    /// Validates the slot table against the loaded scene and adds the model to
    /// the carousel.
    pub fn register(
        &mut self,
        model: ModelId,
        order: usize,
        submesh_count: usize,
        animated: bool,
    ) -> Result<(), MaterialMapError> {
        self.map.validate(model, submesh_count)?;
        let variant = ModelVariant::new(model, order, submesh_count).with_animation(animated);
        self.carousel.insert(variant);
        Ok(())
    }

    pub fn navigate(&mut self, step: Step) -> bool {
        self.carousel.navigate(step)
    }

    pub fn tick(&mut self, rotation_step: f32) -> bool {
        self.carousel.tick(rotation_step)
    }

    /// Paints the active model's `part` slots with palette color `index`.
    /// Returns how many sub-meshes were painted. On error nothing changes.
    pub fn apply_color(&mut self, part: BodyPart, index: usize) -> Result<usize, CustomizeError> {
        if !part.is_customizable() {
            return Err(CustomizeError::NotCustomizable { part });
        }
        let variant = self
            .carousel
            .active()
            .ok_or(CustomizeError::NoActiveModel)?;
        let model = variant.id();
        let color = self.palette.color(part, index).ok_or_else(|| {
            CustomizeError::PaletteIndexOutOfRange {
                part,
                index,
                len: self.palette.colors(part).len(),
            }
        })?;
        if self.map.slots(model, part).is_none() {
            return Err(CustomizeError::UnregisteredVariant { model, part });
        }

        let mut plan = Vec::new();
        for &layer in layer_plan(part) {
            let slots = self.map.slots(model, layer).unwrap_or(&[]);
            let paint = if layer == part {
                Paint::Solid(color)
            } else {
                Paint::Solid(self.palette.eye_color())
            };
            plan.push((layer, slots, paint));
        }

        let count = variant.submesh_count();
        for &(layer, slots, _) in &plan {
            if let Some(&slot) = slots.iter().find(|&&slot| slot >= count) {
                return Err(MaterialMapError::SlotOutOfRange {
                    model,
                    part: layer,
                    slot,
                    count,
                }
                .into());
            }
        }

        let Some(variant) = self.carousel.active_mut() else {
            return Err(CustomizeError::NoActiveModel);
        };
        let mut painted = 0;
        for (_, slots, paint) in plan {
            for &slot in slots {
                if variant.set_paint(slot, paint) {
                    painted += 1;
                }
            }
        }
        variant.set_choice(part, index);
        Ok(painted)
    }

    pub fn reset_all(&mut self) {
        for variant in self.carousel.variants_mut() {
            variant.reset_paint();
        }
    }

    pub fn handle_drag(&mut self, input: DragInput) {
        match input {
            DragInput::Press { x } => self.drag.press(x),
            DragInput::Move { x } => {
                if self.drag.drag_to(x).is_none() || self.carousel.is_empty() {
                    return;
                }
                if !self.carousel.claim_scroll() {
                    return;
                }
                let yaw = self.drag.rotation();
                if let Some(variant) = self.carousel.active_mut() {
                    variant.set_yaw(yaw);
                }
            }
            DragInput::Release => {
                self.drag.release();
                self.carousel.release_scroll();
            }
            DragInput::Resize(track) => self.drag.resize(track),
        }
    }
}
