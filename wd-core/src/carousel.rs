use std::f32::consts::TAU;

use bevy::color::Color;

use crate::model::{BodyPart, ModelId};

/// Smallest per-frame advance accepted by [`Carousel::tick`]; anything lower
/// would keep a transition alive forever.
pub const MIN_ROTATION_STEP: f32 = 1.0e-3;

/// Wraps an angle into `[0, 2π)`.
pub fn normalize_angle(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(TAU);
    // rem_euclid can round up to exactly TAU for tiny negative inputs.
    if wrapped >= TAU { 0.0 } else { wrapped }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Paint {
    /// Whatever material the asset shipped with.
    #[default]
    Original,
    Solid(Color),
}

#[derive(Debug, Clone)]
pub struct ModelVariant {
    id: ModelId,
    /// Position in the asset registry; keeps the carousel in registry order.
    order: usize,
    paint: Vec<Paint>,
    choices: [Option<usize>; BodyPart::CUSTOMIZABLE.len()],
    visible: bool,
    yaw: f32,
    animated: bool,
}

impl ModelVariant {
    pub fn new(id: ModelId, order: usize, submesh_count: usize) -> Self {
        Self {
            id,
            order,
            paint: vec![Paint::Original; submesh_count],
            choices: [None; BodyPart::CUSTOMIZABLE.len()],
            visible: false,
            yaw: 0.0,
            animated: false,
        }
    }

    pub fn with_animation(mut self, animated: bool) -> Self {
        self.animated = animated;
        self
    }

    pub fn id(&self) -> ModelId {
        self.id
    }

    pub fn order(&self) -> usize {
        self.order
    }

    pub fn submesh_count(&self) -> usize {
        self.paint.len()
    }

    pub fn paint(&self, ordinal: usize) -> Option<Paint> {
        self.paint.get(ordinal).copied()
    }

    pub fn paints(&self) -> &[Paint] {
        &self.paint
    }

    pub fn visible(&self) -> bool {
        self.visible
    }

    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    pub fn animated(&self) -> bool {
        self.animated
    }

    /// Swatch index last picked for `part`, if any.
    pub fn choice(&self, part: BodyPart) -> Option<usize> {
        part.swatch_row().and_then(|row| self.choices[row])
    }

    pub(crate) fn set_paint(&mut self, ordinal: usize, paint: Paint) -> bool {
        match self.paint.get_mut(ordinal) {
            Some(slot) => {
                *slot = paint;
                true
            }
            None => false,
        }
    }

    pub(crate) fn set_choice(&mut self, part: BodyPart, index: usize) {
        if let Some(row) = part.swatch_row() {
            self.choices[row] = Some(index);
        }
    }

    pub(crate) fn reset_paint(&mut self) {
        self.paint.fill(Paint::Original);
        self.choices = [None; BodyPart::CUSTOMIZABLE.len()];
    }

    pub(crate) fn set_yaw(&mut self, yaw: f32) {
        self.yaw = normalize_angle(yaw);
    }
}

/// Which writer currently owns the active model's yaw.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum YawOwner {
    #[default]
    Idle,
    /// Spin after navigation; `target` is the starting yaw plus one full turn.
    Transitioning { target: f32 },
    /// The scroll handle is being dragged.
    ScrollDriven,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Next,
    Previous,
}

impl Step {
    pub const fn delta(self) -> isize {
        match self {
            Self::Next => 1,
            Self::Previous => -1,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Carousel {
    variants: Vec<ModelVariant>,
    active: usize,
    owner: YawOwner,
}

impl Carousel {
    pub fn len(&self) -> usize {
        self.variants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }

    pub fn owner(&self) -> YawOwner {
        self.owner
    }

    pub fn is_transitioning(&self) -> bool {
        matches!(self.owner, YawOwner::Transitioning { .. })
    }

    pub fn active_index(&self) -> Option<usize> {
        (!self.variants.is_empty()).then_some(self.active)
    }

    pub fn active(&self) -> Option<&ModelVariant> {
        self.variants.get(self.active)
    }

    pub(crate) fn active_mut(&mut self) -> Option<&mut ModelVariant> {
        self.variants.get_mut(self.active)
    }

    pub fn variants(&self) -> &[ModelVariant] {
        &self.variants
    }

    pub(crate) fn variants_mut(&mut self) -> impl Iterator<Item = &mut ModelVariant> {
        self.variants.iter_mut()
    }

    pub fn variant(&self, id: ModelId) -> Option<&ModelVariant> {
        self.variants.iter().find(|v| v.id == id)
    }

    /// Adds a freshly loaded variant in registry order. The first variant
    /// becomes active and visible; later ones start hidden and never steal the
    /// active selection.
    pub fn insert(&mut self, mut variant: ModelVariant) -> bool {
        if self.variant(variant.id).is_some() {
            tracing::warn!(model = %variant.id, "model already in carousel");
            return false;
        }

        let position = self
            .variants
            .iter()
            .position(|v| v.order > variant.order)
            .unwrap_or(self.variants.len());

        if self.variants.is_empty() {
            variant.visible = true;
            self.active = 0;
        } else {
            variant.visible = false;
            if position <= self.active {
                self.active += 1;
            }
        }
        self.variants.insert(position, variant);
        true
    }

    /// Moves the selection one step, wrapping in both directions, and starts
    /// the spin on the new model. Ignored while anything owns the yaw or when
    /// nothing is loaded.
    pub fn navigate(&mut self, step: Step) -> bool {
        if self.variants.is_empty() {
            return false;
        }
        if self.owner != YawOwner::Idle {
            tracing::debug!(owner = ?self.owner, "navigation ignored, yaw is busy");
            return false;
        }

        let count = self.variants.len() as isize;
        let next = (self.active as isize + step.delta()).rem_euclid(count) as usize;
        self.active = next;
        for (index, variant) in self.variants.iter_mut().enumerate() {
            variant.visible = index == next;
        }

        let start = self.variants[next].yaw;
        self.owner = YawOwner::Transitioning { target: start + TAU };
        true
    }

    /// Advances a running spin by one frame. Returns `true` on the frame the
    /// spin completes.
    pub fn tick(&mut self, step: f32) -> bool {
        let YawOwner::Transitioning { target } = self.owner else {
            return false;
        };
        let step = step.max(MIN_ROTATION_STEP);
        let Some(variant) = self.variants.get_mut(self.active) else {
            self.owner = YawOwner::Idle;
            return true;
        };

        variant.yaw += step;
        if variant.yaw >= target {
            variant.yaw = normalize_angle(target);
            self.owner = YawOwner::Idle;
            return true;
        }
        false
    }

    /// Hands yaw ownership to the scroll handle unless a spin is running.
    pub fn claim_scroll(&mut self) -> bool {
        match self.owner {
            YawOwner::Idle | YawOwner::ScrollDriven => {
                self.owner = YawOwner::ScrollDriven;
                true
            }
            YawOwner::Transitioning { .. } => false,
        }
    }

    pub fn release_scroll(&mut self) {
        if self.owner == YawOwner::ScrollDriven {
            self.owner = YawOwner::Idle;
        }
    }
}
