use std::f32::consts::TAU;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TrackMetrics {
    pub container_width: f32,
    pub handle_width: f32,
}

impl TrackMetrics {
    pub fn new(container_width: f32, handle_width: f32) -> Self {
        Self {
            container_width,
            handle_width,
        }
    }

    /// Furthest the handle may travel. Never negative, even when the handle is
    /// wider than its container.
    pub fn max_offset(&self) -> f32 {
        (self.container_width - self.handle_width).max(0.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragState {
    #[default]
    Released,
    Dragging { start_x: f32, initial_offset: f32 },
}

/// Horizontal scroll handle whose position doubles as the model's yaw.
#[derive(Debug, Clone, Default)]
pub struct ScrollDrag {
    state: DragState,
    offset: f32,
    track: TrackMetrics,
}

impl ScrollDrag {
    pub fn state(&self) -> DragState {
        self.state
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    pub fn offset(&self) -> f32 {
        self.offset
    }

    pub fn track(&self) -> TrackMetrics {
        self.track
    }

    pub fn resize(&mut self, track: TrackMetrics) {
        self.track = track;
        self.offset = self.offset.clamp(0.0, track.max_offset());
    }

    pub fn press(&mut self, pointer_x: f32) {
        self.state = DragState::Dragging {
            start_x: pointer_x,
            initial_offset: self.offset,
        };
    }

    /// Moves the handle with the pointer. Returns the new offset, or `None`
    /// when no drag is in progress.
    pub fn drag_to(&mut self, pointer_x: f32) -> Option<f32> {
        let DragState::Dragging {
            start_x,
            initial_offset,
        } = self.state
        else {
            return None;
        };
        let delta = pointer_x - start_x;
        self.offset = (initial_offset + delta).clamp(0.0, self.track.max_offset());
        Some(self.offset)
    }

    pub fn release(&mut self) {
        self.state = DragState::Released;
    }

    /// `offset / max_offset` mapped onto one full turn.
    pub fn rotation(&self) -> f32 {
        let max = self.track.max_offset();
        if max <= 0.0 {
            return 0.0;
        }
        (self.offset / max) * TAU
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dragger() -> ScrollDrag {
        let mut drag = ScrollDrag::default();
        drag.resize(TrackMetrics::new(300.0, 50.0));
        drag
    }

    #[test]
    fn offset_stays_on_track() {
        let mut drag = dragger();
        drag.press(100.0);
        assert_eq!(
            drag.state(),
            DragState::Dragging {
                start_x: 100.0,
                initial_offset: 0.0
            }
        );
        assert_eq!(drag.drag_to(10_000.0), Some(250.0));
        assert_eq!(drag.drag_to(-10_000.0), Some(0.0));
        assert_eq!(drag.drag_to(160.0), Some(60.0));
    }

    #[test]
    fn second_drag_starts_from_previous_offset() {
        let mut drag = dragger();
        drag.press(0.0);
        drag.drag_to(80.0);
        drag.release();

        assert_eq!(drag.state(), DragState::Released);

        drag.press(500.0);
        assert_eq!(drag.drag_to(520.0), Some(100.0));
    }

    #[test]
    fn moves_without_press_are_ignored() {
        let mut drag = dragger();
        assert_eq!(drag.drag_to(120.0), None);
        assert_eq!(drag.offset(), 0.0);
    }

    #[test]
    fn rotation_spans_one_turn() {
        let mut drag = dragger();
        drag.press(0.0);
        drag.drag_to(125.0);
        assert!((drag.rotation() - TAU / 2.0).abs() < 1e-5);
        drag.drag_to(250.0);
        assert!((drag.rotation() - TAU).abs() < 1e-5);
    }

    #[test]
    fn handle_wider_than_track_has_no_travel() {
        let mut drag = ScrollDrag::default();
        drag.resize(TrackMetrics::new(40.0, 50.0));
        drag.press(0.0);
        assert_eq!(drag.drag_to(30.0), Some(0.0));
        assert_eq!(drag.rotation(), 0.0);
    }

    #[test]
    fn shrinking_track_reclamps_offset() {
        let mut drag = dragger();
        drag.press(0.0);
        drag.drag_to(250.0);
        drag.release();
        drag.resize(TrackMetrics::new(150.0, 50.0));
        assert_eq!(drag.track().max_offset(), 100.0);
        assert_eq!(drag.offset(), 100.0);
    }
}
