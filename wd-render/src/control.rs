use bevy::prelude::*;
use wd_core::{Studio, StudioCommand};

use crate::components::Submesh;

/// Applies queued UI/keyboard commands to the studio. Capture and music are
/// picked up by their own systems.
pub fn apply_studio_commands(
    mut commands_in: EventReader<StudioCommand>,
    mut studio: ResMut<Studio>,
    mut submeshes: Query<(&Submesh, &mut Transform)>,
) {
    for command in commands_in.read() {
        match *command {
            StudioCommand::Navigate(step) => {
                if studio.navigate(step) {
                    if let Some(model) = studio.active_model() {
                        info!(%model, ?step, "switched model");
                    }
                }
            }
            StudioCommand::ApplyColor { part, index } => match studio.apply_color(part, index) {
                Ok(painted) => debug!(%part, index, painted, "applied color"),
                Err(err) => warn!(%part, index, %err, "color not applied"),
            },
            StudioCommand::ResetAll => {
                studio.reset_all();
                for (submesh, mut transform) in &mut submeshes {
                    *transform = submesh.original_transform;
                }
                info!("customization reset");
            }
            StudioCommand::Drag(input) => studio.handle_drag(input),
            StudioCommand::Capture | StudioCommand::ToggleMusic => {}
        }
    }
}
