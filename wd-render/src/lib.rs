use bevy::prelude::*;
use wd_core::{AssetRegistry, Studio, StudioCommand, StudioConfig};

mod camera;
mod capture;
mod components;
mod control;
pub mod loading;
mod sync;
mod world;

pub use components::{
    AppliedPaint, CaptureTarget, ModelRoot, SceneReady, StageCamera, Submesh, SubmeshIndex,
};
pub use loading::ModelLoadOutcome;
pub use sync::solid_material;
pub use world::StageSettings;

/// Stage, model loading and the systems that mirror [`Studio`] onto the scene.
///
/// Insert [`StudioConfig`], [`AssetRegistry`] and [`Studio`] before adding the
/// plugin to override the defaults.
pub struct RenderPlugin;

impl Plugin for RenderPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<StudioConfig>()
            .init_resource::<AssetRegistry>()
            .init_resource::<Studio>()
            .init_resource::<world::StageSettings>()
            .init_resource::<loading::PendingModels>()
            .add_event::<StudioCommand>()
            .add_event::<loading::ModelLoadOutcome>()
            .add_systems(
                Startup,
                (
                    world::setup_stage,
                    camera::spawn_camera,
                    loading::request_model_loads,
                ),
            )
            .add_systems(
                Update,
                (
                    loading::poll_model_loads,
                    loading::spawn_loaded_models.after(loading::poll_model_loads),
                    loading::mark_ready_scenes.after(loading::spawn_loaded_models),
                    loading::index_ready_models.after(loading::mark_ready_scenes),
                    control::apply_studio_commands.after(loading::index_ready_models),
                    sync::tick_carousel.after(control::apply_studio_commands),
                    sync::sync_model_roots.after(sync::tick_carousel),
                    sync::sync_submesh_paint.after(control::apply_studio_commands),
                    capture::capture_screenshot,
                ),
            );
    }
}

#[cfg(test)]
mod tests;
