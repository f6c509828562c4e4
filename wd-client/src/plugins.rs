use bevy::asset::AssetPlugin;
use bevy::log::LogPlugin;
use bevy::prelude::*;
use bevy::window::WindowResolution;
use wd_core::StudioConfig;
use wd_render::RenderPlugin;
use wd_sound::SoundPlugin;
use wd_ui::UiPlugin;

/// Everything the customizer needs on top of bevy's defaults. The config,
/// registry and studio resources must already be inserted.
pub struct StudioPlugins {
    pub config: StudioConfig,
}

impl Plugin for StudioPlugins {
    fn build(&self, app: &mut App) {
        let window = &self.config.window;
        // Logging goes through our own subscriber, set up in main.
        app.add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: window.title.clone(),
                        resolution: WindowResolution::new(window.width, window.height),
                        ..default()
                    }),
                    ..default()
                })
                .set(AssetPlugin {
                    file_path: self.config.assets.root.clone(),
                    ..default()
                })
                .disable::<LogPlugin>(),
        )
        .add_plugins((RenderPlugin, UiPlugin, SoundPlugin, ClientDiagnosticsPlugin));
    }
}

pub struct ClientDiagnosticsPlugin;

#[cfg(feature = "frame_diagnostics")]
impl Plugin for ClientDiagnosticsPlugin {
    fn build(&self, app: &mut App) {
        use bevy::diagnostic::{FrameTimeDiagnosticsPlugin, LogDiagnosticsPlugin};

        app.add_plugins((
            FrameTimeDiagnosticsPlugin::default(),
            LogDiagnosticsPlugin::default(),
        ));
    }
}

#[cfg(not(feature = "frame_diagnostics"))]
impl Plugin for ClientDiagnosticsPlugin {
    fn build(&self, _app: &mut App) {}
}
