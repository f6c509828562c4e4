use bevy::prelude::*;
use bevy::render::view::screenshot::{Screenshot, save_to_disk};
use wd_core::{StudioCommand, StudioConfig};

use crate::components::CaptureTarget;

/// Saves the next rendered frame of the primary window. Several requests in
/// one frame produce a single file.
pub fn capture_screenshot(
    mut commands: Commands,
    mut requests: EventReader<StudioCommand>,
    config: Res<StudioConfig>,
) {
    let requested = requests
        .read()
        .filter(|command| matches!(command, StudioCommand::Capture))
        .count();
    if requested == 0 {
        return;
    }

    let path = config.capture.output_path();
    if let Some(dir) = path.parent()
        && !dir.as_os_str().is_empty()
        && let Err(err) = std::fs::create_dir_all(dir)
    {
        error!(dir = %dir.display(), %err, "cannot create screenshot directory");
        return;
    }

    info!(path = %path.display(), "capturing screenshot");
    commands
        .spawn((Screenshot::primary_window(), CaptureTarget(path.clone())))
        .observe(save_to_disk(path));
}
