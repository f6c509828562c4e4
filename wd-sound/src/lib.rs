//! Looping background music that can be toggled from the panel.

use bevy::asset::LoadState;
use bevy::audio::{AudioSink, AudioSinkPlayback, Volume};
use bevy::prelude::*;
use wd_core::{StudioCommand, StudioConfig};

pub struct SoundPlugin;

impl Plugin for SoundPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<StudioConfig>()
            .init_resource::<MusicState>()
            .add_event::<StudioCommand>()
            .add_systems(Startup, spawn_background_music)
            .add_systems(
                Update,
                (
                    toggle_music,
                    report_music_failure,
                    apply_music_state.after(toggle_music),
                ),
            );
    }
}

#[derive(Component)]
pub struct BackgroundMusic;

/// What the user asked for. Applied to the sink whenever one exists, so a
/// toggle before the track has loaded is not lost.
#[derive(Resource, Debug, Default)]
pub struct MusicState {
    pub playing: bool,
    handle: Option<Handle<AudioSource>>,
    failure_reported: bool,
}

impl MusicState {
    pub fn toggle(&mut self) -> bool {
        self.playing = !self.playing;
        self.playing
    }

    /// What the sink must do to match the desired state, if anything.
    pub fn sink_action(&self, sink_paused: bool) -> Option<SinkAction> {
        match (self.playing, sink_paused) {
            (true, true) => Some(SinkAction::Play),
            (false, false) => Some(SinkAction::Pause),
            _ => None,
        }
    }

    /// Returns `true` only the first time a failed load is seen.
    fn latch_failure(&mut self, failed: bool) -> bool {
        if !failed || self.failure_reported {
            return false;
        }
        self.failure_reported = true;
        true
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SinkAction {
    Play,
    Pause,
}

fn spawn_background_music(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    config: Res<StudioConfig>,
    mut state: ResMut<MusicState>,
) {
    if config.assets.music.is_empty() {
        info!("no background music configured");
        return;
    }
    let handle: Handle<AudioSource> = asset_server.load(config.assets.music.clone());
    state.playing = config.audio.start_playing;
    state.handle = Some(handle.clone());

    commands.spawn((
        Name::new("background-music"),
        BackgroundMusic,
        AudioPlayer::new(handle),
        PlaybackSettings {
            paused: !config.audio.start_playing,
            volume: Volume::Linear(config.audio.volume),
            ..PlaybackSettings::LOOP
        },
    ));
}

fn toggle_music(mut commands_in: EventReader<StudioCommand>, mut state: ResMut<MusicState>) {
    for command in commands_in.read() {
        if matches!(command, StudioCommand::ToggleMusic) {
            let playing = state.toggle();
            info!(playing, "music toggled");
        }
    }
}

fn apply_music_state(state: Res<MusicState>, sinks: Query<&AudioSink, With<BackgroundMusic>>) {
    for sink in &sinks {
        match state.sink_action(sink.is_paused()) {
            Some(SinkAction::Play) => sink.play(),
            Some(SinkAction::Pause) => sink.pause(),
            None => {}
        }
    }
}

fn report_music_failure(asset_server: Res<AssetServer>, mut state: ResMut<MusicState>) {
    if state.failure_reported {
        return;
    }
    let Some(handle) = state.handle.as_ref() else {
        return;
    };
    let load = asset_server.get_load_state(handle.id());
    let failed = matches!(load, Some(LoadState::Failed(_)));
    if state.latch_failure(failed)
        && let Some(LoadState::Failed(err)) = load
    {
        error!(%err, "background music failed to load, toggle is inert");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggles_before_load_are_remembered() {
        let mut app = App::new();
        app.init_resource::<MusicState>()
            .add_event::<StudioCommand>()
            .add_systems(Update, toggle_music);

        app.world_mut().send_event(StudioCommand::ToggleMusic);
        app.world_mut().send_event(StudioCommand::Capture);
        app.update();
        assert!(app.world().resource::<MusicState>().playing);

        app.world_mut().send_event(StudioCommand::ToggleMusic);
        app.world_mut().send_event(StudioCommand::ToggleMusic);
        app.world_mut().send_event(StudioCommand::ToggleMusic);
        app.update();
        assert!(!app.world().resource::<MusicState>().playing);
    }

    #[test]
    fn sink_follows_desired_state() {
        let mut state = MusicState::default();
        assert_eq!(state.sink_action(true), None);
        assert_eq!(state.sink_action(false), Some(SinkAction::Pause));

        state.toggle();
        assert_eq!(state.sink_action(true), Some(SinkAction::Play));
        assert_eq!(state.sink_action(false), None);
    }

    #[test]
    fn load_failure_is_reported_once() {
        let mut state = MusicState::default();
        assert!(!state.latch_failure(false));
        assert!(state.latch_failure(true));
        assert!(!state.latch_failure(true));
        assert!(state.failure_reported);
    }
}
