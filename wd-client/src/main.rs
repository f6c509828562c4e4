use std::path::PathBuf;
use std::process::ExitCode;

use bevy::prelude::*;
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::filter::LevelFilter;
use wd_core::config::DEFAULT_CONFIG_PATH;
use wd_core::{Studio, StudioConfig};

mod plugins;

use plugins::StudioPlugins;

/// Interactive 3D avatar wardrobe.
#[derive(Parser, Debug)]
#[command(name = "wardrobe", version, about, long_about = None)]
struct Cli {
    /// Configuration file; defaults are used when it does not exist
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Asset directory (overrides config)
    #[arg(long)]
    assets: Option<String>,

    /// Start with the music paused
    #[arg(long)]
    muted: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn apply_overrides(&self, config: &mut StudioConfig) {
        if let Some(root) = &self.assets {
            config.assets.root = root.clone();
        }
        if self.muted {
            config.audio.start_playing = false;
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = if cli.verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .without_time()
        .compact()
        .init();

    let mut config = match StudioConfig::load_or_default(&cli.config) {
        Ok(config) => config,
        Err(err) => {
            error!(%err, "could not load configuration");
            return ExitCode::FAILURE;
        }
    };
    cli.apply_overrides(&mut config);

    let registry = config.registry();
    info!(
        models = registry.len(),
        assets = %config.assets.root,
        "starting wardrobe"
    );

    App::new()
        .insert_resource(config.clone())
        .insert_resource(registry)
        .insert_resource(Studio::default())
        .add_plugins(StudioPlugins { config })
        .run();

    ExitCode::SUCCESS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_the_file() {
        let cli = Cli::parse_from(["wardrobe", "--assets", "/srv/models", "--muted"]);
        let mut config = StudioConfig::default();
        config.audio.start_playing = true;

        cli.apply_overrides(&mut config);

        assert_eq!(config.assets.root, "/srv/models");
        assert!(!config.audio.start_playing);
        assert_eq!(cli.config, PathBuf::from(DEFAULT_CONFIG_PATH));
    }

    #[test]
    fn no_flags_keep_the_file() {
        let cli = Cli::parse_from(["wardrobe", "-c", "custom.toml"]);
        let mut config = StudioConfig::default();
        config.audio.start_playing = true;

        cli.apply_overrides(&mut config);

        assert_eq!(config, {
            let mut expected = StudioConfig::default();
            expected.audio.start_playing = true;
            expected
        });
        assert_eq!(cli.config, PathBuf::from("custom.toml"));
    }
}
