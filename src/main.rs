use bevy::prelude::*;
use bevy_egui::EguiPlugin;
use mindspace_companion::config::*;
use mindspace_companion::{CompanionUiPlugin, EvolutionPlugin, MindSpacePlugin};
use std::path::PathBuf;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "MindSpace Companion".to_string(),
                resolution: (WINDOW_WIDTH, WINDOW_HEIGHT).into(),
                ..default()
            }),
            ..default()
        }))
        .add_plugins(EguiPlugin)
        .add_plugins((
            EvolutionPlugin {
                progress_path: progress_path(),
            },
            MindSpacePlugin,
            CompanionUiPlugin,
        ))
        .run();
}

#[cfg(not(target_arch = "wasm32"))]
fn progress_path() -> Option<PathBuf> {
    let path = std::env::var_os(PROGRESS_PATH_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(PROGRESS_FILE));
    Some(path)
}

// No filesystem in the browser; progress lasts for the session.
#[cfg(target_arch = "wasm32")]
fn progress_path() -> Option<PathBuf> {
    None
}
