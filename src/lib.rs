//! MindSpace companion: an XP/level engine and an animated particle network,
//! wired into Bevy through plugins.

pub mod animation;
pub mod config;
pub mod evolution;
pub mod network;
pub mod notify;
pub mod plugin;
pub mod render;
pub mod store;
pub mod ui;

pub use plugin::{EvolutionPlugin, MindSpacePlugin, ResetNetwork, SurfaceSize, XpGranted};
pub use ui::CompanionUiPlugin;
