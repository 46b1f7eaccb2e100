use crate::animation::{AnimationLoop, animation_running};
use crate::config::*;
use crate::evolution::{Evolution, Interaction};
use crate::network::MindSpace;
use crate::notify::{Notifications, ensure_notifications};
use crate::store::{FileStore, ProgressStore};
use bevy::prelude::*;
use std::path::PathBuf;

/// Request to grant XP to the companion
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct XpGranted {
    pub amount: u64,
}

impl From<Interaction> for XpGranted {
    fn from(interaction: Interaction) -> Self {
        Self {
            amount: interaction.reward(),
        }
    }
}

/// Request to rebuild the MindSpace network from scratch
#[derive(Event, Debug, Clone, Copy, Default)]
pub struct ResetNetwork;

/// Current size of the rendering surface, in logical pixels
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct SurfaceSize(pub Vec2);

impl Default for SurfaceSize {
    fn default() -> Self {
        Self(Vec2::new(WINDOW_WIDTH, WINDOW_HEIGHT))
    }
}

/// XP, levels and milestones, persisted through [`ProgressStore`].
///
/// With no `progress_path` the store lives in memory only.
#[derive(Default)]
pub struct EvolutionPlugin {
    pub progress_path: Option<PathBuf>,
}

impl Plugin for EvolutionPlugin {
    fn build(&self, app: &mut App) {
        if let Some(path) = &self.progress_path {
            match FileStore::open_or_reset(path.clone()) {
                Ok(store) => {
                    info!("Using progress file {}", store.path().display());
                    app.insert_resource(ProgressStore::new(store));
                }
                Err(err) => {
                    warn!("Progress will not be saved: {}", err);
                }
            }
        }

        ensure_notifications(app);
        app.init_resource::<ProgressStore>()
            .init_resource::<Evolution>()
            .add_event::<XpGranted>()
            .add_systems(Startup, load_progress)
            .add_systems(Update, apply_xp_grants);
    }
}

/// The MindSpace particle network and its animation loop
pub struct MindSpacePlugin;

impl Plugin for MindSpacePlugin {
    fn build(&self, app: &mut App) {
        ensure_notifications(app);
        app.init_resource::<MindSpaceConfig>()
            .init_resource::<MindSpace>()
            .init_resource::<AnimationLoop>()
            .init_resource::<SurfaceSize>()
            .add_event::<ResetNetwork>()
            .add_systems(Startup, initialize_network)
            .add_systems(
                Update,
                (handle_reset_requests, tick_network.run_if(animation_running)).chain(),
            );
    }
}

/// System to restore persisted progress at startup
pub fn load_progress(store: Res<ProgressStore>, mut evolution: ResMut<Evolution>) {
    *evolution = Evolution::load(&*store.0);
}

/// System to apply pending XP grants, announce level-ups and persist the result
pub fn apply_xp_grants(
    mut grants: EventReader<XpGranted>,
    mut evolution: ResMut<Evolution>,
    mut store: ResMut<ProgressStore>,
    mut notifications: ResMut<Notifications>,
) {
    for grant in grants.read() {
        debug!("Granting {} xp", grant.amount);
        for event in evolution.add_xp(grant.amount) {
            notifications.push(event.message());
        }

        if let Err(err) = evolution.save(&mut *store.0) {
            warn!("Failed to save progress: {}", err);
        }
    }
}

/// System to build the initial network
pub fn initialize_network(
    config: Res<MindSpaceConfig>,
    surface: Res<SurfaceSize>,
    mut mind_space: ResMut<MindSpace>,
) {
    mind_space.initialize(config.node_count, surface.0, &mut rand::thread_rng());
}

/// System to rebuild the network when a reset is requested
pub fn handle_reset_requests(
    mut requests: EventReader<ResetNetwork>,
    config: Res<MindSpaceConfig>,
    surface: Res<SurfaceSize>,
    mut mind_space: ResMut<MindSpace>,
    mut notifications: ResMut<Notifications>,
) {
    // Several clicks in one frame still rebuild once.
    if requests.read().count() == 0 {
        return;
    }

    mind_space.reset(config.node_count, surface.0, &mut rand::thread_rng());
    notifications.push("MindSpace network reset");
}

/// System to advance the network by one frame
pub fn tick_network(time: Res<Time>, surface: Res<SurfaceSize>, mut mind_space: ResMut<MindSpace>) {
    mind_space.tick(surface.0, time.elapsed_secs_f64() * 1000.0);
}
