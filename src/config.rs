//! Configuration constants for the MindSpace companion

use bevy::prelude::*;

// ============================================================================
// EVOLUTION SETTINGS
// ============================================================================

/// XP required to clear level 1
pub const BASE_LEVEL_XP: f64 = 100.0;

/// Growth factor applied to the XP requirement for every level after the first
pub const LEVEL_XP_GROWTH: f64 = 1.5;

/// Highest reachable level; XP keeps accumulating there but never levels further
pub const MAX_LEVEL: u32 = 100;

/// Named rewards unlocked the first time a level is reached (ascending by level)
pub const MILESTONES: &[(u32, &str)] = &[
    (5, "Spark of Curiosity"),
    (10, "Empathic Resonance"),
    (25, "Creative Flow"),
    (50, "Deep Insight"),
    (100, "Digital Transcendence"),
];

// ============================================================================
// INTERACTION REWARDS
// ============================================================================

/// XP granted for sending a chat message
pub const CHAT_XP: u64 = 10;

/// XP granted for a voice exchange
pub const VOICE_XP: u64 = 15;

/// XP granted for an image analysis
pub const VISION_XP: u64 = 20;

/// XP granted for generating a story
pub const STORY_XP: u64 = 25;

// ============================================================================
// MINDSPACE NETWORK
// ============================================================================

/// Number of nodes created on initialization and reset
pub const DEFAULT_NODE_COUNT: usize = 20;

/// Maximum absolute value of each initial velocity component (pixels per frame)
pub const MAX_NODE_SPEED: f32 = 1.0;

/// Smallest node radius
pub const MIN_NODE_RADIUS: f32 = 3.0;

/// Largest node radius
pub const MAX_NODE_RADIUS: f32 = 7.0;

/// Fewest outgoing connections drawn per node (before self-targets are skipped)
pub const MIN_OUT_DEGREE: usize = 2;

/// Most outgoing connections drawn per node
pub const MAX_OUT_DEGREE: usize = 4;

/// Phase advance per tick
pub const PHASE_STEP: f32 = 0.01;

/// Scale applied to the clock (milliseconds) when computing activity
pub const ACTIVITY_TIME_SCALE: f64 = 0.001;

/// Nodes above this activity count as active
pub const ACTIVE_THRESHOLD: f32 = 0.5;

// ============================================================================
// WINDOW
// ============================================================================

/// Initial window width, also the surface width before the window reports its size
pub const WINDOW_WIDTH: f32 = 1280.0;

/// Initial window height
pub const WINDOW_HEIGHT: f32 = 720.0;

// ============================================================================
// PERSISTENCE & NOTIFICATIONS
// ============================================================================

/// Default file used by the native build to persist progress
pub const PROGRESS_FILE: &str = "mindspace_progress.json";

/// Environment variable overriding the progress file location
pub const PROGRESS_PATH_ENV: &str = "MINDSPACE_PROGRESS_PATH";

/// Seconds a notification stays on screen
pub const NOTIFICATION_LIFETIME: f32 = 3.0;

/// Runtime settings for the MindSpace network
#[derive(Resource, Debug, Clone)]
pub struct MindSpaceConfig {
    pub node_count: usize,
}

impl Default for MindSpaceConfig {
    fn default() -> Self {
        Self {
            node_count: DEFAULT_NODE_COUNT,
        }
    }
}
