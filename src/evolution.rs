use crate::config::*;
use crate::store::{KeyValueStore, StoreError};
use bevy::prelude::*;
use std::collections::BTreeMap;
use thiserror::Error;

pub const XP_KEY: &str = "xp";
pub const LEVEL_KEY: &str = "level";
pub const MILESTONES_KEY: &str = "milestones";

/// XP needed to advance from `level` to `level + 1`.
///
/// Strictly increasing well past `MAX_LEVEL`. Every threshold below
/// `MAX_LEVEL` fits in a `u64`; the one at `MAX_LEVEL` does not, so no `u64`
/// amount of XP can fill the final level.
pub fn required_xp(level: u32) -> u128 {
    let exponent = level.saturating_sub(1).min(i32::MAX as u32) as i32;
    (BASE_LEVEL_XP * LEVEL_XP_GROWTH.powi(exponent)).floor() as u128
}

/// Milestone name attached to a level, if any
pub fn milestone_for(level: u32) -> Option<&'static str> {
    MILESTONES
        .iter()
        .find(|(milestone_level, _)| *milestone_level == level)
        .map(|(_, name)| *name)
}

/// Something the engine did while settling an XP grant
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EvolutionEvent {
    LevelUp { level: u32 },
    MilestoneUnlocked { level: u32, name: String },
}

impl EvolutionEvent {
    /// Text shown to the user for this event
    pub fn message(&self) -> String {
        match self {
            EvolutionEvent::LevelUp { level } => format!("Level up! Your companion reached level {}", level),
            EvolutionEvent::MilestoneUnlocked { name, .. } => format!("Milestone unlocked: {}", name),
        }
    }
}

/// Errors raised while restoring persisted progress
#[derive(Debug, Error)]
pub enum ProgressError {
    #[error("stored `{key}` is malformed: {reason}")]
    Malformed { key: &'static str, reason: String },
    #[error("stored xp {xp} does not fit inside level {level} (needs less than {required})")]
    XpOverflow { xp: u64, level: u32, required: u128 },
}

/// Companion interactions that earn XP
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interaction {
    Chat,
    Voice,
    Vision,
    Story,
}

impl Interaction {
    pub const ALL: [Interaction; 4] = [
        Interaction::Chat,
        Interaction::Voice,
        Interaction::Vision,
        Interaction::Story,
    ];

    pub fn reward(&self) -> u64 {
        match self {
            Interaction::Chat => CHAT_XP,
            Interaction::Voice => VOICE_XP,
            Interaction::Vision => VISION_XP,
            Interaction::Story => STORY_XP,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Interaction::Chat => "Chat",
            Interaction::Voice => "Voice",
            Interaction::Vision => "Vision",
            Interaction::Story => "Story",
        }
    }
}

/// XP and level state of the companion.
///
/// `xp` is progress inside the current level and always stays below
/// `required_xp(level)`. Levels only ever go up through [`Evolution::add_xp`];
/// [`Evolution::load`] replaces the whole state.
#[derive(Resource, Debug, Clone, PartialEq, Eq)]
pub struct Evolution {
    xp: u64,
    level: u32,
    milestones: BTreeMap<u32, String>,
}

impl Default for Evolution {
    fn default() -> Self {
        Self {
            xp: 0,
            level: 1,
            milestones: BTreeMap::new(),
        }
    }
}

impl Evolution {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn xp(&self) -> u64 {
        self.xp
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn milestones(&self) -> &BTreeMap<u32, String> {
        &self.milestones
    }

    pub fn required_xp(&self) -> u128 {
        required_xp(self.level)
    }

    pub fn is_max_level(&self) -> bool {
        self.level >= MAX_LEVEL
    }

    /// Progress through the current level in [0, 1)
    pub fn progress_fraction(&self) -> f32 {
        (self.xp as f64 / self.required_xp().max(1) as f64) as f32
    }

    /// Adds XP and settles any level-ups it causes, returning what happened in order.
    pub fn add_xp(&mut self, amount: u64) -> Vec<EvolutionEvent> {
        self.xp = self.xp.saturating_add(amount);

        let mut events = Vec::new();
        while self.level < MAX_LEVEL && self.xp as u128 >= required_xp(self.level) {
            // Thresholds below MAX_LEVEL fit in u64 and are at most `xp` here.
            self.xp -= required_xp(self.level) as u64;
            self.level += 1;
            events.push(EvolutionEvent::LevelUp { level: self.level });

            if let Some(name) = milestone_for(self.level) {
                if !self.milestones.contains_key(&self.level) {
                    self.milestones.insert(self.level, name.to_string());
                    events.push(EvolutionEvent::MilestoneUnlocked {
                        level: self.level,
                        name: name.to_string(),
                    });
                }
            }
        }
        events
    }

    /// Writes `xp`, `level` and `milestones` to the store.
    pub fn save(&self, store: &mut dyn KeyValueStore) -> Result<(), StoreError> {
        store.set(XP_KEY, self.xp.to_string())?;
        store.set(LEVEL_KEY, self.level.to_string())?;
        let milestones = serde_json::to_string(&self.milestones).map_err(|source| StoreError::Encode {
            key: MILESTONES_KEY.to_string(),
            source,
        })?;
        store.set(MILESTONES_KEY, milestones)
    }

    /// Reads persisted progress. Keys that are absent keep their default value;
    /// any key that is present but unreadable fails the whole load.
    pub fn try_load(store: &dyn KeyValueStore) -> Result<Self, ProgressError> {
        let mut evolution = Self::default();

        if let Some(raw) = store.get(XP_KEY) {
            evolution.xp = raw.trim().parse().map_err(|err: std::num::ParseIntError| {
                ProgressError::Malformed {
                    key: XP_KEY,
                    reason: err.to_string(),
                }
            })?;
        }

        if let Some(raw) = store.get(LEVEL_KEY) {
            let level: u32 = raw.trim().parse().map_err(|err: std::num::ParseIntError| {
                ProgressError::Malformed {
                    key: LEVEL_KEY,
                    reason: err.to_string(),
                }
            })?;
            if !(1..=MAX_LEVEL).contains(&level) {
                return Err(ProgressError::Malformed {
                    key: LEVEL_KEY,
                    reason: format!("level must be between 1 and {}", MAX_LEVEL),
                });
            }
            evolution.level = level;
        }

        if let Some(raw) = store.get(MILESTONES_KEY) {
            let milestones: BTreeMap<u32, String> =
                serde_json::from_str(&raw).map_err(|err| ProgressError::Malformed {
                    key: MILESTONES_KEY,
                    reason: err.to_string(),
                })?;

            // Only milestones already earned at the stored level can be on record.
            if let Some(level) = milestones
                .keys()
                .copied()
                .find(|&level| level > evolution.level || milestone_for(level).is_none())
            {
                return Err(ProgressError::Malformed {
                    key: MILESTONES_KEY,
                    reason: format!("no milestone at level {} can be unlocked yet", level),
                });
            }
            evolution.milestones = milestones;
        }

        let required = evolution.required_xp();
        if evolution.xp as u128 >= required {
            return Err(ProgressError::XpOverflow {
                xp: evolution.xp,
                level: evolution.level,
                required,
            });
        }

        Ok(evolution)
    }

    /// Restores progress from the store, falling back to a fresh state when the
    /// stored data cannot be trusted.
    pub fn load(store: &dyn KeyValueStore) -> Self {
        match Self::try_load(store) {
            Ok(evolution) => {
                info!(
                    "Restored companion progress: level {} ({} xp)",
                    evolution.level, evolution.xp
                );
                evolution
            }
            Err(err) => {
                warn!("Discarding stored progress: {}", err);
                Self::default()
            }
        }
    }
}
