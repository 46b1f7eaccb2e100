use crate::config::*;
use bevy::prelude::*;
use std::collections::VecDeque;

/// Notification sink and its expiry. Added by every plugin that pushes toasts.
pub struct NotificationPlugin;

impl Plugin for NotificationPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<Notifications>()
            .add_systems(Update, expire_notifications);
    }
}

/// Adds [`NotificationPlugin`] unless another plugin already did
pub fn ensure_notifications(app: &mut App) {
    if !app.is_plugin_added::<NotificationPlugin>() {
        app.add_plugins(NotificationPlugin);
    }
}

/// A message shown to the user until its timer runs out
#[derive(Debug)]
pub struct Toast {
    pub message: String,
    pub timer: Timer,
}

/// Notification sink shared by the companion systems
#[derive(Resource, Debug, Default)]
pub struct Notifications {
    toasts: VecDeque<Toast>,
}

impl Notifications {
    pub fn push(&mut self, message: impl Into<String>) {
        let message = message.into();
        info!("{}", message);
        self.toasts.push_back(Toast {
            message,
            timer: Timer::from_seconds(NOTIFICATION_LIFETIME, TimerMode::Once),
        });
    }

    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    /// Ages every toast and drops the ones that have expired
    pub fn tick(&mut self, delta: std::time::Duration) {
        for toast in self.toasts.iter_mut() {
            toast.timer.tick(delta);
        }
        self.toasts.retain(|toast| !toast.timer.finished());
    }
}

/// System to expire notifications
pub fn expire_notifications(time: Res<Time>, mut notifications: ResMut<Notifications>) {
    notifications.tick(time.delta());
}
