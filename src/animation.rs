use bevy::prelude::*;

/// Resource controlling whether the MindSpace animation ticks each frame
#[derive(Resource, Debug, PartialEq, Eq, Clone, Copy, Default)]
pub enum AnimationLoop {
    #[default]
    Running,
    Stopped,
}

impl AnimationLoop {
    /// Starts the loop. Returns false when it was already running.
    pub fn start(&mut self) -> bool {
        if self.is_running() {
            return false;
        }
        *self = AnimationLoop::Running;
        true
    }

    /// Stops the loop. Returns false when it was already stopped.
    pub fn stop(&mut self) -> bool {
        if !self.is_running() {
            return false;
        }
        *self = AnimationLoop::Stopped;
        true
    }

    pub fn is_running(&self) -> bool {
        *self == AnimationLoop::Running
    }
}

/// Run condition for systems that only advance while the loop is running
pub fn animation_running(state: Res<AnimationLoop>) -> bool {
    state.is_running()
}
