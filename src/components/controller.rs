use bevy::prelude::*;

/// Marks the body driven by [`PilotInput`](crate::resources::PilotInput).
#[derive(Component, Debug, Default)]
pub struct PlayerController {
    pub active: bool,
    /// Seconds left during which pilot input is ignored
    pub lock_remaining: f64,
}

impl PlayerController {
    pub fn new() -> Self {
        Self {
            active: true,
            lock_remaining: 0.0,
        }
    }

    pub fn disabled() -> Self {
        Self {
            active: false,
            lock_remaining: 0.0,
        }
    }

    pub fn enable(&mut self) {
        self.active = true;
    }

    pub fn disable(&mut self) {
        self.active = false;
    }

    pub fn lock_for(&mut self, seconds: f64) {
        self.lock_remaining = seconds.max(0.0);
    }

    pub fn is_locked(&self) -> bool {
        self.lock_remaining > 0.0
    }

    /// Whether pilot input should drive the body this frame.
    pub fn accepts_input(&self) -> bool {
        self.active && !self.is_locked()
    }

    /// Advance the lock timer. Returns `true` on the frame the lock expires.
    pub fn tick_lock(&mut self, dt: f64) -> bool {
        if !self.is_locked() {
            return false;
        }
        self.lock_remaining = (self.lock_remaining - dt).max(0.0);
        !self.is_locked()
    }
}
