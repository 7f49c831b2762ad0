//! Configuration for a game session.

/// Overrides applied on top of what the world definition says.
#[derive(Debug, Clone, Default)]
pub struct GameConfig {
    /// Carry capacity. `None` keeps the world's value.
    pub capacity: Option<u32>,
    /// Password attempts. `None` keeps the scenario's value.
    pub password_attempts: Option<u32>,
}

impl GameConfig {
    /// Set the carry capacity.
    pub fn with_capacity(mut self, capacity: u32) -> Self {
        self.capacity = Some(capacity);
        self
    }

    /// Set the password attempts (at least 1).
    pub fn with_password_attempts(mut self, attempts: u32) -> Self {
        self.password_attempts = Some(attempts.max(1));
        self
    }
}
