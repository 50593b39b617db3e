use serde::{Deserialize, Serialize};

/// When a player carrying a limited flag is told how many shots remain.
#[derive(Deserialize, Serialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct NotificationConfig {
    /// Remind the player whenever the remaining count is a multiple of this.
    /// Zero turns these reminders off.
    pub warn_every: u32,
    /// Remind on every shot once the remaining count is at or below this.
    pub low_threshold: u32,
    /// Always tell the player after their first shot with a fresh limit.
    pub warn_on_first_shot: bool,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            warn_every: 5,
            low_threshold: 3,
            warn_on_first_shot: true,
        }
    }
}

impl NotificationConfig {
    pub fn should_notify(&self, remaining: u32, first_shot: bool) -> bool {
        remaining.checked_rem(self.warn_every) == Some(0)
            || remaining <= self.low_threshold
            || (self.warn_on_first_shot && first_shot)
    }
}
