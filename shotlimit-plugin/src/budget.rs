use log::debug;
use shotlimit_config::NotificationConfig;
use shotlimit_core::{PlayerSlot, MAX_PLAYERS};

/// Shot budget of one player slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ShotBudget {
    /// The player carries no limited flag.
    #[default]
    Disarmed,
    Armed {
        remaining: u32,
        /// Set when armed, cleared by the first notification.
        pending_first_warning: bool,
    },
}

/// What the host should do after a shot was counted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShotAction {
    /// Tell the player how many shots are left.
    Notify(u32),
    /// The budget ran out; take the flag away.
    RemoveFlag,
}

pub struct PlayerShotBudgetTracker {
    budgets: [ShotBudget; MAX_PLAYERS],
    notifications: NotificationConfig,
}

impl Default for PlayerShotBudgetTracker {
    fn default() -> Self {
        Self::new(NotificationConfig::default())
    }
}

impl PlayerShotBudgetTracker {
    pub fn new(notifications: NotificationConfig) -> Self {
        Self {
            budgets: [ShotBudget::Disarmed; MAX_PLAYERS],
            notifications,
        }
    }

    pub fn budget(&self, slot: PlayerSlot) -> ShotBudget {
        self.budgets[slot.index()]
    }

    pub fn remaining(&self, slot: PlayerSlot) -> Option<u32> {
        match self.budget(slot) {
            ShotBudget::Disarmed => None,
            ShotBudget::Armed { remaining, .. } => Some(remaining),
        }
    }

    pub fn reset(&mut self, slot: PlayerSlot) {
        self.budgets[slot.index()] = ShotBudget::Disarmed;
    }

    pub fn reset_all(&mut self) {
        self.budgets.fill(ShotBudget::Disarmed);
    }

    /// Starts a countdown. An existing countdown is overwritten.
    pub fn arm(&mut self, slot: PlayerSlot, limit: u32) {
        if let ShotBudget::Armed { remaining, .. } = self.budget(slot) {
            debug!("Player {slot} re-armed with {limit} shots ({remaining} were left)");
        }
        self.budgets[slot.index()] = ShotBudget::Armed {
            remaining: limit,
            pending_first_warning: true,
        };
    }

    pub fn on_shot_fired(&mut self, slot: PlayerSlot) -> Option<ShotAction> {
        let notifications = self.notifications;
        let budget = &mut self.budgets[slot.index()];
        let ShotBudget::Armed {
            remaining,
            pending_first_warning,
        } = *budget
        else {
            return None;
        };

        // A zero limit is spent by the first shot as well.
        let left = remaining.saturating_sub(1);
        if left == 0 {
            *budget = ShotBudget::Disarmed;
            return Some(ShotAction::RemoveFlag);
        }

        let notify = notifications.should_notify(left, pending_first_warning);
        *budget = ShotBudget::Armed {
            remaining: left,
            pending_first_warning: pending_first_warning && !notify,
        };
        notify.then_some(ShotAction::Notify(left))
    }
}
