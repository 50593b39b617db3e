use std::collections::HashSet;

use shotlimit_core::FlagId;

/// Flag instances that were picked up inside a zone and still carry a limit.
#[derive(Debug, Default)]
pub struct ActiveFlagSet {
    flags: HashSet<FlagId>,
}

impl ActiveFlagSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, flag: FlagId) {
        self.flags.insert(flag);
    }

    /// Returns whether the flag was tracked.
    pub fn remove(&mut self, flag: FlagId) -> bool {
        self.flags.remove(&flag)
    }

    pub fn contains(&self, flag: FlagId) -> bool {
        self.flags.contains(&flag)
    }

    pub fn len(&self) -> usize {
        self.flags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }

    pub fn clear(&mut self) {
        self.flags.clear();
    }
}
