// src/store/presence.rs

use std::sync::Arc;

use serde_json::Value;

use crate::{models::user::BoardUser, utils::clock::Clock};

/// A user counts as active when seen within this window (5 minutes).
pub const ACTIVE_WINDOW_MS: i64 = 5 * 60 * 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Partition {
    Active,
    Inactive,
}

/// Known users split into active and inactive partitions.
///
/// Classification happens only when an event is applied. A user who ages past
/// the window without a new event stays where the last event put them.
#[derive(Debug)]
pub struct PresenceTracker {
    active: Vec<BoardUser>,
    inactive: Vec<BoardUser>,
    clock: Arc<dyn Clock>,
}

impl PresenceTracker {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            active: Vec::new(),
            inactive: Vec::new(),
            clock,
        }
    }

    /// Active users in arrival order.
    pub fn active(&self) -> &[BoardUser] {
        &self.active
    }

    /// Inactive users in arrival order.
    pub fn inactive(&self) -> &[BoardUser] {
        &self.inactive
    }

    pub fn total(&self) -> usize {
        self.active.len() + self.inactive.len()
    }

    pub fn partition_of(&self, user_id: &str) -> Option<Partition> {
        if self.active.iter().any(|u| u.id == user_id) {
            Some(Partition::Active)
        } else if self.inactive.iter().any(|u| u.id == user_id) {
            Some(Partition::Inactive)
        } else {
            None
        }
    }

    /// Replaces both partitions with a fresh snapshot.
    ///
    /// Entries without a string `id` and string `username` are dropped, as is
    /// any id already placed earlier in the snapshot (the active list is read
    /// first). Returns the number of entries dropped.
    pub fn initialize(&mut self, active: Vec<Value>, inactive: Vec<Value>) -> usize {
        let mut dropped = 0;
        let mut next_active: Vec<BoardUser> = Vec::with_capacity(active.len());
        let mut next_inactive: Vec<BoardUser> = Vec::with_capacity(inactive.len());

        for (entry, target) in active
            .into_iter()
            .map(|e| (e, Partition::Active))
            .chain(inactive.into_iter().map(|e| (e, Partition::Inactive)))
        {
            let Ok(user) = serde_json::from_value::<BoardUser>(entry) else {
                dropped += 1;
                continue;
            };
            let seen = next_active.iter().chain(next_inactive.iter()).any(|u| u.id == user.id);
            if seen {
                dropped += 1;
                continue;
            }
            match target {
                Partition::Active => next_active.push(user),
                Partition::Inactive => next_inactive.push(user),
            }
        }

        if dropped > 0 {
            tracing::debug!("Dropped {} invalid presence entries from snapshot", dropped);
        }

        self.active = next_active;
        self.inactive = next_inactive;
        dropped
    }

    /// Moves `user` to the partition its `last_active` selects right now.
    pub fn apply_status_update(&mut self, user: BoardUser) -> Partition {
        let threshold = self.clock.now_millis() - ACTIVE_WINDOW_MS;

        self.active.retain(|u| u.id != user.id);
        self.inactive.retain(|u| u.id != user.id);

        if user.last_active >= threshold {
            self.active.push(user);
            Partition::Active
        } else {
            self.inactive.push(user);
            Partition::Inactive
        }
    }
}
