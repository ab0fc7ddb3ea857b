use std::sync::Arc;

use crate::{
    api::ContentApi,
    error::ClientError,
    models::{post::Post, user::BoardUser},
    ranking,
    store::{FeedStore, PresenceTracker},
    utils::clock::Clock,
};

/// Everything the board client holds.
///
/// Actions in `handlers` take `&mut Board`; events are handled one at a time
/// on a single task, so nothing here is locked.
pub struct Board {
    pub api: Arc<dyn ContentApi>,
    pub feed: FeedStore,
    pub presence: PresenceTracker,
    /// Signed-in user, if any.
    pub session: Option<BoardUser>,
    pub clock: Arc<dyn Clock>,
}

impl Board {
    pub fn new(api: Arc<dyn ContentApi>, clock: Arc<dyn Clock>) -> Self {
        Self {
            api,
            feed: FeedStore::new(),
            presence: PresenceTracker::new(clock.clone()),
            session: None,
            clock,
        }
    }

    /// The feed in display order as of now.
    pub fn ranked(&self) -> Vec<&Post> {
        ranking::rank(self.feed.posts(), self.clock.now())
    }

    /// The signed-in user, or `AuthRequired`.
    pub fn require_user(&self) -> Result<&BoardUser, ClientError> {
        self.session.as_ref().ok_or(ClientError::AuthRequired)
    }

    /// Whether the session carries the admin capability.
    pub fn is_admin(&self) -> bool {
        self.session.as_ref().is_some_and(BoardUser::is_admin)
    }
}
