// src/store/mod.rs

pub mod feed;
pub mod presence;

pub use feed::FeedStore;
pub use presence::{Partition, PresenceTracker};
