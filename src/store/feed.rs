// src/store/feed.rs

use std::collections::HashSet;

use serde_json::Value;

use crate::models::{
    comment::{Comment, Reply},
    post::{LikeState, Post},
};

/// Client-side mirror of the board's posts and their comment trees.
///
/// Every mutation is a silent no-op when its target is unknown: push and
/// fetch results arrive out of order, and a miss must never break the view.
/// Mutations return whether they applied.
#[derive(Debug, Default, Clone)]
pub struct FeedStore {
    /// Newest intake first. Display order comes from `ranking::rank`.
    posts: Vec<Post>,
}

impl FeedStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Post> {
        self.posts.iter().find(|p| p.id == id)
    }

    fn get_mut(&mut self, id: &str) -> Option<&mut Post> {
        self.posts.iter_mut().find(|p| p.id == id)
    }

    /// Replaces the whole collection with the decoded `entries`.
    ///
    /// Entries that fail to decode, or that repeat an id already loaded, are
    /// skipped so a partial feed still shows. Returns how many were kept.
    pub fn load<I>(&mut self, entries: I) -> usize
    where
        I: IntoIterator<Item = Value>,
    {
        let mut seen = HashSet::new();
        let mut posts = Vec::new();

        for (index, entry) in entries.into_iter().enumerate() {
            match serde_json::from_value::<Post>(entry) {
                Ok(post) if seen.insert(post.id.clone()) => posts.push(post),
                Ok(post) => {
                    tracing::warn!("Skipping duplicate post {} at index {}", post.id, index);
                }
                Err(e) => {
                    tracing::warn!("Skipping malformed post at index {}: {}", index, e);
                }
            }
        }

        self.posts = posts;
        self.posts.len()
    }

    /// Inserts `post` at the head. A post whose id is already present is
    /// treated as a double submission and ignored.
    pub fn add_post(&mut self, post: Post) -> bool {
        if self.get(&post.id).is_some() {
            tracing::debug!("Ignoring duplicate post {}", post.id);
            return false;
        }
        self.posts.insert(0, post);
        true
    }

    pub fn remove_post(&mut self, id: &str) -> bool {
        let before = self.posts.len();
        self.posts.retain(|p| p.id != id);
        let removed = self.posts.len() != before;
        if !removed {
            tracing::debug!("remove_post: post {} not present", id);
        }
        removed
    }

    pub fn set_like_state(&mut self, id: &str, state: LikeState) -> bool {
        match self.get_mut(id) {
            Some(post) => {
                post.like_state = state;
                true
            }
            None => {
                tracing::debug!("set_like_state: post {} not present", id);
                false
            }
        }
    }

    /// Appends `comment` to the post's top-level comments, or, when
    /// `parent_id` is given, to the replies of that top-level comment.
    ///
    /// Only top-level comments are searched for the parent, so a reply can
    /// never become a parent. A comment id already in the post's tree is
    /// ignored.
    pub fn add_comment(&mut self, post_id: &str, comment: Comment, parent_id: Option<&str>) -> bool {
        let Some(post) = self.get_mut(post_id) else {
            tracing::debug!("add_comment: post {} not present", post_id);
            return false;
        };

        if post.has_comment(&comment.id) {
            tracing::debug!("add_comment: comment {} already on post {}", comment.id, post_id);
            return false;
        }

        match parent_id {
            None => {
                post.comments.push(comment);
                true
            }
            Some(parent_id) => match post.comments.iter_mut().find(|c| c.id == parent_id) {
                Some(parent) => {
                    parent.replies.push(Reply::from(comment));
                    true
                }
                None => {
                    tracing::debug!(
                        "add_comment: parent {} is not a top-level comment of post {}",
                        parent_id,
                        post_id
                    );
                    false
                }
            },
        }
    }

    /// Adds one like to the top-level comment with `comment_id`, or failing
    /// that to the reply with that id, within `post_id` only.
    pub fn like_comment(&mut self, post_id: &str, comment_id: &str) -> bool {
        let Some(post) = self.get_mut(post_id) else {
            tracing::debug!("like_comment: post {} not present", post_id);
            return false;
        };

        if let Some(comment) = post.comments.iter_mut().find(|c| c.id == comment_id) {
            comment.likes = comment.likes.saturating_add(1);
            return true;
        }

        let reply = post
            .comments
            .iter_mut()
            .flat_map(|c| c.replies.iter_mut())
            .find(|r| r.id == comment_id);

        match reply {
            Some(reply) => {
                reply.likes = reply.likes.saturating_add(1);
                true
            }
            None => {
                tracing::debug!("like_comment: comment {} not on post {}", comment_id, post_id);
                false
            }
        }
    }
}
