// src/api/mod.rs

use async_trait::async_trait;
use serde_json::Value;

use crate::{
    error::ClientError,
    models::{
        comment::{Comment, CreateCommentRequest},
        post::{CreatePostRequest, ImageUpload, LikeResponse, Post},
        user::BoardUser,
    },
};

pub mod http;

pub use http::HttpApi;

/// Remote content and session service.
#[async_trait]
pub trait ContentApi: Send + Sync {
    /// Raw post entries; the feed store decodes each one on its own.
    async fn fetch_content(&self) -> Result<Vec<Value>, ClientError>;

    async fn create_post(
        &self,
        request: &CreatePostRequest,
        image: Option<&ImageUpload>,
    ) -> Result<Post, ClientError>;

    async fn delete_post(&self, id: &str) -> Result<(), ClientError>;

    /// Toggles the viewer's like; the server reports the resulting state.
    async fn like_post(&self, id: &str) -> Result<LikeResponse, ClientError>;

    async fn create_comment(
        &self,
        post_id: &str,
        request: &CreateCommentRequest,
    ) -> Result<Comment, ClientError>;

    async fn like_comment(&self, comment_id: &str) -> Result<(), ClientError>;

    /// `None` when signed out.
    async fn current_user(&self) -> Result<Option<BoardUser>, ClientError>;

    async fn logout(&self) -> Result<(), ClientError>;
}

/// Moderation endpoints. Each call toggles the named state server-side.
#[async_trait]
pub trait AdminApi: Send + Sync {
    async fn list_users(&self) -> Result<Vec<BoardUser>, ClientError>;

    async fn toggle_mute(&self, user_id: &str) -> Result<(), ClientError>;

    async fn toggle_ban(&self, user_id: &str) -> Result<(), ClientError>;

    async fn toggle_ip_ban(&self, ip_address: &str) -> Result<(), ClientError>;
}
