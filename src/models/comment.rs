use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A top-level comment on a post.
///
/// Replies are a separate type without a `replies` field, so the tree can never
/// grow past post → comment → reply.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: String,
    pub content: String,
    pub author_id: String,
    pub author_username: String,
    #[serde(default)]
    pub author_avatar: Option<String>,
    pub created_at: DateTime<Utc>,

    /// Only ever incremented.
    #[serde(default)]
    pub likes: u64,

    #[serde(default)]
    pub replies: Vec<Reply>,
}

/// A second-level comment. Any `replies` key in incoming JSON is ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reply {
    pub id: String,
    pub content: String,
    pub author_id: String,
    pub author_username: String,
    #[serde(default)]
    pub author_avatar: Option<String>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub likes: u64,
}

impl Comment {
    /// Whether `id` names this comment or one of its replies.
    pub fn contains(&self, id: &str) -> bool {
        self.id == id || self.replies.iter().any(|r| r.id == id)
    }
}

/// The server answers a comment POST with a full comment; attached as a reply
/// it loses whatever nested replies it carried.
impl From<Comment> for Reply {
    fn from(comment: Comment) -> Self {
        Reply {
            id: comment.id,
            content: comment.content,
            author_id: comment.author_id,
            author_username: comment.author_username,
            author_avatar: comment.author_avatar,
            created_at: comment.created_at,
            likes: comment.likes,
        }
    }
}

/// DTO for writing a new comment or reply.
#[derive(Debug, Deserialize, Validate)]
pub struct NewComment {
    #[validate(length(min = 1, message = "Comment must not be empty"))]
    pub content: String,
}

impl NewComment {
    pub fn new(content: &str) -> Self {
        Self {
            content: content.trim().to_string(),
        }
    }
}

/// Wire body for `POST /api/content/{id}/comments`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCommentRequest {
    pub id: String,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
}
