use std::borrow::Cow;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use super::comment::Comment;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostKind {
    Image,
    Text,
}

impl PostKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PostKind::Image => "image",
            PostKind::Text => "text",
        }
    }
}

/// The current viewer's relation to a post. Not a global like count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LikeState {
    #[serde(rename = "liked")]
    Liked,
    #[default]
    #[serde(rename = "none")]
    NotLiked,
}

/// A top-level content item as served by `GET /api/content`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    /// Client-generated at submission time.
    pub id: String,
    #[serde(rename = "type")]
    pub kind: PostKind,
    pub title: String,

    /// Image URL or text, depending on `kind`.
    #[serde(rename = "content", default)]
    pub body: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    pub created_at: DateTime<Utc>,

    #[serde(default)]
    pub like_state: LikeState,

    pub author_id: String,
    pub author_username: String,
    #[serde(default)]
    pub author_avatar: Option<String>,

    #[serde(default)]
    pub comments: Vec<Comment>,

    /// Set by the server when the image was uploaded rather than linked.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl Post {
    pub fn is_authored_by(&self, user_id: &str) -> bool {
        self.author_id == user_id
    }

    /// Whether `id` names a comment or reply anywhere in this post's tree.
    pub fn has_comment(&self, id: &str) -> bool {
        self.comments.iter().any(|c| c.contains(id))
    }

    /// The top-level comment with the most likes. On a tie the later comment wins.
    pub fn most_popular_comment(&self) -> Option<&Comment> {
        self.comments
            .iter()
            .reduce(|best, current| if best.likes > current.likes { best } else { current })
    }

    /// Top-level comments ordered by likes, most liked first.
    pub fn comments_by_likes(&self) -> Vec<&Comment> {
        let mut sorted: Vec<&Comment> = self.comments.iter().collect();
        sorted.sort_by(|a, b| b.likes.cmp(&a.likes));
        sorted
    }
}

/// A binary image attached to a new post. Sent as multipart.
#[derive(Debug, Clone)]
pub struct ImageUpload {
    pub file_name: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

/// DTO for creating a new post from user input.
#[derive(Debug, Validate)]
#[validate(schema(function = "validate_post_body"))]
pub struct NewPost {
    pub kind: PostKind,

    #[validate(length(min = 1, message = "Title must not be empty"))]
    pub title: String,

    /// Image URL or text. Empty when an upload is attached.
    pub content: String,

    pub description: Option<String>,

    pub image: Option<ImageUpload>,
}

impl NewPost {
    /// Builds a post from raw form input, trimming every field.
    /// A blank description becomes `None`.
    pub fn new(kind: PostKind, title: &str, content: &str, description: Option<&str>) -> Self {
        Self {
            kind,
            title: title.trim().to_string(),
            content: content.trim().to_string(),
            description: description
                .map(str::trim)
                .filter(|d| !d.is_empty())
                .map(str::to_string),
            image: None,
        }
    }

    /// Attaches an uploaded image. The text content is cleared, since the
    /// file replaces the URL.
    pub fn with_image(mut self, image: ImageUpload) -> Self {
        self.content.clear();
        self.image = Some(image);
        self
    }

    /// Wire body for the JSON and multipart create requests.
    pub fn to_request(&self, id: String) -> CreatePostRequest {
        CreatePostRequest {
            id,
            kind: self.kind,
            title: self.title.clone(),
            content: self.content.clone(),
            description: self.description.clone(),
        }
    }
}

fn validate_post_body(post: &NewPost) -> Result<(), ValidationError> {
    match (&post.image, post.kind) {
        (Some(image), PostKind::Image) => {
            if !image.mime.starts_with("image/") {
                return Err(ValidationError::new("upload_type")
                    .with_message(Cow::from("Uploaded file must be an image")));
            }
            Ok(())
        }
        (Some(_), PostKind::Text) => Err(ValidationError::new("upload_on_text")
            .with_message(Cow::from("Text posts cannot carry an upload"))),
        (None, _) if post.content.is_empty() => Err(ValidationError::new("content")
            .with_message(Cow::from("Content must not be empty"))),
        (None, _) => Ok(()),
    }
}

/// Wire body for `POST /api/content`.
#[derive(Debug, Clone, Serialize)]
pub struct CreatePostRequest {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: PostKind,
    pub title: String,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Response of `POST /api/content/{id}/like`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LikeResponse {
    pub new_like_state: LikeState,
}
