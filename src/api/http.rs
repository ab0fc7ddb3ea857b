// src/api/http.rs

use async_trait::async_trait;
use reqwest::{
    Client, Response, StatusCode,
    multipart::{Form, Part},
};
use serde_json::Value;
use url::Url;

use super::{AdminApi, ContentApi};
use crate::{
    error::ClientError,
    models::{
        comment::{Comment, CreateCommentRequest},
        post::{CreatePostRequest, ImageUpload, LikeResponse, Post},
        user::{BoardUser, MeResponse, UsersResponse},
    },
    routes::Endpoint,
};

/// `reqwest`-backed client for the board API.
///
/// Keeps a cookie store so the session cookie set by the identity flow rides
/// along with every request.
#[derive(Debug, Clone)]
pub struct HttpApi {
    client: Client,
    base_url: Url,
}

impl HttpApi {
    pub fn new(base_url: Url) -> Result<Self, ClientError> {
        let client = Client::builder().cookie_store(true).build()?;
        Ok(Self::with_client(client, base_url))
    }

    pub fn with_client(client: Client, base_url: Url) -> Self {
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn url(&self, endpoint: Endpoint<'_>) -> Result<Url, ClientError> {
        endpoint.url(&self.base_url)
    }

    async fn post_empty(&self, endpoint: Endpoint<'_>) -> Result<Response, ClientError> {
        let url = self.url(endpoint)?;
        tracing::debug!("POST {}", url);
        let response = self.client.post(url).send().await?;
        ensure_success(response).await
    }
}

/// Passes successful responses through; turns the rest into `ClientError`.
async fn ensure_success(response: Response) -> Result<Response, ClientError> {
    if response.status().is_success() {
        Ok(response)
    } else {
        Err(rejection(response).await)
    }
}

/// Maps a rejected response, preferring the body's `error` or `message` field.
async fn rejection(response: Response) -> ClientError {
    let status = response.status();
    if status == StatusCode::UNAUTHORIZED {
        return ClientError::AuthRequired;
    }

    let body = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<Value>(&body)
        .ok()
        .and_then(|v| {
            v.get("error")
                .or_else(|| v.get("message"))
                .and_then(Value::as_str)
                .map(str::to_string)
        })
        .unwrap_or_else(|| status.canonical_reason().unwrap_or("Unknown error").to_string());

    ClientError::Server {
        status: status.as_u16(),
        message,
    }
}

fn multipart_form(request: &CreatePostRequest, image: &ImageUpload) -> Result<Form, ClientError> {
    let part = Part::bytes(image.bytes.clone())
        .file_name(image.file_name.clone())
        .mime_str(&image.mime)
        .map_err(|e| ClientError::Validation(e.to_string()))?;

    let mut form = Form::new()
        .text("id", request.id.clone())
        .text("type", request.kind.as_str())
        .text("title", request.title.clone())
        .text("content", request.content.clone());
    if let Some(description) = &request.description {
        form = form.text("description", description.clone());
    }
    Ok(form.part("image", part))
}

#[async_trait]
impl ContentApi for HttpApi {
    async fn fetch_content(&self) -> Result<Vec<Value>, ClientError> {
        let url = self.url(Endpoint::Content)?;
        tracing::debug!("GET {}", url);
        let response = ensure_success(self.client.get(url).send().await?).await?;
        Ok(response.json::<Vec<Value>>().await?)
    }

    async fn create_post(
        &self,
        request: &CreatePostRequest,
        image: Option<&ImageUpload>,
    ) -> Result<Post, ClientError> {
        let url = self.url(Endpoint::Content)?;
        tracing::debug!("POST {} (upload: {})", url, image.is_some());

        let builder = self.client.post(url);
        let builder = match image {
            Some(image) => builder.multipart(multipart_form(request, image)?),
            None => builder.json(request),
        };
        let response = builder.send().await?;

        // Anything but 201 counts as a rejection, even another 2xx.
        if response.status() != StatusCode::CREATED {
            return Err(rejection(response).await);
        }
        Ok(response.json::<Post>().await?)
    }

    async fn delete_post(&self, id: &str) -> Result<(), ClientError> {
        let url = self.url(Endpoint::ContentItem(id))?;
        tracing::debug!("DELETE {}", url);
        ensure_success(self.client.delete(url).send().await?).await?;
        Ok(())
    }

    async fn like_post(&self, id: &str) -> Result<LikeResponse, ClientError> {
        let response = self.post_empty(Endpoint::LikeContent(id)).await?;
        Ok(response.json::<LikeResponse>().await?)
    }

    async fn create_comment(
        &self,
        post_id: &str,
        request: &CreateCommentRequest,
    ) -> Result<Comment, ClientError> {
        let url = self.url(Endpoint::Comments(post_id))?;
        tracing::debug!("POST {}", url);
        let response = ensure_success(self.client.post(url).json(request).send().await?).await?;
        Ok(response.json::<Comment>().await?)
    }

    async fn like_comment(&self, comment_id: &str) -> Result<(), ClientError> {
        self.post_empty(Endpoint::LikeComment(comment_id)).await?;
        Ok(())
    }

    async fn current_user(&self) -> Result<Option<BoardUser>, ClientError> {
        let url = self.url(Endpoint::Me)?;
        let response = self.client.get(url).send().await?;
        if response.status() == StatusCode::UNAUTHORIZED {
            return Ok(None);
        }
        let me = ensure_success(response).await?.json::<MeResponse>().await?;
        Ok(me.user)
    }

    async fn logout(&self) -> Result<(), ClientError> {
        let url = self.url(Endpoint::Logout)?;
        ensure_success(self.client.get(url).send().await?).await?;
        Ok(())
    }
}

#[async_trait]
impl AdminApi for HttpApi {
    async fn list_users(&self) -> Result<Vec<BoardUser>, ClientError> {
        let url = self.url(Endpoint::AdminUsers)?;
        let response = ensure_success(self.client.get(url).send().await?).await?;
        let listing = response.json::<UsersResponse>().await?;

        Ok(listing
            .users
            .into_iter()
            .filter_map(|entry| serde_json::from_value::<BoardUser>(entry).ok())
            .collect())
    }

    async fn toggle_mute(&self, user_id: &str) -> Result<(), ClientError> {
        self.post_empty(Endpoint::AdminMute(user_id)).await?;
        Ok(())
    }

    async fn toggle_ban(&self, user_id: &str) -> Result<(), ClientError> {
        self.post_empty(Endpoint::AdminBan(user_id)).await?;
        Ok(())
    }

    async fn toggle_ip_ban(&self, ip_address: &str) -> Result<(), ClientError> {
        self.post_empty(Endpoint::AdminIpBan(ip_address)).await?;
        Ok(())
    }
}
