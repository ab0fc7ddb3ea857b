// tests/common/mod.rs

#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

use axum::{
    Json, Router,
    extract::{FromRequest, Multipart, Path, Request, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{delete, get, post},
};
use serde_json::{Value, json};
use tower_http::trace::TraceLayer;
use url::Url;

/// In-memory stand-in for the board API.
#[derive(Default)]
pub struct MockState {
    /// User record returned by `/me`; `None` means signed out.
    pub user: Option<Value>,
    pub posts: Vec<Value>,
    pub liked: HashSet<String>,
    pub comment_likes: HashMap<String, u64>,
    /// Rejects the next mutation with this status and error message.
    pub reject_next: Option<(StatusCode, String)>,
    /// "METHOD /path" of every request received.
    pub requests: Vec<String>,
    /// Content types seen on `POST /api/content`.
    pub create_content_types: Vec<String>,
    pub admin_toggles: Vec<String>,
}

pub type Shared = Arc<Mutex<MockState>>;

pub fn user_json(id: &str, username: &str, is_admin: bool) -> Value {
    json!({
        "id": id,
        "username": username,
        "discriminator": "0",
        "avatar": null,
        "last_active": chrono::Utc::now().timestamp_millis(),
        "isAdmin": if is_admin { 1 } else { 0 }
    })
}

pub fn post_json(id: &str, author_id: &str, title: &str) -> Value {
    json!({
        "id": id,
        "type": "text",
        "title": title,
        "content": "body",
        "createdAt": chrono::Utc::now().to_rfc3339(),
        "likeState": "none",
        "authorId": author_id,
        "authorUsername": "someone",
        "authorAvatar": null,
        "comments": []
    })
}

fn error(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "error": message }))).into_response()
}

/// Records the request and applies auth plus any queued rejection.
fn gate(state: &Shared, line: String) -> Result<Value, Response> {
    let mut s = state.lock().unwrap();
    s.requests.push(line);
    let Some(user) = s.user.clone() else {
        return Err(error(StatusCode::UNAUTHORIZED, "Not authenticated"));
    };
    if let Some((status, message)) = s.reject_next.take() {
        return Err(error(status, &message));
    }
    Ok(user)
}

async fn list_content(State(state): State<Shared>) -> Json<Vec<Value>> {
    let mut s = state.lock().unwrap();
    s.requests.push("GET /api/content".to_string());
    Json(s.posts.clone())
}

async fn create_content(State(state): State<Shared>, req: Request) -> Response {
    let user = match gate(&state, "POST /api/content".to_string()) {
        Ok(user) => user,
        Err(response) => return response,
    };

    let content_type = req
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();

    let mut fields: HashMap<String, String> = HashMap::new();
    let mut image_name: Option<String> = None;

    if content_type.starts_with("multipart/form-data") {
        let mut multipart = Multipart::from_request(req, &()).await.unwrap();
        while let Some(field) = multipart.next_field().await.unwrap() {
            let name = field.name().unwrap_or_default().to_string();
            if name == "image" {
                image_name = field.file_name().map(str::to_string);
                field.bytes().await.unwrap();
            } else {
                fields.insert(name, field.text().await.unwrap());
            }
        }
    } else {
        let Json(body) = Json::<Value>::from_request(req, &()).await.unwrap();
        for (key, value) in body.as_object().unwrap() {
            if let Some(text) = value.as_str() {
                fields.insert(key.clone(), text.to_string());
            }
        }
    }

    let mut post = json!({
        "id": fields["id"],
        "type": fields["type"],
        "title": fields["title"],
        "content": fields["content"],
        "createdAt": chrono::Utc::now().to_rfc3339(),
        "likeState": "none",
        "authorId": user["id"],
        "authorUsername": user["username"],
        "authorAvatar": user["avatar"],
    });
    if let Some(description) = fields.get("description") {
        post["description"] = json!(description);
    }
    if let Some(name) = image_name {
        post["imageUrl"] = json!(format!("/uploads/{}", name));
    }

    let mut s = state.lock().unwrap();
    s.create_content_types.push(content_type);
    let mut stored = post.clone();
    stored["comments"] = json!([]);
    s.posts.insert(0, stored);

    (StatusCode::CREATED, Json(post)).into_response()
}

async fn delete_content(State(state): State<Shared>, Path(id): Path<String>) -> Response {
    if let Err(response) = gate(&state, format!("DELETE /api/content/{}", id)) {
        return response;
    }
    let mut s = state.lock().unwrap();
    s.posts.retain(|p| p["id"] != json!(id));
    Json(json!({ "message": "Content deleted" })).into_response()
}

async fn like_content(State(state): State<Shared>, Path(id): Path<String>) -> Response {
    if let Err(response) = gate(&state, format!("POST /api/content/{}/like", id)) {
        return response;
    }
    let mut s = state.lock().unwrap();
    let new_state = if s.liked.remove(&id) {
        "none"
    } else {
        s.liked.insert(id);
        "liked"
    };
    Json(json!({ "newLikeState": new_state })).into_response()
}

async fn create_comment(
    State(state): State<Shared>,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> Response {
    let user = match gate(&state, format!("POST /api/content/{}/comments", id)) {
        Ok(user) => user,
        Err(response) => return response,
    };
    Json(json!({
        "id": body["id"],
        "content": body["content"],
        "authorId": user["id"],
        "authorUsername": user["username"],
        "authorAvatar": user["avatar"],
        "createdAt": chrono::Utc::now().to_rfc3339(),
        "likes": 0,
        "replies": []
    }))
    .into_response()
}

async fn like_comment(State(state): State<Shared>, Path(id): Path<String>) -> Response {
    if let Err(response) = gate(&state, format!("POST /api/content/comments/{}/like", id)) {
        return response;
    }
    let mut s = state.lock().unwrap();
    *s.comment_likes.entry(id).or_default() += 1;
    Json(json!({})).into_response()
}

async fn me(State(state): State<Shared>) -> Json<Value> {
    let mut s = state.lock().unwrap();
    s.requests.push("GET /me".to_string());
    Json(json!({ "user": s.user }))
}

async fn logout(State(state): State<Shared>) -> StatusCode {
    let mut s = state.lock().unwrap();
    s.requests.push("GET /logout".to_string());
    s.user = None;
    StatusCode::OK
}

async fn admin_users(State(state): State<Shared>) -> Response {
    if let Err(response) = gate(&state, "GET /api/admin/users".to_string()) {
        return response;
    }
    Json(json!({
        "users": [
            user_json("u1", "ana", true),
            { "id": "u2", "username": null },
            user_json("u3", "cy", false)
        ]
    }))
    .into_response()
}

async fn admin_toggle(
    State(state): State<Shared>,
    Path((action, target)): Path<(String, String)>,
) -> Response {
    if let Err(response) = gate(&state, format!("POST /api/admin/{}/{}", action, target)) {
        return response;
    }
    state
        .lock()
        .unwrap()
        .admin_toggles
        .push(format!("{}:{}", action, target));
    StatusCode::OK.into_response()
}

/// Spawns the mock API on a random port.
/// Returns its base URL and a handle to its state.
pub async fn spawn_app() -> (Url, Shared) {
    let state: Shared = Arc::new(Mutex::new(MockState::default()));

    let app = Router::new()
        .route("/api/content", get(list_content).post(create_content))
        .route("/api/content/{id}", delete(delete_content))
        .route("/api/content/{id}/like", post(like_content))
        .route("/api/content/{id}/comments", post(create_comment))
        .route("/api/content/comments/{id}/like", post(like_comment))
        .route("/me", get(me))
        .route("/logout", get(logout))
        .route("/api/admin/users", get(admin_users))
        .route("/api/admin/{action}/{target}", post(admin_toggle))
        .layer(TraceLayer::new_for_http())
        .with_state(state.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind random port");
    let port = listener.local_addr().unwrap().port();
    let address = Url::parse(&format!("http://127.0.0.1:{}", port)).unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (address, state)
}
