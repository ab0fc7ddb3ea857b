use validator::Validate;

use crate::{
    error::ClientError,
    models::post::{LikeState, NewPost, Post},
    state::Board,
    utils::ids,
};

/// Fetches the whole feed and replaces the local copy.
/// Returns the number of posts kept.
pub async fn refresh_feed(board: &mut Board) -> Result<usize, ClientError> {
    let entries = board.api.fetch_content().await.map_err(|e| {
        tracing::error!("Failed to fetch content: {:?}", e);
        e
    })?;

    let total = entries.len();
    let kept = board.feed.load(entries);
    if kept < total {
        tracing::warn!("Loaded {} of {} posts", kept, total);
    }
    Ok(kept)
}

/// Create a new post.
/// Requires: Login. Validated before anything is sent.
pub async fn create_post(board: &mut Board, payload: NewPost) -> Result<Post, ClientError> {
    // 1. Validate payload
    payload.validate()?;

    // 2. Require a session
    board.require_user()?;

    // 3. Submit with a client-generated id
    let request = payload.to_request(ids::post_id(board.clock.as_ref()));
    let post = board
        .api
        .create_post(&request, payload.image.as_ref())
        .await
        .map_err(|e| {
            tracing::error!("Failed to create post: {:?}", e);
            e
        })?;

    // 4. Mirror locally
    if !board.feed.add_post(post.clone()) {
        tracing::warn!("Post {} was already in the feed", post.id);
    }
    Ok(post)
}

/// Delete a post.
/// Requires: Login + Author.
pub async fn delete_post(board: &mut Board, id: &str) -> Result<(), ClientError> {
    let user = board.require_user()?;

    // A post we no longer hold has nothing to check; the server decides.
    if let Some(post) = board.feed.get(id) {
        if !post.is_authored_by(&user.id) {
            return Err(ClientError::Forbidden(
                "You are not authorized to delete this post".to_string(),
            ));
        }
    }

    board.api.delete_post(id).await.map_err(|e| {
        tracing::error!("Failed to delete post {}: {:?}", id, e);
        e
    })?;

    board.feed.remove_post(id);
    Ok(())
}

/// Toggle Like on a post. Returns the state the server settled on.
pub async fn toggle_like(board: &mut Board, id: &str) -> Result<LikeState, ClientError> {
    board.require_user()?;

    let response = board.api.like_post(id).await.map_err(|e| {
        tracing::error!("Failed to like post {}: {:?}", id, e);
        e
    })?;

    board.feed.set_like_state(id, response.new_like_state);
    Ok(response.new_like_state)
}
