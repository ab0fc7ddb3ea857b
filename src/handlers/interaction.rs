use validator::Validate;

use crate::{
    error::ClientError,
    models::comment::{Comment, CreateCommentRequest, NewComment},
    state::Board,
    utils::ids,
};

/// Create a new comment, or a reply when `parent_id` names a top-level comment.
pub async fn create_comment(
    board: &mut Board,
    post_id: &str,
    payload: NewComment,
    parent_id: Option<&str>,
) -> Result<Comment, ClientError> {
    payload.validate()?;
    board.require_user()?;

    let request = CreateCommentRequest {
        id: ids::comment_id(board.clock.as_ref()),
        content: payload.content,
        parent_id: parent_id.map(str::to_string),
    };

    let comment = board
        .api
        .create_comment(post_id, &request)
        .await
        .map_err(|e| {
            tracing::error!("Failed to add comment to {}: {:?}", post_id, e);
            e
        })?;

    board.feed.add_comment(post_id, comment.clone(), parent_id);
    Ok(comment)
}

/// Like a comment or reply on `post_id`.
pub async fn like_comment(board: &mut Board, post_id: &str, comment_id: &str) -> Result<(), ClientError> {
    board.require_user()?;

    board.api.like_comment(comment_id).await.map_err(|e| {
        tracing::error!("Failed to like comment {}: {:?}", comment_id, e);
        e
    })?;

    board.feed.like_comment(post_id, comment_id);
    Ok(())
}
