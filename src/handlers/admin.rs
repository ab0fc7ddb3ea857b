// src/handlers/admin.rs

use crate::{api::AdminApi, error::ClientError, models::user::BoardUser, state::Board};

/// Checks the admin capability on the session before anything is sent.
fn require_admin(board: &Board) -> Result<(), ClientError> {
    let user = board.require_user()?;
    if !user.is_admin() {
        return Err(ClientError::Forbidden("Admin access required".to_string()));
    }
    Ok(())
}

/// Lists all users known to the server.
/// Admin only.
pub async fn list_users(board: &Board, admin: &dyn AdminApi) -> Result<Vec<BoardUser>, ClientError> {
    require_admin(board)?;
    admin.list_users().await.map_err(|e| {
        tracing::error!("Failed to list users: {:?}", e);
        e
    })
}

/// Toggles a user's mute.
/// Admin only.
pub async fn toggle_mute(board: &Board, admin: &dyn AdminApi, user_id: &str) -> Result<(), ClientError> {
    require_admin(board)?;
    admin.toggle_mute(user_id).await.map_err(|e| {
        tracing::error!("Failed to update mute status of {}: {:?}", user_id, e);
        e
    })?;
    tracing::info!("User {} mute status updated", user_id);
    Ok(())
}

/// Toggles a user's ban.
/// Admin only.
pub async fn toggle_ban(board: &Board, admin: &dyn AdminApi, user_id: &str) -> Result<(), ClientError> {
    require_admin(board)?;
    admin.toggle_ban(user_id).await.map_err(|e| {
        tracing::error!("Failed to update ban status of {}: {:?}", user_id, e);
        e
    })?;
    tracing::info!("User {} ban status updated", user_id);
    Ok(())
}

/// Toggles a ban on an IP address.
/// Admin only.
pub async fn toggle_ip_ban(
    board: &Board,
    admin: &dyn AdminApi,
    ip_address: &str,
) -> Result<(), ClientError> {
    require_admin(board)?;
    admin.toggle_ip_ban(ip_address).await.map_err(|e| {
        tracing::error!("Failed to update IP ban status of {}: {:?}", ip_address, e);
        e
    })?;
    tracing::info!("IP address {} ban status updated", ip_address);
    Ok(())
}
