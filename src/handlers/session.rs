// src/handlers/session.rs

use url::Url;

use crate::{error::ClientError, models::user::BoardUser, routes::Endpoint, state::Board};

/// Asks the session service who is signed in and stores the answer.
///
/// Any failure leaves the board signed out.
pub async fn refresh_session(board: &mut Board) -> Result<Option<&BoardUser>, ClientError> {
    match board.api.current_user().await {
        Ok(user) => {
            if let Some(user) = &user {
                tracing::info!("Signed in as {}", user.username);
            }
            board.session = user;
            Ok(board.session.as_ref())
        }
        Err(e) => {
            tracing::warn!("Session check failed: {}", e);
            board.session = None;
            Err(e)
        }
    }
}

/// Ends the session. The local session is kept if the server call fails.
pub async fn logout(board: &mut Board) -> Result<(), ClientError> {
    board.api.logout().await.map_err(|e| {
        tracing::error!("Failed to log out: {:?}", e);
        e
    })?;
    board.session = None;
    Ok(())
}

/// Where to send the user to sign in with the identity provider.
pub fn login_url(base: &Url) -> Result<Url, ClientError> {
    Endpoint::DiscordLogin.url(base)
}
