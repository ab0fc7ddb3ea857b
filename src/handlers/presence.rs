use crate::{events::PushEvent, models::user::BoardUser, state::Board};

/// Applies one push-channel event to the presence tracker.
///
/// A snapshot replaces everything known, which is also how a reconnect
/// resynchronizes. A status update whose user record is malformed is dropped.
pub fn handle_push_event(board: &mut Board, event: PushEvent) {
    match event {
        PushEvent::InitialUserData {
            active_users,
            inactive_users,
        } => {
            let dropped = board.presence.initialize(active_users, inactive_users);
            tracing::info!(
                "Presence snapshot: {} active, {} inactive ({} dropped)",
                board.presence.active().len(),
                board.presence.inactive().len(),
                dropped
            );
        }
        PushEvent::UserStatusUpdate(payload) => match serde_json::from_value::<BoardUser>(payload) {
            Ok(user) => {
                let id = user.id.clone();
                let partition = board.presence.apply_status_update(user);
                tracing::debug!("User {} is now {:?}", id, partition);
            }
            Err(e) => {
                tracing::warn!("Dropping malformed status update: {}", e);
            }
        },
    }
}

/// Decodes and applies a raw `{ "event", "data" }` frame. Undecodable frames
/// are logged and ignored.
pub fn handle_push_frame(board: &mut Board, frame: &str) {
    match PushEvent::decode(frame) {
        Ok(event) => handle_push_event(board, event),
        Err(e) => tracing::warn!("Ignoring push frame: {}", e),
    }
}
