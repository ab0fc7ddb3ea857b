// src/events.rs

use serde::Deserialize;
use serde_json::{Value, json};

use crate::error::ClientError;

/// A presence message from the push channel.
///
/// User payloads stay raw here; each entry is checked individually when it
/// is applied, so one bad record cannot sink a whole snapshot.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "snake_case")]
pub enum PushEvent {
    /// Sent once per connection, and again after every reconnect.
    InitialUserData {
        #[serde(rename = "activeUsers", default)]
        active_users: Vec<Value>,
        #[serde(rename = "inactiveUsers", default)]
        inactive_users: Vec<Value>,
    },

    /// One user's presence changed.
    UserStatusUpdate(Value),
}

impl PushEvent {
    /// Decodes a `{ "event": ..., "data": ... }` text frame.
    pub fn decode(frame: &str) -> Result<Self, ClientError> {
        Ok(serde_json::from_str(frame)?)
    }

    /// Decodes an event delivered as a name plus payload.
    pub fn from_parts(event: &str, data: Value) -> Result<Self, ClientError> {
        Ok(serde_json::from_value(json!({ "event": event, "data": data }))?)
    }
}
