// src/models/user.rs

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A board user as reported by `/me`, the admin listing and the push channel.
///
/// Decoding requires a string `id` and a string `username`; records without
/// them fail to decode and are dropped by the callers. Every other field is
/// read leniently: a value of the wrong type falls back to its default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoardUser {
    pub id: String,

    pub username: String,

    #[serde(default, deserialize_with = "lenient_string")]
    pub discriminator: Option<String>,

    /// Avatar hash on the identity provider's CDN.
    #[serde(default, deserialize_with = "lenient_string")]
    pub avatar: Option<String>,

    /// Last activity as Unix milliseconds.
    #[serde(default, deserialize_with = "lenient_millis")]
    pub last_active: i64,

    /// Admin capability flag; `1` grants it.
    #[serde(
        default,
        rename = "isAdmin",
        deserialize_with = "lenient_flag",
        skip_serializing_if = "Option::is_none"
    )]
    pub admin_flag: Option<u8>,
}

fn lenient_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        _ => None,
    })
}

/// Integral or fractional milliseconds; fractions are truncated.
fn lenient_millis<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)).unwrap_or(0),
        _ => 0,
    })
}

fn lenient_flag<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<u8>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_u64().and_then(|v| u8::try_from(v).ok()),
        _ => None,
    })
}

impl BoardUser {
    pub fn is_admin(&self) -> bool {
        self.admin_flag == Some(1)
    }
}

/// Response of `GET /me`.
#[derive(Debug, Deserialize)]
pub struct MeResponse {
    #[serde(default)]
    pub user: Option<BoardUser>,
}

/// Response of `GET /api/admin/users`. Entries are decoded one by one.
#[derive(Debug, Deserialize)]
pub struct UsersResponse {
    #[serde(default)]
    pub users: Vec<Value>,
}
