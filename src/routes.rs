// src/routes.rs

use url::Url;

use crate::error::ClientError;

/// Every remote endpoint the board talks to.
///
/// Ids are pushed as path segments, so they are percent-encoded rather than
/// spliced into the path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint<'a> {
    Content,
    ContentItem(&'a str),
    LikeContent(&'a str),
    Comments(&'a str),
    LikeComment(&'a str),
    Me,
    Logout,
    DiscordLogin,
    AdminUsers,
    AdminMute(&'a str),
    AdminBan(&'a str),
    AdminIpBan(&'a str),
}

impl<'a> Endpoint<'a> {
    pub fn segments(&self) -> Vec<&'a str> {
        match *self {
            Endpoint::Content => vec!["api", "content"],
            Endpoint::ContentItem(id) => vec!["api", "content", id],
            Endpoint::LikeContent(id) => vec!["api", "content", id, "like"],
            Endpoint::Comments(id) => vec!["api", "content", id, "comments"],
            Endpoint::LikeComment(id) => vec!["api", "content", "comments", id, "like"],
            Endpoint::Me => vec!["me"],
            Endpoint::Logout => vec!["logout"],
            Endpoint::DiscordLogin => vec!["auth", "discord"],
            Endpoint::AdminUsers => vec!["api", "admin", "users"],
            Endpoint::AdminMute(id) => vec!["api", "admin", "mute", id],
            Endpoint::AdminBan(id) => vec!["api", "admin", "ban", id],
            Endpoint::AdminIpBan(ip) => vec!["api", "admin", "ip-ban", ip],
        }
    }

    /// Resolves the endpoint against `base`, keeping any path prefix it has.
    pub fn url(&self, base: &Url) -> Result<Url, ClientError> {
        let mut url = base.clone();
        url.path_segments_mut()
            .map_err(|_| ClientError::Config(format!("{} cannot be a base URL", base)))?
            .pop_if_empty()
            .extend(self.segments());
        Ok(url)
    }
}
