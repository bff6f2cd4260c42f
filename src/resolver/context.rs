//! Runtime values a resolver answers variable lookups from

use serde::{Deserialize, Serialize};

/// Which resolver strategy a menu command is rendered with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommandType {
    /// Rendered once per selected channel member
    User,
    /// Rendered once against the selected channel
    Channel,
}

impl CommandType {
    pub fn as_str(&self) -> &'static str {
        match self {
            CommandType::User => "user",
            CommandType::Channel => "channel",
        }
    }
}

impl std::fmt::Display for CommandType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A member of the selected channel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelMember {
    pub nickname: String,
    pub ban_mask: String,
}

impl ChannelMember {
    pub fn new(nickname: impl Into<String>, ban_mask: impl Into<String>) -> Self {
        Self {
            nickname: nickname.into(),
            ban_mask: ban_mask.into(),
        }
    }

    /// Build a member from `nick!user@host`, or a bare nickname.
    ///
    /// The ban mask covers the host when one is known (`*!*@host`), otherwise
    /// the nickname (`nick!*@*`).
    pub fn from_hostmask(hostmask: &str) -> Self {
        let hostmask = hostmask.trim();
        let (nickname, rest) = hostmask.split_once('!').unwrap_or((hostmask, ""));
        let host = rest.split_once('@').map(|(_, host)| host).unwrap_or("");

        let ban_mask = if host.is_empty() {
            format!("{}!*@*", nickname)
        } else {
            format!("*!*@{}", host)
        };

        Self::new(nickname, ban_mask)
    }
}

/// Per-render snapshot of the host client selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderContext {
    /// Our own nickname on the active client
    pub nickname: String,
    /// Display name of the selected channel
    pub channel: String,
    /// The member a `User` command is rendered for
    pub member: Option<ChannelMember>,
}

impl RenderContext {
    pub fn channel(nickname: impl Into<String>, channel: impl Into<String>) -> Self {
        Self {
            nickname: nickname.into(),
            channel: channel.into(),
            member: None,
        }
    }

    pub fn user(
        nickname: impl Into<String>,
        channel: impl Into<String>,
        member: ChannelMember,
    ) -> Self {
        Self {
            nickname: nickname.into(),
            channel: channel.into(),
            member: Some(member),
        }
    }
}
