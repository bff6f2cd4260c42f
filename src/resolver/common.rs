//! Bare-name variable strategies

use super::context::RenderContext;

/// mIRC-style formatting control codes
pub mod codes {
    pub const BOLD: &str = "\u{02}";
    pub const COLOR: &str = "\u{03}";
    pub const RESET: &str = "\u{0f}";
    pub const ITALIC: &str = "\u{1d}";
    pub const UNDERLINE: &str = "\u{1f}";
}

/// Names available in every context
pub fn resolve_common(name: &str, context: &RenderContext) -> Option<String> {
    let value: &str = match name {
        "bold" => codes::BOLD,
        "italic" => codes::ITALIC,
        "underline" => codes::UNDERLINE,
        "end" => codes::RESET,
        "color" => codes::COLOR,
        "channel" => &context.channel,
        "me" => &context.nickname,
        _ => {
            tracing::trace!(name = %name, "Unknown variable");
            return None;
        }
    };

    Some(value.to_string())
}

/// `user` and `banmask`, then the common names
pub fn resolve_user(name: &str, context: &RenderContext) -> Option<String> {
    let member = context.member.as_ref();

    match name {
        "user" => member.map(|m| m.nickname.clone()),
        "banmask" => member.map(|m| m.ban_mask.clone()),
        _ => resolve_common(name, context),
    }
}

/// Channel commands add nothing to the common names
pub fn resolve_channel(name: &str, context: &RenderContext) -> Option<String> {
    resolve_common(name, context)
}
