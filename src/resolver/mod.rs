//! Variable resolution.
//!
//! A [`VariableResolver`] maps one `${name}` or `${name:argument}` reference
//! to its replacement text. [`ContextResolver`] is the built-in strategy:
//! - parameterized names go to the `color` / `prompt` handlers
//! - bare names go to the user or channel strategy picked by [`CommandType`],
//!   both falling back to the common names
//!
//! Unknown names resolve to `None` and render as nothing.

mod common;
mod context;
mod error;
mod parameterized;

pub use common::{codes, resolve_channel, resolve_common, resolve_user};
pub use context::{ChannelMember, CommandType, RenderContext};
pub use error::{RenderError, RenderResult};
pub use parameterized::{format_color, resolve_parameterized};

use std::sync::Arc;

use async_trait::async_trait;

use crate::client::PromptProvider;

/// Maps a variable reference to its replacement text
#[async_trait]
pub trait VariableResolver: Send + Sync {
    async fn resolve(&self, name: &str, argument: Option<&str>) -> RenderResult<Option<String>>;
}

/// Resolver bound to one [`RenderContext`]
pub struct ContextResolver {
    command_type: CommandType,
    context: RenderContext,
    prompt: Arc<dyn PromptProvider>,
}

impl ContextResolver {
    pub fn new(
        command_type: CommandType,
        context: RenderContext,
        prompt: Arc<dyn PromptProvider>,
    ) -> Self {
        Self {
            command_type,
            context,
            prompt,
        }
    }

    pub fn context(&self) -> &RenderContext {
        &self.context
    }
}

#[async_trait]
impl VariableResolver for ContextResolver {
    async fn resolve(&self, name: &str, argument: Option<&str>) -> RenderResult<Option<String>> {
        if let Some(argument) = argument {
            return resolve_parameterized(name, argument, self.prompt.as_ref()).await;
        }

        Ok(match self.command_type {
            CommandType::User => resolve_user(name, &self.context),
            CommandType::Channel => resolve_channel(name, &self.context),
        })
    }
}
