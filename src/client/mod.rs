//! Capabilities at the host client boundary.
//!
//! The rendering core never reaches into the host application. It is handed:
//! - a [`HostClient`] to snapshot the current selection from
//! - a [`PromptProvider`] for interactive `${prompt:...}` input
//! - a [`CommandSender`] that the rendered commands are committed to

mod terminal;

pub use terminal::{shared_stdin, LinePrompt, SharedLines, StaticHostClient, StdoutSender};

use async_trait::async_trait;
use thiserror::Error;

use crate::resolver::ChannelMember;

/// Errors raised by a prompt provider other than a user cancel
#[derive(Debug, Error)]
pub enum PromptError {
    #[error("Prompt unavailable: {0}")]
    Unavailable(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// The user's answer to an interactive prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptResponse {
    Answered(String),
    Cancelled,
}

/// Asks the user for free-text input
#[async_trait]
pub trait PromptProvider: Send + Sync {
    async fn prompt(&self, message: &str) -> Result<PromptResponse, PromptError>;
}

/// Transmits one literal command line to the messaging client
pub trait CommandSender: Send + Sync {
    fn send_command(&self, command: &str);
}

/// Current selection in the messaging client
pub trait HostClient: Send + Sync {
    /// Our nickname on the selected client, `None` when no client is selected
    fn nickname(&self) -> Option<String>;

    /// Display name of the selected channel
    fn selected_channel(&self) -> Option<String>;

    /// Selected members of the selected channel, in selection order
    fn selected_members(&self) -> Vec<ChannelMember>;
}
