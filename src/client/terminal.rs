//! Line-oriented terminal implementations of the client capabilities

use std::io::Write;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWriteExt, BufReader, Lines, Stdin};
use tokio::sync::Mutex;

use crate::config::ClientConfig;
use crate::resolver::ChannelMember;

use super::{CommandSender, HostClient, PromptError, PromptProvider, PromptResponse};

/// Input lines shared between the command loop and prompts
pub type SharedLines<R> = Arc<Mutex<Lines<R>>>;

/// Wrap the process stdin as [`SharedLines`]
pub fn shared_stdin() -> SharedLines<BufReader<Stdin>> {
    Arc::new(Mutex::new(BufReader::new(tokio::io::stdin()).lines()))
}

/// Host selection fixed by configuration
#[derive(Debug, Clone)]
pub struct StaticHostClient {
    nickname: Option<String>,
    channel: Option<String>,
    members: Vec<ChannelMember>,
}

impl StaticHostClient {
    pub fn new(
        nickname: Option<String>,
        channel: Option<String>,
        members: Vec<ChannelMember>,
    ) -> Self {
        Self {
            nickname,
            channel,
            members,
        }
    }

    pub fn from_config(config: &ClientConfig) -> Self {
        let non_empty = |value: &Option<String>| value.clone().filter(|v| !v.trim().is_empty());

        Self::new(
            non_empty(&config.nickname),
            non_empty(&config.channel),
            config
                .members
                .iter()
                .filter(|m| !m.trim().is_empty())
                .map(|m| ChannelMember::from_hostmask(m))
                .collect(),
        )
    }
}

impl HostClient for StaticHostClient {
    fn nickname(&self) -> Option<String> {
        self.nickname.clone()
    }

    fn selected_channel(&self) -> Option<String> {
        self.channel.clone()
    }

    fn selected_members(&self) -> Vec<ChannelMember> {
        self.members.clone()
    }
}

/// Writes each command as one line on stdout
#[derive(Debug, Default)]
pub struct StdoutSender;

impl CommandSender for StdoutSender {
    fn send_command(&self, command: &str) {
        let mut stdout = std::io::stdout().lock();
        if let Err(e) = writeln!(stdout, "{}", command).and_then(|_| stdout.flush()) {
            tracing::warn!(error = %e, "Failed to write command to stdout");
        }
    }
}

/// Prompts on stderr and answers with the next input line.
///
/// An empty line or end of input cancels.
pub struct LinePrompt<R> {
    lines: SharedLines<R>,
}

impl<R> LinePrompt<R> {
    pub fn new(lines: SharedLines<R>) -> Self {
        Self { lines }
    }
}

#[async_trait]
impl<R> PromptProvider for LinePrompt<R>
where
    R: AsyncBufRead + Unpin + Send,
{
    async fn prompt(&self, message: &str) -> Result<PromptResponse, PromptError> {
        let mut stderr = tokio::io::stderr();
        stderr.write_all(format!("{}: ", message).as_bytes()).await?;
        stderr.flush().await?;

        let line = self.lines.lock().await.next_line().await?;

        Ok(match line {
            Some(answer) if !answer.trim().is_empty() => PromptResponse::Answered(answer),
            _ => PromptResponse::Cancelled,
        })
    }
}
