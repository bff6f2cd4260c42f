use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use serde::Serialize;
use tracing::Instrument;
use uuid::Uuid;

use crate::client::{CommandSender, HostClient, PromptProvider};
use crate::metrics::InvocationMetrics;
use crate::pipeline::map_ordered;
use crate::resolver::{CommandType, ContextResolver, RenderContext, RenderError, RenderResult};
use crate::template::{render_all, Template};

/// Result of one menu command invocation
#[derive(Debug)]
pub enum InvocationOutcome {
    /// Every line rendered; this many commands were sent
    Sent(usize),
    /// No client, channel, or for user commands no member was selected
    Skipped,
    /// The user declined a prompt; nothing was sent
    Cancelled,
    /// A render failed; nothing was sent
    Failed(RenderError),
}

/// Statistics for the command dispatcher
#[derive(Debug, Default)]
pub struct DispatcherStats {
    pub invocations: AtomicU64,
    pub commands_sent: AtomicU64,
    pub cancelled: AtomicU64,
    pub failed: AtomicU64,
}

impl DispatcherStats {
    pub fn snapshot(&self) -> DispatcherStatsSnapshot {
        DispatcherStatsSnapshot {
            invocations: self.invocations.load(Ordering::Relaxed),
            commands_sent: self.commands_sent.load(Ordering::Relaxed),
            cancelled: self.cancelled.load(Ordering::Relaxed),
            failed: self.failed.load(Ordering::Relaxed),
        }
    }
}

/// Snapshot of dispatcher statistics
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DispatcherStatsSnapshot {
    pub invocations: u64,
    pub commands_sent: u64,
    pub cancelled: u64,
    pub failed: u64,
}

/// Renders menu commands against the host selection and sends them
pub struct CommandDispatcher {
    sender: Arc<dyn CommandSender>,
    prompt: Arc<dyn PromptProvider>,
    stats: DispatcherStats,
}

impl CommandDispatcher {
    pub fn new(sender: Arc<dyn CommandSender>, prompt: Arc<dyn PromptProvider>) -> Self {
        Self {
            sender,
            prompt,
            stats: DispatcherStats::default(),
        }
    }

    /// Render every command line for the current selection without sending.
    ///
    /// User commands render the whole list once per selected member. Returns
    /// `None` when there is nothing selected to render against.
    pub async fn render_commands(
        &self,
        command_type: CommandType,
        templates: &[Template],
        host: &dyn HostClient,
    ) -> RenderResult<Option<Vec<String>>> {
        let (Some(nickname), Some(channel)) = (host.nickname(), host.selected_channel()) else {
            return Ok(None);
        };

        let commands = match command_type {
            CommandType::Channel => {
                let resolver = ContextResolver::new(
                    command_type,
                    RenderContext::channel(nickname, channel),
                    self.prompt.clone(),
                );
                render_all(templates, &resolver).await?
            }
            CommandType::User => {
                let members = host.selected_members();
                if members.is_empty() {
                    return Ok(None);
                }

                let per_member = map_ordered(members, |member| {
                    let resolver = ContextResolver::new(
                        command_type,
                        RenderContext::user(nickname.clone(), channel.clone(), member),
                        self.prompt.clone(),
                    );
                    async move { render_all(templates, &resolver).await }
                })
                .await?;

                per_member.into_iter().flatten().collect()
            }
        };

        Ok(Some(commands))
    }

    /// Render and, only if the whole batch succeeded, send it.
    pub async fn invoke(
        &self,
        command_type: CommandType,
        templates: &[Template],
        host: &dyn HostClient,
    ) -> InvocationOutcome {
        let span = tracing::info_span!(
            "invocation",
            id = %Uuid::new_v4(),
            command_type = %command_type,
            lines = templates.len()
        );

        self.invoke_inner(command_type, templates, host)
            .instrument(span)
            .await
    }

    async fn invoke_inner(
        &self,
        command_type: CommandType,
        templates: &[Template],
        host: &dyn HostClient,
    ) -> InvocationOutcome {
        self.stats.invocations.fetch_add(1, Ordering::Relaxed);
        tracing::info!("Invoking menu command");

        match self.render_commands(command_type, templates, host).await {
            Ok(Some(commands)) => {
                for command in &commands {
                    self.sender.send_command(command);
                }

                let sent = commands.len();
                self.stats
                    .commands_sent
                    .fetch_add(sent as u64, Ordering::Relaxed);
                InvocationMetrics::record_sent(sent as u64);
                tracing::info!(sent = sent, "Commands sent");

                InvocationOutcome::Sent(sent)
            }
            Ok(None) => {
                InvocationMetrics::record_skipped();
                tracing::debug!("Nothing selected, skipping invocation");
                InvocationOutcome::Skipped
            }
            Err(e) if e.is_cancellation() => {
                self.stats.cancelled.fetch_add(1, Ordering::Relaxed);
                InvocationMetrics::record_cancelled();
                tracing::debug!("Invocation cancelled by user");
                InvocationOutcome::Cancelled
            }
            Err(e) => {
                self.stats.failed.fetch_add(1, Ordering::Relaxed);
                InvocationMetrics::record_failed();
                tracing::warn!(error = %e, "Invocation failed, nothing sent");
                InvocationOutcome::Failed(e)
            }
        }
    }

    pub fn stats(&self) -> DispatcherStatsSnapshot {
        self.stats.snapshot()
    }
}
