//! Line commands driving the menus from a terminal.
//!
//! ```text
//! list              show both menus with their paths
//! user <path>       invoke a users-menu command, e.g. `user 2.0`
//! channel <path>    invoke a channel-menu command
//! metrics           dump Prometheus metrics
//! quit              exit
//! ```

use std::fmt::Write;

use crate::client::HostClient;
use crate::config::MenuConfig;
use crate::dispatch::{CommandDispatcher, InvocationOutcome};
use crate::error::Result;
use crate::menu::{build_entries, find_entry, EntryKind, MenuEntry, MenuStore};
use crate::metrics::encode_metrics;
use crate::resolver::CommandType;
use crate::template::ParseOptions;

/// One parsed input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleCommand {
    List,
    Invoke {
        command_type: CommandType,
        path: String,
    },
    Metrics,
    Help,
    Quit,
    Unknown(String),
}

impl ConsoleCommand {
    /// Parse an input line. Blank lines parse to `None`.
    pub fn parse(line: &str) -> Option<Self> {
        let mut words = line.split_whitespace();
        let verb = words.next()?;
        let rest = words.collect::<Vec<_>>().join(" ");

        let invoke = |command_type| {
            if rest.is_empty() {
                ConsoleCommand::Unknown(line.trim().to_string())
            } else {
                ConsoleCommand::Invoke {
                    command_type,
                    path: rest.clone(),
                }
            }
        };

        Some(match verb {
            "list" | "ls" => ConsoleCommand::List,
            "user" => invoke(CommandType::User),
            "channel" => invoke(CommandType::Channel),
            "metrics" => ConsoleCommand::Metrics,
            "help" | "?" => ConsoleCommand::Help,
            "quit" | "exit" => ConsoleCommand::Quit,
            _ => ConsoleCommand::Unknown(line.trim().to_string()),
        })
    }
}

/// Both menus, flattened and parsed
#[derive(Debug, Clone, Default)]
pub struct Menus {
    users: Vec<MenuEntry>,
    channel: Vec<MenuEntry>,
}

impl Menus {
    pub fn new(users: Vec<MenuEntry>, channel: Vec<MenuEntry>) -> Self {
        Self { users, channel }
    }

    /// Load both menus from the configured support directory
    pub fn load(config: &MenuConfig, options: &ParseOptions) -> Result<Self> {
        let store = MenuStore::new(config.directory.clone());
        let users = build_entries(&store.load(&config.users_menu)?, options);
        let channel = build_entries(&store.load(&config.channel_menu)?, options);

        tracing::info!(users = users.len(), channel = channel.len(), "Menus ready");

        Ok(Self::new(users, channel))
    }

    pub fn entries(&self, command_type: CommandType) -> &[MenuEntry] {
        match command_type {
            CommandType::User => &self.users,
            CommandType::Channel => &self.channel,
        }
    }

    /// Indented listing of both menus
    pub fn listing(&self) -> String {
        let mut out = String::new();

        for command_type in [CommandType::User, CommandType::Channel] {
            let _ = writeln!(out, "[{}]", command_type);
            for entry in self.entries(command_type) {
                let indent = "  ".repeat(entry.depth + 1);
                let _ = match &entry.kind {
                    EntryKind::Separator => writeln!(out, "{}----", indent),
                    EntryKind::Submenu => {
                        writeln!(out, "{}{} {}/", indent, entry.path_label(), entry.title)
                    }
                    EntryKind::Command(_) => {
                        writeln!(out, "{}{} {}", indent, entry.path_label(), entry.title)
                    }
                };
            }
        }

        out
    }
}

/// What the input loop should do after a command
#[derive(Debug, PartialEq, Eq)]
pub enum Reply {
    Continue(String),
    Quit,
}

/// Executes console commands against the menus and a host selection
pub struct Console<H> {
    menus: Menus,
    dispatcher: CommandDispatcher,
    host: H,
}

impl<H: HostClient> Console<H> {
    pub fn new(menus: Menus, dispatcher: CommandDispatcher, host: H) -> Self {
        Self {
            menus,
            dispatcher,
            host,
        }
    }

    pub fn dispatcher(&self) -> &CommandDispatcher {
        &self.dispatcher
    }

    pub async fn execute(&self, command: ConsoleCommand) -> Result<Reply> {
        let message = match command {
            ConsoleCommand::List => self.menus.listing(),
            ConsoleCommand::Invoke { command_type, path } => {
                self.invoke(command_type, &path).await
            }
            ConsoleCommand::Metrics => encode_metrics()?,
            ConsoleCommand::Help => {
                "commands: list, user <path>, channel <path>, metrics, quit".to_string()
            }
            ConsoleCommand::Quit => return Ok(Reply::Quit),
            ConsoleCommand::Unknown(line) => format!("unknown command: {}", line),
        };

        Ok(Reply::Continue(message))
    }

    async fn invoke(&self, command_type: CommandType, path: &str) -> String {
        let Some(entry) = find_entry(self.menus.entries(command_type), path) else {
            return format!("no {} menu entry at {}", command_type, path);
        };
        let Some(templates) = entry.templates() else {
            return format!("{} is not a command", entry.path_label());
        };

        match self.dispatcher.invoke(command_type, templates, &self.host).await {
            InvocationOutcome::Sent(count) => format!("sent {} command(s)", count),
            InvocationOutcome::Skipped => "nothing selected".to_string(),
            InvocationOutcome::Cancelled => "cancelled".to_string(),
            InvocationOutcome::Failed(e) => format!("failed: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;

    use crate::client::{
        CommandSender, PromptError, PromptProvider, PromptResponse, StaticHostClient,
    };
    use crate::menu::MenuNode;
    use crate::resolver::ChannelMember;

    #[derive(Default)]
    struct RecordingSender {
        sent: Mutex<Vec<String>>,
    }

    impl CommandSender for RecordingSender {
        fn send_command(&self, command: &str) {
            self.sent.lock().unwrap().push(command.to_string());
        }
    }

    struct Decline;

    #[async_trait]
    impl PromptProvider for Decline {
        async fn prompt(&self, _message: &str) -> std::result::Result<PromptResponse, PromptError> {
            Ok(PromptResponse::Cancelled)
        }
    }

    fn console() -> (Console<StaticHostClient>, Arc<RecordingSender>) {
        let options = ParseOptions::default();
        let users = build_entries(
            &[MenuNode::menu(
                "Modes",
                vec![MenuNode::command("Op", ["/mode ${channel} +o ${user}"])],
            )],
            &options,
        );
        let channel = build_entries(
            &[
                MenuNode::command("Hi", ["/say hi from ${me}"]),
                MenuNode::Separator,
                MenuNode::command("Topic", ["/topic ${prompt:Topic?}"]),
            ],
            &options,
        );

        let sender = Arc::new(RecordingSender::default());
        let host = StaticHostClient::new(
            Some("Bob".to_string()),
            Some("#test".to_string()),
            vec![ChannelMember::new("alice", "*!*@a.example")],
        );
        let console = Console::new(
            Menus::new(users, channel),
            CommandDispatcher::new(sender.clone(), Arc::new(Decline)),
            host,
        );
        (console, sender)
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(ConsoleCommand::parse("   "), None);
        assert_eq!(ConsoleCommand::parse("list"), Some(ConsoleCommand::List));
        assert_eq!(
            ConsoleCommand::parse("user  0.0 "),
            Some(ConsoleCommand::Invoke {
                command_type: CommandType::User,
                path: "0.0".to_string()
            })
        );
        assert_eq!(
            ConsoleCommand::parse("channel"),
            Some(ConsoleCommand::Unknown("channel".to_string()))
        );
        assert_eq!(ConsoleCommand::parse("quit"), Some(ConsoleCommand::Quit));
    }

    #[test]
    fn test_listing() {
        let (console, _) = console();
        let listing = console.menus.listing();

        assert!(listing.starts_with("[user]\n  0 Modes/\n    0.0 Op\n[channel]\n"));
        assert!(listing.contains("\n  ----\n"));
        assert!(listing.contains("  2 Topic\n"));
    }

    #[tokio::test]
    async fn test_invoke_user_entry() {
        let (console, sender) = console();

        let reply = console
            .execute(ConsoleCommand::parse("user 0.0").unwrap())
            .await
            .unwrap();

        assert_eq!(reply, Reply::Continue("sent 1 command(s)".to_string()));
        assert_eq!(*sender.sent.lock().unwrap(), vec!["/mode #test +o alice"]);
    }

    #[tokio::test]
    async fn test_invoke_errors_reported() {
        let (console, sender) = console();

        for (line, expected) in [
            ("user 0", "0 is not a command"),
            ("channel 9", "no channel menu entry at 9"),
            ("channel 2", "cancelled"),
        ] {
            let reply = console
                .execute(ConsoleCommand::parse(line).unwrap())
                .await
                .unwrap();
            assert_eq!(reply, Reply::Continue(expected.to_string()));
        }

        assert!(sender.sent.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_quit() {
        let (console, _) = console();
        assert_eq!(
            console.execute(ConsoleCommand::Quit).await.unwrap(),
            Reply::Quit
        );
    }
}
