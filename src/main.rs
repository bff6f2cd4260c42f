use std::sync::Arc;

use prosgraphomenon::client::{shared_stdin, LinePrompt, StaticHostClient, StdoutSender};
use prosgraphomenon::config::Settings;
use prosgraphomenon::console::{Console, ConsoleCommand, Menus, Reply};
use prosgraphomenon::dispatch::CommandDispatcher;
use prosgraphomenon::error::Result;
use prosgraphomenon::telemetry::init_telemetry;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    run().await?;
    Ok(())
}

async fn run() -> Result<()> {
    // Load configuration
    let settings = Settings::new()?;

    // Initialize tracing
    init_telemetry(&settings.logging)?;
    tracing::info!("Configuration loaded");

    let options = settings.template.parse_options()?;
    let menus = Menus::load(&settings.menus, &options)?;

    // Commands go to stdout; prompts and the command loop share stdin
    let lines = shared_stdin();
    let dispatcher = CommandDispatcher::new(
        Arc::new(StdoutSender),
        Arc::new(LinePrompt::new(lines.clone())),
    );
    let host = StaticHostClient::from_config(&settings.client);
    let console = Console::new(menus, dispatcher, host);

    loop {
        // Released before executing so prompts can read the next line
        let line = lines.lock().await.next_line().await?;
        let Some(line) = line else {
            break;
        };

        let Some(command) = ConsoleCommand::parse(&line) else {
            continue;
        };

        match console.execute(command).await? {
            Reply::Continue(message) => eprintln!("{}", message),
            Reply::Quit => break,
        }
    }

    let stats = console.dispatcher().stats();
    tracing::info!(
        invocations = stats.invocations,
        commands_sent = stats.commands_sent,
        cancelled = stats.cancelled,
        failed = stats.failed,
        "Shutdown complete"
    );

    Ok(())
}
