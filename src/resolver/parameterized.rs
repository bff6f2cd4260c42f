//! `${name:argument}` handlers: `color` and `prompt`

use crate::client::{PromptProvider, PromptResponse};
use crate::metrics::PromptMetrics;

use super::common::codes;
use super::error::{RenderError, RenderResult};

/// Resolve a parameterized reference. Unknown names resolve to nothing.
pub async fn resolve_parameterized(
    name: &str,
    argument: &str,
    prompt: &dyn PromptProvider,
) -> RenderResult<Option<String>> {
    match name {
        "color" => format_color(argument).map(Some),
        "prompt" => ask(argument, prompt).await.map(Some),
        _ => {
            tracing::trace!(name = %name, "Unknown parameterized variable");
            Ok(None)
        }
    }
}

/// `fg` or `fg,bg` to a color control sequence, each component two digits.
///
/// Components beyond the second are ignored.
pub fn format_color(argument: &str) -> RenderResult<String> {
    let mut components = argument.split(',').map(str::trim);

    let mut value = String::from(codes::COLOR);

    // split always yields at least one component
    let foreground = parse_component(argument, components.next().unwrap_or_default())?;
    value.push_str(&format!("{:02}", foreground));

    if let Some(background) = components.next() {
        let background = parse_component(argument, background)?;
        value.push_str(&format!(",{:02}", background));
    }

    Ok(value)
}

fn parse_component(argument: &str, component: &str) -> RenderResult<u8> {
    component.parse::<u8>().map_err(|e| RenderError::InvalidColor {
        argument: argument.to_string(),
        reason: format!("{:?}: {}", component, e),
    })
}

async fn ask(message: &str, prompt: &dyn PromptProvider) -> RenderResult<String> {
    match prompt.prompt(message).await? {
        PromptResponse::Answered(text) => {
            PromptMetrics::record_answered();
            Ok(text)
        }
        PromptResponse::Cancelled => {
            PromptMetrics::record_cancelled();
            tracing::debug!(message = %message, "Prompt cancelled");
            Err(RenderError::PromptCancelled)
        }
    }
}
