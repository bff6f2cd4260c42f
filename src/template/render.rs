//! Rendering templates against a resolver

use crate::pipeline::map_ordered;
use crate::resolver::{RenderResult, VariableResolver};

use super::{Template, TemplateNode};

impl Template {
    /// Resolve every node in order and concatenate the results.
    ///
    /// The first resolver failure aborts the render.
    pub async fn render<R>(&self, resolver: &R) -> RenderResult<String>
    where
        R: VariableResolver + ?Sized,
    {
        let fragments = map_ordered(&self.nodes, move |node| resolve_node(node, resolver)).await?;
        Ok(fragments.into_iter().flatten().collect())
    }
}

async fn resolve_node<R>(node: &TemplateNode, resolver: &R) -> RenderResult<Option<String>>
where
    R: VariableResolver + ?Sized,
{
    match node {
        TemplateNode::Text { text, .. } => Ok(Some(text.clone())),
        TemplateNode::Substitution(name) => resolver.resolve(name, None).await,
        TemplateNode::Parameterized { name, argument } => {
            resolver.resolve(name, Some(argument.as_str())).await
        }
    }
}

/// Render a list of command lines, all or nothing.
pub async fn render_all<R>(templates: &[Template], resolver: &R) -> RenderResult<Vec<String>>
where
    R: VariableResolver + ?Sized,
{
    map_ordered(templates, move |template| template.render(resolver)).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use async_trait::async_trait;

    use crate::client::{PromptError, PromptProvider, PromptResponse};
    use crate::resolver::{CommandType, ContextResolver, RenderContext, RenderError};

    /// Cancels every prompt, counting how often it was asked
    #[derive(Default)]
    struct CancellingPrompt {
        asked: AtomicUsize,
    }

    #[async_trait]
    impl PromptProvider for CancellingPrompt {
        async fn prompt(&self, _message: &str) -> Result<PromptResponse, PromptError> {
            self.asked.fetch_add(1, Ordering::SeqCst);
            Ok(PromptResponse::Cancelled)
        }
    }

    fn channel_resolver(prompt: Arc<dyn PromptProvider>) -> ContextResolver {
        ContextResolver::new(
            CommandType::Channel,
            RenderContext::channel("Bob", "#test"),
            prompt,
        )
    }

    #[tokio::test]
    async fn test_render_substitutions() {
        let resolver = channel_resolver(Arc::new(CancellingPrompt::default()));
        let template = Template::new("${me} says hi in ${channel}");

        assert_eq!(
            template.render(&resolver).await.unwrap(),
            "Bob says hi in #test"
        );
    }

    #[tokio::test]
    async fn test_render_color_and_reset() {
        let resolver = channel_resolver(Arc::new(CancellingPrompt::default()));
        let template = Template::new("${color:4,0}bold red${end}");

        assert_eq!(
            template.render(&resolver).await.unwrap(),
            "\u{03}04,00bold red\u{0f}"
        );
    }

    #[tokio::test]
    async fn test_unknown_names_render_empty() {
        let resolver = channel_resolver(Arc::new(CancellingPrompt::default()));
        let template = Template::new("[${nope}][${nope:arg}]");

        assert_eq!(template.render(&resolver).await.unwrap(), "[][]");
    }

    #[tokio::test]
    async fn test_render_is_deterministic() {
        let resolver = channel_resolver(Arc::new(CancellingPrompt::default()));
        let template = Template::new("${bold}${me}${end} @ ${channel}");

        let first = template.render(&resolver).await.unwrap();
        let second = template.render(&resolver).await.unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_bad_color_fails_render() {
        let resolver = channel_resolver(Arc::new(CancellingPrompt::default()));
        let template = Template::new("${color:red}x");

        assert!(matches!(
            template.render(&resolver).await,
            Err(RenderError::InvalidColor { .. })
        ));
    }

    #[tokio::test]
    async fn test_render_all_stops_at_cancelled_prompt() {
        let prompt = Arc::new(CancellingPrompt::default());
        let resolver = channel_resolver(prompt.clone());
        let templates = vec![
            Template::new("/msg ${channel} one"),
            Template::new("/msg ${channel} ${prompt:Two?}"),
            Template::new("/msg ${channel} ${prompt:Three?}"),
        ];

        let err = render_all(&templates, &resolver).await.unwrap_err();
        assert!(err.is_cancellation());
        // The third line is never reached
        assert_eq!(prompt.asked.load(Ordering::SeqCst), 1);
    }
}
