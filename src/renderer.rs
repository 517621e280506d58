//! Template rendering for the built-in default files.
//! Only literal token substitution is performed (timestamp, authors, title,
//! command names); user supplied content is never rendered.
use crate::error::Result;
use minijinja::{Environment, UndefinedBehavior};

/// Trait for template rendering engines.
pub trait TemplateRenderer: Send + Sync {
    /// Renders a template string with the given context.
    ///
    /// # Arguments
    /// * `template` - Template string to render
    /// * `context` - Context variables for rendering
    ///
    /// # Returns
    /// * `Result<String>` - Rendered template string
    fn render(&self, template: &str, context: &serde_json::Value) -> Result<String>;
}

/// MiniJinja-based template rendering engine.
pub struct MiniJinjaRenderer {
    /// MiniJinja environment instance
    env: Environment<'static>,
}

impl MiniJinjaRenderer {
    /// Creates a new renderer that fails on undefined variables and keeps
    /// trailing newlines intact.
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.set_keep_trailing_newline(true);
        Self { env }
    }
}

impl Default for MiniJinjaRenderer {
    fn default() -> Self {
        MiniJinjaRenderer::new()
    }
}

impl TemplateRenderer for MiniJinjaRenderer {
    /// Renders a template string using MiniJinja.
    ///
    /// # Errors
    /// * `Error::TemplateError` if the template fails to parse or render
    fn render(&self, template: &str, context: &serde_json::Value) -> Result<String> {
        Ok(self.env.render_str(template, context)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use serde_json::json;

    #[test]
    fn test_render_tokens() {
        let renderer = MiniJinjaRenderer::new();
        let rendered = renderer
            .render("{{ c }} Authors: {{ authors }}\n", &json!({"c": "#", "authors": "alice bob"}))
            .unwrap();
        assert_eq!(rendered, "# Authors: alice bob\n");
    }

    #[test]
    fn test_render_undefined_variable_fails() {
        let renderer = MiniJinjaRenderer::new();
        let result = renderer.render("{{ missing }}", &json!({}));
        assert!(matches!(result, Err(Error::TemplateError(_))));
    }
}
