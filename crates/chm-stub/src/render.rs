//! Placeholder substitution for stubs

use crate::error::StubResult;
use crate::source::StubTemplate;
use minijinja::Environment;
use serde::Serialize;

/// Values available to a stub while rendering
#[derive(Debug, Clone, Default, Serialize)]
pub struct StubContext {
    /// Class-style identifier derived from the migration name (`CreateOrdersTable`)
    pub class: String,

    /// Table the migration targets, empty for plain migrations
    pub table: String,

    /// Canonical snake_case migration name
    pub name: String,

    /// Creation time, `YYYY-MM-DD HH:MM:SS`
    pub created_at: String,
}

/// Renders stub templates
pub struct StubRenderer<'a> {
    env: Environment<'a>,
}

impl<'a> StubRenderer<'a> {
    /// Create a renderer. Unknown placeholders render as empty strings.
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.set_keep_trailing_newline(true);
        Self { env }
    }

    /// Substitute the context into a stub, leaving the stub itself untouched
    pub fn render(&self, template: &StubTemplate, ctx: &StubContext) -> StubResult<String> {
        Ok(self.env.render_str(&template.content, ctx)?)
    }
}

impl Default for StubRenderer<'_> {
    fn default() -> Self {
        Self::new()
    }
}
