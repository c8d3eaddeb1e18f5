//! Bundled HTML templates and the environment that renders them.
//!
//! Template names end in `.html`, so every interpolated value is
//! HTML-escaped unless it was registered as safe below.

use minijinja::{Environment, Value};
use serde::Serialize;
use std::sync::LazyLock;

use super::errors::RenderError;
use super::view::{LOADING_MESSAGE, NO_MATCHES_MESSAGE, PROMPT_MESSAGE, SERVER_ERROR_PREFIX};

pub const RESULTS_TPL: &str = include_str!("../../assets/results.html");
pub const PAGE_TPL: &str = include_str!("../../assets/page.html");

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Template {
    /// Contents of the results container
    Results,
    /// Standalone page around the results container
    Page,
}

impl Template {
    pub fn name(&self) -> &'static str {
        match self {
            Template::Results => "results.html",
            Template::Page => "page.html",
        }
    }

    fn source(name: &str) -> Option<&'static str> {
        match name {
            "results.html" => Some(RESULTS_TPL),
            "page.html" => Some(PAGE_TPL),
            _ => None,
        }
    }
}

static ENV: LazyLock<Environment<'static>> = LazyLock::new(|| {
    let mut env = Environment::new();
    env.set_loader(|name| Ok(Template::source(name).map(str::to_string)));

    // Fixed UI text is ours; it goes out verbatim.
    for (name, text) in [
        ("loading_message", LOADING_MESSAGE),
        ("prompt_message", PROMPT_MESSAGE),
        ("no_matches_message", NO_MATCHES_MESSAGE),
        ("server_error_prefix", SERVER_ERROR_PREFIX),
    ] {
        env.add_global(name, Value::from_safe_string(text.to_string()));
    }
    env
});

pub fn render<S: Serialize>(template: Template, ctx: S) -> Result<String, RenderError> {
    let tpl = ENV.get_template(template.name()).map_err(|e| {
        log::error!("Failed to load template {}: {}", template.name(), e);
        e
    })?;
    tpl.render(ctx).map_err(|e| {
        log::error!("Failed to render {}: {:#}", template.name(), e);
        RenderError::from(e)
    })
}
