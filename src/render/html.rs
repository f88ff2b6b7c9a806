//! HTML renderer — class page rendered through a Handlebars template.
//!
//! The built-in template lives in `templates/class.hbs`; `--template` swaps
//! in another one. Templates see the document model with camelCase keys and
//! should use triple braces for the markup fields (`{{{classText}}}`,
//! `{{{text}}}`).

use crate::model::DocumentModel;
use crate::render::Renderer;
use anyhow::{Context, Result};
use handlebars::Handlebars;
use std::fs;
use std::path::Path;

const TEMPLATE_NAME: &str = "class";
const DEFAULT_TEMPLATE: &str = include_str!("../../templates/class.hbs");

pub struct HtmlRenderer {
    registry: Handlebars<'static>,
}

impl HtmlRenderer {
    /// Load and compile the page template; failure here is fatal for the run.
    pub fn new(template: Option<&Path>) -> Result<Self> {
        let source = match template {
            Some(path) => fs::read_to_string(path)
                .with_context(|| format!("failed to read template: {}", path.display()))?,
            None => DEFAULT_TEMPLATE.to_string(),
        };

        let mut registry = Handlebars::new();
        registry
            .register_template_string(TEMPLATE_NAME, source)
            .context("failed to compile template")?;
        Ok(Self { registry })
    }
}

impl Renderer for HtmlRenderer {
    fn render(&self, doc: &DocumentModel) -> Result<String> {
        self.registry
            .render(TEMPLATE_NAME, doc)
            .context("failed to render template")
    }

    fn file_extension(&self) -> &str {
        "html"
    }
}
