//! Renderer module — trait-based format dispatch.

pub mod html;
pub mod json;

use crate::model::DocumentModel;
use anyhow::{anyhow, Result};
use std::path::Path;

/// Trait for rendering a DocumentModel into a specific output format.
pub trait Renderer {
    fn render(&self, doc: &DocumentModel) -> Result<String>;
    fn file_extension(&self) -> &str;
}

/// Create a renderer for the given format name.
///
/// `template` only applies to the html format; without it the built-in page
/// template is used.
pub fn create_renderer(format: &str, template: Option<&Path>) -> Result<Box<dyn Renderer>> {
    match format {
        "html" => Ok(Box::new(html::HtmlRenderer::new(template)?)),
        "json" => Ok(Box::new(json::JsonRenderer)),
        _ => Err(anyhow!("unknown format: {}. Use html or json", format)),
    }
}
