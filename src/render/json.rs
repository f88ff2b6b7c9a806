//! JSON renderer — the page model as data, for custom rendering pipelines.

use crate::model::DocumentModel;
use crate::render::Renderer;
use anyhow::{Context, Result};

pub struct JsonRenderer;

impl Renderer for JsonRenderer {
    fn render(&self, doc: &DocumentModel) -> Result<String> {
        let mut out =
            serde_json::to_string_pretty(doc).context("failed to serialize document model")?;
        out.push('\n');
        Ok(out)
    }

    fn file_extension(&self) -> &str {
        "json"
    }
}
