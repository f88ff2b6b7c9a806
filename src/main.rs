//! classdoc — generate per-class reference pages from exported API documentation.
//!
//! Each input is one JSON record describing a class and its members. The
//! record's descriptions are rendered as markup, cross-reference and image
//! tags are rewritten, and the result is rendered through a page template.
//!
//! - **stdin mode**: `classdoc < Ext.Panel.json`
//! - **file mode**: `classdoc -o docs/api export/*.json`

mod assemble;
mod classify;
mod diagnostics;
mod markup;
mod model;
mod render;
mod sanitize;

use anyhow::{Context, Result};
use clap::Parser;
use diagnostics::LogDiagnostics;
use render::Renderer;
use std::collections::HashMap;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "classdoc",
    about = "Generate class reference pages from exported API documentation"
)]
struct Cli {
    /// Input JSON files, directories or glob patterns. If omitted, reads one record from stdin.
    files: Vec<String>,

    /// Output directory (required when files are given)
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Handlebars page template (html format only). Defaults to the built-in template.
    #[arg(short = 't', long)]
    template: Option<PathBuf>,

    /// Output format: html (default), json
    #[arg(short = 'f', long, default_value = "html")]
    format: String,

    /// Remove the output directory before generating
    #[arg(long)]
    clean: bool,
}

/// Batch configuration for [`generate`].
struct GenerateConfig<'a> {
    output_dir: &'a Path,
    clean: bool,
    renderer: &'a dyn Renderer,
}

/// Outcome of a batch run.
#[derive(Debug, Default, PartialEq, Eq)]
struct BatchReport {
    written: usize,
    failed: usize,
    /// Pages written more than once because two inputs share a class name
    overwritten: usize,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let renderer = render::create_renderer(&cli.format, cli.template.as_deref())?;

    if cli.files.is_empty() {
        return stdin_mode(renderer.as_ref());
    }

    let output_dir = cli
        .output
        .as_deref()
        .context("--output is required when files are given")?;
    let input_files = expand_globs(&cli.files)?;
    let config = GenerateConfig {
        output_dir,
        clean: cli.clean,
        renderer: renderer.as_ref(),
    };
    let report = generate(&input_files, &config)?;

    if report.failed > 0 {
        log::warn!(
            "{} of {} files failed",
            report.failed,
            report.failed + report.written
        );
    }
    Ok(())
}

/// stdin mode: read one record from stdin, write the rendered page to stdout.
fn stdin_mode(renderer: &dyn Renderer) -> Result<()> {
    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .context("failed to read stdin")?;

    let (_, page) = build_page(&input, "<stdin>", renderer)?;
    print!("{}", page);
    Ok(())
}

/// file mode: convert every input into one page under the output directory.
///
/// Only preparing the output directory is fatal. Each file is handled on its
/// own; a failure is logged and the batch moves on.
fn generate(input_files: &[PathBuf], config: &GenerateConfig) -> Result<BatchReport> {
    prepare_output_dir(config.output_dir, config.clean)?;

    let ext = config.renderer.file_extension();
    let mut report = BatchReport::default();
    let mut written_from: HashMap<PathBuf, &Path> = HashMap::new();

    for path in input_files {
        match process_file(path, config.output_dir, ext, config.renderer) {
            Ok(out_path) => {
                log::debug!("wrote {}", out_path.display());
                if let Some(previous) = written_from.insert(out_path.clone(), path) {
                    log::warn!(
                        "{} overwrote {} (written from {})",
                        path.display(),
                        out_path.display(),
                        previous.display()
                    );
                    report.overwritten += 1;
                }
                report.written += 1;
            }
            Err(e) => {
                log::error!("skipping {}: {:#}", path.display(), e);
                report.failed += 1;
            }
        }
    }

    Ok(report)
}

fn prepare_output_dir(output_dir: &Path, clean: bool) -> Result<()> {
    if clean && output_dir.exists() {
        fs::remove_dir_all(output_dir).with_context(|| {
            format!("failed to clean output directory: {}", output_dir.display())
        })?;
    }
    fs::create_dir_all(output_dir)
        .with_context(|| format!("failed to create output directory: {}", output_dir.display()))
}

fn process_file(
    path: &Path,
    output_dir: &Path,
    ext: &str,
    renderer: &dyn Renderer,
) -> Result<PathBuf> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let source = path.to_string_lossy();
    let (class_name, page) = build_page(&content, &source, renderer)?;

    let name = match class_name {
        Some(class_name) => output_name(&class_name),
        None => derive_output_name(path),
    };
    let out_path = output_dir.join(format!("{}.{}", name, ext));
    fs::write(&out_path, page)
        .with_context(|| format!("failed to write {}", out_path.display()))?;
    Ok(out_path)
}

/// Parse, assemble and render one record. Returns the class name alongside the page.
fn build_page(
    content: &str,
    source: &str,
    renderer: &dyn Renderer,
) -> Result<(Option<String>, String)> {
    let record: model::ClassRecord = serde_json::from_str(content)
        .with_context(|| format!("invalid class record in {}", source))?;

    let mut diagnostics = LogDiagnostics { source };
    let doc = assemble::assemble(record, &mut diagnostics);
    let page = renderer.render(&doc)?;
    Ok((doc.class_name, page))
}

/// File extensions recognized as class records when scanning a directory.
const SUPPORTED_EXTENSIONS: &[&str] = &["json"];

/// Expand glob patterns into a list of real file paths.
/// Also handles bare directory paths by scanning for supported file types.
fn expand_globs(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for pattern in patterns {
        let path = Path::new(pattern);
        if path.is_file() {
            files.push(path.to_path_buf());
            continue;
        }
        // If it's a directory, scan for supported extensions (non-recursive)
        if path.is_dir() {
            let entries = fs::read_dir(path)
                .with_context(|| format!("failed to read directory: {}", path.display()))?;
            for entry in entries.flatten() {
                let p = entry.path();
                if p.is_file() {
                    if let Some(ext) = p.extension().and_then(|e| e.to_str()) {
                        if SUPPORTED_EXTENSIONS.contains(&ext) {
                            files.push(p);
                        }
                    }
                }
            }
            continue;
        }
        let matches: Vec<_> = glob::glob(pattern)
            .with_context(|| format!("invalid glob pattern: {}", pattern))?
            .filter_map(|r| r.ok())
            .filter(|p| p.is_file())
            .collect();
        if matches.is_empty() {
            log::warn!("no files matched: {}", pattern);
        }
        files.extend(matches);
    }
    // Sort for deterministic output
    files.sort();
    files.dedup();
    Ok(files)
}

/// Page name for a class: path separators would escape the output directory.
fn output_name(class_name: &str) -> String {
    class_name.replace(|c: char| c == '/' || c == '\\', "_")
}

/// Fallback page name for an unnamed class: the input file stem.
/// "export/Ext.Panel.json" → "Ext.Panel"
fn derive_output_name(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "unnamed".to_string())
}
