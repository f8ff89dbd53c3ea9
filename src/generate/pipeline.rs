//! The generation loop.

use super::instructions::LUA_TABLE_INSTRUCTIONS;
use super::paths::{is_template_source, output_path};
use crate::chat::{ChatBackend, Refs, build_prompt, collect_deltas};
use crate::error::{FcError, Result};
use crate::fs::{atomic_write_file, read_text, remove_tree};
use crate::refine::{DEFAULT_PASSES, refine_file};
use std::path::{Path, PathBuf};
use std::thread;
use std::time::Duration;
use walkdir::WalkDir;

/// Inputs for one generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateSettings {
    /// Directory of markdown templates.
    pub source_dir: PathBuf,
    /// Directory receiving Lua files.
    pub output_dir: PathBuf,
    /// Pause between consecutive chat requests.
    pub delay: Duration,
    /// Remove `output_dir` before generating.
    pub clean_output: bool,
}

/// Outcome of a generation run.
#[derive(Debug, Default)]
pub struct GenerationSummary {
    /// Lua files written and refined.
    pub generated: Vec<PathBuf>,
    /// Source templates that failed, with the reason.
    pub failed: Vec<(PathBuf, String)>,
}

impl GenerationSummary {
    /// True when every template was generated.
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Generate a Lua template for every markdown file under `settings.source_dir`.
///
/// A failure on one file is logged and recorded; the remaining files are
/// still processed.
pub fn generate_all(settings: &GenerateSettings, backend: &dyn ChatBackend) -> Result<GenerationSummary> {
    if !settings.source_dir.is_dir() {
        return Err(FcError::UserError(format!(
            "template directory '{}' does not exist",
            settings.source_dir.display()
        )));
    }

    let source = resolve_existing(&settings.source_dir)?;
    let output = resolve_existing(&settings.output_dir)?;
    if source.starts_with(&output) || output.starts_with(&source) {
        return Err(FcError::UserError(format!(
            "output directory '{}' overlaps the template directory '{}'\n\
             Fix: choose an output directory outside the templates (and not a parent of them).",
            settings.output_dir.display(),
            settings.source_dir.display()
        )));
    }

    if settings.clean_output && remove_tree(&settings.output_dir)? {
        tracing::info!(dir = %settings.output_dir.display(), "removed previous output");
    }

    let sources = collect_sources(&settings.source_dir)?;
    let mut summary = GenerationSummary::default();

    for (index, source) in sources.iter().enumerate() {
        let count = index + 1;
        if index > 0 && !settings.delay.is_zero() {
            thread::sleep(settings.delay);
        }

        tracing::info!("[{}] > Processing {}", count, source.display());
        match generate_one(settings, backend, source) {
            Ok(target) => {
                tracing::info!("[{}] > Refined {}", count, target.display());
                summary.generated.push(target);
            }
            Err(e) => {
                tracing::warn!("[{}] > Failed {}: {}", count, source.display(), e);
                summary.failed.push((source.clone(), e.to_string()));
            }
        }
    }

    Ok(summary)
}

/// Canonicalize `path`, or its deepest existing ancestor with the missing
/// tail appended, so paths that do not exist yet can still be compared.
fn resolve_existing(path: &Path) -> Result<PathBuf> {
    let absolute = std::path::absolute(path).map_err(|e| {
        FcError::IoError(format!("failed to resolve '{}': {}", path.display(), e))
    })?;

    let mut tail = Vec::new();
    let mut current = absolute.as_path();
    loop {
        if let Ok(canonical) = current.canonicalize() {
            return Ok(tail.iter().rev().fold(canonical, |acc, part| acc.join(part)));
        }
        match (current.parent(), current.file_name()) {
            (Some(parent), Some(name)) => {
                tail.push(name.to_os_string());
                current = parent;
            }
            _ => return Ok(absolute),
        }
    }
}

fn collect_sources(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut sources = Vec::new();
    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = entry.map_err(|e| {
            FcError::IoError(format!("failed to walk '{}': {}", dir.display(), e))
        })?;
        if entry.file_type().is_file() && is_template_source(entry.path()) {
            sources.push(entry.into_path());
        }
    }
    Ok(sources)
}

fn generate_one(settings: &GenerateSettings, backend: &dyn ChatBackend, source: &Path) -> Result<PathBuf> {
    let content = read_text(source)?;
    let filename = source
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or_default();

    let refs = Refs::from_template(filename, &content);
    let prompt = build_prompt(&refs, LUA_TABLE_INSTRUCTIONS);

    let body = backend.complete(&prompt)?;
    let text = collect_deltas(&body);
    if text.trim().is_empty() {
        return Err(FcError::ChatError("response contained no text".to_string()));
    }

    let target = output_path(&settings.source_dir, &settings.output_dir, source)?;
    atomic_write_file(&target, &text)?;
    tracing::debug!(file = %target.display(), "saved");

    refine_file(&target, &DEFAULT_PASSES)?;
    Ok(target)
}
