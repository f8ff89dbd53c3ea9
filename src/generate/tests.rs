//! Tests for template generation.

use super::*;
use crate::chat::ChatBackend;
use crate::error::{FcError, Result};
use std::cell::RefCell;
use std::collections::VecDeque;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tempfile::TempDir;

// =========================================================================
// Helpers
// =========================================================================

/// Backend that replays canned bodies and records every prompt.
struct ScriptedBackend {
    responses: RefCell<VecDeque<Result<String>>>,
    prompts: RefCell<Vec<String>>,
}

impl ScriptedBackend {
    fn new(responses: Vec<Result<String>>) -> Self {
        Self {
            responses: RefCell::new(responses.into()),
            prompts: RefCell::new(Vec::new()),
        }
    }
}

impl ChatBackend for ScriptedBackend {
    fn complete(&self, prompt: &str) -> Result<String> {
        self.prompts.borrow_mut().push(prompt.to_string());
        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(FcError::ChatError("no scripted response".to_string())))
    }
}

fn stream(parts: &[&str]) -> String {
    parts
        .iter()
        .map(|p| serde_json::json!({ "delta": p }).to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

fn write(path: &Path, content: &str) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn settings(temp_dir: &TempDir) -> GenerateSettings {
    GenerateSettings {
        source_dir: temp_dir.path().join("template"),
        output_dir: temp_dir.path().join("lua/fittencode/template"),
        delay: Duration::ZERO,
        clean_output: true,
    }
}

// =========================================================================
// output_path / is_template_source
// =========================================================================

#[test]
fn test_output_path_swaps_rdt_suffix_and_mirrors_dirs() {
    let target = output_path(
        Path::new("/t"),
        Path::new("/out"),
        Path::new("/t/chat/edit_code.rdt.md"),
    )
    .unwrap();
    assert_eq!(target, PathBuf::from("/out/chat/edit_code.lua"));
}

#[test]
fn test_output_path_plain_md() {
    let target = output_path(Path::new("/t"), Path::new("/out"), Path::new("/t/readme.md")).unwrap();
    assert_eq!(target, PathBuf::from("/out/readme.lua"));
}

#[test]
fn test_output_path_rejects_outside_and_non_markdown() {
    assert!(output_path(Path::new("/t"), Path::new("/out"), Path::new("/x/a.md")).is_err());
    assert!(output_path(Path::new("/t"), Path::new("/out"), Path::new("/t/a.lua")).is_err());
    assert!(output_path(Path::new("/t"), Path::new("/out"), Path::new("/t/.md")).is_err());
}

#[test]
fn test_is_template_source() {
    assert!(is_template_source(Path::new("a/explain_code.rdt.md")));
    assert!(is_template_source(Path::new("a/b.md")));
    assert!(!is_template_source(Path::new("a/b.lua")));
    assert!(!is_template_source(Path::new("a/.md")));
    assert!(!is_template_source(Path::new("a/b.mdx")));
}

// =========================================================================
// generate_all
// =========================================================================

#[test]
fn test_generate_all_writes_refined_lua() {
    let temp_dir = TempDir::new().unwrap();
    let settings = settings(&temp_dir);
    write(
        &settings.source_dir.join("chat/explain.rdt.md"),
        "# Explain\n\n## Template\n\n<|system|>\n",
    );

    let backend = ScriptedBackend::new(vec![Ok(stream(&[
        "local template = {\n",
        "  prompt = [[<| system |>]],  \n",
        "}\nreturn template",
    ]))]);

    let summary = generate_all(&settings, &backend).unwrap();

    assert!(summary.is_success());
    let target = settings.output_dir.join("chat/explain.lua");
    assert_eq!(summary.generated, vec![target.clone()]);
    assert_eq!(
        fs::read_to_string(&target).unwrap(),
        "local template = {\n  prompt = [[<|system|>]],\n}\nreturn template\n"
    );
}

#[test]
fn test_generate_all_sends_escaped_content_and_instructions() {
    let temp_dir = TempDir::new().unwrap();
    let settings = settings(&temp_dir);
    write(&settings.source_dir.join("a.rdt.md"), "<|user|>\nhello\n");

    let backend = ScriptedBackend::new(vec![Ok(stream(&["return {}"]))]);
    generate_all(&settings, &backend).unwrap();

    let prompts = backend.prompts.borrow();
    assert_eq!(prompts.len(), 1);
    assert!(prompts[0].contains("Current file content(a.rdt.md):\n```\n<| user |>\nhello\n"));
    assert!(prompts[0].contains("Selected Text(a.rdt.md 0:3)"));
    assert!(prompts[0].contains(LUA_TABLE_INSTRUCTIONS));
}

#[test]
fn test_generate_all_continues_after_failure() {
    let temp_dir = TempDir::new().unwrap();
    let settings = settings(&temp_dir);
    write(&settings.source_dir.join("a.rdt.md"), "# A");
    write(&settings.source_dir.join("b.rdt.md"), "# B");
    write(&settings.source_dir.join("c.rdt.md"), "# C");

    let backend = ScriptedBackend::new(vec![
        Ok(stream(&["return 'a'"])),
        Err(FcError::ChatError("HTTP 500".to_string())),
        Ok(stream(&["return 'c'"])),
    ]);

    let summary = generate_all(&settings, &backend).unwrap();

    assert!(!summary.is_success());
    assert_eq!(summary.generated.len(), 2);
    assert_eq!(summary.failed.len(), 1);
    assert_eq!(summary.failed[0].0, settings.source_dir.join("b.rdt.md"));
    assert!(summary.failed[0].1.contains("HTTP 500"));
    assert!(settings.output_dir.join("c.lua").exists());
    assert!(!settings.output_dir.join("b.lua").exists());
}

#[test]
fn test_generate_all_empty_response_is_failure() {
    let temp_dir = TempDir::new().unwrap();
    let settings = settings(&temp_dir);
    write(&settings.source_dir.join("a.rdt.md"), "# A");

    let backend = ScriptedBackend::new(vec![Ok("not json\n\n".to_string())]);
    let summary = generate_all(&settings, &backend).unwrap();

    assert_eq!(summary.failed.len(), 1);
    assert!(summary.failed[0].1.contains("no text"));
}

#[test]
fn test_generate_all_skips_non_markdown() {
    let temp_dir = TempDir::new().unwrap();
    let settings = settings(&temp_dir);
    write(&settings.source_dir.join("a.rdt.md"), "# A");
    write(&settings.source_dir.join("notes.txt"), "ignore me");

    let backend = ScriptedBackend::new(vec![Ok(stream(&["return {}"]))]);
    let summary = generate_all(&settings, &backend).unwrap();

    assert_eq!(summary.generated.len(), 1);
    assert_eq!(backend.prompts.borrow().len(), 1);
}

#[test]
fn test_generate_all_cleans_output_by_default() {
    let temp_dir = TempDir::new().unwrap();
    let settings = settings(&temp_dir);
    write(&settings.source_dir.join("a.rdt.md"), "# A");
    let stale = settings.output_dir.join("stale.lua");
    write(&stale, "old");

    let backend = ScriptedBackend::new(vec![Ok(stream(&["return {}"]))]);
    generate_all(&settings, &backend).unwrap();

    assert!(!stale.exists());
}

#[test]
fn test_generate_all_keep_existing_output() {
    let temp_dir = TempDir::new().unwrap();
    let settings = GenerateSettings {
        clean_output: false,
        ..settings(&temp_dir)
    };
    write(&settings.source_dir.join("a.rdt.md"), "# A");
    let stale = settings.output_dir.join("stale.lua");
    write(&stale, "old");

    let backend = ScriptedBackend::new(vec![Ok(stream(&["return {}"]))]);
    generate_all(&settings, &backend).unwrap();

    assert!(stale.exists());
}

#[test]
fn test_generate_all_missing_source_dir_is_error() {
    let temp_dir = TempDir::new().unwrap();
    let backend = ScriptedBackend::new(vec![]);

    let err = generate_all(&settings(&temp_dir), &backend).unwrap_err();
    assert!(err.to_string().contains("does not exist"));
}

#[test]
fn test_generate_all_refuses_same_source_and_output() {
    let temp_dir = TempDir::new().unwrap();
    let mut settings = settings(&temp_dir);
    settings.output_dir = settings.source_dir.clone();
    write(&settings.source_dir.join("a.rdt.md"), "# A");

    let backend = ScriptedBackend::new(vec![]);
    assert!(generate_all(&settings, &backend).is_err());
    assert!(settings.source_dir.join("a.rdt.md").exists());
}

#[test]
fn test_generate_all_refuses_output_above_source() {
    let temp_dir = TempDir::new().unwrap();
    let settings = GenerateSettings {
        source_dir: temp_dir.path().join("out/template"),
        output_dir: temp_dir.path().join("out"),
        ..settings(&temp_dir)
    };
    write(&settings.source_dir.join("a.rdt.md"), "# A");

    let backend = ScriptedBackend::new(vec![Ok(stream(&["return {}"]))]);
    let err = generate_all(&settings, &backend).unwrap_err();

    assert!(matches!(err, FcError::UserError(_)));
    assert!(err.to_string().contains("overlaps"));
    assert!(settings.source_dir.join("a.rdt.md").exists());
    assert!(backend.prompts.borrow().is_empty());
}

#[test]
fn test_generate_all_refuses_output_above_source_via_dot_path() {
    let temp_dir = TempDir::new().unwrap();
    let settings = GenerateSettings {
        source_dir: temp_dir.path().join("out/template"),
        output_dir: temp_dir.path().join("out/template/.."),
        ..settings(&temp_dir)
    };
    write(&settings.source_dir.join("a.rdt.md"), "# A");

    let backend = ScriptedBackend::new(vec![]);
    assert!(generate_all(&settings, &backend).is_err());
    assert!(settings.source_dir.join("a.rdt.md").exists());
}

#[test]
fn test_generate_all_refuses_output_inside_source() {
    let temp_dir = TempDir::new().unwrap();
    let mut settings = settings(&temp_dir);
    settings.output_dir = settings.source_dir.join("generated");
    write(&settings.source_dir.join("a.rdt.md"), "# A");

    let backend = ScriptedBackend::new(vec![]);
    let err = generate_all(&settings, &backend).unwrap_err();

    assert!(err.to_string().contains("overlaps"));
    assert!(settings.source_dir.join("a.rdt.md").exists());
}

#[test]
fn test_generate_all_allows_sibling_output_with_shared_prefix() {
    let temp_dir = TempDir::new().unwrap();
    let settings = GenerateSettings {
        source_dir: temp_dir.path().join("template"),
        output_dir: temp_dir.path().join("template_out"),
        ..settings(&temp_dir)
    };
    write(&settings.source_dir.join("a.rdt.md"), "# A");

    let backend = ScriptedBackend::new(vec![Ok(stream(&["return {}"]))]);
    let summary = generate_all(&settings, &backend).unwrap();

    assert!(summary.is_success());
    assert!(settings.output_dir.join("a.lua").exists());
}

// =========================================================================
// Request pacing
// =========================================================================

#[test]
fn test_generate_all_sleeps_between_requests() {
    let temp_dir = TempDir::new().unwrap();
    let delay = Duration::from_millis(50);
    let settings = GenerateSettings {
        delay,
        ..settings(&temp_dir)
    };
    write(&settings.source_dir.join("a.rdt.md"), "# A");
    write(&settings.source_dir.join("b.rdt.md"), "# B");
    write(&settings.source_dir.join("c.rdt.md"), "# C");

    let backend = ScriptedBackend::new(vec![
        Ok(stream(&["return 'a'"])),
        Ok(stream(&["return 'b'"])),
        Ok(stream(&["return 'c'"])),
    ]);

    let start = std::time::Instant::now();
    let summary = generate_all(&settings, &backend).unwrap();
    let elapsed = start.elapsed();

    assert_eq!(summary.generated.len(), 3);
    assert!(elapsed >= delay * 2, "elapsed {:?}", elapsed);
}

#[test]
fn test_generate_all_single_template_does_not_sleep() {
    let temp_dir = TempDir::new().unwrap();
    let delay = Duration::from_secs(3);
    let settings = GenerateSettings {
        delay,
        ..settings(&temp_dir)
    };
    write(&settings.source_dir.join("a.rdt.md"), "# A");

    let backend = ScriptedBackend::new(vec![Ok(stream(&["return {}"]))]);

    let start = std::time::Instant::now();
    generate_all(&settings, &backend).unwrap();

    assert!(start.elapsed() < delay);
}
