//! Render use cases: Markdown from an in-memory report, and artifact writing.

use anyhow::Context;
use camino::Utf8Path;
use forgeaudit_types::AuditReport;

pub fn render_markdown(report: &AuditReport) -> String {
    forgeaudit_render::render_markdown(&crate::report::to_renderable(report))
}

/// Write `contents` to `path`, creating parent directories.
pub fn write_text(path: &Utf8Path, contents: &[u8]) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_str().is_empty()) {
        std::fs::create_dir_all(parent).with_context(|| format!("create {parent}"))?;
    }
    std::fs::write(path, contents).with_context(|| format!("write {path}"))
}
