use crate::{RenderableReport, RenderableVerdictStatus};

pub fn render_markdown(report: &RenderableReport) -> String {
    let mut out = String::new();

    out.push_str(&format!("# {}\n\n", report.title));
    let verdict = match report.verdict {
        RenderableVerdictStatus::Pass => "PASS",
        RenderableVerdictStatus::Warn => "WARN",
        RenderableVerdictStatus::Fail => "FAIL",
    };
    out.push_str(&format!(
        "- Verdict: **{}**\n- Violations: {} ({} modules audited, {} repositories)\n\n",
        verdict,
        report.data.violations_total,
        report.data.modules_audited,
        report.data.repositories_total
    ));

    let mut any = false;
    for section in report.sections.iter().filter(|s| !s.items.is_empty()) {
        any = true;
        out.push_str(&format!("## {}\n\n", section.heading));
        if let Some(intro) = &section.intro {
            out.push_str(&format!("{}\n\n", intro));
        }
        for item in &section.items {
            out.push_str(&format!("* [{}]({})\n", item.label, item.url));
        }
        out.push('\n');
    }

    if !any {
        out.push_str("No violations found.\n");
    }

    if !report.skipped.is_empty() {
        if !any {
            out.push('\n');
        }
        out.push_str("## Skipped modules:\n\n");
        for s in &report.skipped {
            out.push_str(&format!("* `{}` ({}): {}\n", s.slug, s.code, s.message));
        }
        out.push('\n');
    }

    // Exactly one trailing newline.
    while out.ends_with("\n\n") {
        out.pop();
    }
    out
}
