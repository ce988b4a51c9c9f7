//! The `explain` use case: look up category and skip-code documentation.

use forgeaudit_types::explain::{self, Explanation};

/// Output from the explain use case.
#[derive(Clone, Debug)]
pub enum ExplainOutput {
    /// Found an explanation for the identifier.
    Found(Explanation),
    /// Unknown identifier; includes available category ids and skip codes.
    NotFound {
        identifier: String,
        available_category_ids: &'static [&'static str],
        available_skip_codes: &'static [&'static str],
    },
}

/// Look up an explanation for a category id or skip code.
pub fn run_explain(identifier: &str) -> ExplainOutput {
    match explain::lookup_explanation(identifier) {
        Some(exp) => ExplainOutput::Found(exp),
        None => ExplainOutput::NotFound {
            identifier: identifier.to_string(),
            available_category_ids: explain::all_category_ids(),
            available_skip_codes: explain::all_skip_codes(),
        },
    }
}

/// Format an explanation for terminal display.
pub fn format_explanation(exp: &Explanation) -> String {
    let mut out = String::new();

    out.push_str(exp.title);
    out.push('\n');
    out.push_str(&"=".repeat(exp.title.chars().count()));
    out.push_str("\n\n");
    out.push_str(exp.description.trim_end());
    out.push_str("\n\n");
    out.push_str("Remediation\n");
    out.push_str("-----------\n");
    out.push_str(exp.remediation.trim_end());
    out.push('\n');

    out
}

/// Format the "not found" error message for terminal display.
pub fn format_not_found(
    identifier: &str,
    category_ids: &[&'static str],
    skip_codes: &[&'static str],
) -> String {
    let mut out = String::new();

    out.push_str(&format!("Unknown category id or skip code: {}\n\n", identifier));
    out.push_str("Available category ids:\n");
    for id in category_ids {
        out.push_str(&format!("  - {}\n", id));
    }
    out.push_str("\nAvailable skip codes:\n");
    for code in skip_codes {
        out.push_str(&format!("  - {}\n", code));
    }

    out
}
