//! Developer tasks (schema generation, fixture checks, explain coverage).
//!
//! Keeping this separate avoids bloating the end-user CLI.

use anyhow::{Context, bail};
use forgeaudit_test_util::normalize_nondeterministic;
use schemars::schema_for;
use std::fs;
use std::path::{Path, PathBuf};

fn project_root() -> &'static Path {
    let xtask_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    xtask_dir.parent().unwrap_or(xtask_dir)
}

fn audit_fixtures_dir() -> PathBuf {
    project_root().join("tests").join("fixtures").join("audit")
}

/// One published schema: file name plus the type it is derived from.
struct SchemaTarget {
    filename: &'static str,
    generate: fn() -> schemars::Schema,
}

fn report_schema() -> schemars::Schema {
    schema_for!(forgeaudit_types::AuditReport)
}

fn schema_targets() -> [SchemaTarget; 3] {
    [
        SchemaTarget {
            filename: "forgeaudit.report.v1.json",
            generate: report_schema,
        },
        SchemaTarget {
            filename: "forgeaudit.config.v1.json",
            generate: || schema_for!(forgeaudit_settings::ForgeauditConfigV1),
        },
        SchemaTarget {
            filename: "forgeaudit.input.v1.json",
            generate: || schema_for!(forgeaudit_types::AuditInput),
        },
    ]
}

/// Write every schema into `out_dir` (default `schemas/`). Each schema must compile as a JSON
/// Schema validator before it is written.
fn emit_schemas(out_dir: Option<&str>) -> anyhow::Result<()> {
    let dir = out_dir
        .map(PathBuf::from)
        .unwrap_or_else(|| project_root().join("schemas"));
    fs::create_dir_all(&dir).with_context(|| format!("create {}", dir.display()))?;

    for target in schema_targets() {
        let value = serde_json::to_value((target.generate)())
            .with_context(|| format!("convert {} to JSON", target.filename))?;
        jsonschema::validator_for(&value)
            .map_err(|e| anyhow::anyhow!("{} does not compile: {e}", target.filename))?;

        let mut json = serde_json::to_string_pretty(&value)
            .with_context(|| format!("serialize {}", target.filename))?;
        json.push('\n');

        let path = dir.join(target.filename);
        fs::write(&path, json).with_context(|| format!("write {}", path.display()))?;
        println!("Wrote {}", path.display());
    }
    Ok(())
}

/// Check every `expected.report.json` fixture against the generated report schema and make sure
/// it is stored in normalized form.
fn check_fixtures() -> anyhow::Result<()> {
    let schema_value = serde_json::to_value(report_schema())
        .context("Failed to convert report schema to JSON")?;
    let validator = jsonschema::validator_for(&schema_value)
        .map_err(|e| anyhow::anyhow!("Failed to compile report schema: {}", e))?;

    let fixtures_dir = audit_fixtures_dir();
    if !fixtures_dir.exists() {
        bail!("audit fixtures not found at {}", fixtures_dir.display());
    }

    let mut fixture_count = 0;
    let mut errors = Vec::new();

    let mut entries = fs::read_dir(&fixtures_dir)
        .context("Failed to read tests/fixtures/audit/")?
        .collect::<Result<Vec<_>, _>>()?;
    entries.sort_by_key(|e| e.file_name());

    for entry in entries {
        let path = entry.path().join("expected.report.json");
        if !path.exists() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().to_string();

        let content =
            fs::read_to_string(&path).with_context(|| format!("Failed to read {}", name))?;
        let value: serde_json::Value = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse {} as JSON", name))?;

        for err in validator.iter_errors(&value) {
            errors.push(format!("{}: schema validation: {}", name, err));
        }
        if normalize_nondeterministic(value.clone()) != value {
            errors.push(format!(
                "{}: version and timestamps must use __VERSION__ / __TIMESTAMP__",
                name
            ));
        }
        if !entry.path().join("inputs.json").exists() {
            errors.push(format!("{}: missing inputs.json", name));
        }

        fixture_count += 1;
    }

    if errors.is_empty() {
        println!("✓ {} audit fixtures are valid", fixture_count);
        Ok(())
    } else {
        for error in &errors {
            eprintln!("  - {}", error);
        }
        bail!("Fixture validation failed with {} errors", errors.len())
    }
}

/// Validate that all category IDs and skip codes have explanations.
fn explain_coverage() -> anyhow::Result<()> {
    let category_ids = forgeaudit_types::explain::all_category_ids();
    let skip_codes = forgeaudit_types::explain::all_skip_codes();

    let mut errors = Vec::new();
    for (kind, ids) in [("Category ID", category_ids), ("Skip code", skip_codes)] {
        for id in ids {
            match forgeaudit_types::explain::lookup_explanation(id) {
                Some(exp) => {
                    if exp.title.is_empty() {
                        errors.push(format!("{kind} '{id}' has empty title"));
                    }
                    if exp.description.is_empty() {
                        errors.push(format!("{kind} '{id}' has empty description"));
                    }
                    if exp.remediation.is_empty() {
                        errors.push(format!("{kind} '{id}' has empty remediation"));
                    }
                }
                None => errors.push(format!("{kind} '{id}' has no explanation")),
            }
        }
    }

    for category in forgeaudit_types::ViolationCategory::ALL {
        if !category_ids.contains(&category.id()) {
            errors.push(format!("Category '{}' is not listed", category.id()));
        }
    }

    if errors.is_empty() {
        println!("✓ {} category IDs have explanations", category_ids.len());
        println!("✓ {} skip codes have explanations", skip_codes.len());
        println!("\n✓ All explain coverage checks passed!");
        Ok(())
    } else {
        for error in &errors {
            eprintln!("  - {}", error);
        }
        bail!(
            "Explain coverage validation failed with {} errors",
            errors.len()
        )
    }
}

fn print_help() {
    eprintln!("xtask commands:");
    eprintln!("  help                Show this message");
    eprintln!("  emit-schemas [DIR]  Write report/config/input JSON schemas (default: schemas/)");
    eprintln!("  print-schema-ids    Print known schema IDs");
    eprintln!("  check-fixtures      Validate CLI golden reports against the report schema");
    eprintln!("  explain-coverage    Validate all category IDs and skip codes have explanations");
}

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let cmd = args.get(1).map(|s| s.as_str()).unwrap_or("help");

    match cmd {
        "help" | "--help" | "-h" => {
            print_help();
            Ok(())
        }
        "emit-schemas" => emit_schemas(args.get(2).map(String::as_str)),
        "check-fixtures" => check_fixtures(),
        "explain-coverage" => explain_coverage(),
        "print-schema-ids" => {
            for target in schema_targets() {
                println!("{}", target.filename.trim_end_matches(".json"));
            }
            Ok(())
        }
        other => bail!("unknown xtask command: {other}\n\nRun `cargo xtask help` for usage."),
    }
    .context("xtask failed")
}
