//! CLI entry point for forgeaudit.
//!
//! This module is thin: it handles argument parsing, I/O, logging setup, and exit codes.
//! All business logic lives in the `forgeaudit-app` crate.

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, Subcommand, ValueEnum};
use forgeaudit_app::{
    AuditRunInput, ExplainOutput, parse_report_json, render_markdown, run_audit, run_explain,
    serialize_report, verdict_exit_code, write_text,
};
use forgeaudit_settings::{ForgeauditConfigV1, Overrides};
use forgeaudit_types::AuditReport;
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "FORGEAUDIT_LOG";

#[derive(Parser, Debug)]
#[command(
    name = "forgeaudit",
    version,
    about = "Housekeeping audit for Forge modules and their GitHub repositories"
)]
struct Cli {
    /// Path to forgeaudit config TOML. A missing file means defaults.
    #[arg(long, default_value = "forgeaudit.toml")]
    config: Utf8PathBuf,

    /// Override profile (default|strict).
    #[arg(long)]
    profile: Option<String>,

    /// Never probe the network; unresolved sources are reported as source field problems.
    #[arg(long)]
    offline: bool,

    /// Override the redirect probe timeout in milliseconds.
    #[arg(long)]
    probe_timeout_ms: Option<u64>,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Classify modules and repositories and write artifacts.
    Audit {
        /// JSON document with modules, repositories, and the precomputed lists.
        #[arg(long)]
        input: Utf8PathBuf,

        /// Where to write the JSON report.
        #[arg(long, default_value = "artifacts/forgeaudit/report.json")]
        report_out: Utf8PathBuf,

        /// Write a Markdown report alongside the JSON.
        #[arg(long)]
        write_markdown: bool,

        /// Where to write the Markdown report (if enabled).
        #[arg(long, default_value = "artifacts/forgeaudit/report.md")]
        markdown_out: Utf8PathBuf,
    },

    /// Render markdown from an existing JSON report.
    Md {
        /// Path to the JSON report file.
        #[arg(long, default_value = "artifacts/forgeaudit/report.json")]
        report: Utf8PathBuf,

        /// Where to write the Markdown output (if not specified, prints to stdout).
        #[arg(long, short)]
        output: Option<Utf8PathBuf>,
    },

    /// Explain a category id or skip code with remediation guidance.
    Explain {
        /// The category id (e.g. "forge.source_field_problem") or skip code to explain.
        identifier: String,
    },

    /// Print a JSON schema.
    Schema {
        #[arg(value_enum)]
        kind: SchemaKind,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum SchemaKind {
    /// `forgeaudit.toml`
    Config,
    /// `forgeaudit.report.v1`
    Report,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    match &cli.cmd {
        Commands::Audit {
            input,
            report_out,
            write_markdown,
            markdown_out,
        } => cmd_audit(&cli, input, report_out, *write_markdown, markdown_out),
        Commands::Md { report, output } => cmd_md(report, output.as_deref()),
        Commands::Explain { identifier } => cmd_explain(identifier),
        Commands::Schema { kind } => cmd_schema(*kind),
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn cmd_audit(
    cli: &Cli,
    input_path: &Utf8Path,
    report_out: &Utf8Path,
    write_markdown: bool,
    markdown_out: &Utf8Path,
) -> anyhow::Result<()> {
    let result = (|| -> anyhow::Result<i32> {
        let config_text = read_optional(&cli.config)?;
        let input_text = std::fs::read_to_string(input_path)
            .with_context(|| format!("read input: {input_path}"))?;

        let overrides = Overrides {
            profile: cli.profile.clone(),
            offline: cli.offline,
            probe_timeout_ms: cli.probe_timeout_ms,
        };

        let output = run_audit(AuditRunInput {
            input_text: &input_text,
            config_text: &config_text,
            overrides,
        })?;

        write_report_file(report_out, &output.report).context("write report json")?;
        if write_markdown {
            let md = render_markdown(&output.report);
            write_text(markdown_out, md.as_bytes()).context("write markdown")?;
        }

        Ok(verdict_exit_code(output.report.verdict))
    })();

    match result {
        Ok(0) => Ok(()),
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("forgeaudit error: {err:#}");
            std::process::exit(1);
        }
    }
}

/// Read a file that may be absent. Absence yields an empty string.
fn read_optional(path: &Utf8Path) -> anyhow::Result<String> {
    match std::fs::read_to_string(path) {
        Ok(text) => Ok(text),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(%path, "config not found; using defaults");
            Ok(String::new())
        }
        Err(err) => Err(err).with_context(|| format!("read config: {path}")),
    }
}

fn write_report_file(path: &Utf8Path, report: &AuditReport) -> anyhow::Result<()> {
    let data = serialize_report(report)?;
    write_text(path, &data)
}

fn cmd_md(report_path: &Utf8Path, output: Option<&Utf8Path>) -> anyhow::Result<()> {
    let report_text = std::fs::read_to_string(report_path)
        .with_context(|| format!("read report: {report_path}"))?;
    let report = parse_report_json(&report_text)?;
    let md = render_markdown(&report);

    if let Some(out_path) = output {
        write_text(out_path, md.as_bytes()).context("write markdown output")?;
    } else {
        print!("{md}");
    }

    Ok(())
}

fn cmd_explain(identifier: &str) -> anyhow::Result<()> {
    match run_explain(identifier) {
        ExplainOutput::Found(exp) => {
            print!("{}", forgeaudit_app::format_explanation(&exp));
            Ok(())
        }
        ExplainOutput::NotFound {
            identifier,
            available_category_ids,
            available_skip_codes,
        } => {
            eprint!(
                "{}",
                forgeaudit_app::format_not_found(
                    &identifier,
                    available_category_ids,
                    available_skip_codes
                )
            );
            std::process::exit(1);
        }
    }
}

fn cmd_schema(kind: SchemaKind) -> anyhow::Result<()> {
    let schema = match kind {
        SchemaKind::Config => schemars::schema_for!(ForgeauditConfigV1),
        SchemaKind::Report => schemars::schema_for!(AuditReport),
    };
    let text = serde_json::to_string_pretty(&schema).context("serialize schema")?;
    println!("{text}");
    Ok(())
}
