use anyhow::Context;
use forgeaudit_render::{
    RenderableData, RenderableItem, RenderableReport, RenderableSection, RenderableSkip,
    RenderableVerdictStatus,
};
use forgeaudit_types::{
    AuditData, AuditReport, CategorySets, ModuleRef, SCHEMA_REPORT_V1, Verdict, ViolationCategory,
};

pub const REPORT_TITLE: &str = "Module Repository Housekeeping Audit";

pub fn parse_report_json(text: &str) -> anyhow::Result<AuditReport> {
    let value: serde_json::Value = serde_json::from_str(text).context("parse report json")?;

    let schema = value
        .get("schema")
        .and_then(|v| v.as_str())
        .unwrap_or_default()
        .to_string();
    if schema != SCHEMA_REPORT_V1 {
        anyhow::bail!("unknown report schema: {schema} (expected {SCHEMA_REPORT_V1})");
    }

    serde_json::from_value(value).context("parse forgeaudit report")
}

pub fn serialize_report(report: &AuditReport) -> anyhow::Result<Vec<u8>> {
    let mut bytes = serde_json::to_vec_pretty(report).context("serialize report")?;
    bytes.push(b'\n');
    Ok(bytes)
}

/// Build the Markdown model from the report alone. Sections follow category order.
pub fn to_renderable(report: &AuditReport) -> RenderableReport {
    RenderableReport {
        title: REPORT_TITLE.to_string(),
        verdict: match report.verdict {
            Verdict::Pass => RenderableVerdictStatus::Pass,
            Verdict::Warn => RenderableVerdictStatus::Warn,
            Verdict::Fail => RenderableVerdictStatus::Fail,
        },
        sections: ViolationCategory::ALL
            .into_iter()
            .map(|c| section(c, &report.categories, &report.data))
            .collect(),
        skipped: report
            .skipped
            .iter()
            .map(|s| RenderableSkip {
                slug: s.slug.clone(),
                code: s.code.clone(),
                message: s.message.clone(),
            })
            .collect(),
        data: RenderableData {
            violations_total: report.data.violations_total,
            modules_audited: report.data.modules_audited,
            repositories_total: report.data.repositories_total,
        },
    }
}

fn section(
    category: ViolationCategory,
    sets: &CategorySets,
    data: &AuditData,
) -> RenderableSection {
    let (heading, intro) = heading_of(category);
    let items = match category {
        ViolationCategory::MissingModuleTopic => sets
            .missing_module_topic
            .iter()
            .map(|r| RenderableItem {
                label: format!("{}/{}", data.org, r.name),
                url: format!("https://{}/{}/{}", data.host, data.org, r.name),
            })
            .collect(),
        ViolationCategory::MissingSupportTierTopic => {
            identifiers(&sets.missing_support_tier_topic, data)
        }
        ViolationCategory::MissingReadmePreamble => {
            identifiers(&sets.missing_readme_preamble, data)
        }
        ViolationCategory::InvalidOwnership => identifiers(&sets.invalid_ownership, data),
        module_keyed => modules(sets.modules_in(module_keyed).unwrap_or_default(), data),
    };

    RenderableSection {
        heading: heading.to_string(),
        intro: intro.map(str::to_string),
        items,
    }
}

fn identifiers(ids: &[String], data: &AuditData) -> Vec<RenderableItem> {
    ids.iter()
        .map(|id| RenderableItem {
            label: id.clone(),
            url: format!("https://{}/{}", data.host, id),
        })
        .collect()
}

fn modules(refs: &[ModuleRef], data: &AuditData) -> Vec<RenderableItem> {
    refs.iter()
        .map(|m| RenderableItem {
            label: format!("{}-{}", data.org, m.name),
            url: format!("{}/{}/{}", data.forge_url, data.org, m.name),
        })
        .collect()
}

fn heading_of(category: ViolationCategory) -> (&'static str, Option<&'static str>) {
    match category {
        ViolationCategory::MissingModuleTopic => (
            "Missing `module` topic:",
            Some(
                "The following GitHub repositories were detected as Puppet modules, but are missing the 'module' topic:",
            ),
        ),
        ViolationCategory::MissingSupportTierTopic => (
            "Missing support tier topic:",
            Some(
                "The following GitHub repositories should have topics clarifying which support tier they fall into.",
            ),
        ),
        ViolationCategory::MissingReadmePreamble => (
            "Missing README preamble:",
            Some(
                "The following GitHub repositories do not have a properly formatted README preamble\nexplaining what kind of support a user can expect from a module.",
            ),
        ),
        ViolationCategory::InvalidOwnership => (
            "Invalid CODEOWNERS file:",
            Some(
                "The following GitHub repositories do not have a valid CODEOWNERS file assigning an owner to the module.",
            ),
        ),
        ViolationCategory::BadgeShouldBeSupported => (
            "The following Forge modules should be badged as Supported:",
            None,
        ),
        ViolationCategory::BadgeShouldNotBeSupported => (
            "The following Forge modules should have the Supported badge removed:",
            None,
        ),
        ViolationCategory::BadgeShouldBeAdoptable => (
            "The following Forge modules should be badged as Adoptable:",
            Some(
                "Their source repository has been moved into the Toy Chest, so the module is available for adoption.",
            ),
        ),
        ViolationCategory::SourceFieldProblem => (
            "The following Forge modules have a problem with their source field:",
            Some(
                "Either the field could not be parsed, or it does not point to a valid public repo\nwithin the org. Often this indicates that the repo has been archived into the Toy Chest.",
            ),
        ),
    }
}
