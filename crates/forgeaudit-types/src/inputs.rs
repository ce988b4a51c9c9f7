//! Input records as supplied by the registry and hosting-platform collectors.
//!
//! The shapes follow the upstream APIs loosely: unknown fields are ignored and most fields are
//! optional, so a partially populated collector payload still loads.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Registry support tier declared on a module.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Endorsement {
    Supported,
    Approved,
    Partner,
    /// Any tier this version does not know about.
    #[serde(other)]
    Unknown,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ModuleMetadata {
    /// Free-text source reference, usually a repository URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Module {
    pub slug: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endorsement: Option<Endorsement>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deprecated_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<ModuleMetadata>,
}

impl Module {
    pub fn is_supported(&self) -> bool {
        self.endorsement == Some(Endorsement::Supported)
    }

    pub fn is_deprecated(&self) -> bool {
        self.deprecated_at
            .as_deref()
            .is_some_and(|d| !d.trim().is_empty())
    }

    pub fn source(&self) -> Option<&str> {
        self.metadata.as_ref().and_then(|m| m.source.as_deref())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Repository {
    pub name: String,
    #[serde(default)]
    pub topics: Vec<String>,
}

impl Repository {
    pub fn has_topic(&self, topic: &str) -> bool {
        self.topics.iter().any(|t| t == topic)
    }
}

/// Everything one audit run consumes.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct AuditInput {
    #[serde(default)]
    pub modules: Vec<Module>,
    #[serde(default)]
    pub repositories: Vec<Repository>,
    /// Repository identifiers missing a README preamble.
    #[serde(default)]
    pub unmarked: Vec<String>,
    /// Repository identifiers missing a support-tier topic.
    #[serde(default)]
    pub incomplete: Vec<String>,
    /// Repository identifiers with an invalid ownership file.
    #[serde(default)]
    pub unowned: Vec<String>,
}
