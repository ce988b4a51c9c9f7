use crate::ids;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Violation categories, in report order.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum ViolationCategory {
    MissingModuleTopic,
    MissingSupportTierTopic,
    MissingReadmePreamble,
    InvalidOwnership,
    BadgeShouldBeSupported,
    BadgeShouldNotBeSupported,
    BadgeShouldBeAdoptable,
    SourceFieldProblem,
}

impl ViolationCategory {
    pub const ALL: [ViolationCategory; 8] = [
        ViolationCategory::MissingModuleTopic,
        ViolationCategory::MissingSupportTierTopic,
        ViolationCategory::MissingReadmePreamble,
        ViolationCategory::InvalidOwnership,
        ViolationCategory::BadgeShouldBeSupported,
        ViolationCategory::BadgeShouldNotBeSupported,
        ViolationCategory::BadgeShouldBeAdoptable,
        ViolationCategory::SourceFieldProblem,
    ];

    pub fn id(self) -> &'static str {
        match self {
            ViolationCategory::MissingModuleTopic => ids::CATEGORY_MISSING_MODULE_TOPIC,
            ViolationCategory::MissingSupportTierTopic => ids::CATEGORY_MISSING_SUPPORT_TIER_TOPIC,
            ViolationCategory::MissingReadmePreamble => ids::CATEGORY_MISSING_README_PREAMBLE,
            ViolationCategory::InvalidOwnership => ids::CATEGORY_INVALID_OWNERSHIP,
            ViolationCategory::BadgeShouldBeSupported => ids::CATEGORY_BADGE_SHOULD_BE_SUPPORTED,
            ViolationCategory::BadgeShouldNotBeSupported => {
                ids::CATEGORY_BADGE_SHOULD_NOT_BE_SUPPORTED
            }
            ViolationCategory::BadgeShouldBeAdoptable => ids::CATEGORY_BADGE_SHOULD_BE_ADOPTABLE,
            ViolationCategory::SourceFieldProblem => ids::CATEGORY_SOURCE_FIELD_PROBLEM,
        }
    }
}
