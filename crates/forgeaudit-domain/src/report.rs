use crate::policy::FailOn;
use forgeaudit_types::{CategorySets, SkippedModule, Verdict};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClassificationStats {
    pub modules_total: u32,
    pub modules_deprecated: u32,
    pub modules_audited: u32,
    pub modules_resolved: u32,
    pub probes_issued: u32,
    pub premium_skipped: u32,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Classification {
    pub categories: CategorySets,
    pub skipped: Vec<SkippedModule>,
    pub stats: ClassificationStats,
}

impl Classification {
    /// `pass` when every collection is empty. Skipped modules do not affect the verdict.
    pub fn verdict(&self, fail_on: FailOn) -> Verdict {
        if self.categories.is_empty() {
            Verdict::Pass
        } else {
            match fail_on {
                FailOn::Never => Verdict::Warn,
                FailOn::Violation => Verdict::Fail,
            }
        }
    }
}
