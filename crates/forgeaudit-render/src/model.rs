#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderableVerdictStatus {
    Pass,
    Warn,
    Fail,
}

/// One linked bullet.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableItem {
    pub label: String,
    pub url: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableSection {
    pub heading: String,
    pub intro: Option<String>,
    pub items: Vec<RenderableItem>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableSkip {
    pub slug: String,
    pub code: String,
    pub message: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableData {
    pub violations_total: u32,
    pub modules_audited: u32,
    pub repositories_total: u32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableReport {
    pub title: String,
    pub verdict: RenderableVerdictStatus,
    /// Sections in display order. Empty sections are not rendered.
    pub sections: Vec<RenderableSection>,
    pub skipped: Vec<RenderableSkip>,
    pub data: RenderableData,
}
