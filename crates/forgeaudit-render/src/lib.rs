//! Rendering for human-facing surfaces (Markdown).

#![forbid(unsafe_code)]

mod markdown;
mod model;

pub use markdown::render_markdown;
pub use model::{
    RenderableData, RenderableItem, RenderableReport, RenderableSection, RenderableSkip,
    RenderableVerdictStatus,
};
