// src/domain/view.rs

use crate::domain::filter::{filter, FilterOutcome, SelectorPair};
use crate::domain::listing::NormalizedRecord;
use crate::domain::map::{project, MapProjection};
use crate::domain::table::{format, DisplayTable};
use serde::Serialize;

/// Per-request state owned by the UI shell and handed in read-only.
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderContext {
    /// Also list every loaded record, not just the matches.
    pub show_all: bool,
}

/// What a page should show for a given (records, selectors, toggle).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum RenderView {
    /// At least one selector still unpicked: show nothing.
    Inactive,
    /// Both picked, nothing matched.
    ActiveEmpty,
    ActiveNonempty {
        map: MapProjection,
        table: DisplayTable,
        /// Present only with `show_all`.
        full_table: Option<DisplayTable>,
    },
}

pub fn render_view(
    records: &[NormalizedRecord],
    selectors: &SelectorPair,
    ctx: &RenderContext,
) -> RenderView {
    let matched = match filter(records, selectors) {
        FilterOutcome::Inactive => return RenderView::Inactive,
        FilterOutcome::Active(matched) if matched.is_empty() => return RenderView::ActiveEmpty,
        FilterOutcome::Active(matched) => matched,
    };

    RenderView::ActiveNonempty {
        map: project(matched.iter().copied()),
        table: format(matched.iter().copied()),
        full_table: ctx.show_all.then(|| format(records)),
    }
}
