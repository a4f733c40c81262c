//! The ranking pipeline: resolve → aggregate → rank → window.
//!
//! Every stage is a pure function over in-memory rows.

pub mod aggregator;
pub mod grouping;
pub mod ranker;
pub mod resolver;
pub mod window;

pub use aggregator::aggregate;
pub use grouping::{group_key, GroupFilter};
pub use ranker::{rank, rank_for_viewer};
pub use resolver::resolve;
pub use window::{export_top, select_window};

use crate::model::{AggregationMode, DisplayLimit, Metric, Period, RankedRow, StatRow, WindowedRow};
use serde::{Deserialize, Serialize};
use tracing::debug;
use typed_builder::TypedBuilder;

/// Everything that selects one view of a dataset.
#[derive(Debug, Clone, PartialEq, TypedBuilder, Serialize, Deserialize)]
pub struct BoardQuery {
    #[builder(default)]
    pub metric: Metric,
    #[builder(default)]
    pub period: Period,
    #[builder(default)]
    pub mode: AggregationMode,
    #[builder(default)]
    pub limit: DisplayLimit,
    #[builder(default, setter(strip_option, into))]
    pub viewer: Option<String>,
}

impl BoardQuery {
    /// All-time boards are unlimited whatever limit was requested.
    pub fn effective_limit(&self) -> DisplayLimit {
        match self.period {
            Period::AllTime => DisplayLimit::All,
            _ => self.limit,
        }
    }
}

/// Aggregates and ranks `rows` for `query`, flagging the viewer's row.
pub fn rank_rows(rows: &[StatRow], query: &BoardQuery) -> Vec<RankedRow> {
    let grouped = aggregate(rows, query.mode);
    rank_for_viewer(
        &grouped,
        query.metric,
        query.period,
        query.viewer.as_deref(),
    )
}

/// Full pipeline for one dataset.
pub fn run_pipeline(rows: &[StatRow], query: &BoardQuery) -> Vec<WindowedRow> {
    let ranked = rank_rows(rows, query);
    let window = select_window(
        &ranked,
        query.effective_limit(),
        query.viewer.as_deref(),
        query.mode,
    );
    debug!(
        metric = %query.metric,
        period = %query.period,
        mode = %query.mode,
        limit = %query.effective_limit(),
        ranked = ranked.len(),
        shown = window.len(),
        "pipeline complete"
    );
    window
}
