//! Live and locked boards for one query.
//!
//! The two datasets run through the pipeline independently and are never
//! merged. Which one feeds an export is a separate, caller-facing choice.

use crate::engine::{rank_rows, run_pipeline, BoardQuery};
use crate::model::{Period, RankedRow, StatRow, WindowedRow};
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardView {
    pub query: BoardQuery,
    pub live: Vec<WindowedRow>,
    /// `None` for all-time boards and when no frozen snapshot exists.
    pub locked: Option<Vec<WindowedRow>>,
}

/// Runs the pipeline against the live rows and, for periods that have one,
/// the locked snapshot.
pub fn build_board(live: &[StatRow], locked: Option<&[StatRow]>, query: &BoardQuery) -> BoardView {
    let locked = match locked {
        Some(rows) if query.period.has_locked() => Some(run_pipeline(rows, query)),
        Some(_) => {
            debug!(period = %query.period, "ignoring locked rows for always-live period");
            None
        }
        None => None,
    };

    BoardView {
        query: query.clone(),
        live: run_pipeline(live, query),
        locked,
    }
}

/// Export prefers the locked board whenever a non-empty one exists for a
/// period that can have one; otherwise the live board is used.
pub fn select_export<'a, T>(live: &'a [T], locked: Option<&'a [T]>, period: Period) -> &'a [T] {
    match locked {
        Some(rows) if period.has_locked() && !rows.is_empty() => rows,
        _ => live,
    }
}

impl BoardView {
    pub fn export_rows(&self) -> &[WindowedRow] {
        select_export(self.live.as_slice(), self.locked.as_deref(), self.query.period)
    }
}

/// Export-only ranking: the preferred dataset's top `n` rows, unwindowed.
pub fn export_ranked(
    live: &[StatRow],
    locked: Option<&[StatRow]>,
    query: &BoardQuery,
    n: usize,
) -> Vec<RankedRow> {
    let source = select_export(live, locked, query.period);
    crate::engine::export_top(&rank_rows(source, query), n)
}
