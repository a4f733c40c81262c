use crate::model::{AggregationMode, DisplayLimit, RankedRow, WindowedRow};

/// Picks the rows to display from a ranked list.
///
/// With a fixed limit, the first `limit` rows are shown. In individual views
/// the viewer's row is flagged where it sits, or appended once, marked
/// separated, when it falls outside that window. Country and team views never append a row. `DisplayLimit::All`
/// returns every row unseparated regardless of viewer or mode.
pub fn select_window(
    ranked: &[RankedRow],
    limit: DisplayLimit,
    current_user_id: Option<&str>,
    mode: AggregationMode,
) -> Vec<WindowedRow> {
    let cap = match limit {
        DisplayLimit::All => return ranked.iter().cloned().map(WindowedRow::inline).collect(),
        DisplayLimit::Top(n) => n.min(ranked.len()),
    };

    let mut window: Vec<WindowedRow> = ranked[..cap]
        .iter()
        .cloned()
        .map(WindowedRow::inline)
        .collect();

    if !mode.is_individual() {
        return window;
    }

    let Some(viewer) = current_user_id else {
        return window;
    };

    let Some(pos) = ranked
        .iter()
        .position(|r| r.source_player_id.as_deref() == Some(viewer))
    else {
        return window;
    };

    if pos < cap {
        window[pos].row.is_current_user = true;
    } else {
        window.push(WindowedRow {
            row: RankedRow {
                is_current_user: true,
                ..ranked[pos].clone()
            },
            is_separated: true,
        });
    }

    window
}

/// First `n` ranked rows for image export; no viewer row is appended.
pub fn export_top(ranked: &[RankedRow], n: usize) -> Vec<RankedRow> {
    ranked.iter().take(n).cloned().collect()
}
