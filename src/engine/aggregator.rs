use super::grouping::{group_key, group_label, raw_group_value};
use super::resolver::{delta_side, total_side};
use crate::model::{AggregationMode, AggregationType, Metric, MetricPair, MetricTable, StatRow};
use std::collections::HashMap;
use strum::IntoEnumIterator;
use tracing::debug;

/// Collapses rows into one synthetic row per country or team.
///
/// `AggregationMode::None` returns the rows as given. Otherwise each group's
/// delta and total fields are fallback-filled sums: a member missing its
/// delta contributes its total to the group delta, and a member missing its
/// total contributes its delta to the group total (zero when both are
/// missing). Group sums therefore match the members' resolved values for
/// every period, which is why no metric or period is needed here. Every
/// metric is summed. Output order follows first appearance; the ranker
/// re-sorts.
pub fn aggregate(rows: &[StatRow], mode: AggregationMode) -> Vec<StatRow> {
    let Some(kind) = mode.aggregation_type() else {
        return rows.to_vec();
    };

    let mut groups: Vec<StatRow> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for row in rows {
        let raw = raw_group_value(row, kind);
        let slot = *index
            .entry(group_key(raw))
            .or_insert_with(|| {
                groups.push(empty_group(kind, group_label(raw)));
                groups.len() - 1
            });
        accumulate(&mut groups[slot].stats, &row.stats);
    }

    debug!(
        mode = %mode,
        members = rows.len(),
        groups = groups.len(),
        "aggregated rows"
    );
    groups
}

fn empty_group(kind: AggregationType, label: String) -> StatRow {
    let (country_name, team_key) = match kind {
        AggregationType::Country => (Some(label.clone()), None),
        AggregationType::Team => (None, Some(label.clone())),
    };
    let mut stats = MetricTable::default();
    for metric in Metric::iter() {
        *stats.get_mut(metric) = MetricPair::new(Some(0.0), Some(0.0));
    }
    StatRow {
        player_id: None,
        display_name: label,
        country_name,
        team_key,
        stats,
        aggregation: Some(kind),
    }
}

fn accumulate(acc: &mut MetricTable, member: &MetricTable) {
    for metric in Metric::iter() {
        let src = member.get(metric);
        let dst = acc.get_mut(metric);
        dst.delta = Some(dst.delta.unwrap_or(0.0) + delta_side(src));
        dst.total = Some(dst.total.unwrap_or(0.0) + total_side(src));
    }
}
