use super::resolver::resolve;
use crate::model::{Medal, Metric, Period, RankedRow, StatRow};
use itertools::Itertools;
use std::cmp::Ordering;

/// Ranks rows by resolved metric value, highest first.
///
/// Ranks are `1..=n` with no gaps. Equal values keep their input order.
pub fn rank(rows: &[StatRow], metric: Metric, period: Period) -> Vec<RankedRow> {
    rank_for_viewer(rows, metric, period, None)
}

/// Same as [`rank`], and flags the row whose player id is `current_user_id`.
/// Synthetic rows carry no player id and are never flagged.
pub fn rank_for_viewer(
    rows: &[StatRow],
    metric: Metric,
    period: Period,
    current_user_id: Option<&str>,
) -> Vec<RankedRow> {
    rows.iter()
        .map(|row| (resolve(row, metric, period), row))
        // `sorted_by` is a stable sort; ties stay in input order.
        .sorted_by(|(a, _), (b, _)| b.partial_cmp(a).unwrap_or(Ordering::Equal))
        .enumerate()
        .map(|(idx, (value, row))| {
            let rank = idx + 1;
            let is_current_user = match (current_user_id, row.player_id.as_deref()) {
                (Some(viewer), Some(pid)) => !row.is_synthetic() && viewer == pid,
                _ => false,
            };
            RankedRow {
                rank,
                display_name: row.display_name.clone(),
                country_name: row.country_name.clone(),
                team_key: row.team_key.clone(),
                metric_value: value,
                is_aggregated: row.is_synthetic(),
                aggregation_type: row.aggregation,
                source_player_id: row.player_id.clone(),
                is_current_user,
                medal: Medal::for_rank(rank),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::MetricPair;

    fn row(id: &str, xp: f64) -> StatRow {
        let mut r = StatRow {
            player_id: Some(id.to_string()),
            display_name: id.to_uppercase(),
            ..Default::default()
        };
        r.stats.experience = MetricPair::new(Some(xp), None);
        r
    }

    #[test]
    fn medals_cover_top_three_only() {
        let rows: Vec<_> = (0..5).map(|i| row(&format!("p{i}"), i as f64)).collect();
        let ranked = rank(&rows, Metric::Experience, Period::Weekly);
        let medals: Vec<_> = ranked.iter().map(|r| r.medal).collect();
        assert_eq!(
            medals,
            vec![
                Some(Medal::Gold),
                Some(Medal::Silver),
                Some(Medal::Bronze),
                None,
                None
            ]
        );
        assert_eq!(ranked[0].source_player_id.as_deref(), Some("p4"));
    }

    #[test]
    fn viewer_flag_is_set_once() {
        let rows = vec![row("a", 3.0), row("b", 2.0), row("c", 1.0)];
        let ranked = rank_for_viewer(&rows, Metric::Experience, Period::Weekly, Some("b"));
        let flagged: Vec<_> = ranked.iter().filter(|r| r.is_current_user).collect();
        assert_eq!(flagged.len(), 1);
        assert_eq!(flagged[0].rank, 2);
    }
}
