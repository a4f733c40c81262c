#![allow(dead_code)]

use rankforge::model::{Metric, MetricPair, RankedRow, StatRow};

/// Builder for StatRow to keep fixtures short
pub struct RowBuilder {
    row: StatRow,
}

impl RowBuilder {
    pub fn player(id: &str) -> Self {
        Self {
            row: StatRow {
                player_id: Some(id.to_string()),
                display_name: format!("Player {}", id),
                ..Default::default()
            },
        }
    }

    pub fn anonymous(name: &str) -> Self {
        Self {
            row: StatRow {
                display_name: name.to_string(),
                ..Default::default()
            },
        }
    }

    pub fn name(mut self, name: &str) -> Self {
        self.row.display_name = name.to_string();
        self
    }

    pub fn country(mut self, country: &str) -> Self {
        self.row.country_name = Some(country.to_string());
        self
    }

    pub fn team(mut self, team: &str) -> Self {
        self.row.team_key = Some(team.to_string());
        self
    }

    pub fn metric(mut self, metric: Metric, delta: Option<f64>, total: Option<f64>) -> Self {
        *self.row.stats.get_mut(metric) = MetricPair::new(delta, total);
        self
    }

    pub fn xp(self, delta: f64, total: f64) -> Self {
        self.metric(Metric::Experience, Some(delta), Some(total))
    }

    pub fn build(self) -> StatRow {
        self.row
    }
}

/// `n` players `p1..=pn` with strictly decreasing weekly XP, so `pK` ranks K.
pub fn descending_players(n: usize) -> Vec<StatRow> {
    (1..=n)
        .map(|i| {
            RowBuilder::player(&format!("p{}", i))
                .xp((n - i + 1) as f64 * 10.0, 100_000.0)
                .build()
        })
        .collect()
}

pub fn ranks(rows: &[RankedRow]) -> Vec<usize> {
    rows.iter().map(|r| r.rank).collect()
}
