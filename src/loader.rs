use crate::error::{RankForgeError, RfResult};
use crate::model::{Metric, MetricPair, MetricTable, StatRow};
use serde::Deserialize;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use strum::IntoEnumIterator;
use tracing::info;

/// One line of a stats CSV. Empty cells are absent values.
#[derive(Debug, Deserialize)]
struct StatRecord {
    #[serde(default)]
    player_id: Option<String>,
    display_name: String,
    #[serde(default)]
    country: Option<String>,
    #[serde(default)]
    team: Option<String>,
    #[serde(default)]
    experience_delta: Option<f64>,
    #[serde(default)]
    experience_total: Option<f64>,
    #[serde(default)]
    catches_delta: Option<f64>,
    #[serde(default)]
    catches_total: Option<f64>,
    #[serde(default)]
    distance_delta: Option<f64>,
    #[serde(default)]
    distance_total: Option<f64>,
    #[serde(default)]
    landmarks_delta: Option<f64>,
    #[serde(default)]
    landmarks_total: Option<f64>,
    #[serde(default)]
    unique_entries_delta: Option<f64>,
    #[serde(default)]
    unique_entries_total: Option<f64>,
}

impl From<StatRecord> for StatRow {
    fn from(r: StatRecord) -> Self {
        StatRow {
            player_id: non_blank(r.player_id),
            display_name: r.display_name,
            country_name: non_blank(r.country),
            team_key: non_blank(r.team),
            stats: MetricTable {
                experience: MetricPair::new(r.experience_delta, r.experience_total),
                catches: MetricPair::new(r.catches_delta, r.catches_total),
                distance: MetricPair::new(r.distance_delta, r.distance_total),
                landmarks: MetricPair::new(r.landmarks_delta, r.landmarks_total),
                unique_entries: MetricPair::new(r.unique_entries_delta, r.unique_entries_total),
            },
            aggregation: None,
        }
    }
}

fn non_blank(s: Option<String>) -> Option<String> {
    s.filter(|v| !v.trim().is_empty())
}

pub fn read_csv<R: Read>(reader: R) -> RfResult<Vec<StatRow>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut rows = Vec::new();
    // Positions count data records from 1 in both formats.
    for (idx, record) in rdr.deserialize::<StatRecord>().enumerate() {
        let row = StatRow::from(record?);
        validate_row(&row, idx + 1)?;
        rows.push(row);
    }
    Ok(rows)
}

pub fn read_json<R: Read>(reader: R) -> RfResult<Vec<StatRow>> {
    let rows: Vec<StatRow> = serde_json::from_reader(reader)?;
    for (idx, row) in rows.iter().enumerate() {
        validate_row(row, idx + 1)?;
    }
    Ok(rows)
}

/// Reads a dataset, picking the format from the file extension.
pub fn load_rows<P: AsRef<Path>>(path: P) -> RfResult<Vec<StatRow>> {
    let path = path.as_ref();
    let reader = BufReader::new(File::open(path)?);
    let rows = match path.extension().and_then(|e| e.to_str()) {
        Some("csv") => read_csv(reader)?,
        Some("json") => read_json(reader)?,
        other => {
            return Err(RankForgeError::Config(format!(
                "unsupported dataset format {:?} for {}",
                other,
                path.display()
            )))
        }
    };
    info!("Loaded {} rows from {}", rows.len(), path.display());
    Ok(rows)
}

fn validate_row(row: &StatRow, position: usize) -> RfResult<()> {
    for metric in Metric::iter() {
        let pair = row.stats.get(metric);
        for value in [pair.delta, pair.total].into_iter().flatten() {
            if !value.is_finite() {
                return Err(RankForgeError::Validation(format!(
                    "row {} ('{}'): {} is not a finite number",
                    position, row.display_name, metric
                )));
            }
        }
    }
    Ok(())
}
