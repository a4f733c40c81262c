//! Where raw rows come from. The engine never calls this; callers fetch
//! first and only run the pipeline when a fetch succeeds.

use crate::engine::GroupFilter;
use crate::error::{RankForgeError, RfResult};
use crate::loader::load_rows;
use crate::model::{Period, StatRow};
use std::path::{Path, PathBuf};
use tracing::warn;

pub trait StatSource {
    fn fetch_live(&self, period: Period, filter: Option<&GroupFilter>) -> RfResult<Vec<StatRow>>;

    /// `Ok(None)` when the period has no frozen snapshot.
    fn fetch_locked(
        &self,
        period: Period,
        filter: Option<&GroupFilter>,
    ) -> RfResult<Option<Vec<StatRow>>>;
}

/// Datasets on disk, laid out as `<root>/<period>/{live,locked}.{csv,json}`.
pub struct DirectorySource {
    root: PathBuf,
}

impl DirectorySource {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    fn find(&self, period: Period, stem: &str) -> Option<PathBuf> {
        let dir = self.root.join(period.to_string());
        ["csv", "json"]
            .iter()
            .map(|ext| dir.join(format!("{}.{}", stem, ext)))
            .find(|p| p.exists())
    }
}

fn filtered(rows: Vec<StatRow>, filter: Option<&GroupFilter>) -> Vec<StatRow> {
    match filter {
        Some(f) => f.apply(rows),
        None => rows,
    }
}

impl StatSource for DirectorySource {
    fn fetch_live(&self, period: Period, filter: Option<&GroupFilter>) -> RfResult<Vec<StatRow>> {
        let path = self.find(period, "live").ok_or_else(|| {
            RankForgeError::MissingDataset(format!(
                "no live dataset for {} under {}",
                period,
                self.root.display()
            ))
        })?;
        Ok(filtered(load_rows(path)?, filter))
    }

    fn fetch_locked(
        &self,
        period: Period,
        filter: Option<&GroupFilter>,
    ) -> RfResult<Option<Vec<StatRow>>> {
        if !period.has_locked() {
            return Ok(None);
        }
        match self.find(period, "locked") {
            Some(path) => Ok(Some(filtered(load_rows(path)?, filter))),
            None => {
                warn!("No locked dataset for {}; showing live only.", period);
                Ok(None)
            }
        }
    }
}

/// In-memory source, handy for embedding and tests.
#[derive(Debug, Default, Clone)]
pub struct MemorySource {
    pub live: Vec<(Period, Vec<StatRow>)>,
    pub locked: Vec<(Period, Vec<StatRow>)>,
}

impl MemorySource {
    pub fn with_live(mut self, period: Period, rows: Vec<StatRow>) -> Self {
        self.live.push((period, rows));
        self
    }

    pub fn with_locked(mut self, period: Period, rows: Vec<StatRow>) -> Self {
        self.locked.push((period, rows));
        self
    }
}

impl StatSource for MemorySource {
    fn fetch_live(&self, period: Period, filter: Option<&GroupFilter>) -> RfResult<Vec<StatRow>> {
        self.live
            .iter()
            .find(|(p, _)| *p == period)
            .map(|(_, rows)| filtered(rows.clone(), filter))
            .ok_or_else(|| RankForgeError::MissingDataset(format!("no live dataset for {}", period)))
    }

    fn fetch_locked(
        &self,
        period: Period,
        filter: Option<&GroupFilter>,
    ) -> RfResult<Option<Vec<StatRow>>> {
        if !period.has_locked() {
            return Ok(None);
        }
        Ok(self
            .locked
            .iter()
            .find(|(p, _)| *p == period)
            .map(|(_, rows)| filtered(rows.clone(), filter)))
    }
}
