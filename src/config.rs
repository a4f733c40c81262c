use crate::engine::{BoardQuery, GroupFilter};
use crate::error::{RankForgeError, RfResult};
use crate::model::{AggregationMode, AggregationType, DisplayLimit, Metric, Period};
use clap::{parser::ValueSource, ArgMatches, Args};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// View selection, layered as defaults, then a JSON file, then CLI flags.
#[derive(Args, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewParams {
    #[arg(long, default_value_t = Metric::Experience)]
    pub metric: Metric,
    #[arg(long, default_value_t = Period::Weekly)]
    pub period: Period,
    #[arg(long, default_value_t = AggregationMode::None)]
    pub mode: AggregationMode,
    /// Row cap, or "all".
    #[arg(long, default_value_t = DisplayLimit::Top(10))]
    pub limit: DisplayLimit,
    /// Player id of the person looking at the board.
    #[arg(long)]
    pub viewer: Option<String>,

    // Group filters (at most one)
    #[arg(long)]
    pub filter_country: Option<String>,
    #[arg(long)]
    pub filter_team: Option<String>,
}

impl Default for ViewParams {
    fn default() -> Self {
        Self {
            metric: Metric::Experience,
            period: Period::Weekly,
            mode: AggregationMode::None,
            limit: DisplayLimit::Top(10),
            viewer: None,
            filter_country: None,
            filter_team: None,
        }
    }
}

impl ViewParams {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> RfResult<Self> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// All-time views are never capped.
    pub fn effective_limit(&self) -> DisplayLimit {
        self.to_query().effective_limit()
    }

    pub fn to_query(&self) -> BoardQuery {
        BoardQuery {
            metric: self.metric,
            period: self.period,
            mode: self.mode,
            limit: self.limit,
            viewer: self.viewer.clone(),
        }
    }

    pub fn group_filter(&self) -> RfResult<Option<GroupFilter>> {
        match (&self.filter_country, &self.filter_team) {
            (Some(_), Some(_)) => Err(RankForgeError::Config(
                "filter_country and filter_team are mutually exclusive".to_string(),
            )),
            (Some(c), None) => Ok(Some(GroupFilter::new(AggregationType::Country, c.clone()))),
            (None, Some(t)) => Ok(Some(GroupFilter::new(AggregationType::Team, t.clone()))),
            (None, None) => Ok(None),
        }
    }

    /// Copies over only the flags the user actually typed.
    pub fn merge_from_cli(&mut self, cli: &ViewParams, matches: &ArgMatches) {
        macro_rules! update_if_present {
            ($field:ident) => {
                if matches.value_source(stringify!($field)) == Some(ValueSource::CommandLine) {
                    self.$field = cli.$field.clone();
                }
            };
        }

        update_if_present!(metric);
        update_if_present!(period);
        update_if_present!(mode);
        update_if_present!(limit);
        update_if_present!(viewer);
        update_if_present!(filter_country);
        update_if_present!(filter_team);
    }
}
