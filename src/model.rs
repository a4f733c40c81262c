//! Value records and closed enumerations shared by every pipeline stage.
//!
//! Rows are immutable once produced; each stage builds new records instead of
//! mutating its input.

use crate::error::RankForgeError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use strum_macros::{Display, EnumIter, EnumString};

/// The statistic a leaderboard is ranked by.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    EnumIter,
    EnumString,
    Display,
    Serialize,
    Deserialize,
    Default,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    #[default]
    Experience,
    Catches,
    Distance,
    Landmarks,
    UniqueEntries,
}

impl Metric {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Experience => "XP",
            Self::Catches => "Caught",
            Self::Distance => "Distance",
            Self::Landmarks => "Landmarks",
            Self::UniqueEntries => "Unique",
        }
    }
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    EnumIter,
    EnumString,
    Display,
    Serialize,
    Deserialize,
    Default,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Period {
    #[default]
    Weekly,
    Monthly,
    AllTime,
}

impl Period {
    /// Weekly and monthly views rank by the period's delta first.
    #[inline]
    pub fn prefers_delta(&self) -> bool {
        !matches!(self, Self::AllTime)
    }

    /// All-time boards are always live; there is no frozen snapshot.
    #[inline]
    pub fn has_locked(&self) -> bool {
        !matches!(self, Self::AllTime)
    }
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    EnumIter,
    EnumString,
    Display,
    Serialize,
    Deserialize,
    Default,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum AggregationMode {
    #[default]
    None,
    ByCountry,
    ByTeam,
}

impl AggregationMode {
    pub fn aggregation_type(&self) -> Option<AggregationType> {
        match self {
            Self::None => None,
            Self::ByCountry => Some(AggregationType::Country),
            Self::ByTeam => Some(AggregationType::Team),
        }
    }

    #[inline]
    pub fn is_individual(&self) -> bool {
        matches!(self, Self::None)
    }
}

/// Which field a synthetic row was grouped on.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, Display, Serialize, Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum AggregationType {
    Country,
    Team,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Medal {
    Gold,
    Silver,
    Bronze,
}

impl Medal {
    pub fn for_rank(rank: usize) -> Option<Self> {
        match rank {
            1 => Some(Self::Gold),
            2 => Some(Self::Silver),
            3 => Some(Self::Bronze),
            _ => None,
        }
    }
}

/// How many ranked rows a window shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "LimitRepr", into = "LimitRepr")]
pub enum DisplayLimit {
    Top(usize),
    All,
}

impl Default for DisplayLimit {
    fn default() -> Self {
        Self::Top(10)
    }
}

impl fmt::Display for DisplayLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Top(n) => write!(f, "{}", n),
            Self::All => f.write_str("all"),
        }
    }
}

impl FromStr for DisplayLimit {
    type Err = RankForgeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }
        s.parse::<usize>().map(Self::Top).map_err(|_| {
            RankForgeError::Config(format!(
                "limit must be 'all' or a non-negative integer, got '{}'",
                s
            ))
        })
    }
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum LimitRepr {
    Count(usize),
    Word(String),
}

impl TryFrom<LimitRepr> for DisplayLimit {
    type Error = RankForgeError;

    fn try_from(value: LimitRepr) -> Result<Self, Self::Error> {
        match value {
            LimitRepr::Count(n) => Ok(Self::Top(n)),
            LimitRepr::Word(s) => s.parse(),
        }
    }
}

impl From<DisplayLimit> for LimitRepr {
    fn from(value: DisplayLimit) -> Self {
        match value {
            DisplayLimit::Top(n) => LimitRepr::Count(n),
            DisplayLimit::All => LimitRepr::Word("all".to_string()),
        }
    }
}

/// A metric's period increase and running total. Either may be missing.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricPair {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delta: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<f64>,
}

impl MetricPair {
    pub fn new(delta: Option<f64>, total: Option<f64>) -> Self {
        Self { delta, total }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MetricTable {
    pub experience: MetricPair,
    pub catches: MetricPair,
    pub distance: MetricPair,
    pub landmarks: MetricPair,
    pub unique_entries: MetricPair,
}

impl MetricTable {
    pub fn get(&self, metric: Metric) -> &MetricPair {
        match metric {
            Metric::Experience => &self.experience,
            Metric::Catches => &self.catches,
            Metric::Distance => &self.distance,
            Metric::Landmarks => &self.landmarks,
            Metric::UniqueEntries => &self.unique_entries,
        }
    }

    pub fn get_mut(&mut self, metric: Metric) -> &mut MetricPair {
        match metric {
            Metric::Experience => &mut self.experience,
            Metric::Catches => &mut self.catches,
            Metric::Distance => &mut self.distance,
            Metric::Landmarks => &mut self.landmarks,
            Metric::UniqueEntries => &mut self.unique_entries,
        }
    }
}

/// One player's statistics for a period, or one synthetic group row.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatRow {
    #[serde(default)]
    pub player_id: Option<String>,
    pub display_name: String,
    #[serde(default)]
    pub country_name: Option<String>,
    #[serde(default)]
    pub team_key: Option<String>,
    #[serde(default)]
    pub stats: MetricTable,
    /// Set only on rows produced by the aggregator.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aggregation: Option<AggregationType>,
}

impl StatRow {
    pub fn is_synthetic(&self) -> bool {
        self.aggregation.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedRow {
    pub rank: usize,
    pub display_name: String,
    pub country_name: Option<String>,
    pub team_key: Option<String>,
    pub metric_value: f64,
    pub is_aggregated: bool,
    pub aggregation_type: Option<AggregationType>,
    pub source_player_id: Option<String>,
    pub is_current_user: bool,
    pub medal: Option<Medal>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WindowedRow {
    #[serde(flatten)]
    pub row: RankedRow,
    pub is_separated: bool,
}

impl WindowedRow {
    pub fn inline(row: RankedRow) -> Self {
        Self {
            row,
            is_separated: false,
        }
    }
}
