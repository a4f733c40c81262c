use crate::model::{Metric, MetricPair, Period, StatRow};

/// Value a row is ranked by for `metric` in `period`.
///
/// Delta periods read `delta`, then `total`; all-time reads `total`, then
/// `delta`. A pair with neither side present resolves to zero.
#[inline]
pub fn resolve(row: &StatRow, metric: Metric, period: Period) -> f64 {
    resolve_pair(row.stats.get(metric), period)
}

#[inline]
pub fn resolve_pair(pair: &MetricPair, period: Period) -> f64 {
    if period.prefers_delta() {
        delta_side(pair)
    } else {
        total_side(pair)
    }
}

#[inline]
pub fn delta_side(pair: &MetricPair) -> f64 {
    pair.delta.or(pair.total).unwrap_or(0.0)
}

#[inline]
pub fn total_side(pair: &MetricPair) -> f64 {
    pair.total.or(pair.delta).unwrap_or(0.0)
}
