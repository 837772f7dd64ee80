use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::models::{CallRecord, Channel, VolumePoint};
use super::effective_set;

/// Number of daily buckets kept in the series.
pub const VOLUME_SERIES_DAYS: usize = 14;

/// Daily interaction volume per channel, most recent 14 days, oldest first.
///
/// `forecast` is a decorative projection: the actual total plus a seasonal
/// wave and a linear drift centred on the middle of the series.
pub fn build_volume_series(filtered: &[CallRecord], full: &[CallRecord]) -> Vec<VolumePoint> {
    let records = effective_set(filtered, full);

    let mut buckets: BTreeMap<NaiveDate, VolumePoint> = BTreeMap::new();
    for call in records {
        let date = call.opened_at.date_naive();
        let point = buckets.entry(date).or_insert_with(|| VolumePoint::empty(date));
        point.total += 1;
        match call.channel {
            Channel::Voice => point.voice += 1,
            Channel::Chat => point.chat += 1,
            Channel::Email => point.email += 1,
            Channel::Sms => {}
        }
    }

    let skip = buckets.len().saturating_sub(VOLUME_SERIES_DAYS);
    let recent: Vec<VolumePoint> = buckets.into_values().skip(skip).collect();
    let len = recent.len() as f64;

    recent
        .into_iter()
        .enumerate()
        .map(|(index, point)| {
            let index = index as f64;
            let seasonal = (index / 2.2).sin() * 6.0;
            let drift = index - len / 2.0;
            let projected = (point.total as f64 + seasonal + drift + 5.0).round();
            VolumePoint {
                forecast: projected.max(0.0) as u32,
                ..point
            }
        })
        .collect()
}
