use crate::models::{CallRecord, Channel, ChannelMetric};
use super::{effective_set, percent, round1};

struct ChannelAccumulator {
    channel: Channel,
    count: u32,
    csat_total: f64,
    handle_minutes_total: f64,
    automation: f64,
}

/// Share, CSAT, automation and handle time per channel, in first-seen order.
///
/// `automation` is a placeholder keyed on record position. Each record
/// overwrites it, so a channel reports the value of its last record.
pub fn build_channel_metrics(filtered: &[CallRecord], full: &[CallRecord]) -> Vec<ChannelMetric> {
    let records = effective_set(filtered, full);

    let mut groups: Vec<ChannelAccumulator> = Vec::new();
    for (index, call) in records.iter().enumerate() {
        let position = match groups.iter().position(|g| g.channel == call.channel) {
            Some(position) => position,
            None => {
                groups.push(ChannelAccumulator {
                    channel: call.channel,
                    count: 0,
                    csat_total: 0.0,
                    handle_minutes_total: 0.0,
                    automation: 20.0,
                });
                groups.len() - 1
            }
        };

        let group = &mut groups[position];
        group.count += 1;
        group.csat_total += call.csat as f64;
        group.handle_minutes_total += call.duration_minutes();
        group.automation = 25.0 + ((index % 7) as f64 - 2.0) * 2.5;
    }

    groups
        .into_iter()
        .map(|group| {
            let count = group.count as f64;
            ChannelMetric {
                channel: group.channel,
                share: round1(percent(group.count as usize, records.len())),
                csat: round1(group.csat_total / count),
                automation: round1(group.automation),
                avg_handle_time: round1(group.handle_minutes_total / count),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::calls_dataset;

    #[test]
    fn test_channel_metrics_over_default_dataset() {
        let dataset = calls_dataset();
        let metrics = build_channel_metrics(dataset, dataset);

        let channels: Vec<Channel> = metrics.iter().map(|m| m.channel).collect();
        assert_eq!(channels, Channel::ALL.to_vec());
        assert!(metrics.iter().all(|m| m.share == 25.0));

        let csat: Vec<f64> = metrics.iter().map(|m| m.csat).collect();
        assert_eq!(csat, vec![84.8, 85.2, 85.0, 84.9]);
        let aht: Vec<f64> = metrics.iter().map(|m| m.avg_handle_time).collect();
        assert_eq!(aht, vec![10.6, 10.6, 10.5, 10.5]);
    }

    #[test]
    fn test_automation_reports_last_record_of_each_channel() {
        let dataset = calls_dataset();
        let metrics = build_channel_metrics(dataset, dataset);

        // Last voice record sits at index 176, 176 % 7 == 1.
        assert_eq!(metrics[0].automation, 22.5);
        let automation: Vec<f64> = metrics.iter().map(|m| m.automation).collect();
        assert_eq!(automation, vec![22.5, 25.0, 27.5, 30.0]);
    }

    #[test]
    fn test_empty_population() {
        assert!(build_channel_metrics(&[], &[]).is_empty());
    }
}
