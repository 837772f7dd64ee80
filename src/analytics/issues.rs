use crate::models::{CallRecord, Issue, IssueBreakdownEntry};
use super::{effective_set, percent, round1};

pub const ISSUE_BREAKDOWN_LIMIT: usize = 6;

/// Most frequent issue categories with their share of the population.
pub fn build_issue_breakdown(filtered: &[CallRecord], full: &[CallRecord]) -> Vec<IssueBreakdownEntry> {
    let records = effective_set(filtered, full);

    // Groups in first-seen order; the decorative trend depends on it.
    let mut counts: Vec<(Issue, u32)> = Vec::new();
    for call in records {
        match counts.iter_mut().find(|(issue, _)| *issue == call.issue) {
            Some((_, count)) => *count += 1,
            None => counts.push((call.issue, 1)),
        }
    }

    let mut entries: Vec<IssueBreakdownEntry> = counts
        .into_iter()
        .enumerate()
        .map(|(index, (issue, count))| IssueBreakdownEntry {
            issue,
            count,
            percentage: round1(percent(count as usize, records.len())),
            trend: (index % 3) as f64 * 1.5 - 1.0,
        })
        .collect();

    entries.sort_by(|a, b| b.count.cmp(&a.count));
    entries.truncate(ISSUE_BREAKDOWN_LIMIT);
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::calls_dataset;

    #[test]
    fn test_breakdown_over_default_dataset() {
        let dataset = calls_dataset();
        let breakdown = build_issue_breakdown(dataset, dataset);

        assert_eq!(breakdown.len(), ISSUE_BREAKDOWN_LIMIT);
        let issues: Vec<Issue> = breakdown.iter().map(|e| e.issue).collect();
        // Stable sort keeps first-seen order among equal counts.
        assert_eq!(
            issues,
            vec![
                Issue::Billing,
                Issue::Outage,
                Issue::Refund,
                Issue::Upgrade,
                Issue::Security,
                Issue::Compliance,
            ]
        );
        assert_eq!(breakdown[0].count, 23);
        assert_eq!(breakdown[0].percentage, 12.8);
        assert_eq!(breakdown[4].count, 22);
        assert_eq!(breakdown[4].percentage, 12.2);
        assert_eq!(
            breakdown.iter().map(|e| e.trend).collect::<Vec<_>>(),
            vec![-1.0, 0.5, 2.0, -1.0, 0.5, 2.0]
        );
    }

    #[test]
    fn test_sorted_by_count_descending() {
        let dataset = calls_dataset();
        let subset: Vec<CallRecord> = dataset
            .iter()
            .filter(|c| c.issue != Issue::Billing || c.id.ends_with('1'))
            .cloned()
            .collect();
        let breakdown = build_issue_breakdown(&subset, dataset);
        assert!(breakdown.windows(2).all(|pair| pair[0].count >= pair[1].count));
        assert!(breakdown.iter().all(|e| e.issue != Issue::Billing || e.count < 23));
    }

    #[test]
    fn test_empty_population() {
        assert!(build_issue_breakdown(&[], &[]).is_empty());
    }
}
