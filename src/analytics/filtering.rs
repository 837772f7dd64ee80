use crate::models::{CallRecord, FilterSelection};

/// Keep the records that fall inside the selected window, region and intent.
///
/// The window is anchored on the latest `opened_at` in `records`, not on the
/// wall clock. A record opened exactly at the window start is kept. Relative
/// order is preserved.
pub fn filter_calls(records: &[CallRecord], selection: &FilterSelection) -> Vec<CallRecord> {
    let Some(latest) = records.iter().map(|call| call.opened_at).max() else {
        return Vec::new();
    };
    let window_start = latest - selection.window.duration();

    let filtered: Vec<CallRecord> = records
        .iter()
        .filter(|call| {
            call.opened_at >= window_start
                && selection.region.matches(call.region)
                && selection.intent.matches(call.issue)
        })
        .cloned()
        .collect();

    tracing::debug!(
        "Filtered {} of {} records for [{}]",
        filtered.len(),
        records.len(),
        selection.summary()
    );
    filtered
}

pub fn filter_summary(selection: &FilterSelection) -> String {
    selection.summary()
}
