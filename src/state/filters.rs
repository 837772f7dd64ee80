use tokio::sync::watch;

use crate::models::{FilterSelection, IntentFilter, RegionFilter, TimeWindow};

/// Holder of the active filter selection.
///
/// Writes go through the four setters; readers take copies with
/// [`FilterStore::selection`] or follow changes through a
/// [`watch::Receiver`] from [`FilterStore::subscribe`]. Works without a
/// running runtime.
#[derive(Debug)]
pub struct FilterStore {
    sender: watch::Sender<FilterSelection>,
}

impl Default for FilterStore {
    fn default() -> Self {
        Self::new(FilterSelection::default())
    }
}

impl FilterStore {
    pub fn new(initial: FilterSelection) -> Self {
        let (sender, _) = watch::channel(initial);
        Self { sender }
    }

    pub fn selection(&self) -> FilterSelection {
        *self.sender.borrow()
    }

    pub fn subscribe(&self) -> watch::Receiver<FilterSelection> {
        self.sender.subscribe()
    }

    pub fn set_window(&self, window: TimeWindow) {
        self.update(|selection| selection.window = window);
    }

    pub fn set_region(&self, region: RegionFilter) {
        self.update(|selection| selection.region = region);
    }

    pub fn set_intent(&self, intent: IntentFilter) {
        self.update(|selection| selection.intent = intent);
    }

    /// Back to `7d • Global • All intents`.
    pub fn reset(&self) {
        self.update(|selection| *selection = FilterSelection::default());
    }

    fn update(&self, apply: impl FnOnce(&mut FilterSelection)) {
        let changed = self.sender.send_if_modified(|selection| {
            let before = *selection;
            apply(selection);
            *selection != before
        });
        if changed {
            tracing::info!("Filter selection changed to [{}]", self.selection().summary());
        }
    }
}
