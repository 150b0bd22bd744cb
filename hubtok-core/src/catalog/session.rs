//! Sequencing of guard, fetch, merge, and the derived views.

use hubtok_model::{ModelRecord, PipelineTag};
use tracing::{debug, warn};

use crate::catalog::state::CatalogState;
use crate::catalog::{extract_tags, filter_view};
use crate::nav::{Gesture, NavCursor};
use crate::providers::ModelCatalogProvider;

/// What a load trigger amounted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// A batch of this many records merged into the catalog.
    Fetched(usize),
    /// A fetch was already outstanding; the trigger was dropped.
    Suppressed,
    /// The listing is exhausted; automatic triggers stay suppressed.
    Exhausted,
    /// The fetch failed; catalog and cursor are unchanged.
    Failed,
}

/// Sequences the acquisition pipeline: guard, fetch, merge, derive.
///
/// The session is the single owner of [`CatalogState`]; every event the
/// presentation layer raises (initial load, near-end signal, gesture, tag
/// selection) funnels through here, so reads and writes are totally
/// ordered. Dropping the session drops any in-flight request with it.
#[derive(Debug)]
pub struct CatalogSession<P> {
    provider: P,
    state: CatalogState,
    selected_tag: Option<PipelineTag>,
    nav: NavCursor,
}

impl<P: ModelCatalogProvider> CatalogSession<P> {
    /// A fresh session over `provider`, fetching `batch_size` records at a time.
    pub fn new(provider: P, batch_size: usize) -> Self {
        Self {
            provider,
            state: CatalogState::new(batch_size),
            selected_tag: None,
            nav: NavCursor::new(),
        }
    }

    /// Read access to the accumulated catalog state.
    pub fn state(&self) -> &CatalogState {
        &self.state
    }

    /// Fetch and merge the next batch, honoring the single-flight guard.
    pub async fn load_more(&mut self) -> LoadOutcome {
        if self.state.is_exhausted() {
            return LoadOutcome::Exhausted;
        }
        let Some(request) = self.state.try_begin_fetch() else {
            debug!("load trigger dropped: fetch already in flight");
            return LoadOutcome::Suppressed;
        };

        let result = self
            .provider
            .list_models(request.offset, request.limit)
            .await;

        match result {
            Ok(batch) => {
                let merged = batch.len();
                debug!(offset = request.offset, merged, "merged listing batch");
                self.state.complete_fetch(Ok(batch));
                LoadOutcome::Fetched(merged)
            }
            Err(err) => {
                warn!(offset = request.offset, error = %err, "listing fetch failed");
                self.state.complete_fetch(Err(err));
                LoadOutcome::Failed
            }
        }
    }

    /// Infinite-scroll trigger: the renderer observed the viewport nearing
    /// the end of the loaded catalog. Same semantics as
    /// [`load_more`](Self::load_more); exhaustion keeps this from spinning.
    pub async fn on_near_end(&mut self) -> LoadOutcome {
        self.load_more().await
    }

    /// Discard the catalog and start over, e.g. after a sort change.
    pub fn refresh(&mut self) {
        self.state.reset();
        self.nav = NavCursor::new();
    }

    // Derived views

    /// Tag set for the selection control: first-seen order, capped.
    pub fn tags(&self) -> Vec<PipelineTag> {
        extract_tags(self.state.records())
    }

    /// The currently selected tag, if any.
    pub fn selected_tag(&self) -> Option<&PipelineTag> {
        self.selected_tag.as_ref()
    }

    /// Select a tag (or clear the selection). Resets the navigation cursor
    /// since indices into the old view are meaningless in the new one.
    pub fn select_tag(&mut self, tag: Option<PipelineTag>) {
        if self.selected_tag != tag {
            self.selected_tag = tag;
            self.nav = NavCursor::new();
        }
    }

    /// The record sequence the renderer shows: the whole catalog, or the
    /// subsequence matching the selected tag.
    pub fn visible(&self) -> Vec<&ModelRecord> {
        filter_view(self.state.records(), self.selected_tag.as_ref())
    }

    // Navigation (swipe/scroll variant)

    /// Position of the navigation cursor within the current view.
    pub fn current_index(&self) -> usize {
        self.nav.index()
    }

    /// The record under the navigation cursor, within the current view.
    pub fn current_record(&self) -> Option<&ModelRecord> {
        let view = self.visible();
        view.get(self.nav.index()).copied()
    }

    /// Feed a gesture into the navigation cursor over the current view.
    /// Returns true when the cursor moved.
    pub fn apply_gesture(&mut self, gesture: Gesture) -> bool {
        let len = self.visible().len();
        self.nav.apply(gesture, len)
    }
}
