//! Accumulated catalog state and fetch bookkeeping.

use std::collections::HashMap;

use hubtok_model::{ModelId, ModelRecord};

use crate::error::FetchError;

/// Parameters for the next listing fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchRequest {
    /// Records already retrieved; offset of the next page.
    pub offset: usize,
    /// Records to request.
    pub limit: usize,
}

/// Single source of truth for the accumulated catalog.
///
/// Owned by exactly one sequencer (normally a
/// [`crate::catalog::CatalogSession`]); derivations read snapshots via
/// [`records`](Self::records) and never mutate.
///
/// Invariants:
/// - the record list only grows within a session (until [`reset`](Self::reset))
/// - at most one fetch is in flight; a second request is dropped, not queued
/// - the cursor equals the record count after every successful merge
#[derive(Debug)]
pub struct CatalogState {
    records: Vec<ModelRecord>,
    /// Position of each id, for deterministic last-seen-wins replacement.
    by_id: HashMap<ModelId, usize>,
    cursor: usize,
    batch_size: usize,
    in_flight: Option<FetchRequest>,
    exhausted: bool,
    last_error: Option<String>,
}

impl CatalogState {
    /// Empty catalog expecting `batch_size` records per fetch.
    pub fn new(batch_size: usize) -> Self {
        Self {
            records: Vec::new(),
            by_id: HashMap::new(),
            cursor: 0,
            batch_size,
            in_flight: None,
            exhausted: false,
            last_error: None,
        }
    }

    /// Snapshot of the accumulated records, in merge order.
    pub fn records(&self) -> &[ModelRecord] {
        &self.records
    }

    /// Number of accumulated records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the catalog holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Count of records retrieved so far; offset for the next batch.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Records requested per fetch.
    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    /// Whether a fetch is currently outstanding. This is the loading flag
    /// the presentation layer renders.
    pub fn is_loading(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Whether the upstream listing stopped yielding new records. Once set,
    /// automatic fetch triggers are suppressed until [`reset`](Self::reset).
    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    /// Diagnostic from the most recent failed fetch, cleared by the next
    /// successful merge.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// The single-flight guard. Returns the request for the next batch, or
    /// `None` when a fetch is already outstanding or the listing is
    /// exhausted. A `None` means the trigger is dropped, never queued.
    pub fn try_begin_fetch(&mut self) -> Option<FetchRequest> {
        if self.in_flight.is_some() || self.exhausted {
            return None;
        }
        let request = FetchRequest {
            offset: self.cursor,
            limit: self.batch_size,
        };
        self.in_flight = Some(request);
        Some(request)
    }

    /// Apply the outcome of the outstanding fetch.
    ///
    /// On success the batch is appended in order (a repeated id replaces the
    /// earlier record in place) and the cursor advances to the new record
    /// count; an empty or short batch marks the listing exhausted. On
    /// failure nothing merges and only the diagnostic is recorded. The
    /// loading flag clears either way.
    pub fn complete_fetch(&mut self, outcome: Result<Vec<ModelRecord>, FetchError>) {
        let Some(request) = self.in_flight.take() else {
            // Completion without a matching begin: stale result after a
            // reset. Drop it.
            tracing::debug!("dropping fetch completion with no fetch in flight");
            return;
        };

        match outcome {
            Ok(batch) => {
                if batch.len() < request.limit {
                    self.exhausted = true;
                }
                self.merge(batch);
                self.last_error = None;
            }
            Err(err) => {
                self.last_error = Some(err.to_string());
            }
        }
    }

    fn merge(&mut self, batch: Vec<ModelRecord>) {
        for record in batch {
            match self.by_id.get(&record.id) {
                Some(&position) => {
                    // Upstream repeated an id within the observed window;
                    // last seen wins, position preserved.
                    self.records[position] = record;
                }
                None => {
                    self.by_id.insert(record.id.clone(), self.records.len());
                    self.records.push(record);
                }
            }
        }
        self.cursor = self.records.len();
    }

    /// Discard everything for an explicit refresh. Any in-flight fetch
    /// completion arriving afterwards is ignored.
    pub fn reset(&mut self) {
        self.records.clear();
        self.by_id.clear();
        self.cursor = 0;
        self.in_flight = None;
        self.exhausted = false;
        self.last_error = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hubtok_model::{ModelId, PipelineTag};

    fn record(id: &str, tag: Option<&str>) -> ModelRecord {
        let record = ModelRecord::new(ModelId::new(id).unwrap());
        match tag {
            Some(tag) => record.with_pipeline_tag(PipelineTag::new(tag).unwrap()),
            None => record,
        }
    }

    fn full_batch(ids: &[&str]) -> Vec<ModelRecord> {
        ids.iter().map(|id| record(id, None)).collect()
    }

    #[test]
    fn cursor_tracks_length_across_merges() {
        let mut state = CatalogState::new(2);

        let req = state.try_begin_fetch().unwrap();
        assert_eq!(req, FetchRequest { offset: 0, limit: 2 });
        state.complete_fetch(Ok(full_batch(&["a", "b"])));
        assert_eq!(state.len(), 2);
        assert_eq!(state.cursor(), 2);
        assert!(!state.is_exhausted());

        let req = state.try_begin_fetch().unwrap();
        assert_eq!(req.offset, 2);
        state.complete_fetch(Ok(full_batch(&["c", "d"])));
        assert_eq!(state.cursor(), state.len());
        assert_eq!(state.len(), 4);
    }

    #[test]
    fn second_begin_while_loading_is_dropped() {
        let mut state = CatalogState::new(5);
        assert!(state.try_begin_fetch().is_some());
        assert!(state.is_loading());
        // Trigger arriving while the first fetch is outstanding.
        assert!(state.try_begin_fetch().is_none());

        state.complete_fetch(Ok(full_batch(&["a", "b", "c", "d", "e"])));
        assert!(!state.is_loading());
        assert!(state.try_begin_fetch().is_some());
    }

    #[test]
    fn short_batch_marks_exhausted_and_suppresses_triggers() {
        let mut state = CatalogState::new(5);
        state.try_begin_fetch().unwrap();
        state.complete_fetch(Ok(full_batch(&["a", "b"])));
        assert!(state.is_exhausted());
        assert_eq!(state.len(), 2);
        assert!(state.try_begin_fetch().is_none());
    }

    #[test]
    fn empty_batch_marks_exhausted() {
        let mut state = CatalogState::new(5);
        state.try_begin_fetch().unwrap();
        state.complete_fetch(Ok(Vec::new()));
        assert!(state.is_exhausted());
        assert!(state.is_empty());
        assert_eq!(state.cursor(), 0);
    }

    #[test]
    fn failure_leaves_catalog_and_cursor_untouched() {
        let mut state = CatalogState::new(2);
        state.try_begin_fetch().unwrap();
        state.complete_fetch(Ok(full_batch(&["a", "b"])));

        state.try_begin_fetch().unwrap();
        state.complete_fetch(Err(FetchError::InvalidRecord("boom".to_string())));
        assert_eq!(state.len(), 2);
        assert_eq!(state.cursor(), 2);
        assert!(!state.is_loading());
        assert!(!state.is_exhausted());
        assert!(state.last_error().unwrap().contains("boom"));

        // Not exhausted, so a later trigger re-attempts.
        assert!(state.try_begin_fetch().is_some());
    }

    #[test]
    fn repeated_id_replaces_in_place() {
        let mut state = CatalogState::new(2);
        state.try_begin_fetch().unwrap();
        state.complete_fetch(Ok(vec![record("a", Some("nlp")), record("b", None)]));

        state.try_begin_fetch().unwrap();
        state.complete_fetch(Ok(vec![record("a", Some("cv")), record("c", None)]));

        assert_eq!(state.len(), 3);
        let ids: Vec<&str> = state.records().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["a", "b", "c"]);
        assert_eq!(
            state.records()[0].pipeline_tag.as_ref().unwrap().as_str(),
            "cv"
        );
    }

    #[test]
    fn stale_completion_after_reset_is_ignored() {
        let mut state = CatalogState::new(2);
        state.try_begin_fetch().unwrap();
        state.reset();
        state.complete_fetch(Ok(full_batch(&["a", "b"])));
        assert!(state.is_empty());
        assert_eq!(state.cursor(), 0);
        assert!(!state.is_loading());
    }
}
