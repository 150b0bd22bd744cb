//! Filtered catalog views.

use hubtok_model::{ModelRecord, PipelineTag};

/// Derived view of the catalog under an optional tag selection.
///
/// No selection is the identity view; a selection keeps the
/// order-preserving subsequence whose `pipeline_tag` equals the selected
/// tag. Pure and side-effect free; callers recompute whenever the catalog
/// or selection changes.
pub fn filter_view<'a>(
    records: &'a [ModelRecord],
    selected: Option<&PipelineTag>,
) -> Vec<&'a ModelRecord> {
    match selected {
        None => records.iter().collect(),
        Some(tag) => records
            .iter()
            .filter(|r| r.pipeline_tag.as_ref() == Some(tag))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hubtok_model::ModelId;

    fn record(id: &str, tag: Option<&str>) -> ModelRecord {
        let record = ModelRecord::new(ModelId::new(id).unwrap());
        match tag {
            Some(tag) => record.with_pipeline_tag(PipelineTag::new(tag).unwrap()),
            None => record,
        }
    }

    #[test]
    fn no_selection_is_the_identity_view() {
        let records = vec![record("a", Some("nlp")), record("b", None)];
        let view = filter_view(&records, None);
        assert_eq!(view.len(), 2);
        assert!(view.iter().zip(records.iter()).all(|(v, r)| *v == r));
    }

    #[test]
    fn selection_keeps_matching_subsequence_in_order() {
        let records = vec![
            record("a", Some("nlp")),
            record("b", Some("cv")),
            record("c", Some("nlp")),
            record("d", None),
        ];
        let tag = PipelineTag::new("nlp").unwrap();
        let view = filter_view(&records, Some(&tag));
        let ids: Vec<&str> = view.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["a", "c"]);
    }

    #[test]
    fn untagged_records_never_match_a_selection() {
        let records = vec![record("a", None)];
        let tag = PipelineTag::new("nlp").unwrap();
        assert!(filter_view(&records, Some(&tag)).is_empty());
    }
}
