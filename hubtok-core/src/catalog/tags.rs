//! Tag-set derivation over catalog snapshots.

use hubtok_model::{ModelRecord, PipelineTag};

/// Cap on distinct tags surfaced to the tag-selection control.
pub const MAX_VISIBLE_TAGS: usize = 10;

/// Distinct pipeline tags in first-seen catalog order, capped at
/// [`MAX_VISIBLE_TAGS`].
///
/// Pure function of the full catalog, recomputed after every merge.
/// Records without a tag contribute nothing.
pub fn extract_tags(records: &[ModelRecord]) -> Vec<PipelineTag> {
    let mut tags: Vec<PipelineTag> = Vec::new();
    for record in records {
        let Some(tag) = &record.pipeline_tag else {
            continue;
        };
        if !tags.contains(tag) {
            tags.push(tag.clone());
            if tags.len() == MAX_VISIBLE_TAGS {
                break;
            }
        }
    }
    tags
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
    fn first_seen_order_with_dedup_and_missing_tags() {
        let records = vec![
            record("a", Some("nlp")),
            record("b", None),
            record("c", Some("cv")),
            record("d", Some("nlp")),
        ];
        let tags = extract_tags(&records);
        let names: Vec<&str> = tags.iter().map(PipelineTag::as_str).collect();
        assert_eq!(names, ["nlp", "cv"]);
    }

    #[test]
    fn caps_at_first_ten_distinct_tags() {
        let records: Vec<ModelRecord> = (0..25)
            .map(|i| record(&format!("m{i}"), Some(&format!("tag-{i}"))))
            .collect();
        let tags = extract_tags(&records);
        assert_eq!(tags.len(), MAX_VISIBLE_TAGS);
        assert_eq!(tags[0].as_str(), "tag-0");
        assert_eq!(tags[9].as_str(), "tag-9");
    }

    #[test]
    fn deterministic_for_identical_input() {
        let records = vec![record("a", Some("x")), record("b", Some("y"))];
        assert_eq!(extract_tags(&records), extract_tags(&records));
    }
}
