use crate::models::{TopicCoverageRecord, TopicStatus};

/// Planned topics that went uncovered or only partially covered, labeled
/// for display. Input order is preserved; fully covered and skipped topics
/// never appear.
pub fn identify_topic_gaps(records: &[TopicCoverageRecord]) -> Vec<String> {
    records
        .iter()
        .filter_map(|record| match record.status {
            TopicStatus::NotCovered => Some(format!("{} (not covered)", record.topic_name)),
            TopicStatus::PartialCoverage => {
                Some(format!("{} (partial coverage)", record.topic_name))
            }
            TopicStatus::FullyCovered | TopicStatus::Skipped => None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, status: TopicStatus) -> TopicCoverageRecord {
        TopicCoverageRecord {
            topic_name: name.to_string(),
            status,
        }
    }

    #[test]
    fn labels_gaps_in_input_order() {
        let records = vec![
            record("A", TopicStatus::NotCovered),
            record("B", TopicStatus::PartialCoverage),
            record("C", TopicStatus::FullyCovered),
        ];
        assert_eq!(
            identify_topic_gaps(&records),
            vec!["A (not covered)".to_string(), "B (partial coverage)".to_string()]
        );
    }

    #[test]
    fn skipped_topics_are_not_gaps() {
        let records = vec![record("Pricing", TopicStatus::Skipped)];
        assert!(identify_topic_gaps(&records).is_empty());
    }
}
