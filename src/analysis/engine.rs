use chrono::Utc;

use crate::analysis::config::AnalysisConfig;
use crate::analysis::detectors::{detect_pain_points, detect_positive_highlights};
use crate::analysis::followups::suggest_follow_ups;
use crate::analysis::quotes::rank_key_quotes;
use crate::analysis::scoring::compute_quality_score;
use crate::analysis::themes::extract_themes;
use crate::analysis::topics::identify_topic_gaps;
use crate::models::{SessionSnapshot, SessionSummary};

/// Run the full analysis pipeline over one finished session.
///
/// Every stage is a pure function over its slice of the snapshot, so the
/// result is identical for identical input apart from `generated_at`. The
/// snapshot is never mutated and the call is total: an all-empty snapshot
/// yields an all-empty summary, never an error.
pub fn generate_summary(snapshot: &SessionSnapshot, config: &AnalysisConfig) -> SessionSummary {
    let key_themes = extract_themes(&snapshot.utterances, config);
    let participant_pain_points = detect_pain_points(&snapshot.utterances, config);
    let positive_highlights = detect_positive_highlights(&snapshot.utterances, config);
    let key_quotes = rank_key_quotes(&snapshot.utterances, &snapshot.insight_markers, config);
    let topic_gaps = identify_topic_gaps(&snapshot.topic_records);
    let suggested_follow_ups = suggest_follow_ups(
        &snapshot.topic_records,
        &key_themes,
        !participant_pain_points.is_empty(),
    );
    let session_quality_score = compute_quality_score(snapshot, config);

    SessionSummary {
        key_themes,
        participant_pain_points,
        positive_highlights,
        key_quotes,
        topic_gaps,
        suggested_follow_ups,
        session_quality_score,
        generated_at: Utc::now(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{InsightMarker, Speaker, TopicCoverageRecord, TopicStatus, Utterance};

    fn utterance(speaker: Speaker, text: &str, ts: f64) -> Utterance {
        Utterance {
            speaker,
            text: text.to_string(),
            timestamp_seconds: ts,
        }
    }

    fn sample_snapshot() -> SessionSnapshot {
        SessionSnapshot {
            participant_name: "Jordan".to_string(),
            project_name: "Checkout research".to_string(),
            utterances: vec![
                utterance(Speaker::Interviewer, "What do you use the app for?", 0.0),
                utterance(
                    Speaker::Participant,
                    "Mostly invoicing, though the invoicing workflow keeps getting stuck \
                     halfway through and that is genuinely frustrating when a client is \
                     waiting on me to send something over",
                    8.0,
                ),
                utterance(Speaker::Interviewer, "How often does that happen?", 40.0),
                utterance(
                    Speaker::Participant,
                    "Every week at least. Invoicing aside, the reporting is great and I \
                     love the charts",
                    48.0,
                ),
            ],
            insight_markers: vec![InsightMarker {
                timestamp_seconds: 10.0,
                quote: None,
                theme: None,
            }],
            topic_records: vec![
                TopicCoverageRecord {
                    topic_name: "Pricing".to_string(),
                    status: TopicStatus::NotCovered,
                },
                TopicCoverageRecord {
                    topic_name: "Invoicing".to_string(),
                    status: TopicStatus::FullyCovered,
                },
            ],
            total_duration_seconds: 1800.0,
        }
    }

    #[test]
    fn empty_snapshot_yields_neutral_summary() {
        let snapshot = SessionSnapshot {
            participant_name: String::new(),
            project_name: String::new(),
            utterances: Vec::new(),
            insight_markers: Vec::new(),
            topic_records: Vec::new(),
            total_duration_seconds: 0.0,
        };
        let summary = generate_summary(&snapshot, &AnalysisConfig::default());

        assert!(summary.key_themes.is_empty());
        assert!(summary.participant_pain_points.is_empty());
        assert!(summary.positive_highlights.is_empty());
        assert!(summary.key_quotes.is_empty());
        assert!(summary.topic_gaps.is_empty());
        assert_eq!(summary.suggested_follow_ups.len(), 1);
        assert!((summary.session_quality_score - 15.0).abs() < 1e-9);
    }

    #[test]
    fn generate_is_deterministic_apart_from_timestamp() {
        let snapshot = sample_snapshot();
        let config = AnalysisConfig::default();
        let a = generate_summary(&snapshot, &config);
        let b = generate_summary(&snapshot, &config);

        assert_eq!(a.key_themes, b.key_themes);
        assert_eq!(a.participant_pain_points, b.participant_pain_points);
        assert_eq!(a.positive_highlights, b.positive_highlights);
        assert_eq!(a.key_quotes, b.key_quotes);
        assert_eq!(a.topic_gaps, b.topic_gaps);
        assert_eq!(a.suggested_follow_ups, b.suggested_follow_ups);
        assert_eq!(a.session_quality_score, b.session_quality_score);
    }

    #[test]
    fn bounds_hold_on_realistic_input() {
        let summary = generate_summary(&sample_snapshot(), &AnalysisConfig::default());

        assert!(summary.key_themes.len() <= 5);
        assert!(summary.key_quotes.len() <= 5);
        assert!(summary.session_quality_score >= 0.0);
        assert!(summary.session_quality_score <= 100.0);
        assert!(!summary.suggested_follow_ups.is_empty());
        for quote in &summary.key_quotes {
            assert!(quote.text.chars().count() <= 300);
        }
    }

    #[test]
    fn pipeline_wires_stages_together() {
        let summary = generate_summary(&sample_snapshot(), &AnalysisConfig::default());

        // Pain and positive detectors both fired on the participant lines.
        assert_eq!(summary.participant_pain_points.len(), 1);
        assert_eq!(summary.positive_highlights.len(), 1);
        // "Invoicing" appears in both participant utterances.
        assert_eq!(summary.key_themes[0].name, "Invoicing");
        assert_eq!(summary.key_themes[0].mention_count, 2);
        // The marker at 10.0 s sits within 10 s of the first participant line.
        assert_eq!(
            summary.key_quotes[0].significance,
            "Flagged as an insight moment"
        );
        assert_eq!(summary.topic_gaps, vec!["Pricing (not covered)".to_string()]);
        // Not-covered topic, top theme, and coping question all apply.
        assert!(summary.suggested_follow_ups[0].contains("pricing"));
    }
}
