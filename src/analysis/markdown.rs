use crate::models::SessionSummary;

/// Render a summary as a Markdown document with a fixed section order.
/// Sections whose underlying list is empty are omitted entirely. Pure
/// formatting; no I/O happens here.
pub fn to_markdown(summary: &SessionSummary) -> String {
    let mut doc = String::new();

    doc.push_str("# Session Summary\n\n");
    doc.push_str(&format!(
        "**Generated:** {}\n",
        summary.generated_at.format("%Y-%m-%d %H:%M UTC")
    ));
    doc.push_str(&format!(
        "**Session Quality Score:** {:.1}/100\n",
        summary.session_quality_score
    ));

    if !summary.key_themes.is_empty() {
        doc.push_str("\n## Key Themes\n");
        for theme in &summary.key_themes {
            doc.push_str(&format!(
                "\n### {} ({} mentions)\n",
                theme.name, theme.mention_count
            ));
            for quote in &theme.supporting_quotes {
                doc.push_str(&format!("> {}\n", quote));
            }
        }
    }

    if !summary.participant_pain_points.is_empty() {
        doc.push_str("\n## Pain Points\n");
        for point in &summary.participant_pain_points {
            doc.push_str(&format!("- {}\n", point));
        }
    }

    if !summary.positive_highlights.is_empty() {
        doc.push_str("\n## Positive Highlights\n");
        for highlight in &summary.positive_highlights {
            doc.push_str(&format!("- {}\n", highlight));
        }
    }

    if !summary.key_quotes.is_empty() {
        doc.push_str("\n## Key Quotes\n");
        for quote in &summary.key_quotes {
            doc.push_str(&format!(
                "\n> \"{}\"\n> — {}, *{}*\n",
                quote.text, quote.speaker, quote.significance
            ));
        }
    }

    if !summary.topic_gaps.is_empty() {
        doc.push_str("\n## Topic Gaps\n");
        for gap in &summary.topic_gaps {
            doc.push_str(&format!("- {}\n", gap));
        }
    }

    if !summary.suggested_follow_ups.is_empty() {
        doc.push_str("\n## Suggested Follow-Ups\n");
        for (index, question) in summary.suggested_follow_ups.iter().enumerate() {
            doc.push_str(&format!("{}. {}\n", index + 1, question));
        }
    }

    doc
}
