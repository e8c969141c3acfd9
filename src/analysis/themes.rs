use std::collections::{HashMap, HashSet};

use crate::analysis::config::{AnalysisConfig, STOP_WORDS};
use crate::analysis::tokenize::{excerpt, tokenize};
use crate::models::{Speaker, ThemeSummary, Utterance};

struct ThemeStat {
    mentions: usize,
    excerpts: Vec<String>,
}

/// Frequency-rank content words across participant utterances.
///
/// A word counts once per utterance no matter how often it repeats within
/// it. Words of length <= 3 and stop words are skipped. Each theme carries
/// up to 3 excerpts from the first utterances that mentioned it.
pub fn extract_themes(utterances: &[Utterance], config: &AnalysisConfig) -> Vec<ThemeSummary> {
    let mut stats: HashMap<String, ThemeStat> = HashMap::new();
    // First-seen order; HashMap iteration order is not reproducible across runs.
    let mut order: Vec<String> = Vec::new();

    for utterance in utterances {
        if utterance.speaker != Speaker::Participant {
            continue;
        }

        // Dedup within one utterance, walking tokens in text order so
        // excerpt capture stays deterministic.
        let mut seen_here: HashSet<String> = HashSet::new();
        for token in tokenize(&utterance.text) {
            if !seen_here.insert(token.clone()) {
                continue;
            }
            if token.chars().count() <= 3 || STOP_WORDS.contains(&token.as_str()) {
                continue;
            }

            let stat = stats.entry(token.clone()).or_insert_with(|| {
                order.push(token.clone());
                ThemeStat {
                    mentions: 0,
                    excerpts: Vec::new(),
                }
            });
            stat.mentions += 1;
            if stat.excerpts.len() < config.max_excerpts_per_theme {
                stat.excerpts
                    .push(excerpt(&utterance.text, config.theme_excerpt_chars));
            }
        }
    }

    // Stable sort keeps first-seen order for equal counts.
    order.sort_by(|a, b| stats[b].mentions.cmp(&stats[a].mentions));

    order
        .into_iter()
        .take(config.max_themes)
        .map(|token| {
            let stat = stats.remove(&token).unwrap();
            ThemeSummary {
                name: capitalize(&token),
                mention_count: stat.mentions,
                supporting_quotes: stat.excerpts,
            }
        })
        .collect()
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Speaker;

    fn participant(text: &str, ts: f64) -> Utterance {
        Utterance {
            speaker: Speaker::Participant,
            text: text.to_string(),
            timestamp_seconds: ts,
        }
    }

    fn interviewer(text: &str, ts: f64) -> Utterance {
        Utterance {
            speaker: Speaker::Interviewer,
            text: text.to_string(),
            timestamp_seconds: ts,
        }
    }

    #[test]
    fn ignores_stop_words_and_short_words() {
        let utterances = vec![participant(
            "The App is really really frustrating and confusing for me",
            0.0,
        )];
        let themes = extract_themes(&utterances, &AnalysisConfig::default());
        let names: Vec<&str> = themes.iter().map(|t| t.name.as_str()).collect();

        assert!(names.contains(&"Frustrating"));
        assert!(names.contains(&"Confusing"));
        // "app" has 3 letters, "the" is a stop word; neither may surface.
        assert!(!names.contains(&"App"));
        assert!(!names.contains(&"The"));
    }

    #[test]
    fn counts_once_per_utterance() {
        let utterances = vec![
            participant("onboarding onboarding onboarding", 0.0),
            participant("the onboarding flow", 10.0),
        ];
        let themes = extract_themes(&utterances, &AnalysisConfig::default());
        let onboarding = themes.iter().find(|t| t.name == "Onboarding").unwrap();
        assert_eq!(onboarding.mention_count, 2);
    }

    #[test]
    fn caps_themes_at_five_and_excerpts_at_three() {
        let mut utterances = Vec::new();
        for i in 0..6 {
            // Six distinct words, "billing" mentioned in every utterance.
            let word = ["alpha", "bravo", "charlie", "delta", "echoes", "foxtrot"][i];
            utterances.push(participant(&format!("billing {word} trouble"), i as f64));
        }
        let themes = extract_themes(&utterances, &AnalysisConfig::default());

        assert_eq!(themes.len(), 5);
        assert_eq!(themes[0].name, "Billing");
        assert_eq!(themes[0].mention_count, 6);
        assert_eq!(themes[0].supporting_quotes.len(), 3);
        assert!(themes[0].supporting_quotes[0].contains("alpha"));
    }

    #[test]
    fn skips_interviewer_utterances() {
        let utterances = vec![interviewer("tell me about the onboarding process", 0.0)];
        assert!(extract_themes(&utterances, &AnalysisConfig::default()).is_empty());
    }

    #[test]
    fn empty_input_yields_empty_list() {
        assert!(extract_themes(&[], &AnalysisConfig::default()).is_empty());
    }

    #[test]
    fn excerpts_are_truncated_to_150_chars() {
        let long = format!("onboarding {}", "x".repeat(300));
        let utterances = vec![participant(&long, 0.0)];
        let themes = extract_themes(&utterances, &AnalysisConfig::default());
        let theme = themes.iter().find(|t| t.name == "Onboarding").unwrap();
        assert_eq!(theme.supporting_quotes[0].chars().count(), 150);
    }
}
