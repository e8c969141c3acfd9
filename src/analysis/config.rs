/// Configuration for the analysis engine with tunable weights and caps.
#[derive(Debug, Clone)]
pub struct AnalysisConfig {
    /// Quality score weights
    pub weight_topics: f64,
    pub weight_insights: f64,
    pub weight_diversity: f64,
    pub weight_duration: f64,

    /// Insight-to-utterance ratio at which the insight sub-score saturates
    pub insight_saturation_ratio: f64,

    /// Seconds either side of an insight marker that count as "near"
    pub insight_window_secs: f64,

    /// Output caps
    pub max_themes: usize,
    pub max_quotes: usize,
    pub max_excerpts_per_theme: usize,

    /// Truncation lengths (Unicode scalars, not bytes)
    pub theme_excerpt_chars: usize,
    pub detector_excerpt_chars: usize,
    pub quote_chars: usize,

    /// Quotes scoring at or below this are dropped
    pub min_quote_score: f64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            weight_topics: 0.30,
            weight_insights: 0.25,
            weight_diversity: 0.25,
            weight_duration: 0.20,
            insight_saturation_ratio: 0.15,
            insight_window_secs: 10.0,
            max_themes: 5,
            max_quotes: 5,
            max_excerpts_per_theme: 3,
            theme_excerpt_chars: 150,
            detector_excerpt_chars: 200,
            quote_chars: 300,
            min_quote_score: 10.0,
        }
    }
}

/// Words too common (or too filler) to count as themes.
pub const STOP_WORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "nor", "so", "yet", "for", "of", "in", "on", "at", "to",
    "from", "by", "with", "about", "into", "over", "under", "after", "before", "between", "through",
    "during", "above", "below", "out", "off", "down", "again", "further", "then", "once", "here",
    "there", "where", "when", "why", "how", "what", "which", "who", "whom", "whose", "this", "that",
    "these", "those", "they", "them", "their", "theirs", "she", "her", "hers", "him", "his", "it",
    "its", "we", "us", "our", "ours", "you", "your", "yours", "i", "me", "my", "mine", "am", "is",
    "are", "was", "were", "be", "been", "being", "have", "has", "had", "having", "do", "does",
    "did", "doing", "will", "would", "shall", "should", "can", "could", "may", "might", "must",
    "not", "no", "only", "own", "same", "than", "too", "very", "just", "because", "while",
    "until", "both", "each", "few", "more", "most", "other", "some", "such", "all", "any", "if",
    "as", "also", "even", "ever", "never", "now", "still", "well", "like", "get", "got", "one",
    "two", "thing", "things", "going", "want", "know", "think", "really", "kind", "sort", "mean",
    "though", "although", "every", "everything", "something", "anything", "nothing", "someone",
    "anyone", "everyone", "much", "many", "quite", "pretty", "able", "need", "use", "used",
    "using", "make", "makes", "made", "way", "say", "says", "said", "see", "come", "came", "time",
    "back", "mostly", "lot", "bit",
    "yeah", "yes", "okay", "right", "um", "uh", "hmm", "basically", "actually", "literally",
    "probably", "maybe", "guess", "stuff", "gonna", "wanna",
];

/// Substrings signalling frustration or friction.
pub const PAIN_KEYWORDS: &[&str] = &[
    "frustrat", "difficult", "problem", "pain", "struggle", "annoying", "confus", "hate", "issue",
    "broken", "fail", "slow", "complicated", "tedious", "stuck", "wrong", "worst", "terrible",
    "awful", "impossible", "waste", "barrier", "obstacle",
];

/// Substrings signalling a positive experience.
pub const POSITIVE_KEYWORDS: &[&str] = &[
    "love", "great", "amazing", "easy", "awesome", "excellent", "fantastic", "wonderful",
    "helpful", "perfect", "enjoy", "smooth", "simple", "intuitive", "convenient", "useful",
    "delight", "favorite", "impress", "best", "happy", "satisf", "pleasant",
];

/// Substrings signalling emotionally loaded language; overlaps the pain and
/// positive lists on purpose, quote scoring treats them independently.
pub const EMOTIONAL_KEYWORDS: &[&str] = &[
    "love", "hate", "frustrat", "excit", "amazing", "terrible", "never", "always", "absolutely",
    "definitely", "crucial", "critical", "essential", "desperate", "worst", "best", "incredibl",
    "honestly", "genuinely", "shocked",
];
