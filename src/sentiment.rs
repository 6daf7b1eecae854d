//! Heuristic mood and sentiment classifier for journal text.
//!
//! Two stages over one fixed keyword table:
//!
//! 1. **Scoring** — count per-mood trigger keywords in the lowercased text
//!    (substring containment, so "calmly" counts toward "calm").
//! 2. **Classification** — derive the primary mood, a coarse polarity, and a
//!    heuristic confidence from the hit counts.
//!
//! Both stages are pure functions with no shared state, safe to call from
//! any number of concurrent requests.

use serde::{Deserialize, Serialize};

/// Discrete mood label assigned to a piece of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Happy,
    Sad,
    Angry,
    Anxious,
    Calm,
    Excited,
    Neutral,
}

/// Coarse sentiment polarity derived from mood scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

/// Result of sentiment classification.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SentimentResult {
    /// Coarse polarity of the text.
    pub sentiment: Sentiment,
    /// The dominant mood, or [`Mood::Neutral`] when nothing matched.
    pub mood: Mood,
    /// Heuristic confidence in the range `0.7..=0.95`. Not a calibrated
    /// probability; one keyword hit is 0.8, three or more cap at 0.95.
    pub confidence: f32,
}

// ── Keyword table ───────────────────────────────────────────────────────

/// (mood, trigger keywords), in tie-break priority order.
///
/// When two moods reach the same hit count, the one listed first here wins.
const KEYWORD_TABLE: &[(Mood, &[&str])] = &[
    (
        Mood::Happy,
        &[
            "happy",
            "joy",
            "excited",
            "great",
            "amazing",
            "wonderful",
            "fantastic",
            "love",
            "blessed",
        ],
    ),
    (
        Mood::Sad,
        &[
            "sad", "depressed", "down", "upset", "crying", "hurt", "lonely", "empty",
        ],
    ),
    (
        Mood::Angry,
        &["angry", "mad", "furious", "annoyed", "frustrated", "irritated"],
    ),
    (
        Mood::Anxious,
        &[
            "anxious",
            "worried",
            "nervous",
            "stressed",
            "panic",
            "overwhelmed",
        ],
    ),
    (
        Mood::Calm,
        &["calm", "peaceful", "relaxed", "serene", "tranquil", "content"],
    ),
    (
        Mood::Excited,
        &["excited", "thrilled", "pumped", "energetic", "enthusiastic"],
    ),
];

/// Minimum confidence, reported when no keyword matched.
const CONFIDENCE_FLOOR: f32 = 0.7;

/// Confidence added per keyword hit in the dominant mood.
const CONFIDENCE_STEP: f32 = 0.1;

/// Maximum reported confidence.
const CONFIDENCE_CAP: f32 = 0.95;

// ── Mood scores ─────────────────────────────────────────────────────────

/// Per-mood keyword hit counts for one piece of text.
///
/// Counts are stored in [`KEYWORD_TABLE`] order; neutral is not scored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MoodScores {
    counts: [usize; 6],
}

impl MoodScores {
    /// Returns the hit count for a mood. Neutral always scores zero.
    pub fn count(&self, mood: Mood) -> usize {
        KEYWORD_TABLE
            .iter()
            .position(|&(m, _)| m == mood)
            .map_or(0, |i| self.counts[i])
    }

    /// Returns the highest single-mood hit count.
    pub fn max(&self) -> usize {
        self.counts.iter().copied().max().unwrap_or(0)
    }
}

/// Count trigger-keyword hits per mood in the lowercased text.
///
/// Matching is plain substring containment, not word-boundary tokenization.
/// An empty string yields all-zero scores.
pub fn score_moods(text: &str) -> MoodScores {
    let lower = text.to_lowercase();
    let mut counts = [0usize; 6];
    for (slot, &(_, keywords)) in counts.iter_mut().zip(KEYWORD_TABLE) {
        *slot = keywords.iter().filter(|kw| lower.contains(*kw)).count();
    }
    MoodScores { counts }
}

// ── Classification ──────────────────────────────────────────────────────

/// Classify the mood and sentiment of journal text.
///
/// Never fails: empty or unmatched text classifies as neutral/neutral with
/// confidence 0.7.
pub fn classify(text: &str) -> SentimentResult {
    classify_scores(&score_moods(text))
}

/// Derive mood, polarity, and confidence from precomputed scores.
///
/// The primary mood is the first entry in the table order reaching the
/// maximum count; a zero maximum means neutral. Polarity compares the summed
/// positive moods (happy, excited, calm) against the negative ones
/// (sad, angry, anxious).
pub fn classify_scores(scores: &MoodScores) -> SentimentResult {
    let max = scores.max();

    let mood = if max == 0 {
        Mood::Neutral
    } else {
        KEYWORD_TABLE
            .iter()
            .map(|&(m, _)| m)
            .find(|&m| scores.count(m) == max)
            .unwrap_or(Mood::Neutral)
    };

    let positive =
        scores.count(Mood::Happy) + scores.count(Mood::Excited) + scores.count(Mood::Calm);
    let negative =
        scores.count(Mood::Sad) + scores.count(Mood::Angry) + scores.count(Mood::Anxious);

    let sentiment = if positive > negative {
        Sentiment::Positive
    } else if negative > positive {
        Sentiment::Negative
    } else {
        Sentiment::Neutral
    };

    let confidence = (CONFIDENCE_FLOOR + CONFIDENCE_STEP * max as f32).min(CONFIDENCE_CAP);

    SentimentResult {
        sentiment,
        mood,
        confidence,
    }
}

// ── Tests ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]

    use super::*;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-6
    }

    // ── Scoring ─────────────────────────────────────────────────────────

    #[test]
    fn empty_text_scores_zero() {
        let scores = score_moods("");
        assert_eq!(scores, MoodScores::default());
        assert_eq!(scores.max(), 0);
    }

    #[test]
    fn single_keyword_scores_one() {
        let scores = score_moods("I feel happy today");
        assert_eq!(scores.count(Mood::Happy), 1);
        assert_eq!(scores.count(Mood::Sad), 0);
    }

    #[test]
    fn substring_matching_is_not_word_bounded() {
        // "calmly" contains "calm"
        let scores = score_moods("she spoke calmly");
        assert_eq!(scores.count(Mood::Calm), 1);
    }

    #[test]
    fn matching_is_case_insensitive() {
        let scores = score_moods("I AM FURIOUS AND ANNOYED");
        assert_eq!(scores.count(Mood::Angry), 2);
    }

    #[test]
    fn neutral_always_scores_zero() {
        let scores = score_moods("happy happy happy");
        assert_eq!(scores.count(Mood::Neutral), 0);
    }

    // ── Classification ──────────────────────────────────────────────────

    #[test]
    fn empty_text_is_neutral_at_floor() {
        let result = classify("");
        assert_eq!(result.mood, Mood::Neutral);
        assert_eq!(result.sentiment, Sentiment::Neutral);
        assert!(approx(result.confidence, 0.7));
    }

    #[test]
    fn single_happy_keyword() {
        let result = classify("I feel happy today");
        assert_eq!(result.mood, Mood::Happy);
        assert_eq!(result.sentiment, Sentiment::Positive);
        assert!(approx(result.confidence, 0.8));
    }

    #[test]
    fn negative_moods_give_negative_sentiment() {
        let result = classify("I am so worried and stressed about tomorrow");
        assert_eq!(result.mood, Mood::Anxious);
        assert_eq!(result.sentiment, Sentiment::Negative);
    }

    #[test]
    fn confidence_caps_at_three_hits() {
        let result = classify("sad, lonely, and crying again");
        assert_eq!(result.mood, Mood::Sad);
        assert!(approx(result.confidence, 0.95));

        // More hits stay at the cap.
        let more = classify("sad, lonely, crying, hurt, empty");
        assert!(approx(more.confidence, 0.95));
    }

    #[test]
    fn confidence_always_in_range() {
        for text in [
            "",
            "nothing to see",
            "happy",
            "sad angry anxious happy calm excited",
            "furious annoyed irritated mad angry",
        ] {
            let result = classify(text);
            assert!(
                (0.7..=0.95).contains(&result.confidence),
                "confidence out of range for {text:?}"
            );
        }
    }

    #[test]
    fn happy_and_excited_is_positive() {
        // "excited" is also a happy trigger, so happy scores 2 and wins.
        let result = classify("I am happy and excited");
        assert_eq!(result.sentiment, Sentiment::Positive);
        assert_eq!(result.mood, Mood::Happy);
    }

    #[test]
    fn balanced_scores_give_neutral_sentiment() {
        let result = classify("happy but also sad");
        assert_eq!(result.sentiment, Sentiment::Neutral);
    }

    // ── Tie-break ───────────────────────────────────────────────────────

    #[test]
    fn tie_break_follows_table_order() {
        // calm and excited tied at 2: calm is listed first.
        let scores = MoodScores {
            counts: [0, 0, 0, 0, 2, 2],
        };
        assert_eq!(classify_scores(&scores).mood, Mood::Calm);

        // happy beats everything on an all-ones tie.
        let all_ones = MoodScores {
            counts: [1, 1, 1, 1, 1, 1],
        };
        assert_eq!(classify_scores(&all_ones).mood, Mood::Happy);
    }

    #[test]
    fn tie_break_is_deterministic_across_calls() {
        let scores = MoodScores {
            counts: [0, 3, 0, 3, 0, 0],
        };
        let first = classify_scores(&scores).mood;
        for _ in 0..10 {
            assert_eq!(classify_scores(&scores).mood, first);
        }
        assert_eq!(first, Mood::Sad);
    }

    // ── Serialization ───────────────────────────────────────────────────

    #[test]
    fn moods_serialize_lowercase() {
        assert_eq!(serde_json::to_string(&Mood::Anxious).unwrap(), "\"anxious\"");
        assert_eq!(
            serde_json::to_string(&Sentiment::Negative).unwrap(),
            "\"negative\""
        );
    }
}
