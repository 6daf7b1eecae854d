//! Fixed supportive-content bundles, one per mood.

use crate::sentiment::Mood;
use serde::Serialize;

/// Supportive content returned alongside a mood classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ContentBundle {
    /// Short supportive advice matched to the mood.
    pub recommendation: &'static str,
    /// An attributed quote.
    pub quote: &'static str,
    /// A concrete activity suggestion.
    pub activity: &'static str,
    /// A song to listen to.
    pub song_suggestion: &'static str,
}

const HAPPY: ContentBundle = ContentBundle {
    recommendation: "You're radiating positivity! Share this energy with others and keep doing \
                     what makes you happy.",
    quote: "Happiness is not something ready-made. It comes from your own actions. - Dalai Lama",
    activity: "Write down 3 things you're grateful for today, or call someone to share your joy!",
    song_suggestion: "Happy by Pharrell Williams",
};

const EXCITED: ContentBundle = ContentBundle {
    recommendation: "Channel that excitement into something creative or productive! Your energy \
                     is contagious.",
    quote: "The way to get started is to quit talking and begin doing. - Walt Disney",
    activity: "Start that project you've been thinking about, or plan an adventure!",
    song_suggestion: "Can't Stop the Feeling by Justin Timberlake",
};

const CALM: ContentBundle = ContentBundle {
    recommendation: "Embrace this peaceful moment. Use this clarity to reflect and set \
                     intentions.",
    quote: "Peace comes from within. Do not seek it without. - Buddha",
    activity: "Practice mindful breathing or enjoy a cup of tea in silence.",
    song_suggestion: "Weightless by Marconi Union",
};

const SAD: ContentBundle = ContentBundle {
    recommendation: "It's okay to feel sad. Allow yourself to process these emotions. Reach out \
                     to someone you trust.",
    quote: "The wound is the place where the Light enters you. - Rumi",
    activity: "Take a warm bath, listen to soothing music, or write in your journal.",
    song_suggestion: "Mad World by Gary Jules",
};

const ANGRY: ContentBundle = ContentBundle {
    recommendation: "Take deep breaths. Your feelings are valid. Try physical activity or \
                     creative expression to release tension.",
    quote: "Holding on to anger is like grasping a hot coal with the intent of throwing it at \
            someone else. - Buddha",
    activity: "Go for a run, punch a pillow, or do some intense exercise to release energy.",
    song_suggestion: "Breathe Me by Sia",
};

const ANXIOUS: ContentBundle = ContentBundle {
    recommendation: "Ground yourself in the present moment. Try the 5-4-3-2-1 technique: 5 \
                     things you see, 4 you touch, 3 you hear, 2 you smell, 1 you taste.",
    quote: "You have been assigned this mountain to show others it can be moved. - Mel Robbins",
    activity: "Practice box breathing: inhale for 4, hold for 4, exhale for 4, hold for 4.",
    song_suggestion: "Anxiety by Julia Michaels",
};

const NEUTRAL: ContentBundle = ContentBundle {
    recommendation: "Sometimes neutral is exactly what we need. Take this moment to check in \
                     with yourself.",
    quote: "In the middle of difficulty lies opportunity. - Albert Einstein",
    activity: "Take a mindful walk or try a new hobby that interests you.",
    song_suggestion: "Somewhere Only We Know by Keane",
};

/// Returns the fixed content bundle for a mood.
///
/// Total over the mood domain; the exhaustive match means there is no
/// out-of-range fallback path at runtime.
pub fn bundle_for(mood: Mood) -> &'static ContentBundle {
    match mood {
        Mood::Happy => &HAPPY,
        Mood::Excited => &EXCITED,
        Mood::Calm => &CALM,
        Mood::Sad => &SAD,
        Mood::Angry => &ANGRY,
        Mood::Anxious => &ANXIOUS,
        Mood::Neutral => &NEUTRAL,
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]

    use super::*;

    const ALL_MOODS: [Mood; 7] = [
        Mood::Happy,
        Mood::Sad,
        Mood::Angry,
        Mood::Anxious,
        Mood::Calm,
        Mood::Excited,
        Mood::Neutral,
    ];

    #[test]
    fn every_mood_has_a_complete_bundle() {
        for mood in ALL_MOODS {
            let bundle = bundle_for(mood);
            assert!(!bundle.recommendation.is_empty(), "{mood:?}");
            assert!(!bundle.quote.is_empty(), "{mood:?}");
            assert!(!bundle.activity.is_empty(), "{mood:?}");
            assert!(!bundle.song_suggestion.is_empty(), "{mood:?}");
        }
    }

    #[test]
    fn lookup_is_stable_across_calls() {
        for mood in ALL_MOODS {
            assert_eq!(bundle_for(mood), bundle_for(mood));
        }
    }

    #[test]
    fn bundles_are_distinct_per_mood() {
        for (i, a) in ALL_MOODS.iter().enumerate() {
            for b in &ALL_MOODS[i + 1..] {
                assert_ne!(bundle_for(*a), bundle_for(*b), "{a:?} vs {b:?}");
            }
        }
    }

    #[test]
    fn bundle_serializes_with_all_fields() {
        let json = serde_json::to_value(bundle_for(Mood::Sad)).unwrap();
        assert!(json.get("recommendation").is_some());
        assert!(json.get("quote").is_some());
        assert!(json.get("activity").is_some());
        assert!(json.get("song_suggestion").is_some());
    }
}
