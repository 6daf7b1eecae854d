//! Keyword-triggered canned replies for the support chat.
//!
//! A message is matched against category trigger lists in a fixed priority
//! order; the first category containing any trigger wins and one of its
//! replies is drawn uniformly at random. The random source is passed in by
//! the caller so reply selection stays deterministic under test.

use rand::Rng;
use rand::seq::SliceRandom;
use serde::Serialize;

/// Keyword-triggered bucket used to select a canned reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatCategory {
    Greeting,
    Sad,
    Anxious,
    Angry,
    Happy,
    Help,
    Default,
}

/// (category, trigger keywords, candidate replies), in match priority order.
///
/// Trigger lists overlap across categories, so the order here is a contract:
/// "I am sad but also anxious" must select a sad reply. Default has no
/// triggers and is handled as the fallthrough.
const RESPONSE_TABLE: &[(ChatCategory, &[&str], &[&str])] = &[
    (
        ChatCategory::Greeting,
        &["hello", "hi", "hey", "good morning", "good evening"],
        &[
            "Hello! I'm here to listen and support you. How are you feeling today?",
            "Hi there! I'm glad you're here. What's on your mind?",
            "Hey! I'm your mental wellness companion. How can I help you today?",
        ],
    ),
    (
        ChatCategory::Sad,
        &["sad", "depressed", "down", "upset"],
        &[
            "I hear that you're feeling sad. It's completely normal to have these feelings. \
             Would you like to talk about what's making you feel this way?",
            "Sadness is a natural emotion, and it's okay to sit with it. Remember that this \
             feeling is temporary. What usually helps you feel better?",
            "I'm sorry you're going through a tough time. Your feelings are valid. Have you \
             tried any coping strategies that worked for you before?",
        ],
    ),
    (
        ChatCategory::Anxious,
        &["anxious", "worried", "stressed", "nervous"],
        &[
            "Anxiety can feel overwhelming, but you're not alone. Try taking slow, deep \
             breaths. What's causing you to feel anxious right now?",
            "I understand you're feeling anxious. Let's try grounding together: Can you name 5 \
             things you can see around you right now?",
            "Stress and worry are tough to handle. Remember that you've overcome challenges \
             before. What's one small thing you can do right now to feel more calm?",
        ],
    ),
    (
        ChatCategory::Angry,
        &["angry", "mad", "frustrated", "annoyed"],
        &[
            "It sounds like you're feeling really frustrated. Anger is a valid emotion. What's \
             triggering these feelings?",
            "I can sense your anger. It's okay to feel this way. Have you tried any physical \
             activities to help release this energy?",
            "Frustration can be really intense. Take a moment to breathe. What would help you \
             feel more balanced right now?",
        ],
    ),
    (
        ChatCategory::Happy,
        &["happy", "great", "amazing", "wonderful"],
        &[
            "That's wonderful to hear! I'm so glad you're feeling happy. What's bringing you \
             joy today?",
            "Your positive energy is beautiful! It's great that you're in a good space. How \
             can you carry this feeling forward?",
            "I love hearing that you're doing well! Happiness is precious. What's been the \
             highlight of your day?",
        ],
    ),
    (
        ChatCategory::Help,
        &["help", "support", "advice", "what should i do"],
        &[
            "I'm here to help! Can you tell me more about what you're going through? \
             Sometimes talking it out can provide clarity.",
            "Of course I want to support you. What specific area would you like guidance on? \
             Your feelings, a situation, or coping strategies?",
            "I'm glad you reached out. You've already taken a brave step by asking for help. \
             What's the most pressing thing on your mind right now?",
        ],
    ),
];

/// Replies used when no trigger matched.
const DEFAULT_REPLIES: &[&str] = &[
    "Thank you for sharing that with me. How does talking about this make you feel?",
    "I appreciate you opening up. What would be most helpful for you right now?",
    "It sounds like you have a lot on your mind. Would you like to explore these feelings \
     further?",
    "I'm here to listen without judgment. What else would you like to share?",
    "Your thoughts and feelings matter. How can I best support you today?",
];

/// Match a message to the first chat category whose trigger list it contains.
///
/// Triggers match as lowercase substrings; an unmatched message falls into
/// [`ChatCategory::Default`].
pub fn categorize(message: &str) -> ChatCategory {
    let lower = message.to_lowercase();
    for &(category, triggers, _) in RESPONSE_TABLE {
        if triggers.iter().any(|kw| lower.contains(kw)) {
            return category;
        }
    }
    ChatCategory::Default
}

/// Returns the candidate replies for a category.
pub fn replies_for(category: ChatCategory) -> &'static [&'static str] {
    RESPONSE_TABLE
        .iter()
        .find(|&&(c, _, _)| c == category)
        .map(|&(_, _, replies)| replies)
        .unwrap_or(DEFAULT_REPLIES)
}

/// Pick a supportive reply for a chat message.
///
/// The caller validates that the message is non-empty before calling and
/// supplies the random source used for uniform reply selection.
pub fn respond<R: Rng + ?Sized>(message: &str, rng: &mut R) -> &'static str {
    let replies = replies_for(categorize(message));
    // The tables are const and never empty; the fallback is unreachable.
    replies
        .choose(rng)
        .copied()
        .unwrap_or("I'm here to listen. What would you like to share?")
}
