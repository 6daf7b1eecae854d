//! Solace: supportive journaling and chat backend.
//!
//! A small HTTP service that classifies the mood of free-text journal
//! entries, returns matching supportive content, and answers chat messages
//! with canned replies. The request path is:
//!
//! text → keyword scoring → mood/sentiment classification → content bundle
//!
//! and, separately, chat message → category match → random canned reply.
//! Classification is a deterministic keyword heuristic — there is no model
//! inference anywhere in the crate. Journal entries and the chat transcript
//! persist as JSON arrays in flat files.

pub mod chat;
pub mod config;
pub mod content;
pub mod error;
pub mod history;
pub mod sentiment;
pub mod server;

pub use chat::{ChatCategory, categorize, respond};
pub use config::ServiceConfig;
pub use content::{ContentBundle, bundle_for};
pub use error::{Result, ServiceError};
pub use history::{ChatRecord, HistoryStore, JournalEntry};
pub use sentiment::{Mood, Sentiment, SentimentResult, classify};
pub use server::ApiServer;
