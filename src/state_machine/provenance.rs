//! Detection of questions about who built the assistant
//!
//! These never reach the model; the controller answers them locally.

/// Phrases checked, in order, against the lower-cased input
pub const PROVENANCE_PHRASES: &[&str] = &[
    "who made you",
    "who created you",
    "who built you",
    "who developed you",
    "who is your creator",
    "who is your developer",
];

/// Reply shown for any provenance question
pub const IDENTITY_REPLY: &str = "I was created by idcare19! 🚀";

/// Returns true if `message` contains any provenance phrase, ignoring case
pub fn is_provenance_query(message: &str) -> bool {
    let lower = message.to_lowercase();
    PROVENANCE_PHRASES
        .iter()
        .any(|phrase| lower.contains(phrase))
}
