// Entity recognizer trait — swap-ready abstraction.
//
// Like the sentiment scorer traits, this lets the backing recognizer be
// replaced (a statistical model, a different pattern set) without changing
// extraction or grouping.

use anyhow::Result;

use super::Entity;

/// Recognizes named entities in one text.
pub trait EntityRecognizer: Send + Sync {
    /// Return (span text, label) pairs in left-to-right source order.
    /// Repeated mentions must each be reported; deduplication belongs to
    /// the display layer. Never called with empty/whitespace-only input.
    fn recognize(&self, text: &str) -> Result<Vec<Entity>>;
}
