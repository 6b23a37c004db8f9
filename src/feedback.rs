//! Visual feedback sink: selection highlight and collision outline colour.
//!
//! Feedback is cosmetic. Sink failures are logged and dropped; they never
//! change the outcome of a gesture.

use crate::doc::ItemId;

#[derive(Debug, thiserror::Error)]
pub enum FeedbackError {
    #[error("item {0} has no scene object")]
    MissingTarget(ItemId),
    #[error("feedback unavailable: {0}")]
    Unavailable(String),
}

pub trait FeedbackSink {
    /// Toggle the selection highlight on an item.
    ///
    /// # Errors
    ///
    /// Host-specific; the editor only logs it.
    fn highlight(&mut self, id: ItemId, on: bool) -> Result<(), FeedbackError>;

    /// Switch the selection outline between its normal and colliding colour.
    ///
    /// # Errors
    ///
    /// Host-specific; the editor only logs it.
    fn set_outline_color(&mut self, colliding: bool) -> Result<(), FeedbackError>;
}

/// Sink for headless use.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoFeedback;

impl FeedbackSink for NoFeedback {
    fn highlight(&mut self, _id: ItemId, _on: bool) -> Result<(), FeedbackError> {
        Ok(())
    }

    fn set_outline_color(&mut self, _colliding: bool) -> Result<(), FeedbackError> {
        Ok(())
    }
}

/// Log a sink failure as a warning.
pub(crate) fn report(result: Result<(), FeedbackError>, what: &'static str) {
    if let Err(e) = result {
        tracing::warn!(error = %e, what, "visual feedback failed");
    }
}
