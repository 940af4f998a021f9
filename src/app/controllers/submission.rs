use thiserror::Error;

use crate::app::controllers::selection::SelectionController;
use crate::app::domain::draft::{PasteDraft, SubmitOutcome};
use crate::app::domain::editor::EditorSession;
use crate::app::domain::notice::{Notice, NotificationSink};
use crate::app::infrastructure::clock::Clock;
use crate::app::infrastructure::navigator::Navigator;

pub const DEFAULT_SUBMIT_INTERVAL_MS: u64 = 1000;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitRejected {
    #[error("paste is empty")]
    EmptyInput,
    #[error("submitted too soon after the previous paste")]
    RateLimited,
}

/// Validates and debounces paste submissions.
///
/// Only the most recent accepted attempt is remembered. It is recorded before
/// the request goes out, so a failed request still counts towards the interval.
pub struct SubmissionController {
    last_attempt_ms: Option<u64>,
    min_interval_ms: u64,
}

impl Default for SubmissionController {
    fn default() -> Self {
        Self::new(DEFAULT_SUBMIT_INTERVAL_MS)
    }
}

impl SubmissionController {
    pub fn new(min_interval_ms: u64) -> Self {
        Self {
            last_attempt_ms: None,
            min_interval_ms,
        }
    }

    /// Build the draft to send, or explain why nothing should be sent.
    /// Empty pastes are reported to the user; debounced clicks are not.
    pub fn submit(
        &mut self,
        clock: &dyn Clock,
        editor: &dyn EditorSession,
        title: &str,
        selection: &SelectionController,
        notifier: &mut dyn NotificationSink,
    ) -> Result<PasteDraft, SubmitRejected> {
        let text = editor.text();
        if text.is_empty() {
            notifier.notify(Notice::empty_paste());
            return Err(SubmitRejected::EmptyInput);
        }

        let now = clock.now_ms();
        if let Some(last) = self.last_attempt_ms
            && now.saturating_sub(last) < self.min_interval_ms
        {
            tracing::debug!(since_last_ms = now.saturating_sub(last), "submission debounced");
            return Err(SubmitRejected::RateLimited);
        }
        self.last_attempt_ms = Some(now);

        let draft = PasteDraft {
            text,
            title: title.to_string(),
            content_type: selection.content_type().clone(),
            expiration: selection.expiration(),
        };
        tracing::info!(
            bytes = draft.text.len(),
            mime = %draft.content_type,
            expire = draft.expiration.seconds(),
            "submitting paste"
        );
        Ok(draft)
    }

    /// Route the server's answer: navigate on success, notify on failure.
    /// Editor text and selections are never touched here.
    pub fn finish(
        &mut self,
        outcome: SubmitOutcome,
        navigator: &mut dyn Navigator,
        notifier: &mut dyn NotificationSink,
    ) {
        match outcome {
            SubmitOutcome::Created { location } => {
                tracing::info!(%location, "paste created");
                if let Err(e) = navigator.navigate(&location) {
                    tracing::warn!("Could not open paste: {}", e);
                    notifier.notify(Notice::info(format!("Paste created: {}", location)));
                }
            }
            SubmitOutcome::Failed { message } => {
                tracing::warn!(%message, "paste rejected");
                notifier.notify(Notice::error(&message));
            }
        }
    }

    pub fn last_attempt_ms(&self) -> Option<u64> {
        self.last_attempt_ms
    }
}
