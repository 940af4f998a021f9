use crate::app::domain::draft::{PasteDraft, SubmitOutcome};
use crate::app::domain::settings::AppSettings;

/// The pastebin server. Runs on worker threads.
pub trait PasteBackend: Send + Sync {
    fn submit(&self, draft: &PasteDraft) -> SubmitOutcome;
}

/// POSTs the draft as a urlencoded form to the server root.
pub struct HttpBackend {
    submit_url: String,
    timeout_secs: u64,
}

impl HttpBackend {
    pub fn new(settings: &AppSettings) -> Self {
        Self {
            submit_url: settings.submit_url(),
            timeout_secs: settings.request_timeout_secs,
        }
    }
}

impl PasteBackend for HttpBackend {
    fn submit(&self, draft: &PasteDraft) -> SubmitOutcome {
        let response = minreq::post(&self.submit_url)
            .with_header("User-Agent", "PastePad")
            .with_header("Content-Type", "application/x-www-form-urlencoded")
            .with_body(draft.encode_form())
            .with_timeout(self.timeout_secs)
            .send();

        match response {
            Ok(response) => {
                let body = response.as_str().unwrap_or_default();
                interpret_response(response.status_code, body)
            }
            Err(e) => {
                tracing::warn!(url = %self.submit_url, "paste request failed: {}", e);
                SubmitOutcome::Failed {
                    message: format!("Could not reach the server ({})", e),
                }
            }
        }
    }
}

/// Turn a status + plain-text body into an outcome. The server terminates
/// both locations and error messages with a newline.
pub fn interpret_response(status: i32, body: &str) -> SubmitOutcome {
    let body = body.trim_end();
    if (200..300).contains(&status) {
        if body.is_empty() {
            return SubmitOutcome::Failed {
                message: "The server did not return a paste location".to_string(),
            };
        }
        SubmitOutcome::Created {
            location: body.to_string(),
        }
    } else if body.is_empty() {
        SubmitOutcome::Failed {
            message: format!("Server returned status {}", status),
        }
    } else {
        SubmitOutcome::Failed {
            message: body.to_string(),
        }
    }
}
