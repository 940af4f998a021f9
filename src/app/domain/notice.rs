use std::time::Duration;

/// Message shown when submitting an empty editor.
pub const EMPTY_PASTE_NOTICE: &str = "Error: Your paste is empty";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Error,
}

/// A short-lived message for the user, like a browser toast.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
    pub duration: Duration,
}

impl Notice {
    pub fn empty_paste() -> Self {
        Self {
            kind: NoticeKind::Error,
            text: EMPTY_PASTE_NOTICE.to_string(),
            duration: Duration::from_millis(2000),
        }
    }

    pub fn error(message: &str) -> Self {
        Self {
            kind: NoticeKind::Error,
            text: format!("Error: {}", message.trim_end()),
            duration: Duration::from_millis(5000),
        }
    }

    pub fn info(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Info,
            text: text.into(),
            duration: Duration::from_millis(5000),
        }
    }
}

pub trait NotificationSink {
    fn notify(&mut self, notice: Notice);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_notice_prefix() {
        let notice = Notice::error("title too long\n");
        assert_eq!(notice.text, "Error: title too long");
        assert_eq!(notice.duration, Duration::from_secs(5));
    }

    #[test]
    fn test_empty_paste_notice() {
        let notice = Notice::empty_paste();
        assert!(notice.text.contains("Your paste is empty"));
        assert_eq!(notice.duration, Duration::from_secs(2));
    }
}
