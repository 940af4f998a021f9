//! Recording doubles for the capability traits used by the controllers.

use std::collections::HashMap;

use crate::app::domain::{EditorMode, EditorSession, Notice, NotificationSink, PageChrome, ThemePreference};
use crate::app::infrastructure::clock::Clock;
use crate::app::infrastructure::error::{AppError, Result};
use crate::app::infrastructure::navigator::Navigator;
use crate::app::services::preferences::DurableKeyValueStore;

#[derive(Default)]
pub struct RecordingEditor {
    pub text: String,
    pub mode: EditorMode,
    pub theme: ThemePreference,
    pub mode_history: Vec<EditorMode>,
    pub theme_history: Vec<ThemePreference>,
}

impl RecordingEditor {
    pub fn with_text(text: &str) -> Self {
        Self {
            text: text.to_string(),
            ..Default::default()
        }
    }
}

impl EditorSession for RecordingEditor {
    fn text(&self) -> String {
        self.text.clone()
    }

    fn mode(&self) -> &EditorMode {
        &self.mode
    }

    fn set_mode(&mut self, mode: EditorMode) {
        self.mode_history.push(mode.clone());
        self.mode = mode;
    }

    fn theme(&self) -> ThemePreference {
        self.theme
    }

    fn set_theme(&mut self, theme: ThemePreference) {
        self.theme_history.push(theme);
        self.theme = theme;
    }
}

#[derive(Default)]
pub struct RecordingPage {
    pub theme: Option<ThemePreference>,
}

impl PageChrome for RecordingPage {
    fn set_theme(&mut self, theme: ThemePreference) {
        self.theme = Some(theme);
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    pub notices: Vec<Notice>,
}

impl NotificationSink for RecordingNotifier {
    fn notify(&mut self, notice: Notice) {
        self.notices.push(notice);
    }
}

#[derive(Default)]
pub struct RecordingNavigator {
    pub visited: Vec<String>,
    pub fail: bool,
}

impl Navigator for RecordingNavigator {
    fn navigate(&mut self, location: &str) -> Result<()> {
        if self.fail {
            return Err(AppError::Io(std::io::Error::other("no browser")));
        }
        self.visited.push(location.to_string());
        Ok(())
    }
}

pub struct ManualClock {
    pub now: u64,
}

impl ManualClock {
    pub fn at(now: u64) -> Self {
        Self { now }
    }

    pub fn advance(&mut self, ms: u64) {
        self.now += ms;
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> u64 {
        self.now
    }
}

#[derive(Default)]
pub struct MemoryStore {
    pub entries: HashMap<String, String>,
    pub disabled: bool,
    pub fail_writes: bool,
}

impl DurableKeyValueStore for MemoryStore {
    fn enabled(&self) -> bool {
        !self.disabled
    }

    fn get(&self, key: &str) -> Option<String> {
        if self.disabled {
            return None;
        }
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        if self.disabled || self.fail_writes {
            return Err(AppError::Io(std::io::Error::other("storage unavailable")));
        }
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
