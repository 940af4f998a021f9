use crate::app::domain::content_type::{ContentType, LANGUAGES};
use crate::app::domain::editor::{EditorMode, EditorSession, PageChrome};
use crate::app::domain::expiration::ExpirationChoice;
use crate::app::domain::theme::ThemePreference;
use crate::app::services::mode_loader::{Activation, ModeLoader};
use crate::app::services::preferences::{DurableKeyValueStore, ThemePersistence};

/// Mutually exclusive options with exactly one active entry.
#[derive(Debug, Clone)]
pub struct ChoiceGroup<T> {
    options: Vec<(String, T)>,
    active: usize,
}

impl<T> ChoiceGroup<T> {
    /// `default` is clamped into range. `options` must not be empty.
    pub fn new(options: Vec<(String, T)>, default: usize) -> Self {
        assert!(!options.is_empty(), "a choice group needs at least one option");
        let active = default.min(options.len() - 1);
        Self { options, active }
    }

    /// Move the active marker. Out-of-range picks change nothing.
    pub fn select(&mut self, index: usize) -> Option<&T> {
        if index >= self.options.len() {
            return None;
        }
        self.active = index;
        Some(&self.options[index].1)
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn active_value(&self) -> &T {
        &self.options[self.active].1
    }

    /// Visible label of the active option.
    pub fn label(&self) -> &str {
        &self.options[self.active].0
    }

    pub fn is_active(&self, index: usize) -> bool {
        index == self.active
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.options.iter().map(|(label, _)| label.as_str())
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }
}

/// The user's current language, expiration and theme picks.
pub struct SelectionController {
    languages: ChoiceGroup<ContentType>,
    expirations: ChoiceGroup<ExpirationChoice>,
    theme: ThemePreference,
}

impl SelectionController {
    /// Starts on plain text, never expiring, and the given stored theme.
    pub fn new(theme: ThemePreference) -> Self {
        let languages = LANGUAGES
            .iter()
            .map(|(label, mime)| (label.to_string(), ContentType::new(*mime)))
            .collect();
        let expirations = ExpirationChoice::all()
            .iter()
            .map(|e| (e.display_name().to_string(), *e))
            .collect();

        Self {
            languages: ChoiceGroup::new(languages, 0),
            expirations: ChoiceGroup::new(expirations, 0),
            theme,
        }
    }

    /// Handle a language pick. Plain text is applied directly; everything
    /// else goes through the loader and may need a fetch.
    pub fn pick_language(
        &mut self,
        index: usize,
        loader: &mut ModeLoader,
        editor: &mut dyn EditorSession,
    ) -> Option<Activation> {
        let content_type = self.languages.select(index)?.clone();

        if content_type.is_plain() {
            loader.supersede();
            editor.set_mode(EditorMode::Plain);
            return Some(Activation::Applied);
        }

        Some(loader.activate(&content_type, editor))
    }

    pub fn pick_expiration(&mut self, index: usize) -> Option<ExpirationChoice> {
        self.expirations.select(index).copied()
    }

    pub fn toggle_theme<S: DurableKeyValueStore>(
        &mut self,
        persistence: &mut ThemePersistence<S>,
        editor: &mut dyn EditorSession,
        page: &mut dyn PageChrome,
    ) -> ThemePreference {
        self.theme = persistence.toggle(editor, page);
        self.theme
    }

    pub fn content_type(&self) -> &ContentType {
        self.languages.active_value()
    }

    pub fn expiration(&self) -> ExpirationChoice {
        *self.expirations.active_value()
    }

    pub fn theme(&self) -> ThemePreference {
        self.theme
    }

    pub fn languages(&self) -> &ChoiceGroup<ContentType> {
        &self.languages
    }

    pub fn expirations(&self) -> &ChoiceGroup<ExpirationChoice> {
        &self.expirations
    }

    pub fn language_label(&self) -> &str {
        self.languages.label()
    }

    pub fn expiration_label(&self) -> &str {
        self.expirations.label()
    }

    pub fn theme_label(&self) -> &'static str {
        self.theme.display_name()
    }
}
