use std::fs;
use std::path::Path;
use std::sync::Arc;
use std::thread;

use fltk::{app::Sender, dialog, prelude::*};

use super::controllers::selection::SelectionController;
use super::controllers::submission::SubmissionController;
use super::domain::content_type::language_index;
use super::domain::draft::SubmitOutcome;
use super::domain::editor::{PageChrome, SyntaxModule};
use super::domain::messages::Message;
use super::domain::notice::{Notice, NotificationSink};
use super::domain::settings::AppSettings;
use super::infrastructure::clock::MonotonicClock;
use super::infrastructure::error::{AppError, Result};
use super::infrastructure::navigator::BrowserNavigator;
use super::services::backend::{HttpBackend, PasteBackend};
use super::services::mode_loader::{Activation, HttpModeFetcher, LoadTicket, ModeFetcher, ModeLoader};
use super::services::preferences::{JsonFileStore, ThemePersistence};
use crate::ui::editor_session::FltkEditorSession;
use crate::ui::main_window::MainWidgets;
use crate::ui::menu::{build_menu, build_picker, sync_picker};
use crate::ui::notifier::BannerNotifier;
use crate::ui::theme::Chrome;

pub struct AppState {
    pub editor: FltkEditorSession,
    pub chrome: Chrome,
    pub notifier: BannerNotifier,
    pub sender: Sender<Message>,
    pub settings: AppSettings,
    selection: SelectionController,
    loader: ModeLoader,
    submission: SubmissionController,
    themes: ThemePersistence<JsonFileStore>,
    fetcher: Arc<dyn ModeFetcher>,
    backend: Arc<dyn PasteBackend>,
    navigator: BrowserNavigator,
    clock: MonotonicClock,
    /// Last directory used in the open dialog.
    last_open_directory: Option<String>,
}

impl AppState {
    pub fn new(
        widgets: MainWidgets,
        sender: Sender<Message>,
        settings: AppSettings,
        store: JsonFileStore,
    ) -> Result<Self> {
        let themes = ThemePersistence::new(store);
        let theme = themes.current();
        let selection = SelectionController::new(theme);

        let mut editor = FltkEditorSession::new(widgets.text_editor, theme, settings.font_size as i32);
        editor.watch_changes(&sender);
        editor.set_line_numbers(settings.line_numbers_enabled);
        editor.set_word_wrap(settings.word_wrap_enabled);

        let mut chrome = Chrome {
            window: widgets.wind.clone(),
            menu: widgets.menu,
            toolbar: widgets.toolbar,
        };
        build_menu(&mut chrome.menu, &sender, &settings);
        build_picker(&mut chrome.toolbar.language, selection.languages(), &sender, Message::PickLanguage);
        build_picker(&mut chrome.toolbar.expiration, selection.expirations(), &sender, Message::PickExpiration);
        chrome.toolbar.theme.set_label(selection.theme_label());
        chrome.set_theme(theme);

        let notifier = BannerNotifier::new(widgets.banner, widgets.flex, widgets.wind, sender);

        Ok(Self {
            editor,
            chrome,
            notifier,
            sender,
            navigator: BrowserNavigator::new(&settings.server_url)?,
            fetcher: Arc::new(HttpModeFetcher::new(&settings)),
            backend: Arc::new(HttpBackend::new(&settings)),
            submission: SubmissionController::new(settings.submit_interval_ms),
            settings,
            selection,
            loader: ModeLoader::new(),
            themes,
            clock: MonotonicClock::new(),
            last_open_directory: None,
        })
    }

    pub fn show(&mut self) {
        self.chrome.window.show();
        self.editor.focus();
    }

    // --- Selections ---

    pub fn pick_language(&mut self, index: usize) {
        let Some(activation) = self.selection.pick_language(index, &mut self.loader, &mut self.editor) else {
            return;
        };
        sync_picker(&mut self.chrome.toolbar.language, self.selection.languages());

        if let Activation::Pending(ticket) = activation {
            self.spawn_fetch(ticket);
        }
    }

    /// Preselect a language by MIME type (`--mime`).
    pub fn select_language_by_mime(&mut self, mime: &str) {
        match language_index(mime) {
            Some(index) => self.pick_language(index),
            None => tracing::warn!(mime, "unknown content type, keeping plain text"),
        }
    }

    pub fn pick_expiration(&mut self, index: usize) {
        if let Some(expiration) = self.selection.pick_expiration(index) {
            tracing::debug!(seconds = expiration.seconds(), "expiration picked");
            sync_picker(&mut self.chrome.toolbar.expiration, self.selection.expirations());
        }
    }

    pub fn toggle_theme(&mut self) {
        let theme = self.selection.toggle_theme(&mut self.themes, &mut self.editor, &mut self.chrome);
        tracing::debug!(theme = theme.display_name(), "theme toggled");
        self.chrome.toolbar.theme.set_label(self.selection.theme_label());
    }

    fn spawn_fetch(&self, ticket: LoadTicket) {
        let fetcher = Arc::clone(&self.fetcher);
        let s = self.sender;
        thread::spawn(move || {
            let result = fetcher.fetch(ticket.module);
            s.send(Message::ModeFetched(ticket, result));
        });
    }

    pub fn mode_fetched(&mut self, ticket: LoadTicket, result: std::result::Result<SyntaxModule, AppError>) {
        let module = ticket.module;
        if self.loader.complete(ticket, result, &mut self.editor) {
            tracing::debug!(module, "syntax module applied");
        }
    }

    // --- Submission ---

    pub fn submit(&mut self) {
        let title = self.chrome.toolbar.title.value();
        let Ok(draft) = self.submission.submit(
            &self.clock,
            &self.editor,
            &title,
            &self.selection,
            &mut self.notifier,
        ) else {
            return;
        };

        let backend = Arc::clone(&self.backend);
        let s = self.sender;
        thread::spawn(move || {
            let outcome = backend.submit(&draft);
            s.send(Message::SubmissionFinished(outcome));
        });
    }

    pub fn submission_finished(&mut self, outcome: SubmitOutcome) {
        self.submission.finish(outcome, &mut self.navigator, &mut self.notifier);
    }

    pub fn set_title(&mut self, title: &str) {
        self.chrome.toolbar.title.set_value(title);
    }

    // --- Editor ---

    pub fn buffer_modified(&mut self, pos: i32) {
        self.editor.schedule_rehighlight(pos, &self.sender);
    }

    pub fn do_rehighlight(&mut self) {
        self.editor.do_pending_rehighlight();
    }

    pub fn dismiss_notice(&mut self, id: u64) {
        self.notifier.dismiss(id);
    }

    pub fn toggle_line_numbers(&mut self) {
        self.settings.line_numbers_enabled = !self.settings.line_numbers_enabled;
        self.editor.set_line_numbers(self.settings.line_numbers_enabled);
        self.save_view_settings();
    }

    pub fn toggle_word_wrap(&mut self) {
        self.settings.word_wrap_enabled = !self.settings.word_wrap_enabled;
        self.editor.set_word_wrap(self.settings.word_wrap_enabled);
        self.save_view_settings();
    }

    /// Persist only the view toggles; CLI overrides stay out of the file.
    fn save_view_settings(&self) {
        let mut stored = AppSettings::load();
        stored.line_numbers_enabled = self.settings.line_numbers_enabled;
        stored.word_wrap_enabled = self.settings.word_wrap_enabled;
        if let Err(e) = stored.save() {
            tracing::warn!("Failed to save settings: {}", e);
        }
    }

    // --- File operations ---

    pub fn file_open(&mut self) {
        let dir = self.last_open_directory.as_deref().unwrap_or(".");
        if let Some(path) = dialog::file_chooser("Open File", "*", dir, false) {
            self.load_file(Path::new(&path));
        }
    }

    /// Replace the editor text with the contents of `path`.
    pub fn load_file(&mut self, path: &Path) {
        if let Some(parent) = path.parent() {
            self.last_open_directory = Some(parent.to_string_lossy().to_string());
        }
        match fs::read_to_string(path) {
            Ok(content) => {
                tracing::info!(path = %path.display(), bytes = content.len(), "file loaded");
                self.editor.set_text(&content);
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), "could not read file: {}", e);
                self.notifier
                    .notify(Notice::error(&format!("Could not open {}: {}", path.display(), e)));
            }
        }
    }
}
