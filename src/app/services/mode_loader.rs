use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use std::time::Duration;

use crate::app::domain::content_type::{self, ContentType, ModeSource};
use crate::app::domain::editor::{EditorMode, EditorSession, SyntaxModule};
use crate::app::domain::settings::AppSettings;
use crate::app::infrastructure::error::{AppError, Result};

/// Downloads syntax modules. Runs on worker threads.
pub trait ModeFetcher: Send + Sync {
    fn fetch(&self, module: &str) -> Result<SyntaxModule>;
}

/// Fetches `<server><mode_asset_path>/<module>.sublime-syntax`.
pub struct HttpModeFetcher {
    settings: AppSettings,
    timeout: Duration,
}

impl HttpModeFetcher {
    pub fn new(settings: &AppSettings) -> Self {
        Self {
            settings: settings.clone(),
            timeout: Duration::from_secs(settings.request_timeout_secs),
        }
    }
}

impl ModeFetcher for HttpModeFetcher {
    fn fetch(&self, module: &str) -> Result<SyntaxModule> {
        let url = self.settings.module_url(module);
        tracing::debug!(%url, "fetching syntax module");

        let response = minreq::get(&url)
            .with_header("User-Agent", "PastePad")
            .with_timeout(self.timeout.as_secs())
            .send()?;

        if !(200..300).contains(&response.status_code) {
            return Err(AppError::ModeLoad {
                module: module.to_string(),
                status: response.status_code,
            });
        }

        Ok(SyntaxModule {
            name: module.to_string(),
            source: Arc::from(response.as_str()?),
        })
    }
}

/// Handle for a module fetch that is in flight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadTicket {
    pub content_type: ContentType,
    pub module: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Activation {
    /// The editor mode was set synchronously.
    Applied,
    /// The caller must fetch `ticket.module` and hand the result to [`ModeLoader::complete`].
    Pending(LoadTicket),
    /// The module is already being fetched; its completion applies this mode.
    InFlight,
}

/// Activates syntax modes, fetching modules the first time they are needed.
///
/// Only the most recent activation may be waiting for a module. A fetch that
/// completes for anything else still fills the cache but leaves the editor
/// alone, so the most recently requested mode is the one that sticks. Each
/// module is fetched at most once at a time.
#[derive(Default)]
pub struct ModeLoader {
    cache: HashMap<&'static str, SyntaxModule>,
    in_flight: HashSet<&'static str>,
    /// Latest activation still waiting for its module
    waiting: Option<LoadTicket>,
}

impl ModeLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn activate(&mut self, content_type: &ContentType, editor: &mut dyn EditorSession) -> Activation {
        self.waiting = None;

        match content_type::resolve(content_type) {
            ModeSource::Fallback => {
                editor.set_mode(EditorMode::Plain);
                Activation::Applied
            }
            ModeSource::Builtin(syntax) => {
                editor.set_mode(EditorMode::Builtin {
                    content_type: content_type.clone(),
                    syntax,
                });
                Activation::Applied
            }
            ModeSource::Module(name) => {
                if let Some(module) = self.cache.get(name) {
                    tracing::debug!(module = name, "syntax module already loaded");
                    editor.set_mode(EditorMode::Loaded {
                        content_type: content_type.clone(),
                        module: module.clone(),
                    });
                    return Activation::Applied;
                }

                let ticket = LoadTicket {
                    content_type: content_type.clone(),
                    module: name,
                };
                self.waiting = Some(ticket.clone());
                if self.in_flight.insert(name) {
                    Activation::Pending(ticket)
                } else {
                    tracing::debug!(module = name, "syntax module fetch already running");
                    Activation::InFlight
                }
            }
        }
    }

    /// Drop the waiting activation without activating anything. Used when
    /// the editor is switched to plain text directly.
    pub fn supersede(&mut self) {
        self.waiting = None;
    }

    /// Apply a finished fetch. Returns true if the editor mode changed.
    pub fn complete(
        &mut self,
        ticket: LoadTicket,
        result: Result<SyntaxModule>,
        editor: &mut dyn EditorSession,
    ) -> bool {
        self.in_flight.remove(ticket.module);

        let module = match result {
            Ok(module) => module,
            Err(e) => {
                tracing::warn!(module = ticket.module, "syntax module unavailable: {}", e);
                if self.waiting.as_ref().is_some_and(|w| w.module == ticket.module) {
                    self.waiting = None;
                }
                return false;
            }
        };

        let module = self.cache.entry(ticket.module).or_insert(module).clone();

        let Some(waiting) = self.waiting.take_if(|w| w.module == ticket.module) else {
            tracing::debug!(
                module = ticket.module,
                content_type = %ticket.content_type,
                "ignoring superseded syntax module"
            );
            return false;
        };

        editor.set_mode(EditorMode::Loaded {
            content_type: waiting.content_type,
            module,
        });
        true
    }

    pub fn is_loaded(&self, module: &str) -> bool {
        self.cache.contains_key(module)
    }

    pub fn is_fetching(&self, module: &str) -> bool {
        self.in_flight.contains(module)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::test_support::RecordingEditor;

    fn module(name: &str) -> SyntaxModule {
        SyntaxModule {
            name: name.to_string(),
            source: Arc::from("%YAML 1.2\n---\nname: Test\nscope: source.test\ncontexts:\n  main: []\n"),
        }
    }

    fn pending(activation: Activation) -> LoadTicket {
        match activation {
            Activation::Pending(ticket) => ticket,
            other => panic!("expected a pending load, got {:?}", other),
        }
    }

    #[test]
    fn test_plain_is_applied_without_fetch() {
        let mut loader = ModeLoader::new();
        let mut editor = RecordingEditor::default();
        let activation = loader.activate(&ContentType::plain(), &mut editor);
        assert_eq!(activation, Activation::Applied);
        assert_eq!(editor.mode, EditorMode::Plain);
    }

    #[test]
    fn test_unknown_type_falls_back_to_plain() {
        let mut loader = ModeLoader::new();
        let mut editor = RecordingEditor::default();
        let activation = loader.activate(&ContentType::new("text/x-cobol"), &mut editor);
        assert_eq!(activation, Activation::Applied);
        assert_eq!(editor.mode, EditorMode::Plain);
    }

    #[test]
    fn test_builtin_is_applied_without_fetch() {
        let mut loader = ModeLoader::new();
        let mut editor = RecordingEditor::default();
        let ct = ContentType::new("text/generic");
        assert_eq!(loader.activate(&ct, &mut editor), Activation::Applied);
        assert_eq!(
            editor.mode,
            EditorMode::Builtin { content_type: ct, syntax: "JavaScript" }
        );
    }

    #[test]
    fn test_module_applied_only_after_successful_load() {
        let mut loader = ModeLoader::new();
        let mut editor = RecordingEditor::default();
        let ct = ContentType::new("text/x-python");

        let ticket = pending(loader.activate(&ct, &mut editor));
        assert_eq!(ticket.module, "python");
        assert!(editor.mode_history.is_empty());

        assert!(loader.complete(ticket, Ok(module("python")), &mut editor));
        assert_eq!(editor.mode().content_type(), Some(&ct));
        assert!(matches!(editor.mode(), EditorMode::Loaded { module, .. } if module.name == "python"));
        assert!(loader.is_loaded("python"));
    }

    #[test]
    fn test_failed_load_leaves_mode_unchanged() {
        let mut loader = ModeLoader::new();
        let mut editor = RecordingEditor::default();
        let ticket = pending(loader.activate(&ContentType::new("text/x-go"), &mut editor));

        let err = AppError::ModeLoad { module: "go".to_string(), status: 404 };
        assert!(!loader.complete(ticket, Err(err), &mut editor));
        assert_eq!(editor.mode, EditorMode::Plain);
        assert!(editor.mode_history.is_empty());
        assert!(!loader.is_loaded("go"));
    }

    #[test]
    fn test_cached_module_applies_immediately() {
        let mut loader = ModeLoader::new();
        let mut editor = RecordingEditor::default();
        let ct = ContentType::new("text/x-rust");
        let ticket = pending(loader.activate(&ct, &mut editor));
        loader.complete(ticket, Ok(module("rust")), &mut editor);

        loader.activate(&ContentType::plain(), &mut editor);
        assert_eq!(loader.activate(&ct, &mut editor), Activation::Applied);
        assert_eq!(editor.mode.content_type(), Some(&ct));
    }

    #[test]
    fn test_shared_module_reused_across_content_types() {
        let mut loader = ModeLoader::new();
        let mut editor = RecordingEditor::default();
        let ticket = pending(loader.activate(&ContentType::new("text/x-java"), &mut editor));
        loader.complete(ticket, Ok(module("clike")), &mut editor);

        let kotlin = ContentType::new("text/x-kotlin");
        assert_eq!(loader.activate(&kotlin, &mut editor), Activation::Applied);
        assert_eq!(editor.mode.content_type(), Some(&kotlin));
    }

    #[test]
    fn test_last_requested_wins_over_last_completed() {
        let mut loader = ModeLoader::new();
        let mut editor = RecordingEditor::default();
        let python = ContentType::new("text/x-python");
        let ruby = ContentType::new("text/x-ruby");

        let first = pending(loader.activate(&python, &mut editor));
        let second = pending(loader.activate(&ruby, &mut editor));

        // Ruby finishes first, python arrives late
        assert!(loader.complete(second, Ok(module("ruby")), &mut editor));
        assert!(!loader.complete(first, Ok(module("python")), &mut editor));

        assert_eq!(editor.mode.content_type(), Some(&ruby));
        assert_eq!(editor.mode_history.len(), 1);
        // The late module is still cached for next time
        assert!(loader.is_loaded("python"));
    }

    #[test]
    fn test_supersede_discards_pending_load() {
        let mut loader = ModeLoader::new();
        let mut editor = RecordingEditor::default();
        let ticket = pending(loader.activate(&ContentType::new("text/x-sql"), &mut editor));
        loader.supersede();
        assert!(!loader.complete(ticket, Ok(module("sql")), &mut editor));
        assert_eq!(editor.mode, EditorMode::Plain);
    }

    #[test]
    fn test_repeat_pick_joins_running_fetch() {
        let mut loader = ModeLoader::new();
        let mut editor = RecordingEditor::default();
        let rust = ContentType::new("text/x-rust");

        let ticket = pending(loader.activate(&rust, &mut editor));
        assert!(loader.is_fetching("rust"));
        assert_eq!(loader.activate(&rust, &mut editor), Activation::InFlight);

        assert!(loader.complete(ticket, Ok(module("rust")), &mut editor));
        assert!(!loader.is_fetching("rust"));
        assert_eq!(editor.mode().content_type(), Some(&rust));
        assert_eq!(editor.mode_history.len(), 1);
    }

    #[test]
    fn test_joined_fetch_applies_latest_content_type() {
        let mut loader = ModeLoader::new();
        let mut editor = RecordingEditor::default();
        let java = ContentType::new("text/x-java");
        let kotlin = ContentType::new("text/x-kotlin");

        let ticket = pending(loader.activate(&java, &mut editor));
        assert_eq!(loader.activate(&kotlin, &mut editor), Activation::InFlight);

        assert!(loader.complete(ticket, Ok(module("clike")), &mut editor));
        assert_eq!(editor.mode().content_type(), Some(&kotlin));
    }

    #[test]
    fn test_back_to_pending_language_applies_it() {
        let mut loader = ModeLoader::new();
        let mut editor = RecordingEditor::default();
        let python = ContentType::new("text/x-python");
        let ruby = ContentType::new("text/x-ruby");

        let python_ticket = pending(loader.activate(&python, &mut editor));
        let ruby_ticket = pending(loader.activate(&ruby, &mut editor));
        assert_eq!(loader.activate(&python, &mut editor), Activation::InFlight);

        assert!(loader.complete(python_ticket, Ok(module("python")), &mut editor));
        assert!(!loader.complete(ruby_ticket, Ok(module("ruby")), &mut editor));
        assert_eq!(editor.mode().content_type(), Some(&python));
    }

    #[test]
    fn test_failed_fetch_can_be_retried() {
        let mut loader = ModeLoader::new();
        let mut editor = RecordingEditor::default();
        let go = ContentType::new("text/x-go");

        let ticket = pending(loader.activate(&go, &mut editor));
        let err = AppError::Http("connection reset".to_string());
        assert!(!loader.complete(ticket, Err(err), &mut editor));

        let retry = pending(loader.activate(&go, &mut editor));
        assert!(loader.complete(retry, Ok(module("go")), &mut editor));
        assert_eq!(editor.mode().content_type(), Some(&go));
    }
}
