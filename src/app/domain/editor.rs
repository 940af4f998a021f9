use std::sync::Arc;

use super::content_type::ContentType;
use super::theme::ThemePreference;

/// A syntax module downloaded from the asset host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxModule {
    pub name: String,
    /// sublime-syntax definition
    pub source: Arc<str>,
}

/// Rendering mode currently applied to the editor.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EditorMode {
    #[default]
    Plain,
    Builtin {
        content_type: ContentType,
        syntax: &'static str,
    },
    Loaded {
        content_type: ContentType,
        module: SyntaxModule,
    },
}

impl EditorMode {
    pub fn content_type(&self) -> Option<&ContentType> {
        match self {
            Self::Plain => None,
            Self::Builtin { content_type, .. } | Self::Loaded { content_type, .. } => {
                Some(content_type)
            }
        }
    }
}

/// The text surface the user types into.
///
/// Mode and theme changes apply synchronously and never touch the network.
pub trait EditorSession {
    /// Current buffer, verbatim. Empty when nothing was typed.
    fn text(&self) -> String;
    fn mode(&self) -> &EditorMode;
    fn set_mode(&mut self, mode: EditorMode);
    fn theme(&self) -> ThemePreference;
    fn set_theme(&mut self, theme: ThemePreference);
}

/// Window chrome around the editor (background, toolbars).
pub trait PageChrome {
    fn set_theme(&mut self, theme: ThemePreference);
}
