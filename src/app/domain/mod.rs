//! Domain layer - core data structures and types.
//!
//! This module contains the fundamental domain models:
//! - Content types and the syntax mode registry
//! - Expiration choices, theme preference, paste drafts
//! - Editor and notification capabilities
//! - Application settings
//! - Message types for the event system

pub mod content_type;
pub mod draft;
pub mod editor;
pub mod expiration;
pub mod messages;
pub mod notice;
pub mod settings;
pub mod theme;

pub use content_type::{ContentType, LANGUAGES, ModeSource};
pub use draft::{PasteDraft, SubmitOutcome};
pub use editor::{EditorMode, EditorSession, PageChrome, SyntaxModule};
pub use expiration::ExpirationChoice;
pub use messages::Message;
pub use notice::{Notice, NoticeKind, NotificationSink};
pub use settings::AppSettings;
pub use theme::ThemePreference;
