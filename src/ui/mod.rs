pub mod editor_session;
pub mod main_window;
pub mod menu;
pub mod notifier;
pub mod theme;
