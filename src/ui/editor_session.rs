use fltk::{
    app::{self, Sender},
    enums::{Color, Font},
    prelude::*,
    text::{TextBuffer, TextEditor, WrapMode},
};

use crate::app::domain::editor::{EditorMode, EditorSession};
use crate::app::domain::messages::Message;
use crate::app::domain::theme::ThemePreference;
use crate::app::services::syntax::SyntaxHighlighter;

/// Edits are coalesced for this long before re-highlighting.
const REHIGHLIGHT_DELAY_SECS: f64 = 0.05;

/// FLTK text editor plus its syntect style buffer.
pub struct FltkEditorSession {
    editor: TextEditor,
    buffer: TextBuffer,
    style_buffer: TextBuffer,
    highlighter: SyntaxHighlighter,
    mode: EditorMode,
    theme: ThemePreference,
    /// Earliest edited position since the last re-highlight
    pending_rehighlight: Option<i32>,
    rehighlight_timer_active: bool,
}

impl FltkEditorSession {
    pub fn new(mut editor: TextEditor, theme: ThemePreference, font_size: i32) -> Self {
        let buffer = TextBuffer::default();
        let style_buffer = TextBuffer::default();
        editor.set_buffer(buffer.clone());
        editor.set_text_font(Font::Courier);
        editor.set_text_size(font_size);

        let mut session = Self {
            editor,
            buffer,
            style_buffer,
            highlighter: SyntaxHighlighter::new(theme, Font::Courier, font_size),
            mode: EditorMode::Plain,
            theme,
            pending_rehighlight: None,
            rehighlight_timer_active: false,
        };
        session.apply_colors();
        session.rehighlight();
        session
    }

    /// Keep the style buffer the same length as the text and report every
    /// edit as `Message::BufferModified(pos)`.
    pub fn watch_changes(&mut self, sender: &Sender<Message>) {
        let s = *sender;
        let mut style_buf = self.style_buffer.clone();
        self.buffer
            .add_modify_callback(move |pos, inserted, deleted, _restyled, _deleted_text| {
                if inserted > 0 || deleted > 0 {
                    if deleted > 0 {
                        style_buf.remove(pos, pos + deleted);
                    }
                    if inserted > 0 {
                        let filler: String = std::iter::repeat_n('A', inserted as usize).collect();
                        style_buf.insert(pos, &filler);
                    }
                    s.send(Message::BufferModified(pos));
                }
            });
    }

    /// Replace the whole buffer (file preload).
    pub fn set_text(&mut self, text: &str) {
        self.buffer.set_text(text);
        self.rehighlight();
    }

    /// Recompute the style buffer for the whole text.
    pub fn rehighlight(&mut self) {
        self.pending_rehighlight = None;
        let text = self.buffer.text();
        let styles = self.highlighter.highlight(&text);
        self.style_buffer.set_text(&styles);
        self.refresh_highlight();
    }

    /// Coalesce an edit at `pos`; the re-highlight runs once the edits pause.
    pub fn schedule_rehighlight(&mut self, pos: i32, sender: &Sender<Message>) {
        self.pending_rehighlight = Some(match self.pending_rehighlight {
            Some(existing) => existing.min(pos),
            None => pos,
        });

        if !self.rehighlight_timer_active {
            self.rehighlight_timer_active = true;
            let s = *sender;
            app::add_timeout3(REHIGHLIGHT_DELAY_SECS, move |_| {
                s.send(Message::DoRehighlight);
            });
        }
    }

    /// Re-highlight from the last checkpoint before the earliest pending edit.
    pub fn do_pending_rehighlight(&mut self) {
        self.rehighlight_timer_active = false;
        let Some(pos) = self.pending_rehighlight.take() else {
            return;
        };

        let pos = pos.clamp(0, self.buffer.length());
        let edit_line = self.buffer.count_lines(0, pos) as usize;
        let text = self.buffer.text();
        let (byte_start, styles) = self.highlighter.highlight_from(&text, edit_line);
        self.style_buffer
            .replace(byte_start as i32, self.style_buffer.length(), &styles);
        self.refresh_highlight();
    }

    fn refresh_highlight(&mut self) {
        self.editor
            .set_highlight_data(self.style_buffer.clone(), self.highlighter.style_table());
        self.editor.redraw();
    }

    pub fn set_line_numbers(&mut self, enabled: bool) {
        self.editor.set_linenumber_width(if enabled { 40 } else { 0 });
        self.editor.redraw();
    }

    pub fn set_word_wrap(&mut self, enabled: bool) {
        if enabled {
            self.editor.wrap_mode(WrapMode::AtBounds, 0);
        } else {
            self.editor.wrap_mode(WrapMode::None, 0);
        }
        self.editor.redraw();
    }

    pub fn focus(&mut self) {
        let _ = self.editor.take_focus();
    }

    fn apply_colors(&mut self) {
        let (r, g, b) = self.highlighter.theme_background();
        self.editor.set_color(Color::from_rgb(r, g, b));
        let (r, g, b) = self.highlighter.theme_foreground();
        self.editor.set_text_color(Color::from_rgb(r, g, b));

        if self.theme.is_dark() {
            self.editor.set_cursor_color(Color::from_rgb(255, 255, 255));
            self.editor.set_selection_color(Color::from_rgb(70, 70, 100));
            self.editor.set_linenumber_bgcolor(Color::from_rgb(40, 40, 40));
            self.editor.set_linenumber_fgcolor(Color::from_rgb(150, 150, 150));
        } else {
            self.editor.set_cursor_color(Color::Black);
            self.editor.set_selection_color(Color::from_rgb(173, 216, 230));
            self.editor.set_linenumber_bgcolor(Color::from_rgb(240, 240, 240));
            self.editor.set_linenumber_fgcolor(Color::from_rgb(100, 100, 100));
        }
    }
}

impl EditorSession for FltkEditorSession {
    fn text(&self) -> String {
        self.buffer.text()
    }

    fn mode(&self) -> &EditorMode {
        &self.mode
    }

    fn set_mode(&mut self, mode: EditorMode) {
        if mode == self.mode {
            return;
        }
        self.highlighter.apply_mode(&mode);
        self.mode = mode;
        self.rehighlight();
    }

    fn theme(&self) -> ThemePreference {
        self.theme
    }

    fn set_theme(&mut self, theme: ThemePreference) {
        if theme == self.theme {
            return;
        }
        self.theme = theme;
        self.highlighter.set_theme(theme);
        self.apply_colors();
        self.rehighlight();
    }
}
