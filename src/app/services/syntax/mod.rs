mod checkpoint;
mod style_map;

use std::collections::HashMap;

use fltk::enums::Font;
use fltk::text::StyleTableEntry;
use syntect::highlighting::{HighlightIterator, HighlightState, Highlighter, ThemeSet};
use syntect::parsing::{ParseState, ScopeStack, SyntaxDefinition, SyntaxSet};
use syntect::util::LinesWithEndings;

use checkpoint::SparseCheckpoints;
use style_map::{DEFAULT_STYLE, StyleMap};

use crate::app::domain::editor::{EditorMode, SyntaxModule};
use crate::app::domain::theme::ThemePreference;
use crate::app::infrastructure::error::{AppError, Result};

/// syntect-backed highlighter whose syntax set grows as modules are loaded.
pub struct SyntaxHighlighter {
    syntax_set: SyntaxSet,
    theme_set: ThemeSet,
    theme_name: String,
    style_map: StyleMap,
    /// module name -> syntax name inside `syntax_set`
    installed: HashMap<String, String>,
    active_syntax: Option<String>,
    checkpoints: SparseCheckpoints,
}

impl SyntaxHighlighter {
    pub fn new(theme: ThemePreference, font: Font, font_size: i32) -> Self {
        let mut highlighter = Self {
            syntax_set: SyntaxSet::load_defaults_newlines(),
            theme_set: ThemeSet::load_defaults(),
            theme_name: theme.syntax_theme_key().to_string(),
            style_map: StyleMap::new(font, font_size),
            installed: HashMap::new(),
            active_syntax: None,
            checkpoints: SparseCheckpoints::new(),
        };
        highlighter.sync_default_color();
        highlighter
    }

    /// Parse a downloaded module and add it to the syntax set.
    /// Returns the syntax name it registered.
    pub fn install_module(&mut self, module: &SyntaxModule) -> Result<String> {
        if let Some(name) = self.installed.get(&module.name) {
            return Ok(name.clone());
        }

        let definition = SyntaxDefinition::load_from_str(&module.source, true, Some(&module.name))
            .map_err(|e| AppError::Syntax(format!("{}: {}", module.name, e)))?;
        let name = definition.name.clone();

        let mut builder = self.syntax_set.clone().into_builder();
        builder.add(definition);
        self.syntax_set = builder.build();

        self.installed.insert(module.name.clone(), name.clone());
        Ok(name)
    }

    /// Select the syntax used by [`Self::highlight`]. Modules that fail to
    /// parse leave the text unhighlighted.
    pub fn apply_mode(&mut self, mode: &EditorMode) {
        self.checkpoints.clear();
        self.active_syntax = match mode {
            EditorMode::Plain => None,
            EditorMode::Builtin { syntax, .. } => self
                .syntax_set
                .find_syntax_by_name(syntax)
                .map(|s| s.name.clone()),
            EditorMode::Loaded { module, .. } => match self.install_module(module) {
                Ok(name) => Some(name),
                Err(e) => {
                    tracing::warn!("{}", e);
                    None
                }
            },
        };
    }

    pub fn active_syntax(&self) -> Option<&str> {
        self.active_syntax.as_deref()
    }

    /// One style char per byte of `text`. Also records the checkpoints
    /// [`Self::highlight_from`] resumes from.
    pub fn highlight(&mut self, text: &str) -> String {
        self.checkpoints.clear();
        self.highlight_lines(text, 0, None)
            .unwrap_or_else(|| make_default_style(text))
    }

    /// Re-highlight after an edit on `edit_line` (0-indexed). Parsing resumes
    /// at the last checkpoint at or before that line. Returns the byte offset
    /// where the new styles start and the styles from there to the end.
    pub fn highlight_from(&mut self, text: &str, edit_line: usize) -> (usize, String) {
        if self.checkpoints.is_empty() {
            return (0, self.highlight(text));
        }

        let idx = SparseCheckpoints::checkpoint_index(edit_line).min(self.checkpoints.len() - 1);
        let start_line = SparseCheckpoints::checkpoint_line(idx);
        let (Some(byte_start), Some(resume)) = (line_offset(text, start_line), self.checkpoints.get(idx))
        else {
            // Text shrank past the checkpoint
            return (0, self.highlight(text));
        };

        self.checkpoints.truncate_after(idx);
        match self.highlight_lines(&text[byte_start..], start_line, Some(resume)) {
            Some(styles) => (byte_start, styles),
            None => (0, make_default_style(text)),
        }
    }

    /// Highlight `text`, whose first line is line `start_line` of the
    /// document, pushing a checkpoint at every new checkpoint line.
    fn highlight_lines(
        &mut self,
        text: &str,
        start_line: usize,
        resume: Option<(ParseState, HighlightState)>,
    ) -> Option<String> {
        let syntax = self
            .active_syntax
            .as_deref()
            .and_then(|name| self.syntax_set.find_syntax_by_name(name))?;
        let theme = self.theme_set.themes.get(&self.theme_name)?;

        let highlighter = Highlighter::new(theme);
        let (mut parse_state, mut highlight_state) = resume.unwrap_or_else(|| {
            (
                ParseState::new(syntax),
                HighlightState::new(&highlighter, ScopeStack::new()),
            )
        });
        let mut style_string = String::with_capacity(text.len());

        for (i, line) in LinesWithEndings::from(text).enumerate() {
            let line_idx = start_line + i;
            if SparseCheckpoints::is_checkpoint_line(line_idx)
                && SparseCheckpoints::checkpoint_index(line_idx) >= self.checkpoints.len()
            {
                self.checkpoints.push(parse_state.clone(), highlight_state.clone());
            }

            let ops = parse_state.parse_line(line, &self.syntax_set).unwrap_or_default();
            let iter = HighlightIterator::new(&mut highlight_state, &ops, line, &highlighter);
            for (style, piece) in iter {
                let ch = self.style_map.get_or_insert(style.foreground);
                // One style char per byte (not per char) for UTF-8 correctness
                for _ in 0..piece.len() {
                    style_string.push(ch);
                }
            }
        }

        Some(style_string)
    }

    /// Switch to a specific theme. Clears the style map.
    pub fn set_theme(&mut self, theme: ThemePreference) {
        self.theme_name = theme.syntax_theme_key().to_string();
        self.style_map.clear();
        self.checkpoints.clear();
        self.sync_default_color();
    }

    fn sync_default_color(&mut self) {
        let (r, g, b) = self.theme_foreground();
        self.style_map.set_default_color(fltk::enums::Color::from_rgb(r, g, b));
    }

    /// Get the background color of the current theme as RGB tuple.
    pub fn theme_background(&self) -> (u8, u8, u8) {
        if let Some(theme) = self.theme_set.themes.get(&self.theme_name)
            && let Some(bg) = theme.settings.background
        {
            return (bg.r, bg.g, bg.b);
        }
        (255, 255, 255)
    }

    /// Get the foreground color of the current theme as RGB tuple.
    pub fn theme_foreground(&self) -> (u8, u8, u8) {
        if let Some(theme) = self.theme_set.themes.get(&self.theme_name)
            && let Some(fg) = theme.settings.foreground
        {
            return (fg.r, fg.g, fg.b);
        }
        (0, 0, 0)
    }

    /// Get the style table for FLTK's set_highlight_data.
    pub fn style_table(&self) -> Vec<StyleTableEntry> {
        self.style_map.entries().to_vec()
    }
}

/// Byte offset of the start of line `line`, if the text has that many lines.
fn line_offset(text: &str, line: usize) -> Option<usize> {
    if line == 0 {
        return Some(0);
    }
    text.match_indices('\n').nth(line - 1).map(|(i, _)| i + 1)
}

fn make_default_style(text: &str) -> String {
    std::iter::repeat_n(DEFAULT_STYLE, text.len()).collect()
}
