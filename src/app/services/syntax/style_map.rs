use std::collections::HashMap;

use fltk::enums::{Color, Font};
use fltk::text::StyleTableEntry;
use syntect::highlighting::Color as SyntectColor;

/// Style char used for unhighlighted text.
pub const DEFAULT_STYLE: char = 'A';

/// Maps syntect RGB colors to FLTK style characters ('A', 'B', 'C', ...).
/// Builds the StyleTableEntry table as new colors are encountered.
pub struct StyleMap {
    color_to_char: HashMap<(u8, u8, u8), char>,
    entries: Vec<StyleTableEntry>,
    default_color: Color,
    font: Font,
    font_size: i32,
}

impl StyleMap {
    pub fn new(font: Font, font_size: i32) -> Self {
        let mut map = Self {
            color_to_char: HashMap::new(),
            entries: Vec::new(),
            default_color: Color::Foreground,
            font,
            font_size,
        };
        map.reset_default();
        map
    }

    fn reset_default(&mut self) {
        self.entries.push(StyleTableEntry {
            color: self.default_color,
            font: self.font,
            size: self.font_size,
        });
        self.color_to_char.insert((0, 0, 0), DEFAULT_STYLE);
    }

    /// Get the style character for a syntect color, inserting a new entry if needed.
    pub fn get_or_insert(&mut self, color: SyntectColor) -> char {
        let key = (color.r, color.g, color.b);
        if let Some(&ch) = self.color_to_char.get(&key) {
            return ch;
        }

        let idx = self.entries.len();
        // Past 'Z' every remaining color shares the last slot
        if idx >= 26 {
            return 'Z';
        }
        let ch = (b'A' + idx as u8) as char;
        self.entries.push(StyleTableEntry {
            color: Color::from_rgb(color.r, color.g, color.b),
            font: self.font,
            size: self.font_size,
        });
        self.color_to_char.insert(key, ch);
        ch
    }

    /// Color of unhighlighted text.
    pub fn set_default_color(&mut self, color: Color) {
        self.default_color = color;
        if let Some(entry) = self.entries.first_mut() {
            entry.color = color;
        }
    }

    pub fn entries(&self) -> &[StyleTableEntry] {
        &self.entries
    }

    /// Drop all colors (theme change).
    pub fn clear(&mut self) {
        self.color_to_char.clear();
        self.entries.clear();
        self.reset_default();
    }
}
