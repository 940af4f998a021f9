use fltk::{
    enums::Color,
    menu::MenuBar,
    prelude::*,
    window::Window,
};

use super::main_window::Toolbar;
use crate::app::domain::editor::PageChrome;
use crate::app::domain::theme::ThemePreference;

/// Everything around the editor that follows the color scheme.
pub struct Chrome {
    pub window: Window,
    pub menu: MenuBar,
    pub toolbar: Toolbar,
}

impl PageChrome for Chrome {
    fn set_theme(&mut self, theme: ThemePreference) {
        apply_theme(&mut self.window, &mut self.menu, &mut self.toolbar, theme.is_dark());
    }
}

pub fn apply_theme(window: &mut Window, menu: &mut MenuBar, toolbar: &mut Toolbar, is_dark: bool) {
    let (bg, fg, widget_bg, hover) = if is_dark {
        (
            Color::from_rgb(25, 25, 25),
            Color::from_rgb(220, 220, 220),
            Color::from_rgb(35, 35, 35),
            Color::from_rgb(60, 60, 60),
        )
    } else {
        (
            Color::from_rgb(240, 240, 240),
            Color::Black,
            Color::from_rgb(240, 240, 240),
            Color::from_rgb(200, 200, 200),
        )
    };

    window.set_color(bg);
    window.set_label_color(fg);
    menu.set_color(widget_bg);
    menu.set_text_color(fg);
    menu.set_selection_color(hover);

    toolbar.row.set_color(bg);
    for button in [&mut toolbar.language, &mut toolbar.expiration] {
        button.set_color(widget_bg);
        button.set_label_color(fg);
        button.set_text_color(fg);
        button.set_selection_color(hover);
    }
    toolbar.theme.set_color(widget_bg);
    toolbar.theme.set_label_color(fg);
    toolbar.theme.set_selection_color(hover);
    toolbar.submit.set_label_color(Color::White);
    toolbar.title_label.set_label_color(fg);
    toolbar.title.set_color(if is_dark { Color::from_rgb(45, 45, 45) } else { Color::White });
    toolbar.title.set_text_color(fg);
    toolbar.title.set_cursor_color(fg);

    window.redraw();
}
