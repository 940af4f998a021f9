use fltk::{
    app::Sender,
    enums::{Key, Shortcut},
    menu::{MenuBar, MenuButton, MenuFlag},
    prelude::*,
};

use crate::app::controllers::selection::ChoiceGroup;
use crate::app::domain::messages::Message;
use crate::app::domain::settings::AppSettings;

pub fn build_menu(menu: &mut MenuBar, sender: &Sender<Message>, settings: &AppSettings) {
    let s = sender;

    // File
    menu.add("File/Open...", Shortcut::Ctrl | 'o', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::FileOpen) });
    menu.add("File/Quit", Shortcut::Ctrl | 'q', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::FileQuit) });

    // Paste
    menu.add("Paste/Submit", Shortcut::Ctrl | Key::Enter, MenuFlag::Normal, { let s = *s; move |_| s.send(Message::Submit) });

    // View
    menu.add("View/Toggle Theme", Shortcut::Ctrl | 't', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::ToggleTheme) });
    let ln_flag = if settings.line_numbers_enabled { MenuFlag::Toggle | MenuFlag::Value } else { MenuFlag::Toggle };
    menu.add("View/Toggle Line Numbers", Shortcut::None, ln_flag, { let s = *s; move |_| s.send(Message::ToggleLineNumbers) });
    let ww_flag = if settings.word_wrap_enabled { MenuFlag::Toggle | MenuFlag::Value } else { MenuFlag::Toggle };
    menu.add("View/Toggle Word Wrap", Shortcut::None, ww_flag, { let s = *s; move |_| s.send(Message::ToggleWordWrap) });
}

/// Fill a picker with one radio item per option. `on_pick` builds the
/// message sent for the picked index.
pub fn build_picker<T>(
    button: &mut MenuButton,
    group: &ChoiceGroup<T>,
    sender: &Sender<Message>,
    on_pick: fn(usize) -> Message,
) {
    for (index, label) in group.labels().enumerate() {
        let s = *sender;
        button.add(label, Shortcut::None, MenuFlag::Radio, move |_| s.send(on_pick(index)));
    }
    sync_picker(button, group);
}

/// Move the radio mark and the button label to the group's active option.
pub fn sync_picker<T>(button: &mut MenuButton, group: &ChoiceGroup<T>) {
    for index in 0..group.len() {
        if let Some(mut item) = button.at(index as i32) {
            if group.is_active(index) {
                item.set();
            } else {
                item.clear();
            }
        }
    }
    button.set_label(group.label());
    button.redraw();
}
