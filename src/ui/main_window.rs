use fltk::{
    app::{self, Sender},
    button::Button,
    enums::{Align, Color, Event, FrameType},
    frame::Frame,
    group::{Flex, FlexType},
    input::Input,
    menu::{MenuBar, MenuButton},
    prelude::*,
    text::TextEditor,
    window::Window,
};

use crate::app::domain::messages::Message;

pub const WINDOW_TITLE: &str = "PastePad";

/// Row of paste controls between the menu bar and the editor.
pub struct Toolbar {
    pub row: Flex,
    pub language: MenuButton,
    pub expiration: MenuButton,
    pub title_label: Frame,
    pub title: Input,
    pub theme: Button,
    pub submit: Button,
}

pub struct MainWidgets {
    pub wind: Window,
    pub flex: Flex,
    pub menu: MenuBar,
    pub toolbar: Toolbar,
    pub banner: Frame,
    pub text_editor: TextEditor,
}

pub fn build_main_window(sender: &Sender<Message>) -> MainWidgets {
    let mut wind = Window::new(100, 100, 800, 600, WINDOW_TITLE);
    wind.set_xclass("PastePad");

    let mut flex = Flex::new(0, 0, 800, 600, None);
    flex.set_type(FlexType::Column);

    let menu = MenuBar::new(0, 0, 0, 30, "");
    flex.fixed(&menu, 30);

    let toolbar = build_toolbar(sender);
    flex.fixed(&toolbar.row, 34);

    // Notification banner (initially hidden)
    let mut banner = Frame::default().with_size(0, 0);
    banner.set_frame(FrameType::FlatBox);
    banner.set_label_size(13);
    banner.set_align(Align::Left | Align::Inside);
    banner.hide();
    flex.fixed(&banner, 0);

    let text_editor = TextEditor::new(0, 0, 0, 0, "");

    flex.end();
    wind.resizable(&flex);
    wind.end();

    // Closing the window goes through the dispatch loop like File/Quit;
    // Escape must not close it and lose the paste.
    let s = *sender;
    wind.set_callback(move |_| {
        if app::event() == Event::Close {
            s.send(Message::FileQuit);
        }
    });

    MainWidgets {
        wind,
        flex,
        menu,
        toolbar,
        banner,
        text_editor,
    }
}

fn build_toolbar(sender: &Sender<Message>) -> Toolbar {
    let mut row = Flex::new(0, 0, 0, 34, None);
    row.set_type(FlexType::Row);
    row.set_margin(2);
    row.set_pad(4);

    let language = MenuButton::default();
    row.fixed(&language, 160);

    let expiration = MenuButton::default();
    row.fixed(&expiration, 120);

    let mut title_label = Frame::default().with_label("Title:");
    title_label.set_align(Align::Right | Align::Inside);
    row.fixed(&title_label, 40);

    let mut title = Input::default();
    title.set_tooltip("Optional paste title");

    let mut theme = Button::default();
    theme.set_tooltip("Toggle dark / light theme");
    row.fixed(&theme, 80);
    let s = *sender;
    theme.set_callback(move |_| s.send(Message::ToggleTheme));

    let mut submit = Button::default().with_label("Paste!");
    submit.set_tooltip("Publish (Ctrl+Enter)");
    submit.set_color(Color::from_rgb(46, 125, 50));
    row.fixed(&submit, 90);
    let s = *sender;
    submit.set_callback(move |_| s.send(Message::Submit));

    row.end();

    Toolbar {
        row,
        language,
        expiration,
        title_label,
        title,
        theme,
        submit,
    }
}
