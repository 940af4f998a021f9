use fltk::{
    app::{self, Sender},
    enums::Color,
    frame::Frame,
    group::Flex,
    prelude::*,
    window::Window,
};

use crate::app::domain::messages::Message;
use crate::app::domain::notice::{Notice, NoticeKind, NotificationSink};

const BANNER_HEIGHT: i32 = 30;

/// Shows notices in a banner above the editor and hides each one when its
/// time is up, unless a newer notice replaced it.
pub struct BannerNotifier {
    banner: Frame,
    flex: Flex,
    window: Window,
    sender: Sender<Message>,
    current: u64,
}

impl BannerNotifier {
    pub fn new(banner: Frame, flex: Flex, window: Window, sender: Sender<Message>) -> Self {
        Self {
            banner,
            flex,
            window,
            sender,
            current: 0,
        }
    }

    /// Hide the banner if notice `id` is still the one on screen.
    pub fn dismiss(&mut self, id: u64) {
        if id != self.current || !self.banner.visible() {
            return;
        }
        self.banner.hide();
        self.flex.fixed(&self.banner, 0);
        self.window.redraw();
    }
}

impl NotificationSink for BannerNotifier {
    fn notify(&mut self, notice: Notice) {
        self.current += 1;

        let (bg, fg) = match notice.kind {
            NoticeKind::Error => (Color::from_rgb(180, 50, 50), Color::White),
            NoticeKind::Info => (Color::from_rgb(50, 100, 180), Color::White),
        };
        self.banner.set_color(bg);
        self.banner.set_label_color(fg);
        // '@' starts an FLTK symbol in labels
        self.banner.set_label(&format!("  {}", notice.text.replace('@', "@@")));
        self.banner.show();
        self.flex.fixed(&self.banner, BANNER_HEIGHT);
        self.window.redraw();

        let s = self.sender;
        let id = self.current;
        app::add_timeout3(notice.duration.as_secs_f64(), move |_| {
            s.send(Message::DismissNotice(id));
        });
    }
}
