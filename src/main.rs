#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

use std::path::PathBuf;

use clap::Parser;
use fltk::{app, dialog};

use paste_pad::app::domain::messages::Message;
use paste_pad::app::domain::settings::AppSettings;
use paste_pad::app::infrastructure::logging::init_logging;
use paste_pad::app::services::preferences::JsonFileStore;
use paste_pad::app::state::AppState;
use paste_pad::ui::main_window::build_main_window;

#[cfg(not(target_os = "windows"))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

#[derive(Parser, Debug)]
#[command(name = "PastePad")]
#[command(about = "Compose and publish pastes to a pastebin server")]
#[command(version)]
struct Cli {
    /// Pastebin server URL (overrides settings.json)
    #[arg(long)]
    server: Option<String>,

    /// Preselect a language by MIME type, e.g. text/x-rust
    #[arg(long)]
    mime: Option<String>,

    /// Prefill the paste title
    #[arg(long)]
    title: Option<String>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,

    /// File to load into the editor
    file: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let app = app::App::default();

    let mut settings = AppSettings::load();
    if let Some(server) = cli.server {
        settings.server_url = server;
    }
    if let Err(e) = settings.validate() {
        tracing::error!("Invalid settings: {}", e);
        dialog::alert_default(&format!("Invalid settings: {}", e));
        return;
    }
    tracing::info!(server = %settings.server_url, "starting");

    let (sender, receiver) = app::channel::<Message>();
    let widgets = build_main_window(&sender);

    let mut state = match AppState::new(widgets, sender, settings, JsonFileStore::default_location()) {
        Ok(state) => state,
        Err(e) => {
            tracing::error!("Startup failed: {}", e);
            dialog::alert_default(&format!("Startup failed: {}", e));
            return;
        }
    };

    if let Some(path) = cli.file.as_deref() {
        state.load_file(path);
    }
    if let Some(mime) = cli.mime.as_deref() {
        state.select_language_by_mime(mime);
    }
    if let Some(title) = cli.title.as_deref() {
        state.set_title(title);
    }
    state.show();

    while app.wait() {
        if let Some(msg) = receiver.recv() {
            match msg {
                Message::FileOpen => state.file_open(),
                Message::FileQuit => app.quit(),
                Message::PickLanguage(index) => state.pick_language(index),
                Message::PickExpiration(index) => state.pick_expiration(index),
                Message::ToggleTheme => state.toggle_theme(),
                Message::ToggleLineNumbers => state.toggle_line_numbers(),
                Message::ToggleWordWrap => state.toggle_word_wrap(),
                Message::Submit => state.submit(),
                Message::BufferModified(pos) => state.buffer_modified(pos),
                Message::DoRehighlight => state.do_rehighlight(),
                Message::DismissNotice(id) => state.dismiss_notice(id),
                Message::ModeFetched(ticket, result) => state.mode_fetched(ticket, result),
                Message::SubmissionFinished(outcome) => state.submission_finished(outcome),
            }
        }
    }
}
