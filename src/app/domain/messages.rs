use crate::app::domain::draft::SubmitOutcome;
use crate::app::domain::editor::SyntaxModule;
use crate::app::infrastructure::error::AppError;
use crate::app::services::mode_loader::LoadTicket;

/// All messages that can be sent through the FLTK channel.
/// Widget callbacks and worker threads send one of these; the dispatch loop in main handles them.
#[derive(Debug)]
pub enum Message {
    // File
    FileOpen,
    FileQuit,

    // Selections
    PickLanguage(usize),
    PickExpiration(usize),
    ToggleTheme,

    // View
    ToggleLineNumbers,
    ToggleWordWrap,

    // Paste
    Submit,
    /// Text edited at this byte position
    BufferModified(i32),
    DoRehighlight,
    DismissNotice(u64),

    // Worker results
    ModeFetched(LoadTicket, Result<SyntaxModule, AppError>),
    SubmissionFinished(SubmitOutcome),
}
