/// Lệnh UI gửi xuống chat worker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatCommand {
    /// Raw input text; the worker trims it and ignores blank input.
    Send(String),
    /// Wipe persisted history and the transcript (already confirmed by the user).
    Clear,
    /// Write the history log to the export directory.
    Export,
}
