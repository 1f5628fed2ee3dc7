/// In-progress game transfer detection
///
/// The server announces in chat when the client is about to be moved into a
/// game that is already running, and again if that transfer is cancelled.
/// These prompts are handled separately from normal classification because
/// they drive tracker lifecycle, not match state.

/// Prompt shown when the client is being sent to an in-progress game
const IN_PROGRESS_PROMPT: &str = "\u{a7}eSending you to an in-progress game of \u{a7}r";

/// Prompt shown when a pending transfer is cancelled
const CANCELLED_PROMPT: &str = "\u{a7}c\u{a7}lTeleport cancelled!\u{a7}r";

/// Transfer-related meaning of a chat line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransferSignal {
    /// The client will join a game already in progress
    JoinInProgress,
    /// The pending transfer was cancelled
    Cancelled,
}

/// Detects transfer prompts in chat lines
#[derive(Debug, Default)]
pub struct TransferDetector;

impl TransferDetector {
    pub fn new() -> Self {
        Self
    }

    /// Check one chat line for a transfer prompt
    pub fn detect(&self, line: &str) -> Option<TransferSignal> {
        if line.contains(IN_PROGRESS_PROMPT) {
            Some(TransferSignal::JoinInProgress)
        } else if line.contains(CANCELLED_PROMPT) {
            Some(TransferSignal::Cancelled)
        } else {
            None
        }
    }
}
