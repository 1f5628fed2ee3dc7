/// Raw host signals
///
/// Everything the tracker learns about the world arrives as one of these,
/// delivered serially and processed in arrival order.

/// One signal from the host client
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawSignal {
    /// The client is logging into a server at this address
    LoginAttempt { server_address: String },

    /// The client disconnected from the current server
    Logout,

    /// A new screen was opened; `is_loading_screen` marks the terrain
    /// loading screen shown while transferring between servers
    ScreenTransition { is_loading_screen: bool },

    /// A chat line, flattened to plain characters with formatting codes
    /// kept inline
    ChatLine { text: String },

    /// Periodic client tick
    Tick,
}

/// Session-level events the orchestrator reports back to its caller
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// A new game started; the tracker will be created once the mode is
    /// detected from the sidebar
    MatchStarted { mode_hint: Option<crate::game::GameMode> },

    /// Rejoined a game with no surviving tracker (client was restarted);
    /// mode detection has been re-armed
    RejoinedAfterRestart,

    /// Rejoined the same game; the existing tracker is kept
    Rejoined,

    /// Left the current game
    Left,

    /// The sidebar scan resolved the game's mode and a tracker now exists
    ModeDetected(crate::game::GameMode),

    /// The client is being transferred into an in-progress game
    JoiningInProgressGame,

    /// A pending transfer was cancelled
    TransferCancelled,
}

impl SessionEvent {
    /// Human-readable description, for logs and status lines
    pub fn description(&self) -> String {
        match self {
            SessionEvent::MatchStarted { mode_hint: Some(mode) } => {
                format!("Game started ({})", mode.display_name())
            }
            SessionEvent::MatchStarted { mode_hint: None } => "Game started".to_string(),
            SessionEvent::RejoinedAfterRestart => {
                "Rejoined game after client restart".to_string()
            }
            SessionEvent::Rejoined => "Rejoined game".to_string(),
            SessionEvent::Left => "Left game".to_string(),
            SessionEvent::ModeDetected(mode) => {
                format!("Detected mode: {}", mode.display_name())
            }
            SessionEvent::JoiningInProgressGame => {
                "Joining an in-progress game".to_string()
            }
            SessionEvent::TransferCancelled => "Transfer cancelled".to_string(),
        }
    }
}
