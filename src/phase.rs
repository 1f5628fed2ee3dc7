/// Match phase state machine
///
/// Tracks whether the client is inside a Bed Wars game. The machine is
/// driven by classified chat tokens, screen transitions, and logout
/// signals, and emits an event for every transition it makes. It runs for
/// the lifetime of the session; there is no terminal state.
use crate::classify::ChatToken;
use crate::game::GameMode;

/// Whether the client is currently in a game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchPhase {
    NotInMatch,
    InMatch,
}

impl Default for MatchPhase {
    fn default() -> Self {
        MatchPhase::NotInMatch
    }
}

/// Transition emitted by the phase detector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhaseEvent {
    /// A new game started while the client was in the lobby
    MatchStart { mode_hint: Option<GameMode> },
    /// The client rejoined a game it was in before
    Rejoin,
    /// The client left the game (lobby screen or disconnect)
    Leave,
}

/// Phase state machine
#[derive(Debug, Default)]
pub struct PhaseDetector {
    phase: MatchPhase,
}

impl PhaseDetector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> MatchPhase {
        self.phase
    }

    pub fn is_in_match(&self) -> bool {
        self.phase == MatchPhase::InMatch
    }

    /// Feed one classified chat token. Start and rejoin banners only count
    /// while the client is connected to the service and not already in a
    /// game.
    pub fn on_chat(&mut self, connected: bool, token: &ChatToken) -> Option<PhaseEvent> {
        if !connected || self.is_in_match() {
            return None;
        }
        match token {
            ChatToken::MatchStart { mode_hint } => {
                self.phase = MatchPhase::InMatch;
                tracing::info!(?mode_hint, "game started");
                Some(PhaseEvent::MatchStart {
                    mode_hint: *mode_hint,
                })
            }
            ChatToken::Rejoin => {
                self.phase = MatchPhase::InMatch;
                tracing::info!("client rejoined a game");
                Some(PhaseEvent::Rejoin)
            }
            _ => None,
        }
    }

    /// Feed a screen transition. The terrain-loading screen while in a
    /// game means the client is being moved back to a lobby.
    pub fn on_screen_transition(&mut self, is_loading_screen: bool) -> Option<PhaseEvent> {
        if self.is_in_match() && is_loading_screen {
            self.phase = MatchPhase::NotInMatch;
            tracing::info!("client left the game (loading screen)");
            return Some(PhaseEvent::Leave);
        }
        None
    }

    /// Feed a logout. No screen transition is delivered on disconnect, so
    /// logout must force the leave transition on its own.
    pub fn on_logout(&mut self) -> Option<PhaseEvent> {
        if self.is_in_match() {
            self.phase = MatchPhase::NotInMatch;
            tracing::info!("client left the game (disconnected)");
            return Some(PhaseEvent::Leave);
        }
        None
    }
}
