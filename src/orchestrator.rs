/// Signal orchestration
///
/// Owns every long-lived tracking component and the single live
/// [`MatchTracker`] slot, and dispatches each raw signal to them in a fixed
/// order. All processing is serial; no other component may hold a lasting
/// reference to the tracker.
///
/// ```text
/// RawSignal
///   ├── LoginAttempt / Logout ──> ConnectionMonitor, PhaseDetector
///   ├── ScreenTransition ───────> PhaseDetector
///   ├── ChatLine ──> ChatClassifier ──> PhaseDetector
///   │                            └────> TransferDetector
///   │                            └────> MatchTracker (while in a game)
///   └── Tick ──> ModeDetector (sidebar scan) ──> creates MatchTracker
/// ```
use crate::classify::{ChatClassifier, TransferDetector, TransferSignal};
use crate::connection::ConnectionMonitor;
use crate::error::PreconditionError;
use crate::game::MatchTracker;
use crate::mode_detect::ModeDetector;
use crate::overlay::OverlaySnapshot;
use crate::phase::{PhaseDetector, PhaseEvent};
use crate::signal::{RawSignal, SessionEvent};
use crate::world::{GeneratorLookup, ScoreboardView};

pub struct Orchestrator {
    classifier: ChatClassifier,
    transfer: TransferDetector,
    connection: ConnectionMonitor,
    phase: PhaseDetector,
    mode_detector: ModeDetector,
    /// The single live tracker. Created when the mode detector resolves a
    /// game's mode, kept across a disconnect-and-rejoin of the same game,
    /// cleared when the client moves on to a different game.
    tracker: Option<MatchTracker>,
    /// Set while a transfer into an in-progress game is pending: the
    /// current tracker belongs to the old game and must be dropped when
    /// the rejoin prompt confirms the transfer.
    clear_tracker_on_rejoin: bool,
}

impl Orchestrator {
    pub fn new() -> Self {
        Self {
            classifier: ChatClassifier::new(),
            transfer: TransferDetector::new(),
            connection: ConnectionMonitor::new(),
            phase: PhaseDetector::new(),
            mode_detector: ModeDetector::new(),
            tracker: None,
            clear_tracker_on_rejoin: false,
        }
    }

    pub fn is_connected(&self) -> bool {
        self.connection.is_connected()
    }

    pub fn is_in_match(&self) -> bool {
        self.phase.is_in_match()
    }

    /// Whether a game is currently being tracked. Callers must check this
    /// (or match on the query results) before relying on match state.
    pub fn has_tracker(&self) -> bool {
        self.tracker.is_some()
    }

    /// Direct read access to the live tracker, for callers that checked
    /// liveness already
    pub fn tracker(&self) -> Option<&MatchTracker> {
        self.tracker.as_ref()
    }

    /// Checked variant of [`Self::tracker`]
    pub fn require_tracker(&self) -> Result<&MatchTracker, PreconditionError> {
        self.tracker.as_ref().ok_or(PreconditionError::NoLiveTracker)
    }

    /// Capture the overlay snapshot for this frame, or `None` while no
    /// game is being tracked
    pub fn overlay(&mut self, world: &dyn GeneratorLookup) -> Option<OverlaySnapshot> {
        self.tracker
            .as_mut()
            .map(|tracker| OverlaySnapshot::capture(tracker, world))
    }

    /// Process one raw signal. Signals must arrive in order; the queue
    /// reconciliation in the tracker depends on it.
    pub fn handle(
        &mut self,
        signal: &RawSignal,
        scoreboard: &dyn ScoreboardView,
    ) -> Option<SessionEvent> {
        match signal {
            RawSignal::LoginAttempt { server_address } => {
                self.connection.on_login(server_address);
                None
            }
            RawSignal::Logout => {
                self.connection.on_logout();
                let event = self.phase.on_logout();
                self.apply_phase_event(event)
            }
            RawSignal::ScreenTransition { is_loading_screen } => {
                let event = self.phase.on_screen_transition(*is_loading_screen);
                self.apply_phase_event(event)
            }
            RawSignal::ChatLine { text } => self.on_chat_line(text),
            RawSignal::Tick => self.on_tick(scoreboard),
        }
    }

    fn on_chat_line(&mut self, text: &str) -> Option<SessionEvent> {
        let token = self.classifier.classify(text);
        let phase_event = self.phase.on_chat(self.connection.is_connected(), &token);
        if let Some(event) = self.apply_phase_event(phase_event) {
            return Some(event);
        }
        if let Some(signal) = self.transfer.detect(text) {
            return Some(self.apply_transfer_signal(signal));
        }
        if self.phase.is_in_match() {
            if let Some(tracker) = self.tracker.as_mut() {
                tracker.apply(&token);
            }
        }
        None
    }

    fn on_tick(&mut self, scoreboard: &dyn ScoreboardView) -> Option<SessionEvent> {
        let mode = self.mode_detector.poll(scoreboard)?;
        self.tracker = Some(MatchTracker::new(mode));
        Some(SessionEvent::ModeDetected(mode))
    }

    fn apply_phase_event(&mut self, event: Option<PhaseEvent>) -> Option<SessionEvent> {
        match event? {
            PhaseEvent::MatchStart { mode_hint } => {
                // A fresh game: whatever was tracked before is unreachable
                // now, and the sidebar will tell us the new mode
                self.tracker = None;
                self.clear_tracker_on_rejoin = false;
                self.mode_detector.start();
                Some(SessionEvent::MatchStarted { mode_hint })
            }
            PhaseEvent::Rejoin => {
                if self.clear_tracker_on_rejoin {
                    self.tracker = None;
                    self.clear_tracker_on_rejoin = false;
                }
                if self.tracker.is_none() {
                    // No surviving tracker: the client was restarted (or
                    // transferred), so the mode must be detected again
                    self.mode_detector.start();
                    Some(SessionEvent::RejoinedAfterRestart)
                } else {
                    Some(SessionEvent::Rejoined)
                }
            }
            PhaseEvent::Leave => {
                // The tracker is kept: the client may rejoin this game
                self.mode_detector.stop();
                Some(SessionEvent::Left)
            }
        }
    }

    fn apply_transfer_signal(&mut self, signal: TransferSignal) -> SessionEvent {
        match signal {
            TransferSignal::JoinInProgress => {
                if self.phase.is_in_match() {
                    // Still counted as in a game; drop the old tracker
                    // once the rejoin prompt confirms the transfer
                    self.clear_tracker_on_rejoin = true;
                } else {
                    self.tracker = None;
                }
                SessionEvent::JoiningInProgressGame
            }
            TransferSignal::Cancelled => {
                self.clear_tracker_on_rejoin = false;
                SessionEvent::TransferCancelled
            }
        }
    }

    /// Feed a classified token straight to the live tracker, bypassing
    /// classification. Test seam; production input goes through
    /// [`Self::handle`].
    #[cfg(test)]
    fn apply_token(&mut self, token: &crate::classify::ChatToken) {
        if let Some(tracker) = self.tracker.as_mut() {
            tracker.apply(token);
        }
    }
}

impl Default for Orchestrator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::ChatToken;
    use crate::game::{ForgeLevel, GameMode, TrapType};

    struct FixedScoreboard(&'static str);

    impl ScoreboardView for FixedScoreboard {
        fn sidebar_title(&self) -> Option<String> {
            Some(self.0.to_string())
        }

        fn sidebar_lines(&self) -> Vec<String> {
            Vec::new()
        }
    }

    struct EmptyScoreboard;

    impl ScoreboardView for EmptyScoreboard {
        fn sidebar_title(&self) -> Option<String> {
            None
        }

        fn sidebar_lines(&self) -> Vec<String> {
            Vec::new()
        }
    }

    fn chat(text: &str) -> RawSignal {
        RawSignal::ChatLine {
            text: text.to_string(),
        }
    }

    /// Log in and run a game start to the point where the tracker exists
    fn start_tracked_game(orch: &mut Orchestrator, board: &FixedScoreboard) {
        orch.handle(
            &RawSignal::LoginAttempt {
                server_address: "mc.hypixel.net".to_string(),
            },
            &EmptyScoreboard,
        );
        let started = orch.handle(&chat("\u{a7}f\u{a7}lBed Wars\u{a7}r"), &EmptyScoreboard);
        assert!(matches!(started, Some(SessionEvent::MatchStarted { .. })));
        let detected = tick_until_detected(orch, board);
        assert!(detected.is_some());
    }

    fn tick_until_detected(
        orch: &mut Orchestrator,
        board: &FixedScoreboard,
    ) -> Option<SessionEvent> {
        for _ in 0..64 {
            if let Some(event) = orch.handle(&RawSignal::Tick, board) {
                return Some(event);
            }
        }
        None
    }

    #[test]
    fn test_match_start_creates_tracker_via_mode_detection() {
        let mut orch = Orchestrator::new();
        let board = FixedScoreboard("BED WARS");

        start_tracked_game(&mut orch, &board);

        assert!(orch.is_in_match());
        let tracker = orch.require_tracker().unwrap();
        assert_eq!(tracker.mode(), GameMode::Ordinary);
        assert_eq!(tracker.forge_level(), ForgeLevel::Ordinary);
        assert!(tracker.traps().is_empty());
    }

    #[test]
    fn test_start_banner_ignored_when_not_connected() {
        let mut orch = Orchestrator::new();
        let event = orch.handle(&chat("\u{a7}f\u{a7}lBed Wars\u{a7}r"), &EmptyScoreboard);
        assert_eq!(event, None);
        assert!(!orch.is_in_match());
    }

    #[test]
    fn test_chat_updates_tracker_while_in_match() {
        let mut orch = Orchestrator::new();
        let board = FixedScoreboard("BED WARS");
        start_tracked_game(&mut orch, &board);

        orch.handle(
            &chat("Your team reached \u{a7}r\u{a7}6Iron Forge\u{a7}r"),
            &EmptyScoreboard,
        );
        orch.handle(
            &chat("You purchased \u{a7}r\u{a7}6Alarm Trap\u{a7}r"),
            &EmptyScoreboard,
        );

        let tracker = orch.tracker().unwrap();
        assert_eq!(tracker.forge_level(), ForgeLevel::Iron);
        assert_eq!(tracker.traps()[0].trap_type, TrapType::Alarm);
    }

    #[test]
    fn test_disconnect_and_rejoin_keeps_tracker() {
        let mut orch = Orchestrator::new();
        let board = FixedScoreboard("BED WARS");
        start_tracked_game(&mut orch, &board);
        orch.apply_token(&ChatToken::ForgeLevelReached(ForgeLevel::Golden));

        let left = orch.handle(&RawSignal::Logout, &EmptyScoreboard);
        assert_eq!(left, Some(SessionEvent::Left));
        assert!(!orch.is_in_match());
        assert!(orch.has_tracker());

        orch.handle(
            &RawSignal::LoginAttempt {
                server_address: "mc.hypixel.net".to_string(),
            },
            &EmptyScoreboard,
        );
        let rejoined = orch.handle(
            &chat("\u{a7}e\u{a7}lTo leave Bed Wars, type /lobby\u{a7}r"),
            &EmptyScoreboard,
        );

        assert_eq!(rejoined, Some(SessionEvent::Rejoined));
        assert!(orch.is_in_match());
        assert_eq!(
            orch.tracker().unwrap().forge_level(),
            ForgeLevel::Golden
        );
    }

    #[test]
    fn test_rejoin_without_tracker_rearms_mode_detection() {
        let mut orch = Orchestrator::new();
        orch.handle(
            &RawSignal::LoginAttempt {
                server_address: "mc.hypixel.net".to_string(),
            },
            &EmptyScoreboard,
        );

        let rejoined = orch.handle(
            &chat("\u{a7}e\u{a7}lTo leave Bed Wars, type /lobby\u{a7}r"),
            &EmptyScoreboard,
        );
        assert_eq!(rejoined, Some(SessionEvent::RejoinedAfterRestart));

        let board = FixedScoreboard("BED WARS RUSH");
        let detected = tick_until_detected(&mut orch, &board);
        assert_eq!(detected, Some(SessionEvent::ModeDetected(GameMode::Rush)));
        assert_eq!(orch.tracker().unwrap().mode(), GameMode::Rush);
    }

    #[test]
    fn test_in_progress_transfer_rebuilds_tracker_on_rejoin() {
        let mut orch = Orchestrator::new();
        let board = FixedScoreboard("BED WARS");
        start_tracked_game(&mut orch, &board);

        let transferring = orch.handle(
            &chat("\u{a7}eSending you to an in-progress game of \u{a7}rBed Wars"),
            &EmptyScoreboard,
        );
        assert_eq!(transferring, Some(SessionEvent::JoiningInProgressGame));
        // Old tracker survives until the transfer is confirmed
        assert!(orch.has_tracker());

        orch.handle(
            &RawSignal::ScreenTransition {
                is_loading_screen: true,
            },
            &EmptyScoreboard,
        );
        let rejoined = orch.handle(
            &chat("\u{a7}e\u{a7}lTo leave Bed Wars, type /lobby\u{a7}r"),
            &EmptyScoreboard,
        );

        assert_eq!(rejoined, Some(SessionEvent::RejoinedAfterRestart));
        assert!(!orch.has_tracker());
    }

    #[test]
    fn test_cancelled_transfer_keeps_tracker_on_rejoin() {
        let mut orch = Orchestrator::new();
        let board = FixedScoreboard("BED WARS");
        start_tracked_game(&mut orch, &board);

        orch.handle(
            &chat("\u{a7}eSending you to an in-progress game of \u{a7}rBed Wars"),
            &EmptyScoreboard,
        );
        let cancelled = orch.handle(
            &chat("\u{a7}c\u{a7}lTeleport cancelled!\u{a7}r"),
            &EmptyScoreboard,
        );
        assert_eq!(cancelled, Some(SessionEvent::TransferCancelled));

        orch.handle(&RawSignal::Logout, &EmptyScoreboard);
        orch.handle(
            &RawSignal::LoginAttempt {
                server_address: "mc.hypixel.net".to_string(),
            },
            &EmptyScoreboard,
        );
        let rejoined = orch.handle(
            &chat("\u{a7}e\u{a7}lTo leave Bed Wars, type /lobby\u{a7}r"),
            &EmptyScoreboard,
        );

        assert_eq!(rejoined, Some(SessionEvent::Rejoined));
        assert!(orch.has_tracker());
    }

    #[test]
    fn test_new_game_start_drops_previous_tracker() {
        let mut orch = Orchestrator::new();
        let board = FixedScoreboard("BED WARS");
        start_tracked_game(&mut orch, &board);
        orch.apply_token(&ChatToken::ForgeLevelReached(ForgeLevel::Molten));

        orch.handle(
            &RawSignal::ScreenTransition {
                is_loading_screen: true,
            },
            &EmptyScoreboard,
        );
        orch.handle(&chat("\u{a7}f\u{a7}lBed Wars\u{a7}r"), &EmptyScoreboard);
        assert!(!orch.has_tracker());

        tick_until_detected(&mut orch, &board);
        assert_eq!(
            orch.tracker().unwrap().forge_level(),
            ForgeLevel::Ordinary
        );
    }

    #[test]
    fn test_query_without_tracker_is_a_precondition_violation() {
        let orch = Orchestrator::new();
        assert_eq!(
            orch.require_tracker().err(),
            Some(PreconditionError::NoLiveTracker)
        );
    }
}
