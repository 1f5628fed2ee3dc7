/// Game mode detection from the sidebar scoreboard
///
/// The chat start banner hints at the mode, but the authoritative source is
/// the sidebar, which the server populates shortly after the game begins.
/// This detector is armed on game start (and on rejoin after a client
/// restart), waits a short settle delay, then scans the sidebar on each
/// tick until a mode marker is found.
use crate::game::GameMode;
use crate::world::ScoreboardView;

/// Ticks to wait after arming before reading the sidebar, giving the
/// server time to populate it (one second at the client's 20 Hz tick rate)
const SETTLE_TICKS: u32 = 20;

/// Periodic sidebar scanner for the current game's mode
#[derive(Debug, Default)]
pub struct ModeDetector {
    armed: bool,
    settle_ticks: u32,
}

impl ModeDetector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }

    /// Arm the detector; the next polls will scan the sidebar
    pub fn start(&mut self) {
        self.armed = true;
        self.settle_ticks = SETTLE_TICKS;
    }

    /// Disarm without detecting (the client left the game)
    pub fn stop(&mut self) {
        self.armed = false;
    }

    /// Poll once per tick. Returns the detected mode once, then disarms.
    pub fn poll(&mut self, scoreboard: &dyn ScoreboardView) -> Option<GameMode> {
        if !self.armed {
            return None;
        }
        if self.settle_ticks > 0 {
            self.settle_ticks -= 1;
            return None;
        }
        let mode = Self::scan(scoreboard)?;
        self.armed = false;
        tracing::info!(?mode, "game mode detected");
        Some(mode)
    }

    fn scan(scoreboard: &dyn ScoreboardView) -> Option<GameMode> {
        let mut texts = scoreboard.sidebar_lines();
        if let Some(title) = scoreboard.sidebar_title() {
            texts.push(title);
        }
        for mode in GameMode::DETECTION_ORDER {
            if texts.iter().any(|text| text.contains(mode.scoreboard_marker())) {
                return Some(mode);
            }
        }
        None
    }
}
