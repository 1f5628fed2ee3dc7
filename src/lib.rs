//! Bed Wars match tracker
//!
//! Reconstructs the live state of a Bed Wars game session purely from the
//! client's external signals: formatted chat lines, login/logout and
//! screen-transition notifications, and periodic ticks. Lines can arrive
//! late, be missed entirely while the client is detached, or reuse
//! vocabulary from unrelated lobbies, so the tracker is built around
//! best-effort reconciliation rather than exact bookkeeping.
//!
//! ## Architecture
//!
//! ```text
//! host adapter ──RawSignal──> Orchestrator
//!                               ├── ConnectionMonitor   (on the service?)
//!                               ├── PhaseDetector       (in a game?)
//!                               ├── ChatClassifier      (line -> token)
//!                               ├── TransferDetector    (in-progress joins)
//!                               ├── ModeDetector        (sidebar scan)
//!                               └── Option<MatchTracker> (forge, upgrades,
//!                                                         trap queue)
//! renderer <──OverlaySnapshot── polled once per frame
//! ```
//!
//! Processing is strictly serial: the queue reconciliation algorithms are
//! only correct when signals are applied in arrival order.

pub mod classify;
pub mod config;
pub mod connection;
pub mod error;
pub mod feed;
pub mod game;
pub mod mode_detect;
pub mod orchestrator;
pub mod overlay;
pub mod phase;
pub mod signal;
pub mod world;

pub use classify::{ChatClassifier, ChatToken, TeamUpgrade};
pub use config::OverlayConfig;
pub use connection::ConnectionMonitor;
pub use error::{AppResult, ConfigError, PreconditionError};
pub use feed::{drive, signal_channel, SharedOverlay, SignalSender};
pub use game::{CountedTrap, ForgeLevel, GameMode, MatchTracker, TrapType, MAX_TRAPS};
pub use mode_detect::ModeDetector;
pub use orchestrator::Orchestrator;
pub use overlay::OverlaySnapshot;
pub use phase::{MatchPhase, PhaseDetector, PhaseEvent};
pub use signal::{RawSignal, SessionEvent};
pub use world::{GeneratorLookup, LocationHandle, ScoreboardView, WorldView};
