/// Signal feed and shared overlay
///
/// Host adapters produce [`RawSignal`]s from whichever thread their hooks
/// fire on; a channel funnels them into one driving loop that feeds the
/// orchestrator strictly in arrival order. The latest overlay snapshot is
/// republished on every tick for the renderer to poll.
use std::sync::Arc;

use crossbeam_channel::{unbounded, Receiver, Sender};
use parking_lot::RwLock;

use crate::orchestrator::Orchestrator;
use crate::overlay::OverlaySnapshot;
use crate::signal::{RawSignal, SessionEvent};
use crate::world::WorldView;

/// Create the signal channel. The sender side is cheap to clone and hand
/// to every host hook.
pub fn signal_channel() -> (SignalSender, Receiver<RawSignal>) {
    let (tx, rx) = unbounded();
    (SignalSender { tx }, rx)
}

/// Producer handle for raw signals
#[derive(Clone)]
pub struct SignalSender {
    tx: Sender<RawSignal>,
}

impl SignalSender {
    /// Send one signal. Returns false if the driving loop has shut down.
    pub fn send(&self, signal: RawSignal) -> bool {
        self.tx.send(signal).is_ok()
    }

    pub fn login_attempt(&self, server_address: impl Into<String>) -> bool {
        self.send(RawSignal::LoginAttempt {
            server_address: server_address.into(),
        })
    }

    pub fn logout(&self) -> bool {
        self.send(RawSignal::Logout)
    }

    pub fn screen_transition(&self, is_loading_screen: bool) -> bool {
        self.send(RawSignal::ScreenTransition { is_loading_screen })
    }

    pub fn chat_line(&self, text: impl Into<String>) -> bool {
        self.send(RawSignal::ChatLine { text: text.into() })
    }

    pub fn tick(&self) -> bool {
        self.send(RawSignal::Tick)
    }
}

/// Latest overlay snapshot, shared between the driving loop and the
/// renderer. `None` while no game is being tracked.
#[derive(Clone, Default)]
pub struct SharedOverlay {
    inner: Arc<RwLock<Option<OverlaySnapshot>>>,
}

impl SharedOverlay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Latest snapshot, cloned out so the renderer never holds the lock
    /// across a frame
    pub fn latest(&self) -> Option<OverlaySnapshot> {
        self.inner.read().clone()
    }

    fn publish(&self, snapshot: Option<OverlaySnapshot>) {
        *self.inner.write() = snapshot;
    }
}

/// Drain the signal channel into the orchestrator until every sender is
/// dropped. Session events are logged; the overlay is refreshed once per
/// tick, matching the renderer's polling cadence.
pub fn drive<W: WorldView>(
    orchestrator: &mut Orchestrator,
    signals: &Receiver<RawSignal>,
    world: &W,
    overlay: &SharedOverlay,
) {
    for signal in signals.iter() {
        if let Some(event) = orchestrator.handle(&signal, world) {
            tracing::info!(event = %event.description(), "session event");
            if event == SessionEvent::Left {
                overlay.publish(None);
            }
        }
        if signal == RawSignal::Tick {
            overlay.publish(orchestrator.overlay(world));
        }
    }
    tracing::debug!("signal feed closed, driving loop exiting");
}
