/// Trap types and the team's trap queue
///
/// The queue is a best-effort reconstruction of the server-side trap slots.
/// Chat observations can be missed while the client is detached, so both
/// mutation paths prefer evicting stale entries over rejecting input.
use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

/// Maximum number of traps a team can have in the trap queue
pub const MAX_TRAPS: usize = 3;

/// Kinds of traps a team can purchase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TrapType {
    Ordinary,
    Counter,
    Alarm,
    MinerFatigue,
}

impl TrapType {
    /// All trap kinds, in chat prompt scan order
    pub const ALL: [TrapType; 4] = [
        TrapType::Ordinary,
        TrapType::Counter,
        TrapType::Alarm,
        TrapType::MinerFatigue,
    ];

    /// Part of the chat prompt shown when the team purchases this trap
    pub fn purchase_prompt(self) -> &'static str {
        match self {
            TrapType::Ordinary => "\u{a7}r\u{a7}6It's a trap!\u{a7}r",
            TrapType::Counter => "\u{a7}r\u{a7}6Counter-Offensive Trap\u{a7}r",
            TrapType::Alarm => "\u{a7}r\u{a7}6Alarm Trap\u{a7}r",
            TrapType::MinerFatigue => "\u{a7}r\u{a7}6Miner Fatigue Trap\u{a7}r",
        }
    }

    /// Part of the chat prompt shown when this trap is set off
    pub fn set_off_prompt(self) -> &'static str {
        match self {
            TrapType::Ordinary => "\u{a7}cIt's a trap!",
            TrapType::Counter => "\u{a7}cCounter-Offensive Trap",
            TrapType::Alarm => "\u{a7}cAlarm Trap",
            TrapType::MinerFatigue => "\u{a7}cMiner Fatigue Trap",
        }
    }

    /// Plain display name for the overlay
    pub fn display_name(self) -> &'static str {
        match self {
            TrapType::Ordinary => "It's a trap!",
            TrapType::Counter => "Counter-Offensive Trap",
            TrapType::Alarm => "Alarm Trap",
            TrapType::MinerFatigue => "Miner Fatigue Trap",
        }
    }
}

/// A queued trap together with the number of times it can still fire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountedTrap {
    pub trap_type: TrapType,
    pub remaining_uses: u32,
}

impl CountedTrap {
    pub fn new(trap_type: TrapType, uses: u32) -> Self {
        Self {
            trap_type,
            remaining_uses: uses,
        }
    }

    /// Record one firing of this trap
    fn set_off(&mut self) {
        self.remaining_uses = self.remaining_uses.saturating_sub(1);
    }

    fn is_used_up(&self) -> bool {
        self.remaining_uses == 0
    }
}

/// Ordered, bounded FIFO of the team's queued traps.
///
/// Length never exceeds [`MAX_TRAPS`]. An over-capacity purchase or a
/// mismatched set-off is treated as proof of observations missed while the
/// client was detached, never as invalid input.
#[derive(Debug, Clone, Default)]
pub struct TrapQueue {
    traps: VecDeque<CountedTrap>,
}

impl TrapQueue {
    pub fn new() -> Self {
        Self {
            traps: VecDeque::with_capacity(MAX_TRAPS),
        }
    }

    /// Create a queue pre-seeded with a game mode's starting traps
    pub fn from_initial(initial: &[CountedTrap]) -> Self {
        let mut queue = Self::new();
        for trap in initial {
            queue.traps.push_back(*trap);
        }
        queue
    }

    pub fn len(&self) -> usize {
        self.traps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.traps.is_empty()
    }

    /// Read-only view of the queue, front first
    pub fn iter(&self) -> impl Iterator<Item = &CountedTrap> {
        self.traps.iter()
    }

    /// Immutable snapshot of the queue, front first
    pub fn snapshot(&self) -> Vec<CountedTrap> {
        self.traps.iter().copied().collect()
    }

    /// Record a purchase observed in chat.
    ///
    /// If the queue is already full, some traps must have been set off while
    /// the client was not observing, so the oldest entries are evicted until
    /// the new trap fits.
    pub fn purchase(&mut self, trap_type: TrapType, uses: u32) {
        while self.traps.len() >= MAX_TRAPS {
            let evicted = self.traps.pop_front();
            tracing::debug!(?evicted, "trap queue full, evicting oldest entry");
        }
        self.traps.push_back(CountedTrap::new(trap_type, uses));
    }

    /// Record a set-off observed in chat.
    ///
    /// Entries at the front whose type does not match were already set off
    /// unobserved; they are discarded until the matching entry is consumed
    /// or the queue empties. Exactly one matching entry is consumed.
    pub fn set_off(&mut self, trap_type: TrapType) {
        while let Some(front) = self.traps.front_mut() {
            if front.trap_type == trap_type {
                front.set_off();
                if front.is_used_up() {
                    self.traps.pop_front();
                }
                return;
            }
            let discarded = self.traps.pop_front();
            tracing::debug!(?discarded, "discarding trap set off while unobserved");
        }
    }
}
