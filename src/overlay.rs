/// Read-only overlay query surface
///
/// The renderer polls once per frame and draws whatever snapshot it gets;
/// the core never pushes data at it. A snapshot is a plain value detached
/// from the tracker, so the renderer can hold it across frames safely.
use serde::{Deserialize, Serialize};

use crate::game::{CountedTrap, ForgeLevel, GameMode, MatchTracker};
use crate::world::GeneratorLookup;

/// Everything the overlay can draw for the current game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverlaySnapshot {
    pub mode: GameMode,
    pub forge: ForgeLevel,
    pub heal_pool: bool,
    pub dragon_buff: bool,
    /// DeadShot level, 0 if not unlocked
    pub deadshot_level: u8,
    /// Trap queue, front first
    pub traps: Vec<CountedTrap>,
    /// Seconds until the next diamond spawns, if readable this frame
    pub next_diamond: Option<u32>,
    /// Seconds until the next emerald spawns, if readable this frame
    pub next_emerald: Option<u32>,
}

impl OverlaySnapshot {
    /// Capture the tracker's current state. Generator countdowns are
    /// resolved through `world` and may be absent this frame.
    pub fn capture(tracker: &mut MatchTracker, world: &dyn GeneratorLookup) -> Self {
        Self {
            mode: tracker.mode(),
            forge: tracker.forge_level(),
            heal_pool: tracker.has_heal_pool(),
            dragon_buff: tracker.has_dragon_buff(),
            deadshot_level: tracker.deadshot_level(),
            traps: tracker.traps(),
            next_diamond: tracker.next_diamond(world),
            next_emerald: tracker.next_emerald(world),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::ChatToken;
    use crate::game::TrapType;
    use crate::world::LocationHandle;

    struct NoWorld;

    impl GeneratorLookup for NoWorld {
        fn find_generator(&self, _marker: &str) -> Option<LocationHandle> {
            None
        }

        fn read_countdown(&self, _handle: LocationHandle) -> Option<u32> {
            None
        }
    }

    #[test]
    fn test_snapshot_reflects_tracker_state() {
        let mut tracker = MatchTracker::new(GameMode::Ordinary);
        tracker.apply(&ChatToken::ForgeLevelReached(ForgeLevel::Golden));
        tracker.apply(&ChatToken::TrapPurchased(TrapType::Counter));

        let snapshot = OverlaySnapshot::capture(&mut tracker, &NoWorld);

        assert_eq!(snapshot.mode, GameMode::Ordinary);
        assert_eq!(snapshot.forge, ForgeLevel::Golden);
        assert_eq!(snapshot.traps.len(), 1);
        assert_eq!(snapshot.traps[0].trap_type, TrapType::Counter);
        assert_eq!(snapshot.next_diamond, None);
        assert_eq!(snapshot.next_emerald, None);
    }

    #[test]
    fn test_snapshot_round_trips_through_json() {
        let mut tracker = MatchTracker::new(GameMode::Rush);
        let snapshot = OverlaySnapshot::capture(&mut tracker, &NoWorld);

        let json = serde_json::to_string(&snapshot).unwrap();
        let back: OverlaySnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, snapshot);
    }
}
