/// Match-state domain types
///
/// Everything the tracker remembers about one game session: forge tiers,
/// trap kinds, the bounded trap queue, game modes, and the tracker itself.

pub mod forge;
pub mod mode;
pub mod tracker;
pub mod trap;

pub use forge::ForgeLevel;
pub use mode::GameMode;
pub use tracker::MatchTracker;
pub use trap::{CountedTrap, TrapQueue, TrapType, MAX_TRAPS};
