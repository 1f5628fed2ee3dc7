/// Match state tracker
///
/// Stores the progress of one Bed Wars game session: forge level, team
/// upgrades, the trap queue, and cached generator positions. A tracker is
/// created when the concrete game mode has been detected and survives a
/// temporary disconnect from the same game; the orchestrator discards it
/// when the client moves on to a different game.
use crate::classify::{ChatToken, TeamUpgrade};
use crate::game::forge::ForgeLevel;
use crate::game::mode::GameMode;
use crate::game::trap::{CountedTrap, TrapQueue};
use crate::world::{GeneratorLookup, LocationHandle, DIAMOND_GEN_TEXT, EMERALD_GEN_TEXT};

pub struct MatchTracker {
    mode: GameMode,
    forge: ForgeLevel,
    heal_pool: bool,
    dragon_buff: bool,
    deadshot_level: u8,
    traps: TrapQueue,
    /// Position of the diamond generator being read; `None` means the next
    /// query must resolve a fresh one
    diamond_gen: Option<LocationHandle>,
    /// Position of the emerald generator being read
    emerald_gen: Option<LocationHandle>,
}

impl MatchTracker {
    /// Create a tracker with the starting conditions of `mode`
    pub fn new(mode: GameMode) -> Self {
        Self {
            mode,
            forge: mode.initial_forge(),
            heal_pool: false,
            dragon_buff: false,
            deadshot_level: 0,
            traps: TrapQueue::from_initial(&mode.initial_traps()),
            diamond_gen: None,
            emerald_gen: None,
        }
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn forge_level(&self) -> ForgeLevel {
        self.forge
    }

    pub fn has_heal_pool(&self) -> bool {
        self.heal_pool
    }

    pub fn has_dragon_buff(&self) -> bool {
        self.dragon_buff
    }

    /// Level of the DeadShot upgrade, 0 if not unlocked
    pub fn deadshot_level(&self) -> u8 {
        self.deadshot_level
    }

    /// Immutable snapshot of the trap queue, front first
    pub fn traps(&self) -> Vec<CountedTrap> {
        self.traps.snapshot()
    }

    /// Apply one classified chat token. At most one piece of state changes
    /// per call; tokens the tracker does not care about are ignored.
    pub fn apply(&mut self, token: &ChatToken) {
        match token {
            ChatToken::UpgradeUnlocked(TeamUpgrade::HealPool) => {
                self.heal_pool = true;
                tracing::info!("Heal Pool unlocked");
            }
            ChatToken::UpgradeUnlocked(TeamUpgrade::DragonBuff) => {
                self.dragon_buff = true;
                tracing::info!("Dragon Buff unlocked");
            }
            ChatToken::DeadShotUnlocked { level } => {
                // Last observation wins
                self.deadshot_level = *level;
                tracing::info!(level, "DeadShot unlocked");
            }
            ChatToken::ForgeLevelReached(level) => {
                // Applied unconditionally; the chat stream is trusted to
                // deliver tiers in order
                self.forge = *level;
                tracing::info!(forge = ?level, "forge level reached");
            }
            ChatToken::TrapPurchased(trap_type) => {
                self.traps.purchase(*trap_type, self.mode.trap_uses());
                tracing::info!(trap = ?trap_type, "trap purchased");
            }
            ChatToken::TrapSetOff(trap_type) => {
                self.traps.set_off(*trap_type);
                tracing::info!(trap = ?trap_type, "trap set off");
            }
            // Phase-level tokens are handled upstream
            ChatToken::MatchStart { .. } | ChatToken::Rejoin | ChatToken::NoMatch => {}
        }
    }

    /// Seconds until the next diamond spawns, or `None` if no diamond
    /// generator can currently be read.
    ///
    /// When the cached generator yields no countdown, a replacement is
    /// resolved for the next query; this call still reports `None`.
    pub fn next_diamond(&mut self, world: &dyn GeneratorLookup) -> Option<u32> {
        Self::next_spawn(&mut self.diamond_gen, DIAMOND_GEN_TEXT, world)
    }

    /// Seconds until the next emerald spawns, or `None` if no emerald
    /// generator can currently be read
    pub fn next_emerald(&mut self, world: &dyn GeneratorLookup) -> Option<u32> {
        Self::next_spawn(&mut self.emerald_gen, EMERALD_GEN_TEXT, world)
    }

    fn next_spawn(
        cached: &mut Option<LocationHandle>,
        marker: &str,
        world: &dyn GeneratorLookup,
    ) -> Option<u32> {
        let time = cached.and_then(|handle| world.read_countdown(handle));
        if time.is_none() {
            // Cached position unset or no longer readable; resolve a new
            // generator for subsequent queries
            *cached = world.find_generator(marker);
        }
        time
    }
}
