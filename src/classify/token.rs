/// Semantic tokens produced by chat classification
use crate::game::{ForgeLevel, GameMode, TrapType};

/// Team upgrades tracked as simple unlocked flags
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TeamUpgrade {
    HealPool,
    DragonBuff,
}

/// One chat line reduced to its meaning for match tracking.
///
/// Classification is stateless and phase-agnostic; the phase detector and
/// the match tracker each pick out the variants they care about and ignore
/// the rest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatToken {
    /// A game start banner was shown. The hint names the banner's mode,
    /// but the authoritative mode comes from the scoreboard detector.
    MatchStart { mode_hint: Option<GameMode> },

    /// The client rejoined a game already in progress
    Rejoin,

    /// The team unlocked a flag-style upgrade
    UpgradeUnlocked(TeamUpgrade),

    /// The team unlocked DeadShot at the given level (1-4)
    DeadShotUnlocked { level: u8 },

    /// The team's forge reached the given tier
    ForgeLevelReached(ForgeLevel),

    /// The team purchased a trap
    TrapPurchased(TrapType),

    /// One of the team's traps was set off
    TrapSetOff(TrapType),

    /// The line carries no tracked meaning; callers ignore it silently
    NoMatch,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens_are_comparable() {
        assert_eq!(
            ChatToken::UpgradeUnlocked(TeamUpgrade::HealPool),
            ChatToken::UpgradeUnlocked(TeamUpgrade::HealPool)
        );
        assert_ne!(
            ChatToken::TrapPurchased(TrapType::Alarm),
            ChatToken::TrapSetOff(TrapType::Alarm)
        );
    }
}
