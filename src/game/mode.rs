/// Bed Wars game modes
///
/// A mode is an immutable descriptor chosen at match start. Modes differ
/// only in their starting conditions, never in tracking logic.
use serde::{Deserialize, Serialize};

use super::forge::ForgeLevel;
use super::trap::CountedTrap;

/// Variant of a Bed Wars game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameMode {
    Ordinary,
    Rush,
    Ultimate,
    LuckyBlocks,
}

impl GameMode {
    /// All modes, in chat banner scan order
    pub const ALL: [GameMode; 4] = [
        GameMode::Ordinary,
        GameMode::Rush,
        GameMode::Ultimate,
        GameMode::LuckyBlocks,
    ];

    /// Scoreboard scan order. The plain "Bed Wars" marker is a prefix of
    /// every other mode marker, so it must be checked last.
    pub const DETECTION_ORDER: [GameMode; 4] = [
        GameMode::Rush,
        GameMode::Ultimate,
        GameMode::LuckyBlocks,
        GameMode::Ordinary,
    ];

    /// Chat banner shown when a game of this mode starts
    pub fn start_banner(self) -> &'static str {
        match self {
            GameMode::Ordinary => "\u{a7}f\u{a7}lBed Wars\u{a7}r",
            GameMode::Rush => "\u{a7}f\u{a7}lBed Wars Rush\u{a7}r",
            GameMode::Ultimate => "\u{a7}f\u{a7}lBed Wars Ultimate\u{a7}r",
            GameMode::LuckyBlocks => "\u{a7}f\u{a7}lBed Wars Lucky Blocks\u{a7}r",
        }
    }

    /// Text identifying this mode on the in-game sidebar
    pub fn scoreboard_marker(self) -> &'static str {
        match self {
            GameMode::Ordinary => "BED WARS",
            GameMode::Rush => "BED WARS RUSH",
            GameMode::Ultimate => "BED WARS ULTIMATE",
            GameMode::LuckyBlocks => "BED WARS LUCKY BLOCKS",
        }
    }

    /// Forge tier the team starts the match with
    pub fn initial_forge(self) -> ForgeLevel {
        match self {
            // Rush games start with accelerated generators
            GameMode::Rush => ForgeLevel::Iron,
            _ => ForgeLevel::Ordinary,
        }
    }

    /// Traps queued at match start. No current mode seeds the queue, but
    /// rejoin handling reads starting conditions from here regardless.
    pub fn initial_traps(self) -> Vec<CountedTrap> {
        Vec::new()
    }

    /// Number of times one trap fires before it is consumed
    pub fn trap_uses(self) -> u32 {
        match self {
            GameMode::Ultimate => 2,
            _ => 1,
        }
    }

    /// Plain display name for the overlay
    pub fn display_name(self) -> &'static str {
        match self {
            GameMode::Ordinary => "Bed Wars",
            GameMode::Rush => "Bed Wars Rush",
            GameMode::Ultimate => "Bed Wars Ultimate",
            GameMode::LuckyBlocks => "Bed Wars Lucky Blocks",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_banners_are_distinct() {
        // The plain banner ends with a reset code, so it is not a substring
        // of the longer mode banners.
        for mode in [GameMode::Rush, GameMode::Ultimate, GameMode::LuckyBlocks] {
            assert!(!mode.start_banner().contains(GameMode::Ordinary.start_banner()));
        }
    }

    #[test]
    fn test_detection_order_puts_plain_marker_last() {
        assert_eq!(GameMode::DETECTION_ORDER[3], GameMode::Ordinary);
        for mode in [GameMode::Rush, GameMode::Ultimate, GameMode::LuckyBlocks] {
            assert!(mode.scoreboard_marker().contains(GameMode::Ordinary.scoreboard_marker()));
        }
    }

    #[test]
    fn test_rush_starts_with_upgraded_forge() {
        assert_eq!(GameMode::Rush.initial_forge(), ForgeLevel::Iron);
        assert_eq!(GameMode::Ordinary.initial_forge(), ForgeLevel::Ordinary);
    }

    #[test]
    fn test_trap_uses_per_mode() {
        assert_eq!(GameMode::Ordinary.trap_uses(), 1);
        assert_eq!(GameMode::Ultimate.trap_uses(), 2);
    }
}
