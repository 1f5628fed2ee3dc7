/// Chat line classifier
///
/// Turns one formatted chat line into at most one [`ChatToken`]. Matching
/// is substring containment against fixed prompt tables, checked in a fixed
/// priority order: start/rejoin banners, then upgrade and DeadShot prompts,
/// then the forge table, then the trap tables. Prompts in different
/// categories are disjoint; within the forge and trap tables the scan runs
/// in enum order and the first match wins.
use regex::Regex;

use super::token::{ChatToken, TeamUpgrade};
use crate::game::{ForgeLevel, GameMode, TrapType};

/// Part of the prompt shown when the team unlocks "Heal Pool"
const HEAL_POOL_PROMPT: &str = "\u{a7}r\u{a7}6Heal Pool\u{a7}r";

/// Part of the prompt shown when the team unlocks "Dragon Buff"
const DRAGON_BUFF_PROMPT: &str = "\u{a7}r\u{a7}6Dragon Buff\u{a7}r";

/// Prompt shown when the client rejoins a game it was in before
const REJOIN_PROMPT: &str = "\u{a7}e\u{a7}lTo leave Bed Wars, type /lobby\u{a7}r";

/// Stateless classifier for formatted chat lines.
///
/// Construction compiles the DeadShot payload pattern once; classification
/// itself never fails and has no side effects.
pub struct ChatClassifier {
    deadshot: Regex,
}

impl ChatClassifier {
    pub fn new() -> Self {
        // The level is the roman numeral between the DeadShot prompt and
        // the next formatting reset.
        let deadshot = Regex::new("\u{a7}r\u{a7}6DeadShot ([IVX]+)\u{a7}r")
            .expect("DeadShot pattern is valid");
        Self { deadshot }
    }

    /// Classify one chat line. Unrecognized lines yield [`ChatToken::NoMatch`].
    pub fn classify(&self, line: &str) -> ChatToken {
        if let Some(mode) = self.match_start_banner(line) {
            return ChatToken::MatchStart {
                mode_hint: Some(mode),
            };
        }
        if line.contains(REJOIN_PROMPT) {
            return ChatToken::Rejoin;
        }
        if line.contains(HEAL_POOL_PROMPT) {
            return ChatToken::UpgradeUnlocked(TeamUpgrade::HealPool);
        }
        if line.contains(DRAGON_BUFF_PROMPT) {
            return ChatToken::UpgradeUnlocked(TeamUpgrade::DragonBuff);
        }
        if let Some(captures) = self.deadshot.captures(line) {
            match Self::parse_roman(&captures[1]) {
                Some(level) => return ChatToken::DeadShotUnlocked { level },
                // Unrecognized numeral: leave the tracked level alone
                None => return ChatToken::NoMatch,
            }
        }
        for level in ForgeLevel::ALL {
            if line.contains(level.prompt()) {
                return ChatToken::ForgeLevelReached(level);
            }
        }
        for trap_type in TrapType::ALL {
            if line.contains(trap_type.purchase_prompt()) {
                return ChatToken::TrapPurchased(trap_type);
            }
            if line.contains(trap_type.set_off_prompt()) {
                return ChatToken::TrapSetOff(trap_type);
            }
        }
        ChatToken::NoMatch
    }

    fn match_start_banner(&self, line: &str) -> Option<GameMode> {
        // The plain banner ends with a reset code, so longer mode banners
        // never contain it; enum order is safe here.
        GameMode::ALL
            .into_iter()
            .find(|mode| line.contains(mode.start_banner()))
    }

    fn parse_roman(numeral: &str) -> Option<u8> {
        match numeral {
            "I" => Some(1),
            "II" => Some(2),
            "III" => Some(3),
            "IV" => Some(4),
            _ => None,
        }
    }
}

impl Default for ChatClassifier {
    fn default() -> Self {
        Self::new()
    }
}
