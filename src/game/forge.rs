/// Forge upgrade tiers
///
/// The forge controls resource generation speed on the team's base island.
/// Tiers are totally ordered and only ever move forward during normal play.
use serde::{Deserialize, Serialize};

/// Level of resource generation speed on the player's base island
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ForgeLevel {
    /// Not upgraded
    Ordinary,
    Iron,
    Golden,
    Emerald,
    Molten,
}

impl ForgeLevel {
    /// All tiers, weakest to strongest. Chat prompts are scanned in this
    /// order with first-match-wins semantics.
    pub const ALL: [ForgeLevel; 5] = [
        ForgeLevel::Ordinary,
        ForgeLevel::Iron,
        ForgeLevel::Golden,
        ForgeLevel::Emerald,
        ForgeLevel::Molten,
    ];

    /// Part of the chat prompt shown when the team reaches this tier.
    ///
    /// The base tier never appears in an upgrade prompt; its marker is kept
    /// in the table so the scan can stay uniform over all tiers.
    pub fn prompt(self) -> &'static str {
        match self {
            ForgeLevel::Ordinary => "\u{a7}r\u{a7}6Ordinary Forge\u{a7}r",
            ForgeLevel::Iron => "\u{a7}r\u{a7}6Iron Forge\u{a7}r",
            ForgeLevel::Golden => "\u{a7}r\u{a7}6Golden Forge\u{a7}r",
            ForgeLevel::Emerald => "\u{a7}r\u{a7}6Emerald Forge\u{a7}r",
            ForgeLevel::Molten => "\u{a7}r\u{a7}6Molten Forge\u{a7}r",
        }
    }

    /// Plain display name for the overlay
    pub fn display_name(self) -> &'static str {
        match self {
            ForgeLevel::Ordinary => "Not upgraded",
            ForgeLevel::Iron => "Iron Forge",
            ForgeLevel::Golden => "Golden Forge",
            ForgeLevel::Emerald => "Emerald Forge",
            ForgeLevel::Molten => "Molten Forge",
        }
    }
}

impl Default for ForgeLevel {
    fn default() -> Self {
        ForgeLevel::Ordinary
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forge_levels_are_ordered() {
        assert!(ForgeLevel::Ordinary < ForgeLevel::Iron);
        assert!(ForgeLevel::Iron < ForgeLevel::Golden);
        assert!(ForgeLevel::Golden < ForgeLevel::Emerald);
        assert!(ForgeLevel::Emerald < ForgeLevel::Molten);
    }

    #[test]
    fn test_forge_prompts_are_distinct() {
        for (i, a) in ForgeLevel::ALL.iter().enumerate() {
            for b in ForgeLevel::ALL.iter().skip(i + 1) {
                assert!(!a.prompt().contains(b.prompt()));
                assert!(!b.prompt().contains(a.prompt()));
            }
        }
    }

    #[test]
    fn test_default_is_base_tier() {
        assert_eq!(ForgeLevel::default(), ForgeLevel::Ordinary);
    }
}
