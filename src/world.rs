/// Collaborator contracts for querying the host game world
///
/// The tracker never touches the world directly; it goes through these
/// traits so the host adapter (and tests) can supply the lookups. Every
/// query may transiently return `None` while the relevant entity is not
/// renderable, and callers must treat that as expected, not as an error.
use serde::{Deserialize, Serialize};

/// Text that only appears in the countdown line above a generator
pub const GENERATOR_TEXT: &str = "\u{a7}eSpawns in \u{a7}r\u{a7}c";

/// Text that only appears in a diamond generator's display name
pub const DIAMOND_GEN_TEXT: &str = "\u{a7}b\u{a7}lDiamond\u{a7}r";

/// Text that only appears in an emerald generator's display name
pub const EMERALD_GEN_TEXT: &str = "\u{a7}2\u{a7}lEmerald\u{a7}r";

/// Opaque handle to an in-world location, assigned by the host adapter.
///
/// The core never interprets the value; it only hands it back to
/// [`GeneratorLookup::read_countdown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LocationHandle(pub u64);

/// Resolves generators and reads their spawn countdowns
pub trait GeneratorLookup {
    /// Find a generator whose floating display name contains `marker`
    fn find_generator(&self, marker: &str) -> Option<LocationHandle>;

    /// Read the seconds-until-next-spawn shown at `handle`, if the
    /// countdown line is currently readable there
    fn read_countdown(&self, handle: LocationHandle) -> Option<u32>;
}

/// Read-only view of the in-game sidebar scoreboard
pub trait ScoreboardView {
    /// Title of the sidebar, if one is shown
    fn sidebar_title(&self) -> Option<String>;

    /// Lines of the sidebar, top to bottom
    fn sidebar_lines(&self) -> Vec<String>;
}

/// Combined world view handed to the driving loop
pub trait WorldView: GeneratorLookup + ScoreboardView {}

impl<T: GeneratorLookup + ScoreboardView> WorldView for T {}
