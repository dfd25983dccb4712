//! Player identification, turn phases and skill areas.
//!
//! ## PlayerId
//!
//! Type-safe player identifier supporting up to 256 seats.
//!
//! ## Player
//!
//! The session-owned player record. Values borrow players for the lifetime
//! of the session; identity is the `PlayerId`, never the address.

use serde::{Deserialize, Serialize};

/// Player identifier supporting up to 256 players.
///
/// Player indices are 0-based: the first seat is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw seat index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all player IDs for a game with `player_count` seats.
    ///
    /// Counts above 256 yield the 256 representable seats.
    ///
    /// ```
    /// use rust_ccg_datavalue::core::PlayerId;
    ///
    /// let seats: Vec<_> = PlayerId::all(3).collect();
    /// assert_eq!(seats, vec![PlayerId::new(0), PlayerId::new(1), PlayerId::new(2)]);
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..=u8::MAX).take(player_count).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// A seated player.
///
/// Only the parts the value layer reads are modelled: a stable id and a
/// display name. Two `Player`s are equal iff their ids are equal.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Player {
    id: PlayerId,
    name: String,
}

impl Player {
    /// Create a player for a seat.
    pub fn new(id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    #[must_use]
    pub fn id(&self) -> PlayerId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl PartialEq for Player {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Player {}

impl std::hash::Hash for Player {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// Turn phase.
///
/// `Invalid` is the sentinel used before a phase change has been decided.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    #[default]
    Invalid,
    RoundStart,
    Start,
    Judge,
    Draw,
    Play,
    Discard,
    Finish,
    Inactive,
}

impl Phase {
    /// Check whether this is a real phase rather than the sentinel.
    #[must_use]
    pub const fn is_valid(self) -> bool {
        !matches!(self, Phase::Invalid)
    }
}

/// Where a skill is attached to its owner.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SkillArea {
    #[default]
    Unknown,
    /// Skill of the head general.
    Head,
    /// Skill of the deputy general.
    Deputy,
    /// Skill gained during the game.
    Acquired,
    /// Skill granted by an equipped card.
    Equip,
}
