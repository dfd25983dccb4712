//! Physical cards as the value layer sees them.
//!
//! A `Card` here is one physical card in the session's deck, not a card
//! definition. Its `CardId` is what goes on the wire when identity may be
//! disclosed.

use serde::{Deserialize, Serialize};

/// Unique identifier for a physical card in a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Card suit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    Spade,
    Heart,
    Club,
    Diamond,
    /// Virtual cards built from several physical cards may have no suit.
    #[default]
    NoSuit,
}

impl Suit {
    #[must_use]
    pub const fn is_red(self) -> bool {
        matches!(self, Suit::Heart | Suit::Diamond)
    }

    #[must_use]
    pub const fn is_black(self) -> bool {
        matches!(self, Suit::Spade | Suit::Club)
    }
}

/// A physical card.
///
/// Two cards are equal iff their ids are equal.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Card {
    id: CardId,
    name: String,
    suit: Suit,
    /// Rank 1 (A) through 13 (K); 0 for virtual cards.
    number: u8,
}

impl Card {
    /// Create a card.
    ///
    /// ```
    /// use rust_ccg_datavalue::core::{Card, CardId, Suit};
    ///
    /// let slash = Card::new(CardId::new(7), "slash", Suit::Heart, 10);
    /// assert!(slash.suit().is_red());
    /// assert_eq!(slash.number(), 10);
    /// ```
    pub fn new(id: CardId, name: impl Into<String>, suit: Suit, number: u8) -> Self {
        Self {
            id,
            name: name.into(),
            suit,
            number,
        }
    }

    #[must_use]
    pub fn id(&self) -> CardId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn suit(&self) -> Suit {
        self.suit
    }

    #[must_use]
    pub fn number(&self) -> u8 {
        self.number
    }
}

impl PartialEq for Card {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Card {}

impl std::hash::Hash for Card {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
