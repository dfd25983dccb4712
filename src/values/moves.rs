//! Card movement values and their wire records.
//!
//! ## Disclosure
//!
//! A [`CardMove`] writes its card's id only when the move is open or the
//! caller asks for it. [`CardsMoveValue::to_record_for`] asks per move,
//! using [`CardMove::is_relevant`]: an observer may see a card iff one end
//! of its move is a non-special area the observer owns. Moves of one event
//! are judged independently, so a single record may mix disclosed and
//! redacted moves.
//!
//! ```
//! use rust_ccg_datavalue::core::{AreaType, Card, CardArea, CardId, Player, PlayerId, Suit};
//! use rust_ccg_datavalue::values::{CardMove, CardsMoveValue};
//!
//! let alice = Player::new(PlayerId::new(0), "alice");
//! let bob = Player::new(PlayerId::new(1), "bob");
//! let hand = CardArea::new(AreaType::Hand).with_owner(alice.id());
//! let discard = CardArea::new(AreaType::DiscardPile);
//! let card = Card::new(CardId::new(9), "peach", Suit::Heart, 3);
//!
//! let mut value = CardsMoveValue::new();
//! value.push(CardMove::new(&hand, &discard, &card));
//!
//! assert_eq!(value.to_record_for(Some(&alice)).moves[0].card, Some(CardId::new(9)));
//! assert_eq!(value.to_record_for(Some(&bob)).moves[0].card, None);
//! ```

use serde::{Deserialize, Serialize};

use crate::core::{AreaRecord, Card, CardArea, CardId, Direction, Player};

/// One card changing areas.
///
/// Equality compares all five fields. Areas and cards compare by address:
/// two distinct area objects are different endpoints even when their type,
/// owner and name agree.
#[derive(Clone, Copy, Debug, Default)]
pub struct CardMove<'g> {
    pub from_area: Option<&'g CardArea>,
    pub to_area: Option<&'g CardArea>,
    pub to_direction: Direction,
    pub card: Option<&'g Card>,
    /// The card is shown to everyone while it moves.
    pub is_open: bool,
}

impl<'g> CardMove<'g> {
    /// Create a closed move of `card` between two areas.
    pub fn new(from_area: &'g CardArea, to_area: &'g CardArea, card: &'g Card) -> Self {
        Self {
            from_area: Some(from_area),
            to_area: Some(to_area),
            card: Some(card),
            ..Self::default()
        }
    }

    /// Mark the move as open (builder pattern).
    #[must_use]
    pub fn open(mut self) -> Self {
        self.is_open = true;
        self
    }

    /// Set the placement in the destination (builder pattern).
    #[must_use]
    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.to_direction = direction;
        self
    }

    /// Check whether `observer` is entitled to this move's card identity.
    ///
    /// `None` stands for an omniscient observer and is always relevant.
    #[must_use]
    pub fn is_relevant(&self, observer: Option<&Player>) -> bool {
        let Some(observer) = observer else {
            return true;
        };

        [self.from_area, self.to_area]
            .into_iter()
            .flatten()
            .any(|area| area.grants_sight_to(observer.id()))
    }

    /// Render this move for the wire.
    ///
    /// The card id is written iff a card is present and either the move is
    /// open or `reveal` is set.
    #[must_use]
    pub fn to_record(&self, reveal: bool) -> MoveRecord {
        MoveRecord {
            from_area: self.from_area.map(CardArea::to_record),
            to_area: self.to_area.map(CardArea::to_record),
            to_direction: self.to_direction.ordinal(),
            card: self
                .card
                .filter(|_| self.is_open || reveal)
                .map(Card::id),
            is_open: self.is_open,
        }
    }
}

fn same_ref<T>(a: Option<&T>, b: Option<&T>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => std::ptr::eq(a, b),
        (None, None) => true,
        _ => false,
    }
}

impl PartialEq for CardMove<'_> {
    fn eq(&self, other: &Self) -> bool {
        same_ref(self.from_area, other.from_area)
            && same_ref(self.to_area, other.to_area)
            && self.to_direction == other.to_direction
            && same_ref(self.card, other.card)
            && self.is_open == other.is_open
    }
}

impl Eq for CardMove<'_> {}

/// Several cards moving as one event.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CardsMoveValue<'g> {
    pub moves: Vec<CardMove<'g>>,
}

impl<'g> CardsMoveValue<'g> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, card_move: CardMove<'g>) {
        self.moves.push(card_move);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CardMove<'g>> {
        self.moves.iter()
    }

    /// Cards carried by this event, in move order.
    pub fn cards(&self) -> impl Iterator<Item = &'g Card> + '_ {
        self.moves.iter().filter_map(|m| m.card)
    }

    /// Render every move with the same `reveal` flag.
    #[must_use]
    pub fn to_record(&self, reveal: bool) -> CardsMoveRecord {
        CardsMoveRecord {
            moves: self.moves.iter().map(|m| m.to_record(reveal)).collect(),
        }
    }

    /// Render each move by its relevance to `observer`.
    #[must_use]
    pub fn to_record_for(&self, observer: Option<&Player>) -> CardsMoveRecord {
        CardsMoveRecord {
            moves: self
                .moves
                .iter()
                .map(|m| m.to_record(m.is_relevant(observer)))
                .collect(),
        }
    }
}

impl<'g> FromIterator<CardMove<'g>> for CardsMoveValue<'g> {
    fn from_iter<I: IntoIterator<Item = CardMove<'g>>>(iter: I) -> Self {
        Self {
            moves: iter.into_iter().collect(),
        }
    }
}

/// Wire record of one move.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from_area: Option<AreaRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to_area: Option<AreaRecord>,
    pub to_direction: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card: Option<CardId>,
    pub is_open: bool,
}

/// Wire record of a multi-card move.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardsMoveRecord {
    pub moves: Vec<MoveRecord>,
}

impl CardsMoveRecord {
    /// Card ids disclosed by this record.
    pub fn revealed_cards(&self) -> impl Iterator<Item = CardId> + '_ {
        self.moves.iter().filter_map(|m| m.card)
    }

    /// Number of moves whose card id was withheld.
    #[must_use]
    pub fn redacted_count(&self) -> usize {
        self.moves.iter().filter(|m| m.card.is_none()).count()
    }
}
