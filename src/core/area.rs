//! Card areas (zones) and their wire summary.
//!
//! Every card in a session lives in exactly one `CardArea`. An area has a
//! type and, for per-player areas like the hand, an owner. Whether an
//! observer may learn which card entered or left an area is decided from
//! these two properties alone (see [`CardMove::is_relevant`]).
//!
//! [`CardMove::is_relevant`]: crate::values::CardMove::is_relevant

use serde::{Deserialize, Serialize};

use super::player::PlayerId;

/// Kind of card area.
///
/// Ordinals are stable: they are written to the wire as integers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AreaType {
    #[default]
    Unknown,
    Hand,
    Equip,
    DelayedTrick,
    Judge,
    Table,
    DrawPile,
    DiscardPile,
    /// Named per-player piles (e.g. cards set aside by a skill).
    ///
    /// Owning a special area never grants sight of the cards in it.
    Special,
    /// Cards revealed for everyone to pick from.
    Wugu,
}

impl AreaType {
    /// Wire ordinal.
    #[must_use]
    pub const fn ordinal(self) -> i32 {
        self as i32
    }
}

/// Where a card is placed inside its destination area.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    #[default]
    Undefined,
    Top,
    Bottom,
}

impl Direction {
    /// Wire ordinal.
    #[must_use]
    pub const fn ordinal(self) -> i32 {
        self as i32
    }
}

/// A card area in the session.
///
/// ## Example
///
/// ```
/// use rust_ccg_datavalue::core::{AreaType, CardArea, PlayerId};
///
/// let hand = CardArea::new(AreaType::Hand).with_owner(PlayerId::new(0));
/// assert_eq!(hand.owner(), Some(PlayerId::new(0)));
/// assert!(!hand.is_special());
///
/// let pile = CardArea::special("starfield").with_owner(PlayerId::new(0));
/// assert!(pile.is_special());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardArea {
    area_type: AreaType,
    /// `None` for shared areas (draw pile, table).
    owner: Option<PlayerId>,
    /// Only meaningful for special areas.
    name: String,
}

impl CardArea {
    /// Create an unowned area of the given type.
    pub fn new(area_type: AreaType) -> Self {
        Self {
            area_type,
            owner: None,
            name: String::new(),
        }
    }

    /// Create a named special area.
    pub fn special(name: impl Into<String>) -> Self {
        Self {
            area_type: AreaType::Special,
            owner: None,
            name: name.into(),
        }
    }

    /// Set the owner (builder pattern).
    #[must_use]
    pub fn with_owner(mut self, owner: PlayerId) -> Self {
        self.owner = Some(owner);
        self
    }

    /// Set the name (builder pattern).
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    #[must_use]
    pub fn area_type(&self) -> AreaType {
        self.area_type
    }

    #[must_use]
    pub fn owner(&self) -> Option<PlayerId> {
        self.owner
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn is_special(&self) -> bool {
        self.area_type == AreaType::Special
    }

    /// Check whether ownership of this area lets `player` see its cards.
    #[must_use]
    pub fn grants_sight_to(&self, player: PlayerId) -> bool {
        !self.is_special() && self.owner == Some(player)
    }

    /// Summarize this area for the wire.
    #[must_use]
    pub fn to_record(&self) -> AreaRecord {
        AreaRecord {
            owner_id: self.owner.map(|p| p.0),
            area_type: self.area_type.ordinal(),
            name: self.name.clone(),
        }
    }
}

/// Wire summary of a [`CardArea`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AreaRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<u8>,
    #[serde(rename = "type")]
    pub area_type: i32,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordinals() {
        assert_eq!(AreaType::Unknown.ordinal(), 0);
        assert_eq!(AreaType::Hand.ordinal(), 1);
        assert_eq!(AreaType::Special.ordinal(), 8);
        assert_eq!(AreaType::Wugu.ordinal(), 9);

        assert_eq!(Direction::Undefined.ordinal(), 0);
        assert_eq!(Direction::Top.ordinal(), 1);
        assert_eq!(Direction::Bottom.ordinal(), 2);
    }

    #[test]
    fn test_grants_sight() {
        let p0 = PlayerId::new(0);
        let p1 = PlayerId::new(1);

        let hand = CardArea::new(AreaType::Hand).with_owner(p0);
        assert!(hand.grants_sight_to(p0));
        assert!(!hand.grants_sight_to(p1));

        let pile = CardArea::special("field").with_owner(p0);
        assert!(!pile.grants_sight_to(p0));

        let draw_pile = CardArea::new(AreaType::DrawPile);
        assert!(!draw_pile.grants_sight_to(p0));
    }

    #[test]
    fn test_record_shape() {
        let hand = CardArea::new(AreaType::Hand).with_owner(PlayerId::new(2));
        let record = hand.to_record();
        assert_eq!(record.owner_id, Some(2));
        assert_eq!(record.area_type, 1);

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json, serde_json::json!({ "ownerId": 2, "type": 1 }));

        let table = CardArea::new(AreaType::Table).to_record();
        let json = serde_json::to_value(&table).unwrap();
        assert_eq!(json, serde_json::json!({ "type": 5 }));

        let pile = CardArea::special("field").to_record();
        let json = serde_json::to_value(&pile).unwrap();
        assert_eq!(json, serde_json::json!({ "type": 8, "name": "field" }));
    }
}
