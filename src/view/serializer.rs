//! Per-recipient serializer for move values.

use serde::{Deserialize, Serialize};

use crate::core::{CardId, Player, PlayerId, RevealMode, ViewConfig};
use crate::values::{CardMove, CardsMoveRecord, CardsMoveValue, DataValue, MoveRecord};

/// A rendered move value, ready for the transport.
///
/// Serialized untagged: the JSON is exactly the move or multi-move record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WireRecord {
    Moves(CardsMoveRecord),
    Move(MoveRecord),
}

impl WireRecord {
    /// Card ids disclosed by this record, in move order.
    #[must_use]
    pub fn revealed_cards(&self) -> Vec<CardId> {
        match self {
            WireRecord::Moves(record) => record.revealed_cards().collect(),
            WireRecord::Move(record) => record.card.into_iter().collect(),
        }
    }
}

/// One recipient's rendering of a value.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObserverView {
    pub observer: PlayerId,
    pub record: WireRecord,
}

/// Renders move values per recipient under a [`ViewConfig`].
#[derive(Clone, Debug, Default)]
pub struct ObserverSerializer {
    config: ViewConfig,
}

impl ObserverSerializer {
    #[must_use]
    pub fn new(config: ViewConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &ViewConfig {
        &self.config
    }

    /// Render one move for `observer` (`None` = omniscient).
    #[must_use]
    pub fn render_move(&self, card_move: &CardMove<'_>, observer: Option<&Player>) -> MoveRecord {
        let reveal = match self.config.reveal {
            RevealMode::PerObserver => card_move.is_relevant(observer),
            RevealMode::All => true,
            RevealMode::None => false,
        };
        card_move.to_record(reveal)
    }

    /// Render a multi-card move for `observer` (`None` = omniscient).
    #[must_use]
    pub fn render_moves(&self, value: &CardsMoveValue<'_>, observer: Option<&Player>) -> CardsMoveRecord {
        match self.config.reveal {
            RevealMode::PerObserver => value.to_record_for(observer),
            RevealMode::All => value.to_record(true),
            RevealMode::None => value.to_record(false),
        }
    }

    /// Render `value` for `observer`.
    ///
    /// Returns `None` for kinds that have no wire form at this layer.
    #[must_use]
    pub fn serialize(&self, value: &DataValue<'_>, observer: Option<&Player>) -> Option<WireRecord> {
        match value {
            DataValue::CardMove(card_move) => {
                Some(WireRecord::Move(self.render_move(card_move, observer)))
            }
            DataValue::CardsMove(moves) => {
                Some(WireRecord::Moves(self.render_moves(moves, observer)))
            }
            other => {
                tracing::trace!(kind = %other.kind(), "no wire form for value kind");
                None
            }
        }
    }

    /// Render `value` once per recipient, in the order given.
    ///
    /// Empty when `value` has no wire form.
    #[must_use]
    pub fn broadcast(&self, value: &DataValue<'_>, observers: &[&Player]) -> Vec<ObserverView> {
        observers
            .iter()
            .copied()
            .filter_map(|observer| {
                let record = self.serialize(value, Some(observer))?;
                tracing::trace!(
                    observer = %observer.id(),
                    revealed = record.revealed_cards().len(),
                    "rendered move value"
                );
                Some(ObserverView {
                    observer: observer.id(),
                    record,
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{AreaType, Card, CardArea, Suit};
    use crate::values::{DamageValue, IntValue};

    struct Table {
        players: [Player; 3],
        hands: [CardArea; 3],
        discard: CardArea,
        cards: [Card; 2],
    }

    fn table() -> Table {
        let players = [
            Player::new(PlayerId::new(0), "a"),
            Player::new(PlayerId::new(1), "b"),
            Player::new(PlayerId::new(2), "c"),
        ];
        let hands = [
            CardArea::new(AreaType::Hand).with_owner(PlayerId::new(0)),
            CardArea::new(AreaType::Hand).with_owner(PlayerId::new(1)),
            CardArea::new(AreaType::Hand).with_owner(PlayerId::new(2)),
        ];
        Table {
            players,
            hands,
            discard: CardArea::new(AreaType::DiscardPile),
            cards: [
                Card::new(CardId::new(10), "slash", Suit::Spade, 4),
                Card::new(CardId::new(11), "jink", Suit::Heart, 8),
            ],
        }
    }

    #[test]
    fn test_per_observer_mode() {
        let t = table();
        let value = DataValue::CardsMove(
            [
                CardMove::new(&t.hands[0], &t.discard, &t.cards[0]),
                CardMove::new(&t.hands[1], &t.discard, &t.cards[1]),
            ]
            .into_iter()
            .collect(),
        );
        let serializer = ObserverSerializer::default();

        let observers: Vec<&Player> = t.players.iter().collect();
        let views = serializer.broadcast(&value, &observers);

        assert_eq!(views.len(), 3);
        assert_eq!(views[0].observer, PlayerId::new(0));
        assert_eq!(views[0].record.revealed_cards(), vec![CardId::new(10)]);
        assert_eq!(views[1].record.revealed_cards(), vec![CardId::new(11)]);
        assert!(views[2].record.revealed_cards().is_empty());

        let omniscient = serializer.serialize(&value, None).unwrap();
        assert_eq!(omniscient.revealed_cards(), vec![CardId::new(10), CardId::new(11)]);
    }

    #[test]
    fn test_replay_and_public_modes() {
        let t = table();
        let value = DataValue::CardsMove(
            [
                CardMove::new(&t.hands[0], &t.discard, &t.cards[0]),
                CardMove::new(&t.hands[1], &t.discard, &t.cards[1]).open(),
            ]
            .into_iter()
            .collect(),
        );

        let replay = ObserverSerializer::new(ViewConfig::replay());
        let record = replay.serialize(&value, Some(&t.players[2])).unwrap();
        assert_eq!(record.revealed_cards().len(), 2);

        let public = ObserverSerializer::new(ViewConfig::public());
        let record = public.serialize(&value, Some(&t.players[0])).unwrap();
        assert_eq!(record.revealed_cards(), vec![CardId::new(11)]);
    }

    #[test]
    fn test_single_move() {
        let t = table();
        let value = DataValue::CardMove(CardMove::new(&t.hands[0], &t.hands[1], &t.cards[0]));
        let serializer = ObserverSerializer::default();

        let for_receiver = serializer.serialize(&value, Some(&t.players[1])).unwrap();
        assert_eq!(for_receiver.revealed_cards(), vec![CardId::new(10)]);

        let for_other = serializer.serialize(&value, Some(&t.players[2])).unwrap();
        assert!(for_other.revealed_cards().is_empty());
        assert!(matches!(for_other, WireRecord::Move(_)));
    }

    #[test]
    fn test_non_move_values_have_no_wire_form() {
        let t = table();
        let serializer = ObserverSerializer::default();

        let damage = DataValue::Damage(DamageValue::new(&t.players[0]));
        assert!(serializer.serialize(&damage, None).is_none());
        assert!(serializer.broadcast(&damage, &[&t.players[0]]).is_empty());

        let int = DataValue::Int(IntValue::new(3));
        assert!(serializer.serialize(&int, None).is_none());
    }

    #[test]
    fn test_wire_json_is_untagged() {
        let t = table();
        let value = DataValue::CardsMove(
            [CardMove::new(&t.hands[0], &t.discard, &t.cards[0])]
                .into_iter()
                .collect(),
        );
        let record = ObserverSerializer::default()
            .serialize(&value, Some(&t.players[0]))
            .unwrap();

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["moves"][0]["card"], serde_json::json!(10));
        assert_eq!(json["moves"][0]["fromArea"]["ownerId"], serde_json::json!(0));

        let back: WireRecord = serde_json::from_value(json).unwrap();
        assert_eq!(back, record);
    }
}
