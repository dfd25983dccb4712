//! Observer visibility integration tests.
//!
//! These tests check which recipients learn a moved card's identity, from
//! the relevance predicate up through the per-recipient serializer.

use rust_ccg_datavalue::core::{
    AreaType, Card, CardArea, CardId, Direction, Player, PlayerId, Suit, ViewConfig,
};
use rust_ccg_datavalue::values::{CardMove, CardsMoveValue, DataValue};
use rust_ccg_datavalue::view::{ObserverSerializer, WireRecord};

fn player(id: u8, name: &str) -> Player {
    Player::new(PlayerId::new(id), name)
}

/// Player A owns an ordinary area; an unowned special area receives the card.
#[test]
fn test_move_into_special_area() {
    let a = player(0, "A");
    let b = player(1, "B");
    let z1 = CardArea::new(AreaType::Hand).with_owner(a.id());
    let zs = CardArea::special("ZS");
    let card = Card::new(CardId::new(42), "slash", Suit::Club, 9);

    let m = CardMove::new(&z1, &zs, &card);
    assert!(!m.is_open);

    assert!(m.is_relevant(Some(&a)), "A owns the source area");
    assert!(!m.is_relevant(Some(&b)));
    assert!(m.is_relevant(None));

    let value = CardsMoveValue::from_iter([m]);
    assert_eq!(value.to_record_for(Some(&a)).moves[0].card, Some(CardId::new(42)));
    assert_eq!(value.to_record_for(Some(&b)).moves[0].card, None);
}

/// Owning a special area never grants sight.
#[test]
fn test_owned_special_area_grants_nothing() {
    let a = player(0, "A");
    let pile = CardArea::special("starfield").with_owner(a.id());
    let draw = CardArea::new(AreaType::DrawPile);
    let card = Card::new(CardId::new(7), "peach", Suit::Heart, 12);

    let m = CardMove::new(&draw, &pile, &card);
    assert!(!m.is_relevant(Some(&a)));
    assert_eq!(m.to_record(m.is_relevant(Some(&a))).card, None);
}

/// Two moves, one relevant to C: exactly one record carries a card id.
#[test]
fn test_mixed_relevance_in_one_event() {
    let c = player(2, "C");
    let d = player(3, "D");
    let c_hand = CardArea::new(AreaType::Hand).with_owner(c.id());
    let d_hand = CardArea::new(AreaType::Hand).with_owner(d.id());
    let discard = CardArea::new(AreaType::DiscardPile);
    let cards = [
        Card::new(CardId::new(1), "jink", Suit::Diamond, 2),
        Card::new(CardId::new(2), "jink", Suit::Diamond, 3),
    ];

    let value: CardsMoveValue = [
        CardMove::new(&c_hand, &discard, &cards[0]),
        CardMove::new(&d_hand, &discard, &cards[1]),
    ]
    .into_iter()
    .collect();

    let record = value.to_record_for(Some(&c));
    assert_eq!(record.revealed_cards().count(), 1);
    assert_eq!(record.redacted_count(), 1);
    assert_eq!(record.moves[0].card, Some(CardId::new(1)));
    assert_eq!(record.moves[1].card, None);
}

/// `to_record(true)` reveals all, `to_record(false)` only open moves.
#[test]
fn test_reveal_flag_over_whole_event() {
    let a = player(0, "A");
    let hand = CardArea::new(AreaType::Hand).with_owner(a.id());
    let table = CardArea::new(AreaType::Table);
    let cards = [
        Card::new(CardId::new(1), "slash", Suit::Spade, 1),
        Card::new(CardId::new(2), "slash", Suit::Spade, 2),
        Card::new(CardId::new(3), "slash", Suit::Spade, 3),
    ];

    let value: CardsMoveValue = [
        CardMove::new(&hand, &table, &cards[0]),
        CardMove::new(&hand, &table, &cards[1]).open(),
        CardMove::new(&hand, &table, &cards[2]),
    ]
    .into_iter()
    .collect();

    assert_eq!(value.to_record(true).revealed_cards().count(), 3);
    let hidden: Vec<_> = value.to_record(false).revealed_cards().collect();
    assert_eq!(hidden, vec![CardId::new(2)]);
}

/// Area summaries and direction survive redaction.
#[test]
fn test_redacted_record_keeps_areas() {
    let a = player(0, "A");
    let b = player(1, "B");
    let hand = CardArea::new(AreaType::Hand).with_owner(a.id());
    let draw = CardArea::new(AreaType::DrawPile);
    let card = Card::new(CardId::new(5), "duel", Suit::Spade, 1);

    let m = CardMove::new(&hand, &draw, &card).with_direction(Direction::Bottom);
    let record = m.to_record(m.is_relevant(Some(&b)));

    assert_eq!(record.card, None);
    assert_eq!(record.to_direction, Direction::Bottom.ordinal());
    assert_eq!(record.from_area.as_ref().and_then(|r| r.owner_id), Some(0));
    assert_eq!(record.to_area.as_ref().map(|r| r.area_type), Some(AreaType::DrawPile.ordinal()));

    let json = serde_json::to_value(&record).unwrap();
    assert!(json.get("card").is_none());
    assert_eq!(json["isOpen"], serde_json::json!(false));
}

/// Broadcasting a transfer between two hands reveals it to both ends only.
#[test]
fn test_broadcast_hand_to_hand() {
    let players = [player(0, "A"), player(1, "B"), player(2, "C"), player(3, "D")];
    let from = CardArea::new(AreaType::Hand).with_owner(players[0].id());
    let to = CardArea::new(AreaType::Hand).with_owner(players[1].id());
    let card = Card::new(CardId::new(77), "snatch", Suit::Diamond, 3);

    let value = DataValue::from(CardsMoveValue::from_iter([CardMove::new(&from, &to, &card)]));
    let recipients: Vec<&Player> = players.iter().collect();
    let views = ObserverSerializer::new(ViewConfig::default()).broadcast(&value, &recipients);

    let seen: Vec<bool> = views
        .iter()
        .map(|v| !v.record.revealed_cards().is_empty())
        .collect();
    assert_eq!(seen, vec![true, true, false, false]);
}

/// A view configuration loaded from JSON drives the serializer.
#[test]
fn test_config_from_json() {
    let a = player(0, "A");
    let b = player(1, "B");
    let hand = CardArea::new(AreaType::Hand).with_owner(a.id());
    let discard = CardArea::new(AreaType::DiscardPile);
    let card = Card::new(CardId::new(8), "wine", Suit::Spade, 9);
    let value = DataValue::from(CardMove::new(&hand, &discard, &card));

    let config: ViewConfig = serde_json::from_str(r#"{ "reveal": "all" }"#).unwrap();
    let record = ObserverSerializer::new(config).serialize(&value, Some(&b)).unwrap();
    assert!(matches!(record, WireRecord::Move(_)));
    assert_eq!(record.revealed_cards(), vec![CardId::new(8)]);

    let config: ViewConfig = serde_json::from_str("{}").unwrap();
    let record = ObserverSerializer::new(config).serialize(&value, Some(&b)).unwrap();
    assert!(record.revealed_cards().is_empty());
}

/// An observer owning an ordinary end of every move sees the full record.
#[test]
fn test_fully_relevant_observer_matches_reveal_all() {
    let a = player(0, "A");
    let hand = CardArea::new(AreaType::Hand).with_owner(a.id());
    let equip = CardArea::new(AreaType::Equip).with_owner(a.id());
    let discard = CardArea::new(AreaType::DiscardPile);
    let starfield = CardArea::special("starfield");
    let cards = [
        Card::new(CardId::new(1), "slash", Suit::Spade, 1),
        Card::new(CardId::new(2), "crossbow", Suit::Club, 1),
        Card::new(CardId::new(3), "jink", Suit::Heart, 2),
    ];

    let value: CardsMoveValue = [
        CardMove::new(&hand, &discard, &cards[0]),
        CardMove::new(&equip, &starfield, &cards[1]),
        CardMove::new(&discard, &hand, &cards[2]).open(),
    ]
    .into_iter()
    .collect();

    assert_eq!(value.to_record_for(Some(&a)), value.to_record(true));
    assert_eq!(value.to_record_for(Some(&a)).redacted_count(), 0);
}
