//! Observer-relative rendering of move values.
//!
//! The same move event must reach each recipient in a form that discloses
//! exactly the cards that recipient may know. [`ObserverSerializer`] applies
//! the configured [`RevealMode`](crate::core::RevealMode) and produces one
//! [`WireRecord`] per recipient for an external transport to frame.
//!
//! ```
//! use rust_ccg_datavalue::core::{AreaType, Card, CardArea, CardId, Player, PlayerId, Suit, ViewConfig};
//! use rust_ccg_datavalue::values::{CardMove, CardsMoveValue, DataValue};
//! use rust_ccg_datavalue::view::ObserverSerializer;
//!
//! let alice = Player::new(PlayerId::new(0), "alice");
//! let bob = Player::new(PlayerId::new(1), "bob");
//! let draw_pile = CardArea::new(AreaType::DrawPile);
//! let hand = CardArea::new(AreaType::Hand).with_owner(alice.id());
//! let card = Card::new(CardId::new(4), "jink", Suit::Diamond, 2);
//!
//! let value: DataValue = [CardMove::new(&draw_pile, &hand, &card)]
//!     .into_iter()
//!     .collect::<CardsMoveValue>()
//!     .into();
//!
//! let serializer = ObserverSerializer::new(ViewConfig::default());
//! let views = serializer.broadcast(&value, &[&alice, &bob]);
//! assert_eq!(views[0].record.revealed_cards(), vec![CardId::new(4)]);
//! assert!(views[1].record.revealed_cards().is_empty());
//! ```

mod serializer;

pub use serializer::{ObserverSerializer, ObserverView, WireRecord};
