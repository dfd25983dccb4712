//! Card use, per-target effect and response values.
//!
//! A [`CardUseValue`] describes one attempt to use a card. The resolver
//! derives one [`CardEffectValue`] per target from it; each effect borrows
//! its use, so it cannot outlive the use or the resolution that owns it.

use crate::core::{Card, Player};

use super::extra::Extra;
use super::PlayerList;

/// Why a card is being used.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum UseReason {
    Unknown,
    /// Used during the play phase on the user's own initiative.
    #[default]
    Play,
    /// Played out in answer to a request.
    Response,
    /// Used (with targets and effects) in answer to a request.
    ResponseUse,
}

/// One attempt to use a card.
///
/// Cloning deep-copies the target lists and the payload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardUseValue<'g> {
    pub from: Option<&'g Player>,
    pub to: PlayerList<'g>,
    pub card: Option<&'g Card>,
    /// The card this use is aimed at, e.g. the trick a nullification cancels.
    pub target: Option<&'g Card>,
    /// Players who nullified this use.
    pub nullified_list: PlayerList<'g>,
    pub is_nullified: bool,
    /// False when the user is forced to use the card by someone else.
    pub is_owner_use: bool,
    /// Whether the use counts towards per-turn usage limits.
    pub add_history: bool,
    pub is_handcard: bool,
    pub reason: UseReason,
    pub extra: Extra,
}

impl Default for CardUseValue<'_> {
    fn default() -> Self {
        Self {
            from: None,
            to: PlayerList::new(),
            card: None,
            target: None,
            nullified_list: PlayerList::new(),
            is_nullified: false,
            is_owner_use: true,
            add_history: true,
            is_handcard: true,
            reason: UseReason::default(),
            extra: Extra::default(),
        }
    }
}

impl<'g> CardUseValue<'g> {
    /// Create a use of `card` by `from`.
    pub fn new(from: &'g Player, card: &'g Card) -> Self {
        Self {
            from: Some(from),
            card: Some(card),
            ..Self::default()
        }
    }

    /// Add a target player (builder pattern).
    #[must_use]
    pub fn with_target(mut self, to: &'g Player) -> Self {
        self.to.push(to);
        self
    }

    /// Set the reason (builder pattern).
    #[must_use]
    pub fn with_reason(mut self, reason: UseReason) -> Self {
        self.reason = reason;
        self
    }

    /// Record that `by` nullified this use.
    pub fn nullify(&mut self, by: &'g Player) {
        if !self.nullified_list.contains(&by) {
            self.nullified_list.push(by);
        }
        self.is_nullified = true;
    }

    #[must_use]
    pub fn was_nullified_by(&self, player: &Player) -> bool {
        self.nullified_list.iter().any(|p| *p == player)
    }
}

/// One target's share of a [`CardUseValue`].
///
/// `from` is copied from the use; `to` starts empty and is set per target.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CardEffectValue<'g> {
    card_use: &'g CardUseValue<'g>,
    pub from: Option<&'g Player>,
    pub to: Option<&'g Player>,
}

impl<'g> CardEffectValue<'g> {
    pub fn new(card_use: &'g CardUseValue<'g>) -> Self {
        Self {
            card_use,
            from: card_use.from,
            to: None,
        }
    }

    /// Set the target (builder pattern).
    #[must_use]
    pub fn with_to(mut self, to: &'g Player) -> Self {
        self.to = Some(to);
        self
    }

    /// One effect per target of `card_use`, in target order.
    pub fn per_target(card_use: &'g CardUseValue<'g>) -> impl Iterator<Item = Self> + 'g {
        card_use
            .to
            .iter()
            .copied()
            .map(move |target| Self::new(card_use).with_to(target))
    }

    /// The use this effect was derived from.
    #[must_use]
    pub fn card_use(&self) -> &'g CardUseValue<'g> {
        self.card_use
    }

    #[must_use]
    pub fn card(&self) -> Option<&'g Card> {
        self.card_use.card
    }
}

/// A card played out in answer to a request.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CardResponseValue<'g> {
    pub from: Option<&'g Player>,
    pub to: Option<&'g Player>,
    pub card: Option<&'g Card>,
    /// The card being answered, if any.
    pub target: Option<&'g Card>,
    /// The card replaces a judgment card.
    pub is_retrial: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{CardId, PlayerId, Suit};
    use crate::values::ExtraValue;

    #[test]
    fn test_use_defaults() {
        let value = CardUseValue::default();
        assert!(value.from.is_none());
        assert!(value.card.is_none());
        assert!(value.target.is_none());
        assert!(value.to.is_empty());
        assert!(value.nullified_list.is_empty());
        assert!(!value.is_nullified);
        assert!(value.is_owner_use);
        assert!(value.add_history);
        assert!(value.is_handcard);
        assert_eq!(value.reason, UseReason::Play);
        assert!(value.extra.is_empty());
    }

    #[test]
    fn test_use_clone_is_deep() {
        let a = Player::new(PlayerId::new(0), "a");
        let b = Player::new(PlayerId::new(1), "b");
        let slash = Card::new(CardId::new(1), "slash", Suit::Spade, 7);

        let mut original = CardUseValue::new(&a, &slash).with_target(&b);
        original.extra.insert("combo".to_string(), ExtraValue::Int(1));

        let mut copy = original.clone();
        assert_eq!(copy, original);

        copy.to.push(&a);
        copy.nullify(&b);
        copy.extra.insert("combo".to_string(), ExtraValue::Int(2));

        assert_eq!(original.to.len(), 1);
        assert!(original.nullified_list.is_empty());
        assert!(!original.is_nullified);
        assert_eq!(original.extra["combo"], ExtraValue::Int(1));
    }

    #[test]
    fn test_nullify_records_once() {
        let a = Player::new(PlayerId::new(0), "a");
        let b = Player::new(PlayerId::new(1), "b");
        let mut value = CardUseValue::default();

        value.nullify(&b);
        value.nullify(&b);

        assert!(value.is_nullified);
        assert_eq!(value.nullified_list.len(), 1);
        assert!(value.was_nullified_by(&b));
        assert!(!value.was_nullified_by(&a));
    }

    #[test]
    fn test_effect_from_use() {
        let a = Player::new(PlayerId::new(0), "a");
        let b = Player::new(PlayerId::new(1), "b");
        let c = Player::new(PlayerId::new(2), "c");
        let duel = Card::new(CardId::new(5), "duel", Suit::Spade, 1);
        let value = CardUseValue::new(&a, &duel).with_target(&b).with_target(&c);

        let effect = CardEffectValue::new(&value);
        assert_eq!(effect.from, Some(&a));
        assert!(effect.to.is_none());
        assert_eq!(effect.card(), Some(&duel));
        assert!(std::ptr::eq(effect.card_use(), &value));

        let targets: Vec<_> = CardEffectValue::per_target(&value)
            .map(|e| e.to.map(Player::id))
            .collect();
        assert_eq!(targets, vec![Some(b.id()), Some(c.id())]);
    }

    #[test]
    fn test_response_defaults() {
        let value = CardResponseValue::default();
        assert!(value.from.is_none());
        assert!(value.to.is_none());
        assert!(value.card.is_none());
        assert!(value.target.is_none());
        assert!(!value.is_retrial);
    }
}
