//! Judgment values and card pattern matching.
//!
//! A judgment flips a card and compares it against a pattern fixed when the
//! judgment is created. `who` and `card` are usually filled in by different
//! handlers, so the verdict is only recomputed when a caller asks for it
//! with [`JudgeValue::update_result`].
//!
//! ## Pattern expressions
//!
//! [`ExpPattern`] understands the engine's expression form
//! `name|suit|number|place`:
//!
//! - `#` separates alternative expressions; any may match
//! - `,` separates alternative items within a field
//! - `.` (or an empty/missing field) matches anything
//! - `^` before an item negates it
//! - suits: `spade`, `heart`, `club`, `diamond`, `red`, `black`, `no_suit`
//! - numbers: `A`, `J`, `Q`, `K`, plain integers, ranges `2~9`
//!
//! The place field needs zone lookups this layer does not have; only the
//! wildcard matches there.
//!
//! ```
//! use rust_ccg_datavalue::core::{Card, CardId, Player, PlayerId, Suit};
//! use rust_ccg_datavalue::values::{ExpPattern, JudgeValue};
//!
//! let who = Player::new(PlayerId::new(0), "a");
//! let card = Card::new(CardId::new(1), "jink", Suit::Spade, 5);
//!
//! // Lightning strikes on spades 2 to 9.
//! let mut judge = JudgeValue::new(".|spade|2~9");
//! judge.who = Some(&who);
//! judge.card = Some(&card);
//! judge.update_result(&ExpPattern);
//! assert!(judge.matched);
//! ```

use crate::core::{Card, Player, Suit};

/// Decides whether a (player, card) pair satisfies a pattern.
///
/// Implementations must be pure.
pub trait PatternMatcher {
    fn matches(&self, pattern: &str, who: Option<&Player>, card: Option<&Card>) -> bool;
}

impl<F> PatternMatcher for F
where
    F: Fn(&str, Option<&Player>, Option<&Card>) -> bool,
{
    fn matches(&self, pattern: &str, who: Option<&Player>, card: Option<&Card>) -> bool {
        self(pattern, who, card)
    }
}

/// A judgment in progress.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct JudgeValue<'g> {
    pub who: Option<&'g Player>,
    pub card: Option<&'g Card>,
    /// Verdict of the last [`update_result`](Self::update_result); `false` before it.
    pub matched: bool,
    pattern: String,
}

impl<'g> JudgeValue<'g> {
    pub fn new(pattern: impl Into<String>) -> Self {
        Self {
            who: None,
            card: None,
            matched: false,
            pattern: pattern.into(),
        }
    }

    #[must_use]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Recompute `matched` from the current `who` and `card`.
    pub fn update_result<M>(&mut self, matcher: &M)
    where
        M: PatternMatcher + ?Sized,
    {
        self.matched = matcher.matches(&self.pattern, self.who, self.card);
    }
}

/// Matcher for `name|suit|number|place` expressions.
#[derive(Clone, Copy, Debug, Default)]
pub struct ExpPattern;

impl PatternMatcher for ExpPattern {
    fn matches(&self, pattern: &str, _who: Option<&Player>, card: Option<&Card>) -> bool {
        let Some(card) = card else {
            return false;
        };
        pattern.split('#').any(|expr| expression_matches(expr, card))
    }
}

fn expression_matches(expr: &str, card: &Card) -> bool {
    let mut fields = expr.split('|');
    let name = fields.next().unwrap_or(".");
    let suit = fields.next().unwrap_or(".");
    let number = fields.next().unwrap_or(".");
    let place = fields.next().unwrap_or(".");

    field_matches(name, |item| item == card.name())
        && field_matches(suit, |item| suit_matches(item, card.suit()))
        && field_matches(number, |item| number_matches(item, card.number()))
        && place.split(',').any(is_wildcard)
}

fn field_matches(field: &str, item_matches: impl Fn(&str) -> bool) -> bool {
    field.split(',').any(|item| {
        if is_wildcard(item) {
            return true;
        }
        match item.strip_prefix('^') {
            Some(negated) => !item_matches(negated),
            None => item_matches(item),
        }
    })
}

fn is_wildcard(item: &str) -> bool {
    item.is_empty() || item == "."
}

fn suit_matches(item: &str, suit: Suit) -> bool {
    match item {
        "spade" => suit == Suit::Spade,
        "heart" => suit == Suit::Heart,
        "club" => suit == Suit::Club,
        "diamond" => suit == Suit::Diamond,
        "no_suit" => suit == Suit::NoSuit,
        "red" => suit.is_red(),
        "black" => suit.is_black(),
        _ => false,
    }
}

fn number_matches(item: &str, number: u8) -> bool {
    match item.split_once('~') {
        Some((low, high)) => {
            let low = if low.is_empty() { Some(1) } else { parse_rank(low) };
            let high = if high.is_empty() { Some(13) } else { parse_rank(high) };
            match (low, high) {
                (Some(low), Some(high)) => (low..=high).contains(&number),
                _ => false,
            }
        }
        None => parse_rank(item) == Some(number),
    }
}

fn parse_rank(s: &str) -> Option<u8> {
    match s {
        "A" => Some(1),
        "J" => Some(11),
        "Q" => Some(12),
        "K" => Some(13),
        _ => s.parse().ok(),
    }
}
