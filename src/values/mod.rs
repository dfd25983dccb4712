//! Event data values.
//!
//! Every in-flight state transition (a card changing areas, a phase change,
//! a card use, damage, a judgment, a death, a skill invocation) is carried
//! through its resolution as one of these values. Handlers read and rewrite
//! it in turn; the serializer renders it per recipient; then it is dropped.
//!
//! ## Key Types
//!
//! - [`ValueKind`]: the closed tag vocabulary (`"CardMove"`, `"DamageValue"`, ...)
//! - [`DataValue`]: one value of any kind, for code that only knows the tag
//! - One struct per kind: [`CardMove`], [`CardsMoveValue`], [`DamageValue`], ...
//!
//! ## Borrowing
//!
//! Values borrow session entities for `'g`; they own only their scalars and
//! lists. A [`CardEffectValue`] and a [`DeathValue`] additionally borrow the
//! value they were derived from.
//!
//! ```
//! use rust_ccg_datavalue::core::{Player, PlayerId};
//! use rust_ccg_datavalue::values::{DamageValue, DataValue, ValueKind};
//!
//! let target = Player::new(PlayerId::new(1), "b");
//! let mut value = DataValue::from(DamageValue::new(&target));
//! assert_eq!(value.kind(), ValueKind::DamageValue);
//!
//! if let Some(damage) = value.as_damage_mut() {
//!     damage.damage += 1;
//! }
//! assert_eq!(value.as_damage().map(|d| d.damage), Some(2));
//! ```

mod card_use;
mod damage;
mod extra;
mod judge;
mod moves;
mod skill;
mod turn;

pub use card_use::{CardEffectValue, CardResponseValue, CardUseValue, UseReason};
pub use damage::{DamageNature, DamageValue, DeathValue, RecoverValue};
pub use extra::{Extra, ExtraValue};
pub use judge::{ExpPattern, JudgeValue, PatternMatcher};
pub use moves::{CardMove, CardsMoveRecord, CardsMoveValue, MoveRecord};
pub use skill::{SkillInvokeValue, SkillValue};
pub use turn::PhaseChangeValue;

use strum::IntoEnumIterator;

use crate::core::{Card, Player};
use crate::error::ValueError;

/// Borrowed players, in order.
///
/// A plain `Vec` keeps values covariant in `'g`, so a value borrowed for a
/// shorter scope (as a card effect borrows its use) type-checks.
pub type PlayerList<'g> = Vec<&'g Player>;

/// Borrowed cards, in order.
pub type CardList<'g> = Vec<&'g Card>;

/// A bare integer carried through the same interface as structured values.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct IntValue {
    pub value: i32,
}

impl IntValue {
    #[must_use]
    pub const fn new(value: i32) -> Self {
        Self { value }
    }
}

impl From<i32> for IntValue {
    fn from(value: i32) -> Self {
        Self::new(value)
    }
}

/// Tag of a value kind.
///
/// The string form is the tag used by trigger and wire code; parsing is
/// case-sensitive.
///
/// ```
/// use rust_ccg_datavalue::values::ValueKind;
///
/// assert_eq!(ValueKind::from_tag("CardsMoveValue"), Ok(ValueKind::CardsMoveValue));
/// assert_eq!(ValueKind::JudgeValue.tag(), "JudgeValue");
/// assert!(ValueKind::from_tag("cardsmovevalue").is_err());
/// ```
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::IntoStaticStr,
    strum::EnumIter,
)]
pub enum ValueKind {
    CardMove,
    CardsMoveValue,
    PhaseChangeValue,
    CardUseValue,
    CardEffectValue,
    DamageValue,
    RecoverValue,
    CardResponseValue,
    JudgeValue,
    DeathValue,
    SkillValue,
    SkillInvokeValue,
    IntValue,
}

impl ValueKind {
    /// Parse a tag.
    pub fn from_tag(tag: &str) -> Result<Self, ValueError> {
        tag.parse()
            .map_err(|_| ValueError::UnknownKind(tag.to_string()))
    }

    #[must_use]
    pub fn tag(self) -> &'static str {
        self.into()
    }

    /// Every kind, in declaration order.
    pub fn all() -> impl Iterator<Item = ValueKind> {
        ValueKind::iter()
    }

    /// Whether a value of this kind can be built from its tag alone.
    ///
    /// A card effect needs the use it belongs to and a judgment needs its
    /// pattern; neither has a meaningful default.
    #[must_use]
    pub const fn is_default_constructible(self) -> bool {
        !matches!(self, ValueKind::CardEffectValue | ValueKind::JudgeValue)
    }

    /// Build the default value of this kind.
    #[must_use]
    pub fn default_value<'g>(self) -> Option<DataValue<'g>> {
        let value = match self {
            ValueKind::CardMove => DataValue::CardMove(CardMove::default()),
            ValueKind::CardsMoveValue => DataValue::CardsMove(CardsMoveValue::default()),
            ValueKind::PhaseChangeValue => DataValue::PhaseChange(PhaseChangeValue::default()),
            ValueKind::CardUseValue => DataValue::CardUse(CardUseValue::default()),
            ValueKind::DamageValue => DataValue::Damage(DamageValue::default()),
            ValueKind::RecoverValue => DataValue::Recover(RecoverValue::default()),
            ValueKind::CardResponseValue => DataValue::CardResponse(CardResponseValue::default()),
            ValueKind::DeathValue => DataValue::Death(DeathValue::default()),
            ValueKind::SkillValue => DataValue::Skill(SkillValue::default()),
            ValueKind::SkillInvokeValue => DataValue::SkillInvoke(SkillInvokeValue::default()),
            ValueKind::IntValue => DataValue::Int(IntValue::default()),
            ValueKind::CardEffectValue | ValueKind::JudgeValue => return None,
        };
        Some(value)
    }
}

/// A value of any kind.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DataValue<'g> {
    CardMove(CardMove<'g>),
    CardsMove(CardsMoveValue<'g>),
    PhaseChange(PhaseChangeValue),
    CardUse(CardUseValue<'g>),
    CardEffect(CardEffectValue<'g>),
    Damage(DamageValue<'g>),
    Recover(RecoverValue<'g>),
    CardResponse(CardResponseValue<'g>),
    Judge(JudgeValue<'g>),
    Death(DeathValue<'g>),
    Skill(SkillValue<'g>),
    SkillInvoke(SkillInvokeValue<'g>),
    Int(IntValue),
}

macro_rules! data_value_variants {
    ($lt:lifetime; $($variant:ident($ty:ty) => $kind:ident, $as_ref:ident, $as_mut:ident;)*) => {
        impl<$lt> DataValue<$lt> {
            /// The kind tag of this value.
            #[must_use]
            pub fn kind(&self) -> ValueKind {
                match self {
                    $(DataValue::$variant(_) => ValueKind::$kind,)*
                }
            }

            $(
                #[must_use]
                pub fn $as_ref(&self) -> Option<&$ty> {
                    match self {
                        DataValue::$variant(v) => Some(v),
                        _ => None,
                    }
                }

                pub fn $as_mut(&mut self) -> Option<&mut $ty> {
                    match self {
                        DataValue::$variant(v) => Some(v),
                        _ => None,
                    }
                }
            )*
        }

        $(
            impl<$lt> From<$ty> for DataValue<$lt> {
                fn from(value: $ty) -> Self {
                    DataValue::$variant(value)
                }
            }

            impl<$lt> TryFrom<DataValue<$lt>> for $ty {
                type Error = ValueError;

                fn try_from(value: DataValue<$lt>) -> Result<Self, Self::Error> {
                    match value {
                        DataValue::$variant(v) => Ok(v),
                        other => Err(ValueError::KindMismatch {
                            expected: ValueKind::$kind,
                            found: other.kind(),
                        }),
                    }
                }
            }
        )*
    };
}

data_value_variants! { 'g;
    CardMove(CardMove<'g>) => CardMove, as_card_move, as_card_move_mut;
    CardsMove(CardsMoveValue<'g>) => CardsMoveValue, as_cards_move, as_cards_move_mut;
    PhaseChange(PhaseChangeValue) => PhaseChangeValue, as_phase_change, as_phase_change_mut;
    CardUse(CardUseValue<'g>) => CardUseValue, as_card_use, as_card_use_mut;
    CardEffect(CardEffectValue<'g>) => CardEffectValue, as_card_effect, as_card_effect_mut;
    Damage(DamageValue<'g>) => DamageValue, as_damage, as_damage_mut;
    Recover(RecoverValue<'g>) => RecoverValue, as_recover, as_recover_mut;
    CardResponse(CardResponseValue<'g>) => CardResponseValue, as_card_response, as_card_response_mut;
    Judge(JudgeValue<'g>) => JudgeValue, as_judge, as_judge_mut;
    Death(DeathValue<'g>) => DeathValue, as_death, as_death_mut;
    Skill(SkillValue<'g>) => SkillValue, as_skill, as_skill_mut;
    SkillInvoke(SkillInvokeValue<'g>) => SkillInvokeValue, as_skill_invoke, as_skill_invoke_mut;
    Int(IntValue) => IntValue, as_int, as_int_mut;
}
