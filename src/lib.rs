//! # rust-ccg datavalue
//!
//! Event data values for a multiplayer card game engine.
//!
//! Every state transition in a session (a card changing areas, a phase
//! change, a card use, damage, a judgment, a death, a skill invocation) is
//! carried through its resolution as a typed value. Rule handlers read and
//! rewrite it in priority order, then the same value is rendered once per
//! recipient with hidden card identities redacted.
//!
//! ## Design Principles
//!
//! 1. **Borrowed Entities**: Values borrow players, cards and areas from the
//!    session for `'g`. They never own or outlive them.
//!
//! 2. **Closed Vocabulary**: Value kinds form a fixed enum. The tag strings
//!    are the only stringly-typed surface and they parse into [`ValueKind`].
//!
//! 3. **Observer-Relative Output**: A move discloses its card only to the
//!    owners of the areas involved, unless the move is open.
//!
//! ## Modules
//!
//! - `core`: Players, cards, areas, skills, phases and the view configuration
//! - `values`: The value kinds and the [`DataValue`] sum type
//! - `registry`: Construction of values by tag
//! - `resolution`: Priority-ordered handler chain over one value
//! - `view`: Per-recipient rendering of move values
//! - `error`: The crate error type

pub mod core;
pub mod error;
pub mod registry;
pub mod resolution;
pub mod values;
pub mod view;

// Re-export commonly used types
pub use crate::core::{
    AreaRecord, AreaType, Card, CardArea, CardId, Direction, Phase, Player, PlayerId,
    RevealMode, Skill, SkillArea, Suit, ViewConfig,
};

pub use crate::error::ValueError;

pub use crate::values::{
    CardEffectValue, CardMove, CardResponseValue, CardUseValue, CardsMoveRecord,
    CardsMoveValue, DamageNature, DamageValue, DataValue, DeathValue, ExpPattern, IntValue,
    JudgeValue, MoveRecord, PatternMatcher, PhaseChangeValue, RecoverValue, SkillInvokeValue,
    SkillValue, UseReason, ValueKind,
};

pub use crate::registry::ValueRegistry;

pub use crate::resolution::{Flow, Handler, HandlerChain, HandlerId, ResolutionReport};

pub use crate::view::{ObserverSerializer, ObserverView, WireRecord};
