//! Tag-driven value construction.

use crate::values::{CardEffectValue, DataValue, IntValue, JudgeValue, ValueKind};

/// Builds values from tags and loosely-typed inputs.
///
/// The tag → constructor table is [`ValueKind::default_value`], an
/// exhaustive match, so every tag in the vocabulary has an entry.
pub struct ValueRegistry;

impl ValueRegistry {
    /// Build the default value for `tag`.
    ///
    /// Returns `None` for an unregistered tag, and for `CardEffectValue` and
    /// `JudgeValue`, which need a source use or a pattern (see
    /// [`create_from_value`](Self::create_from_value) and
    /// [`create_from_pattern`](Self::create_from_pattern)).
    #[must_use]
    pub fn create<'g>(tag: &str) -> Option<DataValue<'g>> {
        let kind = match ValueKind::from_tag(tag) {
            Ok(kind) => kind,
            Err(err) => {
                tracing::debug!(%err, "value registry miss");
                return None;
            }
        };

        let value = kind.default_value();
        if value.is_none() {
            tracing::debug!(%kind, "value kind has no default; use a typed entry point");
        }
        value
    }

    /// Build an `IntValue` holding `value`.
    ///
    /// `ignored_tag` is not consulted: every tag yields an `IntValue`.
    #[must_use]
    pub fn create_from_int<'g>(ignored_tag: &str, value: i32) -> DataValue<'g> {
        tracing::trace!(tag = ignored_tag, value, "building IntValue, tag ignored");
        DataValue::Int(IntValue::new(value))
    }

    /// Derive a `CardEffectValue` from a `CardUseValue`.
    ///
    /// Dispatch is on the runtime kind of `source`; `ignored_tag` is not
    /// consulted. Any other kind yields `None`. The effect borrows the use,
    /// so it cannot outlive `source`.
    #[must_use]
    pub fn create_from_value<'a>(ignored_tag: &str, source: &'a DataValue<'a>) -> Option<DataValue<'a>> {
        match source {
            DataValue::CardUse(card_use) => {
                Some(DataValue::CardEffect(CardEffectValue::new(card_use)))
            }
            other => {
                tracing::debug!(
                    tag = ignored_tag,
                    found = %other.kind(),
                    "card effect requested from a value that is not a card use"
                );
                None
            }
        }
    }

    /// Build a `JudgeValue` for `pattern`.
    ///
    /// `ignored_tag` is not consulted: every tag yields a `JudgeValue`.
    #[must_use]
    pub fn create_from_pattern<'g>(ignored_tag: &str, pattern: &str) -> DataValue<'g> {
        tracing::trace!(tag = ignored_tag, pattern, "building JudgeValue, tag ignored");
        DataValue::Judge(JudgeValue::new(pattern))
    }

    /// All registered tags.
    pub fn tags() -> impl Iterator<Item = &'static str> {
        ValueKind::all().map(ValueKind::tag)
    }

    #[must_use]
    pub fn is_registered(tag: &str) -> bool {
        ValueKind::from_tag(tag).is_ok()
    }
}
