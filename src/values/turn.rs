//! Phase transition values.

use crate::core::Phase;

/// A turn moving from one phase to another.
///
/// Both ends start as [`Phase::Invalid`] until the engine fills them in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct PhaseChangeValue {
    pub from: Phase,
    pub to: Phase,
}

impl PhaseChangeValue {
    #[must_use]
    pub const fn new(from: Phase, to: Phase) -> Self {
        Self { from, to }
    }

    /// A handler may skip a phase by rewriting `to` back to the sentinel.
    #[must_use]
    pub const fn is_skipped(&self) -> bool {
        !self.to.is_valid()
    }
}
