//! Damage, recovery and death values.

use crate::core::{Card, Player};

/// Element of a damage instance.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum DamageNature {
    #[default]
    Normal,
    Fire,
    Thunder,
}

/// Damage about to be (or being) dealt.
///
/// Handlers may rewrite any field; `prevented` marks damage that a handler
/// stopped entirely.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DamageValue<'g> {
    /// `None` for damage without a player source.
    pub from: Option<&'g Player>,
    pub to: Option<&'g Player>,
    pub card: Option<&'g Card>,
    pub damage: i32,
    pub nature: DamageNature,
    /// Part of a chained-damage cascade.
    pub chain: bool,
    /// Redirected from another target.
    pub transfer: bool,
    /// False when the engine forces the damage.
    pub by_user: bool,
    pub prevented: bool,
}

impl Default for DamageValue<'_> {
    fn default() -> Self {
        Self {
            from: None,
            to: None,
            card: None,
            damage: 1,
            nature: DamageNature::Normal,
            chain: false,
            transfer: false,
            by_user: true,
            prevented: false,
        }
    }
}

impl<'g> DamageValue<'g> {
    /// Create one point of normal damage to `to`.
    pub fn new(to: &'g Player) -> Self {
        Self {
            to: Some(to),
            ..Self::default()
        }
    }

    /// Set the source (builder pattern).
    #[must_use]
    pub fn with_from(mut self, from: &'g Player) -> Self {
        self.from = Some(from);
        self
    }

    /// Set the amount (builder pattern).
    #[must_use]
    pub fn with_amount(mut self, damage: i32) -> Self {
        self.damage = damage;
        self
    }

    /// Set the nature (builder pattern).
    #[must_use]
    pub fn with_nature(mut self, nature: DamageNature) -> Self {
        self.nature = nature;
        self
    }

    pub fn prevent(&mut self) {
        self.prevented = true;
    }

    /// Damage still lands: not prevented and a positive amount.
    #[must_use]
    pub fn is_effective(&self) -> bool {
        !self.prevented && self.damage > 0
    }
}

/// Hit points about to be recovered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RecoverValue<'g> {
    pub from: Option<&'g Player>,
    pub to: Option<&'g Player>,
    pub recover: i32,
    pub card: Option<&'g Card>,
}

impl Default for RecoverValue<'_> {
    fn default() -> Self {
        Self {
            from: None,
            to: None,
            recover: 1,
            card: None,
        }
    }
}

/// A player's death.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DeathValue<'g> {
    pub who: Option<&'g Player>,
    /// The damage that killed `who`; `None` for deaths without damage.
    pub damage: Option<&'g DamageValue<'g>>,
}

impl<'g> DeathValue<'g> {
    /// The killer, if the death was caused by a player's damage.
    #[must_use]
    pub fn killer(&self) -> Option<&'g Player> {
        self.damage.and_then(|d| d.from)
    }
}
