//! Skill ownership and invocation values.

use crate::core::{Player, Skill, SkillArea};

use super::{CardList, PlayerList};

/// Which player holds a skill, and where it is attached.
///
/// Describes visibility and ownership, not an invocation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SkillValue<'g> {
    pub owner: Option<&'g Player>,
    pub skill: Option<&'g Skill>,
    pub area: SkillArea,
}

/// One invocation of a skill.
///
/// Cloning deep-copies both lists.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SkillInvokeValue<'g> {
    pub player: Option<&'g Player>,
    pub skill: Option<&'g Skill>,
    pub targets: PlayerList<'g>,
    pub cards: CardList<'g>,
}

impl<'g> SkillInvokeValue<'g> {
    pub fn new(player: &'g Player, skill: &'g Skill) -> Self {
        Self {
            player: Some(player),
            skill: Some(skill),
            ..Self::default()
        }
    }
}
