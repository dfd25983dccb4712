//! Free-form payload attached to card uses.
//!
//! Skills sometimes need to stash data on a use for later handlers in the
//! same resolution ("this slash ignores armor", "the card it copies").
//! The value layer stores it without interpreting it.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::{CardId, PlayerId};

/// A payload entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExtraValue {
    Int(i64),
    Bool(bool),
    Text(String),
    Card(CardId),
    Player(PlayerId),
    List(Vec<ExtraValue>),
}

impl ExtraValue {
    #[must_use]
    pub fn as_int(&self) -> Option<i64> {
        match self {
            ExtraValue::Int(v) => Some(*v),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ExtraValue::Bool(v) => Some(*v),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            ExtraValue::Text(s) => Some(s),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_card(&self) -> Option<CardId> {
        match self {
            ExtraValue::Card(id) => Some(*id),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_player(&self) -> Option<PlayerId> {
        match self {
            ExtraValue::Player(id) => Some(*id),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_list(&self) -> Option<&[ExtraValue]> {
        match self {
            ExtraValue::List(items) => Some(items),
            _ => None,
        }
    }
}

impl From<i64> for ExtraValue {
    fn from(v: i64) -> Self {
        ExtraValue::Int(v)
    }
}

impl From<i32> for ExtraValue {
    fn from(v: i32) -> Self {
        ExtraValue::Int(i64::from(v))
    }
}

impl From<bool> for ExtraValue {
    fn from(v: bool) -> Self {
        ExtraValue::Bool(v)
    }
}

impl From<&str> for ExtraValue {
    fn from(v: &str) -> Self {
        ExtraValue::Text(v.to_string())
    }
}

impl From<String> for ExtraValue {
    fn from(v: String) -> Self {
        ExtraValue::Text(v)
    }
}

impl From<CardId> for ExtraValue {
    fn from(v: CardId) -> Self {
        ExtraValue::Card(v)
    }
}

impl From<PlayerId> for ExtraValue {
    fn from(v: PlayerId) -> Self {
        ExtraValue::Player(v)
    }
}

impl From<Vec<ExtraValue>> for ExtraValue {
    fn from(v: Vec<ExtraValue>) -> Self {
        ExtraValue::List(v)
    }
}

/// String-keyed payload map.
pub type Extra = FxHashMap<String, ExtraValue>;
