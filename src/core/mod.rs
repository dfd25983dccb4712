//! Session entities the value layer refers to, and serializer configuration.
//!
//! Players, cards, areas and skills are owned by the game session. Values
//! borrow them; this module only models the identity and accessors the
//! value layer reads.

pub mod area;
pub mod card;
pub mod config;
pub mod player;
pub mod skill;

pub use area::{AreaRecord, AreaType, CardArea, Direction};
pub use card::{Card, CardId, Suit};
pub use config::{RevealMode, ViewConfig};
pub use player::{Phase, Player, PlayerId, SkillArea};
pub use skill::Skill;
