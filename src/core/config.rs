//! Serializer configuration.
//!
//! Hosts configure how move values are rendered for recipients:
//! - `RevealMode::PerObserver`: each recipient sees what zone ownership
//!   entitles them to (normal play)
//! - `RevealMode::All`: every card identity is written (replays, server logs)
//! - `RevealMode::None`: only openly moved cards are written (public feeds)
//!
//! `ViewConfig` derives `Deserialize` with field defaults, so it can be
//! embedded in a host's configuration file.

use serde::{Deserialize, Serialize};

/// How card identities in move values are disclosed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RevealMode {
    /// Disclose per move, by the recipient's relevance to it.
    #[default]
    PerObserver,
    /// Disclose every card identity to every recipient.
    All,
    /// Disclose only cards that were moved openly.
    None,
}

/// Configuration for observer-relative rendering.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    /// Disclosure policy.
    pub reveal: RevealMode,
}

impl ViewConfig {
    /// Create the default (per-observer) configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration for replays and server-side logs.
    #[must_use]
    pub fn replay() -> Self {
        Self::new().with_reveal(RevealMode::All)
    }

    /// Configuration for feeds shown to nobody in particular.
    #[must_use]
    pub fn public() -> Self {
        Self::new().with_reveal(RevealMode::None)
    }

    /// Set the disclosure policy.
    #[must_use]
    pub fn with_reveal(mut self, reveal: RevealMode) -> Self {
        self.reveal = reveal;
        self
    }
}
