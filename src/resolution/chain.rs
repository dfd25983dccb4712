//! Ordered handler chain for one value.

use rustc_hash::FxHashMap;

use crate::values::{DataValue, ValueKind};

/// Unique identifier for a handler in a chain.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HandlerId(pub u32);

impl HandlerId {
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for HandlerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Handler({})", self.0)
    }
}

/// What the chain does after a handler returns.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Flow {
    /// Pass the value on to the next handler.
    #[default]
    Continue,
    /// Stop: no later handler sees the value.
    Halt,
}

type Callback<'a> = Box<dyn FnMut(&mut DataValue<'a>) -> Flow + 'a>;

/// A rule handler.
pub struct Handler<'a> {
    /// Assigned by [`HandlerChain::register`].
    pub id: HandlerId,

    /// Human-readable name (for logs).
    pub name: String,

    /// Kinds this handler listens for. Empty means every kind.
    pub kinds: Vec<ValueKind>,

    /// Higher runs first; ties run in registration order.
    pub priority: i32,

    pub enabled: bool,

    /// How many more times this handler may run. `None` = unlimited.
    pub uses_remaining: Option<u32>,

    callback: Callback<'a>,
}

impl<'a> Handler<'a> {
    /// Create a handler listening to every kind.
    pub fn new(
        name: impl Into<String>,
        callback: impl FnMut(&mut DataValue<'a>) -> Flow + 'a,
    ) -> Self {
        Self {
            id: HandlerId::new(0),
            name: name.into(),
            kinds: Vec::new(),
            priority: 0,
            enabled: true,
            uses_remaining: None,
            callback: Box::new(callback),
        }
    }

    /// Listen for `kind` (builder pattern).
    #[must_use]
    pub fn on(mut self, kind: ValueKind) -> Self {
        if !self.kinds.contains(&kind) {
            self.kinds.push(kind);
        }
        self
    }

    /// Set priority (builder pattern).
    #[must_use]
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Set limited uses (builder pattern).
    #[must_use]
    pub fn with_uses(mut self, uses: u32) -> Self {
        self.uses_remaining = Some(uses);
        self
    }

    #[must_use]
    pub fn listens_to(&self, kind: ValueKind) -> bool {
        self.kinds.is_empty() || self.kinds.contains(&kind)
    }

    /// Check if this handler can run (enabled and has uses).
    #[must_use]
    pub fn can_fire(&self) -> bool {
        self.enabled && self.uses_remaining.is_none_or(|u| u > 0)
    }

    fn consume_use(&mut self) {
        if let Some(ref mut uses) = self.uses_remaining {
            *uses = uses.saturating_sub(1);
        }
    }
}

impl std::fmt::Debug for Handler<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Handler")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("kinds", &self.kinds)
            .field("priority", &self.priority)
            .field("enabled", &self.enabled)
            .field("uses_remaining", &self.uses_remaining)
            .finish_non_exhaustive()
    }
}

/// Outcome of one [`HandlerChain::resolve`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResolutionReport {
    /// Handlers that ran, in order.
    pub invoked: Vec<HandlerId>,
    /// The handler that stopped the chain, if any.
    pub halted_by: Option<HandlerId>,
}

impl ResolutionReport {
    #[must_use]
    pub fn is_halted(&self) -> bool {
        self.halted_by.is_some()
    }
}

/// Handlers that resolve values, run in priority order.
#[derive(Debug, Default)]
pub struct HandlerChain<'a> {
    handlers: FxHashMap<HandlerId, Handler<'a>>,
    next_id: u32,
}

impl<'a> HandlerChain<'a> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            handlers: FxHashMap::default(),
            next_id: 1,
        }
    }

    /// Register a handler, returns its ID.
    pub fn register(&mut self, mut handler: Handler<'a>) -> HandlerId {
        let id = HandlerId::new(self.next_id.max(1));
        self.next_id = id.0 + 1;
        handler.id = id;
        self.handlers.insert(id, handler);
        id
    }

    pub fn unregister(&mut self, id: HandlerId) -> Option<Handler<'a>> {
        self.handlers.remove(&id)
    }

    #[must_use]
    pub fn get(&self, id: HandlerId) -> Option<&Handler<'a>> {
        self.handlers.get(&id)
    }

    /// Enable or disable a handler.
    pub fn set_enabled(&mut self, id: HandlerId, enabled: bool) {
        if let Some(handler) = self.handlers.get_mut(&id) {
            handler.enabled = enabled;
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Pass `value` through every handler listening for its kind.
    ///
    /// The order is fixed before the first handler runs: priority
    /// (descending), then id (ascending). Each handler gets the exclusive
    /// borrow in turn; a [`Flow::Halt`] ends the chain.
    pub fn resolve(&mut self, value: &mut DataValue<'a>) -> ResolutionReport {
        let kind = value.kind();

        let mut order: Vec<(i32, HandlerId)> = self
            .handlers
            .values()
            .filter(|h| h.can_fire() && h.listens_to(kind))
            .map(|h| (h.priority, h.id))
            .collect();
        order.sort_by(|a, b| b.0.cmp(&a.0).then_with(|| a.1.cmp(&b.1)));

        let mut report = ResolutionReport::default();
        for (_, id) in order {
            let Some(handler) = self.handlers.get_mut(&id) else {
                continue;
            };

            tracing::trace!(handler = %handler.name, %kind, "invoking handler");
            let flow = (handler.callback)(value);
            handler.consume_use();
            report.invoked.push(id);

            if flow == Flow::Halt {
                tracing::debug!(handler = %handler.name, %kind, "resolution halted");
                report.halted_by = Some(id);
                break;
            }
        }
        report
    }
}
