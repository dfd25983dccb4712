//! Resolution of one value through rule handlers.
//!
//! While an event is being resolved, rules may rewrite its value: raise the
//! damage, redirect the target, swap the judgment card. A [`HandlerChain`]
//! runs those rules in a deterministic order, handing each one exclusive
//! mutable access to the value. Any handler can stop the chain.
//!
//! ## Key Types
//!
//! - [`Handler`]: a named callback plus the kinds it listens for
//! - [`HandlerChain`]: registered handlers and the `resolve` driver
//! - [`Flow`]: continue or halt after a handler
//! - [`ResolutionReport`]: which handlers ran and who halted
//!
//! ```
//! use rust_ccg_datavalue::core::{Player, PlayerId};
//! use rust_ccg_datavalue::resolution::{Flow, Handler, HandlerChain};
//! use rust_ccg_datavalue::values::{DamageValue, DataValue, ValueKind};
//!
//! let victim = Player::new(PlayerId::new(1), "victim");
//! let mut value = DataValue::from(DamageValue::new(&victim));
//!
//! let mut chain = HandlerChain::new();
//! chain.register(
//!     Handler::new("rage", |value: &mut DataValue<'_>| {
//!         if let Some(damage) = value.as_damage_mut() {
//!             damage.damage += 1;
//!         }
//!         Flow::Continue
//!     })
//!     .on(ValueKind::DamageValue),
//! );
//!
//! let report = chain.resolve(&mut value);
//! assert_eq!(report.invoked.len(), 1);
//! assert_eq!(value.as_damage().map(|d| d.damage), Some(2));
//! ```

mod chain;

pub use chain::{Flow, Handler, HandlerChain, HandlerId, ResolutionReport};
