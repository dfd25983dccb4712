//! Construction of values by tag.
//!
//! Trigger dispatch and wire code often hold only a tag string. The
//! [`ValueRegistry`] turns a tag plus whatever input is at hand into the
//! right [`DataValue`](crate::values::DataValue):
//!
//! | Entry point | Input | Result |
//! |---|---|---|
//! | [`create`](ValueRegistry::create) | tag | default value of that kind |
//! | [`create_from_int`](ValueRegistry::create_from_int) | integer | always an `IntValue` |
//! | [`create_from_value`](ValueRegistry::create_from_value) | existing value | `CardEffectValue` if the value is a `CardUseValue` |
//! | [`create_from_pattern`](ValueRegistry::create_from_pattern) | pattern | always a `JudgeValue` |
//!
//! Only `create` reads the tag. The other three accept one for call-site
//! uniformity and ignore it: the shape of the input alone picks the result.
//! Misses are `None`, never errors.
//!
//! ```
//! use rust_ccg_datavalue::registry::ValueRegistry;
//! use rust_ccg_datavalue::values::ValueKind;
//!
//! let damage = ValueRegistry::create("DamageValue").unwrap();
//! assert_eq!(damage.kind(), ValueKind::DamageValue);
//!
//! assert!(ValueRegistry::create("NoSuchValue").is_none());
//!
//! // The tag is ignored on the integer path.
//! let n = ValueRegistry::create_from_int("DamageValue", 7);
//! assert_eq!(n.as_int().map(|v| v.value), Some(7));
//! ```

mod value_registry;

pub use value_registry::ValueRegistry;
