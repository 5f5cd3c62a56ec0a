//! Structured selectors and the parser that produces them.
//!
//! # Scope
//!
//! This crate implements:
//! - **Structured Selector** ([`CssSelector`])
//!   - Element name (with `*` treated as "any element")
//!   - Ordered attribute name/value pairs
//!   - Ordered class names
//!   - One level of `:not(...)` negations
//!   - Canonical text rendering via `Display`
//!
//! - **Selector Parser** ([`parse_selector_group`])
//!   - Comma-separated alternatives
//!   - Type, universal, class and attribute selectors
//!   - `:not(...)` holding a single simple selector
//!
//! # Not Supported
//!
//! - Combinators (descendant, child, sibling)
//! - ID selectors
//! - Attribute operators other than `=`
//! - Pseudo-classes other than `:not` (skipped with a warning)

/// Selector text parsing.
pub mod parser;
/// The structured selector record.
pub mod selector;

pub use parser::{SelectorParseError, parse_selector_group};
pub use selector::{CssSelector, UNIVERSAL_SELECTOR};
