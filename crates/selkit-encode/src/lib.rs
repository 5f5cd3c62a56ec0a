//! Selector encoding for runtime structural matching.
//!
//! A structured selector such as `div[title=x].a.b:not(span)` is re-serialized
//! into a flat sequence of literal strings and small integer flags:
//!
//! ```text
//! ["div", "title", "x", CLASS, "a", "b", NOT|ELEMENT, "span"]
//! ```
//!
//! The runtime matcher walks this sequence left to right. A flag switches
//! the matching mode (element, attribute, class) and may mark the start of a
//! negated clause; every literal is interpreted under the most recent mode.
//! The encoding is never re-parsed as selector text.
//!
//! # Layout
//!
//! - [`flags`]: the composable [`SelectorFlags`] bit set
//! - [`token`]: [`SelectorToken`], [`EncodedSelector`] and their boundary
//!   serialization
//! - [`encoder`]: the positive segment, negative segment, selector and group
//!   encoders

/// Selector encoding functions.
pub mod encoder;
/// Mode and negation flags.
pub mod flags;
/// Encoded tokens and sequences.
pub mod token;

pub use encoder::{
    NegationMode, encode_negative_segment, encode_positive_segment, encode_selector,
    encode_selector_group, encode_selectors, negation_mode,
};
pub use flags::SelectorFlags;
pub use token::{EncodedSelector, EncodedSelectorGroup, SelectorToken};
