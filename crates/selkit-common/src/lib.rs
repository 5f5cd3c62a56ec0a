//! Common utilities for the selkit toolchain.
//!
//! This crate provides shared infrastructure used by the selector crates:
//! - **Warning System** - colored, deduplicated terminal output for selector
//!   syntax that is accepted but ignored

pub mod warning;
