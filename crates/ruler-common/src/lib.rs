//! Common utilities for the ruler tools.
//!
//! This crate provides shared infrastructure used by every component:
//! - **Warning System** - colored terminal output for input we could not interpret

pub mod warning;
