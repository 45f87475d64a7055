//! Common utilities for the phat HTML utilities.
//!
//! This crate provides shared infrastructure used by the attribute core and
//! the command-line front end:
//! - **Warning System** - deduplicated, colored terminal output for input
//!   that was silently repaired or dropped

pub mod warning;
