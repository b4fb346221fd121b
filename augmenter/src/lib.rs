//! Synthetic-column augmentation of the `TEST_CSV_RAW` test fixture.
//!
//! The fixture is a TypeScript file holding one backtick-delimited CSV
//! literal. Each binary loads that table, appends columns generated from a
//! fixed vocabulary, and rewrites the file in place.
//!
//! - **[`core`]**: Pure table logic (parsing, column specs, augmentation).
//! - **[`io`]**: Fixture load/store and the optional TOML config.
//!
//! [`run`] ties the two together for one preset; [`cli`] wraps it for the
//! binaries.

pub mod cli;
pub mod core;
pub mod error;
pub mod exit_codes;
pub mod io;
pub mod logging;
pub mod presets;
pub mod run;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
pub mod vocab;
