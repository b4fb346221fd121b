//! Deterministic table logic shared by every augmentation.
//!
//! Core modules do no I/O. Randomness is injected by the caller so tests can
//! seed it.

pub mod augment;
pub mod spec;
pub mod table;
