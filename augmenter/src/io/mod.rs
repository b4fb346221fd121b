//! Filesystem side of an augmentation run.

pub mod config;
pub mod resource;
