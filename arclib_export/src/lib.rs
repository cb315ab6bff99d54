//! Packaging automation for the arclib MSP430 libraries.
//!
//! CrossStudio builds one `.hza` library per build configuration into a
//! folder named after that configuration. This crate publishes those
//! artifacts into a shared software tree: each library is copied to
//! `<prefix>/lib` under a name derived from its configuration, and the
//! public headers are copied to `<prefix>/include`. Optionally the
//! whole set of configurations is rebuilt first with the newest
//! installed `crossbuild`.
//!
//! Everything runs sequentially and stops at the first failure.

pub mod build;
pub mod config;
pub mod export;
pub mod toolchain;

pub use arclib_traits::{ArcError, ArcResult};
