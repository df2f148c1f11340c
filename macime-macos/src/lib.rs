//! Text Input Source Services integration for macime
//!
//! This crate implements [`InputSourceProvider`] on top of the Carbon TIS API.
//! It is empty on every other platform.
//!
//! [`InputSourceProvider`]: macime_core::InputSourceProvider

#[cfg(target_os = "macos")]
mod tis;
#[cfg(target_os = "macos")]
mod provider;

#[cfg(target_os = "macos")]
pub use provider::TisProvider;
