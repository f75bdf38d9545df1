//! # stagetable Library
//!
//! This library exposes the stagetable modules for testing and integration.
//!
//! The main binary uses these modules through the `main.rs` entry point.

pub mod cli;

// Re-export stagetable_core for convenience
pub use stagetable_core;
