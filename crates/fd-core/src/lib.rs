//! # fd-core
//!
//! Core types and error definitions for findates.
//!
//! This crate provides the foundational building blocks shared by the other
//! crates in the workspace: numeric type aliases and the error hierarchy with
//! its `ensure!` macro.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` macro.
pub mod errors;

// ── Primitive type aliases ────────────────────────────────────────────────────

/// Floating-point type used throughout the library.
pub type Real = f64;

/// Integer type used for day counts.
pub type Integer = i32;

/// A time measurement in years (a year fraction).
pub type Time = Real;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
