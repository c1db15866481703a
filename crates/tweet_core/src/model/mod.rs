//! Immutable value types shared by extraction and filtering.
//!
//! # Responsibility
//! - Define the tweet record consumed by every core operation.
//! - Define the closed time interval produced by timespan reduction.
//!
//! # Invariants
//! - Model values expose no setters; once built they never change.
//! - Every constructor and deserializer enforces the same validation.

pub mod timespan;
pub mod tweet;
