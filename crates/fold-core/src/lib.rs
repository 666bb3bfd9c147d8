//! # Foldcast Core Library
//!
//! A library for predicting protein 3-D structure from an amino-acid sequence
//! via a remote folding service, and for deriving summary metrics from both
//! the sequence and the predicted structure.
//!
//! ## Architectural Philosophy
//!
//! The library keeps a strict three-layer architecture so each concern stays
//! independently testable:
//!
//! - **[`core`]: The Foundation.** Stateless data models and pure computation:
//!   sequence validation ([`core::sequence`]), composition analysis
//!   ([`core::composition`]), and PDB payload parsing with per-residue
//!   confidence extraction ([`core::structure`]).
//!
//! - **[`engine`]: The Logic Core.** The stateful layer: the prediction
//!   client that talks to the remote service, the [`engine::session`] state
//!   machine that orchestrates a prediction end to end, progress reporting,
//!   and configuration.
//!
//! - **[`workflows`]: The Public API.** The highest-level entry points tying
//!   `engine` and `core` together, e.g. a one-shot
//!   [`workflows::predict::run`] that goes from raw input text to a full
//!   prediction report.

pub mod core;
pub mod engine;
pub mod workflows;
