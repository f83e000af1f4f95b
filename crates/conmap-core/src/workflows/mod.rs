//! # Workflows Module
//!
//! This module provides the high-level procedures that tie the `core` data
//! model and the `engine` algorithms together into complete analyses.
//!
//! ## Overview
//!
//! Workflows are the top-level entry points for users of ConMap. They take
//! already-parsed entities (a contact map with its sequence, a reference
//! structure) plus one validated [`crate::engine::config::AnalysisConfig`],
//! and run the full pipeline: neighbor filtering, score ranking, optional
//! top-N selection, structure matching, and summary statistics.
//!
//! ## Architecture
//!
//! - **Validation Workflow** ([`validate`]) - Scores a set of predicted
//!   contacts against a solved reference structure.

pub mod validate;
