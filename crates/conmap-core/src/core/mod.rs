//! # Core Module
//!
//! This module provides the fundamental building blocks for residue-contact analysis
//! in ConMap, serving as the stateless data foundation of the library.
//!
//! ## Overview
//!
//! The core module implements the hierarchical contact data model and its supporting
//! vocabulary. It contains no algorithms beyond simple bookkeeping; the dynamic
//! programming and geometric matching machinery lives in the `engine` layer and
//! operates on the structures defined here.
//!
//! ## Architecture
//!
//! - **Contact Hierarchy** ([`models`]) - Data structures for contacts, contact maps,
//!   contact files, sequences, and reference structures
//! - **Static Tables** ([`utils`]) - Amino-acid code tables and alphabet validation
//!
//! ## Key Capabilities
//!
//! - **Complete contact hierarchy representation** with strict downward ownership
//! - **Deduplicated, insertion-ordered contact collections** keyed by residue pair
//! - **Eager validation** of sequence alphabets and residue indices
//! - **Reference-structure lookups** limited to pairwise Cβ-Cβ distances

pub mod models;
pub mod utils;
