//! # Engine Module
//!
//! This module implements the algorithmic core of ConMap: everything that
//! turns raw contact hierarchies into registered, filtered, and validated
//! analysis results.
//!
//! ## Overview
//!
//! All engine operations are synchronous, deterministic, CPU-bound pure
//! computations. Alignment is `O(m*n)` in time and space, density estimation
//! is linear in the observed residue range, and nothing here performs I/O or
//! has a transient failure mode; every error signals a violated invariant or
//! an invalid configuration.
//!
//! ## Architecture
//!
//! - **Configuration** ([`config`]) - Eagerly validated alignment, matching, and
//!   density parameters, deserializable from TOML
//! - **Alignment** ([`align`]) - Affine-gap local pairwise sequence alignment
//!   (Smith-Waterman with the Gotoh formulation)
//! - **Matching** ([`matcher`]) - Registration of a contact map against a
//!   reference structure: renumbering, filtering, true/false-positive
//!   classification
//! - **Density Estimation** ([`density`]) - Per-residue contact density and
//!   local-minimum detection for domain-boundary candidates
//! - **Error Handling** ([`error`]) - Engine-specific error types

pub mod align;
pub mod config;
pub mod density;
pub mod error;
pub mod matcher;
