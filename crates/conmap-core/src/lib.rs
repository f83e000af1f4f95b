//! # ConMap Core Library
//!
//! A library for the analysis of protein residue-residue contact predictions
//! against sequences and, optionally, reference 3-D structures.
//!
//! ## Architectural Philosophy
//!
//! The library is designed with a strict three-layer architecture to ensure a clear separation of concerns,
//! making it modular, testable, and extensible.
//!
//! - **[`core`]: The Foundation.** Contains the stateless contact hierarchy (`ContactFile`,
//!   `ContactMap`, `Contact`, `Sequence`), the reference-structure data model, and the static
//!   amino-acid code tables.
//!
//! - **[`engine`]: The Logic Core.** The algorithmic layer: affine-gap local sequence alignment
//!   (Smith-Waterman/Gotoh), geometric matching of predictions against a reference structure,
//!   kernel density estimation for domain-boundary detection, and the eagerly validated
//!   configuration types driving all of them.
//!
//! - **[`workflows`]: The Public API.** The highest-level, user-facing layer. It ties the
//!   `engine` and `core` together to execute complete analysis procedures, such as validating
//!   a set of predicted contacts against a solved structure.
//!
//! Format parsers, plotting and command-line surfaces are deliberately external collaborators:
//! they construct and consume the entities defined here but the core itself never performs I/O.

pub mod core;
pub mod engine;
pub mod workflows;
