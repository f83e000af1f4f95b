//! # Core Models Module
//!
//! This module contains the hierarchical data structures used to represent
//! residue-contact predictions in ConMap, providing the foundation for all
//! analysis operations.
//!
//! ## Overview
//!
//! The models module defines the contact hierarchy and its collaborators.
//! Ownership flows strictly downward: a [`contact_file::ContactFile`] owns its
//! [`contact_map::ContactMap`]s, which own their [`contact::Contact`]s. Upward
//! navigation happens through the owning container, never through an owning
//! back-pointer, so the tree is cycle-free and deep copies are plain `Clone`s.
//!
//! ## Key Components
//!
//! - [`entity`] - Shared identity and annotation behaviour of all hierarchy nodes
//! - [`sequence`] - A validated amino-acid sequence
//! - [`contact`] - A single predicted residue-residue contact
//! - [`contact_map`] - A deduplicated, ordered collection of contacts for one target
//! - [`contact_file`] - One or more contact maps plus file-level metadata
//! - [`sequence_file`] - One or more sequences, with multiple-sequence-alignment analyses
//! - [`structure`] - A minimal reference-structure model supplying Cβ-Cβ distances
//! - [`error`] - Model-level error types
//!
//! ## Usage
//!
//! Hierarchies are built explicitly, usually by a format parser:
//!
//! ```ignore
//! use conmap::core::models::{contact::Contact, contact_map::ContactMap};
//!
//! let mut map = ContactMap::new("1");
//! map.add(Contact::new(1, 9, 0.7))?;
//! map.add(Contact::new(2, 8, 0.9))?;
//! ```

pub mod contact;
pub mod contact_file;
pub mod contact_map;
pub mod entity;
pub mod error;
pub mod sequence;
pub mod sequence_file;
pub mod structure;
