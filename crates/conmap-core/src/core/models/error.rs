use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ModelError {
    #[error("Invalid character '{character}' at position {position} in sequence '{sequence_id}'")]
    InvalidResidue {
        sequence_id: String,
        position: usize,
        character: char,
    },

    #[error("Contact pair ({}, {}) already exists in the map", pair.0, pair.1)]
    DuplicateContact { pair: (u32, u32) },

    #[error("Residue index {index} out of bounds for sequence of length {length}")]
    ResidueOutOfBounds { index: u32, length: usize },

    #[error("Contact map '{map_id}' has no sequence attached")]
    MissingSequence { map_id: String },

    #[error("Container '{container_id}' already holds a child with id '{child_id}'")]
    DuplicateChild {
        container_id: String,
        child_id: String,
    },

    #[error("Sequence file '{file_id}' is not an alignment")]
    NotAnAlignment { file_id: String },

    #[error("Sequence identity threshold {value} is outside the range [0, 1]")]
    InvalidIdentity { value: f64 },
}
