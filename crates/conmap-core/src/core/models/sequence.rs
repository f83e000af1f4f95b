use super::entity::Entity;
use super::error::ModelError;
use crate::core::utils::codes::{self, GAP_CHAR};

/// A single biological sequence.
///
/// The sequence string is restricted to the one-letter amino-acid alphabet
/// plus the gap character `-`; any other character is rejected at assignment
/// time. An all-gap string is valid, which is what gapped alignment output
/// produces for an unalignable input.
#[derive(Debug, Clone, PartialEq)]
pub struct Sequence {
    id: String,
    seq: String,
    pub(crate) remarks: Vec<String>,
}

impl Sequence {
    /// Creates a new sequence, validating every character of `seq`.
    ///
    /// # Errors
    ///
    /// Returns `ModelError::InvalidResidue` naming the first offending
    /// character and its 1-based position.
    pub fn new(id: &str, seq: &str) -> Result<Self, ModelError> {
        let mut sequence = Self {
            id: id.to_string(),
            seq: String::new(),
            remarks: Vec::new(),
        };
        sequence.set_seq(seq)?;
        Ok(sequence)
    }

    /// The raw sequence string.
    pub fn seq(&self) -> &str {
        &self.seq
    }

    /// Replaces the sequence string, validating every character.
    ///
    /// The stored string is left untouched if validation fails.
    pub fn set_seq(&mut self, seq: &str) -> Result<(), ModelError> {
        if let Some((position, character)) = seq
            .chars()
            .enumerate()
            .find(|(_, c)| !codes::is_valid_sequence_char(*c))
        {
            return Err(ModelError::InvalidResidue {
                sequence_id: self.id.clone(),
                position: position + 1,
                character,
            });
        }
        self.seq = seq.to_string();
        Ok(())
    }

    /// The current length of the sequence string, gaps included.
    pub fn seq_len(&self) -> usize {
        self.seq.chars().count()
    }

    /// Retrieves the residue character at a 1-based position.
    ///
    /// # Errors
    ///
    /// Returns `ModelError::ResidueOutOfBounds` if `index` falls outside
    /// `[1, seq_len]`.
    pub fn residue(&self, index: u32) -> Result<char, ModelError> {
        if index == 0 {
            return Err(ModelError::ResidueOutOfBounds {
                index,
                length: self.seq_len(),
            });
        }
        self.seq
            .chars()
            .nth(index as usize - 1)
            .ok_or(ModelError::ResidueOutOfBounds {
                index,
                length: self.seq_len(),
            })
    }

    /// Whether the sequence contains only gap characters (or is empty).
    pub fn is_all_gaps(&self) -> bool {
        self.seq.chars().all(|c| c == GAP_CHAR)
    }

    /// Builds a copy of this sequence carrying a gapped rendition of it.
    ///
    /// Invariant: `seq` only rearranges characters of an already validated
    /// sequence around gap characters, so no re-validation is needed.
    pub(crate) fn gapped_copy(&self, seq: String) -> Sequence {
        Sequence {
            id: self.id.clone(),
            seq,
            remarks: self.remarks.clone(),
        }
    }

    /// Replaces the sequence string with a gapped or trimmed rendition of it.
    ///
    /// Invariant: every character of `seq` is a gap or comes from the
    /// already validated sequence, so no re-validation is needed.
    pub(crate) fn set_gapped(&mut self, seq: String) {
        self.seq = seq;
    }
}

impl Entity for Sequence {
    fn id(&self) -> &str {
        &self.id
    }

    fn remarks(&self) -> &[String] {
        &self.remarks
    }

    fn add_remark(&mut self, remark: &str) {
        self.remarks.push(remark.to_string());
    }
}
