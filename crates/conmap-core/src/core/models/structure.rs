use super::error::ModelError;
use super::sequence::Sequence;
use crate::core::utils::codes;
use nalgebra::Point3;
use std::collections::HashMap;

/// One residue of a reference structure.
///
/// Only what contact matching needs is kept: the residue number of the
/// deposited structure, the one-letter amino-acid code, the chain it belongs
/// to, and the Cβ position (Cα for glycine, by the usual convention of the
/// upstream structure reader). A residue without a resolved Cβ can still be
/// aligned but supplies no distances.
#[derive(Debug, Clone, PartialEq)]
pub struct StructureResidue {
    pub seq_num: u32,
    pub aa: char,
    pub chain: String,
    pub cb: Option<Point3<f64>>,
}

/// A minimal reference-structure model.
///
/// Built by an out-of-scope structure parser; the core only consumes it.
/// Residues keep the order of the deposited chain, which also defines the
/// derived sequence. The sole geometric operation offered is the pairwise
/// Cβ-Cβ distance lookup.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ReferenceStructure {
    id: String,
    residues: Vec<StructureResidue>,
    seq_num_index: HashMap<u32, usize>,
}

impl ReferenceStructure {
    /// Creates a new, empty reference structure.
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            ..Self::default()
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn len(&self) -> usize {
        self.residues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.residues.is_empty()
    }

    /// Appends a residue to the structure.
    ///
    /// # Errors
    ///
    /// Returns `ModelError::InvalidResidue` if `aa` is not a valid one-letter
    /// amino-acid code (the gap character is not a residue), and
    /// `ModelError::ResidueOutOfBounds` if the deposited residue number is
    /// already taken. The structure is left unchanged on error.
    pub fn add_residue(&mut self, residue: StructureResidue) -> Result<(), ModelError> {
        if residue.aa == codes::GAP_CHAR || !codes::is_valid_sequence_char(residue.aa) {
            return Err(ModelError::InvalidResidue {
                sequence_id: self.id.clone(),
                position: self.residues.len() + 1,
                character: residue.aa,
            });
        }
        if self.seq_num_index.contains_key(&residue.seq_num) {
            return Err(ModelError::ResidueOutOfBounds {
                index: residue.seq_num,
                length: self.residues.len(),
            });
        }
        self.seq_num_index.insert(residue.seq_num, self.residues.len());
        self.residues.push(residue);
        Ok(())
    }

    /// Returns an iterator over the residues in chain order.
    pub fn residues(&self) -> impl Iterator<Item = &StructureResidue> {
        self.residues.iter()
    }

    /// Retrieves a residue by its position in the chain (0-based).
    pub fn residue(&self, index: usize) -> Option<&StructureResidue> {
        self.residues.get(index)
    }

    /// Retrieves a residue by its deposited residue number.
    pub fn residue_by_seq_num(&self, seq_num: u32) -> Option<&StructureResidue> {
        self.seq_num_index
            .get(&seq_num)
            .map(|&i| &self.residues[i])
    }

    /// Derives the structure's sequence from its residues, in chain order.
    pub fn sequence(&self) -> Result<Sequence, ModelError> {
        let seq: String = self.residues.iter().map(|r| r.aa).collect();
        Sequence::new(&self.id, &seq)
    }

    /// The Cβ-Cβ distance between two residues, by deposited residue number.
    ///
    /// Returns `None` if either residue is absent from the structure or has
    /// no Cβ coordinate.
    pub fn distance(&self, seq_num_a: u32, seq_num_b: u32) -> Option<f64> {
        let a = self.residue_by_seq_num(seq_num_a)?.cb?;
        let b = self.residue_by_seq_num(seq_num_b)?.cb?;
        Some((a - b).norm())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::entity::Entity;

    fn residue(seq_num: u32, aa: char, x: f64) -> StructureResidue {
        StructureResidue {
            seq_num,
            aa,
            chain: "A".to_string(),
            cb: Some(Point3::new(x, 0.0, 0.0)),
        }
    }

    fn create_test_structure() -> ReferenceStructure {
        let mut structure = ReferenceStructure::new("1abc");
        structure.add_residue(residue(10, 'G', 0.0)).unwrap();
        structure.add_residue(residue(11, 'S', 5.0)).unwrap();
        structure
            .add_residue(StructureResidue {
                seq_num: 12,
                aa: 'M',
                chain: "A".to_string(),
                cb: None,
            })
            .unwrap();
        structure
    }

    #[test]
    fn sequence_is_derived_in_chain_order() {
        let structure = create_test_structure();
        let sequence = structure.sequence().unwrap();
        assert_eq!(sequence.seq(), "GSM");
        assert_eq!(sequence.id(), "1abc");
    }

    #[test]
    fn distance_is_euclidean_between_cb_positions() {
        let structure = create_test_structure();
        assert_eq!(structure.distance(10, 11), Some(5.0));
    }

    #[test]
    fn distance_is_none_without_cb_or_residue() {
        let structure = create_test_structure();
        assert_eq!(structure.distance(10, 12), None);
        assert_eq!(structure.distance(10, 99), None);
    }

    #[test]
    fn residue_lookup_by_deposited_number() {
        let structure = create_test_structure();
        assert_eq!(structure.residue_by_seq_num(11).unwrap().aa, 'S');
        assert!(structure.residue_by_seq_num(1).is_none());
        assert_eq!(structure.residue(0).unwrap().seq_num, 10);
    }

    #[test]
    fn invalid_amino_acid_code_is_rejected() {
        let mut structure = ReferenceStructure::new("1abc");
        assert!(structure.add_residue(residue(1, '?', 0.0)).is_err());
        assert!(structure.add_residue(residue(1, '-', 0.0)).is_err());
        assert!(structure.is_empty());
    }

    #[test]
    fn duplicate_residue_number_is_rejected() {
        let mut structure = create_test_structure();
        assert!(structure.add_residue(residue(10, 'A', 1.0)).is_err());
        assert_eq!(structure.len(), 3);
    }
}
