use super::entity::Entity;
use super::error::ModelError;
use super::sequence::Sequence;
use crate::core::utils::codes::GAP_CHAR;

/// Which sequence attribute a [`SequenceFile`] sort orders by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequenceSortField {
    Id,
    SeqLen,
}

/// One or more sequences plus file-level metadata.
///
/// The sequence file is the unit of interchange for single sequences and
/// multiple sequence alignments alike: a parser collaborator builds one per
/// input. Child sequences keep their insertion order; the first one is the
/// `top_sequence`, conventionally the target. The alignment analyses
/// (`calculate_meff`, `calculate_freq`, `trim`) require every child to have
/// the same length and fail otherwise.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SequenceFile {
    id: String,
    sequences: Vec<Sequence>,
    pub(crate) remarks: Vec<String>,
}

impl SequenceFile {
    /// Creates a new, empty sequence file.
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            ..Self::default()
        }
    }

    pub fn len(&self) -> usize {
        self.sequences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequences.is_empty()
    }

    /// Returns an iterator over the child sequences in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Sequence> {
        self.sequences.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Sequence> {
        self.sequences.iter_mut()
    }

    /// Appends a sequence to the file.
    ///
    /// Child ids are unique within the file; `get` and `remove` rely on it.
    ///
    /// # Errors
    ///
    /// Returns `ModelError::DuplicateChild` if a sequence with the same id is
    /// already present; the file is left unchanged.
    pub fn add(&mut self, sequence: Sequence) -> Result<(), ModelError> {
        if self.get(sequence.id()).is_some() {
            return Err(ModelError::DuplicateChild {
                container_id: self.id.clone(),
                child_id: sequence.id().to_string(),
            });
        }
        self.sequences.push(sequence);
        Ok(())
    }

    /// Removes and returns the child sequence with the given id.
    pub fn remove(&mut self, sequence_id: &str) -> Option<Sequence> {
        let index = self
            .sequences
            .iter()
            .position(|s| s.id() == sequence_id)?;
        Some(self.sequences.remove(index))
    }

    /// Retrieves a child sequence by its id.
    pub fn get(&self, sequence_id: &str) -> Option<&Sequence> {
        self.sequences.iter().find(|s| s.id() == sequence_id)
    }

    pub fn get_mut(&mut self, sequence_id: &str) -> Option<&mut Sequence> {
        self.sequences.iter_mut().find(|s| s.id() == sequence_id)
    }

    /// The first child sequence, conventionally the target.
    pub fn top_sequence(&self) -> Option<&Sequence> {
        self.sequences.first()
    }

    pub fn top_sequence_mut(&mut self) -> Option<&mut Sequence> {
        self.sequences.first_mut()
    }

    /// Whether the file holds a multiple sequence alignment.
    ///
    /// True when the file is non-empty and every child sequence has the same
    /// length. An empty file is not an alignment.
    pub fn is_alignment(&self) -> bool {
        match self.sequences.first() {
            Some(first) => {
                let length = first.seq_len();
                self.sequences.iter().all(|s| s.seq_len() == length)
            }
            None => false,
        }
    }

    /// Calculates the number of effective sequences (Meff) in the alignment.
    ///
    /// Two sequences are redundant when the fraction of differing alignment
    /// columns between them is below `1 - identity`. Each sequence
    /// contributes the reciprocal of its redundancy-cluster size, and the
    /// contributions are summed and truncated.
    ///
    /// # Errors
    ///
    /// Fails with `ModelError::InvalidIdentity` if `identity` falls outside
    /// `[0, 1]`, or `ModelError::NotAnAlignment` if the child sequences do
    /// not form an alignment.
    pub fn calculate_meff(&self, identity: f64) -> Result<usize, ModelError> {
        if !(0.0..=1.0).contains(&identity) {
            return Err(ModelError::InvalidIdentity { value: identity });
        }
        let rows = self.alignment_rows()?;

        let mut meff = 0.0_f64;
        for a in &rows {
            // A row always clusters with itself, even at identity 1.0 where
            // the strict threshold comparison would otherwise exclude it.
            let similar = rows
                .iter()
                .filter(|b| hamming_fraction(a, b) < 1.0 - identity)
                .count()
                .max(1);
            meff += 1.0 / similar as f64;
        }
        Ok(meff as usize)
    }

    /// Calculates the per-column coverage of the alignment.
    ///
    /// Each entry is the fraction of sequences with a non-gap character in
    /// that alignment column.
    ///
    /// # Errors
    ///
    /// Fails with `ModelError::NotAnAlignment` if the child sequences do not
    /// form an alignment.
    pub fn calculate_freq(&self) -> Result<Vec<f64>, ModelError> {
        let rows = self.alignment_rows()?;
        let width = rows[0].len();
        let mut frequencies = vec![0.0_f64; width];
        for row in &rows {
            for (column, &c) in row.iter().enumerate() {
                if c != GAP_CHAR {
                    frequencies[column] += 1.0;
                }
            }
        }
        for frequency in &mut frequencies {
            *frequency /= rows.len() as f64;
        }
        Ok(frequencies)
    }

    /// Stable-sorts the sequences by the given field.
    pub fn sort_by(&mut self, field: SequenceSortField, reverse: bool) {
        self.sequences.sort_by(|a, b| {
            let ordering = match field {
                SequenceSortField::Id => a.id().cmp(b.id()),
                SequenceSortField::SeqLen => a.seq_len().cmp(&b.seq_len()),
            };
            if reverse { ordering.reverse() } else { ordering }
        });
    }

    /// Non-mutating counterpart of [`SequenceFile::sort_by`].
    pub fn sorted_by(&self, field: SequenceSortField, reverse: bool) -> SequenceFile {
        let mut file = self.clone();
        file.sort_by(field, reverse);
        file
    }

    /// Trims every sequence to the 1-based inclusive column range
    /// `[start, end]`.
    ///
    /// # Errors
    ///
    /// Fails with `ModelError::NotAnAlignment` if the child sequences do not
    /// form an alignment, or `ModelError::ResidueOutOfBounds` if the range
    /// is empty or reaches past the alignment width.
    pub fn trim(&mut self, start: u32, end: u32) -> Result<(), ModelError> {
        let rows = self.alignment_rows()?;
        let width = rows[0].len();
        if start == 0 || start > end || end as usize > width {
            return Err(ModelError::ResidueOutOfBounds {
                index: end,
                length: width,
            });
        }
        for sequence in &mut self.sequences {
            let trimmed: String = sequence
                .seq()
                .chars()
                .skip(start as usize - 1)
                .take((end - start + 1) as usize)
                .collect();
            sequence.set_gapped(trimmed);
        }
        Ok(())
    }

    /// Non-mutating counterpart of [`SequenceFile::trim`].
    pub fn trimmed(&self, start: u32, end: u32) -> Result<SequenceFile, ModelError> {
        let mut file = self.clone();
        file.trim(start, end)?;
        Ok(file)
    }

    fn alignment_rows(&self) -> Result<Vec<Vec<char>>, ModelError> {
        if !self.is_alignment() {
            return Err(ModelError::NotAnAlignment {
                file_id: self.id.clone(),
            });
        }
        Ok(self
            .sequences
            .iter()
            .map(|s| s.seq().chars().collect())
            .collect())
    }
}

/// The fraction of columns in which two equal-length rows differ.
fn hamming_fraction(a: &[char], b: &[char]) -> f64 {
    if a.is_empty() {
        return 0.0;
    }
    let differing = a.iter().zip(b).filter(|(x, y)| x != y).count();
    differing as f64 / a.len() as f64
}

impl Entity for SequenceFile {
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

#[cfg(test)]
mod tests {
    use super::*;

    fn create_alignment_file() -> SequenceFile {
        let mut file = SequenceFile::new("msa");
        file.add(Sequence::new("target", "GSMFTP").unwrap()).unwrap();
        file.add(Sequence::new("hom1", "GS--TP").unwrap()).unwrap();
        file.add(Sequence::new("hom2", "GAMFTP").unwrap()).unwrap();
        file
    }

    #[test]
    fn top_sequence_is_first_inserted_child() {
        let file = create_alignment_file();
        assert_eq!(file.len(), 3);
        assert_eq!(file.top_sequence().unwrap().id(), "target");
    }

    #[test]
    fn duplicate_sequence_id_is_rejected_and_file_unchanged() {
        let mut file = create_alignment_file();
        let err = file.add(Sequence::new("hom1", "AAAAAA").unwrap()).unwrap_err();
        assert_eq!(
            err,
            ModelError::DuplicateChild {
                container_id: "msa".to_string(),
                child_id: "hom1".to_string(),
            }
        );
        assert_eq!(file.len(), 3);
    }

    #[test]
    fn sequences_are_retrievable_and_removable_by_id() {
        let mut file = create_alignment_file();
        assert!(file.get("hom2").is_some());

        let removed = file.remove("target").unwrap();
        assert_eq!(removed.id(), "target");
        assert_eq!(file.top_sequence().unwrap().id(), "hom1");
        assert!(file.remove("target").is_none());
    }

    #[test]
    fn equal_length_children_form_an_alignment() {
        let mut file = create_alignment_file();
        assert!(file.is_alignment());

        file.add(Sequence::new("frag", "GSM").unwrap()).unwrap();
        assert!(!file.is_alignment());
        assert!(!SequenceFile::new("empty").is_alignment());
    }

    #[test]
    fn meff_counts_one_per_redundancy_cluster() {
        let mut file = SequenceFile::new("msa");
        file.add(Sequence::new("a", "AAAA").unwrap()).unwrap();
        file.add(Sequence::new("b", "AAAA").unwrap()).unwrap();
        file.add(Sequence::new("c", "CCCC").unwrap()).unwrap();

        // "a" and "b" are identical, "c" shares nothing with them: at the
        // default 0.7 identity that is two effective sequences.
        assert_eq!(file.calculate_meff(0.7).unwrap(), 2);
    }

    #[test]
    fn fully_redundant_alignment_has_one_effective_sequence() {
        let mut file = SequenceFile::new("msa");
        file.add(Sequence::new("a", "GSMFTP").unwrap()).unwrap();
        file.add(Sequence::new("b", "GSMFTP").unwrap()).unwrap();
        file.add(Sequence::new("c", "GSMFTP").unwrap()).unwrap();

        assert_eq!(file.calculate_meff(0.7).unwrap(), 1);
    }

    #[test]
    fn full_identity_threshold_counts_every_sequence() {
        let mut file = SequenceFile::new("msa");
        file.add(Sequence::new("a", "AAAA").unwrap()).unwrap();
        file.add(Sequence::new("b", "AAAA").unwrap()).unwrap();

        assert_eq!(file.calculate_meff(1.0).unwrap(), 2);
    }

    #[test]
    fn identity_threshold_outside_unit_interval_is_rejected() {
        let file = create_alignment_file();
        assert_eq!(
            file.calculate_meff(1.5).unwrap_err(),
            ModelError::InvalidIdentity { value: 1.5 }
        );
    }

    #[test]
    fn column_coverage_counts_non_gap_fractions() {
        let mut file = SequenceFile::new("msa");
        file.add(Sequence::new("a", "AG-A").unwrap()).unwrap();
        file.add(Sequence::new("b", "A-CA").unwrap()).unwrap();

        assert_eq!(
            file.calculate_freq().unwrap(),
            vec![1.0, 0.5, 0.5, 1.0]
        );
    }

    #[test]
    fn analyses_require_an_alignment() {
        let mut file = SequenceFile::new("msa");
        file.add(Sequence::new("a", "GSMFTP").unwrap()).unwrap();
        file.add(Sequence::new("b", "GSM").unwrap()).unwrap();

        let err = ModelError::NotAnAlignment {
            file_id: "msa".to_string(),
        };
        assert_eq!(file.calculate_meff(0.7).unwrap_err(), err);
        assert_eq!(file.calculate_freq().unwrap_err(), err);
        assert_eq!(file.trim(1, 3).unwrap_err(), err);
    }

    #[test]
    fn sorting_is_stable_and_reversible() {
        let mut file = SequenceFile::new("seqs");
        file.add(Sequence::new("b", "GSM").unwrap()).unwrap();
        file.add(Sequence::new("a", "GSMFTP").unwrap()).unwrap();
        file.add(Sequence::new("c", "TPK").unwrap()).unwrap();

        file.sort_by(SequenceSortField::Id, false);
        let ids: Vec<&str> = file.iter().map(|s| s.id()).collect();
        assert_eq!(ids, ["a", "b", "c"]);

        // "b" and "c" tie on length and keep their current relative order.
        file.sort_by(SequenceSortField::SeqLen, true);
        let ids: Vec<&str> = file.iter().map(|s| s.id()).collect();
        assert_eq!(ids, ["a", "b", "c"]);
    }

    #[test]
    fn trim_keeps_the_inclusive_column_range() {
        let mut file = create_alignment_file();
        file.trim(2, 4).unwrap();

        assert_eq!(file.get("target").unwrap().seq(), "SMF");
        assert_eq!(file.get("hom1").unwrap().seq(), "S--");
        assert_eq!(file.get("hom2").unwrap().seq(), "AMF");
    }

    #[test]
    fn trimmed_never_mutates_the_receiver() {
        let file = create_alignment_file();
        let original = file.clone();

        let trimmed = file.trimmed(2, 4).unwrap();

        assert_eq!(file, original);
        assert_eq!(trimmed.get("target").unwrap().seq(), "SMF");
    }

    #[test]
    fn trim_rejects_empty_or_overreaching_ranges() {
        let mut file = create_alignment_file();
        assert!(matches!(
            file.trim(0, 3).unwrap_err(),
            ModelError::ResidueOutOfBounds { .. }
        ));
        assert!(matches!(
            file.trim(4, 2).unwrap_err(),
            ModelError::ResidueOutOfBounds { .. }
        ));
        assert!(matches!(
            file.trim(2, 7).unwrap_err(),
            ModelError::ResidueOutOfBounds { .. }
        ));
    }
}
