use super::contact::{Contact, ContactStatus, canonical_pair};
use super::entity::Entity;
use super::error::ModelError;
use super::sequence::Sequence;
use std::cmp::Ordering;
use std::collections::HashMap;

/// Sortable attributes of a [`Contact`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Res1Seq,
    Res2Seq,
    RawScore,
}

/// One full set of predicted contacts for one target.
///
/// Contacts are stored in insertion order, which is the canonical iteration
/// order until a sort rearranges it. No two contacts with the same unordered
/// residue pair coexist; the invariant is enforced at [`ContactMap::add`]
/// time. An optional [`Sequence`] can be attached and replaced at any time;
/// the sequence does not track which maps reference it.
#[derive(Debug, Clone, PartialEq)]
pub struct ContactMap {
    id: String,
    contacts: Vec<Contact>,
    pair_index: HashMap<(u32, u32), usize>,
    sequence: Option<Sequence>,
    pub(crate) remarks: Vec<String>,
}

impl ContactMap {
    /// Creates a new, empty contact map.
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            contacts: Vec::new(),
            pair_index: HashMap::new(),
            sequence: None,
            remarks: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    /// Returns an iterator over the contacts in their current order.
    pub fn iter(&self) -> impl Iterator<Item = &Contact> {
        self.contacts.iter()
    }

    /// Retrieves a contact by position in the current order.
    pub fn get(&self, index: usize) -> Option<&Contact> {
        self.contacts.get(index)
    }

    /// Retrieves a contact by its unordered residue pair.
    pub fn get_by_pair(&self, res1_seq: u32, res2_seq: u32) -> Option<&Contact> {
        self.pair_index
            .get(&canonical_pair(res1_seq, res2_seq))
            .map(|&i| &self.contacts[i])
    }

    /// Retrieves a mutable contact by its unordered residue pair.
    pub fn get_by_pair_mut(&mut self, res1_seq: u32, res2_seq: u32) -> Option<&mut Contact> {
        self.pair_index
            .get(&canonical_pair(res1_seq, res2_seq))
            .map(|&i| &mut self.contacts[i])
    }

    pub fn contains(&self, res1_seq: u32, res2_seq: u32) -> bool {
        self.pair_index
            .contains_key(&canonical_pair(res1_seq, res2_seq))
    }

    /// Adds a contact to the end of the map.
    ///
    /// # Errors
    ///
    /// Returns `ModelError::DuplicateContact` if a contact with the same
    /// unordered residue pair already exists; the map is left unchanged.
    pub fn add(&mut self, contact: Contact) -> Result<(), ModelError> {
        let pair = contact.pair();
        if self.pair_index.contains_key(&pair) {
            return Err(ModelError::DuplicateContact { pair });
        }
        self.pair_index.insert(pair, self.contacts.len());
        self.contacts.push(contact);
        Ok(())
    }

    /// Removes and returns the contact with the given unordered residue pair.
    pub fn remove(&mut self, res1_seq: u32, res2_seq: u32) -> Option<Contact> {
        let pair = canonical_pair(res1_seq, res2_seq);
        let index = self.pair_index.remove(&pair)?;
        let contact = self.contacts.remove(index);
        self.reindex();
        Some(contact)
    }

    /// The attached sequence, if any.
    pub fn sequence(&self) -> Option<&Sequence> {
        self.sequence.as_ref()
    }

    /// Attaches a sequence, replacing any previous one.
    pub fn set_sequence(&mut self, sequence: Sequence) {
        self.sequence = Some(sequence);
    }

    /// Detaches and returns the attached sequence.
    pub fn take_sequence(&mut self) -> Option<Sequence> {
        self.sequence.take()
    }

    /// Removes every contact closer than `min_distance` along the sequence.
    ///
    /// Sequence-adjacent contacts carry no long-range structural signal and
    /// are noise for downstream ranking. Returns the number of contacts
    /// removed.
    pub fn remove_neighbors(&mut self, min_distance: u32) -> usize {
        let before = self.contacts.len();
        self.contacts
            .retain(|c| c.sequence_separation() >= min_distance);
        self.reindex();
        before - self.contacts.len()
    }

    /// Non-mutating counterpart of [`ContactMap::remove_neighbors`].
    pub fn without_neighbors(&self, min_distance: u32) -> ContactMap {
        let mut map = self.clone();
        map.remove_neighbors(min_distance);
        map
    }

    /// Stable-sorts the contacts by the given field.
    ///
    /// Stability matters: downstream top-N slicing depends on ties keeping
    /// their original relative order.
    pub fn sort_by(&mut self, field: SortField, reverse: bool) {
        self.contacts.sort_by(|a, b| {
            let ordering = match field {
                SortField::Res1Seq => a.res1_seq().cmp(&b.res1_seq()),
                SortField::Res2Seq => a.res2_seq().cmp(&b.res2_seq()),
                SortField::RawScore => a
                    .raw_score()
                    .partial_cmp(&b.raw_score())
                    .unwrap_or(Ordering::Equal),
            };
            if reverse { ordering.reverse() } else { ordering }
        });
        self.reindex();
    }

    /// Non-mutating counterpart of [`ContactMap::sort_by`].
    pub fn sorted_by(&self, field: SortField, reverse: bool) -> ContactMap {
        let mut map = self.clone();
        map.sort_by(field, reverse);
        map
    }

    /// Returns a new map holding the first `n` contacts of the current order.
    ///
    /// Selection order is caller-controlled: sort first, then slice.
    pub fn top(&self, n: usize) -> ContactMap {
        let mut map = ContactMap::new(&self.id);
        map.sequence = self.sequence.clone();
        map.remarks = self.remarks.clone();
        for contact in self.contacts.iter().take(n) {
            map.pair_index.insert(contact.pair(), map.contacts.len());
            map.contacts.push(contact.clone());
        }
        map
    }

    /// Fills each contact's `res1`/`res2` amino-acid codes from the attached
    /// sequence by direct 1-based indexing.
    ///
    /// Registration assumes the contact residue numbers already index the
    /// attached sequence; no alignment is performed.
    ///
    /// # Errors
    ///
    /// Returns `ModelError::MissingSequence` if no sequence is attached, or
    /// `ModelError::ResidueOutOfBounds` if any residue index falls outside
    /// `[1, seq_len]`. The map is left unchanged on error.
    pub fn assign_sequence_register(&mut self) -> Result<(), ModelError> {
        let sequence = self.sequence.as_ref().ok_or(ModelError::MissingSequence {
            map_id: self.id.clone(),
        })?;

        let mut registered = Vec::with_capacity(self.contacts.len());
        for contact in &self.contacts {
            registered.push((
                sequence.residue(contact.res1_seq())?,
                sequence.residue(contact.res2_seq())?,
            ));
        }

        for (contact, (res1, res2)) in self.contacts.iter_mut().zip(registered) {
            contact.res1 = Some(res1);
            contact.res2 = Some(res2);
        }
        Ok(())
    }

    /// The fraction of classified contacts confirmed by the structure,
    /// TP / (TP + FP).
    ///
    /// Returns `None` when no contact has been classified yet.
    pub fn precision(&self) -> Option<f64> {
        let true_positives = self.count_status(ContactStatus::TruePositive);
        let false_positives = self.count_status(ContactStatus::FalsePositive);
        let classified = true_positives + false_positives;
        if classified == 0 {
            None
        } else {
            Some(true_positives as f64 / classified as f64)
        }
    }

    /// Counts the contacts carrying the given classification.
    pub fn count_status(&self, status: ContactStatus) -> usize {
        self.contacts.iter().filter(|c| c.status == status).count()
    }

    fn reindex(&mut self) {
        self.pair_index = self
            .contacts
            .iter()
            .enumerate()
            .map(|(i, c)| (c.pair(), i))
            .collect();
    }
}

impl Entity for ContactMap {
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

impl std::ops::Index<usize> for ContactMap {
    type Output = Contact;

    fn index(&self, index: usize) -> &Contact {
        &self.contacts[index]
    }
}

impl<'a> IntoIterator for &'a ContactMap {
    type Item = &'a Contact;
    type IntoIter = std::slice::Iter<'a, Contact>;

    fn into_iter(self) -> Self::IntoIter {
        self.contacts.iter()
    }
}
