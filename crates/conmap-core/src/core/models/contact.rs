use super::entity::Entity;

/// Classification of a predicted contact against a reference structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContactStatus {
    /// Not yet matched, or the structure could not supply a distance.
    #[default]
    Unknown,
    /// The structure confirms the contact below the distance cutoff.
    TruePositive,
    /// The structure measures the pair above the distance cutoff.
    FalsePositive,
    /// At least one residue has no aligned counterpart in the structure.
    Unmatched,
}

/// One predicted residue-residue contact.
///
/// Identity is the unordered residue pair: `(i, j)` and `(j, i)` describe the
/// same contact. The pair is canonicalized at construction so that
/// `res1_seq <= res2_seq`, with per-residue attributes swapping alongside;
/// writers can therefore rely on the conventional ordering.
#[derive(Debug, Clone, PartialEq)]
pub struct Contact {
    id: String,
    res1_seq: u32,
    res2_seq: u32,
    raw_score: f64,
    pub distance_bound: Option<(f64, f64)>,
    pub res1: Option<char>,
    pub res2: Option<char>,
    pub res1_chain: String,
    pub res2_chain: String,
    pub status: ContactStatus,
    pub(crate) remarks: Vec<String>,
}

impl Contact {
    /// Creates a new contact for the unordered residue pair `(res1_seq, res2_seq)`.
    ///
    /// Residue indices are 1-based. A higher `raw_score` means a more
    /// confident prediction; no range is imposed.
    pub fn new(res1_seq: u32, res2_seq: u32, raw_score: f64) -> Self {
        let (res1_seq, res2_seq) = if res1_seq <= res2_seq {
            (res1_seq, res2_seq)
        } else {
            (res2_seq, res1_seq)
        };
        Self {
            id: format!("({res1_seq}, {res2_seq})"),
            res1_seq,
            res2_seq,
            raw_score,
            distance_bound: None,
            res1: None,
            res2: None,
            res1_chain: String::new(),
            res2_chain: String::new(),
            status: ContactStatus::default(),
            remarks: Vec::new(),
        }
    }

    /// The lower residue index of the pair (1-based).
    pub fn res1_seq(&self) -> u32 {
        self.res1_seq
    }

    /// The higher residue index of the pair (1-based).
    pub fn res2_seq(&self) -> u32 {
        self.res2_seq
    }

    /// The prediction confidence score.
    pub fn raw_score(&self) -> f64 {
        self.raw_score
    }

    pub fn set_raw_score(&mut self, raw_score: f64) {
        self.raw_score = raw_score;
    }

    /// The canonical `(lower, higher)` residue-pair key of this contact.
    pub fn pair(&self) -> (u32, u32) {
        (self.res1_seq, self.res2_seq)
    }

    /// The sequence separation `|res2_seq - res1_seq|`.
    pub fn sequence_separation(&self) -> u32 {
        self.res2_seq - self.res1_seq
    }

    /// Rewrites the residue pair, re-canonicalizing and swapping the
    /// per-residue attributes if the order flips.
    pub(crate) fn set_pair(&mut self, res1_seq: u32, res2_seq: u32) {
        if res1_seq <= res2_seq {
            self.res1_seq = res1_seq;
            self.res2_seq = res2_seq;
        } else {
            self.res1_seq = res2_seq;
            self.res2_seq = res1_seq;
            std::mem::swap(&mut self.res1, &mut self.res2);
            std::mem::swap(&mut self.res1_chain, &mut self.res2_chain);
        }
        self.id = format!("({}, {})", self.res1_seq, self.res2_seq);
    }
}

impl Entity for Contact {
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

/// Canonical unordered-pair key for a residue pair given in any order.
pub fn canonical_pair(res1_seq: u32, res2_seq: u32) -> (u32, u32) {
    if res1_seq <= res2_seq {
        (res1_seq, res2_seq)
    } else {
        (res2_seq, res1_seq)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_contact_canonicalizes_pair_order() {
        let contact = Contact::new(9, 1, 0.7);
        assert_eq!(contact.res1_seq(), 1);
        assert_eq!(contact.res2_seq(), 9);
        assert_eq!(contact.pair(), (1, 9));
        assert_eq!(contact.id(), "(1, 9)");
    }

    #[test]
    fn defaults_are_empty_until_assigned() {
        let contact = Contact::new(1, 9, 0.7);
        assert_eq!(contact.status, ContactStatus::Unknown);
        assert!(contact.res1.is_none());
        assert!(contact.res1_chain.is_empty());
        assert!(contact.distance_bound.is_none());
    }

    #[test]
    fn sequence_separation_is_absolute() {
        assert_eq!(Contact::new(3, 12, 0.4).sequence_separation(), 9);
        assert_eq!(Contact::new(12, 3, 0.4).sequence_separation(), 9);
    }

    #[test]
    fn set_pair_swaps_residue_attributes_when_order_flips() {
        let mut contact = Contact::new(1, 9, 0.7);
        contact.res1 = Some('G');
        contact.res2 = Some('K');
        contact.res1_chain = "A".to_string();
        contact.res2_chain = "B".to_string();

        contact.set_pair(20, 5);

        assert_eq!(contact.pair(), (5, 20));
        assert_eq!(contact.res1, Some('K'));
        assert_eq!(contact.res2, Some('G'));
        assert_eq!(contact.res1_chain, "B");
        assert_eq!(contact.res2_chain, "A");
        assert_eq!(contact.id(), "(5, 20)");
    }

    #[test]
    fn canonical_pair_ignores_argument_order() {
        assert_eq!(canonical_pair(2, 8), (2, 8));
        assert_eq!(canonical_pair(8, 2), (2, 8));
    }
}
