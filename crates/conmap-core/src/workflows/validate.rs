use crate::core::models::contact::ContactStatus;
use crate::core::models::contact_map::{ContactMap, SortField};
use crate::core::models::structure::ReferenceStructure;
use crate::engine::config::AnalysisConfig;
use crate::engine::error::EngineError;
use crate::engine::matcher::match_to_structure;
use tracing::{info, instrument};

/// The outcome of validating a prediction against a reference structure.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationReport {
    /// The matched, renumbered working contact set.
    pub matched: ContactMap,
    /// Contacts surviving filtering and selection.
    pub total: usize,
    pub true_positives: usize,
    pub false_positives: usize,
    /// TP / (TP + FP), `None` when nothing could be classified.
    pub precision: Option<f64>,
}

/// Validates a predicted contact map against a reference structure.
///
/// The input map must carry its target sequence. The pipeline trims
/// sequence-local contacts, ranks the rest by score, optionally keeps only
/// the best `filter.top`, and matches the survivors against the structure.
/// The input map is never mutated.
#[instrument(skip_all, name = "validation_workflow")]
pub fn run(
    map: &ContactMap,
    structure: &ReferenceStructure,
    config: &AnalysisConfig,
) -> Result<ValidationReport, EngineError> {
    config.validate()?;

    info!(
        contacts = map.len(),
        min_separation = config.filter.min_sequence_separation,
        "Starting contact validation."
    );

    let mut working = map.clone();
    let removed = working.remove_neighbors(config.filter.min_sequence_separation);
    working.sort_by(SortField::RawScore, true);
    if let Some(top) = config.filter.top {
        working = working.top(top);
    }
    info!(
        removed_neighbors = removed,
        selected = working.len(),
        "Working contact set prepared."
    );

    let matched = match_to_structure(&working, structure, &config.alignment, &config.matching)?;

    let true_positives = matched.count_status(ContactStatus::TruePositive);
    let false_positives = matched.count_status(ContactStatus::FalsePositive);
    let report = ValidationReport {
        total: matched.len(),
        true_positives,
        false_positives,
        precision: matched.precision(),
        matched,
    };
    info!(
        total = report.total,
        true_positives = report.true_positives,
        false_positives = report.false_positives,
        "Contact validation finished."
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::contact::Contact;
    use crate::core::models::sequence::Sequence;
    use crate::core::models::structure::StructureResidue;
    use nalgebra::Point3;

    const TARGET_SEQ: &str = "GSMFTPKAVLRE";

    /// A fully resolved structure on a colinear 2 Å Cβ trace, numbered
    /// identically to the target.
    fn create_full_structure() -> ReferenceStructure {
        let mut structure = ReferenceStructure::new("1abc");
        for (i, aa) in TARGET_SEQ.chars().enumerate() {
            let seq_num = i as u32 + 1;
            structure
                .add_residue(StructureResidue {
                    seq_num,
                    aa,
                    chain: "A".to_string(),
                    cb: Some(Point3::new(seq_num as f64 * 2.0, 0.0, 0.0)),
                })
                .unwrap();
        }
        structure
    }

    fn create_prediction() -> ContactMap {
        let mut map = ContactMap::new("pred");
        map.add(Contact::new(1, 4, 0.95)).unwrap(); // separation 3: filtered out
        map.add(Contact::new(1, 9, 0.9)).unwrap(); // 16 Å: false positive
        map.add(Contact::new(2, 7, 0.8)).unwrap(); // keeps rank 2
        map.add(Contact::new(3, 12, 0.1)).unwrap(); // dropped by top-2 selection
        map.set_sequence(Sequence::new("target", TARGET_SEQ).unwrap());
        map
    }

    #[test]
    fn pipeline_filters_ranks_selects_and_classifies() {
        let map = create_prediction();
        let structure = create_full_structure();
        let config = AnalysisConfig::from_toml_str(
            r#"
            [filter]
            min_sequence_separation = 5
            top = 2
            "#,
        )
        .unwrap();

        let report = run(&map, &structure, &config).unwrap();

        assert_eq!(report.total, 2);
        // (1, 9) spans 16 Å on the trace, (2, 7) spans 10 Å: both exceed 8 Å.
        assert_eq!(report.true_positives, 0);
        assert_eq!(report.false_positives, 2);
        assert_eq!(report.precision, Some(0.0));
        assert!(report.matched.contains(1, 9));
        assert!(report.matched.contains(2, 7));
        assert!(!report.matched.contains(1, 4));
        assert!(!report.matched.contains(3, 12));
    }

    #[test]
    fn close_contacts_are_confirmed_as_true_positives() {
        let mut map = ContactMap::new("pred");
        map.add(Contact::new(1, 3, 0.9)).unwrap(); // 4 Å: true positive
        map.set_sequence(Sequence::new("target", TARGET_SEQ).unwrap());
        let structure = create_full_structure();
        let config = AnalysisConfig::from_toml_str(
            "[filter]\nmin_sequence_separation = 1\n",
        )
        .unwrap();

        let report = run(&map, &structure, &config).unwrap();

        assert_eq!(report.true_positives, 1);
        assert_eq!(report.precision, Some(1.0));
        assert_eq!(
            report.matched.get_by_pair(1, 3).unwrap().status,
            ContactStatus::TruePositive
        );
    }

    #[test]
    fn input_map_is_never_mutated() {
        let map = create_prediction();
        let original = map.clone();
        let structure = create_full_structure();

        run(&map, &structure, &AnalysisConfig::default()).unwrap();

        assert_eq!(map, original);
    }
}
