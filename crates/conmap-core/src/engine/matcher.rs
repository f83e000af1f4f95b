use super::align::align;
use super::config::{AlignmentParams, MatchOptions};
use super::error::EngineError;
use crate::core::models::contact::ContactStatus;
use crate::core::models::contact_map::ContactMap;
use crate::core::models::entity::Entity;
use crate::core::models::error::ModelError;
use crate::core::models::structure::ReferenceStructure;
use tracing::{debug, info, instrument};

/// Matches a contact map against a reference structure.
///
/// The map's attached sequence is locally aligned against the structure's
/// derived sequence; the resulting position map registers each contact on
/// the structure. Matching is always a derivation: the input map is never
/// mutated and a new map is returned.
///
/// - With `renumber`, contact residue numbers (and chains) are rewritten to
///   the structure's deposited numbering; a residue aligned to a gap keeps
///   its numbering and flags the contact [`ContactStatus::Unmatched`].
/// - With `remove_unmatched`, every contact touching an unmatched residue
///   is dropped instead.
/// - Both-matched contacts are classified against the structure's Cβ-Cβ
///   distance: below `distance_cutoff` is a true positive, above a false
///   positive. Pairs the structure has no distance for stay
///   [`ContactStatus::Unknown`] and count in neither class.
///
/// # Errors
///
/// Fails if the options are invalid, the map has no attached sequence, or
/// renumbering would collapse two contacts onto one structure pair.
#[instrument(skip_all, name = "match_to_structure", fields(map = map.id()))]
pub fn match_to_structure(
    map: &ContactMap,
    structure: &ReferenceStructure,
    params: &AlignmentParams,
    options: &MatchOptions,
) -> Result<ContactMap, EngineError> {
    params.validate()?;
    options.validate()?;

    let sequence = map.sequence().ok_or(ModelError::MissingSequence {
        map_id: map.id().to_string(),
    })?;
    let structure_sequence = structure.sequence()?;

    let alignment = align(sequence.seq(), structure_sequence.seq(), params);
    let position_map = alignment.pair_map();
    debug!(
        score = alignment.score(),
        aligned_positions = position_map.len(),
        "Aligned prediction sequence to structure sequence."
    );

    let mut matched = ContactMap::new(map.id());
    matched.set_sequence(sequence.clone());
    for remark in map.remarks() {
        matched.add_remark(remark);
    }

    let mut dropped = 0usize;
    for contact in map.iter() {
        let res1_mapped = position_map.get(&contact.res1_seq()).copied();
        let res2_mapped = position_map.get(&contact.res2_seq()).copied();

        let mut contact = contact.clone();
        match (res1_mapped, res2_mapped) {
            (Some(pos1), Some(pos2)) => {
                // Positions index the structure's chain order; translate to
                // the deposited residue numbering.
                let res1 = structure
                    .residue(pos1 as usize - 1)
                    .ok_or(ModelError::ResidueOutOfBounds {
                        index: pos1,
                        length: structure.len(),
                    })?;
                let res2 = structure
                    .residue(pos2 as usize - 1)
                    .ok_or(ModelError::ResidueOutOfBounds {
                        index: pos2,
                        length: structure.len(),
                    })?;

                contact.status = match structure.distance(res1.seq_num, res2.seq_num) {
                    Some(d) if d < options.distance_cutoff => ContactStatus::TruePositive,
                    Some(_) => ContactStatus::FalsePositive,
                    None => ContactStatus::Unknown,
                };
                if options.renumber {
                    // Chains go in before the pair: set_pair re-canonicalizes
                    // and swaps the per-residue attributes alongside.
                    contact.res1_chain = res1.chain.clone();
                    contact.res2_chain = res2.chain.clone();
                    contact.set_pair(res1.seq_num, res2.seq_num);
                }
                matched.add(contact)?;
            }
            _ => {
                if options.remove_unmatched {
                    dropped += 1;
                } else {
                    contact.status = ContactStatus::Unmatched;
                    matched.add(contact)?;
                }
            }
        }
    }

    info!(
        total = matched.len(),
        dropped,
        true_positives = matched.count_status(ContactStatus::TruePositive),
        false_positives = matched.count_status(ContactStatus::FalsePositive),
        "Matched contact map against reference structure."
    );
    Ok(matched)
}

impl ContactMap {
    /// Matches this map against a reference structure; see
    /// [`match_to_structure`].
    pub fn match_against(
        &self,
        structure: &ReferenceStructure,
        params: &AlignmentParams,
        options: &MatchOptions,
    ) -> Result<ContactMap, EngineError> {
        match_to_structure(self, structure, params, options)
    }
}
