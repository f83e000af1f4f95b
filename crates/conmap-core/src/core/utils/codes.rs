use phf::{Map, phf_map};

/// The gap character used in gapped sequences and alignments.
pub const GAP_CHAR: char = '-';

static ONE_TO_THREE: Map<char, &'static str> = phf_map! {
    'A' => "ALA", 'B' => "ASX", 'C' => "CYS", 'D' => "ASP", 'E' => "GLU",
    'F' => "PHE", 'G' => "GLY", 'H' => "HIS", 'I' => "ILE", 'J' => "XLE",
    'K' => "LYS", 'L' => "LEU", 'M' => "MET", 'N' => "ASN", 'O' => "PYL",
    'P' => "PRO", 'Q' => "GLN", 'R' => "ARG", 'S' => "SER", 'T' => "THR",
    'U' => "SEC", 'V' => "VAL", 'W' => "TRP", 'X' => "UNK", 'Y' => "TYR",
    'Z' => "GLX",
};

static THREE_TO_ONE: Map<&'static str, char> = phf_map! {
    "ALA" => 'A', "ASX" => 'B', "CYS" => 'C', "ASP" => 'D', "GLU" => 'E',
    "PHE" => 'F', "GLY" => 'G', "HIS" => 'H', "ILE" => 'I', "XLE" => 'J',
    "LYS" => 'K', "LEU" => 'L', "MET" => 'M', "ASN" => 'N', "PYL" => 'O',
    "PRO" => 'P', "GLN" => 'Q', "ARG" => 'R', "SER" => 'S', "THR" => 'T',
    "SEC" => 'U', "VAL" => 'V', "TRP" => 'W', "UNK" => 'X', "TYR" => 'Y',
    "GLX" => 'Z',
};

/// Converts a one-letter amino-acid code to its three-letter form.
///
/// Lookup is case-insensitive. Returns `None` for characters outside the
/// recognized alphabet, including the gap character.
pub fn one_to_three(code: char) -> Option<&'static str> {
    ONE_TO_THREE.get(&code.to_ascii_uppercase()).copied()
}

/// Converts a three-letter amino-acid code to its one-letter form.
///
/// Lookup is case-insensitive. Returns `None` for unrecognized residue names.
pub fn three_to_one(code: &str) -> Option<char> {
    THREE_TO_ONE.get(code.to_ascii_uppercase().as_str()).copied()
}

/// Checks whether a character is valid in a sequence string.
///
/// Valid characters are the one-letter amino-acid codes (either case) and
/// the gap character `-`.
pub fn is_valid_sequence_char(c: char) -> bool {
    c == GAP_CHAR || ONE_TO_THREE.contains_key(&c.to_ascii_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_to_three_handles_standard_and_ambiguous_codes() {
        assert_eq!(one_to_three('A'), Some("ALA"));
        assert_eq!(one_to_three('w'), Some("TRP"));
        assert_eq!(one_to_three('X'), Some("UNK"));
        assert_eq!(one_to_three('Z'), Some("GLX"));
        assert_eq!(one_to_three('-'), None);
        assert_eq!(one_to_three('2'), None);
    }

    #[test]
    fn three_to_one_handles_case_and_unknowns() {
        assert_eq!(three_to_one("GLY"), Some('G'));
        assert_eq!(three_to_one("gly"), Some('G'));
        assert_eq!(three_to_one("HOH"), None);
    }

    #[test]
    fn round_trip_is_consistent_for_all_one_letter_codes() {
        for (&one, &three) in ONE_TO_THREE.entries() {
            assert_eq!(three_to_one(three), Some(one));
        }
    }

    #[test]
    fn sequence_char_validation_accepts_gaps_and_rejects_digits() {
        assert!(is_valid_sequence_char('-'));
        assert!(is_valid_sequence_char('G'));
        assert!(is_valid_sequence_char('g'));
        assert!(!is_valid_sequence_char('2'));
        assert!(!is_valid_sequence_char('*'));
        assert!(!is_valid_sequence_char(' '));
    }
}
