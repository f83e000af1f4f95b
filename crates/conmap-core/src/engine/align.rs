use super::config::AlignmentParams;
use crate::core::models::sequence::Sequence;
use crate::core::utils::codes::GAP_CHAR;
use std::collections::HashMap;

/// One column of a local alignment core.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AlignOp {
    /// Both sequences contribute a character.
    Align,
    /// Gap in the first sequence; the second contributes a character.
    GapInA,
    /// Gap in the second sequence; the first contributes a character.
    GapInB,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TracebackState {
    Main,
    GapA,
    GapB,
}

/// The result of a local pairwise alignment.
///
/// The aligned strings present the whole of both inputs in one register:
/// every original character occupies exactly one column, the highest-scoring
/// local region pairs characters of both sequences, and everything outside
/// it is mutually padded with gaps. Both strings always have equal length,
/// so original sequence coordinates remain recoverable from either.
#[derive(Debug, Clone, PartialEq)]
pub struct LocalAlignment {
    a_aligned: String,
    b_aligned: String,
    a_range: Option<(usize, usize)>,
    b_range: Option<(usize, usize)>,
    score: f64,
    ops: Vec<AlignOp>,
}

impl LocalAlignment {
    /// The gapped rendition of the first input.
    pub fn a_aligned(&self) -> &str {
        &self.a_aligned
    }

    /// The gapped rendition of the second input.
    pub fn b_aligned(&self) -> &str {
        &self.b_aligned
    }

    /// The score of the local alignment region.
    pub fn score(&self) -> f64 {
        self.score
    }

    /// The 1-based inclusive span of the region in the first input, if any.
    pub fn a_range(&self) -> Option<(usize, usize)> {
        self.a_range
    }

    /// The 1-based inclusive span of the region in the second input, if any.
    pub fn b_range(&self) -> Option<(usize, usize)> {
        self.b_range
    }

    /// Derives the 1-based position map from the first input to the second.
    ///
    /// Only columns where both sequences contribute a character appear;
    /// positions aligned to a gap have no counterpart.
    pub fn pair_map(&self) -> HashMap<u32, u32> {
        let mut map = HashMap::new();
        let (Some((a_start, _)), Some((b_start, _))) = (self.a_range, self.b_range) else {
            return map;
        };
        let mut a_pos = a_start as u32;
        let mut b_pos = b_start as u32;
        for op in &self.ops {
            match op {
                AlignOp::Align => {
                    map.insert(a_pos, b_pos);
                    a_pos += 1;
                    b_pos += 1;
                }
                AlignOp::GapInA => b_pos += 1,
                AlignOp::GapInB => a_pos += 1,
            }
        }
        map
    }

    fn into_strings(self) -> (String, String) {
        (self.a_aligned, self.b_aligned)
    }
}

/// Computes the optimal local alignment of two sequence strings.
///
/// Smith-Waterman dynamic programming with the Gotoh affine-gap formulation:
/// `H[i][j] = max(0, H[i-1][j-1] + s(a_i, b_j), E[i][j], F[i][j])`, where the
/// auxiliary `E`/`F` matrices carry `gap_open_pen` on the first gapped column
/// of a run and `gap_ext_pen` on every further one. `s` scores `id_chars` for
/// identical characters (gap-vs-gap excluded) and `nonid_chars` otherwise;
/// character comparison ignores ASCII case. Traceback starts at the
/// maximum-score cell, ties broken by first occurrence in row-major order,
/// and stops at the first zero cell.
///
/// An empty or all-gap input short-circuits to all-gap outputs of equal
/// length for both sequences.
pub fn align(a: &str, b: &str, params: &AlignmentParams) -> LocalAlignment {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    let m = a_chars.len();
    let n = b_chars.len();

    let unalignable = m == 0
        || n == 0
        || a_chars.iter().all(|&c| c == GAP_CHAR)
        || b_chars.iter().all(|&c| c == GAP_CHAR);
    if unalignable {
        let gaps = GAP_CHAR.to_string().repeat(m.max(n));
        return LocalAlignment {
            a_aligned: gaps.clone(),
            b_aligned: gaps,
            a_range: None,
            b_range: None,
            score: 0.0,
            ops: Vec::new(),
        };
    }

    let substitution = |x: char, y: char| -> f64 {
        if x.eq_ignore_ascii_case(&y) && x != GAP_CHAR {
            params.id_chars
        } else {
            params.nonid_chars
        }
    };

    let cols = n + 1;
    let idx = |i: usize, j: usize| i * cols + j;
    let mut h = vec![0.0f64; (m + 1) * cols];
    let mut e = vec![f64::NEG_INFINITY; (m + 1) * cols];
    let mut f = vec![f64::NEG_INFINITY; (m + 1) * cols];

    let mut best_score = 0.0f64;
    let mut best_cell = (0usize, 0usize);

    for i in 1..=m {
        for j in 1..=n {
            e[idx(i, j)] = (h[idx(i, j - 1)] + params.gap_open_pen)
                .max(e[idx(i, j - 1)] + params.gap_ext_pen);
            f[idx(i, j)] = (h[idx(i - 1, j)] + params.gap_open_pen)
                .max(f[idx(i - 1, j)] + params.gap_ext_pen);

            let diagonal = h[idx(i - 1, j - 1)] + substitution(a_chars[i - 1], b_chars[j - 1]);
            let cell = 0.0f64.max(diagonal).max(e[idx(i, j)]).max(f[idx(i, j)]);
            h[idx(i, j)] = cell;

            // Strict comparison keeps the first row-major maximum on ties.
            if cell > best_score {
                best_score = cell;
                best_cell = (i, j);
            }
        }
    }

    if best_score <= 0.0 {
        // No positive-scoring region: present both inputs mutually padded.
        let a_aligned: String = a_chars
            .iter()
            .copied()
            .chain(std::iter::repeat_n(GAP_CHAR, n))
            .collect();
        let b_aligned: String = std::iter::repeat_n(GAP_CHAR, m)
            .chain(b_chars.iter().copied())
            .collect();
        return LocalAlignment {
            a_aligned,
            b_aligned,
            a_range: None,
            b_range: None,
            score: 0.0,
            ops: Vec::new(),
        };
    }

    // Traceback from the maximum-score cell to the first zero cell.
    let (mut i, mut j) = best_cell;
    let mut ops_rev: Vec<AlignOp> = Vec::new();
    let mut state = TracebackState::Main;
    loop {
        match state {
            TracebackState::Main => {
                let cell = h[idx(i, j)];
                if cell == 0.0 {
                    break;
                }
                let diagonal =
                    h[idx(i - 1, j - 1)] + substitution(a_chars[i - 1], b_chars[j - 1]);
                if cell == diagonal {
                    ops_rev.push(AlignOp::Align);
                    i -= 1;
                    j -= 1;
                } else if cell == e[idx(i, j)] {
                    state = TracebackState::GapA;
                } else {
                    state = TracebackState::GapB;
                }
            }
            TracebackState::GapA => {
                ops_rev.push(AlignOp::GapInA);
                if e[idx(i, j)] == h[idx(i, j - 1)] + params.gap_open_pen {
                    state = TracebackState::Main;
                }
                j -= 1;
            }
            TracebackState::GapB => {
                ops_rev.push(AlignOp::GapInB);
                if f[idx(i, j)] == h[idx(i - 1, j)] + params.gap_open_pen {
                    state = TracebackState::Main;
                }
                i -= 1;
            }
        }
    }

    let (a_start, a_end) = (i + 1, best_cell.0);
    let (b_start, b_end) = (j + 1, best_cell.1);
    let ops: Vec<AlignOp> = ops_rev.into_iter().rev().collect();

    let mut core_a = String::new();
    let mut core_b = String::new();
    let mut a_cursor = a_start - 1;
    let mut b_cursor = b_start - 1;
    for op in &ops {
        match op {
            AlignOp::Align => {
                core_a.push(a_chars[a_cursor]);
                core_b.push(b_chars[b_cursor]);
                a_cursor += 1;
                b_cursor += 1;
            }
            AlignOp::GapInA => {
                core_a.push(GAP_CHAR);
                core_b.push(b_chars[b_cursor]);
                b_cursor += 1;
            }
            AlignOp::GapInB => {
                core_a.push(a_chars[a_cursor]);
                core_b.push(GAP_CHAR);
                a_cursor += 1;
            }
        }
    }

    // Pad the unaligned flanks into a shared register: each sequence keeps
    // its own prefix/suffix characters while the other side carries gaps of
    // the same width, so both strings stay equally long and column-addressable.
    let a_prefix: String = a_chars[..a_start - 1].iter().collect();
    let b_prefix: String = b_chars[..b_start - 1].iter().collect();
    let a_suffix: String = a_chars[a_end..].iter().collect();
    let b_suffix: String = b_chars[b_end..].iter().collect();

    let gap_run = |len: usize| GAP_CHAR.to_string().repeat(len);
    let a_aligned = format!(
        "{a_prefix}{}{core_a}{a_suffix}{}",
        gap_run(b_prefix.chars().count()),
        gap_run(b_suffix.chars().count())
    );
    let b_aligned = format!(
        "{}{b_prefix}{core_b}{}{b_suffix}",
        gap_run(a_prefix.chars().count()),
        gap_run(a_suffix.chars().count())
    );

    LocalAlignment {
        a_aligned,
        b_aligned,
        a_range: Some((a_start, a_end)),
        b_range: Some((b_start, b_end)),
        score: best_score,
        ops,
    }
}

impl Sequence {
    /// Locally aligns this sequence against another, returning the gapped
    /// renditions of both and leaving the inputs untouched.
    pub fn align_local(&self, other: &Sequence, params: &AlignmentParams) -> (Sequence, Sequence) {
        let alignment = align(self.seq(), other.seq(), params);
        let (a_aligned, b_aligned) = alignment.into_strings();
        (self.gapped_copy(a_aligned), other.gapped_copy(b_aligned))
    }

    /// Locally aligns this sequence against another, rewriting both sequence
    /// strings to the gapped alignment result in place.
    pub fn align_local_mut(&mut self, other: &mut Sequence, params: &AlignmentParams) {
        let alignment = align(self.seq(), other.seq(), params);
        let (a_aligned, b_aligned) = alignment.into_strings();
        self.set_gapped(a_aligned);
        other.set_gapped(b_aligned);
    }
}
