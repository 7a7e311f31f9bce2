//! Candidate protein extraction from open reading frames.
//!
//! Every start residue (`M`) opens a candidate that grows with each following
//! residue until the next stop marker closes all open candidates at once. A
//! frame like `M A M K _` therefore yields both `MAMK` and `MK`: nested starts
//! are separate candidates, not one.

use std::borrow::Cow;
use std::cmp::Reverse;

use smallvec::SmallVec;

use crate::frames::generate_reading_frames;
use crate::rust_api::{AminoAcid, AminoAcidFrame, BaseSequence, DnaSequence, Protein, Residue};

/// Streaming state machine over the residues of one frame.
///
/// Proteins are only emitted when a stop marker is seen; candidates still open
/// when the frame ends are discarded by [`finish`](Self::finish).
#[derive(Debug, Default)]
pub struct OrfScanner {
    open: SmallVec<[Vec<AminoAcid>; 4]>,
    proteins: Vec<Protein>,
}

impl OrfScanner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, residue: Residue) {
        match residue {
            Residue::Stop => {
                // emitted in the order the candidates were opened
                self.proteins.extend(self.open.drain(..).map(Protein::new));
            }
            Residue::Amino(aa) => {
                if residue.is_start() {
                    self.open.push(Vec::new());
                }
                for candidate in self.open.iter_mut() {
                    candidate.push(aa);
                }
            }
        }
    }

    /// Number of candidates currently open.
    pub fn open_candidates(&self) -> usize {
        self.open.len()
    }

    pub fn finish(self) -> Vec<Protein> {
        if !self.open.is_empty() {
            log::trace!(
                "discarding {} candidate(s) with no stop codon",
                self.open.len()
            );
        }
        self.proteins
    }
}

impl Extend<Residue> for OrfScanner {
    fn extend<I: IntoIterator<Item = Residue>>(&mut self, iter: I) {
        for residue in iter {
            self.push(residue);
        }
    }
}

/// All proteins in one frame, in discovery order.
pub fn extract_proteins_from_frame(frame: &AminoAcidFrame) -> Vec<Protein> {
    let mut scanner = OrfScanner::new();
    scanner.extend(frame.iter());
    let proteins = scanner.finish();
    log::debug!(
        "{} protein(s) in a frame of {} residues",
        proteins.len(),
        frame.len()
    );
    proteins
}

/// Options for [`ProteinSearch::run`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProteinSearch {
    /// Sort by descending length. Equal lengths keep frame order, then
    /// position within the frame.
    pub ordered: bool,
    /// Only search `start..end` of the sequence, clamped to its bounds.
    /// Ignored unless `end > start`.
    pub window: Option<(usize, usize)>,
}

impl ProteinSearch {
    pub fn new(ordered: bool) -> Self {
        Self {
            ordered,
            window: None,
        }
    }

    pub fn with_window(self, start: usize, end: usize) -> Self {
        Self {
            window: Some((start, end)),
            ..self
        }
    }

    /// Extracts proteins from all six frames, concatenated in frame order.
    pub fn run(&self, sequence: &DnaSequence) -> Vec<Protein> {
        let frames = generate_reading_frames(&self.target(sequence));
        self.collect(frames.map(|frame| extract_proteins_from_frame(&frame)))
    }

    /// Same as [`run`](Self::run), with the six frames scanned on the rayon pool.
    #[cfg(feature = "parallel")]
    pub fn run_parallel(&self, sequence: &DnaSequence) -> Vec<Protein> {
        use rayon::prelude::*;

        let frames = generate_reading_frames(&self.target(sequence));
        // indexed collect keeps frame order
        let per_frame: Vec<Vec<Protein>> = frames[..]
            .par_iter()
            .map(extract_proteins_from_frame)
            .collect();
        self.collect(per_frame)
    }

    fn target<'a>(&self, sequence: &'a DnaSequence) -> Cow<'a, DnaSequence> {
        match self.window {
            Some((start, end)) if end > start => Cow::Owned(sequence.subsequence(start, end)),
            _ => Cow::Borrowed(sequence),
        }
    }

    fn collect(&self, per_frame: impl IntoIterator<Item = Vec<Protein>>) -> Vec<Protein> {
        let mut proteins: Vec<Protein> = per_frame.into_iter().flatten().collect();
        log::debug!("found {} candidate protein(s)", proteins.len());
        if self.ordered {
            // stable, so ties keep discovery order
            proteins.sort_by_key(|p| Reverse(p.len()));
        }
        proteins
    }
}

/// Extracts candidate proteins from all six reading frames of `sequence`.
pub fn extract_proteins(sequence: &DnaSequence, ordered: bool) -> Vec<Protein> {
    ProteinSearch::new(ordered).run(sequence)
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    fn dna(dna: &str) -> DnaSequence {
        DnaSequence::from_str(dna).unwrap()
    }

    fn frame(residues: &str) -> AminoAcidFrame {
        AminoAcidFrame::from_str(residues).unwrap()
    }

    fn strings(proteins: Vec<Protein>) -> Vec<String> {
        proteins.into_iter().map(String::from).collect()
    }

    #[test]
    fn test_nested_starts_share_one_stop() {
        assert_eq!(
            strings(extract_proteins_from_frame(&frame("MAMK_"))),
            vec!["MAMK", "MK"]
        );
    }

    #[test]
    fn test_residues_before_start_are_dropped() {
        assert_eq!(
            strings(extract_proteins_from_frame(&frame("KLMF_"))),
            vec!["MF"]
        );
    }

    #[test]
    fn test_stop_without_open_candidate_is_noop() {
        assert_eq!(
            strings(extract_proteins_from_frame(&frame("_K__MW_"))),
            vec!["MW"]
        );
    }

    #[test]
    fn test_unterminated_candidates_discarded() {
        assert!(extract_proteins_from_frame(&frame("MAMKL")).is_empty());
        assert_eq!(
            strings(extract_proteins_from_frame(&frame("MA_MKL"))),
            vec!["MA"]
        );
    }

    #[test]
    fn test_start_then_immediate_stop() {
        assert_eq!(
            strings(extract_proteins_from_frame(&frame("M_"))),
            vec!["M"]
        );
    }

    #[test]
    fn test_empty_frame() {
        assert!(extract_proteins_from_frame(&frame("")).is_empty());
    }

    #[test]
    fn test_scanner_clears_after_stop() {
        let mut scanner = OrfScanner::new();
        scanner.extend(frame("MAM").iter());
        assert_eq!(scanner.open_candidates(), 2);
        scanner.push(Residue::Stop);
        assert_eq!(scanner.open_candidates(), 0);
        scanner.push(Residue::Amino(AminoAcid::K));
        assert_eq!(scanner.open_candidates(), 0);
        assert_eq!(strings(scanner.finish()), vec!["MAM", "M"]);
    }

    #[test]
    fn test_single_orf_end_to_end() {
        let seq = dna("ATGTTTTGA");
        assert_eq!(seq.translate(0), frame("MF_"));
        assert_eq!(strings(extract_proteins(&seq, false)), vec!["MF"]);
    }

    #[test]
    fn test_empty_sequence() {
        assert!(extract_proteins(&dna(""), false).is_empty());
        assert!(extract_proteins(&dna(""), true).is_empty());
    }

    #[test]
    fn test_unordered_keeps_frame_order() {
        let seq = dna("ATGATGTAAATGCCCTAG");
        // +1: ATG ATG TAA ATG CCC TAG -> M M _ M P _, no other frame has a start
        assert_eq!(
            strings(extract_proteins(&seq, false)),
            vec!["MM", "M", "MP"]
        );
    }

    #[test]
    fn test_ordered_is_stable_descending() {
        let seq = dna("ATGATGTAAATGCCCTAG");
        assert_eq!(
            strings(extract_proteins(&seq, true)),
            vec!["MM", "MP", "M"]
        );
    }

    #[test]
    fn test_forward_frames_precede_reverse() {
        // +1: ATG TAA ... -> "M"; reverse complement ATGGGGTAG... -> "MG"
        let seq = dna("ATGTAACTACCCCAT");
        assert_eq!(strings(extract_proteins(&seq, false)), vec!["M", "MG"]);
        assert_eq!(strings(extract_proteins(&seq, true)), vec!["MG", "M"]);
    }

    #[test]
    fn test_reverse_strand_proteins() {
        // forward +1: ATG AAA TGA -> M K _ ; reverse complement TCATTTCAT
        // has no stop, so only the forward protein appears
        assert_eq!(strings(extract_proteins(&dna("ATGAAATGA"), false)), vec!["MK"]);

        // reverse complement of CTACATCAT is ATGATGTAG -> M M _
        assert_eq!(
            strings(extract_proteins(&dna("CTACATCAT"), false)),
            vec!["MM", "M"]
        );
    }

    #[test]
    fn test_window_restricts_search() {
        let seq = dna("CCCATGTTTTGACCC");
        let search = ProteinSearch::new(false).with_window(3, 12);
        assert_eq!(strings(search.run(&seq)), vec!["MF"]);

        // end <= start searches the whole sequence
        let whole = ProteinSearch::new(false).with_window(5, 5);
        assert_eq!(whole.run(&seq), extract_proteins(&seq, false));
    }
}
