//! The six reading frames of a DNA sequence.

use std::fmt;

use crate::rust_api::{AminoAcidFrame, BaseSequence, DnaSequence};

/// Which strand a reading frame is read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, std::hash::Hash)]
pub enum Strand {
    Forward,
    ReverseComplement,
}

/// One of the six reading frames: a strand plus a phase offset in `0..3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, std::hash::Hash)]
pub struct ReadingFrame {
    pub strand: Strand,
    pub offset: usize,
}

impl ReadingFrame {
    /// Frame order is fixed: forward offsets 0, 1, 2, then reverse-complement
    /// offsets 0, 1, 2. Frame numbers 1..=6 follow this order.
    pub const ALL: [Self; 6] = [
        Self::new(Strand::Forward, 0),
        Self::new(Strand::Forward, 1),
        Self::new(Strand::Forward, 2),
        Self::new(Strand::ReverseComplement, 0),
        Self::new(Strand::ReverseComplement, 1),
        Self::new(Strand::ReverseComplement, 2),
    ];

    pub const fn new(strand: Strand, offset: usize) -> Self {
        Self { strand, offset }
    }

    /// 1-based position in [`ReadingFrame::ALL`].
    pub fn number(self) -> usize {
        match self.strand {
            Strand::Forward => self.offset + 1,
            Strand::ReverseComplement => self.offset + 4,
        }
    }
}

impl fmt::Display for ReadingFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = match self.strand {
            Strand::Forward => '+',
            Strand::ReverseComplement => '-',
        };
        write!(f, "{sign}{}", self.offset + 1)
    }
}

/// Translates `sequence` from `offset` onward; see [`DnaSequence::translate`].
pub fn translate_frame(sequence: &DnaSequence, offset: usize) -> AminoAcidFrame {
    sequence.translate(offset)
}

/// Translate a DNA sequence in all six reading frames, in [`ReadingFrame::ALL`] order.
///
/// Always returns six frames; a frame without a complete codon is empty.
pub fn generate_reading_frames(sequence: &DnaSequence) -> [AminoAcidFrame; 6] {
    let rc = sequence.reverse_complement();
    let frames = ReadingFrame::ALL.map(|frame| match frame.strand {
        Strand::Forward => sequence.translate(frame.offset),
        Strand::ReverseComplement => rc.translate(frame.offset),
    });
    log::debug!(
        "translated {} nt into frames of {:?} residues",
        sequence.len(),
        frames.iter().map(|f| f.len()).collect::<Vec<_>>()
    );
    frames
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    fn dna(dna: &str) -> DnaSequence {
        DnaSequence::from_str(dna).unwrap()
    }

    fn frames_as_strings(seq: &str) -> Vec<String> {
        generate_reading_frames(&dna(seq))
            .into_iter()
            .map(String::from)
            .collect()
    }

    #[test]
    fn test_frame_numbers() {
        let numbers: Vec<_> = ReadingFrame::ALL.iter().map(|f| f.number()).collect();
        assert_eq!(numbers, vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(ReadingFrame::ALL[0].to_string(), "+1");
        assert_eq!(ReadingFrame::ALL[5].to_string(), "-3");
    }

    #[test]
    fn test_translate_all() {
        assert_eq!(
            frames_as_strings("AAAGGGAAA"),
            vec!["KGK", "KG", "RE", "FPF", "FP", "SL"]
        );
    }

    #[test]
    fn test_short_translate_all_keeps_six_frames() {
        assert_eq!(frames_as_strings("GGGG"), vec!["G", "G", "", "P", "P", ""]);
        assert_eq!(frames_as_strings("GGG"), vec!["G", "", "", "P", "", ""]);
        assert_eq!(frames_as_strings("G"), vec![""; 6]);
        assert_eq!(frames_as_strings(""), vec![""; 6]);
    }

    #[test]
    fn test_reverse_frames_read_reverse_complement() {
        let seq = dna("ATGAAATGA");
        let frames = generate_reading_frames(&seq);
        let rc = seq.reverse_complement();
        for (i, frame) in ReadingFrame::ALL.iter().enumerate() {
            let expected = match frame.strand {
                Strand::Forward => translate_frame(&seq, frame.offset),
                Strand::ReverseComplement => translate_frame(&rc, frame.offset),
            };
            assert_eq!(frames[i], expected);
        }
    }
}
