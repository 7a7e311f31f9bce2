//! Composition statistics over a DNA sequence.

use std::fmt;

use crate::iter::NucleotideIter;
use crate::rust_api::{BaseSequence, Codon, CodonTable, DnaSequence, Nucleotide, Residue};

/// Per-base counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NucleotideCounts {
    pub a: usize,
    pub c: usize,
    pub g: usize,
    pub t: usize,
}

impl NucleotideCounts {
    pub fn get(&self, n: Nucleotide) -> usize {
        match n {
            Nucleotide::A => self.a,
            Nucleotide::C => self.c,
            Nucleotide::G => self.g,
            Nucleotide::T => self.t,
        }
    }

    pub fn total(&self) -> usize {
        self.a + self.c + self.g + self.t
    }
}

impl fmt::Display for NucleotideCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "A: {}, C: {}, G: {}, T: {}", self.a, self.c, self.g, self.t)
    }
}

pub fn count_nucleotides(sequence: &DnaSequence) -> NucleotideCounts {
    let mut counts = NucleotideCounts::default();
    for n in sequence.iter() {
        match n {
            Nucleotide::A => counts.a += 1,
            Nucleotide::C => counts.c += 1,
            Nucleotide::G => counts.g += 1,
            Nucleotide::T => counts.t += 1,
        }
    }
    counts
}

fn gc_percent(bases: &[Nucleotide]) -> Option<f64> {
    if bases.is_empty() {
        return None;
    }
    let gc = bases.iter().filter(|n| n.is_gc()).count();
    Some(gc as f64 / bases.len() as f64 * 100.0)
}

/// Percentage of G and C bases, or `None` for an empty sequence.
pub fn gc_content(sequence: &DnaSequence) -> Option<f64> {
    gc_percent(sequence.as_slice())
}

/// GC percentage of each consecutive, non-overlapping window of `k` bases.
///
/// A trailing window shorter than `k` is dropped.
pub fn gc_content_windows(sequence: &DnaSequence, k: usize) -> Vec<f64> {
    if k == 0 {
        return Vec::new();
    }
    sequence
        .as_slice()
        .chunks_exact(k)
        .filter_map(gc_percent)
        .collect()
}

/// Relative usage of each codon coding `residue`, read in frame 0.
///
/// Fractions sum to 1 over the returned codons. Only codons that occur are
/// listed, in codon-table order; the result is empty if `residue` never occurs.
pub fn codon_usage(sequence: &DnaSequence, residue: Residue) -> Vec<(Codon, f64)> {
    let table = CodonTable::STANDARD;
    let mut counts = [0usize; Codon::COUNT];
    let mut total = 0;
    for codon in sequence.iter().codons() {
        if table.translate_codon(codon) == residue {
            counts[codon.index()] += 1;
            total += 1;
        }
    }

    table
        .codons_for(residue)
        .iter()
        .filter(|codon| counts[codon.index()] > 0)
        .map(|&codon| (codon, counts[codon.index()] as f64 / total as f64))
        .collect()
}

/// Rounds to `decimals` places, for reporting.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}
