use std::collections::HashMap;

use lazy_static::lazy_static;
use smallvec::SmallVec;

use crate::amino_acid::{Residue, ASCII_TO_AMINO_ACID};
use crate::iter::NucleotideIter;
use crate::nucleotide::{Codon, Nucleotide};
use crate::rust_api::AminoAcidFrame;

/// The standard genetic code (NCBI table 1), one letter per codon, with codons
/// enumerated in TCAG order: TTT, TTC, TTA, TTG, TCT, ... GGG. `*` is stop.
const STANDARD_CODE_TCAG: &[u8; Codon::COUNT] =
    b"FFLLSSSSYY**CC*WLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG";

const fn standard_code() -> [Residue; Codon::COUNT] {
    const TCAG: [Nucleotide; 4] = [Nucleotide::T, Nucleotide::C, Nucleotide::A, Nucleotide::G];

    let mut table = [Residue::Stop; Codon::COUNT];
    let mut i = 0;
    while i < Codon::COUNT {
        // re-address from TCAG order to `Codon::index` order
        let idx = (TCAG[i >> 4] as usize) << 4
            | (TCAG[(i >> 2) & 0b11] as usize) << 2
            | (TCAG[i & 0b11] as usize);
        let letter = STANDARD_CODE_TCAG[i];
        table[idx] = if letter == b'*' {
            Residue::Stop
        } else {
            match ASCII_TO_AMINO_ACID[letter as usize] {
                Some(aa) => Residue::Amino(aa),
                None => panic!("standard code may only hold amino acid letters and `*`"),
            }
        };
        i += 1;
    }
    table
}

/// Indexed by [`Codon::index`]; evaluated at compile time.
const STANDARD_CODE: [Residue; Codon::COUNT] = standard_code();

lazy_static! {
    /// Reverse lookup: every codon coding a residue, in `Codon::index` order.
    static ref SYNONYMS: HashMap<Residue, SmallVec<[Codon; 6]>> = {
        let mut synonyms: HashMap<Residue, SmallVec<[Codon; 6]>> = HashMap::new();
        for codon in Codon::all() {
            synonyms
                .entry(STANDARD_CODE[codon.index()])
                .or_default()
                .push(codon);
        }
        synonyms
    };
}

/// Codon to amino acid mapping for the standard genetic code.
///
/// Total over all 64 codons: `TAA`, `TAG` and `TGA` map to [`Residue::Stop`],
/// and `ATG` maps to the start residue `M`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CodonTable;

impl CodonTable {
    pub const STANDARD: Self = Self;

    #[inline(always)]
    pub fn translate_codon(self, codon: Codon) -> Residue {
        STANDARD_CODE[codon.index()]
    }

    /// All codons that translate to `residue`. Empty only for residues the
    /// table never produces, which cannot happen with the standard code.
    pub fn codons_for(self, residue: Residue) -> &'static [Codon] {
        SYNONYMS
            .get(&residue)
            .map(|codons| codons.as_slice())
            .unwrap_or(&[])
    }

    /// Translates consecutive non-overlapping codons of `dna`.
    ///
    /// Any trailing non-multiple-of-3 chunk is silently truncated.
    pub fn translate_dna(self, dna: &[Nucleotide]) -> AminoAcidFrame {
        dna.iter()
            .codons()
            .map(|codon| self.translate_codon(codon))
            .collect()
    }
}
