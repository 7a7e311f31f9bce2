use std::fmt::{self, Write};
use std::str::FromStr;

pub use crate::amino_acid::{AminoAcid, Residue};
pub use crate::errors::TranslationError;
pub use crate::nucleotide::{Codon, Nucleotide};
pub use crate::trans_table::CodonTable;

use crate::iter::NucleotideIter;
#[cfg(feature = "serde")]
use crate::serde_utils::impl_stringlike;

pub trait BaseSequence: std::marker::Sized {
    type Item: Into<u8> + Copy;

    fn as_slice(&self) -> &[Self::Item];

    fn len(&self) -> usize {
        self.as_slice().len()
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

macro_rules! impls {
    ($type:ty) => {
        impl From<$type> for String {
            fn from(seq: $type) -> Self {
                let mut str = String::with_capacity(seq.len());
                for i in seq.as_slice() {
                    let c = u8::from(*i) as char;
                    str.push(c);
                }
                str
            }
        }

        impl std::ops::Index<usize> for $type {
            type Output = <Self as BaseSequence>::Item;

            fn index(&self, index: usize) -> &Self::Output {
                &self.as_slice()[index]
            }
        }

        impl $type {
            pub fn iter(&self) -> impl Iterator<Item = <Self as BaseSequence>::Item> + '_ {
                self.as_slice().iter().copied()
            }
        }

        impl fmt::Display for $type {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                for &item in self.as_slice() {
                    f.write_char(u8::from(item) as char)?;
                }
                Ok(())
            }
        }

        #[cfg(feature = "serde")]
        impl_stringlike!($type);
    };
}

/// A validated DNA sequence over `{A, C, G, T}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, std::hash::Hash)]
pub struct DnaSequence {
    dna: Vec<Nucleotide>,
}

impl DnaSequence {
    /// Construct a new DnaSequence from a Vec of nucleotides
    pub fn new(dna: Vec<Nucleotide>) -> Self {
        Self { dna }
    }

    /// The base-paired strand, in the same order (A<->T, C<->G).
    pub fn complement(&self) -> Self {
        self.dna.iter().complement().collect()
    }

    /// Takes the reverse complement of a DNA sequence.
    pub fn reverse_complement(&self) -> Self {
        self.dna.iter().reverse_complement().collect()
    }

    /// Rewrites the sequence in RNA notation.
    pub fn transcribe(&self) -> RnaSequence {
        RnaSequence {
            bases: self.dna.clone(),
        }
    }

    /// Translate codons starting `offset` nucleotides in, using the standard code.
    ///
    /// Yields `(len - offset) / 3` residues, and an empty frame when `offset`
    /// is past the end of the sequence.
    pub fn translate(&self, offset: usize) -> AminoAcidFrame {
        let tail = self.dna.get(offset..).unwrap_or_default();
        CodonTable::STANDARD.translate_dna(tail)
    }

    /// Copies out `start..end`, clamped to the sequence bounds.
    pub fn subsequence(&self, start: usize, end: usize) -> Self {
        let end = end.min(self.len());
        let start = start.min(end);
        Self::new(self.dna[start..end].to_vec())
    }
}

impl BaseSequence for DnaSequence {
    type Item = Nucleotide;

    fn as_slice(&self) -> &[Nucleotide] {
        &self.dna
    }
}

impls!(DnaSequence);

impl FromIterator<Nucleotide> for DnaSequence {
    fn from_iter<I: IntoIterator<Item = Nucleotide>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl TryFrom<&[u8]> for DnaSequence {
    type Error = TranslationError;

    fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
        let mut vec = Vec::with_capacity(value.len());

        for &b in value {
            if b != b' ' && b != b'\t' {
                vec.push(Nucleotide::try_from(b)?);
            }
        }
        Ok(Self::new(vec))
    }
}

impl TryFrom<Vec<u8>> for DnaSequence {
    type Error = TranslationError;

    fn try_from(value: Vec<u8>) -> Result<Self, Self::Error> {
        Self::try_from(&value[..])
    }
}

impl FromStr for DnaSequence {
    type Err = TranslationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s.as_bytes())
    }
}

/// A transcribed sequence; the same bases as the source DNA, rendered with `U`
/// in place of `T`.
#[derive(Debug, Clone, PartialEq, Eq, std::hash::Hash)]
pub struct RnaSequence {
    bases: Vec<Nucleotide>,
}

impl RnaSequence {
    pub fn len(&self) -> usize {
        self.bases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bases.is_empty()
    }

    /// Back to DNA notation.
    pub fn reverse_transcribe(&self) -> DnaSequence {
        DnaSequence::new(self.bases.clone())
    }
}

impl fmt::Display for RnaSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &n in &self.bases {
            f.write_char(n.to_rna_ascii() as char)?;
        }
        Ok(())
    }
}

/// The residues read from one reading frame, stop markers included.
#[derive(Debug, Clone, Default, PartialEq, Eq, std::hash::Hash)]
pub struct AminoAcidFrame {
    residues: Vec<Residue>,
}

impl AminoAcidFrame {
    pub fn new(residues: Vec<Residue>) -> Self {
        Self { residues }
    }
}

impl BaseSequence for AminoAcidFrame {
    type Item = Residue;

    fn as_slice(&self) -> &[Residue] {
        &self.residues
    }
}

impls!(AminoAcidFrame);

impl FromIterator<Residue> for AminoAcidFrame {
    fn from_iter<I: IntoIterator<Item = Residue>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl FromStr for AminoAcidFrame {
    type Err = TranslationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.bytes()
            .filter(|b| !b.is_ascii_whitespace())
            .map(Residue::try_from)
            .collect()
    }
}

/// A candidate protein: the residues from a start marker up to (not
/// including) the stop marker that terminated it.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, std::hash::Hash)]
pub struct Protein {
    amino_acids: Vec<AminoAcid>,
}

impl Protein {
    pub fn new(amino_acids: Vec<AminoAcid>) -> Self {
        Self { amino_acids }
    }
}

impl BaseSequence for Protein {
    type Item = AminoAcid;

    fn as_slice(&self) -> &[AminoAcid] {
        &self.amino_acids
    }
}

impls!(Protein);

impl FromStr for Protein {
    type Err = TranslationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.bytes()
            .filter(|b| !b.is_ascii_whitespace())
            .map(AminoAcid::try_from)
            .collect::<Result<Vec<_>, _>>()
            .map(Self::new)
    }
}

#[cfg(feature = "serde")]
impl_stringlike!(Codon);
