use std::fmt::{self, Write};
use std::str::FromStr;

use crate::errors::TranslationError;

/// A DNA nucleotide.
///
/// Sorts in ATCG order, not alphabetical.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, std::hash::Hash)]
#[repr(u8)]
pub enum Nucleotide {
    A = 0,
    T = 1,
    C = 2,
    G = 3,
}

const fn ascii_to_nucleotide_table() -> [Option<Nucleotide>; 256] {
    // 256 entries so any u8-cast-to-usize index is in bounds.
    let mut pack_table = [None; 256];

    macro_rules! insert {
        ($chr:literal, $variant:expr) => {
            pack_table[$chr.to_ascii_uppercase() as usize] = Some($variant);
            pack_table[$chr.to_ascii_lowercase() as usize] = Some($variant);
        };
    }

    insert!(b'a', Nucleotide::A);
    insert!(b't', Nucleotide::T);
    insert!(b'c', Nucleotide::C);
    insert!(b'g', Nucleotide::G);

    pack_table
}

const ASCII_TO_NUCLEOTIDE: [Option<Nucleotide>; 256] = ascii_to_nucleotide_table();

impl Nucleotide {
    pub const ALL: [Self; 4] = [Self::A, Self::T, Self::C, Self::G];

    pub fn complement(self) -> Self {
        match self {
            Self::A => Self::T,
            Self::T => Self::A,
            Self::C => Self::G,
            Self::G => Self::C,
        }
    }

    pub fn to_ascii(self) -> u8 {
        match self {
            Self::A => b'A',
            Self::T => b'T',
            Self::C => b'C',
            Self::G => b'G',
        }
    }

    /// The letter used for this base in RNA notation (`T` becomes `U`).
    pub fn to_rna_ascii(self) -> u8 {
        match self {
            Self::T => b'U',
            other => other.to_ascii(),
        }
    }

    pub fn is_gc(self) -> bool {
        matches!(self, Self::C | Self::G)
    }
}

impl TryFrom<u8> for Nucleotide {
    type Error = TranslationError;

    #[inline(always)]
    fn try_from(u: u8) -> Result<Self, Self::Error> {
        if u >= 128 {
            return Err(TranslationError::NonAsciiByte(u));
        }

        match ASCII_TO_NUCLEOTIDE[u as usize] {
            Some(n) => Ok(n),
            None => Err(TranslationError::BadNucleotide(u.into())),
        }
    }
}

impl From<Nucleotide> for u8 {
    fn from(n: Nucleotide) -> Self {
        n.to_ascii()
    }
}

impl From<Nucleotide> for char {
    fn from(n: Nucleotide) -> Self {
        n.to_ascii() as char
    }
}

impl fmt::Display for Nucleotide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char((*self).into())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, std::hash::Hash)]
pub struct Codon(pub [Nucleotide; 3]);

impl Codon {
    /// Number of distinct codons over the four-letter alphabet.
    pub const COUNT: usize = 64;

    /// Dense index in `0..64`, used to address codon tables.
    pub fn index(self) -> usize {
        let [a, b, c] = self.0;
        (a as usize) << 4 | (b as usize) << 2 | (c as usize)
    }

    /// Inverse of [`index`](Self::index).
    pub fn from_index(idx: usize) -> Self {
        let n = |shift: usize| Nucleotide::ALL[(idx >> shift) & 0b11];
        Self([n(4), n(2), n(0)])
    }

    /// Iterates over all 64 codons in index order.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..Self::COUNT).map(Self::from_index)
    }
}

impl From<[Nucleotide; 3]> for Codon {
    fn from(value: [Nucleotide; 3]) -> Self {
        Self(value)
    }
}

impl TryFrom<[u8; 3]> for Codon {
    type Error = TranslationError;

    fn try_from(value: [u8; 3]) -> Result<Self, Self::Error> {
        Ok(Self([
            Nucleotide::try_from(value[0])?,
            Nucleotide::try_from(value[1])?,
            Nucleotide::try_from(value[2])?,
        ]))
    }
}

impl From<Codon> for [Nucleotide; 3] {
    fn from(c: Codon) -> Self {
        c.0
    }
}

impl FromStr for Codon {
    type Err = TranslationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().as_bytes() {
            &[a, b, c] => Self::try_from([a, b, c]),
            other => Err(TranslationError::BadCodonLength(other.len())),
        }
    }
}

impl fmt::Display for Codon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.0[0], self.0[1], self.0[2])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nucleotide_parses_case_insensitively() {
        for c in 0_u8..128 {
            let r = Nucleotide::try_from(c);
            if b"aAtTcCgG".contains(&c) {
                assert!(r.is_ok(), "{:?} should be a valid nucleotide", c as char);
            } else {
                assert_eq!(r, Err(TranslationError::BadNucleotide(c as char)));
            }
        }
        assert_eq!(
            Nucleotide::try_from(200),
            Err(TranslationError::NonAsciiByte(200))
        );
    }

    #[test]
    fn test_complement_pairs() {
        use Nucleotide::*;
        assert_eq!(A.complement(), T);
        assert_eq!(T.complement(), A);
        assert_eq!(C.complement(), G);
        assert_eq!(G.complement(), C);
        for n in Nucleotide::ALL {
            assert_eq!(n.complement().complement(), n);
        }
    }

    #[test]
    fn test_codon_index_round_trips() {
        let all: Vec<_> = Codon::all().collect();
        assert_eq!(all.len(), 64);
        for (i, codon) in all.iter().enumerate() {
            assert_eq!(codon.index(), i);
        }
    }

    #[test]
    fn test_codon_from_str() {
        use Nucleotide::*;
        assert_eq!("atg".parse::<Codon>(), Ok(Codon([A, T, G])));
        assert_eq!("ATG".parse::<Codon>().unwrap().to_string(), "ATG");
        assert!("AT".parse::<Codon>().is_err());
        assert!("ATGC".parse::<Codon>().is_err());
        assert!("AXG".parse::<Codon>().is_err());
    }
}
