use std::fmt::{self, Write};

use crate::errors::TranslationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, std::hash::Hash)]
#[repr(u8)]
pub enum AminoAcid {
    A,
    C,
    D,
    E,
    F,
    G,
    H,
    I,
    K,
    L,
    M,
    N,
    P,
    Q,
    R,
    S,
    T,
    V,
    W,
    Y,
}

const fn ascii_to_amino_acid_table() -> [Option<AminoAcid>; 256] {
    // 256 entries so any u8-cast-to-usize index is in bounds.
    let mut pack_table = [None; 256];

    macro_rules! insert {
        ($chr:literal, $variant:expr) => {
            pack_table[$chr.to_ascii_uppercase() as usize] = Some($variant);
            pack_table[$chr.to_ascii_lowercase() as usize] = Some($variant);
        };
    }

    insert!(b'a', AminoAcid::A); // Alanine
    insert!(b'c', AminoAcid::C); // Cysteine
    insert!(b'd', AminoAcid::D); // Aspartate
    insert!(b'e', AminoAcid::E); // Glutamate
    insert!(b'f', AminoAcid::F); // Phenylalanine
    insert!(b'g', AminoAcid::G); // Glycine
    insert!(b'h', AminoAcid::H); // Histidine
    insert!(b'i', AminoAcid::I); // Isoleucine
    insert!(b'k', AminoAcid::K); // Lysine
    insert!(b'l', AminoAcid::L); // Leucine
    insert!(b'm', AminoAcid::M); // Methionine
    insert!(b'n', AminoAcid::N); // Asparagine
    insert!(b'p', AminoAcid::P); // Proline
    insert!(b'q', AminoAcid::Q); // Glutamine
    insert!(b'r', AminoAcid::R); // Arginine
    insert!(b's', AminoAcid::S); // Serine
    insert!(b't', AminoAcid::T); // Threonine
    insert!(b'v', AminoAcid::V); // Valine
    insert!(b'w', AminoAcid::W); // Tryptophan
    insert!(b'y', AminoAcid::Y); // Tyrosine

    pack_table
}

// const so that the codon table can be built at compile time
pub(crate) const ASCII_TO_AMINO_ACID: [Option<AminoAcid>; 256] = ascii_to_amino_acid_table();

impl AminoAcid {
    /// Methionine, the residue that opens a reading frame.
    pub const START: Self = Self::M;

    pub fn to_ascii(self) -> u8 {
        match self {
            Self::A => b'A',
            Self::C => b'C',
            Self::D => b'D',
            Self::E => b'E',
            Self::F => b'F',
            Self::G => b'G',
            Self::H => b'H',
            Self::I => b'I',
            Self::K => b'K',
            Self::L => b'L',
            Self::M => b'M',
            Self::N => b'N',
            Self::P => b'P',
            Self::Q => b'Q',
            Self::R => b'R',
            Self::S => b'S',
            Self::T => b'T',
            Self::V => b'V',
            Self::W => b'W',
            Self::Y => b'Y',
        }
    }
}

impl TryFrom<u8> for AminoAcid {
    type Error = TranslationError;

    #[inline(always)]
    fn try_from(u: u8) -> Result<Self, Self::Error> {
        if u >= 128 {
            return Err(TranslationError::NonAsciiByte(u));
        }

        match ASCII_TO_AMINO_ACID[u as usize] {
            Some(aa) => Ok(aa),
            None => Err(TranslationError::BadAminoAcid(u.into())),
        }
    }
}

impl From<AminoAcid> for u8 {
    fn from(aa: AminoAcid) -> Self {
        aa.to_ascii()
    }
}

impl fmt::Display for AminoAcid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char(self.to_ascii() as char)
    }
}

/// One translated codon: either an amino acid or the stop marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, std::hash::Hash)]
pub enum Residue {
    Amino(AminoAcid),
    Stop,
}

impl Residue {
    pub const STOP_ASCII: u8 = b'_';

    pub fn is_start(self) -> bool {
        self == Self::Amino(AminoAcid::START)
    }

    pub fn to_ascii(self) -> u8 {
        match self {
            Self::Amino(aa) => aa.to_ascii(),
            Self::Stop => Self::STOP_ASCII,
        }
    }
}

impl From<AminoAcid> for Residue {
    fn from(aa: AminoAcid) -> Self {
        Self::Amino(aa)
    }
}

impl TryFrom<u8> for Residue {
    type Error = TranslationError;

    /// Accepts `_` and `*` as the stop marker.
    fn try_from(u: u8) -> Result<Self, Self::Error> {
        match u {
            b'_' | b'*' => Ok(Self::Stop),
            other => AminoAcid::try_from(other).map(Self::Amino),
        }
    }
}

impl From<Residue> for u8 {
    fn from(r: Residue) -> Self {
        r.to_ascii()
    }
}

impl fmt::Display for Residue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char(self.to_ascii() as char)
    }
}
