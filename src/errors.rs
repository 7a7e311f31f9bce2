use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TranslationError {
    #[error("non-ascii byte: {:x?}", .0)]
    NonAsciiByte(u8),
    #[error("bad nucleotide: {:?} is not one of A, C, G, T", .0)]
    BadNucleotide(char),
    #[error("a codon has exactly 3 bases, got {}", .0)]
    BadCodonLength(usize),
    #[error("bad amino acid: {:?}", .0)]
    BadAminoAcid(char),
}
