//! Iterator adapters over nucleotides, usable with both `&Nucleotide` and
//! `Nucleotide` items.

use std::borrow::Borrow;
use std::iter::Rev;

use crate::nucleotide::{Codon, Nucleotide};

/// Extension methods for any iterator of nucleotides.
pub trait NucleotideIter: Iterator + Sized
where
    Self::Item: Borrow<Nucleotide>,
{
    /// Groups nucleotides into codons from the first base on. A trailing one
    /// or two bases that do not make up a codon are dropped.
    ///
    /// ```
    /// use dnatoolkit::{Codon, Nucleotide, NucleotideIter};
    ///
    /// use Nucleotide::*;
    /// let dna = [A, T, G, C, C, C, T];
    /// let codons: Vec<Codon> = dna.iter().codons().collect();
    /// assert_eq!(codons, [Codon([A, T, G]), Codon([C, C, C])]);
    /// ```
    fn codons(self) -> Codons<Self> {
        Codons(self)
    }

    /// Maps every base to its Watson-Crick partner.
    ///
    /// ```
    /// use dnatoolkit::{Nucleotide, NucleotideIter};
    ///
    /// use Nucleotide::*;
    /// assert!([A, T, G, C].iter().complement().eq([T, A, C, G]));
    /// ```
    fn complement(self) -> Complement<Self> {
        Complement(self)
    }

    /// Complements the bases and reverses their order, yielding the opposite
    /// strand read 5' to 3'.
    ///
    /// ```
    /// use dnatoolkit::{Nucleotide, NucleotideIter};
    ///
    /// use Nucleotide::*;
    /// assert!([A, A, A, G].iter().reverse_complement().eq([C, T, T, T]));
    /// ```
    fn reverse_complement(self) -> Complement<Rev<Self>>
    where
        Self: DoubleEndedIterator,
    {
        Complement(self.rev())
    }
}

impl<I> NucleotideIter for I
where
    I: Iterator,
    I::Item: Borrow<Nucleotide>,
{
}

/// Codons of the wrapped iterator; see [`NucleotideIter::codons`].
#[derive(Clone, Debug)]
pub struct Codons<I>(I);

impl<I> Iterator for Codons<I>
where
    I: Iterator,
    I::Item: Borrow<Nucleotide>,
{
    type Item = Codon;

    fn next(&mut self) -> Option<Codon> {
        let first = *self.0.next()?.borrow();
        let second = *self.0.next()?.borrow();
        let third = *self.0.next()?.borrow();
        Some(Codon([first, second, third]))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.0.size_hint();
        (lower / 3, upper.map(|n| n / 3))
    }
}

impl<I> DoubleEndedIterator for Codons<I>
where
    I: DoubleEndedIterator + ExactSizeIterator,
    I::Item: Borrow<Nucleotide>,
{
    fn next_back(&mut self) -> Option<Codon> {
        // drop the partial codon at the tail so the back stays in frame
        for _ in 0..self.0.len() % 3 {
            self.0.next_back();
        }
        let third = *self.0.next_back()?.borrow();
        let second = *self.0.next_back()?.borrow();
        let first = *self.0.next_back()?.borrow();
        Some(Codon([first, second, third]))
    }
}

impl<I> ExactSizeIterator for Codons<I>
where
    I: ExactSizeIterator,
    I::Item: Borrow<Nucleotide>,
{
    fn len(&self) -> usize {
        self.0.len() / 3
    }
}

/// Complemented bases of the wrapped iterator; see [`NucleotideIter::complement`].
#[derive(Clone, Debug)]
pub struct Complement<I>(I);

impl<I> Iterator for Complement<I>
where
    I: Iterator,
    I::Item: Borrow<Nucleotide>,
{
    type Item = Nucleotide;

    fn next(&mut self) -> Option<Nucleotide> {
        self.0.next().map(|n| n.borrow().complement())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<I> DoubleEndedIterator for Complement<I>
where
    I: DoubleEndedIterator,
    I::Item: Borrow<Nucleotide>,
{
    fn next_back(&mut self) -> Option<Nucleotide> {
        self.0.next_back().map(|n| n.borrow().complement())
    }
}

impl<I> ExactSizeIterator for Complement<I>
where
    I: ExactSizeIterator,
    I::Item: Borrow<Nucleotide>,
{
    fn len(&self) -> usize {
        self.0.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Nucleotide::*;

    #[test]
    fn test_codons_from_back_stay_in_frame() {
        let dna = [A, T, G, G, G, C, T, A];
        let from_back: Vec<Codon> = dna.iter().codons().rev().collect();
        assert_eq!(from_back, [Codon([G, G, C]), Codon([A, T, G])]);
    }

    #[test]
    fn test_codon_count_ignores_partial_tail() {
        let dna = [A, T, G, C, A];
        assert_eq!(dna.iter().codons().len(), 1);
        assert_eq!(dna.iter().codons().count(), 1);
        assert_eq!(dna[..2].iter().codons().next(), None);
    }

    #[test]
    fn test_owned_items() {
        let rc: Vec<Nucleotide> = vec![G, A, T, T].into_iter().reverse_complement().collect();
        assert_eq!(rc, [A, A, T, C]);
    }

    #[test]
    fn test_complement_len() {
        assert_eq!([A, C, G].iter().complement().len(), 3);
    }
}
