use quickcheck::{Arbitrary, Gen};

use crate::{Codon, DnaSequence, Nucleotide};

impl Arbitrary for Nucleotide {
    fn arbitrary(g: &mut Gen) -> Self {
        *g.choose(&Self::ALL)
            .expect("Gen should be able to choose a Nucleotide")
    }
}

impl Arbitrary for Codon {
    fn arbitrary(g: &mut Gen) -> Self {
        Self([
            Nucleotide::arbitrary(g),
            Nucleotide::arbitrary(g),
            Nucleotide::arbitrary(g),
        ])
    }
}

impl Arbitrary for DnaSequence {
    fn arbitrary(g: &mut Gen) -> Self {
        Self::new(Arbitrary::arbitrary(g))
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        let bases: Vec<Nucleotide> = self.iter().collect();
        Box::new(bases.shrink().map(Self::new))
    }
}
