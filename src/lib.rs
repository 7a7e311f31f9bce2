mod amino_acid;
mod errors;
mod nucleotide;
mod trans_table;

mod iter;
pub use iter::*;

mod rust_api;
pub use rust_api::*;

mod frames;
pub use frames::*;

mod orf;
pub use orf::*;

mod stats;
pub use stats::*;

mod fasta;
pub use fasta::*;

mod load;
pub use load::*;

#[cfg(feature = "python-support")]
mod python_api;

#[cfg(feature = "quickcheck")]
mod quickcheck;

#[cfg(feature = "serde")]
mod serde_utils;
