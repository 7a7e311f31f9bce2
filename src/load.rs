//! Loading a single sequence from a plain-text or FASTA file.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use thiserror::Error;

use crate::fasta::{DNAFastaParser, DnaFastaParseError};
use crate::{BaseSequence, DnaSequence, TranslationError};

const FASTA_EXTENSIONS: [&str; 4] = ["fasta", "fa", "fna", "ffn"];

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("could not read {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid sequence in {}", .path.display())]
    InvalidSequence {
        path: PathBuf,
        #[source]
        source: TranslationError,
    },
    #[error("malformed FASTA in {}", .path.display())]
    Fasta {
        path: PathBuf,
        #[source]
        source: DnaFastaParseError,
    },
    #[error("{} has no FASTA records", .0.display())]
    NoRecords(PathBuf),
    #[error("record {index} requested but {} has only {count}", .path.display())]
    RecordOutOfRange {
        path: PathBuf,
        index: usize,
        count: usize,
    },
}

/// How a file's contents are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequenceFormat {
    /// The whole file, trimmed, is one sequence.
    Plain,
    Fasta,
}

impl SequenceFormat {
    /// Chooses by file extension, case-insensitively.
    pub fn from_path(path: &Path) -> Self {
        let is_fasta = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| {
                FASTA_EXTENSIONS
                    .iter()
                    .any(|known| ext.eq_ignore_ascii_case(known))
            });
        if is_fasta {
            Self::Fasta
        } else {
            Self::Plain
        }
    }
}

/// Reads the whole input as one sequence body. Line breaks are joined, so a
/// sequence may be wrapped across lines.
pub fn read_plain<R: Read>(reader: &mut R) -> Result<String, std::io::Error> {
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(contents.lines().map(str::trim).collect())
}

/// Loads one sequence from `path`. For FASTA files `record` selects the
/// 0-based entry; it is ignored for plain files.
pub fn load_sequence(path: impl AsRef<Path>, record: usize) -> Result<DnaSequence, LoadError> {
    let path = path.as_ref();
    let io_error = |source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    };
    let mut reader = BufReader::new(File::open(path).map_err(io_error)?);

    match SequenceFormat::from_path(path) {
        SequenceFormat::Plain => {
            let body = read_plain(&mut reader).map_err(io_error)?;
            let sequence =
                DnaSequence::from_str(&body).map_err(|source| LoadError::InvalidSequence {
                    path: path.to_path_buf(),
                    source,
                })?;
            log::info!("loaded {} nt from {}", sequence.len(), path.display());
            Ok(sequence)
        }
        SequenceFormat::Fasta => {
            let mut records =
                DNAFastaParser::parse(&mut reader).map_err(|source| LoadError::Fasta {
                    path: path.to_path_buf(),
                    source,
                })?;
            let count = records.len();
            if count == 0 {
                return Err(LoadError::NoRecords(path.to_path_buf()));
            }
            if record >= count {
                return Err(LoadError::RecordOutOfRange {
                    path: path.to_path_buf(),
                    index: record,
                    count,
                });
            }
            let (label, sequence) = records.swap_remove(record);
            log::info!(
                "loaded record {record} ({label}) of {count}, {} nt, from {}",
                sequence.len(),
                path.display()
            );
            Ok(sequence)
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::{Builder, NamedTempFile};

    use super::*;

    fn temp_file(suffix: &str, contents: &str) -> NamedTempFile {
        let mut file = Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_format_from_extension() {
        assert_eq!(SequenceFormat::from_path(Path::new("a.fasta")), SequenceFormat::Fasta);
        assert_eq!(SequenceFormat::from_path(Path::new("a.FA")), SequenceFormat::Fasta);
        assert_eq!(SequenceFormat::from_path(Path::new("a.ffn")), SequenceFormat::Fasta);
        assert_eq!(SequenceFormat::from_path(Path::new("a.txt")), SequenceFormat::Plain);
        assert_eq!(SequenceFormat::from_path(Path::new("fasta")), SequenceFormat::Plain);
    }

    #[test]
    fn test_read_plain_trims() {
        assert_eq!(read_plain(&mut "  atgc\n\n".as_bytes()).unwrap(), "atgc");
    }

    #[test]
    fn test_read_plain_joins_wrapped_lines() {
        assert_eq!(
            read_plain(&mut "ATGT\r\nTTT \nGA\n".as_bytes()).unwrap(),
            "ATGTTTTGA"
        );
    }

    #[test]
    fn test_load_plain_file() {
        let file = temp_file(".txt", "ATGTTTTGA\n");
        let seq = load_sequence(file.path(), 0).unwrap();
        assert_eq!(seq.len(), 9);
    }

    #[test]
    fn test_load_wrapped_plain_file() {
        let file = temp_file(".txt", "ATGTTT\nTGA\n");
        assert_eq!(load_sequence(file.path(), 0).unwrap().to_string(), "ATGTTTTGA");
    }

    #[test]
    fn test_load_fasta_record() {
        let file = temp_file(".fasta", ">one\nAAA\n>two\nATG\nTGA\n");
        assert_eq!(load_sequence(file.path(), 1).unwrap().to_string(), "ATGTGA");
        assert!(matches!(
            load_sequence(file.path(), 2),
            Err(LoadError::RecordOutOfRange { index: 2, count: 2, .. })
        ));
    }

    #[test]
    fn test_load_errors() {
        let empty = temp_file(".fa", "no header here\n");
        assert!(matches!(load_sequence(empty.path(), 0), Err(LoadError::NoRecords(_))));

        let bad = temp_file(".txt", "ATGQ");
        assert!(matches!(
            load_sequence(bad.path(), 0),
            Err(LoadError::InvalidSequence { .. })
        ));

        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.txt");
        assert!(matches!(load_sequence(missing, 0), Err(LoadError::Io { .. })));
    }
}
