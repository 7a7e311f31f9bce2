//! This module is for reading FASTA format files

use std::io::BufRead;
use std::str::FromStr;

use thiserror::Error;

use crate::{DnaSequence, TranslationError};

pub struct SimpleFastaParser;

impl SimpleFastaParser {
    /// Parses `(label, body)` records. Body lines are concatenated; anything
    /// before the first `>` label is skipped.
    pub fn parse<R: BufRead>(handle: &mut R) -> Result<Vec<(String, String)>, std::io::Error> {
        let mut result: Vec<(String, String)> = vec![];

        let mut lines: Vec<String> = vec![];
        let mut title: Option<String> = None;

        for line in handle.lines() {
            let line = line?;

            if let Some(label) = line.strip_prefix('>') {
                if let Some(existing_title) = title.take() {
                    result.push((existing_title, lines.join("")));
                    lines.clear();
                }
                title = Some(label.trim().to_string());
            } else if title.is_some() {
                lines.push(line.replace([' ', '\r'], ""));
            }
        }

        if let Some(t) = title {
            result.push((t, lines.join("")));
        }

        Ok(result)
    }
}

pub struct DNAFastaParser;

#[derive(Error, Debug)]
pub enum DnaFastaParseError {
    #[error("could not translate FASTA contents")]
    TranslationError(#[from] TranslationError),
    #[error("could not read FASTA")]
    IOError(#[from] std::io::Error),
}

impl DNAFastaParser {
    pub fn parse<R: BufRead>(
        handle: &mut R,
    ) -> Result<Vec<(String, DnaSequence)>, DnaFastaParseError> {
        SimpleFastaParser::parse(handle)?
            .into_iter()
            .map(|(title, sequence)| -> Result<(String, DnaSequence), _> {
                let dna = DnaSequence::from_str(&sequence)?;
                Ok((title, dna))
            })
            .collect()
    }
}
