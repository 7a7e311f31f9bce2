#![allow(clippy::borrow_deref_ref)]

use std::str::FromStr;

use pyo3::{exceptions::PyValueError, prelude::*};

use crate::{
    errors::TranslationError, extract_proteins, generate_reading_frames, DnaSequence,
};

impl From<TranslationError> for PyErr {
    fn from(err: TranslationError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}

#[pyfunction]
fn _translate_frame(dna: &str, offset: usize) -> PyResult<String> {
    let dna = DnaSequence::from_str(dna)?;
    Ok(dna.translate(offset).to_string())
}

#[pyfunction]
fn _reading_frames(dna: &str) -> PyResult<Vec<String>> {
    let dna = DnaSequence::from_str(dna)?;
    Ok(generate_reading_frames(&dna)
        .into_iter()
        .map(String::from)
        .collect())
}

#[pyfunction]
#[pyo3(signature = (dna, ordered = false))]
fn _extract_proteins(dna: &str, ordered: bool) -> PyResult<Vec<String>> {
    let dna = DnaSequence::from_str(dna)?;
    Ok(extract_proteins(&dna, ordered)
        .into_iter()
        .map(String::from)
        .collect())
}

#[pyfunction]
fn _complement(dna: &str) -> PyResult<String> {
    Ok(DnaSequence::from_str(dna)?.complement().to_string())
}

#[pyfunction]
fn _reverse_complement(dna: &str) -> PyResult<String> {
    Ok(DnaSequence::from_str(dna)?.reverse_complement().to_string())
}

#[pyfunction]
fn _transcribe(dna: &str) -> PyResult<String> {
    Ok(DnaSequence::from_str(dna)?.transcribe().to_string())
}

#[pymodule]
fn dnatoolkit(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(_translate_frame, m)?)?;
    m.add_function(wrap_pyfunction!(_reading_frames, m)?)?;
    m.add_function(wrap_pyfunction!(_extract_proteins, m)?)?;
    m.add_function(wrap_pyfunction!(_complement, m)?)?;
    m.add_function(wrap_pyfunction!(_reverse_complement, m)?)?;
    m.add_function(wrap_pyfunction!(_transcribe, m)?)?;

    Ok(())
}
