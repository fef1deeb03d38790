#![allow(clippy::useless_conversion)]

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::{PyBytes, PyModule};
use std::sync::Arc;

use crate::location::SequenceLocation;
use crate::utils::{self, to_py_err};
use orfscan_core::orf::{CodonTable, Orf};
use orfscan_core::seq::location::Strand;

#[pyclass]
pub struct OrfFinder {
    inner: Orf,
}

#[pymethods]
impl OrfFinder {
    #[new]
    #[pyo3(signature = (genetic_code=1, use_all_table_starts=false))]
    fn new(genetic_code: u32, use_all_table_starts: bool) -> PyResult<Self> {
        let table = CodonTable::new(genetic_code, use_all_table_starts).map_err(to_py_err)?;
        Ok(Self {
            inner: Orf::with_table(Arc::new(table)),
        })
    }

    /// Codons accepted as starts, as str.
    #[getter]
    fn start_codons(&self) -> Vec<String> {
        codon_strings(self.inner.table().starts())
    }

    #[getter]
    fn stop_codons(&self) -> Vec<String> {
        codon_strings(self.inner.table().stops())
    }

    /// Load `seq`; returns False when it is shorter than one codon or holds
    /// a symbol without a nucleotide complement.
    #[pyo3(signature = (seq, strict=false))]
    fn set_sequence(&mut self, seq: &Bound<'_, PyAny>, strict: bool) -> PyResult<bool> {
        let bytes = utils::extract_seq_bytes(seq)?;
        if strict {
            self.inner.try_set_sequence(&bytes).map_err(to_py_err)?;
            return Ok(true);
        }
        Ok(self.inner.set_sequence(&bytes))
    }

    #[pyo3(signature = (
        min_length=30,
        max_length=32734,
        max_gaps=None,
        forward_frames=None,
        reverse_frames=None,
        start_mode=None
    ))]
    fn find_all(
        &self,
        min_length: usize,
        max_length: usize,
        max_gaps: Option<usize>,
        forward_frames: Option<&Bound<'_, PyAny>>,
        reverse_frames: Option<&Bound<'_, PyAny>>,
        start_mode: Option<&Bound<'_, PyAny>>,
    ) -> PyResult<Vec<SequenceLocation>> {
        let params = utils::build_scan_params(
            min_length,
            max_length,
            max_gaps,
            forward_frames,
            reverse_frames,
            start_mode,
        )?;
        Ok(self
            .inner
            .find_all(&params)
            .into_iter()
            .map(SequenceLocation::from)
            .collect())
    }

    fn get_sequence<'py>(
        &self,
        py: Python<'py>,
        location: PyRef<'_, SequenceLocation>,
    ) -> Bound<'py, PyBytes> {
        PyBytes::new_bound(py, self.inner.get_sequence(&location.inner))
    }

    /// Normalized forward (0) or reverse-complement (1) sequence.
    #[pyo3(signature = (strand=0))]
    fn sequence<'py>(&self, py: Python<'py>, strand: i64) -> PyResult<Bound<'py, PyBytes>> {
        let strand = Strand::from_code(strand)
            .ok_or_else(|| PyValueError::new_err("strand must be 0 (plus) or 1 (minus)"))?;
        Ok(PyBytes::new_bound(py, self.inner.sequence(strand)))
    }

    fn __len__(&self) -> usize {
        self.inner.sequence_len()
    }

    fn __repr__(&self) -> String {
        format!(
            "OrfFinder(starts={:?}, stops={:?}, len={})",
            codon_strings(self.inner.table().starts()),
            codon_strings(self.inner.table().stops()),
            self.inner.sequence_len()
        )
    }
}

fn codon_strings(codons: &[[u8; 3]]) -> Vec<String> {
    codons
        .iter()
        .map(|c| String::from_utf8_lossy(c).into_owned())
        .collect()
}

pub fn register(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<OrfFinder>()?;
    Ok(())
}
