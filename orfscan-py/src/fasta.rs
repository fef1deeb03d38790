#![allow(clippy::useless_conversion)]

use pyo3::prelude::*;
use pyo3::types::PyModule;
use std::fs::File;
use std::io::{BufReader, BufWriter};

use crate::report::ExtractReport;
use crate::utils::{self, to_py_err};
use orfscan_core::io::extract;
use orfscan_core::orf::CodonTable;

/// Write every ORF of the FASTA file at `input` to the FASTA file at `output`.
#[pyfunction]
#[pyo3(signature = (
    input,
    output,
    genetic_code=1,
    use_all_table_starts=false,
    min_length=30,
    max_length=32734,
    max_gaps=None,
    forward_frames=None,
    reverse_frames=None,
    start_mode=None
))]
#[allow(clippy::too_many_arguments)]
fn extract_orfs(
    py: Python<'_>,
    input: &str,
    output: &str,
    genetic_code: u32,
    use_all_table_starts: bool,
    min_length: usize,
    max_length: usize,
    max_gaps: Option<usize>,
    forward_frames: Option<&Bound<'_, PyAny>>,
    reverse_frames: Option<&Bound<'_, PyAny>>,
    start_mode: Option<&Bound<'_, PyAny>>,
) -> PyResult<ExtractReport> {
    let params = utils::build_scan_params(
        min_length,
        max_length,
        max_gaps,
        forward_frames,
        reverse_frames,
        start_mode,
    )?;
    let table = CodonTable::new(genetic_code, use_all_table_starts).map_err(to_py_err)?;

    let reader = BufReader::new(File::open(input)?);
    let mut writer = BufWriter::new(File::create(output)?);
    let summary = py
        .allow_threads(|| extract::extract_orfs(reader, &mut writer, table, &params))
        .map_err(to_py_err)?;
    Ok(ExtractReport::from(summary))
}

pub fn register(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(extract_orfs, m)?)?;
    Ok(())
}
