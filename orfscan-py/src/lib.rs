use pyo3::prelude::*;

mod fasta;
mod location;
mod orf;
mod report;
mod utils;

#[pymodule]
fn _native(_py: Python<'_>, m: &Bound<'_, PyModule>) -> PyResult<()> {
    location::register(m)?;
    orf::register(m)?;
    report::register(m)?;
    fasta::register(m)?;
    Ok(())
}
