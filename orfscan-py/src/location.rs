use pyo3::basic::CompareOp;
use pyo3::exceptions::{PyTypeError, PyValueError};
use pyo3::prelude::*;
use pyo3::types::PyModule;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use crate::utils::to_py_err;
use orfscan_core::io::header;
use orfscan_core::seq::location::{SequenceLocation as CoreLocation, Strand};

#[pyclass(frozen)]
#[derive(Clone)]
pub struct SequenceLocation {
    pub(crate) inner: CoreLocation,
}

#[pymethods]
impl SequenceLocation {
    #[new]
    #[pyo3(signature = (start, end, strand=0, incomplete_start=false, incomplete_end=false, id=0))]
    fn new(
        start: usize,
        end: usize,
        strand: i64,
        incomplete_start: bool,
        incomplete_end: bool,
        id: u32,
    ) -> PyResult<Self> {
        if end <= start {
            return Err(PyValueError::new_err("end must be greater than start"));
        }
        let strand = Strand::from_code(strand)
            .ok_or_else(|| PyValueError::new_err("strand must be 0 (plus) or 1 (minus)"))?;
        let inner =
            CoreLocation::new(start, end, strand, incomplete_start, incomplete_end).with_id(id);
        Ok(Self { inner })
    }

    #[getter]
    fn id(&self) -> u32 {
        self.inner.id
    }

    #[getter]
    fn start(&self) -> usize {
        self.inner.from
    }

    #[getter]
    fn end(&self) -> usize {
        self.inner.to
    }

    #[getter]
    fn strand(&self) -> i32 {
        self.inner.strand.code()
    }

    #[getter]
    fn incomplete_start(&self) -> bool {
        self.inner.has_incomplete_start
    }

    #[getter]
    fn incomplete_end(&self) -> bool {
        self.inner.has_incomplete_end
    }

    fn codons(&self) -> usize {
        self.inner.codons()
    }

    fn to_header(&self) -> String {
        header::encode_orf_header(&self.inner)
    }

    fn __len__(&self) -> usize {
        self.inner.len()
    }

    fn __richcmp__(&self, other: &Bound<'_, PyAny>, op: CompareOp) -> PyResult<bool> {
        let other = other
            .extract::<PyRef<'_, SequenceLocation>>()
            .map_err(|_| PyTypeError::new_err("expected SequenceLocation"))?;

        match op {
            CompareOp::Eq => Ok(self.inner == other.inner),
            CompareOp::Ne => Ok(self.inner != other.inner),
            _ => Err(PyTypeError::new_err(
                "SequenceLocation supports only == and !=",
            )),
        }
    }

    fn __hash__(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.inner.hash(&mut hasher);
        hasher.finish()
    }

    fn __repr__(&self) -> String {
        format!(
            "SequenceLocation(start={}, end={}, strand={}, incomplete_start={}, incomplete_end={}, id={})",
            self.inner.from,
            self.inner.to,
            self.inner.strand.code(),
            self.inner.has_incomplete_start,
            self.inner.has_incomplete_end,
            self.inner.id
        )
    }

    fn __str__(&self) -> String {
        self.inner.to_string()
    }
}

impl From<CoreLocation> for SequenceLocation {
    fn from(inner: CoreLocation) -> Self {
        Self { inner }
    }
}

#[pyfunction]
fn parse_orf_header(text: &str) -> PyResult<SequenceLocation> {
    header::decode_orf_header(text)
        .map(SequenceLocation::from)
        .map_err(to_py_err)
}

#[pyfunction]
fn format_orf_header(location: PyRef<'_, SequenceLocation>) -> String {
    header::encode_orf_header(&location.inner)
}

pub fn register(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<SequenceLocation>()?;
    m.add_function(wrap_pyfunction!(parse_orf_header, m)?)?;
    m.add_function(wrap_pyfunction!(format_orf_header, m)?)?;
    Ok(())
}
