use pyo3::prelude::*;
use pyo3::types::PyModule;

use orfscan_core::io::{ExtractSummary, SkippedRecord as CoreSkippedRecord};

#[pyclass(frozen)]
#[derive(Clone)]
pub struct SkippedRecord {
    pub(crate) index: usize,
    pub(crate) id: String,
    pub(crate) message: String,
}

#[pymethods]
impl SkippedRecord {
    #[getter]
    fn index(&self) -> usize {
        self.index
    }

    #[getter]
    fn id(&self) -> &str {
        &self.id
    }

    #[getter]
    fn message(&self) -> &str {
        &self.message
    }

    fn __repr__(&self) -> PyResult<String> {
        Ok(format!(
            "SkippedRecord(index={}, id={:?}, message={:?})",
            self.index, self.id, self.message
        ))
    }
}

impl From<CoreSkippedRecord> for SkippedRecord {
    fn from(value: CoreSkippedRecord) -> Self {
        Self {
            index: value.index,
            id: value.id.to_string(),
            message: value.message.to_string(),
        }
    }
}

#[pyclass(frozen)]
pub struct ExtractReport {
    pub(crate) records: usize,
    pub(crate) orfs: usize,
    pub(crate) skipped: Vec<SkippedRecord>,
}

#[pymethods]
impl ExtractReport {
    #[getter]
    fn records(&self) -> usize {
        self.records
    }

    #[getter]
    fn orfs(&self) -> usize {
        self.orfs
    }

    #[getter]
    fn skipped(&self) -> Vec<SkippedRecord> {
        self.skipped.clone()
    }

    fn __repr__(&self) -> String {
        format!(
            "ExtractReport(records={}, orfs={}, skipped={})",
            self.records,
            self.orfs,
            self.skipped.len()
        )
    }
}

impl From<ExtractSummary> for ExtractReport {
    fn from(value: ExtractSummary) -> Self {
        Self {
            records: value.records,
            orfs: value.orfs,
            skipped: value.skipped.into_iter().map(SkippedRecord::from).collect(),
        }
    }
}

pub fn register(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<SkippedRecord>()?;
    m.add_class::<ExtractReport>()?;
    Ok(())
}
