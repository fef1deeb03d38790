use super::fasta::{fasta_records_from_reader, write_fasta_record, LINE_WIDTH};
use super::SkippedRecord;
use crate::error::OrfResult;
use crate::orf::{CodonTable, Orf, ScanParams};

use std::io::{BufRead, Write};
use std::sync::Arc;
use tracing::{debug, warn};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExtractSummary {
    pub records: usize,
    pub orfs: usize,
    pub skipped: Vec<SkippedRecord>,
}

/// Read FASTA records from `reader` and write every ORF found as a FASTA
/// record to `writer`.
///
/// Each ORF header is `<record id> [Orf: ...]`, with the location id set to
/// the ordinal of its source record. Records whose sequence is rejected are
/// skipped and reported in the summary. FASTA syntax and I/O errors abort.
pub fn extract_orfs<R: BufRead, W: Write>(
    reader: R,
    writer: &mut W,
    table: impl Into<Arc<CodonTable>>,
    params: &ScanParams,
) -> OrfResult<ExtractSummary> {
    let mut finder = Orf::with_table(table);
    let mut summary = ExtractSummary::default();
    let mut found = Vec::new();

    for (index, record) in fasta_records_from_reader(reader).enumerate() {
        let record = record?;
        summary.records += 1;

        if let Err(err) = finder.try_set_sequence(record.seq()) {
            warn!(index, id = record.id(), error = %err, "skipping record");
            summary.skipped.push(SkippedRecord {
                index,
                id: record.id.clone(),
                message: err.to_string().into(),
            });
            continue;
        }

        let ordinal = u32::try_from(index).unwrap_or(u32::MAX);
        found.clear();
        finder.find_all_into(params, &mut found);

        for location in &found {
            let location = location.with_id(ordinal);
            let header = format!("{} {}", record.id(), location);
            write_fasta_record(writer, &header, finder.get_sequence(&location), LINE_WIDTH)?;
        }
        summary.orfs += found.len();
    }

    writer.flush()?;
    debug!(
        records = summary.records,
        orfs = summary.orfs,
        skipped = summary.skipped.len(),
        "extraction finished"
    );
    Ok(summary)
}
