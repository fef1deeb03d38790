use crate::error::{OrfError, OrfResult};
use std::fs::File;
use std::io::{BufRead, BufReader, Cursor, Write};
use std::path::Path;

/// Residues per line when writing records.
pub const LINE_WIDTH: usize = 60;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FastaRecord {
    pub id: Box<str>,
    pub desc: Option<Box<str>>,
    pub seq: Vec<u8>,
}

impl FastaRecord {
    pub fn new(id: impl Into<Box<str>>, seq: Vec<u8>) -> Self {
        Self {
            id: id.into(),
            desc: None,
            seq,
        }
    }

    pub fn with_desc(mut self, desc: impl Into<Box<str>>) -> Self {
        self.desc = Some(desc.into());
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn desc(&self) -> Option<&str> {
        self.desc.as_deref()
    }

    pub fn seq(&self) -> &[u8] {
        &self.seq
    }
}

pub struct FastaRecords<R> {
    reader: R,
    line_no: usize,
    pending_header: Option<(Vec<u8>, usize)>,
    buf_line: Vec<u8>,
    seq_buf: Vec<u8>,
}

impl<R: BufRead> FastaRecords<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line_no: 0,
            pending_header: None,
            buf_line: Vec::new(),
            seq_buf: Vec::new(),
        }
    }

    fn next_header(&mut self) -> Option<OrfResult<(Vec<u8>, usize)>> {
        if let Some(pending) = self.pending_header.take() {
            return Some(Ok(pending));
        }

        loop {
            self.buf_line.clear();
            match self.reader.read_until(b'\n', &mut self.buf_line) {
                Ok(0) => return None,
                Ok(_) => {
                    self.line_no += 1;
                    let line_no = self.line_no;
                    if self.buf_line.starts_with(b">") {
                        return Some(Ok((self.buf_line.clone(), line_no)));
                    }
                    if self.buf_line.iter().all(u8::is_ascii_whitespace) {
                        continue;
                    }
                    return Some(Err(OrfError::FastaFormat {
                        msg: "expected header line starting with '>'",
                        line: line_no,
                    }));
                }
                Err(err) => return Some(Err(OrfError::FastaIo(err))),
            }
        }
    }
}

impl<R: BufRead> Iterator for FastaRecords<R> {
    type Item = OrfResult<FastaRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        let (header_line, header_line_no) = match self.next_header()? {
            Ok(header) => header,
            Err(err) => return Some(Err(err)),
        };

        let (id, desc) = match parse_header(&header_line, header_line_no) {
            Ok(parsed) => parsed,
            Err(err) => return Some(Err(err)),
        };

        self.seq_buf.clear();

        loop {
            self.buf_line.clear();
            match self.reader.read_until(b'\n', &mut self.buf_line) {
                Ok(0) => break,
                Ok(_) => {
                    self.line_no += 1;
                    let line_no = self.line_no;
                    if self.buf_line.starts_with(b">") {
                        self.pending_header = Some((self.buf_line.clone(), line_no));
                        break;
                    }
                    self.seq_buf.extend(
                        self.buf_line
                            .iter()
                            .copied()
                            .filter(|b| !b.is_ascii_whitespace()),
                    );
                }
                Err(err) => return Some(Err(OrfError::FastaIo(err))),
            }
        }

        let seq = self.seq_buf.clone();
        Some(Ok(FastaRecord { id, desc, seq }))
    }
}

pub fn fasta_records_from_reader<R: BufRead>(reader: R) -> FastaRecords<R> {
    FastaRecords::new(reader)
}

pub fn read_fasta_records_from_reader<R: BufRead>(reader: R) -> OrfResult<Vec<FastaRecord>> {
    fasta_records_from_reader(reader).collect()
}

pub fn read_fasta_records_from_path(path: impl AsRef<Path>) -> OrfResult<Vec<FastaRecord>> {
    let file = File::open(path)?;
    read_fasta_records_from_reader(BufReader::new(file))
}

pub fn read_fasta_records_from_bytes(data: &[u8]) -> OrfResult<Vec<FastaRecord>> {
    read_fasta_records_from_reader(BufReader::new(Cursor::new(data)))
}

/// Write one record as `>header` followed by `seq` wrapped at `width`
/// residues (no wrapping when `width` is zero).
pub fn write_fasta_record<W: Write>(
    writer: &mut W,
    header: &str,
    seq: &[u8],
    width: usize,
) -> OrfResult<()> {
    writeln!(writer, ">{header}")?;
    if seq.is_empty() {
        return Ok(());
    }
    let width = if width == 0 { seq.len() } else { width };
    for line in seq.chunks(width) {
        writer.write_all(line)?;
        writer.write_all(b"\n")?;
    }
    Ok(())
}

/// Split a `>` line into id and description. Invalid UTF-8 in the header is
/// replaced, sequence lines are never decoded.
fn parse_header(header_line: &[u8], line_no: usize) -> OrfResult<(Box<str>, Option<Box<str>>)> {
    let header = header_line.strip_prefix(b">").ok_or(OrfError::FastaFormat {
        msg: "expected header line starting with '>'",
        line: line_no,
    })?;

    let header = String::from_utf8_lossy(header);
    let header = header.trim_end_matches(&['\n', '\r'][..]).trim_start();
    if header.is_empty() {
        return Err(OrfError::FastaFormat {
            msg: "empty header",
            line: line_no,
        });
    }

    let (id, desc) = match header.find(|c: char| c.is_whitespace()) {
        Some(idx) => {
            let id = &header[..idx];
            let desc = header[idx..].trim();
            let desc = if desc.is_empty() { None } else { Some(desc) };
            (id, desc)
        }
        None => (header, None),
    };

    Ok((id.into(), desc.map(|s| s.into())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_single_record() {
        let data = b">seq1\nACGT\n";
        let records = read_fasta_records_from_bytes(data).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id(), "seq1");
        assert_eq!(records[0].desc(), None);
        assert_eq!(records[0].seq(), b"ACGT");
    }

    #[test]
    fn header_with_description() {
        let data = b">seq1 some desc here\nAC\nGT\n";
        let records = read_fasta_records_from_bytes(data).unwrap();
        assert_eq!(records[0].id(), "seq1");
        assert_eq!(records[0].desc(), Some("some desc here"));
        assert_eq!(records[0].seq(), b"ACGT");
    }

    #[test]
    fn multiple_records() {
        let data = b">seq1\nAC\n>seq2\nGT\n";
        let records = read_fasta_records_from_bytes(data).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id(), "seq1");
        assert_eq!(records[1].id(), "seq2");
    }

    #[test]
    fn empty_sequence_allowed() {
        let data = b">seq1\n>seq2\nA\n";
        let records = read_fasta_records_from_bytes(data).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].seq(), b"");
        assert_eq!(records[1].seq(), b"A");
    }

    #[test]
    fn invalid_format_before_header() {
        let data = b"ACGT\n>seq1\nAC\n";
        let err = read_fasta_records_from_bytes(data).unwrap_err();
        match err {
            OrfError::FastaFormat { line: 1, .. } => {}
            other => panic!("expected fasta format error, got {other:?}"),
        }
    }

    #[test]
    fn sequence_bytes_are_kept_verbatim() {
        let data = b">seq1\nac-gu\n";
        let records = read_fasta_records_from_bytes(data).unwrap();
        assert_eq!(records[0].seq(), b"ac-gu");
    }

    #[test]
    fn non_utf8_sequence_bytes_are_kept() {
        let data = b">seq1\nAC\xFFGT\n>seq2 d\xE9sc\nAC\n";
        let records = read_fasta_records_from_bytes(data).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].seq(), b"AC\xFFGT");
        assert_eq!(records[1].id(), "seq2");
        assert_eq!(records[1].desc(), Some("d\u{FFFD}sc"));
    }

    #[test]
    fn write_wraps_lines() {
        let mut out = Vec::new();
        write_fasta_record(&mut out, "r1 [Orf: 0, 0, 9, 0, 0, 0]", b"ATGAAATAA", 4).unwrap();
        assert_eq!(out, b">r1 [Orf: 0, 0, 9, 0, 0, 0]\nATGA\nAATA\nA\n");

        let mut out = Vec::new();
        write_fasta_record(&mut out, "r2", b"ACG", 0).unwrap();
        assert_eq!(out, b">r2\nACG\n");
    }
}
