use super::matcher::{pack_slots, SLOTS};
use crate::alphabets::dna;
use crate::error::{CodonKind, OrfError, OrfResult};
use crate::genetic_code::{GeneticCodeProvider, NcbiGeneticCodes};

use tracing::debug;

pub const DEFAULT_START: [u8; 3] = *b"ATG";

/// Start and stop codons of one genetic code, packed for the batch matcher.
/// Immutable once built and safe to share between scanners.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CodonTable {
    starts: Vec<[u8; 3]>,
    stops: Vec<[u8; 3]>,
    start_slots: [i32; SLOTS],
    stop_slots: [i32; SLOTS],
}

impl CodonTable {
    /// Codons of NCBI table `code`. Starts are every start codon of the
    /// table when `use_all_table_starts` is set, otherwise only `ATG`.
    pub fn new(code: u32, use_all_table_starts: bool) -> OrfResult<Self> {
        Self::with_provider(&NcbiGeneticCodes::new(), code, use_all_table_starts)
    }

    pub fn with_provider<P>(provider: &P, code: u32, use_all_table_starts: bool) -> OrfResult<Self>
    where
        P: GeneticCodeProvider + ?Sized,
    {
        let stops = provider.stop_codons(code)?;
        let starts = if use_all_table_starts {
            provider.start_codons(code)?
        } else {
            vec![DEFAULT_START]
        };
        let table = Self::from_codons(starts, stops)?;
        debug!(
            code,
            use_all_table_starts,
            starts = table.starts.len(),
            stops = table.stops.len(),
            "built codon table"
        );
        Ok(table)
    }

    /// Build from explicit triplets. Lowercase bases are accepted and stored
    /// uppercase; `U` is read as `T`.
    pub fn from_codons<S, T>(starts: S, stops: T) -> OrfResult<Self>
    where
        S: IntoIterator<Item = [u8; 3]>,
        T: IntoIterator<Item = [u8; 3]>,
    {
        let starts = checked_set(starts, CodonKind::Start)?;
        let stops = checked_set(stops, CodonKind::Stop)?;
        Ok(Self {
            start_slots: pack_slots(&starts),
            stop_slots: pack_slots(&stops),
            starts,
            stops,
        })
    }

    pub fn starts(&self) -> &[[u8; 3]] {
        &self.starts
    }

    pub fn stops(&self) -> &[[u8; 3]] {
        &self.stops
    }

    pub(crate) fn start_slots(&self) -> &[i32; SLOTS] {
        &self.start_slots
    }

    pub(crate) fn stop_slots(&self) -> &[i32; SLOTS] {
        &self.stop_slots
    }
}

fn checked_set<I>(codons: I, kind: CodonKind) -> OrfResult<Vec<[u8; 3]>>
where
    I: IntoIterator<Item = [u8; 3]>,
{
    let bases = dna::codon_alphabet();
    let codons: Vec<[u8; 3]> = codons
        .into_iter()
        .map(|codon| codon.map(dna::normalize))
        .collect();

    if codons.is_empty() {
        return Err(OrfError::EmptyCodonSet { kind });
    }
    if codons.len() > SLOTS {
        return Err(OrfError::TooManyCodons {
            kind,
            count: codons.len(),
        });
    }
    if let Some(bad) = codons.iter().find(|codon| !bases.is_word(codon.iter())) {
        return Err(OrfError::InvalidCodon {
            codon: String::from_utf8_lossy(bad).into_owned(),
        });
    }
    Ok(codons)
}
