//! Genetic code tables supplying start and stop codons.
//!
//! Codon sets come from a [`GeneticCodeProvider`]. The built-in
//! [`NcbiGeneticCodes`] covers the NCBI translation tables, each stored as a
//! 64-character amino-acid string and a matching start-flag string in the
//! NCBI codon order (first, second and third base each cycling `TCAG`).

use crate::error::{OrfError, OrfResult};

use std::collections::BTreeSet;

/// Source of codon vocabularies, keyed by genetic code identifier.
pub trait GeneticCodeProvider {
    /// All stop codons of `code`, in table order.
    fn stop_codons(&self, code: u32) -> OrfResult<Vec<[u8; 3]>>;

    /// All alternative start codons of `code`, in table order.
    fn start_codons(&self, code: u32) -> OrfResult<Vec<[u8; 3]>>;
}

#[derive(Debug)]
struct GeneticCodeEntry {
    id: u32,
    name: &'static str,
    amino_acids: &'static str,
    /// `M` marks a start codon, `*` a stop (including stop-or-sense codons).
    starts: &'static str,
}

const NCBI_BASES: [u8; 4] = *b"TCAG";

#[rustfmt::skip]
static NCBI_TABLES: &[GeneticCodeEntry] = &[
    GeneticCodeEntry {
        id: 1,
        name: "Standard",
        amino_acids: "FFLLSSSSYY**CC*WLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG",
        starts: "---M------**--*----M---------------M----------------------------",
    },
    GeneticCodeEntry {
        id: 2,
        name: "Vertebrate Mitochondrial",
        amino_acids: "FFLLSSSSYY**CCWWLLLLPPPPHHQQRRRRIIMMTTTTNNKKSS**VVVVAAAADDEEGGGG",
        starts: "----------**--------------------MMMM----------**---M------------",
    },
    GeneticCodeEntry {
        id: 3,
        name: "Yeast Mitochondrial",
        amino_acids: "FFLLSSSSYY**CCWWTTTTPPPPHHQQRRRRIIMMTTTTNNKKSSRRVVVVAAAADDEEGGGG",
        starts: "----------**----------------------MM---------------M------------",
    },
    GeneticCodeEntry {
        id: 4,
        name: "Mold/Protozoan/Coelenterate Mitochondrial",
        amino_acids: "FFLLSSSSYY**CCWWLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG",
        starts: "--MM------**-------M------------MMMM---------------M------------",
    },
    GeneticCodeEntry {
        id: 5,
        name: "Invertebrate Mitochondrial",
        amino_acids: "FFLLSSSSYY**CCWWLLLLPPPPHHQQRRRRIIMMTTTTNNKKSSSSVVVVAAAADDEEGGGG",
        starts: "---M------**--------------------MMMM---------------M------------",
    },
    GeneticCodeEntry {
        id: 6,
        name: "Ciliate/Dasycladacean/Hexamita Nuclear",
        amino_acids: "FFLLSSSSYYQQCC*WLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG",
        starts: "--------------*--------------------M----------------------------",
    },
    GeneticCodeEntry {
        id: 9,
        name: "Echinoderm/Flatworm Mitochondrial",
        amino_acids: "FFLLSSSSYY**CCWWLLLLPPPPHHQQRRRRIIIMTTTTNNNKSSSSVVVVAAAADDEEGGGG",
        starts: "----------**-----------------------M---------------M------------",
    },
    GeneticCodeEntry {
        id: 10,
        name: "Euplotid Nuclear",
        amino_acids: "FFLLSSSSYY**CCCWLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG",
        starts: "----------**-----------------------M----------------------------",
    },
    GeneticCodeEntry {
        id: 11,
        name: "Bacterial/Archaeal/Plant Plastid",
        amino_acids: "FFLLSSSSYY**CC*WLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG",
        starts: "---M------**--*----M------------MMMM---------------M------------",
    },
    GeneticCodeEntry {
        id: 12,
        name: "Alternative Yeast Nuclear",
        amino_acids: "FFLLSSSSYY**CC*WLLLSPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG",
        starts: "----------**--*----M---------------M----------------------------",
    },
    GeneticCodeEntry {
        id: 13,
        name: "Ascidian Mitochondrial",
        amino_acids: "FFLLSSSSYY**CCWWLLLLPPPPHHQQRRRRIIMMTTTTNNKKSSGGVVVVAAAADDEEGGGG",
        starts: "---M------**----------------------MM---------------M------------",
    },
    GeneticCodeEntry {
        id: 14,
        name: "Alternative Flatworm Mitochondrial",
        amino_acids: "FFLLSSSSYYY*CCWWLLLLPPPPHHQQRRRRIIIMTTTTNNNKSSSSVVVVAAAADDEEGGGG",
        starts: "-----------*-----------------------M----------------------------",
    },
    GeneticCodeEntry {
        id: 15,
        name: "Blepharisma Macronuclear",
        amino_acids: "FFLLSSSSYY*QCC*WLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG",
        starts: "----------*---*--------------------M----------------------------",
    },
    GeneticCodeEntry {
        id: 16,
        name: "Chlorophycean Mitochondrial",
        amino_acids: "FFLLSSSSYY*LCC*WLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG",
        starts: "----------*---*--------------------M----------------------------",
    },
    GeneticCodeEntry {
        id: 21,
        name: "Trematode Mitochondrial",
        amino_acids: "FFLLSSSSYY**CCWWLLLLPPPPHHQQRRRRIIMMTTTTNNNKSSSSVVVVAAAADDEEGGGG",
        starts: "----------**-----------------------M---------------M------------",
    },
    GeneticCodeEntry {
        id: 22,
        name: "Scenedesmus obliquus Mitochondrial",
        amino_acids: "FFLLSS*SYY*LCC*WLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG",
        starts: "------*---*---*--------------------M----------------------------",
    },
    GeneticCodeEntry {
        id: 23,
        name: "Thraustochytrium Mitochondrial",
        amino_acids: "FF*LSSSSYY**CC*WLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG",
        starts: "--*-------**--*-----------------M--M---------------M------------",
    },
    GeneticCodeEntry {
        id: 24,
        name: "Rhabdopleuridae Mitochondrial",
        amino_acids: "FFLLSSSSYY**CCWWLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSSKVVVVAAAADDEEGGGG",
        starts: "---M------**-------M---------------M---------------M------------",
    },
    GeneticCodeEntry {
        id: 25,
        name: "Candidate Division SR1/Gracilibacteria",
        amino_acids: "FFLLSSSSYY**CCGWLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG",
        starts: "---M------**-----------------------M---------------M------------",
    },
    GeneticCodeEntry {
        id: 26,
        name: "Pachysolen tannophilus Nuclear",
        amino_acids: "FFLLSSSSYY**CC*WLLLAPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG",
        starts: "----------**--*----M---------------M----------------------------",
    },
    GeneticCodeEntry {
        id: 27,
        name: "Karyorelict Nuclear",
        amino_acids: "FFLLSSSSYYQQCCWWLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG",
        starts: "--------------*--------------------M----------------------------",
    },
    GeneticCodeEntry {
        id: 28,
        name: "Condylostoma Nuclear",
        amino_acids: "FFLLSSSSYYQQCCWWLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG",
        starts: "----------**--*--------------------M----------------------------",
    },
    GeneticCodeEntry {
        id: 29,
        name: "Mesodinium Nuclear",
        amino_acids: "FFLLSSSSYYYYCC*WLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG",
        starts: "--------------*--------------------M----------------------------",
    },
    GeneticCodeEntry {
        id: 30,
        name: "Peritrich Nuclear",
        amino_acids: "FFLLSSSSYYEECC*WLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG",
        starts: "--------------*--------------------M----------------------------",
    },
    GeneticCodeEntry {
        id: 31,
        name: "Blastocrithidia Nuclear",
        amino_acids: "FFLLSSSSYYEECCWWLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG",
        starts: "----------**-----------------------M----------------------------",
    },
    GeneticCodeEntry {
        id: 32,
        name: "Balanophoraceae Plastid",
        amino_acids: "FFLLSSSSYY*WCC*WLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG",
        starts: "---M------*---*----M------------MMMM---------------M------------",
    },
    GeneticCodeEntry {
        id: 33,
        name: "Cephalodiscidae Mitochondrial",
        amino_acids: "FFLLSSSSYYY*CCWWLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSSKVVVVAAAADDEEGGGG",
        starts: "---M-------*-------M---------------M---------------M------------",
    },
];

fn codon_at(idx: usize) -> [u8; 3] {
    [
        NCBI_BASES[idx / 16],
        NCBI_BASES[(idx / 4) % 4],
        NCBI_BASES[idx % 4],
    ]
}

/// The NCBI translation tables 1-6, 9-16 and 21-33.
#[derive(Clone, Copy, Debug, Default)]
pub struct NcbiGeneticCodes;

impl NcbiGeneticCodes {
    pub fn new() -> Self {
        Self
    }

    fn entry(code: u32) -> OrfResult<&'static GeneticCodeEntry> {
        NCBI_TABLES
            .iter()
            .find(|e| e.id == code)
            .ok_or(OrfError::UnknownGeneticCode { code })
    }

    /// Identifiers of all known tables, ascending.
    pub fn ids() -> impl Iterator<Item = u32> {
        NCBI_TABLES.iter().map(|e| e.id)
    }

    pub fn name(code: u32) -> Option<&'static str> {
        Self::entry(code).ok().map(|e| e.name)
    }
}

impl GeneticCodeProvider for NcbiGeneticCodes {
    fn stop_codons(&self, code: u32) -> OrfResult<Vec<[u8; 3]>> {
        let entry = Self::entry(code)?;
        let stops: BTreeSet<usize> = entry
            .amino_acids
            .bytes()
            .zip(entry.starts.bytes())
            .enumerate()
            .filter(|(_, (aa, flag))| *aa == b'*' || *flag == b'*')
            .map(|(idx, _)| idx)
            .collect();
        Ok(stops.into_iter().map(codon_at).collect())
    }

    fn start_codons(&self, code: u32) -> OrfResult<Vec<[u8; 3]>> {
        let entry = Self::entry(code)?;
        Ok(entry
            .starts
            .bytes()
            .enumerate()
            .filter(|(_, flag)| *flag == b'M')
            .map(|(idx, _)| codon_at(idx))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tables_are_well_formed() {
        for entry in NCBI_TABLES {
            assert_eq!(entry.amino_acids.len(), 64, "table {}", entry.id);
            assert_eq!(entry.starts.len(), 64, "table {}", entry.id);
        }
        assert_eq!(NcbiGeneticCodes::ids().count(), 27);
    }

    #[test]
    fn standard_code() {
        let codes = NcbiGeneticCodes::new();
        assert_eq!(
            codes.stop_codons(1).unwrap(),
            vec![*b"TAA", *b"TAG", *b"TGA"]
        );
        assert_eq!(
            codes.start_codons(1).unwrap(),
            vec![*b"TTG", *b"CTG", *b"ATG"]
        );
        assert_eq!(NcbiGeneticCodes::name(1), Some("Standard"));
    }

    #[test]
    fn vertebrate_mitochondrial_stops() {
        let codes = NcbiGeneticCodes::new();
        assert_eq!(
            codes.stop_codons(2).unwrap(),
            vec![*b"TAA", *b"TAG", *b"AGA", *b"AGG"]
        );
    }

    #[test]
    fn stop_or_sense_codons_count_as_stops() {
        let codes = NcbiGeneticCodes::new();
        assert_eq!(codes.stop_codons(27).unwrap(), vec![*b"TGA"]);
        assert_eq!(
            codes.stop_codons(28).unwrap(),
            vec![*b"TAA", *b"TAG", *b"TGA"]
        );
    }

    #[test]
    fn every_table_fits_eight_slots() {
        let codes = NcbiGeneticCodes::new();
        for id in NcbiGeneticCodes::ids() {
            let stops = codes.stop_codons(id).unwrap();
            let starts = codes.start_codons(id).unwrap();
            assert!((1..=8).contains(&stops.len()), "table {id}");
            assert!((1..=8).contains(&starts.len()), "table {id}");
        }
        assert_eq!(codes.start_codons(4).unwrap().len(), 8);
    }

    #[test]
    fn unknown_code() {
        let codes = NcbiGeneticCodes::new();
        assert!(matches!(
            codes.stop_codons(7),
            Err(OrfError::UnknownGeneticCode { code: 7 })
        ));
    }
}
