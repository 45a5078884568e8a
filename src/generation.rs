//! Generation Index: generation ordinals, their roman labels, and the
//! highest national dex number each generation knows about.

use crate::errors::{ConfigError, ConfigResult};
use schema::DexNumber;
use serde::{Deserialize, Serialize};
use std::fmt;

const ROMAN_NUMERALS: [&str; 9] = ["i", "ii", "iii", "iv", "v", "vi", "vii", "viii", "ix"];

/// A generation ordinal in `FIRST..=LAST`.
///
/// Every constructor clamps, so resolvers never see an ordinal outside the
/// known range. Use [`GenerationIndex::clamp`] for caller input that should
/// also be bounded by the loaded table and logged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub struct Generation(u8);

impl Generation {
    pub const FIRST: Generation = Generation(1);
    pub const LAST: Generation = Generation(ROMAN_NUMERALS.len() as u8);

    /// Builds a generation, clamping `ordinal` to `FIRST..=LAST`.
    pub const fn new(ordinal: u8) -> Self {
        if ordinal < Self::FIRST.0 {
            Self::FIRST
        } else if ordinal > Self::LAST.0 {
            Self::LAST
        } else {
            Generation(ordinal)
        }
    }

    pub fn ordinal(self) -> u8 {
        self.0
    }

    /// Lowercase roman numeral, or `None` past the supported range.
    pub fn roman(self) -> Option<&'static str> {
        ROMAN_NUMERALS.get(usize::from(self.0).checked_sub(1)?).copied()
    }

    pub fn from_roman(numeral: &str) -> Option<Self> {
        ROMAN_NUMERALS
            .iter()
            .position(|candidate| candidate.eq_ignore_ascii_case(numeral))
            .map(|index| Generation::new(index as u8 + 1))
    }

    /// Parses upstream generation names like `generation-iv`.
    pub fn from_upstream_name(name: &str) -> Option<Self> {
        Self::from_roman(name.strip_prefix("generation-")?)
    }

    /// Upstream name, e.g. `generation-iv`.
    pub fn upstream_name(self) -> Option<String> {
        self.roman().map(|numeral| format!("generation-{}", numeral))
    }
}

impl From<u8> for Generation {
    fn from(ordinal: u8) -> Self {
        Generation::new(ordinal)
    }
}

impl From<Generation> for u8 {
    fn from(generation: Generation) -> Self {
        generation.0
    }
}

impl fmt::Display for Generation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.roman() {
            Some(numeral) => write!(f, "Generation {}", numeral.to_ascii_uppercase()),
            None => write!(f, "Generation {}", self.0),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRow {
    pub generation: Generation,
    pub max_dex: u32,
}

/// Static generation -> max national dex table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<GenerationRow>", into = "Vec<GenerationRow>")]
pub struct GenerationIndex {
    rows: Vec<GenerationRow>,
}

impl GenerationIndex {
    /// Validates and wraps the rows. Ordinals must run 1, 2, 3, ... and the
    /// dex ceiling must grow with every generation.
    pub fn new(rows: Vec<GenerationRow>) -> ConfigResult<Self> {
        let invalid = |details: String| ConfigError::InvalidTable {
            name: "generations".to_string(),
            details,
        };

        if rows.is_empty() {
            return Err(invalid("no generations listed".to_string()));
        }

        for (position, row) in rows.iter().enumerate() {
            if usize::from(row.generation.ordinal()) != position + 1 {
                return Err(invalid(format!(
                    "expected generation {} at position {}, found {}",
                    position + 1,
                    position,
                    row.generation.ordinal()
                )));
            }
        }

        for pair in rows.windows(2) {
            if pair[1].max_dex <= pair[0].max_dex {
                return Err(invalid(format!(
                    "max dex of generation {} ({}) does not exceed generation {} ({})",
                    pair[1].generation.ordinal(),
                    pair[1].max_dex,
                    pair[0].generation.ordinal(),
                    pair[0].max_dex
                )));
            }
        }

        Ok(Self { rows })
    }

    pub fn rows(&self) -> &[GenerationRow] {
        &self.rows
    }

    pub fn latest(&self) -> Generation {
        // `new` rejects empty tables
        self.rows
            .last()
            .map(|row| row.generation)
            .unwrap_or(Generation::FIRST)
    }

    /// Clamps a caller-supplied ordinal into the known range.
    pub fn clamp(&self, ordinal: i64) -> Generation {
        let latest = self.latest();
        if ordinal < 1 {
            tracing::warn!("Generation {} below range, clamping to 1", ordinal);
            Generation::FIRST
        } else if ordinal > i64::from(latest.ordinal()) {
            tracing::warn!(
                "Generation {} above range, clamping to {}",
                ordinal,
                latest.ordinal()
            );
            latest
        } else {
            Generation::new(ordinal as u8)
        }
    }

    /// Highest national dex number present in `generation` (clamped).
    pub fn max_dex(&self, generation: Generation) -> u32 {
        let generation = self.clamp(i64::from(generation.ordinal()));
        self.rows
            .iter()
            .find(|row| row.generation == generation)
            .map(|row| row.max_dex)
            .unwrap_or(0)
    }

    /// Whether the species with this dex number exists yet in `generation`.
    pub fn contains(&self, generation: Generation, dex: DexNumber) -> bool {
        dex.get() <= self.max_dex(generation)
    }

    /// Generation that introduced the species with this dex number.
    pub fn generation_of_dex(&self, dex: DexNumber) -> Option<Generation> {
        self.rows
            .iter()
            .find(|row| dex.get() <= row.max_dex)
            .map(|row| row.generation)
    }
}

impl TryFrom<Vec<GenerationRow>> for GenerationIndex {
    type Error = ConfigError;

    fn try_from(rows: Vec<GenerationRow>) -> Result<Self, Self::Error> {
        GenerationIndex::new(rows)
    }
}

impl From<GenerationIndex> for Vec<GenerationRow> {
    fn from(index: GenerationIndex) -> Self {
        index.rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn index() -> GenerationIndex {
        let ceilings = [151, 251, 386, 493, 649, 721, 809, 905, 1025];
        GenerationIndex::new(
            ceilings
                .iter()
                .enumerate()
                .map(|(i, &max_dex)| GenerationRow {
                    generation: Generation::new(i as u8 + 1),
                    max_dex,
                })
                .collect(),
        )
        .unwrap()
    }

    #[rstest]
    #[case(1, "i")]
    #[case(4, "iv")]
    #[case(8, "viii")]
    #[case(9, "ix")]
    fn test_roman_round_trip(#[case] ordinal: u8, #[case] numeral: &str) {
        let generation = Generation::new(ordinal);
        assert_eq!(generation.roman(), Some(numeral));
        assert_eq!(Generation::from_roman(numeral), Some(generation));
    }

    #[test]
    fn test_upstream_generation_names() {
        assert_eq!(
            Generation::from_upstream_name("generation-vii"),
            Some(Generation::new(7))
        );
        assert_eq!(Generation::from_upstream_name("gen-7"), None);
        assert_eq!(
            Generation::new(3).upstream_name().as_deref(),
            Some("generation-iii")
        );
        assert_eq!(Generation::from_roman("x"), None);
        assert_eq!(Generation::new(2).to_string(), "Generation II");
    }

    #[rstest]
    #[case(-3, 1)]
    #[case(0, 1)]
    #[case(5, 5)]
    #[case(42, 9)]
    fn test_out_of_range_generations_clamp(#[case] ordinal: i64, #[case] expected: u8) {
        assert_eq!(index().clamp(ordinal), Generation::new(expected));
    }

    #[rstest]
    #[case(0, 1)]
    #[case(1, 1)]
    #[case(9, 9)]
    #[case(10, 9)]
    #[case(255, 9)]
    fn test_generation_cannot_leave_known_range(#[case] ordinal: u8, #[case] expected: u8) {
        assert_eq!(Generation::new(ordinal).ordinal(), expected);
        assert_eq!(Generation::from(ordinal).ordinal(), expected);

        let parsed: Generation = serde_json::from_str(&ordinal.to_string()).unwrap();
        assert_eq!(parsed.ordinal(), expected);
    }

    #[test]
    fn test_max_dex_and_membership() {
        let index = index();
        assert_eq!(index.max_dex(Generation::new(1)), 151);
        assert_eq!(index.max_dex(Generation::new(6)), 721);
        assert!(index.contains(Generation::new(1), DexNumber::new(151).unwrap()));
        assert!(!index.contains(Generation::new(1), DexNumber::new(152).unwrap()));
        assert_eq!(
            index.generation_of_dex(DexNumber::new(700).unwrap()),
            Some(Generation::new(6))
        );
        assert_eq!(index.generation_of_dex(DexNumber::new(10_100).unwrap()), None);
    }

    #[test]
    fn test_index_rejects_gaps_and_shrinking_ceilings() {
        let gap = GenerationIndex::new(vec![
            GenerationRow {
                generation: Generation::new(1),
                max_dex: 151,
            },
            GenerationRow {
                generation: Generation::new(3),
                max_dex: 386,
            },
        ]);
        assert!(gap.is_err());

        let shrinking = GenerationIndex::new(vec![
            GenerationRow {
                generation: Generation::new(1),
                max_dex: 151,
            },
            GenerationRow {
                generation: Generation::new(2),
                max_dex: 100,
            },
        ]);
        assert!(shrinking.is_err());

        assert!(GenerationIndex::new(Vec::new()).is_err());
    }
}
