//! Static tables the engine needs before first use.
//!
//! Both tables ship embedded under `data/` and can be replaced by RON files
//! from a directory at startup.

use crate::errors::{ConfigError, ConfigResult};
use crate::generation::GenerationIndex;
use crate::resolve::special_cases::SpecialCaseTable;
use serde::de::DeserializeOwned;
use std::path::Path;

pub const GENERATIONS_FILE: &str = "generations.ron";
pub const SPECIAL_CASES_FILE: &str = "evolution_special_cases.ron";

const EMBEDDED_GENERATIONS: &str = include_str!("../data/generations.ron");
const EMBEDDED_SPECIAL_CASES: &str = include_str!("../data/evolution_special_cases.ron");

#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    pub generations: GenerationIndex,
    pub special_cases: SpecialCaseTable,
}

impl EngineConfig {
    /// Parse the tables compiled into the binary.
    pub fn embedded() -> ConfigResult<Self> {
        Ok(Self {
            generations: parse_table(GENERATIONS_FILE, EMBEDDED_GENERATIONS)?,
            special_cases: parse_table(SPECIAL_CASES_FILE, EMBEDDED_SPECIAL_CASES)?,
        })
    }

    /// Load both tables from `dir`. A missing file falls back to the
    /// embedded table of the same name.
    pub fn load(dir: &Path) -> ConfigResult<Self> {
        let generations: GenerationIndex =
            load_table(dir, GENERATIONS_FILE, EMBEDDED_GENERATIONS)?;
        let special_cases: SpecialCaseTable =
            load_table(dir, SPECIAL_CASES_FILE, EMBEDDED_SPECIAL_CASES)?;

        tracing::info!(
            "Loaded {} generations and {} evolution special cases from {}",
            generations.rows().len(),
            special_cases.len(),
            dir.display()
        );

        Ok(Self {
            generations,
            special_cases,
        })
    }
}

fn load_table<T: DeserializeOwned>(dir: &Path, name: &str, embedded: &str) -> ConfigResult<T> {
    let path = dir.join(name);
    if !path.exists() {
        tracing::debug!("{} not found, using embedded table", path.display());
        return parse_table(name, embedded);
    }

    let content = std::fs::read_to_string(&path).map_err(|source| ConfigError::Io {
        path: path.clone(),
        source,
    })?;
    parse_table(name, &content)
}

fn parse_table<T: DeserializeOwned>(name: &str, content: &str) -> ConfigResult<T> {
    ron::from_str(content).map_err(|source| ConfigError::Parse {
        name: name.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::Generation;
    use rstest::rstest;
    use schema::EvolutionField;

    #[test]
    fn test_embedded_tables_parse() {
        let config = EngineConfig::embedded().unwrap();
        assert_eq!(config.generations.latest(), Generation::new(9));
        assert_eq!(config.generations.max_dex(Generation::new(1)), 151);

        let rule = config
            .special_cases
            .rule_for("milotic", Generation::new(5))
            .unwrap();
        assert_eq!(rule.prefer, EvolutionField::HeldItem);
    }

    #[rstest]
    #[case("leafeon", 4, EvolutionField::Location)]
    #[case("glaceon", 7, EvolutionField::Location)]
    #[case("magnezone", 8, EvolutionField::Item)]
    #[case("probopass", 9, EvolutionField::Item)]
    #[case("sylveon", 6, EvolutionField::MinAffection)]
    #[case("sylveon", 8, EvolutionField::MinHappiness)]
    fn test_embedded_special_case_eras(
        #[case] species: &str,
        #[case] generation: u8,
        #[case] expected: EvolutionField,
    ) {
        let config = EngineConfig::embedded().unwrap();
        let rule = config
            .special_cases
            .rule_for(species, Generation::new(generation))
            .unwrap();
        assert_eq!(rule.prefer, expected);
    }

    #[test]
    fn test_invalid_generation_table_is_rejected() {
        let result: ConfigResult<GenerationIndex> = parse_table(
            GENERATIONS_FILE,
            "[(generation: 1, max_dex: 151), (generation: 2, max_dex: 90)]",
        );
        assert!(matches!(result, Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn test_load_reads_tables_from_directory() {
        let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("data");
        let config = EngineConfig::load(&dir).unwrap();
        assert_eq!(config.generations.rows().len(), 9);
        assert_eq!(config.special_cases.len(), 6);
        assert_eq!(config, EngineConfig::embedded().unwrap());
    }

    #[test]
    fn test_missing_directory_falls_back_to_embedded() {
        let config = EngineConfig::load(Path::new("definitely/not/a/config/dir")).unwrap();
        assert_eq!(config, EngineConfig::embedded().unwrap());
    }
}
