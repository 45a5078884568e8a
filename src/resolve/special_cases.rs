//! Curated evolution exceptions.
//!
//! Upstream lists every trigger an edge ever had without saying which era
//! each one belongs to. This table names, per species and generation range,
//! which condition the candidate for that era carries.

use crate::errors::ConfigError;
use crate::generation::Generation;
use schema::{EvolutionDetail, EvolutionField};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecialCaseRule {
    /// Inclusive.
    pub first: Generation,
    /// Inclusive.
    pub last: Generation,
    pub prefer: EvolutionField,
}

impl SpecialCaseRule {
    pub fn covers(&self, generation: Generation) -> bool {
        self.first <= generation && generation <= self.last
    }

    /// First candidate carrying the preferred field.
    pub fn select<'a>(&self, candidates: &'a [EvolutionDetail]) -> Option<&'a EvolutionDetail> {
        candidates.iter().find(|detail| detail.has(self.prefer))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecialCase {
    pub species: String,
    pub rules: Vec<SpecialCaseRule>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(try_from = "Vec<SpecialCase>", into = "Vec<SpecialCase>")]
pub struct SpecialCaseTable {
    cases: Vec<SpecialCase>,
}

impl SpecialCaseTable {
    /// Validates that every range is ordered and that no two ranges of the
    /// same species overlap.
    pub fn new(cases: Vec<SpecialCase>) -> Result<Self, ConfigError> {
        let invalid = |details: String| ConfigError::InvalidTable {
            name: "evolution_special_cases".to_string(),
            details,
        };

        for case in &cases {
            for rule in &case.rules {
                if rule.first > rule.last {
                    return Err(invalid(format!(
                        "{}: range {}..={} is reversed",
                        case.species,
                        rule.first.ordinal(),
                        rule.last.ordinal()
                    )));
                }
            }

            for (i, rule) in case.rules.iter().enumerate() {
                let overlapping = case.rules[i + 1..]
                    .iter()
                    .any(|other| rule.first <= other.last && other.first <= rule.last);
                if overlapping {
                    return Err(invalid(format!(
                        "{}: overlapping ranges starting at generation {}",
                        case.species,
                        rule.first.ordinal()
                    )));
                }
            }
        }

        Ok(Self { cases })
    }

    pub fn len(&self) -> usize {
        self.cases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }

    pub fn rule_for(&self, species: &str, generation: Generation) -> Option<&SpecialCaseRule> {
        self.cases
            .iter()
            .filter(|case| case.species == species)
            .flat_map(|case| case.rules.iter())
            .find(|rule| rule.covers(generation))
    }
}

impl TryFrom<Vec<SpecialCase>> for SpecialCaseTable {
    type Error = ConfigError;

    fn try_from(cases: Vec<SpecialCase>) -> Result<Self, Self::Error> {
        SpecialCaseTable::new(cases)
    }
}

impl From<SpecialCaseTable> for Vec<SpecialCase> {
    fn from(table: SpecialCaseTable) -> Self {
        table.cases
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn rule(first: u8, last: u8, prefer: EvolutionField) -> SpecialCaseRule {
        SpecialCaseRule {
            first: Generation::new(first),
            last: Generation::new(last),
            prefer,
        }
    }

    fn milotic_table() -> SpecialCaseTable {
        SpecialCaseTable::new(vec![SpecialCase {
            species: "milotic".to_string(),
            rules: vec![
                rule(3, 4, EvolutionField::MinBeauty),
                rule(5, 9, EvolutionField::HeldItem),
            ],
        }])
        .unwrap()
    }

    #[test]
    fn test_rule_lookup_by_species_and_generation() {
        let table = milotic_table();
        assert_eq!(
            table.rule_for("milotic", Generation::new(4)).map(|r| r.prefer),
            Some(EvolutionField::MinBeauty)
        );
        assert_eq!(
            table.rule_for("milotic", Generation::new(7)).map(|r| r.prefer),
            Some(EvolutionField::HeldItem)
        );
        assert!(table.rule_for("milotic", Generation::new(2)).is_none());
        assert!(table.rule_for("gyarados", Generation::new(4)).is_none());
    }

    #[test]
    fn test_rule_selects_candidate_with_field() {
        let beauty = EvolutionDetail {
            min_beauty: Some(171),
            ..Default::default()
        };
        let prism = EvolutionDetail {
            held_item: Some("prism-scale".to_string()),
            ..Default::default()
        };
        let candidates = vec![beauty.clone(), prism.clone()];

        assert_eq!(rule(5, 9, EvolutionField::HeldItem).select(&candidates), Some(&prism));
        assert_eq!(rule(3, 4, EvolutionField::MinBeauty).select(&candidates), Some(&beauty));
        assert_eq!(rule(3, 4, EvolutionField::Location).select(&candidates), None);
    }

    #[test]
    fn test_overlapping_or_reversed_ranges_are_rejected() {
        let overlapping = SpecialCaseTable::new(vec![SpecialCase {
            species: "leafeon".to_string(),
            rules: vec![
                rule(4, 7, EvolutionField::Location),
                rule(7, 9, EvolutionField::Item),
            ],
        }]);
        assert!(overlapping.is_err());

        let reversed = SpecialCaseTable::new(vec![SpecialCase {
            species: "leafeon".to_string(),
            rules: vec![rule(8, 4, EvolutionField::Location)],
        }]);
        assert!(reversed.is_err());
    }

    #[test]
    fn test_table_parses_from_ron() {
        let table: SpecialCaseTable = ron::from_str(
            r#"[(species: "glaceon", rules: [(first: 4, last: 7, prefer: Location)])]"#,
        )
        .unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(
            table.rule_for("glaceon", Generation::new(5)).map(|r| r.prefer),
            Some(EvolutionField::Location)
        );
    }
}
