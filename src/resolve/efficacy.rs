use crate::generation::Generation;
use schema::{EfficacyEdge, EfficacyOverride, PokemonType, TypeRecord};
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

const NEUTRAL: f32 = 100.0;

/// Combined damage percentage per attacking type against one defender.
///
/// 0 = immune, 100 = neutral, above 100 super effective, below resisted.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct EfficacyTable {
    factors: BTreeMap<PokemonType, f32>,
}

impl EfficacyTable {
    pub fn factor(&self, attacking: PokemonType) -> Option<f32> {
        self.factors.get(&attacking).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (PokemonType, f32)> + '_ {
        self.factors.iter().map(|(&attacking, &factor)| (attacking, factor))
    }

    pub fn len(&self) -> usize {
        self.factors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factors.is_empty()
    }

    pub fn weaknesses(&self) -> Vec<(PokemonType, f32)> {
        self.iter().filter(|&(_, factor)| factor > NEUTRAL).collect()
    }

    pub fn resistances(&self) -> Vec<(PokemonType, f32)> {
        self.iter()
            .filter(|&(_, factor)| factor > 0.0 && factor < NEUTRAL)
            .collect()
    }

    pub fn immunities(&self) -> Vec<PokemonType> {
        self.iter()
            .filter(|&(_, factor)| factor == 0.0)
            .map(|(attacking, _)| attacking)
            .collect()
    }
}

/// Damage percentage of one attacker against one defending type at `target`.
///
/// An override still covering `target` replaces the base factor; the
/// narrowest such override wins when several do.
fn pair_factor(
    attacking: PokemonType,
    defending: PokemonType,
    target: u8,
    base: Option<&EfficacyEdge>,
    overrides: &[EfficacyOverride],
) -> u16 {
    let historical = overrides
        .iter()
        .filter(|o| o.attacking == attacking && o.defending == defending)
        .filter(|o| target <= o.generation)
        .min_by_key(|o| o.generation);

    match (historical, base) {
        (Some(o), _) => o.damage_factor,
        (None, Some(edge)) => edge.damage_factor,
        (None, None) => NEUTRAL as u16,
    }
}

/// Compute the damage taken from every eligible attacking type by a
/// defender with `types`, combining dual types multiplicatively.
///
/// Edges whose attacking type is not relevant yet at `target` are skipped;
/// nothing else is filtered here.
pub fn compute_efficacy(
    types: &[TypeRecord],
    target: Generation,
    matrix: &[EfficacyEdge],
    overrides: &[EfficacyOverride],
) -> EfficacyTable {
    let target = target.ordinal();
    let defending: BTreeSet<PokemonType> = types.iter().map(|record| record.pokemon_type).collect();

    let eligible: Vec<&EfficacyEdge> = matrix
        .iter()
        .filter(|edge| edge.generation <= target && defending.contains(&edge.defending))
        .collect();

    let attackers: BTreeSet<PokemonType> = eligible.iter().map(|edge| edge.attacking).collect();

    let factors = attackers
        .into_iter()
        .map(|attacking| {
            let combined = defending.iter().fold(NEUTRAL, |acc, &defending_type| {
                let base = eligible
                    .iter()
                    .copied()
                    .find(|edge| edge.attacking == attacking && edge.defending == defending_type);
                let factor = pair_factor(attacking, defending_type, target, base, overrides);
                acc * (f32::from(factor) / 100.0)
            });
            (attacking, combined)
        })
        .collect();

    EfficacyTable { factors }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use PokemonType::*;

    fn edge(attacking: PokemonType, defending: PokemonType, damage_factor: u16) -> EfficacyEdge {
        EfficacyEdge {
            attacking,
            defending,
            damage_factor,
            generation: attacking.introduced_in(),
        }
    }

    fn matrix() -> Vec<EfficacyEdge> {
        vec![
            edge(Fighting, Normal, 200),
            edge(Ghost, Normal, 0),
            edge(Fighting, Fairy, 50),
            edge(Dragon, Fairy, 0),
            edge(Poison, Fairy, 200),
            edge(Steel, Fairy, 200),
            edge(Ghost, Psychic, 200),
            edge(Bug, Psychic, 200),
            edge(Ghost, Steel, 100),
            edge(Dark, Steel, 100),
            edge(Fire, Steel, 200),
        ]
    }

    fn overrides() -> Vec<EfficacyOverride> {
        vec![
            historical(Ghost, Psychic, 0, 1),
            historical(Ghost, Steel, 50, 5),
            historical(Dark, Steel, 50, 5),
        ]
    }

    fn historical(
        attacking: PokemonType,
        defending: PokemonType,
        damage_factor: u16,
        generation: u8,
    ) -> EfficacyOverride {
        EfficacyOverride {
            attacking,
            defending,
            damage_factor,
            generation,
        }
    }

    fn defender(types: &[PokemonType]) -> Vec<TypeRecord> {
        types
            .iter()
            .enumerate()
            .map(|(slot, &t)| TypeRecord::new(t, slot as u8 + 1))
            .collect()
    }

    #[test]
    fn test_single_type_defender_keeps_base_factor() {
        let table = compute_efficacy(&defender(&[Normal]), Generation::new(1), &matrix(), &[]);
        assert_eq!(table.factor(Fighting), Some(200.0));
        assert_eq!(table.factor(Ghost), Some(0.0));
        assert_eq!(table.len(), 2);
    }

    #[rstest]
    #[case(0, 1)]
    #[case(10, 9)]
    #[case(200, 9)]
    fn test_out_of_range_generation_matches_nearest_bound(#[case] ordinal: u8, #[case] bound: u8) {
        let types = defender(&[Normal, Fairy]);
        let clamped = compute_efficacy(&types, Generation::new(ordinal), &matrix(), &overrides());
        let nearest = compute_efficacy(&types, Generation::new(bound), &matrix(), &overrides());
        assert!(!clamped.is_empty());
        assert_eq!(clamped, nearest);
    }

    #[test]
    fn test_dual_type_factors_multiply() {
        let types = defender(&[Normal, Fairy]);
        let table = compute_efficacy(&types, Generation::new(6), &matrix(), &[]);
        assert_eq!(table.factor(Fighting), Some(100.0));
        assert_eq!(table.factor(Ghost), Some(0.0));
        assert_eq!(table.factor(Poison), Some(200.0));
        assert_eq!(table.factor(Dragon), Some(0.0));
        assert_eq!(table.immunities(), vec![Ghost, Dragon]);
        assert_eq!(table.weaknesses(), vec![(Poison, 200.0_f32), (Steel, 200.0_f32)]);
    }

    #[rstest]
    #[case(200, 50)]
    #[case(200, 200)]
    #[case(50, 50)]
    #[case(0, 200)]
    #[case(100, 50)]
    fn test_multiplicativity(#[case] first: u16, #[case] second: u16) {
        let matrix = vec![edge(Fire, Grass, first), edge(Fire, Bug, second)];
        let types = defender(&[Grass, Bug]);
        let table = compute_efficacy(&types, Generation::new(9), &matrix, &[]);
        let expected = (f32::from(first) / 100.0) * (f32::from(second) / 100.0) * 100.0;
        assert_eq!(table.factor(Fire), Some(expected));
    }

    #[rstest]
    #[case(1, 0.0)]
    #[case(2, 200.0)]
    #[case(9, 200.0)]
    fn test_override_applies_up_to_its_generation(
        #[case] generation: u8,
        #[case] expected: f32,
    ) {
        let table = compute_efficacy(
            &defender(&[Psychic]),
            Generation::new(generation),
            &matrix(),
            &overrides(),
        );
        assert_eq!(table.factor(Ghost), Some(expected));
    }

    #[test]
    fn test_steel_resistances_change_in_generation_six() {
        let steel = defender(&[Steel]);
        let gen5 = compute_efficacy(&steel, Generation::new(5), &matrix(), &overrides());
        assert_eq!(gen5.factor(Ghost), Some(50.0));
        assert_eq!(gen5.factor(Dark), Some(50.0));

        let gen6 = compute_efficacy(&steel, Generation::new(6), &matrix(), &overrides());
        assert_eq!(gen6.factor(Ghost), Some(100.0));
        assert_eq!(gen6.factor(Dark), Some(100.0));
        assert_eq!(gen6.weaknesses(), vec![(Fire, 200.0_f32)]);
    }

    #[test]
    fn test_narrowest_override_wins() {
        let overrides = vec![
            historical(Ghost, Psychic, 50, 4),
            historical(Ghost, Psychic, 0, 1),
        ];
        let psychic = defender(&[Psychic]);
        let at = |g| {
            compute_efficacy(&psychic, Generation::new(g), &matrix(), &overrides).factor(Ghost)
        };
        assert_eq!(at(1), Some(0.0));
        assert_eq!(at(3), Some(50.0));
        assert_eq!(at(5), Some(200.0));
    }

    #[test]
    fn test_attackers_not_yet_relevant_are_skipped() {
        let table = compute_efficacy(&defender(&[Fairy]), Generation::new(1), &matrix(), &[]);
        assert_eq!(table.factor(Fighting), Some(50.0));
        assert_eq!(table.factor(Steel), None);
        assert!(table.resistances().contains(&(Fighting, 50.0_f32)));
    }

    #[test]
    fn test_missing_edge_counts_as_neutral_for_that_type() {
        let types = defender(&[Normal, Psychic]);
        let table = compute_efficacy(&types, Generation::new(2), &matrix(), &[]);
        assert_eq!(table.factor(Bug), Some(200.0));
        assert_eq!(table.factor(Fighting), Some(200.0));
        assert_eq!(table.factor(Ghost), Some(0.0));
    }
}
