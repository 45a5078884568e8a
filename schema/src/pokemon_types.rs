use serde::{Deserialize, Serialize};
use std::fmt;
use strum::{EnumIter, EnumString, IntoStaticStr};

/// Elemental types, in upstream id order.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    EnumString,
    EnumIter,
    IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum PokemonType {
    Normal,
    Fighting,
    Flying,
    Poison,
    Ground,
    Rock,
    Bug,
    Ghost,
    Steel,
    Fire,
    Water,
    Grass,
    Electric,
    Psychic,
    Ice,
    Dragon,
    Dark,
    Fairy,
    Stellar,
}

impl fmt::Display for PokemonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name: &'static str = self.into();
        f.pad(name)
    }
}

impl PokemonType {
    /// Generation ordinal in which this type first appeared.
    pub fn introduced_in(self) -> u8 {
        use PokemonType::*;

        match self {
            Steel | Dark => 2,
            Fairy => 6,
            Stellar => 9,
            _ => 1,
        }
    }
}

/// One type assignment of a species or variety.
///
/// For a *current* assignment `generation` is usually absent upstream and
/// falls back to the type's introduction generation. For a *past* assignment
/// it is the last generation in which the assignment applied.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TypeRecord {
    #[serde(rename = "type")]
    pub pokemon_type: PokemonType,
    #[serde(default = "default_slot")]
    pub slot: u8,
    #[serde(default)]
    pub generation: Option<u8>,
}

fn default_slot() -> u8 {
    1
}

impl TypeRecord {
    pub fn new(pokemon_type: PokemonType, slot: u8) -> Self {
        Self {
            pokemon_type,
            slot,
            generation: None,
        }
    }

    pub fn with_generation(mut self, generation: u8) -> Self {
        self.generation = Some(generation);
        self
    }

    /// Explicit generation if recorded, otherwise the type's introduction.
    pub fn generation(&self) -> u8 {
        self.generation
            .unwrap_or_else(|| self.pokemon_type.introduced_in())
    }
}

/// Base damage relation between an attacking and a defending type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EfficacyEdge {
    pub attacking: PokemonType,
    pub defending: PokemonType,
    /// Damage factor in percent (0, 50, 100, 200).
    pub damage_factor: u16,
    /// Generation in which the attacking type became relevant.
    pub generation: u8,
}

/// A historical damage relation, valid up to and including `generation`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EfficacyOverride {
    pub attacking: PokemonType,
    pub defending: PokemonType,
    pub damage_factor: u16,
    pub generation: u8,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_type_names_follow_upstream() {
        assert_eq!(PokemonType::from_str("fairy").unwrap(), PokemonType::Fairy);
        assert_eq!(PokemonType::from_str("Ghost").unwrap(), PokemonType::Ghost);
        assert!(PokemonType::from_str("sound").is_err());
        assert_eq!(PokemonType::Psychic.to_string(), "psychic");
    }

    #[test]
    fn test_current_record_generation_defaults_to_introduction() {
        let fairy = TypeRecord::new(PokemonType::Fairy, 1);
        assert_eq!(fairy.generation(), 6);

        let past_normal = TypeRecord::new(PokemonType::Normal, 1).with_generation(5);
        assert_eq!(past_normal.generation(), 5);
    }

    #[test]
    fn test_type_record_deserializes_upstream_shape() {
        let record: TypeRecord =
            serde_json::from_str(r#"{ "type": "steel", "slot": 2 }"#).unwrap();
        assert_eq!(record.pokemon_type, PokemonType::Steel);
        assert_eq!(record.slot, 2);
        assert_eq!(record.generation(), 2);
    }
}
