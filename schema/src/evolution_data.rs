use crate::{PokemonType, SpeciesRef};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum::EnumString;

/// Upstream trigger category of an evolution detail.
#[derive(Debug, Clone, PartialEq, Eq, Hash, EnumString, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum TriggerKind {
    LevelUp,
    Trade,
    UseItem,
    Shed,
    #[strum(default)]
    Other(String),
}

impl TriggerKind {
    pub fn as_str(&self) -> &str {
        match self {
            TriggerKind::LevelUp => "level-up",
            TriggerKind::Trade => "trade",
            TriggerKind::UseItem => "use-item",
            TriggerKind::Shed => "shed",
            TriggerKind::Other(name) => name,
        }
    }
}

impl From<String> for TriggerKind {
    fn from(value: String) -> Self {
        match TriggerKind::from_str(&value) {
            Ok(kind) => kind,
            Err(_) => TriggerKind::Other(value),
        }
    }
}

impl From<TriggerKind> for String {
    fn from(kind: TriggerKind) -> Self {
        kind.as_str().to_string()
    }
}

/// Optional condition fields of an evolution detail, used to name which
/// candidate a special case prefers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EvolutionField {
    MinLevel,
    Item,
    HeldItem,
    KnownMove,
    KnownMoveType,
    Location,
    TimeOfDay,
    MinHappiness,
    MinBeauty,
    MinAffection,
    TurnUpsideDown,
    Trade,
}

/// One alternative trigger for becoming a node from its parent.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EvolutionDetail {
    pub trigger: Option<TriggerKind>,
    pub min_level: Option<u8>,
    /// Item used on the species (stones and the like).
    pub item: Option<String>,
    pub held_item: Option<String>,
    pub known_move: Option<String>,
    pub known_move_type: Option<PokemonType>,
    pub location: Option<String>,
    /// Upstream sends an empty string when there is no restriction.
    pub time_of_day: Option<String>,
    pub min_happiness: Option<u8>,
    pub min_beauty: Option<u8>,
    pub min_affection: Option<u8>,
    pub turn_upside_down: bool,
    pub needs_overworld_rain: bool,
    pub gender: Option<u8>,
    pub trade_species: Option<String>,
}

impl EvolutionDetail {
    pub fn time_of_day(&self) -> Option<&str> {
        self.time_of_day.as_deref().filter(|time| !time.is_empty())
    }

    pub fn is_trade(&self) -> bool {
        self.trigger == Some(TriggerKind::Trade)
    }

    pub fn has(&self, field: EvolutionField) -> bool {
        match field {
            EvolutionField::MinLevel => self.min_level.is_some(),
            EvolutionField::Item => self.item.is_some(),
            EvolutionField::HeldItem => self.held_item.is_some(),
            EvolutionField::KnownMove => self.known_move.is_some(),
            EvolutionField::KnownMoveType => self.known_move_type.is_some(),
            EvolutionField::Location => self.location.is_some(),
            EvolutionField::TimeOfDay => self.time_of_day().is_some(),
            EvolutionField::MinHappiness => self.min_happiness.is_some(),
            EvolutionField::MinBeauty => self.min_beauty.is_some(),
            EvolutionField::MinAffection => self.min_affection.is_some(),
            EvolutionField::TurnUpsideDown => self.turn_upside_down,
            EvolutionField::Trade => self.is_trade(),
        }
    }
}

/// A species in an evolution tree, with the ways to reach it from its parent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvolutionNode {
    pub species: SpeciesRef,
    #[serde(default)]
    pub evolution_details: Vec<EvolutionDetail>,
    #[serde(default)]
    pub evolves_to: Vec<EvolutionNode>,
}

impl EvolutionNode {
    pub fn new(species: SpeciesRef) -> Self {
        Self {
            species,
            evolution_details: Vec::new(),
            evolves_to: Vec::new(),
        }
    }

    pub fn with_details(mut self, details: Vec<EvolutionDetail>) -> Self {
        self.evolution_details = details;
        self
    }

    pub fn with_child(mut self, child: EvolutionNode) -> Self {
        self.evolves_to.push(child);
        self
    }
}
