use crate::{MoveLearnEntry, TypeRecord};
use serde::{Deserialize, Serialize};
use std::fmt;

/// National dex number. Stable, never reused, always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u32")]
pub struct DexNumber(u32);

/// Raised when upstream hands over a dex number that cannot exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidDexNumber(pub i64);

impl fmt::Display for InvalidDexNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid dex number: {}", self.0)
    }
}

impl std::error::Error for InvalidDexNumber {}

impl DexNumber {
    pub fn new(value: i64) -> Result<Self, InvalidDexNumber> {
        match u32::try_from(value) {
            Ok(number) if number > 0 => Ok(DexNumber(number)),
            _ => Err(InvalidDexNumber(value)),
        }
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl TryFrom<i64> for DexNumber {
    type Error = InvalidDexNumber;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        DexNumber::new(value)
    }
}

impl From<DexNumber> for u32 {
    fn from(dex: DexNumber) -> Self {
        dex.0
    }
}

impl fmt::Display for DexNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Name + dex number reference to a species, as it appears in chains.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SpeciesRef {
    pub name: String,
    pub dex_number: DexNumber,
}

/// A concrete form of a species with its own types, moves and sprites.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Variety {
    /// Upstream variety id. Equals the dex number for default forms,
    /// alternate forms live in the 10000+ range.
    pub id: DexNumber,
    pub name: String,
    pub is_default: bool,
    /// Explicit region tag, when upstream exposes one.
    #[serde(default)]
    pub region: Option<String>,
    pub types: Vec<TypeRecord>,
    #[serde(default)]
    pub past_types: Vec<TypeRecord>,
    #[serde(default)]
    pub moves: Vec<MoveLearnEntry>,
    /// Decimetres.
    #[serde(default)]
    pub height: u32,
    /// Hectograms.
    #[serde(default)]
    pub weight: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlavorText {
    pub language: String,
    pub version: String,
    pub text: String,
}

/// Position of a species inside one regional dex.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokedexNumber {
    pub pokedex: String,
    pub entry_number: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Species {
    pub dex_number: DexNumber,
    pub name: String,
    pub varieties: Vec<Variety>,
    #[serde(default)]
    pub evolution_chain_id: Option<u32>,
    #[serde(default)]
    pub flavor_text: Vec<FlavorText>,
    #[serde(default)]
    pub pokedex_numbers: Vec<PokedexNumber>,
}

impl Species {
    pub fn species_ref(&self) -> SpeciesRef {
        SpeciesRef {
            name: self.name.clone(),
            dex_number: self.dex_number,
        }
    }

    /// Flavor text written for one game release, in the requested language.
    pub fn flavor_text_for(&self, version: &str, language: &str) -> Option<&FlavorText> {
        self.flavor_text
            .iter()
            .find(|entry| entry.version == version && entry.language == language)
    }

    /// First regional dex position among the given dexes, in their order.
    pub fn pokedex_number_in<'a, I>(&self, pokedexes: I) -> Option<&PokedexNumber>
    where
        I: IntoIterator<Item = &'a str>,
    {
        pokedexes.into_iter().find_map(|pokedex| {
            self.pokedex_numbers
                .iter()
                .find(|entry| entry.pokedex == pokedex)
        })
    }
}
