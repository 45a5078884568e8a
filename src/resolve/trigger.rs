use schema::{EvolutionDetail, PokemonType};
use serde::Serialize;
use std::fmt;

pub const NO_TRIGGER_TEXT: &str = "no evolution trigger in this game";

/// One condition of an evolution trigger, in render order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum TriggerLine {
    Level(u8),
    UseItem(String),
    HeldItem(String),
    KnownMove(String),
    KnownMoveType(PokemonType),
    Location(String),
    TimeOfDay(String),
    OverworldRain,
    Gender(u8),
    MinHappiness(u8),
    MinBeauty(u8),
    MinAffection(u8),
    UpsideDown,
    Trade { for_species: Option<String> },
}

impl fmt::Display for TriggerLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TriggerLine::Level(level) => write!(f, "Level {}", level),
            TriggerLine::UseItem(item) => write!(f, "Use {}", item),
            TriggerLine::HeldItem(item) => write!(f, "Holding {}", item),
            TriggerLine::KnownMove(name) => write!(f, "Knowing {}", name),
            TriggerLine::KnownMoveType(move_type) => write!(f, "Knowing a {}-type move", move_type),
            TriggerLine::Location(location) => write!(f, "At {}", location),
            TriggerLine::TimeOfDay(time) => write!(f, "During the {}", time),
            TriggerLine::OverworldRain => write!(f, "While it is raining"),
            // Upstream gender ids: 1 female, 2 male.
            TriggerLine::Gender(1) => write!(f, "Female only"),
            TriggerLine::Gender(2) => write!(f, "Male only"),
            TriggerLine::Gender(other) => write!(f, "Gender {}", other),
            TriggerLine::MinHappiness(value) => write!(f, "Happiness {}+", value),
            TriggerLine::MinBeauty(value) => write!(f, "Beauty {}+", value),
            TriggerLine::MinAffection(value) => write!(f, "Affection {}+", value),
            TriggerLine::UpsideDown => write!(f, "Holding the console upside down"),
            TriggerLine::Trade { for_species: Some(species) } => write!(f, "Trade for {}", species),
            TriggerLine::Trade { for_species: None } => write!(f, "Trade"),
        }
    }
}

/// Human-readable description of a resolved evolution trigger.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct TriggerDescription {
    pub lines: Vec<TriggerLine>,
}

impl TriggerDescription {
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl fmt::Display for TriggerDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.lines.is_empty() {
            return f.write_str(NO_TRIGGER_TEXT);
        }

        for (i, line) in self.lines.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", line)?;
        }
        Ok(())
    }
}

/// Render the populated fields of `detail` in fixed order.
pub fn describe_trigger(detail: &EvolutionDetail) -> TriggerDescription {
    let mut lines = Vec::new();

    if let Some(level) = detail.min_level {
        lines.push(TriggerLine::Level(level));
    }
    if let Some(item) = &detail.item {
        lines.push(TriggerLine::UseItem(item.clone()));
    }
    if let Some(item) = &detail.held_item {
        lines.push(TriggerLine::HeldItem(item.clone()));
    }
    if let Some(name) = &detail.known_move {
        lines.push(TriggerLine::KnownMove(name.clone()));
    } else if let Some(move_type) = detail.known_move_type {
        lines.push(TriggerLine::KnownMoveType(move_type));
    }
    if let Some(location) = &detail.location {
        lines.push(TriggerLine::Location(location.clone()));
    }
    if let Some(time) = detail.time_of_day() {
        lines.push(TriggerLine::TimeOfDay(time.to_string()));
    }
    if detail.needs_overworld_rain {
        lines.push(TriggerLine::OverworldRain);
    }
    if let Some(gender) = detail.gender {
        lines.push(TriggerLine::Gender(gender));
    }
    if let Some(value) = detail.min_happiness {
        lines.push(TriggerLine::MinHappiness(value));
    }
    if let Some(value) = detail.min_beauty {
        lines.push(TriggerLine::MinBeauty(value));
    }
    if let Some(value) = detail.min_affection {
        lines.push(TriggerLine::MinAffection(value));
    }
    if detail.turn_upside_down {
        lines.push(TriggerLine::UpsideDown);
    }
    if detail.is_trade() {
        lines.push(TriggerLine::Trade {
            for_species: detail.trade_species.clone(),
        });
    }

    TriggerDescription { lines }
}
