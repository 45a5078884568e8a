// Dexview Schema - Shared record definitions
// This crate holds the upstream-shaped records (species, varieties, types,
// move learn entries, evolution trees) that the resolution engine reads.
// Nothing in here knows about a selected game version.

// Re-export the main types
pub use evolution_data::*;
pub use learnset::*;
pub use pokemon_types::*;
pub use species_data::*;

pub mod evolution_data;
pub mod learnset;
pub mod pokemon_types;
pub mod species_data;
