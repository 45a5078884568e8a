// In: src/lib.rs

//! Dexview Resolution Engine
//!
//! Turns raw, multi-generation species records into a page that is
//! accurate for one selected game version: types, damage relations,
//! learnable moves, the evolution tree and the sprite of that release.
//! Every resolver is a pure function of its inputs plus the explicit
//! [`ViewContext`].

// --- MODULE DECLARATIONS ---
pub mod catalog;
pub mod config;
pub mod context;
pub mod errors;
pub mod generation;
pub mod page;
pub mod resolve;

// --- PUBLIC API RE-EXPORTS ---

// --- From the `schema` crate ---
// Re-export the upstream record shapes the resolvers consume.
pub use schema::{
    // Evolution records
    EvolutionDetail,
    EvolutionField,
    EvolutionNode,
    TriggerKind,
    // Learnsets
    LearnMethod,
    LevelGate,
    MachineId,
    MoveLearnEntry,
    // Species records
    DexNumber,
    FlavorText,
    Species,
    SpeciesRef,
    Variety,
    // Types and damage relations
    EfficacyEdge,
    EfficacyOverride,
    PokemonType,
    TypeRecord,
};

// --- From this crate's modules (`src/`) ---

// Version selection.
pub use catalog::{version_group, VersionGroupInfo};
pub use context::ViewContext;
pub use generation::{Generation, GenerationIndex};

// Static tables.
pub use config::EngineConfig;

// Resolvers.
pub use resolve::{
    compute_efficacy, default_variety, describe_trigger, resolve_chain, resolve_move_set,
    resolve_sprite_path, resolve_types, resolve_variant, EfficacyTable, MoveSet, PrunedChain,
    ResolvedTypes, SpritePath, TriggerDescription,
};

// Page composition.
pub use page::{resolve_page, PageView, SpeciesBundle};

// Crate-specific error and result types.
pub use errors::{ConfigError, ConfigResult, DexError, DexResult, ResolveError, ResolveResult};
