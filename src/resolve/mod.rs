pub mod efficacy;
pub mod evolution;
pub mod moves;
pub mod special_cases;
pub mod sprite;
pub mod trigger;
pub mod types;
pub mod variant;

pub use efficacy::{compute_efficacy, EfficacyTable};
pub use evolution::{resolve_chain, ChainNode, EdgeChoice, PrunedChain};
pub use moves::{filter_for_version_group, resolve_move_set, MoveGroup, MoveRow, MoveSet};
pub use special_cases::{SpecialCase, SpecialCaseRule, SpecialCaseTable};
pub use sprite::{resolve_sprite_path, SpriteKind, SpritePath};
pub use trigger::{describe_trigger, TriggerDescription, TriggerLine};
pub use types::{resolve_types, ResolvedTypes, TypeBand};
pub use variant::{default_variety, resolve_variant, MatchSource, VariantMatch};
