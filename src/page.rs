//! Composes the independent resolvers into one page for one species.

use crate::config::EngineConfig;
use crate::context::ViewContext;
use crate::errors::{DexError, DexResult, ResolveResult};
use crate::resolve::{
    compute_efficacy, default_variety, resolve_chain, resolve_move_set, resolve_sprite_path,
    resolve_types, resolve_variant, EfficacyTable, MoveSet, PrunedChain, ResolvedTypes,
    SpritePath,
};
use schema::{EfficacyEdge, EfficacyOverride, EvolutionNode, Species, SpeciesRef};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_LANGUAGE: &str = "en";

/// Everything the data-access layer fetched for one species page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeciesBundle {
    pub species: Species,
    #[serde(default)]
    pub efficacy: Vec<EfficacyEdge>,
    #[serde(default)]
    pub efficacy_overrides: Vec<EfficacyOverride>,
    #[serde(default)]
    pub evolution_chain: Option<EvolutionNode>,
}

impl SpeciesBundle {
    /// Read a bundle previously dumped as JSON.
    pub fn from_file(path: &Path) -> DexResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| DexError::BundleIo {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| DexError::BundleParse {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageView {
    pub species: SpeciesRef,
    pub context: ViewContext,
    /// Name of the variety shown.
    pub variety: String,
    pub regional_variant: bool,
    pub types: ResolvedTypes,
    pub efficacy: EfficacyTable,
    pub moves: MoveSet,
    pub evolution: PrunedChain,
    pub sprite: SpritePath,
    pub flavor_text: Option<String>,
    /// Position in the first regional dex of the version group that lists it.
    pub regional_dex_number: Option<u32>,
}

/// Resolve every section of a species page for `context`.
pub fn resolve_page(
    bundle: &SpeciesBundle,
    context: &ViewContext,
    config: &EngineConfig,
    language: &str,
) -> ResolveResult<PageView> {
    let species = &bundle.species;
    let generation = context.generation;

    let default = default_variety(species)?;
    let regional = context
        .region
        .as_deref()
        .and_then(|region| resolve_variant(&species.varieties, region));
    let variety = regional.map(|found| found.variety).unwrap_or(default);

    let types = resolve_types(&variety.types, &variety.past_types, generation)?;
    let efficacy = compute_efficacy(
        &types.types,
        generation,
        &bundle.efficacy,
        &bundle.efficacy_overrides,
    );
    let moves = resolve_move_set(&variety.moves, &context.version_group);
    let evolution = resolve_chain(
        bundle.evolution_chain.as_ref(),
        generation,
        &config.generations,
        &config.special_cases,
    )?;
    let sprite = resolve_sprite_path(
        variety.id,
        generation,
        &context.version_group,
        context.version.as_deref(),
    );

    let flavor_text = context
        .effective_version()
        .and_then(|version| species.flavor_text_for(version, language))
        .map(|entry| entry.text.clone());

    let regional_dex_number = context
        .version_group_info()
        .and_then(|info| species.pokedex_number_in(info.pokedexes.iter().copied()))
        .map(|entry| entry.entry_number);

    tracing::debug!(
        "Resolved {} for {} as {} ({:?} types, {} moves)",
        species.name,
        context.version_group,
        variety.name,
        types.band,
        moves.len()
    );

    Ok(PageView {
        species: species.species_ref(),
        context: context.clone(),
        variety: variety.name.clone(),
        regional_variant: regional.is_some(),
        types,
        efficacy,
        moves,
        evolution,
        sprite,
        flavor_text,
        regional_dex_number,
    })
}
