use crate::catalog;
use crate::generation::Generation;
use phf::phf_map;
use schema::DexNumber;
use serde::Serialize;
use std::fmt;

const SPRITE_ROOT: &str = "sprites/pokemon";

/// Alternate-form ids start here; they have no per-version assets.
pub const FORM_ID_CUTOFF: u32 = 10_000;

/// Last generation with per-version sprite sets.
const LAST_VERSIONED_GENERATION: u8 = 7;

/// Releases drawn with another release's assets.
static SPRITE_REMAPS: phf::Map<&'static str, &'static str> = phf_map! {
    // Japanese gen 1 releases use the international set
    "red-green-japan" => "generation-i/red-blue/transparent",
    "blue-japan" => "generation-i/red-blue/transparent",
    // Gen 3 console spin-offs match the Emerald sprites
    "colosseum" => "generation-iii/emerald",
    "xd" => "generation-iii/emerald",
    "black-2-white-2" => "generation-v/black-white",
    "omega-ruby-alpha-sapphire" => "generation-vi/omegaruby-alphasapphire",
    "sun-moon" => "generation-vii/ultra-sun-ultra-moon",
    "lets-go-pikachu-lets-go-eevee" => "generation-vii/ultra-sun-ultra-moon",
};

/// Releases whose versions each have their own sprite set.
const PER_VERSION_GROUPS: &[&str] = &["gold-silver"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SpriteKind {
    /// Version-independent default sprite.
    Flat,
    /// Sprite from the asset set of a specific era.
    Versioned,
    /// High-resolution artwork used when nothing else resolves.
    Artwork,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpritePath {
    pub path: String,
    pub kind: SpriteKind,
}

impl SpritePath {
    fn flat(dex: DexNumber) -> Self {
        Self {
            path: format!("{}/{}.png", SPRITE_ROOT, dex),
            kind: SpriteKind::Flat,
        }
    }

    fn versioned(folder: &str, dex: DexNumber) -> Self {
        Self {
            path: format!("{}/versions/{}/{}.png", SPRITE_ROOT, folder, dex),
            kind: SpriteKind::Versioned,
        }
    }

    fn artwork(dex: DexNumber) -> Self {
        Self {
            path: format!("{}/other/official-artwork/{}.png", SPRITE_ROOT, dex),
            kind: SpriteKind::Artwork,
        }
    }

    /// Join the path onto an asset host.
    pub fn url(&self, base: &str) -> String {
        format!("{}/{}", base.trim_end_matches('/'), self.path)
    }
}

impl fmt::Display for SpritePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path)
    }
}

/// Asset path of the sprite valid for the selected release.
pub fn resolve_sprite_path(
    dex: DexNumber,
    generation: Generation,
    version_group: &str,
    version: Option<&str>,
) -> SpritePath {
    if generation.ordinal() > LAST_VERSIONED_GENERATION || dex.get() >= FORM_ID_CUTOFF {
        return SpritePath::flat(dex);
    }

    match sprite_folder(version_group, version) {
        Some(folder) => SpritePath::versioned(&folder, dex),
        None => {
            tracing::debug!(
                "No sprite set for {} ({:?}), using artwork for #{}",
                version_group,
                version,
                dex
            );
            SpritePath::artwork(dex)
        }
    }
}

fn sprite_folder(version_group: &str, version: Option<&str>) -> Option<String> {
    if let Some(folder) = SPRITE_REMAPS.get(version_group) {
        return Some((*folder).to_string());
    }

    let info = catalog::version_group(version_group)?;
    let generation = info.generation;
    if generation.ordinal() > LAST_VERSIONED_GENERATION {
        return None;
    }
    let numeral = generation.roman()?;

    let leaf = if PER_VERSION_GROUPS.contains(&version_group) {
        match version {
            Some(version) if info.has_version(version) => version,
            Some(_) => return None,
            None => *info.versions.first()?,
        }
    } else {
        version_group
    };

    // Gen 1 and 2 sets are keyed by their transparent-background variant.
    if generation.ordinal() <= 2 {
        Some(format!("generation-{}/{}/transparent", numeral, leaf))
    } else {
        Some(format!("generation-{}/{}", numeral, leaf))
    }
}
