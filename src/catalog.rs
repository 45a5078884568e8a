//! Static catalog of version groups: which generation each belongs to,
//! which releases and regional dexes it bundles.

use crate::generation::Generation;
use phf::phf_map;

/// Version group whose moveset is carried forward into every move page.
pub const CARRY_FORWARD_VERSION_GROUP: &str = "scarlet-violet";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VersionGroupInfo {
    pub name: &'static str,
    pub generation: Generation,
    pub versions: &'static [&'static str],
    pub regions: &'static [&'static str],
    pub pokedexes: &'static [&'static str],
}

impl VersionGroupInfo {
    /// Region used for regional-form matching.
    pub fn primary_region(&self) -> Option<&'static str> {
        self.regions.first().copied()
    }

    pub fn has_version(&self, version: &str) -> bool {
        self.versions.contains(&version)
    }
}

static VERSION_GROUPS: phf::Map<&'static str, VersionGroupInfo> = phf_map! {
    // --- Generation I ---
    "red-blue" => VersionGroupInfo {
        name: "red-blue",
        generation: Generation::new(1),
        versions: &["red", "blue"],
        regions: &["kanto"],
        pokedexes: &["kanto"],
    },
    "yellow" => VersionGroupInfo {
        name: "yellow",
        generation: Generation::new(1),
        versions: &["yellow"],
        regions: &["kanto"],
        pokedexes: &["kanto"],
    },
    "red-green-japan" => VersionGroupInfo {
        name: "red-green-japan",
        generation: Generation::new(1),
        versions: &["red-japan", "green-japan"],
        regions: &["kanto"],
        pokedexes: &["kanto"],
    },
    "blue-japan" => VersionGroupInfo {
        name: "blue-japan",
        generation: Generation::new(1),
        versions: &["blue-japan"],
        regions: &["kanto"],
        pokedexes: &["kanto"],
    },
    // --- Generation II ---
    "gold-silver" => VersionGroupInfo {
        name: "gold-silver",
        generation: Generation::new(2),
        versions: &["gold", "silver"],
        regions: &["johto"],
        pokedexes: &["original-johto"],
    },
    "crystal" => VersionGroupInfo {
        name: "crystal",
        generation: Generation::new(2),
        versions: &["crystal"],
        regions: &["johto"],
        pokedexes: &["original-johto"],
    },
    // --- Generation III ---
    "ruby-sapphire" => VersionGroupInfo {
        name: "ruby-sapphire",
        generation: Generation::new(3),
        versions: &["ruby", "sapphire"],
        regions: &["hoenn"],
        pokedexes: &["hoenn"],
    },
    "emerald" => VersionGroupInfo {
        name: "emerald",
        generation: Generation::new(3),
        versions: &["emerald"],
        regions: &["hoenn"],
        pokedexes: &["hoenn"],
    },
    "firered-leafgreen" => VersionGroupInfo {
        name: "firered-leafgreen",
        generation: Generation::new(3),
        versions: &["firered", "leafgreen"],
        regions: &["kanto"],
        pokedexes: &["kanto"],
    },
    "colosseum" => VersionGroupInfo {
        name: "colosseum",
        generation: Generation::new(3),
        versions: &["colosseum"],
        regions: &[],
        pokedexes: &[],
    },
    "xd" => VersionGroupInfo {
        name: "xd",
        generation: Generation::new(3),
        versions: &["xd"],
        regions: &[],
        pokedexes: &[],
    },
    // --- Generation IV ---
    "diamond-pearl" => VersionGroupInfo {
        name: "diamond-pearl",
        generation: Generation::new(4),
        versions: &["diamond", "pearl"],
        regions: &["sinnoh"],
        pokedexes: &["original-sinnoh"],
    },
    "platinum" => VersionGroupInfo {
        name: "platinum",
        generation: Generation::new(4),
        versions: &["platinum"],
        regions: &["sinnoh"],
        pokedexes: &["extended-sinnoh"],
    },
    "heartgold-soulsilver" => VersionGroupInfo {
        name: "heartgold-soulsilver",
        generation: Generation::new(4),
        versions: &["heartgold", "soulsilver"],
        regions: &["johto", "kanto"],
        pokedexes: &["updated-johto"],
    },
    // --- Generation V ---
    "black-white" => VersionGroupInfo {
        name: "black-white",
        generation: Generation::new(5),
        versions: &["black", "white"],
        regions: &["unova"],
        pokedexes: &["original-unova"],
    },
    "black-2-white-2" => VersionGroupInfo {
        name: "black-2-white-2",
        generation: Generation::new(5),
        versions: &["black-2", "white-2"],
        regions: &["unova"],
        pokedexes: &["updated-unova"],
    },
    // --- Generation VI ---
    "x-y" => VersionGroupInfo {
        name: "x-y",
        generation: Generation::new(6),
        versions: &["x", "y"],
        regions: &["kalos"],
        pokedexes: &["kalos-central", "kalos-coastal", "kalos-mountain"],
    },
    "omega-ruby-alpha-sapphire" => VersionGroupInfo {
        name: "omega-ruby-alpha-sapphire",
        generation: Generation::new(6),
        versions: &["omega-ruby", "alpha-sapphire"],
        regions: &["hoenn"],
        pokedexes: &["updated-hoenn"],
    },
    // --- Generation VII ---
    "sun-moon" => VersionGroupInfo {
        name: "sun-moon",
        generation: Generation::new(7),
        versions: &["sun", "moon"],
        regions: &["alola"],
        pokedexes: &[
            "original-alola",
            "original-melemele",
            "original-akala",
            "original-ulaula",
            "original-poni",
        ],
    },
    "ultra-sun-ultra-moon" => VersionGroupInfo {
        name: "ultra-sun-ultra-moon",
        generation: Generation::new(7),
        versions: &["ultra-sun", "ultra-moon"],
        regions: &["alola"],
        pokedexes: &[
            "updated-alola",
            "updated-melemele",
            "updated-akala",
            "updated-ulaula",
            "updated-poni",
        ],
    },
    "lets-go-pikachu-lets-go-eevee" => VersionGroupInfo {
        name: "lets-go-pikachu-lets-go-eevee",
        generation: Generation::new(7),
        versions: &["lets-go-pikachu", "lets-go-eevee"],
        regions: &["kanto"],
        pokedexes: &["letsgo-kanto"],
    },
    // --- Generation VIII ---
    "sword-shield" => VersionGroupInfo {
        name: "sword-shield",
        generation: Generation::new(8),
        versions: &["sword", "shield"],
        regions: &["galar"],
        pokedexes: &["galar"],
    },
    "the-isle-of-armor" => VersionGroupInfo {
        name: "the-isle-of-armor",
        generation: Generation::new(8),
        versions: &["the-isle-of-armor"],
        regions: &["galar"],
        pokedexes: &["isle-of-armor"],
    },
    "the-crown-tundra" => VersionGroupInfo {
        name: "the-crown-tundra",
        generation: Generation::new(8),
        versions: &["the-crown-tundra"],
        regions: &["galar"],
        pokedexes: &["crown-tundra"],
    },
    "brilliant-diamond-and-shining-pearl" => VersionGroupInfo {
        name: "brilliant-diamond-and-shining-pearl",
        generation: Generation::new(8),
        versions: &["brilliant-diamond", "shining-pearl"],
        regions: &["sinnoh"],
        pokedexes: &["original-sinnoh"],
    },
    "legends-arceus" => VersionGroupInfo {
        name: "legends-arceus",
        generation: Generation::new(8),
        versions: &["legends-arceus"],
        regions: &["hisui"],
        pokedexes: &["hisui"],
    },
    // --- Generation IX ---
    "scarlet-violet" => VersionGroupInfo {
        name: "scarlet-violet",
        generation: Generation::new(9),
        versions: &["scarlet", "violet"],
        regions: &["paldea"],
        pokedexes: &["paldea"],
    },
    "the-teal-mask" => VersionGroupInfo {
        name: "the-teal-mask",
        generation: Generation::new(9),
        versions: &["the-teal-mask"],
        regions: &["kitakami"],
        pokedexes: &["kitakami"],
    },
    "the-indigo-disk" => VersionGroupInfo {
        name: "the-indigo-disk",
        generation: Generation::new(9),
        versions: &["the-indigo-disk"],
        regions: &["blueberry"],
        pokedexes: &["blueberry"],
    },
};

/// Look up a version group by its upstream identifier.
pub fn version_group(name: &str) -> Option<&'static VersionGroupInfo> {
    VERSION_GROUPS.get(name)
}

/// Every version group belonging to `generation`, in no particular order.
pub fn version_groups_in(
    generation: Generation,
) -> impl Iterator<Item = &'static VersionGroupInfo> {
    VERSION_GROUPS
        .values()
        .filter(move |info| info.generation == generation)
}
