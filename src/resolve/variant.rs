use crate::errors::{ResolveError, ResolveResult};
use schema::{Species, Variety};

/// How a regional variety was matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchSource {
    /// The variety's explicit region tag equals the region.
    RegionTag,
    /// The region name appears in the variety name.
    NameSubstring,
}

/// A regional variety picked for the selected region.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VariantMatch<'a> {
    pub variety: &'a Variety,
    pub source: MatchSource,
    /// Other non-default varieties that matched just as well and lost the
    /// tie-break on list order.
    pub tied_with: usize,
}

/// Select the regional variety for `region_name`, if any.
///
/// Explicit region tags win; otherwise the first non-default variety whose
/// name contains the region (case-insensitive) is used. `None` means the
/// caller should stay on the default variety.
pub fn resolve_variant<'a>(
    varieties: &'a [Variety],
    region_name: &str,
) -> Option<VariantMatch<'a>> {
    let region = region_name.trim().to_ascii_lowercase();
    if region.is_empty() {
        return None;
    }

    let alternates = || varieties.iter().filter(|variety| !variety.is_default);

    let tagged: Vec<&Variety> = alternates()
        .filter(|variety| {
            variety
                .region
                .as_deref()
                .is_some_and(|tag| tag.eq_ignore_ascii_case(&region))
        })
        .collect();

    let (candidates, source) = if tagged.is_empty() {
        let by_name: Vec<&Variety> = alternates()
            .filter(|variety| variety.name.to_ascii_lowercase().contains(&region))
            .collect();
        (by_name, MatchSource::NameSubstring)
    } else {
        (tagged, MatchSource::RegionTag)
    };

    let (&variety, rest) = candidates.split_first()?;
    if !rest.is_empty() {
        tracing::debug!(
            "Region '{}' matched {} varieties, using '{}' by list order (also matched: {:?})",
            region,
            candidates.len(),
            variety.name,
            rest.iter().map(|v| v.name.as_str()).collect::<Vec<_>>()
        );
    }

    Some(VariantMatch {
        variety,
        source,
        tied_with: rest.len(),
    })
}

/// The species' default variety.
pub fn default_variety(species: &Species) -> ResolveResult<&Variety> {
    if species.varieties.is_empty() {
        return Err(ResolveError::NoVarieties(species.name.clone()));
    }

    species
        .varieties
        .iter()
        .find(|variety| variety.is_default)
        .ok_or_else(|| ResolveError::NoDefaultVariety(species.name.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use schema::{DexNumber, PokemonType, TypeRecord};

    fn variety(id: i64, name: &str, is_default: bool) -> Variety {
        Variety {
            id: DexNumber::new(id).unwrap(),
            name: name.to_string(),
            is_default,
            region: None,
            types: vec![TypeRecord::new(PokemonType::Fire, 1)],
            past_types: Vec::new(),
            moves: Vec::new(),
            height: 6,
            weight: 99,
        }
    }

    fn vulpix_forms() -> Vec<Variety> {
        vec![
            variety(37, "vulpix", true),
            variety(10103, "vulpix-alola", false),
        ]
    }

    #[rstest]
    #[case("alola", Some("vulpix-alola"))]
    #[case("ALOLA", Some("vulpix-alola"))]
    #[case("galar", None)]
    #[case("", None)]
    #[case("   ", None)]
    fn test_region_substring_match(#[case] region: &str, #[case] expected: Option<&str>) {
        let forms = vulpix_forms();
        let picked = resolve_variant(&forms, region).map(|m| m.variety.name.as_str());
        assert_eq!(picked, expected);
    }

    #[test]
    fn test_default_variety_is_never_returned() {
        // "vulpix" contains "vulpix", but the default form must be skipped.
        let forms = vulpix_forms();
        let picked = resolve_variant(&forms, "vulpix").unwrap();
        assert_eq!(picked.variety.name, "vulpix-alola");
        assert!(resolve_variant(&[], "alola").is_none());
    }

    #[test]
    fn test_same_region_tie_goes_to_first_listed() {
        let forms = vec![
            variety(555, "darmanitan-standard", true),
            variety(10017, "darmanitan-zen", false),
            variety(10177, "darmanitan-galar-standard", false),
            variety(10178, "darmanitan-galar-zen", false),
        ];
        let picked = resolve_variant(&forms, "galar").unwrap();
        assert_eq!(picked.variety.name, "darmanitan-galar-standard");
        assert_eq!(picked.source, MatchSource::NameSubstring);
        assert_eq!(picked.tied_with, 1);
    }

    #[test]
    fn test_region_tag_beats_name_substring() {
        let mut tagged = variety(10250, "tauros-paldea-combat-breed", false);
        tagged.region = Some("paldea".to_string());
        let forms = vec![
            variety(128, "tauros", true),
            variety(10999, "tauros-paldea-legacy", false),
            tagged,
        ];
        let picked = resolve_variant(&forms, "paldea").unwrap();
        assert_eq!(picked.variety.name, "tauros-paldea-combat-breed");
        assert_eq!(picked.source, MatchSource::RegionTag);
        assert_eq!(picked.tied_with, 0);
    }

    #[test]
    fn test_default_variety_errors() {
        let mut species = Species {
            dex_number: DexNumber::new(37).unwrap(),
            name: "vulpix".to_string(),
            varieties: Vec::new(),
            evolution_chain_id: None,
            flavor_text: Vec::new(),
            pokedex_numbers: Vec::new(),
        };
        assert_eq!(
            default_variety(&species),
            Err(ResolveError::NoVarieties("vulpix".to_string()))
        );

        species.varieties = vec![variety(10103, "vulpix-alola", false)];
        assert_eq!(
            default_variety(&species),
            Err(ResolveError::NoDefaultVariety("vulpix".to_string()))
        );

        species.varieties = vulpix_forms();
        assert_eq!(default_variety(&species).unwrap().name, "vulpix");
    }
}
