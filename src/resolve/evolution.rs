use super::special_cases::SpecialCaseTable;
use super::trigger::{describe_trigger, TriggerDescription};
use crate::errors::{ResolveError, ResolveResult};
use crate::generation::{Generation, GenerationIndex};
use schema::{EvolutionDetail, EvolutionField, EvolutionNode, SpeciesRef};
use serde::Serialize;

/// How the trigger of an edge was chosen among its candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EdgeChoice {
    /// Only one candidate existed.
    Single,
    /// A curated rule picked the candidate carrying this field.
    SpecialCase(EvolutionField),
    /// Several candidates and no rule; the first one was used.
    DefaultFirst,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChainNode {
    pub species: SpeciesRef,
    /// Trigger in effect for the selected generation. `None` for roots,
    /// including nodes whose parent does not exist yet.
    pub detail: Option<EvolutionDetail>,
    pub choice: Option<EdgeChoice>,
    pub trigger: TriggerDescription,
    pub evolves_to: Vec<ChainNode>,
}

/// Evolution tree restricted to the species that exist in one generation.
///
/// Excluded species are dropped and their surviving descendants take their
/// place, so the result may have several roots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PrunedChain {
    pub generation: Generation,
    pub roots: Vec<ChainNode>,
}

impl PrunedChain {
    /// Species names in pre-order.
    pub fn species_names(&self) -> Vec<&str> {
        fn walk<'a>(node: &'a ChainNode, names: &mut Vec<&'a str>) {
            names.push(&node.species.name);
            for child in &node.evolves_to {
                walk(child, names);
            }
        }

        let mut names = Vec::new();
        for root in &self.roots {
            walk(root, &mut names);
        }
        names
    }

    pub fn find(&self, species: &str) -> Option<&ChainNode> {
        fn walk<'a>(node: &'a ChainNode, species: &str) -> Option<&'a ChainNode> {
            if node.species.name == species {
                return Some(node);
            }
            node.evolves_to.iter().find_map(|child| walk(child, species))
        }

        self.roots.iter().find_map(|root| walk(root, species))
    }
}

/// Prune `root` to the species present in `target` and pick one trigger
/// per surviving edge.
pub fn resolve_chain(
    root: Option<&EvolutionNode>,
    target: Generation,
    generations: &GenerationIndex,
    special_cases: &SpecialCaseTable,
) -> ResolveResult<PrunedChain> {
    let root = root.ok_or(ResolveError::MissingEvolutionRoot)?;
    let resolver = ChainResolver {
        target,
        generations,
        special_cases,
    };

    Ok(PrunedChain {
        generation: target,
        roots: resolver.prune(root, false),
    })
}

struct ChainResolver<'a> {
    target: Generation,
    generations: &'a GenerationIndex,
    special_cases: &'a SpecialCaseTable,
}

impl ChainResolver<'_> {
    fn prune(&self, node: &EvolutionNode, parent_included: bool) -> Vec<ChainNode> {
        let included = self
            .generations
            .contains(self.target, node.species.dex_number);

        let children: Vec<ChainNode> = node
            .evolves_to
            .iter()
            .flat_map(|child| self.prune(child, included))
            .collect();

        if !included {
            return children;
        }

        let (detail, choice) = if parent_included {
            match self.choose(node) {
                Some((detail, choice)) => (Some(detail.clone()), Some(choice)),
                None => (None, None),
            }
        } else {
            (None, None)
        };

        let trigger = detail.as_ref().map(describe_trigger).unwrap_or_default();

        vec![ChainNode {
            species: node.species.clone(),
            detail,
            choice,
            trigger,
            evolves_to: children,
        }]
    }

    fn choose<'n>(&self, node: &'n EvolutionNode) -> Option<(&'n EvolutionDetail, EdgeChoice)> {
        let candidates = &node.evolution_details;
        match candidates.as_slice() {
            [] => None,
            [only] => Some((only, EdgeChoice::Single)),
            [first, ..] => {
                let special = self
                    .special_cases
                    .rule_for(&node.species.name, self.target)
                    .and_then(|rule| Some((rule.select(candidates)?, rule.prefer)));

                match special {
                    Some((detail, field)) => {
                        tracing::debug!(
                            "{} in {}: special case picked the {:?} trigger",
                            node.species.name,
                            self.target,
                            field
                        );
                        Some((detail, EdgeChoice::SpecialCase(field)))
                    }
                    None => {
                        tracing::debug!(
                            "{} in {}: {} triggers, no rule applies, using the first",
                            node.species.name,
                            self.target,
                            candidates.len()
                        );
                        Some((first, EdgeChoice::DefaultFirst))
                    }
                }
            }
        }
    }
}
