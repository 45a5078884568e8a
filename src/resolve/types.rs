use crate::errors::{ResolveError, ResolveResult};
use crate::generation::Generation;
use schema::{PokemonType, TypeRecord};
use serde::Serialize;

/// Which upstream record set the resolved types came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TypeBand {
    Current,
    Past,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedTypes {
    pub band: TypeBand,
    /// Ordered by slot.
    pub types: Vec<TypeRecord>,
}

impl ResolvedTypes {
    pub fn pokemon_types(&self) -> Vec<PokemonType> {
        self.types.iter().map(|record| record.pokemon_type).collect()
    }
}

/// Pick the type set in effect for `target`.
///
/// Past records carry the last generation they applied in, current records
/// the generation they took effect. Past wins while the target is still
/// inside the past band or before every current type existed; otherwise
/// current wins. An empty set always yields to the other one.
pub fn resolve_types(
    current: &[TypeRecord],
    past: &[TypeRecord],
    target: Generation,
) -> ResolveResult<ResolvedTypes> {
    let band = match (current.is_empty(), past.is_empty()) {
        (true, true) => return Err(ResolveError::NoTypeRecords),
        (false, true) => TypeBand::Current,
        (true, false) => TypeBand::Past,
        (false, false) => {
            let target = target.ordinal();
            let max_past = past.iter().map(TypeRecord::generation).max().unwrap_or(0);
            let min_present = current
                .iter()
                .map(TypeRecord::generation)
                .min()
                .unwrap_or(u8::MAX);

            if target <= max_past || target < min_present {
                TypeBand::Past
            } else {
                TypeBand::Current
            }
        }
    };

    let mut types = match band {
        TypeBand::Current => current.to_vec(),
        TypeBand::Past => past.to_vec(),
    };
    types.sort_by_key(|record| record.slot);

    Ok(ResolvedTypes { band, types })
}
