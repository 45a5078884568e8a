use crate::catalog::CARRY_FORWARD_VERSION_GROUP;
use schema::{LearnMethod, LevelGate, MoveLearnEntry};
use serde::Serialize;

/// A learn entry together with the level gate it should be shown with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoveRow {
    #[serde(flatten)]
    pub entry: MoveLearnEntry,
    pub gate: LevelGate,
}

impl From<MoveLearnEntry> for MoveRow {
    fn from(entry: MoveLearnEntry) -> Self {
        let gate = entry.level_gate();
        Self { entry, gate }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoveGroup {
    pub method: LearnMethod,
    pub entries: Vec<MoveRow>,
}

/// Learnable moves of one variety for one version group, grouped by method
/// in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoveSet {
    pub version_group: String,
    pub groups: Vec<MoveGroup>,
}

impl MoveSet {
    pub fn group(&self, method: &LearnMethod) -> Option<&MoveGroup> {
        self.groups.iter().find(|group| &group.method == method)
    }

    pub fn methods(&self) -> Vec<&LearnMethod> {
        self.groups.iter().map(|group| &group.method).collect()
    }

    /// Total number of entries across all groups.
    pub fn len(&self) -> usize {
        self.groups.iter().map(|group| group.entries.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

/// Keep the entries valid in `version_group`, plus every entry of the
/// carry-forward version group. Input order is preserved.
pub fn filter_for_version_group(
    entries: &[MoveLearnEntry],
    version_group: &str,
) -> Vec<MoveLearnEntry> {
    entries
        .iter()
        .filter(|entry| {
            entry.version_group == version_group
                || entry.version_group == CARRY_FORWARD_VERSION_GROUP
        })
        .cloned()
        .collect()
}

/// Filter, group and order a cross-version moveset for `version_group`.
///
/// Groups follow level-up, machine, tutor, egg, the stadium legacy method,
/// other known methods, then unknown ones; ties keep first-seen order.
/// Machine moves are ordered by machine id, every other group keeps the
/// upstream order. Levels 0 and 1 come out as [`LevelGate::Ungated`].
pub fn resolve_move_set(entries: &[MoveLearnEntry], version_group: &str) -> MoveSet {
    let mut groups: Vec<MoveGroup> = Vec::new();

    for entry in filter_for_version_group(entries, version_group) {
        let row = MoveRow::from(entry);
        match groups.iter_mut().find(|group| group.method == row.entry.method) {
            Some(group) => group.entries.push(row),
            None => groups.push(MoveGroup {
                method: row.entry.method.clone(),
                entries: vec![row],
            }),
        }
    }

    groups.sort_by_key(|group| group.method.display_priority());

    if let Some(machines) = groups
        .iter_mut()
        .find(|group| group.method == LearnMethod::Machine)
    {
        // Entries without a machine id go last.
        machines
            .entries
            .sort_by_key(|row| (row.entry.machine.is_none(), row.entry.machine));
    }

    MoveSet {
        version_group: version_group.to_string(),
        groups,
    }
}
