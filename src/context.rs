use crate::catalog::{self, VersionGroupInfo};
use crate::errors::{ResolveError, ResolveResult};
use crate::generation::{Generation, GenerationIndex};
use serde::Serialize;

/// Everything a resolver may know about the selected game version.
///
/// Passed explicitly to every call; nothing reads a "current version" from
/// shared state.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ViewContext {
    pub version_group: String,
    /// A single release inside the group, when the caller picked one.
    pub version: Option<String>,
    pub generation: Generation,
    /// Region used for regional-form matching.
    pub region: Option<String>,
}

impl ViewContext {
    pub fn new(version_group: &str, generation: Generation) -> Self {
        Self {
            version_group: version_group.to_string(),
            version: None,
            generation,
            region: None,
        }
    }

    pub fn with_version(mut self, version: &str) -> Self {
        self.version = Some(version.to_string());
        self
    }

    pub fn with_region(mut self, region: &str) -> Self {
        self.region = Some(region.to_string());
        self
    }

    /// Derive generation and region from the catalog entry of `version_group`.
    pub fn for_version_group(
        version_group: &str,
        version: Option<&str>,
        generations: &GenerationIndex,
    ) -> ResolveResult<Self> {
        let info = catalog::version_group(version_group)
            .ok_or_else(|| ResolveError::UnknownVersionGroup(version_group.to_string()))?;

        if let Some(version) = version {
            if !info.has_version(version) {
                return Err(ResolveError::VersionNotInGroup {
                    version: version.to_string(),
                    version_group: version_group.to_string(),
                });
            }
        }

        Ok(Self {
            version_group: info.name.to_string(),
            version: version.map(str::to_string),
            generation: generations.clamp(i64::from(info.generation.ordinal())),
            region: info.primary_region().map(str::to_string),
        })
    }

    pub fn version_group_info(&self) -> Option<&'static VersionGroupInfo> {
        catalog::version_group(&self.version_group)
    }

    /// Release used for per-version data like flavor text: the chosen
    /// version, or the first one of the group.
    pub fn effective_version(&self) -> Option<&str> {
        self.version.as_deref().or_else(|| {
            self.version_group_info()
                .and_then(|info| info.versions.first().copied())
        })
    }
}
