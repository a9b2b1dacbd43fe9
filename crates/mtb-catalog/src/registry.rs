use std::collections::{BTreeMap, BTreeSet, HashSet};

use crate::error::CatalogLoadError;
use crate::version::CatalogVersion;

/// Read-only access to the four code systems entity validators check codes
/// against. Implementations are expected to load once at process
/// startup and then answer lookups purely in memory -- the kernel built on
/// top of this trait (`mtb-validation`) assumes lookups never block or fail.
pub trait CatalogRegistry: Send + Sync {
    /// Versions of the ICD-10-GM catalog this registry has loaded.
    fn icd10_versions(&self) -> &BTreeSet<CatalogVersion>;

    /// ICD-10-GM codes valid under `version`, or `None` if that version was
    /// never loaded.
    fn icd10_codes(&self, version: CatalogVersion) -> Option<&HashSet<String>>;

    /// Versions of the ICD-O-3 catalog this registry has loaded.
    fn icd_o3_versions(&self) -> &BTreeSet<CatalogVersion>;

    /// ICD-O-3 topography (`-T`) codes valid under `version`.
    fn icd_o3_topography_codes(&self, version: CatalogVersion) -> Option<&HashSet<String>>;

    /// ICD-O-3 morphology (`-M`) codes valid under `version`.
    fn icd_o3_morphology_codes(&self, version: CatalogVersion) -> Option<&HashSet<String>>;

    /// All valid ATC medication codes. ATC is not a versioned catalog.
    fn atc_codes(&self) -> &HashSet<String>;

    /// Whether `symbol` is a recognized HGNC gene symbol.
    fn hgnc_has_symbol(&self, symbol: &str) -> bool;
}

/// An in-memory [`CatalogRegistry`] built from already-loaded code sets.
///
/// Loading from a file, embedded resource, or network call is deliberately
/// out of scope here: callers populate an [`InMemoryCatalogRegistry`]
/// with [`CatalogRegistryBuilder`] after reading their code lists from
/// whatever source they prefer.
#[derive(Debug, Default)]
pub struct InMemoryCatalogRegistry {
    icd10: BTreeMap<CatalogVersion, HashSet<String>>,
    icd_o3_topography: BTreeMap<CatalogVersion, HashSet<String>>,
    icd_o3_morphology: BTreeMap<CatalogVersion, HashSet<String>>,
    icd10_versions: BTreeSet<CatalogVersion>,
    icd_o3_versions: BTreeSet<CatalogVersion>,
    atc: HashSet<String>,
    hgnc: HashSet<String>,
}

impl CatalogRegistry for InMemoryCatalogRegistry {
    fn icd10_versions(&self) -> &BTreeSet<CatalogVersion> {
        &self.icd10_versions
    }

    fn icd10_codes(&self, version: CatalogVersion) -> Option<&HashSet<String>> {
        self.icd10.get(&version)
    }

    fn icd_o3_versions(&self) -> &BTreeSet<CatalogVersion> {
        &self.icd_o3_versions
    }

    fn icd_o3_topography_codes(&self, version: CatalogVersion) -> Option<&HashSet<String>> {
        self.icd_o3_topography.get(&version)
    }

    fn icd_o3_morphology_codes(&self, version: CatalogVersion) -> Option<&HashSet<String>> {
        self.icd_o3_morphology.get(&version)
    }

    fn atc_codes(&self) -> &HashSet<String> {
        &self.atc
    }

    fn hgnc_has_symbol(&self, symbol: &str) -> bool {
        self.hgnc.contains(symbol)
    }
}

/// Builds an [`InMemoryCatalogRegistry`] from in-memory code lists, failing
/// fast if a required catalog was never populated.
#[derive(Debug, Default)]
pub struct CatalogRegistryBuilder {
    registry: InMemoryCatalogRegistry,
}

impl CatalogRegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_icd10(mut self, version: CatalogVersion, codes: impl IntoIterator<Item = String>) -> Self {
        self.registry.icd10_versions.insert(version);
        self.registry.icd10.insert(version, codes.into_iter().collect());
        self
    }

    pub fn with_icd_o3_topography(
        mut self,
        version: CatalogVersion,
        codes: impl IntoIterator<Item = String>,
    ) -> Self {
        self.registry.icd_o3_versions.insert(version);
        self.registry
            .icd_o3_topography
            .insert(version, codes.into_iter().collect());
        self
    }

    pub fn with_icd_o3_morphology(
        mut self,
        version: CatalogVersion,
        codes: impl IntoIterator<Item = String>,
    ) -> Self {
        self.registry.icd_o3_versions.insert(version);
        self.registry
            .icd_o3_morphology
            .insert(version, codes.into_iter().collect());
        self
    }

    pub fn with_atc(mut self, codes: impl IntoIterator<Item = String>) -> Self {
        self.registry.atc = codes.into_iter().collect();
        self
    }

    pub fn with_hgnc(mut self, symbols: impl IntoIterator<Item = String>) -> Self {
        self.registry.hgnc = symbols.into_iter().collect();
        self
    }

    /// Validates that every catalog has at least one entry, then returns the
    /// registry. An empty catalog at startup almost certainly means a
    /// loading bug rather than a genuinely empty terminology.
    pub fn build(self) -> Result<InMemoryCatalogRegistry, CatalogLoadError> {
        if self.registry.icd10.is_empty() {
            return Err(CatalogLoadError::Empty("icd10gm"));
        }
        if self.registry.icd_o3_topography.is_empty() {
            return Err(CatalogLoadError::Empty("icdo3t"));
        }
        if self.registry.icd_o3_morphology.is_empty() {
            return Err(CatalogLoadError::Empty("icdo3m"));
        }
        if self.registry.atc.is_empty() {
            return Err(CatalogLoadError::Empty("atc"));
        }
        if self.registry.hgnc.is_empty() {
            return Err(CatalogLoadError::Empty("hgnc"));
        }
        Ok(self.registry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_registry() -> InMemoryCatalogRegistry {
        CatalogRegistryBuilder::new()
            .with_icd10(CatalogVersion::new(2024), ["C34.9".to_string(), "C50.9".to_string()])
            .with_icd_o3_topography(CatalogVersion::new(2024), ["T34.0".to_string()])
            .with_icd_o3_morphology(CatalogVersion::new(2024), ["M8140/3".to_string()])
            .with_atc(["L01XE01".to_string()])
            .with_hgnc(["BRAF".to_string(), "EGFR".to_string()])
            .build()
            .unwrap()
    }

    #[test]
    fn looks_up_known_codes() {
        let registry = sample_registry();
        let v = CatalogVersion::new(2024);
        assert!(registry.icd10_codes(v).unwrap().contains("C34.9"));
        assert!(!registry.icd10_codes(v).unwrap().contains("Z99.9"));
        assert!(registry.hgnc_has_symbol("BRAF"));
        assert!(!registry.hgnc_has_symbol("NOPE"));
    }

    #[test]
    fn unknown_version_is_none_not_empty_set() {
        let registry = sample_registry();
        assert!(registry.icd10_codes(CatalogVersion::new(1999)).is_none());
    }

    #[test]
    fn build_fails_on_missing_catalog() {
        let err = CatalogRegistryBuilder::new()
            .with_icd10(CatalogVersion::new(2024), ["C34.9".to_string()])
            .build();
        assert!(err.is_err());
    }
}
