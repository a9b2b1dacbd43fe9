//! A newline-delimited-file loader for [`crate::InMemoryCatalogRegistry`].
//!
//! Loading strategy is explicitly an external concern: this module is one
//! concrete choice among several (file, embedded resource, network) a
//! deployment could make. Each code list is one file, one code per
//! non-empty, non-`#`-prefixed line; ICD-10-GM and ICD-O-3 are versioned, so
//! their directories hold one file per release year, named `<year>.txt`.

use std::fs;
use std::path::Path;

use crate::error::CatalogLoadError;
use crate::registry::{CatalogRegistryBuilder, InMemoryCatalogRegistry};
use crate::version::CatalogVersion;

/// Where each code-system's source files live on disk.
pub struct CatalogPaths<'a> {
    /// Directory containing one `<year>.txt` file per ICD-10-GM release.
    pub icd10_dir: &'a Path,
    /// Directory containing one `<year>.txt` file per ICD-O-3 topography release.
    pub icd_o3_topography_dir: &'a Path,
    /// Directory containing one `<year>.txt` file per ICD-O-3 morphology release.
    pub icd_o3_morphology_dir: &'a Path,
    /// A single newline-delimited file of ATC medication codes.
    pub atc_file: &'a Path,
    /// A single newline-delimited file of HGNC gene symbols.
    pub hgnc_file: &'a Path,
}

/// Loads a complete [`InMemoryCatalogRegistry`] from `paths`, failing fast
/// if any required catalog is missing, malformed, or empty.
pub fn load_registry(paths: &CatalogPaths) -> Result<InMemoryCatalogRegistry, CatalogLoadError> {
    let mut builder = CatalogRegistryBuilder::new();

    for (version, codes) in load_versioned_dir(paths.icd10_dir, "icd10gm")? {
        builder = builder.with_icd10(version, codes);
    }
    for (version, codes) in load_versioned_dir(paths.icd_o3_topography_dir, "icdo3t")? {
        builder = builder.with_icd_o3_topography(version, codes);
    }
    for (version, codes) in load_versioned_dir(paths.icd_o3_morphology_dir, "icdo3m")? {
        builder = builder.with_icd_o3_morphology(version, codes);
    }
    builder = builder.with_atc(load_code_file(paths.atc_file, "atc")?);
    builder = builder.with_hgnc(load_code_file(paths.hgnc_file, "hgnc")?);

    builder.build()
}

fn load_versioned_dir(dir: &Path, catalog: &'static str) -> Result<Vec<(CatalogVersion, Vec<String>)>, CatalogLoadError> {
    let entries = fs::read_dir(dir).map_err(|e| CatalogLoadError::Source(format!("{}: {e}", dir.display())))?;

    let mut loaded = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| CatalogLoadError::Source(format!("{}: {e}", dir.display())))?;
        let path = entry.path();
        if path.extension().and_then(|e| e.to_str()) != Some("txt") {
            continue;
        }
        let stem = path
            .file_stem()
            .and_then(|s| s.to_str())
            .ok_or_else(|| CatalogLoadError::Malformed { catalog, line: path.display().to_string() })?;
        let version: CatalogVersion = stem
            .parse()
            .map_err(|_| CatalogLoadError::Malformed { catalog, line: format!("non-year filename: {stem}") })?;
        let codes = load_code_file(&path, catalog)?;
        loaded.push((version, codes));
    }
    Ok(loaded)
}

fn load_code_file(path: &Path, catalog: &'static str) -> Result<Vec<String>, CatalogLoadError> {
    let contents = fs::read_to_string(path).map_err(|e| CatalogLoadError::Source(format!("{}: {e}", path.display())))?;
    Ok(contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect())
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicU32, Ordering};

    use super::*;

    static COUNTER: AtomicU32 = AtomicU32::new(0);

    fn tempdir() -> std::path::PathBuf {
        let n = COUNTER.fetch_add(1, Ordering::Relaxed);
        let dir = std::env::temp_dir().join(format!("mtb-catalog-test-{}-{n}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn loads_a_versioned_directory() {
        let dir = tempdir();
        fs::write(dir.join("2024.txt"), "C34.9\nC50.9\n# comment\n\n").unwrap();

        let loaded = load_versioned_dir(&dir, "icd10gm").unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].0, CatalogVersion::new(2024));
        assert_eq!(loaded[0].1, vec!["C34.9".to_string(), "C50.9".to_string()]);

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn rejects_non_year_filenames() {
        let dir = tempdir();
        fs::write(dir.join("latest.txt"), "X\n").unwrap();

        assert!(load_versioned_dir(&dir, "icd10gm").is_err());
        fs::remove_dir_all(&dir).unwrap();
    }
}
