//! Process configuration for the MTB data-intake core.
//!
//! A `clap::Parser` struct whose fields each carry an `env` attribute, so
//! every setting can come from either a flag or an environment variable.
//!
//! # Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `MTB_SITE_ID` | *(required)* | The local ZPM site identifier stamped onto uploaded patients |
//! | `MTB_STAGING_DB_PATH` | `mtb-staging.db` | SQLite path for the staging store |
//! | `MTB_QUERY_SERVICE_URL` | `http://localhost:8081` | Base URL of the downstream query service |
//! | `MTB_ICD10_DIR` | `catalogs/icd10gm` | Directory of `<year>.txt` ICD-10-GM releases |
//! | `MTB_ICD_O3_TOPOGRAPHY_DIR` | `catalogs/icdo3-topography` | Directory of `<year>.txt` ICD-O-3 topography releases |
//! | `MTB_ICD_O3_MORPHOLOGY_DIR` | `catalogs/icdo3-morphology` | Directory of `<year>.txt` ICD-O-3 morphology releases |
//! | `MTB_ATC_FILE` | `catalogs/atc.txt` | Newline-delimited ATC medication codes |
//! | `MTB_HGNC_FILE` | `catalogs/hgnc.txt` | Newline-delimited HGNC gene symbols |
//! | `MTB_LOG_LEVEL` | `info` | Log level |

use std::path::PathBuf;

use clap::Parser;

/// Process-level configuration: the local site identifier, supplied
/// out-of-band with no fallback, plus the conventional operational
/// configuration no runnable process can do without.
#[derive(Debug, Clone, Parser)]
#[command(name = "mtb-server", about = "MTB data-intake validation core")]
pub struct Config {
    /// The local ZPM site identifier stamped onto every uploaded patient's
    /// `managingZPM`. Required; there is no default.
    #[arg(long, env = "MTB_SITE_ID")]
    pub site_id: String,

    #[arg(long, env = "MTB_STAGING_DB_PATH", default_value = "mtb-staging.db")]
    pub staging_db_path: PathBuf,

    #[arg(long, env = "MTB_QUERY_SERVICE_URL", default_value = "http://localhost:8081")]
    pub query_service_url: String,

    #[arg(long, env = "MTB_ICD10_DIR", default_value = "catalogs/icd10gm")]
    pub icd10_dir: PathBuf,

    #[arg(long, env = "MTB_ICD_O3_TOPOGRAPHY_DIR", default_value = "catalogs/icdo3-topography")]
    pub icd_o3_topography_dir: PathBuf,

    #[arg(long, env = "MTB_ICD_O3_MORPHOLOGY_DIR", default_value = "catalogs/icdo3-morphology")]
    pub icd_o3_morphology_dir: PathBuf,

    #[arg(long, env = "MTB_ATC_FILE", default_value = "catalogs/atc.txt")]
    pub atc_file: PathBuf,

    #[arg(long, env = "MTB_HGNC_FILE", default_value = "catalogs/hgnc.txt")]
    pub hgnc_file: PathBuf,

    #[arg(long, env = "MTB_LOG_LEVEL", default_value = "info")]
    pub log_level: String,
}

impl Config {
    pub fn catalog_paths(&self) -> mtb_catalog::CatalogPaths<'_> {
        mtb_catalog::CatalogPaths {
            icd10_dir: &self.icd10_dir,
            icd_o3_topography_dir: &self.icd_o3_topography_dir,
            icd_o3_morphology_dir: &self.icd_o3_morphology_dir,
            atc_file: &self.atc_file,
            hgnc_file: &self.hgnc_file,
        }
    }
}
