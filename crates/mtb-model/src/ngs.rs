use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::coding::{Coding, Hgnc};
use crate::{PatientId, SomaticNgsReportId, SpecimenId, TumorCellContentId, VariantId};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SomaticNgsReport {
    pub id: SomaticNgsReportId,
    pub patient: PatientId,
    pub specimen: SpecimenId,
    pub issued_on: NaiveDate,
    /// Must resolve to a [`crate::TumorCellContent`] whose method is
    /// [`crate::TumorCellContentMethod::Bioinformatic`].
    pub tumor_cell_content: TumorCellContentId,
    /// Homologous-recombination deficiency score, in `[0.0, 1.0]`.
    pub brcaness: Option<f64>,
    /// Microsatellite instability score, in `[0.0, 2.0]`.
    pub msi: Option<f64>,
    /// Tumor mutational burden, in `[0.0, 1_000_000.0]`.
    pub tmb: f64,
    #[serde(default)]
    pub variants: NgsVariants,
}

/// The five variant-calling result lists a [`SomaticNgsReport`] carries.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NgsVariants {
    #[serde(default)]
    pub simple: Vec<SimpleVariant>,
    #[serde(default)]
    pub cnv: Vec<CnvVariant>,
    #[serde(default)]
    pub dna_fusion: Vec<DnaFusionVariant>,
    #[serde(default)]
    pub rna_fusion: Vec<RnaFusionVariant>,
    #[serde(default)]
    pub rna_seq: Vec<RnaSeqVariant>,
}

impl NgsVariants {
    /// Every variant id across all five result lists, used to resolve
    /// [`crate::TherapyRecommendation::supporting_variants`] references.
    pub fn all_ids(&self) -> impl Iterator<Item = &VariantId> {
        self.simple
            .iter()
            .map(|v| &v.id)
            .chain(self.cnv.iter().map(|v| &v.id))
            .chain(self.dna_fusion.iter().map(|v| &v.id))
            .chain(self.rna_fusion.iter().map(|v| &v.id))
            .chain(self.rna_seq.iter().map(|v| &v.id))
    }
}

/// A single-nucleotide or short indel variant call.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimpleVariant {
    pub id: VariantId,
    pub gene: Coding<Hgnc>,
    pub dna_change: Option<String>,
    pub amino_acid_change: Option<String>,
    pub allele_frequency: Option<f64>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CnvVariant {
    pub id: VariantId,
    #[serde(default)]
    pub affected_genes: Vec<Coding<Hgnc>>,
    pub cn_type: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DnaFusionVariant {
    pub id: VariantId,
    pub gene_5prime: Option<Coding<Hgnc>>,
    pub gene_3prime: Option<Coding<Hgnc>>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RnaFusionVariant {
    pub id: VariantId,
    pub gene_5prime: Option<Coding<Hgnc>>,
    pub gene_3prime: Option<Coding<Hgnc>>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RnaSeqVariant {
    pub id: VariantId,
    pub gene: Option<Coding<Hgnc>>,
    pub transcripts_per_million: Option<f64>,
}
