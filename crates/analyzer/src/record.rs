//! Upstream MAF row wire model and translation into form records.
//!
//! The MAF repository answers with rows in Mutation Annotation Format
//! vocabulary (hugoSymbol, hgvsc, tdepth, ...). [`MafRecord::to_simple_variant`]
//! translates a row into the attribute set the molecular genetics form
//! expects, attaching catalogue versions to the coded values. Missing
//! upstream values become empty strings in the form.

use crate::catalogue::{
    CatalogueLookup, CAT_FUSION_CHROMOSOME, CAT_MOLECULAR_GENETICS, CAT_MOL_DOCUMENTATION,
    CAT_MOL_RESULT,
};
use maf_types::{CodedValue, SimpleVariant};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One variant row as served by the MAF repository.
///
/// All members are optional on the wire; translation applies empty-string
/// defaults.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MafRecord {
    pub tumor_sample_barcode: Option<String>,
    pub hugo_symbol: Option<String>,
    pub chromosome: Option<String>,
    pub gene: Option<String>,
    pub start_position: Option<i64>,
    pub end_position: Option<i64>,
    pub reference_allele: Option<String>,
    pub tumor_seq_allele2: Option<String>,
    pub hgvsc: Option<String>,
    pub hgvsp: Option<String>,
    pub exon: Option<String>,
    pub tdepth: Option<i64>,
    pub db_snp_rs: Option<String>,
    pub panel: Option<String>,
    pub allelic_frequency: Option<f64>,
    pub cosmic_id: Option<String>,
    pub interpretation: Option<String>,
    pub hgnc_id: Option<String>,
    pub gene_name: Option<String>,
    pub nm_number: Option<String>,
}

impl MafRecord {
    /// Translates this row into a form-shaped variant record.
    ///
    /// The documentation level is fixed to `"ERW"` and the result code to
    /// `"P"` (simple variant); chromosome and examined gene come from the
    /// row. Every coded value carries the version of its property catalogue.
    pub fn to_simple_variant(&self, catalogue: &dyn CatalogueLookup) -> SimpleVariant {
        let mut extra = serde_json::Map::new();
        extra.insert("cDNANomenklatur".into(), or_empty(&self.hgvsc));
        extra.insert("ProteinebeneNomenklatur".into(), or_empty(&self.hgvsp));
        extra.insert("ExonInt".into(), or_empty(&self.exon));
        extra.insert("EVENSEMBLID".into(), or_empty(&self.gene));
        extra.insert("EVHGNCID".into(), or_empty(&self.hgnc_id));
        extra.insert("EVHGNCSymbol".into(), or_empty(&self.hugo_symbol));
        extra.insert("EVHGNCName".into(), or_empty(&self.gene_name));
        extra.insert("EVStart".into(), number_or_empty(self.start_position));
        extra.insert("EVEnde".into(), number_or_empty(self.end_position));
        extra.insert("EVAltNucleotide".into(), or_empty(&self.tumor_seq_allele2));
        extra.insert("EVRefNucleotide".into(), or_empty(&self.reference_allele));
        extra.insert("EVNMNummer".into(), or_empty(&self.nm_number));
        extra.insert("Coverage".into(), number_or_empty(self.tdepth));
        extra.insert(
            "Allelfrequenz".into(),
            Value::String(
                self.allelic_frequency
                    .map(format_allelic_frequency)
                    .unwrap_or_default(),
            ),
        );
        extra.insert("EVdbSNPID".into(), or_empty(&self.db_snp_rs));
        extra.insert("ExonText".into(), or_empty(&self.exon));

        SimpleVariant {
            documentation: CodedValue::new("ERW", catalogue.version_of(CAT_MOL_DOCUMENTATION)),
            result: CodedValue::new("P", catalogue.version_of(CAT_MOL_RESULT)),
            chromosome: CodedValue::new(
                self.chromosome.clone().unwrap_or_default(),
                catalogue.version_of(CAT_FUSION_CHROMOSOME),
            ),
            examined: CodedValue::new(
                self.hugo_symbol.clone().unwrap_or_default(),
                catalogue.version_of(CAT_MOLECULAR_GENETICS),
            ),
            extra,
        }
    }
}

/// Formats an allelic frequency fraction as a percentage with three decimals
/// and a German decimal comma, e.g. `0.4531` becomes `"45,310"`.
pub fn format_allelic_frequency(fraction: f64) -> String {
    format!("{:.3}", fraction * 100.0).replace('.', ",")
}

fn or_empty(value: &Option<String>) -> Value {
    Value::String(value.clone().unwrap_or_default())
}

fn number_or_empty(value: Option<i64>) -> Value {
    Value::String(value.map(|v| v.to_string()).unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalogue::StaticCatalogue;
    use serde_json::json;
    use std::collections::HashMap;

    fn catalogue() -> StaticCatalogue {
        StaticCatalogue::new(HashMap::from([
            (CAT_MOL_DOCUMENTATION.to_owned(), 1_i64),
            (CAT_MOL_RESULT.to_owned(), 2_i64),
            (CAT_FUSION_CHROMOSOME.to_owned(), 3_i64),
            (CAT_MOLECULAR_GENETICS.to_owned(), 4_i64),
        ]))
    }

    #[test]
    fn decodes_camel_case_rows() {
        let record: MafRecord = serde_json::from_value(json!({
            "hugoSymbol": "BRAF",
            "chromosome": "7",
            "startPosition": 140453136,
            "allelicFrequency": 0.4531,
            "dbSnpRs": "rs113488022"
        }))
        .expect("decode row");

        assert_eq!(record.hugo_symbol.as_deref(), Some("BRAF"));
        assert_eq!(record.start_position, Some(140453136));
        assert_eq!(record.db_snp_rs.as_deref(), Some("rs113488022"));
    }

    #[test]
    fn maps_row_to_form_record() {
        let record = MafRecord {
            hugo_symbol: Some("BRAF".into()),
            chromosome: Some("7".into()),
            gene: Some("ENSG00000157764".into()),
            start_position: Some(140453136),
            end_position: Some(140453136),
            reference_allele: Some("A".into()),
            tumor_seq_allele2: Some("T".into()),
            hgvsc: Some("c.1799T>A".into()),
            hgvsp: Some("p.V600E".into()),
            exon: Some("15".into()),
            tdepth: Some(812),
            db_snp_rs: Some("rs113488022".into()),
            allelic_frequency: Some(0.4531),
            hgnc_id: Some("HGNC:1097".into()),
            gene_name: Some("B-Raf proto-oncogene".into()),
            nm_number: Some("NM_004333".into()),
            ..MafRecord::default()
        };

        let variant = record.to_simple_variant(&catalogue());
        let out = serde_json::to_value(&variant).expect("encode variant");

        assert_eq!(out["Dokumentation"], json!({"val": "ERW", "version": 1}));
        assert_eq!(out["Ergebnis"], json!({"val": "P", "version": 2}));
        assert_eq!(out["EVChromosom"], json!({"val": "7", "version": 3}));
        assert_eq!(out["Untersucht"], json!({"val": "BRAF", "version": 4}));
        assert_eq!(out["cDNANomenklatur"], json!("c.1799T>A"));
        assert_eq!(out["ProteinebeneNomenklatur"], json!("p.V600E"));
        assert_eq!(out["EVStart"], json!("140453136"));
        assert_eq!(out["Coverage"], json!("812"));
        assert_eq!(out["Allelfrequenz"], json!("45,310"));
        assert_eq!(out["EVdbSNPID"], json!("rs113488022"));
        assert_eq!(out["ExonInt"], json!("15"));
        assert_eq!(out["ExonText"], json!("15"));
    }

    #[test]
    fn missing_upstream_values_become_empty_strings() {
        let variant = MafRecord::default().to_simple_variant(&StaticCatalogue::default());
        let out = serde_json::to_value(&variant).expect("encode variant");

        assert_eq!(out["Untersucht"], json!({"val": "", "version": 0}));
        assert_eq!(out["EVStart"], json!(""));
        assert_eq!(out["Allelfrequenz"], json!(""));
        assert_eq!(out["EVNMNummer"], json!(""));
    }

    #[test]
    fn allelic_frequency_uses_german_decimal_comma() {
        assert_eq!(format_allelic_frequency(0.4531), "45,310");
        assert_eq!(format_allelic_frequency(1.0), "100,000");
        assert_eq!(format_allelic_frequency(0.0005), "0,050");
    }
}
