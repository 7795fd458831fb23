//! The variant import workflow.
//!
//! Both entry points read the submission number, issue exactly one plugin
//! call and, after successful validation, perform the three field writes as a
//! unit: documentation marker, analysis method set, examination records.
//!
//! [`run_replace`] replaces the examination field outright. [`run_confirmed`]
//! first partitions the pre-existing records by result code, asks for
//! confirmation when simple variants would be overwritten, and writes the
//! fetched records followed by the untouched non-simple remainder.
//!
//! A failed invocation performs no field writes and is never retried; the
//! user has to trigger the import again.

use crate::constants::{
    CONFIRM_OVERWRITE, DIALOG_TITLE, DOCUMENTATION_EXTENDED, FIELD_ANALYSIS_METHODS,
    FIELD_DOCUMENTATION, FIELD_MOLECULAR_EXAMINATION, FIELD_SAMPLE_ID, METHOD_SEQUENCING,
    MSG_NO_VARIANTS, MSG_REQUEST_FAILED, RESULT_SIMPLE,
};
use crate::host::{Dialogs, FormFields, VariantSource};
use crate::{methods, ImportError, ImportResult};
use maf_types::{SampleId, SimpleVariant, VariantEnvelope};
use serde_json::Value;

/// How an invocation ended when it did not fail.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ImportOutcome {
    /// Variants were written into the form.
    Imported {
        /// Number of freshly fetched records written.
        imported: usize,
        /// Number of pre-existing non-simple records kept.
        retained: usize,
    },
    /// The user declined the overwrite confirmation; nothing was changed.
    Declined,
}

/// Splits pre-existing examination records into simple variants and the rest.
///
/// A record counts as simple when `Ergebnis.val` equals `"P"`. Records are
/// handled as raw values so the retained remainder is written back untouched.
/// A missing or non-list field value yields two empty partitions.
pub fn partition_existing(existing: Option<&Value>) -> (Vec<Value>, Vec<Value>) {
    let mut simple = Vec::new();
    let mut others = Vec::new();
    if let Some(Value::Array(records)) = existing {
        for record in records {
            if is_simple_record(record) {
                simple.push(record.clone());
            } else {
                others.push(record.clone());
            }
        }
    }
    (simple, others)
}

fn is_simple_record(record: &Value) -> bool {
    record
        .get("Ergebnis")
        .and_then(|e| e.get("val"))
        .and_then(Value::as_str)
        == Some(RESULT_SIMPLE)
}

fn read_sample_id<F: FormFields>(form: &F) -> ImportResult<SampleId> {
    let value = form.field(FIELD_SAMPLE_ID);
    let raw = value.as_ref().and_then(Value::as_str).unwrap_or_default();
    SampleId::new(raw).map_err(|_| ImportError::MissingSampleId)
}

/// Performs the three field writes as a unit.
///
/// The merged examination list is assembled first so that nothing is written
/// when serialization fails.
fn apply_field_updates<F: FormFields>(
    form: &mut F,
    variants: &[SimpleVariant],
    retained: &[Value],
) -> ImportResult<()> {
    let mut merged = Vec::with_capacity(variants.len() + retained.len());
    for variant in variants {
        merged.push(serde_json::to_value(variant).map_err(ImportError::Serialization)?);
    }
    merged.extend(retained.iter().cloned());

    form.set_field(
        FIELD_DOCUMENTATION,
        Value::String(DOCUMENTATION_EXTENDED.to_owned()),
    );

    let current_methods = form
        .field(FIELD_ANALYSIS_METHODS)
        .and_then(|v| v.as_str().map(str::to_owned))
        .unwrap_or_default();
    form.set_field(
        FIELD_ANALYSIS_METHODS,
        Value::String(methods::with_method(&current_methods, METHOD_SEQUENCING)),
    );

    form.set_field(FIELD_MOLECULAR_EXAMINATION, Value::Array(merged));
    Ok(())
}

/// Imports simple variants, replacing the examination field entirely.
///
/// Remote failures are logged as warnings; no dialog is raised in this
/// variant.
pub async fn run_replace<F, S>(form: &mut F, source: &S) -> ImportResult<ImportOutcome>
where
    F: FormFields,
    S: VariantSource + ?Sized,
{
    let sample_id = read_sample_id(form)?;

    let response = source.request_simple_variants(sample_id.as_str()).await;
    if let Some(code) = response.failure_code() {
        tracing::warn!(code, "error requesting simple variants");
        return Err(remote_error(&response, code));
    }

    let imported = response.result.len();
    apply_field_updates(form, &response.result, &[])?;
    tracing::debug!(imported, "replaced examination records");
    Ok(ImportOutcome::Imported {
        imported,
        retained: 0,
    })
}

/// Imports simple variants, merging with pre-existing non-simple records.
///
/// When the form already holds simple variants the user is asked before the
/// request is issued; answering no terminates the invocation without side
/// effects. Failure envelopes and empty results abort with a modal alert.
pub async fn run_confirmed<F, S, D>(
    form: &mut F,
    source: &S,
    dialogs: &D,
) -> ImportResult<ImportOutcome>
where
    F: FormFields,
    S: VariantSource + ?Sized,
    D: Dialogs + ?Sized,
{
    let sample_id = read_sample_id(form)?;

    let existing = form.field(FIELD_MOLECULAR_EXAMINATION);
    let (existing_simple, retained) = partition_existing(existing.as_ref());

    if !existing_simple.is_empty() && !dialogs.confirm(DIALOG_TITLE, CONFIRM_OVERWRITE).await {
        return Ok(ImportOutcome::Declined);
    }

    let response = source.request_simple_variants(sample_id.as_str()).await;
    if let Some(code) = response.failure_code() {
        let message = match response.status_message() {
            Some(detail) => format!("Error requesting simple variants: {detail}"),
            None => MSG_REQUEST_FAILED.to_owned(),
        };
        dialogs.alert(DIALOG_TITLE, &message).await;
        return Err(remote_error(&response, code));
    }
    if response.result.is_empty() {
        dialogs.alert(DIALOG_TITLE, MSG_NO_VARIANTS).await;
        return Err(ImportError::NoVariants);
    }

    let imported = response.result.len();
    apply_field_updates(form, &response.result, &retained)?;
    tracing::debug!(
        imported,
        retained = retained.len(),
        "merged examination records"
    );
    Ok(ImportOutcome::Imported {
        imported,
        retained: retained.len(),
    })
}

fn remote_error(response: &VariantEnvelope, code: i64) -> ImportError {
    ImportError::Remote {
        code,
        message: response.status_message().map(str::to_owned),
    }
}
