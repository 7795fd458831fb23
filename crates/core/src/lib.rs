//! # MAF Core
//!
//! Core logic for the variant import workflow: fetching simple genetic
//! variants for the current sample from the analyzer backend and writing them
//! into the molecular genetics documentation form.
//!
//! This crate contains pure workflow logic against host capability seams:
//! - [`host::FormFields`] for reading and writing form field values
//! - [`host::Dialogs`] for modal alerts and the overwrite confirmation
//! - [`host::VariantSource`] for the asynchronous plugin call
//!
//! **No transport concerns**: HTTP clients and servers live in `maf-analyzer`
//! and the `maf-run` binary.

pub mod constants;
pub mod host;
pub mod methods;
pub mod workflow;

pub use host::{Dialogs, FormFields, VariantSource};
pub use workflow::{run_confirmed, run_replace, ImportOutcome};

#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error("no sample id present in field 'Einsendenummer'")]
    MissingSampleId,
    #[error("requesting simple variants failed (status code {code})")]
    Remote { code: i64, message: Option<String> },
    #[error("no simple variants found")]
    NoVariants,
    #[error("failed to serialize variant record: {0}")]
    Serialization(serde_json::Error),
}

pub type ImportResult<T> = std::result::Result<T, ImportError>;
