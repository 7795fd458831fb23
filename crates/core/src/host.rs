//! Capability seams provided by the documentation host.
//!
//! The workflow never talks to the outside world directly; it reads and
//! writes form fields, raises dialogs and issues the plugin call through
//! these traits. Production implementations live in `maf-analyzer` (variant
//! source) and the CLI (form file, terminal dialogs); tests use in-memory
//! fakes.

use async_trait::async_trait;
use maf_types::VariantEnvelope;
use serde_json::Value;

/// Read and write access to the active form's field store.
pub trait FormFields {
    /// Returns the current value of a field, if set.
    fn field(&self, name: &str) -> Option<Value>;

    /// Writes a field value, replacing any previous value.
    fn set_field(&mut self, name: &str, value: Value);
}

/// Modal user dialogs.
#[async_trait]
pub trait Dialogs: Send + Sync {
    /// Shows a modal alert with a title and a message.
    async fn alert(&self, title: &str, message: &str);

    /// Asks a yes/no question; returns `true` when the user confirms.
    async fn confirm(&self, title: &str, message: &str) -> bool;
}

/// The `requestSimpleVariants` plugin method.
///
/// Implementations always answer with an envelope; transport failures are
/// reported as failure envelopes so the workflow has a single validation
/// path.
#[async_trait]
pub trait VariantSource: Send + Sync {
    /// Requests the simple variants for the given sample id.
    ///
    /// The id is passed raw; an implementation that puts it on a wire
    /// percent-encodes it exactly once at that point.
    async fn request_simple_variants(&self, sample_id: &str) -> VariantEnvelope;
}
