//! Wire models shared between the variant import workflow and the analyzer
//! backend.
//!
//! The shapes here mirror what the documentation host passes between form
//! scripts and plugin methods: a response envelope with a status block and an
//! ordered list of variant records. Records keep unknown attributes intact,
//! while the four coded sub-attributes are strict and drop anything beyond
//! `val` and `version`.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Status code signalling a successful plugin response.
pub const STATUS_OK: i64 = 1;

/// Status code used for failure envelopes produced on this side.
pub const STATUS_FAILED: i64 = 0;

/// Errors that can occur when creating a [`SampleId`].
#[derive(Debug, thiserror::Error)]
pub enum SampleIdError {
    /// The input was empty or contained only whitespace
    #[error("sample id cannot be empty")]
    Empty,
}

/// A non-empty sample identifier as read from the submission number field.
///
/// The input is trimmed during construction; an empty or whitespace-only value
/// is rejected. The identifier is held raw; whichever transport carries it
/// percent-encodes it exactly once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleId(String);

impl SampleId {
    /// Creates a new `SampleId` from the given input.
    ///
    /// # Returns
    ///
    /// Returns `Ok(SampleId)` if the trimmed input is non-empty,
    /// or `Err(SampleIdError::Empty)` otherwise.
    pub fn new(input: impl AsRef<str>) -> Result<Self, SampleIdError> {
        let trimmed = input.as_ref().trim();
        if trimmed.is_empty() {
            return Err(SampleIdError::Empty);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the identifier as entered.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SampleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The `{val, version}` projection of a coded form value.
///
/// Deserializing a raw sub-attribute through this type keeps only the
/// classification code and the catalogue version; every other raw member is
/// dropped. Absent members are omitted again on serialization.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CodedValue {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub val: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<Value>,
}

impl CodedValue {
    /// Creates a coded value from a code and a catalogue version.
    pub fn new(val: impl Into<Value>, version: impl Into<Value>) -> Self {
        Self {
            val: Some(val.into()),
            version: Some(version.into()),
        }
    }

}

/// One genetic variant record in form shape.
///
/// The four designated attributes are coded values; all remaining attributes
/// of the record pass through unchanged via the flattened map.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SimpleVariant {
    #[serde(rename = "Dokumentation", default)]
    pub documentation: CodedValue,
    #[serde(rename = "EVChromosom", default)]
    pub chromosome: CodedValue,
    #[serde(rename = "Ergebnis", default)]
    pub result: CodedValue,
    #[serde(rename = "Untersucht", default)]
    pub examined: CodedValue,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

/// Status block of a plugin response envelope.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ResponseStatus {
    pub code: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Response envelope returned by the `requestSimpleVariants` plugin method.
///
/// A missing status block does not signal failure; only a status whose code
/// differs from [`STATUS_OK`] does.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct VariantEnvelope {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ResponseStatus>,
    #[serde(default)]
    pub result: Vec<SimpleVariant>,
}

impl VariantEnvelope {
    /// Wraps fetched records in a success envelope.
    pub fn success(result: Vec<SimpleVariant>) -> Self {
        Self {
            status: Some(ResponseStatus {
                code: STATUS_OK,
                message: None,
            }),
            result,
        }
    }

    /// Builds a failure envelope carrying a user-presentable message.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            status: Some(ResponseStatus {
                code: STATUS_FAILED,
                message: Some(message.into()),
            }),
            result: Vec::new(),
        }
    }

    /// Returns the status code when the envelope signals failure.
    pub fn failure_code(&self) -> Option<i64> {
        match &self.status {
            Some(status) if status.code != STATUS_OK => Some(status.code),
            _ => None,
        }
    }

    /// Returns the status message, if any.
    pub fn status_message(&self) -> Option<&str> {
        self.status.as_ref().and_then(|s| s.message.as_deref())
    }
}
