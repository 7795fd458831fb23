//! Field names, marker codes and dialog texts used by the workflow.

/// Form field holding the submission number used as sample id.
pub const FIELD_SAMPLE_ID: &str = "Einsendenummer";

/// Form field for the documentation level marker.
pub const FIELD_DOCUMENTATION: &str = "Dokumentation";

/// Form field holding the comma-separated analysis method codes.
pub const FIELD_ANALYSIS_METHODS: &str = "AnalyseMethoden";

/// Form field holding the molecular genetic examination records.
pub const FIELD_MOLECULAR_EXAMINATION: &str = "MolekulargenetischeUntersuchung";

/// Marker written to the documentation field: extended documentation.
pub const DOCUMENTATION_EXTENDED: &str = "ERW";

/// Analysis method code for sequencing.
pub const METHOD_SEQUENCING: &str = "S";

/// Result code marking a record as a simple variant.
pub const RESULT_SIMPLE: &str = "P";

/// Title used for modal alerts and the overwrite confirmation.
pub const DIALOG_TITLE: &str = "Achtung";

/// Question asked before overwriting pre-existing simple variants.
pub const CONFIRM_OVERWRITE: &str = "Overwrite existing simple variants?";

/// Message shown when the analyzer returned no simple variants.
pub const MSG_NO_VARIANTS: &str = "No simple variants found. Update aborted.";

/// Message shown when the analyzer reported a failure without detail.
pub const MSG_REQUEST_FAILED: &str = "Error requesting simple variants!";
