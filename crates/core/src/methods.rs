//! Analysis method set handling.
//!
//! The `AnalyseMethoden` field stores method codes as a comma-separated
//! string. Updates treat it as a set: codes are trimmed, duplicates are
//! collapsed and first-seen order is preserved.

/// Returns the method string with `code` guaranteed to be present.
///
/// Splits `existing` on commas, trims each code, drops empty entries and
/// duplicates, appends `code` when absent and joins the result with `", "`.
pub fn with_method(existing: &str, code: &str) -> String {
    let mut codes: Vec<&str> = Vec::new();
    for part in existing.split(',') {
        let part = part.trim();
        if !part.is_empty() && !codes.contains(&part) {
            codes.push(part);
        }
    }
    if !codes.contains(&code) {
        codes.push(code);
    }
    codes.join(", ")
}
