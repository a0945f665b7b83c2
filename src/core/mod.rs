//! Core analysis engine.
//!
//! Turns a unified diff of locale files into the list of translation keys
//! whose value really changed:
//!
//! 1. `segment`: split the diff into per-file segments for the locale file
//! 2. `lines` + `extract`: classify segment lines and pair added keys with
//!    their removed counterpart
//! 3. `classify`: compare old and new values character by character
//!    (`char_diff`) to drop no-op changes
//! 4. `report`: collect real changes per file and render them
//!
//! Everything here is pure and infallible: malformed input degrades to a
//! shorter report, never to an error.

pub mod char_diff;
pub mod classify;
pub mod extract;
pub mod lines;
pub mod report;
pub mod segment;

pub use char_diff::{CharOp, OpTag, diff_chars};
pub use classify::{Classification, ClassifiedKey, classify};
pub use extract::{Extraction, KeyCandidate, Side, UnparseableKey, extract_candidates};
pub use lines::{DiffLine, classify_lines};
pub use report::{Analysis, FileReport, Report, ReportBuilder, SkipReason, SkippedKey};
pub use segment::{DEFAULT_LOCALE_FILE, FileSegment, Segmenter, split_fragments};

/// Build the report for the default locale file.
///
/// # Example
///
/// ```
/// let diff = "diff --git a/app/Messages_fr_FR.json b/app/Messages_fr_FR.json
/// --- a/app/Messages_fr_FR.json
/// +++ b/app/Messages_fr_FR.json
/// @@ -2 +2 @@
/// -  \"hello\": \"Salut\",
/// +  \"hello\": \"Bonjour\",
/// ";
/// let report = transdiff::core::build_report(diff);
/// assert_eq!(report.render(), "- app/Messages_fr_FR.json:\n  - hello");
/// ```
pub fn build_report(raw: &str) -> Report {
    ReportBuilder::default().build(raw)
}
