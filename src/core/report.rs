//! Aggregation of classified keys into the per-file report.

use std::fmt;

use super::classify::{Classification, classify};
use super::extract::{Side, extract_candidates};
use super::segment::{FileSegment, Segmenter, split_fragments};

/// Changed keys of one locale file, in first-seen order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    pub path: String,
    pub keys: Vec<String>,
}

/// Changed keys of every locale file, in diff order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    pub files: Vec<FileReport>,
}

impl Report {
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn key_count(&self) -> usize {
        self.files.iter().map(|file| file.keys.len()).sum()
    }

    /// Render as a two-level list:
    ///
    /// ```text
    /// - app/locales/Messages_fr_FR.json:
    ///   - greeting.hello
    /// ```
    ///
    /// Lines are separated by `\n` with no trailing newline. An empty report
    /// renders as an empty string.
    pub fn render(&self) -> String {
        let mut lines = Vec::with_capacity(self.files.len() + self.key_count());
        for file in &self.files {
            lines.push(format!("- {}:", file.path));
            lines.extend(file.keys.iter().map(|key| format!("  - {}", key)));
        }
        lines.join("\n")
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// Why a key found on an added line did not make it into the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Removed and re-added with identical text.
    Unchanged,
    /// The added value is not a single-line string.
    UnparseableAdded,
    /// The matching removed value is not a single-line string.
    UnparseableRemoved,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::Unchanged => write!(f, "value unchanged"),
            SkipReason::UnparseableAdded => write!(f, "added value is not a single-line string"),
            SkipReason::UnparseableRemoved => {
                write!(f, "removed value is not a single-line string")
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedKey {
    pub path: String,
    pub key: String,
    pub reason: SkipReason,
}

/// A report together with what was left out while building it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Analysis {
    pub report: Report,
    /// Non-blank per-file blocks in the diff.
    pub fragment_count: usize,
    /// Blocks dropped because they do not target the locale file.
    pub dropped_fragment_count: usize,
    pub skipped: Vec<SkippedKey>,
}

/// Builds reports for one locale file name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportBuilder {
    segmenter: Segmenter,
}

impl ReportBuilder {
    pub fn new(locale_file: impl Into<String>) -> Self {
        Self {
            segmenter: Segmenter::new(locale_file),
        }
    }

    pub fn locale_file(&self) -> &str {
        self.segmenter.locale_file()
    }

    pub fn build(&self, raw: &str) -> Report {
        self.analyze(raw).report
    }

    pub fn analyze(&self, raw: &str) -> Analysis {
        let mut analysis = Analysis::default();

        for fragment in split_fragments(raw) {
            analysis.fragment_count += 1;
            let Some(segment) = self.segmenter.segment_fragment(fragment) else {
                analysis.dropped_fragment_count += 1;
                continue;
            };
            if let Some(file) = report_segment(&segment, &mut analysis.skipped) {
                analysis.report.files.push(file);
            }
        }

        analysis
    }
}

/// Build a report from already segmented input.
pub fn build(segments: &[FileSegment]) -> Report {
    let mut skipped = Vec::new();
    Report {
        files: segments
            .iter()
            .filter_map(|segment| report_segment(segment, &mut skipped))
            .collect(),
    }
}

fn report_segment(segment: &FileSegment, skipped: &mut Vec<SkippedKey>) -> Option<FileReport> {
    let extraction = extract_candidates(segment);

    skipped.extend(extraction.unparseable.into_iter().map(|key| SkippedKey {
        path: segment.path.clone(),
        key: key.key,
        reason: match key.side {
            Side::Added => SkipReason::UnparseableAdded,
            Side::Removed => SkipReason::UnparseableRemoved,
        },
    }));

    let mut keys = Vec::new();
    for classified in extraction.candidates.into_iter().map(classify) {
        match classified.classification {
            Classification::Real => keys.push(classified.candidate.key),
            Classification::Noop => skipped.push(SkippedKey {
                path: segment.path.clone(),
                key: classified.candidate.key,
                reason: SkipReason::Unchanged,
            }),
        }
    }

    (!keys.is_empty()).then(|| FileReport {
        path: segment.path.clone(),
        keys,
    })
}
