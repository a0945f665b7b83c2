//! Splitting a unified diff into per-file segments.

/// Locale file name used when none is configured.
pub const DEFAULT_LOCALE_FILE: &str = "Messages_fr_FR.json";

/// Line prefix that opens each per-file block (`diff --git a/... b/...`).
const FILE_MARKER: &str = "diff ";
/// Line prefix naming the file on the new side of the diff.
const NEW_FILE_MARKER: &str = "+++ ";
const NEW_FILE_PREFIX: &str = "b/";
const HUNK_MARKER: &str = "@@";

/// One file's part of a unified diff.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSegment {
    /// Path of the file on the new side, without the `b/` prefix.
    pub path: String,
    /// Raw text of the whole block, header included.
    pub body: String,
}

/// Splits diffs into segments for a single locale file name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segmenter {
    locale_file: String,
}

impl Default for Segmenter {
    fn default() -> Self {
        Self::new(DEFAULT_LOCALE_FILE)
    }
}

impl Segmenter {
    pub fn new(locale_file: impl Into<String>) -> Self {
        Self {
            locale_file: locale_file.into(),
        }
    }

    pub fn locale_file(&self) -> &str {
        &self.locale_file
    }

    /// Split `raw` into segments, keeping only blocks whose new-side path is
    /// the locale file.
    pub fn segment(&self, raw: &str) -> Vec<FileSegment> {
        split_fragments(raw)
            .into_iter()
            .filter_map(|fragment| self.segment_fragment(fragment))
            .collect()
    }

    /// Turn one fragment into a segment, or `None` if its target path is
    /// missing or names another file.
    pub fn segment_fragment(&self, fragment: &str) -> Option<FileSegment> {
        let path = self.target_path(fragment)?;
        Some(FileSegment {
            path: path.to_string(),
            body: fragment.to_string(),
        })
    }

    /// Whether `path` names the locale file, either bare or below a directory.
    pub fn matches(&self, path: &str) -> bool {
        path.strip_suffix(self.locale_file.as_str())
            .is_some_and(|dir| dir.is_empty() || dir.ends_with('/'))
    }

    fn target_path<'a>(&self, fragment: &'a str) -> Option<&'a str> {
        // Only the first `+++` line of the header counts; hunk content may
        // legitimately contain lines starting with `+++`.
        let target = fragment
            .lines()
            .take_while(|line| !line.starts_with(HUNK_MARKER))
            .find_map(|line| line.strip_prefix(NEW_FILE_MARKER))?;

        // Plain `diff -u` and `hg diff` append a tab and a timestamp.
        let target = target.split('\t').next().unwrap_or(target);
        let path = target.trim_end().strip_prefix(NEW_FILE_PREFIX)?;
        self.matches(path).then_some(path)
    }
}

/// Split `raw` at every line opening a per-file block.
///
/// Whitespace-only fragments (typically the text before the first block)
/// are skipped.
pub fn split_fragments(raw: &str) -> Vec<&str> {
    let mut fragments = Vec::new();
    let mut start = 0;
    let mut offset = 0;

    for line in raw.split_inclusive('\n') {
        if line.starts_with(FILE_MARKER) && offset > start {
            fragments.push(&raw[start..offset]);
            start = offset;
        }
        offset += line.len();
    }
    if start < raw.len() {
        fragments.push(&raw[start..]);
    }

    fragments.retain(|fragment| !fragment.trim().is_empty());
    fragments
}
