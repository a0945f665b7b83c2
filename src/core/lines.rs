//! Line classification for one file segment of a unified diff.

const HUNK_MARKER: &str = "@@";

/// A classified line of a segment, with its diff marker stripped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiffLine<'a> {
    /// Block header (`diff --git`, `index`, `---`, `+++`, mode lines).
    Header(&'a str),
    /// `@@ -a,b +c,d @@` line opening a hunk.
    HunkHeader(&'a str),
    Added(&'a str),
    Removed(&'a str),
    Context(&'a str),
}

impl<'a> DiffLine<'a> {
    pub fn added(&self) -> Option<&'a str> {
        match *self {
            DiffLine::Added(content) => Some(content),
            _ => None,
        }
    }

    pub fn removed(&self) -> Option<&'a str> {
        match *self {
            DiffLine::Removed(content) => Some(content),
            _ => None,
        }
    }
}

/// Classify every line of `body`.
///
/// Everything before the first hunk header is header text, so the `---` and
/// `+++` file lines are never mistaken for removals or additions.
pub fn classify_lines(body: &str) -> Vec<DiffLine<'_>> {
    let mut in_hunk = false;

    body.lines()
        .map(|line| {
            if line.starts_with(HUNK_MARKER) {
                in_hunk = true;
                return DiffLine::HunkHeader(line);
            }
            if !in_hunk {
                return DiffLine::Header(line);
            }
            if let Some(content) = line.strip_prefix('+') {
                DiffLine::Added(content)
            } else if let Some(content) = line.strip_prefix('-') {
                DiffLine::Removed(content)
            } else if let Some(content) = line.strip_prefix(' ') {
                DiffLine::Context(content)
            } else {
                // `\ No newline at end of file` and stray lines
                DiffLine::Context(line)
            }
        })
        .collect()
}
