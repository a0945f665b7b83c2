//! Key extraction from the added and removed lines of a segment.
//!
//! A key declaration is a JSON member on a single line: `"<key>": "<value>"`.
//! Values are captured raw, up to the next unescaped quote, without decoding
//! escape sequences. Values that are not single-line strings (objects, arrays,
//! numbers, strings split over several lines) cannot be captured and make the
//! key unparseable.

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use regex::Regex;

use super::lines::classify_lines;
use super::segment::FileSegment;

/// `"<key>"`, optional whitespace, `:`, then the rest of the line.
static KEY_DECLARATION_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"^\s*"((?:[^"\\]|\\.)+)"\s*:\s*(.*)$"#).unwrap());

/// A quoted string at the start of the text, stopping at the first unescaped quote.
static STRING_VALUE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"^"((?:[^"\\]|\\.)*)""#).unwrap());

/// A key found on an added line, with its new value and, if the key was also
/// removed in the same segment, its prior value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyCandidate {
    pub key: String,
    pub added_value: String,
    pub removed_value: Option<String>,
}

/// Side of the diff on which a value could not be captured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Added,
    Removed,
}

/// A key left out of the report because one of its values could not be captured.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnparseableKey {
    pub key: String,
    pub side: Side,
}

/// Everything extracted from one segment, in first-appearance order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extraction {
    pub candidates: Vec<KeyCandidate>,
    pub unparseable: Vec<UnparseableKey>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct KeyDeclaration<'a> {
    key: &'a str,
    value: Option<&'a str>,
}

fn parse_declaration(content: &str) -> Option<KeyDeclaration<'_>> {
    let captures = KEY_DECLARATION_REGEX.captures(content)?;
    let key = captures.get(1)?.as_str();
    let rest = captures.get(2).map_or("", |m| m.as_str());
    let value = STRING_VALUE_REGEX
        .captures(rest)
        .and_then(|value| value.get(1))
        .map(|value| value.as_str());
    Some(KeyDeclaration { key, value })
}

/// Collect the keys declared on added lines of `segment`.
///
/// When a key is added more than once only the first occurrence counts; its
/// prior value is taken from the first removed line declaring the same key.
pub fn extract_candidates(segment: &FileSegment) -> Extraction {
    let lines = classify_lines(&segment.body);

    let mut removed: HashMap<&str, Option<&str>> = HashMap::new();
    for declaration in lines
        .iter()
        .filter_map(|line| line.removed())
        .filter_map(parse_declaration)
    {
        removed.entry(declaration.key).or_insert(declaration.value);
    }

    let mut seen: HashSet<&str> = HashSet::new();
    let mut extraction = Extraction::default();

    for declaration in lines
        .iter()
        .filter_map(|line| line.added())
        .filter_map(parse_declaration)
    {
        if !seen.insert(declaration.key) {
            continue;
        }

        let Some(added_value) = declaration.value else {
            extraction.unparseable.push(UnparseableKey {
                key: declaration.key.to_string(),
                side: Side::Added,
            });
            continue;
        };

        let removed_value = match removed.get(declaration.key) {
            None => None,
            Some(Some(value)) => Some(value.to_string()),
            Some(None) => {
                extraction.unparseable.push(UnparseableKey {
                    key: declaration.key.to_string(),
                    side: Side::Removed,
                });
                continue;
            }
        };

        extraction.candidates.push(KeyCandidate {
            key: declaration.key.to_string(),
            added_value: added_value.to_string(),
            removed_value,
        });
    }

    extraction
}
