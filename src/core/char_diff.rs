//! Character-level diff between two strings.
//!
//! Produces a minimal edit script (Myers, via `similar`) where consecutive
//! operations of the same kind are merged into one substring.

use std::time::{Duration, Instant};

use similar::{Algorithm, DiffOp, capture_diff_slices_deadline};

/// Time allowed for the minimal search. Past it the script is still valid
/// but may not be minimal.
const DIFF_DEADLINE: Duration = Duration::from_millis(500);

/// Kind of a single edit operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpTag {
    Equal,
    Insert,
    Delete,
}

/// One operation of an edit script, paired with the text it covers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharOp {
    pub tag: OpTag,
    pub text: String,
}

impl CharOp {
    pub fn is_equal(&self) -> bool {
        self.tag == OpTag::Equal
    }
}

/// Compute the edit script turning `a` into `b`.
///
/// Concatenating the `Equal` and `Delete` texts in order yields `a`;
/// concatenating the `Equal` and `Insert` texts yields `b`. Two equal
/// non-empty strings produce exactly one `Equal` operation, two empty
/// strings produce none.
pub fn diff_chars(a: &str, b: &str) -> Vec<CharOp> {
    let old: Vec<char> = a.chars().collect();
    let new: Vec<char> = b.chars().collect();

    let mut ops = Vec::new();
    let deadline = Instant::now() + DIFF_DEADLINE;
    for op in capture_diff_slices_deadline(Algorithm::Myers, &old, &new, Some(deadline)) {
        match op {
            DiffOp::Equal { old_index, len, .. } => {
                push_op(&mut ops, OpTag::Equal, &old[old_index..old_index + len]);
            }
            DiffOp::Delete {
                old_index, old_len, ..
            } => {
                push_op(&mut ops, OpTag::Delete, &old[old_index..old_index + old_len]);
            }
            DiffOp::Insert {
                new_index, new_len, ..
            } => {
                push_op(&mut ops, OpTag::Insert, &new[new_index..new_index + new_len]);
            }
            DiffOp::Replace {
                old_index,
                old_len,
                new_index,
                new_len,
            } => {
                push_op(&mut ops, OpTag::Delete, &old[old_index..old_index + old_len]);
                push_op(&mut ops, OpTag::Insert, &new[new_index..new_index + new_len]);
            }
        }
    }
    ops
}

fn push_op(ops: &mut Vec<CharOp>, tag: OpTag, chars: &[char]) {
    if chars.is_empty() {
        return;
    }
    match ops.last_mut() {
        Some(last) if last.tag == tag => last.text.extend(chars),
        _ => ops.push(CharOp {
            tag,
            text: chars.iter().collect(),
        }),
    }
}
