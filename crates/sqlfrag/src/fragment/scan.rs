//! Placeholder marker scanning.
//!
//! A marker is a `?` outside of single-quoted string literals and
//! double-quoted identifiers. Doubled quotes (`''`, `""`) inside a quoted run
//! toggle the state twice and therefore need no special casing.
//!
//! Postgres jsonb operators spelled with `?` (`?`, `?|`, `?&`) are counted as
//! markers; use the equivalent functions (`jsonb_exists`, ...) instead.

pub(crate) const MARKER: char = '?';

/// Byte offsets of every marker in `sql`, left to right.
pub(crate) fn marker_offsets(sql: &str) -> Vec<usize> {
    let mut offsets = Vec::new();
    let mut in_literal = false;
    let mut in_ident = false;
    for (i, b) in sql.bytes().enumerate() {
        match b {
            b'\'' if !in_ident => in_literal = !in_literal,
            b'"' if !in_literal => in_ident = !in_ident,
            b'?' if !in_literal && !in_ident => offsets.push(i),
            _ => {}
        }
    }
    offsets
}

pub(crate) fn marker_count(sql: &str) -> usize {
    marker_offsets(sql).len()
}
