//! Joining fragments and boolean composition.

use crate::fragment::{Fragment, FragmentBuilder};
use std::sync::OnceLock;

/// Whether `text` contains `and`/`or` as a whitespace-delimited word
/// (case-insensitive).
///
/// This is a textual check, not a parse: it also fires for `between ? and ?`
/// and for conditions that are already bracketed, which only costs an extra
/// pair of parentheses. `and_flag` (no surrounding whitespace) does not match.
pub fn has_and_or(text: &str) -> bool {
    static AND_OR_RE: OnceLock<regex::Regex> = OnceLock::new();
    AND_OR_RE
        .get_or_init(|| regex::Regex::new(r"(?i)\s(and|or)\s").expect("invalid built-in and/or regex"))
        .is_match(text)
}

/// `(inner)`; the empty fragment stays empty.
pub fn round_bracket(inner: Fragment) -> Fragment {
    if inner.is_empty() {
        return inner;
    }
    let mut b = FragmentBuilder::new();
    b.push("(").push_owned(inner).push(")");
    b.finish()
}

fn bracket_if_and_or(part: Fragment) -> Fragment {
    if has_and_or(part.text()) {
        round_bracket(part)
    } else {
        part
    }
}

fn join_parts(
    parts: impl IntoIterator<Item = Fragment>,
    delimiter: &Fragment,
    space_before_delimiter: bool,
) -> Fragment {
    let mut b = FragmentBuilder::new();
    let mut first = true;
    for part in parts.into_iter().filter(Fragment::non_empty) {
        if !first {
            if space_before_delimiter {
                b.push(" ");
            }
            b.push_fragment(delimiter).space();
        }
        b.push_owned(part);
        first = false;
    }
    b.finish()
}

/// Join non-empty `parts` with `delimiter`, one space on each side.
///
/// Empty parts are skipped, so optional pieces leave no dangling delimiter.
/// The delimiter's own parameters are repeated at every occurrence.
pub fn join(parts: impl IntoIterator<Item = Fragment>, delimiter: &Fragment) -> Fragment {
    join_parts(parts, delimiter, true)
}

/// Comma-separated list: `a, b, c`.
pub fn csv(parts: impl IntoIterator<Item = Fragment>) -> Fragment {
    join_parts(parts, &Fragment::keyword(","), false)
}

/// Join with `and`, bracketing parts that contain `and`/`or`.
pub fn join_with_and(parts: impl IntoIterator<Item = Fragment>) -> Fragment {
    join(parts.into_iter().map(bracket_if_and_or), &Fragment::keyword("and"))
}

/// Join with `or`, bracketing parts that contain `and`/`or`.
pub fn join_with_or(parts: impl IntoIterator<Item = Fragment>) -> Fragment {
    join(parts.into_iter().map(bracket_if_and_or), &Fragment::keyword("or"))
}

fn present(conditions: impl IntoIterator<Item = Option<Fragment>>) -> Option<Vec<Fragment>> {
    let present: Vec<Fragment> = conditions
        .into_iter()
        .flatten()
        .filter(Fragment::non_empty)
        .collect();
    (!present.is_empty()).then_some(present)
}

/// `and`-join the present, non-empty conditions; `None` if there are none.
pub fn to_and_condition_opt(
    conditions: impl IntoIterator<Item = Option<Fragment>>,
) -> Option<Fragment> {
    present(conditions).map(join_with_and)
}

/// `or`-join the present, non-empty conditions; `None` if there are none.
pub fn to_or_condition_opt(
    conditions: impl IntoIterator<Item = Option<Fragment>>,
) -> Option<Fragment> {
    present(conditions).map(join_with_or)
}

impl Fragment {
    /// Append the bare `and` keyword; the caller appends the right-hand side.
    pub fn and(self) -> Fragment {
        self.append(Fragment::keyword("and"))
    }

    /// Append the bare `or` keyword.
    pub fn or(self) -> Fragment {
        self.append(Fragment::keyword("or"))
    }

    /// `self and condition`, bracketing either side that contains `and`/`or`,
    /// so `a or b` followed by `and_with(c)` reads `(a or b) and c`.
    ///
    /// Both sides are conditions; use [`where_clause`](Self::where_clause) to
    /// attach the result to a statement. An empty side is dropped together
    /// with the keyword.
    pub fn and_with(self, condition: Fragment) -> Fragment {
        if condition.is_empty() {
            return self;
        }
        if self.is_empty() {
            return condition;
        }
        join_with_and([self, condition])
    }

    /// `self or condition`, bracketing either side that contains `and`/`or`.
    pub fn or_with(self, condition: Fragment) -> Fragment {
        if condition.is_empty() {
            return self;
        }
        if self.is_empty() {
            return condition;
        }
        join_with_or([self, condition])
    }

    /// [`and_with`](Self::and_with) when present, otherwise `self`.
    pub fn and_opt(self, condition: Option<Fragment>) -> Fragment {
        match condition {
            Some(c) => self.and_with(c),
            None => self,
        }
    }

    /// [`or_with`](Self::or_with) when present, otherwise `self`.
    pub fn or_opt(self, condition: Option<Fragment>) -> Fragment {
        match condition {
            Some(c) => self.or_with(c),
            None => self,
        }
    }
}
