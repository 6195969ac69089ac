//! Comparison and membership predicates.
//!
//! Operators are rendered lower-case. The column is taken as a fragment and
//! inlined unchanged; values are always bound.

use crate::error::{SqlError, SqlResult};
use crate::fragment::{Fragment, FragmentBuilder};
use crate::value::Value;

/// Text used when an `in` list is empty: nothing can match.
const EMPTY_IN: &str = "1=0";
/// Text used when a `not in` list is empty: everything matches.
const EMPTY_NOT_IN: &str = "1=1";

fn compare(column: &Fragment, op: &str, value: Value) -> Fragment {
    let mut b = FragmentBuilder::new();
    b.push_fragment(column).space().push(op).push(" ").push_bind(value);
    b.finish()
}

fn postfix(column: &Fragment, op: &str) -> Fragment {
    let mut b = FragmentBuilder::new();
    b.push_fragment(column).space().push(op);
    b.finish()
}

fn range(column: &Fragment, negated: bool, from: Value, to: Value) -> Fragment {
    let op = if negated { "not between " } else { "between " };
    let mut b = FragmentBuilder::new();
    b.push_fragment(column)
        .space()
        .push(op)
        .push_bind(from)
        .push(" and ")
        .push_bind(to);
    b.finish()
}

fn membership(column: &Fragment, negated: bool, values: Vec<Value>) -> Fragment {
    if values.is_empty() {
        return Fragment::keyword(if negated { EMPTY_NOT_IN } else { EMPTY_IN });
    }
    let op = if negated { "not in (" } else { "in (" };
    let mut b = FragmentBuilder::new();
    b.push_fragment(column).space().push(op).push_bind_list(values).push(")");
    b.finish()
}

fn subquery(column: Option<&Fragment>, op: &str, sub: Fragment) -> Fragment {
    let mut b = FragmentBuilder::new();
    if let Some(column) = column {
        b.push_fragment(column).space();
    }
    b.push(op).push(" (").push_owned(sub).push(")");
    b.finish()
}

impl Fragment {
    /// `column = ?`; a `NULL` value renders `column is null` instead.
    pub fn eq(self, column: &Fragment, value: impl Into<Value>) -> Fragment {
        let value = value.into();
        if value.is_null() {
            return self.is_null(column);
        }
        self.append(compare(column, "=", value))
    }

    /// `column <> ?`; a `NULL` value renders `column is not null` instead.
    pub fn ne(self, column: &Fragment, value: impl Into<Value>) -> Fragment {
        let value = value.into();
        if value.is_null() {
            return self.is_not_null(column);
        }
        self.append(compare(column, "<>", value))
    }

    pub fn gt(self, column: &Fragment, value: impl Into<Value>) -> Fragment {
        self.append(compare(column, ">", value.into()))
    }

    pub fn ge(self, column: &Fragment, value: impl Into<Value>) -> Fragment {
        self.append(compare(column, ">=", value.into()))
    }

    pub fn lt(self, column: &Fragment, value: impl Into<Value>) -> Fragment {
        self.append(compare(column, "<", value.into()))
    }

    pub fn le(self, column: &Fragment, value: impl Into<Value>) -> Fragment {
        self.append(compare(column, "<=", value.into()))
    }

    pub fn is_null(self, column: &Fragment) -> Fragment {
        self.append(postfix(column, "is null"))
    }

    pub fn is_not_null(self, column: &Fragment) -> Fragment {
        self.append(postfix(column, "is not null"))
    }

    /// `column between ? and ?`
    pub fn between(
        self,
        column: &Fragment,
        from: impl Into<Value>,
        to: impl Into<Value>,
    ) -> Fragment {
        self.append(range(column, false, from.into(), to.into()))
    }

    pub fn not_between(
        self,
        column: &Fragment,
        from: impl Into<Value>,
        to: impl Into<Value>,
    ) -> Fragment {
        self.append(range(column, true, from.into(), to.into()))
    }

    pub fn like(self, column: &Fragment, pattern: impl Into<Value>) -> Fragment {
        self.append(compare(column, "like", pattern.into()))
    }

    pub fn not_like(self, column: &Fragment, pattern: impl Into<Value>) -> Fragment {
        self.append(compare(column, "not like", pattern.into()))
    }

    /// Case-insensitive `like` (Postgres `ILIKE`).
    pub fn ilike(self, column: &Fragment, pattern: impl Into<Value>) -> Fragment {
        self.append(compare(column, "ilike", pattern.into()))
    }

    pub fn not_ilike(self, column: &Fragment, pattern: impl Into<Value>) -> Fragment {
        self.append(compare(column, "not ilike", pattern.into()))
    }

    /// `column in (?, ?, ...)`.
    ///
    /// An empty list renders `1=0` (matches nothing) rather than the invalid
    /// `in ()`.
    pub fn in_list<V: Into<Value>>(
        self,
        column: &Fragment,
        values: impl IntoIterator<Item = V>,
    ) -> Fragment {
        let values = values.into_iter().map(Into::into).collect();
        self.append(membership(column, false, values))
    }

    /// `column not in (?, ?, ...)`.
    ///
    /// An empty list renders `1=1` (matches everything).
    pub fn not_in<V: Into<Value>>(
        self,
        column: &Fragment,
        values: impl IntoIterator<Item = V>,
    ) -> Fragment {
        let values = values.into_iter().map(Into::into).collect();
        self.append(membership(column, true, values))
    }

    /// `column in (subquery)`
    pub fn in_subquery(self, column: &Fragment, sub: Fragment) -> Fragment {
        self.append(subquery(Some(column), "in", sub))
    }

    /// `column not in (subquery)`
    pub fn not_in_subquery(self, column: &Fragment, sub: Fragment) -> Fragment {
        self.append(subquery(Some(column), "not in", sub))
    }

    /// Row-value membership: `(a, b) in ((?, ?), (?, ?))`.
    ///
    /// No rows follows the same rule as [`in_list`](Self::in_list) (`1=0`).
    /// Fails if there are no columns or a row's arity differs from the column
    /// count.
    pub fn in_tuples<R, V>(
        self,
        columns: impl IntoIterator<Item = Fragment>,
        rows: impl IntoIterator<Item = R>,
    ) -> SqlResult<Fragment>
    where
        R: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        let columns: Vec<Fragment> = columns.into_iter().filter(Fragment::non_empty).collect();
        if columns.is_empty() {
            return Err(SqlError::validation("in_tuples requires at least one column"));
        }

        let mut tuples = Vec::new();
        for (i, row) in rows.into_iter().enumerate() {
            let row: Vec<Value> = row.into_iter().map(Into::into).collect();
            if row.len() != columns.len() {
                return Err(SqlError::Validation(format!(
                    "in_tuples: row {i} has {} values, expected {}",
                    row.len(),
                    columns.len()
                )));
            }
            tuples.push(row);
        }
        if tuples.is_empty() {
            return Ok(self.append(Fragment::keyword(EMPTY_IN)));
        }

        let mut b = FragmentBuilder::new();
        b.push("(").push_owned(super::csv(columns)).push(") in (");
        for (i, row) in tuples.into_iter().enumerate() {
            if i > 0 {
                b.push(", ");
            }
            b.push("(").push_bind_list(row).push(")");
        }
        b.push(")");
        Ok(self.append(b.finish()))
    }

    /// `exists (subquery)`
    pub fn exists(self, sub: Fragment) -> Fragment {
        self.append(subquery(None, "exists", sub))
    }

    /// `not exists (subquery)`
    pub fn not_exists(self, sub: Fragment) -> Fragment {
        self.append(subquery(None, "not exists", sub))
    }
}

pub fn eq(column: &Fragment, value: impl Into<Value>) -> Fragment {
    Fragment::empty().eq(column, value)
}

pub fn ne(column: &Fragment, value: impl Into<Value>) -> Fragment {
    Fragment::empty().ne(column, value)
}

pub fn gt(column: &Fragment, value: impl Into<Value>) -> Fragment {
    Fragment::empty().gt(column, value)
}

pub fn ge(column: &Fragment, value: impl Into<Value>) -> Fragment {
    Fragment::empty().ge(column, value)
}

pub fn lt(column: &Fragment, value: impl Into<Value>) -> Fragment {
    Fragment::empty().lt(column, value)
}

pub fn le(column: &Fragment, value: impl Into<Value>) -> Fragment {
    Fragment::empty().le(column, value)
}

pub fn is_null(column: &Fragment) -> Fragment {
    Fragment::empty().is_null(column)
}

pub fn is_not_null(column: &Fragment) -> Fragment {
    Fragment::empty().is_not_null(column)
}

pub fn between(column: &Fragment, from: impl Into<Value>, to: impl Into<Value>) -> Fragment {
    Fragment::empty().between(column, from, to)
}

pub fn not_between(column: &Fragment, from: impl Into<Value>, to: impl Into<Value>) -> Fragment {
    Fragment::empty().not_between(column, from, to)
}

pub fn like(column: &Fragment, pattern: impl Into<Value>) -> Fragment {
    Fragment::empty().like(column, pattern)
}

pub fn not_like(column: &Fragment, pattern: impl Into<Value>) -> Fragment {
    Fragment::empty().not_like(column, pattern)
}

pub fn ilike(column: &Fragment, pattern: impl Into<Value>) -> Fragment {
    Fragment::empty().ilike(column, pattern)
}

pub fn not_ilike(column: &Fragment, pattern: impl Into<Value>) -> Fragment {
    Fragment::empty().not_ilike(column, pattern)
}

pub fn in_list<V: Into<Value>>(column: &Fragment, values: impl IntoIterator<Item = V>) -> Fragment {
    Fragment::empty().in_list(column, values)
}

pub fn not_in<V: Into<Value>>(column: &Fragment, values: impl IntoIterator<Item = V>) -> Fragment {
    Fragment::empty().not_in(column, values)
}

pub fn in_subquery(column: &Fragment, sub: Fragment) -> Fragment {
    Fragment::empty().in_subquery(column, sub)
}

pub fn not_in_subquery(column: &Fragment, sub: Fragment) -> Fragment {
    Fragment::empty().not_in_subquery(column, sub)
}

pub fn in_tuples<R, V>(
    columns: impl IntoIterator<Item = Fragment>,
    rows: impl IntoIterator<Item = R>,
) -> SqlResult<Fragment>
where
    R: IntoIterator<Item = V>,
    V: Into<Value>,
{
    Fragment::empty().in_tuples(columns, rows)
}

pub fn exists(sub: Fragment) -> Fragment {
    Fragment::empty().exists(sub)
}

pub fn not_exists(sub: Fragment) -> Fragment {
    Fragment::empty().not_exists(sub)
}
