//! Capability traits for "all columns" projections.
//!
//! Combinators such as [`count_asterisk`](super::count_asterisk) and
//! [`distinct_all`](super::distinct_all) accept anything that can describe
//! its own projection, without knowing how columns are mapped.

use super::csv;
use crate::error::SqlResult;
use crate::fragment::Fragment;
use crate::ident::{Ident, IntoIdent};

/// Exposes every result column, qualified (`u.id, u.name`).
pub trait ResultAll {
    fn result_all(&self) -> Fragment;
}

/// Exposes a `*` projection (`*` or `u.*`).
pub trait Asterisk {
    fn asterisk(&self) -> Fragment;
}

/// A table, its optional alias and its known columns.
///
/// ```ignore
/// use sqlfrag::syntax::{self, ResultAll, TableRef};
///
/// let u = TableRef::new("users")?.alias("u")?.columns(["id", "name"])?;
/// let q = sqlfrag::Fragment::empty()
///     .select([u.result_all()])
///     .from_table(u.from_clause())
///     .where_clause(syntax::eq(&u.column("id")?, 1));
/// assert_eq!(q.text(), "select u.id, u.name from users u where u.id = ?");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRef {
    table: Ident,
    alias: Option<Ident>,
    columns: Vec<Ident>,
}

impl TableRef {
    pub fn new(table: impl IntoIdent) -> SqlResult<Self> {
        Ok(Self {
            table: table.into_ident()?,
            alias: None,
            columns: Vec::new(),
        })
    }

    pub fn alias(mut self, alias: impl IntoIdent) -> SqlResult<Self> {
        self.alias = Some(alias.into_ident()?);
        Ok(self)
    }

    /// Declare the table's columns (unqualified names).
    pub fn columns<I>(mut self, columns: impl IntoIterator<Item = I>) -> SqlResult<Self>
    where
        I: IntoIdent,
    {
        self.columns = columns
            .into_iter()
            .map(IntoIdent::into_ident)
            .collect::<SqlResult<Vec<_>>>()?;
        Ok(self)
    }

    fn qualifier(&self) -> &Ident {
        self.alias.as_ref().unwrap_or(&self.table)
    }

    /// A column qualified by the alias (or the table name without one).
    pub fn column(&self, name: impl IntoIdent) -> SqlResult<Fragment> {
        let name = name.into_ident()?;
        Fragment::ident(name.qualified_by(self.qualifier()))
    }

    /// `users u`, or `users` without an alias.
    pub fn from_clause(&self) -> Fragment {
        let mut text = self.table.to_sql();
        if let Some(alias) = &self.alias {
            text.push(' ');
            text.push_str(&alias.to_sql());
        }
        Fragment::new_unchecked(text, Vec::new())
    }
}

impl Asterisk for TableRef {
    fn asterisk(&self) -> Fragment {
        let mut text = self.qualifier().to_sql();
        text.push_str(".*");
        Fragment::new_unchecked(text, Vec::new())
    }
}

impl ResultAll for TableRef {
    /// Qualified declared columns; falls back to `alias.*` when none are declared.
    fn result_all(&self) -> Fragment {
        if self.columns.is_empty() {
            return self.asterisk();
        }
        let qualifier = self.qualifier();
        csv(self
            .columns
            .iter()
            .map(|c| Fragment::new_unchecked(c.qualified_by(qualifier).to_sql(), Vec::new())))
    }
}
