//! The immutable SQL fragment.
//!
//! A [`Fragment`] is a piece of SQL text plus the ordered parameters its `?`
//! markers stand for. Fragments are never mutated: every combinator consumes
//! its inputs and returns a new value, and the only primitive composition is
//! [`Fragment::append`], which concatenates text and parameters in the same
//! left-to-right order.
//!
//! There is no public constructor that takes arbitrary text.
//! Leaves come from [`lit`](crate::lit) / [`template`](crate::template)
//! (`&'static str` only), from validated identifiers
//! ([`Fragment::ident`]), or from the [`syntax`](crate::syntax) combinators.
//!
//! # Example
//!
//! ```ignore
//! use sqlfrag::{Fragment, syntax};
//!
//! let id = Fragment::ident("u.id")?;
//! let name = Fragment::ident("u.name")?;
//!
//! let q = sqlfrag::lit("select * from users u")?
//!     .where_clause(syntax::eq(&id, 42).and().like(&name, "al%"))
//!     .order_by([id.clone()])
//!     .limit(10);
//!
//! assert_eq!(q.text(), "select * from users u where u.id = ? and u.name like ? order by u.id limit ?");
//! ```

mod builder;
mod render;
pub(crate) mod scan;

#[cfg(test)]
mod tests;

pub(crate) use builder::FragmentBuilder;
pub use render::{PlaceholderStyle, Statement};

use crate::error::SqlResult;
use crate::ident::IntoIdent;
use crate::value::Value;
use serde::Serialize;
use std::fmt;

/// An immutable `(sql text, ordered parameters)` pair.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[must_use]
pub struct Fragment {
    text: String,
    #[serde(rename = "parameters")]
    params: Vec<Value>,
}

impl Fragment {
    /// Build a fragment from raw text without any checks.
    ///
    /// Callers pass either a fixed keyword or text assembled through
    /// [`FragmentBuilder`].
    pub(crate) fn new_unchecked(text: impl Into<String>, params: Vec<Value>) -> Self {
        Self {
            text: text.into(),
            params,
        }
    }

    /// Fixed SQL text with no parameters (keywords, operators, function names).
    pub(crate) fn keyword(text: &'static str) -> Self {
        Self::new_unchecked(text, Vec::new())
    }

    /// The empty fragment: identity element of [`append`](Self::append).
    pub fn empty() -> Self {
        Self::default()
    }

    /// A validated identifier (`users`, `u.id`, `public."UserTable"`).
    pub fn ident<I: IntoIdent>(ident: I) -> SqlResult<Self> {
        let ident = ident.into_ident()?;
        Ok(Self::new_unchecked(ident.to_sql(), Vec::new()))
    }

    /// SQL text with `?` markers.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Bound parameters, in marker order.
    pub fn parameters(&self) -> &[Value] {
        &self.params
    }

    /// Split into `(text, parameters)`.
    pub fn into_parts(self) -> (String, Vec<Value>) {
        (self.text, self.params)
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn non_empty(&self) -> bool {
        !self.is_empty()
    }

    /// Number of `?` markers in the text (quoted `?` excluded).
    pub fn placeholder_count(&self) -> usize {
        scan::marker_count(&self.text)
    }

    /// Whether the marker count matches the parameter count.
    pub fn is_aligned(&self) -> bool {
        self.placeholder_count() == self.params.len()
    }

    /// Concatenate with a single separating space.
    ///
    /// Parameters are concatenated as `self ++ other`. A fragment with empty
    /// text contributes no separator, so `empty.append(f) == f` and
    /// `f.append(empty) == f`.
    pub fn append(self, other: Fragment) -> Fragment {
        if other.text.is_empty() {
            if other.params.is_empty() {
                return self;
            }
            let mut out = self;
            out.params.extend(other.params);
            return out;
        }
        if self.text.is_empty() {
            if self.params.is_empty() {
                return other;
            }
            let mut params = self.params;
            params.extend(other.params);
            return Self::new_unchecked(other.text, params);
        }

        let mut b = FragmentBuilder::new();
        b.push_owned(self).push(" ").push_owned(other);
        b.finish()
    }
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
