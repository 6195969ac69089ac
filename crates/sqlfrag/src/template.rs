//! Literal leaves.
//!
//! [`template`] turns a `&'static str` with `?` markers and a list of
//! arguments into a [`Fragment`]. Requiring a static string keeps the SQL text
//! in source code; runtime data can only enter as bound values or as
//! fragments built by this crate.
//!
//! Each marker consumes one [`Arg`]:
//!
//! - [`Arg::Value`] stays a marker and binds the value
//! - [`Arg::Fragment`] is inlined: its text replaces the marker and its
//!   parameters are spliced in at that position
//! - [`Arg::List`] expands to `?, ?, ...` (one marker per value), so
//!   `in (?)` works with any non-empty list
//!
//! ```ignore
//! use sqlfrag::{Arg, template};
//!
//! let active = template("status = ?", ["active"])?;
//! let q = template("select * from users where ? and id in (?)", [
//!     Arg::from(active),
//!     Arg::list([1, 2, 3]),
//! ])?;
//! assert_eq!(q.text(), "select * from users where status = ? and id in (?, ?, ?)");
//! ```

use crate::error::{SqlError, SqlResult};
use crate::fragment::{Fragment, FragmentBuilder, scan};
use crate::value::Value;
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};

/// A template argument.
#[derive(Debug, Clone, PartialEq)]
pub enum Arg {
    Value(Value),
    Fragment(Fragment),
    /// Must not be empty: [`template`] rejects an empty list. Use
    /// [`syntax::in_list`](crate::syntax::in_list) /
    /// [`syntax::not_in`](crate::syntax::not_in) when the list may be empty.
    List(Vec<Value>),
}

impl Arg {
    /// A list argument, expanded to one marker per element.
    pub fn list<V: Into<Value>>(values: impl IntoIterator<Item = V>) -> Self {
        Arg::List(values.into_iter().map(Into::into).collect())
    }
}

macro_rules! impl_arg_from_value {
    ($($t:ty),* $(,)?) => {
        $(
            impl From<$t> for Arg {
                fn from(v: $t) -> Self {
                    Arg::Value(Value::from(v))
                }
            }
        )*
    };
}

impl_arg_from_value!(
    bool,
    i8,
    i16,
    i32,
    i64,
    u8,
    u16,
    u32,
    f32,
    f64,
    &str,
    String,
    &String,
    &[u8],
    Vec<u8>,
    NaiveDate,
    NaiveTime,
    NaiveDateTime,
    DateTime<Utc>,
);

impl<T: Into<Value>> From<Option<T>> for Arg {
    fn from(v: Option<T>) -> Self {
        Arg::Value(v.into())
    }
}

impl From<Value> for Arg {
    fn from(v: Value) -> Self {
        Arg::Value(v)
    }
}

impl From<Fragment> for Arg {
    fn from(f: Fragment) -> Self {
        Arg::Fragment(f)
    }
}

impl From<&Fragment> for Arg {
    fn from(f: &Fragment) -> Self {
        Arg::Fragment(f.clone())
    }
}

/// Build a fragment from a static template and its arguments.
///
/// Fails when the number of markers differs from the number of arguments, or
/// when an [`Arg::List`] is empty.
pub fn template<I>(sql: &'static str, args: I) -> SqlResult<Fragment>
where
    I: IntoIterator,
    I::Item: Into<Arg>,
{
    let args: Vec<Arg> = args.into_iter().map(Into::into).collect();
    let offsets = scan::marker_offsets(sql);
    if offsets.len() != args.len() {
        return Err(SqlError::Validation(format!(
            "template {sql:?}: placeholders({}) != args({})",
            offsets.len(),
            args.len()
        )));
    }

    if args.iter().any(|a| matches!(a, Arg::List(values) if values.is_empty())) {
        return Err(SqlError::Validation(format!(
            "template {sql:?}: empty list argument"
        )));
    }

    let mut b = FragmentBuilder::new();
    let mut last = 0;
    for (at, arg) in offsets.into_iter().zip(args) {
        b.push(&sql[last..at]);
        match arg {
            Arg::Value(v) => b.push_bind(v),
            Arg::Fragment(f) => b.push_owned(f),
            Arg::List(values) => b.push_bind_list(values),
        };
        last = at + 1;
    }
    b.push(&sql[last..]);
    Ok(b.finish())
}

/// A fixed piece of SQL with no parameters.
///
/// Fails if the text contains an unquoted `?`.
pub fn lit(sql: &'static str) -> SqlResult<Fragment> {
    template(sql, std::iter::empty::<Arg>())
}
