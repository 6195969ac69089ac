//! Scalar and aggregate function wrappers.
//!
//! Fixed text around the argument; no parameters beyond those the argument
//! already carries.

use super::csv;
use super::provider::{Asterisk, ResultAll};
use crate::fragment::{Fragment, FragmentBuilder};
use crate::value::Value;

fn call(name: &str, arg: &Fragment) -> Fragment {
    let mut b = FragmentBuilder::new();
    b.push(name).push("(").push_fragment(arg).push(")");
    b.finish()
}

/// `count(*)`
pub fn count_all() -> Fragment {
    Fragment::keyword("count(*)")
}

/// `count(column)`
pub fn count(column: &Fragment) -> Fragment {
    call("count", column)
}

/// `count(distinct column)`
pub fn count_distinct(column: &Fragment) -> Fragment {
    let mut b = FragmentBuilder::new();
    b.push("count(distinct ").push_fragment(column).push(")");
    b.finish()
}

/// `count(u.*)` for anything that can describe its asterisk projection.
pub fn count_asterisk<A: Asterisk + ?Sized>(source: &A) -> Fragment {
    call("count", &source.asterisk())
}

pub fn sum(column: &Fragment) -> Fragment {
    call("sum", column)
}

pub fn avg(column: &Fragment) -> Fragment {
    call("avg", column)
}

pub fn min(column: &Fragment) -> Fragment {
    call("min", column)
}

pub fn max(column: &Fragment) -> Fragment {
    call("max", column)
}

pub fn abs(column: &Fragment) -> Fragment {
    call("abs", column)
}

pub fn floor(column: &Fragment) -> Fragment {
    call("floor", column)
}

pub fn ceil(column: &Fragment) -> Fragment {
    call("ceil", column)
}

pub fn ceiling(column: &Fragment) -> Fragment {
    call("ceiling", column)
}

/// `distinct a, b`; no columns renders the bare keyword.
pub fn distinct(columns: impl IntoIterator<Item = Fragment>) -> Fragment {
    Fragment::keyword("distinct").append(csv(columns))
}

/// `distinct` over every result column of `source`.
pub fn distinct_all<R: ResultAll + ?Sized>(source: &R) -> Fragment {
    Fragment::keyword("distinct").append(source.result_all())
}

pub fn current_date() -> Fragment {
    Fragment::keyword("current_date")
}

pub fn current_timestamp() -> Fragment {
    Fragment::keyword("current_timestamp")
}

/// `dual` (Oracle/MySQL dummy table).
pub fn dual() -> Fragment {
    Fragment::keyword("dual")
}

/// A bare `?` with `value` bound.
pub fn placeholder(value: impl Into<Value>) -> Fragment {
    let mut b = FragmentBuilder::new();
    b.push_bind(value.into());
    b.finish()
}
