//! Fragment combinators.
//!
//! Every combinator is a pure function over [`Fragment`]s. Most come in two
//! shapes:
//!
//! - a chaining method that appends to an existing fragment
//!   (`f.eq(&col, 1)` is `f.append(col = ?)`)
//! - a free function here that starts from the empty fragment
//!   (`syntax::eq(&col, 1)`)
//!
//! Values are always bound as parameters; only fragments (which are built by
//! this crate) contribute text.
//!
//! # Example
//!
//! ```ignore
//! use sqlfrag::{Fragment, syntax};
//!
//! let status = Fragment::ident("status")?;
//! let role = Fragment::ident("role")?;
//!
//! let cond = syntax::to_and_condition_opt([
//!     Some(syntax::eq(&status, "active")),
//!     None,
//!     Some(syntax::in_list(&role, ["admin", "owner"])),
//! ]);
//!
//! let q = sqlfrag::lit("select * from users")?.where_opt(cond);
//! assert_eq!(q.text(), "select * from users where status = ? and role in (?, ?)");
//! ```

mod clause;
mod func;
mod join;
mod predicate;
mod provider;


pub use clause::{
    asc, desc, from_table, group_by, having, limit, limit_offset, offset, order_by, select,
    union, union_all, where_, where_clause,
};
pub use func::{
    abs, avg, ceil, ceiling, count, count_all, count_asterisk, count_distinct, current_date,
    current_timestamp, distinct, distinct_all, dual, floor, max, min, placeholder, sum,
};
pub use join::{
    csv, has_and_or, join, join_with_and, join_with_or, round_bracket, to_and_condition_opt,
    to_or_condition_opt,
};
pub use predicate::{
    between, eq, exists, ge, gt, ilike, in_list, in_subquery, in_tuples, is_not_null, is_null, le,
    like, lt, ne, not_between, not_exists, not_ilike, not_in, not_in_subquery, not_like,
};
pub use provider::{Asterisk, ResultAll, TableRef};
