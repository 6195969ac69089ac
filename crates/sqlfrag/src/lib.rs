//! # sqlfrag
//!
//! Immutable, composable SQL fragments.
//!
//! A [`Fragment`] is SQL text with `?` markers plus the ordered parameters
//! those markers stand for. Combinators in [`syntax`] build bigger fragments
//! out of smaller ones and always carry text and parameters together, so the
//! i-th marker keeps binding the i-th parameter no matter how deeply pieces
//! are nested or how many optional pieces drop out.
//!
//! ## Features
//!
//! - **Values are bound, never spliced**: predicates, `limit`/`offset` and
//!   list expansion only ever add parameters
//! - **No raw-text constructor**: text comes from `&'static str` templates,
//!   validated identifiers, or the combinators
//! - **Optional clauses vanish**: empty fragments are the identity of
//!   [`Fragment::append`] and are skipped by every join
//! - **Postgres-ready**: [`Fragment::to_statement`] renders `$1, $2, ...` and
//!   [`Value`] implements `tokio_postgres::types::ToSql`
//!
//! ## Example
//!
//! ```ignore
//! use sqlfrag::prelude::*;
//!
//! let status = Fragment::ident("status")?;
//! let id = Fragment::ident("id")?;
//!
//! let q = lit("select id, name from users")?
//!     .where_opt(syntax::to_and_condition_opt([
//!         Some(syntax::eq(&status, "active")),
//!         min_id.map(|v| syntax::ge(&id, v)),
//!     ]))
//!     .order_by([id.clone()])
//!     .limit(20);
//!
//! let stmt = q.to_statement()?;
//! let rows = client.query(stmt.sql(), &stmt.params_ref()).await?;
//! ```

pub mod config;
pub mod error;
pub mod fragment;
pub mod ident;
pub mod syntax;
pub mod template;
pub mod value;

mod trace;

pub mod prelude;

pub use config::RenderConfig;
pub use error::{SqlError, SqlResult};
pub use fragment::{Fragment, PlaceholderStyle, Statement};
pub use ident::{Ident, IdentPart, IntoIdent};
pub use syntax::{Asterisk, ResultAll, TableRef};
pub use template::{Arg, lit, template};
pub use value::Value;
