//! Convenient imports for typical `sqlfrag` usage.
//!
//! ```ignore
//! use sqlfrag::prelude::*;
//! ```

pub use crate::syntax::{self, Asterisk, ResultAll, TableRef};
pub use crate::{Arg, Fragment, RenderConfig, SqlError, SqlResult, Statement, Value, lit, template};
