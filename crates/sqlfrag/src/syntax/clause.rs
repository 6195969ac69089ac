use super::csv;
use crate::error::{SqlError, SqlResult};
use crate::fragment::{Fragment, FragmentBuilder};
use crate::value::Value;

fn keyword_with(keyword: &'static str, body: Fragment) -> Fragment {
    Fragment::keyword(keyword).append(body)
}

fn bound(keyword: &str, n: i64) -> Fragment {
    let mut b = FragmentBuilder::new();
    b.push(keyword).push(" ").push_bind(Value::Int(n));
    b.finish()
}

impl Fragment {
    /// Append the bare `where` keyword; the caller appends the condition.
    pub fn where_(self) -> Fragment {
        self.append(Fragment::keyword("where"))
    }

    /// Append `where condition`. An empty condition appends nothing.
    pub fn where_clause(self, condition: Fragment) -> Fragment {
        if condition.is_empty() {
            return self;
        }
        self.append(keyword_with("where", condition))
    }

    /// [`where_clause`](Self::where_clause) when present, otherwise `self`.
    pub fn where_opt(self, condition: Option<Fragment>) -> Fragment {
        match condition {
            Some(c) => self.where_clause(c),
            None => self,
        }
    }

    /// `group by a, b`; no columns appends nothing.
    pub fn group_by(self, columns: impl IntoIterator<Item = Fragment>) -> Fragment {
        let columns = csv(columns);
        if columns.is_empty() {
            return self;
        }
        self.append(keyword_with("group by", columns))
    }

    /// `having condition`. An empty condition appends nothing.
    pub fn having(self, condition: Fragment) -> Fragment {
        if condition.is_empty() {
            return self;
        }
        self.append(keyword_with("having", condition))
    }

    /// `order by a, b desc`; no columns appends nothing.
    pub fn order_by(self, columns: impl IntoIterator<Item = Fragment>) -> Fragment {
        let columns = csv(columns);
        if columns.is_empty() {
            return self;
        }
        self.append(keyword_with("order by", columns))
    }

    pub fn asc(self) -> Fragment {
        self.append(Fragment::keyword("asc"))
    }

    pub fn desc(self) -> Fragment {
        self.append(Fragment::keyword("desc"))
    }

    /// `limit ?` with `n` bound.
    pub fn limit(self, n: i64) -> Fragment {
        self.append(bound("limit", n))
    }

    /// `offset ?` with `n` bound.
    pub fn offset(self, n: i64) -> Fragment {
        self.append(bound("offset", n))
    }

    /// `limit ? offset ?`
    pub fn limit_offset(self, limit: i64, offset: i64) -> Fragment {
        self.limit(limit).offset(offset)
    }

    /// Page-based pagination (pages start at 1).
    ///
    /// ```ignore
    /// // page 3 with 25 rows per page: limit 25 offset 50
    /// let q = sqlfrag::lit("select * from users order by id")?.page(3, 25)?;
    /// ```
    pub fn page(self, page: i64, per_page: i64) -> SqlResult<Fragment> {
        if page < 1 {
            return Err(SqlError::Validation(format!(
                "page must be >= 1, got {page}"
            )));
        }
        if per_page < 0 {
            return Err(SqlError::Validation(format!(
                "per_page must be >= 0, got {per_page}"
            )));
        }
        let offset = (page - 1)
            .checked_mul(per_page)
            .ok_or_else(|| SqlError::validation("page offset overflows i64"))?;
        Ok(self.limit_offset(per_page, offset))
    }

    /// `select a, b`; no columns renders `select *`.
    pub fn select(self, columns: impl IntoIterator<Item = Fragment>) -> Fragment {
        let columns = csv(columns);
        if columns.is_empty() {
            return self.append(Fragment::keyword("select *"));
        }
        self.append(keyword_with("select", columns))
    }

    /// `from table`
    pub fn from_table(self, table: Fragment) -> Fragment {
        self.append(keyword_with("from", table))
    }

    /// `self union other`
    pub fn union(self, other: Fragment) -> Fragment {
        self.append(keyword_with("union", other))
    }

    /// `self union all other`
    pub fn union_all(self, other: Fragment) -> Fragment {
        self.append(keyword_with("union all", other))
    }
}

/// The bare `where` keyword.
pub fn where_() -> Fragment {
    Fragment::empty().where_()
}

pub fn where_clause(condition: Fragment) -> Fragment {
    Fragment::empty().where_clause(condition)
}

pub fn group_by(columns: impl IntoIterator<Item = Fragment>) -> Fragment {
    Fragment::empty().group_by(columns)
}

pub fn having(condition: Fragment) -> Fragment {
    Fragment::empty().having(condition)
}

pub fn order_by(columns: impl IntoIterator<Item = Fragment>) -> Fragment {
    Fragment::empty().order_by(columns)
}

pub fn select(columns: impl IntoIterator<Item = Fragment>) -> Fragment {
    Fragment::empty().select(columns)
}

pub fn from_table(table: Fragment) -> Fragment {
    Fragment::empty().from_table(table)
}

pub fn asc() -> Fragment {
    Fragment::empty().asc()
}

pub fn desc() -> Fragment {
    Fragment::empty().desc()
}

pub fn limit(n: i64) -> Fragment {
    Fragment::empty().limit(n)
}

pub fn offset(n: i64) -> Fragment {
    Fragment::empty().offset(n)
}

pub fn limit_offset(limit: i64, offset: i64) -> Fragment {
    Fragment::empty().limit_offset(limit, offset)
}

/// `union other`, for appending after a statement built elsewhere.
pub fn union(other: Fragment) -> Fragment {
    Fragment::empty().union(other)
}

pub fn union_all(other: Fragment) -> Fragment {
    Fragment::empty().union_all(other)
}
