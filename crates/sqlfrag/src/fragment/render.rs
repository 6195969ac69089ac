use super::Fragment;
use super::scan;
use crate::config::RenderConfig;
use crate::error::{SqlError, SqlResult};
use crate::trace;
use crate::value::Value;
use serde::Serialize;
use tokio_postgres::types::ToSql;

/// Placeholder syntax used when rendering a [`Statement`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum PlaceholderStyle {
    /// `$1, $2, ...` (Postgres).
    #[default]
    DollarNumbered,
    /// `?` markers left as they are (JDBC/ODBC/SQLite style).
    QuestionMark,
}

/// A rendered fragment, ready for an execution layer.
///
/// `params()[i]` binds to the i-th placeholder in `sql()`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Statement {
    sql: String,
    params: Vec<Value>,
}

impl Statement {
    pub fn sql(&self) -> &str {
        &self.sql
    }

    pub fn params(&self) -> &[Value] {
        &self.params
    }

    /// Parameter refs compatible with `tokio-postgres`.
    pub fn params_ref(&self) -> Vec<&(dyn ToSql + Sync)> {
        self.params.iter().map(|p| p as &(dyn ToSql + Sync)).collect()
    }

    pub fn into_parts(self) -> (String, Vec<Value>) {
        (self.sql, self.params)
    }
}

impl Fragment {
    /// Render with the given configuration.
    ///
    /// Fails with [`SqlError::Validation`] when `config.validate` is set and the
    /// marker count does not match the parameter count.
    pub fn render(&self, config: &RenderConfig) -> SqlResult<Statement> {
        if config.validate {
            let placeholder_count = self.placeholder_count();
            let params_len = self.params.len();
            if placeholder_count != params_len {
                trace::misaligned(config, &self.text, placeholder_count, params_len);
                return Err(SqlError::Validation(format!(
                    "Fragment: placeholders({placeholder_count}) != params({params_len})"
                )));
            }
        }

        let sql = match config.style {
            PlaceholderStyle::QuestionMark => self.text.clone(),
            PlaceholderStyle::DollarNumbered => number_placeholders(&self.text),
        };
        trace::rendered(config, &sql, self.params.len());
        Ok(Statement {
            sql,
            params: self.params.clone(),
        })
    }

    /// Render for Postgres (`$1, $2, ...`) with validation on.
    pub fn to_statement(&self) -> SqlResult<Statement> {
        self.render(&RenderConfig::postgres())
    }

    /// Text with `?` markers rewritten to `$1, $2, ...`.
    pub fn to_postgres_sql(&self) -> String {
        number_placeholders(&self.text)
    }
}

fn number_placeholders(text: &str) -> String {
    // Write a usize as decimal digits into `out` without going through fmt.
    #[inline]
    fn push_usize(out: &mut String, mut n: usize) {
        if n < 10 {
            out.push((b'0' + n as u8) as char);
            return;
        }
        let mut buf = [0u8; 20];
        let mut pos = buf.len();
        while n > 0 {
            pos -= 1;
            buf[pos] = b'0' + (n % 10) as u8;
            n /= 10;
        }
        for &d in &buf[pos..] {
            out.push(d as char);
        }
    }

    let offsets = scan::marker_offsets(text);
    if offsets.is_empty() {
        return text.to_string();
    }

    // Each marker grows by at most a few digits; reserve a little headroom.
    let mut out = String::with_capacity(text.len() + offsets.len() * 3);
    let mut last = 0;
    for (i, &at) in offsets.iter().enumerate() {
        out.push_str(&text[last..at]);
        out.push('$');
        push_usize(&mut out, i + 1);
        last = at + 1;
    }
    out.push_str(&text[last..]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_markers_in_order() {
        assert_eq!(number_placeholders("a = ? and b = ?"), "a = $1 and b = $2");
    }

    #[test]
    fn numbers_past_nine() {
        let text = vec!["?"; 12].join(", ");
        let sql = number_placeholders(&text);
        assert!(sql.ends_with("$10, $11, $12"));
    }

    #[test]
    fn leaves_quoted_markers_alone() {
        assert_eq!(
            number_placeholders("a = '?' and b = ?"),
            "a = '?' and b = $1"
        );
    }
}
