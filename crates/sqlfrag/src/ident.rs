//! Validated SQL identifiers.
//!
//! Identifiers cannot be bound as parameters, so dynamic table/column names
//! go through [`Ident`] before they become fragment text:
//!
//! - unquoted parts must match `[A-Za-z_][A-Za-z0-9_$]*`
//! - quoted parts may hold anything except NUL, with `"` escaped as `""`
//! - parts are joined with `.`; a trailing `*` part is allowed (`u.*`)
//!
//! ```ignore
//! let col = sqlfrag::Fragment::ident(r#"public."UserTable".id"#)?;
//! ```

use crate::error::{SqlError, SqlResult};

/// One dot-separated part of an identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdentPart {
    Unquoted(String),
    Quoted(String),
    /// `*`, only valid as the last part.
    Star,
}

/// A schema/table/column identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ident {
    parts: Vec<IdentPart>,
}

impl Ident {
    /// A single quoted identifier, taken verbatim.
    pub fn quoted(name: &str) -> SqlResult<Self> {
        check_quoted(name)?;
        Ok(Self {
            parts: vec![IdentPart::Quoted(name.to_string())],
        })
    }

    /// Parse `a`, `a.b.c`, `"Quoted".b`, `a.*`.
    pub fn parse(s: &str) -> SqlResult<Self> {
        if s.is_empty() {
            return Err(SqlError::invalid_ident("identifier cannot be empty"));
        }
        if s.contains('\0') {
            return Err(SqlError::invalid_ident("identifier cannot contain NUL"));
        }

        let mut parts = Vec::new();
        let mut rest = s;
        loop {
            let (part, tail) = next_part(rest)?;
            if matches!(part, IdentPart::Star) && !tail.is_empty() {
                return Err(SqlError::invalid_ident(format!("'*' must be the last part of {s:?}")));
            }
            parts.push(part);
            match tail.strip_prefix('.') {
                Some("") => {
                    return Err(SqlError::invalid_ident(format!("trailing '.' in {s:?}")));
                }
                Some(next) => rest = next,
                None if tail.is_empty() => break,
                None => {
                    return Err(SqlError::invalid_ident(format!(
                        "expected '.' after identifier part in {s:?}"
                    )));
                }
            }
        }
        Ok(Self { parts })
    }

    pub fn parts(&self) -> &[IdentPart] {
        &self.parts
    }

    /// Qualify with a leading part: `id` qualified by `u` is `u.id`.
    pub fn qualified_by(&self, qualifier: &Ident) -> Ident {
        let mut parts = qualifier.parts.clone();
        parts.extend(self.parts.iter().cloned());
        Ident { parts }
    }

    /// Render as SQL text.
    pub fn to_sql(&self) -> String {
        let mut out = String::new();
        for (i, part) in self.parts.iter().enumerate() {
            if i > 0 {
                out.push('.');
            }
            match part {
                IdentPart::Unquoted(s) => out.push_str(s),
                IdentPart::Quoted(s) => {
                    out.push('"');
                    out.push_str(&s.replace('"', "\"\""));
                    out.push('"');
                }
                IdentPart::Star => out.push('*'),
            }
        }
        out
    }
}

fn check_quoted(name: &str) -> SqlResult<()> {
    if name.is_empty() {
        return Err(SqlError::invalid_ident("empty quoted identifier"));
    }
    if name.contains('\0') {
        return Err(SqlError::invalid_ident("identifier cannot contain NUL"));
    }
    Ok(())
}

/// Split the next part off `s`, returning it and the unparsed remainder.
fn next_part(s: &str) -> SqlResult<(IdentPart, &str)> {
    if let Some(tail) = s.strip_prefix('*') {
        return Ok((IdentPart::Star, tail));
    }

    if let Some(body) = s.strip_prefix('"') {
        let mut name = String::new();
        let mut chars = body.char_indices().peekable();
        while let Some((i, c)) = chars.next() {
            if c != '"' {
                name.push(c);
                continue;
            }
            if matches!(chars.peek(), Some((_, '"'))) {
                chars.next();
                name.push('"');
                continue;
            }
            check_quoted(&name)?;
            return Ok((IdentPart::Quoted(name), &body[i + 1..]));
        }
        return Err(SqlError::invalid_ident(format!("unclosed quoted identifier in {s:?}")));
    }

    let end = s.find('.').unwrap_or(s.len());
    let word = &s[..end];
    let mut chars = word.chars();
    match chars.next() {
        None => return Err(SqlError::invalid_ident("empty identifier segment")),
        Some(c) if c == '_' || c.is_ascii_alphabetic() => {}
        Some(c) => {
            return Err(SqlError::invalid_ident(format!(
                "invalid identifier start character: '{c}'"
            )));
        }
    }
    if let Some(c) = chars.find(|&c| !(c == '_' || c == '$' || c.is_ascii_alphanumeric())) {
        return Err(SqlError::invalid_ident(format!(
            "invalid character in identifier: '{c}'"
        )));
    }
    Ok((IdentPart::Unquoted(word.to_string()), &s[end..]))
}

/// Convert an input into an [`Ident`].
pub trait IntoIdent {
    fn into_ident(self) -> SqlResult<Ident>;
}

impl IntoIdent for Ident {
    fn into_ident(self) -> SqlResult<Ident> {
        Ok(self)
    }
}

impl IntoIdent for &Ident {
    fn into_ident(self) -> SqlResult<Ident> {
        Ok(self.clone())
    }
}

impl IntoIdent for &str {
    fn into_ident(self) -> SqlResult<Ident> {
        Ident::parse(self)
    }
}

impl IntoIdent for String {
    fn into_ident(self) -> SqlResult<Ident> {
        Ident::parse(&self)
    }
}

impl IntoIdent for &String {
    fn into_ident(self) -> SqlResult<Ident> {
        Ident::parse(self)
    }
}
