use super::Fragment;
use super::scan::MARKER;
use crate::value::Value;

/// Transient writer used by combinators to assemble a [`Fragment`].
///
/// Text and parameters are only ever appended together (`push_bind`,
/// `push_fragment`), so the result keeps its markers and parameters aligned.
/// The builder never escapes the crate; callers only see the finished value.
#[derive(Debug, Default)]
pub(crate) struct FragmentBuilder {
    text: String,
    params: Vec<Value>,
}

impl FragmentBuilder {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Append SQL text that carries no parameters.
    pub(crate) fn push(&mut self, sql: &str) -> &mut Self {
        self.text.push_str(sql);
        self
    }

    /// Append a single space unless the text is empty or already ends in
    /// whitespace or an opening bracket.
    pub(crate) fn space(&mut self) -> &mut Self {
        match self.text.chars().last() {
            None | Some('(') => {}
            Some(c) if c.is_whitespace() => {}
            Some(_) => self.text.push(' '),
        }
        self
    }

    /// Append a marker and bind its value.
    pub(crate) fn push_bind(&mut self, value: Value) -> &mut Self {
        self.text.push(MARKER);
        self.params.push(value);
        self
    }

    /// Append `?, ?, ...` binding every value in order.
    ///
    /// Callers handle the empty list themselves; only they know whether the
    /// surrounding context is `in` or `not in`.
    pub(crate) fn push_bind_list(&mut self, values: impl IntoIterator<Item = Value>) -> &mut Self {
        for (i, v) in values.into_iter().enumerate() {
            if i > 0 {
                self.push(", ");
            }
            self.push_bind(v);
        }
        self
    }

    /// Inline another fragment: its text, then its parameters at this position.
    pub(crate) fn push_fragment(&mut self, fragment: &Fragment) -> &mut Self {
        self.text.push_str(&fragment.text);
        self.params.extend(fragment.params.iter().cloned());
        self
    }

    /// Owned variant of [`push_fragment`](Self::push_fragment); moves the parameters.
    pub(crate) fn push_owned(&mut self, fragment: Fragment) -> &mut Self {
        let (text, mut params) = fragment.into_parts();
        self.text.push_str(&text);
        self.params.append(&mut params);
        self
    }

    pub(crate) fn finish(self) -> Fragment {
        Fragment::new_unchecked(self.text, self.params)
    }
}
