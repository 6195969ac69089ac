use crate::fragment::PlaceholderStyle;

/// Configuration for rendering a [`Fragment`](crate::Fragment) into a
/// [`Statement`](crate::Statement).
///
/// Defaults: Postgres placeholders, alignment validation on, render events at
/// `DEBUG` with SQL truncated to 200 bytes.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Placeholder syntax of the rendered SQL.
    pub style: PlaceholderStyle,
    /// Reject fragments whose marker count differs from their parameter count.
    pub validate: bool,
    /// Tracing event level for render events.
    #[cfg(feature = "tracing")]
    pub log_level: tracing::Level,
    /// Truncate logged SQL (in bytes). `None` means no truncation.
    pub max_sql_length: Option<usize>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            style: PlaceholderStyle::default(),
            validate: true,
            #[cfg(feature = "tracing")]
            log_level: tracing::Level::DEBUG,
            max_sql_length: Some(200),
        }
    }
}

impl RenderConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// `$1, $2, ...` placeholders.
    pub fn postgres() -> Self {
        Self::default().with_style(PlaceholderStyle::DollarNumbered)
    }

    /// `?` placeholders.
    pub fn question_mark() -> Self {
        Self::default().with_style(PlaceholderStyle::QuestionMark)
    }

    pub fn with_style(mut self, style: PlaceholderStyle) -> Self {
        self.style = style;
        self
    }

    /// Skip the marker/parameter count check.
    pub fn without_validation(mut self) -> Self {
        self.validate = false;
        self
    }

    #[cfg(feature = "tracing")]
    pub fn with_log_level(mut self, level: tracing::Level) -> Self {
        self.log_level = level;
        self
    }

    pub fn max_sql_length(mut self, len: usize) -> Self {
        self.max_sql_length = Some(len);
        self
    }

    pub fn no_truncate(mut self) -> Self {
        self.max_sql_length = None;
        self
    }
}
