//! `tracing` integration.
//!
//! Enabled by the `tracing` feature (on by default). Events use the target
//! `sqlfrag.render`; without the feature every hook compiles to nothing.

use crate::config::RenderConfig;

/// Cut `sql` to at most `max_bytes`, backing off to a char boundary.
#[cfg_attr(not(feature = "tracing"), allow(dead_code))]
pub(crate) fn truncate_sql_bytes(sql: &str, max_bytes: usize) -> &str {
    if sql.len() <= max_bytes {
        return sql;
    }
    let mut end = max_bytes;
    while end > 0 && !sql.is_char_boundary(end) {
        end -= 1;
    }
    &sql[..end]
}

#[cfg(feature = "tracing")]
fn display_sql(config: &RenderConfig, sql: &str) -> String {
    match config.max_sql_length {
        Some(max) if sql.len() > max => format!("{}...", truncate_sql_bytes(sql, max)),
        _ => sql.to_string(),
    }
}

#[cfg(feature = "tracing")]
pub(crate) fn rendered(config: &RenderConfig, sql: &str, param_count: usize) {
    use tracing::Level;

    /// Dispatch a tracing event at a runtime-determined level.
    macro_rules! emit_at_level {
        ($level:expr, $($field:tt)*) => {
            match $level {
                Level::ERROR => tracing::error!($($field)*),
                Level::WARN  => tracing::warn!($($field)*),
                Level::INFO  => tracing::info!($($field)*),
                Level::DEBUG => tracing::debug!($($field)*),
                Level::TRACE => tracing::trace!($($field)*),
            }
        };
    }

    let sql = display_sql(config, sql);
    emit_at_level!(
        config.log_level,
        target: "sqlfrag.render",
        style = ?config.style,
        param_count,
        sql = %sql,
        "rendered fragment",
    );
}

#[cfg(not(feature = "tracing"))]
pub(crate) fn rendered(_config: &RenderConfig, _sql: &str, _param_count: usize) {}

#[cfg(feature = "tracing")]
pub(crate) fn misaligned(
    config: &RenderConfig,
    text: &str,
    placeholder_count: usize,
    param_count: usize,
) {
    let sql = display_sql(config, text);
    tracing::warn!(
        target: "sqlfrag.render",
        placeholder_count,
        param_count,
        sql = %sql,
        "fragment placeholders and parameters are out of step",
    );
}

#[cfg(not(feature = "tracing"))]
pub(crate) fn misaligned(
    _config: &RenderConfig,
    _text: &str,
    _placeholder_count: usize,
    _param_count: usize,
) {
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_keeps_short_sql() {
        assert_eq!(truncate_sql_bytes("select 1", 200), "select 1");
    }

    #[test]
    fn truncate_backs_off_to_char_boundary() {
        // 'é' is two bytes; cutting at 2 would split it.
        assert_eq!(truncate_sql_bytes("aé", 2), "a");
    }

    #[cfg(feature = "tracing")]
    #[test]
    fn logged_sql_follows_config_truncation() {
        let sql = "select id from users where id = ?";
        let short = RenderConfig::postgres().max_sql_length(9);
        assert_eq!(display_sql(&short, sql), "select id...");
        let full = RenderConfig::postgres().no_truncate();
        assert_eq!(display_sql(&full, sql), sql);
    }

    #[cfg(feature = "tracing")]
    #[test]
    fn misaligned_event_accepts_untruncated_config() {
        // No subscriber installed; exercises the call path with truncation off.
        let config = RenderConfig::postgres().no_truncate();
        misaligned(&config, &"x = ? ".repeat(100), 100, 0);
    }
}
