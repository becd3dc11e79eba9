use env_logger::Builder;
use log::LevelFilter;
use std::io::Write;

/// All log lines are prefixed with `c ` so that they cannot be confused with
/// bitstrings even if stderr and stdout end up in the same file.
///
/// Without `-v` flags a `RUST_LOG` setting is left untouched; otherwise the verbosity
/// overrides its default level.
pub fn build_pace_logger_for_verbosity(verbosity: u8) {
    let rust_log = std::env::var("RUST_LOG").ok();

    let mut builder = Builder::from_default_env();
    builder.format(|buf, record| writeln!(buf, "c {} - {}", record.level(), record.args()));
    if let Some(level) = global_filter(verbosity, rust_log.as_deref()) {
        builder.filter(None, level);
    }
    builder.init();
}

/// Returns the level to apply on top of `RUST_LOG`, if any.
fn global_filter(verbosity: u8, rust_log: Option<&str>) -> Option<LevelFilter> {
    let rust_log_set = rust_log.is_some_and(|s| !s.trim().is_empty());
    (verbosity > 0 || !rust_log_set).then(|| level_for_verbosity(verbosity))
}

/// Maps the number of `-v` flags onto a level, starting at `Warn`.
pub fn level_for_verbosity(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_levels() {
        assert_eq!(level_for_verbosity(0), LevelFilter::Warn);
        assert_eq!(level_for_verbosity(1), LevelFilter::Info);
        assert_eq!(level_for_verbosity(2), LevelFilter::Debug);
        assert_eq!(level_for_verbosity(7), LevelFilter::Trace);
    }

    #[test]
    fn rust_log_wins_without_verbosity() {
        assert_eq!(global_filter(0, Some("debug")), None);
        assert_eq!(global_filter(0, Some("pathdom=trace")), None);
        assert_eq!(global_filter(0, None), Some(LevelFilter::Warn));
        assert_eq!(global_filter(0, Some("  ")), Some(LevelFilter::Warn));
        assert_eq!(global_filter(2, Some("error")), Some(LevelFilter::Debug));
    }
}
