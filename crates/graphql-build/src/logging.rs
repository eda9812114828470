const DEFAULT_LOG_LEVEL: tracing::Level = tracing::Level::INFO;

/// Accepts any level name `tracing` understands (case-insensitively), plus
/// `verbose` as an alias for `debug`.
pub(crate) fn parse_log_level(value: &str) -> Option<tracing::Level> {
    let value = value.trim();
    if value.eq_ignore_ascii_case("verbose") {
        return Some(tracing::Level::DEBUG);
    }
    value.parse().ok()
}

/// Install a stderr subscriber so rendered documents alone reach stdout.
pub(crate) fn init(verbose: bool) {
    let env_level = std::env::var("LOG_LEVEL").ok();
    let parsed = env_level.as_deref().map(parse_log_level);
    let log_level = match (verbose, parsed) {
        (true, _) => tracing::Level::DEBUG,
        (false, Some(Some(level))) => level,
        (false, Some(None) | None) => DEFAULT_LOG_LEVEL,
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .init();
    log::trace!("Logging at `{log_level}`.");

    if let (Some(value), Some(None)) = (env_level, parsed) {
        log::warn!("Ignoring unrecognized `LOG_LEVEL` value `{value}`.");
    }
}
