use crate::logging::parse_log_level;

#[test]
fn level_names_are_case_insensitive() {
    assert_eq!(parse_log_level("debug"), Some(tracing::Level::DEBUG));
    assert_eq!(parse_log_level("TRACE"), Some(tracing::Level::TRACE));
    assert_eq!(parse_log_level(" warn "), Some(tracing::Level::WARN));
}

#[test]
fn verbose_is_an_alias_for_debug() {
    assert_eq!(parse_log_level("Verbose"), Some(tracing::Level::DEBUG));
}

#[test]
fn unknown_level_is_rejected() {
    assert_eq!(parse_log_level("loud"), None);
}
