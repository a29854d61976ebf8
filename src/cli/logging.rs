use log::LevelFilter;

/// Sends diagnostics to stderr, hiding anything below warning level.
/// Calling this more than once is harmless.
pub fn init() {
    let _ = env_logger::Builder::new()
        .filter_level(LevelFilter::Warn)
        .format_timestamp(None)
        .format_target(false)
        .try_init();
}
