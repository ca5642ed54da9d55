use log::{error, log_enabled, Level};

/// Initializes the logger with the `env_logger` crate.
///
/// Honors `RUST_LOG`; defaults to `info` so decoded values are shown.
/// Calling it more than once is harmless.
pub fn init_logger() {
    let env = env_logger::Env::default().default_filter_or("info");
    let _ = env_logger::Builder::from_env(env).try_init();
}

/// Logs an error message.
pub fn log_error(message: &str) {
    if log_enabled!(Level::Error) {
        error!("{message}");
    }
}
