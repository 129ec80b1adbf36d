use env_logger::{Builder, Env};

/// Logs at `info` and above unless `RUST_LOG` says otherwise.
pub fn setup_logging() {
    Builder::from_env(Env::default().default_filter_or("info")).init();
}
