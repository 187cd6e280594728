use dirs::home_dir;
use std::{
    env, fs, io,
    path::{Path, PathBuf},
    sync::Once,
};

const DEFAULT_DIR_NAME: &str = ".budget_tracker";

static TRACING_INIT: Once = Once::new();

/// Initializes the global tracing subscriber with sensible defaults.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter =
            EnvFilter::from_default_env().add_directive("budget_tracker=info".parse().unwrap());

        fmt().with_env_filter(filter).init();
    });
}

/// Returns the application-specific data directory, defaulting to `~/.budget_tracker`.
pub fn app_data_dir() -> PathBuf {
    if let Some(custom) = env::var_os("BUDGET_TRACKER_HOME") {
        return PathBuf::from(custom);
    }
    home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

/// Creates `path` and any missing parents.
pub fn ensure_dir(path: &Path) -> io::Result<()> {
    fs::create_dir_all(path)
}
