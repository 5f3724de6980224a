use std::path::PathBuf;

pub const DEFAULT_DB_PATH: &str = "~/.config/pagewatch/pagewatch.db";
pub const DB_PATH_ENV: &str = "PAGEWATCH_DB";

/// Process configuration, resolved once in `main` and passed by reference
/// to every handler. The flag wins over the environment, the environment
/// over the default.
#[derive(Debug, Clone)]
pub struct Settings {
    pub database: PathBuf,
}

impl Settings {
    pub fn resolve(database_flag: Option<&str>) -> Self {
        let raw = database_flag
            .map(str::to_string)
            .or_else(|| std::env::var(DB_PATH_ENV).ok())
            .unwrap_or_else(|| DEFAULT_DB_PATH.to_string());

        Self::with_database(PathBuf::from(shellexpand::tilde(&raw).into_owned()))
    }

    pub fn with_database(database: PathBuf) -> Self {
        Self { database }
    }
}
