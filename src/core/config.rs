use log::LevelFilter;

pub trait Config {
    /// Path of the SQLite database file, or `:memory:`.
    fn database_path(&self) -> &str;

    fn log_level(&self) -> LevelFilter;
    fn log_file(&self) -> Option<&str>;

    #[cfg(feature = "inspect")]
    fn dump(&self);
}
