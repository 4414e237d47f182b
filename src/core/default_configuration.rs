use std::env;
use std::fmt;
use std::fs;
use serde::Deserialize;
use log::LevelFilter;

use crate::core::{
    config::Config,
    Error,
    Result,
};

pub const DEFAULT_DATABASE_PATH: &str = "phonebook.db";

#[derive(Clone, Deserialize)]
struct LogCfg {
    #[serde(rename = "level")]
    level   : Option<String>,
    #[serde(rename = "logFile")]
    file    : Option<String>,

    #[serde(skip)]
    deserde_level: Option<LevelFilter>,
}

#[derive(Clone, Deserialize)]
struct Configuration {
    #[serde(rename = "database")]
    database    : Option<String>,

    #[serde(rename = "logger")]
    logger      : Option<LogCfg>,
}

pub struct Builder<'a> {
    database    : Option<String>,
    log_level   : Option<LevelFilter>,
    log_file    : Option<&'a str>,
    cfg         : Option<Configuration>,
}

impl<'a> Builder<'a> {
    pub fn new() -> Builder<'a> {
        Self {
            database    : None,
            log_level   : None,
            log_file    : None,
            cfg         : None,
        }
    }

    pub fn with_database_path(&mut self, input: &str) -> &mut Self {
        self.database = Some(expand_home(input));
        self
    }

    pub fn with_log_level(&mut self, level: LevelFilter) -> &mut Self {
        self.log_level = Some(level);
        self
    }

    pub fn with_logger(&mut self, level: LevelFilter, file: Option<&'a str>) -> &mut Self {
        self.log_level = Some(level);
        self.log_file = file;
        self
    }

    pub fn load(&mut self, input: &str) -> Result<&mut Self> {
        let data = fs::read_to_string(input).map_err(|e| {
            Error::Io(format!("Reading config error: {}", e))
        })?;

        let cfg = serde_json::from_str::<Configuration>(&data).map_err(|e| {
            Error::Argument(format!("bad config, error: {}", e))
        })?;

        self.cfg = Some(cfg);
        Ok(self)
    }

    pub fn build(&mut self) -> Result<Box<dyn Config>> {
        Ok(Box::new(Configuration::new(self)?))
    }
}

impl Configuration {
    fn new(b: &Builder) -> Result<Self> {
        let mut cfg = match b.cfg.as_ref() {
            Some(cfg) => cfg.clone(),
            None => Self {
                database: None,
                logger  : None,
            }
        };

        cfg.database = match b.database.as_ref() {
            Some(path) => Some(path.clone()),
            None => cfg.database.as_deref().map(expand_home),
        };

        if cfg.database.as_deref().map_or(false, |v| v.is_empty()) {
            return Err(Error::Argument(format!("Database path must not be empty")));
        }

        let mut logger = cfg.logger.take().unwrap_or(LogCfg {
            level: None,
            file: None,
            deserde_level: None,
        });

        let level = match b.log_level {
            Some(level) => level,
            None => logger.level.as_ref()
                .and_then(|v| v.parse::<LevelFilter>().ok())
                .unwrap_or(LevelFilter::Info),
        };
        logger.level = Some(level.to_string());
        logger.deserde_level = Some(level);

        if let Some(file) = b.log_file {
            logger.file = Some(file.to_string());
        }

        cfg.logger = Some(logger);
        Ok(cfg)
    }
}

impl Config for Configuration {
    fn database_path(&self) -> &str {
        self.database.as_deref().unwrap_or(DEFAULT_DATABASE_PATH)
    }

    fn log_level(&self) -> LevelFilter {
        self.logger.as_ref()
            .and_then(|v| v.deserde_level)
            .unwrap_or(LevelFilter::Info)
    }

    fn log_file(&self) -> Option<&str> {
        self.logger.as_ref().and_then(|v| v.file.as_deref())
    }

    #[cfg(feature = "inspect")]
    fn dump(&self) {
        println!("config: {}", self);
    }
}

impl fmt::Display for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "database:{},", self.database_path())?;
        write!(f, "\tlogLevel:{},", self.log_level())?;
        if let Some(file) = self.log_file() {
            write!(f, "\tlogFile:{}", file)?;
        }
        Ok(())
    }
}

fn expand_home(input: &str) -> String {
    match input.strip_prefix("~") {
        Some(rest) => {
            let home = env::var("HOME").unwrap_or_else(|_| ".".into());
            format!("{}{}", home, rest)
        },
        None => input.to_string(),
    }
}
