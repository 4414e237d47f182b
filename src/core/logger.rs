use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::sync::Mutex;
use log::{
    LevelFilter,
    Metadata,
    Record
};

use crate::core::{Error, Result};

// Log lines never go to stdout, which belongs to the console session.
static MY_LOGGER: MyLogger = MyLogger {
    file: Mutex::new(None),
};

struct MyLogger {
    file: Mutex<Option<File>>,
}

impl log::Log for MyLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let line = format!(
            "[{}] [{}] {}\n",
            record.target(),
            record.level(),
            record.args()
        );

        let Ok(mut guard) = self.file.lock() else {
            return;
        };
        match guard.as_mut() {
            Some(file) => { _ = file.write_all(line.as_bytes()); },
            None => { _ = io::stderr().write_all(line.as_bytes()); },
        }
    }

    fn flush(&self) {
        if let Ok(mut guard) = self.file.lock() {
            match guard.as_mut() {
                Some(file) => { _ = file.flush(); },
                None => { _ = io::stderr().flush(); },
            }
        }
    }
}

pub fn setup(level: LevelFilter, file: Option<&str>) -> Result<()> {
    let output = match file {
        Some(path) => Some(OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| Error::Io(format!("Opening log file {} error: {e}", path)))?
        ),
        None => None,
    };

    if let Ok(mut guard) = MY_LOGGER.file.lock() {
        *guard = output;
    }

    // Only the first call installs the logger; later calls just reconfigure it.
    _ = log::set_logger(&MY_LOGGER);
    log::set_max_level(level);
    Ok(())
}

pub fn teardown() {
    log::logger().flush();
    log::set_max_level(LevelFilter::Off);
    if let Ok(mut guard) = MY_LOGGER.file.lock() {
        *guard = None;
    }
}
