use std::fs;
use log::{info, debug, error, LevelFilter};
use serial_test::serial;

use crate::core::logger;
use super::{working_path, remove_working_path};

#[test]
#[serial]
fn test_logger_file() {
    let dir = working_path("logger_file");
    let path = format!("{}/phonebook.log", dir);

    logger::setup(LevelFilter::Info, Some(path.as_str())).expect("setting up logger");
    info!("info: testing....");
    debug!("debug: testing...");
    error!("error: testing...");
    logger::teardown();

    let text = fs::read_to_string(&path).unwrap();
    assert!(text.contains("[INFO] info: testing...."));
    assert!(text.contains("[ERROR] error: testing..."));
    assert!(!text.contains("debug: testing"));

    remove_working_path(&dir);
}

#[test]
#[serial]
fn test_logger_bad_file() {
    let result = logger::setup(LevelFilter::Info, Some("no-such-dir/phonebook.log"));
    assert!(result.is_err());
    logger::teardown();
}
