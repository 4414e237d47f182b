use log::LevelFilter;
use phonebook::{
    Config,
    configuration,
};

/**
# default_configuration::Builder
 - new
 - with_database_path
 - with_log_level
 - with_logger
 - load
 - build

# trait Config
 - database_path
 - log_level
 - log_file
 */
#[test]
fn test_build_cfg() {
    let cfg: Box<dyn Config>;

    cfg = configuration::Builder::new()
        .with_database_path("tests.db")
        .with_log_level(LevelFilter::Warn)
        .build()
        .map_err(|_| assert!(false))
        .unwrap();

    assert_eq!(cfg.database_path(), "tests.db");
    assert_eq!(cfg.log_level(), LevelFilter::Warn);
    assert_eq!(cfg.log_file(), None);

    #[cfg(feature = "inspect")]
    cfg.dump();
}

#[test]
fn test_load_cfg() {
    let path = match std::fs::metadata("phonebook.conf") {
        Ok(_) => "phonebook.conf",
        Err(_) => "tests/apitests/phonebook.conf",
    };
    let cfg = configuration::Builder::new()
        .load(path)
        .map_err(|e| panic!("{e}"))
        .unwrap()
        .build()
        .unwrap();

    assert_eq!(cfg.database_path(), "apitests-phonebook.db");
    assert_eq!(cfg.log_level(), LevelFilter::Debug);
    assert_eq!(cfg.log_file(), Some("apitests-phonebook.log"));
}
