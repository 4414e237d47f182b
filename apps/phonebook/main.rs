use std::io::{self, IsTerminal};
use clap::Parser;
use log::LevelFilter;
use reedline::{Reedline, Signal};

mod prompt;
use prompt::PhonebookPrompt;

use phonebook::{
    configuration as cfg,
    logger,
    Error,
    error::Result,
    ContactService,
    Controller,
    LineSource,
    ReaderInput,
    SqliteStore,
};

#[derive(Parser, Debug)]
#[command(name = "phonebook")]
#[command(version = "1.0")]
#[command(about = "Console phone book", long_about = None)]
struct Options {
    /// The configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<String>,

    /// The SQLite database file holding the contacts
    #[arg(short, long, value_name = "PATH")]
    database: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(short, long, value_name = "LEVEL")]
    log_level: Option<LevelFilter>,
}

struct EditorInput {
    editor: Reedline,
    prompt: PhonebookPrompt,
}

impl LineSource for EditorInput {
    fn read_line(&mut self) -> Result<Option<String>> {
        match self.editor.read_line(&self.prompt) {
            Ok(Signal::Success(line)) => Ok(Some(line)),
            Ok(_) => Ok(None),
            Err(e) => Err(Error::Io(format!("Reading console input error: {e}"))),
        }
    }
}

fn run_session<R: LineSource>(service: &mut ContactService, input: R) -> Result<()> {
    Controller::new(service, input, io::stdout()).run()
}

fn main() {
    let opts = Options::parse();
    let mut b = cfg::Builder::new();
    if let Some(path) = opts.config.as_ref() {
        if let Err(e) = b.load(path) {
            eprintln!("Loading config file {} error: {e}", path);
            std::process::exit(1);
        }
    }
    if let Some(path) = opts.database.as_ref() {
        b.with_database_path(path);
    }
    if let Some(level) = opts.log_level {
        b.with_log_level(level);
    }

    let cfg = match b.build() {
        Ok(v) => v,
        Err(e) => {
            eprintln!("Building configuration error: {e}");
            std::process::exit(1);
        }
    };

    #[cfg(feature = "inspect")] {
        cfg.dump();
    }

    if let Err(e) = logger::setup(cfg.log_level(), cfg.log_file()) {
        eprintln!("Setting up logger error: {e}");
        std::process::exit(1);
    }

    let mut store = SqliteStore::new();
    if let Err(e) = store.open(cfg.database_path()) {
        eprintln!("Opening contact database {} error: {e}", cfg.database_path());
        logger::teardown();
        std::process::exit(1);
    }

    let mut service = ContactService::new(Box::new(store));
    let rc = match io::stdin().is_terminal() {
        true => run_session(&mut service, EditorInput {
            editor: Reedline::create(),
            prompt: PhonebookPrompt::new(cfg.database_path()),
        }),
        false => run_session(&mut service, ReaderInput::new(io::stdin().lock())),
    };

    logger::teardown();
    if let Err(e) = rc {
        eprintln!("Phone book error: {e}");
        std::process::exit(1);
    }
}
