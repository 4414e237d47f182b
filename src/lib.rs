pub mod core;
pub mod console;

pub use crate::core::{
    error::{self, Error},
    contact::{self, Contact, ContactBuilder},
    contact_store::{self, ContactStore},
    sqlite_store::{self, SqliteStore},
    memory_store::{self, MemoryStore},
    contact_service::{self, ContactService},
    phone::{self, is_valid_phone_number},
    config::{self, Config},
    logger,

    default_configuration as configuration,
};

pub use crate::console::{
    input::{self, LineSource, ScriptedInput, ReaderInput},
    format,
    controller::{self, Controller},
};
