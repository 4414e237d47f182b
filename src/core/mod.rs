mod sqlite3;

pub mod logger;
pub mod config;
pub mod default_configuration;
pub mod error;
pub mod contact;
pub mod phone;
pub mod contact_store;
pub mod sqlite_store;
pub mod memory_store;
pub mod contact_service;

pub use crate::core::error::{Error, Result};
