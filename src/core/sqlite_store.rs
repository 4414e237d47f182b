use diesel::prelude::*;
use log::{debug, info, warn};

use crate::core::{
    contact::{Contact, ContactBuilder},
    contact_store::ContactStore,
    error::{Error, Result},
};

use crate::core::sqlite3::{
    models::{ContactRow, NewContactRow, ContactChanges},
    create_tbs,
    register_fns,
    insert_contact,
    update_contact,
    count_contacts,
    all_contacts,
    get_contact,
    contact_by_phone,
    contact_by_first_name,
    contacts_by_last_name,
    search_either,
    search_both,
};

pub struct SqliteStore {
    connection: Option<SqliteConnection>,
}

impl SqliteStore {
    pub fn new() -> Self {
        Self { connection: None }
    }

    /// Opens (or creates) the database at `path`; `:memory:` is accepted.
    pub fn open(&mut self, path: &str) -> Result<()> {
        let mut connection = SqliteConnection::establish(path)?;
        register_fns(&mut connection)?;
        if !create_tbs(&mut connection) {
            return Err(Error::State(format!("Failed to create contact table in {}", path)));
        }

        info!("Contact store opened at {}", path);
        self.connection = Some(connection);
        Ok(())
    }

    pub fn close(&mut self) {
        self.connection = None;
    }

    pub fn is_open(&self) -> bool {
        self.connection.is_some()
    }

    fn conn(&mut self) -> Result<&mut SqliteConnection> {
        self.connection.as_mut().ok_or_else(|| {
            Error::State(format!("Contact store is not opened"))
        })
    }
}

impl ContactStore for SqliteStore {
    fn save(&mut self, contact: &Contact) -> Result<Contact> {
        let saved = match contact.id() {
            None => {
                let row = NewContactRow {
                    first_name  : contact.first_name(),
                    last_name   : contact.last_name(),
                    email       : contact.email(),
                    address     : contact.address(),
                    phone_number: contact.phone_number(),
                };
                let row = insert_contact(self.conn()?, row).map_err(|e| {
                    let e = Error::from(e);
                    warn!("Inserting contact {} error: {}", contact, e);
                    e
                })?;
                debug!("Inserted contact with id {}", row.id);
                to_contact(row)
            },
            Some(id) => {
                let changes = ContactChanges {
                    first_name  : contact.first_name(),
                    last_name   : contact.last_name(),
                    email       : contact.email(),
                    address     : contact.address(),
                    phone_number: contact.phone_number(),
                };
                let updated = update_contact(self.conn()?, id, changes).map_err(|e| {
                    let e = Error::from(e);
                    warn!("Updating contact {} error: {}", contact, e);
                    e
                })?;
                if !updated {
                    return Err(Error::NotFound(format!("No contact with id {} to update", id)));
                }
                debug!("Updated contact with id {}", id);
                contact.clone()
            }
        };
        Ok(saved)
    }

    fn count(&mut self) -> Result<u64> {
        count_contacts(self.conn()?)
            .map(|n| n as u64)
            .map_err(|e| Error::from(e))
    }

    fn find_all(&mut self) -> Result<Vec<Contact>> {
        all_contacts(self.conn()?)
            .map(to_contacts)
            .map_err(|e| Error::from(e))
    }

    fn find_by_phone_number(&mut self, phone: &str) -> Result<Option<Contact>> {
        contact_by_phone(self.conn()?, phone)
            .map(|v| v.map(to_contact))
            .map_err(|e| Error::from(e))
    }

    fn search_or(&mut self, first: &str, last: &str) -> Result<Vec<Contact>> {
        search_either(self.conn()?, first, last)
            .map(to_contacts)
            .map_err(|e| Error::from(e))
    }

    fn search_and(&mut self, first: &str, last: &str) -> Result<Vec<Contact>> {
        search_both(self.conn()?, first, last)
            .map(to_contacts)
            .map_err(|e| Error::from(e))
    }

    fn find_by_id(&mut self, id: i64) -> Result<Option<Contact>> {
        get_contact(self.conn()?, id)
            .map(|v| v.map(to_contact))
            .map_err(|e| Error::from(e))
    }

    fn find_by_first_name(&mut self, first: &str) -> Result<Option<Contact>> {
        contact_by_first_name(self.conn()?, first)
            .map(|v| v.map(to_contact))
            .map_err(|e| Error::from(e))
    }

    fn find_by_last_name(&mut self, last: &str) -> Result<Vec<Contact>> {
        contacts_by_last_name(self.conn()?, last)
            .map(to_contacts)
            .map_err(|e| Error::from(e))
    }
}

fn to_contact(row: ContactRow) -> Contact {
    let mut b = ContactBuilder::new(&row.phone_number);
    b.with_id(row.id)
        .with_name(&row.first_name, &row.last_name);
    if let Some(email) = row.email.as_deref() {
        b.with_email(email);
    }
    if let Some(address) = row.address.as_deref() {
        b.with_address(address);
    }
    b.build()
}

fn to_contacts(rows: Vec<ContactRow>) -> Vec<Contact> {
    rows.into_iter().map(to_contact).collect()
}
