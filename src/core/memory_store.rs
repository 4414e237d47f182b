use std::collections::BTreeMap;
use log::debug;

use crate::core::{
    contact::Contact,
    contact_store::ContactStore,
    error::{Error, Result},
};

/// Contact store kept in process memory.
///
/// Follows the same rules as the SQLite store: identifiers come from a
/// counter that only grows, and phone numbers are unique.
pub struct MemoryStore {
    contacts: BTreeMap<i64, Contact>,
    last_id : i64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            contacts: BTreeMap::new(),
            last_id : 0,
        }
    }

    fn phone_owner(&self, phone: &str) -> Option<i64> {
        self.contacts.values()
            .find(|c| c.phone_number() == phone)
            .and_then(|c| c.id())
    }

    fn filtered<F>(&self, predicate: F) -> Vec<Contact>
    where F: Fn(&Contact) -> bool {
        self.contacts.values()
            .filter(|c| predicate(c))
            .cloned()
            .collect()
    }
}

impl ContactStore for MemoryStore {
    fn save(&mut self, contact: &Contact) -> Result<Contact> {
        let owner = self.phone_owner(contact.phone_number());
        if owner.is_some() && owner != contact.id() {
            return Err(Error::Constraint(format!(
                "Unique constraint violated: phone number {} already stored",
                contact.phone_number()
            )));
        }

        let mut saved = contact.clone();
        match contact.id() {
            None => {
                self.last_id += 1;
                saved.assign_id(self.last_id);
                debug!("Inserted contact with id {}", self.last_id);
            },
            Some(id) => {
                if !self.contacts.contains_key(&id) {
                    return Err(Error::NotFound(format!("No contact with id {} to update", id)));
                }
                debug!("Updated contact with id {}", id);
            }
        }

        if let Some(id) = saved.id() {
            self.contacts.insert(id, saved.clone());
        }
        Ok(saved)
    }

    fn count(&mut self) -> Result<u64> {
        Ok(self.contacts.len() as u64)
    }

    fn find_all(&mut self) -> Result<Vec<Contact>> {
        Ok(self.contacts.values().cloned().collect())
    }

    fn find_by_phone_number(&mut self, phone: &str) -> Result<Option<Contact>> {
        Ok(self.contacts.values()
            .find(|c| c.phone_number() == phone)
            .cloned())
    }

    fn search_or(&mut self, first: &str, last: &str) -> Result<Vec<Contact>> {
        Ok(self.filtered(|c| {
            contains_ignore_case(c.first_name(), first) ||
            contains_ignore_case(c.last_name(), last)
        }))
    }

    fn search_and(&mut self, first: &str, last: &str) -> Result<Vec<Contact>> {
        Ok(self.filtered(|c| {
            contains_ignore_case(c.first_name(), first) &&
            contains_ignore_case(c.last_name(), last)
        }))
    }

    fn find_by_id(&mut self, id: i64) -> Result<Option<Contact>> {
        Ok(self.contacts.get(&id).cloned())
    }

    fn find_by_first_name(&mut self, first: &str) -> Result<Option<Contact>> {
        Ok(self.contacts.values()
            .find(|c| c.first_name() == first)
            .cloned())
    }

    fn find_by_last_name(&mut self, last: &str) -> Result<Vec<Contact>> {
        Ok(self.filtered(|c| c.last_name() == last))
    }
}

fn contains_ignore_case(text: &str, needle: &str) -> bool {
    text.to_lowercase().contains(&needle.to_lowercase())
}
