use crate::core::{
    contact::Contact,
    contact_store::ContactStore,
    Result,
};

/// Thin facade over a [`ContactStore`] used by the console.
pub struct ContactService {
    store: Box<dyn ContactStore>,
}

impl ContactService {
    pub fn new(store: Box<dyn ContactStore>) -> Self {
        Self { store }
    }

    pub fn save_contact(&mut self, contact: &Contact) -> Result<Contact> {
        self.store.save(contact)
    }

    pub fn contacts_count(&mut self) -> Result<u64> {
        self.store.count()
    }

    pub fn all_contacts(&mut self) -> Result<Vec<Contact>> {
        self.store.find_all()
    }

    pub fn contact_by_phone_number(&mut self, phone: &str) -> Result<Option<Contact>> {
        self.store.find_by_phone_number(phone)
    }

    pub fn contact_by_id(&mut self, id: i64) -> Result<Option<Contact>> {
        self.store.find_by_id(id)
    }

    pub fn contact_by_first_name(&mut self, first: &str) -> Result<Option<Contact>> {
        self.store.find_by_first_name(first)
    }

    pub fn contacts_by_last_name(&mut self, last: &str) -> Result<Vec<Contact>> {
        self.store.find_by_last_name(last)
    }

    /// Matches `name` against either the first or the last name.
    pub fn search_by_name(&mut self, name: &str) -> Result<Vec<Contact>> {
        self.store.search_or(name, name)
    }

    pub fn search_by_first_and_last_name(&mut self, first: &str, last: &str) -> Result<Vec<Contact>> {
        self.store.search_and(first, last)
    }
}
