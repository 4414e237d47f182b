use crate::core::{
    contact::Contact,
    Result,
};

/// Persistence behind the phone book.
///
/// Implementations must keep phone numbers unique across all stored
/// contacts and must never reuse an identifier.
pub trait ContactStore {
    /// Inserts `contact` when it has no identifier yet, otherwise updates the
    /// record with that identifier. Returns the stored form.
    fn save(&mut self,
        contact: &Contact
    ) -> Result<Contact>;

    fn count(&mut self) -> Result<u64>;

    /// All contacts in insertion order.
    fn find_all(&mut self) -> Result<Vec<Contact>>;

    fn find_by_phone_number(&mut self,
        phone: &str
    ) -> Result<Option<Contact>>;

    /// Contacts whose first name contains `first` or whose last name
    /// contains `last`, ignoring case.
    fn search_or(&mut self,
        first: &str,
        last: &str
    ) -> Result<Vec<Contact>>;

    /// Contacts whose first name contains `first` and whose last name
    /// contains `last`, ignoring case.
    fn search_and(&mut self,
        first: &str,
        last: &str
    ) -> Result<Vec<Contact>>;

    fn find_by_id(&mut self,
        id: i64
    ) -> Result<Option<Contact>>;

    fn find_by_first_name(&mut self,
        first: &str
    ) -> Result<Option<Contact>>;

    fn find_by_last_name(&mut self,
        last: &str
    ) -> Result<Vec<Contact>>;
}
