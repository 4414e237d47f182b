pub(crate) const SET_USER_VERSION: &str = "PRAGMA user_version = 1";

pub(crate) const CREATE_CONTACT_TABLE: &str = "
        CREATE TABLE IF NOT EXISTS contact(\
        id INTEGER PRIMARY KEY AUTOINCREMENT, \
        first_name TEXT NOT NULL, \
        last_name TEXT NOT NULL, \
        email TEXT, \
        address TEXT, \
        phone_number TEXT NOT NULL, \
        CONSTRAINT uk_contact_phone_number UNIQUE (phone_number)\
        )
    ";

pub(crate) const CREATE_CONTACT_LAST_NAME_INDEX: &str = "
        CREATE INDEX IF NOT EXISTS idx_contact_last_name ON contact(last_name)
    ";
