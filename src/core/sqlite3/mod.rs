pub(crate) mod models;
pub(crate) mod schema;
mod sql;

use crate::core::sqlite3::models::{
    ContactRow,
    NewContactRow,
    ContactChanges,
};

use crate::core::sqlite3::schema::contact::{
    dsl::contact,
    id           as c_id,
    first_name   as c_first_name,
    last_name    as c_last_name,
    phone_number as c_phone_number,
};

use diesel::prelude::*;
use diesel::result::Error;
use diesel::sql_types::Text;

diesel::define_sql_function! {
    /// Unicode-aware lowercase, backed by `str::to_lowercase`.
    fn unicode_lower(x: Text) -> Text;
}

// Per connection; must run before any name search.
pub(crate) fn register_fns(
    conn: &mut SqliteConnection
) -> Result<(), Error> {
    unicode_lower_utils::register_impl(conn, |x: String| x.to_lowercase())
}

pub(crate) fn create_tbs(
    conn: &mut SqliteConnection
) -> bool {
    diesel::sql_query(sql::SET_USER_VERSION).execute(conn).is_ok()     &&
    diesel::sql_query(sql::CREATE_CONTACT_TABLE).execute(conn).is_ok() &&
    diesel::sql_query(sql::CREATE_CONTACT_LAST_NAME_INDEX).execute(conn).is_ok()
}

// ---------------------------------------------------------------
// "INSERT INTO contact(\
// first_name, last_name, email, address, phone_number) \
// VALUES(?, ?, ?, ?, ?)";
// "SELECT * FROM contact WHERE phone_number = ?"
// ---------------------------------------------------------------
pub(crate) fn insert_contact(
    conn: &mut SqliteConnection,
    v: NewContactRow
) -> Result<ContactRow, Error> {
    conn.transaction::<_, Error, _>(|conn| {
        diesel::insert_into(contact)
            .values(&v)
            .execute(conn)?;

        contact.filter(c_phone_number.eq(v.phone_number))
            .select(ContactRow::as_select())
            .first(conn)
    })
}

// ---------------------------------------------------------------
// "UPDATE contact SET first_name = ?, last_name = ?, email = ?, \
//        address = ?, phone_number = ? WHERE id = ?"
// ---------------------------------------------------------------
pub(crate) fn update_contact(
    conn: &mut SqliteConnection,
    id: i64,
    v: ContactChanges
) -> Result<bool, Error> {
    diesel::update(contact.find(id))
        .set(&v)
        .execute(conn)
        .and_then(|num| Ok(num > 0))
}

// -------------------------------
// "SELECT COUNT(*) FROM contact"
// -------------------------------
pub(crate) fn count_contacts(
    conn: &mut SqliteConnection
) -> Result<i64, Error> {
    contact.count().get_result(conn)
}

// ---------------------------------------
// "SELECT * FROM contact ORDER BY id"
// ---------------------------------------
pub(crate) fn all_contacts(
    conn: &mut SqliteConnection
) -> Result<Vec<ContactRow>, Error> {
    contact.order(c_id)
        .select(ContactRow::as_select())
        .load(conn)
}

// ---------------------------------------
// "SELECT * FROM contact WHERE id = ?"
// ---------------------------------------
pub(crate) fn get_contact(
    conn: &mut SqliteConnection,
    id: i64
) -> Result<Option<ContactRow>, Error> {
    contact.find(id)
        .select(ContactRow::as_select())
        .first(conn)
        .optional()
}

// -------------------------------------------------
// "SELECT * FROM contact WHERE phone_number = ?"
// -------------------------------------------------
pub(crate) fn contact_by_phone(
    conn: &mut SqliteConnection,
    phone: &str
) -> Result<Option<ContactRow>, Error> {
    contact.filter(c_phone_number.eq(phone))
        .select(ContactRow::as_select())
        .load(conn)
        .and_then(|mut v| Ok(v.pop()))
}

// -------------------------------------------------------------
// "SELECT * FROM contact WHERE first_name = ? ORDER BY id LIMIT 1"
// -------------------------------------------------------------
pub(crate) fn contact_by_first_name(
    conn: &mut SqliteConnection,
    first: &str
) -> Result<Option<ContactRow>, Error> {
    contact.filter(c_first_name.eq(first))
        .order(c_id)
        .select(ContactRow::as_select())
        .first(conn)
        .optional()
}

// -----------------------------------------------------------
// "SELECT * FROM contact WHERE last_name = ? ORDER BY id"
// -----------------------------------------------------------
pub(crate) fn contacts_by_last_name(
    conn: &mut SqliteConnection,
    last: &str
) -> Result<Vec<ContactRow>, Error> {
    contact.filter(c_last_name.eq(last))
        .order(c_id)
        .select(ContactRow::as_select())
        .load(conn)
}

// ------------------------------------------------------------------
// "SELECT * FROM contact \
//        WHERE unicode_lower(first_name) LIKE ? ESCAPE '\' \
//        OR unicode_lower(last_name) LIKE ? ESCAPE '\' \
//        ORDER BY id"
// ------------------------------------------------------------------
pub(crate) fn search_either(
    conn: &mut SqliteConnection,
    first: &str,
    last: &str
) -> Result<Vec<ContactRow>, Error> {
    let first = contains_pattern(first);
    let last = contains_pattern(last);
    contact.filter(unicode_lower(c_first_name).like(first).escape('\\')
            .or(unicode_lower(c_last_name).like(last).escape('\\')))
        .order(c_id)
        .select(ContactRow::as_select())
        .load(conn)
}

// ------------------------------------------------------------------
// "SELECT * FROM contact \
//        WHERE unicode_lower(first_name) LIKE ? ESCAPE '\' \
//        AND unicode_lower(last_name) LIKE ? ESCAPE '\' \
//        ORDER BY id"
// ------------------------------------------------------------------
pub(crate) fn search_both(
    conn: &mut SqliteConnection,
    first: &str,
    last: &str
) -> Result<Vec<ContactRow>, Error> {
    let first = contains_pattern(first);
    let last = contains_pattern(last);
    contact.filter(unicode_lower(c_first_name).like(first).escape('\\'))
        .filter(unicode_lower(c_last_name).like(last).escape('\\'))
        .order(c_id)
        .select(ContactRow::as_select())
        .load(conn)
}

// Both sides are lowercased in Unicode, SQLite LIKE alone folds ASCII only.
// Wildcards in the input must match literally.
fn contains_pattern(input: &str) -> String {
    let mut pattern = String::with_capacity(input.len() + 2);
    pattern.push('%');
    for c in input.to_lowercase().chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}
