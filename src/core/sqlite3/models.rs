use diesel::prelude::*;
use super::schema::contact;

#[derive(Queryable, Selectable, Debug)]
#[diesel(table_name = contact)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub(crate) struct ContactRow {
    pub(crate) id: i64,
    pub(crate) first_name: String,
    pub(crate) last_name: String,
    pub(crate) email: Option<String>,
    pub(crate) address: Option<String>,
    pub(crate) phone_number: String,
}

#[derive(Insertable)]
#[diesel(table_name = contact)]
pub(crate) struct NewContactRow<'a> {
    pub(crate) first_name: &'a str,
    pub(crate) last_name: &'a str,
    pub(crate) email: Option<&'a str>,
    pub(crate) address: Option<&'a str>,
    pub(crate) phone_number: &'a str,
}

// Every field is overwritten on edit, including clearing email/address.
#[derive(AsChangeset)]
#[diesel(table_name = contact)]
#[diesel(treat_none_as_null = true)]
pub(crate) struct ContactChanges<'a> {
    pub(crate) first_name: &'a str,
    pub(crate) last_name: &'a str,
    pub(crate) email: Option<&'a str>,
    pub(crate) address: Option<&'a str>,
    pub(crate) phone_number: &'a str,
}
