use serial_test::serial;

use crate::core::{
    contact_store::ContactStore,
    sqlite_store::SqliteStore,
    Error,
};

use super::{
    store_checks::*,
    new_contact,
    working_path,
    remove_working_path,
};

fn get_store() -> SqliteStore {
    let mut store = SqliteStore::new();
    match store.open(":memory:") {
        Ok(_) => store,
        Err(e) => panic!("opening db error: {}", e),
    }
}

#[test]
fn test_insert_assigns_id() {
    check_insert_assigns_id(&mut get_store());
}

#[test]
fn test_update_keeps_id() {
    check_update_keeps_id(&mut get_store());
}

#[test]
fn test_unique_phone() {
    check_unique_phone(&mut get_store());
}

#[test]
fn test_update_missing_id() {
    check_update_missing_id(&mut get_store());
}

#[test]
fn test_find_by_phone() {
    check_find_by_phone(&mut get_store());
}

#[test]
fn test_search() {
    check_search(&mut get_store());
}

#[test]
fn test_search_wildcards_are_literal() {
    check_search_wildcards_are_literal(&mut get_store());
}

#[test]
fn test_exact_name_lookups() {
    check_exact_name_lookups(&mut get_store());
}

#[test]
fn test_not_opened() {
    let mut store = SqliteStore::new();
    assert_eq!(store.is_open(), false);
    assert!(matches!(store.count(), Err(Error::State(_))));
    assert!(matches!(store.find_all(), Err(Error::State(_))));

    let result = store.save(&new_contact("555-123-4567", "Jane", "Doe"));
    assert!(matches!(result, Err(Error::State(_))));
}

#[test]
#[serial]
fn test_reopen_keeps_contacts() {
    let dir = working_path("sqlite_store_reopen");
    let path = format!("{}/phonebook.db", dir);

    let mut store = SqliteStore::new();
    store.open(&path).expect("opening db");
    let jane = store.save(&new_contact("555-123-4567", "Jane", "Doe")).unwrap();
    store.close();
    assert_eq!(store.is_open(), false);

    let mut store = SqliteStore::new();
    store.open(&path).expect("reopening db");
    assert_eq!(store.count().unwrap(), 1);
    assert_eq!(store.find_by_phone_number("555-123-4567").unwrap(), Some(jane.clone()));

    let john = store.save(&new_contact("636 856 789", "John", "Smith")).unwrap();
    assert!(john.id().unwrap() > jane.id().unwrap());
    store.close();

    remove_working_path(&dir);
}
