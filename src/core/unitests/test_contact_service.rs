use crate::core::{
    contact_service::ContactService,
    memory_store::MemoryStore,
    Error,
};

use super::new_contact;

fn get_service() -> ContactService {
    let mut service = ContactService::new(Box::new(MemoryStore::new()));
    service.save_contact(&new_contact("555-123-4567", "Jane", "Doe")).unwrap();
    service.save_contact(&new_contact("636 856 789", "John", "Smith")).unwrap();
    service
}

#[test]
fn test_count_and_list() {
    let mut service = get_service();
    assert_eq!(service.contacts_count().unwrap(), 2);

    let all = service.all_contacts().unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].first_name(), "Jane");
    assert_eq!(all[1].first_name(), "John");
}

#[test]
fn test_lookups() {
    let mut service = get_service();

    let jane = service.contact_by_phone_number("555-123-4567").unwrap().unwrap();
    assert_eq!(jane.last_name(), "Doe");
    assert_eq!(service.contact_by_phone_number("555 123 4567").unwrap(), None);

    let by_id = service.contact_by_id(jane.id().unwrap()).unwrap();
    assert_eq!(by_id, Some(jane));

    let john = service.contact_by_first_name("John").unwrap().unwrap();
    assert_eq!(john.phone_number(), "636 856 789");

    let smiths = service.contacts_by_last_name("Smith").unwrap();
    assert_eq!(smiths.len(), 1);
}

#[test]
fn test_search_or_and() {
    let mut service = get_service();

    let found = service.search_by_name("Doe").unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].first_name(), "Jane");

    let found = service.search_by_first_and_last_name("Jane", "Doe").unwrap();
    assert_eq!(found.len(), 1);

    let found = service.search_by_first_and_last_name("Doe", "Jane").unwrap();
    assert!(found.is_empty());
}

#[test]
fn test_save_duplicate_phone() {
    let mut service = get_service();
    let result = service.save_contact(&new_contact("636 856 789", "Jim", "Beam"));
    assert!(matches!(result, Err(Error::Constraint(_))));
    assert_eq!(service.contacts_count().unwrap(), 2);
}
