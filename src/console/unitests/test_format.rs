use crate::core::contact::ContactBuilder;
use crate::console::format::{contact_row, contact_details, detail_row};

#[test]
fn test_contact_row() {
    let contact = ContactBuilder::new("555-123-4567")
        .with_name("Jane", "Doe")
        .with_email("jane@example.com")
        .build();

    let row = contact_row(&contact);
    assert_eq!(row, format!(
        "{:<20} {:<20} {:<20} {:<20} ",
        "555-123-4567", "Jane", "Doe", "jane@example.com"
    ));
    assert_eq!(&row[0..12], "555-123-4567");
    assert_eq!(&row[21..25], "Jane");
    assert_eq!(&row[42..45], "Doe");
    assert_eq!(&row[63..79], "jane@example.com");
}

#[test]
fn test_contact_row_truncates_long_names() {
    let contact = ContactBuilder::new("555-123-4567")
        .with_name("Maximiliana-Josephine", "Featherstonehaugh-Smythe")
        .with_email("a.very.long.email.address@example.com")
        .build();

    let row = contact_row(&contact);
    let short = ContactBuilder::new("555-123-4567")
        .with_name("Jane", "Doe")
        .with_email("x")
        .build();
    let short_row = contact_row(&short);

    // the email column starts at the same offset regardless of name length
    assert_eq!(&row[21..41], "Maximiliana-Josephin");
    assert_eq!(&row[42..62], "Featherstonehaugh-Sm");
    assert_eq!(row.find("a.very"), Some(63));
    assert_eq!(short_row.find('x'), Some(63));
    // the last column is never cut
    assert!(row.contains("a.very.long.email.address@example.com"));
}

#[test]
fn test_contact_row_without_email() {
    let contact = ContactBuilder::new("636 856 789")
        .with_name("John", "Smith")
        .build();
    let row = contact_row(&contact);
    assert_eq!(row.len(), 21 * 4);
    assert!(row.trim_end().ends_with("Smith"));
}

#[test]
fn test_contact_details() {
    let contact = ContactBuilder::new("555-123-4567")
        .with_name("Jane", "Doe")
        .with_address("1 Main St")
        .build();

    let rows = contact_details(&contact);
    assert_eq!(rows.len(), 5);
    assert_eq!(rows[0], detail_row("Phone number:", "555-123-4567"));
    assert_eq!(rows[0], format!("{:<20} {:<20} ", "Phone number:", "555-123-4567"));
    assert_eq!(rows[1].trim_end(), format!("{:<20} {}", "First Name:", "Jane"));
    assert_eq!(rows[2].trim_end(), format!("{:<20} {}", "Last Name:", "Doe"));
    assert_eq!(rows[3].trim_end(), "E-mail:");
    assert_eq!(rows[4].trim_end(), format!("{:<20} {}", "Address:", "1 Main St"));
}
