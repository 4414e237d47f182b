use crate::core::contact::Contact;

pub const PHONE_WIDTH: usize = 20;
pub const NAME_WIDTH: usize = 20;
pub const EMAIL_WIDTH: usize = 20;
pub const LABEL_WIDTH: usize = 20;

/// One line of the contact list: phone, first name, last name, email.
///
/// Phone and names are padded and cut at their column width; the email is
/// the last column and is never cut.
pub fn contact_row(contact: &Contact) -> String {
    format!(
        "{:<pw$.pw$} {:<nw$.nw$} {:<nw$.nw$} {:<ew$} ",
        contact.phone_number(),
        contact.first_name(),
        contact.last_name(),
        contact.email().unwrap_or(""),
        pw = PHONE_WIDTH,
        nw = NAME_WIDTH,
        ew = EMAIL_WIDTH,
    )
}

pub fn detail_row(label: &str, value: &str) -> String {
    format!("{:<lw$.lw$} {:<20} ", label, value, lw = LABEL_WIDTH)
}

/// Labeled rows for every field of a contact.
pub fn contact_details(contact: &Contact) -> Vec<String> {
    vec![
        detail_row("Phone number:", contact.phone_number()),
        detail_row("First Name:", contact.first_name()),
        detail_row("Last Name:", contact.last_name()),
        detail_row("E-mail:", contact.email().unwrap_or("")),
        detail_row("Address:", contact.address().unwrap_or("")),
    ]
}
