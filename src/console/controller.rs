use std::io::Write;
use log::{debug, error, info, warn};

use crate::core::{
    contact::Contact,
    contact_service::ContactService,
    phone::is_valid_phone_number,
    Error,
    Result,
};

use crate::console::{
    format,
    input::LineSource,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Exit,
    AddOrEdit,
    ViewAll,
    FindByPhone,
    FindByName,
    Unknown(i32),
}

impl From<i32> for MenuChoice {
    fn from(v: i32) -> Self {
        match v {
            0 => MenuChoice::Exit,
            1 => MenuChoice::AddOrEdit,
            2 => MenuChoice::ViewAll,
            3 => MenuChoice::FindByPhone,
            4 => MenuChoice::FindByName,
            v => MenuChoice::Unknown(v),
        }
    }
}

/// Interactive menu loop of the phone book.
///
/// Reads from any [`LineSource`] and writes to any `Write` sink, so a whole
/// session can be replayed from a fixed list of lines.
pub struct Controller<'a, R: LineSource, W: Write> {
    service : &'a mut ContactService,
    input   : R,
    out     : W,
}

impl<'a, R: LineSource, W: Write> Controller<'a, R, W> {
    pub fn new(service: &'a mut ContactService, input: R, out: W) -> Self {
        Self {
            service,
            input,
            out,
        }
    }

    pub fn into_output(self) -> W {
        self.out
    }

    /// Runs until the user picks `0` or the input is exhausted.
    pub fn run(&mut self) -> Result<()> {
        info!("Phone book session started");
        loop {
            match self.step() {
                Ok(true) => continue,
                Ok(false) => break,
                Err(Error::Eof) => {
                    info!("Input closed, leaving the phone book");
                    break;
                },
                Err(e) => {
                    error!("Phone book session aborted: {}", e);
                    return Err(e);
                }
            }
        }
        info!("Phone book session ended");
        Ok(())
    }

    fn step(&mut self) -> Result<bool> {
        self.print_menu()?;

        let choice = MenuChoice::from(self.read_choice()?);
        debug!("Menu choice: {:?}", choice);

        let rc = match choice {
            MenuChoice::Exit => return Ok(false),
            MenuChoice::AddOrEdit   => self.add_or_edit_contact(),
            MenuChoice::ViewAll     => self.view_all_contacts(),
            MenuChoice::FindByPhone => self.find_contact_by_phone_number(),
            MenuChoice::FindByName  => self.find_contact_by_name(),
            MenuChoice::Unknown(_)  => self.say("Invalid choice"),
        };

        match rc {
            Ok(_) => {},
            Err(e @ Error::Eof) | Err(e @ Error::Io(_)) => return Err(e),
            Err(e) => {
                error!("{:?} failed: {}", choice, e);
                self.say(&format!("Operation failed: {}", e))?;
            }
        }

        self.say("Press \"ENTER\" to continue...")?;
        self.next_line()?;
        Ok(true)
    }

    fn print_menu(&mut self) -> Result<()> {
        self.say("Phone Book")?;
        match self.service.contacts_count() {
            Ok(count) => self.say(&format!("There are currently {} contacts in the phone book.", count))?,
            Err(e @ Error::Io(_)) => return Err(e),
            Err(e) => {
                warn!("Counting contacts error: {}", e);
                self.say(&format!("Operation failed: {}", e))?;
            }
        }
        self.say("1. Add or edit a contact.")?;
        self.say("2. View all contacts.")?;
        self.say("3. Find a contact by phone number.")?;
        self.say("4. Find a contact by name.")?;
        self.say("0. Exit")?;
        self.say("Select an option: ")
    }

    fn read_choice(&mut self) -> Result<i32> {
        loop {
            let line = self.next_line()?;
            match line.parse::<i32>() {
                Ok(v) => return Ok(v),
                Err(_) => self.say("Invalid input type (must be an integer)")?,
            }
        }
    }

    fn add_or_edit_contact(&mut self) -> Result<()> {
        self.say("Add or edit a contact.")?;
        self.say("Enter a phone number: ")?;

        let phone = self.read_phone_number(false)?;
        let mut contact = match self.service.contact_by_phone_number(&phone)? {
            Some(existing) => {
                self.say("This phone number already exists. Editing an existing entry.")?;
                existing
            },
            None => {
                self.say("This phone number is new. Adding a new entry to the phone book.")?;
                Contact::new()
            }
        };

        self.say("First Name: ")?;
        let first = self.read_name()?;
        self.say("Last Name: ")?;
        let last = self.read_name()?;
        self.say("Email (optional): ")?;
        let email = self.next_line()?;
        self.say("Address (optional): ")?;
        let address = self.next_line()?;

        contact.set_first_name(&first);
        contact.set_last_name(&last);
        contact.set_email(&email);
        contact.set_address(&address);
        contact.set_phone_number(&phone);

        let saved = self.service.save_contact(&contact)?;
        info!("Saved contact {}", saved);
        self.say("Phone book was updated successfully.")
    }

    fn view_all_contacts(&mut self) -> Result<()> {
        self.say("Contact list.")?;
        self.say("")?;

        let contacts = self.service.all_contacts()?;
        self.print_rows(&contacts)
    }

    fn find_contact_by_phone_number(&mut self) -> Result<()> {
        self.say("Find a contact by phone number:")?;

        let phone = self.read_phone_number(true)?;
        match self.service.contact_by_phone_number(&phone)? {
            Some(contact) => {
                for row in format::contact_details(&contact) {
                    self.say(&row)?;
                }
                Ok(())
            },
            None => self.say("The phone number could not be found in the address book."),
        }
    }

    fn find_contact_by_name(&mut self) -> Result<()> {
        self.say("Search by name")?;
        self.say("Enter a name (first name, last name or both):")?;

        let query = self.next_line()?;
        let contacts = search_by_name_query(self.service, &query)?;
        match contacts.is_empty() {
            true => self.say("The name could not be found in the address book."),
            false => self.print_rows(&contacts),
        }
    }

    fn read_phone_number(&mut self, echo_invalid: bool) -> Result<String> {
        let mut phone = self.next_line()?;
        while !is_valid_phone_number(&phone) {
            if echo_invalid {
                self.say(&format!("The inserted text is: {}", phone))?;
            }
            self.say("The Phone Number is invalid")?;
            self.say("Enter a phone number: ")?;
            phone = self.next_line()?;
        }

        self.say(&format!("{} = Valid Phone Number", phone))?;
        Ok(phone)
    }

    fn read_name(&mut self) -> Result<String> {
        let mut name = self.next_line()?;
        while name.is_empty() {
            self.say("The entered name is invalid")?;
            self.say("Enter a name: ")?;
            name = self.next_line()?;
        }
        Ok(name)
    }

    fn print_rows(&mut self, contacts: &[Contact]) -> Result<()> {
        for contact in contacts {
            self.say(&format::contact_row(contact))?;
        }
        Ok(())
    }

    fn next_line(&mut self) -> Result<String> {
        self.input.read_line()?.ok_or(Error::Eof)
    }

    fn say(&mut self, text: &str) -> Result<()> {
        writeln!(self.out, "{}", text)?;
        self.out.flush()?;
        Ok(())
    }
}

/// Name search as typed at the console.
///
/// One word is matched against first or last name. Two words must match
/// first and last name, in either order. Anything else finds nothing.
pub fn search_by_name_query(service: &mut ContactService, query: &str) -> Result<Vec<Contact>> {
    let names: Vec<&str> = query.split_whitespace().collect();
    match names.as_slice() {
        [name] => service.search_by_name(name),
        [first, last] => {
            let found = service.search_by_first_and_last_name(first, last)?;
            match found.is_empty() {
                true => service.search_by_first_and_last_name(last, first),
                false => Ok(found),
            }
        },
        _ => Ok(Vec::new()),
    }
}
