use std::fmt;

/// One phone book entry.
///
/// The identifier is assigned by the store on the first save and never
/// changes afterwards; every other field is overwritten on edit.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Contact {
    id          : Option<i64>,
    first_name  : String,
    last_name   : String,
    email       : Option<String>,
    address     : Option<String>,
    phone_number: String,
}

impl Contact {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(&self) -> Option<i64> {
        self.id
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    pub fn address(&self) -> Option<&str> {
        self.address.as_deref()
    }

    pub fn phone_number(&self) -> &str {
        &self.phone_number
    }

    pub fn is_new(&self) -> bool {
        self.id.is_none()
    }

    pub fn set_first_name(&mut self, name: &str) {
        self.first_name = name.to_string();
    }

    pub fn set_last_name(&mut self, name: &str) {
        self.last_name = name.to_string();
    }

    /// Empty text clears the email.
    pub fn set_email(&mut self, email: &str) {
        self.email = non_empty(email);
    }

    /// Empty text clears the address.
    pub fn set_address(&mut self, address: &str) {
        self.address = non_empty(address);
    }

    pub fn set_phone_number(&mut self, phone: &str) {
        self.phone_number = phone.to_string();
    }

    pub(crate) fn assign_id(&mut self, id: i64) {
        self.id = Some(id);
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} <{}>", self.first_name, self.last_name, self.phone_number)?;
        if let Some(id) = self.id {
            write!(f, " #{}", id)?;
        }
        Ok(())
    }
}

pub struct ContactBuilder {
    id          : Option<i64>,
    first_name  : String,
    last_name   : String,
    email       : Option<String>,
    address     : Option<String>,
    phone_number: String,
}

impl ContactBuilder {
    pub fn new(phone_number: &str) -> Self {
        Self {
            id          : None,
            first_name  : String::new(),
            last_name   : String::new(),
            email       : None,
            address     : None,
            phone_number: phone_number.to_string(),
        }
    }

    pub fn with_id(&mut self, id: i64) -> &mut Self {
        self.id = Some(id);
        self
    }

    pub fn with_name(&mut self, first: &str, last: &str) -> &mut Self {
        self.first_name = first.to_string();
        self.last_name = last.to_string();
        self
    }

    pub fn with_email(&mut self, email: &str) -> &mut Self {
        self.email = non_empty(email);
        self
    }

    pub fn with_address(&mut self, address: &str) -> &mut Self {
        self.address = non_empty(address);
        self
    }

    pub fn build(&self) -> Contact {
        Contact {
            id          : self.id,
            first_name  : self.first_name.clone(),
            last_name   : self.last_name.clone(),
            email       : self.email.clone(),
            address     : self.address.clone(),
            phone_number: self.phone_number.clone(),
        }
    }
}

fn non_empty(input: &str) -> Option<String> {
    match input.is_empty() {
        true => None,
        false => Some(input.to_string()),
    }
}
