use once_cell::sync::Lazy;
use regex::Regex;

// Three accepted shapes, each with an optional "+CCC" prefix:
//  - (555) 123-4567 / 555.123.4567 / 5551234567
//  - 123 456 789
//  - 123 45 67 89
static PHONE_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(concat!(
    r"^(\+[0-9]{1,3}( )?)?((\([0-9]{3}\))|[0-9]{3})[- .]?[0-9]{3}[- .]?[0-9]{4}$",
    r"|^(\+[0-9]{1,3}( )?)?([0-9]{3}[ ]?){2}[0-9]{3}$",
    r"|^(\+[0-9]{1,3}( )?)?([0-9]{3}[ ]?)([0-9]{2}[ ]?){2}[0-9]{2}$",
)).unwrap());

/// Checks a phone number as typed by the user.
///
/// All whitespace is removed before matching, so `"555 123 4567"` and
/// `"5551234567"` are equally valid. The text as typed is what gets stored.
pub fn is_valid_phone_number(input: &str) -> bool {
    PHONE_PATTERN.is_match(&strip_whitespace(input))
}

fn strip_whitespace(input: &str) -> String {
    input.chars()
        .filter(|c| !matches!(c, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r'))
        .collect()
}
