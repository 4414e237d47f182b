use crate::core::phone::is_valid_phone_number;

#[test]
fn test_area_code_formats() {
    assert_eq!(is_valid_phone_number("+1 555-123-4567"), true);
    assert_eq!(is_valid_phone_number("555 123 4567"), true);
    assert_eq!(is_valid_phone_number("5551234567"), true);
    assert_eq!(is_valid_phone_number("(555) 123-4567"), true);
    assert_eq!(is_valid_phone_number("555.123.4567"), true);
    assert_eq!(is_valid_phone_number("+111 (202) 555-0125"), true);
    assert_eq!(is_valid_phone_number("\t555-123-4567\n"), true);
}

#[test]
fn test_three_group_formats() {
    assert_eq!(is_valid_phone_number("636 856 789"), true);
    assert_eq!(is_valid_phone_number("+111 636 856 789"), true);
    assert_eq!(is_valid_phone_number("636856789"), true);
}

#[test]
fn test_three_two_two_two_formats() {
    assert_eq!(is_valid_phone_number("636 85 67 89"), true);
    assert_eq!(is_valid_phone_number("+111 636 85 67 89"), true);
    assert_eq!(is_valid_phone_number("+44 636856789"), true);
}

#[test]
fn test_rejected() {
    assert_eq!(is_valid_phone_number(""), false);
    assert_eq!(is_valid_phone_number("   "), false);
    assert_eq!(is_valid_phone_number("12345"), false);
    // seven digits fit none of the shapes
    assert_eq!(is_valid_phone_number("123 45 67"), false);
    assert_eq!(is_valid_phone_number("555-123-45678"), false);
    assert_eq!(is_valid_phone_number("+1234 555 123 4567"), false);
    assert_eq!(is_valid_phone_number("(555 123-4567"), false);
    assert_eq!(is_valid_phone_number("555--123-4567"), false);
    assert_eq!(is_valid_phone_number("555-abc-4567"), false);
}

#[test]
fn test_non_ascii_digits_rejected() {
    assert_eq!(is_valid_phone_number("٥٥٥١٢٣٤٥٦٧"), false);
}
