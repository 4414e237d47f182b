use std::io::Cursor;

use crate::console::input::{LineSource, ScriptedInput, ReaderInput};

#[test]
fn test_scripted_input() {
    let mut input = ScriptedInput::new(["1", "", "555 123 4567"]);
    assert_eq!(input.remaining(), 3);
    assert_eq!(input.read_line().unwrap(), Some("1".to_string()));
    assert_eq!(input.read_line().unwrap(), Some("".to_string()));
    assert_eq!(input.read_line().unwrap(), Some("555 123 4567".to_string()));
    assert_eq!(input.read_line().unwrap(), None);
    assert_eq!(input.remaining(), 0);
}

#[test]
fn test_reader_input_strips_terminators() {
    let mut input = ReaderInput::new(Cursor::new("2\r\n\nJane Doe\nlast"));
    assert_eq!(input.read_line().unwrap(), Some("2".to_string()));
    assert_eq!(input.read_line().unwrap(), Some("".to_string()));
    assert_eq!(input.read_line().unwrap(), Some("Jane Doe".to_string()));
    assert_eq!(input.read_line().unwrap(), Some("last".to_string()));
    assert_eq!(input.read_line().unwrap(), None);
}
