#[cfg(test)] mod test_input;
#[cfg(test)] mod test_format;
