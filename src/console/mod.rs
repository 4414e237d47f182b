pub mod input;
pub mod format;
pub mod controller;

#[cfg(test)]
mod unitests;
