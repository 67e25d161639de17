//! Voltage library exports for testing

pub mod core;
pub mod store;
pub mod tui;

#[cfg(test)]
pub mod test_support;
