#[macro_use]
extern crate lazy_static;

pub mod error;
pub mod script;
pub mod template;

#[cfg(test)]
mod test_utils;
