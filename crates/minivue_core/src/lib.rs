#[macro_use]
extern crate lazy_static;

pub mod atoms;
mod error;
mod magic_string;
mod options;
mod platform;
mod script;
mod structs;
mod template;
mod utils;

pub use error::*;
pub use magic_string::MagicString;
pub use options::*;
pub use platform::MiniPlatform;
pub use script::*;
pub use structs::*;
pub use template::*;
pub use utils::*;

/// Interned string type used across the whole compiler,
/// both for our own template AST and for the SWC script AST.
pub type MiniAtom = swc_core::ecma::atoms::Atom;

#[macro_export]
macro_rules! mini_atom {
    ($s: expr) => {
        $crate::MiniAtom::from($s)
    };
}
