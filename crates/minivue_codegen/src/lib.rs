mod script;
mod stringify;

pub use script::{generate_post_options, generate_post_setup, generate_pre};
pub use stringify::stringify_template;
