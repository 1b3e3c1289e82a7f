pub mod front_matter;
pub mod key_path;
pub mod literal;
pub mod value;

pub use front_matter::FrontMatter;
pub use key_path::KeyPath;
pub use literal::{parse_literal, Assignment};
pub use value::{Mapping, Value};
