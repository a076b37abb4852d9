pub mod constants;
pub mod path_utils;

pub use constants::*;
pub use path_utils::{executable_dir, sanitize_component, section_file_name};
