pub mod format;

pub use format::{format_mist, hex_with_prefix, shorten};
