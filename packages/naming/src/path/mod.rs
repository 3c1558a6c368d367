// Path and request helpers
//
// Lexical path algebra over POSIX-form strings, plus the request-string
// helpers (loader prefixes, package folders) the naming plugins share.

pub mod request;
pub mod util;

pub use request::{extract_package_name, has_async_marker, is_in_package_folder, remove_loaders};
pub use util::{clean_path, dirname, is_rooted, is_upward, normalize_separators, relative, resolve};

#[cfg(test)]
mod test;
