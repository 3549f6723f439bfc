mod document;
mod keys;

pub use document::{child_element, first_element, keyed_children, text_or_nil};
pub use keys::normalize_key;
