//! # Editor Core
//!
//! The pieces of a line editor that do not depend on a session:
//!
//! - [`text::TextBuffer`]: the document, one `String` per line, 1-based.
//! - [`address`]: resolves the address prefix of a command line into a range.
//! - [`search`]: cyclic pattern search used by `/re/` and `?re?` addresses.
//! - [`substitute`]: parsing and applying `s` commands.
//! - [`errors::EditorError`]: everything a command can fail with.

pub mod address;
pub mod cursor;
pub mod enums;
pub mod errors;
pub mod escape;
pub mod search;
pub mod substitute;
pub mod text;
