//! # Editor State
//!
//! Everything that lives for the length of one editing session.
//!
//! - [`document::Document`] couples the [`editor_core::text::TextBuffer`] with
//!   the current line, the modified flag and the associated filename.
//! - [`editor::Editor`] runs command lines: it resolves addresses, picks a
//!   handler from the [`commands::CommandTable`] and turns failures into `?`.
//! - [`console::Console`] is the line-based terminal handlers read from and
//!   print to.

pub mod commands;
pub mod console;
pub mod document;
pub mod editor;
pub mod handlers;
