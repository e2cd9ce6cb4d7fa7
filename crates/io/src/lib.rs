//! I/O collaborators of the editor: reading files, saving them, and pulling
//! interactive input one line at a time.

pub mod input;
pub mod mmap;
pub mod save;
