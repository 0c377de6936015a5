//! Shared helpers for formatting and file I/O

pub mod format;
pub mod io;
