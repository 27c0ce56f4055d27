//! Static template content.
//!
//! Each submodule holds the entries of one registry. Bodies are plain text
//! and are never parsed.

pub mod cells;
pub mod molecules;
pub mod organs;
pub mod programs;
pub mod protocols;
