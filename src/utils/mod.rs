//! Generic utility primitives with zero domain knowledge.
//!
//! - `io` - Source file read/overwrite with consistent error handling

pub mod io;
