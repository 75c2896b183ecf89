//! Configuration loader and schema types.
//!
//! Settings describe which directories to scan and where the playlist goes.
//! Command-line flags are layered on top by the runtime.

mod load;
mod schema;

pub use schema::*;
